//! CLI commands

mod add;
mod diff;
mod init;

pub use add::AddCommand;
pub use diff::DiffCommand;
pub use init::InitCommand;
