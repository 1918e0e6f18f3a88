//! Registry diff command

use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use console::{style, Emoji};
use similar::{ChangeTag, TextDiff};

use crate::registry::RegistryClient;

static SUCCESS: Emoji = Emoji("✓", "√");
static WARNING: Emoji = Emoji("⚠", "!");

/// Show differences between local component files and the registry
pub struct DiffCommand {
    component: String,
    cwd: PathBuf,
}

impl DiffCommand {
    /// Create a new command instance
    #[must_use]
    pub fn new(component: String, cwd: PathBuf) -> Self {
        Self { component, cwd }
    }

    /// Execute the command
    ///
    /// # Errors
    ///
    /// Returns an error if the registry fetch fails.
    pub fn execute(&self) -> Result<()> {
        let client = RegistryClient::default();
        let item = client.fetch_item(&self.component)?;

        let mut clean = true;
        for file in &item.files {
            let local_path = self.cwd.join(&file.target);
            let Ok(local) = fs::read_to_string(&local_path) else {
                println!("{WARNING} {} is not installed locally.", style(&file.target).bold());
                clean = false;
                continue;
            };

            if local == file.content {
                continue;
            }
            clean = false;

            println!("{}", style(&file.target).bold().underlined());
            let diff = TextDiff::from_lines(local.as_str(), file.content.as_str());
            for change in diff.iter_all_changes() {
                match change.tag() {
                    ChangeTag::Delete => print!("{}", style(format!("-{change}")).red()),
                    ChangeTag::Insert => print!("{}", style(format!("+{change}")).green()),
                    ChangeTag::Equal => print!(" {change}"),
                }
            }
            println!();
        }

        if clean {
            println!(
                "{SUCCESS} {} matches the registry.",
                style(&self.component).cyan()
            );
        }

        Ok(())
    }
}
