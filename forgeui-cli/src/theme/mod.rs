//! Stylesheet theme-merge engine
//!
//! Takes an arbitrarily-authored project stylesheet and the built-in theme
//! template and produces a single merged stylesheet: the user's variable
//! customizations are preserved, the template's required structure is
//! guaranteed, and applying the merge to its own output yields byte-identical
//! text.
//!
//! This is deliberately not a CSS parser. Blocks are located with a keyword
//! search and a brace depth counter, and variables with a per-line pattern
//! match; braces inside strings or comments and declarations spanning multiple
//! lines are out of scope. The engine degrades on malformed input instead of
//! failing — it must never crash on arbitrary user CSS.

pub mod block;
pub mod imports;
pub mod merge;
pub mod template;
pub mod variables;

pub use merge::{merge_stylesheet, merge_theme_file, MergeOutcome};
pub use template::{MergeStrategy, Section, REQUIRED_IMPORTS, THEME_TEMPLATE};
pub use variables::VariableMap;
