//! Stylesheet assembly

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use super::block::extract_block;
use super::imports::collect_imports;
use super::template::{MergeStrategy, Section, REQUIRED_IMPORTS};
use super::variables::{compose, extract_variables, merge};

/// Result of merging the theme into a project stylesheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeOutcome {
    /// The stylesheet was rewritten with all managed sections in place.
    Updated,
    /// The target stylesheet does not exist; nothing was written. Expected for
    /// brand-new projects, so it is reported rather than raised.
    MissingTarget,
}

/// Merge the built-in theme into the stylesheet at `path`, in place.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or written. A
/// missing file is not an error; it yields [`MergeOutcome::MissingTarget`].
pub fn merge_theme_file(path: &Path) -> Result<MergeOutcome> {
    if !path.exists() {
        return Ok(MergeOutcome::MissingTarget);
    }

    let css = fs::read_to_string(path)
        .with_context(|| format!("Failed to read stylesheet: {}", path.display()))?;

    let merged = merge_stylesheet(&css);

    fs::write(path, merged)
        .with_context(|| format!("Failed to write stylesheet: {}", path.display()))?;

    Ok(MergeOutcome::Updated)
}

/// Merge the built-in theme into `user_css` and return the new stylesheet.
///
/// The user's variable customizations survive; the template's required
/// structure (imports, variable blocks, engine-owned blocks) is guaranteed.
/// Applying the merge to its own output yields byte-identical text.
#[must_use]
pub fn merge_stylesheet(user_css: &str) -> String {
    let collected = collect_imports(user_css, &REQUIRED_IMPORTS);
    let mut working = collected.remainder;

    // Render every managed section before the stale blocks are stripped; the
    // variable sections read the user's current values out of `working`.
    let theme_inline = render_section(Section::ThemeInline, &working);
    let root_vars = render_section(Section::RootVars, &working);
    let dark_vars = render_section(Section::DarkVars, &working);
    let base_layer = render_section(Section::BaseLayer, &working);

    for section in Section::ALL {
        if let Some(stale) = extract_block(&working, section.keyword()).map(str::to_owned) {
            working = working.replacen(&stale, "", 1);
        }
    }
    let leftover = working.trim();

    let groups = [
        collected.lines.join("\n"),
        theme_inline,
        root_vars,
        dark_vars,
        base_layer,
        leftover.to_string(),
    ];

    let body = groups
        .iter()
        .filter(|group| !group.is_empty())
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join("\n\n");

    format!("{}\n", body.trim())
}

fn render_section(section: Section, working: &str) -> String {
    match section.strategy() {
        MergeStrategy::MergeVariables => {
            let user_block = extract_block(working, section.keyword()).unwrap_or_default();
            let user_vars = extract_variables(user_block);
            let merged = merge(&section.template_variables(), &user_vars);
            compose(section.keyword(), &merged)
        }
        MergeStrategy::ReplaceFromTemplate => section.template_block().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_override_survives_the_merge() {
        let merged = merge_stylesheet(":root {\n  --primary: red;\n}\n");
        let root = extract_block(&merged, ":root").unwrap();
        assert_eq!(extract_variables(root).get("--primary"), Some("red"));
    }

    #[test]
    fn user_only_variables_are_appended() {
        let merged = merge_stylesheet(":root {\n  --brand-glow: 1px;\n}\n");
        let root = extract_variables(extract_block(&merged, ":root").unwrap());
        assert_eq!(root.get("--brand-glow"), Some("1px"));
        assert_eq!(root.get("--background"), Some("oklch(1 0 0)"));
    }

    #[test]
    fn empty_input_gets_the_full_template_structure() {
        let merged = merge_stylesheet("");
        assert!(merged.starts_with("@import \"tailwindcss\";\n@import \"tw-animate-css\";\n"));
        for section in Section::ALL {
            assert!(
                extract_block(&merged, section.keyword()).is_some(),
                "merged output is missing {}",
                section.keyword()
            );
        }
        assert!(merged.ends_with('\n'));
        assert!(!merged.ends_with("\n\n"));
    }

    #[test]
    fn engine_owned_blocks_are_replaced_wholesale() {
        let css = "@theme inline {\n  --color-background: hotpink;\n}\n";
        let merged = merge_stylesheet(css);
        let inline = extract_block(&merged, "@theme inline").unwrap();
        assert!(!inline.contains("hotpink"));
        assert!(inline.contains("--color-background: var(--background);"));
    }

    #[test]
    fn leftover_content_is_preserved_after_managed_sections() {
        let css = ".custom-card {\n  padding: 2rem;\n}\n:root {\n  --primary: red;\n}\n";
        let merged = merge_stylesheet(css);
        assert!(merged.contains(".custom-card {\n  padding: 2rem;\n}"));
        let root_pos = merged.find(":root").unwrap();
        let custom_pos = merged.find(".custom-card").unwrap();
        assert!(custom_pos > root_pos, "leftover content must follow managed sections");
    }

    #[test]
    fn merge_is_idempotent() {
        let css = "@import \"tailwindcss\";\n:root {\n  --primary: red;\n  --brand: #fff;\n}\n.dark {\n  --primary: blue;\n}\n.sidebar { width: 10rem; }\n";
        let once = merge_stylesheet(css);
        let twice = merge_stylesheet(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn idempotent_from_empty_input() {
        let once = merge_stylesheet("");
        assert_eq!(once, merge_stylesheet(&once));
    }
}
