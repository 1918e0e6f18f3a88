//! End-to-end tests for the theme-merge engine

use std::fs;

use tempfile::TempDir;

use forgeui_cli_lib::theme::block::extract_block;
use forgeui_cli_lib::theme::variables::extract_variables;
use forgeui_cli_lib::{merge_stylesheet, merge_theme_file, MergeOutcome};

/// Merging a file, then merging the output again, yields byte-identical text.
#[test]
fn merge_is_idempotent_on_disk() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("globals.css");
    fs::write(
        &path,
        "@import \"tailwindcss\";\n\n:root {\n  --primary: red;\n}\n\n.sidebar { width: 10rem; }\n",
    )
    .unwrap();

    assert_eq!(merge_theme_file(&path).unwrap(), MergeOutcome::Updated);
    let first = fs::read_to_string(&path).unwrap();

    assert_eq!(merge_theme_file(&path).unwrap(), MergeOutcome::Updated);
    let second = fs::read_to_string(&path).unwrap();

    assert_eq!(first, second);
}

/// A non-existent path is reported, not raised, and nothing is written.
#[test]
fn missing_file_is_a_reported_no_op() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("does-not-exist.css");

    assert_eq!(merge_theme_file(&path).unwrap(), MergeOutcome::MissingTarget);
    assert!(!path.exists());
}

/// User-defined values win over template defaults.
#[test]
fn user_value_takes_precedence() {
    let merged = merge_stylesheet(":root {\n  --primary: red;\n}\n");
    let root = extract_variables(extract_block(&merged, ":root").unwrap());
    assert_eq!(root.get("--primary"), Some("red"));
}

/// The merged map is a union of template and user keys.
#[test]
fn merged_map_is_a_union() {
    let merged = merge_stylesheet(":root {\n  --custom: 1px;\n}\n");
    let root = extract_variables(extract_block(&merged, ":root").unwrap());
    assert_eq!(root.get("--custom"), Some("1px"));
    assert_eq!(root.get("--primary"), Some("oklch(0.205 0 0)"));
}

/// Duplicate user imports collapse to one line and required imports are
/// appended once, with the user's line first.
#[test]
fn imports_are_deduplicated_and_completed() {
    let css = "@import \"tailwindcss\";\n@import \"tailwindcss\";\n\nbody {}\n";
    let merged = merge_stylesheet(css);

    assert_eq!(merged.matches("@import \"tailwindcss\";").count(), 1);
    assert_eq!(merged.matches("@import \"tw-animate-css\";").count(), 1);
    assert!(
        merged.find("@import \"tailwindcss\";").unwrap()
            < merged.find("@import \"tw-animate-css\";").unwrap()
    );
}

/// The worked scenario: compact user blocks merged against template-defined
/// root and dark variables keep template order with user overrides applied.
#[test]
fn compact_user_blocks_merge_against_template() {
    let merged = merge_stylesheet(":root{--primary: red;}\n.dark{--accent: lime;}");

    let root = extract_variables(extract_block(&merged, ":root").unwrap());
    assert_eq!(root.get("--primary"), Some("red"));
    assert_eq!(root.get("--background"), Some("oklch(1 0 0)"));

    let dark = extract_variables(extract_block(&merged, ".dark").unwrap());
    assert_eq!(dark.get("--accent"), Some("lime"));
    assert_eq!(dark.get("--background"), Some("oklch(0.145 0 0)"));

    // Template keys come first, in template order.
    let root_order: Vec<_> = root.iter().map(|(k, _)| k.to_string()).collect();
    assert_eq!(root_order[0], "--radius");
    assert_eq!(root_order[1], "--background");
}

/// Unrecognized rules survive the merge, after the managed sections.
#[test]
fn leftover_content_is_preserved() {
    let css = "/* hand-written */\n.prose {\n  max-width: 65ch;\n}\n:root {\n  --primary: red;\n}\n";
    let merged = merge_stylesheet(css);

    assert!(merged.contains(".prose {\n  max-width: 65ch;\n}"));
    assert!(merged.find(".prose").unwrap() > merged.find("@layer base").unwrap());
    assert!(merged.ends_with('\n'));
    assert!(!merged.ends_with("\n\n"));
}

/// Engine-owned sections are regenerated from the template every run.
#[test]
fn stale_engine_owned_sections_are_not_duplicated() {
    let css = "@theme inline {\n  --color-background: old;\n}\n\n@layer base {\n  body { margin: 0; }\n}\n";
    let merged = merge_stylesheet(css);

    assert_eq!(merged.matches("@theme inline").count(), 1);
    assert_eq!(merged.matches("@layer base").count(), 1);
    assert!(!merged.contains("--color-background: old"));
    assert!(!merged.contains("margin: 0"));
}

/// Malformed user CSS degrades instead of panicking.
#[test]
fn unbalanced_braces_do_not_crash_the_merge() {
    let css = ":root {\n  --primary: red;\n  .oops {\n";
    let merged = merge_stylesheet(css);

    let root = extract_variables(extract_block(&merged, ":root").unwrap());
    assert_eq!(root.get("--primary"), Some("red"));
}
