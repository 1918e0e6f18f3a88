//! Import-line collection

const IMPORT_KEYWORD: &str = "@import";

/// Import lines gathered from a stylesheet plus the text that remains once
/// they are removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectedImports {
    /// Deduplicated import lines: the user's imports in encounter order,
    /// followed by any required imports the file was missing.
    pub lines: Vec<String>,
    /// The stylesheet with all import lines removed.
    pub remainder: String,
}

/// Collect `@import` lines from `text` and guarantee the `required` ones.
///
/// Any line whose trimmed form starts with `@import` is captured and removed
/// from the working text. Identity is the exact trimmed line text: duplicates
/// are dropped, and required imports are only appended when no captured line
/// already equals them.
#[must_use]
pub fn collect_imports(text: &str, required: &[&str]) -> CollectedImports {
    let mut lines: Vec<String> = Vec::new();
    let mut remainder_lines: Vec<&str> = Vec::new();

    for line in text.lines() {
        let trimmed = line.trim();
        if trimmed.starts_with(IMPORT_KEYWORD) {
            if !lines.iter().any(|existing| existing == trimmed) {
                lines.push(trimmed.to_string());
            }
        } else {
            remainder_lines.push(line);
        }
    }

    for requirement in required {
        if !lines.iter().any(|line| line == requirement) {
            lines.push((*requirement).to_string());
        }
    }

    CollectedImports {
        lines,
        remainder: remainder_lines.join("\n"),
    }
}
