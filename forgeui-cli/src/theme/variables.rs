//! Custom-property extraction, merging, and rendering

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;

/// One custom-property declaration: `--name: value;`. Matched anywhere on a
/// line so compact one-line blocks like `:root{--a: 1;}` still yield their
/// variables. The value is everything up to the final `;` on the line.
static DECLARATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(--[\w-]+)\s*:\s*(.+);").expect("declaration pattern"));

/// A `/* ... */` comment that opens and closes on the same line. Comments
/// spanning a declaration line's boundary are not handled.
static INLINE_COMMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"/\*.*?\*/").expect("comment pattern"));

/// Ordered mapping from custom-property names (`--foo`) to their raw value
/// text.
///
/// Keys are unique; re-inserting a key replaces the value but keeps the key's
/// first-seen position. Equality is order-sensitive: two maps with the same
/// entries in a different order are not equal.
#[derive(Debug, Clone, Default)]
pub struct VariableMap(IndexMap<String, String>);

impl VariableMap {
    /// Create an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self(IndexMap::new())
    }

    /// Insert a variable; the last write wins.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    /// Look up a variable's value.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// Whether the map defines `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Number of variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the map is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate entries in map order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl PartialEq for VariableMap {
    fn eq(&self, other: &Self) -> bool {
        self.0.len() == other.0.len() && self.0.iter().zip(other.0.iter()).all(|(a, b)| a == b)
    }
}

impl Eq for VariableMap {}

/// Extract custom-property declarations from a block of CSS text.
///
/// Line-based: each line is stripped of same-line `/* ... */` comments,
/// trimmed, and matched against the `--name: value;` shape. Lines that do not
/// match (selectors, braces, blanks, non-custom-property declarations,
/// declarations spanning multiple lines) are ignored. A name declared twice
/// keeps its first position with the later value.
#[must_use]
pub fn extract_variables(block: &str) -> VariableMap {
    let mut map = VariableMap::new();
    for line in block.lines() {
        let stripped = INLINE_COMMENT.replace_all(line, "");
        let trimmed = stripped.trim();
        if let Some(caps) = DECLARATION.captures(trimmed) {
            map.insert(&caps[1], caps[2].trim());
        }
    }
    map
}

/// Merge a template map with a user map; user values win.
///
/// The result holds every template key in template order (with the user's
/// value where the user redefined it), then every user-only key in the user's
/// order. Template defaults stay in a predictable position and user additions
/// are appended, which keeps re-run diffs stable.
#[must_use]
pub fn merge(template: &VariableMap, user: &VariableMap) -> VariableMap {
    let mut merged = VariableMap::new();
    for (name, value) in template.iter() {
        merged.insert(name, user.get(name).unwrap_or(value));
    }
    for (name, value) in user.iter() {
        if !merged.contains(name) {
            merged.insert(name, value);
        }
    }
    merged
}

/// Render a map back into a brace-delimited declaration block.
///
/// Exact inverse of [`extract_variables`]: two-space indent, one declaration
/// per line, map order preserved.
#[must_use]
pub fn compose(selector: &str, map: &VariableMap) -> String {
    let mut out = String::with_capacity(selector.len() + 32 * map.len() + 8);
    out.push_str(selector);
    out.push_str(" {\n");
    for (name, value) in map.iter() {
        out.push_str("  ");
        out.push_str(name);
        out.push_str(": ");
        out.push_str(value);
        out.push_str(";\n");
    }
    out.push('}');
    out
}
