//! Brace-delimited block extraction

/// Extract the smallest well-formed brace-delimited block starting at the
/// first occurrence of `keyword` in `text`.
///
/// The returned slice runs from the keyword through the matching close brace,
/// inclusive. Matching is a plain depth counter over characters: `{` counts
/// up, `}` counts down, and the block ends when the depth returns to zero.
/// Braces inside string literals or comments are counted like any other brace;
/// that is a documented limitation of this engine, not something it tries to
/// guess its way around.
///
/// Returns `None` when the keyword is absent or no `{` follows it. When the
/// input ends before the braces balance, the block runs through end-of-input:
/// imperfect user CSS degrades, it never aborts a merge.
pub fn extract_block<'a>(text: &'a str, keyword: &str) -> Option<&'a str> {
    let start = text.find(keyword)?;
    let after = &text[start..];
    let open = after.find('{')?;

    let mut depth = 1usize;
    let mut end = after.len();
    for (idx, ch) in after[open + 1..].char_indices() {
        match ch {
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    end = open + 1 + idx + 1;
                    break;
                }
            }
            _ => {}
        }
    }

    Some(&after[..end])
}
