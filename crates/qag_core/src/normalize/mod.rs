/// Canonicalize text for comparison only: collapse every whitespace run to a
/// single space, then lowercase. Total function; the original text is always
/// kept separately for span recovery and rendering.
pub fn normalize_for_match(text: &str) -> String {
    text.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}
