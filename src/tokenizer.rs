/// Splits `text` into tokens on runs of whitespace.
///
/// Tokens come back in the order they appear and are never empty, so an
/// empty or all-whitespace input yields an empty vector.
pub fn tokenize(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}
