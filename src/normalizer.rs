use once_cell::sync::Lazy;
use regex::Regex;

// Any whitespace run that contains no newline.
static INLINE_WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\S\n]+").unwrap());

/// Collapses every run of non-newline whitespace into a single space, then
/// trims all whitespace (newlines included) from both ends of the text.
///
/// Newlines in the interior are kept as they are. Applying `normalize` to its
/// own output returns the same text.
pub fn normalize(text: &str) -> String {
    let collapsed = INLINE_WHITESPACE.replace_all(text, " ");
    collapsed.trim().to_string()
}
