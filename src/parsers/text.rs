/// Default maximum excerpt length in characters
pub const DEFAULT_EXCERPT_LIMIT: usize = 150;

/// Appended to truncated excerpts
pub const ELLIPSIS: &str = "...";

/// Escapes `&`, `<`, `>` and `"` so text is safe in element content and
/// double-quoted attributes
pub fn escape_markup(text: &str) -> String {
    html_escape::encode_double_quoted_attribute(text).into_owned()
}

/// Trims the text and collapses every run of whitespace into one space
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Truncates text longer than `limit` characters
///
/// The result keeps the first `limit - 3` characters followed by `...`,
/// so it is exactly `limit` characters long. Lengths count chars, not bytes.
pub fn truncate_excerpt(text: &str, limit: usize) -> String {
    if text.chars().count() <= limit {
        return text.to_string();
    }

    let keep = limit.saturating_sub(ELLIPSIS.len());
    let mut excerpt = text.chars().take(keep).collect::<String>();
    excerpt.push_str(ELLIPSIS);
    excerpt
}
