use regex::Regex;
use std::sync::LazyLock;

static PNG_DATA_URI: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"data:image/png;base64,([^"']+)"#).expect("PNG data URI pattern should be valid")
});

/// Finds the payload of the first embedded `data:image/png;base64,` reference
///
/// The payload runs up to the next quote character. Whitespace anywhere in
/// it, including wrapped lines, is dropped. An empty payload counts as absent.
pub fn find_png_payload(content: &str) -> Option<String> {
    let captures = PNG_DATA_URI.captures(content)?;
    let payload = captures
        .get(1)?
        .as_str()
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect::<String>();
    if payload.is_empty() {
        None
    } else {
        Some(payload)
    }
}

/// Pads a base64 string with `=` until its length is a multiple of 4
pub fn pad_base64(payload: &str) -> String {
    let mut padded = payload.to_string();
    let missing = padded.len() % 4;
    if missing != 0 {
        padded.push_str(&"=".repeat(4 - missing));
    }
    padded
}
