use crate::parsers::text;
use scraper::{Html, Selector};

/// Text of the first element matching `selector`, whitespace-collapsed
///
/// Nested markup is dropped and the text nodes are concatenated as-is, so
/// `Hello<b>World</b>` yields `HelloWorld`.
pub fn first_text(doc: &Html, selector: &str) -> Option<String> {
    let selector = Selector::parse(selector).ok()?;
    let element = doc.select(&selector).next()?;
    let raw = element.text().collect::<String>();
    Some(text::collapse_whitespace(&raw))
}

/// Text of the first `h1` in the document
pub fn first_heading(doc: &Html) -> Option<String> {
    first_text(doc, "h1")
}

/// Text of the first `p` in the document
pub fn first_paragraph(doc: &Html) -> Option<String> {
    first_text(doc, "p")
}
