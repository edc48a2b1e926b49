pub mod data_uri;
pub mod html;
pub mod text;


use scraper::Html;

/// Metadata pulled out of one article document
///
/// Title and excerpt are markup-safe: `&`, `<`, `>` and `"` coming from
/// decoded text are escaped again, so they can go straight into a card.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedMetadata {
    /// Text of the first top-level heading, empty if there is none
    pub title: String,
    /// Text of the first paragraph, truncated, empty if there is none
    pub excerpt: String,
    /// Padded base64 payload of the first embedded PNG, if any
    pub image_payload: Option<String>,
}

impl ExtractedMetadata {
    /// Whether a title was found
    pub fn has_title(&self) -> bool {
        !self.title.is_empty()
    }

    /// Whether an excerpt was found
    pub fn has_excerpt(&self) -> bool {
        !self.excerpt.is_empty()
    }
}

/// Pulls title, excerpt and embedded image out of article markup
///
/// Missing elements never fail extraction; they come back as empty
/// strings or `None`.
#[derive(Debug, Clone, Copy)]
pub struct Extractor {
    excerpt_limit: usize,
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new(text::DEFAULT_EXCERPT_LIMIT)
    }
}

impl Extractor {
    /// Creates an extractor truncating excerpts to `excerpt_limit` characters
    pub fn new(excerpt_limit: usize) -> Self {
        Self { excerpt_limit }
    }

    /// Extract metadata from the raw article markup
    pub fn extract(&self, content: &str) -> ExtractedMetadata {
        let doc = Html::parse_document(content);

        let title = html::first_heading(&doc)
            .map(|t| text::escape_markup(&t))
            .unwrap_or_default();
        // Truncate the decoded text so an entity is never cut in half
        let excerpt = html::first_paragraph(&doc)
            .map(|p| text::escape_markup(&text::truncate_excerpt(&p, self.excerpt_limit)))
            .unwrap_or_default();
        let image_payload = data_uri::find_png_payload(content).map(|p| data_uri::pad_base64(&p));

        ::log::debug!(
            "Extracted title {:?}, {} excerpt chars, image: {}",
            title,
            excerpt.chars().count(),
            image_payload.is_some()
        );

        ExtractedMetadata {
            title,
            excerpt,
            image_payload,
        }
    }
}
