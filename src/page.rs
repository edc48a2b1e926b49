use crate::config::SectionConfig;
use crate::error::SiteError;
use regex::Regex;
use scraper::{Html, Selector};
use serde::{Deserialize, Serialize};
use std::fs;
use std::ops::Range;
use std::path::Path;
use std::sync::LazyLock;

static COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<!--.*?-->").expect("Comment pattern should be valid"));

static RAW_TEXT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?is)<script(?:\s[^>]*)?>.*?</script\s*>|<style(?:\s[^>]*)?>.*?</style\s*>|<textarea(?:\s[^>]*)?>.*?</textarea\s*>|<title(?:\s[^>]*)?>.*?</title\s*>",
    )
    .expect("Raw text element pattern should be valid")
});

static CLASS_ATTR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)\sclass\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'>]+))"#)
        .expect("Class attribute pattern should be valid")
});

/// What happened to the landing page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageOutcome {
    /// The marked section was replaced
    Replaced,
    /// No element carries the marker; the page was left as it was
    MarkerNotFound,
    /// The marked element has no closing tag in the source; the page was left as it was
    Unterminated,
}

/// Where the marked section sits in the page source
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
    Found(Range<usize>),
    NotFound,
    Unterminated,
}

/// A start or end tag of the section element in the page source
#[derive(Debug, Clone)]
struct Tag {
    span: Range<usize>,
    closing: bool,
}

/// Finds the marked section of a page
///
/// The marked element is identified in the parsed document tree. Its span
/// in the source is then found by balancing start and end tags of the same
/// element name, skipping HTML comments and the bodies of raw text
/// elements, so nested elements of that name
/// stay inside the replaced span.
#[derive(Debug)]
pub struct SectionLocator {
    element: String,
    marker_class: String,
    selector: Selector,
    tag_pattern: Regex,
}

impl SectionLocator {
    pub fn new(section: &SectionConfig) -> Result<Self, SiteError> {
        let selector = Selector::parse(&section.element).map_err(|e| {
            SiteError::InvalidConfig(format!(
                "invalid section element {:?}: {:?}",
                section.element, e
            ))
        })?;
        let tag_pattern = Regex::new(&format!(
            r"(?i)<(/)?{}(?:\s[^>]*)?>",
            regex::escape(&section.element)
        ))
        .map_err(|e| SiteError::InvalidConfig(e.to_string()))?;

        Ok(Self {
            element: section.element.clone(),
            marker_class: section.marker_class.clone(),
            selector,
            tag_pattern,
        })
    }

    /// Human readable form of the marker, e.g. `section.post-section`
    pub fn marker(&self) -> String {
        format!("{}.{}", self.element, self.marker_class)
    }

    /// Locate the first marked section in `page`
    pub fn locate(&self, page: &str) -> Location {
        let Some(ordinal) = self.marked_ordinal(page) else {
            return Location::NotFound;
        };

        let tags = self.source_tags(page);
        let opening = tags
            .iter()
            .enumerate()
            .filter(|(_, tag)| !tag.closing)
            .map(|(i, _)| i)
            .collect::<Vec<_>>();

        let start = match opening.get(ordinal) {
            Some(&i) if self.is_marked(&page[tags[i].span.clone()]) => Some(i),
            _ => {
                ::log::debug!(
                    "Marked {} #{} not matched in source, using first marked start tag",
                    self.element,
                    ordinal
                );
                opening
                    .iter()
                    .copied()
                    .find(|&i| self.is_marked(&page[tags[i].span.clone()]))
            }
        };

        let Some(start) = start else {
            return Location::NotFound;
        };

        let mut depth = 1usize;
        for tag in &tags[start + 1..] {
            if tag.closing {
                depth -= 1;
                if depth == 0 {
                    return Location::Found(tags[start].span.start..tag.span.end);
                }
            } else {
                depth += 1;
            }
        }

        Location::Unterminated
    }

    /// Position of the first marked element among all elements of its name,
    /// in document order
    fn marked_ordinal(&self, page: &str) -> Option<usize> {
        let doc = Html::parse_document(page);
        let mut marked = doc
            .select(&self.selector)
            .enumerate()
            .filter(|(_, el)| el.value().classes().any(|c| c == self.marker_class))
            .map(|(i, _)| i);

        let first = marked.next();
        let others = marked.count();
        if others > 0 {
            ::log::warn!(
                "Found {} more {} elements, only the first is replaced",
                others,
                self.marker()
            );
        }
        first
    }

    /// Start and end tags of the section element outside comments and
    /// raw text bodies (`script`, `style`, `textarea`, `title`)
    fn source_tags(&self, page: &str) -> Vec<Tag> {
        let masked = COMMENT
            .find_iter(page)
            .chain(RAW_TEXT.find_iter(page))
            .map(|m| m.range())
            .collect::<Vec<_>>();

        self.tag_pattern
            .captures_iter(page)
            .filter_map(|caps| {
                let whole = caps.get(0)?;
                if masked.iter().any(|m| m.contains(&whole.start())) {
                    return None;
                }
                Some(Tag {
                    span: whole.range(),
                    closing: caps.get(1).is_some(),
                })
            })
            .collect()
    }

    fn is_marked(&self, start_tag: &str) -> bool {
        CLASS_ATTR.captures_iter(start_tag).any(|caps| {
            let value = caps
                .get(1)
                .or_else(|| caps.get(2))
                .or_else(|| caps.get(3))
                .map(|m| m.as_str())
                .unwrap_or_default();
            value.split_whitespace().any(|c| c == self.marker_class)
        })
    }
}

/// Replace the marked section of `page` with `section`
///
/// Surrounding whitespace of `section` is dropped so that applying the same
/// section again yields the same page.
pub fn replace_section(page: &str, section: &str, locator: &SectionLocator) -> (String, PageOutcome) {
    match locator.locate(page) {
        Location::Found(span) => {
            let section = section.trim();
            let mut updated = String::with_capacity(page.len() - span.len() + section.len());
            updated.push_str(&page[..span.start]);
            updated.push_str(section);
            updated.push_str(&page[span.end..]);
            (updated, PageOutcome::Replaced)
        }
        Location::NotFound => (page.to_string(), PageOutcome::MarkerNotFound),
        Location::Unterminated => (page.to_string(), PageOutcome::Unterminated),
    }
}

/// Rewrite the page file at `path` with `section` in place of the marked section
///
/// When the section cannot be located the page is written back unchanged.
pub fn update_page(
    path: &Path,
    section: &str,
    locator: &SectionLocator,
) -> Result<PageOutcome, SiteError> {
    let page = fs::read_to_string(path).map_err(|e| SiteError::io(path, e))?;
    let (updated, outcome) = replace_section(&page, section, locator);

    match outcome {
        PageOutcome::Replaced => {}
        PageOutcome::MarkerNotFound => ::log::warn!(
            "Content was not replaced: no {} found in {}",
            locator.marker(),
            path.display()
        ),
        PageOutcome::Unterminated => ::log::warn!(
            "Content was not replaced: {} in {} has no closing tag",
            locator.marker(),
            path.display()
        ),
    }

    fs::write(path, updated).map_err(|e| SiteError::io(path, e))?;
    ::log::info!("Updated {}", path.display());
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn locator() -> SectionLocator {
        SectionLocator::new(&SectionConfig::default()).unwrap()
    }

    const NEW: &str = "\n    <section class=\"post-section\">NEW</section>\n    ";

    #[test]
    fn test_replaces_marked_section() {
        let page = r#"<html><body><nav>menu</nav><section class="post-section" style="x"><p>Coming Soon...</p></section><footer>f</footer></body></html>"#;
        let (updated, outcome) = replace_section(page, NEW, &locator());
        assert_eq!(outcome, PageOutcome::Replaced);
        assert_eq!(
            updated,
            r#"<html><body><nav>menu</nav><section class="post-section">NEW</section><footer>f</footer></body></html>"#
        );
    }

    #[test]
    fn test_nested_sections_stay_inside_span() {
        let page = r#"<body><section class="post-section"><section>inner</section><p>tail</p></section><section id="after">keep</section></body>"#;
        let (updated, outcome) = replace_section(page, NEW, &locator());
        assert_eq!(outcome, PageOutcome::Replaced);
        assert_eq!(
            updated,
            r#"<body><section class="post-section">NEW</section><section id="after">keep</section></body>"#
        );
    }

    #[test]
    fn test_targets_marked_element_not_first_section() {
        let page = r#"<section class="hero">hero</section><section class="wide post-section">old</section>"#;
        let (updated, _) = replace_section(page, NEW, &locator());
        assert_eq!(
            updated,
            r#"<section class="hero">hero</section><section class="post-section">NEW</section>"#
        );
    }

    #[test]
    fn test_commented_marker_is_ignored() {
        let page = r#"<!-- <section class="post-section"> --><section class='post-section'>old</section>"#;
        let (updated, outcome) = replace_section(page, NEW, &locator());
        assert_eq!(outcome, PageOutcome::Replaced);
        assert_eq!(
            updated,
            r#"<!-- <section class="post-section"> --><section class="post-section">NEW</section>"#
        );
    }

    #[test]
    fn test_section_text_in_script_is_ignored() {
        let page = r#"<head><script>const tpl = '<section class="post-section">';</script><style>/* <section> */</style></head><body><section class="post-section">old</section></body>"#;
        let (updated, outcome) = replace_section(page, NEW, &locator());
        assert_eq!(outcome, PageOutcome::Replaced);
        assert_eq!(
            updated,
            r#"<head><script>const tpl = '<section class="post-section">';</script><style>/* <section> */</style></head><body><section class="post-section">NEW</section></body>"#
        );
    }

    #[test]
    fn test_slash_in_section_start_tag_still_opens() {
        let page = r#"<section class="post-section"><section/><p>x</p></section></section><footer>f</footer>"#;
        let (updated, outcome) = replace_section(page, NEW, &locator());
        assert_eq!(outcome, PageOutcome::Replaced);
        assert_eq!(
            updated,
            r#"<section class="post-section">NEW</section><footer>f</footer>"#
        );
    }

    #[test]
    fn test_only_first_marked_section_is_replaced() {
        let page = r#"<section class="post-section">a</section><section class="post-section">b</section>"#;
        let (updated, _) = replace_section(page, NEW, &locator());
        assert_eq!(
            updated,
            r#"<section class="post-section">NEW</section><section class="post-section">b</section>"#
        );
    }

    #[test]
    fn test_missing_marker_leaves_page_unchanged() {
        let page = "<html><body><section class=\"other\">x</section></body></html>";
        let (updated, outcome) = replace_section(page, NEW, &locator());
        assert_eq!(outcome, PageOutcome::MarkerNotFound);
        assert_eq!(updated, page);
    }

    #[test]
    fn test_unterminated_section_leaves_page_unchanged() {
        let page = r#"<body><section class="post-section"><p>open"#;
        let (updated, outcome) = replace_section(page, NEW, &locator());
        assert_eq!(outcome, PageOutcome::Unterminated);
        assert_eq!(updated, page);
    }

    #[test]
    fn test_replacement_is_idempotent() {
        let page = r#"<body><section class="post-section">old</section></body>"#;
        let section = crate::render::render_section("<a>card</a>", &SectionConfig::default());
        let (once, _) = replace_section(page, &section, &locator());
        let (twice, outcome) = replace_section(&once, &section, &locator());
        assert_eq!(outcome, PageOutcome::Replaced);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_update_page_without_marker_keeps_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("post.html");
        let original = "<html>\r\n<body><main>nothing</main></body>\r\n</html>\n";
        fs::write(&path, original).unwrap();

        let outcome = update_page(&path, NEW, &locator()).unwrap();
        assert_eq!(outcome, PageOutcome::MarkerNotFound);
        assert_eq!(fs::read(&path).unwrap(), original.as_bytes());
    }

    #[test]
    fn test_update_missing_page_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = update_page(&dir.path().join("post.html"), NEW, &locator()).unwrap_err();
        assert!(err.is_not_found());
    }
}
