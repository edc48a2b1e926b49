use crate::error::SiteError;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Configuration for one generation run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Directory holding the article files and the landing page
    pub root_dir: PathBuf,

    /// First article number to look for (inclusive)
    #[serde(default = "default_first_article")]
    pub first_article: u32,

    /// Last article number to look for (inclusive)
    #[serde(default = "default_last_article")]
    pub last_article: u32,

    /// File name prefix of article files, followed by the number and `.html`
    #[serde(default = "default_article_prefix")]
    pub article_prefix: String,

    /// Landing page rewritten with the card listing
    #[serde(default = "default_page_file")]
    pub page_file: String,

    /// Directory (relative to the root) the decoded thumbnails are written to
    #[serde(default = "default_thumbnails_dir")]
    pub thumbnails_dir: String,

    /// Image reference used when no thumbnail could be produced
    #[serde(default = "default_placeholder_image")]
    pub placeholder_image: String,

    /// Maximum excerpt length in characters, ellipsis included
    #[serde(default = "default_excerpt_limit")]
    pub excerpt_limit: usize,

    /// Static card content
    #[serde(default)]
    pub card: CardConfig,

    /// Landing page section that receives the cards
    #[serde(default)]
    pub section: SectionConfig,
}

/// Static content shared by every card
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardConfig {
    /// Author shown in the card footer
    #[serde(default = "default_author")]
    pub author: String,

    /// Date label shown in the card footer
    #[serde(default = "default_date_label")]
    pub date_label: String,

    /// Category tags shown above the title
    #[serde(default = "default_tags")]
    pub tags: Vec<String>,
}

/// The landing page section that is regenerated
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionConfig {
    /// Element name of the section
    #[serde(default = "default_section_element")]
    pub element: String,

    /// Class that marks the section to replace
    #[serde(default = "default_marker_class")]
    pub marker_class: String,

    /// Heading of the regenerated section
    #[serde(default = "default_heading")]
    pub heading: String,

    /// Line shown under the heading
    #[serde(default = "default_subheading")]
    pub subheading: String,
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            author: default_author(),
            date_label: default_date_label(),
            tags: default_tags(),
        }
    }
}

impl Default for SectionConfig {
    fn default() -> Self {
        Self {
            element: default_section_element(),
            marker_class: default_marker_class(),
            heading: default_heading(),
            subheading: default_subheading(),
        }
    }
}

fn default_first_article() -> u32 {
    1
}

fn default_last_article() -> u32 {
    10
}

fn default_article_prefix() -> String {
    "article-".to_string()
}

fn default_page_file() -> String {
    "post.html".to_string()
}

fn default_thumbnails_dir() -> String {
    "thumbnails".to_string()
}

fn default_placeholder_image() -> String {
    "placeholder.png".to_string()
}

fn default_excerpt_limit() -> usize {
    150
}

fn default_author() -> String {
    "Janiru Hansaga".to_string()
}

fn default_date_label() -> String {
    "Oct 2023".to_string()
}

fn default_tags() -> Vec<String> {
    vec!["Blog".to_string(), "Tech".to_string()]
}

fn default_section_element() -> String {
    "section".to_string()
}

fn default_marker_class() -> String {
    "post-section".to_string()
}

fn default_heading() -> String {
    "Latest Posts".to_string()
}

fn default_subheading() -> String {
    "Explore my latest thoughts and ideas.".to_string()
}

impl SiteConfig {
    /// Create a configuration with default values for the given root directory
    pub fn new(root_dir: impl Into<PathBuf>) -> Self {
        Self {
            root_dir: root_dir.into(),
            first_article: default_first_article(),
            last_article: default_last_article(),
            article_prefix: default_article_prefix(),
            page_file: default_page_file(),
            thumbnails_dir: default_thumbnails_dir(),
            placeholder_image: default_placeholder_image(),
            excerpt_limit: default_excerpt_limit(),
            card: CardConfig::default(),
            section: SectionConfig::default(),
        }
    }

    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SiteError> {
        let path = path.as_ref();
        let mut file = File::open(path).map_err(|e| SiteError::io(path, e))?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)
            .map_err(|e| SiteError::io(path, e))?;

        Self::from_json(&contents)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self, SiteError> {
        let config: Self = serde_json::from_str(json)?;
        Ok(config)
    }

    /// Check the values a run depends on
    pub fn validate(&self) -> Result<(), SiteError> {
        if self.first_article > self.last_article {
            return Err(SiteError::InvalidConfig(format!(
                "article range {}..={} is empty",
                self.first_article, self.last_article
            )));
        }

        // Room for at least one character plus the ellipsis
        if self.excerpt_limit < 4 {
            return Err(SiteError::InvalidConfig(format!(
                "excerpt limit {} is too small",
                self.excerpt_limit
            )));
        }

        let element = &self.section.element;
        if element.is_empty() || !element.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(SiteError::InvalidConfig(format!(
                "section element {:?} is not a valid element name",
                element
            )));
        }

        let class = &self.section.marker_class;
        if class.is_empty() || class.chars().any(char::is_whitespace) {
            return Err(SiteError::InvalidConfig(format!(
                "marker class {:?} must be a single class name",
                class
            )));
        }

        Ok(())
    }

    /// Path of the landing page
    pub fn page_path(&self) -> PathBuf {
        self.root_dir.join(&self.page_file)
    }

    /// Directory the thumbnails are written to
    pub fn thumbnails_path(&self) -> PathBuf {
        self.root_dir.join(&self.thumbnails_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_site_layout() {
        let config = SiteConfig::new("/site");
        assert_eq!(config.first_article, 1);
        assert_eq!(config.last_article, 10);
        assert_eq!(config.page_path(), PathBuf::from("/site/post.html"));
        assert_eq!(config.thumbnails_path(), PathBuf::from("/site/thumbnails"));
        assert_eq!(config.card.tags, vec!["Blog", "Tech"]);
        assert_eq!(config.section.marker_class, "post-section");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_json_fills_defaults() {
        let config = SiteConfig::from_json(
            r#"{"root_dir": "site", "last_article": 3, "card": {"date_label": "Jan 2024"}}"#,
        )
        .unwrap();
        assert_eq!(config.last_article, 3);
        assert_eq!(config.first_article, 1);
        assert_eq!(config.card.date_label, "Jan 2024");
        assert_eq!(config.card.author, "Janiru Hansaga");
        assert_eq!(config.section.element, "section");
    }

    #[test]
    fn test_from_json_requires_root() {
        let err = SiteConfig::from_json(r#"{"last_article": 3}"#).unwrap_err();
        assert!(matches!(err, SiteError::ConfigParse(_)));
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = SiteConfig::new(".");
        config.first_article = 5;
        config.last_article = 2;
        assert!(matches!(config.validate(), Err(SiteError::InvalidConfig(_))));

        let mut config = SiteConfig::new(".");
        config.excerpt_limit = 3;
        assert!(config.validate().is_err());

        let mut config = SiteConfig::new(".");
        config.section.element = "sec tion".to_string();
        assert!(config.validate().is_err());

        let mut config = SiteConfig::new(".");
        config.section.marker_class = "post section".to_string();
        assert!(config.validate().is_err());
    }
}
