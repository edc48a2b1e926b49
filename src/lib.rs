pub mod config;
pub mod error;
pub mod images;
pub mod page;
pub mod parsers;
pub mod render;
pub mod report;
pub mod utils;


// Re-export commonly used types for convenience
pub use config::SiteConfig;
pub use error::SiteError;
pub use page::PageOutcome;
pub use report::{ArticleReport, ArticleStatus, Issue, RunReport};

use parsers::Extractor;
use render::Card;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Regenerates the landing page card listing from the article files
///
/// Articles are processed one after another. A missing article is skipped
/// and a broken image falls back to the placeholder; neither stops the run,
/// and the page is always rewritten with the cards gathered so far.
#[derive(Debug)]
pub struct Generator {
    config: SiteConfig,
}

impl Generator {
    /// Create a generator for the given configuration
    pub fn new(config: SiteConfig) -> Self {
        Self { config }
    }

    /// Replace the configuration
    pub fn with_config(mut self, config: SiteConfig) -> Self {
        self.config = config;
        self
    }

    /// Load the configuration from a JSON file
    pub fn with_config_file(self, path: impl AsRef<Path>) -> Result<Self, SiteError> {
        let config = SiteConfig::from_file(path)?;
        Ok(self.with_config(config))
    }

    /// Set the inclusive range of article numbers to look for
    pub fn with_range(mut self, first: u32, last: u32) -> Self {
        self.config.first_article = first;
        self.config.last_article = last;
        self
    }

    /// Set the date label shown on every card
    pub fn with_date_label(mut self, date_label: impl Into<String>) -> Self {
        self.config.card.date_label = date_label.into();
        self
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    /// Run the whole pipeline once
    pub fn run(&self) -> Result<RunReport, SiteError> {
        self.config.validate()?;
        let locator = page::SectionLocator::new(&self.config.section)?;
        images::ensure_dir(&self.config.thumbnails_path())?;

        let extractor = Extractor::new(self.config.excerpt_limit);
        let mut cards = String::new();
        let mut articles = Vec::new();

        for id in self.config.first_article..=self.config.last_article {
            articles.push(self.process_article(id, &extractor, &mut cards));
        }

        let section = render::render_section(&cards, &self.config.section);
        let page_path = self.config.page_path();
        let page = page::update_page(&page_path, &section, &locator)?;

        let report = RunReport {
            articles,
            page_path,
            page,
        };
        ::log::info!(
            "Rendered {} cards, {} articles skipped",
            report.cards_rendered(),
            report.skipped().count()
        );
        Ok(report)
    }

    /// Extract, materialize and render one article, appending its card to `cards`
    fn process_article(&self, id: u32, extractor: &Extractor, cards: &mut String) -> ArticleReport {
        let stem = utils::article_stem(&self.config.article_prefix, id);
        let file_name = format!("{}.html", stem);
        let source = self.config.root_dir.join(&file_name);

        let content = match fs::read_to_string(&source) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                ::log::info!("Skipping {}, not found.", file_name);
                return ArticleReport {
                    id,
                    source,
                    status: ArticleStatus::Skipped {
                        reason: "not found".to_string(),
                    },
                };
            }
            Err(e) => {
                ::log::warn!("Skipping {}, could not be read: {}", file_name, e);
                return ArticleReport {
                    id,
                    source,
                    status: ArticleStatus::Skipped {
                        reason: e.to_string(),
                    },
                };
            }
        };

        ::log::info!("Processing {}...", file_name);
        let meta = extractor.extract(&content);

        let mut issues = Vec::new();
        if !meta.has_title() {
            issues.push(Issue::MissingTitle);
        }
        if !meta.has_excerpt() {
            issues.push(Issue::MissingExcerpt);
        }

        let image = match &meta.image_payload {
            Some(payload) => {
                let image_file = format!("{}.png", stem);
                let dest = self.config.thumbnails_path().join(&image_file);
                match images::materialize(payload, &dest) {
                    Ok(_) => {
                        let image = utils::web_path(&self.config.thumbnails_dir, &image_file);
                        ::log::info!("Saved image to {}", image);
                        image
                    }
                    Err(e) => {
                        ::log::warn!("Failed to save image for {}: {}", file_name, e);
                        issues.push(Issue::ImageFailed {
                            message: e.to_string(),
                        });
                        self.config.placeholder_image.clone()
                    }
                }
            }
            None => {
                ::log::debug!("No embedded image in {}", file_name);
                issues.push(Issue::MissingImage);
                self.config.placeholder_image.clone()
            }
        };

        cards.push_str(&render::render_card(
            &Card {
                title: &meta.title,
                excerpt: &meta.excerpt,
                image: &image,
                link: &file_name,
                date: &self.config.card.date_label,
            },
            &self.config.card,
        ));

        let status = if issues.is_empty() {
            ArticleStatus::Rendered { image }
        } else {
            ArticleStatus::Degraded { image, issues }
        };

        ArticleReport { id, source, status }
    }
}
