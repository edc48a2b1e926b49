use crate::page::PageOutcome;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Something that was missing or failed while building a card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Issue {
    MissingTitle,
    MissingExcerpt,
    /// No embedded image; the placeholder was used
    MissingImage,
    /// The embedded image could not be decoded or written; the placeholder was used
    ImageFailed { message: String },
}

/// Outcome for a single article
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ArticleStatus {
    /// A card was rendered with everything in place
    Rendered { image: String },
    /// A card was rendered, but with empty values or the placeholder image
    Degraded { image: String, issues: Vec<Issue> },
    /// No card was rendered
    Skipped { reason: String },
}

impl ArticleStatus {
    /// Whether this article produced a card
    pub fn has_card(&self) -> bool {
        !matches!(self, ArticleStatus::Skipped { .. })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleReport {
    pub id: u32,
    pub source: PathBuf,
    pub status: ArticleStatus,
}

/// Everything that happened during one run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    pub articles: Vec<ArticleReport>,
    pub page_path: PathBuf,
    pub page: PageOutcome,
}

impl RunReport {
    /// Number of cards written into the page
    pub fn cards_rendered(&self) -> usize {
        self.articles.iter().filter(|a| a.status.has_card()).count()
    }

    pub fn skipped(&self) -> impl Iterator<Item = &ArticleReport> {
        self.articles
            .iter()
            .filter(|a| matches!(a.status, ArticleStatus::Skipped { .. }))
    }

    pub fn degraded(&self) -> impl Iterator<Item = &ArticleReport> {
        self.articles
            .iter()
            .filter(|a| matches!(a.status, ArticleStatus::Degraded { .. }))
    }

    /// Report for article `id`, if it was part of the run
    pub fn article(&self, id: u32) -> Option<&ArticleReport> {
        self.articles.iter().find(|a| a.id == id)
    }
}
