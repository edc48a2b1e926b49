use clap::Parser;
use post_cards::{Generator, SiteConfig, SiteError};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "post-cards")]
#[command(about = "Regenerates the post listing of a static site from its article files")]
#[command(version)]
pub struct Args {
    /// Site directory holding article-N.html and post.html [default: .]
    pub root: Option<PathBuf>,

    /// Path to a JSON configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// First article number
    #[arg(long)]
    pub first: Option<u32>,

    /// Last article number
    #[arg(long)]
    pub last: Option<u32>,

    /// Date label shown on every card
    #[arg(long)]
    pub date: Option<String>,

    /// Print the run report as JSON
    #[arg(long)]
    pub json: bool,
}

impl Args {
    /// Build the generator: the config file (or defaults), then flag overrides
    pub fn generator(&self) -> Result<Generator, SiteError> {
        let mut generator = Generator::new(SiteConfig::new("."));
        if let Some(path) = &self.config {
            generator = generator.with_config_file(path)?;
        }

        if let Some(root) = &self.root {
            let mut config = generator.config().clone();
            config.root_dir = root.clone();
            generator = generator.with_config(config);
        }
        if self.first.is_some() || self.last.is_some() {
            let config = generator.config();
            let first = self.first.unwrap_or(config.first_article);
            let last = self.last.unwrap_or(config.last_article);
            generator = generator.with_range(first, last);
        }
        if let Some(date) = &self.date {
            generator = generator.with_date_label(date.clone());
        }

        Ok(generator)
    }
}
