use clap::Parser;
use post_cards::{ArticleStatus, PageOutcome, RunReport};

mod args;
use args::Args;

fn main() {
    // Initialize logging, showing progress unless RUST_LOG says otherwise
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let generator = match args.generator() {
        Ok(generator) => generator,
        Err(e) => {
            ::log::error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    ::log::info!("Generating cards in {}", generator.config().root_dir.display());

    let report = match generator.run() {
        Ok(report) => report,
        Err(e) => {
            ::log::error!("Generation failed: {}", e);
            std::process::exit(1);
        }
    };

    if args.json {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                ::log::error!("Failed to serialize report: {}", e);
                std::process::exit(1);
            }
        }
    } else {
        print_summary(&report);
    }
}

fn print_summary(report: &RunReport) {
    for article in &report.articles {
        match &article.status {
            ArticleStatus::Rendered { image } => {
                println!("article {:>3}: rendered ({})", article.id, image)
            }
            ArticleStatus::Degraded { image, issues } => println!(
                "article {:>3}: degraded ({}), {} issue(s)",
                article.id,
                image,
                issues.len()
            ),
            ArticleStatus::Skipped { reason } => {
                println!("article {:>3}: skipped, {}", article.id, reason)
            }
        }
    }

    match report.page {
        PageOutcome::Replaced => println!(
            "Successfully updated {} with {} cards",
            report.page_path.display(),
            report.cards_rendered()
        ),
        PageOutcome::MarkerNotFound | PageOutcome::Unterminated => println!(
            "Warning: {} was written back unchanged",
            report.page_path.display()
        ),
    }
}
