//! Scan command: fetch, parse, clean, filter and format.

use crate::catalogue::{CatalogueClient, PageSource, ProductRepository, TableParser, TitleCleaner};
use crate::config::Config;
use crate::filters::{find_matches, Filter, KeywordFilter};
use crate::format::Formatter;
use anyhow::{Context, Result};
use tracing::{debug, info};

/// Runs the whole catalogue pipeline once.
pub struct ScanCommand {
    config: Config,
}

impl ScanCommand {
    /// Creates a new scan command.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Fetches the configured page and returns formatted matches.
    pub async fn execute(&self) -> Result<String> {
        let client = CatalogueClient::new(&self.config)
            .context("Failed to create HTTP client")?;

        self.execute_with_source(&client).await
    }

    /// Runs the pipeline against a provided page source (for testing).
    pub async fn execute_with_source(&self, source: &impl PageSource) -> Result<String> {
        let html = source.fetch().await?;

        let report = TableParser::new()
            .parse(&html)
            .with_context(|| format!("Failed to parse {}", source.source_url()))?;

        info!(
            "Parsed {} products ({} rows skipped)",
            report.count(),
            report.skipped
        );

        let cleaner = TitleCleaner::new(self.config.title_noise_words.clone());
        let repo = ProductRepository::from_rows(&report.rows, &cleaner);

        let filter = KeywordFilter::any_of(self.config.match_keywords.clone());
        debug!("Active filter: {}", filter.description());

        let matched = find_matches(&repo, &filter);
        info!("Found {} products matching criteria", matched.len());

        let formatter = Formatter::new(self.config.format);
        Ok(formatter.format_products(&matched))
    }
}
