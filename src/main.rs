//! catalogue-filter - Scrape a price-list table and pick products by keyword.

use anyhow::Result;
use catalogue_filter::commands::ScanCommand;
use catalogue_filter::config::{Config, OutputFormat};
use clap::Parser;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Environment overrides (`CATALOGUE_URL`, `CATALOGUE_TIMEOUT`, `CATALOGUE_PROXY`)
/// are read by `Config::with_env` only, so invalid values there are ignored.
#[derive(Parser)]
#[command(
    name = "catalogue-filter",
    version,
    about = "Print catalogue products whose title contains a keyword",
    long_about = "Fetches a price-list page, reads the rows of its catalogue table, strips \
                  marketing words from product titles and prints the products matching any \
                  keyword."
)]
struct Cli {
    /// Catalogue page URL
    #[arg(short, long)]
    url: Option<String>,

    /// Match keywords (comma-separated, substring and case-sensitive)
    #[arg(short, long, value_delimiter = ',', allow_hyphen_values = true)]
    keywords: Option<Vec<String>>,

    /// Words removed from titles (comma-separated), replacing the configured list
    #[arg(long, value_delimiter = ',')]
    noise: Option<Vec<String>>,

    /// Request timeout in seconds
    #[arg(long)]
    timeout: Option<u64>,

    /// Proxy URL (e.g., socks5://host:port)
    #[arg(long)]
    proxy: Option<String>,

    /// Path to config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long)]
    format: Option<OutputFormat>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    /// Loads the config file, applies environment and then CLI overrides.
    fn build_config(&self) -> Result<Config> {
        let mut config = Config::load(self.config.as_deref())?.with_env();

        if let Some(url) = &self.url {
            config.source_url = url.clone();
        }
        if let Some(keywords) = &self.keywords {
            config.match_keywords = keywords.clone();
        }
        if let Some(noise) = &self.noise {
            config.title_noise_words = noise.clone();
        }
        if let Some(timeout) = self.timeout {
            config.timeout_secs = timeout;
        }
        if let Some(proxy) = &self.proxy {
            config.proxy = Some(proxy.clone());
        }
        if let Some(format) = self.format {
            config.format = format;
        }

        Ok(config)
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging; stdout is reserved for results
    let filter = if cli.verbose {
        EnvFilter::new(Level::DEBUG.to_string())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = cli.build_config()?;

    let output = ScanCommand::new(config).execute().await?;
    print!("{}", output);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalogue_filter::config::DEFAULT_SOURCE_URL;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn empty_config_file() -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "# defaults only").unwrap();
        file
    }

    #[test]
    fn test_invalid_env_values_are_ignored() {
        let file = empty_config_file();
        let config_path = file.path().to_str().unwrap();

        let orig_url = std::env::var("CATALOGUE_URL").ok();
        let orig_timeout = std::env::var("CATALOGUE_TIMEOUT").ok();

        std::env::set_var("CATALOGUE_URL", "   ");
        std::env::set_var("CATALOGUE_TIMEOUT", "soon");

        let cli = Cli::try_parse_from(["catalogue-filter", "--config", config_path]);
        let config = cli.unwrap().build_config().unwrap();
        assert_eq!(config.source_url, DEFAULT_SOURCE_URL);
        assert_eq!(config.timeout_secs, 30);

        std::env::set_var("CATALOGUE_URL", "http://mirror.test/price.php");
        std::env::set_var("CATALOGUE_TIMEOUT", "7");

        let cli = Cli::try_parse_from(["catalogue-filter", "--config", config_path]);
        let config = cli.unwrap().build_config().unwrap();
        assert_eq!(config.source_url, "http://mirror.test/price.php");
        assert_eq!(config.timeout_secs, 7);

        // Flags win over the environment
        let cli = Cli::try_parse_from([
            "catalogue-filter",
            "--config",
            config_path,
            "--url",
            "http://flag.test/price.php",
            "--timeout",
            "3",
        ]);
        let config = cli.unwrap().build_config().unwrap();
        assert_eq!(config.source_url, "http://flag.test/price.php");
        assert_eq!(config.timeout_secs, 3);

        for (key, orig) in [
            ("CATALOGUE_URL", orig_url),
            ("CATALOGUE_TIMEOUT", orig_timeout),
        ] {
            match orig {
                Some(v) => std::env::set_var(key, v),
                None => std::env::remove_var(key),
            }
        }
    }

    #[test]
    fn test_cli_overrides() {
        let file = empty_config_file();
        let config_path = file.path().to_str().unwrap();

        let cli = Cli::try_parse_from([
            "catalogue-filter",
            "--config",
            config_path,
            "-k",
            " DDR5, OLED",
            "--noise",
            "Ноутбук",
            "-f",
            "json",
        ]);
        let config = cli.unwrap().build_config().unwrap();

        assert_eq!(config.match_keywords, vec![" DDR5", " OLED"]);
        assert_eq!(config.title_noise_words, vec!["Ноутбук"]);
        assert_eq!(config.format, OutputFormat::Json);
    }

    #[test]
    fn test_invalid_timeout_flag_is_rejected() {
        let result = Cli::try_parse_from(["catalogue-filter", "--timeout", "soon"]);
        assert!(result.is_err());
    }
}
