//! Configuration management with TOML, environment variables, and CLI overrides.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Price list scraped when no URL is configured.
pub const DEFAULT_SOURCE_URL: &str = "https://www.link.kg/price.php?s_ids=1&clarifyApply=";

/// Application configuration with layered loading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// URL of the catalogue page
    #[serde(default = "default_source_url")]
    pub source_url: String,

    /// Words deleted from every product title, in this order
    #[serde(default = "default_title_noise_words")]
    pub title_noise_words: Vec<String>,

    /// A product is printed when its title contains any of these
    #[serde(default = "default_match_keywords")]
    pub match_keywords: Vec<String>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Proxy URL (e.g., socks5://host:port)
    #[serde(default)]
    pub proxy: Option<String>,

    /// Output format
    #[serde(default)]
    pub format: OutputFormat,
}

fn default_source_url() -> String {
    DEFAULT_SOURCE_URL.to_string()
}

pub fn default_title_noise_words() -> Vec<String> {
    ["Ультрабук", "Ноутбук", "ноутбук", "Игровой", "Ultrabook"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn default_match_keywords() -> Vec<String> {
    vec![" DDR5".to_string()]
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_url: default_source_url(),
            title_noise_words: default_title_noise_words(),
            match_keywords: default_match_keywords(),
            timeout_secs: default_timeout_secs(),
            proxy: None,
            format: OutputFormat::Text,
        }
    }
}

impl Config {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading config from: {}", path.display());

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Loads configuration with fallback to default locations.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit_path {
            return Self::from_file(path);
        }

        let local_config = Path::new("catalogue.toml");
        if local_config.exists() {
            debug!("Found catalogue.toml in current directory");
            return Self::from_file(local_config);
        }

        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("catalogue-filter").join("config.toml");
            if xdg_config.exists() {
                debug!("Found config in XDG config directory");
                return Self::from_file(xdg_config);
            }
        }

        debug!("No config file found, using defaults");
        Ok(Self::default())
    }

    /// Applies environment variable overrides.
    pub fn with_env(mut self) -> Self {
        if let Ok(url) = std::env::var("CATALOGUE_URL") {
            if !url.trim().is_empty() {
                self.source_url = url;
            }
        }

        if let Ok(proxy) = std::env::var("CATALOGUE_PROXY") {
            self.proxy = Some(proxy);
        }

        if let Ok(timeout) = std::env::var("CATALOGUE_TIMEOUT") {
            if let Ok(t) = timeout.parse() {
                self.timeout_secs = t;
            }
        }

        self
    }
}

/// Output format for matched products.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Keywords one per line, `---`, both prices, then a blank line.
    ///
    /// Blocks end with exactly one blank line, never two.
    #[default]
    Text,
    Table,
    Json,
    Markdown,
    Csv,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "plain" => Ok(OutputFormat::Text),
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(format!(
                "Unknown format: {}. Use: text, table, json, markdown, csv",
                s
            )),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Markdown => write!(f, "markdown"),
            OutputFormat::Csv => write!(f, "csv"),
        }
    }
}
