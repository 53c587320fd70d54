//! HTTP client that downloads the catalogue page.

use crate::catalogue::error::FetchError;
use crate::config::Config;
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, info};
use wreq::Client;

/// Source of the catalogue HTML - enables mocking for tests.
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Fetches the page and returns its body as text.
    async fn fetch(&self) -> Result<String, FetchError>;

    /// Returns the URL the page is fetched from.
    fn source_url(&self) -> &str;
}

/// Plain GET client for the configured price-list URL.
pub struct CatalogueClient {
    client: Client,
    url: String,
}

impl CatalogueClient {
    /// Creates a new client from the given configuration.
    pub fn new(config: &Config) -> Result<Self, FetchError> {
        let mut builder = Client::builder()
            .gzip(true)
            .brotli(true)
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(10));

        if let Some(proxy_url) = &config.proxy {
            debug!("Configuring proxy: {}", proxy_url);
            let proxy = wreq::Proxy::all(proxy_url.as_str())
                .map_err(|source| FetchError::Proxy {
                    proxy: proxy_url.clone(),
                    source,
                })?;
            builder = builder.proxy(proxy);
        }

        let client = builder.build().map_err(FetchError::Client)?;

        Ok(Self {
            client,
            url: config.source_url.clone(),
        })
    }
}

#[async_trait]
impl PageSource for CatalogueClient {
    async fn fetch(&self) -> Result<String, FetchError> {
        info!("Fetching catalogue: {}", self.url);

        let response = self
            .client
            .get(self.url.as_str())
            .send()
            .await
            .map_err(|source| FetchError::Transport {
                url: self.url.clone(),
                source,
            })?;

        let status = response.status();
        debug!("Response status: {}", status);

        if !status.is_success() {
            return Err(FetchError::Status {
                url: self.url.clone(),
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|source| FetchError::Body {
                url: self.url.clone(),
                source,
            })?;

        debug!("Fetched {} bytes", body.len());
        Ok(body)
    }

    fn source_url(&self) -> &str {
        &self.url
    }
}
