//! Error types for fetching and parsing the catalogue page.

use thiserror::Error;

/// Failure to retrieve the catalogue page. Always fatal.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("fetch failed: could not build HTTP client: {0}")]
    Client(#[source] wreq::Error),

    #[error("fetch failed: invalid proxy {proxy}: {source}")]
    Proxy {
        proxy: String,
        #[source]
        source: wreq::Error,
    },

    #[error("fetch failed: request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: wreq::Error,
    },

    #[error("fetch failed: {url} responded with status {status}")]
    Status { url: String, status: u16 },

    #[error("fetch failed: could not read response body from {url}: {source}")]
    Body {
        url: String,
        #[source]
        source: wreq::Error,
    },
}

/// The page could not be turned into a document tree at all.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("cannot parse catalogue page: document is empty")]
    EmptyDocument,
}

/// Why a table row was skipped. Recovered locally by the parser.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ShapeMismatch {
    #[error("row has no cell at index {0}")]
    MissingCell(usize),

    #[error("cell {0} has no child element")]
    MissingChild(usize),

    #[error("cell {0} has no text at the expected position")]
    MissingText(usize),
}
