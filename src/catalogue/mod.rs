//! Catalogue page modules: HTTP client, table parsing, and product models.

pub mod client;
pub mod error;
pub mod models;
pub mod parser;
pub mod selectors;

pub use client::{CatalogueClient, PageSource};
pub use error::{FetchError, ParseError, ShapeMismatch};
pub use models::{Product, ProductRepository, RawRow, TitleCleaner};
pub use parser::{ParseReport, TableParser};
