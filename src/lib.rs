//! catalogue-filter - Scrape a price-list table and pick products by keyword
//!
//! Fetches one catalogue page, extracts product rows, strips marketing
//! noise from titles and keeps the products whose title contains any of
//! the configured match keywords.

pub mod catalogue;
pub mod commands;
pub mod config;
pub mod filters;
pub mod format;

pub use catalogue::{Product, ProductRepository, RawRow, TableParser, TitleCleaner};
pub use config::Config;
