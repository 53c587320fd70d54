//! Product filtering.

pub mod keyword;

use crate::catalogue::{Product, ProductRepository};

pub use keyword::KeywordFilter;

/// Trait for filtering products.
pub trait Filter: Send + Sync {
    /// Returns true if the product passes the filter.
    fn matches(&self, product: &Product) -> bool;

    /// Returns a description of this filter.
    fn description(&self) -> String;
}

impl ProductRepository {
    /// Returns the products accepted by `filter`, in repository order.
    pub fn select(&self, filter: &impl Filter) -> Vec<&Product> {
        self.iter().filter(|p| filter.matches(p)).collect()
    }
}

/// Products whose title contains any of the filter's keywords, in repository order.
pub fn find_matches<'a>(repo: &'a ProductRepository, filter: &KeywordFilter) -> Vec<&'a Product> {
    repo.select(filter)
}
