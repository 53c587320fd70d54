//! Keyword-based title filtering.

use super::Filter;
use crate::catalogue::Product;

/// Matches products whose title contains at least one keyword.
///
/// Matching is a plain, case-sensitive substring test. Keywords keep their
/// configured order and are not deduplicated.
pub struct KeywordFilter {
    keywords: Vec<String>,
}

impl KeywordFilter {
    /// Creates a filter that accepts a title containing any of `keywords`.
    pub fn any_of(keywords: Vec<String>) -> Self {
        Self { keywords }
    }

    /// Returns the configured keywords.
    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }
}

impl Filter for KeywordFilter {
    fn matches(&self, product: &Product) -> bool {
        self.keywords
            .iter()
            .any(|keyword| product.title().contains(keyword.as_str()))
    }

    fn description(&self) -> String {
        if self.keywords.is_empty() {
            return "Keywords: none (matches nothing)".to_string();
        }

        let quoted: Vec<String> = self.keywords.iter().map(|k| format!("{:?}", k)).collect();
        format!("Title contains any of: {}", quoted.join(", "))
    }
}
