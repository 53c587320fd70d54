//! Data models for catalogue rows and cleaned products.

use serde::Serialize;

/// Raw text fields of one table row, straight from the markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRow {
    pub title: String,
    pub price_local: String,
    pub price_foreign: String,
}

impl RawRow {
    pub fn new(
        title: impl Into<String>,
        price_local: impl Into<String>,
        price_foreign: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            price_local: price_local.into(),
            price_foreign: price_foreign.into(),
        }
    }
}

/// Strips marketing noise words out of product titles.
#[derive(Debug, Clone, Default)]
pub struct TitleCleaner {
    noise_words: Vec<String>,
}

impl TitleCleaner {
    /// Creates a cleaner that removes the given words, in order.
    pub fn new(noise_words: Vec<String>) -> Self {
        let noise_words = noise_words.into_iter().filter(|w| !w.is_empty()).collect();
        Self { noise_words }
    }

    /// Trims the title, deletes every occurrence of each noise word and trims again.
    ///
    /// Deletion is literal, so a noise word glued to other letters is removed too.
    pub fn clean(&self, title: &str) -> String {
        let mut cleaned = title.trim().to_string();
        for word in &self.noise_words {
            cleaned = cleaned.replace(word.as_str(), "");
        }
        cleaned.trim().to_string()
    }

    /// Returns the configured noise words.
    pub fn noise_words(&self) -> &[String] {
        &self.noise_words
    }
}

/// A catalogue product with a cleaned title. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Product {
    title: String,
    price_local: String,
    price_foreign: String,
    keywords: Vec<String>,
}

impl Product {
    /// Builds a product, trimming every field and cleaning the title.
    pub fn new(
        title: &str,
        price_local: &str,
        price_foreign: &str,
        cleaner: &TitleCleaner,
    ) -> Self {
        let title = cleaner.clean(title);
        let keywords = title
            .split(',')
            .map(|part| part.trim().to_string())
            .collect();

        Self {
            title,
            price_local: price_local.trim().to_string(),
            price_foreign: price_foreign.trim().to_string(),
            keywords,
        }
    }

    /// Builds a product from a parsed table row.
    pub fn from_raw(row: &RawRow, cleaner: &TitleCleaner) -> Self {
        Self::new(&row.title, &row.price_local, &row.price_foreign, cleaner)
    }

    /// Cleaned title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Local-currency price as shown on the page.
    pub fn price_local(&self) -> &str {
        &self.price_local
    }

    /// Foreign-currency price as shown on the page.
    pub fn price_foreign(&self) -> &str {
        &self.price_foreign
    }

    /// Comma-separated parts of the cleaned title, each trimmed.
    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }
}

/// Ordered, read-only collection of products.
#[derive(Debug, Clone, Default)]
pub struct ProductRepository {
    products: Vec<Product>,
}

impl ProductRepository {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Builds products from the given rows, keeping their order.
    pub fn from_rows(rows: &[RawRow], cleaner: &TitleCleaner) -> Self {
        let products = rows
            .iter()
            .map(|row| Product::from_raw(row, cleaner))
            .collect();
        Self::new(products)
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Product> {
        self.products.iter()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl<'a> IntoIterator for &'a ProductRepository {
    type Item = &'a Product;
    type IntoIter = std::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::default_title_noise_words;

    fn default_cleaner() -> TitleCleaner {
        TitleCleaner::new(default_title_noise_words())
    }

    #[test]
    fn test_product_from_noisy_row() {
        let product = Product::new(
            " Игровой Ноутбук Acer , 16GB ",
            " 45000 ",
            " 510 ",
            &default_cleaner(),
        );
        assert_eq!(product.title(), "Acer , 16GB");
        assert_eq!(product.keywords(), ["Acer", "16GB"]);
        assert_eq!(product.price_local(), "45000");
        assert_eq!(product.price_foreign(), "510");
    }

    #[test]
    fn test_keywords_split_and_trimmed() {
        let product = Product::new("A, B ,C", "1", "2", &default_cleaner());
        assert_eq!(product.keywords(), ["A", "B", "C"]);
    }

    #[test]
    fn test_keywords_stable_across_calls() {
        let product = Product::new("Lenovo, DDR5, 512GB", "1", "2", &default_cleaner());
        let first = product.keywords().to_vec();
        assert_eq!(product.keywords(), first.as_slice());
    }

    #[test]
    fn test_title_without_commas_is_single_keyword() {
        let product = Product::new("Lenovo IdeaPad 3", "1", "2", &default_cleaner());
        assert_eq!(product.keywords(), ["Lenovo IdeaPad 3"]);
    }

    #[test]
    fn test_empty_title_yields_single_empty_keyword() {
        let product = Product::new("  Ноутбук  ", "1", "2", &default_cleaner());
        assert_eq!(product.title(), "");
        assert_eq!(product.keywords(), [""]);
    }

    #[test]
    fn test_clean_removes_every_noise_word() {
        let cleaner = default_cleaner();
        let titles = [
            "Ультрабук ASUS Zenbook",
            "  Ноутбук HP, ноутбук HP  ",
            "Игровой MSI Katana",
            "Ultrabook Dell XPS",
            "СуперНоутбукPro",
        ];

        for raw in titles {
            let cleaned = cleaner.clean(raw);
            for word in cleaner.noise_words() {
                assert!(
                    !cleaned.contains(word.as_str()),
                    "{:?} still contains {:?}",
                    cleaned,
                    word
                );
            }
            assert_eq!(cleaned, cleaned.trim());
        }
    }

    #[test]
    fn test_clean_is_not_word_boundary_aware() {
        let cleaner = default_cleaner();
        assert_eq!(cleaner.clean("СуперНоутбукPro"), "СуперPro");
    }

    #[test]
    fn test_clean_is_case_sensitive() {
        let cleaner = TitleCleaner::new(vec!["Ultrabook".to_string()]);
        assert_eq!(cleaner.clean("ULTRABOOK X1"), "ULTRABOOK X1");
    }

    #[test]
    fn test_cleaner_ignores_empty_noise_words() {
        let cleaner = TitleCleaner::new(vec![String::new(), "Pro".to_string()]);
        assert_eq!(cleaner.noise_words(), ["Pro"]);
        assert_eq!(cleaner.clean(" MacBook Pro "), "MacBook");
    }

    #[test]
    fn test_cleaner_without_noise_words_only_trims() {
        let cleaner = TitleCleaner::default();
        assert_eq!(cleaner.clean("  Ноутбук Acer  "), "Ноутбук Acer");
    }

    #[test]
    fn test_repository_keeps_row_order() {
        let rows = vec![
            RawRow::new("First", "1", "2"),
            RawRow::new("Second", "3", "4"),
            RawRow::new("Third", "5", "6"),
        ];
        let repo = ProductRepository::from_rows(&rows, &default_cleaner());

        assert_eq!(repo.len(), 3);
        let titles: Vec<&str> = repo.iter().map(Product::title).collect();
        assert_eq!(titles, ["First", "Second", "Third"]);
    }

    #[test]
    fn test_repository_built_only_from_given_rows() {
        let repo = ProductRepository::from_rows(&[], &default_cleaner());
        assert!(repo.is_empty());
        assert_eq!(repo.products().len(), 0);
    }

    #[test]
    fn test_product_serde() {
        let product = Product::new("Acer, 16GB", "45000", "510", &default_cleaner());
        let json = serde_json::to_string(&product).unwrap();
        assert!(json.contains("\"title\":\"Acer, 16GB\""));
        assert!(json.contains("\"keywords\":[\"Acer\",\"16GB\"]"));
        assert!(json.contains("\"price_local\":\"45000\""));
    }
}
