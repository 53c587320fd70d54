//! CSS selectors for the price-list page.
//!
//! The listing is a single `<table class="catalogue">` where every product is
//! one `<tr>`. Cell positions inside a row are fixed, see `parser`.

use scraper::Selector;
use std::sync::LazyLock;

/// Every row of the catalogue table, header and separator rows included.
pub static ROW: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("table[class='catalogue'] tr").unwrap());

/// Cell holding the title, after its first child element.
pub const TITLE_CELL: usize = 1;

/// Cell holding the local-currency price, after its first child element.
pub const PRICE_LOCAL_CELL: usize = 2;

/// Cell holding the foreign-currency price as its leading text.
pub const PRICE_FOREIGN_CELL: usize = 3;
