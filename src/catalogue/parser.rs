//! HTML parser for the catalogue price table.

use crate::catalogue::error::{ParseError, ShapeMismatch};
use crate::catalogue::models::RawRow;
use crate::catalogue::selectors::{self, PRICE_FOREIGN_CELL, PRICE_LOCAL_CELL, TITLE_CELL};
use scraper::{ElementRef, Html};
use tracing::{debug, trace, warn};

/// Rows extracted from one page, plus how many rows did not fit the layout.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseReport {
    pub rows: Vec<RawRow>,
    pub skipped: usize,
}

impl ParseReport {
    pub fn count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Extracts product rows from the catalogue table.
///
/// Cells are located by fixed position. Rows that do not have that shape
/// (header and separator rows, broken markup) are skipped and counted, never
/// reported as errors.
#[derive(Debug, Clone, Copy, Default)]
pub struct TableParser;

impl TableParser {
    pub fn new() -> Self {
        Self
    }

    /// Parses a full HTML page into raw rows, in document order.
    pub fn parse(&self, html: &str) -> Result<ParseReport, ParseError> {
        if html.trim().is_empty() {
            return Err(ParseError::EmptyDocument);
        }

        let document = Html::parse_document(html);
        let mut report = ParseReport::default();
        let mut seen = 0usize;

        for row in document.select(&selectors::ROW) {
            seen += 1;
            match self.parse_row(row) {
                Ok(raw) => {
                    trace!("Parsed row: {}", raw.title.trim());
                    report.rows.push(raw);
                }
                Err(reason) => {
                    trace!("Skipping row {}: {}", seen, reason);
                    report.skipped += 1;
                }
            }
        }

        if seen == 0 {
            warn!("No catalogue table rows found on page");
        }

        debug!(
            "Parsed {} rows ({} skipped)",
            report.count(),
            report.skipped
        );

        Ok(report)
    }

    /// Reads the title, local price and foreign price out of a single row.
    pub fn parse_row(&self, row: ElementRef) -> Result<RawRow, ShapeMismatch> {
        let cells: Vec<ElementRef> = element_children(row).collect();
        let cell = |index: usize| {
            cells
                .get(index)
                .copied()
                .ok_or(ShapeMismatch::MissingCell(index))
        };

        let title = tail_of_first_child(cell(TITLE_CELL)?, TITLE_CELL)?;
        let price_local = tail_of_first_child(cell(PRICE_LOCAL_CELL)?, PRICE_LOCAL_CELL)?;
        let price_foreign = leading_text(cell(PRICE_FOREIGN_CELL)?)
            .ok_or(ShapeMismatch::MissingText(PRICE_FOREIGN_CELL))?;

        Ok(RawRow {
            title,
            price_local,
            price_foreign,
        })
    }
}

fn element_children(element: ElementRef<'_>) -> impl Iterator<Item = ElementRef<'_>> {
    element.children().filter_map(ElementRef::wrap)
}

/// Text node right after the cell's first child element.
fn tail_of_first_child(cell: ElementRef, index: usize) -> Result<String, ShapeMismatch> {
    let first = element_children(cell)
        .next()
        .ok_or(ShapeMismatch::MissingChild(index))?;

    first
        .next_sibling()
        .and_then(|node| node.value().as_text().map(|text| text.text.to_string()))
        .ok_or(ShapeMismatch::MissingText(index))
}

/// Text node that opens the cell, before any child element.
fn leading_text(cell: ElementRef) -> Option<String> {
    cell.first_child()
        .and_then(|node| node.value().as_text().map(|text| text.text.to_string()))
}
