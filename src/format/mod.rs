//! Output formatting for matched products (text, table, JSON, markdown, CSV).

use crate::catalogue::Product;
use crate::config::OutputFormat;

/// Formats products for output.
pub struct Formatter {
    format: OutputFormat,
}

impl Formatter {
    /// Creates a new formatter.
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Formats the matched products. The result ends with a newline unless it is empty.
    pub fn format_products(&self, products: &[&Product]) -> String {
        if products.is_empty() {
            return match self.format {
                OutputFormat::Text => String::new(),
                OutputFormat::Json => "[]\n".to_string(),
                OutputFormat::Csv => format!("{}\n", self.csv_header()),
                _ => "No matching products.\n".to_string(),
            };
        }

        match self.format {
            OutputFormat::Text => self.text_products(products),
            OutputFormat::Table => self.table_products(products),
            OutputFormat::Json => self.json_products(products),
            OutputFormat::Markdown => self.markdown_products(products),
            OutputFormat::Csv => self.csv_products(products),
        }
    }

    // Plain text formatting

    fn text_products(&self, products: &[&Product]) -> String {
        let mut out = String::new();

        for product in products {
            for keyword in product.keywords() {
                out.push_str(keyword);
                out.push('\n');
            }
            out.push_str("---\n");
            out.push_str(product.price_local());
            out.push('\n');
            out.push_str(product.price_foreign());
            out.push_str("\n\n");
        }

        out
    }

    // JSON formatting

    fn json_products(&self, products: &[&Product]) -> String {
        let json = serde_json::to_string_pretty(products)
            .unwrap_or_else(|_| "[]".to_string());
        format!("{}\n", json)
    }

    // Table formatting

    fn table_products(&self, products: &[&Product]) -> String {
        let local_width = 12;
        let foreign_width = 10;
        let title_width = 60;

        let mut lines = Vec::new();

        lines.push(format!(
            "{:<local_width$}  {:<foreign_width$}  {}",
            "Price", "Price (FX)", "Title"
        ));
        lines.push(format!(
            "{:-<local_width$}  {:-<foreign_width$}  {:-<title_width$}",
            "", "", ""
        ));

        for product in products {
            lines.push(format!(
                "{:>local_width$}  {:>foreign_width$}  {}",
                product.price_local(),
                product.price_foreign(),
                truncate(product.title(), title_width)
            ));
        }

        lines.push(String::new());
        lines.push(format!("Total: {} products", products.len()));

        lines.join("\n") + "\n"
    }

    // Markdown formatting

    fn markdown_products(&self, products: &[&Product]) -> String {
        let mut lines = Vec::new();

        lines.push("| Title | Price | Price (FX) |".to_string());
        lines.push("|-------|-------|------------|".to_string());

        for product in products {
            lines.push(format!(
                "| {} | {} | {} |",
                product.title().replace('|', "\\|"),
                product.price_local(),
                product.price_foreign()
            ));
        }

        lines.push(String::new());
        lines.push(format!("*{} products found*", products.len()));

        lines.join("\n") + "\n"
    }

    // CSV formatting

    fn csv_header(&self) -> String {
        "title,price_local,price_foreign,keywords".to_string()
    }

    fn csv_products(&self, products: &[&Product]) -> String {
        let mut lines = Vec::new();
        lines.push(self.csv_header());

        for product in products {
            lines.push(format!(
                "{},{},{},{}",
                Self::csv_escape(product.title()),
                Self::csv_escape(product.price_local()),
                Self::csv_escape(product.price_foreign()),
                Self::csv_escape(&product.keywords().join(";"))
            ));
        }

        lines.join("\n") + "\n"
    }

    fn csv_escape(s: &str) -> String {
        if s.contains(',') || s.contains('"') || s.contains('\n') {
            format!("\"{}\"", s.replace('"', "\"\""))
        } else {
            s.to_string()
        }
    }
}

/// Shortens `s` to at most `width` characters, marking the cut with "...".
fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        return s.to_string();
    }
    let kept: String = s.chars().take(width.saturating_sub(3)).collect();
    format!("{}...", kept)
}
