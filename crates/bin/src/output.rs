//! Output formatting helpers for human-readable and JSON output.

use clap::ValueEnum;
use serde::Serialize;
use stockroom::{Product, codec::encode_sizes};

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned tables
    Human,
    /// One JSON document per command
    Json,
}

/// Print a table with aligned columns in human-readable format.
///
/// `headers` and each row in `rows` must have the same length.
pub fn print_table(headers: &[&str], rows: &[Vec<String>]) {
    if rows.is_empty() {
        return;
    }

    let col_count = headers.len();
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate().take(col_count) {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    println!("{}", format_row(headers.iter().copied(), &widths));
    for row in rows {
        println!("{}", format_row(row.iter().map(String::as_str), &widths));
    }
}

// Pads by character count so accented names line up.
fn format_row<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    let line: Vec<String> = cells
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect();
    line.join("  ").trim_end().to_string()
}

pub const PRODUCT_HEADERS: [&str; 5] = ["SKU", "NAME", "DESCRIPTION", "SIZES", "TOTAL"];

/// One table row for a product.
pub fn product_row(product: &Product) -> Vec<String> {
    vec![
        product.sku().to_string(),
        product.name().to_string(),
        product.description().to_string(),
        encode_sizes(product.sizes()),
        product.total_stock().to_string(),
    ]
}

/// Prints `value` as a single line of JSON.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string(value)?);
    Ok(())
}
