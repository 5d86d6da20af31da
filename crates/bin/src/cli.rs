//! CLI argument definitions for the Stockroom binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use stockroom::Sizes;

use crate::output::OutputFormat;

/// Index to walk when listing products
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ListOrder {
    #[default]
    Sku,
    Name,
}

/// Stockroom apparel inventory
#[derive(Parser, Debug)]
#[command(name = "stockroom")]
#[command(about = "Stockroom: apparel inventory kept in a single CSV file")]
#[command(version)]
pub struct Cli {
    /// Inventory file to load and save
    #[arg(
        short,
        long,
        global = true,
        default_value = "inventario.csv",
        env = "STOCKROOM_FILE"
    )]
    pub file: PathBuf,

    /// Skip records with malformed quantities instead of failing the load
    #[arg(long, global = true, env = "STOCKROOM_LENIENT")]
    pub lenient: bool,

    /// Save through a temporary file and rename it over the inventory
    #[arg(long, global = true, env = "STOCKROOM_ATOMIC_SAVE")]
    pub atomic_save: bool,

    /// Output format
    #[arg(long, global = true, default_value = "human")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List every product
    List(ListArgs),
    /// Show the product with a SKU
    Show(ShowArgs),
    /// Find a product by name, ignoring case
    Find(FindArgs),
    /// Add a new product
    Add(AddArgs),
    /// Change a product's description or stock
    Edit(EditArgs),
    /// Print the largest SKU in the file
    NextSku,
    /// Verify that the inventory indexes agree
    Check,
}

/// Arguments for the list command
#[derive(clap::Args, Debug)]
pub struct ListArgs {
    /// Order of the listing
    #[arg(long, default_value = "sku")]
    pub by: ListOrder,
}

/// Arguments for the show command
#[derive(clap::Args, Debug)]
pub struct ShowArgs {
    pub sku: String,
}

/// Arguments for the find command
#[derive(clap::Args, Debug)]
pub struct FindArgs {
    pub name: String,
}

/// Arguments for the add command
#[derive(clap::Args, Debug)]
pub struct AddArgs {
    #[arg(long)]
    pub name: String,

    #[arg(long)]
    pub description: String,

    /// Numeric SKU for the product. Defaults to one past the largest in the
    /// file, which can only be found while every SKU is numeric.
    #[arg(long, value_parser = parse_sku)]
    pub sku: Option<String>,

    /// Initial stock as SIZE:QUANTITY, repeatable
    #[arg(long = "size", value_name = "SIZE:QUANTITY", value_parser = parse_size)]
    pub sizes: Vec<(String, u32)>,
}

impl AddArgs {
    pub fn sizes(&self) -> Sizes {
        collect_sizes(&self.sizes)
    }
}

/// Arguments for the edit command
#[derive(clap::Args, Debug)]
pub struct EditArgs {
    pub sku: String,

    /// Replacement description
    #[arg(long)]
    pub description: Option<String>,

    /// Stock to add as SIZE:QUANTITY, repeatable
    #[arg(long = "add", value_name = "SIZE:QUANTITY", value_parser = parse_size)]
    pub add: Vec<(String, u32)>,

    /// Stock to remove as SIZE:QUANTITY, repeatable
    #[arg(long = "subtract", value_name = "SIZE:QUANTITY", value_parser = parse_size)]
    pub subtract: Vec<(String, u32)>,
}

/// Accepts a SKU made only of ASCII digits.
pub fn parse_sku(value: &str) -> Result<String, String> {
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(format!("SKU must be a non-negative integer, got '{value}'"));
    }
    Ok(value.to_string())
}

/// Parses a `SIZE:QUANTITY` argument such as `M:10`.
pub fn parse_size(value: &str) -> Result<(String, u32), String> {
    let (size, quantity) = value
        .split_once(':')
        .ok_or_else(|| format!("expected SIZE:QUANTITY, got '{value}'"))?;
    let size = size.trim();
    if size.is_empty() {
        return Err(format!("missing size in '{value}'"));
    }
    let quantity = quantity
        .trim()
        .parse::<u32>()
        .map_err(|e| format!("invalid quantity in '{value}': {e}"))?;
    Ok((size.to_string(), quantity))
}

/// Collects repeated size arguments. A size given twice keeps its first
/// position and sums the quantities.
pub fn collect_sizes(entries: &[(String, u32)]) -> Sizes {
    let mut sizes = Sizes::new();
    for (size, quantity) in entries {
        let slot = sizes.entry(size.clone()).or_insert(0);
        *slot = slot.saturating_add(*quantity);
    }
    sizes
}
