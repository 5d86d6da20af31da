//! Read-only commands: listing, lookups, SKU scan and the index check.

use stockroom::{InventoryStore, Product};

use crate::cli::{FindArgs, ListArgs, ListOrder, ShowArgs};
use crate::output::{OutputFormat, PRODUCT_HEADERS, print_json, print_table, product_row};

/// Run the `list` command
pub fn list(
    store: &InventoryStore,
    args: &ListArgs,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let products: Vec<&Product> = store.list_in_order(args.by == ListOrder::Sku).collect();

    match format {
        OutputFormat::Human => {
            if products.is_empty() {
                println!("No products found.");
                return Ok(());
            }
            let rows: Vec<_> = products.iter().map(|p| product_row(p)).collect();
            print_table(&PRODUCT_HEADERS, &rows);
        }
        OutputFormat::Json => print_json(&products)?,
    }

    Ok(())
}

/// Run the `show` command
pub fn show(
    store: &InventoryStore,
    args: &ShowArgs,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let product = store
        .search_by_sku(&args.sku)
        .ok_or_else(|| format!("no product with SKU {}", args.sku))?;
    print_product(product, format)
}

/// Run the `find` command
pub fn find(
    store: &InventoryStore,
    args: &FindArgs,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let product = store
        .search_by_name(&args.name)
        .ok_or_else(|| format!("no product named '{}'", args.name))?;
    print_product(product, format)
}

/// Run the `next-sku` command
pub fn next_sku(
    store: &InventoryStore,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let sku = store.next_sku_after_max()?;
    match format {
        OutputFormat::Human => println!("{sku}"),
        OutputFormat::Json => print_json(&serde_json::json!({ "sku": sku }))?,
    }
    Ok(())
}

/// Run the `check` command
pub fn check(
    store: &InventoryStore,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    store.inventory().check_consistency()?;
    let products = store.inventory().len();
    match format {
        OutputFormat::Human => println!("ok: {products} products, indexes consistent"),
        OutputFormat::Json => print_json(&serde_json::json!({
            "status": "ok",
            "products": products,
        }))?,
    }
    Ok(())
}

pub(crate) fn print_product(
    product: &Product,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    match format {
        OutputFormat::Human => {
            println!("SKU:          {}", product.sku());
            println!("Name:         {}", product.name());
            println!("Description:  {}", product.description());
            let rows: Vec<_> = product
                .sizes()
                .iter()
                .map(|(size, quantity)| vec![size.clone(), quantity.to_string()])
                .collect();
            if rows.is_empty() {
                println!("Sizes:        none");
            } else {
                println!();
                print_table(&["SIZE", "STOCK"], &rows);
            }
        }
        OutputFormat::Json => print_json(product)?,
    }
    Ok(())
}
