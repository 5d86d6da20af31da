//! Add command - creates a product and saves the file.

use stockroom::InventoryStore;
use tracing::debug;

use crate::cli::AddArgs;
use crate::commands::inventory::print_product;
use crate::output::OutputFormat;

/// Run the add command
pub fn run(
    store: &mut InventoryStore,
    args: &AddArgs,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let sku = match &args.sku {
        Some(sku) => sku.clone(),
        None => {
            let sku = store.allocate_sku()?;
            debug!(%sku, "allocated SKU");
            sku
        }
    };

    store.add_product(
        sku.as_str(),
        args.name.as_str(),
        args.description.as_str(),
        args.sizes(),
    )?;

    let product = store
        .search_by_sku(&sku)
        .ok_or_else(|| format!("product {sku} missing after add"))?;
    if format == OutputFormat::Human {
        println!("Added product {sku}");
        println!();
    }
    print_product(product, format)
}
