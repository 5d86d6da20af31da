//! Edit command - updates a product's description and stock, then saves.

use stockroom::{EditReport, EditRequest, InventoryStore, StockOperation};

use crate::cli::{EditArgs, collect_sizes};
use crate::output::{OutputFormat, print_json, print_table};

/// Run the edit command
///
/// Additions are applied before subtractions. Each stock change stands on its
/// own: a subtraction larger than the stock is reported and skipped.
pub fn run(
    store: &mut InventoryStore,
    args: &EditArgs,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    if args.description.is_none() && args.add.is_empty() && args.subtract.is_empty() {
        return Err("nothing to change; pass --description, --add or --subtract".into());
    }

    let mut additions = EditRequest::new(StockOperation::Add)
        .with_deltas(collect_sizes(&args.add));
    if let Some(description) = &args.description {
        additions = additions.with_description(description.as_str());
    }
    let mut report = store.edit_product(&args.sku, &additions)?;

    if !args.subtract.is_empty() {
        let subtractions = EditRequest::new(StockOperation::Subtract)
            .with_deltas(collect_sizes(&args.subtract));
        let second = store.edit_product(&args.sku, &subtractions)?;
        merge(&mut report, second);
    }

    match format {
        OutputFormat::Human => {
            if report.description_updated {
                println!("Description updated.");
            }
            let rows: Vec<_> = report
                .applied
                .iter()
                .map(|change| vec![change.size.clone(), change.quantity.to_string()])
                .collect();
            print_table(&["SIZE", "STOCK"], &rows);
            for rejected in &report.rejected {
                eprintln!("rejected: {rejected}");
            }
        }
        OutputFormat::Json => {
            let rejected: Vec<String> = report.rejected.iter().map(ToString::to_string).collect();
            print_json(&serde_json::json!({
                "sku": args.sku,
                "description_updated": report.description_updated,
                "applied": report.applied,
                "rejected": rejected,
            }))?;
        }
    }

    Ok(())
}

fn merge(report: &mut EditReport, other: EditReport) {
    report.description_updated |= other.description_updated;
    report.applied.extend(other.applied);
    report.rejected.extend(other.rejected);
}
