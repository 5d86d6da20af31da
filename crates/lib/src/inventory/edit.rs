//! Requests and outcomes for editing an existing product.

use serde::Serialize;

use crate::product::{ProductError, Sizes, StockOperation};

/// Changes to apply to one product.
///
/// Every delta uses the same [`StockOperation`]. Deltas are applied in the
/// order they were added.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditRequest {
    pub(crate) description: Option<String>,
    pub(crate) operation: StockOperation,
    pub(crate) deltas: Sizes,
}

impl EditRequest {
    pub fn new(operation: StockOperation) -> Self {
        Self {
            description: None,
            operation,
            deltas: Sizes::new(),
        }
    }

    /// Replaces the description. An empty string leaves it unchanged.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Adds a stock delta for `size`; a later delta for the same size replaces it.
    pub fn with_delta(mut self, size: impl Into<String>, amount: u32) -> Self {
        self.deltas.insert(size.into(), amount);
        self
    }

    /// Adds every delta in `deltas`.
    pub fn with_deltas(mut self, deltas: Sizes) -> Self {
        self.deltas.extend(deltas);
        self
    }

    pub fn operation(&self) -> StockOperation {
        self.operation
    }

    pub fn deltas(&self) -> &Sizes {
        &self.deltas
    }

    /// The description that will be written, if any.
    pub fn new_description(&self) -> Option<&str> {
        self.description.as_deref().filter(|d| !d.is_empty())
    }
}

/// A stock change that was applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StockChange {
    pub size: String,
    /// Count for the size after the change.
    pub quantity: u32,
}

/// Outcome of [`Inventory::edit_product`](super::Inventory::edit_product).
///
/// Deltas are independent: a rejected delta does not undo or prevent the
/// others, so a report can list both applied and rejected changes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EditReport {
    pub description_updated: bool,
    pub applied: Vec<StockChange>,
    pub rejected: Vec<ProductError>,
}

impl EditReport {
    /// Returns `true` if every requested change was applied.
    pub fn is_complete(&self) -> bool {
        self.rejected.is_empty()
    }
}
