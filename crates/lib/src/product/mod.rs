//! Apparel products and their per-size stock.

use std::{fmt, str::FromStr};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

mod errors;

pub use errors::{ParseOperationError, ProductError};

/// Stock per size, kept in insertion order.
///
/// Order matters because it is the order size pairs are written to the
/// inventory file; keeping it stable makes save/load cycles reproduce the
/// same bytes.
pub type Sizes = IndexMap<String, u32>;

/// A product in the inventory.
///
/// The SKU and name identify the product in the inventory's indexes and never
/// change after creation. The description and the stock counts can be edited
/// in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    sku: String,
    name: String,
    description: String,
    sizes: Sizes,
}

impl Product {
    pub fn new(
        sku: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        sizes: Sizes,
    ) -> Self {
        Self {
            sku: sku.into(),
            name: name.into(),
            description: description.into(),
            sizes,
        }
    }

    pub fn sku(&self) -> &str {
        &self.sku
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn sizes(&self) -> &Sizes {
        &self.sizes
    }

    /// Current count for `size`, or `None` if the size is not stocked.
    pub fn stock(&self, size: &str) -> Option<u32> {
        self.sizes.get(size).copied()
    }

    /// Sum of the counts over all sizes.
    pub fn total_stock(&self) -> u64 {
        self.sizes.values().map(|&count| u64::from(count)).sum()
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    /// Increases the count for `size` by `amount`, creating the size if needed.
    ///
    /// Returns the new count.
    pub fn add_stock(&mut self, size: &str, amount: u32) -> Result<u32, ProductError> {
        let current = self.stock(size).unwrap_or(0);
        let updated = current
            .checked_add(amount)
            .ok_or_else(|| ProductError::StockOverflow {
                sku: self.sku.clone(),
                size: size.to_string(),
                current,
                added: amount,
            })?;
        self.sizes.insert(size.to_string(), updated);
        debug!(sku = %self.sku, size, updated, "added stock");
        Ok(updated)
    }

    /// Decreases the count for `size` by `amount`.
    ///
    /// Returns the new count. The count is left unchanged if the size is not
    /// stocked or holds fewer than `amount` units.
    pub fn remove_stock(&mut self, size: &str, amount: u32) -> Result<u32, ProductError> {
        let Some(count) = self.sizes.get_mut(size) else {
            return Err(ProductError::UnknownSize {
                sku: self.sku.clone(),
                size: size.to_string(),
            });
        };

        let Some(updated) = count.checked_sub(amount) else {
            return Err(ProductError::InsufficientStock {
                sku: self.sku.clone(),
                size: size.to_string(),
                requested: amount,
                available: *count,
            });
        };

        *count = updated;
        debug!(sku = %self.sku, size, updated, "removed stock");
        Ok(updated)
    }

    /// Applies `operation` with `amount` to `size`.
    pub fn apply_stock(
        &mut self,
        operation: StockOperation,
        size: &str,
        amount: u32,
    ) -> Result<u32, ProductError> {
        match operation {
            StockOperation::Add => self.add_stock(size, amount),
            StockOperation::Subtract => self.remove_stock(size, amount),
        }
    }
}

/// Direction of a stock change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StockOperation {
    Add,
    Subtract,
}

impl fmt::Display for StockOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StockOperation::Add => f.write_str("add"),
            StockOperation::Subtract => f.write_str("subtract"),
        }
    }
}

impl FromStr for StockOperation {
    type Err = ParseOperationError;

    /// Accepts `add`/`subtract` and the Spanish `añadir`/`restar`, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "add" | "añadir" => Ok(StockOperation::Add),
            "subtract" | "restar" => Ok(StockOperation::Subtract),
            _ => Err(ParseOperationError(s.to_string())),
        }
    }
}
