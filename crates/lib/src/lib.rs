//!
//! Stockroom: an apparel inventory kept in two search-tree indexes.
//! This library provides the core components for loading, querying, editing
//! and saving a single-user product inventory.
//!
//! ## Core Concepts
//!
//! * **Products (`product::Product`)**: A SKU, a name, a description and the
//!   stock count for each size.
//! * **Indexes (`index::IndexedTree`)**: Unbalanced binary search trees keyed by
//!   string, traversed in key order.
//! * **Inventory (`inventory::Inventory`)**: Owns every product once and keeps a
//!   SKU index and a name index over them, always in step with each other.
//! * **Record format (`codec`)**: One `sku,name,description,S:10|M:5` line per
//!   product, under a fixed header.
//! * **Store (`store::InventoryStore`)**: An inventory bound to its file, saved
//!   after every change.

pub mod codec;
pub mod constants;
pub mod index;
pub mod inventory;
pub mod persistence;
pub mod product;
pub mod store;

pub use inventory::{EditReport, EditRequest, IndexKind, Inventory, ProductId};
pub use product::{Product, Sizes, StockOperation};
pub use store::{InventoryStore, StoreOptions};

/// Result type used throughout the Stockroom library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the Stockroom library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A record in the inventory file could not be parsed
    #[error("Malformed record on line {line}: {source}")]
    Record {
        line: usize,
        #[source]
        source: codec::RecordError,
    },

    /// Structured errors from the index module
    #[error(transparent)]
    Index(index::IndexError),

    /// Structured errors from stock changes on a product
    #[error(transparent)]
    Product(product::ProductError),

    /// Structured errors from the inventory module
    #[error(transparent)]
    Inventory(inventory::InventoryError),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Io(_) => "io",
            Error::Record { .. } => "codec",
            Error::Index(_) => "index",
            Error::Product(_) => "product",
            Error::Inventory(_) => "inventory",
        }
    }

    /// Check if this error indicates a product was not found.
    pub fn is_not_found(&self) -> bool {
        match self {
            Error::Inventory(err) => err.is_not_found(),
            _ => false,
        }
    }

    /// Check if this error indicates a conflict (already exists).
    pub fn is_conflict(&self) -> bool {
        match self {
            Error::Inventory(err) => err.is_duplicate(),
            _ => false,
        }
    }

    /// Check if this error is I/O related.
    pub fn is_io_error(&self) -> bool {
        matches!(self, Error::Io(_))
    }

    /// Check if this error comes from parsing the inventory file.
    pub fn is_parse_error(&self) -> bool {
        matches!(self, Error::Record { .. })
    }

    /// Check if this error is a rejected field or key.
    pub fn is_validation_error(&self) -> bool {
        match self {
            Error::Index(err) => err.is_invalid_key(),
            Error::Inventory(err) => err.is_invalid_field(),
            _ => false,
        }
    }

    /// Check if this error indicates the indexes are out of sync.
    pub fn is_integrity_error(&self) -> bool {
        match self {
            Error::Inventory(err) => err.is_integrity_error(),
            _ => false,
        }
    }

    /// Check if this error is a stock change that could not be applied.
    pub fn is_stock_error(&self) -> bool {
        matches!(self, Error::Product(_))
    }
}
