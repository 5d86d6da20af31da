//! Error types for stock changes on a single product.

use thiserror::Error;

/// Errors raised when a stock change cannot be applied to a product.
///
/// A failed change never mutates the product: the affected size keeps its
/// previous count.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProductError {
    /// Subtracting would take the size's count below zero.
    #[error("Insufficient stock for size '{size}' of product {sku}: requested {requested}, available {available}")]
    InsufficientStock {
        sku: String,
        size: String,
        requested: u32,
        available: u32,
    },

    /// Subtracting from a size the product does not stock.
    #[error("Size '{size}' does not exist for product {sku}")]
    UnknownSize { sku: String, size: String },

    /// Adding would overflow the size's counter.
    #[error("Stock for size '{size}' of product {sku} would overflow: {current} + {added}")]
    StockOverflow {
        sku: String,
        size: String,
        current: u32,
        added: u32,
    },
}

impl ProductError {
    /// Check if this error was caused by a lack of stock
    pub fn is_insufficient_stock(&self) -> bool {
        matches!(self, ProductError::InsufficientStock { .. })
    }

    /// Check if this error refers to a size the product does not carry
    pub fn is_unknown_size(&self) -> bool {
        matches!(self, ProductError::UnknownSize { .. })
    }

    /// Size the rejected change referred to
    pub fn size(&self) -> &str {
        match self {
            ProductError::InsufficientStock { size, .. }
            | ProductError::UnknownSize { size, .. }
            | ProductError::StockOverflow { size, .. } => size,
        }
    }
}

impl From<ProductError> for crate::Error {
    fn from(err: ProductError) -> Self {
        crate::Error::Product(err)
    }
}

/// Error returned when a stock operation name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown stock operation '{0}', expected 'add' or 'subtract'")]
pub struct ParseOperationError(pub String);
