//! Error types for inventory operations.

use thiserror::Error;

/// Errors that can occur while adding, looking up or editing products.
///
/// # Stability
///
/// - New variants may be added in minor versions (enum is `#[non_exhaustive]`)
/// - Helper methods like `is_*()` provide stable APIs
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InventoryError {
    /// A product with this SKU is already in the inventory.
    #[error("A product with SKU {sku} already exists")]
    DuplicateSku { sku: String },

    /// A product with this name is already in the inventory.
    #[error("A product named '{name}' already exists")]
    DuplicateName { name: String },

    /// No product has this SKU.
    #[error("No product with SKU {sku}")]
    NotFound { sku: String },

    /// A field that identifies a product was empty.
    #[error("The {field} of a product must not be empty")]
    EmptyField { field: &'static str },

    /// A field contains a character the inventory file cannot store.
    #[error("The {field} '{value}' contains the reserved character {character:?}")]
    ReservedCharacter {
        field: &'static str,
        value: String,
        character: char,
    },

    /// The SKU and name indexes do not reference the same products.
    #[error("Inventory indexes disagree: {reason}")]
    IndexMismatch { reason: String },
}

impl InventoryError {
    /// Check if this error indicates the product was not found
    pub fn is_not_found(&self) -> bool {
        matches!(self, InventoryError::NotFound { .. })
    }

    /// Check if this error indicates the product already exists
    pub fn is_duplicate(&self) -> bool {
        matches!(
            self,
            InventoryError::DuplicateSku { .. } | InventoryError::DuplicateName { .. }
        )
    }

    /// Check if this error was caused by an unusable field value
    pub fn is_invalid_field(&self) -> bool {
        matches!(
            self,
            InventoryError::EmptyField { .. } | InventoryError::ReservedCharacter { .. }
        )
    }

    /// Check if this error indicates the indexes are out of sync
    pub fn is_integrity_error(&self) -> bool {
        matches!(self, InventoryError::IndexMismatch { .. })
    }
}

impl From<InventoryError> for crate::Error {
    fn from(err: InventoryError) -> Self {
        crate::Error::Inventory(err)
    }
}
