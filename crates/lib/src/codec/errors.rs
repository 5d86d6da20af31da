//! Error types for decoding inventory records.

use thiserror::Error;

/// Errors produced while decoding a single record line.
///
/// These carry no line number; the loader attaches it when wrapping them in
/// [`crate::Error::Record`].
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    /// The line has fewer than the four required fields.
    #[error("Expected at least {expected} comma-separated fields, found {found}")]
    TooFewFields { expected: usize, found: usize },

    /// A size entry lacks the `size:quantity` separator.
    #[error("Size entry '{entry}' is not in 'size:quantity' form")]
    MalformedSize { entry: String },

    /// A quantity or SKU is not a non-negative integer.
    #[error("Invalid number '{value}' for {field}")]
    MalformedNumber { field: String, value: String },
}

impl RecordError {
    /// Check if this error is a field-count problem.
    ///
    /// Such lines are always skipped by the loader.
    pub fn is_too_few_fields(&self) -> bool {
        matches!(self, RecordError::TooFewFields { .. })
    }

    /// Check if this error comes from the contents of the size blob or a numeric field
    pub fn is_malformed_value(&self) -> bool {
        matches!(
            self,
            RecordError::MalformedSize { .. } | RecordError::MalformedNumber { .. }
        )
    }
}
