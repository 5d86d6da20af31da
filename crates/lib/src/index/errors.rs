//! Error types for the search-tree index.

use thiserror::Error;

/// Errors that can occur while modifying an [`IndexedTree`](super::IndexedTree).
///
/// Lookups never fail; a missing key is reported as `None`.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IndexError {
    /// The key was empty and was rejected before touching the tree.
    #[error("Index keys must not be empty")]
    EmptyKey,
}

impl IndexError {
    /// Check if this error was caused by an unusable key
    pub fn is_invalid_key(&self) -> bool {
        matches!(self, IndexError::EmptyKey)
    }
}

impl From<IndexError> for crate::Error {
    fn from(err: IndexError) -> Self {
        crate::Error::Index(err)
    }
}
