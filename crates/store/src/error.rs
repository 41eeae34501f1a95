//! Typed error enum for the store layer.
//!
//! Lets callers match on the not-found case instead of unwrapping an
//! `Option` and inventing their own error at every call site.

use thiserror::Error;

/// Store-layer error.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No record under the requested identifier.
    #[error("not found: weather record with id {id}")]
    NotFound {
        /// Identifier that was looked up.
        id: String,
    },
}
