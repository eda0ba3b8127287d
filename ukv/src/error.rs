//! Façade error taxonomy.
//!
//! Validation failures short-circuit before any backend I/O; backend and
//! serialization failures pass through transparently so callers see the
//! underlying error unmodified.

use thiserror::Error;

use ukv_backend::StoreError;
use ukv_common::Action;

/// Result type for façade operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Errors surfaced by [`crate::storage`].
#[derive(Debug, Error)]
pub enum StorageError {
    /// The action field is present but not a string.
    #[error("invalid action: {0}. should be a string")]
    InvalidActionType(serde_json::Value),

    /// The action string is not one of the recognized tags.
    #[error("unsupported action: {0}")]
    UnsupportedAction(String),

    /// The `init` medium is absent or not a recognized backend tag.
    #[error("unsupported medium: {0:?}")]
    UnsupportedMedium(String),

    /// The operation needs a key and none was supplied.
    #[error("key required for {0}")]
    MissingKey(Action),

    /// Failure reported by the underlying store.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The stored text could not be decoded, or the value could not be
    /// encoded.
    #[error(transparent)]
    Codec(#[from] serde_json::Error),
}

impl StorageError {
    /// True for errors raised by request validation, before any backend
    /// interaction.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            StorageError::InvalidActionType(_) | StorageError::UnsupportedAction(_)
        )
    }
}
