//! Backend failure taxonomy.
//!
//! Everything an underlying store can report flows through [`StoreError`]
//! unchanged; the façade never retries or rewrites these.

use thiserror::Error;

/// Result type for backend operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors surfaced by a concrete backend.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Network or IO failure while reading or writing.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// RESP framing or parse error.
    #[error("protocol error")]
    Protocol,

    /// The server returned an error reply.
    #[error("server error: {0}")]
    Server(String),

    /// Reply type did not match the issued command.
    #[error("unexpected response")]
    UnexpectedResponse,

    /// A required connection environment variable is not set.
    #[error("missing environment variable {0}")]
    MissingEnv(&'static str),

    /// The storage-container identifier is not a plain identifier.
    #[error("invalid container id: {0:?}")]
    InvalidContainerId(String),

    /// Relational store failure.
    #[error(transparent)]
    Sql(#[from] sqlx::Error),
}
