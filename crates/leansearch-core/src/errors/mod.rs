//! Error taxonomy. `LeanSearchError` is the top-level error; each subsystem
//! has its own enum that converts into it.
//!
//! A lookup miss is not an error: every lookup site returns `Option`.

mod embedding_error;
mod index_error;
mod storage_error;

pub use embedding_error::EmbeddingError;
pub use index_error::IndexError;
pub use storage_error::StorageError;

/// Result alias used across the workspace.
pub type LeanSearchResult<T> = Result<T, LeanSearchError>;

/// Top-level error for every LeanSearch operation.
#[derive(Debug, thiserror::Error)]
pub enum LeanSearchError {
    #[error("malformed document identifier {doc_id:?}: {reason}")]
    MalformedIdentifier { doc_id: String, reason: String },

    #[error("invalid name {input:?}: {reason}")]
    InvalidName { input: String, reason: String },

    /// The vector index and the metadata store disagree, or the store holds
    /// duplicate rows for a unique key.
    #[error("data integrity violation: {details}")]
    DataIntegrity { details: String },

    #[error("invalid argument: {reason}")]
    InvalidArgument { reason: String },

    #[error("embedding failure: {0}")]
    EmbeddingError(#[from] EmbeddingError),

    #[error("vector index unavailable: {0}")]
    IndexError(#[from] IndexError),

    #[error("storage error: {0}")]
    StorageError(#[from] StorageError),

    #[error("config error: {0}")]
    ConfigError(String),
}

impl LeanSearchError {
    /// Shorthand for a data integrity violation.
    pub fn integrity(details: impl Into<String>) -> Self {
        Self::DataIntegrity {
            details: details.into(),
        }
    }

    /// Shorthand for an invalid argument.
    pub fn invalid_argument(reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            reason: reason.into(),
        }
    }
}
