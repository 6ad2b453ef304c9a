//! # leansearch-storage
//!
//! SQLite persistence for the two stores the retriever reads from:
//! the record metadata store ([`StorageEngine`]) and the flat vector
//! index ([`VectorIndex`]). Both own a [`pool::ConnectionPool`] and run
//! their own migrations on open.

pub mod engine;
pub mod migrations;
pub mod pool;
pub mod queries;
pub mod vector_index;

pub use engine::StorageEngine;
pub use vector_index::VectorIndex;

use leansearch_core::errors::{LeanSearchError, StorageError};

/// Wrap a SQLite failure message as a storage error.
pub(crate) fn to_storage_err(message: String) -> LeanSearchError {
    StorageError::SqliteError { message }.into()
}
