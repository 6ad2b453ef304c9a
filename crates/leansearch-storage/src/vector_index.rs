//! VectorIndex: owns the index's ConnectionPool and implements
//! `IVectorIndex` as an exact flat scan.

use std::path::Path;

use tracing::debug;

use leansearch_core::config::StorageConfig;
use leansearch_core::errors::{IndexError, LeanSearchError, LeanSearchResult};
use leansearch_core::models::{DistanceMetric, Neighbor};
use leansearch_core::traits::IVectorIndex;

use crate::migrations::{self, INDEX_MIGRATIONS};
use crate::pool::ConnectionPool;
use crate::queries::vector_search;

/// Flat vector index stored in its own SQLite file.
pub struct VectorIndex {
    pool: ConnectionPool,
    metric: DistanceMetric,
}

impl VectorIndex {
    /// Open an index backed by a file on disk.
    pub fn open(path: &Path, metric: DistanceMetric) -> LeanSearchResult<Self> {
        let defaults = StorageConfig::default();
        let pool = ConnectionPool::open(path, defaults.read_pool_size, defaults.busy_timeout_ms)
            .map_err(unavailable)?;
        let index = Self { pool, metric };
        index.initialize()?;
        Ok(index)
    }

    /// Open an in-memory index (for testing).
    pub fn open_in_memory(metric: DistanceMetric) -> LeanSearchResult<Self> {
        let pool = ConnectionPool::open_in_memory()?;
        let index = Self { pool, metric };
        index.initialize()?;
        Ok(index)
    }

    fn initialize(&self) -> LeanSearchResult<()> {
        self.pool.writer.with_conn_sync(|conn| {
            migrations::run_migrations(conn, INDEX_MIGRATIONS)?;
            Ok(())
        })
    }

    pub fn metric(&self) -> DistanceMetric {
        self.metric
    }

    /// Insert or replace the vector for `doc_id`.
    pub fn upsert(&self, doc_id: &str, vector: &[f32]) -> LeanSearchResult<()> {
        self.pool
            .writer
            .with_conn_sync(|conn| vector_search::upsert_embedding(conn, doc_id, vector))
    }

    /// Insert or replace many vectors atomically.
    pub fn upsert_batch(&self, entries: &[(String, Vec<f32>)]) -> LeanSearchResult<usize> {
        self.pool
            .writer
            .with_conn_sync(|conn| vector_search::upsert_embeddings(conn, entries))
    }

    /// Number of stored vectors.
    pub fn count(&self) -> LeanSearchResult<usize> {
        self.pool.with_reader(vector_search::count).map_err(unavailable)
    }
}

impl IVectorIndex for VectorIndex {
    fn query(&self, vectors: &[Vec<f32>], k: usize) -> LeanSearchResult<Vec<Vec<Neighbor>>> {
        if k == 0 {
            return Err(LeanSearchError::invalid_argument("k must be positive"));
        }
        if vectors.iter().any(|v| v.is_empty()) {
            return Err(LeanSearchError::invalid_argument(
                "query vectors must be non-empty",
            ));
        }
        if vectors.is_empty() {
            return Ok(Vec::new());
        }

        let results = self
            .pool
            .with_reader(|conn| vector_search::search_batch(conn, vectors, k, self.metric))
            .map_err(unavailable)?;

        debug!(
            queries = vectors.len(),
            k,
            metric = self.metric.as_str(),
            hits = results.iter().map(Vec::len).sum::<usize>(),
            "vector index query complete"
        );
        Ok(results)
    }
}

/// Connection-level storage failures surface as an unavailable index.
fn unavailable(err: LeanSearchError) -> LeanSearchError {
    match err {
        LeanSearchError::StorageError(e) => IndexError::Unavailable {
            reason: e.to_string(),
        }
        .into(),
        other => other,
    }
}
