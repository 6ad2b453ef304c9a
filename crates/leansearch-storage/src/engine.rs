//! StorageEngine: owns the record store's ConnectionPool and implements
//! `IRecordStore`.

use std::path::Path;

use leansearch_core::config::StorageConfig;
use leansearch_core::errors::LeanSearchResult;
use leansearch_core::models::{Name, Record};
use leansearch_core::traits::IRecordStore;

use crate::migrations::{self, RECORD_MIGRATIONS};
use crate::pool::ConnectionPool;
use crate::queries::{record_crud, record_lookup};

/// The record metadata store.
pub struct StorageEngine {
    pool: ConnectionPool,
}

impl StorageEngine {
    /// Open a store backed by a file on disk with default pool settings.
    pub fn open(path: &Path) -> LeanSearchResult<Self> {
        Self::open_with_config(path, &StorageConfig::default())
    }

    /// Open a store backed by a file on disk.
    pub fn open_with_config(path: &Path, config: &StorageConfig) -> LeanSearchResult<Self> {
        let pool = ConnectionPool::open(path, config.read_pool_size, config.busy_timeout_ms)?;
        let engine = Self { pool };
        engine.initialize()?;
        Ok(engine)
    }

    /// Open an in-memory store (for testing).
    pub fn open_in_memory() -> LeanSearchResult<Self> {
        let pool = ConnectionPool::open_in_memory()?;
        let engine = Self { pool };
        engine.initialize()?;
        Ok(engine)
    }

    fn initialize(&self) -> LeanSearchResult<()> {
        self.pool.writer.with_conn_sync(|conn| {
            migrations::run_migrations(conn, RECORD_MIGRATIONS)?;
            Ok(())
        })
    }

    /// Get a reference to the connection pool (for advanced operations).
    pub fn pool(&self) -> &ConnectionPool {
        &self.pool
    }

    /// Seed one record at its ordinal within its module.
    pub fn insert_record(&self, record: &Record, index: u64) -> LeanSearchResult<()> {
        self.pool
            .writer
            .with_conn_sync(|conn| record_crud::insert_record(conn, record, index))
    }

    /// Seed many `(record, index)` pairs atomically.
    pub fn insert_records(&self, records: &[(Record, u64)]) -> LeanSearchResult<usize> {
        self.pool
            .writer
            .with_conn_sync(|conn| record_crud::insert_records(conn, records))
    }

    /// Number of stored records.
    pub fn count(&self) -> LeanSearchResult<usize> {
        self.pool.with_reader(record_lookup::count)
    }
}

impl IRecordStore for StorageEngine {
    fn fetch_by_name(&self, name: &Name) -> LeanSearchResult<Option<Record>> {
        self.pool.with_reader(|conn| record_lookup::fetch_by_name(conn, name))
    }

    fn fetch_by_module_and_index(
        &self,
        module_name: &Name,
        index: &str,
    ) -> LeanSearchResult<Option<Record>> {
        self.pool.with_reader(|conn| {
            record_lookup::fetch_by_module_and_index(conn, module_name, index)
        })
    }

    fn fetch_bulk_by_name(&self, names: &[Name]) -> LeanSearchResult<Vec<Option<Record>>> {
        self.pool.with_reader(|conn| record_lookup::fetch_bulk_by_name(conn, names))
    }
}
