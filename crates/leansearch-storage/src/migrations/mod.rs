//! Versioned schema migrations, tracked in `PRAGMA user_version`.
//!
//! The record store and the vector index live in separate files and carry
//! separate migration sets. Versions are numbered across both sets.

mod v001_record_table;
mod v002_embedding_table;

use rusqlite::Connection;
use tracing::info;

use leansearch_core::errors::{LeanSearchResult, StorageError};

use crate::to_storage_err;

/// A single forward migration.
pub struct Migration {
    pub version: u32,
    pub name: &'static str,
    pub apply: fn(&Connection) -> LeanSearchResult<()>,
}

/// Migrations for the record metadata store.
pub const RECORD_MIGRATIONS: &[Migration] = &[Migration {
    version: 1,
    name: "record_table",
    apply: v001_record_table::migrate,
}];

/// Migrations for the vector index.
pub const INDEX_MIGRATIONS: &[Migration] = &[Migration {
    version: 2,
    name: "embedding_table",
    apply: v002_embedding_table::migrate,
}];

/// Current schema version of a database.
pub fn current_version(conn: &Connection) -> LeanSearchResult<u32> {
    conn.pragma_query_value(None, "user_version", |row| row.get(0))
        .map_err(|e| to_storage_err(e.to_string()))
}

/// Apply every migration newer than the database's schema version.
pub fn run_migrations(conn: &Connection, migrations: &[Migration]) -> LeanSearchResult<u32> {
    let start = current_version(conn)?;
    let mut version = start;
    for migration in migrations.iter().filter(|m| m.version > start) {
        (migration.apply)(conn).map_err(|e| StorageError::MigrationFailed {
            version: migration.version,
            reason: e.to_string(),
        })?;
        conn.pragma_update(None, "user_version", migration.version)
            .map_err(|e| to_storage_err(e.to_string()))?;
        version = migration.version;
        info!(version, name = migration.name, "applied migration");
    }
    Ok(version)
}
