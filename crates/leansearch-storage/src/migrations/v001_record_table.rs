//! v001: record table with name and (module_name, index) lookup indices.
//!
//! Names are stored as their JSON component arrays. The lookup indices are
//! non-unique; duplicate keys surface as integrity errors on read.

use rusqlite::Connection;

use leansearch_core::LeanSearchResult;

use crate::to_storage_err;

pub fn migrate(conn: &Connection) -> LeanSearchResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS record (
            module_name          TEXT NOT NULL,
            "index"              INTEGER NOT NULL,
            kind                 TEXT NOT NULL,
            name                 TEXT NOT NULL,
            signature            TEXT NOT NULL,
            type                 TEXT NOT NULL,
            value                TEXT,
            docstring            TEXT,
            informal_name        TEXT NOT NULL,
            informal_description TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_record_name ON record(name);
        CREATE INDEX IF NOT EXISTS idx_record_module_index ON record(module_name, "index");
        "#,
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}
