//! v002: embedding table keyed by document id.

use rusqlite::Connection;

use leansearch_core::LeanSearchResult;

use crate::to_storage_err;

pub fn migrate(conn: &Connection) -> LeanSearchResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS embedding (
            doc_id     TEXT PRIMARY KEY,
            vector     BLOB NOT NULL,
            dimensions INTEGER NOT NULL
        );
        ",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}
