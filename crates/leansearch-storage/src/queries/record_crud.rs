//! Seeding writes for the record table.

use rusqlite::{params, Connection};

use leansearch_core::errors::LeanSearchResult;
use leansearch_core::models::Record;

use crate::to_storage_err;

/// Insert one record at the given ordinal within its module.
pub fn insert_record(conn: &Connection, record: &Record, index: u64) -> LeanSearchResult<()> {
    conn.execute(
        r#"INSERT INTO record (
            module_name, "index", kind, name, signature, type, value, docstring,
            informal_name, informal_description
        ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)"#,
        params![
            record.module_name.to_json()?,
            index as i64,
            record.kind.as_str(),
            record.name.to_json()?,
            record.signature,
            record.type_,
            record.value,
            record.docstring,
            record.informal_name,
            record.informal_description,
        ],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

/// Insert many `(record, index)` pairs in one transaction.
pub fn insert_records(conn: &Connection, records: &[(Record, u64)]) -> LeanSearchResult<usize> {
    let tx = conn
        .unchecked_transaction()
        .map_err(|e| to_storage_err(format!("insert_records begin: {e}")))?;

    for (record, index) in records {
        if let Err(e) = insert_record(&tx, record, *index) {
            let _ = tx.rollback();
            return Err(e);
        }
    }

    tx.commit()
        .map_err(|e| to_storage_err(format!("insert_records commit: {e}")))?;
    Ok(records.len())
}
