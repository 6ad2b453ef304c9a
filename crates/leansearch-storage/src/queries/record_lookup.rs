//! Point lookups on the record table: by name and by (module, index).

use rusqlite::{params, Connection, Row, ToSql};
use tracing::debug;

use leansearch_core::errors::{LeanSearchError, LeanSearchResult};
use leansearch_core::models::{DeclarationKind, Name, Record};

use crate::to_storage_err;

const RECORD_COLUMNS: &str = "module_name, kind, name, signature, type, value, docstring,
                              informal_name, informal_description";

/// Raw column values, decoded into a `Record` outside the rusqlite closure
/// so decode failures can be reported as integrity errors.
struct RecordRow {
    module_name: String,
    kind: String,
    name: String,
    signature: String,
    type_: String,
    value: Option<String>,
    docstring: Option<String>,
    informal_name: String,
    informal_description: String,
}

impl RecordRow {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            module_name: row.get(0)?,
            kind: row.get(1)?,
            name: row.get(2)?,
            signature: row.get(3)?,
            type_: row.get(4)?,
            value: row.get(5)?,
            docstring: row.get(6)?,
            informal_name: row.get(7)?,
            informal_description: row.get(8)?,
        })
    }

    fn into_record(self) -> LeanSearchResult<Record> {
        Ok(Record {
            module_name: decode_name(&self.module_name)?,
            kind: self.kind.parse::<DeclarationKind>()?,
            name: decode_name(&self.name)?,
            signature: self.signature,
            type_: self.type_,
            value: self.value,
            docstring: self.docstring,
            informal_name: self.informal_name,
            informal_description: self.informal_description,
        })
    }
}

fn decode_name(json: &str) -> LeanSearchResult<Name> {
    serde_json::from_str(json)
        .map_err(|e| LeanSearchError::integrity(format!("stored name {json} is not valid: {e}")))
}

/// Run a keyed lookup expecting at most one row. Two or more rows is an
/// integrity violation; `key` names the lookup in the error.
fn fetch_unique(
    conn: &Connection,
    filter: &str,
    params: &[&dyn ToSql],
    key: &str,
) -> LeanSearchResult<Option<Record>> {
    let mut stmt = conn
        .prepare_cached(&format!(
            "SELECT {RECORD_COLUMNS} FROM record WHERE {filter} LIMIT 2"
        ))
        .map_err(|e| to_storage_err(e.to_string()))?;

    let rows = stmt
        .query_map(params, RecordRow::from_row)
        .map_err(|e| to_storage_err(e.to_string()))?
        .collect::<rusqlite::Result<Vec<_>>>()
        .map_err(|e| to_storage_err(e.to_string()))?;

    let mut rows = rows.into_iter();
    match (rows.next(), rows.next()) {
        (None, _) => {
            debug!(key, "record not found");
            Ok(None)
        }
        (Some(row), None) => row.into_record().map(Some),
        (Some(_), Some(_)) => Err(LeanSearchError::integrity(format!(
            "multiple records stored for {key}"
        ))),
    }
}

/// Fetch the record with the given fully-qualified name.
pub fn fetch_by_name(conn: &Connection, name: &Name) -> LeanSearchResult<Option<Record>> {
    let key = name.to_json()?;
    fetch_unique(conn, "name = ?1", params![key], &format!("name {name}"))
}

/// Fetch the record at `index` within `module_name`. The index token is
/// bound as given; the column's integer affinity applies the comparison.
pub fn fetch_by_module_and_index(
    conn: &Connection,
    module_name: &Name,
    index: &str,
) -> LeanSearchResult<Option<Record>> {
    let module_key = module_name.to_json()?;
    fetch_unique(
        conn,
        r#"module_name = ?1 AND "index" = ?2"#,
        params![module_key, index],
        &format!("module {module_name} index {index}"),
    )
}

/// Independent name lookups on one connection, one slot per input.
pub fn fetch_bulk_by_name(
    conn: &Connection,
    names: &[Name],
) -> LeanSearchResult<Vec<Option<Record>>> {
    names.iter().map(|name| fetch_by_name(conn, name)).collect()
}

/// Number of stored records.
pub fn count(conn: &Connection) -> LeanSearchResult<usize> {
    let n: i64 = conn
        .query_row("SELECT COUNT(*) FROM record", [], |row| row.get(0))
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(n as usize)
}
