use crate::errors::LeanSearchResult;
use crate::models::{Name, Record};

/// Point lookups against the metadata store. Read-only.
///
/// A miss is `Ok(None)`. More than one row for a key is a
/// `DataIntegrity` error, never an arbitrary pick.
pub trait IRecordStore: Send + Sync {
    /// Exact lookup by fully-qualified declaration name.
    fn fetch_by_name(&self, name: &Name) -> LeanSearchResult<Option<Record>>;

    /// Lookup by module and ordinal token, as addressed by the vector index.
    fn fetch_by_module_and_index(
        &self,
        module_name: &Name,
        index: &str,
    ) -> LeanSearchResult<Option<Record>>;

    /// Independent lookups by name, one slot per input.
    fn fetch_bulk_by_name(&self, names: &[Name]) -> LeanSearchResult<Vec<Option<Record>>> {
        names.iter().map(|n| self.fetch_by_name(n)).collect()
    }
}
