use serde::{Deserialize, Serialize};

use super::{DeclarationKind, Name};

/// A knowledge-base entry: one formal declaration and its informal counterpart.
///
/// `name` is unique across the store. `(module_name, ordinal)` is also unique;
/// the ordinal lives in the store, not on the record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub module_name: Name,
    pub kind: DeclarationKind,
    pub name: Name,
    pub signature: String,
    #[serde(rename = "type")]
    pub type_: String,
    /// Definition body; absent for declarations without one (axioms, opaques).
    pub value: Option<String>,
    pub docstring: Option<String>,
    pub informal_name: String,
    pub informal_description: String,
}
