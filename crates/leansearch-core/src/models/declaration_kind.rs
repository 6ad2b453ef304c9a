use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::LeanSearchError;

/// Syntactic role of a formal declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DeclarationKind {
    Abbrev,
    Axiom,
    ClassInductive,
    Definition,
    Example,
    Inductive,
    Instance,
    Opaque,
    Structure,
    Theorem,
    ProofWrapper,
}

impl DeclarationKind {
    pub const ALL: [DeclarationKind; 11] = [
        Self::Abbrev,
        Self::Axiom,
        Self::ClassInductive,
        Self::Definition,
        Self::Example,
        Self::Inductive,
        Self::Instance,
        Self::Opaque,
        Self::Structure,
        Self::Theorem,
        Self::ProofWrapper,
    ];

    /// Stored/serialized tag.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Abbrev => "abbrev",
            Self::Axiom => "axiom",
            Self::ClassInductive => "classInductive",
            Self::Definition => "definition",
            Self::Example => "example",
            Self::Inductive => "inductive",
            Self::Instance => "instance",
            Self::Opaque => "opaque",
            Self::Structure => "structure",
            Self::Theorem => "theorem",
            Self::ProofWrapper => "proofWrapper",
        }
    }
}

impl fmt::Display for DeclarationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeclarationKind {
    type Err = LeanSearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| LeanSearchError::integrity(format!("unknown declaration kind: {s}")))
    }
}
