//! Vector-index document identifiers: `<module-name>:<ordinal>`.

use std::fmt;

use crate::constants::{DOC_ID_SEPARATOR, ESCAPE_CLOSE, ESCAPE_OPEN};
use crate::errors::{LeanSearchError, LeanSearchResult};
use crate::models::Name;

/// A decoded document identifier.
///
/// `index` is kept verbatim as the ordinal key; hydration passes it through
/// to the metadata store without reinterpreting it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DocId {
    pub module_name: Name,
    pub index: String,
}

impl DocId {
    /// Encode a module name and ordinal as a document id.
    pub fn encode(module_name: &Name, index: u64) -> String {
        format!("{module_name}{DOC_ID_SEPARATOR}{index}")
    }

    /// Decode a document id, splitting on the first separator outside an
    /// escaped `«…»` name component.
    pub fn decode(doc_id: &str) -> LeanSearchResult<Self> {
        let split = first_unescaped_separator(doc_id).ok_or_else(|| {
            LeanSearchError::MalformedIdentifier {
                doc_id: doc_id.to_string(),
                reason: format!("missing '{DOC_ID_SEPARATOR}' separator"),
            }
        })?;
        let module = &doc_id[..split];
        let index = &doc_id[split + DOC_ID_SEPARATOR.len_utf8()..];

        let module_name =
            Name::parse(module).map_err(|e| LeanSearchError::MalformedIdentifier {
                doc_id: doc_id.to_string(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            module_name,
            index: index.to_string(),
        })
    }

    /// The ordinal as an integer, if the token is numeric.
    pub fn ordinal(&self) -> Option<u64> {
        self.index.parse().ok()
    }
}

fn first_unescaped_separator(doc_id: &str) -> Option<usize> {
    let mut escaped = false;
    for (i, c) in doc_id.char_indices() {
        match c {
            ESCAPE_OPEN => escaped = true,
            ESCAPE_CLOSE => escaped = false,
            DOC_ID_SEPARATOR if !escaped => return Some(i),
            _ => {}
        }
    }
    None
}

impl fmt::Display for DocId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{DOC_ID_SEPARATOR}{}", self.module_name, self.index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_module_and_ordinal() {
        let module = Name::from_iter(["Mathlib", "Data", "Nat", "Basic"]);
        assert_eq!(DocId::encode(&module, 17), "Mathlib.Data.Nat.Basic:17");
    }

    #[test]
    fn decodes_on_first_colon() {
        let id = DocId::decode("Nat:3:extra").unwrap();
        assert_eq!(id.module_name, Name::from_iter(["Nat"]));
        assert_eq!(id.index, "3:extra");
        assert_eq!(id.ordinal(), None);
    }

    #[test]
    fn index_token_is_kept_verbatim() {
        let id = DocId::decode("Init.Core:007").unwrap();
        assert_eq!(id.index, "007");
        assert_eq!(id.ordinal(), Some(7));
        assert_eq!(id.to_string(), "Init.Core:007");
    }

    #[test]
    fn colon_inside_module_component_round_trips() {
        let module = Name::from_iter(["Foo", "a:b"]);
        let encoded = DocId::encode(&module, 3);
        assert_eq!(encoded, "Foo.«a:b»:3");
        let id = DocId::decode(&encoded).unwrap();
        assert_eq!(id.module_name, module);
        assert_eq!(id.index, "3");
    }

    #[test]
    fn unterminated_escape_has_no_separator() {
        let err = DocId::decode("Foo.«a:3").unwrap_err();
        assert!(matches!(err, LeanSearchError::MalformedIdentifier { .. }));
    }

    #[test]
    fn missing_separator_is_malformed() {
        let err = DocId::decode("BadFormat").unwrap_err();
        assert!(matches!(err, LeanSearchError::MalformedIdentifier { .. }));
        assert!(err.to_string().contains("BadFormat"));
    }

    #[test]
    fn unparsable_module_is_malformed() {
        let err = DocId::decode("Nat..add:1").unwrap_err();
        assert!(matches!(err, LeanSearchError::MalformedIdentifier { .. }));
        let err = DocId::decode(":1").unwrap_err();
        assert!(matches!(err, LeanSearchError::MalformedIdentifier { .. }));
    }
}
