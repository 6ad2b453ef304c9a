//! Hierarchical names for modules and declarations.
//!
//! Textual form: components joined by `.`. A string component that cannot be
//! written bare is wrapped in `«…»`; an unescaped all-digit component is a
//! numeric component. JSON form: `["Nat", "add"]`, `["_private", 0]`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{DOC_ID_SEPARATOR, ESCAPE_CLOSE, ESCAPE_OPEN, NAME_SEPARATOR};
use crate::errors::{LeanSearchError, LeanSearchResult};

/// One component of a [`Name`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NameComponent {
    Num(u64),
    Str(String),
}

impl NameComponent {
    fn needs_escape(s: &str) -> bool {
        match s.chars().next() {
            None => true,
            Some(first) if first.is_ascii_digit() => true,
            Some(_) => s.chars().any(|c| {
                c == NAME_SEPARATOR
                    || c == DOC_ID_SEPARATOR
                    || c == ESCAPE_OPEN
                    || c == ESCAPE_CLOSE
                    || c.is_whitespace()
            }),
        }
    }
}

impl fmt::Display for NameComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Num(n) => write!(f, "{n}"),
            Self::Str(s) if Self::needs_escape(s) => write!(f, "{ESCAPE_OPEN}{s}{ESCAPE_CLOSE}"),
            Self::Str(s) => f.write_str(s),
        }
    }
}

impl From<&str> for NameComponent {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<u64> for NameComponent {
    fn from(n: u64) -> Self {
        Self::Num(n)
    }
}

/// A structured, hierarchical name. The empty name is the anonymous name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Name(Vec<NameComponent>);

impl Name {
    pub fn new(components: Vec<NameComponent>) -> Self {
        Self(components)
    }

    pub fn components(&self) -> &[NameComponent] {
        &self.0
    }

    /// Append a component, returning the extended name.
    pub fn child(mut self, component: impl Into<NameComponent>) -> Self {
        self.0.push(component.into());
        self
    }

    /// Parse the textual form.
    pub fn parse(input: &str) -> LeanSearchResult<Self> {
        let invalid = |reason: &str| LeanSearchError::InvalidName {
            input: input.to_string(),
            reason: reason.to_string(),
        };

        if input.is_empty() {
            return Err(invalid("empty name"));
        }

        let mut components = Vec::new();
        let mut chars = input.chars().peekable();
        loop {
            let component = if chars.peek() == Some(&ESCAPE_OPEN) {
                chars.next();
                let mut s = String::new();
                loop {
                    match chars.next() {
                        Some(ESCAPE_CLOSE) => break,
                        Some(c) => s.push(c),
                        None => return Err(invalid("unterminated escaped component")),
                    }
                }
                NameComponent::Str(s)
            } else {
                let mut s = String::new();
                while let Some(&c) = chars.peek() {
                    if c == NAME_SEPARATOR {
                        break;
                    }
                    if c == ESCAPE_OPEN || c == ESCAPE_CLOSE {
                        return Err(invalid("escape character inside bare component"));
                    }
                    s.push(c);
                    chars.next();
                }
                if s.is_empty() {
                    return Err(invalid("empty component"));
                }
                if s.chars().all(|c| c.is_ascii_digit()) {
                    let n = s
                        .parse::<u64>()
                        .map_err(|_| invalid("numeric component out of range"))?;
                    NameComponent::Num(n)
                } else {
                    NameComponent::Str(s)
                }
            };
            components.push(component);

            match chars.next() {
                None => break,
                Some(NAME_SEPARATOR) => continue,
                Some(_) => return Err(invalid("expected '.' after escaped component")),
            }
        }

        Ok(Self(components))
    }

    /// Canonical JSON form, used as the storage key.
    pub fn to_json(&self) -> LeanSearchResult<String> {
        serde_json::to_string(self).map_err(|e| LeanSearchError::InvalidName {
            input: self.to_string(),
            reason: e.to_string(),
        })
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, component) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, "{NAME_SEPARATOR}")?;
            }
            write!(f, "{component}")?;
        }
        Ok(())
    }
}

impl FromStr for Name {
    type Err = LeanSearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl<C: Into<NameComponent>> FromIterator<C> for Name {
    fn from_iter<I: IntoIterator<Item = C>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_dotted_name() {
        let name = Name::parse("Nat.add").unwrap();
        assert_eq!(name, Name::from_iter(["Nat", "add"]));
    }

    #[test]
    fn numeric_component_parses_as_number() {
        let name = Name::parse("_private.Init.0.foo").unwrap();
        assert_eq!(
            name.components()[2],
            NameComponent::Num(0),
        );
    }

    #[test]
    fn escaped_component_keeps_dots() {
        let name = Name::parse("Foo.«bar.baz»").unwrap();
        assert_eq!(name, Name::from_iter(["Foo", "bar.baz"]));
        assert_eq!(name.to_string(), "Foo.«bar.baz»");
    }

    #[test]
    fn digit_leading_string_is_escaped_on_display() {
        let name = Name::from_iter(["Foo", "2nd"]);
        assert_eq!(name.to_string(), "Foo.«2nd»");
        assert_eq!(Name::parse(&name.to_string()).unwrap(), name);
    }

    #[test]
    fn rejects_malformed_input() {
        assert!(Name::parse("").is_err());
        assert!(Name::parse("Nat.").is_err());
        assert!(Name::parse(".Nat").is_err());
        assert!(Name::parse("Nat..add").is_err());
        assert!(Name::parse("Foo.«bar").is_err());
        assert!(Name::parse("Foo.«bar»baz").is_err());
        assert!(Name::parse("Fo»o").is_err());
    }

    #[test]
    fn colon_component_is_escaped() {
        let name = Name::from_iter(["Foo", "a:b"]);
        assert_eq!(name.to_string(), "Foo.«a:b»");
        assert_eq!(Name::parse("Foo.«a:b»").unwrap(), name);
    }

    #[test]
    fn json_form_is_component_array() {
        let name = Name::new(vec!["_private".into(), 0u64.into(), "x".into()]);
        assert_eq!(name.to_json().unwrap(), r#"["_private",0,"x"]"#);
        let back: Name = serde_json::from_str(r#"["_private",0,"x"]"#).unwrap();
        assert_eq!(back, name);
    }
}
