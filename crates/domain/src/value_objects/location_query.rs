//! Location query value object

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::DomainError;

/// Upper bound on accepted query length in characters
const MAX_QUERY_CHARS: usize = 200;

/// A free-text location supplied by the user (e.g. "Springfield")
///
/// Always trimmed and never empty, so holding one means the pipeline may
/// go on to make network calls.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LocationQuery(String);

impl LocationQuery {
    /// Parse raw user input into a query
    ///
    /// # Errors
    ///
    /// Returns `DomainError::EmptyQuery` for empty or whitespace-only input and
    /// `DomainError::ValidationError` when the input exceeds the length limit.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(DomainError::EmptyQuery);
        }
        if trimmed.chars().count() > MAX_QUERY_CHARS {
            return Err(DomainError::ValidationError(format!(
                "location query exceeds {MAX_QUERY_CHARS} characters"
            )));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Borrow the query text
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for LocationQuery {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<LocationQuery> for String {
    fn from(query: LocationQuery) -> Self {
        query.0
    }
}

impl AsRef<str> for LocationQuery {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LocationQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn parse_trims_whitespace() {
        let query = LocationQuery::parse("  Springfield \n").expect("valid");
        assert_eq!(query.as_str(), "Springfield");
    }

    #[test]
    fn parse_rejects_empty() {
        assert_eq!(LocationQuery::parse(""), Err(DomainError::EmptyQuery));
    }

    #[test]
    fn parse_rejects_whitespace_only() {
        assert_eq!(LocationQuery::parse(" \t\r\n "), Err(DomainError::EmptyQuery));
    }

    #[test]
    fn parse_keeps_inner_spaces_and_accents() {
        let query = LocationQuery::parse("San José del Cabo").expect("valid");
        assert_eq!(query.to_string(), "San José del Cabo");
    }

    #[test]
    fn parse_rejects_overlong_input() {
        let raw = "a".repeat(MAX_QUERY_CHARS + 1);
        assert!(matches!(
            LocationQuery::parse(&raw),
            Err(DomainError::ValidationError(_))
        ));
    }

    #[test]
    fn deserialize_validates() {
        let ok: LocationQuery = serde_json::from_str("\" Lima \"").expect("valid");
        assert_eq!(ok.as_str(), "Lima");

        let err = serde_json::from_str::<LocationQuery>("\"   \"");
        assert!(err.is_err());
    }

    proptest! {
        #[test]
        fn whitespace_only_is_always_rejected(raw in "[ \t\r\n]{0,32}") {
            prop_assert_eq!(LocationQuery::parse(&raw), Err(DomainError::EmptyQuery));
        }

        #[test]
        fn parsed_query_is_trimmed_and_non_empty(raw in "[ ]{0,4}[A-Za-z][A-Za-z ]{0,40}[ ]{0,4}") {
            let query = LocationQuery::parse(&raw).expect("has a letter");
            prop_assert!(!query.as_str().is_empty());
            prop_assert_eq!(query.as_str(), raw.trim());
        }
    }
}
