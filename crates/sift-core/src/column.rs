//! Column identifier validation
//!
//! Every leaf column and relation name passes through [`validate_column`]
//! before it reaches a query builder. This is the sole injection defense
//! for column names; values are always bound as parameters downstream.

use crate::error::CoreError;
use serde::Serialize;
use std::fmt;

/// A column or relation reference that passed the identifier grammar
///
/// Only obtainable through [`validate_column`] (or by qualifying an
/// already-validated identifier), so holding one is proof the grammar
/// was checked.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Identifier(String);

impl Identifier {
    /// The validated reference as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Prefix this identifier with a table/entity name
    ///
    /// Used by builders implementing `qualify_column`. The table name comes
    /// from server-side schema configuration, not client input.
    pub fn with_table_prefix(&self, table: &str) -> Identifier {
        Identifier(format!("{table}.{}", self.0))
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Identifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Check a raw column reference against the identifier grammar
///
/// The reference must not start with a digit, dot, or hyphen; after that it
/// may contain only ASCII letters, digits, underscores, dots, hyphens, or
/// the two-character accessor `->` (nested-document field access). The scan
/// itself allocates nothing; the `Identifier` is built only on success.
pub fn validate_column(raw: &str) -> Result<Identifier, CoreError> {
    let invalid = || CoreError::InvalidColumn(raw.to_string());

    let mut bytes = raw.bytes();
    let first = bytes.next().ok_or_else(invalid)?;
    if !(first.is_ascii_alphabetic() || first == b'_') {
        return Err(invalid());
    }

    let mut prev = first;
    for byte in bytes {
        let ok = match byte {
            b'>' => prev == b'-',
            b'_' | b'.' | b'-' => true,
            _ => byte.is_ascii_alphanumeric(),
        };
        if !ok {
            return Err(invalid());
        }
        prev = byte;
    }

    Ok(Identifier(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_valid(raw: &str) {
        let id = validate_column(raw).unwrap();
        assert_eq!(id.as_str(), raw);
    }

    fn assert_invalid(raw: &str) {
        assert_eq!(
            validate_column(raw),
            Err(CoreError::InvalidColumn(raw.to_string()))
        );
    }

    #[test]
    fn test_plain_identifiers() {
        assert_valid("status");
        assert_valid("created_at");
        assert_valid("_internal");
        assert_valid("UserName");
        assert_valid("col2");
    }

    #[test]
    fn test_dotted_and_hyphenated() {
        assert_valid("users.id");
        assert_valid("meta-data");
        assert_valid("a.b-c.d");
    }

    #[test]
    fn test_nested_document_accessor() {
        assert_valid("settings->theme");
        assert_valid("payload->a->b");
    }

    #[test]
    fn test_rejects_bad_first_char() {
        assert_invalid("1evil");
        assert_invalid(".hidden");
        assert_invalid("-flag");
        assert_invalid(">x");
        assert_invalid("");
    }

    #[test]
    fn test_rejects_injection_characters() {
        assert_invalid("1evil; drop");
        assert_invalid("name; --");
        assert_invalid("a'b");
        assert_invalid(r#"a"b"#);
        assert_invalid("count(x)");
        assert_invalid("a b");
        assert_invalid("a,b");
    }

    #[test]
    fn test_rejects_stray_arrow_head() {
        // '>' is only legal as the second half of '->'
        assert_invalid("a>b");
        assert_invalid("a.>b");
    }

    #[test]
    fn test_table_prefixing() {
        let id = validate_column("id").unwrap();
        assert_eq!(id.with_table_prefix("posts").as_str(), "posts.id");
    }
}
