//! The operator catalog contract and the canonical SQL catalog

use super::{Arity, OperatorDescriptor, OperatorToken};
use crate::error::CoreError;

/// Resolves operator tokens to descriptors and supplies the default tokens
///
/// The condition compiler depends only on this contract, never on a
/// hardcoded operator list, so a backend with a different operator
/// vocabulary (e.g. full-text operators) substitutes the whole catalog.
pub trait OperatorCatalog {
    /// Resolve a token to its descriptor
    fn describe(&self, token: OperatorToken) -> Result<OperatorDescriptor, CoreError>;

    /// Token used when a leaf omits `operator`
    fn default_token(&self) -> OperatorToken;

    /// Token used when a relation-existence clause omits `operator`
    fn default_relation_token(&self) -> OperatorToken;
}

/// The canonical catalog covering the full wire vocabulary
#[derive(Debug, Clone, Copy, Default)]
pub struct SqlOperatorCatalog;

impl SqlOperatorCatalog {
    pub fn new() -> Self {
        Self
    }
}

impl OperatorCatalog for SqlOperatorCatalog {
    fn describe(&self, token: OperatorToken) -> Result<OperatorDescriptor, CoreError> {
        let (arity, builder_suffix) = match token {
            OperatorToken::Eq => (Arity::Symbolic, "="),
            OperatorToken::Neq => (Arity::Symbolic, "!="),
            OperatorToken::Gt => (Arity::Symbolic, ">"),
            OperatorToken::Gte => (Arity::Symbolic, ">="),
            OperatorToken::Lt => (Arity::Symbolic, "<"),
            OperatorToken::Lte => (Arity::Symbolic, "<="),
            OperatorToken::Like => (Arity::Symbolic, "LIKE"),
            OperatorToken::NotLike => (Arity::Symbolic, "NOT LIKE"),
            OperatorToken::In => (Arity::Folded, "in"),
            OperatorToken::NotIn => (Arity::Folded, "not_in"),
            OperatorToken::Between => (Arity::Folded, "between"),
            OperatorToken::NotBetween => (Arity::Folded, "not_between"),
            OperatorToken::IsNull => (Arity::Unary, "null"),
            OperatorToken::IsNotNull => (Arity::Unary, "not_null"),
        };

        Ok(OperatorDescriptor {
            token,
            arity,
            builder_suffix,
        })
    }

    fn default_token(&self) -> OperatorToken {
        OperatorToken::Eq
    }

    fn default_relation_token(&self) -> OperatorToken {
        OperatorToken::Gte
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let catalog = SqlOperatorCatalog::new();
        assert_eq!(catalog.default_token(), OperatorToken::Eq);
        assert_eq!(catalog.default_relation_token(), OperatorToken::Gte);
    }

    #[test]
    fn test_canonical_arity_table() {
        let catalog = SqlOperatorCatalog::new();
        let expected = [
            (OperatorToken::Eq, 3),
            (OperatorToken::Neq, 3),
            (OperatorToken::Gt, 3),
            (OperatorToken::Gte, 3),
            (OperatorToken::Lt, 3),
            (OperatorToken::Lte, 3),
            (OperatorToken::Like, 3),
            (OperatorToken::NotLike, 3),
            (OperatorToken::In, 2),
            (OperatorToken::NotIn, 2),
            (OperatorToken::Between, 2),
            (OperatorToken::NotBetween, 2),
            (OperatorToken::IsNull, 1),
            (OperatorToken::IsNotNull, 1),
        ];

        for (token, operands) in expected {
            let descriptor = catalog.describe(token).unwrap();
            assert_eq!(descriptor.token, token);
            assert_eq!(
                descriptor.arity.operand_count(),
                operands,
                "arity mismatch for {token}"
            );
        }
    }

    #[test]
    fn test_symbolic_suffixes_are_sql_symbols() {
        let catalog = SqlOperatorCatalog::new();
        assert_eq!(catalog.describe(OperatorToken::Eq).unwrap().builder_suffix, "=");
        assert_eq!(catalog.describe(OperatorToken::Neq).unwrap().builder_suffix, "!=");
        assert_eq!(
            catalog.describe(OperatorToken::NotLike).unwrap().builder_suffix,
            "NOT LIKE"
        );
    }

    #[test]
    fn test_folded_and_unary_suffixes_are_method_names() {
        let catalog = SqlOperatorCatalog::new();
        assert_eq!(catalog.describe(OperatorToken::In).unwrap().builder_suffix, "in");
        assert_eq!(
            catalog.describe(OperatorToken::NotBetween).unwrap().builder_suffix,
            "not_between"
        );
        assert_eq!(
            catalog.describe(OperatorToken::IsNotNull).unwrap().builder_suffix,
            "not_null"
        );
    }
}
