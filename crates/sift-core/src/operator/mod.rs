//! Operator catalog for SIFT conditions
//!
//! The operator vocabulary, the default tokens, and the arity of every
//! operator are part of the wire-compatibility surface and must not change
//! without a version bump.

mod catalog;

pub use catalog::{OperatorCatalog, SqlOperatorCatalog};

use serde::{Deserialize, Serialize};
use std::fmt;

/// Comparison operator tokens accepted at the wire level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OperatorToken {
    /// Equal (=)
    Eq,
    /// Not equal (!=)
    Neq,
    /// Greater than (>)
    Gt,
    /// Greater than or equal (>=)
    Gte,
    /// Less than (<)
    Lt,
    /// Less than or equal (<=)
    Lte,
    /// Pattern match (LIKE)
    Like,
    /// Negated pattern match (NOT LIKE)
    NotLike,
    /// Set membership (IN)
    In,
    /// Negated set membership (NOT IN)
    NotIn,
    /// Range membership (BETWEEN)
    Between,
    /// Negated range membership (NOT BETWEEN)
    NotBetween,
    /// Null check (IS NULL)
    IsNull,
    /// Negated null check (IS NOT NULL)
    IsNotNull,
}

impl OperatorToken {
    /// The wire spelling of this token
    pub fn as_str(&self) -> &'static str {
        match self {
            OperatorToken::Eq => "EQ",
            OperatorToken::Neq => "NEQ",
            OperatorToken::Gt => "GT",
            OperatorToken::Gte => "GTE",
            OperatorToken::Lt => "LT",
            OperatorToken::Lte => "LTE",
            OperatorToken::Like => "LIKE",
            OperatorToken::NotLike => "NOT_LIKE",
            OperatorToken::In => "IN",
            OperatorToken::NotIn => "NOT_IN",
            OperatorToken::Between => "BETWEEN",
            OperatorToken::NotBetween => "NOT_BETWEEN",
            OperatorToken::IsNull => "IS_NULL",
            OperatorToken::IsNotNull => "IS_NOT_NULL",
        }
    }

    /// Returns true if this token is an ordering/equality comparison,
    /// i.e. valid in relation-count position
    pub fn is_comparison(&self) -> bool {
        matches!(
            self,
            OperatorToken::Eq
                | OperatorToken::Neq
                | OperatorToken::Gt
                | OperatorToken::Gte
                | OperatorToken::Lt
                | OperatorToken::Lte
        )
    }
}

impl fmt::Display for OperatorToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Arity class of an operator: how many operands its builder call takes
/// beyond the column name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// No value: the operator is a complete predicate on the column
    /// (IS NULL / IS NOT NULL)
    Unary,
    /// Value only: the operator word is folded into the builder method
    /// name (IN, NOT IN, BETWEEN, NOT BETWEEN)
    Folded,
    /// Explicit `(column, symbol, value)` triple (=, !=, >, >=, <, <=,
    /// LIKE, NOT LIKE)
    Symbolic,
}

impl Arity {
    /// The numeric operand count of this class
    pub fn operand_count(&self) -> u8 {
        match self {
            Arity::Unary => 1,
            Arity::Folded => 2,
            Arity::Symbolic => 3,
        }
    }

    /// Returns true if a leaf using this class must carry a value
    pub fn requires_value(&self) -> bool {
        !matches!(self, Arity::Unary)
    }
}

/// A resolved operator ready to be applied to a builder
///
/// For `Symbolic` operators `builder_suffix` is the comparison symbol
/// spliced into the generic where call; for `Folded` and `Unary` operators
/// it selects the specialized builder method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperatorDescriptor {
    /// The wire token this descriptor was resolved from
    pub token: OperatorToken,
    /// Arity class driving the call convention
    pub arity: Arity,
    /// Comparison symbol or builder method suffix
    pub builder_suffix: &'static str,
}
