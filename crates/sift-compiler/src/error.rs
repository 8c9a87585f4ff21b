//! Compiler error types

use sift_core::OperatorToken;
use thiserror::Error;

/// Compiler error
///
/// Every variant is terminal for the current compile call: the first
/// failure aborts the whole compilation, so a malformed tree is never
/// partially applied to the builder.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CompileError {
    /// Column reference failed the identifier grammar (client-input error)
    #[error("Invalid column name: {0:?}")]
    InvalidColumn(String),

    /// Arity >= 2 operator supplied without a value (client-input error)
    #[error("Operator {operator} on column {column:?} requires a value")]
    MissingValue {
        column: String,
        operator: OperatorToken,
    },

    /// Token not covered by the active catalog (client-input error)
    #[error("Unknown operator: {0}")]
    UnknownOperator(String),

    /// HAS clause references a relation the target entity does not have
    /// (client-input error, not a server fault)
    #[error("Unknown relation: {0}")]
    UnknownRelation(String),

    /// Non-comparison token used in relation-count position
    /// (client-input error)
    #[error("Operator {0} cannot compare a relation count")]
    InvalidRelationOperator(OperatorToken),
}

/// Result type for compiler operations
pub type Result<T> = std::result::Result<T, CompileError>;
