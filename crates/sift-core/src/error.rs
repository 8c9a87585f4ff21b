//! Error types for SIFT Core

use thiserror::Error;

/// Core error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    /// Operator token not covered by the active catalog
    #[error("Unknown operator: {0}")]
    UnknownOperator(String),

    /// Column reference failed the identifier grammar
    #[error("Invalid column name: {0:?}")]
    InvalidColumn(String),

    /// A wire node populated more than one of column/AND/OR/HAS
    #[error("Condition node sets more than one of column, AND, OR, HAS: {0}")]
    AmbiguousCondition(String),

    /// A wire node populated none of column/AND/OR/HAS
    #[error("Condition node is empty")]
    EmptyCondition,

    /// A wire node carried `operator`/`value` without a `column`
    #[error("Leaf condition is missing a column")]
    MissingColumn,

    /// An AND/OR group was supplied with no children
    #[error("{0} group must contain at least one condition")]
    EmptyGroup(&'static str),
}

pub type Result<T> = std::result::Result<T, CoreError>;
