//! Schema-declaration error types
//!
//! These are build-time/deployment errors. None of them is reachable at
//! request time.

use thiserror::Error;

/// Schema-declaration error
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SchemaError {
    /// Both an allow-list and an enum reference were supplied for the same
    /// declaration; the two are mutually exclusive by design
    #[error("Declaration {0:?} supplies both an allow-list and a column enum; pick one")]
    ConflictingRestriction(String),

    /// Neither an allow-list nor an enum reference was supplied; the
    /// unrestricted shape is requested by not restricting at all
    #[error("Declaration {0:?} requests a restricted shape without columns")]
    MissingRestriction(String),

    /// The same declaration was registered twice with different inputs
    #[error("Declaration {0:?} was already registered with a different restriction")]
    ConflictingDeclaration(String),

    /// An allow-list entry failed the column identifier grammar
    #[error("Invalid column {column:?} in allow-list for declaration {declaration:?}")]
    InvalidColumn {
        declaration: String,
        column: String,
    },

    /// An empty allow-list would make every condition unrepresentable
    #[error("Empty allow-list for declaration {0:?}")]
    EmptyAllowList(String),
}

/// Result type for schema operations
pub type Result<T> = std::result::Result<T, SchemaError>;
