//! SIFT Core - Core types for the SIFT dynamic condition compiler
//!
//! This crate provides the fundamental types used across the SIFT ecosystem:
//! - Value types for condition operands
//! - The operator catalog (tokens, arities, descriptors)
//! - The column identifier validator
//! - The condition tree and its wire decoding
//! - Error types

pub mod column;
pub mod condition;
pub mod error;
pub mod operator;
pub mod types;

// Re-export commonly used types
pub use column::{validate_column, Identifier};
pub use condition::ConditionNode;
pub use error::CoreError;
pub use operator::{Arity, OperatorCatalog, OperatorDescriptor, OperatorToken, SqlOperatorCatalog};
pub use types::Value;
