//! SIFT Schema - schema-declaration-time artifacts
//!
//! This crate owns the allowed-column restriction generator: given a column
//! allow-list or a reference to an existing column enumeration, it produces
//! a narrowed condition shape for one field declaration. Everything here
//! runs while the schema is built, never per request.

pub mod error;
pub mod registry;

// Re-export main types
pub use error::{Result, SchemaError};
pub use registry::{ColumnSet, RestrictedShape, RestrictionRegistry};
