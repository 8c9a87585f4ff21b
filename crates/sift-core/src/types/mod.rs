//! Type system for SIFT
//!
//! This module contains the runtime value types condition operands
//! are carried in.

pub mod value;

pub use value::Value;
