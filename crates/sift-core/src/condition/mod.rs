//! Condition tree module
//!
//! The client-supplied filter tree, decoded from the wire shape into a
//! strict tagged model. Each node is exactly one of:
//! - a leaf comparison (`column` / `operator` / `value`)
//! - an `AND` group
//! - an `OR` group
//! - a relation-existence check (`HAS`)
//!
//! # Wire shape
//!
//! ```json
//! { "column": "status", "operator": "EQ", "value": "active" }
//! ```
//!
//! ```json
//! { "OR": [
//!     { "column": "a", "value": 1 },
//!     { "AND": [
//!         { "column": "b", "value": 2 },
//!         { "HAS": { "relation": "comments", "amount": 3 } }
//!     ] }
//! ] }
//! ```
//!
//! A node populating more than one of `column`/`AND`/`OR`/`HAS` is rejected
//! at decode time with [`crate::CoreError::AmbiguousCondition`].

mod decode;
mod types;

pub use types::{ConditionNode, HasRelationCondition, LeafCondition};
