//! Runtime value types for SIFT condition operands
//!
//! The `Value` enum represents every operand a condition leaf can carry,
//! similar to JSON values. Values are always bound as parameters by the
//! downstream builder, never interpolated into query text.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Condition operand value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Null value
    Null,
    /// Boolean value
    Bool(bool),
    /// Number value (f64 for simplicity, handles both int and float)
    Number(f64),
    /// String value
    String(String),
    /// Array of values (IN / BETWEEN operands)
    Array(Vec<Value>),
    /// Object (key-value map, for nested-document operands)
    Object(HashMap<String, Value>),
}

impl Value {
    /// Returns true if this value is an array
    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    /// Returns the array elements, if this value is an array
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }
}
