//! Strict condition tree types

use crate::operator::OperatorToken;
use crate::types::Value;
use serde::Deserialize;

use super::decode::RawCondition;

/// One node of the client-supplied filter tree
///
/// Constructed once per request from decoded client input, consumed exactly
/// once by the compiler, and discarded. Never persisted or mutated after
/// construction.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "RawCondition")]
pub enum ConditionNode {
    /// Single column comparison
    Leaf(LeafCondition),
    /// All children must hold
    And(Vec<ConditionNode>),
    /// At least one child must hold
    Or(Vec<ConditionNode>),
    /// Related-entity count assertion, optionally filtered
    HasRelation(HasRelationCondition),
}

/// A leaf comparison against one column
#[derive(Debug, Clone, PartialEq)]
pub struct LeafCondition {
    /// Raw column reference; validated by the compiler before use
    pub column: String,
    /// Comparison operator; the catalog default (EQ) applies when absent
    pub operator: Option<OperatorToken>,
    /// Operand; required for arity >= 2 operators, ignored for arity 1
    pub value: Option<Value>,
}

/// A relation-existence check
#[derive(Debug, Clone, PartialEq)]
pub struct HasRelationCondition {
    /// Raw relation name; validated by the compiler before use
    pub relation: String,
    /// Count comparison operator; the catalog default (GTE) applies
    /// when absent
    pub operator: Option<OperatorToken>,
    /// Count the related set is compared against
    pub amount: u64,
    /// Optional filter applied inside the relation sub-query
    pub condition: Option<Box<ConditionNode>>,
}

impl ConditionNode {
    /// Decode a condition from an already-parsed generic JSON tree
    pub fn from_json(value: serde_json::Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }

    /// Leaf constructor
    pub fn leaf(
        column: impl Into<String>,
        operator: Option<OperatorToken>,
        value: Option<Value>,
    ) -> Self {
        ConditionNode::Leaf(LeafCondition {
            column: column.into(),
            operator,
            value,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leaf_constructor() {
        let node = ConditionNode::leaf("status", None, Some(Value::Bool(true)));
        match node {
            ConditionNode::Leaf(leaf) => {
                assert_eq!(leaf.column, "status");
                assert_eq!(leaf.operator, None);
                assert_eq!(leaf.value, Some(Value::Bool(true)));
            }
            _ => panic!("Expected Leaf"),
        }
    }
}
