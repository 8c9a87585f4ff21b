//! Wire-shape decoding for condition trees
//!
//! The wire object carries any subset of the keys `column` / `operator` /
//! `value` / `AND` / `OR` / `HAS`. Decoding enforces the strict one-case
//! model: exactly one of the leaf fields, `AND`, `OR`, or `HAS` may be
//! populated per node.

use crate::error::CoreError;
use crate::operator::OperatorToken;
use crate::types::Value;
use serde::Deserialize;

use super::types::{ConditionNode, HasRelationCondition, LeafCondition};

/// The permissive wire object, before one-case enforcement
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct RawCondition {
    column: Option<String>,
    operator: Option<OperatorToken>,
    value: Option<Value>,
    #[serde(rename = "AND")]
    and: Option<Vec<RawCondition>>,
    #[serde(rename = "OR")]
    or: Option<Vec<RawCondition>>,
    #[serde(rename = "HAS")]
    has: Option<RawHasRelation>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawHasRelation {
    relation: String,
    operator: Option<OperatorToken>,
    #[serde(default = "default_amount")]
    amount: u64,
    condition: Option<Box<RawCondition>>,
}

fn default_amount() -> u64 {
    1
}

impl TryFrom<RawCondition> for ConditionNode {
    type Error = CoreError;

    fn try_from(raw: RawCondition) -> Result<Self, CoreError> {
        let has_leaf_fields =
            raw.column.is_some() || raw.operator.is_some() || raw.value.is_some();

        let mut populated = Vec::new();
        if has_leaf_fields {
            populated.push("column");
        }
        if raw.and.is_some() {
            populated.push("AND");
        }
        if raw.or.is_some() {
            populated.push("OR");
        }
        if raw.has.is_some() {
            populated.push("HAS");
        }

        if populated.len() > 1 {
            return Err(CoreError::AmbiguousCondition(populated.join(", ")));
        }

        if has_leaf_fields {
            let column = raw.column.ok_or(CoreError::MissingColumn)?;
            return Ok(ConditionNode::Leaf(LeafCondition {
                column,
                operator: raw.operator,
                value: raw.value,
            }));
        }

        if let Some(children) = raw.and {
            return Ok(ConditionNode::And(decode_group(children, "AND")?));
        }

        if let Some(children) = raw.or {
            return Ok(ConditionNode::Or(decode_group(children, "OR")?));
        }

        if let Some(has) = raw.has {
            let condition = has
                .condition
                .map(|nested| ConditionNode::try_from(*nested).map(Box::new))
                .transpose()?;
            return Ok(ConditionNode::HasRelation(HasRelationCondition {
                relation: has.relation,
                operator: has.operator,
                amount: has.amount,
                condition,
            }));
        }

        Err(CoreError::EmptyCondition)
    }
}

fn decode_group(
    children: Vec<RawCondition>,
    kind: &'static str,
) -> Result<Vec<ConditionNode>, CoreError> {
    if children.is_empty() {
        return Err(CoreError::EmptyGroup(kind));
    }
    children.into_iter().map(ConditionNode::try_from).collect()
}
