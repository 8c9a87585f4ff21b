//! Common test utilities for compiler integration tests

use sift_compiler::{BuildFn, Combinator, CompileError, QueryBuilder};
use sift_core::{ConditionNode, Identifier, OperatorDescriptor, OperatorToken, Value};
use std::collections::HashMap;

/// One recorded builder mutation
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Leaf {
        column: String,
        operator: OperatorToken,
        value: Option<Value>,
        combinator: Combinator,
    },
    Group {
        combinator: Combinator,
        calls: Vec<Call>,
    },
    RelationExists {
        relation: String,
        operator: OperatorToken,
        amount: u64,
        nested: Option<Vec<Call>>,
        combinator: Combinator,
    },
}

/// Query-builder mock that records the emitted call tree
#[derive(Debug, Clone)]
pub struct RecordingBuilder {
    table: String,
    relations: HashMap<String, String>,
    pub calls: Vec<Call>,
}

impl RecordingBuilder {
    pub fn new(table: &str) -> Self {
        Self {
            table: table.to_string(),
            relations: HashMap::new(),
            calls: Vec::new(),
        }
    }

    /// Declare a relation and the table backing it
    pub fn with_relation(mut self, relation: &str, table: &str) -> Self {
        self.relations
            .insert(relation.to_string(), table.to_string());
        self
    }
}

impl QueryBuilder for RecordingBuilder {
    fn where_leaf(
        &mut self,
        column: &Identifier,
        operator: &OperatorDescriptor,
        value: Option<&Value>,
        combinator: Combinator,
    ) {
        self.calls.push(Call::Leaf {
            column: column.as_str().to_string(),
            operator: operator.token,
            value: value.cloned(),
            combinator,
        });
    }

    fn where_group(
        &mut self,
        combinator: Combinator,
        build: BuildFn<'_, Self>,
    ) -> Result<(), CompileError> {
        let mut group = RecordingBuilder {
            table: self.table.clone(),
            relations: self.relations.clone(),
            calls: Vec::new(),
        };
        build(&mut group)?;
        self.calls.push(Call::Group {
            combinator,
            calls: group.calls,
        });
        Ok(())
    }

    fn where_relation_exists(
        &mut self,
        relation: &Identifier,
        operator: OperatorToken,
        amount: u64,
        nested: Option<BuildFn<'_, Self>>,
        combinator: Combinator,
    ) -> Result<(), CompileError> {
        let table = self
            .relations
            .get(relation.as_str())
            .ok_or_else(|| CompileError::UnknownRelation(relation.as_str().to_string()))?
            .clone();

        let nested_calls = match nested {
            Some(build) => {
                // Sub-builder scoped to the relation's own table
                let mut sub = RecordingBuilder {
                    table,
                    relations: self.relations.clone(),
                    calls: Vec::new(),
                };
                build(&mut sub)?;
                Some(sub.calls)
            }
            None => None,
        };

        self.calls.push(Call::RelationExists {
            relation: relation.as_str().to_string(),
            operator,
            amount,
            nested: nested_calls,
            combinator,
        });
        Ok(())
    }

    fn qualify_column(&self, column: &Identifier) -> Identifier {
        column.with_table_prefix(&self.table)
    }
}

/// Decode a JSON condition (panics on decode failure, for tests that
/// exercise the compiler, not the decoder)
pub fn condition(json: serde_json::Value) -> ConditionNode {
    ConditionNode::from_json(json).expect("test condition must decode")
}
