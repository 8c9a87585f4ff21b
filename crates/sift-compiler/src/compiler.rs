//! The condition compiler
//!
//! Recursively evaluates a condition tree against a query builder under an
//! ambient logical combinator. The observable query is the same regardless
//! of recursion depth; the first failure aborts the whole compilation.

use crate::builder::{Combinator, QueryBuilder};
use crate::error::{CompileError, Result};
use sift_core::condition::{ConditionNode, HasRelationCondition, LeafCondition};
use sift_core::{validate_column, OperatorCatalog, SqlOperatorCatalog};

/// Compiles condition trees against a query builder
///
/// Stateless across invocations: each compile call receives its own tree
/// and its own builder. The catalog is resolved once at construction and
/// may be shared read-only across requests.
#[derive(Debug, Clone)]
pub struct ConditionCompiler<C = SqlOperatorCatalog> {
    catalog: C,
}

impl ConditionCompiler<SqlOperatorCatalog> {
    /// Create a compiler over the canonical SQL operator catalog
    pub fn new() -> Self {
        Self {
            catalog: SqlOperatorCatalog::new(),
        }
    }
}

impl Default for ConditionCompiler<SqlOperatorCatalog> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: OperatorCatalog> ConditionCompiler<C> {
    /// Create a compiler over a substituted operator catalog
    pub fn with_catalog(catalog: C) -> Self {
        Self { catalog }
    }

    /// Compile `node` against `builder` under the default AND combinator
    pub fn compile<B: QueryBuilder>(&self, node: &ConditionNode, builder: &mut B) -> Result<()> {
        self.compile_with(node, builder, Combinator::And)
    }

    /// Compile `node` against `builder` under an explicit combinator
    pub fn compile_with<B: QueryBuilder>(
        &self,
        node: &ConditionNode,
        builder: &mut B,
        combinator: Combinator,
    ) -> Result<()> {
        log::debug!("compiling condition tree under {combinator:?}");
        self.compile_node(node, builder, combinator, false)
    }

    fn compile_node<B: QueryBuilder>(
        &self,
        node: &ConditionNode,
        builder: &mut B,
        combinator: Combinator,
        qualify: bool,
    ) -> Result<()> {
        match node {
            ConditionNode::Leaf(leaf) => self.compile_leaf(leaf, builder, combinator, qualify),
            ConditionNode::And(children) => {
                self.compile_group(children, builder, combinator, Combinator::And, qualify)
            }
            ConditionNode::Or(children) => {
                self.compile_group(children, builder, combinator, Combinator::Or, qualify)
            }
            ConditionNode::HasRelation(has) => self.compile_relation(has, builder, combinator),
        }
    }

    fn compile_leaf<B: QueryBuilder>(
        &self,
        leaf: &LeafCondition,
        builder: &mut B,
        combinator: Combinator,
        qualify: bool,
    ) -> Result<()> {
        let column = validate_column(&leaf.column)
            .map_err(|_| CompileError::InvalidColumn(leaf.column.clone()))?;
        let column = if qualify {
            builder.qualify_column(&column)
        } else {
            column
        };

        let token = leaf.operator.unwrap_or_else(|| self.catalog.default_token());
        let descriptor = self
            .catalog
            .describe(token)
            .map_err(|_| CompileError::UnknownOperator(token.to_string()))?;

        if descriptor.arity.requires_value() && leaf.value.is_none() {
            return Err(CompileError::MissingValue {
                column: leaf.column.clone(),
                operator: token,
            });
        }

        // A value supplied alongside a unary operator is ignored, not an error
        let value = if descriptor.arity.requires_value() {
            leaf.value.as_ref()
        } else {
            None
        };

        log::trace!("leaf {column} {token} under {combinator:?}");
        builder.where_leaf(&column, &descriptor, value, combinator);
        Ok(())
    }

    /// One nested grouping boundary per group, regardless of child count,
    /// so the group keeps its precedence when joined to siblings with OR
    fn compile_group<B: QueryBuilder>(
        &self,
        children: &[ConditionNode],
        builder: &mut B,
        combinator: Combinator,
        inner: Combinator,
        qualify: bool,
    ) -> Result<()> {
        builder.where_group(combinator, &mut |group| {
            for child in children {
                self.compile_node(child, group, inner, qualify)?;
            }
            Ok(())
        })
    }

    fn compile_relation<B: QueryBuilder>(
        &self,
        has: &HasRelationCondition,
        builder: &mut B,
        combinator: Combinator,
    ) -> Result<()> {
        let relation = validate_column(&has.relation)
            .map_err(|_| CompileError::InvalidColumn(has.relation.clone()))?;

        let token = has
            .operator
            .unwrap_or_else(|| self.catalog.default_relation_token());
        if !token.is_comparison() {
            return Err(CompileError::InvalidRelationOperator(token));
        }

        log::trace!("relation {relation} count {token} {} under {combinator:?}", has.amount);
        match &has.condition {
            Some(nested) => builder.where_relation_exists(
                &relation,
                token,
                has.amount,
                // Nested leaves are qualified against the relation's own
                // table; the sub-builder starts from a fresh AND context.
                Some(&mut |sub: &mut B| self.compile_node(nested, sub, Combinator::And, true)),
                combinator,
            ),
            None => builder.where_relation_exists(&relation, token, has.amount, None, combinator),
        }
    }
}
