//! The abstract query-builder contract consumed by the compiler
//!
//! The compiler never issues raw query strings; every mutation goes through
//! this trait, which is the only place dialect-specific SQL/NoSQL generation
//! occurs. Implementations live with the ORM/web layer, not in this crate.

use crate::error::CompileError;
use sift_core::{Identifier, OperatorDescriptor, OperatorToken, Value};

/// The logical joiner under which a builder call is connected to its
/// siblings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Combinator {
    And,
    Or,
}

/// A recursive build step evaluated against a nested or relation-scoped
/// builder
pub type BuildFn<'a, B> = &'a mut dyn FnMut(&mut B) -> Result<(), CompileError>;

/// Target of a condition compilation
///
/// Owned by the field-resolution call and mutated in place; the compiler
/// never retains it beyond the call. Implementations are not expected to be
/// thread-safe for concurrent writers.
pub trait QueryBuilder {
    /// Apply a single column comparison under `combinator`
    ///
    /// `value` is `None` exactly when the descriptor's arity is unary.
    /// Values must be bound as parameters, never interpolated.
    fn where_leaf(
        &mut self,
        column: &Identifier,
        operator: &OperatorDescriptor,
        value: Option<&Value>,
        combinator: Combinator,
    );

    /// Evaluate `build` against a fresh nested group joined to the parent
    /// with `combinator`
    fn where_group(
        &mut self,
        combinator: Combinator,
        build: BuildFn<'_, Self>,
    ) -> Result<(), CompileError>
    where
        Self: Sized;

    /// Assert that the related set named `relation` satisfies
    /// `count <operator> amount`, optionally filtered by `nested` evaluated
    /// against a builder scoped to the relation's own table
    ///
    /// An unknown relation name is a hard failure
    /// ([`CompileError::UnknownRelation`]), never a silent no-op.
    fn where_relation_exists(
        &mut self,
        relation: &Identifier,
        operator: OperatorToken,
        amount: u64,
        nested: Option<BuildFn<'_, Self>>,
        combinator: Combinator,
    ) -> Result<(), CompileError>
    where
        Self: Sized;

    /// Prefix a bare column with this builder's current table/entity name
    ///
    /// Used when entering a relation sub-query so columns shared between
    /// the joined tables stay unambiguous.
    fn qualify_column(&self, column: &Identifier) -> Identifier;
}
