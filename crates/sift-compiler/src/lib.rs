//! SIFT Compiler - Condition tree to query-builder compiler
//!
//! This crate walks a decoded [`sift_core::ConditionNode`] tree and emits
//! calls against an abstract [`QueryBuilder`], threading the active logical
//! combinator and relation-qualification context through the recursion.

pub mod builder;
pub mod compiler;
pub mod error;

// Re-export main types
pub use builder::{BuildFn, Combinator, QueryBuilder};
pub use compiler::ConditionCompiler;
pub use error::{CompileError, Result};
