//! AST of stream-processing rule statements and the depth-first walker that
//! validation, resolution and rewrite passes are built on.

pub mod ast;
pub mod error;
pub mod errors;
pub mod semantic;

pub use ast::{
    node::{Node, NodeKind},
    statement::SelectStatement,
    visitor::{ControlVisitor, FnVisitor, VisitAction, Visitor, control_fn, visit_fn},
    walk::{try_walk, try_walk_func, walk, walk_func},
};

use error::AstError;

/// Decodes a statement produced by an external parser
pub fn from_json(source: &str) -> Result<SelectStatement, AstError> {
    serde_json::from_str(source).map_err(AstError::Decode)
}

pub fn to_json_pretty(stmt: &SelectStatement) -> Result<String, AstError> {
    serde_json::to_string_pretty(stmt).map_err(AstError::Encode)
}
