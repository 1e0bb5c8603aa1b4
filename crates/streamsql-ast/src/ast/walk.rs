use crate::ast::{
    expr::Expr,
    node::Node,
    visitor::{ControlVisitor, Pruning, VisitAction, Visitor, control_fn, visit_fn},
};
use std::ops::ControlFlow;
use tracing::trace;

/// Traverses a node hierarchy in depth-first pre-order.
///
/// `node` may be absent (`None`), in which case the visitor is never called.
/// Children are visited in a fixed per-shape order; absent optional children
/// are skipped. Leaf shapes (tables, sort fields, references, literals) are
/// visited but never descended into.
///
/// The tree must be acyclic. Recursion depth follows the nesting depth of the
/// tree, so callers handing in untrusted input should bound that depth when the
/// tree is built.
pub fn walk<'a, V>(visitor: &mut V, node: impl Into<Option<Node<'a>>>)
where
    V: Visitor<'a> + ?Sized,
{
    // A boolean visitor can only skip children, never stop, so the result is
    // always `Continue`.
    let _ = try_walk(&mut Pruning(visitor), node);
}

/// Traverses a node hierarchy in depth-first pre-order, calling `f` for each node
pub fn walk_func<'a, F>(node: impl Into<Option<Node<'a>>>, f: F)
where
    F: FnMut(Node<'a>) -> bool,
{
    walk(&mut visit_fn(f), node);
}

/// Like [`walk`] but lets the visitor abort the whole traversal.
///
/// Returns `ControlFlow::Break(())` when the visitor answered
/// [`VisitAction::Stop`]; no node is visited after that.
pub fn try_walk<'a, V>(visitor: &mut V, node: impl Into<Option<Node<'a>>>) -> ControlFlow<()>
where
    V: ControlVisitor<'a> + ?Sized,
{
    let Some(node) = node.into() else {
        return ControlFlow::Continue(());
    };

    match visitor.visit(node) {
        VisitAction::Continue => {}
        VisitAction::SkipChildren => return ControlFlow::Continue(()),
        VisitAction::Stop => return ControlFlow::Break(()),
    }

    trace!(node = %node.kind(), "descending");
    walk_children(visitor, node)
}

pub fn try_walk_func<'a, F>(node: impl Into<Option<Node<'a>>>, f: F) -> ControlFlow<()>
where
    F: FnMut(Node<'a>) -> VisitAction,
{
    try_walk(&mut control_fn(f), node)
}

fn walk_children<'a, V>(visitor: &mut V, node: Node<'a>) -> ControlFlow<()>
where
    V: ControlVisitor<'a> + ?Sized,
{
    match node {
        Node::SelectStatement(stmt) => {
            try_walk(visitor, stmt.fields.as_ref().map(Node::Fields))?;
            try_walk(visitor, stmt.sources.as_ref().map(Node::Sources))?;
            try_walk(visitor, stmt.joins.as_ref().map(Node::Joins))?;
            try_walk(visitor, stmt.condition.as_ref().map(Node::Expr))?;
            try_walk(visitor, stmt.dimensions.as_ref().map(Node::Dimensions))?;
            try_walk(visitor, stmt.having.as_ref().map(Node::Expr))?;
            try_walk(visitor, stmt.sort_fields.as_ref().map(Node::SortFields))?;
        }
        Node::Fields(fields) => {
            for field in fields.iter() {
                try_walk(visitor, Node::Field(field))?;
            }
        }
        Node::Field(field) => {
            try_walk(visitor, Node::Expr(&field.expr))?;
            // An alias reference is followed to the expression it names, so
            // the slot yields both the reference and its target.
            if let Expr::FieldRef(field_ref) = &field.expr
                && field_ref.is_alias()
            {
                try_walk(visitor, field_ref.alias_target().map(Node::Expr))?;
            }
        }
        Node::Sources(sources) => {
            for table in sources.iter() {
                try_walk(visitor, Node::Table(table))?;
            }
        }
        Node::Joins(joins) => {
            for join in joins.iter() {
                try_walk(visitor, Node::Join(join))?;
            }
        }
        Node::Join(join) => {
            try_walk(visitor, join.expr.as_ref().map(Node::Expr))?;
        }
        Node::Dimensions(dims) => {
            try_walk(visitor, dims.window().map(Node::Window))?;
            for dimension in dims.groups() {
                try_walk(visitor, Node::Expr(&dimension.expr))?;
            }
        }
        Node::Window(window) => {
            try_walk(visitor, window.length.as_ref().map(Node::Expr))?;
            try_walk(visitor, window.interval.as_ref().map(Node::Expr))?;
            try_walk(visitor, window.filter.as_ref().map(Node::Expr))?;
        }
        Node::SortFields(sort_fields) => {
            for sort_field in sort_fields.iter() {
                try_walk(visitor, Node::SortField(sort_field))?;
            }
        }
        Node::WhenClause(when) => {
            try_walk(visitor, Node::Expr(&when.expr))?;
            try_walk(visitor, Node::Expr(&when.result))?;
        }
        Node::Expr(expr) => walk_expr(visitor, expr)?,
        // The sort expression of a SortField is intentionally not descended
        // into; passes that need it read `SortField::expr` themselves.
        Node::Table(_) | Node::SortField(_) => {}
    }

    ControlFlow::Continue(())
}

fn walk_expr<'a, V>(visitor: &mut V, expr: &'a Expr) -> ControlFlow<()>
where
    V: ControlVisitor<'a> + ?Sized,
{
    match expr {
        Expr::Binary(binary) => {
            try_walk(visitor, Node::Expr(&binary.lhs))?;
            try_walk(visitor, Node::Expr(&binary.rhs))?;
        }
        Expr::Call(call) => {
            for arg in &call.args {
                try_walk(visitor, Node::Expr(arg))?;
            }
        }
        Expr::Paren(paren) => {
            try_walk(visitor, Node::Expr(&paren.expr))?;
        }
        Expr::Case(case) => {
            try_walk(visitor, case.value.as_deref().map(Node::Expr))?;
            for when in &case.when_clauses {
                try_walk(visitor, Node::WhenClause(when))?;
            }
            try_walk(visitor, case.else_clause.as_deref().map(Node::Expr))?;
        }
        Expr::FieldRef(_) | Expr::MetaRef(_) | Expr::Wildcard(_) | Expr::Literal(_) => {}
    }

    ControlFlow::Continue(())
}
