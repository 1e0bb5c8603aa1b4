use crate::ast::{
    expr::{Expr, FieldRef},
    node::Node,
    statement::SelectStatement,
    walk::walk_func,
};

/// Every field reference below `node`, in visiting order.
///
/// Alias references in a projection slot are reported together with the
/// references of the expression they name.
pub fn collect_field_refs<'a>(node: impl Into<Option<Node<'a>>>) -> Vec<&'a FieldRef> {
    let mut refs = Vec::new();
    walk_func(node, |n| {
        if let Node::Expr(Expr::FieldRef(field_ref)) = n {
            refs.push(field_ref);
        }
        true
    });
    refs
}

/// Distinct stream qualifiers used by field and metadata references, in order
/// of first use
pub fn referenced_streams(stmt: &SelectStatement) -> Vec<&str> {
    let mut streams: Vec<&str> = Vec::new();
    walk_func(Node::from(stmt), |n| {
        let stream = match n {
            Node::Expr(Expr::FieldRef(field_ref)) => field_ref.stream.as_named(),
            Node::Expr(Expr::MetaRef(meta)) => meta.stream.as_named(),
            _ => None,
        };
        if let Some(stream) = stream
            && !streams.contains(&stream)
        {
            streams.push(stream);
        }
        true
    });
    streams
}
