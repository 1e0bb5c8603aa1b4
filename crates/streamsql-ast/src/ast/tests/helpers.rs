use crate::ast::{
    expr::Expr,
    node::Node,
    statement::{Field, Fields, SelectStatement},
    walk::walk_func,
};

/// Labels of every node visited by an always-descending walk
pub fn trace<'a>(node: impl Into<Option<Node<'a>>>) -> Vec<String> {
    let mut labels = Vec::new();
    walk_func(node, |n| {
        labels.push(n.to_string());
        true
    });
    labels
}

/// Statement with only a projection list
pub fn select(fields: Vec<Field>) -> SelectStatement {
    SelectStatement {
        fields: Some(Fields(fields)),
        ..Default::default()
    }
}

pub fn field(name: &str, expr: Expr) -> Field {
    Field::new(name, expr)
}

pub fn labels(expected: &[&str]) -> Vec<String> {
    expected.iter().map(|s| s.to_string()).collect()
}
