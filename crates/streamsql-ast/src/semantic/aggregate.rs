use crate::ast::{
    expr::{Call, Expr},
    node::Node,
    visitor::VisitAction,
    walk::{try_walk_func, walk_func},
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

const DEFAULT_AGGREGATES: &[&str] = &[
    "avg",
    "count",
    "max",
    "min",
    "sum",
    "collect",
    "deduplicate",
    "last_value",
    "stddev",
    "var",
    "median",
    "percentile_cont",
    "percentile_disc",
];

/// Names of the functions that aggregate over a window or group.
///
/// Lookups are case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct FunctionRegistry {
    aggregates: BTreeSet<String>,
}

impl FunctionRegistry {
    pub fn empty() -> Self {
        Self {
            aggregates: BTreeSet::new(),
        }
    }

    pub fn register(&mut self, name: &str) {
        self.aggregates.insert(name.to_lowercase());
    }

    pub fn is_aggregate(&self, name: &str) -> bool {
        self.aggregates.contains(&name.to_lowercase())
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.aggregates.iter().map(String::as_str)
    }
}

impl Default for FunctionRegistry {
    fn default() -> Self {
        DEFAULT_AGGREGATES.iter().map(|s| s.to_string()).collect::<Vec<_>>().into()
    }
}

impl From<Vec<String>> for FunctionRegistry {
    fn from(names: Vec<String>) -> Self {
        let mut registry = Self::empty();
        for name in &names {
            registry.register(name);
        }
        registry
    }
}

impl From<FunctionRegistry> for Vec<String> {
    fn from(registry: FunctionRegistry) -> Self {
        registry.aggregates.into_iter().collect()
    }
}

pub fn is_aggregate_call(call: &Call, registry: &FunctionRegistry) -> bool {
    registry.is_aggregate(&call.name)
}

/// Whether any aggregate call occurs below `node`; stops at the first one
pub fn has_aggregate<'a>(node: impl Into<Option<Node<'a>>>, registry: &FunctionRegistry) -> bool {
    try_walk_func(node, |n| match n {
        Node::Expr(Expr::Call(call)) if is_aggregate_call(call, registry) => VisitAction::Stop,
        _ => VisitAction::Continue,
    })
    .is_break()
}

/// Outermost aggregate calls below `node`, in visiting order.
///
/// Arguments of an aggregate are not searched, so `max(sum(a))` yields only
/// the `max` call.
pub fn aggregate_calls<'a>(
    node: impl Into<Option<Node<'a>>>,
    registry: &FunctionRegistry,
) -> Vec<&'a Call> {
    let mut calls = Vec::new();
    walk_func(node, |n| match n {
        Node::Expr(Expr::Call(call)) if is_aggregate_call(call, registry) => {
            calls.push(call);
            false
        }
        _ => true,
    });
    calls
}
