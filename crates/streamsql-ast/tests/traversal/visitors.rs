use crate::helpers::{ALIAS_JOIN_RULE, WINDOWED_RULE, parse};
use std::{collections::HashMap, ops::ControlFlow};
use streamsql_ast::{
    ControlVisitor, Node, NodeKind, VisitAction, Visitor,
    semantic::{
        aggregate::{FunctionRegistry, has_aggregate},
        config::ValidatorConfig,
        field_refs::{collect_field_refs, referenced_streams},
        validator::validate,
    },
    try_walk, walk,
};

#[derive(Default)]
struct KindCounter {
    counts: HashMap<NodeKind, usize>,
}

impl<'a> Visitor<'a> for KindCounter {
    fn visit(&mut self, node: Node<'a>) -> bool {
        *self.counts.entry(node.kind()).or_default() += 1;
        true
    }
}

#[test]
fn test_struct_visitor_counts_kinds() {
    let stmt = parse(WINDOWED_RULE);
    let mut counter = KindCounter::default();

    walk(&mut counter, Node::from(&stmt));

    assert_eq!(counter.counts[&NodeKind::SelectStatement], 1);
    assert_eq!(counter.counts[&NodeKind::Call], 2);
    assert_eq!(counter.counts[&NodeKind::FieldRef], 5);
    assert_eq!(counter.counts[&NodeKind::Literal], 3);
    assert_eq!(counter.counts[&NodeKind::SortField], 1);
    assert!(!counter.counts.contains_key(&NodeKind::Joins));
}

/// Finds the first join condition and stops the traversal there
struct FirstJoin<'a> {
    found: Option<&'a str>,
    visited: usize,
}

impl<'a> ControlVisitor<'a> for FirstJoin<'a> {
    fn visit(&mut self, node: Node<'a>) -> VisitAction {
        self.visited += 1;
        match node {
            Node::Join(join) => {
                self.found = Some(join.name.as_str());
                VisitAction::Stop
            }
            Node::Fields(_) => VisitAction::SkipChildren,
            _ => VisitAction::Continue,
        }
    }
}

#[test]
fn test_control_visitor_stops_at_first_join() {
    let stmt = parse(ALIAS_JOIN_RULE);
    let mut finder = FirstJoin {
        found: None,
        visited: 0,
    };

    let flow = try_walk(&mut finder, Node::from(&stmt));

    assert_eq!(flow, ControlFlow::Break(()));
    assert_eq!(finder.found, Some("s2"));
    // SelectStatement, Fields, Sources, Table(s1), Joins, Join(s2)
    assert_eq!(finder.visited, 6);
}

#[test]
fn test_windowed_rule_validates() {
    let stmt = parse(WINDOWED_RULE);

    let result = validate(&stmt, &ValidatorConfig::default());
    assert!(result.is_valid(), "{}", result);
    assert!(result.warnings.is_empty());
    assert!(has_aggregate(
        stmt.having.as_ref().map(Node::Expr),
        &FunctionRegistry::default()
    ));
}

#[test]
fn test_join_streams_are_known() {
    let stmt = parse(ALIAS_JOIN_RULE);

    assert_eq!(referenced_streams(&stmt), vec!["s1", "s2"]);
    assert!(validate(&stmt, &ValidatorConfig::default()).is_valid());
}

#[test]
fn test_field_refs_follow_alias_slot() {
    let stmt = parse(ALIAS_JOIN_RULE);

    let names: Vec<String> = collect_field_refs(Node::from(&stmt))
        .iter()
        .map(|r| r.to_string())
        .collect();
    assert_eq!(names, vec!["double_a", "a", "double_a", "s1.id", "s2.id"]);
}
