use crate::helpers::{ALIAS_JOIN_RULE, WINDOWED_RULE, parse, trace};

#[test]
fn test_windowed_rule_trace() {
    let stmt = parse(WINDOWED_RULE);

    assert_eq!(
        trace(&stmt),
        vec![
            "SelectStatement",
            "Fields",
            "Field(device)",
            "FieldRef(device)",
            "Field(t)",
            "Call(avg)",
            "FieldRef(temperature)",
            "Sources",
            "Table(demo)",
            "BinaryExpr",
            "FieldRef(demo.temperature)",
            "Literal(20)",
            "Dimensions",
            "Window(TUMBLINGWINDOW)",
            "Literal(10)",
            "FieldRef(device)",
            "BinaryExpr",
            "Call(avg)",
            "FieldRef(temperature)",
            "Literal(30)",
            "SortFields",
            "SortField(device)",
        ]
    );
}

#[test]
fn test_alias_and_join_trace() {
    let stmt = parse(ALIAS_JOIN_RULE);

    assert_eq!(
        trace(&stmt),
        vec![
            "SelectStatement",
            "Fields",
            "Field(double_a)",
            "FieldRef(double_a)",
            "BinaryExpr",
            "FieldRef(a)",
            "Literal(2)",
            "Field(b)",
            "BinaryExpr",
            "FieldRef(double_a)",
            "Literal(1)",
            "Sources",
            "Table(s1)",
            "Joins",
            "Join(s2)",
            "BinaryExpr",
            "FieldRef(s1.id)",
            "FieldRef(s2.id)",
        ]
    );
}

#[test]
fn test_decoded_tree_survives_re_encoding() {
    let stmt = parse(WINDOWED_RULE);
    let json = streamsql_ast::to_json_pretty(&stmt).expect("statement should encode");

    assert_eq!(trace(&parse(&json)), trace(&stmt));
}
