use streamsql_ast::{Node, SelectStatement, from_json, walk_func};

/// Labels of every node visited by an always-descending walk
pub fn trace(stmt: &SelectStatement) -> Vec<String> {
    let mut labels = Vec::new();
    walk_func(Node::from(stmt), |n| {
        labels.push(n.to_string());
        true
    });
    labels
}

pub fn parse(source: &str) -> SelectStatement {
    from_json(source).expect("fixture should decode")
}

/// `SELECT device, avg(temperature) AS t FROM demo WHERE demo.temperature > 20
///  GROUP BY TUMBLINGWINDOW(ss, 10), device HAVING avg(temperature) > 30
///  ORDER BY device`
pub const WINDOWED_RULE: &str = r#"
{
  "fields": [
    { "name": "device", "alias": null, "expr": { "FieldRef": { "stream": "Default", "name": "device", "alias_ref": null } } },
    { "name": "avg", "alias": "t", "expr": { "Call": { "name": "avg", "args": [
        { "FieldRef": { "stream": "Default", "name": "temperature", "alias_ref": null } }
    ] } } }
  ],
  "sources": [ { "name": "demo", "alias": null } ],
  "condition": { "Binary": {
    "op": "GreaterThan",
    "lhs": { "FieldRef": { "stream": { "Named": "demo" }, "name": "temperature", "alias_ref": null } },
    "rhs": { "Literal": { "Integer": 20 } }
  } },
  "dimensions": {
    "window": {
      "window_type": "Tumbling",
      "time_unit": "Seconds",
      "length": { "Literal": { "Integer": 10 } },
      "interval": null,
      "filter": null
    },
    "groups": [ { "expr": { "FieldRef": { "stream": "Default", "name": "device", "alias_ref": null } } } ]
  },
  "having": { "Binary": {
    "op": "GreaterThan",
    "lhs": { "Call": { "name": "avg", "args": [
        { "FieldRef": { "stream": "Default", "name": "temperature", "alias_ref": null } }
    ] } },
    "rhs": { "Literal": { "Integer": 30 } }
  } },
  "sort_fields": [ { "name": "device", "stream": null, "ascending": true, "expr": null } ]
}
"#;

/// `SELECT a * 2 AS double_a, double_a + 1 AS b FROM s1 INNER JOIN s2 ON s1.id = s2.id`
pub const ALIAS_JOIN_RULE: &str = r#"
{
  "fields": [
    { "name": "double_a", "alias": null, "expr": { "FieldRef": {
        "stream": "Alias",
        "name": "double_a",
        "alias_ref": { "expression": { "Binary": {
            "op": "Multiply",
            "lhs": { "FieldRef": { "stream": "Default", "name": "a", "alias_ref": null } },
            "rhs": { "Literal": { "Integer": 2 } }
        } } }
    } } },
    { "name": "b", "alias": null, "expr": { "Binary": {
        "op": "Add",
        "lhs": { "FieldRef": { "stream": "Alias", "name": "double_a", "alias_ref": { "expression": { "Literal": { "Integer": 0 } } } } },
        "rhs": { "Literal": { "Integer": 1 } }
    } } }
  ],
  "sources": [ { "name": "s1", "alias": null } ],
  "joins": [ { "name": "s2", "alias": null, "join_type": "Inner", "expr": { "Binary": {
      "op": "Equal",
      "lhs": { "FieldRef": { "stream": { "Named": "s1" }, "name": "id", "alias_ref": null } },
      "rhs": { "FieldRef": { "stream": { "Named": "s2" }, "name": "id", "alias_ref": null } }
  } } } ]
}
"#;
