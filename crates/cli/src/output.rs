use crate::error::CliError;
use serde::Serialize;
use streamsql_ast::{
    Node, SelectStatement,
    errors::ValidationResult,
    semantic::field_refs::{collect_field_refs, referenced_streams},
    walk_func,
};

/// Labels of all nodes of `stmt` in visiting order
pub fn trace_labels(stmt: &SelectStatement) -> Vec<String> {
    let mut labels = Vec::new();
    walk_func(Node::from(stmt), |node| {
        labels.push(node.to_string());
        true
    });
    labels
}

#[derive(Debug, Serialize, PartialEq)]
pub struct RefsReport {
    pub streams: Vec<String>,
    pub fields: Vec<String>,
}

impl RefsReport {
    pub fn from_statement(stmt: &SelectStatement) -> Self {
        let streams = referenced_streams(stmt)
            .into_iter()
            .map(str::to_string)
            .collect();

        let mut fields: Vec<String> = Vec::new();
        for field_ref in collect_field_refs(Node::from(stmt)) {
            let name = field_ref.to_string();
            if !fields.contains(&name) {
                fields.push(name);
            }
        }

        Self { streams, fields }
    }
}

pub fn to_json<T: Serialize>(value: &T) -> Result<String, CliError> {
    serde_json::to_string_pretty(value).map_err(CliError::JsonSerialize)
}

pub async fn write_report(result: &ValidationResult, path: String) -> Result<(), CliError> {
    let report_json = to_json(result)?;
    tokio::fs::write(path, report_json).await?;
    Ok(())
}

pub fn print_report(result: &ValidationResult) -> Result<(), CliError> {
    let report_json = to_json(result)?;
    println!("{report_json}");
    Ok(())
}
