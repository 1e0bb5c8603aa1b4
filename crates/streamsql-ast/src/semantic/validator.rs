use crate::{
    ast::{
        expr::{Call, Expr, StreamName},
        node::Node,
        statement::SelectStatement,
        visitor::Visitor,
        walk::walk,
    },
    errors::{Clause, ValidationIssue, ValidationIssueKind, ValidationResult},
    semantic::{
        aggregate::{aggregate_calls, has_aggregate},
        config::ValidatorConfig,
    },
};
use std::collections::HashSet;
use tracing::debug;

/// Semantic validator for rule statements.
///
/// Walks each clause separately so issues can be attributed to the clause
/// they occur in. Problems are collected, never raised; the result is read
/// after the walk.
pub struct SemanticValidator<'c> {
    config: &'c ValidatorConfig,
    streams: HashSet<String>,
    reported_streams: HashSet<String>,
    clause: Option<Clause>,
    issues: ValidationResult,
}

impl<'c> SemanticValidator<'c> {
    pub fn new(config: &'c ValidatorConfig) -> Self {
        SemanticValidator {
            config,
            streams: HashSet::new(),
            reported_streams: HashSet::new(),
            clause: None,
            issues: ValidationResult::new(),
        }
    }

    pub fn validate(mut self, stmt: &SelectStatement) -> ValidationResult {
        self.register_streams(stmt);
        self.check_structure(stmt);

        self.walk_clause(Clause::Select, stmt.fields.as_ref().map(Node::Fields));
        self.walk_clause(Clause::Join, stmt.joins.as_ref().map(Node::Joins));
        self.walk_clause(Clause::Where, stmt.condition.as_ref().map(Node::Expr));
        self.walk_clause(Clause::GroupBy, stmt.dimensions.as_ref().map(Node::Dimensions));
        self.walk_clause(Clause::Having, stmt.having.as_ref().map(Node::Expr));
        self.check_sort_fields(stmt);

        self.check_aggregates(stmt);

        self.issues
    }

    fn register_streams(&mut self, stmt: &SelectStatement) {
        if let Some(sources) = &stmt.sources {
            for table in sources.iter() {
                self.streams.insert(table.name.clone());
                if let Some(alias) = &table.alias {
                    self.streams.insert(alias.clone());
                }
            }
        }

        if let Some(joins) = &stmt.joins {
            for join in joins.iter() {
                self.streams.insert(join.name.clone());
                if let Some(alias) = &join.alias {
                    self.streams.insert(alias.clone());
                }
            }
        }
    }

    fn check_structure(&mut self, stmt: &SelectStatement) {
        if stmt.fields.as_ref().is_none_or(|fields| fields.is_empty()) {
            self.record(ValidationIssue::error(
                ValidationIssueKind::EmptyFields,
                Some(Clause::Select),
            ));
        }

        if stmt.sources.as_ref().is_none_or(|sources| sources.is_empty()) {
            self.record(ValidationIssue::error(
                ValidationIssueKind::MissingSource,
                Some(Clause::From),
            ));
        }
    }

    fn walk_clause<'a>(&mut self, clause: Clause, node: Option<Node<'a>>) {
        self.clause = Some(clause);
        walk(self, node);
        self.clause = None;
    }

    // Sort fields are leaves for the walker, so their qualifiers are read here.
    fn check_sort_fields(&mut self, stmt: &SelectStatement) {
        let Some(sort_fields) = &stmt.sort_fields else {
            return;
        };

        self.clause = Some(Clause::OrderBy);
        for sort_field in sort_fields.iter() {
            if let Some(stream) = &sort_field.stream {
                self.check_stream(stream);
            }
        }
        self.clause = None;
    }

    fn check_aggregates(&mut self, stmt: &SelectStatement) {
        let config = self.config;
        let registry = &config.aggregate_functions;

        let in_condition: Vec<String> =
            aggregate_calls(stmt.condition.as_ref().map(Node::Expr), registry)
                .into_iter()
                .map(|call| call.name.clone())
                .collect();
        for function in in_condition {
            self.record(ValidationIssue::error(
                ValidationIssueKind::AggregateInCondition { function },
                Some(Clause::Where),
            ));
        }

        let mut in_groups = Vec::new();
        if let Some(dims) = &stmt.dimensions {
            for dimension in dims.groups() {
                in_groups.extend(
                    aggregate_calls(Node::Expr(&dimension.expr), registry)
                        .into_iter()
                        .map(|call| call.name.clone()),
                );
            }
        }
        for function in in_groups {
            self.record(ValidationIssue::error(
                ValidationIssueKind::AggregateInGroupBy { function },
                Some(Clause::GroupBy),
            ));
        }

        if stmt.having.is_some()
            && stmt.dimensions.is_none()
            && !has_aggregate(stmt.fields.as_ref().map(Node::Fields), registry)
            && !has_aggregate(stmt.having.as_ref().map(Node::Expr), registry)
        {
            self.record(ValidationIssue::warning(
                ValidationIssueKind::HavingWithoutAggregate,
                Some(Clause::Having),
            ));
        }
    }

    fn check_stream(&mut self, stream: &str) {
        if self.config.allow_unlisted_streams || self.streams.contains(stream) {
            return;
        }
        if !self.reported_streams.insert(stream.to_string()) {
            return;
        }
        let kind = ValidationIssueKind::UndefinedStream {
            name: stream.to_string(),
        };
        let mut known: Vec<&str> = self.streams.iter().map(String::as_str).collect();
        known.sort_unstable();
        let message = if known.is_empty() {
            kind.to_string()
        } else {
            format!("{} (known streams: {})", kind, known.join(", "))
        };
        self.record(ValidationIssue::error(kind, self.clause).with_message(message));
    }

    fn check_call(&mut self, call: &Call) {
        if !self.config.is_known_function(&call.name) {
            self.record(ValidationIssue::warning(
                ValidationIssueKind::UnknownFunction {
                    name: call.name.clone(),
                },
                self.clause,
            ));
        }
    }

    fn record(&mut self, issue: ValidationIssue) {
        debug!(issue = %issue, "recorded validation issue");
        self.issues.add_issue(issue);
    }
}

impl<'a> Visitor<'a> for SemanticValidator<'_> {
    fn visit(&mut self, node: Node<'a>) -> bool {
        match node {
            Node::Expr(Expr::FieldRef(field_ref)) => {
                if let StreamName::Named(stream) = &field_ref.stream {
                    self.check_stream(stream);
                }
            }
            Node::Expr(Expr::MetaRef(meta)) => {
                if let StreamName::Named(stream) = &meta.stream {
                    self.check_stream(stream);
                }
            }
            Node::Expr(Expr::Call(call)) => self.check_call(call),
            _ => {}
        }
        true
    }
}

pub fn validate(stmt: &SelectStatement, config: &ValidatorConfig) -> ValidationResult {
    SemanticValidator::new(config).validate(stmt)
}
