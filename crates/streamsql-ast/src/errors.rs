use serde::Serialize;
use std::fmt;

/// Severity level for validation issues
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Statement clause an issue was found in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Clause {
    Select,
    From,
    Join,
    Where,
    GroupBy,
    Having,
    OrderBy,
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Clause::Select => write!(f, "SELECT"),
            Clause::From => write!(f, "FROM"),
            Clause::Join => write!(f, "JOIN"),
            Clause::Where => write!(f, "WHERE"),
            Clause::GroupBy => write!(f, "GROUP BY"),
            Clause::Having => write!(f, "HAVING"),
            Clause::OrderBy => write!(f, "ORDER BY"),
        }
    }
}

/// Type of semantic validation issue
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ValidationIssueKind {
    // Structure
    EmptyFields,
    MissingSource,

    // Reference validation
    UndefinedStream { name: String },
    UnknownFunction { name: String },

    // Aggregate placement
    AggregateInCondition { function: String },
    AggregateInGroupBy { function: String },

    // Best practices (warnings)
    HavingWithoutAggregate,
}

impl fmt::Display for ValidationIssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationIssueKind::EmptyFields => write!(f, "statement selects no fields"),
            ValidationIssueKind::MissingSource => write!(f, "statement has no source stream"),
            ValidationIssueKind::UndefinedStream { name } => {
                write!(f, "undefined stream '{}'", name)
            }
            ValidationIssueKind::UnknownFunction { name } => {
                write!(f, "unknown function '{}'", name)
            }
            ValidationIssueKind::AggregateInCondition { function } => {
                write!(f, "aggregate function '{}' is not allowed in WHERE", function)
            }
            ValidationIssueKind::AggregateInGroupBy { function } => {
                write!(
                    f,
                    "aggregate function '{}' is not allowed in GROUP BY",
                    function
                )
            }
            ValidationIssueKind::HavingWithoutAggregate => {
                write!(f, "HAVING used without GROUP BY or aggregate functions")
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationIssue {
    pub severity: Severity,
    pub kind: ValidationIssueKind,
    pub clause: Option<Clause>,
    pub message: String,
}

impl ValidationIssue {
    pub fn error(kind: ValidationIssueKind, clause: Option<Clause>) -> Self {
        let message = kind.to_string();
        Self {
            severity: Severity::Error,
            kind,
            clause,
            message,
        }
    }

    pub fn warning(kind: ValidationIssueKind, clause: Option<Clause>) -> Self {
        let message = kind.to_string();
        Self {
            severity: Severity::Warning,
            kind,
            clause,
            message,
        }
    }

    pub fn with_message(mut self, message: String) -> Self {
        self.message = message;
        self
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.clause {
            Some(clause) => write!(f, "{} in {} clause: {}", self.severity, clause, self.message),
            None => write!(f, "{}: {}", self.severity, self.message),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationResult {
    pub errors: Vec<ValidationIssue>,
    pub warnings: Vec<ValidationIssue>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn add_issue(&mut self, issue: ValidationIssue) {
        match issue.severity {
            Severity::Error => self.errors.push(issue),
            Severity::Warning => self.warnings.push(issue),
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn is_valid(&self) -> bool {
        !self.has_errors()
    }

    pub fn merge(&mut self, other: ValidationResult) {
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.errors.is_empty() && self.warnings.is_empty() {
            return write!(f, "No validation issues");
        }

        for error in &self.errors {
            writeln!(f, "{}", error)?;
        }

        for warning in &self.warnings {
            writeln!(f, "{}", warning)?;
        }

        Ok(())
    }
}
