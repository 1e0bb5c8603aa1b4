use crate::ast::expr::Expr;
use serde::{Deserialize, Serialize};
use std::{fmt, slice};

/// Root of a rule: `SELECT .. FROM .. [JOIN ..] [WHERE ..] [GROUP BY ..] [HAVING ..] [ORDER BY ..]`
///
/// Every clause is optional so that partially built statements (and the
/// output of rewrite passes) can be represented without placeholder values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SelectStatement {
    pub fields: Option<Fields>,
    pub sources: Option<Sources>,
    pub joins: Option<Joins>,
    pub condition: Option<Expr>,
    pub dimensions: Option<Dimensions>,
    pub having: Option<Expr>,
    pub sort_fields: Option<SortFields>,
}

/// Projection list
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Fields(pub Vec<Field>);

impl Fields {
    pub fn iter(&self) -> slice::Iter<'_, Field> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<Field>> for Fields {
    fn from(fields: Vec<Field>) -> Self {
        Fields(fields)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    pub alias: Option<String>,
    pub expr: Expr,
}

impl Field {
    pub fn new(name: &str, expr: Expr) -> Self {
        Self {
            name: name.to_string(),
            alias: None,
            expr,
        }
    }

    pub fn with_alias(mut self, alias: &str) -> Self {
        self.alias = Some(alias.to_string());
        self
    }

    /// Name under which the field appears in the output
    pub fn output_name(&self) -> &str {
        self.alias.as_deref().unwrap_or(&self.name)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Sources(pub Vec<Table>);

impl Sources {
    pub fn iter(&self) -> slice::Iter<'_, Table> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<Table>> for Sources {
    fn from(tables: Vec<Table>) -> Self {
        Sources(tables)
    }
}

/// Stream or table named in `FROM`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    pub name: String,
    pub alias: Option<String>,
}

impl Table {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            alias: None,
        }
    }

    pub fn with_alias(mut self, alias: &str) -> Self {
        self.alias = Some(alias.to_string());
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Joins(pub Vec<Join>);

impl Joins {
    pub fn iter(&self) -> slice::Iter<'_, Join> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<Join>> for Joins {
    fn from(joins: Vec<Join>) -> Self {
        Joins(joins)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JoinType {
    Inner,
    Left,
    Right,
    Full,
    Cross,
}

impl fmt::Display for JoinType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JoinType::Inner => write!(f, "INNER JOIN"),
            JoinType::Left => write!(f, "LEFT JOIN"),
            JoinType::Right => write!(f, "RIGHT JOIN"),
            JoinType::Full => write!(f, "FULL JOIN"),
            JoinType::Cross => write!(f, "CROSS JOIN"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Join {
    pub name: String,
    pub alias: Option<String>,
    pub join_type: JoinType,
    /// `ON` condition; absent for cross joins
    pub expr: Option<Expr>,
}

impl Join {
    pub fn new(name: &str, join_type: JoinType, expr: Option<Expr>) -> Self {
        Self {
            name: name.to_string(),
            alias: None,
            join_type,
            expr,
        }
    }
}

/// `GROUP BY` clause: an optional window plus the grouping expressions
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub window: Option<Window>,
    #[serde(default)]
    pub groups: Vec<Dimension>,
}

impl Dimensions {
    pub fn window(&self) -> Option<&Window> {
        self.window.as_ref()
    }

    pub fn groups(&self) -> &[Dimension] {
        &self.groups
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dimension {
    pub expr: Expr,
}

impl Dimension {
    pub fn new(expr: Expr) -> Self {
        Self { expr }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WindowType {
    Tumbling,
    Hopping,
    Sliding,
    Session,
    Count,
}

impl fmt::Display for WindowType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WindowType::Tumbling => write!(f, "TUMBLINGWINDOW"),
            WindowType::Hopping => write!(f, "HOPPINGWINDOW"),
            WindowType::Sliding => write!(f, "SLIDINGWINDOW"),
            WindowType::Session => write!(f, "SESSIONWINDOW"),
            WindowType::Count => write!(f, "COUNTWINDOW"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeUnit {
    Days,
    Hours,
    Minutes,
    Seconds,
    Milliseconds,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Window {
    pub window_type: WindowType,
    pub time_unit: Option<TimeUnit>,
    pub length: Option<Expr>,
    pub interval: Option<Expr>,
    /// `FILTER (WHERE ..)` applied to events before they enter the window
    pub filter: Option<Expr>,
}

impl Window {
    pub fn new(window_type: WindowType, time_unit: Option<TimeUnit>, length: Expr) -> Self {
        Self {
            window_type,
            time_unit,
            length: Some(length),
            interval: None,
            filter: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SortFields(pub Vec<SortField>);

impl SortFields {
    pub fn iter(&self) -> slice::Iter<'_, SortField> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<SortField>> for SortFields {
    fn from(fields: Vec<SortField>) -> Self {
        SortFields(fields)
    }
}

/// `ORDER BY` entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SortField {
    pub name: String,
    pub stream: Option<String>,
    pub ascending: bool,
    pub expr: Option<Expr>,
}

impl SortField {
    pub fn new(name: &str, ascending: bool) -> Self {
        Self {
            name: name.to_string(),
            stream: None,
            ascending,
            expr: None,
        }
    }
}
