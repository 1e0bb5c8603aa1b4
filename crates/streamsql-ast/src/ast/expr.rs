use crate::ast::{literal::Literal, operator::BinaryOperator};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Expression sublanguage of a rule statement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expr {
    Binary(BinaryExpr),
    Call(Call),
    Paren(ParenExpr),
    Case(CaseExpr),
    FieldRef(FieldRef),
    MetaRef(MetaRef),
    Wildcard(Wildcard),
    Literal(Literal),
}

impl Expr {
    pub fn binary(op: BinaryOperator, lhs: Expr, rhs: Expr) -> Self {
        Expr::Binary(BinaryExpr {
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        })
    }

    pub fn call(name: &str, args: Vec<Expr>) -> Self {
        Expr::Call(Call {
            name: name.to_string(),
            args,
        })
    }

    pub fn paren(expr: Expr) -> Self {
        Expr::Paren(ParenExpr {
            expr: Box::new(expr),
        })
    }

    /// Unqualified column reference, e.g. `temperature`
    pub fn column(name: &str) -> Self {
        Expr::FieldRef(FieldRef::new(StreamName::Default, name))
    }

    /// Stream qualified column reference, e.g. `demo.temperature`
    pub fn qualified(stream: &str, name: &str) -> Self {
        Expr::FieldRef(FieldRef::new(StreamName::Named(stream.to_string()), name))
    }

    /// Reference to a field alias declared elsewhere in the statement
    pub fn alias(name: &str, target: Expr) -> Self {
        Expr::FieldRef(FieldRef::alias(name, target))
    }

    pub fn meta(name: &str) -> Self {
        Expr::MetaRef(MetaRef {
            stream: StreamName::Default,
            name: name.to_string(),
        })
    }

    pub fn wildcard() -> Self {
        Expr::Wildcard(Wildcard::default())
    }

    pub fn integer(value: i64) -> Self {
        Expr::Literal(Literal::Integer(value))
    }

    pub fn number(value: f64) -> Self {
        Expr::Literal(Literal::Number(value))
    }

    pub fn string(value: &str) -> Self {
        Expr::Literal(Literal::String(value.to_string()))
    }

    pub fn boolean(value: bool) -> Self {
        Expr::Literal(Literal::Boolean(value))
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Binary(b) => write!(f, "{} {} {}", b.lhs, b.op, b.rhs),
            Expr::Call(c) => {
                write!(f, "{}(", c.name)?;
                for (i, arg) in c.args.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", arg)?;
                }
                write!(f, ")")
            }
            Expr::Paren(p) => write!(f, "({})", p.expr),
            Expr::Case(c) => {
                write!(f, "CASE")?;
                if let Some(value) = &c.value {
                    write!(f, " {}", value)?;
                }
                for when in &c.when_clauses {
                    write!(f, " WHEN {} THEN {}", when.expr, when.result)?;
                }
                if let Some(else_clause) = &c.else_clause {
                    write!(f, " ELSE {}", else_clause)?;
                }
                write!(f, " END")
            }
            Expr::FieldRef(r) => write!(f, "{}", r),
            Expr::MetaRef(m) => match &m.stream {
                StreamName::Named(stream) => write!(f, "meta({}.{})", stream, m.name),
                _ => write!(f, "meta({})", m.name),
            },
            Expr::Wildcard(w) => {
                write!(f, "*")?;
                if !w.except.is_empty() {
                    write!(f, " EXCEPT({})", w.except.join(", "))?;
                }
                Ok(())
            }
            Expr::Literal(l) => write!(f, "{}", l),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BinaryExpr {
    pub op: BinaryOperator,
    pub lhs: Box<Expr>,
    pub rhs: Box<Expr>,
}

/// Function call, scalar or aggregate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Call {
    pub name: String,
    #[serde(default)]
    pub args: Vec<Expr>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParenExpr {
    pub expr: Box<Expr>,
}

/// `CASE [value] WHEN .. THEN .. [ELSE ..] END`
///
/// Without `value` every when clause carries a boolean condition; with it each
/// clause is compared against `value`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseExpr {
    pub value: Option<Box<Expr>>,
    pub when_clauses: Vec<WhenClause>,
    pub else_clause: Option<Box<Expr>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WhenClause {
    pub expr: Expr,
    pub result: Expr,
}

impl WhenClause {
    pub fn new(expr: Expr, result: Expr) -> Self {
        Self { expr, result }
    }
}

/// Stream qualifier of a field or metadata reference
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StreamName {
    /// No qualifier, resolved against the default stream
    Default,
    /// Points at a field alias rather than a stream column
    Alias,
    Named(String),
}

impl StreamName {
    pub fn as_named(&self) -> Option<&str> {
        match self {
            StreamName::Named(name) => Some(name),
            _ => None,
        }
    }
}

/// Reference to a column, or to a field alias when `stream` is
/// [`StreamName::Alias`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldRef {
    pub stream: StreamName,
    pub name: String,
    pub alias_ref: Option<AliasRef>,
}

impl FieldRef {
    pub fn new(stream: StreamName, name: &str) -> Self {
        Self {
            stream,
            name: name.to_string(),
            alias_ref: None,
        }
    }

    pub fn alias(name: &str, target: Expr) -> Self {
        Self {
            stream: StreamName::Alias,
            name: name.to_string(),
            alias_ref: Some(AliasRef {
                expression: Box::new(target),
            }),
        }
    }

    pub fn is_alias(&self) -> bool {
        self.stream == StreamName::Alias && self.alias_ref.is_some()
    }

    /// The expression an alias reference points to
    pub fn alias_target(&self) -> Option<&Expr> {
        if self.stream != StreamName::Alias {
            return None;
        }
        self.alias_ref.as_ref().map(|a| a.expression.as_ref())
    }
}

impl fmt::Display for FieldRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.stream {
            StreamName::Named(stream) => write!(f, "{}.{}", stream, self.name),
            _ => write!(f, "{}", self.name),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AliasRef {
    pub expression: Box<Expr>,
}

/// Reference to message metadata, e.g. `meta(topic)`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetaRef {
    pub stream: StreamName,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Wildcard {
    #[serde(default)]
    pub except: Vec<String>,
}
