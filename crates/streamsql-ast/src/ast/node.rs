use crate::ast::{
    expr::{Expr, WhenClause},
    statement::{
        Dimensions, Field, Fields, Join, Joins, SelectStatement, SortField, SortFields, Sources,
        Table, Window,
    },
};
use std::fmt;

/// Borrowed view of one visitable AST node.
///
/// The set of shapes is closed: the walker matches on it exhaustively, so
/// adding a variant here forces the dispatcher to say how (or whether) the new
/// shape is descended into.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Node<'a> {
    SelectStatement(&'a SelectStatement),
    Fields(&'a Fields),
    Field(&'a Field),
    Sources(&'a Sources),
    Table(&'a Table),
    Joins(&'a Joins),
    Join(&'a Join),
    Dimensions(&'a Dimensions),
    Window(&'a Window),
    SortFields(&'a SortFields),
    SortField(&'a SortField),
    Expr(&'a Expr),
    WhenClause(&'a WhenClause),
}

impl<'a> Node<'a> {
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::SelectStatement(_) => NodeKind::SelectStatement,
            Node::Fields(_) => NodeKind::Fields,
            Node::Field(_) => NodeKind::Field,
            Node::Sources(_) => NodeKind::Sources,
            Node::Table(_) => NodeKind::Table,
            Node::Joins(_) => NodeKind::Joins,
            Node::Join(_) => NodeKind::Join,
            Node::Dimensions(_) => NodeKind::Dimensions,
            Node::Window(_) => NodeKind::Window,
            Node::SortFields(_) => NodeKind::SortFields,
            Node::SortField(_) => NodeKind::SortField,
            Node::WhenClause(_) => NodeKind::WhenClause,
            Node::Expr(expr) => match expr {
                Expr::Binary(_) => NodeKind::BinaryExpr,
                Expr::Call(_) => NodeKind::Call,
                Expr::Paren(_) => NodeKind::ParenExpr,
                Expr::Case(_) => NodeKind::CaseExpr,
                Expr::FieldRef(_) => NodeKind::FieldRef,
                Expr::MetaRef(_) => NodeKind::MetaRef,
                Expr::Wildcard(_) => NodeKind::Wildcard,
                Expr::Literal(_) => NodeKind::Literal,
            },
        }
    }

    pub fn as_expr(&self) -> Option<&'a Expr> {
        match *self {
            Node::Expr(expr) => Some(expr),
            _ => None,
        }
    }

    /// Whether the walker never descends below this node
    pub fn is_leaf(&self) -> bool {
        matches!(
            self.kind(),
            NodeKind::Table
                | NodeKind::SortField
                | NodeKind::FieldRef
                | NodeKind::MetaRef
                | NodeKind::Wildcard
                | NodeKind::Literal
        )
    }
}

impl fmt::Display for Node<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Field(field) => write!(f, "Field({})", field.output_name()),
            Node::Table(table) => write!(f, "Table({})", table.name),
            Node::Join(join) => write!(f, "Join({})", join.name),
            Node::Window(window) => write!(f, "Window({})", window.window_type),
            Node::SortField(sort) => write!(f, "SortField({})", sort.name),
            Node::Expr(Expr::Call(call)) => write!(f, "Call({})", call.name),
            Node::Expr(Expr::FieldRef(field_ref)) => write!(f, "FieldRef({})", field_ref),
            Node::Expr(Expr::MetaRef(meta)) => write!(f, "MetaRef({})", meta.name),
            Node::Expr(Expr::Literal(literal)) => write!(f, "Literal({})", literal),
            _ => write!(f, "{}", self.kind()),
        }
    }
}

/// Concrete shape of a [`Node`], with expressions resolved to their variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    SelectStatement,
    Fields,
    Field,
    Sources,
    Table,
    Joins,
    Join,
    Dimensions,
    Window,
    SortFields,
    SortField,
    BinaryExpr,
    Call,
    ParenExpr,
    CaseExpr,
    WhenClause,
    FieldRef,
    MetaRef,
    Wildcard,
    Literal,
}

impl NodeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::SelectStatement => "SelectStatement",
            NodeKind::Fields => "Fields",
            NodeKind::Field => "Field",
            NodeKind::Sources => "Sources",
            NodeKind::Table => "Table",
            NodeKind::Joins => "Joins",
            NodeKind::Join => "Join",
            NodeKind::Dimensions => "Dimensions",
            NodeKind::Window => "Window",
            NodeKind::SortFields => "SortFields",
            NodeKind::SortField => "SortField",
            NodeKind::BinaryExpr => "BinaryExpr",
            NodeKind::Call => "Call",
            NodeKind::ParenExpr => "ParenExpr",
            NodeKind::CaseExpr => "CaseExpr",
            NodeKind::WhenClause => "WhenClause",
            NodeKind::FieldRef => "FieldRef",
            NodeKind::MetaRef => "MetaRef",
            NodeKind::Wildcard => "Wildcard",
            NodeKind::Literal => "Literal",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

macro_rules! impl_from_ref {
    ($($ty:ident),* $(,)?) => {
        $(
            impl<'a> From<&'a $ty> for Node<'a> {
                fn from(node: &'a $ty) -> Self {
                    Node::$ty(node)
                }
            }
        )*
    };
}

impl_from_ref!(
    SelectStatement,
    Fields,
    Field,
    Sources,
    Table,
    Joins,
    Join,
    Dimensions,
    Window,
    SortFields,
    SortField,
    Expr,
    WhenClause,
);
