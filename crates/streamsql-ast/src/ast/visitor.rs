use crate::ast::node::Node;

/// Visitor trait for AST traversal.
///
/// `visit` is called once per node, before any of the node's children. Returning
/// `false` prunes the children of that node only; siblings and the remaining
/// children of its ancestors are still visited. Visitors that need to report
/// problems keep them in their own state and expose them after the walk.
pub trait Visitor<'a> {
    fn visit(&mut self, node: Node<'a>) -> bool;
}

impl<'a, V> Visitor<'a> for &mut V
where
    V: Visitor<'a> + ?Sized,
{
    fn visit(&mut self, node: Node<'a>) -> bool {
        (**self).visit(node)
    }
}

/// Adapts a plain callback into a [`Visitor`]
#[derive(Debug, Clone, Copy)]
pub struct FnVisitor<F>(F);

pub fn visit_fn<'a, F>(f: F) -> FnVisitor<F>
where
    F: FnMut(Node<'a>) -> bool,
{
    FnVisitor(f)
}

impl<'a, F> Visitor<'a> for FnVisitor<F>
where
    F: FnMut(Node<'a>) -> bool,
{
    fn visit(&mut self, node: Node<'a>) -> bool {
        (self.0)(node)
    }
}

/// Outcome of a [`ControlVisitor`] call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisitAction {
    /// Descend into the node's children
    Continue,
    /// Leave the node's children out, carry on with its siblings
    SkipChildren,
    /// Abort the whole traversal
    Stop,
}

impl From<bool> for VisitAction {
    fn from(descend: bool) -> Self {
        if descend {
            VisitAction::Continue
        } else {
            VisitAction::SkipChildren
        }
    }
}

/// Visitor that can abort a traversal globally, see [`crate::ast::walk::try_walk`]
pub trait ControlVisitor<'a> {
    fn visit(&mut self, node: Node<'a>) -> VisitAction;
}

impl<'a, V> ControlVisitor<'a> for &mut V
where
    V: ControlVisitor<'a> + ?Sized,
{
    fn visit(&mut self, node: Node<'a>) -> VisitAction {
        (**self).visit(node)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FnControlVisitor<F>(F);

pub fn control_fn<'a, F>(f: F) -> FnControlVisitor<F>
where
    F: FnMut(Node<'a>) -> VisitAction,
{
    FnControlVisitor(f)
}

impl<'a, F> ControlVisitor<'a> for FnControlVisitor<F>
where
    F: FnMut(Node<'a>) -> VisitAction,
{
    fn visit(&mut self, node: Node<'a>) -> VisitAction {
        (self.0)(node)
    }
}

/// Runs a boolean [`Visitor`] under the control-flow protocol
pub(crate) struct Pruning<V>(pub(crate) V);

impl<'a, V> ControlVisitor<'a> for Pruning<V>
where
    V: Visitor<'a>,
{
    fn visit(&mut self, node: Node<'a>) -> VisitAction {
        VisitAction::from(self.0.visit(node))
    }
}
