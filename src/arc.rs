/*!
# Arcs and Edges

An **arc** is one directed connection out of a node. It is stored inside the arc list of its
source node and thus only needs to know its target (and optionally a label):

- [`Node`] itself is an unlabeled arc,
- [`Half<L>`] is a labeled arc `(to, label)`.

Both implement [`Arc`], which lets [`AdjacencyList`](crate::repr::AdjacencyList) and every
algorithm on it be written once for labeled and unlabeled graphs.

An [`Edge`] names both endpoints explicitly and is used when arcs are exported as an edge list.
*/

use std::fmt::{Debug, Display};

use crate::node::*;

/// A directed arc as stored in the arc list of its source node.
pub trait Arc: Copy {
    /// Label carried by the arc; `()` for unlabeled arcs.
    type Label: Copy + PartialEq;

    /// Target node of the arc
    fn to(&self) -> Node;

    /// Label of the arc
    fn label(&self) -> Self::Label;

    /// Returns the same arc redirected to `to` (label is kept)
    fn with_to(self, to: Node) -> Self;

    /// Creates an arc pointing to `to` carrying `label`
    fn from_parts(to: Node, label: Self::Label) -> Self;
}

impl Arc for Node {
    type Label = ();

    fn to(&self) -> Node {
        *self
    }

    fn label(&self) -> Self::Label {}

    fn with_to(self, to: Node) -> Self {
        to
    }

    fn from_parts(to: Node, _label: Self::Label) -> Self {
        to
    }
}

/// A labeled arc: the target node plus an application defined label
/// (a weight key, a character, ...).
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Half<L> {
    pub to: Node,
    pub label: L,
}

impl<L> Half<L> {
    pub const fn new(to: Node, label: L) -> Self {
        Self { to, label }
    }
}

impl<L> Arc for Half<L>
where
    L: Copy + PartialEq,
{
    type Label = L;

    fn to(&self) -> Node {
        self.to
    }

    fn label(&self) -> L {
        self.label
    }

    fn with_to(self, to: Node) -> Self {
        Half { to, ..self }
    }

    fn from_parts(to: Node, label: L) -> Self {
        Half { to, label }
    }
}

impl<L> From<(Node, L)> for Half<L> {
    fn from(value: (Node, L)) -> Self {
        Half::new(value.0, value.1)
    }
}

/// An edge is defined by two nodes/endpoints.
/// It is up to the user whether an Edge is directed or not.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge(pub Node, pub Node);

impl Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.0, self.1)
    }
}

impl Debug for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

impl Edge {
    /// Returns true if both endpoints are equal
    pub fn is_loop(&self) -> bool {
        self.0 == self.1
    }

    /// Reverses the edge by switching the endpoints
    pub fn reverse(&self) -> Self {
        Edge(self.1, self.0)
    }
}

impl From<(Node, Node)> for Edge {
    fn from(value: (Node, Node)) -> Self {
        Edge(value.0, value.1)
    }
}

/// An edge together with the label of the arc it was derived from.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LabeledEdge<L> {
    pub edge: Edge,
    pub label: L,
}

impl<L> LabeledEdge<L> {
    pub const fn new(from: Node, to: Node, label: L) -> Self {
        Self {
            edge: Edge(from, to),
            label,
        }
    }
}
