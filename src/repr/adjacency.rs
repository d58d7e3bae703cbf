use std::ops::{Index, IndexMut, Range};

use itertools::Itertools;

use super::*;

/// A directed graph as a list of outgoing arcs for each node.
///
/// The "node id" of a node is simply its index; every arc target must be a node id of the
/// same graph. Methods assume this (see
/// [`GraphValidation::bounds_ok`](crate::algo::GraphValidation::bounds_ok)) and
/// panic on arcs pointing outside of the graph.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AdjacencyList<A = Node> {
    arcs: Vec<Vec<A>>,
}

/// An adjacency list whose arcs carry a label of type `L`
pub type LabeledAdjacencyList<L> = AdjacencyList<Half<L>>;

impl<A> AdjacencyList<A>
where
    A: Arc,
{
    /// Creates a graph with `n` nodes and no arcs
    pub fn new(n: NumNodes) -> Self {
        Self {
            arcs: (0..n).map(|_| Vec::new()).collect(),
        }
    }

    /// Creates a graph from its arc lists; node `u` gets the arcs `arcs[u]`
    ///
    /// # Examples
    /// ```
    /// use arcgraph::prelude::*;
    ///
    /// let g: AdjacencyList = AdjacencyList::from_arcs(vec![vec![1, 2], vec![2], vec![]]);
    /// assert_eq!(g.order(), 3);
    /// assert_eq!(g.arcs_of(0), &[1, 2]);
    /// ```
    pub fn from_arcs(arcs: Vec<Vec<A>>) -> Self {
        num_nodes(arcs.len());
        Self { arcs }
    }

    /// Returns the arc lists, consuming the graph
    pub fn into_arcs(self) -> Vec<Vec<A>> {
        self.arcs
    }

    /// Returns the number of nodes of the graph
    pub fn order(&self) -> NumNodes {
        self.arcs.len() as NumNodes
    }

    /// Return the number of nodes as usize
    pub fn len(&self) -> usize {
        self.arcs.len()
    }

    /// Returns *true* if the graph has no nodes (and thus no arcs)
    pub fn is_empty(&self) -> bool {
        self.arcs.is_empty()
    }

    /// Returns a range over all nodes. The range does not borrow `self`.
    pub fn vertices(&self) -> Range<Node> {
        0..self.order()
    }

    /// Returns the arcs leaving `u` in stored order.
    /// ** Panics if `u >= n` **
    pub fn arcs_of(&self, u: Node) -> &[A] {
        &self.arcs[u as usize]
    }

    /// Returns a mutable reference to the arc list of `u`.
    /// ** Panics if `u >= n` **
    pub fn arcs_of_mut(&mut self, u: Node) -> &mut Vec<A> {
        &mut self.arcs[u as usize]
    }

    /// Returns an iterator over the targets of all arcs leaving `u`.
    /// ** Panics if `u >= n` **
    pub fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.arcs[u as usize].iter().map(Arc::to)
    }

    /// Returns an iterator over `(u, arcs of u)` for all nodes
    pub fn iter(&self) -> impl Iterator<Item = (Node, &[A])> + '_ {
        self.arcs
            .iter()
            .enumerate()
            .map(|(u, arcs)| (u as Node, arcs.as_slice()))
    }

    /// Appends the arc `arc` to the arc list of `u`.
    /// ** Panics if `u >= n` **
    pub fn add_arc(&mut self, u: Node, arc: A) {
        self.arcs[u as usize].push(arc);
    }

    /// Adds `arc` to `u` and the reciprocal arc (same label) to `arc.to()`.
    /// A loop is only added once.
    /// ** Panics if `u >= n` or `arc.to() >= n` **
    ///
    /// # Examples
    /// ```
    /// use arcgraph::{prelude::*, algo::*};
    ///
    /// let mut g = LabeledAdjacencyList::new(2);
    /// g.add_reciprocal(0, Half::new(1, 'a'));
    /// assert_eq!(g.arcs_of(1), &[Half::new(0, 'a')]);
    /// assert!(g.is_undirected());
    /// ```
    pub fn add_reciprocal(&mut self, u: Node, arc: A) {
        let v = arc.to();
        self.arcs[u as usize].push(arc);
        if u != v {
            self.arcs[v as usize].push(arc.with_to(u));
        }
    }

    /// Returns the number of arcs in the graph.
    ///
    /// For an undirected graph without loops, the number of undirected edges is half of it.
    pub fn arc_size(&self) -> usize {
        self.arcs.iter().map(Vec::len).sum()
    }

    /// Returns the number of arcs leaving `u`.
    /// ** Panics if `u >= n` **
    pub fn out_degree(&self, u: Node) -> NumNodes {
        self.arcs[u as usize].len() as NumNodes
    }

    /// Returns the number of arcs entering each node
    pub fn in_degrees(&self) -> Vec<NumNodes> {
        let mut degs = vec![0; self.len()];
        for arc in self.arcs.iter().flatten() {
            degs[arc.to() as usize] += 1;
        }
        degs
    }

    /// Returns the index (within the arc list of `fr`) of the first arc from `fr` to `to`,
    /// or `None` if there is no such arc.
    /// ** Panics if `fr >= n` **
    pub fn has_arc(&self, fr: Node, to: Node) -> Option<usize> {
        self.arcs[fr as usize].iter().position(|a| a.to() == to)
    }

    /// Returns the indices (within the arc list of `fr`) of all arcs from `fr` to `to`.
    /// ** Panics if `fr >= n` **
    pub fn parallel_arcs(&self, fr: Node, to: Node) -> Vec<usize> {
        self.arcs[fr as usize]
            .iter()
            .positions(|a| a.to() == to)
            .collect()
    }
}

impl<A> AdjacencyList<A>
where
    A: Arc + Ord,
{
    /// Sorts every arc list by target node; labels break ties
    pub fn sort_arc_lists(&mut self) {
        for arcs in &mut self.arcs {
            arcs.sort_unstable();
        }
    }
}

impl AdjacencyList<Node> {
    /// Constructs an edge list with an edge for each arc, including reciprocals
    pub fn arcs_as_edges(&self) -> Vec<Edge> {
        self.iter()
            .flat_map(|(u, arcs)| arcs.iter().map(move |&v| Edge(u, v)))
            .collect()
    }
}

impl<L> AdjacencyList<Half<L>>
where
    L: Copy + PartialEq,
{
    /// Constructs the unlabeled graph with the same arcs in the same order
    pub fn unlabeled(&self) -> AdjacencyList<Node> {
        AdjacencyList {
            arcs: self
                .arcs
                .iter()
                .map(|arcs| arcs.iter().map(|a| a.to).collect())
                .collect(),
        }
    }

    /// Constructs a labeled edge list with an edge for each arc, including reciprocals
    pub fn arcs_as_edges(&self) -> Vec<LabeledEdge<L>> {
        self.iter()
            .flat_map(|(u, arcs)| arcs.iter().map(move |a| LabeledEdge::new(u, a.to, a.label)))
            .collect()
    }

    /// Returns the index of the first arc from `fr` to `to` labeled `label`, if any.
    /// ** Panics if `fr >= n` **
    pub fn has_arc_label(&self, fr: Node, to: Node, label: L) -> Option<usize> {
        let wanted = Half::new(to, label);
        self.arcs[fr as usize].iter().position(|a| *a == wanted)
    }

    /// Returns the indices of all arcs from `fr` to `to` labeled `label`.
    /// ** Panics if `fr >= n` **
    pub fn parallel_arcs_label(&self, fr: Node, to: Node, label: L) -> Vec<usize> {
        let wanted = Half::new(to, label);
        self.arcs[fr as usize]
            .iter()
            .positions(|a| *a == wanted)
            .collect()
    }
}

impl<A> From<Vec<Vec<A>>> for AdjacencyList<A>
where
    A: Arc,
{
    fn from(arcs: Vec<Vec<A>>) -> Self {
        Self::from_arcs(arcs)
    }
}

impl<A> Index<Node> for AdjacencyList<A> {
    type Output = [A];

    fn index(&self, u: Node) -> &[A] {
        &self.arcs[u as usize]
    }
}

impl<A> IndexMut<Node> for AdjacencyList<A> {
    fn index_mut(&mut self, u: Node) -> &mut [A] {
        &mut self.arcs[u as usize]
    }
}
