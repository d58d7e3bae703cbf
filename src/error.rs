use thiserror::Error;

use crate::node::*;

/// Validation failures reported by the checking utilities.
///
/// Algorithms that assume a valid graph do not return these; they panic instead.
/// Run [`GraphValidation::bounds_ok`](crate::algo::GraphValidation::bounds_ok) or
/// [`FromList::bounds_ok`](crate::algo::FromList::bounds_ok) first when the input is untrusted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// An arc of node `from` points to `to`, which is not a node of the graph
    #[error("arc {from} -> {to} points outside of a graph with {order} nodes")]
    ArcOutOfBounds { from: Node, to: Node, order: NumNodes },

    /// The parent recorded for `node` is not a node of the tree
    #[error("node {node} names parent {from} outside of a tree over {order} nodes")]
    ParentOutOfBounds {
        node: Node,
        from: Node,
        order: NumNodes,
    },

    /// A relabeling was requested with something that is not a permutation of `0..order`
    #[error("invalid permutation for {order} nodes: {reason}")]
    InvalidPermutation { order: NumNodes, reason: String },
}

pub type Result<T> = std::result::Result<T, GraphError>;
