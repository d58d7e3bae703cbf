/*!
# Node Representation

Nodes are dense, zero-based indices: a graph of order `n` has exactly the nodes `0..n`.
We choose `Node = u32` as graphs beyond `2^32 - 1` nodes are out of scope, which keeps
arc lists and path trees compact.

The value [`INVALID_NODE`] plays the role of "no node": it marks roots and unreached
nodes in a [`FromList`](crate::algo::FromList) and is never a valid index.
*/

use stream_bitset::bitset::BitSetImpl;

/// Nodes can be any unsigned integer from `0` to `Node::MAX - 1`
pub type Node = u32;

/// Node-Value that is considered invalid
pub const INVALID_NODE: Node = Node::MAX;

/// There can be at most `2^32 - 1` nodes in a graph!
pub type NumNodes = Node;

/// BitSet for Nodes
pub type NodeBitSet = BitSetImpl<Node>;

/// Converts a slice length into a node count.
/// ** Panics if `len` does not fit into `NumNodes` **
pub(crate) fn num_nodes(len: usize) -> NumNodes {
    assert!(
        len < INVALID_NODE as usize,
        "graphs are limited to {INVALID_NODE} nodes"
    );
    len as NumNodes
}
