/*!
# Graph Representation

A graph is stored as an [`AdjacencyList`]: an ordered sequence of `n` arc lists, one per node.
The list of node `u` holds the arcs leaving `u` in the order they were added; algorithms that
iterate arcs preserve this order unless asked to randomize it.

Adjacency lists are inherently directed. An undirected graph is represented by storing every
edge as two reciprocal arcs `u -> v` and `v -> u` (with equal labels if labeled), see
[`AdjacencyList::add_reciprocal`] and
[`GraphValidation::is_undirected`](crate::algo::GraphValidation::is_undirected).

The arc type is generic over [`Arc`], so
- [`AdjacencyList`] (i.e. `AdjacencyList<Node>`) is the unlabeled graph and
- [`LabeledAdjacencyList<L>`] (i.e. `AdjacencyList<Half<L>>`) is the labeled one.
*/

mod adjacency;

pub use adjacency::*;

use crate::prelude::*;
