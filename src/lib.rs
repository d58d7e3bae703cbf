/*!
`arcgraph` is a graph traversal library for directed graphs stored as **adjacency lists**:
every node `0..n` owns the list of arcs leaving it, optionally labeled.

# Representation

We represent **nodes** as `u32` in the range `0..n` where `n` is the number of nodes in the graph.
An **arc** is either a bare target [`Node`](node::Node) or a labeled
[`Half`](arc::Half) `{ to, label }`; both implement the [`Arc`](arc::Arc) trait, so the single
[`AdjacencyList`](repr::AdjacencyList) type serves labeled and unlabeled graphs alike.
Undirected graphs are stored with every edge as two reciprocal arcs.

# Traversal and path trees

The centerpiece are breadth-first and depth-first traversals that share one option builder,
[`TraverseOptions`](algo::TraverseOptions): visitors (optionally aborting the search), an
external visited set, the bits of the current DFS path, a tree to record into and a source of
randomness for the visiting order.

Breadth-first search records a shortest-path forest in a [`FromList`](algo::FromList), which
answers path, root and common-ancestor queries and converts back into adjacency lists.

```
use arcgraph::{prelude::*, algo::*};

// 0 -> 1 -> 3
//  \-> 2 -/
let g: AdjacencyList = AdjacencyList::from_arcs(vec![vec![1, 2], vec![3], vec![3], vec![]]);
let tree = g.breadth_first_tree(0);

assert_eq!(tree.path_to(3), vec![0, 1, 3]);
assert_eq!(tree.max_len, 3);
assert_eq!(tree.common_ancestor(1, 2), Some(0));
```

# Usage

There are *4* submodules you probably want to interact with:
- [`prelude`] includes definitions for nodes, arcs, edges, errors and the adjacency list,
- [`algo`] includes the traversals, the [`FromList`](algo::FromList) and further algorithm traits
  implemented on graphs (validation, statistics, reordering, all-pairs distances),
- [`io`] includes a writer for the DOT format of GraphViz,
- [`error`] includes the errors returned by validating operations.

In most use-cases, `use arcgraph::{prelude::*, algo::*};` suffices for your needs.

# Logging

Traversals and tree recomputations emit [`tracing`] events at `trace`/`debug` level. The library
never installs a subscriber.
*/

pub mod algo;
pub mod arc;
pub mod error;
pub mod io;
pub mod node;
pub mod repr;
#[cfg(test)]
pub(crate) mod testing;

/// `arcgraph::prelude` includes definitions for nodes, arcs and edges, the graph representation
/// and the error type.
pub mod prelude {
    pub use super::{arc::*, error::GraphError, node::*, repr::*};
}
