//! Random inputs shared by the unit tests

use rand::Rng;

use crate::prelude::*;

/// Creates a directed graph on `n` nodes with `m` uniformly random arcs.
/// Loops and parallel arcs may occur.
pub(crate) fn random_graph<R: Rng>(rng: &mut R, n: NumNodes, m: usize) -> AdjacencyList {
    let mut graph = AdjacencyList::new(n);
    for _ in 0..m {
        let u = rng.random_range(0..n);
        let v = rng.random_range(0..n);
        graph.add_arc(u, v);
    }
    graph
}

/// Creates an undirected graph on `n` nodes with `m` random edges stored as reciprocal arcs
/// labeled with a random weight in `0..10`.
pub(crate) fn random_undirected_labeled<R: Rng>(
    rng: &mut R,
    n: NumNodes,
    m: usize,
) -> LabeledAdjacencyList<u32> {
    let mut graph = LabeledAdjacencyList::new(n);
    for _ in 0..m {
        let u = rng.random_range(0..n);
        let v = rng.random_range(0..n);
        graph.add_reciprocal(u, Half::new(v, rng.random_range(0..10)));
    }
    graph
}
