/*!
Validation and structural queries.

[`GraphValidation::bounds_ok`] is the only check that does not assume a valid graph; all other
queries (and every algorithm of this crate) panic on arcs pointing outside of the graph.
*/

use fxhash::FxHashSet;
use itertools::Itertools;

use super::*;

/// Structural checks on a graph
pub trait GraphValidation {
    /// Arc type of the graph
    type Arc: Arc;

    /// Returns an error describing the first arc (in node and arc list order) whose target is
    /// not a node of the graph.
    ///
    /// # Examples
    /// ```
    /// use arcgraph::{prelude::*, algo::*};
    ///
    /// let g: AdjacencyList = AdjacencyList::from_arcs(vec![vec![1], vec![0, 4]]);
    /// assert_eq!(
    ///     g.bounds_ok(),
    ///     Err(GraphError::ArcOutOfBounds { from: 1, to: 4, order: 2 })
    /// );
    /// ```
    fn bounds_ok(&self) -> Result<()>;

    /// Returns a node with a loop, if any
    fn any_loop(&self) -> Option<Node>;

    /// Returns a pair `(fr, to)` connected by at least two arcs, if any. Labels are ignored and
    /// two loops on the same node count as parallel.
    ///
    /// Sorts a copy of every arc list; see [`GraphValidation::any_parallel_map`] for a
    /// hashing variant.
    fn any_parallel_sort(&self) -> Option<(Node, Node)>;

    /// Same as [`GraphValidation::any_parallel_sort`] but detects repetitions with a hash set,
    /// which reports the earliest repetition within an arc list.
    fn any_parallel_map(&self) -> Option<(Node, Node)>;

    /// Returns the first node that has a loop or parallel arcs
    fn non_simple_node(&self) -> Option<Node>;

    /// Returns *true* if the graph has neither loops nor parallel arcs
    fn is_simple(&self) -> bool {
        self.non_simple_node().is_none()
    }

    /// Returns an arc `(fr, arc)` that has no reciprocal arc with an equal label, if any.
    ///
    /// Reciprocals are matched one to one, so `k` parallel arcs `u -> v` need `k` arcs
    /// `v -> u`. Loops are ignored.
    fn unpaired_arc(&self) -> Option<(Node, Self::Arc)>;

    /// Returns *true* if every non-loop arc is paired with a reciprocal of equal label, i.e.
    /// the graph represents an undirected graph.
    ///
    /// # Examples
    /// ```
    /// use arcgraph::{prelude::*, algo::*};
    ///
    /// let g: AdjacencyList = AdjacencyList::from_arcs(vec![vec![1, 0], vec![0]]);
    /// assert!(g.is_undirected());
    ///
    /// let g: LabeledAdjacencyList<u8> = AdjacencyList::from_arcs(vec![
    ///     vec![Half::new(1, 3)],
    ///     vec![Half::new(0, 4)],
    /// ]);
    /// assert_eq!(g.unpaired_arc(), Some((0, Half::new(1, 3))));
    /// ```
    fn is_undirected(&self) -> bool {
        self.unpaired_arc().is_none()
    }
}

impl<A> GraphValidation for AdjacencyList<A>
where
    A: Arc,
{
    type Arc = A;

    fn bounds_ok(&self) -> Result<()> {
        let order = self.order();
        for (from, arcs) in self.iter() {
            if let Some(arc) = arcs.iter().find(|a| a.to() >= order) {
                return Err(GraphError::ArcOutOfBounds {
                    from,
                    to: arc.to(),
                    order,
                });
            }
        }
        Ok(())
    }

    fn any_loop(&self) -> Option<Node> {
        self.iter()
            .find(|(u, arcs)| arcs.iter().any(|a| a.to() == *u))
            .map(|(u, _)| u)
    }

    fn any_parallel_sort(&self) -> Option<(Node, Node)> {
        let mut targets = Vec::new();
        self.iter().find_map(|(u, arcs)| {
            targets.clear();
            targets.extend(arcs.iter().map(Arc::to));
            targets.sort_unstable();
            targets
                .iter()
                .tuple_windows()
                .find(|(a, b)| a == b)
                .map(|(&v, _)| (u, v))
        })
    }

    fn any_parallel_map(&self) -> Option<(Node, Node)> {
        let mut seen = FxHashSet::default();
        self.iter().find_map(|(u, arcs)| {
            seen.clear();
            arcs.iter()
                .map(Arc::to)
                .find(|&v| !seen.insert(v))
                .map(|v| (u, v))
        })
    }

    fn non_simple_node(&self) -> Option<Node> {
        let mut seen = FxHashSet::default();
        self.iter()
            .find(|(u, arcs)| {
                seen.clear();
                arcs.iter().map(Arc::to).any(|v| v == *u || !seen.insert(v))
            })
            .map(|(u, _)| u)
    }

    fn unpaired_arc(&self) -> Option<(Node, A)> {
        let mut unpaired: Vec<Vec<A>> = vec![Vec::new(); self.len()];

        for (fr, arcs) in self.iter() {
            for &arc in arcs {
                let to = arc.to();
                if to == fr {
                    continue;
                }

                let waiting = &mut unpaired[to as usize];
                match waiting
                    .iter()
                    .position(|r| r.to() == fr && r.label() == arc.label())
                {
                    Some(i) => {
                        waiting.swap_remove(i);
                    }
                    None => unpaired[fr as usize].push(arc),
                }
            }
        }

        unpaired
            .into_iter()
            .enumerate()
            .find_map(|(fr, arcs)| arcs.first().map(|&a| (fr as Node, a)))
    }
}
