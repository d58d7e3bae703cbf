use num::Float;

use super::*;

/// Returns the arc density `m / (n * (n - 1))` of a graph with `n` nodes and `m` arcs, i.e. the
/// fraction of possible non-loop arcs present. Graphs with fewer than two nodes have density
/// `0.0`.
pub fn arc_density_of(n: NumNodes, m: usize) -> f64 {
    if n < 2 {
        return 0.0;
    }
    let n = n as f64;
    m as f64 / (n * (n - 1.0))
}

/// Simple counting statistics. The weighted variants interpret arc labels numerically
/// through a weight function `w`.
pub trait GraphStats {
    /// Arc type of the graph
    type Arc: Arc;

    /// Returns the arc density of the graph, see [`arc_density_of`]
    fn arc_density(&self) -> f64;

    /// Returns the nodes without any incident arc (neither leaving nor entering)
    ///
    /// # Examples
    /// ```
    /// use arcgraph::{prelude::*, algo::*};
    ///
    /// let g: AdjacencyList = AdjacencyList::from_arcs(vec![vec![2], vec![], vec![], vec![3]]);
    /// assert_eq!(g.isolated_nodes().iter_set_bits().collect::<Vec<_>>(), vec![1]);
    /// ```
    fn isolated_nodes(&self) -> NodeBitSet;

    /// Returns *true* if some arc has a negative weight
    fn negative_arc<W, F>(&self, w: F) -> bool
    where
        W: Float,
        F: Fn(<Self::Arc as Arc>::Label) -> W;

    /// Returns for every node the sum of the weights of the arcs entering it
    fn weighted_in_degree<W, F>(&self, w: F) -> Vec<W>
    where
        W: Float,
        F: Fn(<Self::Arc as Arc>::Label) -> W;

    /// Returns the sum of the weights of the arcs leaving `u`. Loops are counted once.
    /// ** Panics if `u >= n` **
    fn weighted_out_degree<W, F>(&self, u: Node, w: F) -> W
    where
        W: Float,
        F: Fn(<Self::Arc as Arc>::Label) -> W;
}

impl<A> GraphStats for AdjacencyList<A>
where
    A: Arc,
{
    type Arc = A;

    fn arc_density(&self) -> f64 {
        arc_density_of(self.order(), self.arc_size())
    }

    fn isolated_nodes(&self) -> NodeBitSet {
        let mut isolated = NodeBitSet::new_all_set(self.order());
        for (u, arcs) in self.iter() {
            if arcs.is_empty() {
                continue;
            }
            isolated.clear_bit(u);
            for arc in arcs {
                isolated.clear_bit(arc.to());
            }
        }
        isolated
    }

    fn negative_arc<W, F>(&self, w: F) -> bool
    where
        W: Float,
        F: Fn(A::Label) -> W,
    {
        self.iter()
            .flat_map(|(_, arcs)| arcs)
            .any(|arc| w(arc.label()) < W::zero())
    }

    fn weighted_in_degree<W, F>(&self, w: F) -> Vec<W>
    where
        W: Float,
        F: Fn(A::Label) -> W,
    {
        let mut degrees = vec![W::zero(); self.len()];
        for (_, arcs) in self.iter() {
            for arc in arcs {
                let d = &mut degrees[arc.to() as usize];
                *d = *d + w(arc.label());
            }
        }
        degrees
    }

    fn weighted_out_degree<W, F>(&self, u: Node, w: F) -> W
    where
        W: Float,
        F: Fn(A::Label) -> W,
    {
        self.arcs_of(u)
            .iter()
            .fold(W::zero(), |sum, arc| sum + w(arc.label()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::random_undirected_labeled;
    use itertools::Itertools;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn density() {
        assert_eq!(arc_density_of(0, 0), 0.0);
        assert_eq!(arc_density_of(1, 3), 0.0);
        assert_eq!(arc_density_of(4, 6), 0.5);

        let g: AdjacencyList = AdjacencyList::from_arcs(vec![vec![1], vec![0]]);
        assert_eq!(g.arc_density(), 1.0);
    }

    #[test]
    fn isolated() {
        let g: AdjacencyList = AdjacencyList::new(3);
        assert_eq!(g.isolated_nodes().cardinality(), 3);

        let g: AdjacencyList = AdjacencyList::from_arcs(vec![vec![], vec![1], vec![], vec![0]]);
        assert_eq!(g.isolated_nodes().iter_set_bits().collect_vec(), vec![2]);
    }

    #[test]
    fn weighted_degrees() {
        let g: LabeledAdjacencyList<i32> = AdjacencyList::from_arcs(vec![
            vec![Half::new(1, 2), Half::new(2, 3), Half::new(0, 1)],
            vec![Half::new(2, -4)],
            vec![],
        ]);
        let w = |l: i32| l as f64;

        assert!(g.negative_arc(w));
        assert!(!g.negative_arc(|l: i32| l.abs() as f32));
        assert_eq!(g.weighted_in_degree(w), vec![1.0, 2.0, -1.0]);
        assert_eq!(g.weighted_out_degree(0, w), 6.0);
        assert_eq!(g.weighted_out_degree(2, w), 0.0);
    }

    #[test]
    fn undirected_strength() {
        let rng = &mut Pcg64Mcg::seed_from_u64(12);
        let g = random_undirected_labeled(rng, 25, 60);
        let w = |l: u32| l as f64;
        let inner = g.weighted_in_degree(w);
        for u in g.vertices() {
            assert_eq!(g.weighted_out_degree(u, w), inner[u as usize]);
        }
    }
}
