use rand::{Rng, seq::SliceRandom};

use super::*;

/// Reordering of nodes and arc lists. The graph stays the same up to relabeling of its nodes
/// and the order of its arc lists. See also
/// [`AdjacencyList::sort_arc_lists`](crate::repr::AdjacencyList::sort_arc_lists).
pub trait Reorder {
    /// Shuffles every arc list uniformly at random. Traversals will then encounter arcs in a
    /// different order while the connectivity stays the same.
    fn shuffle_arc_lists<R: Rng + ?Sized>(&mut self, rng: &mut R);

    /// Relabels the nodes: node `i` becomes node `perm[i]`, and arcs are renamed accordingly.
    ///
    /// Returns an error (and leaves the graph unchanged) if `perm` is not a permutation of
    /// `0..n`.
    ///
    /// # Examples
    /// ```
    /// use arcgraph::{prelude::*, algo::*};
    ///
    /// // 0 -> 1 -> 2
    /// let mut g: AdjacencyList = AdjacencyList::from_arcs(vec![vec![1], vec![2], vec![]]);
    /// g.permute(&[2, 0, 1]).unwrap();
    /// // 2 -> 0 -> 1
    /// assert_eq!(g, AdjacencyList::from_arcs(vec![vec![1], vec![], vec![0]]));
    ///
    /// assert!(g.permute(&[0, 0, 1]).is_err());
    /// ```
    fn permute(&mut self, perm: &[Node]) -> Result<()>;
}

impl<A> Reorder for AdjacencyList<A>
where
    A: Arc,
{
    fn shuffle_arc_lists<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for u in self.vertices() {
            self.arcs_of_mut(u).shuffle(rng);
        }
    }

    fn permute(&mut self, perm: &[Node]) -> Result<()> {
        let order = self.order();
        if perm.len() != self.len() {
            return Err(GraphError::InvalidPermutation {
                order,
                reason: format!("expected {order} entries, got {}", perm.len()),
            });
        }

        let mut seen = NodeBitSet::new(order);
        for &p in perm {
            if p >= order {
                return Err(GraphError::InvalidPermutation {
                    order,
                    reason: format!("entry {p} is not a node"),
                });
            }
            if seen.set_bit(p) {
                return Err(GraphError::InvalidPermutation {
                    order,
                    reason: format!("entry {p} occurs more than once"),
                });
            }
        }

        let mut arcs = vec![Vec::new(); self.len()];
        for (old, list) in self.iter() {
            arcs[perm[old as usize] as usize] = list
                .iter()
                .map(|a| a.with_to(perm[a.to() as usize]))
                .collect();
        }
        *self = AdjacencyList::from_arcs(arcs);
        Ok(())
    }
}
