use num::Float;

use super::*;

/// All-pairs shortest path distances
pub trait FloydWarshall {
    /// Arc type of the graph
    type Arc: Arc;

    /// Computes the matrix `d` of shortest path distances where `d[u][v]` is the minimum total
    /// weight of a path from `u` to `v`, or infinity if `v` is unreachable from `u`.
    ///
    /// Every arc weighs `w(label)`; of parallel arcs the one stored last counts. `d[u][u]`
    /// starts at zero, so a negative diagonal entry indicates a negative cycle through `u`.
    /// Runs in `O(n^3)` time.
    ///
    /// # Examples
    /// ```
    /// use arcgraph::{prelude::*, algo::*};
    ///
    /// let g: LabeledAdjacencyList<u32> = AdjacencyList::from_arcs(vec![
    ///     vec![Half::new(1, 4), Half::new(2, 1)],
    ///     vec![],
    ///     vec![Half::new(1, 2)],
    /// ]);
    /// let d = g.floyd_warshall(|l| l as f64);
    /// assert_eq!(d[0], vec![0.0, 3.0, 1.0]);
    /// assert_eq!(d[1][0], f64::INFINITY);
    /// ```
    fn floyd_warshall<W, F>(&self, w: F) -> Vec<Vec<W>>
    where
        W: Float,
        F: Fn(<Self::Arc as Arc>::Label) -> W;
}

impl<A> FloydWarshall for AdjacencyList<A>
where
    A: Arc,
{
    type Arc = A;

    fn floyd_warshall<W, F>(&self, w: F) -> Vec<Vec<W>>
    where
        W: Float,
        F: Fn(A::Label) -> W,
    {
        let n = self.len();
        let mut d = vec![vec![W::infinity(); n]; n];
        for (u, arcs) in self.iter() {
            let du = &mut d[u as usize];
            du[u as usize] = W::zero();
            for arc in arcs {
                du[arc.to() as usize] = w(arc.label());
            }
        }

        for k in 0..n {
            let dk = d[k].clone();
            for di in &mut d {
                let dik = di[k];
                for (dij, &dkj) in di.iter_mut().zip(&dk) {
                    let via = dik + dkj;
                    if via < *dij {
                        *dij = via;
                    }
                }
            }
        }

        d
    }
}
