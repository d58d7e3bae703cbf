/*!
Breadth-first and depth-first traversal.

Both traversals walk the part of a graph reachable from a single start node and share one
configuration vocabulary, [`TraverseOptions`]. Options are independent of each other and every
traversal simply ignores the ones it does not support:

| Option                               | BFS | DFS |
|--------------------------------------|-----|-----|
| [`node_visitor`](TraverseOptions::node_visitor)       | yes | yes |
| [`ok_node_visitor`](TraverseOptions::ok_node_visitor) | yes | yes |
| [`arc_visitor`](TraverseOptions::arc_visitor)         | no  | yes |
| [`ok_arc_visitor`](TraverseOptions::ok_arc_visitor)   | no  | yes |
| [`visited`](TraverseOptions::visited)                 | no  | yes |
| [`path_bits`](TraverseOptions::path_bits)             | no  | yes |
| [`from_list`](TraverseOptions::from_list)             | yes | no  |
| [`rand`](TraverseOptions::rand) / [`permutation`](TraverseOptions::permutation) | yes | yes |

A conditional ("ok") visitor returning `false` aborts the whole traversal immediately; the
traversal then returns `false`. Otherwise it runs to completion and returns `true`.

All traversals assume every arc target is a node of the graph and panic otherwise, see
[`GraphValidation::bounds_ok`](super::GraphValidation::bounds_ok).
*/

use std::{cell::RefCell, fmt};

use itertools::Itertools;
use rand::{Rng, seq::SliceRandom};
use tracing::{debug, trace};

use super::*;

type NodeVisitor<'a> = Box<dyn FnMut(Node) + 'a>;
type OkNodeVisitor<'a> = Box<dyn FnMut(Node) -> bool + 'a>;
type ArcVisitor<'a> = Box<dyn FnMut(Node, usize) + 'a>;
type OkArcVisitor<'a> = Box<dyn FnMut(Node, usize) -> bool + 'a>;
type Permuter<'a> = Box<dyn FnMut(usize) -> Vec<usize> + 'a>;

/// Configuration of a single traversal.
///
/// Every option is absent by default and set with a builder method. Borrowed options
/// (bitsets, from lists, random sources) are only used for the duration of the traversal the
/// options are passed to.
///
/// # Examples
/// ```
/// use arcgraph::{prelude::*, algo::*};
///
/// let g: AdjacencyList = AdjacencyList::from_arcs(vec![vec![1, 2], vec![3], vec![3], vec![]]);
///
/// let mut order = Vec::new();
/// let mut tree = FromList::new(g.order());
/// g.breadth_first(
///     0,
///     TraverseOptions::new()
///         .node_visitor(|u| order.push(u))
///         .from_list(&mut tree),
/// );
///
/// assert_eq!(order, vec![0, 1, 2, 3]);
/// assert_eq!(tree.path_to(3), vec![0, 1, 3]);
/// ```
#[derive(Default)]
pub struct TraverseOptions<'a> {
    node_visitor: Option<NodeVisitor<'a>>,
    ok_node_visitor: Option<OkNodeVisitor<'a>>,
    arc_visitor: Option<ArcVisitor<'a>>,
    ok_arc_visitor: Option<OkArcVisitor<'a>>,
    visited: Option<&'a mut NodeBitSet>,
    path_bits: Option<&'a RefCell<NodeBitSet>>,
    from_list: Option<&'a mut FromList>,
    permuter: Option<Permuter<'a>>,
}

impl<'a> TraverseOptions<'a> {
    /// Shorthand for default, i.e. no options set
    pub fn new() -> Self {
        Self::default()
    }

    /// Calls `visitor` once for every node when it is visited
    pub fn node_visitor<F>(mut self, visitor: F) -> Self
    where
        F: FnMut(Node) + 'a,
    {
        self.node_visitor = Some(Box::new(visitor));
        self
    }

    /// Calls `visitor` once for every node when it is visited; returning `false` aborts the
    /// traversal
    pub fn ok_node_visitor<F>(mut self, visitor: F) -> Self
    where
        F: FnMut(Node) -> bool + 'a,
    {
        self.ok_node_visitor = Some(Box::new(visitor));
        self
    }

    /// Calls `visitor(u, x)` for every arc examined, where `x` is the index of the arc within
    /// the arc list of `u`. Arcs to already visited nodes are reported as well. DFS only.
    pub fn arc_visitor<F>(mut self, visitor: F) -> Self
    where
        F: FnMut(Node, usize) + 'a,
    {
        self.arc_visitor = Some(Box::new(visitor));
        self
    }

    /// Like [`TraverseOptions::arc_visitor`], but returning `false` aborts the traversal.
    /// DFS only.
    pub fn ok_arc_visitor<F>(mut self, visitor: F) -> Self
    where
        F: FnMut(Node, usize) -> bool + 'a,
    {
        self.ok_arc_visitor = Some(Box::new(visitor));
        self
    }

    /// Uses `visited` as the set of visited nodes instead of a fresh one. Nodes already set are
    /// never entered; if the start node is set, the traversal does nothing. DFS only.
    ///
    /// ** The traversal panics if `visited` has fewer bits than the graph has nodes **
    pub fn visited(mut self, visited: &'a mut NodeBitSet) -> Self {
        self.visited = Some(visited);
        self
    }

    /// Maintains `path_bits` to contain exactly the nodes on the path from the start node to
    /// the node currently visited. It is cleared when the traversal starts.
    ///
    /// The bitset is only borrowed by the traversal while it updates it, so visitors may read
    /// it, e.g. to recognize back arcs. DFS only.
    pub fn path_bits(mut self, path_bits: &'a RefCell<NodeBitSet>) -> Self {
        self.path_bits = Some(path_bits);
        self
    }

    /// Records the breadth-first tree into `from_list`. BFS only.
    ///
    /// If `from_list` already covers the graph, results accumulate into it: nodes reached
    /// before are not reached again. Otherwise it is reset to [`FromList::new`] first.
    pub fn from_list(mut self, from_list: &'a mut FromList) -> Self {
        self.from_list = Some(from_list);
        self
    }

    /// Visits siblings in a random order drawn from `rng` instead of stored order
    /// (BFS: the nodes of a frontier, DFS: the arcs of a node).
    pub fn rand<R>(self, rng: &'a mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        self.permutation(move |len| {
            let mut perm = (0..len).collect_vec();
            perm.shuffle(&mut *rng);
            perm
        })
    }

    /// Visits siblings in the order `permuter(len)` returns, which must be a permutation of
    /// `0..len`. Useful to inject a deterministic order.
    ///
    /// ** The traversal panics if a returned permutation has the wrong length **
    pub fn permutation<F>(mut self, permuter: F) -> Self
    where
        F: FnMut(usize) -> Vec<usize> + 'a,
    {
        self.permuter = Some(Box::new(permuter));
        self
    }

    /// Combines two option sets; options set in `other` take precedence
    pub fn merge(self, other: Self) -> Self {
        Self {
            node_visitor: other.node_visitor.or(self.node_visitor),
            ok_node_visitor: other.ok_node_visitor.or(self.ok_node_visitor),
            arc_visitor: other.arc_visitor.or(self.arc_visitor),
            ok_arc_visitor: other.ok_arc_visitor.or(self.ok_arc_visitor),
            visited: other.visited.or(self.visited),
            path_bits: other.path_bits.or(self.path_bits),
            from_list: other.from_list.or(self.from_list),
            permuter: other.permuter.or(self.permuter),
        }
    }

    /// Runs the node visitors and returns *false* if the traversal must stop
    fn visit_node(&mut self, u: Node) -> bool {
        if let Some(visitor) = self.node_visitor.as_mut() {
            visitor(u);
        }
        self.ok_node_visitor.as_mut().is_none_or(|visitor| visitor(u))
    }

    /// Runs the arc visitors and returns *false* if the traversal must stop
    fn visit_arc(&mut self, u: Node, x: usize) -> bool {
        if let Some(visitor) = self.arc_visitor.as_mut() {
            visitor(u, x);
        }
        self.ok_arc_visitor.as_mut().is_none_or(|visitor| visitor(u, x))
    }

    /// Returns the order in which to visit `len` siblings, or `None` for stored order
    fn permutation_of(&mut self, len: usize) -> Option<Vec<usize>> {
        let perm = (self.permuter.as_mut()?)(len);
        assert_eq!(
            perm.len(),
            len,
            "permutation source returned {} indices for {len} siblings",
            perm.len()
        );
        Some(perm)
    }
}

impl fmt::Debug for TraverseOptions<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TraverseOptions")
            .field("node_visitor", &self.node_visitor.is_some())
            .field("ok_node_visitor", &self.ok_node_visitor.is_some())
            .field("arc_visitor", &self.arc_visitor.is_some())
            .field("ok_arc_visitor", &self.ok_arc_visitor.is_some())
            .field("visited", &self.visited.is_some())
            .field("path_bits", &self.path_bits.is_some())
            .field("from_list", &self.from_list.is_some())
            .field("permuter", &self.permuter.is_some())
            .finish()
    }
}

/// Provides breadth-first and depth-first traversals and derived utilities
pub trait Traversal {
    /// Traverses the nodes reachable from `start` in breadth-first order.
    ///
    /// Nodes are visited level by level; a node is recorded in the traversal tree with
    /// `len = distance + 1` when it is first discovered. Supported options: node visitors,
    /// from list, random order. Returns *false* iff a conditional visitor aborted.
    ///
    /// ** Panics if `start >= n` **
    fn breadth_first(&self, start: Node, opts: TraverseOptions<'_>) -> bool;

    /// Traverses the nodes reachable from `start` in depth-first order.
    ///
    /// On entering a node it is marked visited (and on the current path) and then passed to the
    /// node visitors. Its arcs are then examined in order; the arc visitors see every arc before
    /// its target is checked. Supported options: all but the from list. Returns *false* iff a
    /// conditional visitor aborted.
    ///
    /// ** Panics if `start >= n` **
    fn depth_first(&self, start: Node, opts: TraverseOptions<'_>) -> bool;

    /// Returns the breadth-first tree rooted at `start`
    ///
    /// # Examples
    /// ```
    /// use arcgraph::{prelude::*, algo::*};
    ///
    /// let g: AdjacencyList = AdjacencyList::from_arcs(vec![vec![1, 2], vec![], vec![]]);
    /// let f = g.breadth_first_tree(0);
    /// assert_eq!(f.paths, vec![PathEnd::ROOT, PathEnd::new(0, 2), PathEnd::new(0, 2)]);
    /// assert_eq!(f.max_len, 2);
    /// ```
    fn breadth_first_tree(&self, start: Node) -> FromList;

    /// Returns a spanning forest by repeatedly running a breadth-first traversal from the
    /// smallest node not reached so far, accumulating into a single from list.
    fn breadth_first_forest(&self) -> FromList;

    /// Returns the set of nodes reachable from `start` (including `start`)
    fn reachable_from(&self, start: Node) -> NodeBitSet;

    /// Returns *true* if the graph contains no directed cycle. Loops count as cycles.
    ///
    /// # Examples
    /// ```
    /// use arcgraph::{prelude::*, algo::*};
    ///
    /// let mut g: AdjacencyList = AdjacencyList::from_arcs(vec![vec![1], vec![2], vec![]]);
    /// assert!(g.is_acyclic());
    /// g.add_arc(2, 0);
    /// assert!(!g.is_acyclic());
    /// ```
    fn is_acyclic(&self) -> bool;
}

impl<A> Traversal for AdjacencyList<A>
where
    A: Arc,
{
    fn breadth_first(&self, start: Node, mut opts: TraverseOptions<'_>) -> bool {
        let n = self.order();
        assert!(start < n, "start node {start} is not a node of a graph with {n} nodes");
        trace!(start, order = n, "breadth-first traversal");

        let mut own;
        let tree: &mut FromList = match opts.from_list.take() {
            Some(tree) => tree,
            None => {
                own = FromList::new(n);
                &mut own
            }
        };
        if tree.len() != self.len() {
            *tree = FromList::new(n);
        }

        let mut level: NumNodes = 1;
        tree.paths[start as usize] = PathEnd::ROOT;

        let mut frontier = vec![start];
        let mut next = Vec::new();
        loop {
            tree.max_len = tree.max_len.max(level);

            let perm = opts.permutation_of(frontier.len());
            for i in 0..frontier.len() {
                let u = frontier[perm.as_ref().map_or(i, |p| p[i])];

                if !opts.visit_node(u) {
                    debug!(node = u, level, "breadth-first traversal aborted");
                    return false;
                }

                for arc in self.arcs_of(u) {
                    let v = arc.to();
                    let entry = &mut tree.paths[v as usize];
                    if !entry.is_reached() {
                        *entry = PathEnd::new(u, level + 1);
                        next.push(v);
                    }
                }
            }

            if next.is_empty() {
                return true;
            }

            level += 1;
            std::mem::swap(&mut frontier, &mut next);
            next.clear();
        }
    }

    fn depth_first(&self, start: Node, mut opts: TraverseOptions<'_>) -> bool {
        let n = self.order();
        assert!(start < n, "start node {start} is not a node of a graph with {n} nodes");

        let mut own;
        let visited: &mut NodeBitSet = match opts.visited.take() {
            Some(visited) => {
                if visited.get_bit(start) {
                    return true;
                }
                visited
            }
            None => {
                own = NodeBitSet::new(n);
                &mut own
            }
        };
        trace!(start, order = n, "depth-first traversal");

        let path_bits = opts.path_bits.take();
        if let Some(bits) = path_bits {
            bits.borrow_mut().clear_all();
        }

        DepthFirstSearch {
            graph: self,
            opts,
            visited,
            path_bits,
            stack: Vec::new(),
        }
        .run(start)
    }

    fn breadth_first_tree(&self, start: Node) -> FromList {
        let mut tree = FromList::new(self.order());
        self.breadth_first(start, TraverseOptions::new().from_list(&mut tree));
        tree
    }

    fn breadth_first_forest(&self) -> FromList {
        let mut forest = FromList::new(self.order());
        for u in self.vertices() {
            if !forest.paths[u as usize].is_reached() {
                self.breadth_first(u, TraverseOptions::new().from_list(&mut forest));
            }
        }
        forest
    }

    fn reachable_from(&self, start: Node) -> NodeBitSet {
        let mut visited = NodeBitSet::new(self.order());
        self.depth_first(start, TraverseOptions::new().visited(&mut visited));
        visited
    }

    fn is_acyclic(&self) -> bool {
        let mut visited = NodeBitSet::new(self.order());
        let on_path = RefCell::new(NodeBitSet::new(self.order()));

        for u in self.vertices() {
            if visited.get_bit(u) {
                continue;
            }

            // an arc back onto the current path closes a cycle
            let completed = self.depth_first(
                u,
                TraverseOptions::new()
                    .visited(&mut visited)
                    .path_bits(&on_path)
                    .ok_arc_visitor(|fr, x| !on_path.borrow().get_bit(self.arcs_of(fr)[x].to())),
            );
            if !completed {
                return false;
            }
        }
        true
    }
}

/// A node of the graph whose arcs are currently being examined
struct Frame {
    node: Node,
    perm: Option<Vec<usize>>,
    next: usize,
}

/// State of a single depth-first traversal with an explicit stack
struct DepthFirstSearch<'g, 'o, A> {
    graph: &'g AdjacencyList<A>,
    opts: TraverseOptions<'o>,
    visited: &'o mut NodeBitSet,
    path_bits: Option<&'o RefCell<NodeBitSet>>,
    stack: Vec<Frame>,
}

impl<A> DepthFirstSearch<'_, '_, A>
where
    A: Arc,
{
    fn run(mut self, start: Node) -> bool {
        let graph = self.graph;
        if !self.enter(start) {
            return false;
        }

        while let Some(frame) = self.stack.last_mut() {
            let u = frame.node;
            let arcs = graph.arcs_of(u);

            if frame.next == arcs.len() {
                self.stack.pop();
                if let Some(bits) = self.path_bits {
                    bits.borrow_mut().clear_bit(u);
                }
                continue;
            }

            let x = frame.perm.as_ref().map_or(frame.next, |p| p[frame.next]);
            frame.next += 1;

            if !self.opts.visit_arc(u, x) {
                debug!(node = u, arc = x, "depth-first traversal aborted");
                return false;
            }

            let v = arcs[x].to();
            if !self.visited.get_bit(v) && !self.enter(v) {
                return false;
            }
        }

        true
    }

    /// Enters `u` and returns *false* if the traversal must stop
    fn enter(&mut self, u: Node) -> bool {
        self.visited.set_bit(u);
        if let Some(bits) = self.path_bits {
            bits.borrow_mut().set_bit(u);
        }

        if !self.opts.visit_node(u) {
            debug!(node = u, "depth-first traversal aborted");
            return false;
        }

        let perm = self.opts.permutation_of(self.graph.arcs_of(u).len());
        self.stack.push(Frame {
            node: u,
            perm,
            next: 0,
        });
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::random_graph;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    fn graph(arcs: Vec<Vec<Node>>) -> AdjacencyList {
        AdjacencyList::from_arcs(arcs)
    }

    /// 0 -> 1 -> 2 -> ... -> n-1
    fn path_graph(n: NumNodes) -> AdjacencyList {
        let mut g = AdjacencyList::new(n);
        for u in 1..n {
            g.add_arc(u - 1, u);
        }
        g
    }

    #[test]
    fn bfs_tree_of_star() {
        let g = graph(vec![vec![1, 2], vec![], vec![]]);
        let mut f = FromList::new(3);
        assert!(g.breadth_first(0, TraverseOptions::new().from_list(&mut f)));

        assert_eq!(
            f.paths,
            vec![PathEnd::ROOT, PathEnd::new(0, 2), PathEnd::new(0, 2)]
        );
        assert_eq!(f.max_len, 2);
        assert_eq!(f.path_to(1), vec![0, 1]);
        assert_eq!(f.path_to(2), vec![0, 2]);
        assert_eq!(f.common_ancestor(1, 2), Some(0));
    }

    #[test]
    fn bfs_order() {
        //  / 2 --- \
        // 1         4 - 3
        //  \ 0 - 5 /
        let g = graph(vec![vec![5], vec![2, 0], vec![4], vec![], vec![3], vec![4]]);

        let mut order = Vec::new();
        g.breadth_first(1, TraverseOptions::new().node_visitor(|u| order.push(u)));
        assert_eq!(order, vec![1, 2, 0, 4, 5, 3]);

        let f = g.breadth_first_tree(1);
        assert_eq!(f.paths.iter().map(|e| e.from).collect_vec(), vec![1, INVALID_NODE, 1, 4, 2, 0]);
        assert_eq!(f.paths.iter().map(|e| e.len).collect_vec(), vec![2, 1, 2, 4, 3, 3]);
        assert_eq!(f.max_len, 4);

        let f = g.breadth_first_tree(5);
        assert_eq!(f.paths.iter().map(|e| e.len).collect_vec(), vec![0, 0, 0, 3, 2, 1]);
    }

    #[test]
    fn bfs_lengths_are_distances() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);

        for n in [10, 20, 50] {
            for m in [n as usize, 2 * n as usize, 4 * n as usize] {
                let g = random_graph(rng, n, m);
                let dist = g.floyd_warshall(|_| 1.0f64);

                for s in [0, n / 2, n - 1] {
                    let mut order = Vec::new();
                    let mut f = FromList::new(n);
                    g.breadth_first(
                        s,
                        TraverseOptions::new()
                            .node_visitor(|u| order.push(u))
                            .from_list(&mut f),
                    );

                    // nodes are visited by non-decreasing depth
                    assert!(
                        order
                            .iter()
                            .map(|&u| f.paths[u as usize].len)
                            .tuple_windows()
                            .all(|(a, b)| a <= b)
                    );
                    assert_eq!(order.len(), f.paths.iter().filter(|e| e.is_reached()).count());

                    for v in g.vertices() {
                        let d = dist[s as usize][v as usize];
                        let len = f.paths[v as usize].len;
                        if d.is_finite() {
                            assert_eq!(len, d as NumNodes + 1);
                        } else {
                            assert_eq!(len, 0);
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn bfs_abort() {
        let g = path_graph(5);
        let mut f = FromList::new(5);
        let mut seen = Vec::new();
        let completed = g.breadth_first(
            0,
            TraverseOptions::new()
                .ok_node_visitor(|u| {
                    seen.push(u);
                    u != 2
                })
                .from_list(&mut f),
        );
        assert!(!completed);
        assert_eq!(seen, vec![0, 1, 2]);
        // the arcs of 2 are never examined
        assert_eq!(f.paths[3], PathEnd::UNREACHED);
        assert_eq!(f.max_len, 3);
    }

    #[test]
    fn bfs_accumulates_into_forest() {
        let g = graph(vec![vec![1], vec![], vec![3], vec![]]);
        let mut f = FromList::new(4);
        g.breadth_first(0, TraverseOptions::new().from_list(&mut f));
        g.breadth_first(2, TraverseOptions::new().from_list(&mut f));

        assert_eq!(
            f.paths,
            vec![PathEnd::ROOT, PathEnd::new(0, 2), PathEnd::ROOT, PathEnd::new(2, 2)]
        );
        assert_eq!(f.root(1), 0);
        assert_eq!(f.root(3), 2);
        assert_eq!(f, g.breadth_first_forest());

        // a from list of the wrong size is reset
        let mut wrong = FromList::new(2);
        g.breadth_first(2, TraverseOptions::new().from_list(&mut wrong));
        assert_eq!(wrong.len(), 4);
        assert_eq!(wrong.paths[0], PathEnd::UNREACHED);
    }

    #[test]
    fn bfs_with_injected_order() {
        let g = graph(vec![vec![1, 2, 3], vec![], vec![], vec![]]);
        let mut order = Vec::new();
        g.breadth_first(
            0,
            TraverseOptions::new()
                .node_visitor(|u| order.push(u))
                .permutation(|len| (0..len).rev().collect()),
        );
        assert_eq!(order, vec![0, 3, 2, 1]);
    }

    #[test]
    fn random_order_keeps_bfs_lengths() {
        let rng = &mut Pcg64Mcg::seed_from_u64(7);
        let g = random_graph(rng, 40, 100);
        let expected = g.breadth_first_tree(0);

        let mut order_rng = Pcg64Mcg::seed_from_u64(11);
        let mut f = FromList::new(40);
        g.breadth_first(
            0,
            TraverseOptions::new()
                .rand(&mut order_rng)
                .from_list(&mut f),
        );
        assert_eq!(
            f.paths.iter().map(|e| e.len).collect_vec(),
            expected.paths.iter().map(|e| e.len).collect_vec()
        );
    }

    #[test]
    #[should_panic]
    fn wrong_permutation_length_panics() {
        let g = graph(vec![vec![1], vec![]]);
        g.depth_first(0, TraverseOptions::new().permutation(|_| vec![0, 1, 2]));
    }

    #[test]
    fn bfs_ignores_dfs_options() {
        let g = graph(vec![vec![1], vec![0]]);
        let mut arcs = 0;
        let mut visited = NodeBitSet::new(2);
        let on_path = RefCell::new(NodeBitSet::new(2));
        let completed = g.breadth_first(
            0,
            TraverseOptions::new()
                .arc_visitor(|_, _| arcs += 1)
                .ok_arc_visitor(|_, _| false)
                .visited(&mut visited)
                .path_bits(&on_path),
        );
        assert!(completed);
        assert_eq!(arcs, 0);
        assert_eq!(visited.cardinality(), 0);
        assert_eq!(on_path.borrow().cardinality(), 0);
    }

    #[test]
    fn dfs_order() {
        //  / 2
        // 1         4 - 3
        //  \ 0 - 5 /
        let g = graph(vec![vec![5], vec![2, 0], vec![], vec![], vec![3], vec![4]]);

        let mut order = Vec::new();
        assert!(g.depth_first(1, TraverseOptions::new().node_visitor(|u| order.push(u))));
        assert_eq!(order, vec![1, 2, 0, 5, 4, 3]);

        let mut order = Vec::new();
        g.depth_first(5, TraverseOptions::new().node_visitor(|u| order.push(u)));
        assert_eq!(order, vec![5, 4, 3]);

        let mut order = Vec::new();
        g.depth_first(
            1,
            TraverseOptions::new()
                .node_visitor(|u| order.push(u))
                .permutation(|len| (0..len).rev().collect()),
        );
        assert_eq!(order, vec![1, 0, 5, 4, 3, 2]);
    }

    #[test]
    fn dfs_visits_every_candidate_arc() {
        let rng = &mut Pcg64Mcg::seed_from_u64(5);
        for _ in 0..20 {
            let g = random_graph(rng, 30, 60);
            let mut visited = NodeBitSet::new(30);
            let mut arcs = Vec::new();
            g.depth_first(
                0,
                TraverseOptions::new()
                    .visited(&mut visited)
                    .arc_visitor(|u, x| arcs.push((u, x))),
            );

            let mut expected = visited
                .iter_set_bits()
                .flat_map(|u| (0..g.arcs_of(u).len()).map(move |x| (u, x)))
                .collect_vec();
            arcs.sort_unstable();
            expected.sort_unstable();
            assert_eq!(arcs, expected);
            assert_eq!(visited, g.reachable_from(0));
        }
    }

    #[test]
    fn dfs_abort_on_third_node() {
        let g = path_graph(6);
        let mut visited = NodeBitSet::new(6);
        let mut calls = 0;
        let mut seen = Vec::new();
        let completed = g.depth_first(
            0,
            TraverseOptions::new()
                .node_visitor(|u| seen.push(u))
                .ok_node_visitor(|_| {
                    calls += 1;
                    calls < 3
                })
                .visited(&mut visited),
        );

        assert!(!completed);
        assert_eq!(calls, 3);
        assert_eq!(seen, vec![0, 1, 2]);
        // the third node is marked before its visitor stops the traversal
        assert_eq!(visited.iter_set_bits().collect_vec(), vec![0, 1, 2]);
    }

    #[test]
    fn dfs_abort_from_arc_visitor() {
        let g = graph(vec![vec![1, 2], vec![], vec![]]);
        let mut seen = Vec::new();
        let completed = g.depth_first(
            0,
            TraverseOptions::new()
                .node_visitor(|u| seen.push(u))
                .ok_arc_visitor(|_, x| x == 0),
        );
        assert!(!completed);
        assert_eq!(seen, vec![0, 1]);
    }

    #[test]
    fn dfs_with_external_visited() {
        let g = path_graph(5);

        let mut visited = NodeBitSet::new_with_bits_set(5, [0 as Node]);
        let mut seen = Vec::new();
        assert!(g.depth_first(
            0,
            TraverseOptions::new()
                .node_visitor(|u| seen.push(u))
                .visited(&mut visited)
        ));
        assert!(seen.is_empty());

        let mut visited = NodeBitSet::new_with_bits_set(5, [2 as Node]);
        let mut seen = Vec::new();
        g.depth_first(
            0,
            TraverseOptions::new()
                .node_visitor(|u| seen.push(u))
                .visited(&mut visited),
        );
        assert_eq!(seen, vec![0, 1]);
        assert_eq!(visited.iter_set_bits().collect_vec(), vec![0, 1, 2]);
    }

    #[test]
    fn dfs_path_bits_track_current_path() {
        // 0 -> 1 -> 2, 0 -> 3
        let g = graph(vec![vec![1, 3], vec![2], vec![], vec![]]);
        let on_path = RefCell::new(NodeBitSet::new(4));
        let mut snapshots = Vec::new();
        g.depth_first(
            0,
            TraverseOptions::new()
                .path_bits(&on_path)
                .node_visitor(|_| snapshots.push(on_path.borrow().iter_set_bits().collect_vec())),
        );

        assert_eq!(
            snapshots,
            vec![vec![0], vec![0, 1], vec![0, 1, 2], vec![0, 3]]
        );
        assert_eq!(on_path.borrow().cardinality(), 0);
    }

    #[test]
    fn dfs_ignores_from_list() {
        let g = graph(vec![vec![1, 3], vec![2], vec![], vec![]]);
        let mut f = FromList::new(4);
        let mut seen = Vec::new();
        assert!(g.depth_first(
            0,
            TraverseOptions::new()
                .node_visitor(|u| seen.push(u))
                .from_list(&mut f)
        ));
        assert_eq!(seen, vec![0, 1, 2, 3]);
        assert_eq!(f, FromList::new(4));
    }

    #[test]
    fn merged_options() {
        let g = graph(vec![vec![1], vec![]]);
        let mut a = Vec::new();
        let mut b = Vec::new();
        let mut f = FromList::new(2);

        let base = TraverseOptions::new()
            .node_visitor(|u| a.push(u))
            .from_list(&mut f);
        let overrides = TraverseOptions::new().node_visitor(|u| b.push(u));
        let opts = base.merge(overrides);
        assert_eq!(
            format!("{opts:?}"),
            "TraverseOptions { node_visitor: true, ok_node_visitor: false, arc_visitor: false, \
             ok_arc_visitor: false, visited: false, path_bits: false, from_list: true, \
             permuter: false }"
        );
        g.breadth_first(0, opts);

        assert!(a.is_empty());
        assert_eq!(b, vec![0, 1]);
        assert_eq!(f.max_len, 2);
    }

    #[test]
    fn acyclic() {
        assert!(path_graph(5).is_acyclic());
        assert!(graph(vec![vec![1, 2], vec![3], vec![3], vec![]]).is_acyclic());
        assert!(!graph(vec![vec![0]]).is_acyclic());
        assert!(!graph(vec![vec![1], vec![2], vec![1]]).is_acyclic());

        let rng = &mut Pcg64Mcg::seed_from_u64(9);
        for _ in 0..50 {
            let g = random_graph(rng, 15, 18);
            let has_cycle = g
                .iter()
                .any(|(u, arcs)| arcs.iter().any(|&v| g.reachable_from(v).get_bit(u)));
            assert_eq!(g.is_acyclic(), !has_cycle);
        }
    }

    #[test]
    fn labeled_graphs_traverse_alike() {
        let rng = &mut Pcg64Mcg::seed_from_u64(1);
        let g = crate::testing::random_undirected_labeled(rng, 30, 40);
        assert_eq!(g.breadth_first_forest(), g.unlabeled().breadth_first_forest());
        assert_eq!(g.reachable_from(3), g.unlabeled().reachable_from(3));
    }
}
