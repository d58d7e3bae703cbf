/*!
Parent-pointer forests ("from lists").

A [`FromList`] records for every node of a graph which node it was reached from and how long
the path from its root is (counted in nodes). It is the principal output of
[`Traversal::breadth_first`] and can be queried for paths, roots and common ancestors or turned
back into an adjacency list.

Conventions:
- a root has `from == INVALID_NODE` and `len >= 1`,
- an unreached node has `from == INVALID_NODE` and `len == 0`,
- a node that names itself as parent is also a root (self-loop root); every upward walk
  stops there.

The `leaves` bitset and the `len` fields are caches: after mutating `paths` directly, call
[`FromList::recalc_leaves`] and then [`FromList::recalc_len`] before relying on them.
*/

use tracing::debug;

use super::*;

/// The `(parent, path length)` record of a single node in a [`FromList`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct PathEnd {
    /// Node this node was reached from, `INVALID_NODE` for roots and unreached nodes
    pub from: Node,
    /// Number of nodes on the path from the root to this node; `0` iff unreached
    pub len: NumNodes,
}

impl PathEnd {
    /// Entry of a node that has not been reached
    pub const UNREACHED: PathEnd = PathEnd {
        from: INVALID_NODE,
        len: 0,
    };

    /// Entry of a traversal root
    pub const ROOT: PathEnd = PathEnd {
        from: INVALID_NODE,
        len: 1,
    };

    pub const fn new(from: Node, len: NumNodes) -> Self {
        Self { from, len }
    }

    /// Entry with a parent (or `INVALID_NODE`) but without a known length
    pub const fn with_parent(from: Node) -> Self {
        Self { from, len: 0 }
    }

    /// Returns *true* if the node was reached, i.e. has a path of non-zero length
    pub const fn is_reached(&self) -> bool {
        self.len > 0
    }
}

impl Default for PathEnd {
    fn default() -> Self {
        Self::UNREACHED
    }
}

/// A path from a root given as its start node and the labeled arcs walked from there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabeledPath<L> {
    pub start: Node,
    pub path: Vec<Half<L>>,
}

/// A forest of parent pointers over the nodes of a graph, see the [module docs](self).
#[derive(Debug, Clone, PartialEq)]
pub struct FromList {
    /// One entry per node of the graph the tree was built over
    pub paths: Vec<PathEnd>,
    /// Nodes that are nobody's parent; stale until [`FromList::recalc_leaves`]
    pub leaves: NodeBitSet,
    /// Maximum `len` over all entries
    pub max_len: NumNodes,
}

impl FromList {
    /// Creates a from list over `n` nodes where no node is reached yet
    pub fn new(n: NumNodes) -> Self {
        Self {
            paths: vec![PathEnd::UNREACHED; n as usize],
            leaves: NodeBitSet::new(n),
            max_len: 0,
        }
    }

    /// Creates a from list from explicit entries. Leaves and `max_len` are not computed.
    pub fn from_paths(paths: Vec<PathEnd>) -> Self {
        let n = num_nodes(paths.len());
        Self {
            paths,
            leaves: NodeBitSet::new(n),
            max_len: 0,
        }
    }

    /// Returns the number of nodes covered by the from list
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Returns *true* if the from list covers no nodes
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Returns the number of nodes as `NumNodes`
    pub fn order(&self) -> NumNodes {
        self.paths.len() as NumNodes
    }

    /// Returns the parent of `n`, or `None` if `n` is a root (including self-loop roots)
    /// or unreached.
    /// ** Panics if `n >= len` **
    pub fn parent_of(&self, n: Node) -> Option<Node> {
        let from = self.paths[n as usize].from;
        (from != INVALID_NODE && from != n).then_some(from)
    }

    /// Validates that every recorded parent is either `INVALID_NODE` or a node of the list.
    ///
    /// All other methods assume this holds.
    ///
    /// # Examples
    /// ```
    /// use arcgraph::{prelude::*, algo::*};
    ///
    /// let ok = FromList::from_paths(vec![
    ///     PathEnd::ROOT,
    ///     PathEnd::with_parent(0),
    ///     PathEnd::with_parent(0),
    /// ]);
    /// assert!(ok.bounds_ok().is_ok());
    ///
    /// let bad = FromList::from_paths(vec![
    ///     PathEnd::with_parent(9),
    ///     PathEnd::with_parent(0),
    ///     PathEnd::with_parent(0),
    /// ]);
    /// assert_eq!(
    ///     bad.bounds_ok(),
    ///     Err(GraphError::ParentOutOfBounds { node: 0, from: 9, order: 3 })
    /// );
    /// ```
    pub fn bounds_ok(&self) -> Result<()> {
        let order = self.order();
        match self
            .paths
            .iter()
            .position(|e| e.from != INVALID_NODE && e.from >= order)
        {
            None => Ok(()),
            Some(node) => Err(GraphError::ParentOutOfBounds {
                node: node as Node,
                from: self.paths[node].from,
                order,
            }),
        }
    }

    /// Returns the path from the root of `end` to `end` (both included).
    ///
    /// The result has `paths[end].len` entries; it is empty if `end` is unreached.
    /// See [`FromList::path_to_into`] to reuse an existing buffer.
    ///
    /// ** Panics if `end >= len` or the recorded lengths are inconsistent **
    ///
    /// # Examples
    /// ```
    /// use arcgraph::{prelude::*, algo::*};
    ///
    /// //       4  3
    /// //      /
    /// //     1
    /// //    / \
    /// //   0   2
    /// let f = FromList::from_paths(vec![
    ///     PathEnd::new(1, 3),
    ///     PathEnd::new(4, 2),
    ///     PathEnd::new(1, 3),
    ///     PathEnd::ROOT,
    ///     PathEnd::ROOT,
    /// ]);
    /// assert_eq!(f.path_to(1), vec![4, 1]);
    /// assert_eq!(f.path_to(2), vec![4, 1, 2]);
    /// assert_eq!(f.path_to(3), vec![3]);
    /// ```
    pub fn path_to(&self, end: Node) -> Vec<Node> {
        let mut path = Vec::new();
        self.path_to_into(end, &mut path);
        path
    }

    /// Writes the path from the root of `end` to `end` into `buf`, replacing its content.
    /// `buf` is only reallocated if its capacity is smaller than the path length.
    ///
    /// ** Panics if `end >= len` or the recorded lengths are inconsistent **
    pub fn path_to_into(&self, end: Node, buf: &mut Vec<Node>) {
        buf.clear();
        let len = self.paths[end as usize].len as usize;
        buf.resize(len, INVALID_NODE);

        let mut node = end;
        for i in (0..len).rev() {
            buf[i] = node;
            if i > 0 {
                node = self.paths[node as usize].from;
            }
        }
    }

    /// Returns the path to `end` as its start node plus the labeled arcs along it.
    /// The label of the arc entering node `v` is `labels[v]`.
    ///
    /// Returns `None` if `end` is unreached.
    /// ** Panics if `labels` is shorter than the list **
    pub fn labeled_path_to<L>(&self, end: Node, labels: &[L]) -> Option<LabeledPath<L>>
    where
        L: Copy,
    {
        let nodes = self.path_to(end);
        let (&start, rest) = nodes.split_first()?;
        Some(LabeledPath {
            start,
            path: rest
                .iter()
                .map(|&v| Half::new(v, labels[v as usize]))
                .collect(),
        })
    }

    /// Returns the lowest node lying on the root paths of both `a` and `b`.
    ///
    /// Returns `None` if either node is out of range or if `a` and `b` belong to different
    /// trees of the forest. Requires the `len` fields to be current.
    ///
    /// # Examples
    /// ```
    /// use arcgraph::{prelude::*, algo::*};
    ///
    /// //       4
    /// //      /
    /// //     1
    /// //    / \
    /// //   0   2
    /// //  /
    /// // 3
    /// let f = FromList::from_paths(vec![
    ///     PathEnd::new(1, 3),
    ///     PathEnd::new(4, 2),
    ///     PathEnd::new(1, 3),
    ///     PathEnd::new(0, 4),
    ///     PathEnd::ROOT,
    /// ]);
    /// assert_eq!(f.common_ancestor(2, 3), Some(1));
    /// assert_eq!(f.common_ancestor(3, 0), Some(0));
    /// ```
    pub fn common_ancestor(&self, a: Node, b: Node) -> Option<Node> {
        let n = self.order();
        if a >= n || b >= n {
            return None;
        }

        let len_of = |u: Node| self.paths[u as usize].len;
        let (mut a, mut b) = (a, b);

        while len_of(a) > len_of(b) {
            a = self.parent_of(a)?;
        }
        while len_of(b) > len_of(a) {
            b = self.parent_of(b)?;
        }
        while a != b {
            a = self.parent_of(a)?;
            b = self.parent_of(b)?;
        }

        Some(a)
    }

    /// Returns the root of the tree containing `n`.
    /// An unreached node is its own root.
    ///
    /// ** Panics if `n >= len` or the parent pointers starting at `n` form a cycle **
    ///
    /// # Examples
    /// ```
    /// use arcgraph::{prelude::*, algo::*};
    ///
    /// //  0     3
    /// //  |     |
    /// //  1     4
    /// //  |
    /// //  2
    /// let f = FromList::from_paths(vec![
    ///     PathEnd::with_parent(INVALID_NODE),
    ///     PathEnd::with_parent(0),
    ///     PathEnd::with_parent(1),
    ///     PathEnd::with_parent(INVALID_NODE),
    ///     PathEnd::with_parent(3),
    /// ]);
    /// assert_eq!(f.root(2), 0);
    /// assert_eq!(f.root(4), 3);
    /// ```
    pub fn root(&self, mut n: Node) -> Node {
        let mut steps = 0;
        while let Some(p) = self.parent_of(n) {
            steps += 1;
            assert!(steps <= self.len(), "parent pointers contain a cycle");
            n = p;
        }
        n
    }

    /// Returns the set of reached nodes without a parent
    pub fn roots(&self) -> NodeBitSet {
        let mut roots = NodeBitSet::new(self.order());
        for (n, e) in self.paths.iter().enumerate() {
            if e.is_reached() && self.parent_of(n as Node).is_none() {
                roots.set_bit(n as Node);
            }
        }
        roots
    }

    /// Recomputes `leaves`: a node is a leaf iff no other node names it as parent.
    ///
    /// # Examples
    /// ```
    /// use arcgraph::{prelude::*, algo::*};
    ///
    /// //   0
    /// //  / \
    /// // 1   2
    /// //      \
    /// //       3
    /// let mut f = FromList::from_paths(vec![
    ///     PathEnd::with_parent(INVALID_NODE),
    ///     PathEnd::with_parent(0),
    ///     PathEnd::with_parent(0),
    ///     PathEnd::with_parent(2),
    /// ]);
    /// f.recalc_leaves();
    /// assert_eq!(f.leaves.iter_set_bits().collect::<Vec<_>>(), vec![1, 3]);
    /// ```
    pub fn recalc_leaves(&mut self) {
        let mut leaves = NodeBitSet::new_all_set(self.order());
        for n in 0..self.order() {
            if let Some(p) = self.parent_of(n) {
                leaves.clear_bit(p);
            }
        }
        self.leaves = leaves;
    }

    /// Recomputes every `len` from the parent pointers and updates `max_len`.
    ///
    /// Requires `leaves` to be current (see [`FromList::recalc_leaves`]). Every node on the path
    /// from a leaf to its root gets one more than its parent; roots get `1`. A root without
    /// children keeps length `0` if it was recorded as unreached before.
    ///
    /// ** Panics if the parent pointers contain a cycle **
    ///
    /// # Examples
    /// ```
    /// use arcgraph::{prelude::*, algo::*};
    ///
    /// let mut f = FromList::from_paths(vec![
    ///     PathEnd::with_parent(INVALID_NODE),
    ///     PathEnd::with_parent(0),
    ///     PathEnd::with_parent(0),
    ///     PathEnd::with_parent(2),
    /// ]);
    /// f.recalc_leaves();
    /// f.recalc_len();
    /// assert_eq!(f.paths.iter().map(|e| e.len).collect::<Vec<_>>(), vec![1, 2, 2, 3]);
    /// assert_eq!(f.max_len, 3);
    /// ```
    pub fn recalc_len(&mut self) {
        let n = self.len();
        assert_eq!(
            self.leaves.number_of_bits() as usize,
            n,
            "leaves do not match the paths; call recalc_leaves first"
        );

        let mut lens: Vec<NumNodes> = vec![0; n];
        let mut stack = Vec::new();
        let mut max_len = 0;

        for leaf in self.leaves.iter_set_bits() {
            if self.parent_of(leaf).is_none() && !self.paths[leaf as usize].is_reached() {
                continue; // unreached
            }

            // climb until a root or a node whose length is already known
            let mut u = leaf;
            while lens[u as usize] == 0 {
                stack.push(u);
                assert!(stack.len() <= n, "parent pointers contain a cycle");
                match self.parent_of(u) {
                    Some(p) => u = p,
                    None => break,
                }
            }

            let mut len = lens[u as usize];
            while let Some(v) = stack.pop() {
                len += 1;
                lens[v as usize] = len;
            }
            max_len = max_len.max(len);
        }

        for (e, len) in self.paths.iter_mut().zip(lens) {
            e.len = len;
        }
        self.max_len = max_len;

        debug!(nodes = n, max_len, "recomputed path lengths");
    }

    /// Returns a node lying on a cycle of parent pointers, or `None` if the forest is acyclic.
    /// Self-loop roots do not count as cycles.
    pub fn cyclic(&self) -> Option<Node> {
        const UNSEEN: Node = INVALID_NODE;
        const DONE: Node = INVALID_NODE - 1;

        // walk[u] = start of the walk that first touched u
        let mut walk = vec![UNSEEN; self.len()];
        for start in 0..self.order() {
            let mut u = start;
            while walk[u as usize] == UNSEEN {
                walk[u as usize] = start;
                match self.parent_of(u) {
                    Some(p) => u = p,
                    None => break,
                }
            }

            if walk[u as usize] == start && self.parent_of(u).is_some() {
                return Some(u);
            }

            let mut v = start;
            while walk[v as usize] == start {
                walk[v as usize] = DONE;
                match self.parent_of(v) {
                    Some(p) => v = p,
                    None => break,
                }
            }
        }
        None
    }

    /// Reorients the tree containing `n` such that `n` becomes its root by reversing the
    /// parent pointers on the path from `n` to the old root.
    ///
    /// Afterwards `leaves` and `len` are stale.
    ///
    /// # Examples
    /// ```
    /// use arcgraph::{prelude::*, algo::*};
    ///
    /// // 0 - 1 - 2 rooted at 0 becomes rooted at 2
    /// let mut f = FromList::from_paths(vec![
    ///     PathEnd::with_parent(INVALID_NODE),
    ///     PathEnd::with_parent(0),
    ///     PathEnd::with_parent(1),
    /// ]);
    /// f.re_root(2);
    /// assert_eq!(f.paths.iter().map(|e| e.from).collect::<Vec<_>>(), vec![1, 2, INVALID_NODE]);
    /// ```
    pub fn re_root(&mut self, mut n: Node) {
        let Some(mut fr) = self.parent_of(n) else {
            return;
        };
        self.paths[n as usize].from = INVALID_NODE;

        loop {
            let next = self.parent_of(fr);
            self.paths[fr as usize].from = n;
            match next {
                Some(ff) => {
                    n = fr;
                    fr = ff;
                }
                None => return,
            }
        }
    }

    /// Inverts the parent relation: the result has an arc `p -> v` for every node `v` whose
    /// recorded parent is `p`. Arc lists are ordered by child node id.
    ///
    /// # Examples
    /// ```
    /// use arcgraph::{prelude::*, algo::*};
    ///
    /// //    0   3
    /// //   / \
    /// //  1   2
    /// let f = FromList::from_paths(vec![
    ///     PathEnd::with_parent(INVALID_NODE),
    ///     PathEnd::with_parent(0),
    ///     PathEnd::with_parent(0),
    ///     PathEnd::with_parent(INVALID_NODE),
    /// ]);
    /// let g = f.transpose();
    /// assert_eq!(g.arcs_of(0), &[1, 2]);
    /// assert!(g.arcs_of(3).is_empty());
    /// ```
    pub fn transpose(&self) -> AdjacencyList {
        let mut g = AdjacencyList::new(self.order());
        for (v, e) in self.child_arcs() {
            g.add_arc(e, v);
        }
        g
    }

    /// Like [`FromList::transpose`], but the arc into `v` is labeled `labels[v]`.
    /// Without a label table every arc gets `L::default()`.
    ///
    /// ** Panics if `labels` is shorter than the list **
    pub fn transpose_labeled<L>(&self, labels: Option<&[L]>) -> LabeledAdjacencyList<L>
    where
        L: Copy + PartialEq + Default,
    {
        let mut g = LabeledAdjacencyList::new(self.order());
        for (v, p) in self.child_arcs() {
            g.add_arc(p, Half::new(v, label_of(labels, v)));
        }
        g
    }

    /// Builds the undirected graph of the forest: every parent arc `p -> v` plus its
    /// reciprocal `v -> p`. A self-loop root yields a single loop.
    ///
    /// # Examples
    /// ```
    /// use arcgraph::{prelude::*, algo::*};
    ///
    /// let f = FromList::from_paths(vec![
    ///     PathEnd::with_parent(INVALID_NODE),
    ///     PathEnd::with_parent(0),
    ///     PathEnd::with_parent(0),
    /// ]);
    /// let g = f.to_undirected();
    /// assert_eq!(g.arcs_of(0), &[1, 2]);
    /// assert_eq!(g.arcs_of(1), &[0]);
    /// assert!(g.is_undirected());
    /// ```
    pub fn to_undirected(&self) -> AdjacencyList {
        let mut g = AdjacencyList::new(self.order());
        for (v, p) in self.child_arcs() {
            g.add_reciprocal(p, v);
        }
        g
    }

    /// Labeled counterpart of [`FromList::to_undirected`]; both arcs of the pair between `p`
    /// and `v` are labeled `labels[v]` (or `L::default()` without a table).
    ///
    /// ** Panics if `labels` is shorter than the list **
    pub fn undirected_labeled<L>(&self, labels: Option<&[L]>) -> LabeledAdjacencyList<L>
    where
        L: Copy + PartialEq + Default,
    {
        let mut g = LabeledAdjacencyList::new(self.order());
        for (v, p) in self.child_arcs() {
            g.add_reciprocal(p, Half::new(v, label_of(labels, v)));
        }
        g
    }

    /// Iterates `(child, parent)` for every entry with a parent, self-loop roots included
    fn child_arcs(&self) -> impl Iterator<Item = (Node, Node)> + '_ {
        self.paths
            .iter()
            .enumerate()
            .filter(|(_, e)| e.from != INVALID_NODE)
            .map(|(v, e)| (v as Node, e.from))
    }
}

fn label_of<L: Copy + Default>(labels: Option<&[L]>, v: Node) -> L {
    labels.map_or_else(L::default, |labels| labels[v as usize])
}

impl From<Vec<PathEnd>> for FromList {
    fn from(paths: Vec<PathEnd>) -> Self {
        Self::from_paths(paths)
    }
}
