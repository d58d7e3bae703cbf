//! # Dot
//!
//! The Dot-Format is the input language of [GraphViz](https://graphviz.org/). We only use basic
//! functionality to draw arcs (optionally labeled), path trees and colored nodes.
//!
//! A graph with some highlighted nodes can be drawn via
//! ```
//! use arcgraph::{prelude::*, io::*};
//!
//! let g: AdjacencyList = AdjacencyList::from_arcs(vec![vec![1, 2], vec![], vec![]]);
//! let dot_writer = DotWriter::new();
//!
//! let mut out = Vec::new();
//! dot_writer.start_graph(&mut out)?;
//! dot_writer.write_arcs(&mut out, &g)?;
//! dot_writer.color_nodes(&mut out, g.neighbors_of(0), DotColor::Red)?;
//! dot_writer.finish_graph(&mut out)?;
//!
//! assert_eq!(
//!     String::from_utf8(out).unwrap(),
//!     "digraph {\nu1->u2;\nu1->u3;\nu2[style=filled, color=red];\nu3[style=filled, color=red];\n}\n"
//! );
//! # Ok::<(), std::io::Error>(())
//! ```
//!
//! Note that for nodes, the latest coloring is the one applied by a visualizer.
use std::{fmt::Display, io::Write};

use tracing::debug;

use super::*;

/// A writer for the Dot-Format
#[derive(Debug, Clone)]
pub struct DotWriter {
    /// Increment nodes by 1 before writing
    inc_nodes: bool,
    /// Prefix of a node (default: 'u')
    prefix: String,
    /// Write a `digraph` with arcs rather than a `graph` with edges
    directed: bool,
    /// Attach arc labels (where available)
    edge_labels: bool,
}

impl Default for DotWriter {
    fn default() -> Self {
        Self {
            inc_nodes: true,
            prefix: "u".to_string(),
            directed: true,
            edge_labels: true,
        }
    }
}

impl DotWriter {
    /// Shorthand for default
    pub fn new() -> Self {
        Self::default()
    }

    /// If *false*, nodes are written by their internal (zero-based) id
    pub fn inc_nodes(mut self, inc_nodes: bool) -> Self {
        self.inc_nodes = inc_nodes;
        self
    }

    /// Set the prefix of a node (`u` by default)
    pub fn node_prefix<S>(mut self, prefix: S) -> Self
    where
        S: Into<String>,
    {
        self.prefix = prefix.into();
        self
    }

    /// If *false*, the graph is assumed to be undirected (see
    /// [`GraphValidation::is_undirected`](crate::algo::GraphValidation::is_undirected)) and
    /// every reciprocal pair of arcs is written as a single edge.
    pub fn directed(mut self, directed: bool) -> Self {
        self.directed = directed;
        self
    }

    /// If *false*, arc labels are never written
    pub fn edge_labels(mut self, edge_labels: bool) -> Self {
        self.edge_labels = edge_labels;
        self
    }

    /// Writes the opening brackets of the graph
    pub fn start_graph<W>(&self, writer: &mut W) -> Result<()>
    where
        W: Write,
    {
        let graph_name = if self.directed { "digraph" } else { "graph" };
        writeln!(writer, "{graph_name} {{")
    }

    /// Formats a node depending on `self.prefix, self.inc_nodes`
    fn format_node(&self, u: Node) -> String {
        let u = u + self.inc_nodes as Node;
        format!("{}{u}", self.prefix)
    }

    fn edge_op(&self) -> &'static str {
        if self.directed { "->" } else { "--" }
    }

    /// Writes a single arc (or edge) statement with an optional label
    fn write_arc<W, L>(&self, writer: &mut W, u: Node, v: Node, label: Option<L>) -> Result<()>
    where
        W: Write,
        L: Display,
    {
        write!(
            writer,
            "{}{}{}",
            self.format_node(u),
            self.edge_op(),
            self.format_node(v)
        )?;
        match label {
            Some(label) if self.edge_labels => writeln!(writer, "[label=\"{label}\"];"),
            _ => writeln!(writer, ";"),
        }
    }

    /// Returns *false* for the second arc of a reciprocal pair when writing undirected
    fn keeps(&self, u: Node, v: Node) -> bool {
        self.directed || u <= v
    }

    /// Writes all arcs of `graph` (without labels) in node and arc list order
    pub fn write_arcs<W, A>(&self, writer: &mut W, graph: &AdjacencyList<A>) -> Result<()>
    where
        W: Write,
        A: Arc,
    {
        for (u, arcs) in graph.iter() {
            for v in arcs.iter().map(Arc::to).filter(|&v| self.keeps(u, v)) {
                self.write_arc(writer, u, v, None::<&str>)?;
            }
        }
        Ok(())
    }

    /// Writes all arcs of `graph` with their labels
    pub fn write_labeled_arcs<W, L>(
        &self,
        writer: &mut W,
        graph: &LabeledAdjacencyList<L>,
    ) -> Result<()>
    where
        W: Write,
        L: Copy + PartialEq + Display,
    {
        for (u, arcs) in graph.iter() {
            for arc in arcs.iter().filter(|a| self.keeps(u, a.to)) {
                self.write_arc(writer, u, arc.to, Some(arc.label))?;
            }
        }
        Ok(())
    }

    /// Writes the parent arcs of `tree`, each pointing from parent to child. Roots are written as
    /// standalone nodes so that single-node trees show up; unreached nodes are omitted.
    pub fn write_from_list<W>(&self, writer: &mut W, tree: &FromList) -> Result<()>
    where
        W: Write,
    {
        for root in tree.roots().iter_set_bits() {
            writeln!(writer, "{};", self.format_node(root))?;
        }
        for (v, e) in tree.paths.iter().enumerate() {
            if let Some(p) = tree.parent_of(v as Node) {
                let len = e.is_reached().then_some(e.len);
                self.write_arc(writer, p, v as Node, len)?;
            }
        }
        Ok(())
    }

    /// Writes a list of colored nodes to `writer`.
    /// This method should only be needed when wanting to color additional nodes which is why
    /// `color` is not optional.
    pub fn color_nodes<W, I>(&self, writer: &mut W, nodes: I, color: DotColor) -> Result<()>
    where
        W: Write,
        I: IntoIterator<Item = Node>,
    {
        for u in nodes {
            writeln!(writer, "{}[style=filled, color={color}];", self.format_node(u))?;
        }
        Ok(())
    }

    /// Closes the Dot-Graph, thus finishing the graph
    pub fn finish_graph<W>(&self, writer: &mut W) -> Result<()>
    where
        W: Write,
    {
        writeln!(writer, "}}")
    }

    /// Writes a complete labeled graph; see [`GraphWriter`] for unlabeled graphs and trees
    pub fn try_write_labeled_graph<W, L>(
        &self,
        graph: &LabeledAdjacencyList<L>,
        mut writer: W,
    ) -> Result<()>
    where
        W: Write,
        L: Copy + PartialEq + Display,
    {
        self.start_graph(&mut writer)?;
        self.write_labeled_arcs(&mut writer, graph)?;
        self.finish_graph(&mut writer)
    }
}

impl<A> GraphWriter<AdjacencyList<A>> for DotWriter
where
    A: Arc,
{
    fn try_write_graph<W>(&self, graph: &AdjacencyList<A>, mut writer: W) -> Result<()>
    where
        W: Write,
    {
        debug!(order = graph.order(), arcs = graph.arc_size(), "writing dot graph");
        self.start_graph(&mut writer)?;
        self.write_arcs(&mut writer, graph)?;
        self.finish_graph(&mut writer)
    }
}

impl GraphWriter<FromList> for DotWriter {
    /// Path lengths are written as edge labels
    fn try_write_graph<W>(&self, tree: &FromList, mut writer: W) -> Result<()>
    where
        W: Write,
    {
        debug!(order = tree.order(), max_len = tree.max_len, "writing dot tree");
        self.start_graph(&mut writer)?;
        self.write_from_list(&mut writer, tree)?;
        self.finish_graph(&mut writer)
    }
}

/// Trait for writing a graph to a writer in the Dot-Format.
/// Shorthand for default settings.
pub trait DotWrite {
    /// Tries to write the graph to a writer
    fn try_write_dot<W>(&self, writer: W) -> Result<()>
    where
        W: Write;

    /// Tries to write the graph to a file
    fn try_write_dot_file<P>(&self, path: P) -> Result<()>
    where
        P: AsRef<Path>,
    {
        let writer = BufWriter::new(File::create(path)?);
        self.try_write_dot(writer)
    }
}

impl<G> DotWrite for G
where
    DotWriter: GraphWriter<G>,
{
    fn try_write_dot<W>(&self, writer: W) -> Result<()>
    where
        W: Write,
    {
        DotWriter::default().try_write_graph(self, writer)
    }
}

impl Display for DotColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", format!("{self:?}").to_lowercase())
    }
}

/// A selection of the SVG color names understood by GraphViz, see
/// `https://graphviz.gitlab.io/doc/info/colors.html#svg`
#[derive(Debug, Copy, Clone)]
pub enum DotColor {
    Black,
    Blue,
    Brown,
    Cyan,
    DarkGreen,
    Gold,
    Gray,
    Green,
    LightBlue,
    LightGray,
    Magenta,
    Orange,
    Pink,
    Purple,
    Red,
    Teal,
    White,
    Yellow,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algo::PathEnd;

    fn to_string<F>(write: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> Result<()>,
    {
        let mut out = Vec::new();
        write(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn directed_graph() {
        let g: AdjacencyList = AdjacencyList::from_arcs(vec![vec![1], vec![0, 1]]);
        assert_eq!(
            to_string(|out| g.try_write_dot(out)),
            "digraph {\nu1->u2;\nu2->u1;\nu2->u2;\n}\n"
        );
        assert_eq!(
            to_string(|out| DotWriter::new()
                .inc_nodes(false)
                .node_prefix("n")
                .try_write_graph(&g, out)),
            "digraph {\nn0->n1;\nn1->n0;\nn1->n1;\n}\n"
        );
    }

    #[test]
    fn undirected_graph() {
        let mut g: LabeledAdjacencyList<char> = LabeledAdjacencyList::new(3);
        g.add_reciprocal(0, Half::new(1, 'a'));
        g.add_reciprocal(2, Half::new(1, 'b'));
        g.add_reciprocal(2, Half::new(2, 'c'));

        let writer = DotWriter::new().directed(false);
        assert_eq!(
            to_string(|out| writer.try_write_labeled_graph(&g, out)),
            "graph {\nu1--u2[label=\"a\"];\nu2--u3[label=\"b\"];\nu3--u3[label=\"c\"];\n}\n"
        );
        assert_eq!(
            to_string(|out| writer.clone().edge_labels(false).try_write_labeled_graph(&g, out)),
            "graph {\nu1--u2;\nu2--u3;\nu3--u3;\n}\n"
        );
        assert_eq!(
            to_string(|out| writer.try_write_graph(&g.unlabeled(), out)),
            "graph {\nu1--u2;\nu2--u3;\nu3--u3;\n}\n"
        );
    }

    #[test]
    fn from_list() {
        //   0    3
        //  / \
        // 1   2
        let mut f = FromList::from_paths(vec![
            PathEnd::ROOT,
            PathEnd::new(0, 2),
            PathEnd::new(0, 2),
            PathEnd::ROOT,
            PathEnd::UNREACHED,
        ]);
        f.max_len = 2;

        assert_eq!(
            to_string(|out| f.try_write_dot(out)),
            "digraph {\nu1;\nu4;\nu1->u2[label=\"2\"];\nu1->u3[label=\"2\"];\n}\n"
        );
        assert_eq!(
            to_string(|out| DotWriter::new()
                .edge_labels(false)
                .inc_nodes(false)
                .write_from_list(out, &f)),
            "u0;\nu3;\nu0->u1;\nu0->u2;\n"
        );
    }

    #[test]
    fn colors() {
        assert_eq!(DotColor::LightBlue.to_string(), "lightblue");
        let writer = DotWriter::new();
        assert_eq!(
            to_string(|out| writer.color_nodes(out, [0, 2], DotColor::Gold)),
            "u1[style=filled, color=gold];\nu3[style=filled, color=gold];\n"
        );
    }
}
