//! # Dot
//!
//! The Dot-Format is a very extensive format used by [GraphViz](https://graphviz.org/) to allow
//! for detailed visualizations. We only use basic functionality to draw labelled nodes and
//! weighted (possibly colored) edges.
//!
//! For example, drawing a graph where the edges of a spanning tree are colored red can be
//! achieved via
//! ```ignore
//! let dot_writer = DotWriter::default();
//! dot_writer.start_graph(&mut writer, graph.is_directed())?;
//! dot_writer.write_vertices(&mut writer, graph.vertex_labels())?;
//! dot_writer.write_edges(&mut writer, graph.unique_weighted_edges(), graph.is_directed(), None)?;
//! dot_writer.write_edges(&mut writer, tree.edges, graph.is_directed(), Some(DotColor::Red))?;
//! dot_writer.finish_graph(&mut writer)?;
//! ```
//!
//! Note that each new colored edge adds another edge to the drawing.
use std::{
    fmt::{Debug, Display},
    hash::Hash,
    io::Write,
};

use super::*;

/// Graphs whose vertices have a printable name
pub trait VertexLabels {
    /// Returns one label per node handle
    fn vertex_labels(&self) -> Vec<String>;
}

impl<V, W> VertexLabels for Graph<V, W>
where
    V: Eq + Hash + Clone + Debug + Display,
    W: Weight,
{
    fn vertex_labels(&self) -> Vec<String> {
        self.identifiers().map(|v| v.to_string()).collect()
    }
}

impl<W> VertexLabels for WeightMatrix<W> {
    fn vertex_labels(&self) -> Vec<String> {
        self.vertices().map(|u| u.to_string()).collect()
    }
}

/// A writer for the Dot-Format
#[derive(Debug, Clone)]
pub struct DotWriter {
    /// Name of the graph (omitted if empty)
    name: String,
    /// Prefix of a node (default: 'u')
    prefix: String,
    /// Attach weights as edge labels
    weights: bool,
}

impl Default for DotWriter {
    fn default() -> Self {
        Self {
            name: String::new(),
            prefix: "u".to_string(),
            weights: true,
        }
    }
}

impl DotWriter {
    /// Shorthand for default
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the name of the graph
    pub fn set_name<S: Into<String>>(&mut self, name: S) {
        self.name = name.into();
    }

    /// Set the name of the graph
    pub fn name<S: Into<String>>(mut self, name: S) -> Self {
        self.set_name(name);
        self
    }

    /// Set the prefix of a node (`u` by default). Can also be changed while drawing to draw
    /// additional subgraphs apart from the original graph.
    pub fn set_node_prefix<S: Into<String>>(&mut self, prefix: S) {
        self.prefix = prefix.into();
    }

    /// Set the prefix of a node (`u` by default).
    pub fn node_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.set_node_prefix(prefix);
        self
    }

    /// If *false*, edges are drawn without weight labels
    pub fn set_weights(&mut self, weights: bool) {
        self.weights = weights;
    }

    /// If *false*, edges are drawn without weight labels
    pub fn weights(mut self, weights: bool) -> Self {
        self.set_weights(weights);
        self
    }

    /// Writes the opening brackets of the graph.
    /// Must know if the graph is undirected
    pub fn start_graph<W>(&self, writer: &mut W, directed: bool) -> Result<()>
    where
        W: Write,
    {
        let graph_type = if directed { "digraph" } else { "graph" };

        if self.name.is_empty() {
            writeln!(writer, "{graph_type} {{")
        } else {
            writeln!(writer, "{graph_type} {:?} {{", self.name)
        }
    }

    /// Formats a node depending on `self.prefix`
    fn format_node(&self, u: Node) -> String {
        format!("{}{u}", self.prefix)
    }

    /// Writes one node statement per label; the `i`-th label belongs to node `i`
    pub fn write_vertices<W, I, S>(&self, writer: &mut W, labels: I) -> Result<()>
    where
        W: Write,
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for (u, label) in labels.into_iter().enumerate() {
            writeln!(
                writer,
                "{}[label={:?}];",
                self.format_node(u as Node),
                label.as_ref()
            )?;
        }
        Ok(())
    }

    /// Writes an iterator of edges to `writer`. Must know if the edges are directed and if they
    /// should be colored.
    pub fn write_edges<W, I, X>(
        &self,
        writer: &mut W,
        edges: I,
        directed: bool,
        color: Option<DotColor>,
    ) -> Result<()>
    where
        W: Write,
        I: IntoIterator<Item = WeightedEdge<X>>,
        X: Display,
    {
        let edge_dir = if directed { "->" } else { "--" };

        for e in edges {
            let mut attributes = Vec::with_capacity(2);
            if self.weights {
                attributes.push(format!("label={}", e.weight));
            }
            if let Some(c) = color {
                attributes.push(format!("color={c}"));
            }

            write!(
                writer,
                "{}{edge_dir}{}",
                self.format_node(e.src),
                self.format_node(e.dst)
            )?;
            if !attributes.is_empty() {
                write!(writer, "[{}]", attributes.join(", "))?;
            }
            writeln!(writer, ";")?;
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
}

impl<G> GraphWriter<G> for DotWriter
where
    G: WeightedAdjacencyList + VertexLabels,
{
    /// Undirected edges are written once
    fn try_write_graph<W>(&self, graph: &G, mut writer: W) -> Result<()>
    where
        W: Write,
    {
        let directed = graph.is_directed();
        self.start_graph(&mut writer, directed)?;
        self.write_vertices(&mut writer, graph.vertex_labels())?;
        self.write_edges(&mut writer, graph.unique_weighted_edges(), directed, None)?;
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
        let mut writer = BufWriter::new(File::create(path)?);
        self.try_write_dot(&mut writer)?;
        writer.flush()
    }
}

impl<G> DotWrite for G
where
    G: WeightedAdjacencyList + VertexLabels,
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

/// Subset of the Svg-Dot colors taken from
/// `https://graphviz.gitlab.io/doc/info/colors.html#svg`
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum DotColor {
    Black,
    Blue,
    Brown,
    Cyan,
    DarkGreen,
    Gold,
    Gray,
    Green,
    Magenta,
    Orange,
    Purple,
    Red,
    Yellow,
}
