//! Graph edges.
//!
//! An [`Edge`] connects two nodes and belongs to the graph on which it was created, which
//! need not be the graph owning either endpoint. Edges are never deduplicated: creating
//! the same connection twice yields two edges, also in `strict` graphs.

use std::{
    cell::RefCell,
    fmt,
    io::{self, Write},
    rc::Rc,
};

use crate::{
    attributes::{Attributes, Key, Style, Styleable},
    dot::{writer::DotWriter, GraphKind, GraphRc, GraphRef, NodeRc},
    utils::quote_id,
    Result,
};

/// A reference-counted pointer to an `Edge`
pub type EdgeRc = Rc<Edge>;

/// Callback run once on every edge a graph creates, before the edge is stored.
pub type EdgeInitializer = Rc<dyn Fn(&EdgeRc)>;

/// A connection between two nodes.
pub struct Edge {
    id: String,
    from: NodeRc,
    to: NodeRc,
    attributes: RefCell<Attributes>,
    graph: GraphRef,
}

impl Edge {
    pub(crate) fn new(
        id: String,
        from: NodeRc,
        to: NodeRc,
        attributes: Attributes,
        graph: GraphRef,
    ) -> Self {
        Edge {
            id,
            from,
            to,
            attributes: RefCell::new(attributes),
            graph,
        }
    }

    /// Returns the generated edge id. It is not part of the DOT output.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the tail node.
    #[must_use]
    pub fn from(&self) -> &NodeRc {
        &self.from
    }

    /// Returns the head node.
    #[must_use]
    pub fn to(&self) -> &NodeRc {
        &self.to
    }

    /// Returns the graph on which this edge was created, if it is still alive.
    #[must_use]
    pub fn graph(&self) -> Option<GraphRc> {
        self.graph.upgrade()
    }

    /// Creates an edge from this edge's head to `to`, allowing chains like
    /// `a.edge(&b)?.edge(&c)`.
    ///
    /// The new edge belongs to the same graph as this one. Returns `None` if that graph has
    /// been dropped.
    pub fn edge(&self, to: &NodeRc) -> Option<EdgeRc> {
        self.edge_with_attributes(to, &Attributes::new())
    }

    /// Like [`Edge::edge`], with a copy of `attributes` on the new edge.
    pub fn edge_with_attributes(&self, to: &NodeRc, attributes: &Attributes) -> Option<EdgeRc> {
        let graph = self.graph.upgrade()?;
        Some(graph.edge_with_attributes(&self.to, to, attributes))
    }

    /// Returns the edges from this edge's head to `to` owned by this edge's graph.
    #[must_use]
    pub fn edges_to(&self, to: &NodeRc) -> Vec<EdgeRc> {
        self.graph
            .upgrade()
            .map(|graph| graph.find_edges(&self.to, to))
            .unwrap_or_default()
    }

    /// Sets the `label` attribute.
    pub fn label(&self, text: impl Into<String>) -> &Self {
        self.set_attribute_string(Key::Label, text)
    }

    /// Sets the `solid` style.
    pub fn solid(&self) -> &Self {
        self.set_attribute(Key::Style, Style::Solid)
    }

    /// Sets the `bold` style.
    pub fn bold(&self) -> &Self {
        self.set_attribute(Key::Style, Style::Bold)
    }

    /// Sets the `dashed` style.
    pub fn dashed(&self) -> &Self {
        self.set_attribute(Key::Style, Style::Dashed)
    }

    /// Sets the `dotted` style.
    pub fn dotted(&self) -> &Self {
        self.set_attribute(Key::Style, Style::Dotted)
    }

    /// Writes the edge statement (`"from"->"to"[attributes];`) to `sink`.
    ///
    /// The glyph follows the kind of the root graph: `--` below an undirected root, `->`
    /// otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Write`] if the sink fails.
    pub fn write_to<W: Write + ?Sized>(&self, sink: &mut W) -> Result<u64> {
        let directed = self
            .graph
            .upgrade()
            .map_or(true, |graph| graph.root_kind() != GraphKind::Undirected);
        DotWriter::run(sink, |out| self.write_dot(out, directed))
    }

    pub(crate) fn write_dot<W: Write + ?Sized>(
        &self,
        out: &mut DotWriter<'_, W>,
        directed: bool,
    ) -> io::Result<()> {
        let glyph = if directed { "->" } else { "--" };
        out.write_str(&format!(
            "{}{}{}",
            quote_id(self.from.id()),
            glyph,
            quote_id(self.to.id())
        ))?;
        self.attributes.borrow().write_dot(out, true)?;
        out.write_str(";")
    }
}

impl Styleable for Edge {
    fn attribute_cell(&self) -> &RefCell<Attributes> {
        &self.attributes
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buffer = Vec::new();
        self.write_to(&mut buffer).map_err(|_| fmt::Error)?;
        f.write_str(&String::from_utf8_lossy(&buffer))
    }
}

impl fmt::Debug for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Edge")
            .field("id", &self.id)
            .field("from", &self.from.id())
            .field("to", &self.to.id())
            .field("attributes", &*self.attributes.borrow())
            .finish()
    }
}
