//! Graph nodes.
//!
//! A [`Node`] is an identifier, an attribute store and a weak reference to the graph that
//! created it. Nodes are always handled through [`NodeRc`] handles handed out by
//! [`Graph::node`](crate::Graph::node); requesting an existing id returns the same handle.

use std::{
    cell::RefCell,
    fmt,
    io::{self, Write},
    rc::Rc,
};

use crate::{
    attributes::{Attributes, Key, Shape, Styleable},
    dot::{writer::DotWriter, EdgeRc, GraphRc, GraphRef},
    utils::quote_id,
    Result,
};

/// A reference-counted pointer to a `Node`
pub type NodeRc = Rc<Node>;

/// Callback run once on every node a graph creates, before the node is stored.
pub type NodeInitializer = Rc<dyn Fn(&NodeRc)>;

/// A node of a DOT graph.
pub struct Node {
    id: String,
    attributes: RefCell<Attributes>,
    graph: GraphRef,
}

impl Node {
    pub(crate) fn new(id: String, graph: GraphRef) -> Self {
        Node {
            id,
            attributes: RefCell::new(Attributes::new()),
            graph,
        }
    }

    /// Returns the node id.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the graph that created this node, if it is still alive.
    #[must_use]
    pub fn graph(&self) -> Option<GraphRc> {
        self.graph.upgrade()
    }

    /// Creates an edge from this node to `to` in the graph that created this node.
    ///
    /// Returns `None` if that graph has been dropped.
    pub fn edge(self: &Rc<Self>, to: &NodeRc) -> Option<EdgeRc> {
        self.edge_with_attributes(to, &Attributes::new())
    }

    /// Creates an edge from this node to `to` carrying a copy of `attributes`.
    ///
    /// Returns `None` if the graph that created this node has been dropped.
    pub fn edge_with_attributes(
        self: &Rc<Self>,
        to: &NodeRc,
        attributes: &Attributes,
    ) -> Option<EdgeRc> {
        let graph = self.graph.upgrade()?;
        Some(graph.edge_with_attributes(self, to, attributes))
    }

    /// Returns the edges from this node to `to` owned by the graph that created this node.
    #[must_use]
    pub fn edges_to(self: &Rc<Self>, to: &NodeRc) -> Vec<EdgeRc> {
        self.graph
            .upgrade()
            .map(|graph| graph.find_edges(self, to))
            .unwrap_or_default()
    }

    /// Sets the `label` attribute.
    pub fn label(&self, text: impl Into<String>) -> &Self {
        self.set_attribute_string(Key::Label, text)
    }

    /// Sets the `shape` attribute.
    pub fn shape(&self, shape: Shape) -> &Self {
        self.set_attribute(Key::Shape, shape)
    }

    /// Sets the `box` shape.
    pub fn box_shape(&self) -> &Self {
        self.shape(Shape::Box)
    }

    /// Writes the node statement (`"id"[attributes];`) to `sink`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Write`] if the sink fails.
    pub fn write_to<W: Write + ?Sized>(&self, sink: &mut W) -> Result<u64> {
        DotWriter::run(sink, |out| self.write_dot(out))
    }

    pub(crate) fn write_dot<W: Write + ?Sized>(&self, out: &mut DotWriter<'_, W>) -> io::Result<()> {
        out.write_str(&quote_id(&self.id))?;
        self.attributes.borrow().write_dot(out, true)?;
        out.write_str(";")
    }
}

impl Styleable for Node {
    fn attribute_cell(&self) -> &RefCell<Attributes> {
        &self.attributes
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buffer = Vec::new();
        self.write_to(&mut buffer).map_err(|_| fmt::Error)?;
        f.write_str(&String::from_utf8_lossy(&buffer))
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("id", &self.id)
            .field("attributes", &*self.attributes.borrow())
            .finish()
    }
}
