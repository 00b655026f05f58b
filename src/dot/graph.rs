//! The hierarchical graph container.
//!
//! A [`Graph`] owns four tables: nodes keyed by id, edges grouped by the id of their tail
//! node, child subgraphs keyed by id, and named same-rank groups. Subgraphs keep a weak
//! reference to their parent, so a tree is owned from the root downwards and dropping the
//! root handle releases the whole tree.
//!
//! # Lookup
//!
//! Node and subgraph lookups cascade: a miss in the local table is retried on the parent,
//! up to the root. Edge lookups are local, an edge is only found on the graph it was
//! created on.
//!
//! # Serialization
//!
//! [`Graph::write_to`] walks the tree depth first and emits, in this order: the graph
//! attributes, every subgraph, every node, every same-rank group and finally every edge.
//! Subgraphs and nodes are sorted by id, edges by the id of their tail node and then by
//! creation order, same-rank groups by the first time their label was used. Each DOT
//! fragment is a separate write on the sink, and the returned byte count is exact even when
//! the sink fails part way through.

use std::{
    cell::RefCell,
    collections::BTreeMap,
    fmt,
    io::{self, Write},
    rc::{Rc, Weak},
};

use log::{debug, warn};

use crate::{
    attributes::{Attributes, Key, Styleable},
    dot::{
        options::{CLUSTER_PREFIX, GENERATED_ID},
        writer::DotWriter,
        Edge, EdgeInitializer, EdgeRc, GraphKind, GraphOptions, Node, NodeInitializer, NodeRc,
    },
    generator::{next_shared_id, IdGeneratorRc},
    utils::quote_id,
    Error, Result,
};

/// A reference-counted pointer to a `Graph`
pub type GraphRc = Rc<Graph>;

/// A weak reference to a `Graph`, used for parent and owner back-references so a graph
/// tree never forms a strong reference cycle.
#[derive(Clone, Debug)]
pub struct GraphRef {
    weak_ref: Weak<Graph>,
}

impl GraphRef {
    /// Create a new `GraphRef` from a strong reference
    pub fn new(strong_ref: &GraphRc) -> Self {
        Self {
            weak_ref: Rc::downgrade(strong_ref),
        }
    }

    /// Get a strong reference to the graph, returning None if the graph has been dropped
    #[must_use]
    pub fn upgrade(&self) -> Option<GraphRc> {
        self.weak_ref.upgrade()
    }

    /// Check if the referenced graph is still alive
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.weak_ref.strong_count() > 0
    }
}

impl From<&GraphRc> for GraphRef {
    fn from(strong_ref: &GraphRc) -> Self {
        Self::new(strong_ref)
    }
}

/// A DOT graph, either a root `digraph`/`graph` or a `subgraph`.
///
/// Graphs are created through [`Graph::new`] (roots) and [`Graph::subgraph`] (children)
/// and are always handled through [`GraphRc`]. All mutation goes through `&self`; the
/// tables live behind [`RefCell`]s and no borrow is held while user callbacks run, so
/// initializers and visitors may call back into the graph.
///
/// # Examples
///
/// ```rust
/// use dotscribe::{Graph, GraphOptions};
///
/// let graph = Graph::new(GraphOptions::new())?;
/// let n1 = graph.node("n1");
/// let n2 = graph.node("n2");
/// graph.edge(&n1, &n2);
///
/// assert_eq!(graph.to_string(), r#"digraph {"n1";"n2";"n1"->"n2";}"#);
/// # Ok::<(), dotscribe::Error>(())
/// ```
pub struct Graph {
    id: String,
    kind: GraphKind,
    strict: bool,
    cluster: bool,
    generator: IdGeneratorRc,
    parent: Option<GraphRef>,
    attributes: RefCell<Attributes>,
    node_initializer: RefCell<Option<NodeInitializer>>,
    edge_initializer: RefCell<Option<EdgeInitializer>>,
    nodes: RefCell<BTreeMap<String, NodeRc>>,
    edges_from: RefCell<BTreeMap<String, Vec<EdgeRc>>>,
    subgraphs: RefCell<BTreeMap<String, GraphRc>>,
    same_rank: RefCell<Vec<(String, Vec<NodeRc>)>>,
}

impl Graph {
    /// Creates a graph from `options`.
    ///
    /// A graph created with a parent draws its ids from the parent's generator, whatever
    /// generator `options` carries. It is not registered in the parent's subgraph table; use
    /// [`Graph::subgraph`] to create registered children.
    ///
    /// # Errors
    ///
    /// - [`Error::SubgraphWithoutParent`] if the kind is [`GraphKind::Sub`] and no parent is set
    /// - [`Error::NonSubgraphWithParent`] if a parent is set for a `digraph` or `graph`
    /// - [`Error::RootCluster`] if the cluster flag is set without a parent
    /// - [`Error::GraphWithoutGenerator`] if no identifier generator is configured
    pub fn new(options: GraphOptions) -> Result<GraphRc> {
        let GraphOptions {
            id,
            kind,
            strict,
            cluster,
            generator,
            node_initializer,
            edge_initializer,
            parent,
        } = options;

        let kind = kind.unwrap_or(if parent.is_some() {
            GraphKind::Sub
        } else {
            GraphKind::Directed
        });
        match (kind, parent.is_some()) {
            (GraphKind::Sub, false) => return Err(Error::SubgraphWithoutParent),
            (GraphKind::Directed | GraphKind::Undirected, true) => {
                return Err(Error::NonSubgraphWithParent)
            }
            _ => {}
        }
        if cluster && parent.is_none() {
            return Err(Error::RootCluster);
        }
        let generator = match &parent {
            Some(parent) => Some(parent.generator()),
            None => generator,
        };
        let Some(generator) = generator else {
            return Err(Error::GraphWithoutGenerator);
        };

        let base = id.strip_prefix(CLUSTER_PREFIX).unwrap_or(&id);
        let base = if base == GENERATED_ID {
            next_shared_id(&generator)
        } else {
            base.to_string()
        };
        let id = if cluster {
            format!("{CLUSTER_PREFIX}{base}")
        } else {
            base
        };

        debug!("Created {} \"{}\"", kind, id);

        Ok(Rc::new(Graph {
            id,
            kind,
            strict: strict && kind != GraphKind::Sub,
            cluster,
            generator,
            parent: parent.as_ref().map(GraphRef::new),
            attributes: RefCell::new(Attributes::new()),
            node_initializer: RefCell::new(node_initializer),
            edge_initializer: RefCell::new(edge_initializer),
            nodes: RefCell::new(BTreeMap::new()),
            edges_from: RefCell::new(BTreeMap::new()),
            subgraphs: RefCell::new(BTreeMap::new()),
            same_rank: RefCell::new(Vec::new()),
        }))
    }

    /// Creates a child graph and registers it under its final id.
    ///
    /// The child always uses this graph as parent and shares this graph's generator. If
    /// `options` carries no node or edge initializer, the child inherits this graph's.
    /// Registering an id that is already taken replaces the previous child.
    ///
    /// # Errors
    ///
    /// Fails with the errors of [`Graph::new`], typically [`Error::NonSubgraphWithParent`]
    /// when `options` requests a `digraph` or `graph` kind. A failed call registers nothing.
    pub fn subgraph(self: &Rc<Self>, options: GraphOptions) -> Result<GraphRc> {
        let mut options = options;
        options.parent = Some(Rc::clone(self));
        options.generator = Some(Rc::clone(&self.generator));
        if options.node_initializer.is_none() {
            options.node_initializer = self.node_initializer.borrow().clone();
        }
        if options.edge_initializer.is_none() {
            options.edge_initializer = self.edge_initializer.borrow().clone();
        }

        let child = Graph::new(options)?;
        debug!("Registered subgraph \"{}\" in \"{}\"", child.id, self.id);
        if let Some(previous) = self
            .subgraphs
            .borrow_mut()
            .insert(child.id.clone(), Rc::clone(&child))
        {
            warn!(
                "Subgraph \"{}\" in \"{}\" replaced an existing subgraph",
                previous.id, self.id
            );
        }
        Ok(child)
    }

    /// Returns the graph id, including the `cluster_` prefix for clusters.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the graph kind.
    #[must_use]
    pub fn kind(&self) -> GraphKind {
        self.kind
    }

    /// Returns `true` if the `strict` keyword is emitted. Always `false` for subgraphs.
    #[must_use]
    pub fn is_strict(&self) -> bool {
        self.strict
    }

    /// Returns `true` for cluster subgraphs.
    #[must_use]
    pub fn is_cluster(&self) -> bool {
        self.cluster
    }

    /// Returns the parent graph, if any and still alive.
    #[must_use]
    pub fn parent(&self) -> Option<GraphRc> {
        self.parent.as_ref().and_then(GraphRef::upgrade)
    }

    /// Returns the topmost ancestor of this graph, or the graph itself for a root.
    #[must_use]
    pub fn root(self: &Rc<Self>) -> GraphRc {
        let mut current = Rc::clone(self);
        while let Some(parent) = current.parent() {
            current = parent;
        }
        current
    }

    /// Returns the identifier generator shared by this graph tree.
    #[must_use]
    pub fn generator(&self) -> IdGeneratorRc {
        Rc::clone(&self.generator)
    }

    /// Sets the `label` attribute of the graph.
    pub fn label(&self, text: impl Into<String>) -> &Self {
        self.set_attribute_string(Key::Label, text)
    }

    /// Replaces the node initializer for nodes created from now on.
    pub fn set_node_initializer(&self, initializer: Option<NodeInitializer>) {
        *self.node_initializer.borrow_mut() = initializer;
    }

    /// Replaces the edge initializer for edges created from now on.
    pub fn set_edge_initializer(&self, initializer: Option<EdgeInitializer>) {
        *self.edge_initializer.borrow_mut() = initializer;
    }

    /// Looks up a node by id in this graph, then in its ancestors.
    #[must_use]
    pub fn find_node(&self, id: &str) -> Option<NodeRc> {
        if let Some(node) = self.nodes.borrow().get(id) {
            return Some(Rc::clone(node));
        }
        self.parent()?.find_node(id)
    }

    /// Returns the node `id`, creating it in this graph if no node with that id is visible.
    ///
    /// An existing node in this graph or any ancestor is returned as is. Otherwise a new
    /// node is created, passed to the node initializer and stored in this graph's local
    /// table. An empty `id` always creates a node with a generated id.
    pub fn node(self: &Rc<Self>, id: &str) -> NodeRc {
        if !id.is_empty() {
            if let Some(node) = self.find_node(id) {
                return node;
            }
        }

        let id = if id.is_empty() {
            next_shared_id(&self.generator)
        } else {
            id.to_string()
        };
        let node = Rc::new(Node::new(id, GraphRef::new(self)));

        let initializer = self.node_initializer.borrow().clone();
        if let Some(initializer) = initializer {
            initializer(&node);
        }

        self.nodes
            .borrow_mut()
            .insert(node.id().to_string(), Rc::clone(&node));
        node
    }

    /// Looks up a subgraph by id among this graph's children, then among the children of
    /// its ancestors.
    #[must_use]
    pub fn find_subgraph(&self, id: &str) -> Option<GraphRc> {
        if let Some(subgraph) = self.subgraphs.borrow().get(id) {
            return Some(Rc::clone(subgraph));
        }
        self.parent()?.find_subgraph(id)
    }

    /// Creates an edge from `from` to `to` owned by this graph.
    pub fn edge(self: &Rc<Self>, from: &NodeRc, to: &NodeRc) -> EdgeRc {
        self.edge_with_attributes(from, to, &Attributes::new())
    }

    /// Creates an edge from `from` to `to` owned by this graph, carrying a copy of
    /// `attributes`.
    ///
    /// The edge initializer runs after the attributes are applied. Edges are appended
    /// without deduplication.
    pub fn edge_with_attributes(
        self: &Rc<Self>,
        from: &NodeRc,
        to: &NodeRc,
        attributes: &Attributes,
    ) -> EdgeRc {
        let edge = Rc::new(Edge::new(
            next_shared_id(&self.generator),
            Rc::clone(from),
            Rc::clone(to),
            attributes.clone(),
            GraphRef::new(self),
        ));

        let initializer = self.edge_initializer.borrow().clone();
        if let Some(initializer) = initializer {
            initializer(&edge);
        }

        self.edges_from
            .borrow_mut()
            .entry(from.id().to_string())
            .or_default()
            .push(Rc::clone(&edge));
        edge
    }

    /// Returns the edges from `from` to `to` created on this graph, in creation order.
    ///
    /// Both ends are matched by node id. Edges created on other graphs of the tree are not
    /// considered.
    #[must_use]
    pub fn find_edges(&self, from: &NodeRc, to: &NodeRc) -> Vec<EdgeRc> {
        self.edges_from
            .borrow()
            .get(from.id())
            .map(|edges| {
                edges
                    .iter()
                    .filter(|edge| edge.to().id() == to.id())
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Appends `nodes` to the same-rank group `group`.
    ///
    /// Nodes are not checked for membership in this graph. Each member is written again
    /// inside the group block, in insertion order.
    pub fn add_to_same_rank(&self, group: &str, nodes: &[NodeRc]) {
        let mut same_rank = self.same_rank.borrow_mut();
        match same_rank.iter_mut().find(|(label, _)| label == group) {
            Some((_, members)) => members.extend(nodes.iter().cloned()),
            None => same_rank.push((group.to_string(), nodes.to_vec())),
        }
    }

    /// Visits the nodes of this graph, then of each subgraph recursively.
    ///
    /// The callback returns `true` to stop the traversal. Returns `true` if the traversal
    /// was stopped.
    pub fn visit_nodes<F>(&self, mut callback: F) -> bool
    where
        F: FnMut(&NodeRc) -> bool,
    {
        self.visit_nodes_with(&mut callback)
    }

    fn visit_nodes_with(&self, callback: &mut dyn FnMut(&NodeRc) -> bool) -> bool {
        let nodes: Vec<NodeRc> = self.nodes.borrow().values().cloned().collect();
        if nodes.iter().any(|node| callback(node)) {
            return true;
        }

        let subgraphs: Vec<GraphRc> = self.subgraphs.borrow().values().cloned().collect();
        subgraphs
            .iter()
            .any(|subgraph| subgraph.visit_nodes_with(&mut *callback))
    }

    /// Looks up a node by id in this graph and all of its descendants.
    #[must_use]
    pub fn find_node_by_id(&self, id: &str) -> Option<NodeRc> {
        let mut found = None;
        self.visit_nodes(|node| {
            if node.id() == id {
                found = Some(Rc::clone(node));
                return true;
            }
            false
        });
        found
    }

    /// Returns all nodes of this graph and its descendants in visiting order.
    #[must_use]
    pub fn find_nodes(&self) -> Vec<NodeRc> {
        let mut nodes = Vec::new();
        self.visit_nodes(|node| {
            nodes.push(Rc::clone(node));
            false
        });
        nodes
    }

    /// Returns `true` if this graph has child subgraphs.
    #[must_use]
    pub fn has_subgraphs(&self) -> bool {
        !self.subgraphs.borrow().is_empty()
    }

    /// Returns `true` if this graph has local nodes.
    #[must_use]
    pub fn has_nodes(&self) -> bool {
        !self.nodes.borrow().is_empty()
    }

    /// Returns `true` if edges were created on this graph.
    #[must_use]
    pub fn has_edges(&self) -> bool {
        !self.edges_from.borrow().is_empty()
    }

    /// Returns `true` if this graph has same-rank groups.
    #[must_use]
    pub fn has_same_rank_nodes(&self) -> bool {
        !self.same_rank.borrow().is_empty()
    }

    /// Serializes the graph to `sink` and returns the number of bytes written.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Write`] on the first failing write. Its `written` field is the exact
    /// number of bytes the sink accepted, i.e. the length of the output prefix transmitted.
    pub fn write_to<W: Write + ?Sized>(&self, sink: &mut W) -> Result<u64> {
        let directed = self.root_kind() != GraphKind::Undirected;
        DotWriter::run(sink, |out| self.write_dot(out, directed))
    }

    /// Kind of the topmost reachable ancestor.
    pub(crate) fn root_kind(&self) -> GraphKind {
        match self.parent() {
            Some(parent) => parent.root_kind(),
            None => self.kind,
        }
    }

    fn write_dot<W: Write + ?Sized>(
        &self,
        out: &mut DotWriter<'_, W>,
        directed: bool,
    ) -> io::Result<()> {
        if self.strict {
            out.write_str("strict ")?;
        }
        out.write_str(self.kind.as_ref())?;
        if !self.id.is_empty() {
            out.write_str(&format!(" {}", quote_id(&self.id)))?;
        }
        out.write_str(" {")?;

        let attributes = self.attributes.borrow();
        if !attributes.is_empty() {
            out.write_str("graph ")?;
            attributes.write_dot(out, true)?;
            out.write_str(";")?;
        }

        for subgraph in self.subgraphs.borrow().values() {
            subgraph.write_dot(out, directed)?;
        }

        for node in self.nodes.borrow().values() {
            node.write_dot(out)?;
        }

        for (_, members) in self.same_rank.borrow().iter() {
            out.write_str("{")?;
            out.write_str("rank=same;")?;
            for node in members {
                node.write_dot(out)?;
            }
            out.write_str("}")?;
        }

        for edges in self.edges_from.borrow().values() {
            for edge in edges {
                edge.write_dot(out, directed)?;
            }
        }

        out.write_str("}")
    }
}

impl Styleable for Graph {
    fn attribute_cell(&self) -> &RefCell<Attributes> {
        &self.attributes
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buffer = Vec::new();
        self.write_to(&mut buffer).map_err(|_| fmt::Error)?;
        f.write_str(&String::from_utf8_lossy(&buffer))
    }
}

impl fmt::Debug for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Graph")
            .field("id", &self.id)
            .field("kind", &self.kind)
            .field("strict", &self.strict)
            .field("cluster", &self.cluster)
            .field("nodes", &self.nodes.borrow().len())
            .field("subgraphs", &self.subgraphs.borrow().len())
            .field("edge_groups", &self.edges_from.borrow().len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        generator::{IdGenerator, RandomIdGenerator},
        test::LimitedWriter,
    };

    fn new_graph() -> GraphRc {
        Graph::new(GraphOptions::new()).unwrap()
    }

    #[test]
    fn test_new_defaults() {
        let graph = new_graph();

        assert_eq!(graph.id(), "");
        assert_eq!(graph.kind(), GraphKind::Directed);
        assert!(!graph.is_strict());
        assert!(!graph.is_cluster());
        assert!(graph.parent().is_none());
        assert!(Rc::ptr_eq(&graph.root(), &graph));
        assert_eq!(graph.to_string(), "digraph {}");
    }

    #[test]
    fn test_new_validation() {
        let root = new_graph();

        assert!(matches!(
            Graph::new(GraphOptions::new().with_kind(GraphKind::Sub)),
            Err(Error::SubgraphWithoutParent)
        ));
        assert!(matches!(
            Graph::new(
                GraphOptions::new()
                    .with_kind(GraphKind::Directed)
                    .with_parent(Rc::clone(&root))
            ),
            Err(Error::NonSubgraphWithParent)
        ));
        assert!(matches!(
            Graph::new(GraphOptions::new().with_cluster(true)),
            Err(Error::RootCluster)
        ));
        assert!(matches!(
            Graph::new(GraphOptions::default()),
            Err(Error::GraphWithoutGenerator)
        ));
    }

    #[test]
    fn test_new_with_parent_defaults_to_sub() {
        let root = new_graph();
        let child = Graph::new(GraphOptions::new().with_parent(Rc::clone(&root))).unwrap();

        assert_eq!(child.kind(), GraphKind::Sub);
        assert!(Rc::ptr_eq(&child.parent().unwrap(), &root));
        assert!(!root.has_subgraphs());
    }

    #[test]
    fn test_new_with_parent_uses_parent_generator() {
        let root = new_graph();
        let child = Graph::new(GraphOptions::new().with_parent(Rc::clone(&root))).unwrap();
        assert!(Rc::ptr_eq(&child.generator(), &root.generator()));

        let bare = Graph::new(GraphOptions::default().with_parent(Rc::clone(&root))).unwrap();
        assert!(Rc::ptr_eq(&bare.generator(), &root.generator()));
    }

    #[test]
    fn test_find_edges_matches_head_by_id() {
        let root = new_graph();
        let sub = root.subgraph(GraphOptions::default()).unwrap();
        let a = root.node("a");
        let sub_b = sub.node("b");
        let root_b = root.node("b");
        assert!(!Rc::ptr_eq(&sub_b, &root_b));

        root.edge(&a, &sub_b);
        assert_eq!(root.find_edges(&a, &root_b).len(), 1);
        assert_eq!(root.find_edges(&a, &sub_b).len(), 1);
        assert_eq!(a.edges_to(&root_b).len(), 1);
    }

    #[test]
    fn test_generated_graph_id() {
        let graph = Graph::new(GraphOptions::new().with_id(GENERATED_ID)).unwrap();
        assert_eq!(graph.id().len(), 24);

        let cluster = graph
            .subgraph(GraphOptions::default().with_id(GENERATED_ID).with_cluster(true))
            .unwrap();
        assert!(cluster.id().starts_with(CLUSTER_PREFIX));
        assert_eq!(cluster.id().len(), CLUSTER_PREFIX.len() + 24);
    }

    #[test]
    fn test_cluster_prefix_normalization() {
        let root = new_graph();

        let added = root
            .subgraph(GraphOptions::default().with_id("A").with_cluster(true))
            .unwrap();
        let kept = root
            .subgraph(GraphOptions::default().with_id("cluster_B").with_cluster(true))
            .unwrap();
        let stripped = root
            .subgraph(GraphOptions::default().with_id("cluster_C"))
            .unwrap();

        assert_eq!(added.id(), "cluster_A");
        assert_eq!(kept.id(), "cluster_B");
        assert_eq!(stripped.id(), "C");
        assert!(root.find_subgraph("cluster_A").is_some());
        assert!(root.find_subgraph("A").is_none());
        assert!(root.find_subgraph("C").is_some());
    }

    #[test]
    fn test_strict_ignored_on_subgraphs() {
        let root = Graph::new(GraphOptions::new().with_strict(true)).unwrap();
        let sub = root
            .subgraph(GraphOptions::default().with_strict(true))
            .unwrap();

        assert!(root.is_strict());
        assert!(!sub.is_strict());
        assert_eq!(root.to_string(), "strict digraph {subgraph {}}");
    }

    #[test]
    fn test_subgraph_failure_registers_nothing() {
        let root = new_graph();
        let result = root.subgraph(
            GraphOptions::default()
                .with_id("s")
                .with_kind(GraphKind::Directed),
        );

        assert!(matches!(result, Err(Error::NonSubgraphWithParent)));
        assert!(!root.has_subgraphs());
        assert!(root.find_subgraph("s").is_none());
    }

    #[test]
    fn test_subgraph_replaces_same_id() {
        let root = new_graph();
        let first = root.subgraph(GraphOptions::default().with_id("s")).unwrap();
        let second = root.subgraph(GraphOptions::default().with_id("s")).unwrap();

        let found = root.find_subgraph("s").unwrap();
        assert!(Rc::ptr_eq(&found, &second));
        assert!(!Rc::ptr_eq(&found, &first));
    }

    #[test]
    fn test_subgraph_shares_generator() {
        let root = new_graph();
        let sub = root.subgraph(GraphOptions::new()).unwrap();

        assert!(Rc::ptr_eq(&root.generator(), &sub.generator()));
    }

    #[test]
    fn test_node_is_idempotent() {
        let graph = new_graph();
        let first = graph.node("n1");
        let second = graph.node("n1");

        assert!(Rc::ptr_eq(&first, &second));
        assert_eq!(graph.find_nodes().len(), 1);
    }

    #[test]
    fn test_node_empty_id_is_generated() {
        let graph = new_graph();
        let first = graph.node("");
        let second = graph.node("");

        assert_eq!(first.id().len(), 24);
        assert_ne!(first.id(), second.id());
        assert!(graph.find_node(first.id()).is_some());
    }

    #[test]
    fn test_generated_ids_follow_shared_generator() {
        let generator = RandomIdGenerator::with_seed(11).into_shared();
        let root = Graph::new(GraphOptions::default().with_generator(generator)).unwrap();
        let sub = root.subgraph(GraphOptions::default()).unwrap();

        let mut reference = RandomIdGenerator::with_seed(11);
        assert_eq!(root.node("").id(), reference.generate());
        assert_eq!(sub.node("").id(), reference.generate());
    }

    #[test]
    fn test_node_cascades_to_ancestors() {
        let root = new_graph();
        let n1 = root.node("n1");
        let sub = root.subgraph(GraphOptions::default()).unwrap();
        let nested = sub.subgraph(GraphOptions::default()).unwrap();

        assert!(Rc::ptr_eq(&nested.node("n1"), &n1));
        assert!(!nested.has_nodes());

        let local = nested.node("n2");
        assert!(nested.has_nodes());
        assert!(root.find_node("n2").is_none());
        assert!(Rc::ptr_eq(&root.find_node_by_id("n2").unwrap(), &local));
    }

    #[test]
    fn test_find_subgraph_cascades() {
        let root = new_graph();
        let a = root.subgraph(GraphOptions::default().with_id("a")).unwrap();
        let b = a.subgraph(GraphOptions::default().with_id("b")).unwrap();

        assert!(Rc::ptr_eq(&b.find_subgraph("a").unwrap(), &a));
        assert!(Rc::ptr_eq(&a.find_subgraph("b").unwrap(), &b));
        assert!(root.find_subgraph("b").is_none());
        assert!(Rc::ptr_eq(&b.root(), &root));
    }

    #[test]
    fn test_node_initializer() {
        let graph = Graph::new(GraphOptions::new().with_node_initializer(Rc::new(
            |node: &NodeRc| {
                node.set_attribute_string(Key::Label, node.id().to_string());
            },
        )))
        .unwrap();

        let node = graph.node("n1");
        assert_eq!(node.attribute_string(Key::Label), "n1");

        graph.set_node_initializer(None);
        assert!(!graph.node("n2").has_attributes());
    }

    #[test]
    fn test_initializers_are_inherited() {
        let root = Graph::new(
            GraphOptions::new()
                .with_node_initializer(Rc::new(|node: &NodeRc| {
                    node.set_attribute_string(Key::Shape, "box");
                }))
                .with_edge_initializer(Rc::new(|edge: &EdgeRc| {
                    edge.set_attribute_string(Key::Color, "red");
                })),
        )
        .unwrap();
        let sub = root.subgraph(GraphOptions::default()).unwrap();
        let own = root
            .subgraph(GraphOptions::default().with_node_initializer(Rc::new(|node: &NodeRc| {
                node.set_attribute_string(Key::Shape, "circle");
            })))
            .unwrap();

        let a = sub.node("a");
        let b = own.node("b");
        let edge = sub.edge(&a, &b);

        assert_eq!(a.attribute_string(Key::Shape), "box");
        assert_eq!(b.attribute_string(Key::Shape), "circle");
        assert_eq!(edge.attribute_string(Key::Color), "red");
    }

    #[test]
    fn test_initializer_may_reenter_graph() {
        let root = new_graph();
        let weak = GraphRef::new(&root);
        root.set_node_initializer(Some(Rc::new(move |node: &NodeRc| {
            if let Some(graph) = weak.upgrade() {
                node.set_attribute_string(Key::Comment, graph.find_nodes().len().to_string());
            }
        })));

        let a = root.node("a");
        let b = root.node("b");
        assert_eq!(a.attribute_string(Key::Comment), "0");
        assert_eq!(b.attribute_string(Key::Comment), "1");
    }

    #[test]
    fn test_edge_initializer_runs_after_attributes() {
        let graph = Graph::new(GraphOptions::new().with_edge_initializer(Rc::new(
            |edge: &EdgeRc| {
                edge.set_attribute_string(Key::Color, "green");
            },
        )))
        .unwrap();

        let mut attributes = Attributes::new();
        attributes.set_string(Key::Color, "red");
        let edge = graph.edge_with_attributes(&graph.node("a"), &graph.node("b"), &attributes);

        assert_eq!(edge.attribute_string(Key::Color), "green");
    }

    #[test]
    fn test_find_edges_is_local() {
        let root = new_graph();
        let sub = root.subgraph(GraphOptions::default()).unwrap();
        let a = root.node("a");
        let b = sub.node("b");

        let edge = sub.edge(&a, &b);

        assert!(root.find_edges(&a, &b).is_empty());
        assert_eq!(sub.find_edges(&a, &b).len(), 1);
        assert!(Rc::ptr_eq(&edge.graph().unwrap(), &sub));
        assert!(root.to_string().contains(r#"subgraph {"b";"a"->"b";}"#));
    }

    #[test]
    fn test_edges_are_not_deduplicated() {
        let graph = Graph::new(GraphOptions::new().with_strict(true)).unwrap();
        let a = graph.node("a");
        let b = graph.node("b");
        graph.edge(&a, &b);
        graph.edge(&a, &b);

        assert_eq!(graph.find_edges(&a, &b).len(), 2);
        assert!(graph.find_edges(&b, &a).is_empty());
    }

    #[test]
    fn test_visit_nodes_order_and_early_stop() {
        let root = new_graph();
        root.node("r2");
        root.node("r1");
        let sub = root.subgraph(GraphOptions::default().with_id("s")).unwrap();
        sub.node("s1");

        let mut seen = Vec::new();
        let stopped = root.visit_nodes(|node| {
            seen.push(node.id().to_string());
            false
        });
        assert!(!stopped);
        assert_eq!(seen, ["r1", "r2", "s1"]);

        let mut count = 0;
        let stopped = root.visit_nodes(|_| {
            count += 1;
            count == 2
        });
        assert!(stopped);
        assert_eq!(count, 2);
    }

    #[test]
    fn test_visit_nodes_stop_in_subgraph() {
        let root = new_graph();
        let first = root.subgraph(GraphOptions::default().with_id("a")).unwrap();
        let second = root.subgraph(GraphOptions::default().with_id("b")).unwrap();
        first.node("x");
        second.node("y");

        let mut seen = Vec::new();
        assert!(root.visit_nodes(|node| {
            seen.push(node.id().to_string());
            true
        }));
        assert_eq!(seen, ["x"]);
    }

    #[test]
    fn test_has_predicates() {
        let graph = new_graph();
        assert!(!graph.has_nodes());
        assert!(!graph.has_edges());
        assert!(!graph.has_subgraphs());
        assert!(!graph.has_same_rank_nodes());

        let a = graph.node("a");
        graph.edge(&a, &a);
        graph.add_to_same_rank("g", &[Rc::clone(&a)]);
        graph.subgraph(GraphOptions::default()).unwrap();

        assert!(graph.has_nodes());
        assert!(graph.has_edges());
        assert!(graph.has_subgraphs());
        assert!(graph.has_same_rank_nodes());
    }

    #[test]
    fn test_write_same_rank() {
        let graph = new_graph();
        let foo1 = graph.node("foo1");
        let foo2 = graph.node("foo2");
        let bar = graph.node("bar");
        graph.add_to_same_rank("x", &[Rc::clone(&foo1)]);
        graph.add_to_same_rank("x", &[Rc::clone(&foo2)]);
        graph.edge(&foo1, &foo2);
        graph.edge(&foo1, &bar);

        assert_eq!(
            graph.to_string(),
            r#"digraph {"bar";"foo1";"foo2";{rank=same;"foo1";"foo2";}"foo1"->"foo2";"foo1"->"bar";}"#
        );
    }

    #[test]
    fn test_rank_groups_keep_first_insertion_order() {
        let graph = new_graph();
        let a = graph.node("a");
        let b = graph.node("b");
        graph.add_to_same_rank("z", &[Rc::clone(&a)]);
        graph.add_to_same_rank("y", &[Rc::clone(&b)]);
        graph.add_to_same_rank("z", &[Rc::clone(&b)]);

        assert_eq!(
            graph.to_string(),
            r#"digraph {"a";"b";{rank=same;"a";"b";}{rank=same;"b";}}"#
        );
    }

    #[test]
    fn test_write_graph_attributes() {
        let graph = new_graph();
        graph
            .set_attribute_string(Key::Style, "filled")
            .set_attribute_string(Key::Color, "lightgrey");

        assert_eq!(
            graph.to_string(),
            r#"digraph {graph [color="lightgrey",style="filled"];}"#
        );
    }

    #[test]
    fn test_write_html_label() {
        let graph = new_graph();
        graph.set_attribute_html(Key::Label, "<B>Hi</B>");

        assert_eq!(graph.to_string(), "digraph {graph [label=<<B>Hi</B>>];}");
    }

    #[test]
    fn test_write_undirected() {
        let graph = Graph::new(GraphOptions::new().with_kind(GraphKind::Undirected)).unwrap();
        let a = graph.node("a");
        let b = graph.node("b");
        graph.edge(&a, &b);

        assert_eq!(graph.to_string(), r#"graph {"a";"b";"a"--"b";}"#);
    }

    #[test]
    fn test_write_edges_sorted_by_tail() {
        let graph = new_graph();
        let a = graph.node("a");
        let b = graph.node("b");
        let c = graph.node("c");
        graph.edge(&c, &a);
        graph.edge(&a, &c);
        graph.edge(&a, &b);

        assert_eq!(
            graph.to_string(),
            r#"digraph {"a";"b";"c";"a"->"c";"a"->"b";"c"->"a";}"#
        );
    }

    #[test]
    fn test_write_to_counts_bytes() {
        let graph = new_graph();
        let a = graph.node("a");
        graph.edge(&a, &a).label("self");

        let mut sink = Vec::new();
        let written = graph.write_to(&mut sink).unwrap();
        assert_eq!(written, sink.len() as u64);
    }

    #[test]
    fn test_write_to_halts_on_failure() {
        let graph = Graph::new(GraphOptions::new().with_id("g")).unwrap();
        graph.node("n1");

        let mut sink = LimitedWriter::new(4);
        let err = graph.write_to(&mut sink).unwrap_err();

        assert_eq!(sink.as_str(), r#"digraph "g" {"n1""#);
        assert_eq!(err.bytes_written(), Some(sink.as_str().len() as u64));
        assert_eq!(sink.writes(), 4);
    }

    #[test]
    fn test_label_helper() {
        let graph = new_graph();
        graph.label("title");
        assert_eq!(graph.attribute_string(Key::Label), "title");
    }

    #[test]
    fn test_dropping_root_releases_tree() {
        let root = new_graph();
        let sub = root.subgraph(GraphOptions::default()).unwrap();
        let node = sub.node("n");
        let weak = Rc::downgrade(&sub);
        drop(sub);

        assert!(weak.upgrade().is_some());
        drop(root);
        assert!(weak.upgrade().is_none());
        assert!(node.graph().is_none());
    }
}
