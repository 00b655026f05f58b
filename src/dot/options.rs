use std::fmt;

use strum::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};

use crate::{
    dot::{EdgeInitializer, GraphRc, NodeInitializer},
    generator::{IdGeneratorRc, RandomIdGenerator},
};

/// Prefix carried by the id of every cluster subgraph.
pub const CLUSTER_PREFIX: &str = "cluster_";

/// Id that requests a generated identifier for a graph.
pub const GENERATED_ID: &str = "-";

/// The kind of a graph, rendered as the leading keyword of its DOT statement.
#[derive(
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Debug,
    Default,
    AsRefStr,
    Display,
    EnumString,
    IntoStaticStr,
    EnumIter,
)]
pub enum GraphKind {
    /// A root graph whose edges are drawn as arrows (`digraph`, edge glyph `->`)
    #[default]
    #[strum(serialize = "digraph")]
    Directed,
    /// A root graph whose edges are drawn as lines (`graph`, edge glyph `--`)
    #[strum(serialize = "graph")]
    Undirected,
    /// A graph nested inside another graph (`subgraph`)
    #[strum(serialize = "subgraph")]
    Sub,
}

/// Configuration for [`crate::Graph::new`] and [`crate::Graph::subgraph`].
///
/// `GraphOptions::new()` is the usual starting point; it installs a fresh
/// [`RandomIdGenerator`]. `GraphOptions::default()` carries no generator at all and is only
/// useful when a generator is supplied explicitly, or for subgraphs, which always use the
/// generator of their parent.
///
/// # Identifier Handling
///
/// The id passed to [`GraphOptions::with_id`] is normalized at construction time. A
/// leading [`CLUSTER_PREFIX`] is stripped, the special id [`GENERATED_ID`] is replaced
/// with a generated identifier, and the prefix is added back if the cluster flag is set.
/// Setting the flag on `"A"` or on `"cluster_A"` therefore yields `cluster_A`, and
/// `"cluster_A"` without the flag yields `A`.
///
/// # Examples
///
/// ```rust
/// use dotscribe::{Graph, GraphKind, GraphOptions};
///
/// let root = Graph::new(
///     GraphOptions::new()
///         .with_id("deps")
///         .with_kind(GraphKind::Undirected)
///         .with_strict(true),
/// )?;
/// let cluster = root.subgraph(GraphOptions::default().with_id("A").with_cluster(true))?;
///
/// assert_eq!(cluster.id(), "cluster_A");
/// assert_eq!(root.to_string(), r#"strict graph "deps" {subgraph "cluster_A" {}}"#);
/// # Ok::<(), dotscribe::Error>(())
/// ```
#[derive(Clone, Default)]
pub struct GraphOptions {
    /// Requested id, empty for an anonymous graph
    pub id: String,
    /// Graph kind; `None` selects [`GraphKind::Sub`] when a parent is set and
    /// [`GraphKind::Directed`] otherwise
    pub kind: Option<GraphKind>,
    /// Emit the `strict` keyword (root graphs only)
    pub strict: bool,
    /// Make the graph a cluster subgraph
    pub cluster: bool,
    /// Identifier source shared by the graph tree
    pub generator: Option<IdGeneratorRc>,
    /// Callback invoked on every node created by the graph
    pub node_initializer: Option<NodeInitializer>,
    /// Callback invoked on every edge created by the graph
    pub edge_initializer: Option<EdgeInitializer>,
    /// Owning graph of a subgraph
    pub parent: Option<GraphRc>,
}

impl GraphOptions {
    /// Creates options for a directed root graph with a fresh [`RandomIdGenerator`].
    #[must_use]
    pub fn new() -> Self {
        GraphOptions {
            generator: Some(RandomIdGenerator::new().into_shared()),
            ..Default::default()
        }
    }

    /// Sets the graph id.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Sets the graph kind.
    #[must_use]
    pub fn with_kind(mut self, kind: GraphKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Sets the strict flag.
    #[must_use]
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Sets the cluster flag.
    #[must_use]
    pub fn with_cluster(mut self, cluster: bool) -> Self {
        self.cluster = cluster;
        self
    }

    /// Sets the identifier generator.
    #[must_use]
    pub fn with_generator(mut self, generator: IdGeneratorRc) -> Self {
        self.generator = Some(generator);
        self
    }

    /// Sets the node initializer.
    #[must_use]
    pub fn with_node_initializer(mut self, initializer: NodeInitializer) -> Self {
        self.node_initializer = Some(initializer);
        self
    }

    /// Sets the edge initializer.
    #[must_use]
    pub fn with_edge_initializer(mut self, initializer: EdgeInitializer) -> Self {
        self.edge_initializer = Some(initializer);
        self
    }

    /// Sets the parent graph.
    #[must_use]
    pub fn with_parent(mut self, parent: GraphRc) -> Self {
        self.parent = Some(parent);
        self
    }
}

impl fmt::Debug for GraphOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GraphOptions")
            .field("id", &self.id)
            .field("kind", &self.kind)
            .field("strict", &self.strict)
            .field("cluster", &self.cluster)
            .field("generator", &self.generator.is_some())
            .field("node_initializer", &self.node_initializer.is_some())
            .field("edge_initializer", &self.edge_initializer.is_some())
            .field("parent", &self.parent.as_ref().map(|parent| parent.id()))
            .finish()
    }
}
