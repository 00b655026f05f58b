use thiserror::Error;

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// Errors fall into two groups. Configuration errors are reported by [`crate::Graph::new`] and
/// [`crate::Graph::subgraph`] when the supplied [`crate::GraphOptions`] describe a graph that
/// cannot exist. Write errors are reported by the `write_to` family of methods when the
/// underlying sink fails part way through serialization.
///
/// Lookups never produce errors: a missing node, subgraph or edge is reported through
/// [`Option`] or an empty collection.
///
/// # Error Categories
///
/// ## Configuration Errors
/// - [`Error::SubgraphWithoutParent`] - A subgraph was requested without a parent graph
/// - [`Error::NonSubgraphWithParent`] - A `digraph`/`graph` was requested with a parent graph
/// - [`Error::RootCluster`] - The cluster flag was set on a root graph
/// - [`Error::GraphWithoutGenerator`] - No identifier generator was configured
///
/// ## Output Errors
/// - [`Error::Write`] - The byte sink failed, carrying the exact number of bytes it accepted
///
/// # Examples
///
/// ```rust
/// use dotscribe::{Error, Graph, GraphKind, GraphOptions};
///
/// match Graph::new(GraphOptions::new().with_kind(GraphKind::Sub)) {
///     Ok(_) => unreachable!(),
///     Err(Error::SubgraphWithoutParent) => println!("subgraphs need a parent"),
///     Err(e) => eprintln!("Other error: {}", e),
/// }
/// ```
#[derive(Error, Debug)]
pub enum Error {
    // Configuration errors
    /// A graph of kind [`crate::GraphKind::Sub`] was requested without a parent.
    ///
    /// Subgraphs only exist as children of another graph. Use [`crate::Graph::subgraph`]
    /// on the intended parent instead of constructing them directly.
    #[error("cannot create subgraph without parent")]
    SubgraphWithoutParent,

    /// A `digraph` or `graph` was requested with a parent.
    ///
    /// Only subgraphs may be nested. This typically happens when
    /// [`crate::GraphOptions::with_kind`] overrides the kind of a subgraph.
    #[error("cannot create [di]graph with parent")]
    NonSubgraphWithParent,

    /// The cluster flag was set on a root graph.
    ///
    /// Clusters are a subgraph feature; the renderer draws a bounding box around
    /// the subgraph inside its parent, which a root graph does not have.
    #[error("cannot create a root cluster graph")]
    RootCluster,

    /// No identifier generator was configured.
    ///
    /// Every graph tree needs one generator to assign ids to anonymous
    /// nodes, edges and graphs. [`crate::GraphOptions::new`] installs one by default.
    #[error("cannot create a graph without an ID generator")]
    GraphWithoutGenerator,

    // Output errors
    /// The output sink failed during serialization.
    ///
    /// Serialization halts at the first failing write. `written` is the exact number of
    /// bytes the sink accepted before the failure, i.e. the length of the canonical
    /// output prefix that was transmitted.
    ///
    /// # Fields
    ///
    /// * `written` - Bytes successfully accepted by the sink
    /// * `source` - The error reported by the sink
    #[error("write failed after {written} bytes: {source}")]
    Write {
        /// Number of bytes the sink accepted before failing
        written: u64,
        /// The underlying sink error
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Returns the number of bytes accepted by the sink if this is a write error.
    #[must_use]
    pub fn bytes_written(&self) -> Option<u64> {
        match self {
            Error::Write { written, .. } => Some(*written),
            _ => None,
        }
    }
}
