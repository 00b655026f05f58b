//! The DOT entity model and its serializer.
//!
//! # Architecture
//!
//! The model is a tree of [`Graph`]s. The root is a `digraph` or `graph`; every other
//! graph is a `subgraph` reachable from it. Each graph owns its nodes, the edges created on
//! it, its child subgraphs and its same-rank groups. Nodes and edges point back to the
//! graph that created them with weak references, as do subgraphs to their parent.
//!
//! All entities are single-threaded shared handles ([`GraphRc`], [`NodeRc`], [`EdgeRc`]).
//! The model assumes one mutator at a time and is neither `Send` nor `Sync`.
//!
//! # Key Components
//!
//! - [`Graph`] - Hierarchical container, lookup, subgraph creation and serialization
//! - [`Node`] - Graph node with attributes
//! - [`Edge`] - Connection between two nodes with attributes
//! - [`GraphOptions`] - Construction parameters for graphs and subgraphs
//! - [`GraphKind`] - `digraph`, `graph` or `subgraph`
//!
//! # Output Grammar
//!
//! ```text
//! graph     := ["strict "] kind [" \"" id "\""] " {" body "}"
//! body      := attrs? subgraph* node* rankgroup* edge*
//! attrs     := "graph " attributes ";"
//! node      := "\"" id "\"" attributes ";"
//! rankgroup := "{" "rank=same;" node* "}"
//! edge      := "\"" from "\"" ("->" | "--") "\"" to "\"" attributes ";"
//! ```
//!
//! # Examples
//!
//! ```rust
//! use dotscribe::{Graph, GraphOptions};
//!
//! let graph = Graph::new(GraphOptions::new().with_id("G"))?;
//! let cluster = graph.subgraph(GraphOptions::default().with_id("A").with_cluster(true))?;
//! let a = cluster.node("a");
//! let b = graph.node("b");
//! graph.edge(&a, &b).label("uses");
//!
//! assert_eq!(
//!     graph.to_string(),
//!     r#"digraph "G" {subgraph "cluster_A" {"a";}"b";"a"->"b"[label="uses"];}"#
//! );
//! # Ok::<(), dotscribe::Error>(())
//! ```

mod edge;
mod graph;
mod node;
mod options;
pub(crate) mod writer;

pub use edge::{Edge, EdgeInitializer, EdgeRc};
pub use graph::{Graph, GraphRc, GraphRef};
pub use node::{Node, NodeInitializer, NodeRc};
pub use options::{GraphKind, GraphOptions, CLUSTER_PREFIX, GENERATED_ID};
