// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]
#![deny(unsafe_code)]

//! # dotscribe
//!
//! [![Crates.io](https://img.shields.io/crates/v/dotscribe.svg)](https://crates.io/crates/dotscribe)
//! [![Documentation](https://docs.rs/dotscribe/badge.svg)](https://docs.rs/dotscribe)
//!
//! A builder and deterministic serializer for Graphviz DOT documents. Graphs, nested
//! subgraphs, nodes and edges are assembled in memory through an imperative API and written
//! out as canonical DOT text: the same graph always produces the same bytes, whatever order
//! it was built in.
//!
//! ## Features
//!
//! - **📐 Hierarchical model** - Root graphs, subgraphs and clusters with cascading lookup
//! - **🔁 Deterministic output** - Sorted, byte-exact serialization suitable for golden tests
//! - **🎨 Typed attributes** - Graphviz attribute keys and values as enums, plus free-form keys
//! - **📏 Exact byte accounting** - Partial writes report precisely how much output reached the sink
//! - **🧩 Injectable behaviour** - Node and edge initializers, pluggable identifier generators
//!
//! ## Quick Start
//!
//! Add `dotscribe` to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! dotscribe = "0.1"
//! ```
//!
//! ### Using the Prelude
//!
//! ```rust
//! use dotscribe::prelude::*;
//!
//! let graph = Graph::new(GraphOptions::new().with_strict(true))?;
//! let n1 = graph.node("n1");
//! let n2 = graph.node("n2");
//! graph.edge(&n1, &n2).set_attribute_string(Key::Color, "red");
//!
//! assert_eq!(
//!     graph.to_string(),
//!     r#"strict digraph {"n1";"n2";"n1"->"n2"[color="red"];}"#
//! );
//! # Ok::<(), dotscribe::Error>(())
//! ```
//!
//! ### Node Initializers
//!
//! Every node and edge a graph creates can be passed through a callback before it is
//! stored, e.g. to give every node a default label:
//!
//! ```rust
//! use dotscribe::prelude::*;
//! use std::rc::Rc;
//!
//! let graph = Graph::new(GraphOptions::new().with_node_initializer(Rc::new(|node: &NodeRc| {
//!     node.label(node.id().to_string());
//! })))?;
//! let n1 = graph.node("n1");
//! let n2 = graph.node("n2");
//! graph.edge(&n1, &n2);
//!
//! assert_eq!(
//!     graph.to_string(),
//!     r#"digraph {"n1"[label="n1"];"n2"[label="n2"];"n1"->"n2";}"#
//! );
//! # Ok::<(), dotscribe::Error>(())
//! ```
//!
//! ## Architecture
//!
//! `dotscribe` is organized into several key modules:
//!
//! - [`prelude`] - Convenient re-exports of commonly used types and traits
//! - [`dot`] - The graph entity model and the serializer
//! - [`attributes`] - Attribute storage and the Graphviz attribute vocabulary
//! - [`generator`] - Identifier generation for anonymous entities
//! - [`Error`] and [`Result`] - Error handling
//!
//! ## Error Handling
//!
//! Construction and serialization return [`Result<T, Error>`](Result). Lookups return
//! [`Option`] and never fail.
//!
//! ```rust
//! use dotscribe::{Error, Graph, GraphOptions};
//!
//! match Graph::new(GraphOptions::new().with_cluster(true)) {
//!     Ok(_) => println!("created"),
//!     Err(Error::RootCluster) => println!("only subgraphs can be clusters"),
//!     Err(e) => println!("Other error: {}", e),
//! }
//! ```
//!
//! ## Logging
//!
//! The crate logs through the [`log`](https://docs.rs/log) facade: graph construction,
//! generated identifiers and subgraph registration at `debug`, replaced subgraphs at
//! `warn`. No logger is installed by the library.
//!
//! ### Testing
//!
//! ```bash
//! cargo test
//! cargo bench
//! ```

/// Shared functionality which is used in unit- and integration-tests
#[cfg(test)]
pub(crate) mod test;

pub(crate) mod error;

/// Convenient re-exports of the most commonly used types and traits.
///
/// This module provides a curated selection of the most frequently used types
/// from across the dotscribe library, allowing for convenient glob imports.
///
/// # Example
///
/// ```rust
/// use dotscribe::prelude::*;
///
/// let graph = Graph::new(GraphOptions::new())?;
/// graph.node("a").box_shape();
/// assert_eq!(graph.to_string(), r#"digraph {"a"[shape="box"];}"#);
/// # Ok::<(), dotscribe::Error>(())
/// ```
pub mod prelude;

/// Attribute storage and vocabulary.
///
/// # Key Types
///
/// - [`attributes::Attributes`] - Ordered key/value store attached to every entity
/// - [`attributes::AttributeValue`] - Quoted string, literal or HTML value
/// - [`attributes::Styleable`] - Attribute access shared by graphs, nodes and edges
/// - [`attributes::Key`] - Graphviz attribute names
pub mod attributes;

/// Graph entity model and DOT serialization.
///
/// See [`dot::Graph`] for the container and its lookup rules, and the module documentation
/// for the output grammar.
pub mod dot;

/// Identifier generators for anonymous nodes, edges and graphs.
pub mod generator;

/// String helpers for DOT output: escaping and identifier quoting.
pub mod utils;

/// `dotscribe` Result type
///
/// A type alias for [`std::result::Result<T, Error>`] where the error type is always [`Error`].
/// This is used consistently throughout the crate for all fallible operations.
///
/// # Examples
///
/// ```rust
/// use dotscribe::{GraphRc, Graph, GraphOptions, Result};
///
/// fn pipeline() -> Result<GraphRc> {
///     let graph = Graph::new(GraphOptions::new().with_id("pipeline"))?;
///     graph.subgraph(GraphOptions::default().with_id("stage").with_cluster(true))?;
///     Ok(graph)
/// }
/// # pipeline()?;
/// # Ok::<(), dotscribe::Error>(())
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// `dotscribe` Error type
///
/// The main error type for all operations in this crate. Configuration errors come from graph
/// construction, write errors from serialization.
pub use error::Error;

pub use dot::{
    Edge, EdgeRc, Graph, GraphKind, GraphOptions, GraphRc, GraphRef, Node, NodeRc,
};
