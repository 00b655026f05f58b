//! # dotscribe Prelude
//!
//! This module provides a convenient prelude for the most commonly used types and traits
//! from the dotscribe library. Import this module to get quick access to everything needed
//! to build and serialize a graph.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all dotscribe operations
pub use crate::Error;

/// The result type used throughout dotscribe
pub use crate::Result;

// ================================================================================================
// Graph Model
// ================================================================================================

/// Graphs, nodes, edges and their shared handles
pub use crate::dot::{
    Edge, EdgeInitializer, EdgeRc, Graph, GraphKind, GraphOptions, GraphRc, GraphRef, Node,
    NodeInitializer, NodeRc,
};

// ================================================================================================
// Attributes
// ================================================================================================

/// Attribute storage and the trait exposing it on every entity
pub use crate::attributes::{AttributeValue, Attributes, Styleable};

/// Attribute keys and common values
pub use crate::attributes::{ArrowType, ClusterMode, DirType, Key, RankDir, Shape, Splines, Style};

// ================================================================================================
// Identifier Generation
// ================================================================================================

/// Identifier generators for anonymous entities
pub use crate::generator::{IdGenerator, IdGeneratorRc, RandomIdGenerator};
