//! Undirected weighted graph model.
//!
//! Vertices live in an arena owned by [`Graph`]; edges name their endpoints by
//! [`VertexId`], which keeps the vertex/edge back-references free of ownership cycles.
//!
//! # Submodules
//!
//! - [`generate`]: seeded random connected graphs

mod adjacency_graph;
mod edge;
pub mod generate;
mod vertex;

pub use adjacency_graph::*;
pub use edge::*;
pub use vertex::*;
