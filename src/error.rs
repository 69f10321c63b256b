//! Error type shared by graph construction, loading and spanning tree builds.

use thiserror::Error;

use crate::graph::VertexId;

/// Everything that can go wrong while wiring a graph or growing a tree on it.
#[derive(Debug, Error)]
pub enum MstError {
    #[error("edge endpoints must differ, got a self-loop on {0}")]
    SelfLoop(VertexId),

    #[error("vertex {0} is not part of the graph")]
    UnknownVertex(VertexId),

    #[error("graph is not connected from the root: reached {reached} of {total} vertices")]
    NotConnected { reached: usize, total: usize },

    #[error("could not read graph file: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed graph file: {0}")]
    Json(#[from] serde_json::Error),
}
