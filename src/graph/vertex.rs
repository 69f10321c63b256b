use std::{
    fmt::{Debug, Display},
    hash::{Hash, Hasher},
};

use hashbrown::HashSet;
use serde::{Deserialize, Serialize};

use crate::graph::Edge;

/// Identity of a vertex. Two vertices are the same vertex iff their ids match.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Copy, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VertexId {
    pub internal: usize,
}

impl From<usize> for VertexId {
    fn from(internal: usize) -> Self {
        VertexId { internal }
    }
}

impl Display for VertexId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "v({})", self.internal)
    }
}

impl Debug for VertexId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

/// A graph node together with the edges touching it.
///
/// Equality and hashing only look at [`Vertex::id`]; the incidence set plays no part.
/// Incident edges are unique by [`Edge`] equality and are kept in the order they were
/// attached, so anything iterating over them is deterministic.
pub struct Vertex {
    id: VertexId,
    incident_edges: Vec<Edge>,
    incident_lookup: HashSet<Edge>,
}

impl Vertex {
    /// Creates a vertex with no incident edges.
    pub fn new(id: VertexId) -> Self {
        Vertex {
            id,
            incident_edges: Vec::new(),
            incident_lookup: HashSet::new(),
        }
    }

    pub fn id(&self) -> VertexId {
        self.id
    }

    /// Records `edge` as incident to this vertex.
    ///
    /// # Returns
    /// `true` if the edge was new, `false` if an equal edge was already attached
    pub(crate) fn attach(&mut self, edge: Edge) -> bool {
        debug_assert!(edge.contains(self.id));
        if !self.incident_lookup.insert(edge) {
            return false;
        }
        self.incident_edges.push(edge);
        true
    }

    /// The edges touching this vertex, in the order they were attached.
    pub fn incident_edges(&self) -> &[Edge] {
        &self.incident_edges
    }

    /// Every incident edge except `edge`.
    ///
    /// Used right after a vertex joins a spanning tree, so the edge it joined through is
    /// not offered again.
    pub fn incident_edges_excluding(&self, edge: &Edge) -> Vec<Edge> {
        self.incident_edges
            .iter()
            .filter(|&candidate| candidate != edge)
            .copied()
            .collect()
    }

    pub fn degree(&self) -> usize {
        self.incident_edges.len()
    }
}

impl PartialEq for Vertex {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Vertex {}

impl Hash for Vertex {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl Debug for Vertex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Vertex")
            .field("id", &self.id)
            .field("incident_edges", &self.incident_edges)
            .finish()
    }
}
