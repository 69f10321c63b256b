use hashbrown::{HashMap, HashSet};

use crate::{
    error::MstError,
    graph::{Edge, Vertex, VertexId, Weight},
    mst::{PrimBuilder, SpanningTree},
};

/// In-memory undirected weighted graph, stored as an arena of vertices.
///
/// # Invariants
/// - `slots[id]` is the position of vertex `id` in `vertices`.
/// - Every edge attached to a vertex is also attached to its other endpoint, and both
///   endpoints are in the arena.
/// - Edges refer to vertices by [`VertexId`] only, never by reference.
pub struct Graph {
    vertices: Vec<Vertex>,
    slots: HashMap<VertexId, usize>,
}

impl Graph {
    pub fn new() -> Self {
        Graph {
            vertices: Vec::new(),
            slots: HashMap::new(),
        }
    }

    /// Builds a graph from `(a, b, weight)` triples, adding vertices as they show up.
    ///
    /// # Errors
    /// [`MstError::SelfLoop`] if any triple joins a vertex to itself.
    pub fn from_edges<I>(edges: I) -> Result<Self, MstError>
    where
        I: IntoIterator<Item = (usize, usize, Weight)>,
    {
        let mut graph = Graph::new();
        for (a, b, weight) in edges {
            let a = graph.add_vertex(a.into());
            let b = graph.add_vertex(b.into());
            graph.connect(a, b, weight)?;
        }
        Ok(graph)
    }

    /// Adds a standalone vertex. Adding an id that is already present does nothing.
    pub fn add_vertex(&mut self, id: VertexId) -> VertexId {
        if !self.slots.contains_key(&id) {
            self.slots.insert(id, self.vertices.len());
            self.vertices.push(Vertex::new(id));
        }
        id
    }

    /// Joins `a` and `b` with an edge of the given weight, registering it on both ends.
    ///
    /// Connecting a pair that already shares an equal edge (same weight) is a no-op.
    ///
    /// # Returns
    /// The canonical edge between `a` and `b`
    ///
    /// # Errors
    /// - [`MstError::SelfLoop`] if `a == b`
    /// - [`MstError::UnknownVertex`] if either endpoint was never added
    pub fn connect(&mut self, a: VertexId, b: VertexId, weight: Weight) -> Result<Edge, MstError> {
        let edge = Edge::new(weight, a, b)?;
        let slot_a = self.slot(a)?;
        let slot_b = self.slot(b)?;

        self.vertices[slot_a].attach(edge);
        self.vertices[slot_b].attach(edge);
        Ok(edge)
    }

    fn slot(&self, id: VertexId) -> Result<usize, MstError> {
        self.slots
            .get(&id)
            .copied()
            .ok_or(MstError::UnknownVertex(id))
    }

    pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.slots.get(&id).map(|&slot| &self.vertices[slot])
    }

    pub fn contains(&self, id: VertexId) -> bool {
        self.slots.contains_key(&id)
    }

    /// Vertices in the order they were added.
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex> {
        self.vertices.iter()
    }

    /// Every distinct edge once, in the order it was first seen while walking the arena.
    pub fn edges(&self) -> Vec<Edge> {
        let mut seen = HashSet::new();
        self.vertices
            .iter()
            .flat_map(|vertex| vertex.incident_edges())
            .filter(|&edge| seen.insert(*edge))
            .copied()
            .collect()
    }

    pub fn edge_count(&self) -> usize {
        // every edge is attached to exactly two vertices
        self.vertices.iter().map(Vertex::degree).sum::<usize>() / 2
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Minimum spanning tree of the whole graph, grown from `root`.
    ///
    /// # Errors
    /// - [`MstError::UnknownVertex`] if `root` is not in the graph
    /// - [`MstError::NotConnected`] if some vertex cannot be reached from `root`
    pub fn minimum_spanning_tree(&self, root: VertexId) -> Result<SpanningTree, MstError> {
        PrimBuilder::new(self).build_spanning(root)
    }
}

impl Default for Graph {
    fn default() -> Self {
        Graph::new()
    }
}

impl std::fmt::Debug for Graph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Graph")
            .field("vertices", &self.vertices)
            .finish()
    }
}
