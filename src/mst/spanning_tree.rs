use std::fmt::Display;

use hashbrown::HashSet;
use serde::Serialize;

use crate::graph::{Edge, TotalWeight, VertexId};

/// One vertex of a spanning tree and the edge it was attached through.
///
/// The root carries no edge.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct TreeEntry {
    pub vertex: VertexId,
    pub edge: Option<Edge>,
}

/// Accumulates the vertices of a spanning tree together with their attaching edges.
///
/// Membership is keyed on [`VertexId`] alone. Adding a vertex that is already in the tree
/// keeps the existing entry, edge included (first insertion wins). Entries are kept in
/// insertion order, so [`SpanningTree::edges`] is deterministic.
#[derive(Debug, Clone, Serialize)]
pub struct SpanningTree {
    entries: Vec<TreeEntry>,
    #[serde(skip)]
    members: HashSet<VertexId>,
}

impl SpanningTree {
    pub fn new() -> Self {
        SpanningTree {
            entries: Vec::new(),
            members: HashSet::new(),
        }
    }

    /// Adds the root of the tree, i.e. a vertex attached through no edge.
    ///
    /// # Returns
    /// `true` if the vertex was not yet in the tree
    pub fn add_root(&mut self, vertex: VertexId) -> bool {
        self.insert(vertex, None)
    }

    /// Adds `vertex`, attached to the tree through `edge`.
    ///
    /// # Returns
    /// `true` if the vertex was not yet in the tree, `false` if it was (nothing changes)
    pub fn add(&mut self, vertex: VertexId, edge: Edge) -> bool {
        self.insert(vertex, Some(edge))
    }

    fn insert(&mut self, vertex: VertexId, edge: Option<Edge>) -> bool {
        if !self.members.insert(vertex) {
            return false;
        }
        self.entries.push(TreeEntry { vertex, edge });
        true
    }

    pub fn contains(&self, vertex: VertexId) -> bool {
        self.members.contains(&vertex)
    }

    /// The first vertex added, if any.
    pub fn root(&self) -> Option<VertexId> {
        self.entries.first().map(|entry| entry.vertex)
    }

    /// Number of vertices in the tree.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether the tree covers a graph of `total_vertices` vertices.
    pub fn is_spanning(&self, total_vertices: usize) -> bool {
        self.len() == total_vertices
    }

    pub fn entries(&self) -> &[TreeEntry] {
        &self.entries
    }

    /// Vertices in the order they joined the tree.
    pub fn vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.entries.iter().map(|entry| entry.vertex)
    }

    /// All tree edges in insertion order. The root contributes none.
    pub fn edges(&self) -> Vec<Edge> {
        self.entries.iter().filter_map(|entry| entry.edge).collect()
    }

    /// Sum of the weights of [`SpanningTree::edges`].
    pub fn weight(&self) -> TotalWeight {
        self.entries
            .iter()
            .filter_map(|entry| entry.edge)
            .map(|edge| TotalWeight::from(edge.weight()))
            .sum()
    }
}

impl Default for SpanningTree {
    fn default() -> Self {
        SpanningTree::new()
    }
}

impl Display for SpanningTree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "T = {{ ")?;
        for entry in &self.entries {
            match entry.edge {
                Some(edge) => write!(f, "{{{}, {}}} ", entry.vertex, edge)?,
                None => write!(f, "{{{}, root}} ", entry.vertex)?,
            }
        }
        write!(f, "}}")
    }
}
