use std::{
    fs::File,
    io::{BufReader, BufWriter},
    path::Path,
};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    error::MstError,
    graph::{Graph, VertexId, Weight},
};

/// On-disk form of a graph.
#[derive(Debug, Serialize, Deserialize)]
pub struct GraphFile {
    /// Vertices to create up front. Lets a file declare vertices without edges.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub vertices: Vec<VertexId>,
    pub edges: Vec<EdgeRecord>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub from: VertexId,
    pub to: VertexId,
    pub weight: Weight,
}

impl GraphFile {
    /// Wires up a [`Graph`]: declared vertices first, then every edge.
    ///
    /// # Errors
    /// [`MstError::SelfLoop`] if a record joins a vertex to itself
    pub fn into_graph(self) -> Result<Graph, MstError> {
        let mut graph = Graph::new();
        for id in self.vertices {
            graph.add_vertex(id);
        }
        for record in self.edges {
            let from = graph.add_vertex(record.from);
            let to = graph.add_vertex(record.to);
            graph.connect(from, to, record.weight)?;
        }
        Ok(graph)
    }
}

impl From<&Graph> for GraphFile {
    fn from(graph: &Graph) -> Self {
        GraphFile {
            vertices: graph.vertices().map(|vertex| vertex.id()).collect(),
            edges: graph
                .edges()
                .into_iter()
                .map(|edge| EdgeRecord {
                    from: edge.low(),
                    to: edge.high(),
                    weight: edge.weight(),
                })
                .collect(),
        }
    }
}

impl Graph {
    /// Reads a JSON graph file.
    ///
    /// # Errors
    /// - [`MstError::Io`] if the file cannot be opened
    /// - [`MstError::Json`] if it does not describe a graph
    /// - [`MstError::SelfLoop`] if an edge joins a vertex to itself
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Graph, MstError> {
        let path = path.as_ref();
        let reader = BufReader::new(File::open(path)?);
        let file: GraphFile = serde_json::from_reader(reader)?;
        debug!(
            path = %path.display(),
            vertices = file.vertices.len(),
            edges = file.edges.len(),
            "graph file parsed"
        );
        file.into_graph()
    }

    /// Parses a graph from a JSON string, same format as [`Graph::load_from_path`].
    pub fn from_json_str(json: &str) -> Result<Graph, MstError> {
        serde_json::from_str::<GraphFile>(json)?.into_graph()
    }

    /// Writes the graph as a JSON file that [`Graph::load_from_path`] reads back.
    pub fn save_to_path(&self, path: impl AsRef<Path>) -> Result<(), MstError> {
        let writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(writer, &GraphFile::from(self))?;
        Ok(())
    }
}
