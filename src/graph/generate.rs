use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::{
    error::MstError,
    graph::{Graph, VertexId, Weight},
};

/// Generates a random connected graph on vertices `0..vertices`.
///
/// A random spanning tree is laid down first (vertex `i` hooks onto some vertex in `0..i`),
/// so the result is always connected. Then `extra_edges` further edges are drawn between
/// random distinct vertices; draws that repeat an existing edge are absorbed by
/// [`Graph::connect`]. Weights are uniform in `1..=max_weight`.
///
/// # Arguments
/// * `vertices` - Number of vertices
/// * `extra_edges` - Number of edges drawn on top of the spanning tree
/// * `max_weight` - Largest weight an edge may get, must be greater than 0
/// * `seed` - Seed for reproducible graphs, or `None` to seed from the OS
///
/// # Panics
/// Panics if `max_weight == 0`
pub fn random_connected(
    vertices: usize,
    extra_edges: usize,
    max_weight: Weight,
    seed: Option<u64>,
) -> Result<Graph, MstError> {
    assert!(max_weight > 0);

    let mut rng = if let Some(seed) = seed {
        StdRng::seed_from_u64(seed)
    } else {
        StdRng::from_os_rng()
    };

    let mut graph = Graph::new();
    for id in 0..vertices {
        graph.add_vertex(VertexId::from(id));
    }

    for id in 1..vertices {
        let anchor = rng.random_range(0..id);
        let weight = rng.random_range(1..=max_weight);
        graph.connect(id.into(), anchor.into(), weight)?;
    }

    if vertices >= 2 {
        for _ in 0..extra_edges {
            let a = rng.random_range(0..vertices);
            // shift past `a` so the two endpoints always differ
            let mut b = rng.random_range(0..vertices - 1);
            if b >= a {
                b += 1;
            }
            let weight = rng.random_range(1..=max_weight);
            graph.connect(a.into(), b.into(), weight)?;
        }
    }

    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_and_edge_counts() {
        let graph = random_connected(50, 100, 20, Some(42)).unwrap();
        assert_eq!(graph.len(), 50);
        assert!(graph.edge_count() >= 49);
        assert!(graph.edge_count() <= 49 + 100);
    }

    #[test]
    fn test_is_connected() {
        for seed in 0..10 {
            let graph = random_connected(30, 10, 9, Some(seed)).unwrap();
            let tree = graph.minimum_spanning_tree(0.into()).unwrap();
            assert_eq!(tree.len(), 30);
        }
    }

    #[test]
    fn test_same_seed_same_graph() {
        let g1 = random_connected(20, 30, 100, Some(7)).unwrap();
        let g2 = random_connected(20, 30, 100, Some(7)).unwrap();
        assert_eq!(g1.edges(), g2.edges());
    }

    #[test]
    fn test_degenerate_sizes() {
        let empty = random_connected(0, 10, 5, Some(1)).unwrap();
        assert!(empty.is_empty());

        let single = random_connected(1, 10, 5, Some(1)).unwrap();
        assert_eq!(single.len(), 1);
        assert_eq!(single.edge_count(), 0);
    }

    #[test]
    #[should_panic]
    fn zero_max_weight_panics() {
        let _ = random_connected(3, 0, 0, Some(1));
    }
}
