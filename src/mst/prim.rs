use tracing::{debug, warn};

use crate::{
    error::MstError,
    graph::{Edge, Graph, VertexId},
    mst::{NoopObserver, PrimObserver, SpanningTree},
    sets::candidates::CandidateQueue,
};

/// Grows a minimum spanning tree over a [`Graph`] with Prim's algorithm.
///
/// # Algorithm
/// Starting from a root, the builder keeps a [`CandidateQueue`] of boundary edges. It
/// repeatedly polls the lightest one and looks at which of its endpoints already belong to
/// the tree:
/// - exactly one: the other endpoint joins the tree through this edge, and its remaining
///   incident edges become candidates;
/// - both: the edge would close a cycle and is dropped.
///
/// The build is done once the queue is empty. Each distinct edge waits in the queue at
/// most once at a time, giving O(E log E) time and O(V + E) space.
///
/// Which endpoint is new is decided by tree membership alone; the builder keeps no notion
/// of a "current" vertex.
pub struct PrimBuilder<'g, O: PrimObserver = NoopObserver> {
    graph: &'g Graph,
    observer: O,
}

impl<'g> PrimBuilder<'g, NoopObserver> {
    pub fn new(graph: &'g Graph) -> Self {
        PrimBuilder {
            graph,
            observer: NoopObserver,
        }
    }
}

impl<'g, O: PrimObserver> PrimBuilder<'g, O> {
    /// Replaces the observer notified at each checkpoint of the build.
    pub fn with_observer<P: PrimObserver>(self, observer: P) -> PrimBuilder<'g, P> {
        PrimBuilder {
            graph: self.graph,
            observer,
        }
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn into_observer(self) -> O {
        self.observer
    }

    /// Grows the minimum spanning tree of the component containing `root`.
    ///
    /// If the graph is not connected, the returned tree only spans the vertices reachable
    /// from `root`; use [`SpanningTree::is_spanning`] or [`PrimBuilder::build_spanning`] to
    /// detect that.
    ///
    /// # Errors
    /// [`MstError::UnknownVertex`] if `root` is not in the graph
    pub fn build(&mut self, root: VertexId) -> Result<SpanningTree, MstError> {
        let graph = self.graph;
        let root_vertex = graph.vertex(root).ok_or(MstError::UnknownVertex(root))?;

        let mut tree = SpanningTree::new();
        let mut queue = CandidateQueue::new();

        tree.add_root(root);
        self.observer.on_tree_add(root, None);
        self.offer(&mut queue, root_vertex.incident_edges());

        while let Some(edge) = queue.poll() {
            self.observer.on_poll(&edge);

            let joining = match (tree.contains(edge.low()), tree.contains(edge.high())) {
                (true, false) => edge.high(),
                (false, true) => edge.low(),
                (true, true) => {
                    self.observer.on_discard(&edge);
                    continue;
                }
                (false, false) => {
                    // only edges incident to tree vertices are ever offered
                    warn!(%edge, "polled an edge with no endpoint in the tree");
                    continue;
                }
            };

            let vertex = graph
                .vertex(joining)
                .ok_or(MstError::UnknownVertex(joining))?;

            tree.add(joining, edge);
            self.observer.on_tree_add(joining, Some(&edge));
            self.offer(&mut queue, &vertex.incident_edges_excluding(&edge));
        }

        if !tree.is_spanning(graph.len()) {
            warn!(
                %root,
                reached = tree.len(),
                total = graph.len(),
                "spanning tree does not cover the graph"
            );
        }
        debug!(%root, reached = tree.len(), weight = tree.weight(), "spanning tree built");

        self.observer.on_done(&tree);
        Ok(tree)
    }

    /// Like [`PrimBuilder::build`], but fails instead of returning a tree that misses
    /// vertices.
    ///
    /// # Errors
    /// - [`MstError::UnknownVertex`] if `root` is not in the graph
    /// - [`MstError::NotConnected`] if some vertex is unreachable from `root`
    pub fn build_spanning(&mut self, root: VertexId) -> Result<SpanningTree, MstError> {
        let tree = self.build(root)?;
        let total = self.graph.len();
        if tree.is_spanning(total) {
            Ok(tree)
        } else {
            Err(MstError::NotConnected {
                reached: tree.len(),
                total,
            })
        }
    }

    fn offer(&mut self, queue: &mut CandidateQueue, edges: &[Edge]) {
        for edge in edges {
            let accepted = queue.offer_one(*edge);
            self.observer.on_offer(edge, accepted);
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::prelude::*;

    use super::*;
    use crate::{
        graph::{TotalWeight, Weight, generate::random_connected},
        statistics::Stats,
    };

    fn v(id: usize) -> VertexId {
        id.into()
    }

    fn edge(weight: Weight, a: usize, b: usize) -> Edge {
        Edge::new(weight, a.into(), b.into()).unwrap()
    }

    // Wires the graph the way hand-written fixtures tend to: every edge is connected from
    // both of its endpoints.
    fn wire_both_ways(vertices: usize, edges: &[(usize, usize, Weight)]) -> Graph {
        let mut graph = Graph::new();
        for id in 0..vertices {
            graph.add_vertex(v(id));
        }
        for &(a, b, w) in edges {
            graph.connect(v(a), v(b), w).unwrap();
            graph.connect(v(b), v(a), w).unwrap();
        }
        graph
    }

    fn four_vertex_graph() -> Graph {
        wire_both_ways(4, &[(0, 1, 3), (0, 2, 2), (0, 3, 3), (1, 3, 2), (2, 3, 3)])
    }

    fn five_vertex_graph() -> Graph {
        wire_both_ways(
            5,
            &[
                (0, 2, 75),
                (0, 1, 9),
                (1, 2, 95),
                (1, 3, 19),
                (1, 4, 42),
                (2, 3, 51),
                (3, 4, 31),
            ],
        )
    }

    // Kruskal with union-find, used as the optimality oracle
    fn kruskal_weight(graph: &Graph) -> TotalWeight {
        fn find(parent: &mut [usize], x: usize) -> usize {
            if parent[x] != x {
                parent[x] = find(parent, parent[x]);
            }
            parent[x]
        }

        let mut edges = graph.edges();
        edges.sort();
        let mut parent: Vec<usize> = (0..graph.len()).collect();
        let mut total = 0;
        for e in edges {
            let ra = find(&mut parent, e.low().internal);
            let rb = find(&mut parent, e.high().internal);
            if ra != rb {
                parent[ra] = rb;
                total += TotalWeight::from(e.weight());
            }
        }
        total
    }

    #[test]
    fn test_four_vertex_fixture() {
        let graph = four_vertex_graph();
        let tree = PrimBuilder::new(&graph).build(v(0)).unwrap();
        let edges = tree.edges();

        assert_eq!(tree.weight(), 7);
        assert_eq!(edges.len(), 3);
        assert!(edges.contains(&edge(2, 0, 2)));
        assert!(edges.contains(&edge(2, 1, 3)));
        assert!(edges.contains(&edge(3, 0, 1)) ^ edges.contains(&edge(3, 2, 3)));
    }

    #[test]
    fn test_five_vertex_fixture() {
        let graph = five_vertex_graph();
        let tree = PrimBuilder::new(&graph).build(v(0)).unwrap();
        let edges = tree.edges();

        assert_eq!(tree.weight(), 110);
        assert_eq!(edges.len(), 4);
        for included in [edge(9, 0, 1), edge(19, 1, 3), edge(51, 2, 3), edge(31, 3, 4)] {
            assert!(edges.contains(&included), "missing {included}");
        }
        for excluded in [edge(75, 0, 2), edge(95, 1, 2), edge(42, 1, 4)] {
            assert!(!edges.contains(&excluded), "unexpected {excluded}");
        }
    }

    #[test]
    fn test_weight_is_root_independent() {
        for (graph, expected) in [(four_vertex_graph(), 7), (five_vertex_graph(), 110)] {
            for vertex in graph.vertices() {
                let tree = PrimBuilder::new(&graph).build(vertex.id()).unwrap();
                assert_eq!(tree.weight(), expected);
                assert_eq!(tree.root(), Some(vertex.id()));
                assert_eq!(tree.edges().len(), graph.len() - 1);
            }
        }
    }

    #[test]
    fn test_endpoint_resolved_against_tree_membership() {
        // After 1 joins through (0,1), the next polled edge (0,2) hangs off the root rather
        // than off 1. Vertex 2 must still join through it.
        let graph = Graph::from_edges([(0, 1, 1), (0, 2, 2), (1, 2, 5)]).unwrap();
        let tree = PrimBuilder::new(&graph).build(v(0)).unwrap();

        assert_eq!(tree.weight(), 3);
        assert_eq!(tree.edges(), vec![edge(1, 0, 1), edge(2, 0, 2)]);
    }

    #[test]
    fn test_parallel_edges_pick_the_lighter() {
        let graph = Graph::from_edges([(0, 1, 8), (1, 0, 3), (1, 2, 4)]).unwrap();
        let tree = PrimBuilder::new(&graph).build(v(2)).unwrap();

        assert_eq!(tree.weight(), 7);
        assert!(tree.edges().contains(&edge(3, 0, 1)));
    }

    #[test]
    fn test_heavy_edges_with_debug_logging() {
        let graph = Graph::from_edges([(0, 1, Weight::MAX), (1, 2, 1)]).unwrap();

        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_test_writer()
            .finish();
        let tree = tracing::subscriber::with_default(subscriber, || {
            PrimBuilder::new(&graph)
                .with_observer(crate::mst::TracingObserver)
                .build(v(0))
                .unwrap()
        });

        assert_eq!(tree.weight(), TotalWeight::from(Weight::MAX) + 1);
        assert_eq!(tree.edges().len(), 2);
    }

    #[test]
    fn test_single_vertex() {
        let mut graph = Graph::new();
        graph.add_vertex(v(5));
        let tree = PrimBuilder::new(&graph).build_spanning(v(5)).unwrap();

        assert_eq!(tree.len(), 1);
        assert!(tree.edges().is_empty());
        assert_eq!(tree.weight(), 0);
    }

    #[test]
    fn test_unknown_root() {
        let graph = four_vertex_graph();
        let res = PrimBuilder::new(&graph).build(v(42));
        assert!(matches!(res, Err(MstError::UnknownVertex(x)) if x == v(42)));
    }

    #[test]
    fn test_disconnected_graph() {
        let graph = Graph::from_edges([(0, 1, 1), (1, 2, 2), (3, 4, 1)]).unwrap();

        let partial = PrimBuilder::new(&graph).build(v(0)).unwrap();
        assert_eq!(partial.len(), 3);
        assert_eq!(partial.weight(), 3);
        assert!(!partial.is_spanning(graph.len()));

        let res = PrimBuilder::new(&graph).build_spanning(v(3));
        assert!(matches!(
            res,
            Err(MstError::NotConnected {
                reached: 2,
                total: 5
            })
        ));
    }

    #[test]
    fn test_observer_checkpoints() {
        #[derive(Default)]
        struct Recorder {
            offered: usize,
            rejected: usize,
            polled: usize,
            added: Vec<VertexId>,
            discarded: usize,
            done: bool,
        }

        impl PrimObserver for Recorder {
            fn on_offer(&mut self, _edge: &Edge, accepted: bool) {
                if accepted {
                    self.offered += 1;
                } else {
                    self.rejected += 1;
                }
            }
            fn on_poll(&mut self, _edge: &Edge) {
                self.polled += 1;
            }
            fn on_tree_add(&mut self, vertex: VertexId, _edge: Option<&Edge>) {
                self.added.push(vertex);
            }
            fn on_discard(&mut self, _edge: &Edge) {
                self.discarded += 1;
            }
            fn on_done(&mut self, _tree: &SpanningTree) {
                self.done = true;
            }
        }

        let graph = five_vertex_graph();
        let mut recorder = Recorder::default();
        let tree = PrimBuilder::new(&graph)
            .with_observer(&mut recorder)
            .build(v(0))
            .unwrap();

        assert!(recorder.done);
        assert_eq!(recorder.added, tree.vertices().collect::<Vec<_>>());
        assert_eq!(recorder.added[0], v(0));
        // every accepted offer is eventually polled, and each poll either grows or discards
        assert_eq!(recorder.polled, recorder.offered);
        assert_eq!(recorder.polled, tree.len() - 1 + recorder.discarded);
        assert_eq!(recorder.offered, graph.edge_count());
    }

    #[test]
    fn test_observer_handed_back() {
        let graph = four_vertex_graph();
        let mut builder = PrimBuilder::new(&graph).with_observer(Stats::new());

        builder.build(v(0)).unwrap();
        builder.build(v(3)).unwrap();
        assert_eq!(builder.observer().get_builds(), 2);

        let stats = builder.into_observer();
        assert_eq!(stats.get_tree_additions(), 8);
    }

    #[test]
    fn test_tracing_observer_runs() {
        let graph = four_vertex_graph();
        let tree = PrimBuilder::new(&graph)
            .with_observer(crate::mst::TracingObserver)
            .build(v(1))
            .unwrap();
        assert_eq!(tree.weight(), 7);
    }

    #[test]
    fn test_randomized_against_kruskal() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..25 {
            let vertices = rng.random_range(2..60);
            let extra = rng.random_range(0..150);
            let max_weight = rng.random_range(1..20);
            let graph = random_connected(vertices, extra, max_weight, Some(rng.random())).unwrap();

            let expected = kruskal_weight(&graph);
            let root = v(rng.random_range(0..vertices));
            let tree = graph.minimum_spanning_tree(root).unwrap();

            assert_eq!(tree.weight(), expected);
            assert_eq!(tree.edges().len(), vertices - 1);
        }
    }
}
