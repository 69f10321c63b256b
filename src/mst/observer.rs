use tracing::{debug, trace};

use crate::{
    graph::{Edge, VertexId},
    mst::SpanningTree,
};

/// Hooks invoked at the checkpoints of a spanning tree build.
///
/// Every method defaults to doing nothing, so implementors only override the events they
/// care about. Observers never influence the build.
pub trait PrimObserver {
    /// An edge was offered to the candidate queue. `accepted` is false for a duplicate.
    fn on_offer(&mut self, _edge: &Edge, _accepted: bool) {}

    /// An edge was taken off the candidate queue.
    fn on_poll(&mut self, _edge: &Edge) {}

    /// A vertex joined the tree. The root joins with no edge.
    fn on_tree_add(&mut self, _vertex: VertexId, _edge: Option<&Edge>) {}

    /// A polled edge was thrown away because both of its endpoints were already in the tree.
    fn on_discard(&mut self, _edge: &Edge) {}

    /// The candidate queue ran dry; `tree` is final.
    fn on_done(&mut self, _tree: &SpanningTree) {}
}

/// The default observer.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl PrimObserver for NoopObserver {}

/// Emits a `tracing` event at each checkpoint.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl PrimObserver for TracingObserver {
    fn on_offer(&mut self, edge: &Edge, accepted: bool) {
        trace!(%edge, accepted, "offer");
    }

    fn on_poll(&mut self, edge: &Edge) {
        trace!(%edge, "poll");
    }

    fn on_tree_add(&mut self, vertex: VertexId, edge: Option<&Edge>) {
        match edge {
            Some(edge) => trace!(%vertex, %edge, "tree add"),
            None => trace!(%vertex, "tree root"),
        }
    }

    fn on_discard(&mut self, edge: &Edge) {
        trace!(%edge, "discard, closes a cycle");
    }

    fn on_done(&mut self, tree: &SpanningTree) {
        debug!(vertices = tree.len(), weight = tree.weight(), "{tree}");
    }
}

impl<T: PrimObserver + ?Sized> PrimObserver for &mut T {
    fn on_offer(&mut self, edge: &Edge, accepted: bool) {
        (**self).on_offer(edge, accepted)
    }

    fn on_poll(&mut self, edge: &Edge) {
        (**self).on_poll(edge)
    }

    fn on_tree_add(&mut self, vertex: VertexId, edge: Option<&Edge>) {
        (**self).on_tree_add(vertex, edge)
    }

    fn on_discard(&mut self, edge: &Edge) {
        (**self).on_discard(edge)
    }

    fn on_done(&mut self, tree: &SpanningTree) {
        (**self).on_done(tree)
    }
}

// lets two observers ride along on the same build
impl<A: PrimObserver, B: PrimObserver> PrimObserver for (A, B) {
    fn on_offer(&mut self, edge: &Edge, accepted: bool) {
        self.0.on_offer(edge, accepted);
        self.1.on_offer(edge, accepted);
    }

    fn on_poll(&mut self, edge: &Edge) {
        self.0.on_poll(edge);
        self.1.on_poll(edge);
    }

    fn on_tree_add(&mut self, vertex: VertexId, edge: Option<&Edge>) {
        self.0.on_tree_add(vertex, edge);
        self.1.on_tree_add(vertex, edge);
    }

    fn on_discard(&mut self, edge: &Edge) {
        self.0.on_discard(edge);
        self.1.on_discard(edge);
    }

    fn on_done(&mut self, tree: &SpanningTree) {
        self.0.on_done(tree);
        self.1.on_done(tree);
    }
}
