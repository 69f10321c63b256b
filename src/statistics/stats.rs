use std::fmt::Display;

use crate::{
    graph::{Edge, VertexId},
    mst::{PrimObserver, SpanningTree},
};

/// Counters collected over one or more spanning tree builds.
///
/// Attach it to a build through [`crate::mst::PrimBuilder::with_observer`].
#[derive(Debug, Clone, Copy)]
pub struct Stats {
    builds: usize,
    offers_accepted: usize,
    offers_dropped: usize,
    polls: usize,
    cycle_discards: usize,
    tree_additions: usize,
}

impl Stats {
    pub fn new() -> Self {
        Stats {
            builds: 0,
            offers_accepted: 0,
            offers_dropped: 0,
            polls: 0,
            cycle_discards: 0,
            tree_additions: 0,
        }
    }

    /// Sums two sets of counters, e.g. from builds over different roots.
    pub fn merge(&self, other: &Stats) -> Stats {
        Stats {
            builds: self.builds + other.builds,
            offers_accepted: self.offers_accepted + other.offers_accepted,
            offers_dropped: self.offers_dropped + other.offers_dropped,
            polls: self.polls + other.polls,
            cycle_discards: self.cycle_discards + other.cycle_discards,
            tree_additions: self.tree_additions + other.tree_additions,
        }
    }

    pub fn get_builds(&self) -> usize {
        self.builds
    }

    pub fn get_offers_accepted(&self) -> usize {
        self.offers_accepted
    }

    /// Offers rejected because the same edge was already queued.
    pub fn get_offers_dropped(&self) -> usize {
        self.offers_dropped
    }

    pub fn get_polls(&self) -> usize {
        self.polls
    }

    pub fn get_cycle_discards(&self) -> usize {
        self.cycle_discards
    }

    /// Vertices added to trees, roots included.
    pub fn get_tree_additions(&self) -> usize {
        self.tree_additions
    }
}

impl Default for Stats {
    fn default() -> Self {
        Stats::new()
    }
}

impl PrimObserver for Stats {
    fn on_offer(&mut self, _edge: &Edge, accepted: bool) {
        if accepted {
            self.offers_accepted += 1;
        } else {
            self.offers_dropped += 1;
        }
    }

    fn on_poll(&mut self, _edge: &Edge) {
        self.polls += 1;
    }

    fn on_tree_add(&mut self, _vertex: VertexId, _edge: Option<&Edge>) {
        self.tree_additions += 1;
    }

    fn on_discard(&mut self, _edge: &Edge) {
        self.cycle_discards += 1;
    }

    fn on_done(&mut self, _tree: &SpanningTree) {
        self.builds += 1;
    }
}

impl Display for Stats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "builds : {}, offers : {} ({} duplicates dropped), polls : {}, cycle discards : {}, tree additions : {}",
            self.builds,
            self.offers_accepted,
            self.offers_dropped,
            self.polls,
            self.cycle_discards,
            self.tree_additions
        )
    }
}
