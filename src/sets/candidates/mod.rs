//! Candidate management for spanning tree growth.
//!
//! Provides the deduplicating min-priority queue that holds the edges waiting to be
//! considered by Prim's algorithm.

mod candidate_queue;

pub use candidate_queue::*;
