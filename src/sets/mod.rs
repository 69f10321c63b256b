//! Specialized data structures for spanning tree construction.
//!
//! # Submodules
//!
//! - [`candidates`]: Deduplicating priority queue of boundary edges

pub mod candidates;
