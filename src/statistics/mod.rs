//! Statistics tracking for spanning tree builds.
//!
//! This module provides a counter set that plugs into a build as an observer and records
//! how much queue traffic and cycle rejection the algorithm went through.

mod stats;
pub use stats::*;
