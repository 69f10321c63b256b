//! Minimum spanning tree construction.
//!
//! [`PrimBuilder`] grows a [`SpanningTree`] from a root vertex, reporting its progress to
//! a [`PrimObserver`] (a no-op unless one is supplied).

mod observer;
mod prim;
mod spanning_tree;

pub use observer::*;
pub use prim::*;
pub use spanning_tree::*;
