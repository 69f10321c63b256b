pub mod error;
pub mod fs;
pub mod graph;
pub mod mst;
pub mod sets;
pub mod statistics;
