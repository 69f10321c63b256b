//! File system I/O for loading graphs.
//!
//! Graphs are stored as JSON edge lists:
//!
//! ```json
//! { "vertices": [0, 1, 2], "edges": [{ "from": 0, "to": 1, "weight": 3 }] }
//! ```
//!
//! `vertices` may be omitted, in which case the vertex set is whatever the edges mention.

mod graph_load;

pub use graph_load::*;
