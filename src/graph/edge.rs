use std::{
    cmp::Ordering,
    fmt::Display,
    hash::{Hash, Hasher},
};

use serde::Serialize;

use crate::{error::MstError, graph::VertexId};

/// Edge weights are non-negative integers.
pub type Weight = u64;

/// Sum of edge weights. Wide enough that adding up `u64` weights cannot overflow.
pub type TotalWeight = u128;

/// An undirected weighted edge between two distinct vertices.
///
/// The endpoints are stored canonically (`low <= high`), so an edge built from `(a, b)` is
/// indistinguishable from one built from `(b, a)`. Equality and hashing go through
/// [`Edge::key`], i.e. weight and both endpoints: the same pair of vertices joined with two
/// different weights yields two different edges.
///
/// Edges are ordered by weight **only**, for use in priority queues. Two edges of equal
/// weight compare as `Equal` without being `==`.
#[derive(Copy, Clone, Debug, Serialize)]
pub struct Edge {
    weight: Weight,
    low: VertexId,
    high: VertexId,
}

impl Edge {
    /// Creates an edge between `a` and `b`.
    ///
    /// # Errors
    /// [`MstError::SelfLoop`] if `a` and `b` are the same vertex.
    pub fn new(weight: Weight, a: VertexId, b: VertexId) -> Result<Self, MstError> {
        match a.cmp(&b) {
            Ordering::Equal => Err(MstError::SelfLoop(a)),
            Ordering::Less => Ok(Edge {
                weight,
                low: a,
                high: b,
            }),
            Ordering::Greater => Ok(Edge {
                weight,
                low: b,
                high: a,
            }),
        }
    }

    pub fn weight(&self) -> Weight {
        self.weight
    }

    /// The endpoint with the smaller id.
    pub fn low(&self) -> VertexId {
        self.low
    }

    /// The endpoint with the larger id.
    pub fn high(&self) -> VertexId {
        self.high
    }

    pub fn endpoints(&self) -> (VertexId, VertexId) {
        (self.low, self.high)
    }

    pub fn contains(&self, vertex: VertexId) -> bool {
        self.low == vertex || self.high == vertex
    }

    /// Given one endpoint, returns the opposite one.
    ///
    /// # Returns
    /// `None` if `vertex` is not an endpoint of this edge
    pub fn other_endpoint(&self, vertex: VertexId) -> Option<VertexId> {
        if vertex == self.low {
            Some(self.high)
        } else if vertex == self.high {
            Some(self.low)
        } else {
            None
        }
    }

    /// The identity of an edge: everything set-like containers should compare on.
    pub fn key(&self) -> (Weight, VertexId, VertexId) {
        (self.weight, self.low, self.high)
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Edge {}

impl Hash for Edge {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl PartialOrd for Edge {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Edge {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight.cmp(&other.weight)
    }
}

impl Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "e(w:{}, [{} {}])", self.weight, self.low, self.high)
    }
}
