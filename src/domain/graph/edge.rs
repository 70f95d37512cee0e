use std::fmt;

use crate::domain::utils::id::VertexId;

/// A directed, weighted connection between two vertices of a zone graph.
///
/// Undirected links are modelled as a pair of edges in opposite directions.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    pub origin: VertexId,
    pub destination: VertexId,

    /// Euclidean distance between the endpoints. Never negative.
    pub distance: f64,
}

impl Edge {
    pub fn new(origin: VertexId, destination: VertexId, distance: f64) -> Self {
        Self { origin, destination, distance }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Edge({} -> {}, dist={:.2})", self.origin, self.destination, self.distance)
    }
}
