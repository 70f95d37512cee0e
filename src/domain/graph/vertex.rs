use std::collections::BTreeMap;

use crate::domain::geometry::Position;
use crate::domain::graph::edge::Edge;
use crate::domain::utils::id::VertexId;

/// State shared by every vertex kind: identity, location and outgoing edges.
#[derive(Debug, Clone)]
pub struct VertexBase {
    pub id: VertexId,
    pub position: Position,

    /// Outgoing edges keyed by destination. Ordered so that traversal is deterministic.
    adjacency: BTreeMap<VertexId, Edge>,
}

impl VertexBase {
    pub fn new(id: VertexId, position: Position) -> Self {
        Self { id, position, adjacency: BTreeMap::new() }
    }
}

/// Capability shared by towers and switching centers.
pub trait GraphVertex: std::fmt::Debug {
    fn base(&self) -> &VertexBase;

    fn base_mut(&mut self) -> &mut VertexBase;

    /// Short label for the vertex kind, used in snapshots and logs.
    fn kind(&self) -> &'static str;

    fn get_id(&self) -> &VertexId {
        &self.base().id
    }

    fn get_position(&self) -> Position {
        self.base().position
    }

    /// Creates or replaces the directed edge `self -> neighbor`.
    /// Negative weights are clamped to zero.
    fn add_edge(&mut self, neighbor: VertexId, distance: f64) {
        let origin = self.get_id().clone();
        let edge = Edge::new(origin, neighbor.clone(), distance.max(0.0));
        self.base_mut().adjacency.insert(neighbor, edge);
    }

    fn neighbors(&self) -> Vec<&VertexId> {
        self.base().adjacency.keys().collect()
    }

    fn edge_to(&self, neighbor: &VertexId) -> Option<&Edge> {
        self.base().adjacency.get(neighbor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::graph::switching_center::SwitchingCenter;

    #[test]
    fn test_add_edge_overwrites_existing_edge() {
        let mut center = SwitchingCenter::new(VertexId::new("North_MSC"), Position::new(0.0, 0.0));
        let tower_id = VertexId::new("T1");

        center.add_edge(tower_id.clone(), 10.0);
        center.add_edge(tower_id.clone(), 25.0);

        assert_eq!(center.neighbors(), vec![&tower_id]);
        let edge = center.edge_to(&tower_id).unwrap();
        assert_eq!(edge.origin, VertexId::new("North_MSC"));
        assert_eq!(edge.destination, tower_id);
        assert_eq!(edge.distance, 25.0);
    }

    #[test]
    fn test_edge_to_unknown_neighbor_is_none() {
        let center = SwitchingCenter::new(VertexId::new("North_MSC"), Position::new(0.0, 0.0));
        assert!(center.edge_to(&VertexId::new("T9")).is_none());
        assert!(center.neighbors().is_empty());
        assert_eq!(center.kind(), "MSC");
    }
}
