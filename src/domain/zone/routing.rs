use std::collections::{HashMap, HashSet, VecDeque};

use crate::domain::graph::vertex::GraphVertex;
use crate::domain::utils::id::VertexId;

/// Read access to the vertices of a graph by identifier.
pub trait VertexLookup {
    fn lookup(&self, id: &VertexId) -> Option<&dyn GraphVertex>;
}

/// Finds the path with the fewest hops from `source` to `target` using a Breadth-First Search (BFS).
///
/// Edge distances are not taken into account; every edge counts as one hop.
///
/// # Returns
///
/// Returns the vertices from `source` to `target` (both inclusive), or `None` if
/// `source` is unknown or `target` is unreachable.
pub fn shortest_hop_path(graph: &impl VertexLookup, source: &VertexId, target: &VertexId) -> Option<Vec<VertexId>> {
    graph.lookup(source)?;

    let mut queue: VecDeque<VertexId> = VecDeque::new();
    let mut visited: HashSet<VertexId> = HashSet::new();
    let mut parent: HashMap<VertexId, VertexId> = HashMap::new();

    queue.push_back(source.clone());
    visited.insert(source.clone());

    while let Some(current) = queue.pop_front() {
        if current == *target {
            return Some(reconstruct_path(&parent, current));
        }

        let Some(vertex) = graph.lookup(&current) else {
            continue;
        };

        for neighbor in vertex.neighbors() {
            if visited.insert(neighbor.clone()) {
                parent.insert(neighbor.clone(), current.clone());
                queue.push_back(neighbor.clone());
            }
        }
    }

    log::debug!("NoPathFound: {} => {}", source, target);
    None
}

fn reconstruct_path(parent: &HashMap<VertexId, VertexId>, end: VertexId) -> Vec<VertexId> {
    let mut path = vec![end];
    while let Some(previous) = path.last().and_then(|last| parent.get(last)) {
        path.push(previous.clone());
    }
    path.reverse();
    path
}

/// Joins the caller's path to the switching center with the receiver's path reversed.
///
/// Both paths end at the switching center; it appears once in the result.
pub fn compose_call_route(caller_path: &[VertexId], receiver_path: &[VertexId]) -> Vec<VertexId> {
    let mut route = caller_path.to_vec();
    route.extend(receiver_path.iter().rev().skip(1).cloned());
    route
}
