use std::collections::BinaryHeap;

use hashbrown::HashMap;
use log::{debug, info};
use petgraph::visit::EdgeRef;

use super::state::State;
use crate::{BuildingGraph, Error, Meters, Vertex, VertexId, VertexType};

/// Shortest path between two vertices
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    vertices: Vec<VertexId>,
    cost: Meters,
}

impl Route {
    /// Vertices from source to destination, both inclusive
    pub fn vertices(&self) -> &[VertexId] {
        &self.vertices
    }

    pub fn into_vertices(self) -> Vec<VertexId> {
        self.vertices
    }

    /// Total weight in meters
    pub fn cost(&self) -> Meters {
        self.cost
    }

    /// Source and destination are the same vertex
    pub fn is_trivial(&self) -> bool {
        self.vertices.len() == 1
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Vertices of the route looked up in `graph`
    pub fn resolve<'g>(&self, graph: &'g BuildingGraph) -> Vec<&'g Vertex> {
        self.vertices
            .iter()
            .filter_map(|&id| graph.vertex(id))
            .collect()
    }
}

/// Shortest path between two named vertices.
///
/// # Errors
///
/// [`Error::VertexNotFound`] for an unknown name, [`Error::NoRoute`] when the
/// destination cannot be reached.
pub fn shortest_path(
    graph: &BuildingGraph,
    source: &str,
    destination: &str,
) -> Result<Route, Error> {
    let start = graph
        .vertex_id(source)
        .ok_or_else(|| Error::VertexNotFound(source.to_string()))?;
    let target = graph
        .vertex_id(destination)
        .ok_or_else(|| Error::VertexNotFound(destination.to_string()))?;

    shortest_path_between(graph, start, target).ok_or_else(|| {
        info!("No route from '{source}' to '{destination}'");
        Error::NoRoute {
            from: source.to_string(),
            to: destination.to_string(),
        }
    })
}

/// Dijkstra's algorithm with early exit and predecessor tracking.
///
/// Outside vertices are only entered when the destination is itself outside.
pub fn shortest_path_between(
    graph: &BuildingGraph,
    start: VertexId,
    target: VertexId,
) -> Option<Route> {
    graph.vertex(start)?;
    let target_is_outside = graph.vertex(target)?.kind() == VertexType::Outside;

    if start == target {
        return Some(Route {
            vertices: vec![start],
            cost: 0.0,
        });
    }

    let estimated_nodes = graph.vertex_count().min(1000);
    let mut distances: HashMap<VertexId, Meters> = HashMap::with_capacity(estimated_nodes);
    let mut predecessors: HashMap<VertexId, VertexId> = HashMap::with_capacity(estimated_nodes);
    let mut heap = BinaryHeap::with_capacity(estimated_nodes / 4);

    heap.push(State {
        cost: 0.0,
        node: start,
    });
    distances.insert(start, 0.0);

    while let Some(State { cost, node }) = heap.pop() {
        if node == target {
            break;
        }

        if distances.get(&node).is_some_and(|&best| cost > best) {
            continue;
        }

        for edge in graph.graph.edges(node) {
            let next = edge.target();
            let entering_outside = graph
                .vertex(next)
                .is_some_and(|v| v.kind() == VertexType::Outside);
            if entering_outside && !target_is_outside {
                continue;
            }

            let next_cost = cost + edge.weight().weight;
            match distances.entry(next) {
                hashbrown::hash_map::Entry::Vacant(entry) => {
                    entry.insert(next_cost);
                    heap.push(State {
                        cost: next_cost,
                        node: next,
                    });
                    predecessors.insert(next, node);
                }
                hashbrown::hash_map::Entry::Occupied(mut entry) => {
                    if next_cost < *entry.get() {
                        *entry.get_mut() = next_cost;
                        heap.push(State {
                            cost: next_cost,
                            node: next,
                        });
                        predecessors.insert(next, node);
                    }
                }
            }
        }
    }

    let cost = *distances.get(&target)?;

    // Follow predecessors backward from target to start
    let mut vertices = vec![target];
    let mut current = target;
    while current != start {
        current = *predecessors.get(&current)?;
        vertices.push(current);
    }
    vertices.reverse();

    debug!(
        "Route of {} vertices, {cost:.1} m, {} vertices settled",
        vertices.len(),
        distances.len()
    );

    Some(Route { vertices, cost })
}
