use std::collections::BinaryHeap;

use hashbrown::HashMap;
use petgraph::visit::EdgeRef;

use super::state::State;
use crate::{BuildingGraph, Meters, VertexId, VertexType};

/// Dijkstra's algorithm for shortest walking distances from `start`.
/// Returns a map of reached vertices to their distance in meters.
///
/// Outside vertices follow the same rule as [`super::shortest_path_between`]:
/// a route may only pass through them when it ends outside. Without a
/// `target`, indoor vertices are reached without crossing outside and
/// outside vertices by any route.
pub fn dijkstra_path_weights(
    graph: &BuildingGraph,
    start: VertexId,
    target: Option<VertexId>,
    max_cost: Option<Meters>,
) -> HashMap<VertexId, Meters> {
    if let Some(target) = target {
        return search(graph, start, Some(target), max_cost, is_outside(graph, target));
    }

    let mut distances = search(graph, start, None, max_cost, false);
    if graph.get_all_vertices().any(|v| v.kind() == VertexType::Outside) {
        let open = search(graph, start, None, max_cost, true);
        distances.extend(open.into_iter().filter(|&(id, _)| is_outside(graph, id)));
    }
    distances
}

fn is_outside(graph: &BuildingGraph, id: VertexId) -> bool {
    graph
        .vertex(id)
        .is_some_and(|v| v.kind() == VertexType::Outside)
}

fn search(
    graph: &BuildingGraph,
    start: VertexId,
    target: Option<VertexId>,
    max_cost: Option<Meters>,
    through_outside: bool,
) -> HashMap<VertexId, Meters> {
    let mut distances: HashMap<VertexId, Meters> = HashMap::new();
    let mut heap = BinaryHeap::new();

    // Start node has distance 0
    heap.push(State {
        cost: 0.0,
        node: start,
    });
    distances.insert(start, 0.0);

    while let Some(State { cost, node }) = heap.pop() {
        // Check if we've reached the target
        if target == Some(node) {
            break;
        }

        // Skip if we've found a better path
        if distances.get(&node).is_some_and(|&best| cost > best) {
            continue;
        }

        // Check max cost constraint
        if max_cost.is_some_and(|max| cost > max) {
            continue;
        }

        // Examine neighbors
        for edge in graph.graph.edges(node) {
            let next = edge.target();
            if !through_outside && is_outside(graph, next) {
                continue;
            }
            let next_cost = cost + edge.weight().weight;

            // Add or update distance if better using Entry API
            match distances.entry(next) {
                hashbrown::hash_map::Entry::Vacant(entry) => {
                    entry.insert(next_cost);
                    heap.push(State {
                        cost: next_cost,
                        node: next,
                    });
                }
                hashbrown::hash_map::Entry::Occupied(mut entry) => {
                    if next_cost < *entry.get() {
                        *entry.get_mut() = next_cost;
                        heap.push(State {
                            cost: next_cost,
                            node: next,
                        });
                    }
                }
            }
        }
    }

    if let Some(max) = max_cost {
        distances.retain(|_, cost| *cost <= max);
    }

    distances
}
