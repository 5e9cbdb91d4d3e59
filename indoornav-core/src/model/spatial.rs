//! Nearest-vertex lookup for snapping a raw position onto the map

use rstar::RTree;
use rstar::primitives::GeomWithData;

use crate::{BuildingGraph, Meters, Vertex, VertexId, geo_math};

type IndexedVertex = GeomWithData<[f64; 2], VertexId>;

/// R-tree over vertex positions (x = longitude, y = latitude).
///
/// Built from a snapshot of the graph; rebuild it after mutating the graph.
#[derive(Debug, Clone)]
pub struct SpatialIndex {
    tree: RTree<IndexedVertex>,
}

impl SpatialIndex {
    pub fn new(graph: &BuildingGraph) -> Self {
        let points = graph
            .graph
            .node_indices()
            .filter_map(|id| {
                graph
                    .vertex(id)
                    .map(|v| GeomWithData::new([v.longitude(), v.latitude()], id))
            })
            .collect();
        Self {
            tree: RTree::bulk_load(points),
        }
    }

    pub fn len(&self) -> usize {
        self.tree.size()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.size() == 0
    }

    /// Closest vertex to a position, optionally restricted to one floor and
    /// to destinations users can search for.
    ///
    /// Returns the vertex with its haversine distance from the position.
    pub fn nearest<'g>(
        &self,
        graph: &'g BuildingGraph,
        latitude: f64,
        longitude: f64,
        floor: Option<i32>,
        searchable_only: bool,
    ) -> Option<(&'g Vertex, Meters)> {
        self.tree
            .nearest_neighbor_iter(&[longitude, latitude])
            .filter_map(|entry| graph.vertex(entry.data))
            .find(|v| {
                floor.is_none_or(|f| v.floor() == f)
                    && (!searchable_only || v.kind().is_searchable())
            })
            .map(|v| {
                let distance =
                    geo_math::haversine(latitude, longitude, v.latitude(), v.longitude());
                (v, distance)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::VertexType;

    fn graph() -> BuildingGraph {
        let mut graph = BuildingGraph::new("test");
        let vertices = [
            Vertex::new("Lobby", VertexType::Room, 0.0, 0.0, 0),
            Vertex::new("hall-1", VertexType::Connection, 0.0, 0.0005, 0),
            Vertex::new("Library", VertexType::Room, 0.0, 0.001, 0),
            Vertex::new("Study", VertexType::Room, 0.0, 0.0005, 1),
        ];
        for v in vertices {
            graph.add_vertex(v).unwrap();
        }
        graph
    }

    #[test]
    fn snaps_to_closest() {
        let graph = graph();
        let index = SpatialIndex::new(&graph);
        assert_eq!(index.len(), 4);

        let (vertex, distance) = index.nearest(&graph, 0.0, 0.0009, Some(0), false).unwrap();
        assert_eq!(vertex.name(), "Library");
        assert!(distance > 10.0 && distance < 12.0);
    }

    #[test]
    fn honours_floor_and_searchable_filters() {
        let graph = graph();
        let index = SpatialIndex::new(&graph);

        let (vertex, _) = index.nearest(&graph, 0.0, 0.0005, Some(1), false).unwrap();
        assert_eq!(vertex.name(), "Study");

        let (vertex, _) = index.nearest(&graph, 0.0, 0.00045, Some(0), true).unwrap();
        assert_eq!(vertex.name(), "Lobby");

        assert!(index.nearest(&graph, 0.0, 0.0, Some(7), false).is_none());
    }
}
