use rayon::prelude::*;

use super::dijkstra::dijkstra_path_weights;
use crate::{BuildingGraph, Error, Meters, VertexId};

/// Walking distances between every pair of the named vertices.
///
/// `result[i][j]` is the distance from `names[i]` to `names[j]`, `None` when
/// unreachable. Rows are computed in parallel.
///
/// # Errors
///
/// Returns [`Error::VertexNotFound`] for an unknown name
pub fn distance_matrix(
    graph: &BuildingGraph,
    names: &[&str],
) -> Result<Vec<Vec<Option<Meters>>>, Error> {
    let ids = names
        .iter()
        .map(|&name| {
            graph
                .vertex_id(name)
                .ok_or_else(|| Error::VertexNotFound(name.to_string()))
        })
        .collect::<Result<Vec<VertexId>, _>>()?;

    Ok(ids
        .par_iter()
        .map(|&source| {
            let reached = dijkstra_path_weights(graph, source, None, None);
            ids.iter()
                .map(|target| reached.get(target).copied())
                .collect()
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::shortest_path;
    use crate::{Vertex, VertexType};

    #[test]
    fn symmetric_matrix() {
        let mut graph = BuildingGraph::new("test");
        for name in ["a", "b", "c", "d"] {
            graph
                .add_vertex(Vertex::new(name, VertexType::Room, 0.0, 0.0, 0))
                .unwrap();
        }
        graph.add_edge("a", "b", 4.0, "ab").unwrap();
        graph.add_edge("b", "c", 6.0, "bc").unwrap();

        let matrix = distance_matrix(&graph, &["a", "b", "c", "d"]).unwrap();
        assert_eq!(matrix[0], vec![Some(0.0), Some(4.0), Some(10.0), None]);
        assert_eq!(matrix[2][0], Some(10.0));
        assert_eq!(matrix[3], vec![None, None, None, Some(0.0)]);

        assert!(matches!(
            distance_matrix(&graph, &["a", "zz"]),
            Err(Error::VertexNotFound(_))
        ));
    }

    #[test]
    fn agrees_with_shortest_path_around_outside_vertices() {
        let mut graph = BuildingGraph::new("test");
        let vertices = [
            ("room", VertexType::Room),
            ("hall", VertexType::Connection),
            ("yard", VertexType::Outside),
            ("street", VertexType::Outside),
            ("shop", VertexType::Room),
        ];
        for (name, kind) in vertices {
            graph.add_vertex(Vertex::new(name, kind, 0.0, 0.0, 0)).unwrap();
        }
        graph.add_edge("room", "hall", 3.0, "hall").unwrap();
        graph.add_edge("hall", "yard", 2.0, "back door").unwrap();
        graph.add_edge("yard", "street", 5.0, "gate").unwrap();
        graph.add_edge("street", "shop", 1.0, "shop door").unwrap();
        graph.add_edge("room", "shop", 40.0, "tunnel").unwrap();

        let names = ["room", "hall", "yard", "street", "shop"];
        let matrix = distance_matrix(&graph, &names).unwrap();
        for (i, from) in names.iter().enumerate() {
            for (j, to) in names.iter().enumerate() {
                let routed = shortest_path(&graph, from, to).ok().map(|r| r.cost());
                assert_eq!(matrix[i][j], routed, "{from} -> {to}");
            }
        }
        assert_eq!(matrix[0][3], Some(10.0));
        assert_eq!(matrix[0][4], Some(40.0));
    }
}
