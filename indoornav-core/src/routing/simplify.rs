use itertools::Itertools;

use crate::{BuildingGraph, VertexId, geo_math};

/// Drop path vertices that are not a real course change.
///
/// The first and last vertex always stay. An interior vertex is kept if the
/// path bends there by at least `threshold_deg` away from a straight line, or
/// if the floor changes on either side of it.
pub fn simplify_path(graph: &BuildingGraph, path: &[VertexId], threshold_deg: f64) -> Vec<VertexId> {
    if path.len() < 3 {
        return path.to_vec();
    }

    let mut simplified = Vec::with_capacity(path.len());
    simplified.push(path[0]);

    for (&prev, &current, &next) in path.iter().tuple_windows() {
        let (Some(a), Some(b), Some(c)) = (graph.vertex(prev), graph.vertex(current), graph.vertex(next))
        else {
            continue;
        };

        let changes_floor = a.floor() != b.floor() || b.floor() != c.floor();
        let deviation = (geo_math::angle(a, b, c).to_degrees() - 180.0).abs();
        if changes_floor || deviation >= threshold_deg {
            simplified.push(current);
        }
    }

    simplified.push(path[path.len() - 1]);
    simplified
}
