use geo::LineString;
use geojson::{Feature, FeatureCollection, Geometry};
use serde_json::{Value as JsonValue, json};

use super::instructions::{Directions, Instruction};
use crate::{BuildingGraph, Error};

impl Directions {
    /// Converts the directions to a `GeoJSON` `FeatureCollection`: one
    /// `LineString` for the simplified path and one `Point` per instruction.
    pub fn to_geojson(&self, graph: &BuildingGraph) -> Result<FeatureCollection, Error> {
        let mut features = Vec::with_capacity(self.instructions().len() + 1);

        let vertices = self
            .path()
            .iter()
            .map(|&id| {
                graph
                    .vertex(id)
                    .ok_or_else(|| Error::InvalidData(format!("unknown vertex {}", id.index())))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let line: LineString<f64> = vertices.iter().map(|v| v.coord()).collect();
        let names: Vec<&str> = vertices.iter().map(|v| v.name()).collect();
        let floors: Vec<i32> = vertices.iter().map(|v| v.floor()).collect();

        features.push(feature(json!({
            "type": "Feature",
            "geometry": Geometry::new((&line).into()),
            "properties": {
                "feature_type": "path",
                "map": graph.name(),
                "vertices": names,
                "floors": floors,
            }
        }))?);

        for (step, instruction) in self.instructions().iter().enumerate() {
            features.push(instruction_feature(graph, step, instruction)?);
        }

        Ok(FeatureCollection {
            features,
            bbox: None,
            foreign_members: None,
        })
    }

    pub fn to_geojson_string(&self, graph: &BuildingGraph) -> Result<String, Error> {
        serde_json::to_string(&self.to_geojson(graph)?)
            .map_err(|e| Error::GeoJsonError(e.to_string()))
    }
}

fn instruction_feature(
    graph: &BuildingGraph,
    step: usize,
    instruction: &Instruction,
) -> Result<Feature, Error> {
    let vertex = graph
        .vertex(instruction.at)
        .ok_or_else(|| Error::InvalidData(format!("unknown vertex {}", instruction.at.index())))?;

    feature(json!({
        "type": "Feature",
        "geometry": Geometry::new((&vertex.point()).into()),
        "properties": {
            "feature_type": "instruction",
            "step": step,
            "vertex": vertex.name(),
            "vertex_type": vertex.kind().as_str(),
            "floor": vertex.floor(),
            "through_door": instruction.through_door,
            "text": instruction.text,
        }
    }))
}

fn feature(value: JsonValue) -> Result<Feature, Error> {
    serde_json::from_value::<Feature>(value).map_err(|e| Error::GeoJsonError(e.to_string()))
}
