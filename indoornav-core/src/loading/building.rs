use std::fs::File;
use std::path::Path;

use log::{info, warn};
use serde::Deserialize;

use super::config::BuildingSource;
use crate::{BuildingGraph, Error, Vertex, VertexType};

#[derive(Debug, Deserialize)]
struct VertexRow {
    name: String,
    #[serde(deserialize_with = "deserialize_vertex_type")]
    kind: VertexType,
    latitude: f64,
    longitude: f64,
    floor: i32,
    #[serde(default)]
    image: Option<String>,
}

#[derive(Debug, Deserialize)]
struct EdgeRow {
    source: String,
    destination: String,
    name: String,
    #[serde(default)]
    weight: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct AttachmentRow {
    vertex: String,
    edge_name: String,
}

/// Build a graph from a CSV building description
///
/// # Errors
///
/// Returns an error if a file is missing or malformed, or if a row refers
/// to an unknown or duplicate vertex
pub fn load_building(source: &BuildingSource) -> Result<BuildingGraph, Error> {
    validate_source(source)?;

    info!("Loading building '{}'", source.name);
    let mut graph = BuildingGraph::new(source.name.clone());

    for row in read_rows::<VertexRow>(&source.vertices)? {
        let mut vertex = Vertex::new(row.name, row.kind, row.latitude, row.longitude, row.floor);
        if let Some(image) = row.image.filter(|image| !image.is_empty()) {
            vertex = vertex.with_image(image);
        }
        graph.add_vertex(vertex)?;
    }

    for row in read_rows::<EdgeRow>(&source.edges)? {
        match row.weight {
            Some(weight) => graph.add_edge(&row.source, &row.destination, weight, row.name)?,
            None => {
                graph.add_measured_edge(&row.source, &row.destination, row.name)?;
            }
        }
    }

    if let Some(path) = &source.attachments {
        for row in read_rows::<AttachmentRow>(path)? {
            if graph
                .connect_vertex_to_edge_by_name(&row.vertex, &row.edge_name)?
                .is_none()
            {
                warn!(
                    "'{}' not attached: no edge named '{}'",
                    row.vertex, row.edge_name
                );
            }
        }
    }

    info!(
        "Building '{}' loaded: {} vertices, {} edges",
        graph.name(),
        graph.vertex_count(),
        graph.edge_count() / 2
    );
    Ok(graph)
}

fn validate_source(source: &BuildingSource) -> Result<(), Error> {
    let files = [Some(&source.vertices), Some(&source.edges), source.attachments.as_ref()];
    for path in files.into_iter().flatten() {
        if !path.exists() {
            return Err(Error::IoError(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("Building file not found: {}", path.display()),
            )));
        }
    }
    Ok(())
}

fn read_rows<T>(path: &Path) -> Result<Vec<T>, Error>
where
    T: for<'de> serde::Deserialize<'de>,
{
    let file = File::open(path).map_err(|e| {
        std::io::Error::new(
            e.kind(),
            format!("Failed to open file '{}': {}", path.display(), e),
        )
    })?;
    csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(file)
        .deserialize()
        .collect::<Result<Vec<T>, _>>()
        .map_err(Error::from)
}

fn deserialize_vertex_type<'de, D>(deserializer: D) -> Result<VertexType, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let kind = String::deserialize(deserializer)?;
    kind.parse().map_err(serde::de::Error::custom)
}
