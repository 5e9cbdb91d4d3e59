//! Snapshot codec: a flat, versioned dump of a whole graph.
//!
//! Vertices are stored as an array; edges refer to them by position, so the
//! encoded form has no references to resolve.

use std::io::{Read, Write};

use hashbrown::HashMap;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::model::Passage;
use crate::{BuildingGraph, Error, Meters, Vertex, VertexId};

/// Current snapshot layout version
pub const SNAPSHOT_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphSnapshot {
    pub version: u32,
    pub name: String,
    pub vertices: Vec<Vertex>,
    pub edges: Vec<EdgeRecord>,
}

/// Directed edge between two entries of [`GraphSnapshot::vertices`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub source: u32,
    pub destination: u32,
    pub weight: Meters,
    pub name: String,
    pub spur: bool,
}

impl GraphSnapshot {
    pub fn from_graph(graph: &BuildingGraph) -> Result<Self, Error> {
        let mut positions: HashMap<VertexId, u32> = HashMap::with_capacity(graph.vertex_count());
        let mut vertices = Vec::with_capacity(graph.vertex_count());

        for id in graph.graph.node_indices() {
            let position = u32::try_from(vertices.len())
                .map_err(|_| Error::Snapshot("too many vertices".to_string()))?;
            positions.insert(id, position);
            vertices.push(graph.graph[id].clone());
        }

        let edges = graph
            .graph
            .edge_indices()
            .filter_map(|id| {
                let (s, d) = graph.graph.edge_endpoints(id)?;
                let passage = &graph.graph[id];
                Some(EdgeRecord {
                    source: *positions.get(&s)?,
                    destination: *positions.get(&d)?,
                    weight: passage.weight,
                    name: passage.name.clone(),
                    spur: passage.spur,
                })
            })
            .collect();

        Ok(Self {
            version: SNAPSHOT_VERSION,
            name: graph.name().to_string(),
            vertices,
            edges,
        })
    }

    /// Rebuild the graph, checking that the snapshot describes a valid one
    pub fn into_graph(self) -> Result<BuildingGraph, Error> {
        if self.version != SNAPSHOT_VERSION {
            return Err(Error::Snapshot(format!(
                "unsupported snapshot version {} (expected {SNAPSHOT_VERSION})",
                self.version
            )));
        }

        let mut graph = BuildingGraph::new(self.name);
        let ids = self
            .vertices
            .into_iter()
            .map(|vertex| graph.add_vertex(vertex))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| Error::Snapshot(e.to_string()))?;

        for edge in self.edges {
            let endpoint = |position: u32| {
                ids.get(position as usize).copied().ok_or_else(|| {
                    Error::Snapshot(format!("edge '{}' refers to vertex #{position}", edge.name))
                })
            };
            let source = endpoint(edge.source)?;
            let destination = endpoint(edge.destination)?;
            if !edge.weight.is_finite() || edge.weight < 0.0 {
                return Err(Error::Snapshot(format!(
                    "edge '{}' has invalid weight {}",
                    edge.name, edge.weight
                )));
            }
            graph.insert_directed(
                source,
                destination,
                Passage {
                    weight: edge.weight,
                    name: edge.name,
                    spur: edge.spur,
                },
            );
        }

        graph
            .validate()
            .map_err(|e| Error::Snapshot(e.to_string()))?;
        Ok(graph)
    }
}

/// Encode a graph into bytes
pub fn serialize(graph: &BuildingGraph) -> Result<Vec<u8>, Error> {
    let snapshot = GraphSnapshot::from_graph(graph)?;
    bincode::serialize(&snapshot).map_err(|e| Error::Snapshot(e.to_string()))
}

/// Decode a graph produced by [`serialize`]
pub fn deserialize(bytes: &[u8]) -> Result<BuildingGraph, Error> {
    let snapshot: GraphSnapshot =
        bincode::deserialize(bytes).map_err(|e| Error::Snapshot(e.to_string()))?;
    snapshot.into_graph()
}

/// Write a graph snapshot to a stream
pub fn save_graph<W: Write>(writer: W, graph: &BuildingGraph) -> Result<(), Error> {
    let snapshot = GraphSnapshot::from_graph(graph)?;
    bincode::serialize_into(writer, &snapshot).map_err(|e| Error::Snapshot(e.to_string()))?;
    debug!(
        "Saved '{}' ({} vertices, {} edges)",
        snapshot.name,
        snapshot.vertices.len(),
        snapshot.edges.len()
    );
    Ok(())
}

/// Read a graph snapshot from a stream
pub fn load_graph<R: Read>(reader: R) -> Result<BuildingGraph, Error> {
    let snapshot: GraphSnapshot =
        bincode::deserialize_from(reader).map_err(|e| Error::Snapshot(e.to_string()))?;
    let graph = snapshot.into_graph()?;
    debug!(
        "Loaded '{}' ({} vertices, {} edges)",
        graph.name(),
        graph.vertex_count(),
        graph.edge_count()
    );
    Ok(graph)
}
