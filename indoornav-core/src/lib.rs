//! Indoor wayfinding engine.
//!
//! A building is indexed as a weighted geographic graph of rooms, doors,
//! corridor connections, stairs and elevators. The crate finds shortest
//! walking paths between named locations and turns them into turn-by-turn
//! instructions.

pub mod error;
pub mod geo_math;
pub mod loading;
pub mod model;
pub mod prelude;
pub mod routing;

pub use error::Error;
pub use loading::{
    BuildingSource, InstructionConfig, deserialize, load_building, load_graph, save_graph,
    serialize,
};
pub use model::{BuildingGraph, Edge, SpatialIndex, Vertex, VertexType};
pub use routing::{
    Directions, Route, distance_matrix, shortest_path, simplify_path, to_simple_instructions,
};

/// Vertex handle inside a [`BuildingGraph`]
pub type VertexId = petgraph::stable_graph::NodeIndex;
/// Directed edge handle inside a [`BuildingGraph`]
pub type EdgeId = petgraph::stable_graph::EdgeIndex;
/// Distance in meters
pub type Meters = f64;

/// Mean Earth radius used by the haversine formula, meters
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;
/// Default deviation from a straight line (degrees) below which a path
/// vertex is dropped during simplification
pub const DEFAULT_SIMPLIFY_THRESHOLD_DEG: f64 = 20.0;
/// Walking segments shorter than this are treated as noise
pub const DEFAULT_MIN_SEGMENT_M: Meters = 1.0;
