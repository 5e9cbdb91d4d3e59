pub use crate::{DEFAULT_MIN_SEGMENT_M, DEFAULT_SIMPLIFY_THRESHOLD_DEG, EARTH_RADIUS_M};

// Re-export key components
pub use crate::loading::{BuildingSource, InstructionConfig, load_building};
pub use crate::loading::{deserialize, load_graph, save_graph, serialize};
pub use crate::model::{BuildingGraph, Edge, SpatialIndex, Vertex, VertexType};
pub use crate::routing::instructions::{
    Instruction, Maneuver, TurnDirection, VerticalDirection, select_phrase,
};
pub use crate::routing::{
    Directions, Route, distance_matrix, shortest_path, simplify_path, to_simple_instructions,
};

// Core types for the building graph
pub use crate::EdgeId;
pub use crate::Meters;
pub use crate::VertexId;
