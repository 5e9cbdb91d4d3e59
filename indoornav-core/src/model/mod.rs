//! Data model of an indoor navigation graph
//!
//! Contains vertices, edges and the graph store that owns them.

pub mod edge;
pub mod floor;
pub mod graph;
pub mod spatial;
pub mod vertex;

pub use edge::{Edge, Passage};
pub use floor::floor_name;
pub use graph::BuildingGraph;
pub use spatial::SpatialIndex;
pub use vertex::{Vertex, VertexType};
