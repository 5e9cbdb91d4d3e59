//! Path search and everything built on top of a found path

pub mod dijkstra;
pub mod instructions;
pub mod matrix;
pub mod simplify;
mod to_geojson;

pub use dijkstra::{Route, dijkstra_path_weights, shortest_path, shortest_path_between};
pub use instructions::{Directions, Instruction, Maneuver, to_simple_instructions};
pub use matrix::distance_matrix;
pub use simplify::simplify_path;
