//! This module is responsible for getting building graphs in and out of the
//! engine: importing a building description from CSV and encoding snapshots.

mod building;
mod config;
mod snapshot;

pub use building::load_building;
pub use config::{BuildingSource, InstructionConfig};
pub use snapshot::{GraphSnapshot, SNAPSHOT_VERSION, deserialize, load_graph, save_graph, serialize};
