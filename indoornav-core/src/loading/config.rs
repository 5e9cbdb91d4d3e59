use std::path::PathBuf;

use serde::Deserialize;

use crate::{DEFAULT_MIN_SEGMENT_M, DEFAULT_SIMPLIFY_THRESHOLD_DEG, Meters};

/// Files describing one building
#[derive(Debug, Clone, Deserialize)]
pub struct BuildingSource {
    /// Map name stored in the graph
    pub name: String,
    /// `name,kind,latitude,longitude,floor,image`
    pub vertices: PathBuf,
    /// `source,destination,name[,weight]`; missing weights are measured
    pub edges: PathBuf,
    /// `vertex,edge_name`: places attached to a named corridor
    pub attachments: Option<PathBuf>,
}

/// Tuning of the instruction generator
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct InstructionConfig {
    /// Bends smaller than this (degrees away from straight) are not reported
    pub simplify_threshold_deg: f64,
    /// Walking segments shorter than this are ignored
    pub min_segment_m: Meters,
}

impl Default for InstructionConfig {
    fn default() -> Self {
        Self {
            simplify_threshold_deg: DEFAULT_SIMPLIFY_THRESHOLD_DEG,
            min_segment_m: DEFAULT_MIN_SEGMENT_M,
        }
    }
}
