//! Graph edges (corridor, door and stair segments)

use serde::{Deserialize, Serialize};

use crate::{EdgeId, Meters, Vertex};

/// Payload stored on every directed edge.
///
/// Segments that belong to the same physical corridor or stair run share a
/// name, which is how a new place is attached to "the east corridor".
/// Spurs link an attached place to the corridor it was split into; they are
/// not corridors themselves and never show up as edge names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Passage {
    pub weight: Meters,
    pub name: String,
    #[serde(default)]
    pub spur: bool,
}

impl Passage {
    pub fn new(weight: Meters, name: impl Into<String>) -> Self {
        Self {
            weight,
            name: name.into(),
            spur: false,
        }
    }

    pub fn spur(weight: Meters, name: impl Into<String>) -> Self {
        Self {
            spur: true,
            ..Self::new(weight, name)
        }
    }
}

/// Borrowed view of one directed edge
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge<'a> {
    pub id: EdgeId,
    pub source: &'a Vertex,
    pub destination: &'a Vertex,
    pub weight: Meters,
    pub name: &'a str,
    pub spur: bool,
}
