//! Graph vertices - rooms, doors, corridor connections and vertical links

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use geo::{Coord, Point};
use serde::{Deserialize, Serialize};

use crate::Error;

/// Kind of place a vertex stands for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VertexType {
    Room,
    /// Synthetic routing node, e.g. a point on a corridor
    Connection,
    Door,
    Stair,
    Elevator,
    /// Anywhere outdoors. Distance to and from it is always zero.
    Outside,
}

impl VertexType {
    /// Whether users can pick this vertex as a destination
    pub fn is_searchable(self) -> bool {
        !matches!(
            self,
            VertexType::Connection | VertexType::Stair | VertexType::Elevator
        )
    }

    /// Stairs and elevators move between floors
    pub fn is_vertical(self) -> bool {
        matches!(self, VertexType::Stair | VertexType::Elevator)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            VertexType::Room => "room",
            VertexType::Connection => "connection",
            VertexType::Door => "door",
            VertexType::Stair => "stair",
            VertexType::Elevator => "elevator",
            VertexType::Outside => "outside",
        }
    }
}

impl fmt::Display for VertexType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VertexType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "room" => Ok(VertexType::Room),
            "connection" => Ok(VertexType::Connection),
            "door" => Ok(VertexType::Door),
            "stair" | "stairs" => Ok(VertexType::Stair),
            "elevator" => Ok(VertexType::Elevator),
            "outside" => Ok(VertexType::Outside),
            other => Err(Error::InvalidData(format!("unknown vertex type '{other}'"))),
        }
    }
}

/// A named place in the building.
///
/// Identity is the name: equality and hashing ignore every other field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vertex {
    name: String,
    kind: VertexType,
    latitude: f64,
    longitude: f64,
    /// 0 is the ground floor
    floor: i32,
    image: Option<String>,
}

impl Vertex {
    pub fn new(
        name: impl Into<String>,
        kind: VertexType,
        latitude: f64,
        longitude: f64,
        floor: i32,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            latitude,
            longitude,
            floor,
            image: None,
        }
    }

    /// Attach a reference to a photo of the place
    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> VertexType {
        self.kind
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    pub fn floor(&self) -> i32 {
        self.floor
    }

    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }

    /// Planar position, x = longitude, y = latitude
    pub fn coord(&self) -> Coord<f64> {
        Coord {
            x: self.longitude,
            y: self.latitude,
        }
    }

    pub fn point(&self) -> Point<f64> {
        Point::new(self.longitude, self.latitude)
    }

    pub fn set_kind(&mut self, kind: VertexType) {
        self.kind = kind;
    }

    pub fn set_location(&mut self, latitude: f64, longitude: f64) {
        self.latitude = latitude;
        self.longitude = longitude;
    }

    pub fn set_floor(&mut self, floor: i32) {
        self.floor = floor;
    }

    pub fn set_image(&mut self, image: Option<String>) {
        self.image = image;
    }

    /// Only the graph may rename a stored vertex, it has to re-key its index
    pub(crate) fn set_name(&mut self, name: String) {
        self.name = name;
    }
}

impl PartialEq for Vertex {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Vertex {}

impl Hash for Vertex {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hashbrown::HashSet;

    #[test]
    fn identity_is_the_name() {
        let a = Vertex::new("Lab 101", VertexType::Room, 1.0, 2.0, 1);
        let b = Vertex::new("Lab 101", VertexType::Door, 5.0, 6.0, 3).with_image("lab.jpg");
        assert_eq!(a, b);

        let set: HashSet<Vertex> = [a, b].into_iter().collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn parses_vertex_types() {
        assert_eq!("Stairs".parse::<VertexType>().unwrap(), VertexType::Stair);
        assert_eq!(" outside ".parse::<VertexType>().unwrap(), VertexType::Outside);
        assert!("lift".parse::<VertexType>().is_err());
    }

    #[test]
    fn searchable_kinds() {
        assert!(VertexType::Room.is_searchable());
        assert!(VertexType::Door.is_searchable());
        assert!(VertexType::Outside.is_searchable());
        assert!(!VertexType::Connection.is_searchable());
        assert!(!VertexType::Stair.is_searchable());
        assert!(!VertexType::Elevator.is_searchable());
    }
}
