//! Turn-by-turn instructions for a walking path
//!
//! The path is simplified first, then every remaining decision point becomes
//! one sentence: a turn with the distance to the next point, or a single
//! instruction for a whole run of stairs or elevator vertices.

mod phrases;

use log::{debug, trace};
use rand::Rng;

pub use phrases::{WALKING_PHRASES, distance_text, render_phrase, round_distance, select_phrase};

use super::simplify_path;
use crate::loading::InstructionConfig;
use crate::model::floor_name;
use crate::{BuildingGraph, Error, Vertex, VertexId, VertexType, geo_math};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnDirection {
    Left,
    Right,
}

impl TurnDirection {
    /// Right for angles above 180° or below 0°, left otherwise
    pub fn from_signed_angle(radians: f64) -> Self {
        let degrees = radians.to_degrees();
        if degrees > 180.0 || degrees < 0.0 {
            TurnDirection::Right
        } else {
            TurnDirection::Left
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TurnDirection::Left => "left",
            TurnDirection::Right => "right",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerticalDirection {
    Up,
    Down,
}

impl VerticalDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            VerticalDirection::Up => "up",
            VerticalDirection::Down => "down",
        }
    }
}

/// What the user is asked to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Maneuver {
    /// Source and destination are the same place
    AlreadyThere,
    /// Destination is directly connected to the source
    NextToYou,
    Start {
        distance_m: Option<u32>,
    },
    Turn {
        direction: TurnDirection,
        distance_m: u32,
    },
    /// One instruction for a whole run of stairs or elevator vertices
    Vertical {
        kind: VertexType,
        turn: Option<TurnDirection>,
        direction: VerticalDirection,
        floor: i32,
        then_walk_m: Option<u32>,
    },
    Arrive,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Instruction {
    pub maneuver: Maneuver,
    /// Vertex where the instruction applies
    pub at: VertexId,
    pub through_door: bool,
    pub text: String,
}

/// Simplified path plus the sentences that describe it
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Directions {
    path: Vec<VertexId>,
    instructions: Vec<Instruction>,
}

impl Directions {
    pub fn path(&self) -> &[VertexId] {
        &self.path
    }

    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    pub fn texts(&self) -> Vec<&str> {
        self.instructions.iter().map(|i| i.text.as_str()).collect()
    }

    /// `(simplified path, instruction sentences)`
    pub fn into_parts(self) -> (Vec<VertexId>, Vec<String>) {
        let texts = self.instructions.into_iter().map(|i| i.text).collect();
        (self.path, texts)
    }

    fn push_vertex(&mut self, id: VertexId) {
        if self.path.last() != Some(&id) {
            self.path.push(id);
        }
    }

    fn push(&mut self, maneuver: Maneuver, at: VertexId, through_door: bool, mut text: String) {
        if through_door {
            text.push_str(" through the door");
        }
        trace!("{text}");
        self.instructions.push(Instruction {
            maneuver,
            at,
            through_door,
            text,
        });
    }
}

/// Turn a raw vertex path into simplified directions.
///
/// Wording of walking instructions is drawn from `rng`; pass a seeded
/// generator for repeatable output.
///
/// # Errors
///
/// Returns [`Error::InvalidData`] if the path references a vertex that is
/// not in `graph`
pub fn to_simple_instructions<R: Rng + ?Sized>(
    graph: &BuildingGraph,
    path: &[VertexId],
    config: &InstructionConfig,
    rng: &mut R,
) -> Result<Directions, Error> {
    let mut directions = Directions::default();
    resolve(graph, path)?;

    match path {
        [] => return Ok(directions),
        [only] => {
            let vertex = lookup(graph, *only)?;
            directions.push_vertex(*only);
            directions.push(
                Maneuver::AlreadyThere,
                *only,
                false,
                format!("You are already at {vertex}"),
            );
            return Ok(directions);
        }
        [source, destination] => {
            let vertex = lookup(graph, *destination)?;
            directions.push_vertex(*source);
            directions.push_vertex(*destination);
            directions.push(
                Maneuver::NextToYou,
                *destination,
                false,
                format!("{vertex} is right next to you"),
            );
            return Ok(directions);
        }
        _ => {}
    }

    let ids = simplify_path(graph, path, config.simplify_threshold_deg);
    let vs = resolve(graph, &ids)?;
    let n = vs.len();
    debug!("Simplified path from {} to {n} vertices", path.len());

    // start line
    let first_leg = geo_math::distance(vs[0], vs[1]);
    let distance_m = (first_leg >= config.min_segment_m).then(|| round_distance(first_leg));
    let text = match distance_m {
        Some(d) => format!("Start at {} and walk {}", vs[0], distance_text(d)),
        None => format!("Start at {}", vs[0]),
    };
    directions.push_vertex(ids[0]);
    directions.push(
        Maneuver::Start { distance_m },
        ids[0],
        distance_m.is_some() && vs[1].kind() == VertexType::Door,
        text,
    );

    let mut i = 1;
    while i + 1 < n {
        let (v1, v2, v3) = (vs[i - 1], vs[i], vs[i + 1]);

        let run_start = if v2.kind().is_vertical() {
            Some(i)
        } else if v3.kind().is_vertical() {
            Some(i + 1)
        } else {
            None
        };

        if let Some(start) = run_start {
            let kind = vs[start].kind();
            let mut end = start;
            while end + 1 < n && vs[end + 1].kind() == kind {
                end += 1;
            }

            let exit = vs[end];
            if exit.floor() != v2.floor() {
                let turn = (start > i)
                    .then(|| TurnDirection::from_signed_angle(geo_math::signed_angle(v1, v2, v3)));
                let direction = if exit.floor() > v2.floor() {
                    VerticalDirection::Up
                } else {
                    VerticalDirection::Down
                };
                let after = vs.get(end + 1).copied();
                let then_walk_m = after
                    .map(|next| geo_math::distance(exit, next))
                    .filter(|&d| d >= config.min_segment_m)
                    .map(round_distance);
                let through_door =
                    then_walk_m.is_some() && after.is_some_and(|v| v.kind() == VertexType::Door);

                let text = vertical_text(kind, turn, direction, exit.floor(), then_walk_m);
                directions.push_vertex(ids[i]);
                directions.push_vertex(ids[end]);
                directions.push(
                    Maneuver::Vertical {
                        kind,
                        turn,
                        direction,
                        floor: exit.floor(),
                        then_walk_m,
                    },
                    ids[i],
                    through_door,
                    text,
                );
                i = end + 1;
                continue;
            }
        }

        let leg = geo_math::distance(v2, v3);
        if leg < config.min_segment_m {
            trace!("Skipping {leg:.2} m segment after '{v2}'");
            i += 1;
            continue;
        }

        let direction = TurnDirection::from_signed_angle(geo_math::signed_angle(v1, v2, v3));
        let distance_m = round_distance(leg);
        directions.push_vertex(ids[i]);
        directions.push(
            Maneuver::Turn {
                direction,
                distance_m,
            },
            ids[i],
            v3.kind() == VertexType::Door,
            select_phrase(direction, distance_m, rng),
        );
        i += 1;
    }

    let last = ids[n - 1];
    directions.push_vertex(last);
    directions.push(
        Maneuver::Arrive,
        last,
        false,
        format!("You have arrived at {}", vs[n - 1]),
    );

    Ok(directions)
}

fn vertical_text(
    kind: VertexType,
    turn: Option<TurnDirection>,
    direction: VerticalDirection,
    floor: i32,
    then_walk_m: Option<u32>,
) -> String {
    let means = if kind == VertexType::Elevator {
        "elevator"
    } else {
        "stairs"
    };
    let mut text = match turn {
        Some(turn) => format!("Turn {} and take the {means}", turn.as_str()),
        None => format!("Take the {means}"),
    };
    text.push_str(&format!(
        " {} to the {} floor",
        direction.as_str(),
        floor_name(floor)
    ));
    if let Some(d) = then_walk_m {
        text.push_str(&format!(", then walk {}", distance_text(d)));
    }
    text
}

fn resolve<'g>(graph: &'g BuildingGraph, path: &[VertexId]) -> Result<Vec<&'g Vertex>, Error> {
    path.iter().map(|&id| lookup(graph, id)).collect()
}

fn lookup(graph: &BuildingGraph, id: VertexId) -> Result<&Vertex, Error> {
    graph
        .vertex(id)
        .ok_or_else(|| Error::InvalidData(format!("path references unknown vertex {}", id.index())))
}
