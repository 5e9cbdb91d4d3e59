//! Geometry helpers over vertex coordinates.
//!
//! Distances are geodesic (haversine). Angles treat latitude/longitude as a
//! planar frame, which is accurate enough at building scale.

use std::f64::consts::PI;

use geo::Coord;

use crate::{EARTH_RADIUS_M, Meters, Vertex, VertexType};

/// Haversine distance between two vertices in meters.
///
/// Anything involving an [`VertexType::Outside`] vertex costs nothing: the
/// outdoors is reachable from every exit.
pub fn distance(a: &Vertex, b: &Vertex) -> Meters {
    if a.kind() == VertexType::Outside || b.kind() == VertexType::Outside {
        return 0.0;
    }
    haversine(a.latitude(), a.longitude(), b.latitude(), b.longitude())
}

/// Haversine distance between two latitude/longitude pairs in degrees
pub fn haversine(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> Meters {
    let phi1 = lat1.to_radians();
    let phi2 = lat2.to_radians();
    let d_phi = (lat2 - lat1).to_radians();
    let d_lambda = (lon2 - lon1).to_radians();

    let h = (d_phi / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (d_lambda / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_M * c
}

/// Unsigned interior angle at `v2` in radians, in `[0, π]`.
///
/// Coincident points have no defined angle; they are reported as a straight
/// line (π) so they never count as a course change.
pub fn angle(v1: &Vertex, v2: &Vertex, v3: &Vertex) -> f64 {
    interior_angle(v1.coord(), v2.coord(), v3.coord())
}

/// Interior angle at `v2` with its sign taken from the cross product of
/// `(v2 - v1)` and `(v3 - v1)`. Negative means a right turn.
pub fn signed_angle(v1: &Vertex, v2: &Vertex, v3: &Vertex) -> f64 {
    let (p1, p2, p3) = (v1.coord(), v2.coord(), v3.coord());
    let magnitude = interior_angle(p1, p2, p3);
    if cross(p2 - p1, p3 - p1) < 0.0 {
        -magnitude
    } else {
        magnitude
    }
}

fn interior_angle(p1: Coord<f64>, p2: Coord<f64>, p3: Coord<f64>) -> f64 {
    // law of cosines on squared planar lengths
    let a2 = squared_len(p1 - p2);
    let b2 = squared_len(p3 - p2);
    let c2 = squared_len(p3 - p1);

    if a2 == 0.0 || b2 == 0.0 {
        return PI;
    }

    let cos = (a2 + b2 - c2) / (2.0 * a2.sqrt() * b2.sqrt());
    cos.clamp(-1.0, 1.0).acos()
}

fn squared_len(c: Coord<f64>) -> f64 {
    c.x * c.x + c.y * c.y
}

fn cross(a: Coord<f64>, b: Coord<f64>) -> f64 {
    a.x * b.y - a.y * b.x
}

#[cfg(test)]
mod tests {
    use super::*;

    fn room(name: &str, lat: f64, lon: f64) -> Vertex {
        Vertex::new(name, VertexType::Room, lat, lon, 0)
    }

    #[test]
    fn one_degree_of_latitude() {
        let a = room("a", 0.0, 0.0);
        let b = room("b", 1.0, 0.0);
        let expected = EARTH_RADIUS_M * PI / 180.0;
        assert!((distance(&a, &b) - expected).abs() < 1e-6);
        assert!((distance(&b, &a) - expected).abs() < 1e-6);
    }

    #[test]
    fn outside_is_free() {
        let outside = Vertex::new("outside", VertexType::Outside, 10.0, 10.0, 0);
        let far = room("far", -40.0, 120.0);
        assert_eq!(distance(&outside, &far), 0.0);
        assert_eq!(distance(&far, &outside), 0.0);
    }

    #[test]
    fn right_angle_and_straight_line() {
        let a = room("a", 0.0, 0.0);
        let b = room("b", 1.0, 0.0);
        let c = room("c", 1.0, 1.0);
        let d = room("d", 2.0, 0.0);

        assert!((angle(&a, &b, &c) - PI / 2.0).abs() < 1e-9);
        assert!((angle(&a, &b, &d) - PI).abs() < 1e-9);
    }

    #[test]
    fn sign_follows_turn_side() {
        // heading north along the meridian
        let a = room("a", 0.0, 0.0);
        let b = room("b", 1.0, 0.0);
        let east = room("east", 1.0, 1.0);
        let west = room("west", 1.0, -1.0);

        assert!(signed_angle(&a, &b, &east) < 0.0);
        assert!(signed_angle(&a, &b, &west) > 0.0);
        assert!((signed_angle(&a, &b, &east).abs() - angle(&a, &b, &east)).abs() < 1e-12);
    }

    #[test]
    fn coincident_points_read_as_straight() {
        let a = room("a", 0.0, 0.0);
        let b = room("b", 1.0, 0.0);
        let b2 = room("b2", 1.0, 0.0);
        assert_eq!(angle(&a, &b, &b2), PI);
    }
}
