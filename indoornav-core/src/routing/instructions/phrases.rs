//! Phrase bank for walking instructions

use rand::Rng;

use super::TurnDirection;
use crate::Meters;

/// Interchangeable wordings of "turn, then walk"; `{direction}` and
/// `{distance}` are substituted.
pub const WALKING_PHRASES: [&str; 22] = [
    "Turn {direction} and walk {distance}",
    "Make a {direction} turn and continue for {distance}",
    "Go {direction} and keep walking for {distance}",
    "Take a {direction} and head straight for {distance}",
    "Turn to your {direction} and go {distance}",
    "Hang a {direction} and walk about {distance}",
    "Head {direction}, then continue {distance}",
    "Bear {direction} and walk {distance} ahead",
    "Swing {direction} and carry on for {distance}",
    "Turn {direction}, the next stretch is {distance}",
    "Make a {direction} and walk roughly {distance}",
    "Go to the {direction} and continue for {distance}",
    "Turn {direction} here and walk {distance}",
    "At this point turn {direction} and go on for {distance}",
    "Take the {direction} turn and walk {distance}",
    "Veer {direction} and keep going for {distance}",
    "Turn {direction}, then walk straight for {distance}",
    "Head to your {direction} and walk {distance}",
    "Move {direction} and proceed for {distance}",
    "Take a {direction} here and continue {distance}",
    "Turn {direction} and follow the path for {distance}",
    "Make your way {direction} and walk {distance}",
];

/// Pick one wording at random and fill it in
pub fn select_phrase<R: Rng + ?Sized>(direction: TurnDirection, distance_m: u32, rng: &mut R) -> String {
    let template = WALKING_PHRASES[rng.gen_range(0..WALKING_PHRASES.len())];
    render_phrase(template, direction, distance_m)
}

pub fn render_phrase(template: &str, direction: TurnDirection, distance_m: u32) -> String {
    template
        .replace("{direction}", direction.as_str())
        .replace("{distance}", &distance_text(distance_m))
}

/// "1 meter", "15 meters"
pub fn distance_text(distance_m: u32) -> String {
    if distance_m == 1 {
        "1 meter".to_string()
    } else {
        format!("{distance_m} meters")
    }
}

/// Round a walking distance to a granularity people can act on
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn round_distance(raw: Meters) -> u32 {
    let step = match raw {
        d if d < 4.0 => 1.0,
        d if d < 30.0 => 5.0,
        d if d < 100.0 => 10.0,
        _ => 50.0,
    };
    ((raw.max(0.0) / step).round() * step) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn rounding_table() {
        let cases = [
            (0.4, 0),
            (2.6, 3),
            (3.9, 4),
            (4.4, 5),
            (12.0, 10),
            (13.0, 15),
            (29.0, 30),
            (34.0, 30),
            (96.0, 100),
            (124.0, 100),
            (126.0, 150),
        ];
        for (raw, expected) in cases {
            assert_eq!(round_distance(raw), expected, "rounding {raw}");
        }
    }

    #[test]
    fn every_phrase_mentions_direction_and_distance() {
        for template in WALKING_PHRASES {
            let text = render_phrase(template, TurnDirection::Right, 15);
            assert!(text.contains("right"), "{text}");
            assert!(text.contains("15 meters"), "{text}");
            assert!(!text.contains('{'), "{text}");
        }
    }

    #[test]
    fn seeded_selection_is_repeatable() {
        let mut a = StdRng::seed_from_u64(7);
        let mut b = StdRng::seed_from_u64(7);
        for _ in 0..10 {
            assert_eq!(
                select_phrase(TurnDirection::Left, 1, &mut a),
                select_phrase(TurnDirection::Left, 1, &mut b)
            );
        }
        let text = select_phrase(TurnDirection::Left, 1, &mut a);
        assert!(text.contains("left") && text.contains("1 meter"));
    }
}
