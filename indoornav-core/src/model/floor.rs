/// Human form of a floor number: `0` is "Ground", positive floors use
/// English ordinals, basements count downwards ("1st basement").
pub fn floor_name(floor: i32) -> String {
    match floor {
        0 => "Ground".to_string(),
        f if f > 0 => ordinal(f.unsigned_abs()),
        f => format!("{} basement", ordinal(f.unsigned_abs())),
    }
}

/// `1` -> "1st", `12` -> "12th", `23` -> "23rd"
pub fn ordinal(n: u32) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{n}{suffix}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordinals() {
        let cases = [
            (1, "1st"),
            (2, "2nd"),
            (3, "3rd"),
            (4, "4th"),
            (11, "11th"),
            (12, "12th"),
            (13, "13th"),
            (21, "21st"),
            (102, "102nd"),
            (111, "111th"),
        ];
        for (n, expected) in cases {
            assert_eq!(ordinal(n), expected);
        }
    }

    #[test]
    fn floor_names() {
        assert_eq!(floor_name(0), "Ground");
        assert_eq!(floor_name(3), "3rd");
        assert_eq!(floor_name(-1), "1st basement");
    }
}
