// src/extract/markers.rs

use crate::core::shape;

/// Column markers, in sheet order. Each one is a literal header token the
/// recognizer reads off the image; the same set repeats once per team block.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Marker {
    Player,
    Points,
    Rebounds,
    Assists,
    Steals,
    Blocks,
    Fouls,
    Turnovers,
    FieldGoals,
    ThreePointers,
    FreeThrows,
}

pub const MARKERS: [Marker; 11] = [
    Marker::Player,
    Marker::Points,
    Marker::Rebounds,
    Marker::Assists,
    Marker::Steals,
    Marker::Blocks,
    Marker::Fouls,
    Marker::Turnovers,
    Marker::FieldGoals,
    Marker::ThreePointers,
    Marker::FreeThrows,
];

pub const MARKER_COUNT: usize = MARKERS.len();

/// What a column's value tokens look like.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shape {
    Name,
    Count,
    Fraction,
}

impl Marker {
    pub fn label(self) -> &'static str {
        match self {
            Marker::Player => "PLAYER",
            Marker::Points => "PTS",
            Marker::Rebounds => "REB",
            Marker::Assists => "AST",
            Marker::Steals => "STL",
            Marker::Blocks => "BLK",
            Marker::Fouls => "PF",
            Marker::Turnovers => "TO",
            Marker::FieldGoals => "FG",
            Marker::ThreePointers => "3PT",
            Marker::FreeThrows => "FT",
        }
    }

    pub fn shape(self) -> Shape {
        match self {
            Marker::Player => Shape::Name,
            Marker::FieldGoals | Marker::ThreePointers | Marker::FreeThrows => Shape::Fraction,
            _ => Shape::Count,
        }
    }

    /// Exact-match lookup; header tokens get no fuzziness.
    pub fn from_token(token: &str) -> Option<Marker> {
        MARKERS.iter().copied().find(|m| m.label() == token)
    }

    /// Apply this column's shape filter to one span token. `Some` keeps the
    /// (possibly noise-stripped) token, `None` drops it.
    pub fn clean<'t>(self, token: &'t str) -> Option<&'t str> {
        match self.shape() {
            Shape::Count => shape::is_count(token).then_some(token),
            Shape::Fraction => shape::is_fraction_like(token).then_some(token),
            Shape::Name => shape::clean_name(token),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_round_trip_through_lookup() {
        for m in MARKERS {
            assert_eq!(Marker::from_token(m.label()), Some(m));
        }
    }

    #[test]
    fn lookup_is_exact_match_only() {
        assert_eq!(Marker::from_token("pts"), None);
        assert_eq!(Marker::from_token("PTS."), None);
        assert_eq!(Marker::from_token(""), None);
    }

    #[test]
    fn clean_dispatches_on_shape() {
        assert_eq!(Marker::Points.clean("17"), Some("17"));
        assert_eq!(Marker::Points.clean("17a"), None);
        assert_eq!(Marker::FieldGoals.clean("6/11"), Some("6/11"));
        assert_eq!(Marker::FieldGoals.clean("6-11"), Some("6-11"));
        assert_eq!(Marker::FieldGoals.clean("noise"), None);
        assert_eq!(Marker::Player.clean("•Watanabe"), Some("Watanabe"));
        assert_eq!(Marker::Player.clean("##"), None);
    }
}
