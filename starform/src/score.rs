//! The fixed 1-to-5 rating scale.

use std::fmt;

/// One of the five selectable rating values.
///
/// The markup contract guarantees radios only ever carry these values, so
/// strict widgets treat anything else as a broken page rather than user
/// input to validate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Score {
    One = 1,
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
}

impl Score {
    /// Every selectable value, lowest first.
    pub const ALL: [Score; 5] = [Score::One, Score::Two, Score::Three, Score::Four, Score::Five];

    /// Parse a form field value into a score.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "1" => Some(Score::One),
            "2" => Some(Score::Two),
            "3" => Some(Score::Three),
            "4" => Some(Score::Four),
            "5" => Some(Score::Five),
            _ => None,
        }
    }

    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u8())
    }
}
