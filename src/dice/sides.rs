use crate::Face;
use crate::Score;

/// Which die is in play for a turn.
///
/// Hog Wild: four-sided dice replace the usual six-sided ones whenever the
/// two scores sum to a multiple of seven.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Sides {
    Four,
    Six,
}

impl Sides {
    /// Number of faces on this die.
    pub const fn faces(&self) -> Face {
        match self {
            Self::Four => 4,
            Self::Six => 6,
        }
    }
    /// Picks the die for a turn from the pre-turn scores of both players.
    /// Both scores being multiples of seven is subsumed by the sum test.
    pub fn select(score: Score, opponent: Score) -> Self {
        if (score + opponent) % 7 == 0 {
            Self::Four
        } else {
            Self::Six
        }
    }
}

impl std::fmt::Display for Sides {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Four => write!(f, "four-sided"),
            Self::Six => write!(f, "six-sided"),
        }
    }
}
