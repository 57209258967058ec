use super::*;
use crate::bacon_turn;

/// Takes Free Bacon whenever it is worth at least `margin` points,
/// otherwise rolls a fixed number of dice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Margin {
    margin: Score,
    rolls: Rolls,
}

impl Margin {
    pub const MARGIN: Score = 8;
    pub const ROLLS: Rolls = 4;

    pub fn new(margin: Score, rolls: Rolls) -> Result<Self, InvalidStrategyOutput> {
        checked(Self { margin, rolls })
    }
    pub fn margin(&self) -> Score {
        self.margin
    }
    pub fn fallback(&self) -> Rolls {
        self.rolls
    }
}

impl Strategy for Margin {
    fn rolls(&self, _: Score, opponent: Score) -> Rolls {
        if bacon_turn(opponent) >= self.margin {
            0
        } else {
            self.rolls
        }
    }
}

impl std::fmt::Display for Margin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "margin({}, {})", self.margin, self.rolls)
    }
}
