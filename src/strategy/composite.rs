use super::*;

/// Dispatches on the score situation:
///
/// - near the goal (above 88), a tight margin with fewer dice
/// - well ahead (lead above 9) or close (80+), a swap-aware margin of 8
/// - otherwise, a conservative swap-aware margin of 11
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Composite {
    closing: Margin,
    leading: SwapAware,
    trailing: SwapAware,
}

impl Composite {
    pub fn new() -> Result<Self, InvalidStrategyOutput> {
        checked(Self {
            closing: Margin::new(5, 3)?,
            leading: SwapAware::new(8, 5)?,
            trailing: SwapAware::new(11, 5)?,
        })
    }
}

impl Strategy for Composite {
    fn rolls(&self, score: Score, opponent: Score) -> Rolls {
        if score > 88 {
            self.closing.rolls(score, opponent)
        } else if score > opponent + 9 || score >= 80 {
            self.leading.rolls(score, opponent)
        } else {
            self.trailing.rolls(score, opponent)
        }
    }
}

impl std::fmt::Display for Composite {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "composite")
    }
}
