use super::*;
use crate::bacon_turn;

/// Like [`Margin`], but steers Free Bacon around swaps: it takes Free Bacon
/// when that lands on exactly half the opponent's score, and declines it
/// when the opponent would end up on exactly double.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwapAware(Margin);

impl SwapAware {
    pub const MARGIN: Score = 8;
    pub const ROLLS: Rolls = 4;

    pub fn new(margin: Score, rolls: Rolls) -> Result<Self, InvalidStrategyOutput> {
        checked(Self(Margin::new(margin, rolls)?))
    }
}

impl Strategy for SwapAware {
    fn rolls(&self, score: Score, opponent: Score) -> Rolls {
        let next = score + bacon_turn(opponent);
        let worth = self.0.rolls(score, opponent) == 0;
        let harmful = next == 2 * opponent;
        let helpful = opponent == 2 * next;
        if (worth && !harmful) || helpful {
            0
        } else {
            self.0.fallback()
        }
    }
}

impl std::fmt::Display for SwapAware {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "swap_aware({}, {})", self.0.margin(), self.0.fallback())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default() -> SwapAware {
        SwapAware::new(SwapAware::MARGIN, SwapAware::ROLLS).unwrap()
    }

    #[test]
    fn takes_beneficial_swap() {
        // bacon of 5 boosts to 7, landing on 20 against 40
        assert_eq!(default().rolls(13, 40), 0);
    }
    #[test]
    fn takes_bacon_above_margin() {
        assert_eq!(default().rolls(10, 9), 0);
    }
    #[test]
    fn declines_harmful_swap() {
        // bacon of 10 lands on 18, double the opponent's 9
        assert_eq!(default().rolls(8, 9), 4);
    }
    #[test]
    fn rolls_below_margin() {
        assert_eq!(default().rolls(10, 35), 4);
    }
    #[test]
    fn agrees_with_margin_off_swaps() {
        let margin = Margin::new(8, 4).unwrap();
        let swap = default();
        for score in 0..100 {
            for opponent in 0..100 {
                let next = score + bacon_turn(opponent);
                if 2 * next != opponent && 2 * opponent != next {
                    assert_eq!(swap.rolls(score, opponent), margin.rolls(score, opponent));
                }
            }
        }
    }
}
