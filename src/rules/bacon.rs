use crate::*;

/// Points for rolling zero dice: one more than the larger digit of the
/// opponent's score.
///
/// Single-digit scores count as their own larger digit, so an opponent at
/// 0 yields 1 and an opponent at 9 yields 10.
pub fn free_bacon(opponent: Score) -> Score {
    assert!(opponent < SCORE_CEILING, "the game should be over");
    match opponent {
        0 => 1,
        1..=9 => opponent + 1,
        _ => Score::max(opponent / 10, opponent % 10) + 1,
    }
}
