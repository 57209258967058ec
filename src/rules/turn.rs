use crate::*;

/// Points scored for one turn.
///
/// Zero rolls take Free Bacon; otherwise the dice are thrown under Pig Out.
/// Either way a prime result is boosted.
pub fn take_turn<D>(rolls: Rolls, opponent: Score, dice: &mut D) -> Score
where
    D: Dice + ?Sized,
{
    assert!(rolls <= MAX_ROLLS, "cannot roll more than {} dice", MAX_ROLLS);
    assert!(opponent < SCORE_CEILING, "the game should be over");
    match rolls {
        0 => bacon_turn(opponent),
        n => boost(roll_outcome(n, dice)),
    }
}

/// The zero-roll turn score. Needs no dice, so strategies can peek at it.
pub fn bacon_turn(opponent: Score) -> Score {
    boost(free_bacon(opponent))
}
