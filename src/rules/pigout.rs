use crate::*;

/// Rolls `rolls` dice and scores them under the Pig Out rule.
///
/// Without any 1's the turn scores the sum of the faces. With at least one
/// 1, it scores the number of 1's, capped at `11 - rolls`: the more dice
/// thrown, the smaller the consolation.
pub fn roll_outcome<D>(rolls: Rolls, dice: &mut D) -> Score
where
    D: Dice + ?Sized,
{
    assert!(rolls >= 1, "must roll at least once");
    assert!(rolls <= MAX_ROLLS, "cannot roll more than {} dice", MAX_ROLLS);
    let (ones, sum) = (0..rolls)
        .map(|_| dice.roll())
        .fold((0, 0), |(ones, sum), face| match face {
            1 => (ones + 1, sum),
            _ => (ones, sum + Score::from(face)),
        });
    match ones {
        0 => sum,
        n => Score::min(n, Score::from(MAX_ROLLS + 1 - rolls)),
    }
}
