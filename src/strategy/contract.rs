use super::*;
use crate::GOAL;
use crate::MAX_ROLLS;
use crate::SCORE_CEILING;

/// A strategy chose a number of dice outside `0..=MAX_ROLLS`.
///
/// Carries the arguments of the offending call so the failure can be
/// reproduced directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("strategy({score}, {opponent}) returned {output} (invalid number of rolls)")]
pub struct InvalidStrategyOutput {
    pub score: Score,
    pub opponent: Score,
    pub output: Rolls,
}

/// Checks a single strategy decision.
pub fn check_output(score: Score, opponent: Score, output: Rolls) -> Result<(), InvalidStrategyOutput> {
    if output <= MAX_ROLLS {
        Ok(())
    } else {
        Err(InvalidStrategyOutput {
            score,
            opponent,
            output,
        })
    }
}

/// Calls `strategy` on every own score in `0..max(goal, 100)` crossed with
/// every opponent score in `0..100`, failing on the first bad decision.
pub fn check_strategy<S>(strategy: &S, goal: Score) -> Result<(), InvalidStrategyOutput>
where
    S: Strategy + ?Sized,
{
    let scores = 0..Score::max(goal, SCORE_CEILING);
    scores
        .flat_map(|score| (0..SCORE_CEILING).map(move |opponent| (score, opponent)))
        .try_for_each(|(score, opponent)| check_output(score, opponent, strategy.rolls(score, opponent)))
}

/// Library strategies validate themselves on construction.
pub(crate) fn checked<S>(strategy: S) -> Result<S, InvalidStrategyOutput>
where
    S: Strategy,
{
    check_strategy(&strategy, GOAL).map(|_| strategy)
}
