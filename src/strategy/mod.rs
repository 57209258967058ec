//! Strategies decide how many dice to roll from both players' scores.
//!
//! - [`Strategy`] — the decision contract every player implements
//! - [`check_output`], [`check_strategy`] — exhaustive conformance checks
//! - [`AlwaysRoll`], [`Margin`], [`SwapAware`], [`Composite`] — the library
mod always;
mod composite;
mod contract;
mod margin;
mod swap;

pub use always::*;
pub use composite::*;
pub use contract::*;
pub use margin::*;
pub use swap::*;

use crate::Rolls;
use crate::Score;

/// A decision rule mapping `(score, opponent)` to a number of dice in
/// `0..=MAX_ROLLS`, where 0 takes Free Bacon.
///
/// Strategies are shared read-only across worker threads during Monte Carlo
/// evaluation, hence the `Sync` bound. They may randomize internally, but the
/// validator only checks that every output lands in range.
pub trait Strategy: Sync {
    fn rolls(&self, score: Score, opponent: Score) -> Rolls;
}

impl<F> Strategy for F
where
    F: Fn(Score, Score) -> Rolls + Sync,
{
    fn rolls(&self, score: Score, opponent: Score) -> Rolls {
        self(score, opponent)
    }
}
