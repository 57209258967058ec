use crate::*;
use rayon::prelude::*;

/// Plays one game from (0, 0) with `first` moving first. The second player
/// takes ties, although the termination rule never produces one.
pub fn winner<A, B>(first: &A, second: &B, cup: &mut Cup) -> Result<Player, InvalidStrategyOutput>
where
    A: Strategy + ?Sized,
    B: Strategy + ?Sized,
{
    play(first, second, cup).map(|board| board.winner())
}

/// Fraction of `samples` games that `first` wins against `second`, with
/// games spread over rayon's pool. Game `i` uses a cup seeded with
/// `seed ^ i`.
pub fn first_win_rate<A, B>(
    first: &A,
    second: &B,
    samples: usize,
    seed: u64,
) -> Result<Probability, InvalidStrategyOutput>
where
    A: Strategy + ?Sized,
    B: Strategy + ?Sized,
{
    assert!(samples > 0, "cannot average zero samples");
    (0..samples)
        .into_par_iter()
        .map(|i| Cup::seeded(seed ^ i as u64))
        .map(|ref mut cup| winner(first, second, cup))
        .map(|winner| winner.map(usize::from))
        .try_reduce(|| 0, |a, b| Ok(a + b))
        .map(|p1| 1. - p1 as Probability / samples as Probability)
}

/// Win rate of `strategy` against `baseline`, averaged over moving first and
/// moving second to cancel out first-move advantage. The second pass draws
/// from `!seed` so the two passes see different dice.
pub fn win_rate<S, B>(
    strategy: &S,
    baseline: &B,
    samples: usize,
    seed: u64,
) -> Result<Probability, InvalidStrategyOutput>
where
    S: Strategy + ?Sized,
    B: Strategy + ?Sized,
{
    let first = first_win_rate(strategy, baseline, samples, seed)?;
    let second = 1. - first_win_rate(baseline, strategy, samples, !seed)?;
    log::debug!("[winrate] {:.4} moving first, {:.4} moving second", first, second);
    Ok((first + second) / 2.)
}
