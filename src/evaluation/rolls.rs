use crate::*;
use rayon::prelude::*;

/// The number of dice in `1..=MAX_ROLLS` with the highest mean
/// [`roll_outcome`] over `samples` trials against `dice`.
///
/// Only a strict improvement replaces the incumbent, so ties go to the
/// fewest dice.
pub fn best_rolls<D>(dice: &mut D, samples: usize) -> Rolls
where
    D: Dice + ?Sized,
{
    let mut best = (1, Utility::MIN);
    for rolls in 1..=MAX_ROLLS {
        let mean = averaged(|n: Rolls| Utility::from(roll_outcome(n, dice)), samples)(rolls);
        log::debug!("[rolls] {:>2} dice average {:.3}", rolls, mean);
        if mean > best.1 {
            best = (rolls, mean);
        }
    }
    best.0
}

/// Expected [`roll_outcome`] of `rolls` fair dice, sampled in parallel.
///
/// Trial `i` throws a die seeded with `seed ^ i`, so the estimate depends
/// only on `seed` and not on how rayon schedules the trials.
pub fn mean_turn_score(rolls: Rolls, sides: Sides, samples: usize, seed: u64) -> Utility {
    assert!(samples > 0, "cannot average zero samples");
    (0..samples)
        .into_par_iter()
        .map(|i| Fair::seeded(sides.faces(), seed ^ i as u64))
        .map(|ref mut dice| Utility::from(roll_outcome(rolls, dice)))
        .sum::<Utility>()
        / samples as Utility
}

/// [`best_rolls`] over fair dice, with each roll count sampled in parallel.
pub fn par_best_rolls(sides: Sides, samples: usize, seed: u64) -> Rolls {
    (1..=MAX_ROLLS)
        .map(|rolls| (rolls, mean_turn_score(rolls, sides, samples, seed)))
        .inspect(|(rolls, mean)| log::debug!("[rolls] {:>2} {} dice average {:.3}", rolls, sides, mean))
        .fold((1, Utility::MIN), |best, next| if next.1 > best.1 { next } else { best })
        .0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constant_threes_roll_everything() {
        assert_eq!(best_rolls(&mut Rigged::new([3]), SAMPLES), 10);
    }
    #[test]
    fn ties_keep_fewest_dice() {
        // all ones: five and six dice both score 5
        assert_eq!(best_rolls(&mut Rigged::new([1]), 10), 5);
    }
    #[test]
    fn consumes_dice_sequentially() {
        let mut rolled = 0usize;
        let ref mut counting = || -> Face {
            rolled += 1;
            4
        };
        best_rolls(counting, 3);
        assert_eq!(rolled, 3 * (1..=10).sum::<usize>());
    }
    #[test]
    fn fair_expectations() {
        assert!((mean_turn_score(1, Sides::Six, 100_000, SEED) - 3.5).abs() < 0.1);
        assert!((mean_turn_score(1, Sides::Four, 100_000, SEED) - 2.5).abs() < 0.1);
    }
    #[test]
    fn seeds_replay() {
        let a = mean_turn_score(6, Sides::Six, 20_000, 3);
        let b = mean_turn_score(6, Sides::Six, 20_000, 3);
        assert_eq!(a, b);
        assert_ne!(a, mean_turn_score(6, Sides::Six, 20_000, 1 << 40));
    }
    #[test]
    fn six_sided_sweet_spot() {
        assert_eq!(par_best_rolls(Sides::Six, 500_000, SEED), 6);
    }
}
