use crate::Utility;
use rayon::prelude::*;

/// Wraps `f` so that each call returns the mean of `samples` calls to `f`
/// with the same arguments.
///
/// Runs sequentially, so `f` may carry state between calls, such as a rigged
/// die working through its sequence. Multiple positional arguments are
/// passed as a tuple.
pub fn averaged<A, F>(mut f: F, samples: usize) -> impl FnMut(A) -> Utility
where
    A: Clone,
    F: FnMut(A) -> Utility,
{
    assert!(samples > 0, "cannot average zero samples");
    move |args: A| (0..samples).map(|_| f(args.clone())).sum::<Utility>() / samples as Utility
}

/// Parallel counterpart of [`averaged`] for stateless `f`.
pub fn par_averaged<A, F>(f: F, samples: usize) -> impl Fn(A) -> Utility
where
    A: Clone + Send + Sync,
    F: Fn(A) -> Utility + Send + Sync,
{
    assert!(samples > 0, "cannot average zero samples");
    move |args: A| {
        (0..samples)
            .into_par_iter()
            .map(|_| f(args.clone()))
            .sum::<Utility>()
            / samples as Utility
    }
}
