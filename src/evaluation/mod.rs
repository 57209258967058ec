//! Monte Carlo estimates over repeated independent trials.
//!
//! Trials share nothing but read-only strategies, so batches fan out over
//! rayon's pool; each worker draws from its own freshly seeded dice. Results
//! are combined by summation, which makes the estimate independent of the
//! order in which trials finish.
mod average;
mod rolls;
mod winrate;

pub use average::*;
pub use rolls::*;
pub use winrate::*;
