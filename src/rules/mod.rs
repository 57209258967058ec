//! Turn scoring rules.
//!
//! - Pig Out — rolling any 1 replaces the sum with a capped count of 1's
//! - Free Bacon — rolling zero dice scores from the opponent's digits
//! - Prime boost — a prime turn score escalates to the next prime below 100
//! - Swap — scores trade places when one is exactly double the other
mod bacon;
mod pigout;
mod prime;
mod swap;
mod turn;

pub use bacon::*;
pub use pigout::*;
pub use prime::*;
pub use swap::*;
pub use turn::*;
