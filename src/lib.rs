//! Simulator and Monte Carlo strategy evaluator for the dice game Hog.
//!
//! ## Module Organization
//!
//! - [`dice`] — Dice sources: fair, rigged, and the per-turn cup
//! - [`rules`] — Turn scoring: Pig Out, Free Bacon, prime boost, Hog Wild, swaps
//! - [`game`] — Players, scoreboard, and the alternating game loop
//! - [`strategy`] — Strategy contract, validator, and strategy library
//! - [`evaluation`] — Averaging, best roll counts, and win rates
//! - [`experiments`] — Configurable experiment runner
pub mod dice;
pub mod evaluation;
pub mod experiments;
pub mod game;
pub mod rules;
pub mod strategy;

pub use dice::*;
pub use evaluation::*;
pub use experiments::*;
pub use game::*;
pub use rules::*;
pub use strategy::*;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Accumulated points of a player.
pub type Score = u32;
/// Number of dice a strategy chooses to roll (0 = Free Bacon).
pub type Rolls = u8;
/// Outcome of a single die.
pub type Face = u8;
/// Averaged outcomes of repeated trials.
pub type Utility = f64;
/// Win rates and other frequencies.
pub type Probability = f64;

// ============================================================================
// GAME PARAMETERS
// ============================================================================
/// Score that ends the game for the first player to reach it.
pub const GOAL: Score = 100;
/// Most dice a player may roll in one turn.
pub const MAX_ROLLS: Rolls = 10;
/// Exclusive upper bound of the score domain seen by Free Bacon and prime boosts.
pub const SCORE_CEILING: Score = 100;

// ============================================================================
// MONTE CARLO PARAMETERS
// ============================================================================
/// Default trial count for averaged estimates.
pub const SAMPLES: usize = 1000;
/// Dice rolled by the baseline opponent in win-rate experiments.
pub const BASELINE_ROLLS: Rolls = 4;
/// Default seed for reproducible experiment runs.
pub const SEED: u64 = 0x4D6F_6E74_6543_6172;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize terminal logging on stderr at INFO.
/// Fails instead of panicking when a logger is already installed.
#[cfg(feature = "cli")]
pub fn log() -> anyhow::Result<()> {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    simplelog::TermLogger::init(
        log::LevelFilter::Info,
        config,
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )?;
    Ok(())
}
