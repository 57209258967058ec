//! Experiment selection and reporting.
//!
//! Which experiments run is explicit configuration ([`Experiments`]) handed
//! to the runner, rather than switches baked into the code.
mod config;
mod experiment;
mod report;

pub use config::*;
pub use experiment::*;
pub use report::*;
