//! Outcome collection and aggregation.
mod collector;
mod types;


pub use collector::setup_outcome_collector;
pub use types::{RequestOutcome, ResultTally, RunReport};
