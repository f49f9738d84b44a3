//! Game rules: the engine state machine and the scoring rule.

mod engine;
mod scoring;

pub use engine::{FlipOutcome, GameEngine, IgnoreReason, TickOutcome};
pub use scoring::Scoring;
