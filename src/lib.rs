//! # memory-match
//!
//! Game-state engine for a single-player matching-pairs card game.
//!
//! A grid of face-down cards is turned over two at a time. Matching pairs
//! stay revealed; mismatched pairs flip back after a delay. The game ends
//! when every pair is found, scored by matches, mismatches and elapsed time.
//!
//! ## Design Principles
//!
//! 1. **Engine only**: Rendering, input wiring and timers belong to the
//!    caller. The engine exposes `reset`, `flip` and `tick` plus read access
//!    to the state.
//!
//! 2. **Explicit transitions**: Every operation reads and writes the one
//!    `GameState` the engine owns. Deferred work is a generation-stamped
//!    ticket, never a closure over old state.
//!
//! 3. **Deterministic**: Decks are permuted with a seeded Fisher–Yates
//!    shuffle; a dealt deck plus its action history replays exactly.
//!
//! ## Example
//!
//! ```
//! use memory_match::{FlipOutcome, GameEngine, MatchConfig};
//!
//! let mut engine = GameEngine::new(MatchConfig::default(), 42).unwrap();
//! assert_eq!(engine.state().len(), 16);
//!
//! let outcome = engine.flip(0).unwrap();
//! assert_eq!(outcome, FlipOutcome::Revealed { index: 0 });
//!
//! engine.tick();
//! assert_eq!(engine.state().elapsed, 1);
//! ```
//!
//! ## Modules
//!
//! - `core`: Cards, deck building, state, actions, RNG, configuration
//! - `rules`: The engine state machine and scoring
//! - `schedule`: Cancellable deferred mismatch resolution

pub mod core;
pub mod rules;
pub mod schedule;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionRecord, Card, DeckProblem, EngineError, GameRng, GameState, MatchConfig,
    Selection, SelectionPhase, Symbol, SPACE_SYMBOLS,
};

pub use crate::rules::{FlipOutcome, GameEngine, IgnoreReason, Scoring, TickOutcome};

pub use crate::schedule::{MismatchScheduler, ResolutionTicket};
