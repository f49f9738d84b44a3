//! Core engine types: cards, deck, state, actions, RNG, configuration.
//!
//! Nothing here decides game rules. The rules live in [`crate::rules`].

pub mod card;
pub mod config;
pub mod deck;
pub mod error;
pub mod rng;
pub mod action;
pub mod state;

pub use card::{Card, Symbol};
pub use config::{MatchConfig, DEFAULT_MISMATCH_DELAY_TICKS, SPACE_SYMBOLS};
pub use error::{DeckProblem, EngineError};
pub use rng::GameRng;
pub use action::{Action, ActionRecord};
pub use state::{GameState, Selection, SelectionPhase};
