//! Action history.
//!
//! The engine records every operation that changed the state. Ignored flips
//! and ticks after completion are not recorded. Together with the dealt card
//! order, the history reproduces a game exactly (see
//! [`GameEngine::replay`](crate::rules::GameEngine::replay)).

use serde::{Deserialize, Serialize};

/// A state-changing operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// A flip that was accepted.
    Flip(usize),
    /// A tick that advanced the clock.
    Tick,
    /// A mismatch resolved by the caller rather than by a tick.
    Resolve,
}

/// A recorded action with metadata for history tracking.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// Position in the game's history, starting at 0.
    pub sequence: u32,

    /// The action taken.
    pub action: Action,

    /// Tick count when the action was applied.
    pub elapsed: u64,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(sequence: u32, action: Action, elapsed: u64) -> Self {
        Self {
            sequence,
            action,
            elapsed,
        }
    }
}
