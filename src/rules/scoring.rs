//! Scoring rule.

use serde::{Deserialize, Serialize};

/// Scoring constants.
///
/// - each match adds `match_reward`
/// - each mismatch subtracts `mismatch_penalty`
/// - finishing adds `time_bonus_base - time_bonus_per_tick * elapsed`, floored at 0
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoring {
    pub match_reward: i64,
    pub mismatch_penalty: i64,
    pub time_bonus_base: i64,
    pub time_bonus_per_tick: i64,
}

impl Default for Scoring {
    fn default() -> Self {
        Self {
            match_reward: 100,
            mismatch_penalty: 10,
            time_bonus_base: 1000,
            time_bonus_per_tick: 2,
        }
    }
}

impl Scoring {
    /// One-time bonus for completing the grid after `elapsed` ticks.
    #[must_use]
    pub fn time_bonus(&self, elapsed: u64) -> i64 {
        let elapsed = i64::try_from(elapsed).unwrap_or(i64::MAX);
        let decay = self.time_bonus_per_tick.saturating_mul(elapsed);
        self.time_bonus_base.saturating_sub(decay).max(0)
    }
}
