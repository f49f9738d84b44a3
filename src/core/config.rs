//! Game configuration.
//!
//! `MatchConfig` fixes everything that stays constant across resets:
//! - the alphabet of card faces (each dealt twice)
//! - the scoring constants
//! - how many ticks a mismatched pair stays face-up
//!
//! `MatchConfig::default()` is the classic eight-pair space deck.

use serde::{Deserialize, Serialize};

use super::card::Symbol;
use super::error::EngineError;
use crate::rules::Scoring;

/// The classic alphabet: eight space glyphs.
pub const SPACE_SYMBOLS: [char; 8] = ['🚀', '🌌', '🪐', '⭐', '🌠', '🌍', '🌑', '🌞'];

/// Default number of ticks before a mismatched pair flips back.
pub const DEFAULT_MISMATCH_DELAY_TICKS: u64 = 1;

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Distinct card faces. The deck holds two cards per symbol.
    pub symbols: Vec<Symbol>,

    /// Scoring constants.
    pub scoring: Scoring,

    /// Ticks a mismatched pair stays face-up before the engine flips it back.
    ///
    /// `None` leaves the resolution entirely to the caller, who must call
    /// `GameEngine::resolve` with the ticket returned by the mismatching flip.
    pub mismatch_delay_ticks: Option<u64>,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            symbols: SPACE_SYMBOLS.iter().copied().map(Symbol::new).collect(),
            scoring: Scoring::default(),
            mismatch_delay_ticks: Some(DEFAULT_MISMATCH_DELAY_TICKS),
        }
    }
}

impl MatchConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the alphabet.
    #[must_use]
    pub fn with_symbols(mut self, symbols: impl IntoIterator<Item = impl Into<Symbol>>) -> Self {
        self.symbols = symbols.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the scoring constants.
    #[must_use]
    pub fn with_scoring(mut self, scoring: Scoring) -> Self {
        self.scoring = scoring;
        self
    }

    /// Set the mismatch delay in ticks.
    #[must_use]
    pub fn with_mismatch_delay(mut self, ticks: u64) -> Self {
        self.mismatch_delay_ticks = Some(ticks);
        self
    }

    /// Require the caller to resolve mismatches explicitly.
    #[must_use]
    pub fn with_manual_resolution(mut self) -> Self {
        self.mismatch_delay_ticks = None;
        self
    }

    /// Number of cards on the table.
    #[must_use]
    pub fn deck_size(&self) -> usize {
        self.symbols.len() * 2
    }

    /// Number of pairs to find.
    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.symbols.len()
    }

    /// Check that the alphabet is non-empty and has no repeated symbols.
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.symbols.is_empty() {
            return Err(EngineError::EmptyAlphabet);
        }

        for (i, symbol) in self.symbols.iter().enumerate() {
            if self.symbols[..i].contains(symbol) {
                return Err(EngineError::DuplicateSymbol(*symbol));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = MatchConfig::default();

        assert_eq!(config.pair_count(), 8);
        assert_eq!(config.deck_size(), 16);
        assert_eq!(config.mismatch_delay_ticks, Some(1));
        assert_eq!(config.scoring, Scoring::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = MatchConfig::new()
            .with_symbols(['A', 'B'])
            .with_mismatch_delay(3);

        assert_eq!(config.symbols, vec![Symbol::new('A'), Symbol::new('B')]);
        assert_eq!(config.mismatch_delay_ticks, Some(3));

        let manual = config.with_manual_resolution();
        assert_eq!(manual.mismatch_delay_ticks, None);
    }

    #[test]
    fn test_validate_empty() {
        let config = MatchConfig::new().with_symbols(Vec::<char>::new());
        assert_eq!(config.validate(), Err(EngineError::EmptyAlphabet));
    }

    #[test]
    fn test_validate_duplicate() {
        let config = MatchConfig::new().with_symbols(['A', 'B', 'A']);
        assert_eq!(
            config.validate(),
            Err(EngineError::DuplicateSymbol(Symbol::new('A')))
        );
    }

    #[test]
    fn test_config_serde() {
        let config = MatchConfig::new().with_symbols(['X', 'Y']).with_manual_resolution();

        let json = serde_json::to_string(&config).unwrap();
        let restored: MatchConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(config, restored);
    }
}
