//! Game bindings for Python.

use pyo3::prelude::*;

use crate::core::MatchConfig;
use crate::rules::{FlipOutcome, GameEngine, TickOutcome};

use super::py_core::{engine_err, symbols_from_str, PyCard};

/// Python wrapper for GameEngine.
#[pyclass(name = "MemoryGame")]
pub struct PyMemoryGame {
    engine: GameEngine,
}

#[pymethods]
impl PyMemoryGame {
    /// Create a new game.
    ///
    /// # Arguments
    /// - seed: RNG seed; random when omitted
    /// - symbols: card faces, one per character; the space deck when omitted
    /// - mismatch_delay: ticks before a mismatch flips back; None to resolve manually
    #[new]
    #[pyo3(signature = (seed = None, symbols = None, mismatch_delay = Some(1)))]
    fn new(seed: Option<u64>, symbols: Option<&str>, mismatch_delay: Option<u64>) -> PyResult<Self> {
        let mut config = MatchConfig::new();
        if let Some(glyphs) = symbols {
            config.symbols = symbols_from_str(glyphs);
        }
        config.mismatch_delay_ticks = mismatch_delay;

        let engine = match seed {
            Some(seed) => GameEngine::new(config, seed),
            None => GameEngine::from_entropy(config),
        }
        .map_err(engine_err)?;

        Ok(Self { engine })
    }

    /// Deal a new shuffled game.
    fn reset(&mut self) {
        self.engine.reset();
    }

    /// Deal a new game in the given order, one symbol per character.
    fn reset_with_deck(&mut self, deck: &str) -> PyResult<()> {
        self.engine
            .reset_with_deck(&symbols_from_str(deck))
            .map_err(engine_err)?;
        Ok(())
    }

    /// Flip a card.
    ///
    /// Returns one of "ignored", "revealed", "matched", "completed", "mismatched".
    fn flip(&mut self, index: usize) -> PyResult<&'static str> {
        let outcome = self.engine.flip(index).map_err(engine_err)?;
        Ok(match outcome {
            FlipOutcome::Ignored(_) => "ignored",
            FlipOutcome::Revealed { .. } => "revealed",
            FlipOutcome::Matched { completed: true, .. } => "completed",
            FlipOutcome::Matched { .. } => "matched",
            FlipOutcome::Mismatched { .. } => "mismatched",
        })
    }

    /// Advance the clock.
    ///
    /// Returns the pair that flipped back on this tick, if any.
    fn tick(&mut self) -> Option<(usize, usize)> {
        match self.engine.tick() {
            TickOutcome::Resolved { pair: [a, b], .. } => Some((a, b)),
            _ => None,
        }
    }

    /// Flip back the pending mismatch now.
    fn resolve_pending(&mut self) -> bool {
        self.engine.resolve_pending()
    }

    #[getter]
    fn cards(&self) -> Vec<PyCard> {
        self.engine.state().cards.iter().copied().map(PyCard).collect()
    }

    #[getter]
    fn flipped_indexes(&self) -> Vec<usize> {
        self.engine.state().selection().to_vec()
    }

    #[getter]
    fn score(&self) -> i64 {
        self.engine.state().score
    }

    #[getter]
    fn moves(&self) -> u32 {
        self.engine.state().moves
    }

    #[getter]
    fn elapsed(&self) -> u64 {
        self.engine.state().elapsed
    }

    #[getter]
    fn completed(&self) -> bool {
        self.engine.state().completed
    }

    fn __len__(&self) -> usize {
        self.engine.state().len()
    }

    fn __repr__(&self) -> String {
        let state = self.engine.state();
        format!(
            "MemoryGame(score={}, moves={}, elapsed={}, pairs_left={})",
            state.score,
            state.moves,
            state.elapsed,
            state.remaining_pairs()
        )
    }
}
