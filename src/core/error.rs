//! Engine error type.
//!
//! Only caller contract violations are errors. Flips the game simply refuses
//! (already flipped, already matched, selection full) are reported through
//! [`FlipOutcome::Ignored`](crate::rules::FlipOutcome::Ignored) instead.

use super::card::Symbol;

/// Errors returned by [`GameEngine`](crate::rules::GameEngine) operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EngineError {
    /// `flip` was called with a position outside the card grid.
    InvalidIndex { index: usize, len: usize },

    /// The configured alphabet has no symbols.
    EmptyAlphabet,

    /// The configured alphabet lists a symbol more than once.
    DuplicateSymbol(Symbol),

    /// A fixed deck does not contain every alphabet symbol exactly twice.
    InvalidDeck(DeckProblem),
}

/// Why a fixed deck was rejected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DeckProblem {
    /// The deck length is not twice the alphabet size.
    WrongLength { expected: usize, found: usize },

    /// The deck contains a symbol outside the alphabet.
    UnknownSymbol(Symbol),

    /// A symbol does not appear exactly twice.
    Unpaired { symbol: Symbol, count: usize },
}

impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EngineError::InvalidIndex { index, len } => {
                write!(f, "Card index {} out of range for {} cards", index, len)
            }
            EngineError::EmptyAlphabet => write!(f, "Alphabet must contain at least one symbol"),
            EngineError::DuplicateSymbol(symbol) => {
                write!(f, "Symbol {} appears more than once in the alphabet", symbol)
            }
            EngineError::InvalidDeck(problem) => write!(f, "Invalid deck: {}", problem),
        }
    }
}

impl std::fmt::Display for DeckProblem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeckProblem::WrongLength { expected, found } => {
                write!(f, "expected {} cards, found {}", expected, found)
            }
            DeckProblem::UnknownSymbol(symbol) => write!(f, "symbol {} is not in the alphabet", symbol),
            DeckProblem::Unpaired { symbol, count } => {
                write!(f, "symbol {} appears {} times, expected 2", symbol, count)
            }
        }
    }
}

impl std::error::Error for EngineError {}

impl From<DeckProblem> for EngineError {
    fn from(problem: DeckProblem) -> Self {
        EngineError::InvalidDeck(problem)
    }
}
