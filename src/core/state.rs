//! Game state.
//!
//! `GameState` is everything the presentation layer reads: the card grid,
//! the selection buffer, score, move count, elapsed ticks and the completion
//! flag. Only [`GameEngine`](crate::rules::GameEngine) mutates it.
//!
//! Cards live in an `im::Vector`, so handing a snapshot to the renderer is an
//! O(1) clone.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::card::{Card, Symbol};

/// Currently face-up, unresolved card positions. Capacity 2.
pub type Selection = SmallVec<[usize; 2]>;

/// Where the selection buffer stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectionPhase {
    /// No unresolved card face-up.
    Empty,
    /// One card face-up, waiting for its partner.
    OneFlipped(usize),
    /// A mismatched pair is face-up, waiting for its deferred flip-back.
    AwaitingResolution([usize; 2]),
}

/// State of one game, from deal to completion.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// The card grid. Position is identity and never changes.
    pub cards: Vector<Card>,

    /// The selection buffer.
    pub flipped_indexes: Selection,

    /// Running score. Goes negative on early mismatches.
    pub score: i64,

    /// Completed two-card comparisons.
    pub moves: u32,

    /// Ticks since the deal.
    pub elapsed: u64,

    /// Every pair found.
    pub completed: bool,

    /// Stamp identifying this deal. Each reset produces a new generation.
    pub generation: u64,
}

impl GameState {
    /// Create a fresh state for the given cards.
    #[must_use]
    pub fn new(cards: impl IntoIterator<Item = Card>, generation: u64) -> Self {
        Self {
            cards: cards.into_iter().collect(),
            flipped_indexes: Selection::new(),
            score: 0,
            moves: 0,
            elapsed: 0,
            completed: false,
            generation,
        }
    }

    /// Number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the grid is empty (never true for a validated config).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Get a card by position.
    #[must_use]
    pub fn card(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    /// The selection buffer as a slice.
    #[must_use]
    pub fn selection(&self) -> &[usize] {
        &self.flipped_indexes
    }

    /// Classify the selection buffer.
    #[must_use]
    pub fn selection_phase(&self) -> SelectionPhase {
        match self.flipped_indexes.as_slice() {
            [] => SelectionPhase::Empty,
            [first] => SelectionPhase::OneFlipped(*first),
            [first, second, ..] => SelectionPhase::AwaitingResolution([*first, *second]),
        }
    }

    /// Whether every card has been matched.
    #[must_use]
    pub fn all_matched(&self) -> bool {
        self.cards.iter().all(|c| c.matched)
    }

    /// Number of pairs found so far.
    #[must_use]
    pub fn matched_pairs(&self) -> usize {
        self.cards.iter().filter(|c| c.matched).count() / 2
    }

    /// Number of pairs still hidden.
    #[must_use]
    pub fn remaining_pairs(&self) -> usize {
        self.cards.len() / 2 - self.matched_pairs()
    }

    /// The card faces in grid order, as dealt.
    #[must_use]
    pub fn initial_deck(&self) -> Vec<Symbol> {
        self.cards.iter().map(|c| c.value).collect()
    }

    pub(crate) fn card_mut(&mut self, index: usize) -> Option<&mut Card> {
        self.cards.get_mut(index)
    }
}
