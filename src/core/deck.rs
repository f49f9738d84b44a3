//! Deck construction.
//!
//! A deck is the alphabet dealt twice. Random decks are permuted with
//! [`GameRng::shuffle`]; fixed decks (scripted scenarios, replays) are
//! checked to pair the alphabet exactly.

use rustc_hash::FxHashMap;

use super::card::{Card, Symbol};
use super::error::DeckProblem;
use super::rng::GameRng;

/// Build the unshuffled deck: every symbol twice, all face-down.
#[must_use]
pub fn paired_deck(symbols: &[Symbol]) -> Vec<Card> {
    symbols
        .iter()
        .chain(symbols.iter())
        .copied()
        .map(Card::face_down)
        .collect()
}

/// Build a deck and apply a uniform random permutation.
#[must_use]
pub fn shuffled_deck(symbols: &[Symbol], rng: &mut GameRng) -> Vec<Card> {
    let mut deck = paired_deck(symbols);
    rng.shuffle(&mut deck);
    deck
}

/// Build a deck in the given order, checking it pairs `alphabet` exactly.
pub fn fixed_deck(alphabet: &[Symbol], order: &[Symbol]) -> Result<Vec<Card>, DeckProblem> {
    let expected = alphabet.len() * 2;
    if order.len() != expected {
        return Err(DeckProblem::WrongLength {
            expected,
            found: order.len(),
        });
    }

    let mut counts: FxHashMap<Symbol, usize> = alphabet.iter().map(|&s| (s, 0)).collect();
    for symbol in order {
        match counts.get_mut(symbol) {
            Some(count) => *count += 1,
            None => return Err(DeckProblem::UnknownSymbol(*symbol)),
        }
    }

    // Report in alphabet order so the error is stable
    for symbol in alphabet {
        let count = counts.get(symbol).copied().unwrap_or(0);
        if count != 2 {
            return Err(DeckProblem::Unpaired {
                symbol: *symbol,
                count,
            });
        }
    }

    Ok(order.iter().copied().map(Card::face_down).collect())
}
