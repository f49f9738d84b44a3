//! Card faces and card instances.

use serde::{Deserialize, Serialize};

/// A card face.
///
/// Symbols are opaque to the engine: two cards match when their symbols
/// compare equal. The default alphabet uses single-codepoint emoji.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Symbol(pub char);

impl Symbol {
    /// Create a new symbol.
    #[must_use]
    pub const fn new(glyph: char) -> Self {
        Self(glyph)
    }

    /// Get the glyph shown on the card face.
    #[must_use]
    pub const fn glyph(self) -> char {
        self.0
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<char> for Symbol {
    fn from(glyph: char) -> Self {
        Self(glyph)
    }
}

/// A single card on the table.
///
/// The card's position in [`GameState::cards`](super::GameState::cards) is its
/// identity; the card itself only carries its face and visibility flags.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// The face value.
    pub value: Symbol,

    /// Face-up. Transient: cleared again when a mismatch resolves.
    pub flipped: bool,

    /// Part of a found pair. Permanent until the next reset.
    pub matched: bool,
}

impl Card {
    /// Create a face-down, unmatched card.
    #[must_use]
    pub const fn face_down(value: Symbol) -> Self {
        Self {
            value,
            flipped: false,
            matched: false,
        }
    }

    /// Whether the renderer should show the face.
    #[must_use]
    pub const fn is_revealed(&self) -> bool {
        self.flipped || self.matched
    }

    /// Whether a flip on this card would be accepted (ignoring the selection buffer).
    #[must_use]
    pub const fn is_selectable(&self) -> bool {
        !self.flipped && !self.matched
    }
}
