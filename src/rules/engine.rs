//! The matching-pairs game engine.
//!
//! `GameEngine` owns the single [`GameState`] and is the only thing that
//! mutates it. The presentation layer calls:
//! - `reset` to deal a new game
//! - `flip(index)` when a card is clicked
//! - `tick` once per time unit while the game is running
//!
//! ## Selection buffer
//!
//! ```text
//! EMPTY -> ONE_FLIPPED -> TWO_FLIPPED_MATCH -> EMPTY
//!                      -> TWO_FLIPPED_MISMATCH -> [delay] -> EMPTY
//! ```
//!
//! `completed` is absorbing and is only reached from a match that finds the
//! last pair.

use im::Vector;
use tracing::{debug, instrument, trace};

use crate::core::deck;
use crate::core::{
    Action, ActionRecord, Card, EngineError, GameRng, GameState, MatchConfig, SelectionPhase, Symbol,
};
use crate::schedule::{MismatchScheduler, ResolutionTicket};

/// Why a flip was refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IgnoreReason {
    /// The game is over.
    Completed,
    /// Two cards are already face-up and unresolved.
    SelectionFull,
    /// The card is already face-up.
    AlreadyFlipped,
    /// The card belongs to a found pair.
    AlreadyMatched,
}

/// Result of a flip.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlipOutcome {
    /// Refused. The state is unchanged.
    Ignored(IgnoreReason),

    /// First card of a pair turned over.
    Revealed { index: usize },

    /// Second card matched the first.
    Matched {
        pair: [usize; 2],
        /// This was the last pair.
        completed: bool,
        /// Bonus added on completion, 0 otherwise.
        time_bonus: i64,
    },

    /// Second card did not match. Both stay face-up until `ticket` resolves.
    Mismatched {
        pair: [usize; 2],
        ticket: ResolutionTicket,
    },
}

impl FlipOutcome {
    /// Whether the flip changed the state.
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        !matches!(self, FlipOutcome::Ignored(_))
    }
}

/// Result of a tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// The game is completed; the clock is stopped.
    Ignored,
    /// The clock advanced.
    Advanced { elapsed: u64 },
    /// The clock advanced and a due mismatch flipped back.
    Resolved { elapsed: u64, pair: [usize; 2] },
}

/// Game engine.
///
/// Single-threaded and `&mut self` driven. Every operation applies in full
/// before returning.
#[derive(Clone, Debug)]
pub struct GameEngine {
    config: MatchConfig,
    rng: GameRng,
    state: GameState,
    scheduler: MismatchScheduler,
    history: Vector<ActionRecord>,
    next_generation: u64,
}

impl GameEngine {
    /// Create an engine and deal the first game from `seed`.
    pub fn new(config: MatchConfig, seed: u64) -> Result<Self, EngineError> {
        Self::with_rng(config, GameRng::new(seed))
    }

    /// Create an engine seeded from OS entropy.
    pub fn from_entropy(config: MatchConfig) -> Result<Self, EngineError> {
        Self::with_rng(config, GameRng::from_entropy())
    }

    /// Create an engine whose first game uses the given card order.
    ///
    /// `order` must contain each alphabet symbol exactly twice. Later resets
    /// shuffle with an entropy-seeded RNG.
    pub fn with_deck(config: MatchConfig, order: &[Symbol]) -> Result<Self, EngineError> {
        config.validate()?;
        let cards = deck::fixed_deck(&config.symbols, order)?;
        Ok(Self::assemble(config, GameRng::from_entropy(), cards))
    }

    fn with_rng(config: MatchConfig, mut rng: GameRng) -> Result<Self, EngineError> {
        config.validate()?;
        let cards = deck::shuffled_deck(&config.symbols, &mut rng);
        Ok(Self::assemble(config, rng, cards))
    }

    fn assemble(config: MatchConfig, rng: GameRng, cards: Vec<Card>) -> Self {
        debug!(cards = cards.len(), seed = rng.seed(), "engine created");
        Self {
            config,
            rng,
            state: GameState::new(cards, 0),
            scheduler: MismatchScheduler::new(),
            history: Vector::new(),
            next_generation: 1,
        }
    }

    /// Rebuild a game from its dealt card order and recorded actions.
    ///
    /// Flips fail the same way they would live, so an out-of-range index in
    /// `actions` surfaces as [`EngineError::InvalidIndex`].
    pub fn replay(
        config: MatchConfig,
        initial_deck: &[Symbol],
        actions: impl IntoIterator<Item = Action>,
    ) -> Result<Self, EngineError> {
        let mut engine = Self::with_deck(config, initial_deck)?;

        for action in actions {
            match action {
                Action::Flip(index) => {
                    engine.flip(index)?;
                }
                Action::Tick => {
                    engine.tick();
                }
                Action::Resolve => {
                    engine.resolve_pending();
                }
            }
        }

        Ok(engine)
    }

    // === Read access ===

    /// The current game.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// The configuration.
    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// The flip-back waiting to fire, if any.
    #[must_use]
    pub fn pending_resolution(&self) -> Option<ResolutionTicket> {
        self.scheduler.pending()
    }

    /// Actions applied since the last reset.
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    // === Operations ===

    /// Deal a new shuffled game, replacing the current one.
    ///
    /// Any pending flip-back is cancelled and tickets issued for the old
    /// game become stale.
    #[instrument(level = "debug", skip(self))]
    pub fn reset(&mut self) -> &GameState {
        let cards = deck::shuffled_deck(&self.config.symbols, &mut self.rng);
        self.deal(cards)
    }

    /// Deal a new game in the given card order.
    #[instrument(level = "debug", skip(self, order))]
    pub fn reset_with_deck(&mut self, order: &[Symbol]) -> Result<&GameState, EngineError> {
        let cards = deck::fixed_deck(&self.config.symbols, order)?;
        Ok(self.deal(cards))
    }

    /// Turn over the card at `index`.
    ///
    /// Out-of-range indices are rejected with [`EngineError::InvalidIndex`].
    /// Flips the rules refuse return [`FlipOutcome::Ignored`] and leave the
    /// state untouched.
    #[instrument(level = "debug", skip(self))]
    pub fn flip(&mut self, index: usize) -> Result<FlipOutcome, EngineError> {
        let card = *self.state.card(index).ok_or(EngineError::InvalidIndex {
            index,
            len: self.state.len(),
        })?;

        if let Some(reason) = self.refusal(&card) {
            trace!(?reason, "flip ignored");
            return Ok(FlipOutcome::Ignored(reason));
        }

        self.update_card(index, |c| c.flipped = true);
        self.state.flipped_indexes.push(index);
        self.record(Action::Flip(index));

        let pair = match self.state.selection_phase() {
            SelectionPhase::AwaitingResolution(pair) => pair,
            _ => return Ok(FlipOutcome::Revealed { index }),
        };

        self.state.moves += 1;

        let [first, second] = pair;
        if self.state.cards[first].value == self.state.cards[second].value {
            Ok(self.apply_match(pair))
        } else {
            Ok(self.apply_mismatch(pair))
        }
    }

    /// Advance the clock by one tick.
    ///
    /// Does nothing once the game is completed. Fires the pending flip-back
    /// when it falls due.
    #[instrument(level = "trace", skip(self))]
    pub fn tick(&mut self) -> TickOutcome {
        if self.state.completed {
            return TickOutcome::Ignored;
        }

        self.state.elapsed += 1;
        self.record(Action::Tick);
        let elapsed = self.state.elapsed;

        match self.scheduler.take_due(elapsed) {
            Some(ticket) => {
                self.unflip(ticket.indices);
                TickOutcome::Resolved {
                    elapsed,
                    pair: ticket.indices,
                }
            }
            None => TickOutcome::Advanced { elapsed },
        }
    }

    /// Fire a flip-back scheduled by an earlier mismatch.
    ///
    /// Returns `false` without touching the state when the ticket belongs to
    /// an earlier deal or has already fired.
    #[instrument(level = "debug", skip(self))]
    pub fn resolve(&mut self, ticket: ResolutionTicket) -> bool {
        if ticket.generation != self.state.generation {
            debug!(
                ticket_generation = ticket.generation,
                current = self.state.generation,
                "stale resolution discarded"
            );
            return false;
        }

        match self.scheduler.take_matching(&ticket) {
            Some(ticket) => {
                self.unflip(ticket.indices);
                self.record(Action::Resolve);
                true
            }
            None => false,
        }
    }

    /// Fire whatever flip-back is pending now.
    pub fn resolve_pending(&mut self) -> bool {
        match self.scheduler.take() {
            Some(ticket) => {
                self.unflip(ticket.indices);
                self.record(Action::Resolve);
                true
            }
            None => false,
        }
    }

    // === Transitions ===

    fn refusal(&self, card: &Card) -> Option<IgnoreReason> {
        if self.state.completed {
            Some(IgnoreReason::Completed)
        } else if self.state.flipped_indexes.len() >= 2 {
            Some(IgnoreReason::SelectionFull)
        } else if card.matched {
            Some(IgnoreReason::AlreadyMatched)
        } else if card.flipped {
            Some(IgnoreReason::AlreadyFlipped)
        } else {
            None
        }
    }

    fn apply_match(&mut self, pair: [usize; 2]) -> FlipOutcome {
        let scoring = self.config.scoring;

        for index in pair {
            self.update_card(index, |c| c.matched = true);
        }
        self.state.flipped_indexes.clear();
        self.state.score += scoring.match_reward;

        let completed = self.state.all_matched();
        let mut time_bonus = 0;
        if completed {
            time_bonus = scoring.time_bonus(self.state.elapsed);
            self.state.completed = true;
            self.state.score += time_bonus;
            debug!(
                score = self.state.score,
                moves = self.state.moves,
                elapsed = self.state.elapsed,
                "game completed"
            );
        } else {
            debug!(?pair, score = self.state.score, "pair matched");
        }

        FlipOutcome::Matched {
            pair,
            completed,
            time_bonus,
        }
    }

    fn apply_mismatch(&mut self, pair: [usize; 2]) -> FlipOutcome {
        self.state.score -= self.config.scoring.mismatch_penalty;

        let due_at = self
            .config
            .mismatch_delay_ticks
            .map(|delay| self.state.elapsed.saturating_add(delay));
        let ticket = ResolutionTicket::new(self.state.generation, pair, due_at);
        self.scheduler.schedule(ticket);

        debug!(?pair, score = self.state.score, ?due_at, "pair mismatched");
        FlipOutcome::Mismatched { pair, ticket }
    }

    fn unflip(&mut self, pair: [usize; 2]) {
        for index in pair {
            self.update_card(index, |c| c.flipped = false);
        }
        self.state.flipped_indexes.clear();
        debug!(?pair, "mismatch resolved");
    }

    fn deal(&mut self, cards: Vec<Card>) -> &GameState {
        let generation = self.next_generation;
        self.next_generation += 1;

        if let Some(ticket) = self.scheduler.take() {
            debug!(pair = ?ticket.indices, "pending resolution cancelled");
        }
        self.history.clear();
        self.state = GameState::new(cards, generation);

        debug!(generation, cards = self.state.len(), "dealt");
        &self.state
    }

    fn update_card(&mut self, index: usize, f: impl FnOnce(&mut Card)) {
        if let Some(card) = self.state.card_mut(index) {
            f(card);
        }
    }

    fn record(&mut self, action: Action) {
        let sequence = u32::try_from(self.history.len()).unwrap_or(u32::MAX);
        self.history
            .push_back(ActionRecord::new(sequence, action, self.state.elapsed));
    }
}
