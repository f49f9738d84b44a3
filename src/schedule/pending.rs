//! Pending resolution slot.

use serde::{Deserialize, Serialize};

/// Handle for a scheduled flip-back.
///
/// Returned by a mismatching flip. Callers that drive the delay with their
/// own timer hand it back to `GameEngine::resolve` when the timer fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResolutionTicket {
    /// Generation of the deal the mismatch happened in.
    pub generation: u64,

    /// The two mismatched positions, in flip order.
    pub indices: [usize; 2],

    /// Tick at which the engine resolves it by itself. `None` for manual resolution.
    pub due_at: Option<u64>,
}

impl ResolutionTicket {
    /// Create a new ticket.
    #[must_use]
    pub const fn new(generation: u64, indices: [usize; 2], due_at: Option<u64>) -> Self {
        Self {
            generation,
            indices,
            due_at,
        }
    }

    /// Whether the ticket is due at `elapsed`.
    #[must_use]
    pub fn is_due(&self, elapsed: u64) -> bool {
        self.due_at.is_some_and(|due| elapsed >= due)
    }
}

/// Holds the pending flip-back, if any.
///
/// At most one resolution is ever pending: the selection buffer stays full
/// until it fires, and a full buffer refuses new flips.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MismatchScheduler {
    pending: Option<ResolutionTicket>,
}

impl MismatchScheduler {
    /// Create an empty scheduler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule a flip-back, replacing anything still pending.
    pub fn schedule(&mut self, ticket: ResolutionTicket) {
        debug_assert!(self.pending.is_none(), "mismatch scheduled while another is pending");
        self.pending = Some(ticket);
    }

    /// The pending ticket.
    #[must_use]
    pub fn pending(&self) -> Option<ResolutionTicket> {
        self.pending
    }

    /// Whether anything is pending.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.pending.is_none()
    }

    /// Take the pending ticket if it equals `ticket`.
    pub fn take_matching(&mut self, ticket: &ResolutionTicket) -> Option<ResolutionTicket> {
        if self.pending.as_ref() == Some(ticket) {
            self.pending.take()
        } else {
            None
        }
    }

    /// Take the pending ticket if it is due at `elapsed`.
    pub fn take_due(&mut self, elapsed: u64) -> Option<ResolutionTicket> {
        if self.pending.is_some_and(|t| t.is_due(elapsed)) {
            self.pending.take()
        } else {
            None
        }
    }

    /// Take the pending ticket unconditionally.
    pub fn take(&mut self) -> Option<ResolutionTicket> {
        self.pending.take()
    }

    /// Cancel anything pending.
    pub fn clear(&mut self) {
        self.pending = None;
    }
}
