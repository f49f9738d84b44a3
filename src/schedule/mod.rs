//! Deferred mismatch resolution.
//!
//! A mismatched pair stays face-up for a while before flipping back. The
//! flip-back is a scheduled task described by a [`ResolutionTicket`]: the two
//! card positions plus the generation of the deal that produced them.
//!
//! ## Cancellation
//!
//! `reset` starts a new generation and clears the scheduler. A ticket held
//! by an external timer from the previous deal no longer matches anything,
//! so firing it is a no-op.
//!
//! ```
//! use memory_match::schedule::{MismatchScheduler, ResolutionTicket};
//!
//! let mut scheduler = MismatchScheduler::new();
//! let ticket = ResolutionTicket::new(0, [1, 4], Some(3));
//! scheduler.schedule(ticket);
//!
//! // Not due yet
//! assert!(scheduler.take_due(2).is_none());
//! assert_eq!(scheduler.take_due(3), Some(ticket));
//! ```

mod pending;

pub use pending::{MismatchScheduler, ResolutionTicket};
