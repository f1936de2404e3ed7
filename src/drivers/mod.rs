//! Collection of sequence drivers.
//!
//! A driver owns the resume loop of one sequence execution: it
//! resumes the [sequence], executes each yielded [deferred
//! operation] and feeds the outcome back in at the suspension point,
//! until the sequence completes or fails uncaught.
//!
//! Drivers perform no retries and no recovery: they are pure
//! propagation conduits. Surfacing an unhandled failure to the end
//! user is the responsibility of the caller.
//!
//! [sequence]: crate::Sequence
//! [deferred operation]: crate::Deferred

#[cfg(feature = "std")]
pub mod std;
#[cfg(feature = "tokio")]
pub mod tokio;

use thiserror::Error;

/// Errors terminating a sequence execution.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum RunError<E> {
    /// A failure escaped the sequence uncaught.
    #[error("Sequence failed: {0}")]
    Failed(E),

    /// A deferred operation dropped its completion callback without
    /// invoking it, leaving the sequence suspended forever.
    #[error("Deferred operation never completed")]
    Incomplete,
}
