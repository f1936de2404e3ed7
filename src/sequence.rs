//! The suspending-procedure contract.

use crate::{Outcome, Step};

/// A resumable sequence of steps separated by suspension points.
///
/// A sequence is a state machine that remembers where it last
/// suspended. Each call to [`Self::resume`] advances it to the next
/// suspension point (yielding a deferred operation via
/// [`Step::Pending`]) or to completion.
///
/// Sequences never perform the deferred work themselves: a [driver]
/// owns the resume loop, executes each yielded operation and feeds
/// its outcome back in, strictly in yield order.
///
/// [driver]: crate::drivers
pub trait Sequence {
    /// The value observed at suspension points.
    type Value: 'static;

    /// The final value produced on normal termination.
    type Output;

    /// The failure type, both injected at suspension points and
    /// escaping the sequence when uncaught.
    type Error: 'static;

    /// Makes the sequence progress.
    ///
    /// The first resume receives `None`: no operation has completed
    /// yet, the sequence advances from before its first step. Every
    /// later resume receives `Some` outcome of the operation yielded
    /// at the current suspension point.
    ///
    /// An `Err` outcome is failure injection: the sequence must
    /// behave as if its own suspend expression raised the failure.
    /// If the suspension point is guarded, the sequence recovers and
    /// keeps progressing; otherwise it returns [`Step::Failed`] and
    /// must not be resumed again.
    fn resume(
        &mut self,
        outcome: Option<Outcome<Self::Value, Self::Error>>,
    ) -> Step<Self::Value, Self::Output, Self::Error>;
}
