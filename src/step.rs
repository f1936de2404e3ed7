use std::fmt;

use crate::deferred::Deferred;

/// The outcome of one deferred operation, fed back into the sequence
/// at the suspension point that yielded it.
///
/// Exactly one side is populated: either the value produced by the
/// underlying primitive, or the failure it reported.
pub type Outcome<T, E> = Result<T, E>;

/// The sequence progression step, emitted by [sequences] and
/// processed by [drivers].
///
/// Every resume of a sequence produces one step. Drivers should be
/// able to handle all variants.
///
/// [sequences]: crate::Sequence
/// [drivers]: crate::drivers
pub enum Step<T: 'static, O, E: 'static> {
    /// The sequence finished with its final value.
    ///
    /// Terminal: the sequence must not be resumed again.
    Done(O),

    /// The sequence suspended, yielding a deferred operation.
    ///
    /// The driver executes the operation and resumes the sequence
    /// with its [`Outcome`].
    Pending(Box<dyn Deferred<T, E>>),

    /// A failure escaped the sequence uncaught.
    ///
    /// Terminal: the driver propagates the failure to its caller and
    /// performs no further step.
    Failed(E),
}

impl<T: 'static, O, E: 'static> fmt::Debug for Step<T, O, E>
where
    O: fmt::Debug,
    E: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Done(value) => f.debug_tuple("Done").field(value).finish(),
            Self::Pending(_) => f.debug_tuple("Pending").field(&"..").finish(),
            Self::Failed(err) => f.debug_tuple("Failed").field(err).finish(),
        }
    }
}
