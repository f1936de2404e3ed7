//! The standard, blocking sequence driver.

use std::sync::mpsc;

use log::{debug, trace};

use crate::{Sequence, Step};

use super::RunError;

/// Drives the sequence produced by the given factory to completion,
/// blocking the current thread at each suspension point.
///
/// The factory is invoked once to obtain the sequence; no step runs
/// before the first resume. Each yielded deferred operation is
/// invoked exactly once, in yield order, with a completion callback
/// backed by an [`mpsc`] channel; the driver parks on the channel
/// until the operation completes, then feeds the outcome back in.
/// At most one operation of the same sequence is ever in flight.
///
/// Returns the sequence's final value, or [`RunError::Failed`] when
/// a failure escapes the sequence uncaught.
pub fn run<S, F>(factory: F) -> Result<S::Output, RunError<S::Error>>
where
    F: FnOnce() -> S,
    S: Sequence,
    S::Value: Send,
    S::Error: Send,
{
    let mut sequence = factory();
    let mut outcome = None;

    loop {
        match sequence.resume(outcome.take()) {
            Step::Done(value) => {
                debug!("sequence completed");
                break Ok(value);
            }
            Step::Failed(err) => {
                debug!("sequence failed, propagating to caller");
                break Err(RunError::Failed(err));
            }
            Step::Pending(operation) => {
                trace!("sequence suspended, invoking deferred operation");
                let (tx, rx) = mpsc::channel();

                operation.invoke(Box::new(move |outcome| {
                    let _ = tx.send(outcome);
                }));

                match rx.recv() {
                    Ok(o) => outcome = Some(o),
                    Err(_) => break Err(RunError::Incomplete),
                }
            }
        }
    }
}
