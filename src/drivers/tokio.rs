//! The Tokio-based, async sequence driver.

use log::{debug, trace};
use tokio::sync::oneshot;

use crate::{Sequence, Step};

use super::RunError;

/// Drives the sequence produced by the given factory to completion,
/// awaiting at each suspension point instead of blocking.
///
/// Same contract as the [std driver]: each yielded deferred operation
/// is invoked exactly once, in yield order, with a completion
/// callback backed by a [`oneshot`] channel; the driver awaits the
/// channel, then feeds the outcome back in. At most one operation of
/// the same sequence is ever in flight; independent sequence
/// executions are free to interleave on the runtime.
///
/// [std driver]: crate::drivers::std::run
pub async fn run<S, F>(factory: F) -> Result<S::Output, RunError<S::Error>>
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
                let (tx, rx) = oneshot::channel();

                operation.invoke(Box::new(move |outcome| {
                    let _ = tx.send(outcome);
                }));

                match rx.await {
                    Ok(o) => outcome = Some(o),
                    Err(_) => break Err(RunError::Incomplete),
                }
            }
        }
    }
}
