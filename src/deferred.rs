//! Deferred operations and the callback-style adapter.

use std::fmt;

use log::trace;

use crate::Outcome;

/// The completion callback passed to a deferred operation.
///
/// Invoked exactly once by well-behaved primitives, with the outcome
/// of the asynchronous work, possibly from another thread.
pub type Complete<T, E> = Box<dyn FnOnce(Outcome<T, E>) + Send>;

/// A unit of asynchronous work that has been captured but not
/// started.
///
/// Anything offering an invoke-with-completion-callback shape
/// qualifies; [`adapt`] produces implementations from plain
/// callback-style primitives.
pub trait Deferred<T: 'static, E: 'static> {
    /// Starts the captured work.
    ///
    /// Side effects begin here and not before. A deferred operation
    /// carries no memoization and no started flag: invoking it twice
    /// runs the underlying work twice.
    fn invoke(&self, complete: Complete<T, E>);
}

/// A deferred call to a callback-style primitive.
///
/// Captures the primitive together with its leading arguments.
/// Produced by the factories [`adapt`] returns; consumed by a driver
/// once yielded through [`Step::Pending`].
///
/// [`Step::Pending`]: crate::Step::Pending
pub struct Call<P, A> {
    primitive: P,
    args: A,
}

/// Adapts a callback-style primitive into a deferred-call factory.
///
/// The primitive takes its leading arguments as one (tuple) value
/// plus a trailing [`Complete`] callback. The returned factory takes
/// the leading arguments alone and captures them into a [`Call`],
/// performing no side effect and starting no asynchronous work:
///
/// ```
/// use trampoline::{adapt, Complete};
///
/// let read_thing = adapt(|id: u32, complete: Complete<String, String>| {
///     complete(Ok(format!("value-{id}")))
/// });
///
/// // captured, not started
/// let deferred = read_thing(42);
/// ```
pub fn adapt<P, A, T, E>(primitive: P) -> impl Fn(A) -> Call<P, A>
where
    P: Fn(A, Complete<T, E>) + Clone,
{
    move |args| {
        trace!("capture deferred call");
        Call {
            primitive: primitive.clone(),
            args,
        }
    }
}

impl<P, A, T, E> Deferred<T, E> for Call<P, A>
where
    P: Fn(A, Complete<T, E>),
    A: Clone,
    T: 'static,
    E: 'static,
{
    fn invoke(&self, complete: Complete<T, E>) {
        trace!("invoke deferred call");
        (self.primitive)(self.args.clone(), complete)
    }
}

impl<P, A> fmt::Debug for Call<P, A>
where
    A: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Call")
            .field("args", &self.args)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{
        atomic::{AtomicUsize, Ordering},
        mpsc, Arc,
    };

    use super::{adapt, Complete, Deferred};

    #[test]
    fn capture_is_effect_free() {
        let _ = env_logger::try_init();

        let invocations = Arc::new(AtomicUsize::new(0));

        let primitive = {
            let invocations = invocations.clone();
            move |(), complete: Complete<(), String>| {
                invocations.fetch_add(1, Ordering::SeqCst);
                complete(Ok(()))
            }
        };

        let deferred = adapt(primitive)(());
        assert_eq!(invocations.load(Ordering::SeqCst), 0);

        deferred.invoke(Box::new(|_| ()));
        assert_eq!(invocations.load(Ordering::SeqCst), 1);

        // no memoization: a second invocation repeats the work
        deferred.invoke(Box::new(|_| ()));
        assert_eq!(invocations.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn captured_args_are_forwarded() {
        let _ = env_logger::try_init();

        let read_thing = adapt(|id: u32, complete: Complete<String, String>| {
            complete(Ok(format!("value-{id}")))
        });

        let (tx, rx) = mpsc::channel();
        read_thing(42).invoke(Box::new(move |outcome| {
            tx.send(outcome).unwrap();
        }));

        assert_eq!(rx.recv().unwrap(), Ok("value-42".into()));
    }

    #[test]
    fn failures_surface_through_the_callback() {
        let _ = env_logger::try_init();

        let fail = adapt(|(), complete: Complete<String, String>| {
            complete(Err("boom".into()))
        });

        let (tx, rx) = mpsc::channel();
        fail(()).invoke(Box::new(move |outcome| {
            tx.send(outcome).unwrap();
        }));

        assert_eq!(rx.recv().unwrap(), Err("boom".into()));
    }
}
