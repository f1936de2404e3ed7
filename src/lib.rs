//! Minimal trampoline for driving resumable sequences of deferred,
//! callback-style operations.
//!
//! A [`Sequence`] is a suspending procedure: a state machine whose
//! execution is a series of steps separated by suspension points. At
//! each suspension point it yields a [`Deferred`] operation — work
//! that has been captured but not started. A [driver] owns the
//! resume loop: it executes the yielded operation and feeds its
//! [`Outcome`] back into the sequence at the exact point it
//! suspended, success value or failure alike, until the sequence
//! reports it is done.
//!
//! Deferred operations come from [adapting](adapt) any callback-style
//! asynchronous primitive, the same inversion as thunkifying: the
//! factory captures the arguments, the driver triggers the work.
//!
//! [driver]: crate::drivers

#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub mod deferred;
pub mod drivers;
pub mod sequence;
pub mod step;

#[doc(inline)]
pub use self::{
    deferred::{adapt, Call, Complete, Deferred},
    sequence::Sequence,
    step::{Outcome, Step},
};
