//! Deferred-computation demonstrator
//!
//! This module illustrates, through console narration, the semantics of
//! asynchronous computations that settle independently of the code that
//! reacts to them: eager execution, memoized settlement, probabilistic
//! failure, and fail-fast aggregate waiting.

pub mod deferred;
pub mod scenarios;

pub use deferred::{wait_all, Deferred, Rejection};
