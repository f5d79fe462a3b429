//! Deferred computation primitive
//!
//! A [`Deferred`] is a handle to an asynchronous computation that starts
//! executing the moment it is created, settles exactly once, and hands the
//! memoized outcome to every observer that asks for it afterwards.

use std::fmt;
use std::future::Future;

use futures_util::future::{try_join_all, BoxFuture, FutureExt, Shared};

/// Failure value carried by a rejected computation
///
/// Rejections are cloneable so an already-settled computation can hand the
/// same failure to every observer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// Plain textual rejection
    Message(String),
    /// Rejection carrying a numeric code alongside its message
    Coded { code: u16, message: String },
}

impl Rejection {
    /// Create a plain textual rejection
    pub fn message(message: impl Into<String>) -> Self {
        Self::Message(message.into())
    }

    /// Create a coded rejection
    pub fn coded(code: u16, message: impl Into<String>) -> Self {
        Self::Coded {
            code,
            message: message.into(),
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Message(message) => write!(f, "{}", message),
            Self::Coded { code, message } => write!(f, "[{}] {}", code, message),
        }
    }
}

/// Handle to an eagerly-started, independently-settling computation
///
/// The body passed to [`Deferred::spawn`] is handed to the runtime
/// immediately, before the handle is returned, so the computation makes
/// progress whether or not anyone ever waits on it. Settlement is
/// memoized: the body runs exactly once, and every call to
/// [`Deferred::wait`] observes a clone of the same outcome.
///
/// There is no cancellation. Once spawned, a computation always runs to
/// completion, settling as either a success value or a [`Rejection`].
#[derive(Clone)]
pub struct Deferred<T>
where
    T: Clone + Send + 'static,
{
    outcome: Shared<BoxFuture<'static, Result<T, Rejection>>>,
}

impl<T> Deferred<T>
where
    T: Clone + Send + 'static,
{
    /// Start a computation immediately and return a handle to it
    pub fn spawn<F>(body: F) -> Self
    where
        F: Future<Output = Result<T, Rejection>> + Send + 'static,
    {
        let handle = tokio::spawn(body);
        let outcome = async move {
            match handle.await {
                Ok(settled) => settled,
                // A panicked body still settles the handle, as a rejection
                Err(join_error) => {
                    Err(Rejection::message(format!("computation never settled: {}", join_error)))
                }
            }
        }
        .boxed()
        .shared();

        Self { outcome }
    }

    /// Wait for settlement
    ///
    /// May be called any number of times; every caller observes the same
    /// memoized outcome.
    pub async fn wait(&self) -> Result<T, Rejection> {
        self.outcome.clone().await
    }
}

/// Fail-fast aggregate wait over a collection of computations
///
/// Succeeds only when every member succeeds, yielding the results in the
/// same order as the input collection. Fails with the first member
/// failure, immediately, without waiting for the remaining members to
/// settle.
pub async fn wait_all<T>(computations: &[Deferred<T>]) -> Result<Vec<T>, Rejection>
where
    T: Clone + Send + 'static,
{
    try_join_all(computations.iter().map(Deferred::wait)).await
}
