//! # Async Primer
//!
//! An educational demonstration of asynchronous control flow:
//! - Deferred computations that start eagerly and settle exactly once
//! - Memoized settlement (observing twice never re-executes the body)
//! - Probabilistic failure, simulating an unreliable connection
//! - Fail-fast aggregate waiting over collections of computations
//! - A thin HTTP GET wrapper that normalizes every failure shape into
//!   one error type
//!
//! ## Architecture
//!
//! The crate is organized into a few small modules:
//! - `demo`: the deferred-computation primitive and narrated scenarios
//! - `api`: the HTTP-call wrapper and its three fixed call sites
//! - `error`: the normalized error type used by the wrapper
//!
//! The two halves are independent; nothing flows between them. Console
//! output is the only observable side channel, and it exists purely for
//! human narration.

pub mod api;
pub mod demo;
pub mod error;

// Re-export commonly used types
pub use api::{fetch_json, ApiResponse};
pub use demo::{wait_all, Deferred, Rejection};
pub use error::{ApiError, ApiResult};

/// Version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Run the full demonstration
///
/// Drives the deferred-computation scenarios first, then the three HTTP
/// call sites. Every failure is caught and narrated; nothing propagates
/// out of here.
pub async fn run() {
    demo::scenarios::run().await;
    println!();
    api::run().await;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
