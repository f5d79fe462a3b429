//! HTTP-call wrapper
//!
//! A thin wrapper around a single GET endpoint, demonstrating how to
//! collapse heterogeneous failure shapes into one normalized error.

pub mod client;

pub use client::{bad_request, fetch_json, good_request, request_with_error, ApiResponse};

/// Run the three fixed call sites in sequence, logging each outcome
///
/// Failures are expected for the first two calls; nothing is retried and
/// nothing propagates past the demonstration.
pub async fn run() {
    println!("Entering the HTTP-wrapper demonstration");

    println!("\nCalling an unresolvable host:");
    if let Err(error) = bad_request().await {
        println!("normalized as: kind={}, code={}", error.kind(), error.error_code());
    }

    println!("\nCalling an endpoint expected to return an error:");
    if let Err(error) = request_with_error().await {
        println!("normalized as: kind={}, code={}", error.kind(), error.error_code());
    }

    println!("\nCalling an endpoint expected to succeed:");
    if let Err(error) = good_request().await {
        println!("normalized as: kind={}, code={}", error.kind(), error.error_code());
    }
}
