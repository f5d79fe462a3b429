//! Narrated demonstration scenarios
//!
//! This module holds the computation factories used throughout the demo
//! and the narrated walk-through itself. Everything here prints as it
//! goes; the console is the whole point.

use std::time::Duration;

use colored::Colorize;
use tokio::time::sleep;

use super::deferred::{wait_all, Deferred, Rejection};

/// Fixed success value of the always-resolving computation
pub const RESOLVED_VALUE: &str = "resolving computation settled OK";

/// Fixed code carried by the always-rejecting computation
pub const REJECTED_CODE: u16 = 500;

/// Fixed message carried by the always-rejecting computation
pub const REJECTED_MESSAGE: &str = "rejecting computation settled with failure";

/// Fixed success value of the flaky computation
pub const FLAKY_SUCCESS_VALUE: &str = "flaky computation resolving";

/// Fixed failure message of the flaky computation
pub const FLAKY_FAILURE_MESSAGE: &str = "flaky computation rejecting";

/// Pause between demonstration phases, purely so the interleaved logging
/// reads sensibly
const PHASE_PAUSE: Duration = Duration::from_millis(500);

/// A computation that settles successfully the moment it is created
pub fn resolved_computation() -> Deferred<String> {
    Deferred::spawn(async {
        println!("Instance of a resolving computation executing");
        Ok(RESOLVED_VALUE.to_string())
    })
}

/// A computation that always settles with failure
///
/// Sleeps briefly before rejecting so that, inside an aggregate wait, the
/// other members get a chance to start executing first.
pub fn rejected_computation() -> Deferred<String> {
    Deferred::spawn(async {
        sleep(Duration::from_millis(100)).await;
        println!("Instance of a rejecting computation executing");
        Err(Rejection::coded(REJECTED_CODE, REJECTED_MESSAGE))
    })
}

/// Whether a uniform draw in `1..=10` counts as a failed connection
///
/// Exactly 3 of the 10 equally likely buckets fail, simulating a ~30%
/// failure rate.
pub fn connection_flakes(draw: u8) -> bool {
    draw <= 3
}

/// A computation that simulates an unreliable connection
///
/// Settles successfully about 70% of the time and rejects otherwise.
pub fn flaky_computation() -> Deferred<String> {
    Deferred::spawn(async {
        println!("Instance of a flaky computation executing");
        let draw = rand::random_range(1..=10);
        if connection_flakes(draw) {
            println!("{}", "Connection failed, rejecting".red());
            Err(Rejection::message(FLAKY_FAILURE_MESSAGE))
        } else {
            println!("{}", "Connection succeeded, resolving".green());
            Ok(FLAKY_SUCCESS_VALUE.to_string())
        }
    })
}

fn banner(title: &str) {
    println!();
    println!("{}", "=".repeat(60).blue());
    println!("{}", title.bold());
    println!();
}

/// Run the full narrated demonstration
pub async fn run() {
    println!("Entering the deferred-computation demonstration");

    // Phase 1: two computations that settle immediately on creation, one
    // observer registered for each. The rejecting one must be observed
    // where the reaction is registered; there is no enclosing try block to
    // catch it later.
    let simple = resolved_computation();
    let broken = rejected_computation();

    match simple.wait().await {
        Ok(value) => println!("simple computation resolved: {}", value.green()),
        Err(error) => println!("this will never fire: {}", error),
    }
    match broken.wait().await {
        Ok(_) => println!("this will never fire"),
        Err(error) => println!("broken computation was rejected: {}", error.to_string().red()),
    }

    sleep(PHASE_PAUSE).await;

    // Phase 2: observe the very same computations again. Settlement is
    // memoized, so the bodies do not execute a second time and the
    // outcomes are identical.
    banner("Observing the same computations again:");
    match simple.wait().await {
        Ok(value) => println!("simple computation resolved: {}", value.green()),
        Err(error) => println!("this will never fire: {}", error),
    }
    match broken.wait().await {
        Ok(_) => println!("this will never fire"),
        Err(error) => println!("broken computation was rejected: {}", error.to_string().red()),
    }

    sleep(PHASE_PAUSE).await;

    // Phase 3: a computation that fails about 30% of the time, the way a
    // real API call might.
    banner("A flaky computation:");
    let iffy = flaky_computation();
    match iffy.wait().await {
        Ok(value) => println!("We got lucky: {}", value.green()),
        Err(error) => println!("You've got bad, bad luck: {}", error.to_string().red()),
    }

    sleep(PHASE_PAUSE).await;

    // Phase 4: aggregate waiting. The collection includes an
    // always-rejecting member, so the aggregate is guaranteed to fail; the
    // result binding below demonstrably never gets assigned.
    banner("Aggregate wait, guaranteed to fail:");
    let doomed = vec![
        resolved_computation(),
        flaky_computation(),
        rejected_computation(),
    ];

    let mut responses: Option<Vec<String>> = None;
    match wait_all(&doomed).await {
        Ok(results) => {
            // Unreachable with this collection
            responses = Some(results);
            println!("responses after all succeeded: {:?}", responses);
        }
        Err(error) => {
            println!("In the failure handler: {}", error.to_string().red());
            println!("responses was never assigned: {:?}", responses);
        }
    }

    sleep(PHASE_PAUSE).await;

    // Phase 5: the same aggregate without the doomed member. Succeeds
    // unless the flaky member fails on this particular run.
    banner("Aggregate wait, succeeds when luck holds:");
    let hopeful = vec![resolved_computation(), flaky_computation()];

    match wait_all(&hopeful).await {
        Ok(results) => println!("responses after all succeeded: {:?}", results),
        Err(error) => println!("In the failure handler: {}", error.to_string().red()),
    }
}
