//! Async Primer CLI
//!
//! Command-line entry point for the demonstration.

use std::env;
use std::process;

use async_primer::{api, demo, run, VERSION};

#[tokio::main]
async fn main() {
    let args: Vec<String> = env::args().collect();

    let mut show_help = false;
    let mut selection: Option<&String> = None;

    for arg in &args[1..] {
        match arg.as_str() {
            "--help" | "-h" => show_help = true,
            _ if arg.starts_with('-') => {
                eprintln!("Unknown flag: {}", arg);
                print_usage();
                process::exit(1);
            }
            _ => selection = Some(arg),
        }
    }

    if show_help {
        print_help();
        return;
    }

    // No selection runs the deferred-computation demonstration, matching
    // the original entry point.
    match selection.map(String::as_str) {
        None | Some("promises") => demo::scenarios::run().await,
        Some("http") => api::run().await,
        Some("all") => run().await,
        Some(other) => {
            eprintln!("Unknown demonstration: {}", other);
            print_usage();
            process::exit(1);
        }
    }
}

fn print_usage() {
    eprintln!("Usage: async-primer [OPTIONS] [promises|http|all]");
    eprintln!("       async-primer --help");
}

fn print_help() {
    println!("Async Primer v{} - asynchronous control flow, demonstrated", VERSION);
    println!();
    println!("USAGE:");
    println!("    async-primer [OPTIONS] [demonstration]");
    println!();
    println!("DEMONSTRATIONS:");
    println!("    promises    Deferred computations and aggregate waiting (default)");
    println!("    http        The normalized HTTP GET wrapper (performs real requests)");
    println!("    all         Both of the above, in sequence");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help    Show this help message");
}
