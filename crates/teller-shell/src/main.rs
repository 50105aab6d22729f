//! Interactive operator shell around the Teller arbiter.
//!
//! ```text
//! teller-shell <claims-file> <cap0> <cap1> <cap2> <cap3>
//! ```
//!
//! Pins the classic 5-customer × 4-resource-type shape; the arbiter
//! itself is dimension-generic. Capacities come from the command line,
//! maximum claims from the comma-delimited file, and the shell then
//! loops reading `RQ` / `RL` / `*` / `exit` commands from stdin.

#![forbid(unsafe_code)]

mod command;
mod loader;

use std::env;
use std::io::{self, BufRead, Write};
use std::path::Path;
use std::process::ExitCode;

use teller::prelude::*;

use command::{parse_line, Command, ParseError};
use loader::load_claims;

const CUSTOMERS: usize = 5;
const RESOURCES: usize = 4;

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();
    if args.len() != 2 + RESOURCES {
        let name = args.first().map(String::as_str).unwrap_or("teller-shell");
        eprintln!("Usage: {name} <claims-file> <cap0> <cap1> <cap2> <cap3>");
        return ExitCode::FAILURE;
    }

    let mut capacities = Vec::with_capacity(RESOURCES);
    for arg in &args[2..] {
        match arg.parse::<u32>() {
            Ok(units) => capacities.push(units),
            Err(_) => {
                eprintln!("capacity '{arg}' is not a non-negative integer");
                return ExitCode::FAILURE;
            }
        }
    }

    let claims = match load_claims(Path::new(&args[1]), CUSTOMERS, RESOURCES) {
        Ok(claims) => claims,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let config = ArbiterConfig {
        customers: CUSTOMERS,
        resources: RESOURCES,
        capacities,
        claims,
    };
    let mut arbiter = match Arbiter::new(config) {
        Ok(arbiter) => arbiter,
        Err(e) => {
            eprintln!("invalid configuration: {e}");
            return ExitCode::FAILURE;
        }
    };

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("\nEnter command: ");
        let _ = io::stdout().flush();

        let line = match lines.next() {
            Some(Ok(line)) => line,
            Some(Err(e)) => {
                eprintln!("could not read input: {e}");
                return ExitCode::FAILURE;
            }
            None => break,
        };

        match parse_line(&line, RESOURCES) {
            Ok(Command::Request { customer, amounts }) => {
                match arbiter.request(customer, &amounts) {
                    Ok(()) => println!("Request granted."),
                    Err(denial) => println!("Request denied: {denial}."),
                }
            }
            Ok(Command::Release { customer, amounts }) => {
                match arbiter.release(customer, &amounts) {
                    Ok(()) => println!("Resources released."),
                    Err(denial) => println!("Release denied: {denial}."),
                }
            }
            Ok(Command::Print) => print_state(&arbiter.snapshot()),
            Ok(Command::Exit) => break,
            Err(ParseError::Empty) => {}
            Err(e) => println!("{e}"),
        }
    }

    print_metrics(arbiter.metrics());
    ExitCode::SUCCESS
}

fn print_state(view: &StateView) {
    println!("\n--- System State ---");
    print_matrix("Maximum", &view.maximum);
    print_matrix("Allocated", &view.allocation);
    print_matrix("Needed", &view.need);
    println!("\nAvailable:");
    println!("{}", counts(&view.available));
    println!("--------------------");
}

fn print_matrix(label: &str, matrix: &ClaimMatrix) {
    println!("\n{label}:");
    for (i, row) in matrix.rows().enumerate() {
        println!("P{i}: {}", counts(row));
    }
}

fn counts(row: &[u32]) -> String {
    row.iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

fn print_metrics(metrics: &OpMetrics) {
    println!(
        "\n{} requests granted, {} releases granted, {} operations denied \
         ({} unsafe, {} over claim, {} unavailable, {} over release, {} malformed).",
        metrics.requests_granted,
        metrics.releases_granted,
        metrics.total_denied(),
        metrics.denied_unsafe,
        metrics.denied_claim_exceeded,
        metrics.denied_unavailable,
        metrics.denied_over_release,
        metrics.denied_invalid_customer + metrics.denied_invalid_argument,
    );
}
