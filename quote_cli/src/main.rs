//! Quote CLI — inspects the encoded quote table used by the LED matrix marquee.
//!
//! Prints the number of quotes, single quotes, the whole table, a random pick, or
//! a timed cycle in display order, and checks the table against a font's code range.
//!
//! Usage example (CLI):
//! ```bash
//! quote_cli show 2
//! quote_cli --format json list
//! quote_cli cycle --start 1 --rounds 3 --interval-ms 500
//! quote_cli validate --first 0x80 --last 0x99
//! ```
//!
//! Quotes go to stdout; log lines go to stderr and honor `RUST_LOG`.
#![warn(missing_docs)]
mod args;
mod commands;
mod render;

use crate::args::Args;
use clap::Parser;
use log::{error, info};
use quote_table::QuoteError;
use quote_table::Result;
use std::io;
use std::process::ExitCode;
use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

fn main() -> ExitCode {
    init_logger();
    let args = Args::parse();
    report(run(&args))
}

/// Installs the Ctrl+C handler and runs the selected subcommand against stdout.
fn run(args: &Args) -> Result<(), QuoteError> {
    let shutdown = Arc::new(AtomicBool::new(false));
    {
        let shutdown = shutdown.clone();
        ctrlc::set_handler(move || {
            info!("Ctrl+C received. Stopping...");
            shutdown.store(true, Ordering::SeqCst);
        })
        .map_err(|e| QuoteError::Format(format!("Error setting Ctrl+C handler: {}", e)))?;
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    commands::run(&args.command, args.format, &mut out, &shutdown)
}

/// Logs a failure once and maps it to the process exit code.
fn report(result: Result<(), QuoteError>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}
