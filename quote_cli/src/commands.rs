//! Subcommand handlers.
//!
//! Each handler writes to the given output so it can run against stdout in the
//! binary and against a buffer in tests.
use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;

use log::{debug, info};
use quote_table::{CodeRange, QUOTE_COUNT, Result, TABLE};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde_json::json;

use crate::args::{Commands, Format};
use crate::render::write_quote;

/// Runs one subcommand, writing quotes to `out`.
///
/// `shutdown` is polled by long-running commands and stops them early when set.
pub fn run<W: Write>(
    command: &Commands,
    format: Format,
    out: &mut W,
    shutdown: &AtomicBool,
) -> Result<()> {
    match command {
        Commands::Count => count(out, format),
        Commands::Show { index } => write_quote(out, TABLE.get(*index)?, format),
        Commands::List => {
            for quote in TABLE.iter() {
                write_quote(out, quote, format)?;
            }
            Ok(())
        }
        Commands::Random { seed } => {
            let index = match seed {
                Some(seed) => pick_index(&mut StdRng::seed_from_u64(*seed)),
                None => pick_index(&mut rand::rng()),
            };
            debug!("Picked quote {}", index);
            write_quote(out, TABLE.get(index)?, format)
        }
        Commands::Cycle {
            start,
            rounds,
            interval_ms,
        } => {
            let shown = cycle(
                out,
                format,
                *start,
                *rounds,
                Duration::from_millis(*interval_ms),
                shutdown,
            )?;
            info!("Cycle finished after {} quotes", shown);
            Ok(())
        }
        Commands::Validate { first, last } => {
            let range = CodeRange::new(*first, *last)?;
            TABLE.validate(&range)?;
            writeln!(out, "All {} quotes fit {}", TABLE.count(), range)?;
            Ok(())
        }
    }
}

fn count<W: Write>(out: &mut W, format: Format) -> Result<()> {
    match format {
        Format::Json => writeln!(out, "{}", json!({ "count": QUOTE_COUNT }))?,
        Format::Hex | Format::Escaped => writeln!(out, "{}", QUOTE_COUNT)?,
    }
    Ok(())
}

/// Picks a table index uniformly at random.
pub fn pick_index<R: Rng>(rng: &mut R) -> usize {
    rng.random_range(0..QUOTE_COUNT)
}

/// Prints `rounds` passes over the table starting at `start`, pausing `interval`
/// between quotes. Returns the number of quotes printed.
fn cycle<W: Write>(
    out: &mut W,
    format: Format,
    start: usize,
    rounds: usize,
    interval: Duration,
    shutdown: &AtomicBool,
) -> Result<usize> {
    let total = rounds.saturating_mul(TABLE.count());
    let mut shown = 0;

    for quote in TABLE.cycle_from(start)?.take(total) {
        if shown > 0 && !interval.is_zero() {
            thread::sleep(interval);
        }
        if shutdown.load(Ordering::Relaxed) {
            info!("Cycle interrupted after {} quotes", shown);
            break;
        }
        write_quote(out, quote, format)?;
        out.flush()?;
        shown += 1;
    }
    Ok(shown)
}
