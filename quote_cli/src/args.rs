//! Command-line arguments for the quote CLI.
//!
//! This module defines the CLI interface using `clap`. See `main` for end-to-end usage.
use clap::{Parser, Subcommand, ValueEnum};
use strum_macros::Display;

/// Pause between quotes in `cycle` mode, in milliseconds.
pub const DEFAULT_INTERVAL_MS: u64 = 2000;
/// Passes over the table in `cycle` mode.
pub const DEFAULT_ROUNDS: usize = 1;

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Output format for printed quotes.
    #[clap(long, value_enum, default_value_t = Format::Hex, global = true)]
    pub format: Format,

    /// What to do with the table.
    #[command(subcommand)]
    pub command: Commands,
}

/// How quotes are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Display)]
#[clap(rename_all = "lower")]
#[strum(serialize_all = "lowercase")]
pub enum Format {
    /// `[0] 8B 8A 85`
    Hex,
    /// `[0] \x8B\x8A\x85`
    Escaped,
    /// One JSON object per line.
    Json,
}

/// Subcommands.
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Commands {
    /// Print the number of quotes.
    Count,

    /// Print the quote at INDEX.
    Show {
        /// Zero-based table index.
        index: usize,
    },

    /// Print every quote in display order.
    List,

    /// Print one quote picked at random.
    Random {
        /// Seed for a reproducible pick.
        #[clap(long)]
        seed: Option<u64>,
    },

    /// Print quotes in display order, wrapping after the last one.
    Cycle {
        /// Index of the first quote shown.
        #[clap(long, default_value_t = 0)]
        start: usize,

        /// Passes over the whole table.
        #[clap(long, default_value_t = DEFAULT_ROUNDS)]
        rounds: usize,

        /// Pause between quotes, in milliseconds.
        #[clap(long, default_value_t = DEFAULT_INTERVAL_MS)]
        interval_ms: u64,
    },

    /// Check that every code falls inside the font's code range.
    Validate {
        /// First code the font defines, e.g. `0x80`.
        #[clap(long, value_parser = parse_code)]
        first: u8,

        /// Last code the font defines, e.g. `0x99`.
        #[clap(long, value_parser = parse_code)]
        last: u8,
    },
}

/// Parses a glyph code given as `0x99` or `153`.
fn parse_code(raw: &str) -> Result<u8, String> {
    let trimmed = raw.trim();
    let parsed = match trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
    {
        Some(hex) => u8::from_str_radix(hex, 16),
        None => trimmed.parse::<u8>(),
    };
    parsed.map_err(|e| format!("invalid glyph code '{}': {}", raw, e))
}
