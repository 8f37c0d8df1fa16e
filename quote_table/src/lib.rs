//!
//! Encoded quotes for the LED matrix marquee.
//!
//! This crate aggregates:
//! - `table` — the static quote table, `Quote` and `QuoteTable`.
//! - `cycle` — endless iteration in display order.
//! - `glyph` — validation against the font's glyph codes.
//! - `record` — serializable quote snapshots.
//! - `error` — unified error type `QuoteError`.
//! - `result` — handy `Result<T, QuoteError>` alias.
#![warn(missing_docs)]
pub mod cycle;
pub mod error;
pub mod glyph;
pub mod record;
pub mod result;
pub mod table;

pub use cycle::QuoteCycle;
pub use error::QuoteError;
pub use glyph::{CodeRange, GlyphSet};
pub use record::QuoteRecord;
pub use result::Result;
pub use table::{QUOTE_COUNT, QUOTES, Quote, QuoteTable, TABLE, quote_at};
