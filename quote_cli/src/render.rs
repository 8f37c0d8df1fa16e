//! Text renderings of quotes for stdout.
use std::io::Write;

use quote_table::{Quote, QuoteRecord, Result};

use crate::args::Format;

/// Renders one quote as a single line without the trailing newline.
pub fn render(quote: Quote, format: Format) -> Result<String> {
    let line = match format {
        Format::Hex => format!("[{}] {}", quote.index(), quote.hex()),
        Format::Escaped => format!("[{}] {}", quote.index(), quote),
        Format::Json => serde_json::to_string(&QuoteRecord::from(quote))?,
    };
    Ok(line)
}

/// Writes one rendered quote followed by a newline.
pub fn write_quote<W: Write + ?Sized>(out: &mut W, quote: Quote, format: Format) -> Result<()> {
    writeln!(out, "{}", render(quote, format)?)?;
    Ok(())
}
