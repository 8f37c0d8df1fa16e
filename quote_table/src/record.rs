//! Owned, serializable snapshot of a quote.
use serde::{Deserialize, Serialize};

use crate::table::Quote;

/// JSON-friendly view of one quote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteRecord {
    /// Position in the table.
    pub index: usize,
    /// Number of glyph codes.
    pub len: usize,
    /// Space-separated hex codes.
    pub hex: String,
    /// Raw glyph codes.
    pub codes: Vec<u8>,
}

impl From<Quote> for QuoteRecord {
    fn from(quote: Quote) -> Self {
        QuoteRecord {
            index: quote.index(),
            len: quote.len(),
            hex: quote.hex(),
            codes: quote.as_bytes().to_vec(),
        }
    }
}
