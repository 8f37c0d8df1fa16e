//! Error type shared by the quote table and the CLI.
//!
//! The `QuoteError` enum covers the one way a table read can fail (an index past
//! the end), glyph-set validation failures, and the I/O and serialization
//! failures the CLI runs into while printing quotes.
use std::io;

use thiserror::Error;

/// Unified error type for the workspace.
#[derive(Error, Debug)]
pub enum QuoteError {
    /// A quote was requested at an index past the end of the table.
    #[error("Quote index {index} out of range: table holds {count} quotes")]
    IndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Number of quotes in the table.
        count: usize,
    },

    /// A quote contains a code the supplied glyph set cannot render.
    #[error("Quote {quote} has unknown glyph code 0x{code:02X} at position {position}")]
    UnknownGlyph {
        /// Index of the offending quote.
        quote: usize,
        /// Position of the code inside the quote.
        position: usize,
        /// The code itself.
        code: u8,
    },

    /// I/O error while writing output.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Failure while encoding JSON via serde_json.
    #[error("JSON serialization error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    /// Generic error with a human-readable message.
    #[error("Format error: {0}")]
    Format(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_message_names_index_and_count() {
        let err = QuoteError::IndexOutOfRange { index: 4, count: 4 };
        assert_eq!(
            err.to_string(),
            "Quote index 4 out of range: table holds 4 quotes"
        );
    }

    #[test]
    fn unknown_glyph_message_is_hex() {
        let err = QuoteError::UnknownGlyph {
            quote: 2,
            position: 3,
            code: 0x99,
        };
        assert_eq!(
            err.to_string(),
            "Quote 2 has unknown glyph code 0x99 at position 3"
        );
    }

    #[test]
    fn io_errors_convert() {
        let err: QuoteError = io::Error::new(io::ErrorKind::BrokenPipe, "closed").into();
        assert!(matches!(err, QuoteError::Io(_)));
    }
}
