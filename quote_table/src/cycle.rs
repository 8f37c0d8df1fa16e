//! Endless iteration over the table in display order.
//!
//! A marquee shows the quotes one after another and starts over after the last one.
//! `QuoteCycle` yields them in that order; timing and scrolling are up to the consumer.
use log::trace;

use crate::error::QuoteError;
use crate::result::Result;
use crate::table::{QUOTE_COUNT, QUOTES, Quote, QuoteTable};

/// Infinite iterator over the quotes, wrapping from the last back to the first.
#[derive(Debug, Clone)]
pub struct QuoteCycle {
    next: usize,
}

impl QuoteCycle {
    /// Index of the quote the next call to `next()` returns.
    pub fn position(&self) -> usize {
        self.next
    }
}

impl Iterator for QuoteCycle {
    type Item = Quote;

    fn next(&mut self) -> Option<Quote> {
        let codes = QUOTES.get(self.next)?;
        let quote = Quote::new(self.next, codes);
        self.next = (self.next + 1) % QUOTE_COUNT;
        trace!("cycle advanced to quote {}", self.next);
        Some(quote)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl QuoteTable {
    /// Cycles the quotes starting from the first one.
    pub fn cycle(&self) -> QuoteCycle {
        QuoteCycle { next: 0 }
    }

    /// Cycles the quotes starting from `start`.
    ///
    /// Fails with [`QuoteError::IndexOutOfRange`] when `start` is not a valid index.
    pub fn cycle_from(&self, start: usize) -> Result<QuoteCycle> {
        if start >= QUOTE_COUNT {
            return Err(QuoteError::IndexOutOfRange {
                index: start,
                count: QUOTE_COUNT,
            });
        }
        Ok(QuoteCycle { next: start })
    }
}

#[cfg(test)]
mod tests {
    use crate::table::TABLE;

    #[test]
    fn wraps_after_last_quote() {
        let indices: Vec<usize> = TABLE
            .cycle()
            .take(TABLE.count() + 2)
            .map(|q| q.index())
            .collect();
        assert_eq!(indices, vec![0, 1, 2, 3, 0, 1]);
    }

    #[test]
    fn starts_at_requested_index() {
        let mut cycle = TABLE.cycle_from(3).unwrap();
        assert_eq!(cycle.position(), 3);
        assert_eq!(cycle.next().unwrap().index(), 3);
        assert_eq!(cycle.position(), 0);
        assert_eq!(cycle.next().unwrap(), TABLE.get(0).unwrap());
    }

    #[test]
    fn invalid_start_is_rejected() {
        assert!(TABLE.cycle_from(TABLE.count()).is_err());
    }
}
