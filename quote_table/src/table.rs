//! The quote table and its read-only accessors.
//!
//! Each quote is a sequence of glyph codes for the LED matrix font. The codes only
//! mean something together with the font table that the display firmware pairs
//! them with; this module treats them as opaque bytes.
//!
//! The table lives in static storage for the whole process. Reads never allocate
//! and never mutate anything, so any number of readers may share it.
use std::fmt;
use std::iter::{Copied, Enumerate, FusedIterator};
use std::slice;

use crate::error::QuoteError;
use crate::result::Result;

/// Encoded quotes in display order.
pub const QUOTES: &[&[u8]] = &[
    &[0x8B, 0x8A, 0x85, 0x93, 0x83, 0x8A, 0x8D, 0x8C],
    &[
        0x95, 0x96, 0x92, 0x91, 0x92, 0x84, 0x89, 0x97, 0x92, 0x8F, 0x92, 0x86,
    ],
    &[0x90, 0x94, 0x98, 0x99],
    &[0x80, 0x8E, 0x88, 0x81, 0x87, 0x82, 0x84, 0x86, 0x80],
];

/// Number of quotes in [`QUOTES`].
pub const QUOTE_COUNT: usize = QUOTES.len();

const _: () = {
    assert!(QUOTE_COUNT > 0, "quote table is empty");
    let mut i = 0;
    while i < QUOTE_COUNT {
        assert!(!QUOTES[i].is_empty(), "quote table holds an empty quote");
        i += 1;
    }
};

/// Returns the raw codes of the quote at `index`.
///
/// Meant for `const` items: an out-of-range literal index fails the build instead
/// of failing at runtime. At runtime prefer [`QuoteTable::get`].
///
/// ```
/// const GREETING: &[u8] = quote_table::quote_at(2);
/// assert_eq!(GREETING, &[0x90, 0x94, 0x98, 0x99]);
/// ```
pub const fn quote_at(index: usize) -> &'static [u8] {
    QUOTES[index]
}

/// One quote from the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Quote {
    index: usize,
    codes: &'static [u8],
}

impl Quote {
    pub(crate) const fn new(index: usize, codes: &'static [u8]) -> Self {
        Quote { index, codes }
    }

    /// Position of this quote in the table.
    pub fn index(&self) -> usize {
        self.index
    }

    /// The glyph codes of this quote.
    pub fn as_bytes(&self) -> &'static [u8] {
        self.codes
    }

    /// Number of glyph codes.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Always `false` for quotes read from the table.
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Iterates the glyph codes in order.
    pub fn codes(&self) -> Copied<slice::Iter<'static, u8>> {
        self.codes.iter().copied()
    }

    /// Space-separated upper-case hex, e.g. `90 94 98 99`.
    pub fn hex(&self) -> String {
        self.codes
            .iter()
            .map(|code| format!("{:02X}", code))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for Quote {
    /// Writes the escaped form, e.g. `\x90\x94\x98\x99`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for code in self.codes {
            write!(f, "\\x{:02X}", code)?;
        }
        Ok(())
    }
}

impl AsRef<[u8]> for Quote {
    fn as_ref(&self) -> &[u8] {
        self.codes
    }
}

impl PartialEq<[u8]> for Quote {
    fn eq(&self, other: &[u8]) -> bool {
        self.codes == other
    }
}

impl PartialEq<&[u8]> for Quote {
    fn eq(&self, other: &&[u8]) -> bool {
        self.codes == *other
    }
}

/// Handle over the static quote table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QuoteTable;

/// The process-wide quote table.
pub const TABLE: QuoteTable = QuoteTable::new();

impl QuoteTable {
    /// Creates a handle. All handles read the same static data.
    pub const fn new() -> Self {
        QuoteTable
    }

    /// Number of quotes in the table.
    pub const fn count(&self) -> usize {
        QUOTE_COUNT
    }

    /// Returns the quote at `index`.
    ///
    /// Fails with [`QuoteError::IndexOutOfRange`] when `index >= self.count()`.
    pub fn get(&self, index: usize) -> Result<Quote> {
        QUOTES
            .get(index)
            .map(|codes| Quote::new(index, codes))
            .ok_or(QuoteError::IndexOutOfRange {
                index,
                count: QUOTE_COUNT,
            })
    }

    /// Iterates all quotes in display order.
    pub fn iter(&self) -> Iter {
        Iter {
            inner: QUOTES.iter().enumerate(),
        }
    }
}

impl IntoIterator for QuoteTable {
    type Item = Quote;
    type IntoIter = Iter;

    fn into_iter(self) -> Iter {
        self.iter()
    }
}

impl IntoIterator for &QuoteTable {
    type Item = Quote;
    type IntoIter = Iter;

    fn into_iter(self) -> Iter {
        self.iter()
    }
}

/// Iterator over the quotes of a [`QuoteTable`].
#[derive(Debug, Clone)]
pub struct Iter {
    inner: Enumerate<slice::Iter<'static, &'static [u8]>>,
}

impl Iterator for Iter {
    type Item = Quote;

    fn next(&mut self) -> Option<Quote> {
        self.inner
            .next()
            .map(|(index, codes)| Quote::new(index, codes))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Iter {
    fn next_back(&mut self) -> Option<Quote> {
        self.inner
            .next_back()
            .map(|(index, codes)| Quote::new(index, codes))
    }
}

impl ExactSizeIterator for Iter {}

impl FusedIterator for Iter {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_is_derived_from_table() {
        assert_eq!(QUOTE_COUNT, QUOTES.len());
        assert_eq!(TABLE.count(), 4);
    }

    #[test]
    fn first_quote_matches_codes() {
        let quote = TABLE.get(0).unwrap();
        assert_eq!(quote.index(), 0);
        assert_eq!(quote.len(), 8);
        assert_eq!(
            quote.as_bytes(),
            &[0x8B, 0x8A, 0x85, 0x93, 0x83, 0x8A, 0x8D, 0x8C]
        );
    }

    #[test]
    fn third_quote_matches_codes() {
        let quote = TABLE.get(2).unwrap();
        assert_eq!(quote.len(), 4);
        assert_eq!(quote, [0x90u8, 0x94, 0x98, 0x99].as_slice());
    }

    #[test]
    fn index_past_end_is_rejected() {
        let err = TABLE.get(4).unwrap_err();
        assert!(matches!(
            err,
            QuoteError::IndexOutOfRange { index: 4, count: 4 }
        ));
        assert!(TABLE.get(usize::MAX).is_err());
    }

    #[test]
    fn reads_are_idempotent() {
        for index in 0..TABLE.count() {
            let a = TABLE.get(index).unwrap();
            let b = TABLE.get(index).unwrap();
            assert_eq!(a, b);
            assert!(std::ptr::eq(a.as_bytes(), b.as_bytes()));
        }
    }

    #[test]
    fn hex_and_escaped_forms() {
        let quote = TABLE.get(2).unwrap();
        assert_eq!(quote.hex(), "90 94 98 99");
        assert_eq!(quote.to_string(), "\\x90\\x94\\x98\\x99");
    }

    #[test]
    fn iter_walks_in_order_both_ways() {
        let forward: Vec<usize> = TABLE.iter().map(|q| q.index()).collect();
        assert_eq!(forward, vec![0, 1, 2, 3]);
        assert_eq!(TABLE.iter().len(), 4);

        let last = TABLE.iter().next_back().unwrap();
        assert_eq!(last.index(), 3);
        assert_eq!(last.len(), 9);
    }

    #[test]
    fn const_accessor_matches_get() {
        const SECOND: &[u8] = quote_at(1);
        assert_eq!(TABLE.get(1).unwrap().as_bytes(), SECOND);
    }
}
