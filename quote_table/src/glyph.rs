//! Checking quotes against the font they will be rendered with.
//!
//! The table does not know which codes the display font defines; the font is owned
//! by the firmware. Callers describe it with a [`GlyphSet`] and validate the table
//! against it before handing quotes to a renderer.
use std::fmt;
use std::ops::RangeInclusive;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::QuoteError;
use crate::result::Result;
use crate::table::{Quote, QuoteTable};

/// A set of glyph codes a font can render.
pub trait GlyphSet {
    /// Returns `true` if `code` has a glyph.
    fn contains(&self, code: u8) -> bool;
}

/// Inclusive range of glyph codes.
///
/// Always satisfies `first <= last`, including when deserialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawCodeRange")]
pub struct CodeRange {
    first: u8,
    last: u8,
}

/// Unchecked wire form of [`CodeRange`].
#[derive(Deserialize)]
struct RawCodeRange {
    first: u8,
    last: u8,
}

impl TryFrom<RawCodeRange> for CodeRange {
    type Error = QuoteError;

    fn try_from(raw: RawCodeRange) -> Result<Self> {
        CodeRange::new(raw.first, raw.last)
    }
}

impl CodeRange {
    /// Creates the range `first..=last`.
    pub fn new(first: u8, last: u8) -> Result<Self> {
        if first > last {
            return Err(QuoteError::Format(format!(
                "invalid code range 0x{:02X}..=0x{:02X}",
                first, last
            )));
        }
        Ok(CodeRange { first, last })
    }

    /// Lowest code in the range.
    pub fn first(&self) -> u8 {
        self.first
    }

    /// Highest code in the range.
    pub fn last(&self) -> u8 {
        self.last
    }

    /// Number of codes in the range.
    pub fn len(&self) -> usize {
        usize::from(self.last - self.first) + 1
    }

    /// A range is never empty.
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl fmt::Display for CodeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:02X}..=0x{:02X}", self.first, self.last)
    }
}

impl GlyphSet for CodeRange {
    fn contains(&self, code: u8) -> bool {
        (self.first..=self.last).contains(&code)
    }
}

impl GlyphSet for RangeInclusive<u8> {
    fn contains(&self, code: u8) -> bool {
        RangeInclusive::contains(self, &code)
    }
}

impl GlyphSet for [u8] {
    fn contains(&self, code: u8) -> bool {
        self.iter().any(|&c| c == code)
    }
}

impl Quote {
    /// Checks that every code of this quote is in `glyphs`.
    ///
    /// Reports the first unknown code as [`QuoteError::UnknownGlyph`].
    pub fn validate<G: GlyphSet + ?Sized>(&self, glyphs: &G) -> Result<()> {
        match self.codes().position(|code| !glyphs.contains(code)) {
            Some(position) => Err(QuoteError::UnknownGlyph {
                quote: self.index(),
                position,
                code: self.as_bytes()[position],
            }),
            None => Ok(()),
        }
    }
}

impl QuoteTable {
    /// Checks every quote against `glyphs`, stopping at the first unknown code.
    pub fn validate<G: GlyphSet + ?Sized>(&self, glyphs: &G) -> Result<()> {
        for quote in self.iter() {
            quote.validate(glyphs)?;
            debug!("quote {} ok ({} codes)", quote.index(), quote.len());
        }
        Ok(())
    }

    /// Smallest range covering every code in the table.
    pub fn code_span(&self) -> Option<CodeRange> {
        let mut codes = self.iter().flat_map(|quote| quote.codes());
        let first = codes.next()?;
        let (lo, hi) = codes.fold((first, first), |(lo, hi), code| {
            (lo.min(code), hi.max(code))
        });
        Some(CodeRange { first: lo, last: hi })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::TABLE;

    #[test]
    fn span_covers_table() {
        let span = TABLE.code_span().unwrap();
        assert_eq!(span, CodeRange::new(0x80, 0x99).unwrap());
        assert_eq!(span.len(), 26);
        assert_eq!(span.to_string(), "0x80..=0x99");
    }

    #[test]
    fn table_fits_its_span() {
        let span = TABLE.code_span().unwrap();
        assert!(TABLE.validate(&span).is_ok());
    }

    #[test]
    fn first_unknown_code_is_reported() {
        let err = TABLE.validate(&(0x80u8..=0x98)).unwrap_err();
        assert!(matches!(
            err,
            QuoteError::UnknownGlyph {
                quote: 2,
                position: 3,
                code: 0x99
            }
        ));
    }

    #[test]
    fn explicit_code_list() {
        let glyphs: &[u8] = &[0x90, 0x94, 0x98, 0x99];
        assert!(TABLE.get(2).unwrap().validate(glyphs).is_ok());
        assert!(TABLE.get(0).unwrap().validate(glyphs).is_err());
    }

    #[test]
    fn reversed_range_is_rejected() {
        assert!(CodeRange::new(0x99, 0x80).is_err());
    }

    #[test]
    fn deserialized_range_is_checked() {
        let reversed = serde_json::from_str::<CodeRange>(r#"{"first":153,"last":128}"#);
        assert!(reversed.is_err());

        let range: CodeRange = serde_json::from_str(r#"{"first":128,"last":153}"#).unwrap();
        assert_eq!(range, CodeRange::new(0x80, 0x99).unwrap());
        assert_eq!(range.len(), 26);
    }

    #[test]
    fn range_round_trips_through_json() {
        let range = CodeRange::new(0x85, 0x85).unwrap();
        let json = serde_json::to_string(&range).unwrap();
        assert_eq!(json, r#"{"first":133,"last":133}"#);
        assert_eq!(serde_json::from_str::<CodeRange>(&json).unwrap(), range);
        assert_eq!(range.len(), 1);
    }
}
