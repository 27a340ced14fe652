//! Seven-segment glyph patterns
//!
//! Patterns are segment flag bytes: bit 0 is segment a through bit 6 for
//! segment g, bit 7 is the decimal point. See [`crate::segment`] for the
//! segment layout.
//!
//! ## Example
//!
//! ```
//! use pcf8566::glyph;
//!
//! assert_eq!(glyph::DIGITS[8], 0x7F);
//! assert_eq!(glyph::from_ascii(b'H'), Some(0x76));
//! assert_eq!(glyph::from_ascii(b'W'), None);
//! ```

use crate::segment::Segment;

/// Patterns for the decimal digits 0 to 9
pub const DIGITS: [u8; 10] = [0x3F, 0x06, 0x5B, 0x4F, 0x66, 0x6D, 0x7D, 0x07, 0x7F, 0x6F];

/// All seven segments plus the decimal point
pub const ALL_ON: u8 = 0xFF;

/// Blank pattern
pub const BLANK: u8 = 0x00;

/// Chasing pattern: three adjacent outer segments rotating clockwise
///
/// Cycling through the frames on every digit makes a spinner, handy as a
/// busy indicator or for checking the glass for dead segments.
pub const CHASE: [u8; 6] = [0x07, 0x0E, 0x1C, 0x38, 0x31, 0x23];

/// Pattern for an ASCII byte, `None` if it has no legible form
///
/// Letters are case-folded; each maps to whichever of its upper or lower
/// case shape reads better on seven segments.
pub const fn from_ascii(byte: u8) -> Option<u8> {
    let pattern = match byte.to_ascii_lowercase() {
        b'0'..=b'9' => DIGITS[(byte - b'0') as usize],
        b'a' => 0x77,
        b'b' => 0x7C,
        b'c' => 0x39,
        b'd' => 0x5E,
        b'e' => 0x79,
        b'f' => 0x71,
        b'g' => 0x3D,
        b'h' => 0x76,
        b'i' => 0x30,
        b'j' => 0x1E,
        b'l' => 0x38,
        b'n' => 0x54,
        b'o' => 0x3F,
        b'p' => 0x73,
        b'q' => 0x67,
        b'r' => 0x50,
        b's' => 0x6D,
        b't' => 0x78,
        b'u' => 0x3E,
        b'y' => 0x6E,
        b'-' => 0x40,
        b'_' => 0x08,
        b' ' => BLANK,
        _ => return None,
    };
    Some(pattern)
}

/// State of the leading indicator symbol
///
/// The indicator slot is wired to three symbols, each driven by one of the
/// segments a, d and g.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Indicator {
    /// Nothing shown
    #[default]
    Off,
    /// `A` symbol
    A,
    /// `D` symbol
    D,
    /// Minus sign
    Minus,
}

impl Indicator {
    /// Segment flags that show this indicator
    pub const fn segments(self) -> u8 {
        match self {
            Self::Off => BLANK,
            Self::A => Segment::A.mask(),
            Self::D => Segment::D.mask(),
            Self::Minus => Segment::G.mask(),
        }
    }
}
