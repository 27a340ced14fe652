//! Segment to display RAM mapping
//!
//! The glass wired to the controller has seven character slots. Each slot
//! exposes up to eight segments, and every segment is driven by one bit of
//! the controller's display RAM. The wiring scatters those bits across the
//! RAM, so placement goes through a fixed lookup table.
//!
//! ## Segment Layout
//!
//! ```txt
//!    a
//!   ==
//! f| g|b        flag bits: a = 1 << 0 ... g = 1 << 6, dp = 1 << 7
//!   ==
//! e| d|c
//!   ==
//!     dp
//! ```
//!
//! ## Character Slots
//!
//! ```txt
//!  slot 6 (A / D / - indicator)
//!  |
//!  v
//!  - 8 8 8 8 8 8
//!    ^         ^
//!    slot 5    slot 0
//! ```
//!
//! Slot 0 is the rightmost digit. Slot 6 only has segments a, d and g.
//!
//! ## Example
//!
//! ```
//! use pcf8566::segment::{bit_position, Segment};
//!
//! assert_eq!(bit_position(Segment::B, 0), Some(18));
//! // Slot 0 has no decimal point
//! assert_eq!(bit_position(Segment::Dp, 0), None);
//! ```

/// Number of character slots on the display
pub const NUM_CHARS: usize = 7;

/// Number of segments per character slot, including the decimal point
pub const NUM_SEGMENTS: usize = 8;

/// Slot holding the leading `A` / `D` / `-` indicator symbol
pub const INDICATOR_SLOT: usize = 6;

/// Number of seven-segment digit slots (slots `0..DIGIT_SLOTS`)
pub const DIGIT_SLOTS: usize = 6;

/// One segment of a character slot
///
/// The discriminant is the bit index of the segment in a segment flag byte.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Segment {
    /// Top
    A = 0,
    /// Upper right
    B = 1,
    /// Lower right
    C = 2,
    /// Bottom
    D = 3,
    /// Lower left
    E = 4,
    /// Upper left
    F = 5,
    /// Middle
    G = 6,
    /// Decimal point
    Dp = 7,
}

impl Segment {
    /// All segments in flag bit order
    pub const ALL: [Segment; NUM_SEGMENTS] = [
        Segment::A,
        Segment::B,
        Segment::C,
        Segment::D,
        Segment::E,
        Segment::F,
        Segment::G,
        Segment::Dp,
    ];

    /// Bit index of this segment in a flag byte
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Single-bit flag mask for this segment
    pub const fn mask(self) -> u8 {
        1 << (self as u8)
    }

    /// Segment for a flag bit index, `None` if `index >= NUM_SEGMENTS`
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < NUM_SEGMENTS {
            Some(Self::ALL[index])
        } else {
            None
        }
    }
}

/// RAM bit number for each (segment, slot) pair, MSB-first within each byte
///
/// Rows follow [`Segment`] order, columns follow slot order.
const SEGMENT_TO_RAM: [[Option<u8>; NUM_CHARS]; NUM_SEGMENTS] = [
    // a
    [Some(0), Some(24), Some(36), Some(48), Some(60), Some(76), Some(90)],
    // b
    [Some(18), Some(4), Some(28), Some(40), Some(72), Some(84), None],
    // c
    [Some(14), Some(5), Some(29), Some(41), Some(73), Some(85), None],
    // d
    [Some(2), Some(26), Some(38), Some(50), Some(62), Some(78), Some(74)],
    // e
    [Some(13), Some(17), Some(57), Some(53), Some(65), Some(89), None],
    // f
    [Some(12), Some(16), Some(56), Some(52), Some(64), Some(88), None],
    // g
    [Some(1), Some(25), Some(37), Some(49), Some(61), Some(77), Some(86)],
    // dp
    [None, Some(6), Some(30), Some(42), Some(54), Some(66), None],
];

/// RAM bit number driving `segment` of slot `character`
///
/// Returns `None` when the slot has no such segment or `character` is not a
/// valid slot.
pub const fn bit_position(segment: Segment, character: usize) -> Option<u8> {
    if character >= NUM_CHARS {
        return None;
    }
    SEGMENT_TO_RAM[segment.index()][character]
}

/// Flag mask of the segments that physically exist on slot `character`
pub fn available_segments(character: usize) -> u8 {
    Segment::ALL
        .iter()
        .filter(|segment| bit_position(**segment, character).is_some())
        .fold(0, |mask, segment| mask | segment.mask())
}
