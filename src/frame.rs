//! Display RAM image and wire frame
//!
//! [`RamImage`] holds the 12 bytes of controller RAM driven in four-backplane
//! mode. [`Header`] holds the addressing commands that precede the RAM data.
//! The two are only combined into the 14-byte wire frame when a transaction
//! is built, via [`Header::frame`].
//!
//! Bits are numbered MSB-first: RAM bit 0 is bit 7 of byte 0, RAM bit 8 is
//! bit 7 of byte 1.
//!
//! ## Example
//!
//! ```
//! use pcf8566::frame::{Header, RamImage};
//!
//! let mut ram = RamImage::new();
//! ram.set_bit(0, true);
//! ram.set_bit(9, true);
//! assert_eq!(ram.as_bytes()[..2], [0x80, 0x40]);
//!
//! let frame = Header::default().frame(&ram);
//! assert_eq!(frame[..4], [0xE0, 0x00, 0x80, 0x40]);
//! ```

use crate::command::{CONTINUE, device_select, load_data_pointer};

/// Size of the display RAM image in bytes (4 backplanes x 24 segment outputs)
pub const RAM_SIZE: usize = 12;

/// Number of addressable RAM bits
pub const RAM_BITS: usize = RAM_SIZE * 8;

/// Number of command bytes preceding the RAM data in a frame
pub const HEADER_SIZE: usize = 2;

/// Total size of a display update transaction
pub const FRAME_SIZE: usize = HEADER_SIZE + RAM_SIZE;

/// Byte index and bit mask of RAM bit `bit`
///
/// Returns `None` when `bit` lies outside the RAM image.
pub const fn bit_location(bit: u8) -> Option<(usize, u8)> {
    let bit = bit as usize;
    if bit >= RAM_BITS {
        return None;
    }
    Some((bit / 8, 0x80 >> (bit % 8)))
}

/// In-memory copy of the controller's display RAM
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RamImage {
    bytes: [u8; RAM_SIZE],
}

impl RamImage {
    /// Create an all-off image
    pub const fn new() -> Self {
        Self {
            bytes: [0; RAM_SIZE],
        }
    }

    /// Turn every segment off
    pub fn clear(&mut self) {
        self.bytes = [0; RAM_SIZE];
    }

    /// Set or clear RAM bit `bit`; bits outside the image are ignored
    pub fn set_bit(&mut self, bit: u8, on: bool) {
        if let Some((index, mask)) = bit_location(bit) {
            if on {
                self.bytes[index] |= mask;
            } else {
                self.bytes[index] &= !mask;
            }
        }
    }

    /// Whether RAM bit `bit` is set; bits outside the image read as off
    pub fn bit(&self, bit: u8) -> bool {
        bit_location(bit).is_some_and(|(index, mask)| self.bytes[index] & mask != 0)
    }

    /// Raw RAM bytes in transmission order
    pub fn as_bytes(&self) -> &[u8; RAM_SIZE] {
        &self.bytes
    }

    /// Whether every bit is off
    pub fn is_blank(&self) -> bool {
        self.bytes.iter().all(|byte| *byte == 0)
    }
}

/// Addressing commands sent ahead of the RAM data
///
/// The default header selects sub-address 0 and starts writing at RAM byte 0,
/// which is what a full-image update needs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Header {
    /// Hardware sub-address of the targeted chip (low five bits used)
    pub subaddress: u8,
    /// First RAM byte written (low five bits used)
    pub data_pointer: u8,
}

impl Header {
    /// Encode the header as device select (with continuation) + load data pointer
    pub const fn encode(&self) -> [u8; HEADER_SIZE] {
        [
            device_select(self.subaddress) | CONTINUE,
            load_data_pointer(self.data_pointer),
        ]
    }

    /// Assemble the complete wire frame for `ram`
    pub fn frame(&self, ram: &RamImage) -> [u8; FRAME_SIZE] {
        let mut frame = [0; FRAME_SIZE];
        frame[..HEADER_SIZE].copy_from_slice(&self.encode());
        frame[HEADER_SIZE..].copy_from_slice(ram.as_bytes());
        frame
    }
}
