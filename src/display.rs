//! Core display operations

use crate::command::MODE_DISABLE;
use crate::config::Config;
use crate::error::Error;
use crate::frame::{FRAME_SIZE, Header, RamImage};
use crate::glyph::{self, Indicator};
use crate::interface::DisplayInterface;
use crate::segment::{DIGIT_SLOTS, INDICATOR_SLOT, NUM_CHARS, Segment, bit_position};

type DisplayResult<I> = core::result::Result<(), Error<I>>;

/// Core display driver for PCF8566
///
/// Holds the in-memory copy of the display RAM. Mutations ([`set_char`],
/// [`clear`], ...) only touch that copy; [`update`] sends it to the
/// controller in one transaction.
///
/// A `Display` only exists between a successful [`open`] and [`close`].
///
/// [`set_char`]: Display::set_char
/// [`clear`]: Display::clear
/// [`update`]: Display::update
/// [`open`]: Display::open
/// [`close`]: Display::close
pub struct Display<I>
where
    I: DisplayInterface,
{
    /// Hardware interface
    interface: I,
    /// Display configuration
    config: Config,
    /// Local copy of the display RAM
    ram: RamImage,
}

impl<I> Display<I>
where
    I: DisplayInterface,
{
    /// Initialize the controller and return an open display
    ///
    /// Sends the mode set command (display enabled, four backplanes, bias
    /// and power saving per `config`). The RAM image starts blank but is not
    /// transmitted until [`update`](Self::update).
    ///
    /// # Errors
    ///
    /// Returns `Error::Interface` if the mode set write fails. The interface
    /// is dropped in that case; pass `&mut bus` to keep ownership of the bus.
    pub fn open(mut interface: I, config: Config) -> Result<Self, Error<I>> {
        let command = config.enable_command();
        log::debug!("pcf8566@{:#04x}: mode set {:#04x}", config.address, command);
        interface
            .write(config.address, &[command])
            .map_err(Error::Interface)?;

        Ok(Self {
            interface,
            config,
            ram: RamImage::new(),
        })
    }

    /// Set the segments of slot `character` to `segments`
    ///
    /// Bit k of `segments` drives segment a..g for k = 0..6, bit 7 the decimal
    /// point. Every existing segment of the slot is overwritten; segments the
    /// slot does not have are ignored. Out-of-range slots are ignored too.
    pub fn set_char(&mut self, character: usize, segments: u8) {
        for segment in Segment::ALL {
            if let Some(bit) = bit_position(segment, character) {
                self.ram.set_bit(bit, segments & segment.mask() != 0);
            }
        }
    }

    /// Like [`set_char`](Self::set_char), but rejects out-of-range slots
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidCharacter` if `character >= NUM_CHARS`. The RAM
    /// image is unchanged in that case.
    pub fn try_set_char(&mut self, character: usize, segments: u8) -> DisplayResult<I> {
        if character >= NUM_CHARS {
            return Err(Error::InvalidCharacter {
                index: character,
                count: NUM_CHARS,
            });
        }
        self.set_char(character, segments);
        Ok(())
    }

    /// Turn a single segment of slot `character` on or off
    ///
    /// Absent segments and out-of-range slots are ignored.
    pub fn set_segment(&mut self, character: usize, segment: Segment, on: bool) {
        if let Some(bit) = bit_position(segment, character) {
            self.ram.set_bit(bit, on);
        }
    }

    /// Show `indicator` on the leading indicator slot
    pub fn set_indicator(&mut self, indicator: Indicator) {
        self.set_char(INDICATOR_SLOT, indicator.segments());
    }

    /// Write ASCII text to the digit slots, left-aligned
    ///
    /// The first glyph lands on the leftmost digit (slot 5). A `.` lights the
    /// decimal point of the glyph before it; a leading `.` uses a blank slot.
    /// Digit slots not covered by `text` are blanked. The indicator slot is
    /// left alone.
    ///
    /// # Errors
    ///
    /// Returns `Error::UnsupportedGlyph` for a byte without a seven-segment
    /// form, or `Error::TextTooLong` if `text` needs more than six slots.
    /// The RAM image is unchanged on error.
    pub fn write_ascii(&mut self, text: &str) -> DisplayResult<I> {
        let mut glyphs = [glyph::BLANK; DIGIT_SLOTS];
        let mut count = 0;
        let mut dp_allowed = false;

        for byte in text.bytes() {
            if byte == b'.' && dp_allowed {
                if let Some(previous) = glyphs.get_mut(count - 1) {
                    *previous |= Segment::Dp.mask();
                }
                dp_allowed = false;
                continue;
            }
            let pattern = if byte == b'.' {
                Segment::Dp.mask()
            } else {
                glyph::from_ascii(byte).ok_or(Error::UnsupportedGlyph(byte))?
            };
            if count < DIGIT_SLOTS {
                glyphs[count] = pattern;
            }
            count += 1;
            dp_allowed = byte != b'.';
        }

        if count > DIGIT_SLOTS {
            return Err(Error::TextTooLong {
                max: DIGIT_SLOTS,
                provided: count,
            });
        }

        for (position, pattern) in glyphs.iter().enumerate() {
            self.set_char(DIGIT_SLOTS - 1 - position, *pattern);
        }
        Ok(())
    }

    /// Turn every segment off
    ///
    /// Only the local RAM image is cleared; call [`update`](Self::update) to
    /// blank the glass.
    pub fn clear(&mut self) {
        self.ram.clear();
    }

    /// Send the RAM image to the controller
    ///
    /// Writes device select (sub-address 0), load data pointer (0) and the
    /// 12 RAM bytes as one 14-byte transaction.
    ///
    /// # Errors
    ///
    /// Returns `Error::Interface` if the write fails. The RAM image is kept,
    /// so the update can be retried by the caller.
    pub fn update(&mut self) -> DisplayResult<I> {
        let frame = self.frame();
        log::debug!("pcf8566@{:#04x}: update {:02x?}", self.config.address, frame);
        self.interface
            .write(self.config.address, &frame)
            .map_err(Error::Interface)
    }

    /// Disable the display and release the interface
    ///
    /// Sends a mode set with the enable flag cleared. A failure of that
    /// write is logged and otherwise ignored; closing always succeeds.
    pub fn close(mut self) -> I {
        log::debug!("pcf8566@{:#04x}: disable", self.config.address);
        if let Err(e) = self.interface.write(self.config.address, &[MODE_DISABLE]) {
            log::warn!(
                "pcf8566@{:#04x}: disable failed: {:?}",
                self.config.address,
                e
            );
        }
        self.interface
    }

    /// Wire frame the next [`update`](Self::update) would send
    pub fn frame(&self) -> [u8; FRAME_SIZE] {
        Header::default().frame(&self.ram)
    }

    /// Local RAM image
    pub fn ram(&self) -> &RamImage {
        &self.ram
    }

    /// Access the underlying configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Builder;
    use crate::frame::HEADER_SIZE;
    use alloc::vec::Vec;

    #[derive(Debug, Clone, Copy, PartialEq)]
    struct MockError;

    #[derive(Debug, Default)]
    struct MockInterface {
        writes: Vec<(u8, Vec<u8>)>,
        fail: bool,
    }

    impl DisplayInterface for MockInterface {
        type Error = MockError;

        fn write(&mut self, address: u8, bytes: &[u8]) -> Result<(), Self::Error> {
            if self.fail {
                return Err(MockError);
            }
            self.writes.push((address, bytes.to_vec()));
            Ok(())
        }
    }

    fn test_display() -> Display<MockInterface> {
        let config = Builder::new().build().unwrap();
        match Display::open(MockInterface::default(), config) {
            Ok(display) => display,
            Err(e) => unreachable!("open failed: {e}"),
        }
    }

    fn lit_bits(display: &Display<MockInterface>) -> Vec<u8> {
        (0..96).filter(|bit| display.ram().bit(*bit)).collect()
    }

    #[test]
    fn test_open_sends_mode_set() {
        let display = test_display();
        assert_eq!(display.interface.writes, [(0x3E, alloc::vec![0x48])]);
        assert!(display.ram().is_blank());
    }

    #[test]
    fn test_open_uses_configured_mode_and_address() {
        let config = Builder::new()
            .address(0x3F)
            .bias(crate::Bias::OneHalf)
            .build()
            .unwrap();
        let display = match Display::open(MockInterface::default(), config) {
            Ok(display) => display,
            Err(e) => unreachable!("open failed: {e}"),
        };
        assert_eq!(display.interface.writes, [(0x3F, alloc::vec![0x4C])]);
    }

    #[test]
    fn test_open_failure_returns_interface_error() {
        let interface = MockInterface {
            fail: true,
            ..MockInterface::default()
        };
        let result = Display::open(interface, Config::default());
        assert!(matches!(result, Err(Error::Interface(MockError))));
    }

    #[test]
    fn test_set_char_all_on_slot_zero() {
        let mut display = test_display();
        display.set_char(0, 0xFF);
        assert_eq!(lit_bits(&display), [0, 1, 2, 12, 13, 14, 18]);
        assert!(!display.ram().bit(6));
    }

    #[test]
    fn test_set_char_overwrites() {
        let mut display = test_display();
        display.set_char(3, 0xFF);
        display.set_char(3, glyph::DIGITS[1]);

        let mut expected = test_display();
        expected.set_char(3, glyph::DIGITS[1]);
        assert_eq!(display.ram(), expected.ram());
        assert_eq!(lit_bits(&display), [40, 41]);
    }

    #[test]
    fn test_set_char_leaves_other_slots() {
        let mut display = test_display();
        display.set_char(1, 0xFF);
        display.set_char(2, 0x00);
        assert_eq!(lit_bits(&display), [4, 5, 6, 16, 17, 24, 25, 26]);
    }

    #[test]
    fn test_set_char_out_of_range_is_noop() {
        let mut display = test_display();
        display.set_char(4, 0x5A);
        let before = *display.ram();
        display.set_char(NUM_CHARS, 0xFF);
        display.set_char(usize::MAX, 0xFF);
        assert_eq!(display.ram(), &before);
    }

    #[test]
    fn test_try_set_char_rejects_out_of_range() {
        let mut display = test_display();
        let result = display.try_set_char(7, 0xFF);
        assert!(matches!(
            result,
            Err(Error::InvalidCharacter { index: 7, count: 7 })
        ));
        assert!(display.ram().is_blank());

        assert!(display.try_set_char(6, 0xFF).is_ok());
        assert_eq!(lit_bits(&display), [74, 86, 90]);
    }

    #[test]
    fn test_set_segment() {
        let mut display = test_display();
        display.set_segment(5, Segment::Dp, true);
        assert!(display.ram().bit(66));
        display.set_segment(5, Segment::Dp, false);
        assert!(display.ram().is_blank());

        display.set_segment(0, Segment::Dp, true);
        display.set_segment(INDICATOR_SLOT, Segment::B, true);
        assert!(display.ram().is_blank());
    }

    #[test]
    fn test_set_indicator() {
        let mut display = test_display();
        display.set_indicator(Indicator::Minus);
        assert_eq!(lit_bits(&display), [86]);
        display.set_indicator(Indicator::A);
        assert_eq!(lit_bits(&display), [90]);
        display.set_indicator(Indicator::Off);
        assert!(display.ram().is_blank());
    }

    #[test]
    fn test_clear() {
        let mut display = test_display();
        for character in 0..NUM_CHARS {
            display.set_char(character, 0xFF);
        }
        assert!(!display.ram().is_blank());
        display.clear();
        assert!(display.ram().is_blank());
        assert!(display.frame()[HEADER_SIZE..].iter().all(|byte| *byte == 0));
    }

    #[test]
    fn test_update_sends_frame() {
        let mut display = test_display();
        display.set_char(0, 0xFF);
        display.update().unwrap();

        let (address, frame) = display.interface.writes.last().unwrap();
        assert_eq!(*address, 0x3E);
        assert_eq!(
            frame,
            &[
                0xE0, 0x00, 0xE0, 0x0E, 0x20, 0, 0, 0, 0, 0, 0, 0, 0, 0
            ]
        );
    }

    #[test]
    fn test_update_always_fourteen_bytes() {
        let mut display = test_display();
        display.update().unwrap();
        for character in 0..NUM_CHARS {
            display.set_char(character, 0xFF);
        }
        display.update().unwrap();

        let frames: Vec<&Vec<u8>> = display.interface.writes[1..]
            .iter()
            .map(|(_, bytes)| bytes)
            .collect();
        assert_eq!(frames.len(), 2);
        for frame in frames {
            assert_eq!(frame.len(), FRAME_SIZE);
            assert_eq!(frame[..HEADER_SIZE], [0xE0, 0x00]);
        }
    }

    #[test]
    fn test_update_failure_keeps_ram() {
        let mut display = test_display();
        display.set_char(2, glyph::DIGITS[7]);
        let before = *display.ram();
        display.interface.fail = true;

        let result = display.update();
        assert!(matches!(result, Err(Error::Interface(MockError))));
        assert_eq!(display.ram(), &before);
    }

    #[test]
    fn test_close_sends_disable() {
        let display = test_display();
        let interface = display.close();
        assert_eq!(interface.writes.last(), Some(&(0x3E, alloc::vec![0x40])));
    }

    #[test]
    fn test_close_ignores_failure() {
        let mut display = test_display();
        display.interface.fail = true;
        let interface = display.close();
        assert_eq!(interface.writes.len(), 1);
    }

    #[test]
    fn test_write_ascii_hello() {
        let mut display = test_display();
        display.write_ascii("HELLO").unwrap();

        let mut expected = test_display();
        expected.set_char(5, 0x76);
        expected.set_char(4, 0x79);
        expected.set_char(3, 0x38);
        expected.set_char(2, 0x38);
        expected.set_char(1, 0x3F);
        assert_eq!(display.ram(), expected.ram());
    }

    #[test]
    fn test_write_ascii_decimal_points() {
        let mut display = test_display();
        display.write_ascii("1.5").unwrap();
        assert!(display.ram().bit(66));
        assert!(display.ram().bit(84));
        assert!(display.ram().bit(60));
        assert!(!display.ram().bit(72));

        display.write_ascii(".5").unwrap();
        assert!(display.ram().bit(66));
        assert!(!display.ram().bit(84));
        assert!(display.ram().bit(60));
    }

    #[test]
    fn test_write_ascii_blanks_remaining_digits() {
        let mut display = test_display();
        display.write_ascii("888888").unwrap();
        display.set_indicator(Indicator::D);
        display.write_ascii("1").unwrap();

        let mut expected = test_display();
        expected.set_char(5, glyph::DIGITS[1]);
        expected.set_indicator(Indicator::D);
        assert_eq!(display.ram(), expected.ram());
    }

    #[test]
    fn test_write_ascii_errors_leave_ram() {
        let mut display = test_display();
        display.write_ascii("12").unwrap();
        let before = *display.ram();

        let result = display.write_ascii("1234567");
        assert!(matches!(
            result,
            Err(Error::TextTooLong {
                max: 6,
                provided: 7
            })
        ));
        assert!(matches!(
            display.write_ascii("HOW"),
            Err(Error::UnsupportedGlyph(b'W'))
        ));
        assert!(matches!(
            display.write_ascii("1234567."),
            Err(Error::TextTooLong { .. })
        ));
        assert_eq!(display.ram(), &before);
    }

    #[test]
    fn test_write_ascii_six_glyphs_with_points_fit() {
        let mut display = test_display();
        assert!(display.write_ascii("1.2.3.4.5.6").is_ok());
    }
}
