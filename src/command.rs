//! PCF8566 command definitions
//!
//! This module defines the command bytes understood by the PCF8566 segment
//! LCD controller. Commands are sent over I2C at the start of a write
//! transaction; display RAM bytes follow the last command.
//!
//! ## Command Structure
//!
//! Every command byte carries a continuation flag in bit 7:
//! 1. Address the controller (I2C slave address, write)
//! 2. Send command bytes, each with [`CONTINUE`] set if another command follows
//! 3. Send the last command with [`CONTINUE`] cleared
//! 4. Send display RAM bytes (if any), written from the current data pointer
//!
//! ## Example
//!
//! ```
//! use pcf8566::command;
//!
//! // Header for a full RAM write: select sub-address 0, then start at RAM byte 0
//! let header = [
//!     command::device_select(0) | command::CONTINUE,
//!     command::load_data_pointer(0),
//! ];
//! assert_eq!(header, [0xE0, 0x00]);
//!
//! // Mode set used on power-up: enabled, 1/3 bias, four backplanes
//! assert_eq!(command::mode_set(true, command::Bias::OneThird, false), 0x48);
//! ```

/// Continuation flag (bit 7)
///
/// Set on a command byte when another command byte follows it in the same
/// transaction. Cleared on the last command, after which the controller
/// treats the remaining bytes as display RAM data.
pub const CONTINUE: u8 = 1 << 7;

// Mode set command

/// Mode set command (0x40)
///
/// Selects bias, backplane count, power saving and display enable.
/// Sent alone (no other flags) it disables the display.
pub const MODE_SET: u8 = 1 << 6;

/// Power saving flag for [`MODE_SET`]
pub const MODE_POWER_SAVING: u8 = 1 << 4;

/// Display enable flag for [`MODE_SET`]
pub const MODE_ENABLE: u8 = 1 << 3;

/// 1/2 bias flag for [`MODE_SET`] (cleared: 1/3 bias)
pub const MODE_BIAS_HALF: u8 = 1 << 2;

/// Four backplanes (1:4 multiplex), the `M1 M0 = 00` selector of [`MODE_SET`]
///
/// The segment map in [`crate::segment`] assumes this drive mode; it is the
/// only one the driver emits.
pub const MODE_BACKPLANES_4: u8 = 0x00;

/// Mask of the backplane selector bits in [`MODE_SET`]
pub const MODE_BACKPLANE_MASK: u8 = 0x03;

/// Device select command base (0x60)
///
/// The low five bits carry the hardware sub-address of the addressed chip.
pub const DEVICE_SELECT: u8 = 0x60;

/// Mask for the five-bit operand of device select and load data pointer
pub const OPERAND_MASK: u8 = 0x1F;

/// LCD bias configuration
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Bias {
    /// 1/3 bias (power-on default)
    #[default]
    OneThird,
    /// 1/2 bias
    OneHalf,
}

/// Build a device select command for `subaddress`
///
/// Only the low five bits of `subaddress` are used.
pub const fn device_select(subaddress: u8) -> u8 {
    DEVICE_SELECT | (subaddress & OPERAND_MASK)
}

/// Build a load data pointer command for RAM byte `pointer`
///
/// Only the low five bits of `pointer` are used; bits 5..7 are zero, which
/// also means the continuation flag is cleared.
pub const fn load_data_pointer(pointer: u8) -> u8 {
    pointer & OPERAND_MASK
}

/// Build a mode set command driving four backplanes
pub const fn mode_set(enable: bool, bias: Bias, power_saving: bool) -> u8 {
    let mut value = MODE_SET | MODE_BACKPLANES_4;
    if enable {
        value |= MODE_ENABLE;
    }
    if matches!(bias, Bias::OneHalf) {
        value |= MODE_BIAS_HALF;
    }
    if power_saving {
        value |= MODE_POWER_SAVING;
    }
    value
}

/// Mode set byte that blanks the display: no enable, no other options
pub const MODE_DISABLE: u8 = MODE_SET;
