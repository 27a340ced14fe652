//! Display configuration types and builder

pub use crate::command::Bias;
use crate::command::mode_set;
pub use crate::error::BuilderError;

/// Default I2C address (SA0 pin tied low)
pub const DEFAULT_ADDRESS: u8 = 0x3E;

/// Highest valid 7-bit I2C address
pub const MAX_ADDRESS: u8 = 0x7F;

/// Display configuration
///
/// Use [`Builder`] to create a Config.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// 7-bit I2C address of the controller
    pub address: u8,
    /// LCD bias
    pub bias: Bias,
    /// Whether the controller runs in power saving mode
    pub power_saving: bool,
}

impl Config {
    /// Mode set byte sent when the display is opened
    pub fn enable_command(&self) -> u8 {
        mode_set(true, self.bias, self.power_saving)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            address: DEFAULT_ADDRESS,
            bias: Bias::OneThird,
            power_saving: false,
        }
    }
}

/// Builder for constructing display configuration
///
/// # Example
///
/// ```
/// use pcf8566::{Bias, Builder};
///
/// let config = match Builder::new().address(0x3F).bias(Bias::OneHalf).build() {
///     Ok(config) => config,
///     Err(_) => return,
/// };
/// assert_eq!(config.enable_command(), 0x4C);
/// ```
#[must_use]
#[derive(Default)]
pub struct Builder {
    config: Config,
}

impl Builder {
    /// Create a new Builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the 7-bit I2C address
    pub fn address(mut self, address: u8) -> Self {
        self.config.address = address;
        self
    }

    /// Set the LCD bias
    pub fn bias(mut self, bias: Bias) -> Self {
        self.config.bias = bias;
        self
    }

    /// Enable or disable power saving mode
    pub fn power_saving(mut self, enabled: bool) -> Self {
        self.config.power_saving = enabled;
        self
    }

    /// Build the configuration
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::InvalidAddress` if the address does not fit in 7 bits
    pub fn build(self) -> Result<Config, BuilderError> {
        if self.config.address > MAX_ADDRESS {
            return Err(BuilderError::InvalidAddress(self.config.address));
        }
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let config = Builder::new().build().unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.address, DEFAULT_ADDRESS);
        assert_eq!(config.enable_command(), 0x48);
    }

    #[test]
    fn test_builder_options() {
        let config = Builder::new()
            .address(0x3F)
            .bias(Bias::OneHalf)
            .power_saving(true)
            .build()
            .unwrap();
        assert_eq!(config.address, 0x3F);
        assert_eq!(config.enable_command(), 0x5C);
    }

    #[test]
    fn test_builder_rejects_eight_bit_address() {
        let result = Builder::new().address(0x80).build();
        assert!(matches!(result, Err(BuilderError::InvalidAddress(0x80))));
    }
}
