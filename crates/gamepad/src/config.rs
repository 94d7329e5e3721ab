//! Shield constants and sampler configuration
//!
//! Every default the sampler starts from lives here, so board variants only
//! have to touch one place.

use crate::error::GamepadError;
use crate::pins::{PinId, PinMapping};

/// Default minimum time between effective reads, in milliseconds.
pub const DEFAULT_READ_INTERVAL_MS: u16 = 100;

/// Default deadband around the captured zero point, in ADC counts.
pub const DEFAULT_DEADBAND: u8 = 5;

/// Largest raw sample of the 10-bit ADC on the reference board.
pub const ADC_MAX: u16 = 1023;

/// Construction-time configuration for an [`InputSampler`](crate::InputSampler).
///
/// ```
/// use gamepad::SamplerConfig;
///
/// let config = SamplerConfig::shield().read_interval_ms(50).deadband(8);
/// assert_eq!(config.interval(), 50);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SamplerConfig {
    mapping: PinMapping,
    x_pin: PinId,
    y_pin: PinId,
    read_interval_ms: u16,
    deadband: u8,
}

impl SamplerConfig {
    /// Stock joystick shield wiring with default timing.
    pub fn shield() -> Self {
        Self {
            mapping: PinMapping::shield(),
            x_pin: PinId::A0,
            y_pin: PinId::A1,
            read_interval_ms: DEFAULT_READ_INTERVAL_MS,
            deadband: DEFAULT_DEADBAND,
        }
    }

    /// Replace the digital pin table.
    ///
    /// Fails with [`GamepadError::DuplicatePin`] if the table binds one of
    /// the axis pins.
    pub fn mapping(mut self, mapping: PinMapping) -> Result<Self, GamepadError> {
        check_pins(&mapping, self.x_pin, self.y_pin)?;
        self.mapping = mapping;
        Ok(self)
    }

    /// Replace the analog axis pins.
    ///
    /// Fails with [`GamepadError::DuplicatePin`] if `x` and `y` are the same
    /// pin or either is already bound to a switch.
    pub fn axis_pins(mut self, x: PinId, y: PinId) -> Result<Self, GamepadError> {
        check_pins(&self.mapping, x, y)?;
        self.x_pin = x;
        self.y_pin = y;
        Ok(self)
    }

    /// Interval applied by `initialize()`.
    #[must_use]
    pub fn read_interval_ms(mut self, ms: u16) -> Self {
        self.read_interval_ms = ms;
        self
    }

    /// Deadband applied by `initialize()`.
    #[must_use]
    pub fn deadband(mut self, threshold: u8) -> Self {
        self.deadband = threshold;
        self
    }

    /// Digital pin table.
    pub fn pin_mapping(&self) -> &PinMapping {
        &self.mapping
    }

    /// Analog pin for the X axis.
    pub fn x_pin(&self) -> PinId {
        self.x_pin
    }

    /// Analog pin for the Y axis.
    pub fn y_pin(&self) -> PinId {
        self.y_pin
    }

    /// Configured read interval in milliseconds.
    pub fn interval(&self) -> u16 {
        self.read_interval_ms
    }

    /// Configured deadband in ADC counts.
    pub fn deadband_threshold(&self) -> u8 {
        self.deadband
    }
}

/// Every pin gets exactly one mode during initialization.
fn check_pins(mapping: &PinMapping, x: PinId, y: PinId) -> Result<(), GamepadError> {
    if x == y {
        return Err(GamepadError::DuplicatePin(y));
    }
    match mapping.pins().find(|&pin| pin == x || pin == y) {
        Some(pin) => Err(GamepadError::DuplicatePin(pin)),
        None => Ok(()),
    }
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self::shield()
    }
}
