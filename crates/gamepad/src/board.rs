//! [`PinControl`] on top of embedded-hal pins
//!
//! HAL crates configure pin direction and pull through typestate when the
//! pin object is created, so [`ShieldPins`] only checks that the requested pin
//! exists. Build the switch pins as pulled-up inputs before handing them over.
//!
//! embedded-hal 1.0 has no ADC trait; analog pots are read through
//! [`AnalogChannel`], which any `FnMut() -> u16` already implements.

use embedded_hal::digital::{InputPin, PinState};
use heapless::Vec;

use crate::error::GamepadError;
use crate::hal::PinControl;
use crate::config::SamplerConfig;
use crate::pins::{PinId, PinMode, MAX_DIGITAL_PINS};

/// Single-channel analog input.
pub trait AnalogChannel {
    /// Conversion error
    type Error: embedded_hal::digital::Error;

    /// Take one conversion.
    fn read(&mut self) -> Result<u16, Self::Error>;
}

impl<F: FnMut() -> u16> AnalogChannel for F {
    type Error = core::convert::Infallible;

    fn read(&mut self) -> Result<u16, Self::Error> {
        Ok(self())
    }
}

/// Switch pins and two analog channels, tagged with the pins they sit on.
pub struct ShieldPins<D, X, Y> {
    digital: Vec<(PinId, D), MAX_DIGITAL_PINS>,
    x: (PinId, X),
    y: (PinId, Y),
}

impl<D: InputPin, X: AnalogChannel, Y: AnalogChannel> ShieldPins<D, X, Y> {
    /// Switch pins in shield order (A, B, C, D, E, F, K) plus the X and Y pots.
    pub fn new(switches: [D; MAX_DIGITAL_PINS], x: X, y: Y) -> Self {
        Self::wired(&SamplerConfig::shield(), switches, x, y)
    }

    /// Pins wired as `config` describes.
    ///
    /// `switches` follow the mapping's scan order; surplus pins are dropped.
    pub fn wired(
        config: &SamplerConfig,
        switches: impl IntoIterator<Item = D>,
        x: X,
        y: Y,
    ) -> Self {
        // bounded by the mapping, which never exceeds MAX_DIGITAL_PINS
        let digital = config.pin_mapping().pins().zip(switches).collect();
        Self {
            digital,
            x: (config.x_pin(), x),
            y: (config.y_pin(), y),
        }
    }

    /// Hand the pins back, in the order they were given.
    pub fn free(self) -> (Vec<D, MAX_DIGITAL_PINS>, X, Y) {
        let digital = self.digital.into_iter().map(|(_, d)| d).collect();
        (digital, self.x.1, self.y.1)
    }

    fn digital_pin(&mut self, pin: PinId) -> Result<&mut D, GamepadError> {
        self.digital
            .iter_mut()
            .find(|(id, _)| *id == pin)
            .map(|(_, input)| input)
            .ok_or(GamepadError::UnknownPin(pin))
    }

    fn check_analog(&self, pin: PinId) -> Result<(), GamepadError> {
        if self.x.0 == pin || self.y.0 == pin {
            Ok(())
        } else {
            Err(GamepadError::UnknownPin(pin))
        }
    }
}

impl<D: InputPin, X: AnalogChannel, Y: AnalogChannel> PinControl for ShieldPins<D, X, Y> {
    type Error = GamepadError;

    fn set_mode(&mut self, pin: PinId, mode: PinMode) -> Result<(), Self::Error> {
        match mode {
            PinMode::InputPullUp => self.digital_pin(pin).map(|_| ()),
            PinMode::Input => self.check_analog(pin),
        }
    }

    fn read_digital(&mut self, pin: PinId) -> Result<PinState, Self::Error> {
        let high = self
            .digital_pin(pin)?
            .is_high()
            .map_err(GamepadError::io)?;
        Ok(PinState::from(high))
    }

    fn read_analog(&mut self, pin: PinId) -> Result<u16, Self::Error> {
        if self.x.0 == pin {
            self.x.1.read().map_err(GamepadError::io)
        } else if self.y.0 == pin {
            self.y.1.read().map_err(GamepadError::io)
        } else {
            Err(GamepadError::UnknownPin(pin))
        }
    }
}
