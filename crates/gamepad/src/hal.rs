//! Hardware boundary
//!
//! The sampler talks to the board through two small traits so the same code
//! runs against real GPIO/ADC peripherals and against the mocks in tests.

use embedded_hal::digital::PinState;

use crate::error::GamepadError;
use crate::pins::{PinId, PinMode};

/// Pin-level primitives the sampler needs: mode setup, digital and analog reads.
pub trait PinControl {
    /// Backend error, converted into [`GamepadError`] by the sampler
    type Error: embedded_hal::digital::Error + Into<GamepadError>;

    /// Configure the direction / pull of `pin`. Only called during initialization.
    fn set_mode(&mut self, pin: PinId, mode: PinMode) -> Result<(), Self::Error>;

    /// Read the logic level of a digital pin.
    fn read_digital(&mut self, pin: PinId) -> Result<PinState, Self::Error>;

    /// Read one ADC sample from an analog pin (0..=[`ADC_MAX`](crate::config::ADC_MAX)).
    fn read_analog(&mut self, pin: PinId) -> Result<u16, Self::Error>;
}

impl<T: PinControl + ?Sized> PinControl for &mut T {
    type Error = T::Error;

    fn set_mode(&mut self, pin: PinId, mode: PinMode) -> Result<(), Self::Error> {
        T::set_mode(self, pin, mode)
    }

    fn read_digital(&mut self, pin: PinId) -> Result<PinState, Self::Error> {
        T::read_digital(self, pin)
    }

    fn read_analog(&mut self, pin: PinId) -> Result<u16, Self::Error> {
        T::read_analog(self, pin)
    }
}

/// Free-running millisecond counter.
///
/// The value wraps at `u32::MAX`; callers compare timestamps with
/// `wrapping_sub`, so only monotonicity between wraps matters.
pub trait Clock {
    /// Milliseconds since an arbitrary epoch.
    fn now_ms(&self) -> u32;
}

impl<T: Clock + ?Sized> Clock for &T {
    fn now_ms(&self) -> u32 {
        T::now_ms(self)
    }
}

/// [`Clock`] backed by the Embassy time driver.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbassyClock;

impl Clock for EmbassyClock {
    #[allow(clippy::cast_possible_truncation)] // wraps like a 32-bit millis() counter
    fn now_ms(&self) -> u32 {
        embassy_time::Instant::now().as_millis() as u32
    }
}
