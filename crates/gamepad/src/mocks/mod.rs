//! Mock implementations for testing
//!
//! [`MockBoard`] simulates the shield pins, [`MockClock`] is a hand-cranked
//! millisecond counter. Both are usable from unit tests, integration tests and
//! downstream crates with the `std` feature.

#![cfg(any(test, feature = "std"))]

use core::cell::Cell;

use embedded_hal::digital::{ErrorKind, PinState};
use heapless::LinearMap;

use crate::error::GamepadError;
use crate::hal::{Clock, PinControl};
use crate::pins::{PinId, PinMapping, PinMode};

/// Pins tracked by a mock board.
const MOCK_PINS: usize = 16;

/// Mid-scale reading of a centered joystick pot.
pub const CENTER: u16 = 512;

/// Fault injected by [`MockBoard::fail_reads`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockFault;

impl embedded_hal::digital::Error for MockFault {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Other
    }
}

impl From<MockFault> for GamepadError {
    fn from(fault: MockFault) -> Self {
        Self::io(fault)
    }
}

/// Simulated shield: settable pin levels, recorded pin modes, ADC read counter.
#[derive(Debug, Default)]
pub struct MockBoard {
    levels: LinearMap<PinId, PinState, MOCK_PINS>,
    analog: LinearMap<PinId, u16, MOCK_PINS>,
    modes: LinearMap<PinId, PinMode, MOCK_PINS>,
    analog_reads: u32,
    failing: bool,
}

impl MockBoard {
    /// Empty board. Unset digital pins read high, unset analog pins read 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Shield with every switch released and both pots centered.
    pub fn shield() -> Self {
        let mut board = Self::new();
        for pin in PinMapping::shield().pins() {
            board.release(pin);
        }
        board.set_analog(PinId::A0, CENTER);
        board.set_analog(PinId::A1, CENTER);
        board
    }

    /// Short `pin` to ground (switch pressed).
    pub fn press(&mut self, pin: PinId) {
        let _ = self.levels.insert(pin, PinState::Low);
    }

    /// Let the pull-up win (switch released).
    pub fn release(&mut self, pin: PinId) {
        let _ = self.levels.insert(pin, PinState::High);
    }

    /// Set the raw ADC value returned for `pin`.
    pub fn set_analog(&mut self, pin: PinId, raw: u16) {
        let _ = self.analog.insert(pin, raw);
    }

    /// Mode last requested for `pin`.
    pub fn mode(&self, pin: PinId) -> Option<PinMode> {
        self.modes.get(&pin).copied()
    }

    /// Number of ADC conversions performed so far.
    pub fn analog_reads(&self) -> u32 {
        self.analog_reads
    }

    /// Make every subsequent read fail with [`MockFault`].
    pub fn fail_reads(&mut self, failing: bool) {
        self.failing = failing;
    }
}

impl PinControl for MockBoard {
    type Error = MockFault;

    fn set_mode(&mut self, pin: PinId, mode: PinMode) -> Result<(), Self::Error> {
        self.modes.insert(pin, mode).map_err(|_| MockFault)?;
        Ok(())
    }

    fn read_digital(&mut self, pin: PinId) -> Result<PinState, Self::Error> {
        if self.failing {
            return Err(MockFault);
        }
        Ok(self.levels.get(&pin).copied().unwrap_or(PinState::High))
    }

    fn read_analog(&mut self, pin: PinId) -> Result<u16, Self::Error> {
        if self.failing {
            return Err(MockFault);
        }
        self.analog_reads = self.analog_reads.wrapping_add(1);
        Ok(self.analog.get(&pin).copied().unwrap_or(0))
    }
}

/// Manually advanced millisecond clock.
#[derive(Debug, Default)]
pub struct MockClock {
    now: Cell<u32>,
}

impl MockClock {
    /// Clock reading `start_ms`.
    pub fn new(start_ms: u32) -> Self {
        Self {
            now: Cell::new(start_ms),
        }
    }

    /// Move time forward, wrapping like a hardware counter.
    pub fn advance(&self, ms: u32) {
        self.now.set(self.now.get().wrapping_add(ms));
    }

    /// Jump to an absolute time.
    pub fn set(&self, ms: u32) {
        self.now.set(ms);
    }
}

impl Clock for MockClock {
    fn now_ms(&self) -> u32 {
        self.now.get()
    }
}
