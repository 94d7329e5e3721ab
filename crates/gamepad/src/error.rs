//! Error type shared by the sampler, the mapping builder and the board adapters.

use embedded_hal::digital::ErrorKind;
use thiserror_no_std::Error;

use crate::pins::PinId;
use crate::switch::SwitchId;

/// Everything that can go wrong while configuring or sampling the shield.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GamepadError {
    /// The pin backend failed to configure or read a pin.
    #[error("pin i/o failed: {0}")]
    Io(ErrorKind),

    /// A backend was asked about a pin it does not wire up.
    #[error("pin {0} is not wired on this board")]
    UnknownPin(PinId),

    /// A digital switch was passed where an analog axis is required.
    #[error("switch {0} is not an analog axis")]
    NotAnAxis(SwitchId),

    /// The pin mapping already holds the maximum number of bindings.
    #[error("pin mapping is full")]
    MappingFull,

    /// The same pin was bound twice.
    #[error("pin {0} is already bound")]
    DuplicatePin(PinId),

    /// The same switch was bound to two pins.
    #[error("switch {0} is already bound")]
    DuplicateSwitch(SwitchId),

    /// An axis selector was bound as a digital switch.
    #[error("axis {0} cannot be bound as a digital switch")]
    AxisAsDigital(SwitchId),
}

impl GamepadError {
    /// Convert any embedded-hal digital error into [`GamepadError::Io`].
    ///
    /// Only the [`ErrorKind`] survives. Backends that already speak
    /// `GamepadError` reach the sampler unchanged through `From`.
    pub fn io<E: embedded_hal::digital::Error>(err: E) -> Self {
        Self::Io(err.kind())
    }
}

impl From<core::convert::Infallible> for GamepadError {
    fn from(err: core::convert::Infallible) -> Self {
        match err {}
    }
}

impl embedded_hal::digital::Error for GamepadError {
    fn kind(&self) -> ErrorKind {
        match self {
            Self::Io(kind) => *kind,
            _ => ErrorKind::Other,
        }
    }
}
