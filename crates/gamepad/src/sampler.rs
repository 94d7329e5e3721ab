//! Polling input sampler for the joystick shield.
//!
//! ```text
//! InputSampler<Uninit> --initialize()--> InputSampler<Ready>
//! ```
//!
//! `initialize()` configures the pins and captures the joystick rest position;
//! every query lives on [`Ready`], so reading an uncalibrated shield does not
//! compile.
//!
//! Two independent gates rate-limit hardware access, one for the digital
//! switches and one shared by both analog axes. They use the same interval.
//!
//! ## Gate behavior
//! - [`poll_switch`](InputSampler::poll_switch) returns `None` while closed.
//! - [`axis_value`](InputSampler::axis_value) returns the cached value while closed.
//! - [`axis_direction`](InputSampler::axis_direction) returns `0` while closed,
//!   even if the cached value is nonzero.

use embedded_hal::digital::PinState;

use crate::config::SamplerConfig;
use crate::error::GamepadError;
use crate::gate::ReadGate;
use crate::hal::{Clock, PinControl};
use crate::pins::{PinId, PinMapping, PinMode};
use crate::switch::{Axis, SwitchId};

/// Sampler created but not yet calibrated.
#[derive(Debug)]
pub struct Uninit;

/// Calibrated sampler state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ready {
    read_interval_ms: u16,
    deadband: u8,
    digital_gate: ReadGate,
    analog_gate: ReadGate,
    zero_offset: [u16; 2],
    last_value: [i16; 2],
}

/// Input sampler for the seven switches and two axes of the shield.
///
/// `P` is the pin backend, `C` the millisecond clock.
pub struct InputSampler<P, C, S = Ready> {
    pins: P,
    clock: C,
    config: SamplerConfig,
    state: S,
}

impl<P: PinControl, C: Clock> InputSampler<P, C, Uninit> {
    /// Sampler for the stock shield wiring.
    pub fn new(pins: P, clock: C) -> Self {
        Self::with_config(pins, clock, SamplerConfig::shield())
    }

    /// Sampler with a custom pin table or timing defaults.
    pub fn with_config(pins: P, clock: C, config: SamplerConfig) -> Self {
        Self {
            pins,
            clock,
            config,
            state: Uninit,
        }
    }

    /// Configure pins, apply the default interval and deadband and capture
    /// the rest position of both axes.
    ///
    /// Digital pins become pulled-up inputs, so a pressed switch reads low.
    /// The joystick must be centered while this runs.
    pub fn initialize(mut self) -> Result<InputSampler<P, C, Ready>, GamepadError> {
        for pin in self.config.pin_mapping().pins() {
            self.pins
                .set_mode(pin, PinMode::InputPullUp)
                .map_err(Into::<GamepadError>::into)?;
        }
        let (x_pin, y_pin) = (self.config.x_pin(), self.config.y_pin());
        self.pins
            .set_mode(x_pin, PinMode::Input)
            .map_err(Into::<GamepadError>::into)?;
        self.pins
            .set_mode(y_pin, PinMode::Input)
            .map_err(Into::<GamepadError>::into)?;

        let offset_x = self.pins.read_analog(x_pin).map_err(Into::<GamepadError>::into)?;
        let offset_y = self.pins.read_analog(y_pin).map_err(Into::<GamepadError>::into)?;

        #[cfg(feature = "defmt")]
        defmt::info!(
            "gamepad ready: {=usize} switches, zero x={=u16} y={=u16}",
            self.config.pin_mapping().len(),
            offset_x,
            offset_y
        );

        let state = Ready {
            read_interval_ms: self.config.interval(),
            deadband: self.config.deadband_threshold(),
            digital_gate: ReadGate::new(),
            analog_gate: ReadGate::new(),
            zero_offset: [offset_x, offset_y],
            last_value: [0; 2],
        };
        Ok(InputSampler {
            pins: self.pins,
            clock: self.clock,
            config: self.config,
            state,
        })
    }
}

impl<P: PinControl, C: Clock> InputSampler<P, C, Ready> {
    /// Set the minimum time between effective reads.
    ///
    /// Applies to both domains; `0` disables gating.
    pub fn set_read_interval(&mut self, interval_ms: u16) {
        #[cfg(feature = "defmt")]
        defmt::debug!("read interval {=u16} ms", interval_ms);
        self.state.read_interval_ms = interval_ms;
    }

    /// Set the deadband applied to subsequent analog samples.
    pub fn set_deadband(&mut self, threshold: u8) {
        self.state.deadband = threshold;
    }

    /// Current read interval in milliseconds.
    pub fn read_interval(&self) -> u16 {
        self.state.read_interval_ms
    }

    /// Current deadband in ADC counts.
    pub fn deadband(&self) -> u8 {
        self.state.deadband
    }

    /// Raw reading captured for `axis` during initialization.
    pub fn zero_offset(&self, axis: Axis) -> u16 {
        self.state.zero_offset.get(axis.slot()).copied().unwrap_or(0)
    }

    /// Digital pin table in scan order.
    pub fn mapping(&self) -> &PinMapping {
        self.config.pin_mapping()
    }

    /// Configuration the sampler was built with.
    pub fn config(&self) -> &SamplerConfig {
        &self.config
    }

    /// `true` if [`poll_switch`](Self::poll_switch) reports a switch.
    ///
    /// Goes through the digital gate like any other poll.
    pub fn any_digital_pressed(&mut self) -> Result<bool, GamepadError> {
        Ok(self.poll_switch()?.is_some())
    }

    /// First active switch in mapping order.
    ///
    /// Returns `None` when nothing is pressed or when the digital gate is
    /// still closed. A refused poll does not restart the interval.
    pub fn poll_switch(&mut self) -> Result<Option<SwitchId>, GamepadError> {
        let now = self.clock.now_ms();
        if !self
            .state
            .digital_gate
            .try_open(now, self.state.read_interval_ms)
        {
            return Ok(None);
        }

        for binding in self.config.pin_mapping().bindings() {
            let level = self
                .pins
                .read_digital(binding.pin)
                .map_err(Into::<GamepadError>::into)?;
            if level == PinState::Low {
                #[cfg(feature = "defmt")]
                defmt::trace!("switch {} active on {}", binding.switch, binding.pin);
                return Ok(Some(binding.switch));
            }
        }
        Ok(None)
    }

    /// Sign of the zero-adjusted axis reading: `-1`, `0` or `1`.
    ///
    /// While the analog gate is closed this returns `0` without consulting
    /// the cached value.
    pub fn axis_direction(&mut self, axis: Axis) -> Result<i8, GamepadError> {
        let now = self.clock.now_ms();
        if self
            .state
            .analog_gate
            .is_closed(now, self.state.read_interval_ms)
        {
            return Ok(0);
        }
        let value = self.axis_value(axis)?;
        Ok(i8::try_from(value.signum()).unwrap_or(0))
    }

    /// Zero-adjusted reading of `axis`, with the deadband applied.
    ///
    /// While the analog gate is closed the last value computed for this axis
    /// is returned without touching the ADC.
    pub fn axis_value(&mut self, axis: Axis) -> Result<i16, GamepadError> {
        let slot = axis.slot();
        let now = self.clock.now_ms();
        if self
            .state
            .analog_gate
            .is_closed(now, self.state.read_interval_ms)
        {
            return Ok(self.state.last_value.get(slot).copied().unwrap_or(0));
        }

        let pin = self.axis_pin(axis);
        let raw = self.pins.read_analog(pin).map_err(Into::<GamepadError>::into)?;
        let value = zero_adjust(raw, self.zero_offset(axis), self.state.deadband);
        if let Some(cached) = self.state.last_value.get_mut(slot) {
            *cached = value;
        }
        self.state.analog_gate.record(now);
        Ok(value)
    }

    /// Direct access to the pin backend, e.g. to share an ADC with other channels.
    pub fn pins_mut(&mut self) -> &mut P {
        &mut self.pins
    }

    /// Give back the pin backend and the clock.
    pub fn release(self) -> (P, C) {
        (self.pins, self.clock)
    }

    fn axis_pin(&self, axis: Axis) -> PinId {
        match axis {
            Axis::X => self.config.x_pin(),
            Axis::Y => self.config.y_pin(),
        }
    }
}

/// Subtract the rest position and force readings inside the deadband to zero.
///
/// The result saturates at the `i16` range.
pub fn zero_adjust(raw: u16, offset: u16, deadband: u8) -> i16 {
    let delta = i32::from(raw).wrapping_sub(i32::from(offset));
    let value = i16::try_from(delta).unwrap_or(if delta < 0 { i16::MIN } else { i16::MAX });
    if value.unsigned_abs() < u16::from(deadband) {
        0
    } else {
        value
    }
}
