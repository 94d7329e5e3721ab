//! Input sampler for the "JoyStick Shield V1" gamepad board
//!
//! The shield carries a PS2-style thumbstick (two pots plus a push switch),
//! four gamepad switches and two selection switches. This crate polls them
//! with simple time-gating and zero-offset calibration, and runs unchanged
//! on a microcontroller or against the mocks in host tests.
//!
//! # Architecture Layers
//!
//! ```text
//! Application (menu navigation, game loop)
//!         ↓
//! InputSampler (this crate - gating + calibration)
//!         ↓
//! PinControl + Clock (boundary traits)
//!         ↓
//! Hardware Layer (embedded-hal pins, ADC, time driver)
//! ```
//!
//! # Features
//!
//! - `std`: Export [`mocks`] outside of this crate's own tests
//! - `defmt`: Enable defmt logging and `defmt::Format` derives
//!
//! # Example
//!
//! ```
//! use gamepad::mocks::{MockBoard, MockClock};
//! use gamepad::{Axis, InputSampler, PinId, SwitchId};
//!
//! let mut board = MockBoard::shield();
//! let clock = MockClock::new(0);
//! board.press(PinId::D4);
//!
//! let mut pad = InputSampler::new(&mut board, &clock).initialize()?;
//! assert_eq!(pad.poll_switch()?, Some(SwitchId::C));
//! assert_eq!(pad.axis_direction(Axis::X)?, 0);
//! # Ok::<(), gamepad::GamepadError>(())
//! ```

// ── Lint policy ─────────────────────────────────────────────────────────────
#![deny(clippy::unwrap_used)] // no .unwrap() in production code
#![deny(clippy::expect_used)] // no .expect() in production code
#![deny(clippy::panic)] // no panic!() in production code
#![deny(clippy::unreachable)] // no unreachable!() that isn't documented
#![deny(unused_must_use)]
// all Results must be handled
// ────────────────────────────────────────────────────────────────────────────
#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(unsafe_op_in_unsafe_fn)]
#![warn(clippy::print_stdout)] // prefer defmt over println! in lib code
#![allow(clippy::must_use_candidate)] // accessors, callers decide
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

pub mod board;
pub mod config;
pub mod error;
pub mod gate;
pub mod hal;
pub mod mocks;
pub mod pins;
pub mod sampler;
pub mod switch;

pub use board::{AnalogChannel, ShieldPins};
pub use config::{SamplerConfig, ADC_MAX, DEFAULT_DEADBAND, DEFAULT_READ_INTERVAL_MS};
pub use error::GamepadError;
pub use gate::ReadGate;
pub use hal::{Clock, EmbassyClock, PinControl};
pub use pins::{PinBinding, PinId, PinMapping, PinMappingBuilder, PinMode};
pub use sampler::{InputSampler, Ready, Uninit};
pub use switch::{Axis, SwitchId};
