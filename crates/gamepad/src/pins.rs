//! Pin identifiers and the pin-to-switch mapping
//!
//! Logical pin numbers follow the Arduino Uno header the shield plugs into:
//! digital pins are `D0`..`D13`, analog pins start at `A0 = 14`.
//!
//! | Switch | Pin | Role                 |
//! |--------|-----|----------------------|
//! | A      | D2  | gamepad switch       |
//! | B      | D3  | gamepad switch       |
//! | C      | D4  | gamepad switch       |
//! | D      | D5  | gamepad switch       |
//! | E      | D6  | selection switch     |
//! | F      | D7  | selection switch     |
//! | K      | D8  | joystick push switch |
//! | X      | A0  | joystick X pot       |
//! | Y      | A1  | joystick Y pot       |

use core::fmt;

use heapless::Vec;

use crate::error::GamepadError;
use crate::switch::SwitchId;

/// Maximum number of digital bindings a [`PinMapping`] holds.
pub const MAX_DIGITAL_PINS: usize = 7;

/// Logical pin identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(transparent)]
pub struct PinId(u8);

impl PinId {
    /// Digital pin 2 (switch A)
    pub const D2: Self = Self(2);
    /// Digital pin 3 (switch B)
    pub const D3: Self = Self(3);
    /// Digital pin 4 (switch C)
    pub const D4: Self = Self(4);
    /// Digital pin 5 (switch D)
    pub const D5: Self = Self(5);
    /// Digital pin 6 (switch E)
    pub const D6: Self = Self(6);
    /// Digital pin 7 (switch F)
    pub const D7: Self = Self(7);
    /// Digital pin 8 (switch K)
    pub const D8: Self = Self(8);
    /// Analog pin 0 (X axis)
    pub const A0: Self = Self(14);
    /// Analog pin 1 (Y axis)
    pub const A1: Self = Self(15);

    /// Wrap a raw pin number.
    pub const fn new(number: u8) -> Self {
        Self(number)
    }

    /// Raw pin number.
    pub const fn number(self) -> u8 {
        self.0
    }
}

impl fmt::Display for PinId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 >= Self::A0.0 {
            write!(f, "A{}", self.0.wrapping_sub(Self::A0.0))
        } else {
            write!(f, "D{}", self.0)
        }
    }
}

/// Pin direction / pull configuration requested during initialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinMode {
    /// Input with the internal pull-up enabled (switch closes to ground).
    InputPullUp,
    /// Plain high-impedance input (analog pots).
    Input,
}

/// One entry of the pin-to-switch table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinBinding {
    /// Hardware pin
    pub pin: PinId,
    /// Switch reported when the pin reads active
    pub switch: SwitchId,
}

/// Stock shield table in scan order.
const SHIELD_BINDINGS: [PinBinding; MAX_DIGITAL_PINS] = [
    PinBinding { pin: PinId::D2, switch: SwitchId::A },
    PinBinding { pin: PinId::D3, switch: SwitchId::B },
    PinBinding { pin: PinId::D4, switch: SwitchId::C },
    PinBinding { pin: PinId::D5, switch: SwitchId::D },
    PinBinding { pin: PinId::D6, switch: SwitchId::E },
    PinBinding { pin: PinId::D7, switch: SwitchId::F },
    PinBinding { pin: PinId::D8, switch: SwitchId::K },
];

/// Ordered, read-only list of digital pin bindings.
///
/// Scan order is declaration order, so when several switches are held
/// together the first binding wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PinMapping {
    bindings: Vec<PinBinding, MAX_DIGITAL_PINS>,
}

impl PinMapping {
    /// The joystick shield wiring: A..F on D2..D7, K on D8.
    pub fn shield() -> Self {
        Self {
            bindings: Vec::from_array(SHIELD_BINDINGS),
        }
    }

    /// Start an empty mapping.
    pub fn builder() -> PinMappingBuilder {
        PinMappingBuilder {
            bindings: Vec::new(),
        }
    }

    /// Bindings in scan order.
    pub fn bindings(&self) -> &[PinBinding] {
        &self.bindings
    }

    /// Iterate over bound pins in scan order.
    pub fn pins(&self) -> impl Iterator<Item = PinId> + '_ {
        self.bindings.iter().map(|b| b.pin)
    }

    /// Pin bound to `switch`, if any.
    pub fn pin_for(&self, switch: SwitchId) -> Option<PinId> {
        self.bindings
            .iter()
            .find(|b| b.switch == switch)
            .map(|b| b.pin)
    }

    /// Number of bindings.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// `true` if nothing is bound.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

impl Default for PinMapping {
    fn default() -> Self {
        Self::shield()
    }
}

/// Validating builder for [`PinMapping`].
///
/// ```
/// use gamepad::{PinId, PinMapping, SwitchId};
///
/// let mapping = PinMapping::builder()
///     .bind(PinId::D2, SwitchId::A)?
///     .bind(PinId::D8, SwitchId::K)?
///     .build();
/// assert_eq!(mapping.len(), 2);
/// # Ok::<(), gamepad::GamepadError>(())
/// ```
#[derive(Debug, Clone)]
pub struct PinMappingBuilder {
    bindings: Vec<PinBinding, MAX_DIGITAL_PINS>,
}

impl PinMappingBuilder {
    /// Append a binding. Order of calls is the scan order.
    pub fn bind(mut self, pin: PinId, switch: SwitchId) -> Result<Self, GamepadError> {
        if switch.is_axis() {
            return Err(GamepadError::AxisAsDigital(switch));
        }
        if self.bindings.iter().any(|b| b.pin == pin) {
            return Err(GamepadError::DuplicatePin(pin));
        }
        if self.bindings.iter().any(|b| b.switch == switch) {
            return Err(GamepadError::DuplicateSwitch(switch));
        }
        self.bindings
            .push(PinBinding { pin, switch })
            .map_err(|_| GamepadError::MappingFull)?;
        Ok(self)
    }

    /// Freeze the mapping.
    pub fn build(self) -> PinMapping {
        PinMapping {
            bindings: self.bindings,
        }
    }
}
