//! Switch and axis identifiers

use core::fmt;

use crate::error::GamepadError;

/// Named inputs on the joystick shield.
///
/// The digital switches `A`..`F` and `K` are reported by
/// [`InputSampler::poll_switch`](crate::InputSampler::poll_switch); `X` and
/// `Y` select the analog axes. "No switch active" is `None` in query results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SwitchId {
    /// Gamepad switch A
    A,
    /// Gamepad switch B
    B,
    /// Gamepad switch C
    C,
    /// Gamepad switch D
    D,
    /// Selection switch E
    E,
    /// Selection switch F
    F,
    /// Joystick push switch
    K,
    /// Joystick X axis selector
    X,
    /// Joystick Y axis selector
    Y,
}

impl SwitchId {
    /// Every digital switch, in shield declaration order.
    pub const DIGITAL: [Self; 7] = [Self::A, Self::B, Self::C, Self::D, Self::E, Self::F, Self::K];

    /// Short label printed on the shield silkscreen.
    pub const fn name(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::E => "E",
            Self::F => "F",
            Self::K => "K",
            Self::X => "X",
            Self::Y => "Y",
        }
    }

    /// `true` for the two analog axis selectors.
    pub const fn is_axis(self) -> bool {
        matches!(self, Self::X | Self::Y)
    }
}

impl fmt::Display for SwitchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Analog joystick axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Axis {
    /// Horizontal axis
    X,
    /// Vertical axis
    Y,
}

impl Axis {
    /// Both axes, X first.
    pub const ALL: [Self; 2] = [Self::X, Self::Y];

    /// Slot of this axis in per-axis state arrays.
    pub(crate) const fn slot(self) -> usize {
        match self {
            Self::X => 0,
            Self::Y => 1,
        }
    }
}

impl From<Axis> for SwitchId {
    fn from(axis: Axis) -> Self {
        match axis {
            Axis::X => Self::X,
            Axis::Y => Self::Y,
        }
    }
}

impl TryFrom<SwitchId> for Axis {
    type Error = GamepadError;

    fn try_from(sw: SwitchId) -> Result<Self, Self::Error> {
        match sw {
            SwitchId::X => Ok(Self::X),
            SwitchId::Y => Ok(Self::Y),
            other => Err(GamepadError::NotAnAxis(other)),
        }
    }
}
