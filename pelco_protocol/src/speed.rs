//! Pan and tilt speeds.
//!
//! Both speeds range from `0x01` (slowest) to `0x3f` (fastest). Pan speed has
//! an additional "turbo" value of `0xff`.
//!
//! Values are clamped when converted from a `u8`, rather than rejected.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

const MIN_SPEED: u8 = 0x01;
const MAX_SPEED: u8 = 0x3f;
const DEFAULT_SPEED: u8 = 0x10;

/// Pan speed (word 5 of a standard command).
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "u8", into = "u8"))]
pub struct PanSpeed(u8);

/// Tilt speed (word 6 of a standard command).
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "u8", into = "u8"))]
pub struct TiltSpeed(u8);

impl PanSpeed {
    pub const MIN: Self = Self(MIN_SPEED);
    pub const MAX: Self = Self(MAX_SPEED);
    /// Turbo speed, faster than [MAX][Self::MAX].
    pub const TURBO: Self = Self(0xff);

    #[inline]
    pub const fn get(self) -> u8 {
        self.0
    }

    #[inline]
    pub const fn is_turbo(self) -> bool {
        self.0 == Self::TURBO.0
    }
}

impl TiltSpeed {
    pub const MIN: Self = Self(MIN_SPEED);
    pub const MAX: Self = Self(MAX_SPEED);

    #[inline]
    pub const fn get(self) -> u8 {
        self.0
    }
}

/// Anything above [PanSpeed::MAX] becomes [PanSpeed::TURBO].
impl From<u8> for PanSpeed {
    fn from(v: u8) -> Self {
        match v {
            0 => Self::MIN,
            v if v > MAX_SPEED => Self::TURBO,
            v => Self(v),
        }
    }
}

impl From<u8> for TiltSpeed {
    fn from(v: u8) -> Self {
        Self(v.clamp(MIN_SPEED, MAX_SPEED))
    }
}

impl From<PanSpeed> for u8 {
    fn from(v: PanSpeed) -> Self {
        v.0
    }
}

impl From<TiltSpeed> for u8 {
    fn from(v: TiltSpeed) -> Self {
        v.0
    }
}

impl Default for PanSpeed {
    fn default() -> Self {
        Self(DEFAULT_SPEED)
    }
}

impl Default for TiltSpeed {
    fn default() -> Self {
        Self(DEFAULT_SPEED)
    }
}
