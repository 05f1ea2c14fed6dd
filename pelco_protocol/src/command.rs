//! Standard command words and movement directions.
//!
//! Standard commands use word 3 ([Command1]) and word 4 ([Command2]) as flag
//! bytes, and words 5 and 6 as pan and tilt speed.
//!
//! Word | Bit 7 | Bit 6 | Bit 5 | Bit 4 | Bit 3 | Bit 2 | Bit 1 | Bit 0
//! ---- | ----- | ----- | ----- | ----- | ----- | ----- | ----- | -----
//! 3 | sense | reserved | reserved | auto scan | camera on | iris close | iris open | focus near
//! 4 | focus far | zoom wide | zoom tele | tilt down | tilt up | pan left | pan right | 0
#[cfg(feature = "clap")]
use clap::ValueEnum;
use modular_bitfield::{bitfield, specifiers::B2};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Word 3 of a standard command.
#[bitfield(bits = 8)]
#[repr(u8)]
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub struct Command1 {
    pub focus_near: bool,
    pub iris_open: bool,
    pub iris_close: bool,
    /// Camera power. Only meaningful together with [sense][Self::sense].
    pub camera_on: bool,
    pub auto_scan: bool,
    #[skip]
    __: B2,
    /// When set, [camera_on][Self::camera_on] and
    /// [auto_scan][Self::auto_scan] switch the function on; otherwise they
    /// switch it off.
    pub sense: bool,
}

/// Word 4 of a standard command.
#[bitfield(bits = 8)]
#[repr(u8)]
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub struct Command2 {
    /// Always clear for standard commands; set for extended commands.
    pub extended: bool,
    pub pan_right: bool,
    pub pan_left: bool,
    pub tilt_up: bool,
    pub tilt_down: bool,
    pub zoom_tele: bool,
    pub zoom_wide: bool,
    pub focus_far: bool,
}

/// Pan movement.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
#[cfg_attr(feature = "clap", derive(ValueEnum))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PanDirection {
    Left,
    Right,
    Stop,
}

/// Tilt movement.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
#[cfg_attr(feature = "clap", derive(ValueEnum))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TiltDirection {
    Up,
    Down,
    Stop,
}

/// Zoom lens movement.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
#[cfg_attr(feature = "clap", derive(ValueEnum))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ZoomDirection {
    /// Zoom in.
    Tele,
    /// Zoom out.
    Wide,
    Stop,
}

/// Focus lens movement.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
#[cfg_attr(feature = "clap", derive(ValueEnum))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FocusDirection {
    Near,
    Far,
    Stop,
}

/// Iris movement.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
#[cfg_attr(feature = "clap", derive(ValueEnum))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum IrisDirection {
    Open,
    Close,
    Stop,
}

impl Command2 {
    pub(crate) fn with_pan(self, direction: PanDirection) -> Self {
        self.with_pan_left(direction == PanDirection::Left)
            .with_pan_right(direction == PanDirection::Right)
    }

    pub(crate) fn with_tilt(self, direction: TiltDirection) -> Self {
        self.with_tilt_up(direction == TiltDirection::Up)
            .with_tilt_down(direction == TiltDirection::Down)
    }

    pub(crate) fn with_zoom(self, direction: ZoomDirection) -> Self {
        self.with_zoom_tele(direction == ZoomDirection::Tele)
            .with_zoom_wide(direction == ZoomDirection::Wide)
    }
}
