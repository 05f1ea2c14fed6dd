#![doc = include_str!("../README.md")]

#[macro_use]
extern crate num_derive;

#[macro_use]
extern crate tracing;

mod builder;
pub mod command;
mod error;
mod extended;
mod frame;
mod speed;

pub use crate::{
    builder::PelcoD,
    command::{
        Command1, Command2, FocusDirection, IrisDirection, PanDirection, TiltDirection,
        ZoomDirection,
    },
    error::Error,
    extended::ExtendedCommand,
    frame::{checksum, PelcoFrame, FRAME_LENGTH, SYNC},
    speed::{PanSpeed, TiltSpeed},
};

/// Result type.
pub type Result<T = ()> = std::result::Result<T, Error>;
