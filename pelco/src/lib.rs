#![doc = include_str!("../README.md")]

#[macro_use]
extern crate tracing;

mod camera;
mod error;
mod udp;
mod writer;

pub use {
    crate::{
        camera::{FrameSink, PtzCamera},
        error::Error,
        udp::PelcoUdpChannel,
        writer::PelcoWriter,
    },
    pelco_protocol as protocol,
};
pub type Result<T = ()> = std::result::Result<T, Error>;
