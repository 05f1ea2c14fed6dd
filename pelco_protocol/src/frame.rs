//! # Pelco-D frames
//!
//! Every Pelco-D message is exactly 7 bytes long, and carries no variable
//! length fields or session state.
//!
//! ## Frame format
//!
//! * `u8`: sync byte, always `0xff`
//! * `u8`: camera address
//! * `u8`: word 3, command 1
//! * `u8`: word 4, command 2
//! * `u8`: word 5, data 1 (usually pan speed)
//! * `u8`: word 6, data 2 (usually tilt speed)
//! * `u8`: checksum, the sum of bytes 1 to 5, modulo 256
use crate::{extended::ExtendedCommand, Error, Result};
use binrw::{binrw, BinRead};
use num_traits::FromPrimitive;
use std::{fmt, io::Cursor};

/// Sync byte which starts every frame.
pub const SYNC: u8 = 0xff;

/// Length of a frame on the wire, including the sync byte and checksum.
pub const FRAME_LENGTH: usize = 7;

/// Calculates the checksum of a frame with the given `address` and command
/// `words`.
pub fn checksum(address: u8, words: &[u8; 4]) -> u8 {
    words.iter().fold(address, |acc, w| acc.wrapping_add(*w))
}

/// A rendered Pelco-D frame.
///
/// There is no checksum field: it is always calculated from the address and
/// words when the frame is written, and verified when it is read.
#[binrw]
#[brw(big, magic = 0xffu8)]
#[derive(Default, Debug, PartialEq, Eq, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PelcoFrame {
    /// Address of the target device.
    pub address: u8,

    /// Words 3 to 6 of the frame.
    pub words: [u8; 4],

    #[br(temp, assert(
        checksum == crate::checksum(address, &words),
        "checksum mismatch: expected {:#04x}, got {:#04x}",
        crate::checksum(address, &words),
        checksum
    ))]
    #[bw(calc = crate::checksum(*address, words))]
    checksum: u8,
}

impl PelcoFrame {
    pub const fn new(address: u8, words: [u8; 4]) -> Self {
        Self { address, words }
    }

    /// Parses a frame from exactly [FRAME_LENGTH] bytes, verifying the sync
    /// byte and checksum.
    pub fn from_bytes(b: &[u8]) -> Result<Self> {
        if b.len() != FRAME_LENGTH {
            return Err(Error::InvalidLength);
        }

        Ok(Self::read(&mut Cursor::new(b))?)
    }

    pub fn checksum(&self) -> u8 {
        checksum(self.address, &self.words)
    }

    /// The frame as it is sent on the wire.
    pub fn to_bytes(&self) -> [u8; FRAME_LENGTH] {
        let [w3, w4, w5, w6] = self.words;
        [SYNC, self.address, w3, w4, w5, w6, self.checksum()]
    }

    /// Renders the frame as lower-case hexadecimal, with `separator` between
    /// each byte.
    pub fn hex(&self, separator: &str) -> String {
        self.to_bytes()
            .iter()
            .map(|b| hex::encode([*b]))
            .collect::<Vec<_>>()
            .join(separator)
    }

    /// Renders the frame as binary digits (8 per byte), with `separator`
    /// between each byte.
    pub fn bin(&self, separator: &str) -> String {
        self.to_bytes()
            .iter()
            .map(|b| format!("{b:08b}"))
            .collect::<Vec<_>>()
            .join(separator)
    }

    /// If this frame carries a known extended command, returns the command
    /// and its payload (word 6).
    pub fn extended_command(&self) -> Option<(ExtendedCommand, u8)> {
        let [w3, w4, _, w6] = self.words;
        if w3 != 0 || w4 & 1 == 0 {
            return None;
        }

        ExtendedCommand::from_u8(w4).map(|c| (c, w6))
    }
}

impl fmt::Display for PelcoFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex(""))
    }
}

impl From<PelcoFrame> for [u8; FRAME_LENGTH] {
    fn from(value: PelcoFrame) -> Self {
        value.to_bytes()
    }
}
