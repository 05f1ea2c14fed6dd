//! Pelco-D message builder.
use crate::{
    command::{
        Command1, Command2, FocusDirection, IrisDirection, PanDirection, TiltDirection,
        ZoomDirection,
    },
    extended::ExtendedCommand,
    frame::{PelcoFrame, FRAME_LENGTH},
    speed::{PanSpeed, TiltSpeed},
    Error, Result,
};
use std::{fmt, ops::RangeInclusive};

/// Word numbers accepted by [PelcoD::set_word] and friends.
const WORDS: RangeInclusive<u8> = 3..=6;

/// Converts `v` to a `u8`, or returns [Error::OutOfRange] naming `param`.
fn to_byte<T: TryInto<u8>>(v: T, param: &'static str) -> Result<u8> {
    v.try_into().map_err(|_| Error::OutOfRange(param))
}

/// Converts a word number (3 - 6) to an index into [PelcoD::words].
fn word_index(word: u8) -> Result<usize> {
    if !WORDS.contains(&word) {
        return Err(Error::OutOfRange("word number"));
    }

    Ok(usize::from(word - WORDS.start()))
}

/// Builds messages for a single Pelco-D device.
///
/// A [PelcoD] holds the device's address and the four command words of the
/// next message. Convenience commands like [pan][Self::pan] replace all four
/// words at once, and [render][Self::render] produces the [PelcoFrame] to
/// send.
///
/// Invalid parameters are rejected with [Error::OutOfRange], and leave the
/// builder unmodified.
///
/// ```
/// use pelco_protocol::{PanDirection, PelcoD};
///
/// let mut camera = PelcoD::new(1)?;
/// camera.pan(PanDirection::Right, Some(0x20));
/// assert_eq!([0xff, 0x01, 0x00, 0x02, 0x20, 0x10, 0x33], camera.to_bytes());
/// # Ok::<(), pelco_protocol::Error>(())
/// ```
#[derive(Debug, PartialEq, Eq, Clone, Hash)]
pub struct PelcoD {
    address: u8,
    words: [u8; 4],
    pan_speed: PanSpeed,
    tilt_speed: TiltSpeed,
}

impl PelcoD {
    /// Creates a builder for the device at `address`.
    ///
    /// Returns [Error::OutOfRange] if `address` does not fit in a byte.
    pub fn new<T: TryInto<u8>>(address: T) -> Result<Self> {
        Ok(Self {
            address: to_byte(address, "address")?,
            words: [0; 4],
            pan_speed: PanSpeed::default(),
            tilt_speed: TiltSpeed::default(),
        })
    }

    #[inline]
    pub const fn address(&self) -> u8 {
        self.address
    }

    /// Words 3 to 6 of the next message.
    #[inline]
    pub const fn words(&self) -> [u8; 4] {
        self.words
    }

    /// Gets the value of `word` (3 - 6).
    pub fn word(&self, word: u8) -> Result<u8> {
        Ok(self.words[word_index(word)?])
    }

    /// Sets `word` (3 - 6) to `value` (0 - 255).
    pub fn set_word<T: TryInto<u8>>(&mut self, word: u8, value: T) -> Result {
        let i = word_index(word)?;
        self.words[i] = to_byte(value, "word value")?;
        Ok(())
    }

    /// Sets words 3 to 6.
    ///
    /// All values are checked before any word is changed.
    pub fn set_words<T: TryInto<u8>>(&mut self, words: [T; 4]) -> Result {
        let mut checked = [0; 4];
        for (c, w) in checked.iter_mut().zip(words) {
            *c = to_byte(w, "word value")?;
        }

        self.load(checked);
        Ok(())
    }

    /// Sets or clears a single `bit` (0 - 7) of `word` (3 - 6).
    pub fn set_word_bit(&mut self, word: u8, bit: u8, set: bool) -> Result {
        let i = word_index(word)?;
        if bit > 7 {
            return Err(Error::OutOfRange("bit number"));
        }

        if set {
            self.words[i] |= 1 << bit;
        } else {
            self.words[i] &= !(1 << bit);
        }
        Ok(())
    }

    fn load(&mut self, words: [u8; 4]) {
        trace!("device {:#04x}: words {}", self.address, hex::encode(words));
        self.words = words;
    }

    /// Checksum of the next message.
    pub fn checksum(&self) -> u8 {
        self.render().checksum()
    }

    /// Renders the next message.
    pub fn render(&self) -> PelcoFrame {
        PelcoFrame::new(self.address, self.words)
    }

    pub fn to_bytes(&self) -> [u8; FRAME_LENGTH] {
        self.render().to_bytes()
    }

    /// See [PelcoFrame::hex].
    pub fn hex(&self, separator: &str) -> String {
        self.render().hex(separator)
    }

    /// See [PelcoFrame::bin].
    pub fn bin(&self, separator: &str) -> String {
        self.render().bin(separator)
    }

    #[inline]
    pub const fn pan_speed(&self) -> u8 {
        self.pan_speed.get()
    }

    /// Sets the pan speed used by subsequent commands.
    ///
    /// `0` becomes `0x01`, and anything above `0x3f` becomes `0xff` (turbo).
    pub fn set_pan_speed(&mut self, speed: u8) {
        self.pan_speed = PanSpeed::from(speed);
        if self.pan_speed.get() != speed {
            debug!("pan speed {speed:#04x} clamped to {:#04x}", self.pan_speed.get());
        }
    }

    #[inline]
    pub const fn tilt_speed(&self) -> u8 {
        self.tilt_speed.get()
    }

    /// Sets the tilt speed used by subsequent commands.
    ///
    /// Values are clamped to `0x01 ..= 0x3f`.
    pub fn set_tilt_speed(&mut self, speed: u8) {
        self.tilt_speed = TiltSpeed::from(speed);
        if self.tilt_speed.get() != speed {
            debug!("tilt speed {speed:#04x} clamped to {:#04x}", self.tilt_speed.get());
        }
    }

    /// Loads a standard command with the current pan and tilt speeds.
    pub fn standard_command(&mut self, cmd1: Command1, cmd2: Command2) {
        self.load([
            cmd1.into(),
            cmd2.into(),
            self.pan_speed.get(),
            self.tilt_speed.get(),
        ]);
    }

    /// Switches the camera on or off.
    ///
    /// On sets both the sense and camera on bits of word 3 (`0x88`). Off
    /// clears only the sense bit, and keeps the camera on bit set (`0x08`).
    pub fn camera_power(&mut self, on: bool) {
        self.standard_command(
            Command1::new().with_sense(on).with_camera_on(true),
            Command2::new(),
        );
    }

    /// Pans the camera, optionally updating the [pan speed][Self::set_pan_speed]
    /// first.
    ///
    /// [PanDirection::Stop] clears all movement, but keeps the tilt speed.
    pub fn pan(&mut self, direction: PanDirection, speed: Option<u8>) {
        if let Some(speed) = speed {
            self.set_pan_speed(speed);
        }

        if direction == PanDirection::Stop {
            self.load([0, 0, 0, self.tilt_speed.get()]);
        } else {
            self.standard_command(Command1::new(), Command2::new().with_pan(direction));
        }
    }

    /// Tilts the camera, optionally updating the
    /// [tilt speed][Self::set_tilt_speed] first.
    ///
    /// [TiltDirection::Stop] clears all movement, but keeps the pan speed.
    pub fn tilt(&mut self, direction: TiltDirection, speed: Option<u8>) {
        if let Some(speed) = speed {
            self.set_tilt_speed(speed);
        }

        if direction == TiltDirection::Stop {
            self.load([0, 0, self.pan_speed.get(), 0]);
        } else {
            self.standard_command(Command1::new(), Command2::new().with_tilt(direction));
        }
    }

    pub fn left(&mut self) {
        self.pan(PanDirection::Left, None);
    }

    pub fn right(&mut self) {
        self.pan(PanDirection::Right, None);
    }

    pub fn up(&mut self) {
        self.tilt(TiltDirection::Up, None);
    }

    pub fn down(&mut self) {
        self.tilt(TiltDirection::Down, None);
    }

    /// Stops all movement.
    pub fn stop(&mut self) {
        self.load([0; 4]);
    }

    pub fn zoom(&mut self, direction: ZoomDirection) {
        self.standard_command(Command1::new(), Command2::new().with_zoom(direction));
    }

    pub fn focus(&mut self, direction: FocusDirection) {
        self.standard_command(
            Command1::new().with_focus_near(direction == FocusDirection::Near),
            Command2::new().with_focus_far(direction == FocusDirection::Far),
        );
    }

    pub fn iris(&mut self, direction: IrisDirection) {
        self.standard_command(
            Command1::new()
                .with_iris_open(direction == IrisDirection::Open)
                .with_iris_close(direction == IrisDirection::Close),
            Command2::new(),
        );
    }

    /// Loads an extended command with the payload `value`.
    ///
    /// Returns [Error::OutOfRange] if `value` is outside of
    /// [the command's range][ExtendedCommand::range].
    pub fn extended_command<T: TryInto<u8>>(
        &mut self,
        command: ExtendedCommand,
        value: T,
    ) -> Result {
        let value = to_byte(value, "extended command value")?;
        let words = command.words(value)?;
        debug!("device {:#04x}: {command} {value:#04x}", self.address);
        self.load(words);
        Ok(())
    }
}

impl fmt::Display for PelcoD {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.render(), f)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn manual_checksums() -> Result<()> {
        // Pelco-D protocol manual, page 6
        let cases = [
            ([0x01, 0x88, 0x00, 0x00, 0x00], 0x89),
            ([0x01, 0x08, 0x00, 0x00, 0x00], 0x09),
            ([0x02, 0x00, 0x04, 0x00, 0x20], 0x26),
            ([0x02, 0x00, 0x00, 0x00, 0x00], 0x02),
            ([0x0a, 0x88, 0x90, 0x00, 0x40], 0x62),
        ];

        for ([address, w3, w4, w5, w6], expected) in cases {
            let mut p = PelcoD::new(address)?;
            p.set_words([w3, w4, w5, w6])?;
            assert_eq!(expected, p.checksum());
        }

        let mut p = PelcoD::new(1)?;
        p.set_words([0x88, 0, 0, 0])?;
        assert_eq!(hex::decode("ff018800000089")?, p.to_bytes());
        Ok(())
    }

    #[test]
    fn new() -> Result<()> {
        assert_eq!(0, PelcoD::new(0)?.address());
        assert_eq!(0xff, PelcoD::new(255u16)?.address());
        assert_eq!([0; 4], PelcoD::new(1)?.words());

        assert!(matches!(PelcoD::new(256), Err(Error::OutOfRange(_))));
        assert!(matches!(PelcoD::new(-1), Err(Error::OutOfRange(_))));
        Ok(())
    }

    #[test]
    fn set_word() -> Result<()> {
        let mut p = PelcoD::new(1)?;
        p.set_word(3, 0x88)?;
        p.set_word(6, 0xff)?;
        assert_eq!([0x88, 0, 0, 0xff], p.words());
        assert_eq!(0x88, p.word(3)?);

        assert!(matches!(p.set_word(2, 1), Err(Error::OutOfRange(_))));
        assert!(matches!(p.set_word(7, 1), Err(Error::OutOfRange(_))));
        assert!(matches!(p.set_word(3, 256), Err(Error::OutOfRange(_))));
        assert!(matches!(p.set_word(3, -1), Err(Error::OutOfRange(_))));
        assert!(matches!(p.word(7), Err(Error::OutOfRange(_))));

        // Unchanged by failures
        assert_eq!([0x88, 0, 0, 0xff], p.words());
        Ok(())
    }

    #[test]
    fn set_words_all_or_nothing() -> Result<()> {
        let mut p = PelcoD::new(1)?;
        p.set_words([1, 2, 3, 4])?;
        assert!(matches!(
            p.set_words([5, 6, 7, 0x100]),
            Err(Error::OutOfRange(_))
        ));
        assert_eq!([1, 2, 3, 4], p.words());
        Ok(())
    }

    #[test]
    fn set_word_bit() -> Result<()> {
        let mut p = PelcoD::new(1)?;
        p.set_words([0xa5, 0x00, 0xff, 0x00])?;

        for word in 3..=6 {
            for bit in 0..8 {
                let before = p.words();
                let was_set = before[usize::from(word - 3)] & (1 << bit) != 0;

                p.set_word_bit(word, bit, true)?;
                let w = p.word(word)?;
                assert_ne!(0, w & (1 << bit));
                assert_eq!(before[usize::from(word - 3)] | (1 << bit), w);

                p.set_word_bit(word, bit, false)?;
                let w = p.word(word)?;
                assert_eq!(before[usize::from(word - 3)] & !(1 << bit), w);

                p.set_word_bit(word, bit, was_set)?;
                assert_eq!(before, p.words());
            }
        }

        assert!(matches!(p.set_word_bit(2, 0, true), Err(Error::OutOfRange(_))));
        assert!(matches!(p.set_word_bit(7, 0, true), Err(Error::OutOfRange(_))));
        assert!(matches!(p.set_word_bit(3, 8, true), Err(Error::OutOfRange(_))));
        assert!(matches!(p.set_word_bit(6, 0xff, false), Err(Error::OutOfRange(_))));

        // Unchanged by failures
        assert_eq!([0xa5, 0x00, 0xff, 0x00], p.words());
        Ok(())
    }

    #[test]
    fn render() -> Result<()> {
        let mut p = PelcoD::new(0xfe)?;
        for words in [[0, 0, 0, 0], [0xff, 0xff, 0xff, 0xff], [0x12, 0x34, 0x56, 0x78]] {
            p.set_words(words)?;
            let b = p.to_bytes();
            assert_eq!(FRAME_LENGTH, b.len());
            assert_eq!(0xff, b[0]);
            assert_eq!(
                b[1..6].iter().fold(0u8, |a, v| a.wrapping_add(*v)),
                b[6]
            );
            assert_eq!(p.render(), PelcoFrame::from_bytes(&b)?);
        }
        Ok(())
    }

    #[test]
    fn camera_power() -> Result<()> {
        let mut p = PelcoD::new(1)?;
        p.camera_power(true);
        // Flag bits are combined with OR: both sense and camera on are set.
        assert_eq!([0x88, 0x00, 0x10, 0x10], p.words());

        p.camera_power(false);
        assert_eq!([0x08, 0x00, 0x10, 0x10], p.words());
        Ok(())
    }

    #[test]
    fn pan() -> Result<()> {
        let mut p = PelcoD::new(1)?;
        p.right();
        assert_eq!([0x00, 0x02, 0x10, 0x10], p.words());

        p.pan(PanDirection::Left, Some(0x30));
        assert_eq!([0x00, 0x04, 0x30, 0x10], p.words());
        assert_eq!(0x30, p.pan_speed());

        p.pan(PanDirection::Right, Some(0x40));
        assert_eq!([0x00, 0x02, 0xff, 0x10], p.words());

        p.set_tilt_speed(0x20);
        p.pan(PanDirection::Stop, None);
        assert_eq!([0x00, 0x00, 0x00, 0x20], p.words());
        Ok(())
    }

    #[test]
    fn tilt() -> Result<()> {
        let mut p = PelcoD::new(1)?;
        p.up();
        assert_eq!([0x00, 0x08, 0x10, 0x10], p.words());

        p.tilt(TiltDirection::Down, Some(0x40));
        assert_eq!([0x00, 0x10, 0x10, 0x3f], p.words());

        p.down();
        assert_eq!([0x00, 0x10, 0x10, 0x3f], p.words());

        p.tilt(TiltDirection::Stop, None);
        assert_eq!([0x00, 0x00, 0x10, 0x00], p.words());
        Ok(())
    }

    #[test]
    fn speeds() -> Result<()> {
        let mut p = PelcoD::new(1)?;
        assert_eq!(0x10, p.pan_speed());
        assert_eq!(0x10, p.tilt_speed());

        p.set_pan_speed(0);
        assert_eq!(0x01, p.pan_speed());
        p.set_pan_speed(0x40);
        assert_eq!(0xff, p.pan_speed());

        p.set_tilt_speed(0);
        assert_eq!(0x01, p.tilt_speed());
        p.set_tilt_speed(0x40);
        assert_eq!(0x3f, p.tilt_speed());
        Ok(())
    }

    #[test]
    fn stop() -> Result<()> {
        let mut p = PelcoD::new(1)?;
        p.set_words([0xff, 0xff, 0xff, 0xff])?;
        p.stop();
        assert_eq!([0; 4], p.words());

        p.right();
        p.stop();
        assert_eq!([0; 4], p.words());
        assert_eq!(hex::decode("ff010000000001")?, p.to_bytes());
        Ok(())
    }

    #[test]
    fn lens() -> Result<()> {
        let mut p = PelcoD::new(1)?;
        p.zoom(ZoomDirection::Tele);
        assert_eq!([0x00, 0x20, 0x10, 0x10], p.words());
        p.zoom(ZoomDirection::Wide);
        assert_eq!([0x00, 0x40, 0x10, 0x10], p.words());
        p.focus(FocusDirection::Near);
        assert_eq!([0x01, 0x00, 0x10, 0x10], p.words());
        p.focus(FocusDirection::Far);
        assert_eq!([0x00, 0x80, 0x10, 0x10], p.words());
        p.iris(IrisDirection::Open);
        assert_eq!([0x02, 0x00, 0x10, 0x10], p.words());
        p.iris(IrisDirection::Close);
        assert_eq!([0x04, 0x00, 0x10, 0x10], p.words());
        p.zoom(ZoomDirection::Stop);
        assert_eq!([0x00, 0x00, 0x10, 0x10], p.words());
        Ok(())
    }

    #[test]
    fn extended_command() -> Result<()> {
        let mut p = PelcoD::new(1)?;
        p.extended_command(ExtendedCommand::GoToPreset, 3)?;
        assert_eq!(hex::decode("ff01000700030b")?, p.to_bytes());
        assert_eq!(
            Some((ExtendedCommand::GoToPreset, 3)),
            p.render().extended_command()
        );

        assert!(matches!(
            p.extended_command(ExtendedCommand::SetAuxiliary, 9),
            Err(Error::OutOfRange(_))
        ));
        assert!(matches!(
            p.extended_command(ExtendedCommand::SetPreset, 0x100),
            Err(Error::OutOfRange(_))
        ));
        assert_eq!([0x00, 0x07, 0x00, 0x03], p.words());
        Ok(())
    }

    #[test]
    fn formatting() -> Result<()> {
        let mut p = PelcoD::new(2)?;
        p.set_words([0x00, 0x04, 0x00, 0x20])?;
        assert_eq!("ff020004002026", p.to_string());
        assert_eq!("ff-02-00-04-00-20-26", p.hex("-"));
        assert_eq!(
            "11111111 00000010 00000000 00000100 00000000 00100000 00100110",
            p.bin(" ")
        );
        Ok(())
    }
}
