//! Camera control handle.
use crate::{
    protocol::{
        ExtendedCommand, FocusDirection, IrisDirection, PanDirection, PelcoD, PelcoFrame,
        TiltDirection, ZoomDirection,
    },
    PelcoUdpChannel, PelcoWriter, Result,
};
use std::future::Future;
use tokio::io::AsyncWrite;

/// Somewhere to send [PelcoFrame]s.
///
/// The returned future is [Send], so a [PtzCamera] can be moved into a
/// spawned task.
pub trait FrameSink {
    fn send_frame(&mut self, frame: &PelcoFrame) -> impl Future<Output = Result> + Send;
}

impl<W: AsyncWrite + Unpin + Send> FrameSink for PelcoWriter<W> {
    fn send_frame(&mut self, frame: &PelcoFrame) -> impl Future<Output = Result> + Send {
        self.send(frame)
    }
}

impl FrameSink for PelcoUdpChannel {
    fn send_frame(&mut self, frame: &PelcoFrame) -> impl Future<Output = Result> + Send {
        self.send(frame)
    }
}

/// Controls a single PTZ camera.
///
/// Each method updates the camera's [PelcoD] builder, then immediately sends
/// the rendered frame to the [FrameSink].
///
/// [PtzCamera] requires exclusive access; share it between tasks behind a
/// lock if needed.
#[derive(Debug)]
pub struct PtzCamera<S> {
    builder: PelcoD,
    sink: S,
}

impl<S: FrameSink> PtzCamera<S> {
    pub fn new(builder: PelcoD, sink: S) -> Self {
        Self { builder, sink }
    }

    /// Builder holding the last command sent.
    pub fn builder(&self) -> &PelcoD {
        &self.builder
    }

    pub fn into_inner(self) -> (PelcoD, S) {
        (self.builder, self.sink)
    }

    /// Sends the builder's current message.
    pub async fn send(&mut self) -> Result {
        let frame = self.builder.render();
        self.sink.send_frame(&frame).await
    }

    pub async fn camera_power(&mut self, on: bool) -> Result {
        info!(
            "camera {:#04x}: power {}",
            self.builder.address(),
            if on { "on" } else { "off" }
        );
        self.builder.camera_power(on);
        self.send().await
    }

    pub async fn pan(&mut self, direction: PanDirection, speed: Option<u8>) -> Result {
        self.builder.pan(direction, speed);
        self.send().await
    }

    pub async fn tilt(&mut self, direction: TiltDirection, speed: Option<u8>) -> Result {
        self.builder.tilt(direction, speed);
        self.send().await
    }

    pub async fn zoom(&mut self, direction: ZoomDirection) -> Result {
        self.builder.zoom(direction);
        self.send().await
    }

    pub async fn focus(&mut self, direction: FocusDirection) -> Result {
        self.builder.focus(direction);
        self.send().await
    }

    pub async fn iris(&mut self, direction: IrisDirection) -> Result {
        self.builder.iris(direction);
        self.send().await
    }

    pub async fn stop(&mut self) -> Result {
        self.builder.stop();
        self.send().await
    }

    /// Sends an extended command. Nothing is sent if `value` is out of range.
    pub async fn extended_command(&mut self, command: ExtendedCommand, value: u8) -> Result {
        self.builder.extended_command(command, value)?;
        self.send().await
    }
}
