//! Transport for byte streams, such as serial ports and TCP connections to
//! serial-over-IP encoders.
use crate::{protocol::PelcoFrame, Result};
use tokio::io::{AsyncWrite, AsyncWriteExt};

/// Writes [PelcoFrame]s verbatim to an [AsyncWrite] stream.
///
/// Pelco-D has no responses, so the stream is never read from.
#[derive(Debug)]
pub struct PelcoWriter<W> {
    inner: W,
}

impl<W: AsyncWrite + Unpin> PelcoWriter<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    /// Writes a frame, and flushes the stream.
    pub async fn send(&mut self, frame: &PelcoFrame) -> Result {
        trace!("sending {frame}");
        self.inner.write_all(&frame.to_bytes()).await?;
        self.inner.flush().await?;
        Ok(())
    }

    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}
