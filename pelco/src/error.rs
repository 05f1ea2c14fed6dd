use std::io::Error as IoError;
use thiserror::Error;

/// Error types
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    IoError(#[from] IoError),

    #[error(transparent)]
    Protocol(#[from] crate::protocol::Error),

    #[error("channel unavailable, not connected")]
    ChannelUnavailable,
}
