use thiserror::Error;

/// Error types.
#[derive(Debug, Error)]
pub enum Error {
    #[cfg(test)]
    #[error(transparent)]
    FromHexError(#[from] hex::FromHexError),

    /// A parameter was outside of the range permitted by the protocol.
    ///
    /// The inner value names the parameter.
    #[error("{0} out of valid range")]
    OutOfRange(&'static str),

    #[error("invalid length")]
    InvalidLength,

    #[error("data parse error: {0}")]
    BinRwError(#[from] binrw::Error),
}
