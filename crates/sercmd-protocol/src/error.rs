//! Protocol error types.

use thiserror::Error;

/// Errors raised when constructing a decoder from an invalid configuration.
///
/// Decode failures on the byte stream itself are never errors: they are
/// reported as [`DecodeStatus`](crate::DecodeStatus) values so a noisy link
/// cannot tear down the engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProtocolError {
    /// A header was configured with an empty data id string.
    #[error("header data id must not be empty")]
    EmptyDataId,

    /// The start and end characters are the same byte, which makes frame
    /// boundaries ambiguous.
    #[error("start and end characters must differ (both 0x{0:02X})")]
    StartEndConflict(u8),

    /// The header data id or separator reuses the start or end character,
    /// which puts a frame boundary inside the header.
    #[error("header collides with a framing character (0x{0:02X})")]
    HeaderFramingConflict(u8),

    /// The buffer flush limit cannot hold even a minimal frame.
    #[error("buffer flush limit too small: minimum {min} bytes, got {actual}")]
    FlushLimitTooSmall {
        /// Smallest accepted limit.
        min: usize,
        /// Configured limit.
        actual: usize,
    },
}

/// Result type alias for protocol setup operations.
pub type ProtocolResult<T> = Result<T, ProtocolError>;
