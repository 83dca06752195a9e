//! Link error types.

use thiserror::Error;

/// Errors surfaced by the link facade. Decode outcomes are not errors; they
/// are returned as `DecodeStatus` values by `Link::poll`.
#[derive(Error, Debug)]
pub enum LinkError {
    /// The underlying transport failed.
    #[error("transport I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The transport is not open.
    #[error("transport is not open")]
    PortClosed,
}

/// Result type alias for link operations.
pub type LinkResult<T> = Result<T, LinkError>;
