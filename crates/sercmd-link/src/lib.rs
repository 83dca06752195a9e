//! Transport glue for the sercmd protocol.
//!
//! The protocol core in `sercmd-protocol` is pure: bytes in, statuses and
//! callbacks out. This crate supplies the thin layer around it: the
//! [`Transport`] trait over any non-blocking byte stream, a [`Link`]
//! facade composing decoder + encoder + transport, and an in-memory
//! [`LoopbackTransport`] for tests.
//!
//! # Example
//!
//! ```rust,ignore
//! use sercmd_link::{Link, LoopbackTransport};
//! use sercmd_protocol::{Decoder, DecoderConfig};
//!
//! let (port, _peer) = LoopbackTransport::pair();
//! let decoder = Decoder::new(DecoderConfig::new(b'\r'))?;
//! let mut link = Link::new(port, decoder);
//!
//! loop {
//!     let status = link.poll()?;
//!     // react to status, or sleep until more data is available
//! }
//! ```

mod error;
mod link;
mod transport;

pub use error::*;
pub use link::*;
pub use transport::*;
