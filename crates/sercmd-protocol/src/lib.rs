//! Line-oriented command protocol for serial links.
//!
//! This crate frames, decodes and encodes human-readable command packets
//! exchanged over a byte stream, typically a serial port. An application
//! registers named commands, each with required positional parameters and
//! optional `-flag` style options, feeds received byte chunks into the
//! decoder and gets a callback with the parsed arguments whenever a
//! well-formed packet arrives.
//!
//! # Protocol Overview
//!
//! Packets are single ASCII lines:
//!
//! ```text
//! [START] [DATA_ID SEP]? cmdname [value]* [-flag [value]]* END
//! ```
//!
//! - **Start character**: optional configured frame delimiter.
//! - **Header**: optional fixed id string after the start character,
//!   validated before full parsing.
//! - **Command name**: first whitespace-delimited token; must match a
//!   registered command exactly.
//! - **Arguments**: positional values and `-name [value]` options, space
//!   separated, with single/double quote grouping.
//! - **End character**: mandatory terminator; every packet ends with it.
//!
//! The decoder is incremental: it tolerates partial arrivals, strips
//! leading line noise, resynchronizes after truncated packets and bounds
//! its buffer with a configurable flush limit. Every failure is local to
//! one packet and reported as a [`DecodeStatus`], never an error.
//!
//! # Example
//!
//! ```rust,ignore
//! use sercmd_protocol::{Command, CmdOption, Decoder, DecoderConfig, Parameter};
//!
//! let mut config = DecoderConfig::new(b'>');
//! config.start_char = Some(b'<');
//!
//! let mut cmd = Command::with_callback("move", Box::new(|params| {
//!     println!("move to {} {}", params[0], params[1]);
//! }));
//! cmd.register_param(Parameter::new("x", "x position"));
//! cmd.register_param(Parameter::new("y", "y position"));
//! cmd.register_option(CmdOption::new("f", false));
//!
//! let mut decoder = Decoder::new(config)?;
//! decoder.register(cmd);
//!
//! decoder.feed(b"<move 10 20 -f>\r\n");
//! let status = decoder.run();
//! ```

mod command;
mod decoder;
mod encoder;
mod error;
mod parser;
mod tokenizer;

pub use command::*;
pub use decoder::*;
pub use encoder::*;
pub use error::*;
pub use parser::{parse_arguments, OPTION_MARKER};
pub use tokenizer::split_arguments;
