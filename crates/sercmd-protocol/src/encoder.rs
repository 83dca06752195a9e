//! Frame building for outgoing commands.
//!
//! The encoder turns a [`Command`]'s current parameter and option values
//! into one transmit line:
//!
//! ```text
//! cmdname value1 value2 -flag -opt optvalue\r\n
//! ```
//!
//! Every registered parameter is emitted in registration order, set or not;
//! options are emitted only when their `to_send` flag is set. No quoting or
//! escaping is applied, so a value containing whitespace will not survive a
//! round trip through the tokenizer on the receiving side.

use crate::command::Command;
use crate::parser::OPTION_MARKER;

/// Terminator appended to every outgoing frame.
pub const LINE_TERMINATOR: &str = "\r\n";

/// Build the transmit line for a command from its current parameter and
/// option values, terminator included.
pub fn build_frame(command: &Command) -> String {
    let mut line = command.name.clone();

    for param in &command.params {
        line.push(' ');
        line.push_str(&param.value);
    }

    for option in &command.options {
        if !option.to_send {
            continue;
        }
        line.push(' ');
        line.push(OPTION_MARKER);
        line.push_str(&option.name);
        if option.has_value {
            line.push(' ');
            line.push_str(&option.value);
        }
    }

    line.push_str(LINE_TERMINATOR);
    line
}

/// Stateful encoder that counts transmitted frames, mirroring the decoder's
/// packet count on the receive side.
///
/// Building a line and counting it are separate steps: the caller calls
/// [`Encoder::mark_sent`] once the frame actually made it onto the wire, so
/// a failed write is not counted.
#[derive(Debug, Default)]
pub struct Encoder {
    packet_count: u64,
}

impl Encoder {
    /// Create an encoder.
    pub fn new() -> Self {
        Encoder::default()
    }

    /// Build the transmit line for a command.
    pub fn encode(&self, command: &Command) -> String {
        build_frame(command)
    }

    /// Record one successfully transmitted frame.
    pub fn mark_sent(&mut self) {
        self.packet_count += 1;
    }

    /// Number of frames transmitted so far.
    pub fn packet_count(&self) -> u64 {
        self.packet_count
    }
}
