//! Incremental frame decoder.
//!
//! The decoder is a byte-buffer state machine. Arbitrary chunks of received
//! data are appended with [`Decoder::feed`]; each call to [`Decoder::run`]
//! advances the machine until one frame is fully resolved (decoded, rejected
//! or incomplete) and reports the outcome as a [`DecodeStatus`]. Partial
//! frames simply wait in the buffer for the next chunk.
//!
//! Frame layout on the wire:
//!
//! ```text
//! [START]  [DATA_ID SEP]?  cmdname [token]*  END
//! optional optional header               terminator
//! ```
//!
//! The end character is mandatory; the start character and header are
//! enabled per [`DecoderConfig`]. All decode failures are local to the
//! offending frame: the bad bytes are dropped and the machine returns to
//! idle, ready for the next frame.

use bytes::{Buf, BytesMut};
use log::{debug, warn};
use std::fmt;

use crate::command::Command;
use crate::error::{ProtocolError, ProtocolResult};
use crate::parser;
use crate::tokenizer;

/// Default receive buffer flush limit, in bytes.
pub const DEFAULT_BUFFER_FLUSH_LIMIT: usize = 10_000;

/// Smallest accepted flush limit; anything below cannot hold a frame worth
/// decoding.
pub const MIN_BUFFER_FLUSH_LIMIT: usize = 8;

/// Optional fixed header expected between the start character and the
/// command name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameHeader {
    /// Expected id string. A frame whose header bytes differ is rejected
    /// with [`DecodeStatus::DataIdDidNotMatch`]. Must not contain the start
    /// or end character.
    pub data_id: String,
    /// Byte separating the header from the frame body. Must differ from the
    /// start and end characters.
    pub separator: u8,
}

impl FrameHeader {
    /// Create a header description.
    pub fn new(data_id: impl Into<String>, separator: u8) -> Self {
        FrameHeader {
            data_id: data_id.into(),
            separator,
        }
    }
}

/// Frame format configuration, fixed for the lifetime of a decoder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecoderConfig {
    /// Optional leading frame delimiter. When absent the first buffered byte
    /// is treated as the implicit frame start.
    pub start_char: Option<u8>,
    /// Mandatory frame terminator; every frame must end with it.
    pub end_char: u8,
    /// Optional expected header.
    pub header: Option<FrameHeader>,
    /// The receive buffer is force-cleared once it reaches this many bytes,
    /// bounding memory against a stream that never frames. Must exceed the
    /// largest expected frame.
    pub buffer_flush_limit: usize,
}

impl DecoderConfig {
    /// Configuration with the given terminator and no start character or
    /// header.
    pub fn new(end_char: u8) -> Self {
        DecoderConfig {
            start_char: None,
            end_char,
            header: None,
            buffer_flush_limit: DEFAULT_BUFFER_FLUSH_LIMIT,
        }
    }
}

/// Outcome of one [`Decoder::run`] pass.
///
/// Everything except [`DecodeStatus::Ok`] and
/// [`DecodeStatus::PacketDecodingPassed`] is a recoverable rejection of one
/// frame; the decoder is back in idle and later frames decode normally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeStatus {
    /// No complete frame buffered yet; waiting for more data.
    Ok,
    /// A frame was decoded, validated and its callback run.
    PacketDecodingPassed,
    /// Framing was intact but the header bytes did not match the configured
    /// data id. The whole buffer was discarded.
    DataIdDidNotMatch,
    /// The buffer reached the flush limit and was force-cleared.
    RxBufferOverflow,
    /// The frame named a command that is not registered. The frame was
    /// dropped.
    PacketDecodingFailed,
    /// A second start character appeared before the end character, so the
    /// earlier frame can never complete. Bytes before the second start were
    /// dropped.
    PacketUnexpectedlyTruncated,
    /// The number of positional values did not equal the command's
    /// registered parameter count. The frame was dropped, no callback ran.
    IncorrectNumParam,
}

impl DecodeStatus {
    /// Human-readable status message.
    pub fn message(&self) -> &'static str {
        match self {
            DecodeStatus::Ok => "O.K.",
            DecodeStatus::PacketDecodingPassed => "Packet successfully decoded.",
            DecodeStatus::DataIdDidNotMatch => "Data ID did not match.",
            DecodeStatus::RxBufferOverflow => "RX buffer overflow.",
            DecodeStatus::PacketDecodingFailed => "Received unrecognised command.",
            DecodeStatus::PacketUnexpectedlyTruncated => "Packet unexpectedly truncated.",
            DecodeStatus::IncorrectNumParam => "Incorrect number of parameters.",
        }
    }
}

impl fmt::Display for DecodeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Decode state machine states. One full cycle resolves one frame and
/// re-enters `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DecodeState {
    Idle,
    StartCharFound,
    EndCharFound,
    IdFound,
    Decoded,
    RunCallback,
    Finished,
}

/// The incremental decode engine.
///
/// Owns the registered [`Command`]s and the receive buffer. Single-threaded
/// by design: `feed` and `run` must be called from one thread (or behind an
/// external lock), and callbacks run synchronously inside `run`.
pub struct Decoder {
    config: DecoderConfig,
    commands: Vec<Command>,
    buffer: BytesMut,
    state: DecodeState,
    start_pos: usize,
    end_pos: usize,
    packet_count: u64,
    last_command: Option<usize>,
    last_parameters: Vec<String>,
}

impl Decoder {
    /// Create a decoder for the given frame format.
    pub fn new(config: DecoderConfig) -> ProtocolResult<Self> {
        if let Some(header) = &config.header {
            if header.data_id.is_empty() {
                return Err(ProtocolError::EmptyDataId);
            }
            // A framing character inside the header would land `end_pos`
            // inside the matched id, or push the body start past the frame
            // end when the separator doubles as the terminator.
            let is_framing = |byte: u8| byte == config.end_char || Some(byte) == config.start_char;
            if is_framing(header.separator) {
                return Err(ProtocolError::HeaderFramingConflict(header.separator));
            }
            if let Some(&byte) = header.data_id.as_bytes().iter().find(|&&b| is_framing(b)) {
                return Err(ProtocolError::HeaderFramingConflict(byte));
            }
        }
        if config.start_char == Some(config.end_char) {
            return Err(ProtocolError::StartEndConflict(config.end_char));
        }
        if config.buffer_flush_limit < MIN_BUFFER_FLUSH_LIMIT {
            return Err(ProtocolError::FlushLimitTooSmall {
                min: MIN_BUFFER_FLUSH_LIMIT,
                actual: config.buffer_flush_limit,
            });
        }

        Ok(Decoder {
            config,
            commands: Vec::new(),
            buffer: BytesMut::new(),
            state: DecodeState::Idle,
            start_pos: 0,
            end_pos: 0,
            packet_count: 0,
            last_command: None,
            last_parameters: Vec::new(),
        })
    }

    /// Register a command. Commands must be registered before frames naming
    /// them will decode.
    ///
    /// Duplicate names are accepted; the first registration wins at decode
    /// time by scan order, and the duplicate is logged.
    pub fn register(&mut self, command: Command) {
        if self.find_by_name(&command.name).is_some() {
            warn!(
                "command {:?} registered twice; first registration wins",
                command.name
            );
        }
        self.commands.push(command);
    }

    /// Index of the first registered command with this exact name.
    pub fn find_by_name(&self, name: &str) -> Option<usize> {
        self.commands.iter().position(|c| c.name == name)
    }

    /// Borrow the first registered command with this name.
    pub fn command(&self, name: &str) -> Option<&Command> {
        self.find_by_name(name).map(|i| &self.commands[i])
    }

    /// Mutably borrow the first registered command with this name.
    pub fn command_mut(&mut self, name: &str) -> Option<&mut Command> {
        self.find_by_name(name).map(|i| &mut self.commands[i])
    }

    /// The command matched by the most recent successful decode.
    pub fn last_command(&self) -> Option<&Command> {
        self.last_command.map(|i| &self.commands[i])
    }

    /// Positional values extracted by the most recent successful decode.
    pub fn last_parameters(&self) -> &[String] {
        &self.last_parameters
    }

    /// Number of frames decoded successfully so far.
    pub fn packet_count(&self) -> u64 {
        self.packet_count
    }

    /// Number of bytes currently buffered.
    pub fn buffered_len(&self) -> usize {
        self.buffer.len()
    }

    /// Append received bytes to the buffer. No decoding happens here.
    pub fn feed(&mut self, data: &[u8]) {
        self.buffer.extend_from_slice(data);
    }

    /// Advance the state machine until one frame is resolved or no further
    /// progress is possible.
    ///
    /// Returns [`DecodeStatus::Ok`] when the buffer holds no complete frame
    /// yet. After [`DecodeStatus::PacketDecodingPassed`] more complete
    /// frames may still be buffered; call `run` again to drain them.
    pub fn run(&mut self) -> DecodeStatus {
        if self.buffer.is_empty() {
            return DecodeStatus::Ok;
        }

        // Resynchronize: drop leading noise. Anything that is neither
        // alphanumeric nor the configured start character cannot begin a
        // frame.
        while let Some(&byte) = self.buffer.first() {
            if byte.is_ascii_alphanumeric() || Some(byte) == self.config.start_char {
                break;
            }
            self.buffer.advance(1);
        }
        if self.buffer.is_empty() {
            return DecodeStatus::Ok;
        }

        // Overflow guard, checked before any frame search so a stream that
        // never frames cannot grow the buffer without bound.
        if self.buffer.len() >= self.config.buffer_flush_limit {
            self.reset_buffer();
            self.state = DecodeState::Idle;
            debug!("rx buffer reached flush limit, cleared");
            return DecodeStatus::RxBufferOverflow;
        }

        loop {
            match self.state {
                DecodeState::Idle => {
                    if let Some(start_char) = self.config.start_char {
                        match self.find_byte(start_char, 0) {
                            Some(pos) => {
                                self.start_pos = pos;
                                self.state = DecodeState::StartCharFound;
                            }
                            None => {
                                // Nothing frame-shaped buffered; discard and
                                // wait for more data.
                                self.reset_buffer();
                                return DecodeStatus::Ok;
                            }
                        }
                    } else {
                        self.start_pos = 0;
                        self.state = DecodeState::StartCharFound;
                    }
                }

                DecodeState::StartCharFound => {
                    match self.find_byte(self.config.end_char, self.start_pos + 1) {
                        Some(pos) => {
                            self.end_pos = pos;
                            self.state = DecodeState::EndCharFound;
                        }
                        None => {
                            // Frame not terminated yet; keep the bytes and
                            // resume here on the next call.
                            return DecodeStatus::Ok;
                        }
                    }
                }

                DecodeState::EndCharFound => {
                    // A second start character inside the candidate frame
                    // means the first frame was cut short.
                    if let Some(start_char) = self.config.start_char {
                        if let Some(next_start) = self.find_byte(start_char, self.start_pos + 1) {
                            if next_start < self.end_pos {
                                self.buffer.advance(next_start);
                                self.state = DecodeState::Idle;
                                debug!("truncated frame dropped, resyncing at next start");
                                return DecodeStatus::PacketUnexpectedlyTruncated;
                            }
                        }
                    }

                    if let Some(header) = &self.config.header {
                        let id_start = self.body_offset_of_start();
                        let id = header.data_id.as_bytes();
                        let matched = self.buffer.len() >= id_start + id.len()
                            && &self.buffer[id_start..id_start + id.len()] == id;
                        if !matched {
                            self.reset_buffer();
                            self.state = DecodeState::Idle;
                            return DecodeStatus::DataIdDidNotMatch;
                        }
                    }

                    self.state = DecodeState::IdFound;
                }

                DecodeState::IdFound => {
                    if self.decode_command_string() {
                        self.state = DecodeState::Decoded;
                    } else {
                        self.consume_frame();
                        self.state = DecodeState::Idle;
                        return DecodeStatus::PacketDecodingFailed;
                    }
                }

                DecodeState::Decoded => {
                    if self.check_parameters() {
                        self.state = DecodeState::RunCallback;
                    } else {
                        self.consume_frame();
                        self.state = DecodeState::Idle;
                        return DecodeStatus::IncorrectNumParam;
                    }
                }

                DecodeState::RunCallback => {
                    if let Some(index) = self.last_command {
                        self.commands[index].run_callback(&self.last_parameters);
                    }
                    self.state = DecodeState::Finished;
                }

                DecodeState::Finished => {
                    self.packet_count += 1;
                    self.consume_frame();
                    self.state = DecodeState::Idle;
                    return DecodeStatus::PacketDecodingPassed;
                }
            }
        }
    }

    /// Clear the buffer and position markers.
    pub fn clear(&mut self) {
        self.reset_buffer();
        self.state = DecodeState::Idle;
    }

    fn reset_buffer(&mut self) {
        self.buffer.clear();
        self.start_pos = 0;
        self.end_pos = 0;
    }

    /// Drop the resolved frame and everything before it.
    fn consume_frame(&mut self) {
        self.buffer.advance(self.end_pos + 1);
    }

    fn find_byte(&self, byte: u8, from: usize) -> Option<usize> {
        self.buffer
            .iter()
            .skip(from)
            .position(|&b| b == byte)
            .map(|pos| pos + from)
    }

    /// Offset of the first body byte after the start character (if any).
    fn body_offset_of_start(&self) -> usize {
        self.start_pos + usize::from(self.config.start_char.is_some())
    }

    /// Extract the frame body, match the command name against the registry
    /// and parse the arguments. Returns false when the name is unknown.
    fn decode_command_string(&mut self) -> bool {
        let mut body_start = self.body_offset_of_start();
        if let Some(header) = &self.config.header {
            body_start += header.data_id.len();
            if self.buffer.get(body_start) == Some(&header.separator) {
                body_start += 1;
            }
        }

        // Frame bodies are ASCII in practice; a stray non-UTF-8 byte is
        // replaced, not treated as a decode failure.
        let body = String::from_utf8_lossy(&self.buffer[body_start..self.end_pos]).into_owned();

        let (cmd_name, linear_args) = match body.split_once(' ') {
            Some((name, rest)) => (name, rest),
            None => (body.as_str(), ""),
        };

        let Some(index) = self.find_by_name(cmd_name) else {
            self.last_command = None;
            debug!("unrecognised command {:?}", cmd_name);
            return false;
        };
        self.last_command = Some(index);

        let command = &mut self.commands[index];
        command.reset_options();

        let tokens = tokenizer::split_arguments(linear_args);
        self.last_parameters = parser::parse_arguments(command, &tokens);

        true
    }

    /// Parameters are required: the positional count must equal the
    /// registered count exactly.
    fn check_parameters(&self) -> bool {
        match self.last_command {
            Some(index) => self.commands[index].params.len() == self.last_parameters.len(),
            None => false,
        }
    }
}

impl fmt::Debug for Decoder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Decoder")
            .field("config", &self.config)
            .field("commands", &self.commands.len())
            .field("buffered", &self.buffer.len())
            .field("state", &self.state)
            .field("packet_count", &self.packet_count)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::{CmdOption, Parameter};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn angle_config() -> DecoderConfig {
        DecoderConfig {
            start_char: Some(b'<'),
            end_char: b'>',
            header: None,
            buffer_flush_limit: DEFAULT_BUFFER_FLUSH_LIMIT,
        }
    }

    /// `move` with two required parameters and a `-f` flag, recording every
    /// callback invocation.
    fn move_decoder(config: DecoderConfig) -> (Decoder, Rc<RefCell<Vec<Vec<String>>>>) {
        let calls: Rc<RefCell<Vec<Vec<String>>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&calls);

        let mut cmd = Command::with_callback(
            "move",
            Box::new(move |params| sink.borrow_mut().push(params.to_vec())),
        );
        cmd.register_param(Parameter::new("x", "x position"));
        cmd.register_param(Parameter::new("y", "y position"));
        cmd.register_option(CmdOption::new("f", false));

        let mut decoder = Decoder::new(config).unwrap();
        decoder.register(cmd);
        (decoder, calls)
    }

    #[test]
    fn test_decode_simple_frame() {
        let (mut decoder, calls) = move_decoder(angle_config());
        decoder.feed(b"<move 10 20 -f>\r\n");

        assert_eq!(decoder.run(), DecodeStatus::PacketDecodingPassed);
        assert_eq!(decoder.last_parameters(), ["10", "20"]);
        assert!(decoder.command("move").unwrap().option("f").unwrap().detected);
        assert_eq!(calls.borrow().as_slice(), [vec!["10".to_string(), "20".to_string()]]);
        assert_eq!(decoder.packet_count(), 1);
    }

    #[test]
    fn test_incorrect_parameter_count() {
        let (mut decoder, calls) = move_decoder(angle_config());
        decoder.feed(b"<move 10>\r\n");

        assert_eq!(decoder.run(), DecodeStatus::IncorrectNumParam);
        assert!(calls.borrow().is_empty());
        assert_eq!(decoder.packet_count(), 0);
    }

    #[test]
    fn test_unrecognised_command_drops_frame() {
        let (mut decoder, calls) = move_decoder(angle_config());
        decoder.feed(b"<unknown 1 2>\r\n<move 1 2>\r\n");

        assert_eq!(decoder.run(), DecodeStatus::PacketDecodingFailed);
        assert!(calls.borrow().is_empty());
        // The bad frame is gone; the next one decodes normally.
        assert_eq!(decoder.run(), DecodeStatus::PacketDecodingPassed);
        assert_eq!(decoder.last_parameters(), ["1", "2"]);
    }

    #[test]
    fn test_header_mismatch() {
        let mut config = angle_config();
        config.header = Some(FrameHeader::new("ID1", b':'));
        let (mut decoder, calls) = move_decoder(config);
        decoder.feed(b"<ID2:move 10 20>\r\n");

        assert_eq!(decoder.run(), DecodeStatus::DataIdDidNotMatch);
        assert_eq!(decoder.buffered_len(), 0);
        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn test_header_match() {
        let mut config = angle_config();
        config.header = Some(FrameHeader::new("ID1", b':'));
        let (mut decoder, _calls) = move_decoder(config);
        decoder.feed(b"<ID1:move 10 20>\r\n");

        assert_eq!(decoder.run(), DecodeStatus::PacketDecodingPassed);
        assert_eq!(decoder.last_parameters(), ["10", "20"]);
    }

    #[test]
    fn test_truncated_frame_resyncs_at_second_start() {
        let (mut decoder, calls) = move_decoder(angle_config());
        decoder.feed(b"<move 10<move 10 20>\r\n");

        assert_eq!(decoder.run(), DecodeStatus::PacketUnexpectedlyTruncated);
        assert!(calls.borrow().is_empty());
        // Buffer now begins at the second '<'; the complete frame decodes.
        assert_eq!(decoder.run(), DecodeStatus::PacketDecodingPassed);
        assert_eq!(decoder.last_parameters(), ["10", "20"]);
    }

    #[test]
    fn test_chunked_arrival_matches_single_feed() {
        let (mut decoder, calls) = move_decoder(angle_config());
        for &byte in b"<move 10 20 -f>\r\n".iter() {
            decoder.feed(&[byte]);
            let status = decoder.run();
            assert!(
                status == DecodeStatus::Ok || status == DecodeStatus::PacketDecodingPassed,
                "unexpected status {status:?}"
            );
        }

        assert_eq!(decoder.packet_count(), 1);
        assert_eq!(calls.borrow().as_slice(), [vec!["10".to_string(), "20".to_string()]]);
    }

    #[test]
    fn test_overflow_then_recovery() {
        let mut config = angle_config();
        config.buffer_flush_limit = 32;
        let (mut decoder, _calls) = move_decoder(config);

        // A started frame that never terminates grows the buffer until the
        // limit trips.
        decoder.feed(b"<move ");
        assert_eq!(decoder.run(), DecodeStatus::Ok);
        let mut status = decoder.run();
        while status == DecodeStatus::Ok {
            decoder.feed(b"aaaaaaaa");
            status = decoder.run();
        }
        assert_eq!(status, DecodeStatus::RxBufferOverflow);
        assert_eq!(decoder.buffered_len(), 0);

        // Afterwards a valid frame decodes normally.
        decoder.feed(b"<move 1 2>\r\n");
        assert_eq!(decoder.run(), DecodeStatus::PacketDecodingPassed);
    }

    #[test]
    fn test_leading_noise_stripped() {
        let (mut decoder, _calls) = move_decoder(angle_config());
        decoder.feed(b"\r\n\x00\x7f<move 10 20>\r\n");

        assert_eq!(decoder.run(), DecodeStatus::PacketDecodingPassed);
        assert_eq!(decoder.last_parameters(), ["10", "20"]);
    }

    #[test]
    fn test_no_start_char_implicit_start() {
        let config = DecoderConfig::new(b'\r');
        let (mut decoder, _calls) = move_decoder(config);
        decoder.feed(b"move 10 20\r\n");

        assert_eq!(decoder.run(), DecodeStatus::PacketDecodingPassed);
        assert_eq!(decoder.last_parameters(), ["10", "20"]);
    }

    #[test]
    fn test_garbage_without_start_char_cleared() {
        let (mut decoder, _calls) = move_decoder(angle_config());
        decoder.feed(b"noise with no frame at all");

        assert_eq!(decoder.run(), DecodeStatus::Ok);
        assert_eq!(decoder.buffered_len(), 0);
    }

    #[test]
    fn test_multiple_frames_drain_one_per_run() {
        let (mut decoder, calls) = move_decoder(angle_config());
        decoder.feed(b"<move 1 2>\r\n<move 3 4>\r\n");

        assert_eq!(decoder.run(), DecodeStatus::PacketDecodingPassed);
        assert_eq!(decoder.run(), DecodeStatus::PacketDecodingPassed);
        assert_eq!(decoder.run(), DecodeStatus::Ok);
        assert_eq!(decoder.packet_count(), 2);
        assert_eq!(calls.borrow().len(), 2);
    }

    #[test]
    fn test_detected_resets_between_frames() {
        let (mut decoder, _calls) = move_decoder(angle_config());

        decoder.feed(b"<move 1 2 -f>\r\n");
        assert_eq!(decoder.run(), DecodeStatus::PacketDecodingPassed);
        assert!(decoder.command("move").unwrap().option("f").unwrap().detected);

        decoder.feed(b"<move 3 4>\r\n");
        assert_eq!(decoder.run(), DecodeStatus::PacketDecodingPassed);
        assert!(!decoder.command("move").unwrap().option("f").unwrap().detected);
    }

    #[test]
    fn test_quoted_parameter_with_spaces() {
        let config = angle_config();
        let calls: Rc<RefCell<Vec<Vec<String>>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&calls);

        let mut cmd = Command::with_callback(
            "say",
            Box::new(move |params| sink.borrow_mut().push(params.to_vec())),
        );
        cmd.register_param(Parameter::new("text", "what to say"));

        let mut decoder = Decoder::new(config).unwrap();
        decoder.register(cmd);

        decoder.feed(b"<say \"hello there\">\r\n");
        assert_eq!(decoder.run(), DecodeStatus::PacketDecodingPassed);
        assert_eq!(decoder.last_parameters(), ["hello there"]);
    }

    #[test]
    fn test_duplicate_registration_first_match_wins() {
        let config = angle_config();
        let hits: Rc<RefCell<Vec<&'static str>>> = Rc::new(RefCell::new(Vec::new()));

        let first = Rc::clone(&hits);
        let mut cmd_a = Command::with_callback("go", Box::new(move |_| first.borrow_mut().push("first")));
        cmd_a.register_param(Parameter::new("n", ""));

        let second = Rc::clone(&hits);
        let mut cmd_b = Command::with_callback("go", Box::new(move |_| second.borrow_mut().push("second")));
        cmd_b.register_param(Parameter::new("n", ""));

        let mut decoder = Decoder::new(config).unwrap();
        decoder.register(cmd_a);
        decoder.register(cmd_b);

        decoder.feed(b"<go 1>\r\n");
        assert_eq!(decoder.run(), DecodeStatus::PacketDecodingPassed);
        assert_eq!(hits.borrow().as_slice(), ["first"]);
    }

    #[test]
    fn test_command_without_arguments() {
        let config = angle_config();
        let mut decoder = Decoder::new(config).unwrap();
        decoder.register(Command::new("ping"));

        decoder.feed(b"<ping>\r\n");
        assert_eq!(decoder.run(), DecodeStatus::PacketDecodingPassed);
        assert!(decoder.last_parameters().is_empty());
    }

    #[test]
    fn test_empty_buffer_is_ok() {
        let (mut decoder, _calls) = move_decoder(angle_config());
        assert_eq!(decoder.run(), DecodeStatus::Ok);
    }

    #[test]
    fn test_config_validation() {
        let mut config = DecoderConfig::new(b'>');
        config.start_char = Some(b'>');
        assert_eq!(
            Decoder::new(config).unwrap_err(),
            ProtocolError::StartEndConflict(b'>')
        );

        let mut config = DecoderConfig::new(b'>');
        config.header = Some(FrameHeader::new("", b':'));
        assert_eq!(Decoder::new(config).unwrap_err(), ProtocolError::EmptyDataId);

        let mut config = DecoderConfig::new(b'>');
        config.buffer_flush_limit = 2;
        assert!(matches!(
            Decoder::new(config).unwrap_err(),
            ProtocolError::FlushLimitTooSmall { .. }
        ));
    }

    #[test]
    fn test_header_cannot_reuse_framing_characters() {
        // A separator equal to the terminator would push the body start
        // past the frame end on a bodyless frame like "<ID1>".
        let mut config = angle_config();
        config.header = Some(FrameHeader::new("ID1", b'>'));
        assert_eq!(
            Decoder::new(config).unwrap_err(),
            ProtocolError::HeaderFramingConflict(b'>')
        );

        // A start character inside the data id puts a frame boundary in
        // the middle of the header.
        let mut config = angle_config();
        config.header = Some(FrameHeader::new("ID<1", b':'));
        assert_eq!(
            Decoder::new(config).unwrap_err(),
            ProtocolError::HeaderFramingConflict(b'<')
        );

        // And an end character inside the data id likewise.
        let mut config = angle_config();
        config.header = Some(FrameHeader::new("ID>1", b':'));
        assert_eq!(
            Decoder::new(config).unwrap_err(),
            ProtocolError::HeaderFramingConflict(b'>')
        );
    }

    #[test]
    fn test_status_messages() {
        assert_eq!(DecodeStatus::Ok.message(), "O.K.");
        assert_eq!(
            DecodeStatus::RxBufferOverflow.to_string(),
            "RX buffer overflow."
        );
    }
}
