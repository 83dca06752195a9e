//! Facade composing decoder, encoder and transport.
//!
//! [`Link`] is the convenience layer most applications use: call
//! [`Link::poll`] from a reader loop (or on every data-available
//! notification) to pump received bytes through the decoder, and
//! [`Link::send`] to put a command on the wire.

use log::debug;

use sercmd_protocol::{Command, DecodeStatus, Decoder, Encoder};

use crate::error::{LinkError, LinkResult};
use crate::transport::Transport;

/// A decoder/encoder pair bound to one transport.
pub struct Link<T: Transport> {
    transport: T,
    decoder: Decoder,
    encoder: Encoder,
}

impl<T: Transport> Link<T> {
    /// Bind a configured decoder to a transport.
    pub fn new(transport: T, decoder: Decoder) -> Self {
        Link {
            transport,
            decoder,
            encoder: Encoder::new(),
        }
    }

    /// Drain available bytes from the transport into the decoder and run
    /// one decode pass.
    ///
    /// Returns the decode outcome; call again immediately after
    /// [`DecodeStatus::PacketDecodingPassed`] since more complete frames
    /// may already be buffered.
    pub fn poll(&mut self) -> LinkResult<DecodeStatus> {
        if !self.transport.is_open() {
            return Err(LinkError::PortClosed);
        }
        let data = self.transport.read_available()?;
        self.decoder.feed(&data);
        Ok(self.decoder.run())
    }

    /// Encode a command from its current parameter/option values and write
    /// it to the transport.
    ///
    /// The tx packet count is bumped only once the write has succeeded.
    pub fn send(&mut self, command: &Command) -> LinkResult<()> {
        if !self.transport.is_open() {
            return Err(LinkError::PortClosed);
        }
        let frame = self.encoder.encode(command);
        debug!("sending command line: {:?}", frame.trim_end());
        self.transport.write_all(frame.as_bytes())?;
        self.encoder.mark_sent();
        Ok(())
    }

    /// The receive-side engine, for registering commands and inspecting
    /// decode results.
    pub fn decoder(&self) -> &Decoder {
        &self.decoder
    }

    /// Mutable access to the receive-side engine.
    pub fn decoder_mut(&mut self) -> &mut Decoder {
        &mut self.decoder
    }

    /// Number of frames sent over this link.
    pub fn tx_packet_count(&self) -> u64 {
        self.encoder.packet_count()
    }

    /// The underlying transport.
    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }
}
