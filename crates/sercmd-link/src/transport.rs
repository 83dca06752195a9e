//! Byte-stream transport boundary.
//!
//! The protocol engine never manages a connection itself; it only needs to
//! drain whatever bytes have already arrived and push outgoing bytes. Any
//! serial port, socket or in-memory pipe that can do those two things
//! non-blockingly fits behind [`Transport`].

use std::cell::RefCell;
use std::collections::VecDeque;
use std::io;
use std::rc::Rc;

/// A non-blocking byte stream.
pub trait Transport {
    /// Return all bytes received since the last call, possibly none. Must
    /// not block waiting for data.
    fn read_available(&mut self) -> io::Result<Vec<u8>>;

    /// Write the whole buffer out.
    fn write_all(&mut self, data: &[u8]) -> io::Result<()>;

    /// Whether the transport is currently usable.
    fn is_open(&self) -> bool;
}

/// Shared byte queue making up one direction of a loopback pair.
type Pipe = Rc<RefCell<VecDeque<u8>>>;

/// In-memory transport for tests and demos.
///
/// [`LoopbackTransport::pair`] returns two connected endpoints: bytes
/// written to one side become readable on the other. Single-threaded, like
/// the engine it exists to exercise.
#[derive(Debug)]
pub struct LoopbackTransport {
    incoming: Pipe,
    outgoing: Pipe,
    open: bool,
}

impl LoopbackTransport {
    /// Create two connected endpoints.
    pub fn pair() -> (LoopbackTransport, LoopbackTransport) {
        let a_to_b: Pipe = Rc::new(RefCell::new(VecDeque::new()));
        let b_to_a: Pipe = Rc::new(RefCell::new(VecDeque::new()));

        let a = LoopbackTransport {
            incoming: Rc::clone(&b_to_a),
            outgoing: Rc::clone(&a_to_b),
            open: true,
        };
        let b = LoopbackTransport {
            incoming: a_to_b,
            outgoing: b_to_a,
            open: true,
        };
        (a, b)
    }

    /// Mark this endpoint closed; reads and writes will fail.
    pub fn close(&mut self) {
        self.open = false;
    }
}

impl Transport for LoopbackTransport {
    fn read_available(&mut self) -> io::Result<Vec<u8>> {
        if !self.open {
            return Err(io::Error::new(io::ErrorKind::NotConnected, "closed"));
        }
        Ok(self.incoming.borrow_mut().drain(..).collect())
    }

    fn write_all(&mut self, data: &[u8]) -> io::Result<()> {
        if !self.open {
            return Err(io::Error::new(io::ErrorKind::NotConnected, "closed"));
        }
        self.outgoing.borrow_mut().extend(data.iter().copied());
        Ok(())
    }

    fn is_open(&self) -> bool {
        self.open
    }
}
