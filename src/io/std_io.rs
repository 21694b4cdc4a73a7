//! [`ByteStream`] adapter for hosted targets.
//!
//! Wraps anything that is `std::io::Read + std::io::Write`: a TCP socket, a
//! serial port opened through a crate exposing `std::io` traits, or an
//! in-memory pipe in tests.
//!
//! The availability check is a one-byte read whose result is kept until
//! [`ByteStream::get_byte`] asks for it. For that check to stay non-blocking
//! the inner stream must be non-blocking or carry a read timeout:
//!
//! ```rust,no_run
//! use std::net::TcpListener;
//! use std::time::Duration;
//! use mcli::io::std_io::StdIo;
//!
//! let listener = TcpListener::bind("0.0.0.0:2323")?;
//! let (socket, _) = listener.accept()?;
//! socket.set_read_timeout(Some(Duration::from_millis(10)))?;
//! let io = StdIo::new(socket);
//! # let _ = io;
//! # Ok::<(), std::io::Error>(())
//! ```

use std::io::{ErrorKind, Read, Write};

use super::ByteStream;
use crate::error::Error;

/// A [`ByteStream`] over a `std::io` stream.
///
/// End of stream or a hard I/O error marks the adapter disconnected. From
/// then on writes are dropped, [`byte_available`](ByteStream::byte_available)
/// is `false`, [`is_open`](ByteStream::is_open) is `false` and
/// [`get_byte`](ByteStream::get_byte) returns NUL without blocking. The line
/// reader drops a line that was in progress instead of running it. Callers
/// check [`is_connected`](Self::is_connected) between polls.
#[derive(Debug)]
pub struct StdIo<T> {
    inner: T,
    peeked: Option<u8>,
    connected: bool,
    last_error: Option<Error>,
}

impl<T: Read + Write> StdIo<T> {
    /// Wrap a stream. The adapter starts out connected.
    pub fn new(inner: T) -> Self {
        Self {
            inner,
            peeked: None,
            connected: true,
            last_error: None,
        }
    }

    /// `false` once the peer closed the stream or an I/O error occurred.
    pub fn is_connected(&self) -> bool {
        self.connected
    }

    /// The error that ended the connection, if any.
    pub fn last_error(&self) -> Option<Error> {
        self.last_error
    }

    /// Shared access to the inner stream.
    pub fn get_ref(&self) -> &T {
        &self.inner
    }

    /// Exclusive access to the inner stream.
    pub fn get_mut(&mut self) -> &mut T {
        &mut self.inner
    }

    /// Unwrap the inner stream. A peeked byte is lost.
    pub fn into_inner(self) -> T {
        self.inner
    }

    /// Try to read one byte without waiting. Returns `true` if one was stored.
    fn fill(&mut self) -> bool {
        if !self.connected {
            return false;
        }

        let mut byte = [0u8; 1];
        match self.inner.read(&mut byte) {
            Ok(0) => {
                self.disconnect(Error::Disconnected);
                false
            }
            Ok(_) => {
                self.peeked = Some(byte[0]);
                true
            }
            Err(err) if is_transient(err.kind()) => false,
            Err(err) => {
                self.disconnect(classify(err.kind(), Error::ReadError));
                false
            }
        }
    }

    fn disconnect(&mut self, error: Error) {
        self.connected = false;
        self.last_error = Some(error);
    }
}

impl<T: Read + Write> ByteStream for StdIo<T> {
    fn put_byte(&mut self, byte: u8) {
        self.put_bytes(&[byte]);
    }

    fn get_byte(&mut self) -> u8 {
        loop {
            if let Some(byte) = self.peeked.take() {
                return byte;
            }
            if !self.connected {
                return 0;
            }
            if !self.fill() {
                std::thread::yield_now();
            }
        }
    }

    fn byte_available(&mut self) -> bool {
        self.peeked.is_some() || self.fill()
    }

    fn is_open(&mut self) -> bool {
        self.connected
    }

    fn put_bytes(&mut self, data: &[u8]) {
        if !self.connected {
            return;
        }
        if let Err(err) = self.inner.write_all(data) {
            self.disconnect(classify(err.kind(), Error::WriteError));
        }
    }

    fn flush(&mut self) {
        if !self.connected {
            return;
        }
        if let Err(err) = self.inner.flush() {
            self.disconnect(classify(err.kind(), Error::WriteError));
        }
    }
}

fn is_transient(kind: ErrorKind) -> bool {
    matches!(
        kind,
        ErrorKind::WouldBlock | ErrorKind::TimedOut | ErrorKind::Interrupted
    )
}

fn classify(kind: ErrorKind, fallback: Error) -> Error {
    match kind {
        ErrorKind::ConnectionReset
        | ErrorKind::ConnectionAborted
        | ErrorKind::BrokenPipe
        | ErrorKind::UnexpectedEof
        | ErrorKind::NotConnected => Error::Disconnected,
        _ => fallback,
    }
}
