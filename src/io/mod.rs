//! Byte-stream capability consumed by the command engine.
//!
//! A transport only has to move single bytes: [`ByteStream::put_byte`],
//! [`ByteStream::get_byte`] and [`ByteStream::byte_available`]. Everything
//! else (bulk transfers, text output, formatted output, terminal helpers) is
//! provided on top of those three primitives and may be overridden by
//! transports that can do better, such as a packet-based socket writing a
//! whole slice at once.
//!
//! # Implementing a transport
//!
//! ```rust
//! use mcli::io::ByteStream;
//!
//! struct Loopback {
//!     pending: Option<u8>,
//! }
//!
//! impl ByteStream for Loopback {
//!     fn put_byte(&mut self, byte: u8) {
//!         self.pending = Some(byte);
//!     }
//!
//!     fn get_byte(&mut self) -> u8 {
//!         loop {
//!             if let Some(byte) = self.pending.take() {
//!                 return byte;
//!             }
//!         }
//!     }
//!
//!     fn byte_available(&mut self) -> bool {
//!         self.pending.is_some()
//!     }
//! }
//!
//! let mut io = Loopback { pending: None };
//! io.put_byte(b'x');
//! assert!(io.byte_available());
//! assert_eq!(io.get_byte(), b'x');
//! ```
//!
//! # Formatted output
//!
//! [`ByteStream::print_fmt`] renders into a fixed stack buffer of
//! [`FORMAT_BUFFER_SIZE`] bytes and silently drops whatever does not fit:
//!
//! ```rust
//! # use mcli::io::ByteStream;
//! # struct Sink(Vec<u8>);
//! # impl ByteStream for Sink {
//! #     fn put_byte(&mut self, byte: u8) { self.0.push(byte) }
//! #     fn get_byte(&mut self) -> u8 { 0 }
//! #     fn byte_available(&mut self) -> bool { false }
//! # }
//! let mut io = Sink(Vec::new());
//! io.print_fmt(format_args!("Uptime: {} seconds\r\n", 42));
//! assert_eq!(io.0, b"Uptime: 42 seconds\r\n");
//! ```

use core::fmt;

use crate::config::{BACKSPACE_SEQUENCE, CLEAR_SCREEN_SEQUENCE, FORMAT_BUFFER_SIZE, NEWLINE};

/// Hosted transport adapter over `std::io` streams.
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
pub mod std_io;

/// A bidirectional byte stream driving the command engine.
///
/// Only the three single-byte primitives are required. The provided methods
/// are built on them and are free to be overridden.
pub trait ByteStream {
    /// Write one byte. Assumed to eventually succeed or block.
    fn put_byte(&mut self, byte: u8);

    /// Block until one byte is available, then return it.
    ///
    /// This is the only blocking call the engine makes. Implementations that
    /// run under a cooperative scheduler may yield inside it.
    fn get_byte(&mut self) -> u8;

    /// Return `true` if a subsequent [`get_byte`](Self::get_byte) would not
    /// block. Must never block itself.
    fn byte_available(&mut self) -> bool;

    /// Return `false` once the peer is gone for good.
    ///
    /// A line in progress is abandoned as soon as this turns `false`, so a
    /// half-typed command is never run. Transports without a notion of a
    /// peer (a UART) keep the default.
    fn is_open(&mut self) -> bool {
        true
    }

    /// Write a slice of bytes. Override for packet-based transports.
    fn put_bytes(&mut self, data: &[u8]) {
        for &byte in data {
            self.put_byte(byte);
        }
    }

    /// Read whatever is immediately available into `buffer`, without
    /// blocking. Returns the number of bytes read.
    fn get_bytes(&mut self, buffer: &mut [u8]) -> usize {
        let mut count = 0;
        while count < buffer.len() && self.byte_available() {
            buffer[count] = self.get_byte();
            count += 1;
        }
        count
    }

    /// Write a string.
    fn print(&mut self, text: &str) {
        if !text.is_empty() {
            self.put_bytes(text.as_bytes());
        }
    }

    /// Write a line terminator.
    fn newline(&mut self) {
        self.print(NEWLINE);
    }

    /// Write a string followed by a line terminator.
    fn println(&mut self, text: &str) {
        self.print(text);
        self.newline();
    }

    /// Write formatted output.
    ///
    /// The output is rendered into a stack buffer of [`FORMAT_BUFFER_SIZE`]
    /// bytes with one byte reserved for the terminator. Output that would
    /// overflow it is truncated at the last whole character that fits.
    fn print_fmt(&mut self, args: fmt::Arguments<'_>) {
        let mut rendered = Truncating::<{ FORMAT_BUFFER_SIZE - 1 }>::new();
        // A full buffer reports fmt::Error to stop formatting early.
        let _ = fmt::write(&mut rendered, args);
        self.print(rendered.as_str());
    }

    /// Push buffered output to the wire. Byte-level transports are assumed
    /// unbuffered, so this does nothing by default.
    fn flush(&mut self) {}

    /// Clear the terminal screen.
    fn clear_screen(&mut self) {
        self.print(CLEAR_SCREEN_SEQUENCE);
    }

    /// Emit the prompt.
    fn send_prompt(&mut self, prompt: &str) {
        self.print(prompt);
    }

    /// Visually erase the character left of the cursor.
    fn send_backspace(&mut self) {
        self.print(BACKSPACE_SEQUENCE);
    }
}

impl<T: ByteStream + ?Sized> ByteStream for &mut T {
    fn put_byte(&mut self, byte: u8) {
        (**self).put_byte(byte)
    }

    fn get_byte(&mut self) -> u8 {
        (**self).get_byte()
    }

    fn byte_available(&mut self) -> bool {
        (**self).byte_available()
    }

    fn is_open(&mut self) -> bool {
        (**self).is_open()
    }

    fn put_bytes(&mut self, data: &[u8]) {
        (**self).put_bytes(data)
    }

    fn get_bytes(&mut self, buffer: &mut [u8]) -> usize {
        (**self).get_bytes(buffer)
    }

    fn print(&mut self, text: &str) {
        (**self).print(text)
    }

    fn newline(&mut self) {
        (**self).newline()
    }

    fn println(&mut self, text: &str) {
        (**self).println(text)
    }

    fn print_fmt(&mut self, args: fmt::Arguments<'_>) {
        (**self).print_fmt(args)
    }

    fn flush(&mut self) {
        (**self).flush()
    }

    fn clear_screen(&mut self) {
        (**self).clear_screen()
    }

    fn send_prompt(&mut self, prompt: &str) {
        (**self).send_prompt(prompt)
    }

    fn send_backspace(&mut self) {
        (**self).send_backspace()
    }
}

/// Formatting sink that keeps what fits and refuses the rest.
struct Truncating<const N: usize> {
    rendered: heapless::String<N>,
}

impl<const N: usize> Truncating<N> {
    fn new() -> Self {
        Self {
            rendered: heapless::String::new(),
        }
    }

    fn as_str(&self) -> &str {
        self.rendered.as_str()
    }
}

impl<const N: usize> fmt::Write for Truncating<N> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for ch in s.chars() {
            self.rendered.push(ch).map_err(|_| fmt::Error)?;
        }
        Ok(())
    }
}
