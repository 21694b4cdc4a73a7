//! Interactive line reader with echo and backspace editing.
//!
//! The reader is a small state machine fed one byte at a time:
//!
//! ```text
//!            begin()                 CR/LF, buffer non-empty
//!   Idle ─────────────▶ Editing ───────────────────────────▶ Complete
//!                        │  ▲         buffer reaches B - 1 bytes ▲
//!                        └──┘ ───────────────────────────────────┘
//!          backspace, CR/LF on empty buffer, other bytes
//! ```
//!
//! [`LineReader::feed`] performs one transition and never blocks, so it can
//! be driven from anywhere. [`LineReader::read_command`] loops over the
//! transport's blocking `get_byte` until a line is complete.

use heapless::Vec;

use crate::command::{CommandArgs, parse_command_line};
use crate::config::{ASCII_BACKSPACE, ASCII_CR, ASCII_DEL, ASCII_LF, CMD_BUFFER_SIZE};
use crate::io::ByteStream;

/// Where the reader is within the current line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadState {
    /// No line in progress; the prompt has not been sent.
    Idle,
    /// Accumulating bytes into the line buffer.
    Editing,
    /// A full line is buffered and ready to tokenize.
    Complete,
}

/// Line editing state for one session.
///
/// `B` is the raw line capacity, terminator slot included: at most `B - 1`
/// bytes are buffered before the line is forced complete.
#[derive(Debug, Clone)]
pub struct LineReader<const B: usize = CMD_BUFFER_SIZE> {
    buffer: Vec<u8, B>,
    state: ReadState,
}

impl<const B: usize> Default for LineReader<B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const B: usize> LineReader<B> {
    /// Most bytes a line can hold.
    pub const MAX_LINE_LENGTH: usize = B - 1;

    /// Create an idle reader with an empty buffer.
    pub fn new() -> Self {
        Self {
            buffer: Vec::new(),
            state: ReadState::Idle,
        }
    }

    /// Current state.
    pub fn state(&self) -> ReadState {
        self.state
    }

    /// Bytes buffered so far for the current line.
    pub fn line(&self) -> &[u8] {
        &self.buffer
    }

    /// Drop any partial line and return to [`ReadState::Idle`].
    pub fn reset(&mut self) {
        self.buffer.clear();
        self.state = ReadState::Idle;
    }

    /// Start a new line: clear the buffer and send the prompt.
    pub fn begin<S: ByteStream + ?Sized>(&mut self, io: &mut S, prompt: &str) {
        self.buffer.clear();
        self.state = ReadState::Editing;
        io.send_prompt(prompt);
    }

    /// Apply one input byte and return the resulting state.
    ///
    /// Bytes fed while idle start a line first; bytes fed once the line is
    /// complete are ignored until the reader is reset or restarted.
    pub fn feed<S: ByteStream + ?Sized>(
        &mut self,
        byte: u8,
        io: &mut S,
        prompt: &str,
        echo: bool,
    ) -> ReadState {
        match self.state {
            ReadState::Idle => self.begin(io, prompt),
            ReadState::Complete => return self.state,
            ReadState::Editing => {}
        }

        match byte {
            ASCII_BACKSPACE | ASCII_DEL => {
                if self.buffer.pop().is_some() && echo {
                    io.send_backspace();
                }
            }
            ASCII_CR | ASCII_LF => {
                if echo {
                    io.newline();
                }
                if self.buffer.is_empty() {
                    io.send_prompt(prompt);
                } else {
                    self.state = ReadState::Complete;
                }
            }
            _ => {
                if echo {
                    io.put_byte(byte);
                }
                // The guard below keeps one slot free, so this push cannot fail.
                let _ = self.buffer.push(byte);
                if self.buffer.len() >= Self::MAX_LINE_LENGTH {
                    #[cfg(feature = "defmt")]
                    defmt::debug!("line buffer full at {=usize} bytes", self.buffer.len());
                    self.state = ReadState::Complete;
                }
            }
        }

        self.state
    }

    /// Read one full line from `io` and tokenize it.
    ///
    /// Sends the prompt, then blocks on [`ByteStream::get_byte`] until a line
    /// is complete. Empty lines are not returned; the prompt is sent again
    /// instead. There is no timeout: a peer that never ends the line keeps
    /// the caller here. If the transport closes ([`ByteStream::is_open`]
    /// turns `false`) the partial line is dropped and an empty vector is
    /// returned. The reader is idle again on return.
    pub fn read_command<S, const A: usize, const L: usize>(
        &mut self,
        io: &mut S,
        prompt: &str,
        echo: bool,
    ) -> CommandArgs<A, L>
    where
        S: ByteStream + ?Sized,
    {
        self.begin(io, prompt);
        while self.state != ReadState::Complete {
            let byte = io.get_byte();
            if !io.is_open() {
                #[cfg(feature = "defmt")]
                defmt::debug!("transport closed, dropping {=usize} bytes", self.buffer.len());
                self.reset();
                return CommandArgs::new();
            }
            self.feed(byte, io, prompt, echo);
        }

        let args = parse_command_line(&self.buffer);
        self.reset();
        args
    }
}
