#![allow(dead_code)]

use std::collections::VecDeque;

use mcli::command::CommandArgs;
use mcli::io::ByteStream;

/// Scripted transport: input is queued up front, output is captured.
#[derive(Debug, Default)]
pub struct MockStream {
    input: VecDeque<u8>,
    output: Vec<u8>,
    pub flushes: usize,
    hang_up: bool,
    closed: bool,
}

impl MockStream {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_input(bytes: &[u8]) -> Self {
        let mut stream = Self::new();
        stream.push_input(bytes);
        stream
    }

    /// Once the scripted input runs out the peer is gone instead of idle.
    pub fn hanging_up(mut self) -> Self {
        self.hang_up = true;
        self
    }

    pub fn push_input(&mut self, bytes: &[u8]) {
        self.input.extend(bytes.iter().copied());
    }

    pub fn pending_input(&self) -> usize {
        self.input.len()
    }

    /// Drain everything written so far.
    pub fn take_output(&mut self) -> String {
        let bytes = std::mem::take(&mut self.output);
        String::from_utf8(bytes).expect("engine wrote invalid UTF-8")
    }
}

impl ByteStream for MockStream {
    fn put_byte(&mut self, byte: u8) {
        self.output.push(byte);
    }

    fn get_byte(&mut self) -> u8 {
        match self.input.pop_front() {
            Some(byte) => byte,
            None if self.hang_up => {
                self.closed = true;
                0
            }
            None => panic!("read past scripted input: a real transport would block here"),
        }
    }

    fn byte_available(&mut self) -> bool {
        !self.input.is_empty()
    }

    fn is_open(&mut self) -> bool {
        !self.closed
    }

    fn flush(&mut self) {
        self.flushes += 1;
    }
}

/// Every handler invocation seen, as the token lists the handler received.
pub type Calls = Vec<Vec<String>>;

/// Handler that records its arguments into the context.
pub fn record<const A: usize, const L: usize>(
    args: &CommandArgs<A, L>,
    calls: &mut Calls,
    _io: &mut dyn ByteStream,
) {
    calls.push(args.iter().map(String::from).collect());
}

/// Handler that records its arguments and answers on the transport.
pub fn record_and_reply<const A: usize, const L: usize>(
    args: &CommandArgs<A, L>,
    calls: &mut Calls,
    io: &mut dyn ByteStream,
) {
    calls.push(args.iter().map(String::from).collect());
    io.print_fmt(format_args!("argc={}\r\n", args.len()));
}

/// Expected `help` listing for the given `(name, help)` entries.
pub fn help_listing(entries: &[(&str, &str)]) -> String {
    let mut text = String::from("\r\nAvailable commands:\r\n");
    text.push_str(&format!("  {:<15} -- {}\r\n", "help", "Show available commands"));
    if entries.is_empty() {
        text.push_str("  (No additional commands registered)\r\n");
    }
    for (name, help) in entries {
        text.push_str(&format!("  {:<15} -- {}\r\n", name, help));
    }
    text.push_str("\r\n");
    text
}

pub fn not_found(name: &str) -> String {
    format!("Command \"{name}\" not found. Type 'help' for available commands.\r\n")
}
