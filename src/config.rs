//! Compile-time limits and protocol constants.
//!
//! The numeric limits below are the defaults of the const generic parameters
//! on [`CommandArgs`](crate::command::CommandArgs) and
//! [`Engine`](crate::engine::Engine). Applications that need a different
//! footprint pick their own values when naming those types; everything else
//! in the crate reads the limits from the type, never from these constants.

/// Capacity of an argument vector.
///
/// At most `MAX_ARGS - 1` tokens are produced from a single line; the
/// remaining slot mirrors the terminator entry of a classic `argv` array.
pub const MAX_ARGS: usize = 5;

/// Capacity of a single token, terminator slot included.
///
/// Tokens longer than `MAX_ARG_LENGTH - 1` bytes are truncated.
pub const MAX_ARG_LENGTH: usize = 16;

/// Capacity of the raw input line, terminator slot included.
///
/// The line reader stops accepting bytes once `CMD_BUFFER_SIZE - 1` bytes
/// have been buffered.
pub const CMD_BUFFER_SIZE: usize = 128;

/// Prompt emitted when the application does not supply one.
pub const DEFAULT_PROMPT: &str = "mcli> ";

/// Size of the stack buffer used by formatted printing.
///
/// One byte is reserved for the terminator, so at most
/// `FORMAT_BUFFER_SIZE - 1` bytes of formatted output are emitted per call.
pub const FORMAT_BUFFER_SIZE: usize = 64;

/// Width of the name column in the `help` listing.
pub const HELP_NAME_WIDTH: usize = 15;

/// Name of the built-in help command. Reserved; user tables cannot shadow it.
pub const HELP_COMMAND: &str = "help";

/// Description shown for the built-in help command.
pub const HELP_DESCRIPTION: &str = "Show available commands";

/// ASCII backspace character (0x08).
pub const ASCII_BACKSPACE: u8 = 0x08;
/// ASCII line feed character (0x0A).
pub const ASCII_LF: u8 = 0x0A;
/// ASCII carriage return character (0x0D).
pub const ASCII_CR: u8 = 0x0D;
/// ASCII delete character (0x7F).
pub const ASCII_DEL: u8 = 0x7F;
/// ASCII space character (0x20).
pub const ASCII_SPACE: u8 = 0x20;

/// Line terminator emitted on output.
pub const NEWLINE: &str = "\r\n";

/// Visual erase sequence: back, blank the cell, back again.
pub const BACKSPACE_SEQUENCE: &str = "\x08 \x08";

/// Clear-screen sequence.
pub const CLEAR_SCREEN_SEQUENCE: &str = "\x1b[2J\r\n";

/// Default argument vector footprint: one count word plus the token storage.
pub const COMMAND_ARGS_SIZE: usize =
    core::mem::size_of::<usize>() + MAX_ARGS * MAX_ARG_LENGTH;

const _: () = assert!(
    COMMAND_ARGS_SIZE <= 300,
    "CommandArgs too large for constrained systems"
);
const _: () = assert!(MAX_ARGS >= 2, "MAX_ARGS must leave room for a command name");
const _: () = assert!(MAX_ARG_LENGTH >= 2, "MAX_ARG_LENGTH must hold one character");
const _: () = assert!(CMD_BUFFER_SIZE >= 2, "CMD_BUFFER_SIZE must hold one character");
