//! Command definitions, argument vectors and the line tokenizer.
//!
//! A command table is a plain slice of [`CommandDefinition`]s owned by the
//! application, usually a `static`. The engine only borrows it, scans it in
//! order and never modifies it.
//!
//! # Defining commands
//!
//! ```rust
//! use mcli::command::{CommandArgs, CommandDefinition};
//! use mcli::io::ByteStream;
//!
//! struct Board {
//!     led_on: bool,
//! }
//!
//! fn cmd_led(args: &CommandArgs, board: &mut Board, io: &mut dyn ByteStream) {
//!     match args.get(1) {
//!         Some("on") => board.led_on = true,
//!         Some("off") => board.led_on = false,
//!         _ => io.println("usage: led <on|off>"),
//!     }
//! }
//!
//! static COMMANDS: [CommandDefinition<Board>; 1] = [
//!     CommandDefinition::new("led", cmd_led, "Turn LED on/off"),
//! ];
//! # let _ = &COMMANDS;
//! ```

use core::fmt;

use crate::config::{MAX_ARG_LENGTH, MAX_ARGS};
use crate::io::ByteStream;

mod args;
mod parser;

pub use args::CommandArgs;
pub use parser::parse_command_line;

/// Signature of a command handler.
///
/// Handlers receive the parsed arguments (`args[0]` is the command name),
/// the application context and the transport, through which they write
/// their replies. The transport is lent by the engine for the duration of
/// the call.
pub type CommandFn<C, const A: usize = MAX_ARGS, const L: usize = MAX_ARG_LENGTH> =
    fn(args: &CommandArgs<A, L>, context: &mut C, io: &mut dyn ByteStream);

/// One entry of a command table: a name, its handler and a help line.
pub struct CommandDefinition<C, const A: usize = MAX_ARGS, const L: usize = MAX_ARG_LENGTH> {
    /// Name typed by the user. Matched exactly and case-sensitively.
    pub name: &'static str,
    /// Function run when the name matches.
    pub execute: CommandFn<C, A, L>,
    /// One-line description shown by `help`.
    pub help: &'static str,
}

impl<C, const A: usize, const L: usize> CommandDefinition<C, A, L> {
    /// Build a table entry. Usable in `const` and `static` initializers.
    pub const fn new(name: &'static str, execute: CommandFn<C, A, L>, help: &'static str) -> Self {
        Self {
            name,
            execute,
            help,
        }
    }
}

impl<C, const A: usize, const L: usize> Clone for CommandDefinition<C, A, L> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C, const A: usize, const L: usize> Copy for CommandDefinition<C, A, L> {}

impl<C, const A: usize, const L: usize> fmt::Debug for CommandDefinition<C, A, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandDefinition")
            .field("name", &self.name)
            .field("help", &self.help)
            .finish_non_exhaustive()
    }
}

/// Find the first entry named `name`.
///
/// Table order is the tie-break: when a name appears twice the earlier entry
/// wins and the later one is unreachable.
pub fn find_command<'t, C, const A: usize, const L: usize>(
    commands: &'t [CommandDefinition<C, A, L>],
    name: &str,
) -> Option<&'t CommandDefinition<C, A, L>> {
    commands.iter().find(|command| command.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noop(_: &CommandArgs, _: &mut (), _: &mut dyn ByteStream) {}

    fn other(_: &CommandArgs, _: &mut (), io: &mut dyn ByteStream) {
        io.print("other");
    }

    static TABLE: [CommandDefinition<()>; 3] = [
        CommandDefinition::new("led", noop, "first"),
        CommandDefinition::new("LED", other, "upper case"),
        CommandDefinition::new("led", other, "shadowed"),
    ];

    #[test]
    fn test_find_first_match_wins() {
        let found = find_command(&TABLE, "led").map(|command| command.help);
        assert_eq!(found, Some("first"));
    }

    #[test]
    fn test_find_is_case_sensitive() {
        let found = find_command(&TABLE, "LED").map(|command| command.help);
        assert_eq!(found, Some("upper case"));
        assert!(find_command(&TABLE, "Led").is_none());
    }

    #[test]
    fn test_find_in_empty_table() {
        let empty: [CommandDefinition<()>; 0] = [];
        assert!(find_command(&empty, "led").is_none());
    }

    #[test]
    fn test_debug_omits_handler() {
        let rendered = format!("{:?}", TABLE[0]);
        assert!(rendered.contains("\"led\""));
        assert!(rendered.contains(".."));
    }
}
