//! Command engine: polling, line reading, dispatch and the built-in help.
//!
//! The engine ties a transport, an application context and a command table
//! together. It is driven by calling [`Engine::process_input`] from the
//! application's main loop:
//!
//! ```text
//!             byte_available() == false
//!           ┌───────────────────────────┐
//!           ▼                           │
//!   ┌───────────────┐  byte arrives  ┌──┴────────────┐
//!   │    Polling    │───────────────▶│    Active     │
//!   │  (returns at  │                │ (read line,   │
//!   │   once)       │◀───────────────│  dispatch)    │
//!   └───────────────┘  line handled  └───────────────┘
//! ```
//!
//! Polling never blocks. Once the first byte of a line is seen the engine
//! stays in the line reader until the line is complete, blocking on the
//! transport's `get_byte`.
//!
//! # Usage
//!
//! ```rust
//! use mcli::command::{CommandArgs, CommandDefinition};
//! use mcli::engine::Engine;
//! use mcli::io::ByteStream;
//!
//! # struct Uart;
//! # impl ByteStream for Uart {
//! #     fn put_byte(&mut self, _byte: u8) {}
//! #     fn get_byte(&mut self) -> u8 { b'\r' }
//! #     fn byte_available(&mut self) -> bool { false }
//! # }
//! struct App {
//!     greetings: u32,
//! }
//!
//! fn cmd_hello(_args: &CommandArgs, app: &mut App, io: &mut dyn ByteStream) {
//!     app.greetings += 1;
//!     io.println("Hello via UART!");
//! }
//!
//! static COMMANDS: [CommandDefinition<App>; 1] =
//!     [CommandDefinition::new("hello", cmd_hello, "Say hello")];
//!
//! let mut app = App { greetings: 0 };
//! let mut cli = Engine::new(Uart, &mut app);
//! cli.register_commands(&COMMANDS);
//!
//! assert!(cli.execute_command("hello"));
//! assert!(!cli.execute_command("goodbye"));
//!
//! // In firmware this sits in the main loop next to other work.
//! cli.process_input();
//! # assert_eq!(cli.context().greetings, 1);
//! ```

use crate::command::{CommandArgs, CommandDefinition, find_command, parse_command_line};
use crate::config::{
    CMD_BUFFER_SIZE, DEFAULT_PROMPT, HELP_COMMAND, HELP_DESCRIPTION, HELP_NAME_WIDTH,
    MAX_ARG_LENGTH, MAX_ARGS,
};
use crate::error::Error;
use crate::io::ByteStream;

pub mod reader;

pub use reader::{LineReader, ReadState};

/// Interactive command engine bound to one transport and one context.
///
/// `IO` is the transport, owned or borrowed (`&mut T` is a transport too).
/// `C` is the application context handed to every handler. The const
/// parameters are the argument vector capacity `A`, the token capacity `L`
/// and the raw line capacity `B`, defaulting to the values in
/// [`config`](crate::config).
///
/// The engine borrows the context, the prompt and the command table for
/// `'a`. It owns only its line buffer.
pub struct Engine<
    'a,
    IO,
    C,
    const A: usize = MAX_ARGS,
    const L: usize = MAX_ARG_LENGTH,
    const B: usize = CMD_BUFFER_SIZE,
> {
    io: IO,
    context: &'a mut C,
    prompt: &'a str,
    commands: &'a [CommandDefinition<C, A, L>],
    reader: LineReader<B>,
    echo: bool,
}

impl<'a, IO, C> Engine<'a, IO, C>
where
    IO: ByteStream,
{
    /// Create an engine with the default limits, [`DEFAULT_PROMPT`] and no
    /// registered commands.
    ///
    /// Only the built-in `help` resolves until
    /// [`register_commands`](Self::register_commands) is called.
    pub fn new(io: IO, context: &'a mut C) -> Self {
        Self::new_with_limits(io, context, DEFAULT_PROMPT)
    }

    /// Create an engine with the default limits and a custom prompt.
    pub fn with_prompt(io: IO, context: &'a mut C, prompt: &'a str) -> Self {
        Self::new_with_limits(io, context, prompt)
    }
}

impl<'a, IO, C, const A: usize, const L: usize, const B: usize> Engine<'a, IO, C, A, L, B>
where
    IO: ByteStream,
{
    /// Create an engine whose limits are taken from its type.
    ///
    /// ```rust
    /// # use mcli::engine::Engine;
    /// # use mcli::io::ByteStream;
    /// # struct Uart;
    /// # impl ByteStream for Uart {
    /// #     fn put_byte(&mut self, _byte: u8) {}
    /// #     fn get_byte(&mut self) -> u8 { b'\r' }
    /// #     fn byte_available(&mut self) -> bool { false }
    /// # }
    /// let mut state = ();
    /// // Two tokens per line, eight bytes per token, 32-byte lines.
    /// let cli: Engine<Uart, (), 3, 9, 32> = Engine::new_with_limits(Uart, &mut state, "> ");
    /// # let _ = cli;
    /// ```
    pub fn new_with_limits(io: IO, context: &'a mut C, prompt: &'a str) -> Self {
        Self {
            io,
            context,
            prompt,
            commands: &[],
            reader: LineReader::new(),
            echo: true,
        }
    }

    /// Register the command table, replacing any previous one.
    ///
    /// The table is borrowed, never copied or modified. Entries are matched
    /// in order and the first match wins; duplicates are not checked. An
    /// entry named `help` is never reached since the built-in takes
    /// precedence.
    pub fn register_commands(&mut self, commands: &'a [CommandDefinition<C, A, L>]) {
        #[cfg(feature = "defmt")]
        defmt::debug!("registered {=usize} commands", commands.len());
        self.commands = commands;
    }

    /// The registered command table.
    pub fn commands(&self) -> &'a [CommandDefinition<C, A, L>] {
        self.commands
    }

    /// Replace the prompt. Takes effect at the next line.
    pub fn set_prompt(&mut self, prompt: &'a str) {
        self.prompt = prompt;
    }

    /// The current prompt.
    pub fn prompt(&self) -> &'a str {
        self.prompt
    }

    /// Enable or disable echo of typed characters, erase sequences and the
    /// line-end newline. Enabled by default; scripted peers usually turn it
    /// off. The prompt is sent either way.
    pub fn set_echo(&mut self, enabled: bool) {
        self.echo = enabled;
    }

    /// Whether typed input is echoed.
    pub fn echo(&self) -> bool {
        self.echo
    }

    /// Poll the transport and handle at most one command line.
    ///
    /// Returns immediately when no byte is waiting, so it is safe to call on
    /// every tick of a main loop. Otherwise it reads a whole line (blocking
    /// on the transport until CR, LF or a full buffer), dispatches it and
    /// reports an unknown command on the transport.
    pub fn process_input(&mut self) {
        if !self.io.byte_available() {
            return;
        }

        let args: CommandArgs<A, L> =
            self.reader.read_command(&mut self.io, self.prompt, self.echo);

        if let Err(Error::CommandNotFound) = self.try_dispatch(&args) {
            let name = args.command().unwrap_or_default();
            #[cfg(feature = "defmt")]
            defmt::debug!("command not found: {=str}", name);
            self.io.print("Command \"");
            self.io.print(name);
            self.io.println("\" not found. Type 'help' for available commands.");
        }
    }

    /// Tokenize and dispatch `line` directly, bypassing the line reader.
    ///
    /// Nothing is echoed and no prompt or not-found message is written; the
    /// handler's own output still goes to the transport. The line is cut to
    /// `B - 1` bytes, the same bound interactive input has. Returns `true` if
    /// a command ran.
    pub fn execute_command(&mut self, line: &str) -> bool {
        let bytes = line.as_bytes();
        let bounded = &bytes[..bytes.len().min(LineReader::<B>::MAX_LINE_LENGTH)];
        let args: CommandArgs<A, L> = parse_command_line(bounded);
        self.dispatch(&args)
    }

    /// Run the command named by `args[0]`. Returns `false` when `args` is
    /// empty or no command matched, with no side effect in either case.
    pub fn dispatch(&mut self, args: &CommandArgs<A, L>) -> bool {
        self.try_dispatch(args).is_ok()
    }

    /// Like [`dispatch`](Self::dispatch) but says why nothing ran.
    ///
    /// # Errors
    ///
    /// * [`Error::EmptyCommand`] - `args` holds no tokens
    /// * [`Error::CommandNotFound`] - no table entry matches `args[0]`
    pub fn try_dispatch(&mut self, args: &CommandArgs<A, L>) -> Result<(), Error> {
        let name = args.command().ok_or(Error::EmptyCommand)?;

        if name == HELP_COMMAND {
            self.print_help();
            return Ok(());
        }

        let command = find_command(self.commands, name).ok_or(Error::CommandNotFound)?;
        #[cfg(feature = "defmt")]
        defmt::trace!("dispatch {=str} argc={=usize}", name, args.len());
        (command.execute)(args, &mut *self.context, &mut self.io);
        Ok(())
    }

    /// Print the command listing: the built-in `help` first, then every
    /// registered entry in table order.
    pub fn print_help(&mut self) {
        self.io.newline();
        self.io.println("Available commands:");
        write_help_line(&mut self.io, HELP_COMMAND, HELP_DESCRIPTION);

        if self.commands.is_empty() {
            self.io.println("  (No additional commands registered)");
        } else {
            for command in self.commands {
                write_help_line(&mut self.io, command.name, command.help);
            }
        }
        self.io.newline();
    }

    /// Print a banner, one line per entry, followed by a blank line.
    pub fn welcome(&mut self, lines: &[&str]) {
        for line in lines {
            self.io.println(line);
        }
        self.io.newline();
    }

    /// Discard any partial line so the next
    /// [`process_input`](Self::process_input) behaves as on a new engine.
    ///
    /// Meant for connection-oriented transports, after a new peer has been
    /// accepted or the old one dropped. The prompt, echo setting, context
    /// and command table are kept.
    pub fn reset_session(&mut self) {
        #[cfg(feature = "defmt")]
        defmt::debug!("session reset");
        self.reader.reset();
    }

    /// State of the line reader; [`ReadState::Idle`] between lines.
    pub fn read_state(&self) -> ReadState {
        self.reader.state()
    }

    /// Shared access to the transport.
    pub fn io(&self) -> &IO {
        &self.io
    }

    /// Exclusive access to the transport, e.g. to accept a new peer.
    pub fn io_mut(&mut self) -> &mut IO {
        &mut self.io
    }

    /// Shared access to the application context.
    pub fn context(&self) -> &C {
        &*self.context
    }

    /// Exclusive access to the application context.
    pub fn context_mut(&mut self) -> &mut C {
        &mut *self.context
    }

    /// Give the transport back, ending the engine.
    pub fn into_io(self) -> IO {
        self.io
    }
}

impl<IO, C, const A: usize, const L: usize, const B: usize> core::fmt::Debug
    for Engine<'_, IO, C, A, L, B>
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Engine")
            .field("prompt", &self.prompt)
            .field("commands", &self.commands.len())
            .field("reader", &self.reader)
            .field("echo", &self.echo)
            .finish_non_exhaustive()
    }
}

fn write_help_line<S: ByteStream + ?Sized>(io: &mut S, name: &str, help: &str) {
    io.print("  ");
    io.print(name);
    for _ in name.len()..HELP_NAME_WIDTH {
        io.put_byte(b' ');
    }
    io.print(" -- ");
    io.println(help);
}
