//! # mcli - Micro Command-Line Interpreter
//!
//! A small, transport-agnostic interactive command engine for
//! microcontrollers. It reads lines from any byte stream (UART, USB CDC,
//! TCP socket, ...), edits them with echo and backspace, splits them into a
//! bounded argument vector and dispatches them by name into
//! application-defined handlers. The library is `no_std` and never
//! allocates.
//!
//! ## Features
//!
//! ### Transport Abstraction
//! - Three required byte primitives: write one, read one, check availability
//! - Bulk transfer, text, formatted output and terminal helpers provided on top
//! - Hosted adapter over `std::io` streams (with `std`)
//!
//! ### Command Engine
//! - Line editing with echo, backspace and a buffer overflow guard
//! - Space-separated tokenizer with fixed token count and length limits
//! - Static command tables with exact, case-sensitive name matching
//! - Built-in `help` listing that user tables cannot shadow
//! - Non-blocking polling entry point for cooperative main loops
//! - Session reset for connection-oriented transports
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! mcli = "0.1.0"
//! ```
//!
//! ### Basic UART Console Example
//!
//! ```rust,no_run
//! use mcli::command::{CommandArgs, CommandDefinition};
//! use mcli::engine::Engine;
//! use mcli::io::ByteStream;
//! # struct Uart;
//! # impl ByteStream for Uart {
//! #     fn put_byte(&mut self, _byte: u8) {}
//! #     fn get_byte(&mut self) -> u8 { 0 }
//! #     fn byte_available(&mut self) -> bool { false }
//! # }
//! # fn uptime_ms() -> u32 { 0 }
//!
//! struct AppContext {
//!     boot_time_ms: u32,
//! }
//!
//! fn cmd_hello(_args: &CommandArgs, _ctx: &mut AppContext, io: &mut dyn ByteStream) {
//!     io.println("Hello via UART!");
//! }
//!
//! fn cmd_uptime(_args: &CommandArgs, ctx: &mut AppContext, io: &mut dyn ByteStream) {
//!     let seconds = (uptime_ms() - ctx.boot_time_ms) / 1000;
//!     io.print_fmt(format_args!("Uptime: {} seconds\r\n", seconds));
//! }
//!
//! static COMMANDS: [CommandDefinition<AppContext>; 2] = [
//!     CommandDefinition::new("hello", cmd_hello, "Say hello"),
//!     CommandDefinition::new("uptime", cmd_uptime, "Show system uptime"),
//! ];
//!
//! let mut ctx = AppContext { boot_time_ms: uptime_ms() };
//! let mut cli = Engine::new(Uart, &mut ctx);
//! cli.register_commands(&COMMANDS);
//! cli.welcome(&["=== UART CLI ===", "Type 'help' for available commands"]);
//!
//! loop {
//!     cli.process_input();
//!     // other work
//! }
//! ```
//!
//! ## Session Protocol
//!
//! ```text
//! mcli> help
//!
//! Available commands:
//!   help            -- Show available commands
//!   hello           -- Say hello
//!   uptime          -- Show system uptime
//!
//! mcli> reboot
//! Command "reboot" not found. Type 'help' for available commands.
//! ```
//!
//! ## Platform Support
//!
//! This library is designed to work on:
//! - Embedded microcontrollers (ARM Cortex-M, RISC-V, Xtensa, etc.)
//! - Linux-based devices, over sockets or serial ports
//! - Any platform supporting Rust's `core` library
//!
//! ## Optional Features
//!
//! - `std`: Enable standard library support and the [`io::std_io`] adapter (default: disabled)
//! - `defmt`: Enable defmt logging support for embedded debugging

#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

/// Compile-time limits and protocol constants.
///
/// These are the defaults for the const generic limits carried by the
/// argument vector and the engine.
pub mod config;

/// Error type shared by the engine and the hosted transport adapter.
pub mod error;

/// Byte-stream capability that every transport implements.
///
/// Only single-byte read, write and availability are required; bulk,
/// text and terminal helpers are provided on top.
pub mod io;

/// Command definitions, the argument vector and the tokenizer.
pub mod command;

/// The interactive engine: polling, line editing, dispatch and `help`.
pub mod engine;

pub use command::{CommandArgs, CommandDefinition, CommandFn, parse_command_line};
pub use engine::Engine;
pub use error::Error;
pub use io::ByteStream;
