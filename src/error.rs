//! Common error type for engine and transport operations

use core::fmt;

/// A common error type for the command engine.
///
/// Nothing in the engine is fatal: a failed dispatch is advisory and a
/// transport error is recoverable through
/// [`Engine::reset_session`](crate::engine::Engine::reset_session).
/// The type is simple and portable for `no_std` environments.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Error {
    /// The argument vector held no tokens.
    EmptyCommand,
    /// No registered command matched the first token.
    CommandNotFound,
    /// The peer on the other end of the transport went away.
    Disconnected,
    /// An error occurred while reading from the transport.
    ReadError,
    /// An error occurred while writing to the transport.
    WriteError,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Error::EmptyCommand => "empty command",
            Error::CommandNotFound => "command not found",
            Error::Disconnected => "transport disconnected",
            Error::ReadError => "transport read error",
            Error::WriteError => "transport write error",
        };
        f.write_str(text)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(feature = "defmt")]
impl defmt::Format for Error {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Error::EmptyCommand => defmt::write!(f, "EmptyCommand"),
            Error::CommandNotFound => defmt::write!(f, "CommandNotFound"),
            Error::Disconnected => defmt::write!(f, "Disconnected"),
            Error::ReadError => defmt::write!(f, "ReadError"),
            Error::WriteError => defmt::write!(f, "WriteError"),
        }
    }
}
