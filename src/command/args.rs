//! Bounded argument vector produced by the tokenizer.

use core::ops::Index;
use core::str;

use heapless::Vec;

use crate::config::{MAX_ARG_LENGTH, MAX_ARGS};

/// An ordered, fixed-capacity list of tokens parsed from one command line.
///
/// `A` is the argument vector capacity and `L` the per-token capacity, both
/// counted the way a C `argv` array would count them: the tokenizer fills at
/// most `A - 1` slots, each with at most `L - 1` bytes. Every stored token is
/// non-empty. The vector lives on the stack and never allocates.
///
/// # Examples
///
/// ```rust
/// use mcli::command::{CommandArgs, parse_command_line};
///
/// let args: CommandArgs = parse_command_line(b"led on");
/// assert_eq!(args.len(), 2);
/// assert_eq!(args.command(), Some("led"));
/// assert_eq!(&args[1], "on");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommandArgs<const A: usize = MAX_ARGS, const L: usize = MAX_ARG_LENGTH> {
    argv: Vec<Vec<u8, L>, A>,
}

impl<const A: usize, const L: usize> CommandArgs<A, L> {
    const LIMITS_OK: () = assert!(A >= 2 && L >= 2, "argument limits too small");

    /// Most tokens a single line can produce.
    pub const MAX_TOKENS: usize = A - 1;

    /// Most bytes kept from a single token.
    pub const MAX_TOKEN_LENGTH: usize = L - 1;

    /// Create an empty argument vector.
    pub fn new() -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::LIMITS_OK;
        Self { argv: Vec::new() }
    }

    /// Number of tokens (the classic `argc`).
    pub fn len(&self) -> usize {
        self.argv.len()
    }

    /// `true` when the line held no tokens.
    pub fn is_empty(&self) -> bool {
        self.argv.is_empty()
    }

    /// The command name, i.e. the first token.
    pub fn command(&self) -> Option<&str> {
        self.get(0)
    }

    /// Token at `index` as text.
    ///
    /// Raw bytes that are not valid UTF-8 are cut back to their longest valid
    /// prefix, which also covers a multi-byte character split by truncation.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.argv.get(index).map(|token| utf8_prefix(token))
    }

    /// Token at `index` as the raw bytes received.
    pub fn get_bytes(&self, index: usize) -> Option<&[u8]> {
        self.argv.get(index).map(|token| token.as_slice())
    }

    /// Iterate over the tokens in order.
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.argv.iter().map(|token| utf8_prefix(token))
    }

    /// Append a token, cutting it to [`Self::MAX_TOKEN_LENGTH`] bytes.
    ///
    /// Returns `false` without storing anything when the token is empty or
    /// [`Self::MAX_TOKENS`] tokens are already held.
    pub fn push(&mut self, token: &[u8]) -> bool {
        if token.is_empty() || self.argv.len() >= Self::MAX_TOKENS {
            return false;
        }
        let kept = &token[..token.len().min(Self::MAX_TOKEN_LENGTH)];
        let mut slot = Vec::new();
        // `kept` is at most L - 1 bytes and the vector is below A - 1 entries.
        if slot.extend_from_slice(kept).is_err() || self.argv.push(slot).is_err() {
            return false;
        }
        true
    }

    /// Drop every token.
    pub fn clear(&mut self) {
        self.argv.clear();
    }
}

impl<const A: usize, const L: usize> Index<usize> for CommandArgs<A, L> {
    type Output = str;

    fn index(&self, index: usize) -> &str {
        utf8_prefix(&self.argv[index])
    }
}

fn utf8_prefix(bytes: &[u8]) -> &str {
    match str::from_utf8(bytes) {
        Ok(text) => text,
        // Everything before `valid_up_to` was just validated.
        Err(err) => str::from_utf8(&bytes[..err.valid_up_to()]).unwrap_or_default(),
    }
}

#[cfg(feature = "defmt")]
impl<const A: usize, const L: usize> defmt::Format for CommandArgs<A, L> {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "CommandArgs(argc={=usize}", self.len());
        for token in self.iter() {
            defmt::write!(f, " {=str}", token);
        }
        defmt::write!(f, ")");
    }
}
