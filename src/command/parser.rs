//! Whitespace tokenizer for raw command lines.
//!
//! Splitting is deliberately primitive: runs of the space character separate
//! tokens and nothing else is special. There is no quoting, no escaping and
//! no other whitespace class, so a tab is part of a token.
//!
//! ```text
//! "led  on"            -> ["led", "on"]
//! "   "                -> []
//! "a b c d e f"        -> ["a", "b", "c", "d"]        (MAX_ARGS = 5)
//! "averyveryverylongword x" -> ["averyveryverylo", "x"]  (MAX_ARG_LENGTH = 16)
//! ```

use super::args::CommandArgs;
use crate::config::ASCII_SPACE;

/// Tokenize a raw line into a [`CommandArgs`].
///
/// The line ends at the first NUL byte or at the end of the slice. Tokens
/// are cut to `L - 1` bytes, with the rest of an over-long token discarded
/// rather than carried into the next slot, and tokenization stops after
/// `A - 1` tokens with the remainder of the line ignored. Blank input yields
/// an empty vector.
///
/// The function is pure and may be called from anywhere, which makes it
/// the entry point for non-interactive use and for tests.
///
/// # Examples
///
/// ```rust
/// use mcli::command::{CommandArgs, parse_command_line};
///
/// let args: CommandArgs<3, 16> = parse_command_line(b"led on extra");
/// assert_eq!(args.iter().collect::<Vec<_>>(), ["led", "on"]);
/// ```
pub fn parse_command_line<const A: usize, const L: usize>(input: &[u8]) -> CommandArgs<A, L> {
    let mut args = CommandArgs::new();
    let line = match input.iter().position(|&byte| byte == 0) {
        Some(end) => &input[..end],
        None => input,
    };

    let tokens = line
        .split(|&byte| byte == ASCII_SPACE)
        .filter(|token| !token.is_empty())
        .take(CommandArgs::<A, L>::MAX_TOKENS);
    for token in tokens {
        args.push(token);
    }

    args
}
