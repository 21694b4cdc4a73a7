use mcli::command::{CommandArgs, parse_command_line};
use mcli::config::{MAX_ARG_LENGTH, MAX_ARGS};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789-_.=%/";

fn tokens<const A: usize, const L: usize>(args: &CommandArgs<A, L>) -> Vec<String> {
    args.iter().map(String::from).collect()
}

fn random_token(rng: &mut StdRng, max_len: usize) -> String {
    let len = rng.gen_range(1..=max_len);
    (0..len)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
        .collect()
}

fn spaces(rng: &mut StdRng, min: usize) -> String {
    " ".repeat(rng.gen_range(min..=min + 3))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_reproduces_trimmed_line() {
        let mut rng = StdRng::seed_from_u64(0x6d63_6c69);

        for _ in 0..500 {
            let count = rng.gen_range(0..MAX_ARGS);
            let words: Vec<String> = (0..count)
                .map(|_| random_token(&mut rng, MAX_ARG_LENGTH - 1))
                .collect();

            let mut line = spaces(&mut rng, 0);
            for (index, word) in words.iter().enumerate() {
                if index > 0 {
                    line.push_str(&spaces(&mut rng, 1));
                }
                line.push_str(word);
            }
            line.push_str(&spaces(&mut rng, 0));

            let args: CommandArgs = parse_command_line(line.as_bytes());
            assert_eq!(args.len(), words.len(), "line {line:?}");
            assert_eq!(tokens(&args).join(" "), words.join(" "), "line {line:?}");
        }
    }

    #[test]
    fn test_excess_tokens_are_discarded() {
        let args: CommandArgs<5, 16> = parse_command_line(b"1 2 3 4 5 6 7 8 9 0");
        assert_eq!(args.len(), 4);
        assert_eq!(tokens(&args), ["1", "2", "3", "4"]);
    }

    #[test]
    fn test_excess_tokens_random_lines() {
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..200 {
            let count = rng.gen_range(MAX_ARGS..MAX_ARGS + 10);
            let words: Vec<String> = (0..count).map(|_| random_token(&mut rng, 8)).collect();
            let line = words.join(" ");

            let args: CommandArgs = parse_command_line(line.as_bytes());
            assert_eq!(args.len(), MAX_ARGS - 1);
            assert_eq!(tokens(&args), words[..MAX_ARGS - 1]);
        }
    }

    #[test]
    fn test_long_token_truncated_exactly() {
        let long = "x".repeat(40);
        let args: CommandArgs = parse_command_line(long.as_bytes());
        assert_eq!(args.len(), 1);
        assert_eq!(args.get(0).map(str::len), Some(MAX_ARG_LENGTH - 1));
    }

    #[test]
    fn test_truncated_remainder_is_not_a_new_token() {
        let line = format!("{} tail", "y".repeat(MAX_ARG_LENGTH + 3));
        let args: CommandArgs = parse_command_line(line.as_bytes());
        assert_eq!(tokens(&args), ["y".repeat(MAX_ARG_LENGTH - 1), "tail".to_string()]);
    }

    #[test]
    fn test_token_exactly_at_limit_is_kept_whole() {
        let word = "z".repeat(MAX_ARG_LENGTH - 1);
        let args: CommandArgs = parse_command_line(word.as_bytes());
        assert_eq!(args.get(0), Some(word.as_str()));
    }

    #[test]
    fn test_quotes_are_not_special() {
        let args: CommandArgs = parse_command_line(br#"echo "a b""#);
        assert_eq!(tokens(&args), ["echo", "\"a", "b\""]);
    }

    #[test]
    fn test_pipes_and_redirection_are_plain_text() {
        let args: CommandArgs = parse_command_line(b"ls | grep >x");
        assert_eq!(tokens(&args), ["ls", "|", "grep", ">x"]);
    }

    #[test]
    fn test_blank_lines_produce_no_tokens() {
        for line in ["", " ", "          "] {
            let args: CommandArgs = parse_command_line(line.as_bytes());
            assert!(args.is_empty(), "line {line:?}");
        }
    }

    #[test]
    fn test_led_scenario_per_limit() {
        let line = b"led on extra";
        let two: CommandArgs<2, 16> = parse_command_line(line);
        let three: CommandArgs<3, 16> = parse_command_line(line);
        let four: CommandArgs<4, 16> = parse_command_line(line);

        assert_eq!(tokens(&two), ["led"]);
        assert_eq!(tokens(&three), ["led", "on"]);
        assert_eq!(tokens(&four), ["led", "on", "extra"]);
    }

    #[test]
    fn test_parse_is_reentrant() {
        let first: CommandArgs = parse_command_line(b"a b");
        let second: CommandArgs = parse_command_line(b"c");
        let again: CommandArgs = parse_command_line(b"a b");
        assert_eq!(first, again);
        assert_ne!(first, second);
    }
}
