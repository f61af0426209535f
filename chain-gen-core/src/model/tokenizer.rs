use std::io::{self, BufRead, Bytes};

use log::warn;

/// Longest token the tokenizer will emit; the rest of a longer run is dropped.
pub const MAX_TOKEN_LENGTH: usize = 50;

/// Punctuation that closes a clause and therefore a generated sentence.
///
/// `:` is deliberately absent.
pub const CLAUSE_TERMINATORS: [char; 4] = ['.', '?', '!', ';'];

/// Returns `true` if `byte` can be part of a token.
fn is_token_byte(byte: u8) -> bool {
	byte.is_ascii_alphabetic() || matches!(byte, b'!' | b'?' | b',' | b'.' | b';' | b':' | b'\'')
}

/// Lazy token stream over a text source.
///
/// A token is a maximal run of ASCII letters and `! ? , . ; : '`.
/// Everything else (whitespace, digits, other punctuation, non-ASCII bytes)
/// separates tokens and is discarded. Case is preserved.
///
/// The stream is single-pass: once the reader is exhausted the iterator
/// keeps returning `None`.
pub struct Tokenizer<R: BufRead> {
	bytes: Bytes<R>,
	done: bool,
}

impl<R: BufRead> Tokenizer<R> {
	pub fn new(reader: R) -> Self {
		Self { bytes: reader.bytes(), done: false }
	}
}

impl<R: BufRead> Iterator for Tokenizer<R> {
	type Item = io::Result<String>;

	fn next(&mut self) -> Option<Self::Item> {
		if self.done {
			return None;
		}

		let mut token = String::new();
		let mut truncated = false;
		loop {
			let byte = match self.bytes.next() {
				Some(Ok(b)) => b,
				Some(Err(e)) => {
					self.done = true;
					return Some(Err(e));
				}
				None => {
					self.done = true;
					break;
				}
			};

			if is_token_byte(byte) {
				if token.len() < MAX_TOKEN_LENGTH {
					token.push(byte as char);
				} else {
					truncated = true;
				}
			} else if !token.is_empty() {
				break;
			}
		}

		if truncated {
			warn!("token truncated to {MAX_TOKEN_LENGTH} characters: {token}");
		}

		if token.is_empty() { None } else { Some(Ok(token)) }
	}
}

/// Strips a trailing clause terminator from `token`.
///
/// Returns `true` if one of `. ? ! ;` was removed. Only the final character
/// is considered, so `"wait..."` becomes `"wait.."`.
pub fn ends_clause(token: &mut String) -> bool {
	match token.chars().last() {
		Some(c) if CLAUSE_TERMINATORS.contains(&c) => {
			token.pop();
			true
		}
		_ => false,
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn tokens(text: &str) -> Vec<String> {
		Tokenizer::new(text.as_bytes()).collect::<io::Result<Vec<_>>>().unwrap()
	}

	#[test]
	fn test_splits_on_separators() {
		assert_eq!(
			tokens("  Hello, world!\n\tIt's 42 o'clock;  fine: yes"),
			vec!["Hello,", "world!", "It's", "o'clock;", "fine:", "yes"]
		);
	}

	#[test]
	fn test_empty_and_separator_only_input() {
		assert!(tokens("").is_empty());
		assert!(tokens(" 123 \n -- 456 ").is_empty());
	}

	#[test]
	fn test_non_ascii_is_a_separator() {
		assert_eq!(tokens("café au lait"), vec!["caf", "au", "lait"]);
	}

	#[test]
	fn test_long_runs_are_truncated() {
		let long = "a".repeat(MAX_TOKEN_LENGTH + 20);
		let text = format!("{long} next");
		let result = tokens(&text);
		assert_eq!(result.len(), 2);
		assert_eq!(result[0].len(), MAX_TOKEN_LENGTH);
		assert_eq!(result[1], "next");
	}

	#[test]
	fn test_stream_is_not_restartable() {
		let mut tokenizer = Tokenizer::new("one".as_bytes());
		assert_eq!(tokenizer.next().unwrap().unwrap(), "one");
		assert!(tokenizer.next().is_none());
		assert!(tokenizer.next().is_none());
	}

	#[test]
	fn test_ends_clause() {
		for (raw, stripped, ends) in [
			("ran.", "ran", true),
			("why?", "why", true),
			("stop!", "stop", true),
			("so;", "so", true),
			("note:", "note:", false),
			("well,", "well,", false),
			("wait...", "wait..", true),
			("plain", "plain", false),
		] {
			let mut token = raw.to_owned();
			assert_eq!(ends_clause(&mut token), ends, "{raw}");
			assert_eq!(token, stripped);
		}
	}
}
