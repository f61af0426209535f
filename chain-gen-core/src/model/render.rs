use super::word::Word;

/// Joins words into a sentence.
///
/// Words are separated by single spaces, a `.` is appended and the first
/// character is upper-cased. The words themselves are left untouched.
/// An empty path renders to an empty string.
pub fn render<'a, I>(words: I) -> String
where
	I: IntoIterator<Item = &'a Word>,
{
	let texts: Vec<&str> = words.into_iter().map(Word::text).collect();
	if texts.is_empty() {
		return String::new();
	}

	let mut sentence = texts.join(" ");
	sentence.push('.');

	if let Some(first) = sentence.chars().next().filter(|c| c.is_lowercase()) {
		let upper: String = first.to_uppercase().collect();
		sentence.replace_range(..first.len_utf8(), &upper);
	}
	sentence
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_render() {
		let words = [Word::new("the", false), Word::new("cat", false), Word::new("ran", true)];
		assert_eq!(render(&words), "The cat ran.");
		assert_eq!(words[0].text(), "the");
	}

	#[test]
	fn test_render_single_word_and_punctuation() {
		assert_eq!(render(&[Word::new("stop", true)]), "Stop.");
		assert_eq!(render(&[Word::new("well,", false), Word::new("no", true)]), "Well, no.");
		assert_eq!(render(&[Word::new("'tis", true)]), "'tis.");
	}

	#[test]
	fn test_render_keeps_inner_terminators() {
		// "wait..." loses only its last dot when modeled
		assert_eq!(render(&[Word::new("wait..", true)]), "Wait...");
	}

	#[test]
	fn test_render_empty_word() {
		// A detached terminator is modeled as a word with empty text
		assert_eq!(render(&[Word::new("", true)]), ".");
		assert_eq!(render(&[Word::new("run", false), Word::new("", true)]), "Run .");
	}

	#[test]
	fn test_render_empty() {
		assert_eq!(render(&[] as &[Word]), "");
	}
}
