use std::fmt;

use serde::Serialize;

use super::word_model::Model;
use crate::error::Result;

/// Writes the human-readable dump of `model`.
///
/// Layout:
/// ```text
/// ----------MODEL----------
/// ---Model size: 5 words
/// ---Words:
/// the (2): cat dog
/// ran (2) (se): far
/// ---Sentence-starting words (2):
/// the
/// the
/// ---------------------------
/// ```
pub(crate) fn write_dump(model: &Model, f: &mut impl fmt::Write) -> fmt::Result {
	writeln!(f, "----------MODEL----------")?;
	writeln!(f, "---Model size: {} words", model.len())?;
	writeln!(f, "---Words:")?;
	for word in model.words() {
		write!(f, "{} ({})", word.text(), word.occurrences())?;
		if word.is_sentence_ender() {
			write!(f, " (se)")?;
		}
		write!(f, ":")?;
		for follower in word.followers() {
			write!(f, " {}", model.word(*follower).text())?;
		}
		writeln!(f)?;
	}
	writeln!(f, "---Sentence-starting words ({}):", model.sentence_starters().len())?;
	for starter in model.sentence_starters() {
		writeln!(f, "{}", model.word(*starter).text())?;
	}
	writeln!(f, "---------------------------")
}

/// Structured view of a model for machine consumption.
///
/// Words refer to each other by text rather than by id, so the report is
/// readable on its own.
#[derive(Serialize, Debug, PartialEq)]
pub struct ModelReport<'a> {
	pub name: &'a str,
	pub size: usize,
	pub words: Vec<WordReport<'a>>,
	pub sentence_starters: Vec<&'a str>,
}

#[derive(Serialize, Debug, PartialEq)]
pub struct WordReport<'a> {
	pub text: &'a str,
	pub occurrences: usize,
	pub sentence_ender: bool,
	pub followers: Vec<&'a str>,
}

impl<'a> ModelReport<'a> {
	pub fn new(model: &'a Model) -> Self {
		let words = model
			.words()
			.iter()
			.map(|word| WordReport {
				text: word.text(),
				occurrences: word.occurrences(),
				sentence_ender: word.is_sentence_ender(),
				followers: word.followers().iter().map(|id| model.word(*id).text()).collect(),
			})
			.collect();

		Self {
			name: model.name(),
			size: model.len(),
			words,
			sentence_starters: model
				.sentence_starters()
				.iter()
				.map(|id| model.word(*id).text())
				.collect(),
		}
	}

	/// Serializes the report as pretty-printed JSON.
	pub fn to_json(&self) -> Result<String> {
		Ok(serde_json::to_string_pretty(self)?)
	}
}
