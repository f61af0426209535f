use std::collections::HashMap;
use std::fmt;
use std::io::BufRead;
use std::path::Path;

use log::{debug, info, warn};

use super::printer;
use super::tokenizer::{Tokenizer, ends_clause};
use super::word::{Word, WordId};
use crate::error::{ModelError, Result};
use crate::io::{get_filename, open_source};

/// Name given to models built from an anonymous reader.
pub const STREAM_NAME: &str = "<stream>";

/// A first-order word-transition model of a source text.
///
/// The model owns every `Word` of its vocabulary. Followers and sentence
/// starters refer to words through `WordId`s into that vocabulary.
///
/// # Invariants
/// - Each `Word` text appears exactly once in `words` and in `index`
/// - `words` is in first-observed order
/// - Every `WordId` stored in the model is a valid index into `words`
/// - A built model has at least one word and one sentence starter
#[derive(Clone, Debug)]
pub struct Model {
	/// Where the text came from (file stem or `STREAM_NAME`).
	name: String,
	/// Vocabulary in first-observed order.
	words: Vec<Word>,
	/// Exact-match lookup from token text to vocabulary position.
	index: HashMap<String, WordId>,
	/// Words seen opening a sentence, with multiplicity.
	sentence_starters: Vec<WordId>,
}

impl Model {
	/// Builds a model from a text file.
	///
	/// The model is named after the file stem.
	///
	/// # Errors
	/// - `ModelError::Io` if the file cannot be opened or read.
	/// - `ModelError::EmptyInput` if the file contains no tokens.
	pub fn from_file<P: AsRef<Path>>(filepath: P) -> Result<Self> {
		let name = get_filename(&filepath)?;
		let reader = open_source(&filepath)?;
		Self::build(name, reader)
	}

	/// Builds a model from any buffered reader.
	///
	/// # Errors
	/// - `ModelError::Io` if reading fails.
	/// - `ModelError::EmptyInput` if the stream contains no tokens.
	pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
		Self::build(STREAM_NAME.to_owned(), reader)
	}

	fn build<R: BufRead>(name: String, reader: R) -> Result<Self> {
		let mut builder = ModelBuilder::new(name);
		for token in Tokenizer::new(reader) {
			builder.push_token(token?);
		}
		let model = builder.finish()?;
		info!(
			"model '{}' built: {} words, {} sentence starters",
			model.name,
			model.len(),
			model.sentence_starters.len()
		);
		Ok(model)
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	/// Number of distinct words in the vocabulary.
	pub fn len(&self) -> usize {
		self.words.len()
	}

	/// Always `false` for a model returned by a constructor.
	pub fn is_empty(&self) -> bool {
		self.words.is_empty()
	}

	/// Vocabulary in first-observed order.
	pub fn words(&self) -> &[Word] {
		&self.words
	}

	/// Sentence-starting words in observation order, duplicates included.
	pub fn sentence_starters(&self) -> &[WordId] {
		&self.sentence_starters
	}

	/// Returns the word behind `id`.
	///
	/// # Panics
	/// Panics if `id` was issued by another model.
	pub fn word(&self, id: WordId) -> &Word {
		&self.words[id.0]
	}

	/// Exact, case-sensitive lookup by normalized text.
	pub fn find(&self, text: &str) -> Option<WordId> {
		self.index.get(text).copied()
	}

	/// How many times `id` was recorded as a sentence starter.
	pub fn starter_count(&self, id: WordId) -> usize {
		self.sentence_starters.iter().filter(|s| **s == id).count()
	}

	/// Renders the inspection dump of this model.
	///
	/// The output only depends on the model content, so repeated calls on
	/// the same model return identical text.
	pub fn dump(&self) -> String {
		self.to_string()
	}
}

impl fmt::Display for Model {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		printer::write_dump(self, f)
	}
}

/// Incremental model construction over a token stream.
///
/// The builder keeps a one-token lookback window: the previously added word
/// and whether the next token opens a sentence. The very first token always
/// opens a sentence.
///
/// # Example
/// ```rust
/// use chain_gen_core::model::word_model::ModelBuilder;
///
/// let mut builder = ModelBuilder::new("inline");
/// for token in ["Hello", "there.", "Bye."] {
///     builder.push_token(token.to_owned());
/// }
/// let model = builder.finish().unwrap();
/// assert_eq!(model.sentence_starters().len(), 2);
/// ```
#[derive(Debug)]
pub struct ModelBuilder {
	model: Model,
	previous: Option<WordId>,
	sentence_start_pending: bool,
	tokens_read: usize,
}

impl ModelBuilder {
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			model: Model {
				name: name.into(),
				words: Vec::new(),
				index: HashMap::new(),
				sentence_starters: Vec::new(),
			},
			previous: None,
			sentence_start_pending: true,
			tokens_read: 0,
		}
	}

	/// Adds one raw token to the model.
	///
	/// # Behavior
	/// - Strips a trailing `. ? ! ;` and remembers that the token closed a clause.
	/// - Lower-cases the first character when the token opens a sentence.
	/// - Updates or creates the matching `Word`.
	/// - Links it as a follower of the previous word, or records it as a
	///   sentence starter.
	///
	/// # Notes
	/// - A token made of a lone terminator (a detached `"."`) becomes a word
	///   with empty text that ends its sentence.
	pub fn push_token(&mut self, mut token: String) {
		self.tokens_read += 1;
		let ends_sentence = ends_clause(&mut token);
		if token.is_empty() {
			warn!("detached clause terminator recorded as an empty word");
		}

		if self.sentence_start_pending {
			// LIMITATION: a proper noun opening a sentence loses its capital
			lowercase_first(&mut token);
		}

		let id = self.add_word(token, ends_sentence);

		match self.previous {
			Some(previous) if !self.sentence_start_pending => {
				self.model.words[previous.0].add_follower(id);
			}
			_ => {
				self.model.sentence_starters.push(id);
				self.sentence_start_pending = false;
			}
		}

		if ends_sentence {
			self.sentence_start_pending = true;
		}
		self.previous = Some(id);
	}

	/// Returns the id of `text`, creating the word on first sight.
	fn add_word(&mut self, text: String, ends_sentence: bool) -> WordId {
		if let Some(&id) = self.model.index.get(&text) {
			self.model.words[id.0].add_occurrence(ends_sentence);
			return id;
		}

		let id = WordId(self.model.words.len());
		self.model.words.push(Word::new(&text, ends_sentence));
		self.model.index.insert(text, id);
		id
	}

	/// Completes the build.
	///
	/// # Errors
	/// Returns `ModelError::EmptyInput` if no token was pushed. No partial
	/// model is returned in that case.
	pub fn finish(self) -> Result<Model> {
		if self.tokens_read == 0 {
			return Err(ModelError::EmptyInput { source_name: self.model.name });
		}
		debug!("model '{}' consumed {} tokens", self.model.name, self.tokens_read);
		Ok(self.model)
	}
}

/// Lower-cases the first character of `token` in place.
fn lowercase_first(token: &mut String) {
	if let Some(first) = token.chars().next()
		&& first.is_uppercase()
	{
		let lower: String = first.to_lowercase().collect();
		token.replace_range(..first.len_utf8(), &lower);
	}
}
