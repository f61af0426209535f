/// Position of a `Word` in its model's vocabulary.
///
/// Ids are only meaningful for the model that issued them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WordId(pub(crate) usize);

impl WordId {
	pub fn index(self) -> usize {
		self.0
	}
}

/// A vocabulary entry of a word-transition model.
///
/// Conceptually, this is a node in a first-order Markov chain whose
/// outgoing edges are the words observed right after it in the source.
///
/// ## Responsibilities:
/// - Count occurrences of its token during learning
/// - Remember whether the token ever closed a clause
/// - Record followers with multiplicity
///
/// ## Invariants
/// - `text` is unique within its model
/// - `occurrences` is strictly positive
#[derive(Clone, Debug)]
pub struct Word {
	/// Normalized token string.
	text: String,
	/// How many times this exact token was observed.
	occurrences: usize,
	/// Whether the token was ever immediately followed by a terminator.
	sentence_ender: bool,
	/// Words observed right after this one, in observation order.
	/// Duplicates are kept so frequent transitions are drawn more often.
	/// Example: "the" -> [cat, dog, cat]
	followers: Vec<WordId>,
}

impl Word {
	/// Creates a word seen once.
	pub(crate) fn new(text: &str, sentence_ender: bool) -> Self {
		Self {
			text: text.to_owned(),
			occurrences: 1,
			sentence_ender,
			followers: Vec::new(),
		}
	}

	/// Records another occurrence of this token.
	///
	/// The sentence-ender flag is sticky: once set it is never cleared.
	pub(crate) fn add_occurrence(&mut self, ends_sentence: bool) {
		self.occurrences += 1;
		self.sentence_ender |= ends_sentence;
	}

	pub(crate) fn add_follower(&mut self, next: WordId) {
		self.followers.push(next);
	}

	pub fn text(&self) -> &str {
		&self.text
	}

	pub fn occurrences(&self) -> usize {
		self.occurrences
	}

	pub fn is_sentence_ender(&self) -> bool {
		self.sentence_ender
	}

	pub fn followers(&self) -> &[WordId] {
		&self.followers
	}
}
