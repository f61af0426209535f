use std::collections::HashSet;

use log::debug;
use rand::Rng;
use rand::seq::SliceRandom;

use super::render::render;
use super::word::{Word, WordId};
use super::word_model::Model;

/// A sentence found by `synthesize`: an ordered list of words of the
/// requested length, borrowed from the model that produced it.
#[derive(Clone, Debug)]
pub struct SentencePath<'m> {
	model: &'m Model,
	ids: Vec<WordId>,
}

impl<'m> SentencePath<'m> {
	pub fn ids(&self) -> &[WordId] {
		&self.ids
	}

	pub fn words(&self) -> impl Iterator<Item = &'m Word> + '_ {
		self.ids.iter().map(|id| self.model.word(*id))
	}

	pub fn len(&self) -> usize {
		self.ids.len()
	}

	pub fn is_empty(&self) -> bool {
		self.ids.is_empty()
	}

	/// Renders the path as a capitalized sentence ending in `.`.
	pub fn render(&self) -> String {
		render(self.words())
	}
}

/// Searches `model` for a sentence of exactly `length` words.
///
/// A sentence starts with a recorded sentence starter, follows recorded
/// follower links, and ends on a word that was seen closing a clause.
///
/// # Behavior
/// - Sentence-starter entries are tried in random order, each at most once.
/// - From each starter, a depth-first search tries the followers of every
///   word in random order, each follower position at most once per step.
/// - The first complete sentence found is returned.
///
/// # Returns
/// - `Some(path)` on success.
/// - `None` if `length` is 0 or no sentence of that length exists. This is
///   an expected outcome, not a failure.
///
/// # Notes
/// - All randomness is drawn from `rng`; a seeded generator gives
///   reproducible results.
/// - Search state lives in this call only, so a shared model can serve
///   any number of searches.
pub fn synthesize<'m, R: Rng + ?Sized>(model: &'m Model, length: usize, rng: &mut R) -> Option<SentencePath<'m>> {
	if length == 0 {
		return None;
	}

	let mut search = Search { model, length, dead_ends: HashSet::new() };

	let mut starters: Vec<usize> = (0..model.sentence_starters().len()).collect();
	starters.shuffle(rng);

	for position in starters {
		let start = model.sentence_starters()[position];
		if let Some(ids) = search.extend(start, rng) {
			debug!("found a {length}-word sentence in model '{}'", model.name());
			return Some(SentencePath { model, ids });
		}
	}

	debug!(
		"no {length}-word sentence in model '{}' ({} dead ends explored)",
		model.name(),
		search.dead_ends.len()
	);
	None
}

/// Per-call backtracking state.
struct Search<'m> {
	model: &'m Model,
	length: usize,
	/// `(word, index)` pairs known to lead to no complete sentence.
	/// Whether a word at a given index can be completed does not depend on
	/// the words before it, so a failure found once holds for the whole call.
	dead_ends: HashSet<(WordId, usize)>,
}

impl Search<'_> {
	/// Extends a path starting at `start` until it holds `length` words and
	/// ends on a sentence ender.
	///
	/// Runs on an explicit stack: `frames[i]` holds the follower positions
	/// of `path[i]` not tried yet, in random order.
	fn extend<R: Rng + ?Sized>(&mut self, start: WordId, rng: &mut R) -> Option<Vec<WordId>> {
		let last = self.length - 1;
		if last == 0 {
			return self.model.word(start).is_sentence_ender().then(|| vec![start]);
		}
		if self.dead_ends.contains(&(start, 0)) {
			return None;
		}

		let mut path = vec![start];
		let mut frames = vec![self.untried_followers(start, rng)];

		while let Some(frame) = frames.last_mut() {
			let index = path.len() - 1;
			let current = path[index];

			let Some(position) = frame.pop() else {
				// Every follower failed: backtrack
				self.dead_ends.insert((current, index));
				frames.pop();
				path.pop();
				continue;
			};

			let next = self.model.word(current).followers()[position];
			if index + 1 == last {
				if self.model.word(next).is_sentence_ender() {
					path.push(next);
					return Some(path);
				}
				continue;
			}
			if self.dead_ends.contains(&(next, index + 1)) {
				continue;
			}

			path.push(next);
			let untried = self.untried_followers(next, rng);
			frames.push(untried);
		}

		None
	}

	/// Follower positions of `id` in random order.
	///
	/// Positions, not words, are shuffled: a follower recorded twice is
	/// tried twice.
	fn untried_followers<R: Rng + ?Sized>(&self, id: WordId, rng: &mut R) -> Vec<usize> {
		let mut positions: Vec<usize> = (0..self.model.word(id).followers().len()).collect();
		positions.shuffle(rng);
		positions
	}
}
