use crate::error::{ModelError, Result};

/// Strategy used to seed the random generator of a generation run.
///
/// # Variants
/// - `Entropy`: seed from the operating system; every run differs.
/// - `Fixed(u64)`: seed from the given value; runs are reproducible.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Default)]
pub enum SeedMode {
	#[default]
	Entropy,
	Fixed(u64),
}

/// Input parameters for a generation run.
///
/// # Responsibilities
/// - Track the requested sentence length and how many sentences to produce
/// - Track how the random generator is seeded
///
/// # Invariants
/// - `length >= 1` and `count >= 1` (enforced by the setters)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenerationInput {
	/// Number of words in each generated sentence.
	length: usize,

	/// Number of sentences to generate.
	count: usize,

	/// How to seed the random generator.
	pub seed: SeedMode,
}

impl Default for GenerationInput {
	fn default() -> Self {
		Self { length: 1, count: 1, seed: SeedMode::Entropy }
	}
}

impl GenerationInput {
	/// Creates an input for `count` sentences of `length` words, seeded from entropy.
	///
	/// # Errors
	/// Returns an error if `length` or `count` is 0.
	pub fn new(length: usize, count: usize) -> Result<Self> {
		let mut input = Self::default();
		input.set_length(length)?;
		input.set_count(count)?;
		Ok(input)
	}

	pub fn length(&self) -> usize {
		self.length
	}

	pub fn count(&self) -> usize {
		self.count
	}

	/// Sets the number of words per sentence.
	///
	/// # Errors
	/// Returns `ModelError::InvalidLength` if `length` is 0.
	pub fn set_length(&mut self, length: usize) -> Result<()> {
		if length == 0 {
			return Err(ModelError::InvalidLength(length));
		}
		self.length = length;
		Ok(())
	}

	/// Sets the number of sentences to generate.
	///
	/// # Errors
	/// Returns `ModelError::InvalidCount` if `count` is 0.
	pub fn set_count(&mut self, count: usize) -> Result<()> {
		if count == 0 {
			return Err(ModelError::InvalidCount(count));
		}
		self.count = count;
		Ok(())
	}
}
