use std::path::Path;

use log::debug;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::error::Result;
use crate::model::generation_input::{GenerationInput, SeedMode};
use crate::model::synthesizer::synthesize;
use crate::model::word_model::Model;

/// High-level generator owning a model and its random generator.
///
/// # Responsibilities
/// - Own a built `Model`
/// - Own the random stream every draw of a run consumes from
/// - Produce rendered sentences, one or a batch at a time
#[derive(Debug)]
pub struct SentenceGenerator {
	model: Model,
	rng: StdRng,
}

impl SentenceGenerator {
	pub fn new(model: Model, seed: SeedMode) -> Self {
		Self { model, rng: Self::make_rng(seed) }
	}

	/// Builds the model of a text file and wraps it in a generator.
	///
	/// # Errors
	/// Returns an error if the file cannot be read or contains no words.
	pub fn from_file<P: AsRef<Path>>(filepath: P, seed: SeedMode) -> Result<Self> {
		Ok(Self::new(Model::from_file(filepath)?, seed))
	}

	fn make_rng(seed: SeedMode) -> StdRng {
		match seed {
			SeedMode::Entropy => StdRng::from_os_rng(),
			SeedMode::Fixed(value) => {
				debug!("random generator seeded with {value}");
				StdRng::seed_from_u64(value)
			}
		}
	}

	pub fn model(&self) -> &Model {
		&self.model
	}

	/// Restarts the random stream.
	pub fn reseed(&mut self, seed: SeedMode) {
		self.rng = Self::make_rng(seed);
	}

	/// Generates one sentence of `length` words.
	///
	/// Returns `None` if the model holds no such sentence. The returned
	/// string belongs to the caller.
	pub fn generate(&mut self, length: usize) -> Option<String> {
		synthesize(&self.model, length, &mut self.rng).map(|path| path.render())
	}

	/// Generates `input.count()` sentences of `input.length()` words.
	///
	/// # Behavior
	/// - Reseeds the generator from `input.seed` first, so a fixed seed
	///   always yields the same batch.
	/// - Each entry is `None` when no sentence was found. A model with no
	///   sentence of that length gives a batch of `None`s.
	pub fn generate_batch(&mut self, input: &GenerationInput) -> Vec<Option<String>> {
		self.reseed(input.seed);
		(0..input.count()).map(|_| self.generate(input.length())).collect()
	}
}
