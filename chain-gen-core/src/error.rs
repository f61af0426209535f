use std::io;

use thiserror::Error;

/// Errors raised while building a model or configuring a generation run.
///
/// A search that finds no sentence is not an error: synthesis reports it
/// as `None`.
#[derive(Error, Debug)]
pub enum ModelError {
	#[error("IO error: {0}")]
	Io(#[from] io::Error),

	/// The source yielded no tokens, so there is nothing to model.
	#[error("could not create model, no tokens found in {source_name}")]
	EmptyInput { source_name: String },

	#[error("sentence length must be >= 1, got {0}")]
	InvalidLength(usize),

	#[error("sentence count must be >= 1, got {0}")]
	InvalidCount(usize),

	#[error("JSON error: {0}")]
	Json(#[from] serde_json::Error),
}

/// Result type for model operations
pub type Result<T> = std::result::Result<T, ModelError>;
