//! Word-transition sentence generation library.
//!
//! This crate learns which words follow which in a source text and uses
//! that first-order model to synthesize new sentences of an exact length:
//! - Tokenization of raw text into normalized words
//! - Incremental model construction (vocabulary, followers, sentence starters)
//! - Randomized backtracking search for sentences of a requested length
//! - Rendering and model inspection
//!
//! # Example
//!
//! ```rust
//! use chain_gen_core::model::word_model::Model;
//! use chain_gen_core::model::synthesizer::synthesize;
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let model = Model::from_reader("The cat ran. The dog ran far.".as_bytes()).unwrap();
//! let mut rng = StdRng::seed_from_u64(7);
//! let sentence = synthesize(&model, 3, &mut rng).map(|path| path.render());
//! assert!(sentence == Some("The cat ran.".to_owned()) || sentence == Some("The dog ran.".to_owned()));
//! ```

/// Word-transition model, sentence synthesis and rendering.
pub mod model;

/// Crate-wide error type.
pub mod error;

/// I/O utilities (source opening, naming).
///
/// Not exposed
pub(crate) mod io;

pub use error::{ModelError, Result};
