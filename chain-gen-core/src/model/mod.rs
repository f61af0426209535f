//! Top-level module for the word-transition generation system.
//!
//! This module provides:
//! - Tokenization of raw text (`Tokenizer`)
//! - Vocabulary entries (`Word`) and the model holding them (`Model`)
//! - Incremental model construction (`ModelBuilder`)
//! - Backtracking sentence search (`synthesize`)
//! - Rendering and inspection output
//! - A high-level generation interface (`SentenceGenerator`)

/// Lazy token stream over a text source.
///
/// Splits text into runs of letters and `! ? , . ; : '`, bounded in length,
/// and detects clause terminators.
pub mod tokenizer;

/// Vocabulary entry of a model.
///
/// Tracks occurrences, the sentence-ender flag and followers with multiplicity.
pub mod word;

/// The word-transition model and its builder.
///
/// Handles token ingestion, sentence-start normalization,
/// follower linking and vocabulary lookup.
pub mod word_model;

/// Randomized backtracking search for sentences of an exact length.
pub mod synthesizer;

/// Sentence rendering.
pub mod render;

/// Model dump and structured report.
pub mod printer;

/// Generation configuration.
///
/// Stores the sentence length, batch size and seeding strategy.
/// Used by `SentenceGenerator`.
pub mod generation_input;

/// High-level interface owning a model and its random generator.
pub mod generator;
