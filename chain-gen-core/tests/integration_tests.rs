use std::collections::HashMap;
use std::io::Write;

use chain_gen_core::ModelError;
use chain_gen_core::model::generation_input::{GenerationInput, SeedMode};
use chain_gen_core::model::generator::SentenceGenerator;
use chain_gen_core::model::printer::ModelReport;
use chain_gen_core::model::synthesizer::synthesize;
use chain_gen_core::model::tokenizer::{Tokenizer, ends_clause};
use chain_gen_core::model::word_model::Model;
use pretty_assertions::assert_eq;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tempfile::NamedTempFile;

const FABLE: &str = "\
The fox saw the crow. The crow sat in a tall tree, holding a piece of cheese!
The fox said: what a fine bird. Will the bird sing for me? The crow opened her beak;
the cheese fell. The fox ate the cheese and ran away. The crow sat in the tree.
";

fn source_file(text: &str) -> NamedTempFile {
	let mut file = NamedTempFile::new().unwrap();
	file.write_all(text.as_bytes()).unwrap();
	file.flush().unwrap();
	file
}

#[test]
fn test_load_from_file() {
	let file = source_file("The cat ran. The dog ran far.");
	let model = Model::from_file(file.path()).unwrap();

	let stem = file.path().file_stem().unwrap().to_string_lossy().to_string();
	assert_eq!(model.name(), stem);
	assert_eq!(model.len(), 5);
	assert_eq!(model.word(model.find("ran").unwrap()).occurrences(), 2);
	assert_eq!(model.starter_count(model.find("the").unwrap()), 2);
}

#[test]
fn test_missing_file() {
	match Model::from_file("./no/such/source.txt") {
		Err(ModelError::Io(_)) => (),
		other => panic!("expected an IO error, got {other:?}"),
	}
}

#[test]
fn test_empty_file() {
	let file = source_file("  42 -- 7\n");
	assert!(matches!(Model::from_file(file.path()), Err(ModelError::EmptyInput { .. })));
}

#[test]
fn test_counts_match_token_frequencies() {
	let model = Model::from_reader(FABLE.as_bytes()).unwrap();

	// Replay the build normalization by hand
	let mut expected: HashMap<String, usize> = HashMap::new();
	let mut enders: HashMap<String, bool> = HashMap::new();
	let mut pending = true;
	for token in Tokenizer::new(FABLE.as_bytes()) {
		let mut token = token.unwrap();
		let ends = ends_clause(&mut token);
		if pending {
			let mut chars = token.chars();
			let first = chars.next().unwrap().to_ascii_lowercase();
			token = std::iter::once(first).chain(chars).collect();
		}
		*expected.entry(token.clone()).or_default() += 1;
		*enders.entry(token).or_default() |= ends;
		pending = ends;
	}

	assert_eq!(model.len(), expected.len());
	for word in model.words() {
		assert_eq!(word.occurrences(), expected[word.text()], "{}", word.text());
		assert_eq!(word.is_sentence_ender(), enders[word.text()], "{}", word.text());
	}
}

#[test]
fn test_fable_model_shape() {
	let model = Model::from_reader(FABLE.as_bytes()).unwrap();
	let report = ModelReport::new(&model);

	assert_eq!(report.sentence_starters, vec!["the", "the", "the", "will", "the", "the", "the", "the"]);

	let cheese = report.words.iter().find(|w| w.text == "cheese").unwrap();
	assert_eq!(cheese.occurrences, 3);
	assert!(cheese.sentence_ender);
	assert_eq!(cheese.followers, vec!["fell", "and"]);

	// Commas and colons stay attached to their words
	assert!(model.find("tree,").is_some());
	assert!(model.find("said:").is_some());
}

#[test]
fn test_synthesized_paths_are_valid() {
	let model = Model::from_reader(FABLE.as_bytes()).unwrap();
	let mut rng = StdRng::seed_from_u64(2024);

	for length in 1..=12 {
		let Some(path) = synthesize(&model, length, &mut rng) else {
			continue;
		};
		let ids = path.ids();
		assert_eq!(ids.len(), length);
		assert!(model.sentence_starters().contains(&ids[0]));
		assert!(model.word(ids[length - 1]).is_sentence_ender());
		for pair in ids.windows(2) {
			assert!(model.word(pair[0]).followers().contains(&pair[1]));
		}

		let sentence = path.render();
		assert!(sentence.starts_with(char::is_uppercase), "{sentence}");
		assert!(sentence.ends_with('.') && !sentence.ends_with(".."), "{sentence}");
	}
}

#[test]
fn test_known_sentences() {
	let model = Model::from_reader(FABLE.as_bytes()).unwrap();
	let mut app = SentenceGenerator::new(model, SeedMode::Fixed(1));

	let closers = ["The crow.", "The bird.", "The cheese.", "The tree."];
	for _ in 0..10 {
		let sentence = app.generate(2).unwrap();
		assert!(closers.contains(&sentence.as_str()), "{sentence}");
	}
}

#[test]
fn test_fixed_seed_batches_match() {
	let file = source_file(FABLE);
	let mut input = GenerationInput::new(7, 4).unwrap();
	input.seed = SeedMode::Fixed(77);

	let mut first = SentenceGenerator::from_file(file.path(), SeedMode::Entropy).unwrap();
	let mut second = SentenceGenerator::from_file(file.path(), SeedMode::Fixed(5)).unwrap();
	assert_eq!(first.generate_batch(&input), second.generate_batch(&input));
}

#[test]
fn test_too_long_for_acyclic_source() {
	let model = Model::from_reader("The cat ran. The dog ran far.".as_bytes()).unwrap();
	let mut app = SentenceGenerator::new(model, SeedMode::Fixed(0));
	assert_eq!(app.generate(100), None);
	let sentence = app.generate(4).unwrap();
	assert!(sentence == "The cat ran far." || sentence == "The dog ran far.", "{sentence}");
}

#[test]
fn test_dump_matches_report() {
	let model = Model::from_reader(FABLE.as_bytes()).unwrap();
	let dump = model.dump();
	let report = ModelReport::new(&model);

	assert!(dump.starts_with(&format!("----------MODEL----------\n---Model size: {} words\n", report.size)));
	assert!(dump.contains(&format!("---Sentence-starting words ({}):\n", report.sentence_starters.len())));
	assert_eq!(dump.lines().count(), report.words.len() + report.sentence_starters.len() + 5);
	assert_eq!(dump, model.to_string());
}

#[test]
fn test_detached_terminator_dump() {
	let model = Model::from_reader("Run fast . Then stop".as_bytes()).unwrap();
	let expected = "\
----------MODEL----------
---Model size: 5 words
---Words:
run (1): fast
fast (1): 
 (1) (se):
then (1): stop
stop (1):
---Sentence-starting words (2):
run
then
---------------------------
";
	assert_eq!(model.dump(), expected);

	// "Run fast." would need `fast` to close a clause
	let mut rng = StdRng::seed_from_u64(0);
	assert!(synthesize(&model, 2, &mut rng).is_none());
	assert_eq!(synthesize(&model, 3, &mut rng).map(|p| p.render()), Some("Run fast .".to_owned()));
}

#[test]
fn test_single_terminator_source() {
	let model = Model::from_reader(".".as_bytes()).unwrap();
	assert_eq!(model.len(), 1);
	assert_eq!(model.sentence_starters().len(), 1);
}
