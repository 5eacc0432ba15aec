//! End-to-end scoring tests against on-disk corpora.
//!
//! Each test writes its own corpus files into a temp directory, trains a
//! model through the public API and scores held-out files through the same
//! streaming reader the classification driver uses.

use std::io::Write;
use std::path::PathBuf;

use perplex_core::corpus;
use perplex_core::model::trigram::TrigramModel;

fn write_corpus(dir: &std::path::Path, name: &str, lines: &[&str]) -> PathBuf {
	let path = dir.join(name);
	let mut file = std::fs::File::create(&path).unwrap();
	for line in lines {
		writeln!(file, "{line}").unwrap();
	}
	path
}

#[test]
fn own_training_text_beats_foreign_text() {
	let dir = tempfile::tempdir().unwrap();
	let train = write_corpus(
		dir.path(),
		"train.txt",
		&["the cat sat on the mat", "the cat sat on the mat"],
	);
	let familiar = write_corpus(dir.path(), "familiar.txt", &["the cat sat on the mat"]);
	let foreign = write_corpus(dir.path(), "foreign.txt", &["xyz qwe rst"]);

	let model = TrigramModel::from_file(&train).unwrap();

	let pp_familiar = model
		.perplexity(corpus::filtered_sentences(&familiar, model.lexicon()).unwrap())
		.unwrap();
	let pp_foreign = model
		.perplexity(corpus::filtered_sentences(&foreign, model.lexicon()).unwrap())
		.unwrap();

	assert!(pp_familiar.is_finite());
	assert!(pp_foreign.is_finite());
	assert!(pp_familiar < pp_foreign, "{pp_familiar} >= {pp_foreign}");
}

#[test]
fn filtering_through_own_lexicon_is_stable() {
	let dir = tempfile::tempdir().unwrap();
	let train = write_corpus(
		dir.path(),
		"train.txt",
		&["one sentence here", "one sentence here", "and a stray line"],
	);

	let model = TrigramModel::from_file(&train).unwrap();

	let once: Vec<Vec<String>> = corpus::filtered_sentences(&train, model.lexicon())
		.unwrap()
		.collect::<Result<_, _>>()
		.unwrap();
	let twice: Vec<Vec<String>> = once
		.iter()
		.map(|sentence| model.lexicon().filter(sentence.clone()))
		.collect();

	assert_eq!(once, twice);
}

#[test]
fn missing_training_file_fails_construction() {
	let dir = tempfile::tempdir().unwrap();
	let missing = dir.path().join("no-such-corpus.txt");

	assert!(TrigramModel::from_file(&missing).is_err());
}
