use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::Parser;
use log::debug;

use perplex_core::corpus;
use perplex_core::model::trigram::TrigramModel;

/// Trains one trigram model per corpus and classifies held-out documents
/// by comparing their perplexity under both models.
#[derive(Parser)]
#[command(version, about = "Perplexity-based two-corpus document classifier")]
struct Args {
	/// Training corpus for the first class, one sentence per line
	train_first: PathBuf,

	/// Training corpus for the second class, one sentence per line
	train_second: PathBuf,

	/// Directory of held-out documents drawn from the first corpus
	test_dir_first: PathBuf,

	/// Directory of held-out documents drawn from the second corpus
	test_dir_second: PathBuf,
}

fn main() -> Result<()> {
	env_logger::init();
	let args = Args::parse();

	let accuracy = classification_accuracy(
		&args.train_first,
		&args.train_second,
		&args.test_dir_first,
		&args.test_dir_second,
	)?;

	println!("{accuracy}");
	Ok(())
}

/// Runs the full comparison experiment: trains both models, scores every
/// document of both test directories under both, predicts the side whose
/// model yields strictly lower perplexity and returns the accuracy ratio.
fn classification_accuracy(
	train_first: &Path,
	train_second: &Path,
	test_dir_first: &Path,
	test_dir_second: &Path,
) -> Result<f64> {
	let model_first = TrigramModel::from_file(train_first)
		.with_context(|| format!("training on {}", train_first.display()))?;
	let model_second = TrigramModel::from_file(train_second)
		.with_context(|| format!("training on {}", train_second.display()))?;

	let mut total = 0usize;
	let mut correct = 0usize;

	// Every document of both directories is scored before the ratio is
	// computed; a document ties as misclassified.
	for document in corpus::text_files(test_dir_first)? {
		total += 1;
		if matches_own_model(&model_first, &model_second, &document)? {
			correct += 1;
		}
	}
	for document in corpus::text_files(test_dir_second)? {
		total += 1;
		if matches_own_model(&model_second, &model_first, &document)? {
			correct += 1;
		}
	}

	if total == 0 {
		bail!(
			"no test documents found in {} or {}",
			test_dir_first.display(),
			test_dir_second.display()
		);
	}
	Ok(correct as f64 / total as f64)
}

/// Whether the model trained on the document's source corpus scores it
/// with strictly lower perplexity than the other model. Each model filters
/// the document through its own lexicon.
fn matches_own_model(own: &TrigramModel, other: &TrigramModel, document: &Path) -> Result<bool> {
	let read = |model: &TrigramModel| {
		corpus::filtered_sentences(document, model.lexicon())
			.and_then(|sentences| model.perplexity(sentences))
			.with_context(|| format!("scoring {}", document.display()))
	};
	let pp_own = read(own)?;
	let pp_other = read(other)?;

	debug!(
		"{}: own {:.3} vs other {:.3}",
		document.display(),
		pp_own,
		pp_other
	);

	Ok(pp_own < pp_other)
}

#[cfg(test)]
mod tests {
	use std::io::Write;

	use super::*;

	fn write_file(path: &Path, lines: &[&str]) {
		let mut file = std::fs::File::create(path).unwrap();
		for line in lines {
			writeln!(file, "{line}").unwrap();
		}
	}

	/// Disjoint-vocabulary corpora; one verbatim test document per side
	/// must classify perfectly.
	#[test]
	fn verbatim_documents_classify_with_full_accuracy() {
		let dir = tempfile::tempdir().unwrap();

		let train_first = dir.path().join("train_first.txt");
		let train_second = dir.path().join("train_second.txt");
		write_file(&train_first, &["the cat sat on the mat", "the cat sat on the mat"]);
		write_file(&train_second, &["un chat dort sur le tapis", "un chat dort sur le tapis"]);

		let test_first = dir.path().join("test_first");
		let test_second = dir.path().join("test_second");
		std::fs::create_dir(&test_first).unwrap();
		std::fs::create_dir(&test_second).unwrap();
		write_file(&test_first.join("doc.txt"), &["the cat sat on the mat"]);
		write_file(&test_second.join("doc.txt"), &["un chat dort sur le tapis"]);

		let accuracy =
			classification_accuracy(&train_first, &train_second, &test_first, &test_second)
				.unwrap();

		assert_eq!(accuracy, 1.0);
	}

	#[test]
	fn empty_test_batch_is_an_explicit_error() {
		let dir = tempfile::tempdir().unwrap();

		let train_first = dir.path().join("train_first.txt");
		let train_second = dir.path().join("train_second.txt");
		write_file(&train_first, &["a b a b", "a b a b"]);
		write_file(&train_second, &["c d c d", "c d c d"]);

		let test_first = dir.path().join("test_first");
		let test_second = dir.path().join("test_second");
		std::fs::create_dir(&test_first).unwrap();
		std::fs::create_dir(&test_second).unwrap();

		let result =
			classification_accuracy(&train_first, &train_second, &test_first, &test_second);

		assert!(result.is_err());
	}
}
