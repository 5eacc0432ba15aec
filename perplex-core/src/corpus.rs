use std::fs::{self, File};
use std::io::{BufRead, BufReader, Lines};
use std::path::{Path, PathBuf};

use crate::error::ModelError;
use crate::model::lexicon::Lexicon;

/// Streaming reader over a corpus file, one tokenized sentence per line.
///
/// Lines are lowercased and split on whitespace; blank lines are skipped.
/// With a lexicon attached, every out-of-lexicon word is replaced by the
/// unknown token. Sentence boundary sentinels are never injected here,
/// only by n-gram extraction.
///
/// The underlying file handle is released when the iterator is dropped.
/// The stream is single-pass; call [`sentences`] or [`filtered_sentences`]
/// again to restart from the top of the file.
pub struct Sentences<'a> {
	lines: Lines<BufReader<File>>,
	lexicon: Option<&'a Lexicon>,
}

/// Opens a corpus file for a raw (unfiltered) pass.
///
/// # Errors
/// Fails if the file cannot be opened. Read failures past that point are
/// yielded through the iterator.
pub fn sentences<P: AsRef<Path>>(path: P) -> Result<Sentences<'static>, ModelError> {
	let file = File::open(path)?;
	Ok(Sentences { lines: BufReader::new(file).lines(), lexicon: None })
}

/// Opens a corpus file for a lexicon-filtered pass.
///
/// Every token outside `lexicon` is mapped to the unknown token; lexicon
/// members pass through unchanged.
///
/// # Errors
/// Fails if the file cannot be opened.
pub fn filtered_sentences<'a, P: AsRef<Path>>(
	path: P,
	lexicon: &'a Lexicon,
) -> Result<Sentences<'a>, ModelError> {
	let file = File::open(path)?;
	Ok(Sentences { lines: BufReader::new(file).lines(), lexicon: Some(lexicon) })
}

impl Iterator for Sentences<'_> {
	type Item = Result<Vec<String>, ModelError>;

	fn next(&mut self) -> Option<Self::Item> {
		loop {
			let line = match self.lines.next()? {
				Ok(line) => line,
				Err(e) => return Some(Err(e.into())),
			};

			let tokens: Vec<String> = line
				.to_lowercase()
				.split_whitespace()
				.map(str::to_owned)
				.collect();
			if tokens.is_empty() {
				continue;
			}

			return Some(Ok(match self.lexicon {
				Some(lexicon) => lexicon.filter(tokens),
				None => tokens,
			}));
		}
	}
}

/// Lists the files directly contained in a test directory.
///
/// Returns full paths, sorted, so batch order is deterministic.
/// Subdirectories are ignored.
pub fn text_files<P: AsRef<Path>>(dir: P) -> Result<Vec<PathBuf>, ModelError> {
	let mut files = Vec::new();

	for entry in fs::read_dir(dir)? {
		let entry = entry?;
		let path = entry.path();

		if path.is_file() {
			files.push(path);
		}
	}

	files.sort();
	Ok(files)
}

#[cfg(test)]
mod tests {
	use std::io::Write;

	use super::*;

	#[test]
	fn tokenizes_lines_and_skips_blanks() {
		let mut file = tempfile::NamedTempFile::new().unwrap();
		writeln!(file, "The CAT sat").unwrap();
		writeln!(file).unwrap();
		writeln!(file, "  on the mat  ").unwrap();

		let parsed: Vec<Vec<String>> = sentences(file.path())
			.unwrap()
			.collect::<Result<_, _>>()
			.unwrap();

		assert_eq!(
			parsed,
			vec![
				vec!["the".to_owned(), "cat".to_owned(), "sat".to_owned()],
				vec!["on".to_owned(), "the".to_owned(), "mat".to_owned()],
			]
		);
	}

	#[test]
	fn missing_file_is_an_error() {
		assert!(matches!(
			sentences("/nonexistent/corpus.txt"),
			Err(ModelError::Io(_))
		));
	}

	#[test]
	fn reopening_restarts_the_stream() {
		let mut file = tempfile::NamedTempFile::new().unwrap();
		writeln!(file, "a b c").unwrap();

		for _ in 0..2 {
			let count = sentences(file.path()).unwrap().count();
			assert_eq!(count, 1);
		}
	}

	#[test]
	fn lists_only_files() {
		let dir = tempfile::tempdir().unwrap();
		std::fs::write(dir.path().join("b.txt"), "x").unwrap();
		std::fs::write(dir.path().join("a.txt"), "y").unwrap();
		std::fs::create_dir(dir.path().join("nested")).unwrap();

		let files = text_files(dir.path()).unwrap();
		let names: Vec<_> = files
			.iter()
			.map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
			.collect();

		assert_eq!(names, vec!["a.txt", "b.txt"]);
	}
}
