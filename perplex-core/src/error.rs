use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced while training or querying a language model.
///
/// Unseen n-grams are never an error: probability estimation handles them
/// with the uniform fallback policy and always returns a positive value.
#[derive(Debug, Error)]
pub enum ModelError {
	/// An n-gram order of zero was requested; orders start at 1.
	#[error("n-gram order must be at least 1, got {0}")]
	InvalidOrder(usize),

	/// The training corpus contained no tokens, so no denominator can
	/// ever be established.
	#[error("training corpus {} contains no tokens", .0.display())]
	EmptyCorpus(PathBuf),

	/// A corpus or test file could not be opened or read.
	#[error(transparent)]
	Io(#[from] io::Error),
}
