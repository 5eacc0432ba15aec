use std::collections::{HashMap, HashSet};

use crate::error::ModelError;
use super::ngrams::{START, STOP};

/// Replacement token for words outside the lexicon.
pub const UNK: &str = "UNK";

/// Vocabulary of tokens a trained model knows about.
///
/// Built from a first full pass over the training corpus and immutable
/// afterwards. A word makes it into the lexicon only if it occurs at least
/// twice in training; everything seen once collapses into [`UNK`] on later
/// passes. The three sentinels are always members.
///
/// # Invariants
/// - Always contains [`START`], [`STOP`] and [`UNK`]
/// - Every token of a filtered sentence is a member or [`UNK`]
#[derive(Debug)]
pub struct Lexicon {
	words: HashSet<String>,
}

impl Lexicon {
	/// Derives the vocabulary from a stream of raw tokenized sentences.
	///
	/// # Errors
	/// Propagates the first read error of the underlying stream.
	pub fn build<I>(corpus: I) -> Result<Self, ModelError>
	where
		I: IntoIterator<Item = Result<Vec<String>, ModelError>>,
	{
		let mut occurrences: HashMap<String, usize> = HashMap::new();
		for sentence in corpus {
			for word in sentence? {
				*occurrences.entry(word).or_insert(0) += 1;
			}
		}

		let mut words: HashSet<String> = occurrences
			.into_iter()
			.filter(|(_, count)| *count > 1)
			.map(|(word, _)| word)
			.collect();
		words.insert(START.to_owned());
		words.insert(STOP.to_owned());
		words.insert(UNK.to_owned());

		Ok(Self { words })
	}

	/// Whether `word` is a known token.
	pub fn contains(&self, word: &str) -> bool {
		self.words.contains(word)
	}

	/// Number of known tokens, sentinels included.
	pub fn len(&self) -> usize {
		self.words.len()
	}

	/// Maps every out-of-lexicon word to [`UNK`], passing members through
	/// unchanged. Idempotent: [`UNK`] itself is a member.
	pub fn filter(&self, tokens: Vec<String>) -> Vec<String> {
		tokens
			.into_iter()
			.map(|word| {
				if self.words.contains(&word) {
					word
				} else {
					UNK.to_owned()
				}
			})
			.collect()
	}
}
