use std::collections::HashMap;

use crate::error::ModelError;
use super::ngrams::{self, NGram};

/// Occurrence counts for a single n-gram order.
///
/// Lookups have explicit zero-default semantics: an n-gram that was never
/// recorded counts as 0, it is not an error.
#[derive(Debug, Default)]
pub(crate) struct CountTable {
	counts: HashMap<NGram, usize>,
}

impl CountTable {
	fn record(&mut self, ngram: NGram) {
		*self.counts.entry(ngram).or_insert(0) += 1;
	}

	/// Occurrence count of `ngram`; 0 if it was never observed.
	pub(crate) fn count(&self, ngram: &[String]) -> usize {
		self.counts.get(ngram).copied().unwrap_or(0)
	}

	/// Number of distinct n-grams in the table.
	pub(crate) fn distinct(&self) -> usize {
		self.counts.len()
	}
}

/// Unigram, bigram and trigram tables accumulated over one corpus, plus the
/// number of sentences that produced them.
///
/// Built as a single fold over the sentence stream; the tables are never
/// mutated after construction.
#[derive(Debug, Default)]
pub(crate) struct NGramCounts {
	pub(crate) unigrams: CountTable,
	pub(crate) bigrams: CountTable,
	pub(crate) trigrams: CountTable,
	pub(crate) sentence_count: usize,
}

impl NGramCounts {
	/// Folds a stream of lexicon-filtered sentences into count tables.
	///
	/// Assumes filtering already happened upstream; no token is inspected
	/// here, only counted.
	///
	/// # Errors
	/// Propagates the first read error of the underlying stream.
	pub(crate) fn from_sentences<I>(corpus: I) -> Result<Self, ModelError>
	where
		I: IntoIterator<Item = Result<Vec<String>, ModelError>>,
	{
		let mut tables = Self::default();

		for sentence in corpus {
			let sentence = sentence?;

			for unigram in ngrams::extract(&sentence, 1)? {
				tables.unigrams.record(unigram);
			}
			for bigram in ngrams::extract(&sentence, 2)? {
				tables.bigrams.record(bigram);
			}
			for trigram in ngrams::extract(&sentence, 3)? {
				tables.trigrams.record(trigram);
			}

			tables.sentence_count += 1;
		}

		Ok(tables)
	}
}
