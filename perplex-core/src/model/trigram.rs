use std::path::Path;

use log::info;

use crate::corpus;
use crate::error::ModelError;
use super::counts::NGramCounts;
use super::lexicon::Lexicon;
use super::ngrams::{self, START};

/// Interpolation weight shared by the three estimators. Fixed, not learned.
const LAMBDA: f64 = 1.0 / 3.0;

/// Trigram language model trained on a single corpus file.
///
/// # Responsibilities
/// - Build the lexicon and the n-gram count tables from the corpus
/// - Estimate raw unigram/bigram/trigram conditional probabilities
/// - Smooth them by fixed-weight linear interpolation
/// - Score sentences (log-probability) and corpora (perplexity)
///
/// # Invariants
/// - `total_words` is strictly positive (enforced at construction)
/// - Every probability returned is in (0, 1], so every log-probability
///   is finite
/// - State is never mutated after construction
#[derive(Debug)]
pub struct TrigramModel {
	lexicon: Lexicon,
	counts: NGramCounts,
	total_words: usize,
}

impl TrigramModel {
	/// Trains a model from a corpus file, one sentence per line.
	///
	/// Performs three full passes over the file, in order: derive the
	/// lexicon from raw token frequencies, count n-grams over the
	/// lexicon-filtered corpus, tally the raw word total used as the
	/// unigram denominator. Each pass reopens the file and releases it
	/// when done.
	///
	/// # Errors
	/// - [`ModelError::Io`] if the file cannot be opened or read
	/// - [`ModelError::EmptyCorpus`] if the file holds no tokens at all
	pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ModelError> {
		let path = path.as_ref();

		let lexicon = Lexicon::build(corpus::sentences(path)?)?;

		let counts = NGramCounts::from_sentences(corpus::filtered_sentences(path, &lexicon)?)?;

		// Raw total, not lexicon-filtered and without sentinels
		let mut total_words = 0;
		for sentence in corpus::sentences(path)? {
			total_words += sentence?.len();
		}
		if total_words == 0 {
			return Err(ModelError::EmptyCorpus(path.to_owned()));
		}

		info!(
			"trained on {}: {} sentences, {} words, lexicon size {}, {} distinct trigrams",
			path.display(),
			counts.sentence_count,
			total_words,
			lexicon.len(),
			counts.trigrams.distinct(),
		);

		Ok(Self { lexicon, counts, total_words })
	}

	/// The vocabulary this model was trained with.
	///
	/// Test documents must be filtered through this lexicon before they
	/// are scored under this model.
	pub fn lexicon(&self) -> &Lexicon {
		&self.lexicon
	}

	/// Uniform share over the lexicon plus one slot for the unseen,
	/// returned whenever a context makes the maximum-likelihood estimate
	/// zero or undefined.
	fn uniform_fallback(&self) -> f64 {
		1.0 / (self.lexicon.len() + 1) as f64
	}

	/// Raw unigram probability `count(w) / total_words`.
	///
	/// A never-observed unigram gets the floor `1 / total_words` instead
	/// of zero.
	pub fn raw_unigram_probability(&self, unigram: &[String]) -> f64 {
		let numerator = self.counts.unigrams.count(unigram);
		if numerator == 0 {
			return 1.0 / self.total_words as f64;
		}
		numerator as f64 / self.total_words as f64
	}

	/// Raw conditional bigram probability `count(w1 w2) / count(w1)`.
	///
	/// The start sentinel precedes every sentence exactly once and is not
	/// tracked as an ordinary unigram, so a `(START, w)` bigram divides by
	/// the sentence count instead. A zero numerator or denominator falls
	/// back to the uniform share.
	pub fn raw_bigram_probability(&self, bigram: &[String]) -> f64 {
		let numerator = self.counts.bigrams.count(bigram);

		let denominator = if bigram[0] == START {
			self.counts.sentence_count
		} else {
			self.counts.unigrams.count(&bigram[..1])
		};

		if numerator == 0 || denominator == 0 {
			return self.uniform_fallback();
		}
		numerator as f64 / denominator as f64
	}

	/// Raw conditional trigram probability
	/// `count(w1 w2 w3) / count(w1 w2)`.
	///
	/// A `(START, START, w)` trigram divides by the sentence count, for
	/// the same reason as the bigram special case. A zero numerator or
	/// denominator falls back to the uniform share.
	pub fn raw_trigram_probability(&self, trigram: &[String]) -> f64 {
		let numerator = self.counts.trigrams.count(trigram);

		let denominator = if trigram[0] == START && trigram[1] == START {
			self.counts.sentence_count
		} else {
			self.counts.bigrams.count(&trigram[..2])
		};

		if numerator == 0 || denominator == 0 {
			return self.uniform_fallback();
		}
		numerator as f64 / denominator as f64
	}

	/// Smoothed trigram probability by linear interpolation of the three
	/// raw estimators, one third each.
	///
	/// Strictly positive for every possible trigram, since each raw
	/// estimator is.
	pub fn smoothed_trigram_probability(&self, trigram: &[String]) -> f64 {
		LAMBDA * self.raw_unigram_probability(&trigram[2..])
			+ LAMBDA * self.raw_bigram_probability(&trigram[1..])
			+ LAMBDA * self.raw_trigram_probability(trigram)
	}

	/// Base-2 log-probability of a lexicon-filtered sentence: the sum of
	/// the smoothed log-probabilities of its trigrams.
	///
	/// Always finite, typically negative.
	pub fn sentence_logprob(&self, sentence: &[String]) -> f64 {
		ngrams::trigrams(sentence)
			.iter()
			.map(|trigram| self.smoothed_trigram_probability(trigram).log2())
			.sum()
	}

	/// Perplexity of a corpus under this model: `2^(-l / M)` where `l` is
	/// the summed sentence log-probability and `M` the total pre-sentinel
	/// token count.
	///
	/// Consumes the stream in a single forward pass, holding only the two
	/// running sums. The sentences must already be filtered through this
	/// model's lexicon. An empty stream yields infinity.
	///
	/// # Errors
	/// Propagates the first read error of the underlying stream.
	pub fn perplexity<I>(&self, corpus: I) -> Result<f64, ModelError>
	where
		I: IntoIterator<Item = Result<Vec<String>, ModelError>>,
	{
		let mut logprob_sum = 0.0;
		let mut token_count = 0;

		for sentence in corpus {
			let sentence = sentence?;
			logprob_sum += self.sentence_logprob(&sentence);
			token_count += sentence.len();
		}

		if token_count == 0 {
			return Ok(f64::INFINITY);
		}
		Ok((-logprob_sum / token_count as f64).exp2())
	}
}
