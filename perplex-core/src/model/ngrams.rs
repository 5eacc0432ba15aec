use crate::error::ModelError;

/// Padding token prepended (n-1 times) in front of every sentence.
pub const START: &str = "START";

/// End-of-sequence marker appended exactly once behind every sentence,
/// whatever the order.
pub const STOP: &str = "STOP";

/// A fixed-length ordered run of tokens.
pub type NGram = Vec<String>;

/// Extracts the ordered n-grams of a tokenized sentence.
///
/// The sentence is padded with `n - 1` copies of [`START`] in front and a
/// single [`STOP`] behind, then a window of width `n` slides across the
/// padded sequence. A sentence of `k` tokens always yields `k + 1` n-grams:
/// the padded sequence has `k + n` elements, hence `k + 1` window positions.
///
/// The input must not contain sentinels; they are injected here and nowhere
/// else.
///
/// # Errors
/// Returns [`ModelError::InvalidOrder`] if `n` is 0.
pub fn extract(tokens: &[String], n: usize) -> Result<Vec<NGram>, ModelError> {
	if n == 0 {
		return Err(ModelError::InvalidOrder(n));
	}

	let mut padded: Vec<String> = Vec::with_capacity(tokens.len() + n);
	for _ in 0..n - 1 {
		padded.push(START.to_owned());
	}
	padded.extend(tokens.iter().cloned());
	padded.push(STOP.to_owned());

	Ok(padded.windows(n).map(<[String]>::to_vec).collect())
}

/// Order-3 extraction for the scoring path.
pub(crate) fn trigrams(tokens: &[String]) -> Vec<NGram> {
	// Cannot fail, the order is fixed at 3
	extract(tokens, 3).unwrap()
}
