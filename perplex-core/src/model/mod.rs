//! Top-level module for the trigram language model.
//!
//! This module provides the estimation pipeline, including:
//! - Sentinel tokens and n-gram extraction (`ngrams`)
//! - The training vocabulary with unknown-word collapsing (`Lexicon`)
//! - Internal frequency tables (`NGramCounts`)
//! - The trained model with smoothing and scoring (`TrigramModel`)

/// Vocabulary derived from a first pass over the training corpus.
///
/// Words seen only once collapse into the unknown token; the sentinels
/// are always members.
pub mod lexicon;

/// N-gram extraction over padded sentences.
///
/// Defines the sentinel constants and the sliding-window extractor used
/// by both training and scoring.
pub mod ngrams;

/// Internal frequency tables for the three n-gram orders.
///
/// Accumulated in one fold over the corpus. This module is not exposed
/// publicly.
mod counts;

/// Trigram model trained on a single corpus file.
///
/// Exposes raw and smoothed probability estimation, sentence
/// log-probability and corpus perplexity.
pub mod trigram;
