//! Trigram language modeling and perplexity scoring library.
//!
//! This crate provides a word-level trigram model system including:
//! - Streaming corpus readers with lexicon filtering
//! - N-gram extraction with sentence boundary sentinels
//! - Smoothed trigram probability estimation
//! - Log-probability and perplexity scoring of held-out text
//!
//! A model is trained from one corpus file and is read-only afterwards;
//! comparative classification builds one model per corpus and compares
//! their perplexities on the same documents.

/// Streaming corpus access (tokenized sentences, test-file listing).
///
/// Streams are lazy and single-pass; reopen the file to restart, which is
/// how training performs its three ordered passes.
pub mod corpus;

/// Error taxonomy shared by training, reading and scoring.
pub mod error;

/// Core model: lexicon, n-gram extraction, counting and estimation.
///
/// This module exposes the model interface while keeping the count-table
/// representation private.
pub mod model;
