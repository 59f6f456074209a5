//! Top-level module for placeholder text generation.
//!
//! This module provides:
//! - The static vocabularies and the opening phrase (`vocabulary`)
//! - Shape parameters for sentences and paragraphs (`GeneratorConfig`)
//! - A high-level generation interface (`Generator`)

/// High-level interface producing words, sentences, paragraphs
/// and shopping lists.
///
/// Every operation can draw from the thread-local RNG or from an
/// injected `rand::Rng`.
pub mod generator;

/// Sentence and paragraph length ranges.
pub mod generator_config;

/// Fixed word lists and the opening phrase.
///
/// Loaded once as `static` data and shared read-only.
pub mod vocabulary;
