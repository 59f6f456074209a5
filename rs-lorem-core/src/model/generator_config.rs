use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::error::{LoremError, MAX_COUNT};

/// Default number of words per sentence (inclusive bounds).
pub const DEFAULT_SENTENCE_WORDS: (usize, usize) = (4, 12);

/// Default number of sentences per paragraph (inclusive bounds).
pub const DEFAULT_PARAGRAPH_SENTENCES: (usize, usize) = (3, 7);

/// Shape parameters used by the generator.
///
/// Controls how long sentences and paragraphs are. Neither range affects
/// the line layout of the output, only the length of each line.
///
/// # Invariants
/// - Both ranges satisfy `1 <= min <= max <= MAX_COUNT`
///
/// Setters validate their input and leave the config untouched on error.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(try_from = "RawGeneratorConfig")]
pub struct GeneratorConfig {
	/// Inclusive bounds on words per sentence.
	sentence_words: (usize, usize),

	/// Inclusive bounds on sentences per paragraph.
	paragraph_sentences: (usize, usize),
}

/// Unvalidated wire form of [`GeneratorConfig`].
#[derive(Deserialize)]
struct RawGeneratorConfig {
	sentence_words: (usize, usize),
	paragraph_sentences: (usize, usize),
}

impl TryFrom<RawGeneratorConfig> for GeneratorConfig {
	type Error = LoremError;

	fn try_from(raw: RawGeneratorConfig) -> Result<Self, Self::Error> {
		let (words_min, words_max) = raw.sentence_words;
		let (sentences_min, sentences_max) = raw.paragraph_sentences;
		Self::new(words_min..=words_max, sentences_min..=sentences_max)
	}
}

impl Default for GeneratorConfig {
	fn default() -> Self {
		Self {
			sentence_words: DEFAULT_SENTENCE_WORDS,
			paragraph_sentences: DEFAULT_PARAGRAPH_SENTENCES,
		}
	}
}

impl GeneratorConfig {
	/// Creates a config from explicit ranges.
	///
	/// # Errors
	/// Returns [`LoremError::InvalidRange`] if a range is empty, starts at 0
	/// or ends above [`MAX_COUNT`].
	pub fn new(
		sentence_words: RangeInclusive<usize>,
		paragraph_sentences: RangeInclusive<usize>,
	) -> Result<Self, LoremError> {
		let mut config = Self::default();
		config.set_sentence_words(*sentence_words.start(), *sentence_words.end())?;
		config.set_paragraph_sentences(*paragraph_sentences.start(), *paragraph_sentences.end())?;
		Ok(config)
	}

	/// Returns the words-per-sentence range.
	pub fn sentence_words(&self) -> RangeInclusive<usize> {
		self.sentence_words.0..=self.sentence_words.1
	}

	/// Returns the sentences-per-paragraph range.
	pub fn paragraph_sentences(&self) -> RangeInclusive<usize> {
		self.paragraph_sentences.0..=self.paragraph_sentences.1
	}

	/// Sets the words-per-sentence bounds.
	///
	/// # Errors
	/// Returns an error if `min == 0`, `min > max` or `max > MAX_COUNT`.
	pub fn set_sentence_words(&mut self, min: usize, max: usize) -> Result<(), LoremError> {
		self.sentence_words = Self::validate("sentence_words", min, max)?;
		Ok(())
	}

	/// Sets the sentences-per-paragraph bounds.
	///
	/// # Errors
	/// Returns an error if `min == 0`, `min > max` or `max > MAX_COUNT`.
	pub fn set_paragraph_sentences(&mut self, min: usize, max: usize) -> Result<(), LoremError> {
		self.paragraph_sentences = Self::validate("paragraph_sentences", min, max)?;
		Ok(())
	}

	fn validate(name: &'static str, min: usize, max: usize) -> Result<(usize, usize), LoremError> {
		if min == 0 || min > max || max > MAX_COUNT {
			return Err(LoremError::InvalidRange { name, min, max });
		}
		Ok((min, max))
	}
}
