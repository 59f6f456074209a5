use log::debug;
use rand::Rng;

use crate::error::LoremError;
use crate::model::generator_config::GeneratorConfig;
use crate::model::vocabulary::{
	LOREM_IPSUM, LOREM_WORDS, Lexicon, SHOPPING_ITEMS, SHOPPING_LIST_HEADER, capitalize,
};

/// Trailer appended to every paragraphs output: an empty line, a line
/// holding a single space, then the final newline.
pub const PARAGRAPHS_FOOTER: &str = "\n\n \n";

/// High-level placeholder text generator.
///
/// # Responsibilities
/// - Draw words uniformly (with replacement) from a static vocabulary
/// - Compose sentences and paragraphs shaped by a `GeneratorConfig`
/// - Format paragraph blocks and shopping lists with a fixed line layout
///
/// The generator holds no mutable state. Every operation comes in two
/// forms: one drawing from the thread-local RNG, and a `*_with_rng` form
/// taking any `rand::Rng`, for reproducible output from a seeded source.
#[derive(Debug, Clone, Copy)]
pub struct Generator {
	words: &'static Lexicon,
	items: &'static Lexicon,
	opening: &'static str,
	config: GeneratorConfig,
}

impl Default for Generator {
	fn default() -> Self {
		Self::new()
	}
}

impl Generator {
	/// Creates a generator over the built-in vocabularies with default shape.
	pub fn new() -> Self {
		Self::with_config(GeneratorConfig::default())
	}

	/// Creates a generator with custom sentence and paragraph ranges.
	pub fn with_config(config: GeneratorConfig) -> Self {
		Self {
			words: &LOREM_WORDS,
			items: &SHOPPING_ITEMS,
			opening: LOREM_IPSUM,
			config,
		}
	}

	/// Returns the active shape parameters.
	pub fn config(&self) -> &GeneratorConfig {
		&self.config
	}

	/// Returns the fixed opening phrase.
	pub fn opening_phrase(&self) -> &'static str {
		self.opening
	}

	/// Generates `count` space-separated words.
	///
	/// # Errors
	/// Returns [`LoremError::InvalidArgument`] if `count` is negative, and
	/// [`LoremError::CountTooLarge`] if it exceeds [`MAX_COUNT`](crate::error::MAX_COUNT).
	pub fn words(&self, count: i64) -> Result<String, LoremError> {
		self.words_with_rng(count, &mut rand::rng())
	}

	/// Same as [`Generator::words`], drawing from `rng`.
	///
	/// # Behavior
	/// - Words are drawn independently, so repeats are possible.
	/// - No capitalization, no punctuation.
	/// - `count == 0` yields an empty string.
	pub fn words_with_rng<R: Rng + ?Sized>(&self, count: i64, rng: &mut R) -> Result<String, LoremError> {
		let count = LoremError::check_count("count", count)?;
		debug!("generating {count} words");
		Ok(self.random_words(count, rng).join(" "))
	}

	/// Generates a single sentence.
	pub fn sentence(&self) -> String {
		self.sentence_with_rng(&mut rand::rng())
	}

	/// Same as [`Generator::sentence`], drawing from `rng`.
	///
	/// The word count is drawn from `config.sentence_words()`, the first
	/// word is capitalized and the sentence ends with a period.
	pub fn sentence_with_rng<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
		let count = rng.random_range(self.config.sentence_words());
		let words = self.random_words(count, rng);

		let mut sentence = String::new();
		for (i, word) in words.iter().enumerate() {
			if i == 0 {
				sentence.push_str(&capitalize(word));
			} else {
				sentence.push(' ');
				sentence.push_str(word);
			}
		}
		sentence.push('.');
		sentence
	}

	/// Generates `count` paragraphs.
	///
	/// # Errors
	/// Returns [`LoremError::InvalidArgument`] if `count` is negative, and
	/// [`LoremError::CountTooLarge`] if it exceeds [`MAX_COUNT`](crate::error::MAX_COUNT).
	pub fn paragraphs(&self, count: i64, start_with_lorem_ipsum: bool) -> Result<String, LoremError> {
		self.paragraphs_with_rng(count, start_with_lorem_ipsum, &mut rand::rng())
	}

	/// Same as [`Generator::paragraphs`], drawing from `rng`.
	///
	/// # Layout
	/// - One line per paragraph, followed by [`PARAGRAPHS_FOOTER`]
	/// - Splitting on `'\n'` gives `count + 3` segments
	/// - With `count == 0` a single header line stands in for the block,
	///   so the output still has 4 segments
	///
	/// # Behavior
	/// - If `start_with_lorem_ipsum` is set, the first sentence of the first
	///   paragraph (or the header line when `count == 0`) is the opening phrase.
	/// - Otherwise the output never starts with the opening phrase.
	pub fn paragraphs_with_rng<R: Rng + ?Sized>(
		&self,
		count: i64,
		start_with_lorem_ipsum: bool,
		rng: &mut R,
	) -> Result<String, LoremError> {
		let count = LoremError::check_count("count", count)?;
		debug!("generating {count} paragraphs (start_with_lorem_ipsum: {start_with_lorem_ipsum})");

		let lines: Vec<String> = if count == 0 {
			let header = if start_with_lorem_ipsum { self.opening } else { "" };
			vec![header.to_owned()]
		} else {
			(0..count)
				.map(|i| {
					let opening = (start_with_lorem_ipsum && i == 0).then_some(self.opening);
					self.paragraph(opening, rng)
				})
				.collect()
		};

		let mut text = lines.join("\n");
		text.push_str(PARAGRAPHS_FOOTER);
		Ok(text)
	}

	/// Generates a shopping list of `items_count` items.
	///
	/// # Errors
	/// Returns [`LoremError::InvalidArgument`] if `items_count` is negative, and
	/// [`LoremError::CountTooLarge`] if it exceeds [`MAX_COUNT`](crate::error::MAX_COUNT).
	pub fn shopping_list(&self, items_count: i64) -> Result<String, LoremError> {
		self.shopping_list_with_rng(items_count, &mut rand::rng())
	}

	/// Same as [`Generator::shopping_list`], drawing from `rng`.
	///
	/// The header line is followed by one item per line. Items are drawn
	/// with replacement and there is no trailing newline, so splitting on
	/// `'\n'` gives `items_count + 1` segments.
	pub fn shopping_list_with_rng<R: Rng + ?Sized>(&self, items_count: i64, rng: &mut R) -> Result<String, LoremError> {
		let items_count = LoremError::check_count("items_count", items_count)?;
		debug!("generating shopping list of {items_count} items");

		let lines: Vec<&str> = std::iter::once(SHOPPING_LIST_HEADER)
			.chain((0..items_count).map(|_| self.items.pick(rng)))
			.collect();
		Ok(lines.join("\n"))
	}

	/// Builds one paragraph line.
	///
	/// If `opening` is given it replaces the first sentence; the total
	/// sentence count is still drawn from `config.paragraph_sentences()`.
	fn paragraph<R: Rng + ?Sized>(&self, opening: Option<&str>, rng: &mut R) -> String {
		let count = rng.random_range(self.config.paragraph_sentences());

		let mut sentences: Vec<String> = opening.map(str::to_owned).into_iter().collect();
		while sentences.len() < count {
			sentences.push(self.sentence_with_rng(rng));
		}
		sentences.join(" ")
	}

	fn random_words<R: Rng + ?Sized>(&self, count: usize, rng: &mut R) -> Vec<&'static str> {
		(0..count).map(|_| self.words.pick(rng)).collect()
	}
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;
	use rand::rngs::StdRng;
	use rstest::{fixture, rstest};

	use super::*;
	use crate::error::MAX_COUNT;

	#[fixture]
	fn generator() -> Generator {
		Generator::new()
	}

	#[fixture]
	fn rng() -> StdRng {
		StdRng::seed_from_u64(42)
	}

	/// Splits a paragraphs output into its paragraph lines (footer removed).
	fn paragraph_lines(text: &str) -> Vec<&str> {
		text.strip_suffix(PARAGRAPHS_FOOTER)
			.expect("footer present")
			.split('\n')
			.collect()
	}

	/// Counts sentences in a paragraph line built from generated sentences.
	fn sentence_count(paragraph: &str) -> usize {
		paragraph.matches('.').count()
	}

	#[test]
	fn generator_is_shareable_across_threads() {
		fn assert_send_sync<T: Send + Sync>() {}
		assert_send_sync::<Generator>();
	}

	#[rstest]
	fn words_are_drawn_from_vocabulary(generator: Generator, mut rng: StdRng) {
		let text = generator.words_with_rng(200, &mut rng).expect("valid count");
		assert!(text.split(' ').all(|w| LOREM_WORDS.contains(&w)));
	}

	#[rstest]
	fn words_are_space_separated_without_punctuation(generator: Generator, mut rng: StdRng) {
		let text = generator.words_with_rng(25, &mut rng).expect("valid count");
		assert!(!text.starts_with(' ') && !text.ends_with(' '));
		assert!(!text.contains("  "));
		assert!(text.chars().all(|c| c.is_ascii_lowercase() || c == ' '));
	}

	#[rstest]
	fn sentence_shape(generator: Generator, mut rng: StdRng) {
		for _ in 0..200 {
			let sentence = generator.sentence_with_rng(&mut rng);
			assert!(sentence.ends_with('.'));
			assert!(sentence.chars().next().is_some_and(char::is_uppercase));

			let words = sentence.split(' ').count();
			assert!(generator.config().sentence_words().contains(&words), "{words} words in {sentence:?}");
		}
	}

	#[rstest]
	fn sentence_rest_is_lowercase(generator: Generator, mut rng: StdRng) {
		let sentence = generator.sentence_with_rng(&mut rng);
		let rest: String = sentence.chars().skip(1).collect();
		assert!(rest.chars().all(|c| c.is_ascii_lowercase() || c == ' ' || c == '.'));
	}

	#[rstest]
	fn paragraph_sentence_count_is_in_range(generator: Generator, mut rng: StdRng) {
		let text = generator.paragraphs_with_rng(50, false, &mut rng).expect("valid count");
		for line in paragraph_lines(&text) {
			let count = sentence_count(line);
			assert!(generator.config().paragraph_sentences().contains(&count), "{count} sentences");
		}
	}

	#[rstest]
	fn opening_phrase_counts_as_first_sentence(generator: Generator, mut rng: StdRng) {
		for _ in 0..50 {
			let text = generator.paragraphs_with_rng(1, true, &mut rng).expect("valid count");
			let first = paragraph_lines(&text)[0];
			assert!(first.starts_with(LOREM_IPSUM));
			assert!(generator.config().paragraph_sentences().contains(&sentence_count(first)));
		}
	}

	#[rstest]
	fn opening_phrase_only_in_first_paragraph(generator: Generator, mut rng: StdRng) {
		let text = generator.paragraphs_with_rng(5, true, &mut rng).expect("valid count");
		let lines = paragraph_lines(&text);
		assert_eq!(lines.len(), 5);
		assert!(lines[1..].iter().all(|line| !line.contains(LOREM_IPSUM)));
	}

	#[rstest]
	#[case(true, "Lorem ipsum dolor sit amet, consectetur adipiscing elit.\n\n \n")]
	#[case(false, "\n\n \n")]
	fn zero_paragraphs_scaffold(generator: Generator, mut rng: StdRng, #[case] start: bool, #[case] expected: &str) {
		let text = generator.paragraphs_with_rng(0, start, &mut rng).expect("valid count");
		assert_eq!(text, expected);
	}

	#[rstest]
	fn custom_config_shapes_output(mut rng: StdRng) {
		let config = GeneratorConfig::new(2..=2, 1..=1).expect("valid ranges");
		let generator = Generator::with_config(config);

		let text = generator.paragraphs_with_rng(3, false, &mut rng).expect("valid count");
		for line in paragraph_lines(&text) {
			assert_eq!(sentence_count(line), 1);
			assert_eq!(line.split(' ').count(), 2);
		}
	}

	#[rstest]
	fn single_sentence_paragraph_is_just_the_opening(mut rng: StdRng) {
		let config = GeneratorConfig::new(4..=12, 1..=1).expect("valid ranges");
		let generator = Generator::with_config(config);

		let text = generator.paragraphs_with_rng(1, true, &mut rng).expect("valid count");
		assert_eq!(text, format!("{LOREM_IPSUM}{PARAGRAPHS_FOOTER}"));
	}

	#[rstest]
	fn shopping_list_items_come_from_items_vocabulary(generator: Generator, mut rng: StdRng) {
		let text = generator.shopping_list_with_rng(30, &mut rng).expect("valid count");
		let mut lines = text.split('\n');
		assert_eq!(lines.next(), Some(SHOPPING_LIST_HEADER));
		assert!(lines.all(|item| SHOPPING_ITEMS.contains(&item)));
	}

	#[rstest]
	fn shopping_list_has_no_trailing_newline(generator: Generator, mut rng: StdRng) {
		let text = generator.shopping_list_with_rng(3, &mut rng).expect("valid count");
		assert!(!text.ends_with('\n'));
	}

	#[rstest]
	fn empty_shopping_list_is_header_only(generator: Generator, mut rng: StdRng) {
		let text = generator.shopping_list_with_rng(0, &mut rng).expect("valid count");
		assert_eq!(text, SHOPPING_LIST_HEADER);
	}

	#[rstest]
	fn negative_count_names_the_parameter(generator: Generator) {
		assert_eq!(
			generator.shopping_list(-2),
			Err(LoremError::InvalidArgument { name: "items_count", value: -2 })
		);
		assert_eq!(generator.words(-1), Err(LoremError::InvalidArgument { name: "count", value: -1 }));
	}

	#[rstest]
	#[case(i64::MAX)]
	#[case(10_000_000_000)]
	#[case(MAX_COUNT as i64 + 1)]
	fn oversized_counts_are_rejected_without_allocating(generator: Generator, #[case] count: i64) {
		let too_large = Err(LoremError::CountTooLarge { name: "count", value: count, max: MAX_COUNT });
		assert_eq!(generator.words(count), too_large);
		assert_eq!(generator.paragraphs(count, true), too_large);
		assert_eq!(
			generator.shopping_list(count),
			Err(LoremError::CountTooLarge { name: "items_count", value: count, max: MAX_COUNT })
		);
	}

	#[rstest]
	fn largest_accepted_count_yields_every_draw(generator: Generator, mut rng: StdRng) {
		let words = generator.words_with_rng(MAX_COUNT as i64, &mut rng).expect("count at the limit");
		assert_eq!(words.split(' ').count(), MAX_COUNT);

		let list = generator.shopping_list_with_rng(MAX_COUNT as i64, &mut rng).expect("count at the limit");
		assert_eq!(list.split('\n').count(), MAX_COUNT + 1);
	}
}
