use std::ops::Deref;

use rand::Rng;

/// Fixed opening sentence of the classic filler text.
///
/// Contains a comma, which no generated sentence can, so random output
/// never accidentally starts with it.
pub const LOREM_IPSUM: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit.";

/// Header line of a shopping list.
pub const SHOPPING_LIST_HEADER: &str = "Shopping List:";

/// A word list that is never empty.
///
/// Built by [`Lexicon::new`], which is `const`: a `static` lexicon with no
/// entries fails at compile time, so [`Lexicon::pick`] always has something
/// to return.
#[derive(Debug, Clone, Copy)]
pub struct Lexicon(&'static [&'static str]);

impl Lexicon {
	/// Wraps `words`.
	///
	/// # Panics
	/// Panics if `words` is empty (at compile time in a `static`).
	pub const fn new(words: &'static [&'static str]) -> Self {
		assert!(!words.is_empty(), "a lexicon needs at least one word");
		Self(words)
	}

	/// Returns the underlying entries.
	pub fn words(&self) -> &'static [&'static str] {
		self.0
	}

	/// Draws one entry uniformly.
	pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> &'static str {
		self.0[rng.random_range(0..self.0.len())]
	}
}

impl Deref for Lexicon {
	type Target = [&'static str];

	fn deref(&self) -> &Self::Target {
		self.0
	}
}

/// The lorem ipsum lexicon.
///
/// # Invariants
/// - Non-empty
/// - Entries are distinct, lowercase and free of punctuation
pub static LOREM_WORDS: Lexicon = Lexicon::new(&[
	"lorem", "ipsum", "dolor", "sit", "amet", "consectetur", "adipiscing", "elit",
	"sed", "do", "eiusmod", "tempor", "incididunt", "ut", "labore", "et",
	"dolore", "magna", "aliqua", "enim", "ad", "minim", "veniam", "quis",
	"nostrud", "exercitation", "ullamco", "laboris", "nisi", "aliquip", "ex", "ea",
	"commodo", "consequat", "duis", "aute", "irure", "in", "reprehenderit", "voluptate",
	"velit", "esse", "cillum", "eu", "fugiat", "nulla", "pariatur", "excepteur",
	"sint", "occaecat", "cupidatat", "non", "proident", "sunt", "culpa", "qui",
	"officia", "deserunt", "mollit", "anim", "id", "est", "laborum", "curabitur",
	"pretium", "tincidunt", "lacus", "gravida", "orci", "vitae", "facilisis", "blandit",
	"mauris", "viverra", "diam", "vivamus", "integer", "porttitor", "augue", "fringilla",
	"nunc", "pellentesque", "habitant", "morbi", "tristique", "senectus", "netus", "malesuada",
	"fames", "ac", "turpis", "egestas", "maecenas", "pharetra", "convallis", "posuere",
	"quam", "volutpat", "sapien", "faucibus", "ornare", "suspendisse", "potenti", "nullam",
	"feugiat", "rhoncus", "urna", "neque", "mattis", "vulputate", "odio", "euismod",
]);

/// Grocery and household items used by shopping lists.
///
/// Same invariants as [`LOREM_WORDS`], and no overlap with it.
pub static SHOPPING_ITEMS: Lexicon = Lexicon::new(&[
	"apples", "bananas", "bread", "butter", "milk", "eggs", "cheese", "yogurt",
	"rice", "pasta", "flour", "sugar", "salt", "pepper", "coffee", "tea",
	"tomatoes", "potatoes", "onions", "garlic", "carrots", "lettuce", "spinach", "cucumbers",
	"chicken", "beef", "salmon", "tofu", "beans", "lentils", "cereal", "honey",
	"jam", "olive oil", "vinegar", "soap", "shampoo", "toothpaste", "paper towels", "dish sponges",
	"laundry detergent", "trash bags", "batteries", "light bulbs", "aluminum foil", "napkins",
]);

/// Uppercases the first character of `word`.
///
/// UTF-8 safe: works on characters, not bytes.
pub(crate) fn capitalize(word: &str) -> String {
	let mut chars = word.chars();
	match chars.next() {
		Some(first) => first.to_uppercase().chain(chars).collect(),
		None => String::new(),
	}
}
