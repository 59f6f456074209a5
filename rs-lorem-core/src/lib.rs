//! Lorem ipsum placeholder text generation library.
//!
//! This crate provides:
//! - Random word sequences drawn from a fixed lorem ipsum lexicon
//! - Sentences and paragraphs with capitalization and punctuation
//! - Paragraph blocks and shopping lists with a fixed line layout
//! - Seedable generation through any `rand::Rng`
//!
//! ```
//! use rs_lorem_core::model::generator::Generator;
//!
//! let generator = Generator::new();
//! let text = generator.paragraphs(2, true)?;
//! assert!(text.starts_with("Lorem ipsum"));
//! assert!(text.ends_with("\n \n"));
//! # Ok::<(), rs_lorem_core::error::LoremError>(())
//! ```

/// Generator, vocabularies and generation settings.
pub mod model;

/// Error type shared by all generation operations.
pub mod error;

pub use error::{LoremError, MAX_COUNT};
pub use model::generator::Generator;
pub use model::generator_config::GeneratorConfig;
