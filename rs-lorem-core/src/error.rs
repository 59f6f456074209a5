use thiserror::Error;

/// Largest count any single call accepts.
///
/// Output grows linearly with the count, so larger requests are refused
/// rather than left to exhaust memory.
pub const MAX_COUNT: usize = 1_000_000;

/// Errors returned by the generation API.
///
/// Generation is all-or-nothing: a call either returns the complete text
/// or one of these errors, never a partial result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoremError {
	/// A count parameter was negative.
	#[error("{name} must be >= 0, got {value}")]
	InvalidArgument {
		/// Name of the offending parameter.
		name: &'static str,
		/// The rejected value.
		value: i64,
	},

	/// A count parameter exceeded [`MAX_COUNT`].
	#[error("{name} must be <= {max}, got {value}")]
	CountTooLarge {
		/// Name of the offending parameter.
		name: &'static str,
		/// The rejected value.
		value: i64,
		/// The accepted maximum.
		max: usize,
	},

	/// A shape range is empty, allows zero elements or exceeds [`MAX_COUNT`].
	#[error("{name} must satisfy 1 <= min <= max <= {}, got {min}..={max}", MAX_COUNT)]
	InvalidRange {
		/// Name of the offending range.
		name: &'static str,
		min: usize,
		max: usize,
	},
}

impl LoremError {
	/// Converts a signed count into a `usize`.
	///
	/// Negative values are invalid arguments; values above [`MAX_COUNT`]
	/// (or above `usize::MAX` on narrow targets) are too large.
	pub(crate) fn check_count(name: &'static str, value: i64) -> Result<usize, Self> {
		if value < 0 {
			return Err(Self::InvalidArgument { name, value });
		}
		usize::try_from(value)
			.ok()
			.filter(|count| *count <= MAX_COUNT)
			.ok_or(Self::CountTooLarge { name, value, max: MAX_COUNT })
	}
}
