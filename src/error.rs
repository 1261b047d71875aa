//! A module containing [`RangeError`], the error returned by every
//! fallible operation in this crate.

use derive_more::{Display, Error};

/// The reason a range operation failed.
///
/// Both variants name the offending parameter so the message reads
/// sensibly when bubbled straight up to a user.
#[derive(Debug, Display, Clone, PartialEq, Eq, Error)]
pub enum RangeError {
	/// A range or argument was not valid to begin with, such as a range
	/// whose minimum is greater than its maximum.
	#[display(fmt = "invalid argument '{}': {}", parameter, reason)]
	InvalidArgument {
		/// The name of the offending parameter.
		parameter: String,
		/// A description of what was wrong with it.
		reason: String,
	},
	/// A value fell outside of the interval it was required to be in, or
	/// inside an interval it was required to avoid.
	#[display(fmt = "argument '{}' is out of range: {}", parameter, reason)]
	OutOfRange {
		/// The name of the offending parameter.
		parameter: String,
		/// A description of the violated bounds.
		reason: String,
	},
}

impl RangeError {
	pub(crate) fn invalid_argument(
		parameter: &str,
		reason: impl ToString,
	) -> Self {
		RangeError::InvalidArgument {
			parameter: parameter.to_string(),
			reason: reason.to_string(),
		}
	}

	pub(crate) fn out_of_range(parameter: &str, reason: impl ToString) -> Self {
		RangeError::OutOfRange {
			parameter: parameter.to_string(),
			reason: reason.to_string(),
		}
	}

	/// The name of the parameter that caused the error.
	pub fn parameter(&self) -> &str {
		match self {
			RangeError::InvalidArgument { parameter, .. } => parameter,
			RangeError::OutOfRange { parameter, .. } => parameter,
		}
	}
}
