//! This crate provides [`NumericRange`], a small closed range type with
//! inclusive and exclusive containment checks, and [`IntegralExt`], a set
//! of range-aware extension methods for the primitive integer types.
//!
//! ## Example using a range directly
//!
//! ```rust
//! use integral_range::ByteRange;
//! use integral_range::EndpointExclusivity::{Exclusive, Inclusive};
//!
//! let range = ByteRange::new(10, 20).unwrap();
//!
//! assert_eq!(range.is_within(10, Inclusive), true);
//! assert_eq!(range.is_within(10, Exclusive), false);
//! assert_eq!(range.constrain(5), 10);
//! assert_eq!(range.constrain(25), 20);
//! ```
//!
//! ## Example using the extension methods
//!
//! ```rust
//! use integral_range::{
//! 	EndpointExclusivity, IntegralExt, NumericRange, RangeError,
//! };
//!
//! fn brightness_to_duty_cycle(brightness: u16) -> Result<u16, RangeError> {
//! 	let brightness_range = NumericRange::new(0, 1000)?;
//! 	let duty_cycle_range = NumericRange::new(0, 4095)?;
//!
//! 	brightness.ensure_within(
//! 		brightness_range,
//! 		"brightness",
//! 		EndpointExclusivity::Inclusive,
//! 	)?;
//!
//! 	brightness.linear_map(brightness_range, duty_cycle_range)
//! }
//!
//! assert_eq!(brightness_to_duty_cycle(0), Ok(0));
//! assert_eq!(brightness_to_duty_cycle(500), Ok(2047));
//! assert_eq!(brightness_to_duty_cycle(1000), Ok(4095));
//! assert!(brightness_to_duty_cycle(1001).is_err());
//! ```
//!
//! ## Key Understandings and Philosophies:
//!
//! ### Valid Ranges
//!
//! A [`NumericRange`] is only ever valid: its minimum is always less than
//! or equal to its maximum. Constructing one the wrong way round returns
//! [`RangeError::InvalidArgument`] rather than silently swapping the
//! bounds. A range whose minimum equals its maximum is "degenerate", it
//! contains exactly one value.
//!
//! | range          | valid |
//! | -------------- | ----- |
//! | `[0, 0]`       | YES   |
//! | `[0, 1]`       | YES   |
//! | `[9, 8]`       | NO    |
//! | `[0.0, NaN]`   | NO    |
//!
//! ### Exclusivity
//!
//! Ranges themselves are always closed, the bounds are stored as the
//! smallest and largest values. Whether a containment check counts the
//! bounds as within is chosen per call with an [`EndpointExclusivity`].
//! [`NumericRange::constrain()`] has no such choice, clamping is always
//! inclusive.
//!
//! ### Errors
//!
//! Every fallible operation returns a [`RangeError`] naming the offending
//! parameter. Nothing in this crate panics on bad input.
//!
//! ### Enumerations
//!
//! The [`enumeration!`] macro declares fieldless enums whose variants can
//! be listed with [`values()`] or turned into a discriminant-to-name map
//! with [`to_dictionary()`]. [`EndpointExclusivity`] is itself declared
//! this way.
//!
//! # Similar Crates
//!
//! - <https://docs.rs/num-traits>
//!   Provides the numeric traits that most generic numeric code builds on,
//!   including `clamp`.
//! - <https://docs.rs/nodit>
//!   Discrete interval tree data-structures for storing many
//!   non-overlapping intervals.
//! - <https://docs.rs/ranges>
//!   Fully-generic ranges and a `Ranges` datastructure for storing them.

#![allow(clippy::tabs_in_doc_comments)]

#[cfg(test)]
pub(crate) mod test_ranges;

pub mod enumeration;
pub mod error;
pub mod exclusivity;
pub mod ext;
pub mod integral;
pub mod range;

pub use crate::enumeration::{to_dictionary, values, Enumeration};
pub use crate::error::RangeError;
pub use crate::exclusivity::EndpointExclusivity;
pub use crate::ext::IntegralExt;
pub use crate::integral::Integral;
pub use crate::range::{ByteRange, NumericRange, SByteRange};

#[doc = include_str!("../README.md")]
#[cfg(doctest)]
pub struct ReadmeDoctests;
