//! A module containing [`IntegralExt`], the range-aware extension methods
//! for the primitive integer types.

use core::panic::Location;

use crate::integral::add_percent;
use crate::EndpointExclusivity::Inclusive;
use crate::{EndpointExclusivity, Integral, NumericRange, RangeError};

/// Extension methods for every [`Integral`] type.
///
/// A blanket implementation is provided for all [`Integral`] types so you
/// only need to bring this trait into scope to use them.
///
/// # Examples
/// ```
/// use integral_range::{ByteRange, IntegralExt};
///
/// let percent = 5_u8.linear_map(
/// 	ByteRange::new(0, 10).unwrap(),
/// 	ByteRange::new(0, 100).unwrap(),
/// );
/// assert_eq!(percent, Ok(50));
///
/// assert_eq!(200_u8.scale_down(50.0), Ok(100));
/// assert_eq!(200_u8.scale_up(50.0), Ok(255));
/// ```
pub trait IntegralExt: Integral {
	/// Returns the lesser of `self` and `other`.
	///
	/// # Examples
	/// ```
	/// use integral_range::IntegralExt;
	///
	/// assert_eq!(3_u8.smallest(9), 3);
	/// assert_eq!(9_u8.smallest(3), 3);
	/// ```
	fn smallest(self, other: Self) -> Self {
		if self < other {
			self
		} else {
			other
		}
	}

	/// Returns the greater of `self` and `other`.
	///
	/// # Examples
	/// ```
	/// use integral_range::IntegralExt;
	///
	/// assert_eq!(3_i8.largest(-9), 3);
	/// assert_eq!((-9_i8).largest(3), 3);
	/// ```
	fn largest(self, other: Self) -> Self {
		if self > other {
			self
		} else {
			other
		}
	}

	/// Re-maps `self` from its position within `start_range` to the
	/// corresponding position within `end_range`.
	///
	/// The arithmetic is exact and the division truncates, so the result
	/// is always within `end_range`. `start_range.minimum()` maps onto
	/// `end_range.minimum()` and `start_range.maximum()` onto
	/// `end_range.maximum()`.
	///
	/// # Errors
	///
	/// Returns [`RangeError::OutOfRange`] if `self` is not within
	/// `start_range` inclusively, and [`RangeError::InvalidArgument`] if
	/// `start_range` contains only one value as there is nothing to map
	/// from.
	///
	/// # Examples
	/// ```
	/// use integral_range::{IntegralExt, NumericRange, RangeError};
	///
	/// let celsius = NumericRange::new(0_i32, 100).unwrap();
	/// let fahrenheit = NumericRange::new(32_i32, 212).unwrap();
	///
	/// assert_eq!(0_i32.linear_map(celsius, fahrenheit), Ok(32));
	/// assert_eq!(37_i32.linear_map(celsius, fahrenheit), Ok(98));
	/// assert_eq!(100_i32.linear_map(celsius, fahrenheit), Ok(212));
	///
	/// assert!(matches!(
	/// 	101_i32.linear_map(celsius, fahrenheit),
	/// 	Err(RangeError::OutOfRange { .. })
	/// ));
	/// ```
	fn linear_map(
		self,
		start_range: NumericRange<Self>,
		end_range: NumericRange<Self>,
	) -> Result<Self, RangeError> {
		if start_range.is_not_within(self, Inclusive) {
			return Err(RangeError::out_of_range(
				"value",
				format_args!(
					"the value {self} must be within the start_range {start_range}, inclusively"
				),
			));
		}
		if start_range.is_degenerate() {
			return Err(RangeError::invalid_argument(
				"start_range",
				format_args!(
					"{start_range} must contain more than one value to map from"
				),
			));
		}

		// both factors are at most 2^64 - 1 so the product fits
		let scaled = start_range.offset_of(self) * end_range.span()
			/ start_range.span();

		Ok(Self::from_wide_saturating(
			end_range.minimum().to_wide() + scaled as i128,
		))
	}

	/// Returns `true` if `self` is within `range` under the given
	/// `exclusivity`.
	///
	/// See [`NumericRange::is_within()`].
	fn is_within(
		self,
		range: NumericRange<Self>,
		exclusivity: EndpointExclusivity,
	) -> bool {
		range.is_within(self, exclusivity)
	}

	/// The exact negation of [`IntegralExt::is_within()`].
	fn is_not_within(
		self,
		range: NumericRange<Self>,
		exclusivity: EndpointExclusivity,
	) -> bool {
		range.is_not_within(self, exclusivity)
	}

	/// A guard that `self`, passed in as the parameter `element_name`,
	/// is not within the forbidden `range`.
	///
	/// # Errors
	///
	/// Returns [`RangeError::OutOfRange`] naming `element_name` and the
	/// calling location if `self` is within `range`.
	///
	/// # Examples
	/// ```
	/// use integral_range::{ByteRange, EndpointExclusivity, IntegralExt};
	///
	/// let reserved = ByteRange::new(0, 9).unwrap();
	///
	/// assert!(42_u8
	/// 	.ensure_not_within(reserved, "port", EndpointExclusivity::Inclusive)
	/// 	.is_ok());
	/// assert!(7_u8
	/// 	.ensure_not_within(reserved, "port", EndpointExclusivity::Inclusive)
	/// 	.is_err());
	/// ```
	#[track_caller]
	fn ensure_not_within(
		self,
		range: NumericRange<Self>,
		element_name: &str,
		exclusivity: EndpointExclusivity,
	) -> Result<(), RangeError> {
		if range.is_within(self, exclusivity) {
			return Err(RangeError::out_of_range(
				element_name,
				format_args!(
					"parameter '{element_name}' passed from {} cannot be within {range}, {exclusivity}ly",
					Location::caller()
				),
			));
		}

		Ok(())
	}

	/// A guard that `self`, passed in as the parameter `element_name`,
	/// is within the allowed `range`.
	///
	/// # Errors
	///
	/// Returns [`RangeError::OutOfRange`] naming `element_name` and the
	/// calling location if `self` is not within `range`.
	///
	/// # Examples
	/// ```
	/// use integral_range::{EndpointExclusivity, IntegralExt, NumericRange};
	///
	/// fn set_volume(volume: i32) -> Result<(), integral_range::RangeError> {
	/// 	volume.ensure_within(
	/// 		NumericRange::new(0, 11).unwrap(),
	/// 		"volume",
	/// 		EndpointExclusivity::Inclusive,
	/// 	)?;
	///
	/// 	Ok(())
	/// }
	///
	/// assert!(set_volume(11).is_ok());
	/// assert!(set_volume(12).is_err());
	/// ```
	#[track_caller]
	fn ensure_within(
		self,
		range: NumericRange<Self>,
		element_name: &str,
		exclusivity: EndpointExclusivity,
	) -> Result<(), RangeError> {
		if range.is_not_within(self, exclusivity) {
			return Err(RangeError::out_of_range(
				element_name,
				format_args!(
					"parameter '{element_name}' passed from {} must be within {range}, {exclusivity}ly",
					Location::caller()
				),
			));
		}

		Ok(())
	}

	/// Forces `self` into `range`, see [`NumericRange::constrain()`].
	fn constrain(self, range: NumericRange<Self>) -> Self {
		range.constrain(self)
	}

	/// Reduces `self` by `percent` percent.
	///
	/// The result saturates at the bounds of the type and is rounded to
	/// the nearest integer, ties to even. The arithmetic is exact for every
	/// width, including the 64-bit types.
	///
	/// # Errors
	///
	/// Returns [`RangeError::OutOfRange`] if `percent` is not within
	/// `[0, 100]` inclusively.
	///
	/// # Examples
	/// ```
	/// use integral_range::IntegralExt;
	///
	/// assert_eq!(200_u8.scale_down(50.0), Ok(100));
	/// assert_eq!(200_u8.scale_down(0.0), Ok(200));
	/// assert_eq!(200_u8.scale_down(100.0), Ok(0));
	/// assert_eq!((-40_i8).scale_down(25.0), Ok(-30));
	/// assert_eq!((u64::MAX - 1).scale_down(50.0), Ok(i64::MAX as u64));
	///
	/// assert!(200_u8.scale_down(100.5).is_err());
	/// assert!(200_u8.scale_down(-1.0).is_err());
	/// ```
	fn scale_down(self, percent: f64) -> Result<Self, RangeError> {
		let bounds = NumericRange::<f64>::PERCENT;
		if bounds.is_not_within(percent, Inclusive) {
			return Err(RangeError::out_of_range(
				"percent",
				format_args!(
					"must be within {bounds}, inclusively, but was {percent}"
				),
			));
		}
		Ok(scale(self, -percent))
	}

	/// Increases `self` by `percent` percent.
	///
	/// There is no upper limit on `percent`, the result simply saturates
	/// at the bounds of the type. A negative `percent` scales towards
	/// zero. The result is rounded to the nearest integer, ties to even.
	///
	/// # Errors
	///
	/// Returns [`RangeError::OutOfRange`] if `percent` is `NaN` or
	/// infinite.
	///
	/// # Examples
	/// ```
	/// use integral_range::IntegralExt;
	///
	/// assert_eq!(100_u8.scale_up(50.0), Ok(150));
	/// assert_eq!(100_u8.scale_up(0.0), Ok(100));
	/// assert_eq!(100_u8.scale_up(1000.0), Ok(255));
	/// assert_eq!((-100_i8).scale_up(50.0), Ok(-128));
	///
	/// assert!(100_u8.scale_up(f64::NAN).is_err());
	/// ```
	fn scale_up(self, percent: f64) -> Result<Self, RangeError> {
		if !percent.is_finite() {
			return Err(RangeError::out_of_range(
				"percent",
				format_args!("must be a finite number, but was {percent}"),
			));
		}

		Ok(scale(self, percent))
	}
}

impl<I> IntegralExt for I where I: Integral {}

/// `value + value * percent / 100`, saturated into `I`.
fn scale<I>(value: I, percent: f64) -> I
where
	I: Integral,
{
	I::from_wide_saturating(add_percent(value.to_wide(), percent))
}
