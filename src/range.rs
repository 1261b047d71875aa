//! A module containing [`NumericRange`] and its per-type aliases.

use core::fmt;
use core::ops::{Bound, RangeBounds, RangeInclusive};

use crate::{EndpointExclusivity, Integral, RangeError};

/// A closed range of numeric values, `minimum` through `maximum`.
///
/// A `NumericRange` is an immutable value: it is only ever constructed
/// valid, that is with `minimum <= maximum`, and there is no way to
/// mutate it afterwards. Both bounds are stored as given, they are never
/// swapped into order for you.
///
/// Containment checks take an [`EndpointExclusivity`] to say whether the
/// bounds themselves count as being within the range.
///
/// # Examples
/// ```
/// use integral_range::{ByteRange, EndpointExclusivity};
///
/// let range = ByteRange::new(10, 20).unwrap();
///
/// assert_eq!(range.is_within(10, EndpointExclusivity::Inclusive), true);
/// assert_eq!(range.is_within(10, EndpointExclusivity::Exclusive), false);
/// assert_eq!(range.constrain(5), 10);
/// assert_eq!(range.constrain(25), 20);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
	feature = "serde",
	serde(
		into = "(T, T)",
		try_from = "(T, T)",
		bound(
			serialize = "T: serde::Serialize + Copy",
			deserialize = "T: serde::Deserialize<'de> + PartialOrd + Copy + fmt::Display"
		)
	)
)]
pub struct NumericRange<T> {
	minimum: T,
	maximum: T,
}

/// A [`NumericRange`] over [`u8`].
pub type ByteRange = NumericRange<u8>;
/// A [`NumericRange`] over [`i8`].
pub type SByteRange = NumericRange<i8>;

impl<T> NumericRange<T>
where
	T: PartialOrd + Copy + fmt::Display,
{
	/// Makes a new range from `minimum` through `maximum`.
	///
	/// # Errors
	///
	/// Returns [`RangeError::InvalidArgument`] if `minimum` is greater
	/// than `maximum`, or if the two cannot be ordered at all (such as a
	/// `NaN` bound).
	///
	/// # Examples
	/// ```
	/// use integral_range::{NumericRange, RangeError};
	///
	/// assert!(NumericRange::new(-4_i32, 4).is_ok());
	/// assert!(NumericRange::new(7_u8, 7).is_ok());
	///
	/// assert!(matches!(
	/// 	NumericRange::new(8_u8, 2),
	/// 	Err(RangeError::InvalidArgument { .. })
	/// ));
	/// assert!(NumericRange::new(0.0, f64::NAN).is_err());
	/// ```
	pub fn new(minimum: T, maximum: T) -> Result<Self, RangeError> {
		// written this way round so unordered bounds are rejected too
		if !(minimum <= maximum) {
			return Err(RangeError::invalid_argument(
				"range",
				format_args!(
					"minimum {minimum} is not less than or equal to maximum {maximum}"
				),
			));
		}

		Ok(NumericRange { minimum, maximum })
	}
}

impl<T> NumericRange<T>
where
	T: Copy,
{
	/// The lower bound of the range.
	pub fn minimum(&self) -> T {
		self.minimum
	}

	/// The upper bound of the range.
	pub fn maximum(&self) -> T {
		self.maximum
	}
}

impl<T> NumericRange<T>
where
	T: PartialOrd + Copy,
{
	/// Returns `true` if `value` lies within the range under the given
	/// `exclusivity`.
	///
	/// # Examples
	/// ```
	/// use integral_range::EndpointExclusivity::{Exclusive, Inclusive};
	/// use integral_range::SByteRange;
	///
	/// let range = SByteRange::new(-3, 3).unwrap();
	///
	/// assert_eq!(range.is_within(-3, Inclusive), true);
	/// assert_eq!(range.is_within(-3, Exclusive), false);
	/// assert_eq!(range.is_within(0, Exclusive), true);
	/// assert_eq!(range.is_within(4, Inclusive), false);
	/// ```
	pub fn is_within(&self, value: T, exclusivity: EndpointExclusivity) -> bool {
		exclusivity.admits(self.minimum, self.maximum, value)
	}

	/// The exact negation of [`NumericRange::is_within()`].
	pub fn is_not_within(
		&self,
		value: T,
		exclusivity: EndpointExclusivity,
	) -> bool {
		!self.is_within(value, exclusivity)
	}

	/// Forces `value` into the range by replacing out-of-range values
	/// with the nearest bound. This is always inclusive.
	///
	/// # Examples
	/// ```
	/// use integral_range::ByteRange;
	///
	/// let range = ByteRange::new(10, 20).unwrap();
	///
	/// assert_eq!(range.constrain(0), 10);
	/// assert_eq!(range.constrain(15), 15);
	/// assert_eq!(range.constrain(255), 20);
	/// ```
	pub fn constrain(&self, value: T) -> T {
		if value < self.minimum {
			self.minimum
		} else if value > self.maximum {
			self.maximum
		} else {
			value
		}
	}

	/// Returns `true` if the range contains exactly one value.
	pub fn is_degenerate(&self) -> bool {
		self.minimum == self.maximum
	}
}

impl<T> NumericRange<T>
where
	T: Integral,
{
	/// The range covering every value of `T`.
	///
	/// # Examples
	/// ```
	/// use integral_range::ByteRange;
	///
	/// assert_eq!(ByteRange::full(), ByteRange::new(0, 255).unwrap());
	/// ```
	pub fn full() -> Self {
		NumericRange {
			minimum: T::MIN,
			maximum: T::MAX,
		}
	}

	/// The number of steps from `minimum` to `maximum`, which is one less
	/// than the number of values in the range.
	pub(crate) fn span(&self) -> u128 {
		// never negative thanks to the ordering invariant
		(self.maximum.to_wide() - self.minimum.to_wide()) as u128
	}

	/// The distance of `value` above `minimum`, provided it is within
	/// the range.
	pub(crate) fn offset_of(&self, value: T) -> u128 {
		(value.to_wide() - self.minimum.to_wide()) as u128
	}
}

impl NumericRange<f64> {
	/// The acceptable values of a percentage, `0` through `100`.
	pub(crate) const PERCENT: Self = NumericRange {
		minimum: 0.0,
		maximum: 100.0,
	};
}

impl NumericRange<i128> {
	/// The representable range of `I` widened to [`i128`].
	pub(crate) fn full_wide<I>() -> Self
	where
		I: Integral,
	{
		NumericRange {
			minimum: I::MIN.to_wide(),
			maximum: I::MAX.to_wide(),
		}
	}
}

impl<T> fmt::Display for NumericRange<T>
where
	T: fmt::Display,
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "[{}, {}]", self.minimum, self.maximum)
	}
}

impl<T> RangeBounds<T> for NumericRange<T> {
	fn start_bound(&self) -> Bound<&T> {
		Bound::Included(&self.minimum)
	}

	fn end_bound(&self) -> Bound<&T> {
		Bound::Included(&self.maximum)
	}
}

impl<T> TryFrom<(T, T)> for NumericRange<T>
where
	T: PartialOrd + Copy + fmt::Display,
{
	type Error = RangeError;

	fn try_from((minimum, maximum): (T, T)) -> Result<Self, Self::Error> {
		NumericRange::new(minimum, maximum)
	}
}

impl<T> TryFrom<RangeInclusive<T>> for NumericRange<T>
where
	T: PartialOrd + Copy + fmt::Display,
{
	type Error = RangeError;

	fn try_from(range: RangeInclusive<T>) -> Result<Self, Self::Error> {
		let (minimum, maximum) = range.into_inner();
		NumericRange::new(minimum, maximum)
	}
}

impl<T> From<NumericRange<T>> for RangeInclusive<T> {
	fn from(range: NumericRange<T>) -> Self {
		range.minimum..=range.maximum
	}
}

impl<T> From<NumericRange<T>> for (T, T) {
	fn from(range: NumericRange<T>) -> Self {
		(range.minimum, range.maximum)
	}
}

#[cfg(test)]
mod tests {
	use itertools::Itertools;
	use pretty_assertions::assert_eq;
	use test_strategy::proptest;

	use super::*;
	use crate::test_ranges::{ii, sii};
	use crate::EndpointExclusivity::{Exclusive, Inclusive};

	#[test]
	fn new_tests() {
		assert_eq!(ii(10, 20).minimum(), 10);
		assert_eq!(ii(10, 20).maximum(), 20);

		assert_eq!(
			ByteRange::new(20, 10),
			Err(RangeError::invalid_argument(
				"range",
				"minimum 20 is not less than or equal to maximum 10"
			))
		);
		assert!(NumericRange::new(f64::NAN, 1.0).is_err());
		assert!(NumericRange::new(1.0, f64::NAN).is_err());
		assert!(NumericRange::new(0.0, 100.0).is_ok());
	}

	#[test]
	fn conversion_tests() {
		assert_eq!(ByteRange::try_from((3, 9)), Ok(ii(3, 9)));
		assert!(ByteRange::try_from((9, 3)).is_err());

		assert_eq!(SByteRange::try_from(-8..=8), Ok(sii(-8, 8)));
		assert!(SByteRange::try_from(8..=-8).is_err());

		assert_eq!(RangeInclusive::from(ii(1, 2)), 1..=2);
		assert_eq!(<(u8, u8)>::from(ii(1, 2)), (1, 2));
	}

	#[test]
	fn range_bounds_tests() {
		let range = ii(4, 6);

		assert_eq!(range.start_bound(), Bound::Included(&4));
		assert_eq!(range.end_bound(), Bound::Included(&6));
		assert_eq!(
			(0..10).filter(|x| range.contains(x)).collect::<Vec<_>>(),
			[4, 5, 6]
		);
	}

	#[test]
	fn display_tests() {
		assert_eq!(ii(10, 20).to_string(), "[10, 20]");
		assert_eq!(sii(-5, 5).to_string(), "[-5, 5]");
	}

	#[test]
	fn scenario_tests() {
		let range = ii(10, 20);

		assert_eq!(range.is_within(10, Inclusive), true);
		assert_eq!(range.is_within(10, Exclusive), false);
		assert_eq!(range.constrain(5), 10);
		assert_eq!(range.constrain(25), 20);
	}

	#[test]
	fn degenerate_tests() {
		let range = ii(7, 7);

		assert_eq!(range.is_degenerate(), true);
		assert_eq!(ii(7, 8).is_degenerate(), false);

		assert_eq!(range.is_within(7, Inclusive), true);
		assert_eq!(range.is_within(7, Exclusive), false);
		assert_eq!(range.is_within(6, Inclusive), false);
		assert_eq!(range.constrain(0), 7);
		assert_eq!(range.constrain(255), 7);
	}

	#[test]
	fn full_tests() {
		assert_eq!(SByteRange::full(), sii(-128, 127));
		assert_eq!(NumericRange::<u64>::full().span(), u64::MAX as u128);
		assert_eq!(NumericRange::<i64>::full().span(), u64::MAX as u128);
		assert_eq!(
			NumericRange::<i128>::full_wide::<i8>(),
			NumericRange::new(-128, 127).unwrap()
		);
	}

	#[cfg(feature = "serde")]
	#[test]
	fn serde_tests() {
		assert_eq!(serde_json::to_string(&ii(3, 9)).unwrap(), "[3,9]");
		assert_eq!(
			serde_json::from_str::<ByteRange>("[3,9]").unwrap(),
			ii(3, 9)
		);
		assert!(serde_json::from_str::<ByteRange>("[9,3]").is_err());
		assert_eq!(
			serde_json::to_string(&EndpointExclusivity::Exclusive).unwrap(),
			"\"Exclusive\""
		);
	}

	// every u8 range against every u8 value would be 2^24 cases, so this
	// samples the bounds and checks every value against them
	#[test]
	fn sampled_within_tests() {
		let bounds = (0..=255_u8).step_by(17);

		for (lo, hi) in bounds.clone().cartesian_product(bounds) {
			let Ok(range) = ByteRange::new(lo, hi) else {
				continue;
			};

			for value in 0..=255_u8 {
				assert_eq!(
					range.is_within(value, Inclusive),
					value >= lo && value <= hi
				);
				assert_eq!(
					range.is_within(value, Exclusive),
					value > lo && value < hi
				);
			}
		}
	}

	#[proptest]
	fn is_within_matches_comparisons(a: i16, b: i16, value: i16) {
		let (lo, hi) = (a.min(b), a.max(b));
		let range = NumericRange::new(lo, hi).unwrap();

		assert_eq!(range.is_within(value, Inclusive), value >= lo && value <= hi);
		assert_eq!(range.is_within(value, Exclusive), value > lo && value < hi);
	}

	#[proptest]
	fn is_not_within_negates_is_within(
		a: u32,
		b: u32,
		value: u32,
		exclusivity: EndpointExclusivity,
	) {
		let range = NumericRange::new(a.min(b), a.max(b)).unwrap();

		assert_eq!(
			range.is_not_within(value, exclusivity),
			!range.is_within(value, exclusivity)
		);
	}

	#[proptest]
	fn constrain_lands_within_range(a: i64, b: i64, value: i64) {
		let range = NumericRange::new(a.min(b), a.max(b)).unwrap();
		let constrained = range.constrain(value);

		assert!(range.is_within(constrained, Inclusive));
		if range.is_within(value, Inclusive) {
			assert_eq!(constrained, value);
		}
	}
}
