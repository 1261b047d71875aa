//! A module containing [`EndpointExclusivity`].

use derive_more::Display;

crate::enumeration! {
	/// Whether the minimum and maximum of a range count as being within it.
	///
	/// The default is [`EndpointExclusivity::Inclusive`], which is what every
	/// method taking an exclusivity uses when you have no particular
	/// preference.
	///
	/// | exclusivity | expression                        |
	/// | ----------- | --------------------------------- |
	/// | `Inclusive` | `minimum <= value && value <= maximum` |
	/// | `Exclusive` | `minimum < value && value < maximum`   |
	#[derive(Display, Default, PartialEq, Eq, Hash)]
	#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
	#[cfg_attr(test, derive(test_strategy::Arbitrary))]
	pub enum EndpointExclusivity {
		/// Both endpoints are within the range.
		#[default]
		#[display(fmt = "inclusive")]
		Inclusive = 0,
		/// Neither endpoint is within the range.
		#[display(fmt = "exclusive")]
		Exclusive = 1,
	}
}

impl EndpointExclusivity {
	/// Returns `true` if `value` lies between `minimum` and `maximum`
	/// under this exclusivity.
	///
	/// # Examples
	/// ```
	/// use integral_range::EndpointExclusivity;
	///
	/// assert_eq!(EndpointExclusivity::Inclusive.admits(1, 3, 1), true);
	/// assert_eq!(EndpointExclusivity::Exclusive.admits(1, 3, 1), false);
	/// assert_eq!(EndpointExclusivity::Exclusive.admits(1, 3, 2), true);
	/// ```
	pub fn admits<T>(self, minimum: T, maximum: T, value: T) -> bool
	where
		T: PartialOrd,
	{
		match self {
			EndpointExclusivity::Inclusive => {
				value >= minimum && value <= maximum
			}
			EndpointExclusivity::Exclusive => value > minimum && value < maximum,
		}
	}
}
