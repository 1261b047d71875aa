//! A module containing the [`Enumeration`] trait, the [`enumeration!`]
//! declaration macro and the free functions built on top of them.
//!
//! Rust enums are closed sets known at compile time, so listing their
//! variants needs no runtime reflection: the [`enumeration!`] macro
//! simply records them in a `const` slice as it declares the enum.
//!
//! [`enumeration!`]: crate::enumeration!

use std::collections::BTreeMap;

/// A fieldless enum whose variants can be listed.
///
/// You shouldn't normally implement this yourself, declare the enum with
/// the [`enumeration!`](crate::enumeration!) macro instead.
pub trait Enumeration: Copy + 'static {
	/// Every variant, in declaration order.
	const VARIANTS: &'static [Self];

	/// The name of the variant as written in its declaration.
	fn name(self) -> &'static str;

	/// The discriminant of the variant.
	fn discriminant(self) -> i64;
}

/// Returns an iterator over every variant of `E` in declaration order.
///
/// # Examples
/// ```
/// use integral_range::{values, EndpointExclusivity};
///
/// assert_eq!(
/// 	values::<EndpointExclusivity>().collect::<Vec<_>>(),
/// 	[EndpointExclusivity::Inclusive, EndpointExclusivity::Exclusive]
/// );
/// ```
pub fn values<E>() -> impl DoubleEndedIterator<Item = E> + ExactSizeIterator
where
	E: Enumeration,
{
	E::VARIANTS.iter().copied()
}

/// Returns a map from every discriminant of `E` to its variant name.
///
/// # Examples
/// ```
/// use integral_range::{enumeration, to_dictionary};
///
/// enumeration! {
/// 	/// Traffic light colours.
/// 	#[derive(PartialEq, Eq)]
/// 	pub enum Light {
/// 		/// Stop.
/// 		Red = 1,
/// 		/// Get ready.
/// 		Amber = 2,
/// 		/// Go.
/// 		Green = 4,
/// 	}
/// }
///
/// let dictionary = to_dictionary::<Light>();
///
/// assert_eq!(
/// 	dictionary.into_iter().collect::<Vec<_>>(),
/// 	[(1, "Red"), (2, "Amber"), (4, "Green")]
/// );
/// ```
pub fn to_dictionary<E>() -> BTreeMap<i64, &'static str>
where
	E: Enumeration,
{
	values::<E>()
		.map(|variant| (variant.discriminant(), variant.name()))
		.collect()
}

/// Declares a fieldless enum with explicit discriminants and implements
/// [`Enumeration`] for it.
///
/// Attributes and doc comments on the enum and on each variant are
/// passed through. `Debug`, `Clone` and `Copy` are always derived.
///
/// # Examples
/// ```
/// use integral_range::{enumeration, Enumeration};
///
/// enumeration! {
/// 	/// How loud something is.
/// 	pub enum Volume {
/// 		/// Nothing at all.
/// 		Mute = 0,
/// 		/// Everything.
/// 		Max = 11,
/// 	}
/// }
///
/// assert_eq!(Volume::Max.name(), "Max");
/// assert_eq!(Volume::Max.discriminant(), 11);
/// assert_eq!(Volume::VARIANTS.len(), 2);
/// ```
#[macro_export]
macro_rules! enumeration {
	(
		$(#[$meta:meta])*
		$vis:vis enum $name:ident {
			$(
				$(#[$variant_meta:meta])*
				$variant:ident = $value:expr
			),+ $(,)?
		}
	) => {
		$(#[$meta])*
		#[derive(Debug, Clone, Copy)]
		$vis enum $name {
			$(
				$(#[$variant_meta])*
				$variant = $value,
			)+
		}

		impl $crate::Enumeration for $name {
			const VARIANTS: &'static [Self] = &[$($name::$variant),+];

			fn name(self) -> &'static str {
				match self {
					$($name::$variant => stringify!($variant),)+
				}
			}

			fn discriminant(self) -> i64 {
				self as i64
			}
		}
	};
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	enumeration! {
		#[derive(PartialEq, Eq)]
		enum Sparse {
			Negative = -5,
			Zero = 0,
			Large = 1000,
		}
	}

	#[test]
	fn values_tests() {
		assert_eq!(
			values::<Sparse>().collect::<Vec<_>>(),
			[Sparse::Negative, Sparse::Zero, Sparse::Large]
		);
		assert_eq!(values::<Sparse>().len(), 3);
		assert_eq!(values::<Sparse>().next_back(), Some(Sparse::Large));
	}

	#[test]
	fn to_dictionary_tests() {
		let dictionary = to_dictionary::<Sparse>();

		assert_eq!(dictionary.len(), 3);
		assert_eq!(dictionary[&-5], "Negative");
		assert_eq!(dictionary[&0], "Zero");
		assert_eq!(dictionary[&1000], "Large");
	}

	#[test]
	fn name_and_discriminant_tests() {
		for variant in values::<Sparse>() {
			assert_eq!(to_dictionary::<Sparse>()[&variant.discriminant()], variant.name());
		}
	}
}
