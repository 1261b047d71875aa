//! A module containing the [`Integral`] trait and trait impls for the
//! primitive integer datatypes.

use core::cmp::Ordering;
use core::fmt::{Debug, Display};
use core::hash::Hash;

use crate::NumericRange;

/// A trait for the primitive integer types this crate extends.
///
/// Every supported type widens losslessly into an [`i128`], which is
/// what lets [`IntegralExt::linear_map()`] and the scaling methods do
/// their arithmetic without intermediate overflow.
///
/// The 128-bit integers are not implemented since the products used in
/// linear mapping do not fit the wide accumulator.
///
/// This trait is sealed, it cannot be implemented outside this crate.
///
/// ```compile_fail
/// use core::fmt;
///
/// use integral_range::Integral;
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// struct Wide(u128);
///
/// impl fmt::Display for Wide {
/// 	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
/// 		write!(f, "{}", self.0)
/// 	}
/// }
///
/// impl Integral for Wide {
/// 	const MIN: Self = Wide(u128::MIN);
/// 	const MAX: Self = Wide(u128::MAX);
///
/// 	fn to_wide(self) -> i128 {
/// 		self.0 as i128
/// 	}
/// 	fn from_wide_saturating(wide: i128) -> Self {
/// 		Wide(wide.max(0) as u128)
/// 	}
/// }
/// ```
///
/// [`IntegralExt::linear_map()`]: crate::IntegralExt::linear_map
pub trait Integral: private::Sealed + Ord + Copy + Hash + Debug + Display {
	/// The minimum value of the type.
	const MIN: Self;
	/// The maximum value of the type.
	const MAX: Self;

	/// Widens `self` into an [`i128`] without loss.
	fn to_wide(self) -> i128;

	/// Narrows `wide` into `Self`, saturating at [`Integral::MIN`] and
	/// [`Integral::MAX`].
	fn from_wide_saturating(wide: i128) -> Self;
}

mod private {
	pub trait Sealed {}
}

/// Clamps `wide` into the representable range of `I`.
pub(crate) fn saturate<I>(wide: i128) -> i128
where
	I: Integral,
{
	NumericRange::<i128>::full_wide::<I>().constrain(wide)
}

/// Computes `base + base * percent / 100` exactly, then rounds to the
/// nearest integer, ties to even.
///
/// `base` must fit in 64 bits and `percent` must be finite. Results beyond
/// the range of an [`i128`] saturate.
pub(crate) fn add_percent(base: i128, percent: f64) -> i128 {
	let (mantissa, exponent) = decompose(percent);
	// below 2^117 in magnitude since `mantissa` has 53 bits
	let product = base * mantissa;
	if product == 0 {
		return base;
	}
	let saturated = if product > 0 { i128::MAX } else { i128::MIN };

	let (numerator, shift) = if exponent >= 0 {
		if exponent >= 64 {
			return saturated;
		}
		match product.checked_mul(1 << exponent) {
			Some(numerator) => (numerator, 0),
			None => return saturated,
		}
	} else {
		(product, exponent.unsigned_abs())
	};
	// the offset is below 2^-3 from here on
	if shift > 120 {
		return base;
	}

	let divisor: i128 = 100 << shift;
	let floor = base.saturating_add(numerator.div_euclid(divisor));
	let remainder = numerator.rem_euclid(divisor);

	match remainder.cmp(&(divisor - remainder)) {
		Ordering::Less => floor,
		Ordering::Greater => floor.saturating_add(1),
		Ordering::Equal if floor % 2 == 0 => floor,
		Ordering::Equal => floor.saturating_add(1),
	}
}

/// Splits a finite `x` into `mantissa * 2^exponent` without loss.
fn decompose(x: f64) -> (i128, i32) {
	let bits = x.to_bits();
	let biased = ((bits >> 52) & 0x7ff) as i32;
	let fraction = bits & 0x000f_ffff_ffff_ffff;
	let magnitude = if biased == 0 {
		fraction << 1
	} else {
		fraction | 0x0010_0000_0000_0000
	};

	let mantissa = if x.is_sign_negative() {
		-(magnitude as i128)
	} else {
		magnitude as i128
	};
	(mantissa, biased - 1075)
}

macro_rules! integral {
	() => {};
	($ident:ident, $($t:tt)*) => {
		impl private::Sealed for $ident {}

		impl Integral for $ident {
			const MIN: Self = $ident::MIN;
			const MAX: Self = $ident::MAX;

			fn to_wide(self) -> i128 {
				self as i128
			}
			fn from_wide_saturating(wide: i128) -> Self {
				saturate::<Self>(wide) as $ident
			}
		}

		integral!($($t)*);
	};
}

integral!(u8, i8, u16, i16, u32, i32, u64, i64, usize, isize,);

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	#[test]
	fn from_wide_saturating_tests() {
		assert_eq!(u8::from_wide_saturating(-1), 0);
		assert_eq!(u8::from_wide_saturating(300), 255);
		assert_eq!(u8::from_wide_saturating(42), 42);
		assert_eq!(i8::from_wide_saturating(-1000), -128);
		assert_eq!(i8::from_wide_saturating(1000), 127);
		assert_eq!(u64::from_wide_saturating(i128::MAX), u64::MAX);
		assert_eq!(i64::from_wide_saturating(i128::MIN), i64::MIN);
	}

	#[test]
	fn decompose_tests() {
		assert_eq!(decompose(0.0), (0, -1075));
		assert_eq!(decompose(1.0), (1 << 52, -52));
		assert_eq!(decompose(-0.5), (-(1 << 52), -53));
		assert_eq!(decompose(f64::MIN_POSITIVE / 4.0), (1 << 51, -1075));
	}

	#[test]
	fn add_percent_tests() {
		assert_eq!(add_percent(10, 0.0), 10);
		assert_eq!(add_percent(10, 40.0), 14);
		assert_eq!(add_percent(10, -6.0), 9);
		assert_eq!(add_percent(10, -100.0), 0);
		assert_eq!(add_percent(-40, -25.0), -30);
		assert_eq!(add_percent(100, -22.5), 78);
		//ties go to the even neighbour
		assert_eq!(add_percent(10, 5.0), 10);
		assert_eq!(add_percent(10, 15.0), 12);
		assert_eq!(add_percent(3, -50.0), 2);
		assert_eq!(add_percent(-3, -50.0), -2);
		assert_eq!(add_percent(5, 10.0), 6);
		//exact for every 64-bit base
		assert_eq!(
			add_percent(u64::MAX as i128 - 1, -50.0),
			i64::MAX as i128
		);
		assert_eq!(add_percent(u64::MAX as i128, -50.0), 1 << 63);
		assert_eq!(add_percent(i64::MAX as i128, -50.0), 1 << 62);
		assert_eq!(add_percent(i64::MIN as i128, -50.0), -(1 << 62));
		assert_eq!(
			add_percent(u64::MAX as i128, 100.0),
			2 * u64::MAX as i128
		);
		//negligible offsets vanish
		assert_eq!(
			add_percent(u64::MAX as i128, f64::MIN_POSITIVE),
			u64::MAX as i128
		);
		//saturates instead of overflowing
		assert_eq!(add_percent(1, f64::MAX), i128::MAX);
		assert_eq!(add_percent(-1, f64::MAX), i128::MIN);
		assert_eq!(add_percent(i64::MAX as i128, 1e30), i128::MAX);
	}
}
