//! Shorthand constructors for the ranges used throughout the tests.

use crate::{ByteRange, SByteRange};

/// An included-included [`ByteRange`].
pub(crate) fn ii(x1: u8, x2: u8) -> ByteRange {
	ByteRange::new(x1, x2).unwrap()
}
/// An included-included [`SByteRange`].
pub(crate) fn sii(x1: i8, x2: i8) -> SByteRange {
	SByteRange::new(x1, x2).unwrap()
}
