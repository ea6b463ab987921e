// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use num_traits::{PrimInt, Unsigned};

/// A value in a totally ordered, discretely steppable numbering space.
///
/// Implementors describe one numbering space (an address family, an AS
/// number space, or a plain unsigned integer space) by providing its
/// extremes, its bit width, checked one-step moves, and a round trip to a
/// fixed-width unsigned representation used for bit-level arithmetic.
///
/// The stepping operations mirror the semantics of primitive integer
/// `checked_add`/`checked_sub` by one: `successor` returns `None` exactly
/// at [`Resource::MAX`], `predecessor` returns `None` exactly at
/// [`Resource::MIN`]. Everywhere else the step lands on the adjacent value
/// in the ordering, with no gaps.
///
/// # Examples
///
/// ```rust
/// # use ipmath_core::resource::value::Resource;
///
/// assert_eq!(7u8.successor(), Some(8));
/// assert_eq!(u8::MAX.successor(), None);
/// assert_eq!(0u8.predecessor(), None);
/// ```
pub trait Resource: Copy + Ord + std::fmt::Debug {
    /// The unsigned fixed-width integer representation of this space.
    ///
    /// The representation must cover the numbering space exactly: every
    /// value of the space maps to a distinct `Repr` value, the order is
    /// preserved, and [`Resource::BITS`] equals the bit width of `Repr`.
    type Repr: PrimInt + Unsigned;

    /// Number of significant bits in the numbering space
    /// (32 for ASN/IPv4, 128 for IPv6).
    const BITS: u32;

    /// The smallest representable value of the space.
    const MIN: Self;

    /// The largest representable value of the space.
    const MAX: Self;

    /// Returns the adjacent value above `self`, or `None` at [`Resource::MAX`].
    fn successor(self) -> Option<Self>;

    /// Returns the adjacent value below `self`, or `None` at [`Resource::MIN`].
    fn predecessor(self) -> Option<Self>;

    /// Converts this value into its unsigned integer representation.
    fn to_repr(self) -> Self::Repr;

    /// Rebuilds a value from its unsigned integer representation.
    fn from_repr(repr: Self::Repr) -> Self;
}

macro_rules! impl_resource_for_uint {
    ($t:ty) => {
        impl Resource for $t {
            type Repr = $t;

            const BITS: u32 = <$t>::BITS;
            const MIN: Self = <$t>::MIN;
            const MAX: Self = <$t>::MAX;

            #[inline(always)]
            fn successor(self) -> Option<Self> {
                self.checked_add(1)
            }

            #[inline(always)]
            fn predecessor(self) -> Option<Self> {
                self.checked_sub(1)
            }

            #[inline(always)]
            fn to_repr(self) -> Self::Repr {
                self
            }

            #[inline(always)]
            fn from_repr(repr: Self::Repr) -> Self {
                repr
            }
        }
    };
}

impl_resource_for_uint!(u8);
impl_resource_for_uint!(u16);
impl_resource_for_uint!(u32);
impl_resource_for_uint!(u64);
impl_resource_for_uint!(u128);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_successor_steps_by_one() {
        assert_eq!(0u8.successor(), Some(1));
        assert_eq!(41u32.successor(), Some(42));
        assert_eq!(99u128.successor(), Some(100));
    }

    #[test]
    fn test_successor_none_at_max() {
        assert_eq!(u8::MAX.successor(), None);
        assert_eq!(u32::MAX.successor(), None);
        assert_eq!(u128::MAX.successor(), None);
    }

    #[test]
    fn test_predecessor_none_at_min() {
        assert_eq!(0u8.predecessor(), None);
        assert_eq!(0u32.predecessor(), None);
        assert_eq!(0u128.predecessor(), None);
    }

    #[test]
    fn test_predecessor_inverts_successor() {
        let v = 200u16;
        assert_eq!(v.successor().and_then(|s| s.predecessor()), Some(v));
    }

    #[test]
    fn test_bit_widths() {
        assert_eq!(<u8 as Resource>::BITS, 8);
        assert_eq!(<u32 as Resource>::BITS, 32);
        assert_eq!(<u128 as Resource>::BITS, 128);
    }

    #[test]
    fn test_repr_round_trip() {
        let v = 0xDEAD_BEEFu32;
        assert_eq!(<u32 as Resource>::from_repr(v.to_repr()), v);
    }
}
