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

use ipmath_core::{range::resource_range::ResourceRange, resource::value::Resource};

/// A 32-bit autonomous system number.
///
/// The whole `0..=u32::MAX` space is representable, covering both the
/// original 16-bit numbers and the 32-bit extension.
///
/// # Examples
///
/// ```rust
/// # use ipmath_resource::asn::Asn;
///
/// let asn = Asn::new(64512);
/// assert_eq!(asn.get(), 64512);
/// assert_eq!(asn.to_string(), "AS64512");
/// ```
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Asn(u32);

/// A closed range of autonomous system numbers.
pub type AsnRange = ResourceRange<Asn>;

impl Asn {
    /// Creates an `Asn` from its numeric value.
    #[inline]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Returns the numeric value of the AS number.
    #[inline]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

impl Resource for Asn {
    type Repr = u32;

    const BITS: u32 = 32;
    const MIN: Self = Asn(u32::MIN);
    const MAX: Self = Asn(u32::MAX);

    #[inline]
    fn successor(self) -> Option<Self> {
        self.0.checked_add(1).map(Asn)
    }

    #[inline]
    fn predecessor(self) -> Option<Self> {
        self.0.checked_sub(1).map(Asn)
    }

    #[inline]
    fn to_repr(self) -> Self::Repr {
        self.0
    }

    #[inline]
    fn from_repr(repr: Self::Repr) -> Self {
        Asn(repr)
    }
}

impl std::fmt::Display for Asn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "AS{}", self.0)
    }
}

impl From<u32> for Asn {
    #[inline]
    fn from(value: u32) -> Self {
        Asn(value)
    }
}

impl From<Asn> for u32 {
    #[inline]
    fn from(asn: Asn) -> Self {
        asn.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ipmath_core::prefix::cidr::is_valid_prefix;

    #[test]
    fn test_stepping_at_extremes() {
        assert_eq!(Asn::MIN.predecessor(), None);
        assert_eq!(Asn::MAX.successor(), None);
        assert_eq!(Asn::new(7).successor(), Some(Asn::new(8)));
        assert_eq!(Asn::new(7).predecessor(), Some(Asn::new(6)));
    }

    #[test]
    fn test_display() {
        assert_eq!(Asn::new(0).to_string(), "AS0");
        assert_eq!(Asn::new(4_294_967_295).to_string(), "AS4294967295");
    }

    #[test]
    fn test_conversions() {
        assert_eq!(Asn::from(65536u32), Asn::new(65536));
        assert_eq!(u32::from(Asn::new(65536)), 65536);
    }

    #[test]
    fn test_range_algebra() {
        let a = AsnRange::new(Asn::new(64512), Asn::new(65534)).unwrap();
        let b = AsnRange::new(Asn::new(65000), Asn::new(66000)).unwrap();

        assert!(a.overlaps(b));
        assert_eq!(
            a.merge(b).unwrap(),
            AsnRange::new(Asn::new(64512), Asn::new(66000)).unwrap()
        );
        assert_eq!(a.to_string(), "[AS64512..AS65534]");
    }

    #[test]
    fn test_full_space_is_slash_zero() {
        let all = AsnRange::new(Asn::MIN, Asn::MAX).unwrap();
        assert!(is_valid_prefix(&all));
    }

    #[test]
    fn test_iteration() {
        let range = AsnRange::new(Asn::new(10), Asn::new(12)).unwrap();
        let numbers: Vec<u32> = range.iter().map(u32::from).collect();
        assert_eq!(numbers, vec![10, 11, 12]);
    }
}
