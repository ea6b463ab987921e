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
use std::net::Ipv6Addr;

/// An IPv6 address as a point in the 128-bit numbering space.
///
/// Interoperates with `std::net::Ipv6Addr` for construction and display;
/// arithmetic happens on the numeric representation.
///
/// # Examples
///
/// ```rust
/// # use ipmath_resource::ipv6::Ipv6Address;
/// # use std::net::Ipv6Addr;
///
/// let addr = Ipv6Address::from(Ipv6Addr::LOCALHOST);
/// assert_eq!(addr.get(), 1);
/// assert_eq!(addr.to_string(), "::1");
/// ```
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Ipv6Address(u128);

/// A closed range of IPv6 addresses.
pub type Ipv6Range = ResourceRange<Ipv6Address>;

impl Ipv6Address {
    /// Creates an `Ipv6Address` from its numeric value.
    #[inline]
    pub const fn new(value: u128) -> Self {
        Self(value)
    }

    /// Returns the numeric value of the address.
    #[inline]
    pub const fn get(&self) -> u128 {
        self.0
    }
}

impl Resource for Ipv6Address {
    type Repr = u128;

    const BITS: u32 = 128;
    const MIN: Self = Ipv6Address(u128::MIN);
    const MAX: Self = Ipv6Address(u128::MAX);

    #[inline]
    fn successor(self) -> Option<Self> {
        self.0.checked_add(1).map(Ipv6Address)
    }

    #[inline]
    fn predecessor(self) -> Option<Self> {
        self.0.checked_sub(1).map(Ipv6Address)
    }

    #[inline]
    fn to_repr(self) -> Self::Repr {
        self.0
    }

    #[inline]
    fn from_repr(repr: Self::Repr) -> Self {
        Ipv6Address(repr)
    }
}

impl std::fmt::Display for Ipv6Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", Ipv6Addr::from(self.0))
    }
}

impl From<u128> for Ipv6Address {
    #[inline]
    fn from(value: u128) -> Self {
        Ipv6Address(value)
    }
}

impl From<Ipv6Address> for u128 {
    #[inline]
    fn from(addr: Ipv6Address) -> Self {
        addr.0
    }
}

impl From<Ipv6Addr> for Ipv6Address {
    #[inline]
    fn from(addr: Ipv6Addr) -> Self {
        Ipv6Address(u128::from(addr))
    }
}

impl From<Ipv6Address> for Ipv6Addr {
    #[inline]
    fn from(addr: Ipv6Address) -> Self {
        Ipv6Addr::from(addr.0)
    }
}
