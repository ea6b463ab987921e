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
use std::net::Ipv4Addr;

/// An IPv4 address as a point in the 32-bit numbering space.
///
/// Interoperates with `std::net::Ipv4Addr` for construction and display;
/// arithmetic happens on the numeric representation.
///
/// # Examples
///
/// ```rust
/// # use ipmath_resource::ipv4::Ipv4Address;
/// # use std::net::Ipv4Addr;
///
/// let addr = Ipv4Address::from(Ipv4Addr::new(192, 0, 2, 1));
/// assert_eq!(addr.get(), 0xC000_0201);
/// assert_eq!(addr.to_string(), "192.0.2.1");
/// ```
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Ipv4Address(u32);

/// A closed range of IPv4 addresses.
pub type Ipv4Range = ResourceRange<Ipv4Address>;

impl Ipv4Address {
    /// Creates an `Ipv4Address` from its numeric value.
    #[inline]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Returns the numeric value of the address.
    #[inline]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

impl Resource for Ipv4Address {
    type Repr = u32;

    const BITS: u32 = 32;
    const MIN: Self = Ipv4Address(u32::MIN);
    const MAX: Self = Ipv4Address(u32::MAX);

    #[inline]
    fn successor(self) -> Option<Self> {
        self.0.checked_add(1).map(Ipv4Address)
    }

    #[inline]
    fn predecessor(self) -> Option<Self> {
        self.0.checked_sub(1).map(Ipv4Address)
    }

    #[inline]
    fn to_repr(self) -> Self::Repr {
        self.0
    }

    #[inline]
    fn from_repr(repr: Self::Repr) -> Self {
        Ipv4Address(repr)
    }
}

impl std::fmt::Display for Ipv4Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", Ipv4Addr::from(self.0))
    }
}

impl From<u32> for Ipv4Address {
    #[inline]
    fn from(value: u32) -> Self {
        Ipv4Address(value)
    }
}

impl From<Ipv4Address> for u32 {
    #[inline]
    fn from(addr: Ipv4Address) -> Self {
        addr.0
    }
}

impl From<Ipv4Addr> for Ipv4Address {
    #[inline]
    fn from(addr: Ipv4Addr) -> Self {
        Ipv4Address(u32::from(addr))
    }
}

impl From<Ipv4Address> for Ipv4Addr {
    #[inline]
    fn from(addr: Ipv4Address) -> Self {
        Ipv4Addr::from(addr.0)
    }
}
