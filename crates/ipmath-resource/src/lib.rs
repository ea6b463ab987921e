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

//! # IPMath Resources
//!
//! Concrete numbering spaces for the `ipmath-core` range algebra:
//! autonomous system numbers and IPv4/IPv6 addresses. Each type is a thin
//! strongly-typed wrapper over its fixed-width unsigned representation,
//! implementing the `Resource` contract and interoperating with the
//! primitive integers and the `std::net` address types.
//!
//! Textual parsing of addresses, ranges, and prefixes is deliberately not
//! part of this crate; values are built from numbers or from `std::net`
//! addresses.
//!
//! ## Modules
//!
//! - `asn`: `Asn` and `AsnRange` over the 32-bit AS number space.
//! - `ipv4`: `Ipv4Address` and `Ipv4Range` over the 32-bit address space.
//! - `ipv6`: `Ipv6Address` and `Ipv6Range` over the 128-bit address space.

pub mod asn;
pub mod ipv4;
pub mod ipv6;
