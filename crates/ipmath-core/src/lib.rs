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

//! # IPMath Core
//!
//! Generic closed-interval algebra over totally ordered, discretely
//! steppable numbering spaces such as IPv4 addresses, IPv6 addresses, and
//! autonomous system numbers. This crate contains the resource-agnostic
//! machinery; concrete address and number types live in `ipmath-resource`.
//!
//! ## Modules
//!
//! - `resource`: The `Resource` contract (total order, checked one-step
//!   moves, space extremes, unsigned bit representation) that a numbering
//!   space must satisfy to participate in the algebra, implemented for the
//!   unsigned primitive integers.
//! - `range`: The immutable closed interval `[start, end]` with validated
//!   construction, set-relationship predicates (containment, overlap,
//!   adjacency, consecutiveness), set combinators (merge, intersection,
//!   subtraction), and in-order iteration over every value in the interval.
//! - `prefix`: CIDR-style prefix checks deciding whether a range is exactly
//!   one aligned power-of-two block of its space.
//!
//! ## Purpose
//!
//! Address and number-space bookkeeping routinely manipulates spans of a
//! fixed-width unsigned space, and must get boundary arithmetic right at
//! the extremes of that space (value zero and the maximum value) across
//! bit widths from 32 to 128. Writing the algebra once, against a small
//! capability contract, keeps every concrete space bit-for-bit consistent.
//!
//! Refer to each module for detailed APIs and examples.

pub mod prefix;
pub mod range;
pub mod resource;
