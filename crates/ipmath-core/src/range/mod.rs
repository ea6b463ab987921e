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

//! # Range Algebra
//!
//! The closed interval `[start, end]` over one numbering space, together
//! with the set-theoretic operations the rest of the ecosystem builds on.
//!
//! ## Submodules
//!
//! - `resource_range`: A generic `[start, end]` range type with validated
//!   construction, predicates (value and range containment, overlap,
//!   adjacency, consecutiveness), set operations (merge, intersection,
//!   subtraction into at most two pieces), measurement, and iteration
//!   support (`Iterator`, `DoubleEndedIterator`, `FusedIterator`).
//!
//! ## Motivation
//!
//! Address-space bookkeeping manipulates spans whose upper bound can sit
//! exactly on the top of the representable space, which a closed-open
//! interval cannot express. The closed form keeps every operation total
//! over the full space at the cost of slightly more careful stepping,
//! which the `Resource` contract makes explicit.
//!
//! Refer to the `resource_range` module for detailed APIs and examples.

pub mod resource_range;
