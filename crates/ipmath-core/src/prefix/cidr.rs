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

use crate::{range::resource_range::ResourceRange, resource::value::Resource};
use num_traits::{CheckedAdd, One, PrimInt, Zero};

/// Returns `true` if the range is exactly one aligned power-of-two block
/// of its numbering space.
///
/// A range `[start, end]` is a valid prefix iff its size
/// `end - start + 1` is a power of two and `start` is a multiple of that
/// size. The check works purely on the numeric bounds: how the range was
/// constructed never affects the result.
///
/// The size rule needs one bit more than the space width when the range
/// covers the whole space (`size = 2^W`). Instead of widening, the check
/// uses `span = start ^ end`: the range is a prefix iff `span` has the
/// form `2^k - 1` and `start` has no bit in common with it, which is
/// equivalent and total over every width up to 128 bits.
///
/// # Examples
///
/// ```rust
/// # use ipmath_core::prefix::cidr::is_valid_prefix;
/// # use ipmath_core::range::resource_range::ResourceRange;
///
/// // 0.0.0.0/0: the whole 32-bit space.
/// let all = ResourceRange::new(0u32, u32::MAX).unwrap();
/// assert!(is_valid_prefix(&all));
///
/// // A single address is the longest possible prefix.
/// let one = ResourceRange::new(0xC000_0201u32, 0xC000_0201).unwrap();
/// assert!(is_valid_prefix(&one));
///
/// // Size 4 but start 1 is not 4-aligned.
/// let skewed = ResourceRange::new(1u32, 4).unwrap();
/// assert!(!is_valid_prefix(&skewed));
/// ```
pub fn is_valid_prefix<R>(range: &ResourceRange<R>) -> bool
where
    R: Resource,
{
    let start = range.start().to_repr();
    let span = start ^ range.end().to_repr();

    // Alignment: the low bits covered by the span must be zero in start.
    if start & span != R::Repr::zero() {
        return false;
    }

    // Block shape: span must be of the form 2^k - 1 (all-ones low block,
    // including the empty block for a single value).
    match span.checked_add(&R::Repr::one()) {
        Some(size) => span & size == R::Repr::zero(),
        // span fills the representation, so the range is the whole space.
        None => true,
    }
}

/// Returns the CIDR prefix length of a valid prefix range, or `None` if
/// the range is not a valid prefix.
///
/// The length is `W - log2(size)` for the space's bit width `W`: the whole
/// space maps to `/0`, a single value to `/W`.
///
/// # Examples
///
/// ```rust
/// # use ipmath_core::prefix::cidr::prefix_len;
/// # use ipmath_core::range::resource_range::ResourceRange;
///
/// let all = ResourceRange::new(0u32, u32::MAX).unwrap();
/// assert_eq!(prefix_len(&all), Some(0));
///
/// let block = ResourceRange::new(0xC000_0200u32, 0xC000_02FF).unwrap();
/// assert_eq!(prefix_len(&block), Some(24));
///
/// let ragged = ResourceRange::new(1u32, 3).unwrap();
/// assert_eq!(prefix_len(&ragged), None);
/// ```
pub fn prefix_len<R>(range: &ResourceRange<R>) -> Option<u32>
where
    R: Resource,
{
    if is_valid_prefix(range) {
        let span = range.start().to_repr() ^ range.end().to_repr();
        Some(R::BITS - span.count_ones())
    } else {
        None
    }
}
