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

use crate::resource::value::Resource;
use num_traits::{CheckedAdd, One};
use smallvec::SmallVec;
use std::{
    cmp::{max, min},
    iter::FusedIterator,
};

/// The error type for range construction and range combination.
///
/// Every variant reflects a logic error by the caller; none of them is
/// transient or recoverable by retrying.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum RangeError<R>
where
    R: Resource,
{
    /// Construction was attempted with `start > end`.
    InvalidRange {
        /// The offending start bound.
        start: R,
        /// The offending end bound.
        end: R,
    },
    /// `merge` was called on ranges that do not overlap.
    NotOverlapping,
    /// `merge_consecutive` was called on ranges that neither overlap nor
    /// are consecutive.
    NotContiguous,
}

impl<R> std::fmt::Display for RangeError<R>
where
    R: Resource + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidRange { start, end } => {
                write!(f, "Invalid range [{}..{}]", start, end)
            }
            Self::NotOverlapping => {
                write!(f, "Merge is only possible for overlapping ranges")
            }
            Self::NotContiguous => {
                write!(
                    f,
                    "Merge is only possible for overlapping or consecutive ranges"
                )
            }
        }
    }
}

impl<R> std::error::Error for RangeError<R> where R: Resource + std::fmt::Display {}

/// A closed interval `[start, end]` over one numbering space.
///
/// Both bounds are inclusive and `start == end` denotes a single-value
/// range, so a range is never empty and can reach the very top of its
/// space (`end == R::MAX`). Ranges are immutable; every operation yields a
/// new range or a collection of new ranges, and construction re-validates
/// the `start <= end` invariant on every path.
///
/// Two ranges are equal iff their starts and ends are respectively equal.
///
/// # Invariants
/// `start` must always be less than or equal to `end`.
///
/// # Examples
///
/// ```rust
/// # use ipmath_core::range::resource_range::ResourceRange;
///
/// let a = ResourceRange::new(0u32, 9).unwrap();
/// let b = ResourceRange::new(5u32, 15).unwrap();
/// assert!(a.overlaps(b));
/// assert_eq!(a.merge(b).unwrap(), ResourceRange::new(0u32, 15).unwrap());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ResourceRange<R>
where
    R: Resource,
{
    start: R,
    end: R,
}

/// An iterator over every value contained in a [`ResourceRange`].
///
/// The iterator is lazy and finite: it advances one step at a time via the
/// resource's `successor` (or `predecessor` from the back) and exhausts
/// after yielding the last bound. Obtaining it from [`ResourceRange::iter`]
/// never consumes the range, so iteration can be restarted at will.
///
/// # Examples
///
/// ```rust
/// # use ipmath_core::range::resource_range::ResourceRange;
///
/// let r = ResourceRange::new(1u8, 4).unwrap();
/// let values: Vec<_> = r.iter().collect();
/// assert_eq!(values, vec![1, 2, 3, 4]);
/// ```
pub struct ResourceRangeIter<R>
where
    R: Resource,
{
    // Unvisited closed sub-range, or `None` once exhausted.
    remaining: Option<(R, R)>,
}

impl<R> Iterator for ResourceRangeIter<R>
where
    R: Resource,
{
    type Item = R;

    fn next(&mut self) -> Option<Self::Item> {
        let (front, back) = self.remaining?;
        self.remaining = if front == back {
            None
        } else {
            let stepped = front
                .successor()
                .expect("ResourceRangeIter: front below back must have a successor");
            Some((stepped, back))
        };
        Some(front)
    }
}

impl<R> DoubleEndedIterator for ResourceRangeIter<R>
where
    R: Resource,
{
    fn next_back(&mut self) -> Option<Self::Item> {
        let (front, back) = self.remaining?;
        self.remaining = if front == back {
            None
        } else {
            let stepped = back
                .predecessor()
                .expect("ResourceRangeIter: back above front must have a predecessor");
            Some((front, stepped))
        };
        Some(back)
    }
}

impl<R> FusedIterator for ResourceRangeIter<R> where R: Resource {}

impl<R> ResourceRange<R>
where
    R: Resource,
{
    /// Creates a new `ResourceRange` spanning `[start, end]`.
    ///
    /// Returns [`RangeError::InvalidRange`] if `start > end`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use ipmath_core::range::resource_range::ResourceRange;
    ///
    /// assert!(ResourceRange::new(0u8, 10).is_ok());
    /// assert!(ResourceRange::new(10u8, 10).is_ok());
    /// assert!(ResourceRange::new(10u8, 0).is_err());
    /// ```
    #[inline]
    pub fn new(start: R, end: R) -> Result<Self, RangeError<R>> {
        if start <= end {
            Ok(Self { start, end })
        } else {
            Err(RangeError::InvalidRange { start, end })
        }
    }

    /// Creates a new `ResourceRange` without checking invariants in release
    /// builds.
    ///
    /// The caller must ensure `start <= end`. This function contains a
    /// `debug_assert!` to catch errors during development.
    #[inline]
    pub fn new_unchecked(start: R, end: R) -> Self {
        debug_assert!(
            start <= end,
            "Invalid range: start must be less than or equal to end"
        );
        Self { start, end }
    }

    /// Returns the inclusive start bound of the range.
    #[inline]
    pub const fn start(&self) -> R {
        self.start
    }

    /// Returns the inclusive end bound of the range.
    #[inline]
    pub const fn end(&self) -> R {
        self.end
    }

    /// Returns `true` if `value` lies within `[start, end]`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use ipmath_core::range::resource_range::ResourceRange;
    ///
    /// let r = ResourceRange::new(10u32, 20).unwrap();
    /// assert!(r.contains_value(10));
    /// assert!(r.contains_value(20));
    /// assert!(!r.contains_value(21));
    /// ```
    #[inline]
    pub fn contains_value(&self, value: R) -> bool {
        self.start <= value && value <= self.end
    }

    /// Returns `true` if `other` lies entirely within `self`.
    ///
    /// Every range contains itself.
    #[inline]
    pub fn contains(&self, other: Self) -> bool {
        self.start <= other.start && self.end >= other.end
    }

    /// Returns `true` if the two ranges share at least one value.
    ///
    /// This predicate is symmetric.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use ipmath_core::range::resource_range::ResourceRange;
    ///
    /// let a = ResourceRange::new(0u8, 10).unwrap();
    /// assert!(a.overlaps(ResourceRange::new(10u8, 15).unwrap()));
    /// assert!(!a.overlaps(ResourceRange::new(11u8, 15).unwrap()));
    /// ```
    #[inline]
    pub fn overlaps(&self, other: Self) -> bool {
        other.contains_value(self.start) || other.contains_value(self.end) || self.contains(other)
    }

    /// Returns `true` if one range's end coincides exactly with the
    /// other's start.
    ///
    /// Adjacency is bound equality, not a one-value gap: `[0, 5]` and
    /// `[5, 9]` are adjacent (and also overlap in the shared value 5),
    /// while `[0, 5]` and `[6, 9]` are not. See
    /// [`is_consecutive`](Self::is_consecutive) for the gap-free,
    /// overlap-free relation.
    #[inline]
    pub fn is_adjacent(&self, other: Self) -> bool {
        self.end == other.start || other.end == self.start
    }

    /// Returns `true` if stepping past one range's end lands exactly on
    /// the other's start: no gap and no overlap.
    ///
    /// A range ending at the top of the space is not consecutive with
    /// anything above it, since no successor exists there.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use ipmath_core::range::resource_range::ResourceRange;
    ///
    /// let a = ResourceRange::new(0u8, 5).unwrap();
    /// assert!(a.is_consecutive(ResourceRange::new(6u8, 9).unwrap()));
    /// assert!(!a.is_consecutive(ResourceRange::new(5u8, 9).unwrap()));
    /// assert!(!a.is_consecutive(ResourceRange::new(7u8, 9).unwrap()));
    /// ```
    #[inline]
    pub fn is_consecutive(&self, other: Self) -> bool {
        self.end.successor() == Some(other.start) || other.end.successor() == Some(self.start)
    }

    /// Merges two overlapping ranges into their hull
    /// `[min(starts), max(ends)]`.
    ///
    /// Returns [`RangeError::NotOverlapping`] if the ranges do not
    /// overlap. To merge ranges that merely touch without sharing a
    /// value, use [`merge_consecutive`](Self::merge_consecutive).
    pub fn merge(&self, other: Self) -> Result<Self, RangeError<R>> {
        if self.overlaps(other) {
            Ok(self.merged(other))
        } else {
            Err(RangeError::NotOverlapping)
        }
    }

    /// Merges two ranges that overlap or are consecutive.
    ///
    /// Returns [`RangeError::NotContiguous`] if the ranges are neither
    /// overlapping nor consecutive.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use ipmath_core::range::resource_range::ResourceRange;
    ///
    /// let a = ResourceRange::new(0u8, 5).unwrap();
    /// let b = ResourceRange::new(6u8, 9).unwrap();
    /// assert!(a.merge(b).is_err());
    /// assert_eq!(
    ///     a.merge_consecutive(b).unwrap(),
    ///     ResourceRange::new(0u8, 9).unwrap()
    /// );
    /// ```
    pub fn merge_consecutive(&self, other: Self) -> Result<Self, RangeError<R>> {
        if self.overlaps(other) || self.is_consecutive(other) {
            Ok(self.merged(other))
        } else {
            Err(RangeError::NotContiguous)
        }
    }

    #[inline]
    fn merged(&self, other: Self) -> Self {
        Self::new_unchecked(min(self.start, other.start), max(self.end, other.end))
    }

    /// Calculates the intersection `[max(starts), min(ends)]`.
    ///
    /// The caller must ensure the ranges overlap. For non-overlapping
    /// inputs the computed bounds violate `start <= end` and the
    /// construction surfaces [`RangeError::InvalidRange`]; that is the
    /// documented contract for misuse, not a silently empty result. Check
    /// [`overlaps`](Self::overlaps) first.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use ipmath_core::range::resource_range::ResourceRange;
    ///
    /// let a = ResourceRange::new(0u32, 10).unwrap();
    /// let b = ResourceRange::new(5u32, 15).unwrap();
    /// assert_eq!(a.intersection(b).unwrap(), ResourceRange::new(5u32, 10).unwrap());
    /// ```
    pub fn intersection(&self, other: Self) -> Result<Self, RangeError<R>> {
        Self::new(max(self.start, other.start), min(self.end, other.end))
    }

    /// Calculates the set difference `self - other` as an ordered sequence
    /// of disjoint ranges.
    ///
    /// # Returns
    ///
    /// A vector containing:
    /// * 0 ranges: if `other` fully covers `self`.
    /// * 1 range: if the ranges are disjoint, or `other` clips one side of
    ///   `self` (including overlaps flush with one of `self`'s bounds).
    /// * 2 ranges: if `other` sits strictly inside `self` without touching
    ///   either bound, splitting it in two.
    ///
    /// The case checks run in a fixed order; the same-start and same-end
    /// checks must precede the two-piece split so that a boundary-flush
    /// overlap yields exactly one remainder.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use ipmath_core::range::resource_range::ResourceRange;
    ///
    /// let r = ResourceRange::new(0u8, 10).unwrap();
    /// let hole = ResourceRange::new(4u8, 6).unwrap();
    ///
    /// let rest = r.remove(hole);
    /// assert_eq!(rest.len(), 2);
    /// assert_eq!(rest[0], ResourceRange::new(0u8, 3).unwrap());
    /// assert_eq!(rest[1], ResourceRange::new(7u8, 10).unwrap());
    /// ```
    pub fn remove(&self, other: Self) -> SmallVec<Self, 2> {
        if !self.overlaps(other) {
            return smallvec::smallvec![*self];
        }

        if other.contains(*self) {
            return SmallVec::new();
        }

        if !self.contains_value(other.start) && self.contains_value(other.end) {
            return smallvec::smallvec![Self::new_unchecked(Self::step_up(other.end), self.end)];
        }

        if self.contains_value(other.start) && !self.contains_value(other.end) {
            return smallvec::smallvec![Self::new_unchecked(
                self.start,
                Self::step_down(other.start)
            )];
        }

        if self.start == other.start {
            smallvec::smallvec![Self::new_unchecked(Self::step_up(other.end), self.end)]
        } else if self.end == other.end {
            smallvec::smallvec![Self::new_unchecked(self.start, Self::step_down(other.start))]
        } else {
            smallvec::smallvec![
                Self::new_unchecked(self.start, Self::step_down(other.start)),
                Self::new_unchecked(Self::step_up(other.end), self.end),
            ]
        }
    }

    // Stepping helpers for bounds already proven interior to `self`.

    #[inline]
    fn step_up(value: R) -> R {
        value
            .successor()
            .expect("value below the range end must have a successor")
    }

    #[inline]
    fn step_down(value: R) -> R {
        value
            .predecessor()
            .expect("value above the range start must have a predecessor")
    }

    /// Returns the number of values in the range, or `None` if the range
    /// covers the entire representation space and the count would not fit
    /// the representation width.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use ipmath_core::range::resource_range::ResourceRange;
    ///
    /// assert_eq!(ResourceRange::new(10u32, 19).unwrap().len(), Some(10));
    /// assert_eq!(ResourceRange::new(7u32, 7).unwrap().len(), Some(1));
    /// assert_eq!(ResourceRange::new(0u8, 255).unwrap().len(), None);
    /// ```
    #[inline]
    pub fn len(&self) -> Option<R::Repr> {
        (self.end.to_repr() - self.start.to_repr()).checked_add(&R::Repr::one())
    }

    /// Creates an iterator over every value in the range, in ascending
    /// order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use ipmath_core::range::resource_range::ResourceRange;
    ///
    /// let r = ResourceRange::new(3u8, 5).unwrap();
    /// assert_eq!(r.iter().collect::<Vec<_>>(), vec![3, 4, 5]);
    /// // Restartable: a fresh iterator starts over.
    /// assert_eq!(r.iter().count(), 3);
    /// ```
    #[inline]
    pub fn iter(&self) -> ResourceRangeIter<R> {
        ResourceRangeIter {
            remaining: Some((self.start, self.end)),
        }
    }
}

impl<R> std::fmt::Debug for ResourceRange<R>
where
    R: Resource,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResourceRange")
            .field("start", &self.start)
            .field("end", &self.end)
            .finish()
    }
}

impl<R> std::fmt::Display for ResourceRange<R>
where
    R: Resource + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}..{}]", self.start, self.end)
    }
}

impl<R> IntoIterator for ResourceRange<R>
where
    R: Resource,
{
    type Item = R;
    type IntoIter = ResourceRangeIter<R>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<R> IntoIterator for &ResourceRange<R>
where
    R: Resource,
{
    type Item = R;
    type IntoIter = ResourceRangeIter<R>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(start: u8, end: u8) -> ResourceRange<u8> {
        ResourceRange::new(start, end).unwrap()
    }

    #[test]
    fn test_construction_valid() {
        let range = r(10, 20);
        assert_eq!(range.start(), 10);
        assert_eq!(range.end(), 20);
    }

    #[test]
    fn test_construction_single_value() {
        let range = r(10, 10);
        assert_eq!(range.start(), 10);
        assert_eq!(range.end(), 10);
        assert_eq!(range.len(), Some(1));
    }

    #[test]
    fn test_construction_invalid() {
        assert_eq!(
            ResourceRange::new(20u8, 10),
            Err(RangeError::InvalidRange { start: 20, end: 10 })
        );
    }

    #[test]
    fn test_equality_is_componentwise() {
        assert_eq!(r(3, 7), r(3, 7));
        assert_ne!(r(3, 7), r(3, 8));
        assert_ne!(r(3, 7), r(4, 7));
    }

    #[test]
    fn test_contains_value() {
        let range = r(10, 20);
        assert!(range.contains_value(10));
        assert!(range.contains_value(15));
        assert!(range.contains_value(20));
        assert!(!range.contains_value(9));
        assert!(!range.contains_value(21));
    }

    #[test]
    fn test_contains_own_bounds() {
        for range in [r(0, 0), r(0, 255), r(42, 43)] {
            assert!(range.contains_value(range.start()));
            assert!(range.contains_value(range.end()));
        }
    }

    #[test]
    fn test_contains_range() {
        let range = r(10, 20);
        assert!(range.contains(range));
        assert!(range.contains(r(10, 15)));
        assert!(range.contains(r(15, 20)));
        assert!(range.contains(r(12, 18)));
        assert!(!range.contains(r(9, 15)));
        assert!(!range.contains(r(15, 21)));
        assert!(!range.contains(r(0, 5)));
    }

    #[test]
    fn test_overlaps() {
        let a = r(10, 20);

        // Disjoint on both sides.
        assert!(!a.overlaps(r(0, 8)));
        assert!(!a.overlaps(r(22, 30)));
        // Consecutive but not overlapping.
        assert!(!a.overlaps(r(0, 9)));
        assert!(!a.overlaps(r(21, 30)));
        // Sharing exactly one bound value.
        assert!(a.overlaps(r(0, 10)));
        assert!(a.overlaps(r(20, 30)));
        // Partial overlap, containment, identity.
        assert!(a.overlaps(r(5, 15)));
        assert!(a.overlaps(r(12, 18)));
        assert!(a.overlaps(r(5, 25)));
        assert!(a.overlaps(a));
    }

    #[test]
    fn test_overlaps_is_symmetric() {
        let cases = [
            (r(0, 10), r(5, 15)),
            (r(0, 10), r(10, 15)),
            (r(0, 10), r(11, 15)),
            (r(0, 10), r(2, 8)),
            (r(0, 0), r(0, 0)),
            (r(0, 10), r(20, 30)),
        ];
        for (a, b) in cases {
            assert_eq!(a.overlaps(b), b.overlaps(a));
        }
    }

    #[test]
    fn test_is_adjacent() {
        let a = r(10, 20);

        // Coincident bounds.
        assert!(a.is_adjacent(r(20, 30)));
        assert!(a.is_adjacent(r(0, 10)));
        // One-step gap is consecutive, not adjacent.
        assert!(!a.is_adjacent(r(21, 30)));
        // Plain overlap without a shared bound.
        assert!(!a.is_adjacent(r(15, 30)));
        // Disjoint.
        assert!(!a.is_adjacent(r(30, 40)));
    }

    #[test]
    fn test_is_consecutive() {
        let a = r(10, 20);

        assert!(a.is_consecutive(r(21, 30)));
        assert!(a.is_consecutive(r(0, 9)));
        // Shared bound overlaps instead.
        assert!(!a.is_consecutive(r(20, 30)));
        // Gap of one value.
        assert!(!a.is_consecutive(r(22, 30)));
    }

    #[test]
    fn test_is_consecutive_at_space_max() {
        // No successor above 255, so nothing is consecutive on that side.
        let top = r(250, 255);
        let below = r(0, 249);
        assert!(top.is_consecutive(below));
        assert!(below.is_consecutive(top));
        assert!(!top.is_consecutive(r(0, 100)));
    }

    #[test]
    fn test_merge() {
        let a = r(10, 20);

        assert_eq!(a.merge(r(15, 30)).unwrap(), r(10, 30));
        assert_eq!(a.merge(r(0, 10)).unwrap(), r(0, 20));
        assert_eq!(a.merge(r(12, 18)).unwrap(), a);
        assert_eq!(a.merge(a).unwrap(), a);
    }

    #[test]
    fn test_merge_hull_is_tight() {
        let a = r(10, 20);
        let b = r(5, 15);
        let merged = a.merge(b).unwrap();
        assert_eq!(merged.start(), min(a.start(), b.start()));
        assert_eq!(merged.end(), max(a.end(), b.end()));
        assert!(merged.contains(a));
        assert!(merged.contains(b));
    }

    #[test]
    fn test_merge_rejects_non_overlapping() {
        assert_eq!(r(10, 20).merge(r(21, 30)), Err(RangeError::NotOverlapping));
        assert_eq!(r(10, 20).merge(r(30, 40)), Err(RangeError::NotOverlapping));
    }

    #[test]
    fn test_merge_consecutive() {
        let a = r(10, 20);

        assert_eq!(a.merge_consecutive(r(21, 30)).unwrap(), r(10, 30));
        assert_eq!(a.merge_consecutive(r(0, 9)).unwrap(), r(0, 20));
        // Overlapping inputs still merge.
        assert_eq!(a.merge_consecutive(r(15, 30)).unwrap(), r(10, 30));
        // A real gap does not.
        assert_eq!(
            a.merge_consecutive(r(22, 30)),
            Err(RangeError::NotContiguous)
        );
    }

    #[test]
    fn test_intersection() {
        let a = r(10, 20);

        assert_eq!(a.intersection(r(15, 30)).unwrap(), r(15, 20));
        assert_eq!(a.intersection(r(0, 12)).unwrap(), r(10, 12));
        assert_eq!(a.intersection(r(12, 18)).unwrap(), r(12, 18));
        assert_eq!(a.intersection(r(20, 30)).unwrap(), r(20, 20));
    }

    #[test]
    fn test_intersection_is_idempotent() {
        let a = r(10, 20);
        assert_eq!(a.intersection(a).unwrap(), a);
    }

    #[test]
    fn test_intersection_misuse_surfaces_invalid_range() {
        // Disjoint inputs produce impossible bounds, by contract.
        assert_eq!(
            r(10, 20).intersection(r(25, 30)),
            Err(RangeError::InvalidRange { start: 25, end: 20 })
        );
    }

    #[test]
    fn test_remove_disjoint_returns_self() {
        let a = r(10, 20);
        let rest = a.remove(r(30, 40));
        assert_eq!(rest.len(), 1);
        assert_eq!(rest[0], a);
    }

    #[test]
    fn test_remove_fully_covered_returns_empty() {
        assert!(r(10, 20).remove(r(0, 30)).is_empty());
        assert!(r(10, 20).remove(r(10, 20)).is_empty());
    }

    #[test]
    fn test_remove_clips_low_end() {
        // Other spills below self: the tail remains.
        let rest = r(10, 20).remove(r(5, 15));
        assert_eq!(rest.len(), 1);
        assert_eq!(rest[0], r(16, 20));
    }

    #[test]
    fn test_remove_clips_high_end() {
        // Other spills above self: the head remains.
        let rest = r(10, 20).remove(r(15, 25));
        assert_eq!(rest.len(), 1);
        assert_eq!(rest[0], r(10, 14));
    }

    #[test]
    fn test_remove_flush_start_yields_single_tail() {
        let rest = r(10, 20).remove(r(10, 15));
        assert_eq!(rest.len(), 1);
        assert_eq!(rest[0], r(16, 20));
    }

    #[test]
    fn test_remove_flush_end_yields_single_head() {
        let rest = r(10, 20).remove(r(15, 20));
        assert_eq!(rest.len(), 1);
        assert_eq!(rest[0], r(10, 14));
    }

    #[test]
    fn test_remove_strict_interior_splits_in_two() {
        let rest = r(10, 20).remove(r(13, 17));
        assert_eq!(rest.len(), 2);
        assert_eq!(rest[0], r(10, 12));
        assert_eq!(rest[1], r(18, 20));
    }

    #[test]
    fn test_remove_single_value_interior() {
        let rest = r(10, 20).remove(r(15, 15));
        assert_eq!(rest.len(), 2);
        assert_eq!(rest[0], r(10, 14));
        assert_eq!(rest[1], r(16, 20));
    }

    #[test]
    fn test_remove_self_is_empty() {
        let a = r(10, 20);
        assert!(a.remove(a).is_empty());
    }

    #[test]
    fn test_remove_at_space_extremes() {
        let full = r(0, 255);

        let rest = full.remove(r(0, 0));
        assert_eq!(rest.len(), 1);
        assert_eq!(rest[0], r(1, 255));

        let rest = full.remove(r(255, 255));
        assert_eq!(rest.len(), 1);
        assert_eq!(rest[0], r(0, 254));

        let rest = full.remove(r(1, 254));
        assert_eq!(rest.len(), 2);
        assert_eq!(rest[0], r(0, 0));
        assert_eq!(rest[1], r(255, 255));
    }

    #[test]
    fn test_remove_is_set_difference() {
        // Exhaustive element check on a small space.
        let cases = [
            (r(10, 20), r(5, 15)),
            (r(10, 20), r(15, 25)),
            (r(10, 20), r(10, 15)),
            (r(10, 20), r(15, 20)),
            (r(10, 20), r(13, 17)),
            (r(10, 20), r(0, 30)),
            (r(10, 20), r(30, 40)),
            (r(0, 255), r(0, 127)),
        ];
        for (a, b) in cases {
            let rest = a.remove(b);
            for v in 0u8..=255 {
                let expected = a.contains_value(v) && !b.contains_value(v);
                let actual = rest.iter().any(|piece| piece.contains_value(v));
                assert_eq!(actual, expected, "value {} in {} - {}", v, a, b);
            }
            // Pieces are disjoint and not mergeable.
            if rest.len() == 2 {
                assert!(!rest[0].overlaps(rest[1]));
                assert!(!rest[0].is_consecutive(rest[1]));
            }
        }
    }

    #[test]
    fn test_len() {
        assert_eq!(r(10, 19).len(), Some(10));
        assert_eq!(r(0, 0).len(), Some(1));
        assert_eq!(r(0, 254).len(), Some(255));
        // The full space does not fit the 8-bit count.
        assert_eq!(r(0, 255).len(), None);
    }

    #[test]
    fn test_iterator() {
        let values: Vec<u8> = r(1, 4).iter().collect();
        assert_eq!(values, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_iterator_single_value() {
        let mut iter = r(5, 5).iter();
        assert_eq!(iter.next(), Some(5));
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_iterator_is_restartable() {
        let range = r(1, 3);
        assert_eq!(range.iter().count(), 3);
        assert_eq!(range.iter().count(), 3);
    }

    #[test]
    fn test_iterator_reaches_space_max() {
        let values: Vec<u8> = r(253, 255).iter().collect();
        assert_eq!(values, vec![253, 254, 255]);
    }

    #[test]
    fn test_iterator_full_space_terminates() {
        assert_eq!(r(0, 255).iter().count(), 256);
    }

    #[test]
    fn test_double_ended_iterator() {
        let mut iter = r(1, 4).iter();
        assert_eq!(iter.next(), Some(1));
        assert_eq!(iter.next_back(), Some(4));
        assert_eq!(iter.next_back(), Some(3));
        assert_eq!(iter.next(), Some(2));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next_back(), None);
    }

    #[test]
    fn test_fused_iterator() {
        let mut iter = r(0, 0).iter();
        assert_eq!(iter.next(), Some(0));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_into_iterator_trait() {
        let range = r(0, 3);
        let mut count = 0u8;
        for v in range {
            assert_eq!(v, count);
            count += 1;
        }
        assert_eq!(count, 4);
    }

    #[test]
    fn test_into_iterator_ref_trait() {
        let range = r(0, 3);
        for (count, v) in (&range).into_iter().enumerate() {
            assert_eq!(v as usize, count);
        }
        // range is still valid here
        assert_eq!(range.len(), Some(4));
    }

    #[test]
    fn test_traits_display_debug() {
        let range = r(10, 20);
        assert_eq!(format!("{}", range), "[10..20]");
        assert_eq!(format!("{:?}", range), "ResourceRange { start: 10, end: 20 }");
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            format!("{}", RangeError::InvalidRange { start: 9u8, end: 3 }),
            "Invalid range [9..3]"
        );
        assert_eq!(
            format!("{}", RangeError::<u8>::NotOverlapping),
            "Merge is only possible for overlapping ranges"
        );
        assert_eq!(
            format!("{}", RangeError::<u8>::NotContiguous),
            "Merge is only possible for overlapping or consecutive ranges"
        );
    }

    #[test]
    fn test_operations_on_wide_space() {
        // Same algebra, 128-bit width.
        let a = ResourceRange::new(0u128, u128::MAX).unwrap();
        assert!(a.contains_value(u128::MAX));
        assert_eq!(a.len(), None);

        let rest = a.remove(ResourceRange::new(1u128, u128::MAX - 1).unwrap());
        assert_eq!(rest.len(), 2);
        assert_eq!(rest[0], ResourceRange::new(0u128, 0).unwrap());
        assert_eq!(
            rest[1],
            ResourceRange::new(u128::MAX, u128::MAX).unwrap()
        );
    }
}
