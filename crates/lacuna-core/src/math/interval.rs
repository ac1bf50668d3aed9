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

use crate::error::MalformedIntervalError;
use std::cmp::{max, min};

/// A half-open interval `[start, end)` between two instants.
///
/// The instant type `T` is opaque: the interval only ever compares instants,
/// so any totally ordered `Copy` type works. Two intervals that merely touch
/// (one ends exactly where the other starts) share no time.
///
/// Ordering is lexicographic by `(start, end)`, which is the canonical order
/// used to sort interval sets.
///
/// # Invariants
/// `start` must always be less than or equal to `end`. An interval with
/// `start == end` is *degenerate*: it is a valid value that covers nothing.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Interval<T> {
    start: T,
    end: T,
}

impl<T> Interval<T>
where
    T: Ord + Copy,
{
    /// Creates a new `Interval`.
    ///
    /// # Panics
    ///
    /// Panics if `start > end`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use lacuna_core::math::interval::Interval;
    ///
    /// let iv = Interval::new(540, 600);
    /// assert_eq!(iv.start(), 540);
    /// assert_eq!(iv.end(), 600);
    /// ```
    #[inline]
    pub fn new(start: T, end: T) -> Self {
        assert!(
            start <= end,
            "Invalid interval: start must be less than or equal to end"
        );
        Self { start, end }
    }

    /// Creates a new `Interval` if the inputs are valid.
    ///
    /// # Errors
    ///
    /// Returns `MalformedIntervalError` if `start > end`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use lacuna_core::math::interval::Interval;
    ///
    /// assert!(Interval::try_new(0, 10).is_ok());
    /// assert!(Interval::try_new(10, 0).is_err());
    /// ```
    #[inline]
    pub fn try_new(start: T, end: T) -> Result<Self, MalformedIntervalError<T>> {
        if start <= end {
            Ok(Self { start, end })
        } else {
            Err(MalformedIntervalError { start, end })
        }
    }

    /// Creates a new `Interval` without checking invariants in release builds.
    ///
    /// The caller must ensure `start <= end`. Used on hot paths where the
    /// bounds are derived from already validated intervals.
    #[inline]
    pub fn new_unchecked(start: T, end: T) -> Self {
        debug_assert!(
            start <= end,
            "Invalid interval: start must be less than or equal to end"
        );
        Self { start, end }
    }

    /// Returns the inclusive start instant.
    #[inline]
    pub const fn start(&self) -> T {
        self.start
    }

    /// Returns the exclusive end instant.
    #[inline]
    pub const fn end(&self) -> T {
        self.end
    }

    /// Returns `true` if the interval is degenerate (`start == end`).
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use lacuna_core::math::interval::Interval;
    ///
    /// assert!(Interval::new(10, 10).is_empty());
    /// assert!(!Interval::new(10, 11).is_empty());
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns `true` if this interval shares some time with `other`.
    ///
    /// Touching intervals do not intersect.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use lacuna_core::math::interval::Interval;
    ///
    /// let a = Interval::new(0, 10);
    /// assert!(a.intersects(Interval::new(5, 15)));
    /// assert!(!a.intersects(Interval::new(10, 20)));
    /// ```
    #[inline]
    pub fn intersects(&self, other: Self) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Returns `true` if the intervals share a boundary instant.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use lacuna_core::math::interval::Interval;
    ///
    /// let a = Interval::new(0, 10);
    /// assert!(a.adjacent(Interval::new(10, 20)));
    /// assert!(a.adjacent(Interval::new(-5, 0)));
    /// ```
    #[inline]
    pub fn adjacent(&self, other: Self) -> bool {
        self.end == other.start || other.end == self.start
    }

    /// Returns `true` if the intervals either intersect or touch, that is,
    /// if merging them yields a single contiguous interval.
    #[inline]
    pub fn intersects_or_adjacent(&self, other: Self) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    /// Returns `true` if `instant` lies in `[start, end)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use lacuna_core::math::interval::Interval;
    ///
    /// let iv = Interval::new(0, 10);
    /// assert!(iv.contains_point(0));
    /// assert!(!iv.contains_point(10));
    /// ```
    #[inline]
    pub fn contains_point(&self, instant: T) -> bool {
        self.start <= instant && instant < self.end
    }

    /// Returns `true` if `other` lies entirely within `self`.
    #[inline]
    pub fn contains_interval(&self, other: Self) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// Returns the shared portion of two intervals, or `None` if they are
    /// disjoint or only touch.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use lacuna_core::math::interval::Interval;
    ///
    /// let a = Interval::new(0, 10);
    /// assert_eq!(a.intersection(Interval::new(5, 15)), Some(Interval::new(5, 10)));
    /// assert_eq!(a.intersection(Interval::new(10, 15)), None);
    /// ```
    #[inline]
    pub fn intersection(&self, other: Self) -> Option<Self> {
        let new_start = max(self.start, other.start);
        let new_end = min(self.end, other.end);

        if new_start < new_end {
            Some(Self::new_unchecked(new_start, new_end))
        } else {
            None
        }
    }
}

impl<T> Default for Interval<T>
where
    T: Default,
{
    #[inline]
    fn default() -> Self {
        Self {
            start: T::default(),
            end: T::default(),
        }
    }
}

impl<T> std::fmt::Debug for Interval<T>
where
    T: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Interval")
            .field("start", &self.start)
            .field("end", &self.end)
            .finish()
    }
}

impl<T> std::fmt::Display for Interval<T>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

impl<T> std::ops::RangeBounds<T> for Interval<T> {
    fn start_bound(&self) -> std::ops::Bound<&T> {
        std::ops::Bound::Included(&self.start)
    }

    fn end_bound(&self) -> std::ops::Bound<&T> {
        std::ops::Bound::Excluded(&self.end)
    }
}

impl<T> From<std::ops::Range<T>> for Interval<T>
where
    T: Ord + Copy,
{
    /// # Panics
    ///
    /// Panics if `range.start > range.end`.
    #[inline]
    fn from(range: std::ops::Range<T>) -> Self {
        Self::new(range.start, range.end)
    }
}

impl<T> From<Interval<T>> for std::ops::Range<T> {
    #[inline]
    fn from(iv: Interval<T>) -> Self {
        std::ops::Range {
            start: iv.start,
            end: iv.end,
        }
    }
}
