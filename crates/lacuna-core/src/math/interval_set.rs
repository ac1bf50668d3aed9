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

//! IntervalSet: an index-addressable sequence of half-open intervals.
//!
//! Unlike a normalizing set, `IntervalSet` keeps whatever order and overlap
//! its contents have. Callers build sets in any order; algorithms sort them
//! into canonical order (ascending by `(start, end)`) and then splice pieces
//! in and out by index while they sweep.
//!
//! Canonical form (as produced by merging a sorted set):
//!    - intervals are sorted by `(start, end)`
//!    - neighbours neither overlap nor touch
//!    - semantics are half-open `[start, end)`
//!
//! Complexity:
//!    - sort: `O(n log n)`
//!    - splice_at: `O(n)` (shifts the tail)
//!    - replace_at, get: `O(1)`

use super::interval::Interval;
use num_traits::PrimInt;

/// An ordered collection of `[start, end)` intervals.
///
/// Semantically a set of covered time: duplicates and order carry no meaning
/// for the caller, but the subtraction sweep relies on sorted order
/// internally. The empty set is a valid value meaning "no time".
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct IntervalSet<T> {
    intervals: Vec<Interval<T>>,
}

impl<T> IntervalSet<T> {
    /// Creates a new, empty `IntervalSet`.
    ///
    /// The underlying vector does not allocate until the first element is pushed.
    #[inline]
    pub fn new() -> Self {
        Self {
            intervals: Vec::new(),
        }
    }

    /// Creates a new, empty `IntervalSet` with at least the specified capacity.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            intervals: Vec::with_capacity(capacity),
        }
    }

    /// Creates a new `IntervalSet` from a vector of intervals, keeping their
    /// order as given.
    #[inline]
    pub fn from_vec(intervals: Vec<Interval<T>>) -> Self {
        Self { intervals }
    }

    /// Returns the number of intervals in the set.
    #[inline]
    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    /// Returns `true` if the set contains no intervals.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// Returns a slice containing all intervals in their current order.
    #[inline]
    pub fn as_slice(&self) -> &[Interval<T>] {
        &self.intervals
    }

    /// Returns an iterator over the intervals in their current order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Interval<T>> {
        self.intervals.iter()
    }

    /// Returns the interval at `index`, or `None` if out of bounds.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&Interval<T>> {
        self.intervals.get(index)
    }

    /// Appends an interval to the end of the set.
    #[inline]
    pub fn push(&mut self, interval: Interval<T>) {
        self.intervals.push(interval);
    }

    /// Clears the set, removing all intervals.
    ///
    /// Note that this method has no effect on the allocated capacity of the
    /// underlying vector.
    #[inline]
    pub fn clear(&mut self) {
        self.intervals.clear();
    }

    /// Consumes the set and returns the underlying vector.
    #[inline]
    pub fn into_intervals(self) -> Vec<Interval<T>> {
        self.intervals
    }
}

impl<T> IntervalSet<T>
where
    T: Ord + Copy,
{
    /// Sorts the set in place into canonical order: ascending by start, ties
    /// broken by end.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use lacuna_core::math::{interval::Interval, interval_set::IntervalSet};
    ///
    /// let mut set: IntervalSet<i32> = [(13, 15), (9, 11), (9, 10)]
    ///     .into_iter()
    ///     .map(|(s, e)| Interval::new(s, e))
    ///     .collect();
    /// set.sort();
    /// assert_eq!(set.as_slice()[0], Interval::new(9, 10));
    /// assert_eq!(set.as_slice()[2], Interval::new(13, 15));
    /// ```
    #[inline]
    pub fn sort(&mut self) {
        // Equal keys are identical intervals, so stability is unobservable.
        self.intervals.sort_unstable();
    }

    /// Returns a sorted copy of the set, leaving `self` untouched.
    #[inline]
    pub fn sorted(&self) -> Self {
        let mut copy = self.clone();
        copy.sort();
        copy
    }

    /// Returns `true` if the set is in canonical order.
    #[inline]
    pub fn is_sorted(&self) -> bool {
        self.intervals.windows(2).all(|w| w[0] <= w[1])
    }

    /// Returns `true` if the set is sorted and no two neighbours overlap or
    /// touch, i.e. if merging it would change nothing.
    #[inline]
    pub fn is_canonical(&self) -> bool {
        self.intervals.windows(2).all(|w| w[0].end() < w[1].start())
    }

    /// Returns `true` if any interval in the set contains `instant`.
    #[inline]
    pub fn contains_point(&self, instant: T) -> bool {
        self.intervals.iter().any(|iv| iv.contains_point(instant))
    }

    /// Replaces the single interval at `index` with the non-degenerate
    /// intervals yielded by `pieces`, shifting the tail as needed.
    ///
    /// Degenerate pieces are dropped rather than inserted, so the set may
    /// shrink by one, stay the same size, or grow. Returns the number of
    /// pieces actually inserted.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use lacuna_core::math::{interval::Interval, interval_set::IntervalSet};
    ///
    /// let mut set = IntervalSet::from_vec(vec![Interval::new(0, 10), Interval::new(20, 30)]);
    /// let pieces = [Interval::new(0, 4), Interval::new(4, 4), Interval::new(6, 10)];
    /// let inserted = set.splice_at(0, pieces);
    /// assert_eq!(inserted, 2);
    /// assert_eq!(
    ///     set.as_slice(),
    ///     &[Interval::new(0, 4), Interval::new(6, 10), Interval::new(20, 30)]
    /// );
    /// ```
    pub fn splice_at<I>(&mut self, index: usize, pieces: I) -> usize
    where
        I: IntoIterator<Item = Interval<T>>,
    {
        assert!(
            index < self.intervals.len(),
            "called `IntervalSet::splice_at` with index {} but the set has {} intervals",
            index,
            self.intervals.len()
        );

        let before = self.intervals.len();
        self.intervals.splice(
            index..index + 1,
            pieces.into_iter().filter(|iv| !iv.is_empty()),
        );
        self.intervals.len() + 1 - before
    }

    /// Overwrites the interval at `index`, keeping the set's cardinality.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    #[inline]
    pub fn replace_at(&mut self, index: usize, interval: Interval<T>) {
        let len = self.intervals.len();
        match self.intervals.get_mut(index) {
            Some(slot) => *slot = interval,
            None => panic!(
                "called `IntervalSet::replace_at` with index {} but the set has {} intervals",
                index, len
            ),
        }
    }
}

impl<T> IntervalSet<T>
where
    T: PrimInt,
{
    /// Returns the summed length of all intervals, saturating at `T::max_value()`.
    ///
    /// For a canonical set this is exactly the amount of covered time; for
    /// an overlapping set, shared time is counted more than once. A single
    /// interval can be longer than `T` can represent (e.g. `[-10, i32::MAX)`),
    /// so both the lengths and the sum saturate instead of overflowing.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use lacuna_core::math::{interval::Interval, interval_set::IntervalSet};
    ///
    /// let set = IntervalSet::from_vec(vec![Interval::new(0, 10), Interval::new(20, 25)]);
    /// assert_eq!(set.measure(), 15);
    ///
    /// let wide = IntervalSet::from_vec(vec![Interval::new(-10i32, i32::MAX)]);
    /// assert_eq!(wide.measure(), i32::MAX);
    /// ```
    #[inline]
    pub fn measure(&self) -> T {
        let mut total = T::zero();
        for iv in &self.intervals {
            total = total.saturating_add(iv.end().saturating_sub(iv.start()));
        }
        total
    }

    /// Returns the summed length of all intervals, or `None` if it does not
    /// fit in `T`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use lacuna_core::math::{interval::Interval, interval_set::IntervalSet};
    ///
    /// let set = IntervalSet::from_vec(vec![Interval::new(0u8, 200), Interval::new(0, 100)]);
    /// assert_eq!(set.checked_measure(), None);
    /// ```
    #[inline]
    pub fn checked_measure(&self) -> Option<T> {
        let mut total = T::zero();
        for iv in &self.intervals {
            let length = iv.end().checked_sub(&iv.start())?;
            total = total.checked_add(&length)?;
        }
        Some(total)
    }
}

impl<T> Default for IntervalSet<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> std::fmt::Debug for IntervalSet<T>
where
    T: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.intervals.iter()).finish()
    }
}

impl<T> std::fmt::Display for IntervalSet<T>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{")?;
        for (i, iv) in self.intervals.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", iv)?;
        }
        write!(f, "}}")
    }
}

impl<T> From<Vec<Interval<T>>> for IntervalSet<T> {
    #[inline]
    fn from(intervals: Vec<Interval<T>>) -> Self {
        Self::from_vec(intervals)
    }
}

impl<T> AsRef<[Interval<T>]> for IntervalSet<T> {
    #[inline]
    fn as_ref(&self) -> &[Interval<T>] {
        &self.intervals
    }
}

impl<T> FromIterator<Interval<T>> for IntervalSet<T> {
    #[inline]
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Interval<T>>,
    {
        Self {
            intervals: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<Interval<T>> for IntervalSet<T> {
    #[inline]
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = Interval<T>>,
    {
        self.intervals.extend(iter);
    }
}

impl<T> IntoIterator for IntervalSet<T> {
    type Item = Interval<T>;
    type IntoIter = std::vec::IntoIter<Interval<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.intervals.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a IntervalSet<T> {
    type Item = &'a Interval<T>;
    type IntoIter = std::slice::Iter<'a, Interval<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.intervals.iter()
    }
}
