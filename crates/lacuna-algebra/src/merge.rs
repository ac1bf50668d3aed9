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

//! Coalescing of sorted interval sets.
//!
//! `merge` is the standard single-pass sweep: keep one open accumulator,
//! extend it while the next interval overlaps or touches it, and close it as
//! soon as a gap appears. The input must already be sorted by
//! `(start, end)`; `coalesce` sorts a copy first for arbitrary input.

use lacuna_core::math::{interval::Interval, interval_set::IntervalSet};

/// Merges a sorted interval set into its minimal equivalent: sorted, with no
/// two neighbours overlapping or touching.
///
/// Empty input yields an empty set and a single interval is returned as is.
///
/// # Panics
///
/// In debug builds, panics if `set` is not sorted. Release builds skip the
/// check and produce an unspecified (but memory-safe) result.
///
/// Complexity: `O(n)`.
///
/// # Examples
///
/// ```rust
/// # use lacuna_core::math::{interval::Interval, interval_set::IntervalSet};
/// # use lacuna_algebra::merge::merge;
///
/// let set = IntervalSet::from_vec(vec![
///     Interval::new(540, 720),
///     Interval::new(585, 780),
///     Interval::new(645, 900),
///     Interval::new(1065, 1080),
/// ]);
/// let merged = merge(&set);
/// assert_eq!(merged.as_slice(), &[Interval::new(540, 900), Interval::new(1065, 1080)]);
/// ```
pub fn merge<T>(set: &IntervalSet<T>) -> IntervalSet<T>
where
    T: Ord + Copy,
{
    debug_assert!(
        set.is_sorted(),
        "called `merge` with an interval set that is not sorted"
    );

    let mut iter = set.iter().copied();
    let Some(first) = iter.next() else {
        return IntervalSet::new();
    };

    let mut merged = IntervalSet::with_capacity(set.len());
    let mut open_start = first.start();
    let mut open_end = first.end();

    for next in iter {
        if next.start() > open_end {
            merged.push(Interval::new_unchecked(open_start, open_end));
            open_start = next.start();
            open_end = next.end();
        } else if next.end() >= open_end {
            open_end = next.end();
        }
    }
    merged.push(Interval::new_unchecked(open_start, open_end));

    merged
}

/// Sorts a copy of `set` and merges it, accepting input in any order.
///
/// # Examples
///
/// ```rust
/// # use lacuna_core::math::{interval::Interval, interval_set::IntervalSet};
/// # use lacuna_algebra::merge::coalesce;
///
/// let set = IntervalSet::from_vec(vec![Interval::new(5, 8), Interval::new(0, 5)]);
/// assert_eq!(coalesce(&set).as_slice(), &[Interval::new(0, 8)]);
/// ```
#[inline]
pub fn coalesce<T>(set: &IntervalSet<T>) -> IntervalSet<T>
where
    T: Ord + Copy,
{
    merge(&set.sorted())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    fn set(pairs: &[(i32, i32)]) -> IntervalSet<i32> {
        pairs.iter().map(|&(s, e)| Interval::new(s, e)).collect()
    }

    fn tr(start: &str, end: &str) -> Interval<NaiveTime> {
        Interval::new(
            NaiveTime::parse_from_str(start, "%H:%M").unwrap(),
            NaiveTime::parse_from_str(end, "%H:%M").unwrap(),
        )
    }

    #[test]
    fn test_merge_empty() {
        assert!(merge(&set(&[])).is_empty());
    }

    #[test]
    fn test_merge_single() {
        assert_eq!(merge(&set(&[(3, 7)])), set(&[(3, 7)]));
    }

    #[test]
    fn test_merge_overlapping_chain() {
        let input: IntervalSet<NaiveTime> = [
            tr("09:00", "12:00"),
            tr("09:45", "13:00"),
            tr("10:45", "15:00"),
            tr("17:45", "18:00"),
        ]
        .into_iter()
        .collect();
        let merged = merge(&input);
        assert_eq!(
            merged.as_slice(),
            &[tr("09:00", "15:00"), tr("17:45", "18:00")]
        );
    }

    #[test]
    fn test_merge_touching() {
        assert_eq!(merge(&set(&[(0, 5), (5, 10)])), set(&[(0, 10)]));
    }

    #[test]
    fn test_merge_keeps_gaps() {
        assert_eq!(merge(&set(&[(0, 5), (6, 10)])), set(&[(0, 5), (6, 10)]));
    }

    #[test]
    fn test_merge_never_shrinks() {
        // The contained interval must not pull the accumulator's end back.
        assert_eq!(merge(&set(&[(0, 10), (2, 4), (9, 12)])), set(&[(0, 12)]));
    }

    #[test]
    fn test_merge_is_idempotent() {
        let once = merge(&set(&[(0, 3), (1, 4), (6, 8), (8, 9), (20, 21)]));
        assert_eq!(merge(&once), once);
        assert!(once.is_canonical());
    }

    #[test]
    fn test_merge_preserves_measure() {
        let input = set(&[(0, 3), (1, 4), (6, 8), (8, 9), (20, 21)]);
        let merged = merge(&input);
        assert_eq!(merged, set(&[(0, 4), (6, 9), (20, 21)]));
        for t in -1..25 {
            assert_eq!(
                input.contains_point(t),
                merged.contains_point(t),
                "t = {}",
                t
            );
        }
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "called `merge` with an interval set that is not sorted")]
    fn test_merge_rejects_unsorted_in_debug() {
        merge(&set(&[(5, 6), (0, 1)]));
    }

    #[test]
    fn test_coalesce_unsorted() {
        let input = set(&[(20, 21), (1, 4), (0, 3)]);
        assert_eq!(coalesce(&input), set(&[(0, 4), (20, 21)]));
        // The input is left untouched.
        assert_eq!(input, set(&[(20, 21), (1, 4), (0, 3)]));
    }
}
