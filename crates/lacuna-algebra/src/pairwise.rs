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

//! Single-interval subtraction.
//!
//! `subtract(minuend, subtractor)` removes from `minuend` whatever time it
//! shares with `subtractor`. It reports two things:
//!
//! - `result`: the surviving piece(s) of the minuend (zero, one, or two).
//! - `remainder`: the piece of the subtractor extending past the minuend's
//!   end, which the sweep carries forward to later minuend pieces.
//!
//! Cutting never produces a degenerate piece: a zero-length result piece is
//! dropped and a zero-length remainder is reported as absent. A minuend the
//! subtractor does not touch (cases 10 and 11) is returned as is, even when
//! it is itself zero-length.

use crate::{error::InvariantViolation, relation::Relation};
use lacuna_core::math::interval::Interval;
use smallvec::{SmallVec, smallvec};

/// Outcome of subtracting one interval from another.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct PairwiseDifference<T> {
    minuend: Interval<T>,
    subtractor: Interval<T>,
    relation: Relation,
    result: SmallVec<[Interval<T>; 2]>,
    remainder: Option<Interval<T>>,
}

impl<T> PairwiseDifference<T>
where
    T: Ord + Copy,
{
    /// Returns the minuend this difference was computed from.
    #[inline]
    pub fn minuend(&self) -> Interval<T> {
        self.minuend
    }

    /// Returns the subtractor this difference was computed from.
    #[inline]
    pub fn subtractor(&self) -> Interval<T> {
        self.subtractor
    }

    /// Returns how the subtractor was positioned relative to the minuend.
    #[inline]
    pub fn relation(&self) -> Relation {
        self.relation
    }

    /// Returns what is left of the minuend, in ascending order.
    #[inline]
    pub fn result(&self) -> &[Interval<T>] {
        &self.result
    }

    /// Returns the unconsumed tail of the subtractor, if any.
    #[inline]
    pub fn remainder(&self) -> Option<Interval<T>> {
        self.remainder
    }

    /// Returns `true` if the minuend came through untouched, i.e. the result
    /// is exactly the single original interval.
    #[inline]
    pub fn is_unchanged(&self) -> bool {
        self.result.len() == 1 && self.result[0] == self.minuend
    }

    /// Consumes the difference and returns `(result, remainder)`.
    #[inline]
    pub fn into_parts(self) -> (SmallVec<[Interval<T>; 2]>, Option<Interval<T>>) {
        (self.result, self.remainder)
    }
}

/// Builds the surviving pieces, dropping any that are zero-length.
#[inline(always)]
fn pieces<T, const N: usize>(bounds: [(T, T); N]) -> SmallVec<[Interval<T>; 2]>
where
    T: Ord + Copy,
{
    bounds
        .into_iter()
        .filter(|(start, end)| start < end)
        .map(|(start, end)| Interval::new_unchecked(start, end))
        .collect()
}

/// Builds the remainder, reporting a zero-length one as absent.
#[inline(always)]
fn remainder<T>(start: T, end: T) -> Option<Interval<T>>
where
    T: Ord + Copy,
{
    (start < end).then(|| Interval::new_unchecked(start, end))
}

/// Subtracts `subtractor` from `minuend`.
///
/// # Errors
///
/// Returns `InvariantViolation` if the pair falls outside every subtraction
/// case (see `Relation::classify`).
///
/// # Examples
///
/// ```rust
/// # use lacuna_core::math::interval::Interval;
/// # use lacuna_algebra::pairwise::try_subtract;
///
/// let diff = try_subtract(Interval::new(9, 10), Interval::new(8, 11)).unwrap();
/// assert!(diff.result().is_empty());
/// assert_eq!(diff.remainder(), Some(Interval::new(10, 11)));
/// ```
pub fn try_subtract<T>(
    minuend: Interval<T>,
    subtractor: Interval<T>,
) -> Result<PairwiseDifference<T>, InvariantViolation<T>>
where
    T: Ord + Copy,
{
    let relation = Relation::classify(minuend, subtractor)?;

    let (s1, e1) = (minuend.start(), minuend.end());
    let (s2, e2) = (subtractor.start(), subtractor.end());

    let (result, remainder) = match relation {
        Relation::Identical => (pieces([]), None),
        Relation::SharedStartOverhang => (pieces([]), remainder(e1, e2)),
        Relation::SharedStartInside => (pieces([(e2, e1)]), None),
        Relation::SharedEndInside => (pieces([(s1, s2)]), None),
        Relation::SharedEndOverhang => (pieces([]), None),
        Relation::OverlapsTail => (pieces([(s1, s2)]), remainder(e1, e2)),
        Relation::StrictlyInside => (pieces([(s1, s2), (e2, e1)]), None),
        Relation::StrictlyEncloses => (pieces([]), remainder(e1, e2)),
        Relation::OverlapsHead => (pieces([(e2, e1)]), None),
        Relation::Before => (smallvec![minuend], None),
        Relation::After => (smallvec![minuend], remainder(s2, e2)),
    };

    Ok(PairwiseDifference {
        minuend,
        subtractor,
        relation,
        result,
        remainder,
    })
}

/// Subtracts `subtractor` from `minuend`.
///
/// # Panics
///
/// Panics if the pair falls outside every subtraction case. That is a broken
/// contract on the instant type, not a recoverable condition.
///
/// # Examples
///
/// ```rust
/// # use lacuna_core::math::interval::Interval;
/// # use lacuna_algebra::pairwise::subtract;
///
/// let diff = subtract(Interval::new(480, 660), Interval::new(540, 600));
/// assert_eq!(diff.result(), &[Interval::new(480, 540), Interval::new(600, 660)]);
/// assert_eq!(diff.remainder(), None);
/// ```
#[inline]
pub fn subtract<T>(minuend: Interval<T>, subtractor: Interval<T>) -> PairwiseDifference<T>
where
    T: Ord + Copy + std::fmt::Debug,
{
    match try_subtract(minuend, subtractor) {
        Ok(diff) => diff,
        Err(violation) => panic!("called `subtract` on an unclassifiable pair: {}", violation),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::merge::coalesce;
    use chrono::NaiveTime;
    use lacuna_core::math::interval_set::IntervalSet;
    use std::cell::Cell;

    fn hm(s: &str) -> NaiveTime {
        NaiveTime::parse_from_str(s, "%H:%M").unwrap()
    }

    fn tr(start: &str, end: &str) -> Interval<NaiveTime> {
        Interval::new(hm(start), hm(end))
    }

    fn iv(start: i32, end: i32) -> Interval<i32> {
        Interval::new(start, end)
    }

    #[test]
    fn test_case_table() {
        // (minuend, subtractor, result, remainder)
        type Row = (Interval<i32>, Interval<i32>, Vec<Interval<i32>>, Option<Interval<i32>>);
        let table: [Row; 11] = [
            (iv(9, 10), iv(9, 10), vec![], None),
            (iv(9, 10), iv(9, 11), vec![], Some(iv(10, 11))),
            (iv(9, 11), iv(9, 10), vec![iv(10, 11)], None),
            (iv(8, 11), iv(9, 11), vec![iv(8, 9)], None),
            (iv(9, 11), iv(8, 11), vec![], None),
            (iv(8, 11), iv(10, 15), vec![iv(8, 10)], Some(iv(11, 15))),
            (iv(8, 11), iv(9, 10), vec![iv(8, 9), iv(10, 11)], None),
            (iv(9, 10), iv(8, 11), vec![], Some(iv(10, 11))),
            (iv(8, 11), iv(7, 9), vec![iv(9, 11)], None),
            (iv(12, 15), iv(8, 11), vec![iv(12, 15)], None),
            (iv(8, 11), iv(12, 15), vec![iv(8, 11)], Some(iv(12, 15))),
        ];

        for (case, (m, s, result, rem)) in table.into_iter().enumerate() {
            let diff = subtract(m, s);
            assert_eq!(diff.relation().case_number() as usize, case + 1);
            assert_eq!(diff.result(), result.as_slice(), "case {}", case + 1);
            assert_eq!(diff.remainder(), rem, "case {}", case + 1);
        }
    }

    #[test]
    fn test_subtractor_splits_minuend() {
        let diff = subtract(tr("08:00", "11:00"), tr("09:00", "10:00"));
        assert_eq!(diff.relation(), Relation::StrictlyInside);
        assert_eq!(
            diff.result(),
            &[tr("08:00", "09:00"), tr("10:00", "11:00")]
        );
        assert_eq!(diff.remainder(), None);
    }

    #[test]
    fn test_subtractor_encloses_minuend() {
        let diff = subtract(tr("09:00", "10:00"), tr("08:00", "11:00"));
        assert_eq!(diff.relation(), Relation::StrictlyEncloses);
        assert!(diff.result().is_empty());
        assert_eq!(diff.remainder(), Some(tr("10:00", "11:00")));
    }

    #[test]
    fn test_same_range() {
        let diff = subtract(tr("09:00", "10:00"), tr("09:00", "10:00"));
        assert!(diff.result().is_empty());
        assert_eq!(diff.remainder(), None);
    }

    #[test]
    fn test_subtractor_does_not_intersect() {
        let m = tr("08:00", "11:00");
        let s = tr("12:00", "15:00");
        let diff = subtract(m, s);
        assert_eq!(diff.result(), &[m]);
        assert_eq!(diff.remainder(), Some(s));
        assert!(diff.is_unchanged());
    }

    #[test]
    fn test_subtractor_overlaps_later() {
        let diff = subtract(tr("08:00", "11:00"), tr("10:00", "15:00"));
        assert_eq!(diff.result(), &[tr("08:00", "10:00")]);
        assert_eq!(diff.remainder(), Some(tr("11:00", "15:00")));
        assert!(!diff.is_unchanged());
    }

    #[test]
    fn test_subtractor_overlaps_earlier() {
        let diff = subtract(tr("08:00", "11:00"), tr("07:00", "09:00"));
        assert_eq!(diff.result(), &[tr("09:00", "11:00")]);
        assert_eq!(diff.remainder(), None);
    }

    #[test]
    fn test_touching_subtracts_nothing() {
        let m = tr("09:00", "09:30");
        let diff = subtract(m, tr("09:30", "15:00"));
        assert_eq!(diff.relation(), Relation::After);
        assert!(diff.is_unchanged());
    }

    #[test]
    fn test_degenerate_pieces_are_dropped() {
        // Zero-length subtractor at the minuend's end: no zero-length remainder.
        let diff = subtract(iv(0, 10), iv(10, 10));
        assert!(diff.is_unchanged());
        assert_eq!(diff.remainder(), None);

        // Cutting at the minuend's start leaves no zero-length head.
        let diff = subtract(iv(0, 10), iv(0, 4));
        assert_eq!(diff.result(), &[iv(4, 10)]);
    }

    #[test]
    fn test_degenerate_minuend() {
        // Untouched: returned as is.
        let diff = subtract(iv(5, 5), iv(5, 9));
        assert_eq!(diff.relation(), Relation::After);
        assert_eq!(diff.result(), &[iv(5, 5)]);
        assert!(diff.is_unchanged());
        assert_eq!(diff.remainder(), Some(iv(5, 9)));

        let diff = subtract(iv(5, 5), iv(2, 5));
        assert_eq!(diff.relation(), Relation::Before);
        assert!(diff.is_unchanged());

        // Enclosed: removed.
        let diff = subtract(iv(5, 5), iv(4, 6));
        assert_eq!(diff.relation(), Relation::StrictlyEncloses);
        assert!(diff.result().is_empty());
        assert_eq!(diff.remainder(), Some(iv(5, 6)));
    }

    /// An instant type without a `Debug` impl.
    #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
    struct Tick(u32);

    fn tick(start: u32, end: u32) -> Interval<Tick> {
        Interval::new(Tick(start), Tick(end))
    }

    #[test]
    fn test_non_panicking_api_needs_only_ord_and_copy() {
        let (m, s) = (tick(0, 10), tick(3, 4));
        assert!(Relation::classify(m, s).ok() == Some(Relation::StrictlyInside));

        let diff = match try_subtract(m, s) {
            Ok(diff) => diff,
            Err(_) => panic!("well-formed pair was rejected"),
        };
        assert!(diff.result() == &[tick(0, 3), tick(4, 10)]);
        assert!(diff.remainder().is_none());

        let set = IntervalSet::from_vec(vec![tick(5, 9), tick(0, 5)]);
        assert!(coalesce(&set) == IntervalSet::from_vec(vec![tick(0, 9)]));
    }

    #[test]
    fn test_into_parts() {
        let (result, remainder) = subtract(iv(0, 10), iv(3, 4)).into_parts();
        assert_eq!(result.as_slice(), &[iv(0, 3), iv(4, 10)]);
        assert!(remainder.is_none());
    }

    thread_local! {
        static REVERSED: Cell<bool> = const { Cell::new(false) };
    }

    /// An instant whose ordering can be flipped after construction.
    #[derive(Clone, Copy, PartialEq, Eq, Debug)]
    struct Fickle(i32);

    impl Ord for Fickle {
        fn cmp(&self, other: &Self) -> std::cmp::Ordering {
            let ord = self.0.cmp(&other.0);
            if REVERSED.with(|r| r.get()) {
                ord.reverse()
            } else {
                ord
            }
        }
    }

    impl PartialOrd for Fickle {
        fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
            Some(self.cmp(other))
        }
    }

    #[test]
    fn test_inconsistent_order_is_reported() {
        let m = Interval::new(Fickle(0), Fickle(10));
        let s = Interval::new(Fickle(2), Fickle(4));
        REVERSED.with(|r| r.set(true));
        let outcome = try_subtract(m, s);
        REVERSED.with(|r| r.set(false));
        assert_eq!(
            outcome,
            Err(InvariantViolation {
                minuend: m,
                subtractor: s
            })
        );
    }

    #[test]
    #[should_panic(expected = "called `subtract` on an unclassifiable pair")]
    fn test_inconsistent_order_panics() {
        let m = Interval::new(Fickle(0), Fickle(10));
        let s = Interval::new(Fickle(2), Fickle(4));
        REVERSED.with(|r| r.set(true));
        let _ = subtract(m, s);
    }
}
