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

//! Two-pointer subtraction sweep over interval sets.
//!
//! `SweepSubtractor` computes `minuends - subtractors` for arbitrary
//! (unsorted, possibly overlapping) interval sets. Both inputs are copied
//! into reusable buffers and sorted by `(start, end)`; overlapping minuends
//! are merged so that minuend pieces stay disjoint. Two cursors then walk
//! the buffers: each step subtracts the current subtractor from the current
//! minuend piece, splices the surviving pieces back in place of that piece,
//! and either retires the subtractor or narrows it to its unconsumed tail.
//! The surviving pieces are finally merged into canonical form.
//!
//! Cursor rules
//! - No remainder: the subtractor is used up, so only the subtractor cursor
//!   advances. The piece now at the minuend cursor meets the next subtractor.
//! - Remainder and the minuend piece came through untouched: the subtractor
//!   lies wholly after that piece, so only the minuend cursor advances.
//! - Remainder and the minuend piece was cut or removed: neither cursor
//!   advances; the next step re-examines the same positions.
//!
//! The third rule is what lets one long subtractor carve into several
//! minuend pieces in turn. Every step either removes time from a minuend
//! piece or advances a cursor, so the sweep terminates.
//!
//! The engine keeps its buffers between runs; `preallocated` moves the
//! allocation cost to construction for repeated use.

use crate::{
    merge::merge,
    monitor::{log::LOG_TARGET, no_op::NoOperationMonitor, sweep_monitor::SweepMonitor},
    pairwise,
    result::SweepOutcome,
    stats::SweepStatistics,
};
use lacuna_core::math::interval_set::IntervalSet;

/// A reusable engine computing the difference of two interval sets.
#[derive(Clone, Debug)]
pub struct SweepSubtractor<T> {
    minuends: IntervalSet<T>,
    subtractors: IntervalSet<T>,
}

impl<T> Default for SweepSubtractor<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> SweepSubtractor<T> {
    /// Creates a new engine with empty buffers.
    #[inline]
    pub fn new() -> Self {
        Self {
            minuends: IntervalSet::new(),
            subtractors: IntervalSet::new(),
        }
    }

    /// Creates a new engine with buffers preallocated for the given input
    /// sizes. Case 7 splits can grow the minuend buffer past its input size;
    /// the buffer then reallocates as usual.
    #[inline]
    pub fn preallocated(num_minuends: usize, num_subtractors: usize) -> Self {
        Self {
            minuends: IntervalSet::with_capacity(num_minuends),
            subtractors: IntervalSet::with_capacity(num_subtractors),
        }
    }
}

impl<T> SweepSubtractor<T>
where
    T: Ord + Copy + std::fmt::Debug,
{
    /// Computes `minuends - subtractors` without observation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use lacuna_core::math::{interval::Interval, interval_set::IntervalSet};
    /// # use lacuna_algebra::sweep::SweepSubtractor;
    ///
    /// let minuends = IntervalSet::from_vec(vec![Interval::new(0, 10)]);
    /// let subtractors = IntervalSet::from_vec(vec![Interval::new(2, 3), Interval::new(5, 6)]);
    ///
    /// let mut engine = SweepSubtractor::new();
    /// let outcome = engine.subtract(&minuends, &subtractors);
    /// assert_eq!(
    ///     outcome.result().as_slice(),
    ///     &[Interval::new(0, 2), Interval::new(3, 5), Interval::new(6, 10)]
    /// );
    /// assert_eq!(outcome.statistics().splits, 2);
    /// ```
    #[inline]
    pub fn subtract(
        &mut self,
        minuends: &IntervalSet<T>,
        subtractors: &IntervalSet<T>,
    ) -> SweepOutcome<T> {
        self.subtract_with_monitor(minuends, subtractors, NoOperationMonitor::new())
    }

    /// Computes `minuends - subtractors`, reporting progress to `monitor`.
    ///
    /// Pass `&mut monitor` to keep ownership of a stateful monitor.
    pub fn subtract_with_monitor<M>(
        &mut self,
        minuends: &IntervalSet<T>,
        subtractors: &IntervalSet<T>,
        mut monitor: M,
    ) -> SweepOutcome<T>
    where
        M: SweepMonitor<T>,
    {
        let start_time = std::time::Instant::now();
        let mut statistics = SweepStatistics::default();

        self.load(minuends, subtractors);
        statistics.on_minuend_pieces(self.minuends.len());
        monitor.on_enter_sweep(&self.minuends, &self.subtractors, &statistics);

        let mut i = 0;
        let mut j = 0;
        while i < self.minuends.len() && j < self.subtractors.len() {
            let minuend = self.minuends.as_slice()[i];
            let subtractor = self.subtractors.as_slice()[j];
            let difference = pairwise::subtract(minuend, subtractor);

            statistics.on_step();
            log::trace!(
                target: LOG_TARGET,
                "minuend[{}] {:?} - subtractor[{}] {:?}: case {}, result {:?}, remainder {:?}",
                i,
                minuend,
                j,
                subtractor,
                difference.relation().case_number(),
                difference.result(),
                difference.remainder()
            );
            monitor.on_step(i, j, &difference, &statistics);

            match difference.result().len() {
                0 => statistics.on_removal(),
                2 => statistics.on_split(),
                _ => {}
            }

            let unchanged = difference.is_unchanged();
            if !unchanged {
                self.minuends
                    .splice_at(i, difference.result().iter().copied());
                statistics.on_minuend_pieces(self.minuends.len());
            }

            match difference.remainder() {
                None => {
                    j += 1;
                    statistics.on_subtractor_advance();
                }
                Some(remainder) => {
                    self.subtractors.replace_at(j, remainder);
                    if unchanged {
                        i += 1;
                        statistics.on_minuend_advance();
                    } else {
                        statistics.on_remainder_carried();
                    }
                }
            }
        }

        let result = merge(&self.minuends);
        statistics.on_merge(self.minuends.len(), result.len());
        statistics.set_total_time(start_time.elapsed());

        monitor.on_exit_sweep(&result, &statistics);
        log::debug!(
            target: LOG_TARGET,
            "subtracted {} subtractor(s) from {} minuend(s) in {} step(s): {} interval(s) remain",
            subtractors.len(),
            minuends.len(),
            statistics.steps,
            result.len()
        );

        SweepOutcome::new(result, statistics)
    }

    /// Copies the inputs into the working buffers in canonical order.
    ///
    /// Minuends are also merged: the cursor rules assume minuend pieces never
    /// overlap, otherwise a retired subtractor could still cover a later piece.
    #[inline]
    fn load(&mut self, minuends: &IntervalSet<T>, subtractors: &IntervalSet<T>) {
        self.minuends.clear();
        self.minuends.extend(minuends.iter().copied());
        self.minuends.sort();
        if !self.minuends.is_canonical() {
            let merged = merge(&self.minuends);
            self.minuends.clear();
            self.minuends.extend(merged);
        }

        self.subtractors.clear();
        self.subtractors.extend(subtractors.iter().copied());
        self.subtractors.sort();
    }
}

/// Returns `minuends` minus the union of `subtractors`, merged into
/// canonical form. Neither input needs to be sorted.
///
/// # Examples
///
/// ```rust
/// # use lacuna_core::math::{interval::Interval, interval_set::IntervalSet};
/// # use lacuna_algebra::sweep::sweep_subtract;
///
/// let minuends = IntervalSet::from_vec(vec![Interval::new(780, 900), Interval::new(540, 660)]);
/// let subtractors = IntervalSet::from_vec(vec![
///     Interval::new(600, 615),
///     Interval::new(540, 555),
///     Interval::new(750, 960),
/// ]);
/// assert_eq!(
///     sweep_subtract(&minuends, &subtractors).as_slice(),
///     &[Interval::new(555, 600), Interval::new(615, 660)]
/// );
/// ```
#[inline]
pub fn sweep_subtract<T>(minuends: &IntervalSet<T>, subtractors: &IntervalSet<T>) -> IntervalSet<T>
where
    T: Ord + Copy + std::fmt::Debug,
{
    SweepSubtractor::preallocated(minuends.len(), subtractors.len())
        .subtract(minuends, subtractors)
        .into_result()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::merge::{coalesce, merge};
    use crate::{pairwise::PairwiseDifference, relation::Relation};
    use chrono::NaiveTime;
    use lacuna_core::math::interval::Interval;
    use rand::{Rng, SeedableRng, seq::SliceRandom};
    use rand_chacha::ChaCha8Rng;

    fn hm(s: &str) -> NaiveTime {
        NaiveTime::parse_from_str(s, "%H:%M").unwrap()
    }

    fn trs(pairs: &[(&str, &str)]) -> IntervalSet<NaiveTime> {
        pairs
            .iter()
            .map(|&(s, e)| Interval::new(hm(s), hm(e)))
            .collect()
    }

    fn set(pairs: &[(i32, i32)]) -> IntervalSet<i32> {
        pairs.iter().map(|&(s, e)| Interval::new(s, e)).collect()
    }

    #[test]
    fn test_minuend_supersedes_subtractor() {
        let diff = sweep_subtract(&trs(&[("09:00", "10:00")]), &trs(&[("09:00", "09:30")]));
        assert_eq!(diff, trs(&[("09:30", "10:00")]));
    }

    #[test]
    fn test_equal_sets_annihilate() {
        let s = trs(&[("09:30", "10:30")]);
        assert!(sweep_subtract(&s, &s).is_empty());
    }

    #[test]
    fn test_bordering_ranges_subtract_nothing() {
        let diff = sweep_subtract(&trs(&[("09:00", "09:30")]), &trs(&[("09:30", "15:00")]));
        assert_eq!(diff, trs(&[("09:00", "09:30")]));
    }

    #[test]
    fn test_disjoint_ranges_subtract_nothing() {
        let diff = sweep_subtract(&trs(&[("09:00", "09:30")]), &trs(&[("09:31", "15:00")]));
        assert_eq!(diff, trs(&[("09:00", "09:30")]));
    }

    #[test]
    fn test_one_subtractor_spans_two_minuends() {
        let diff = sweep_subtract(
            &trs(&[("09:00", "09:30"), ("10:00", "10:30")]),
            &trs(&[("09:15", "10:15")]),
        );
        assert_eq!(diff, trs(&[("09:00", "09:15"), ("10:15", "10:30")]));
    }

    #[test]
    fn test_multi_range_subtraction() {
        let diff = sweep_subtract(
            &trs(&[("09:00", "11:00"), ("13:00", "15:00")]),
            &trs(&[("09:00", "09:15"), ("10:00", "10:15"), ("12:30", "16:00")]),
        );
        assert_eq!(diff, trs(&[("09:15", "10:00"), ("10:15", "11:00")]));
    }

    #[test]
    fn test_multi_range_subtraction_out_of_order() {
        let diff = sweep_subtract(
            &trs(&[("13:00", "15:00"), ("09:00", "11:00")]),
            &trs(&[("10:00", "10:15"), ("09:00", "09:15"), ("12:30", "16:00")]),
        );
        assert_eq!(diff, trs(&[("09:15", "10:00"), ("10:15", "11:00")]));
    }

    #[test]
    fn test_empty_inputs() {
        let empty: IntervalSet<i32> = IntervalSet::new();
        assert!(sweep_subtract(&empty, &set(&[(0, 10)])).is_empty());
        assert!(sweep_subtract(&empty, &empty).is_empty());
    }

    #[test]
    fn test_no_subtractors_is_merge() {
        let s = set(&[(5, 9), (0, 3), (2, 4), (9, 12)]);
        let diff = sweep_subtract(&s, &IntervalSet::new());
        assert_eq!(diff, set(&[(0, 4), (5, 12)]));
    }

    #[test]
    fn test_long_subtractor_carves_many_minuends() {
        let diff = sweep_subtract(
            &set(&[(0, 10), (12, 14), (16, 18), (20, 30)]),
            &set(&[(5, 25)]),
        );
        assert_eq!(diff, set(&[(0, 5), (25, 30)]));
    }

    #[test]
    fn test_overlapping_subtractors() {
        let diff = sweep_subtract(
            &set(&[(0, 100)]),
            &set(&[(10, 40), (20, 30), (35, 50), (60, 70)]),
        );
        assert_eq!(diff, set(&[(0, 10), (50, 60), (70, 100)]));
    }

    #[test]
    fn test_overlapping_minuends_are_merged() {
        let diff = sweep_subtract(&set(&[(0, 10), (5, 15)]), &set(&[(7, 8)]));
        assert_eq!(diff, set(&[(0, 7), (8, 15)]));
    }

    #[test]
    fn test_degenerate_minuends() {
        let point = set(&[(5, 5)]);
        assert_eq!(sweep_subtract(&point, &IntervalSet::new()), point);
        assert_eq!(sweep_subtract(&point, &set(&[(7, 8)])), point);
        assert_eq!(sweep_subtract(&point, &set(&[(2, 5)])), point);
        assert!(sweep_subtract(&point, &set(&[(4, 6)])).is_empty());

        let points = set(&[(5, 5), (7, 7)]);
        let diff = sweep_subtract(&points, &IntervalSet::new());
        assert_eq!(diff, merge(&points));

        let diff = sweep_subtract(&set(&[(0, 3), (5, 5), (9, 12)]), &set(&[(2, 10)]));
        assert_eq!(diff, set(&[(0, 2), (10, 12)]));
    }

    #[test]
    fn test_enclosed_subtractor_leftover_is_skipped() {
        // The tail of (0, 30) swallows (5, 8) and cuts (25, 40) down to
        // (30, 40); the shorter (10, 20) then lies before it and is skipped.
        let diff = sweep_subtract(&set(&[(5, 8), (25, 40)]), &set(&[(0, 30), (10, 20)]));
        assert_eq!(diff, set(&[(30, 40)]));
    }

    #[test]
    fn test_statistics() {
        let mut engine = SweepSubtractor::preallocated(2, 3);
        let outcome = engine.subtract(
            &set(&[(0, 10), (20, 30)]),
            &set(&[(2, 3), (8, 22), (40, 50)]),
        );
        assert_eq!(outcome.result(), &set(&[(0, 2), (3, 8), (22, 30)]));

        let stats = outcome.statistics();
        assert_eq!(stats.splits, 1);
        assert_eq!(stats.merge_output, 3);
        assert!(stats.steps >= 4);
        assert_eq!(stats.peak_minuend_pieces, 3);
    }

    #[test]
    fn test_engine_is_reusable() {
        let mut engine = SweepSubtractor::new();
        let first = engine
            .subtract(&set(&[(0, 10)]), &set(&[(3, 4)]))
            .into_result();
        let second = engine
            .subtract(&set(&[(50, 60)]), &set(&[(55, 70)]))
            .into_result();
        assert_eq!(first, set(&[(0, 3), (4, 10)]));
        assert_eq!(second, set(&[(50, 55)]));
    }

    #[derive(Default)]
    struct StepRecorder {
        entered: usize,
        steps: Vec<(usize, usize, Relation)>,
        exited_with: Option<usize>,
    }

    impl SweepMonitor<i32> for StepRecorder {
        fn name(&self) -> &str {
            "StepRecorder"
        }

        fn on_enter_sweep(
            &mut self,
            _minuends: &IntervalSet<i32>,
            _subtractors: &IntervalSet<i32>,
            _statistics: &SweepStatistics,
        ) {
            self.entered += 1;
        }

        fn on_step(
            &mut self,
            minuend_cursor: usize,
            subtractor_cursor: usize,
            difference: &PairwiseDifference<i32>,
            _statistics: &SweepStatistics,
        ) {
            self.steps
                .push((minuend_cursor, subtractor_cursor, difference.relation()));
        }

        fn on_exit_sweep(&mut self, result: &IntervalSet<i32>, _statistics: &SweepStatistics) {
            self.exited_with = Some(result.len());
        }
    }

    #[test]
    fn test_cursor_walk() {
        let mut recorder = StepRecorder::default();
        let mut engine = SweepSubtractor::new();
        engine.subtract_with_monitor(&set(&[(0, 10), (20, 30)]), &set(&[(5, 25)]), &mut recorder);

        assert_eq!(recorder.entered, 1);
        assert_eq!(
            recorder.steps,
            vec![
                // (5, 25) cuts the tail of (0, 10) and keeps (10, 25).
                (0, 0, Relation::OverlapsTail),
                // (0, 5) lies before (10, 25): move to the next minuend.
                (0, 0, Relation::After),
                // (10, 25) cuts the head of (20, 30) and is used up.
                (1, 0, Relation::OverlapsHead),
            ]
        );
        assert_eq!(recorder.exited_with, Some(2));
    }

    /// Brute-force difference over unit cells `[t, t + 1)`.
    fn oracle(
        minuends: &IntervalSet<i32>,
        subtractors: &IntervalSet<i32>,
        horizon: i32,
    ) -> IntervalSet<i32> {
        let mut out = IntervalSet::new();
        let mut open: Option<i32> = None;
        for t in 0..=horizon {
            let covered =
                t < horizon && minuends.contains_point(t) && !subtractors.contains_point(t);
            match (covered, open) {
                (true, None) => open = Some(t),
                (false, Some(start)) => {
                    out.push(Interval::new(start, t));
                    open = None;
                }
                _ => {}
            }
        }
        out
    }

    fn random_set(rng: &mut ChaCha8Rng, max_len: usize, horizon: i32) -> IntervalSet<i32> {
        let n = rng.random_range(0..=max_len);
        (0..n)
            .map(|_| {
                let start = rng.random_range(0..horizon - 1);
                let end = rng.random_range(start + 1..=(start + 15).min(horizon));
                Interval::new(start, end)
            })
            .collect()
    }

    #[test]
    fn test_matches_brute_force() {
        const HORIZON: i32 = 60;
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        for round in 0..2_000 {
            let minuends = random_set(&mut rng, 8, HORIZON);
            let subtractors = random_set(&mut rng, 8, HORIZON);
            let diff = sweep_subtract(&minuends, &subtractors);
            assert_eq!(
                diff,
                oracle(&minuends, &subtractors, HORIZON),
                "round {}: {} - {}",
                round,
                minuends,
                subtractors
            );
        }
    }

    #[test]
    fn test_algebraic_properties() {
        const HORIZON: i32 = 80;
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..500 {
            let a = random_set(&mut rng, 10, HORIZON);
            let b = random_set(&mut rng, 10, HORIZON);
            let diff = sweep_subtract(&a, &b);

            // Canonical output
            assert!(diff.is_canonical());
            // Merge is idempotent
            let merged = coalesce(&a);
            assert_eq!(merge(&merged), merged);
            assert_eq!(merge(&diff), diff);
            // Identity
            assert_eq!(sweep_subtract(&a, &IntervalSet::new()), coalesce(&a));
            // Annihilation
            assert!(sweep_subtract(&a, &a).is_empty());
            // Containment
            let covered = coalesce(&a);
            for r in &diff {
                assert!(covered.iter().any(|m| m.contains_interval(*r)));
                assert!(b.iter().all(|s| !s.intersects(*r)));
            }
            // Input order does not matter
            let mut shuffled_a = a.clone().into_intervals();
            let mut shuffled_b = b.clone().into_intervals();
            shuffled_a.shuffle(&mut rng);
            shuffled_b.shuffle(&mut rng);
            let shuffled_a = IntervalSet::from_vec(shuffled_a);
            let shuffled_b = IntervalSet::from_vec(shuffled_b);
            assert_eq!(sweep_subtract(&shuffled_a, &shuffled_b), diff);
            // Removing the difference from the original leaves exactly the overlap
            let overlap = sweep_subtract(&a, &diff);
            assert_eq!(overlap.measure() + diff.measure(), coalesce(&a).measure());
        }
    }
}
