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

//! Sweep monitoring interface
//!
//! Declares the `SweepMonitor` trait for observing a subtraction sweep.
//!
//! Lifecycle
//! - enter -> step (once per pairwise subtraction) -> exit
//! - `SweepStatistics` is provided to every callback for telemetry.
//!
//! Design notes
//! - Methods take `&mut self`; monitors are assumed single-threaded.
//! - Monitors observe only; they cannot alter or stop a sweep.

use crate::{pairwise::PairwiseDifference, stats::SweepStatistics};
use lacuna_core::math::interval_set::IntervalSet;

/// Trait for observing the progress of a subtraction sweep.
pub trait SweepMonitor<T> {
    /// Returns the name of the monitor.
    fn name(&self) -> &str;
    /// Called once the inputs are sorted, before the first step.
    fn on_enter_sweep(
        &mut self,
        minuends: &IntervalSet<T>,
        subtractors: &IntervalSet<T>,
        statistics: &SweepStatistics,
    );
    /// Called after each pairwise subtraction, before its result is spliced
    /// back. The cursors are the positions of the minuend and subtractor the
    /// difference was computed from.
    fn on_step(
        &mut self,
        minuend_cursor: usize,
        subtractor_cursor: usize,
        difference: &PairwiseDifference<T>,
        statistics: &SweepStatistics,
    );
    /// Called with the merged result when the sweep ends.
    fn on_exit_sweep(&mut self, result: &IntervalSet<T>, statistics: &SweepStatistics);
}

impl<T> std::fmt::Debug for dyn SweepMonitor<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SweepMonitor({})", self.name())
    }
}

impl<T> std::fmt::Display for dyn SweepMonitor<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SweepMonitor({})", self.name())
    }
}

impl<T, M> SweepMonitor<T> for &mut M
where
    M: SweepMonitor<T> + ?Sized,
{
    #[inline(always)]
    fn name(&self) -> &str {
        (**self).name()
    }

    #[inline(always)]
    fn on_enter_sweep(
        &mut self,
        minuends: &IntervalSet<T>,
        subtractors: &IntervalSet<T>,
        statistics: &SweepStatistics,
    ) {
        (**self).on_enter_sweep(minuends, subtractors, statistics);
    }

    #[inline(always)]
    fn on_step(
        &mut self,
        minuend_cursor: usize,
        subtractor_cursor: usize,
        difference: &PairwiseDifference<T>,
        statistics: &SweepStatistics,
    ) {
        (**self).on_step(minuend_cursor, subtractor_cursor, difference, statistics);
    }

    #[inline(always)]
    fn on_exit_sweep(&mut self, result: &IntervalSet<T>, statistics: &SweepStatistics) {
        (**self).on_exit_sweep(result, statistics);
    }
}
