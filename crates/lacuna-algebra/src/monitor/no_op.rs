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

use crate::{
    monitor::sweep_monitor::SweepMonitor, pairwise::PairwiseDifference, stats::SweepStatistics,
};
use lacuna_core::math::interval_set::IntervalSet;

/// A no-operation monitor that implements the `SweepMonitor` trait
/// but does nothing on any of the events.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct NoOperationMonitor<T> {
    _phantom: std::marker::PhantomData<T>,
}

impl<T> NoOperationMonitor<T> {
    /// Creates a new `NoOperationMonitor`.
    #[inline(always)]
    pub fn new() -> Self {
        Self {
            _phantom: std::marker::PhantomData,
        }
    }
}

impl<T> SweepMonitor<T> for NoOperationMonitor<T> {
    #[inline(always)]
    fn name(&self) -> &str {
        "NoOperationMonitor"
    }

    #[inline(always)]
    fn on_enter_sweep(
        &mut self,
        _minuends: &IntervalSet<T>,
        _subtractors: &IntervalSet<T>,
        _statistics: &SweepStatistics,
    ) {
    }

    #[inline(always)]
    fn on_step(
        &mut self,
        _minuend_cursor: usize,
        _subtractor_cursor: usize,
        _difference: &PairwiseDifference<T>,
        _statistics: &SweepStatistics,
    ) {
    }

    #[inline(always)]
    fn on_exit_sweep(&mut self, _result: &IntervalSet<T>, _statistics: &SweepStatistics) {}
}
