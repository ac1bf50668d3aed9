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

//! Sweep progress reporting through the `log` facade.
//!
//! `LogMonitor` writes one record when a sweep starts, one when it ends, and
//! optionally one per pairwise step. Records go to the `lacuna::sweep`
//! target at a configurable level, so applications route or silence them
//! with whatever logger they install.

use crate::{
    monitor::sweep_monitor::SweepMonitor, pairwise::PairwiseDifference, stats::SweepStatistics,
};
use lacuna_core::math::interval_set::IntervalSet;
use log::Level;

/// The log target used by the sweep and its monitors.
pub const LOG_TARGET: &str = "lacuna::sweep";

#[derive(Debug, Clone)]
pub struct LogMonitor<T> {
    level: Level,
    log_steps: bool,
    _phantom: std::marker::PhantomData<T>,
}

impl<T> LogMonitor<T> {
    /// Creates a monitor that logs sweep entry and exit at `level`.
    pub fn new(level: Level) -> Self {
        Self {
            level,
            log_steps: false,
            _phantom: std::marker::PhantomData,
        }
    }

    /// Also log every pairwise step. Noisy on large inputs.
    pub fn with_steps(mut self) -> Self {
        self.log_steps = true;
        self
    }

    /// Returns the level records are emitted at.
    #[inline]
    pub fn level(&self) -> Level {
        self.level
    }

    /// Returns `true` if every pairwise step is logged.
    #[inline]
    pub fn logs_steps(&self) -> bool {
        self.log_steps
    }
}

impl<T> Default for LogMonitor<T> {
    fn default() -> Self {
        Self::new(Level::Info)
    }
}

impl<T> std::fmt::Display for LogMonitor<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "LogMonitor(level: {}, log_steps: {})",
            self.level, self.log_steps
        )
    }
}

impl<T> SweepMonitor<T> for LogMonitor<T>
where
    T: Ord + Copy + std::fmt::Debug,
{
    fn name(&self) -> &str {
        "LogMonitor"
    }

    fn on_enter_sweep(
        &mut self,
        minuends: &IntervalSet<T>,
        subtractors: &IntervalSet<T>,
        _statistics: &SweepStatistics,
    ) {
        log::log!(
            target: LOG_TARGET,
            self.level,
            "sweep started: {} minuend(s), {} subtractor(s)",
            minuends.len(),
            subtractors.len()
        );
    }

    fn on_step(
        &mut self,
        minuend_cursor: usize,
        subtractor_cursor: usize,
        difference: &PairwiseDifference<T>,
        statistics: &SweepStatistics,
    ) {
        if !self.log_steps {
            return;
        }
        log::log!(
            target: LOG_TARGET,
            self.level,
            "step {}: minuend[{}] {:?} - subtractor[{}] {:?} is case {} ({}): result {:?}, remainder {:?}",
            statistics.steps,
            minuend_cursor,
            difference.minuend(),
            subtractor_cursor,
            difference.subtractor(),
            difference.relation().case_number(),
            difference.relation(),
            difference.result(),
            difference.remainder()
        );
    }

    fn on_exit_sweep(&mut self, result: &IntervalSet<T>, statistics: &SweepStatistics) {
        log::log!(
            target: LOG_TARGET,
            self.level,
            "sweep finished: {} interval(s) after {} step(s), {} split(s), {} removal(s) in {:.2?}",
            result.len(),
            statistics.steps,
            statistics.splits,
            statistics.removals,
            statistics.time_total
        );
    }
}
