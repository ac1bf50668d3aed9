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

//! Monitoring combinators for the sweep
//!
//! Provides `CompositeSweepMonitor`, a fan-out monitor that forwards every
//! event to its children, so logging and custom telemetry can be mixed
//! without coupling them to the sweep. Events are dispatched to child
//! monitors in insertion order.

use crate::{
    monitor::sweep_monitor::SweepMonitor, pairwise::PairwiseDifference, stats::SweepStatistics,
};
use lacuna_core::math::interval_set::IntervalSet;

/// A sweep monitor that aggregates multiple monitors and forwards events to all of them.
pub struct CompositeSweepMonitor<'a, T> {
    monitors: Vec<Box<dyn SweepMonitor<T> + 'a>>,
}

impl<'a, T> Default for CompositeSweepMonitor<'a, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> CompositeSweepMonitor<'a, T> {
    /// Creates a new empty `CompositeSweepMonitor`.
    #[inline(always)]
    pub fn new() -> Self {
        Self {
            monitors: Vec::new(),
        }
    }

    /// Creates a new `CompositeSweepMonitor` with space for `capacity` monitors.
    #[inline(always)]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            monitors: Vec::with_capacity(capacity),
        }
    }

    /// Adds a new monitor to the composite monitor.
    #[inline(always)]
    pub fn add_monitor<M>(&mut self, monitor: M)
    where
        M: SweepMonitor<T> + 'a,
    {
        self.monitors.push(Box::new(monitor));
    }

    /// Adds a boxed monitor to the composite monitor.
    #[inline(always)]
    pub fn add_monitor_boxed(&mut self, monitor: Box<dyn SweepMonitor<T> + 'a>) {
        self.monitors.push(monitor);
    }

    /// Returns a slice of the monitors contained in the composite monitor.
    #[inline(always)]
    pub fn monitors(&self) -> &[Box<dyn SweepMonitor<T> + 'a>] {
        &self.monitors
    }

    /// Returns the number of monitors contained in the composite monitor.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.monitors.len()
    }

    /// Returns `true` if the composite monitor contains no monitors.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.monitors.is_empty()
    }
}

impl<'a, T> FromIterator<Box<dyn SweepMonitor<T> + 'a>> for CompositeSweepMonitor<'a, T> {
    #[inline(always)]
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Box<dyn SweepMonitor<T> + 'a>>,
    {
        Self {
            monitors: iter.into_iter().collect(),
        }
    }
}

impl<'a, T> SweepMonitor<T> for CompositeSweepMonitor<'a, T> {
    #[inline(always)]
    fn name(&self) -> &str {
        "CompositeSweepMonitor"
    }

    #[inline(always)]
    fn on_enter_sweep(
        &mut self,
        minuends: &IntervalSet<T>,
        subtractors: &IntervalSet<T>,
        statistics: &SweepStatistics,
    ) {
        for monitor in &mut self.monitors {
            monitor.on_enter_sweep(minuends, subtractors, statistics);
        }
    }

    #[inline(always)]
    fn on_step(
        &mut self,
        minuend_cursor: usize,
        subtractor_cursor: usize,
        difference: &PairwiseDifference<T>,
        statistics: &SweepStatistics,
    ) {
        for monitor in &mut self.monitors {
            monitor.on_step(minuend_cursor, subtractor_cursor, difference, statistics);
        }
    }

    #[inline(always)]
    fn on_exit_sweep(&mut self, result: &IntervalSet<T>, statistics: &SweepStatistics) {
        for monitor in &mut self.monitors {
            monitor.on_exit_sweep(result, statistics);
        }
    }
}

impl<'a, T> std::fmt::Debug for CompositeSweepMonitor<'a, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.monitors.iter().map(|m| m.name()))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{monitor::no_op::NoOperationMonitor, sweep::SweepSubtractor};
    use lacuna_core::math::interval::Interval;
    use std::{cell::RefCell, rc::Rc};

    struct Recorder {
        label: &'static str,
        events: Rc<RefCell<Vec<String>>>,
    }

    impl SweepMonitor<i32> for Recorder {
        fn name(&self) -> &str {
            self.label
        }

        fn on_enter_sweep(
            &mut self,
            _minuends: &IntervalSet<i32>,
            _subtractors: &IntervalSet<i32>,
            _statistics: &SweepStatistics,
        ) {
            self.events.borrow_mut().push(format!("{}:enter", self.label));
        }

        fn on_step(
            &mut self,
            _minuend_cursor: usize,
            _subtractor_cursor: usize,
            _difference: &PairwiseDifference<i32>,
            _statistics: &SweepStatistics,
        ) {
            self.events.borrow_mut().push(format!("{}:step", self.label));
        }

        fn on_exit_sweep(&mut self, _result: &IntervalSet<i32>, _statistics: &SweepStatistics) {
            self.events.borrow_mut().push(format!("{}:exit", self.label));
        }
    }

    #[test]
    fn test_fans_out_in_insertion_order() {
        let events = Rc::new(RefCell::new(Vec::new()));
        let mut composite = CompositeSweepMonitor::new();
        composite.add_monitor(Recorder {
            label: "a",
            events: Rc::clone(&events),
        });
        composite.add_monitor(Recorder {
            label: "b",
            events: Rc::clone(&events),
        });

        let stats = SweepStatistics::default();
        let empty = IntervalSet::new();
        composite.on_enter_sweep(&empty, &empty, &stats);
        composite.on_exit_sweep(&empty, &stats);

        assert_eq!(
            *events.borrow(),
            vec!["a:enter", "b:enter", "a:exit", "b:exit"]
        );
    }

    #[test]
    fn test_forwards_steps_through_sweep() {
        let events = Rc::new(RefCell::new(Vec::new()));
        let composite: CompositeSweepMonitor<'_, i32> = [
            Box::new(Recorder {
                label: "a",
                events: Rc::clone(&events),
            }) as Box<dyn SweepMonitor<i32>>,
            Box::new(Recorder {
                label: "b",
                events: Rc::clone(&events),
            }),
        ]
        .into_iter()
        .collect();

        let open = IntervalSet::from_vec(vec![Interval::new(0, 10)]);
        let busy = IntervalSet::from_vec(vec![Interval::new(2, 3), Interval::new(12, 14)]);
        let mut engine = SweepSubtractor::new();
        let outcome = engine.subtract_with_monitor(&open, &busy, composite);
        assert_eq!(
            outcome.result().as_slice(),
            &[Interval::new(0, 2), Interval::new(3, 10)]
        );

        // (0, 10) - (2, 3) splits; (0, 2) and (3, 10) then lie before (12, 14).
        let mut expected = vec!["a:enter", "b:enter"];
        for _ in 0..3 {
            expected.extend(["a:step", "b:step"]);
        }
        expected.extend(["a:exit", "b:exit"]);
        assert_eq!(*events.borrow(), expected);
    }

    #[test]
    fn test_len_and_debug() {
        let mut composite: CompositeSweepMonitor<'_, i32> = CompositeSweepMonitor::with_capacity(2);
        assert!(composite.is_empty());
        composite.add_monitor(NoOperationMonitor::new());
        composite.add_monitor_boxed(Box::new(NoOperationMonitor::new()));
        assert_eq!(composite.len(), 2);
        assert_eq!(
            format!("{:?}", composite),
            "[\"NoOperationMonitor\", \"NoOperationMonitor\"]"
        );
    }
}
