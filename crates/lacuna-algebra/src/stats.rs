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

use std::time::Duration;

/// Statistics collected during one subtraction sweep.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SweepStatistics {
    /// Pairwise subtractions evaluated.
    pub steps: u64,
    /// Minuend pieces split in two by a subtractor strictly inside them.
    pub splits: u64,
    /// Minuend pieces removed entirely.
    pub removals: u64,
    /// Subtractor tails carried forward to later minuend pieces.
    pub remainder_carries: u64,
    /// Times the minuend cursor moved on with the same subtractor active.
    pub minuend_advances: u64,
    /// Times the subtractor cursor moved on to the next subtractor.
    pub subtractor_advances: u64,
    /// Largest number of minuend pieces held at once.
    pub peak_minuend_pieces: u64,
    /// Intervals handed to the final merge.
    pub merge_input: u64,
    /// Intervals in the final result.
    pub merge_output: u64,
    /// Total time spent in the sweep.
    pub time_total: Duration,
}

impl SweepStatistics {
    #[inline]
    pub fn on_step(&mut self) {
        self.steps = self.steps.saturating_add(1);
    }

    #[inline]
    pub fn on_split(&mut self) {
        self.splits = self.splits.saturating_add(1);
    }

    #[inline]
    pub fn on_removal(&mut self) {
        self.removals = self.removals.saturating_add(1);
    }

    #[inline]
    pub fn on_remainder_carried(&mut self) {
        self.remainder_carries = self.remainder_carries.saturating_add(1);
    }

    #[inline]
    pub fn on_minuend_advance(&mut self) {
        self.minuend_advances = self.minuend_advances.saturating_add(1);
    }

    #[inline]
    pub fn on_subtractor_advance(&mut self) {
        self.subtractor_advances = self.subtractor_advances.saturating_add(1);
    }

    #[inline]
    pub fn on_minuend_pieces(&mut self, pieces: usize) {
        self.peak_minuend_pieces = self.peak_minuend_pieces.max(pieces as u64);
    }

    /// Records the size of the set before and after the final merge.
    #[inline]
    pub fn on_merge(&mut self, input: usize, output: usize) {
        self.merge_input = input as u64;
        self.merge_output = output as u64;
    }

    #[inline]
    pub fn set_total_time(&mut self, duration: Duration) {
        self.time_total = duration;
    }
}

impl std::fmt::Display for SweepStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Lacuna Sweep Statistics:")?;
        writeln!(f, "  Steps:                {}", self.steps)?;
        writeln!(f, "  Splits:               {}", self.splits)?;
        writeln!(f, "  Removals:             {}", self.removals)?;
        writeln!(f, "  Remainders carried:   {}", self.remainder_carries)?;
        writeln!(f, "  Minuend advances:     {}", self.minuend_advances)?;
        writeln!(f, "  Subtractor advances:  {}", self.subtractor_advances)?;
        writeln!(f, "  Peak minuend pieces:  {}", self.peak_minuend_pieces)?;
        writeln!(
            f,
            "  Merge:                {} -> {}",
            self.merge_input, self.merge_output
        )?;
        writeln!(f, "  Total time:           {:.2?}", self.time_total)?;
        Ok(())
    }
}
