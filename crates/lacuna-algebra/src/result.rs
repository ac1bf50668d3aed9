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

use crate::stats::SweepStatistics;
use lacuna_core::math::interval_set::IntervalSet;

/// Result of a subtraction sweep: the merged difference plus the statistics
/// gathered while computing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SweepOutcome<T> {
    result: IntervalSet<T>,
    statistics: SweepStatistics,
}

impl<T> SweepOutcome<T> {
    #[inline]
    pub fn new(result: IntervalSet<T>, statistics: SweepStatistics) -> Self {
        Self { result, statistics }
    }

    /// Returns the merged difference.
    #[inline]
    pub fn result(&self) -> &IntervalSet<T> {
        &self.result
    }

    /// Returns the sweep statistics.
    #[inline]
    pub fn statistics(&self) -> &SweepStatistics {
        &self.statistics
    }

    /// Consumes the outcome and returns the merged difference.
    #[inline]
    pub fn into_result(self) -> IntervalSet<T> {
        self.result
    }

    /// Consumes the outcome and returns `(result, statistics)`.
    #[inline]
    pub fn into_parts(self) -> (IntervalSet<T>, SweepStatistics) {
        (self.result, self.statistics)
    }
}

impl<T> std::fmt::Display for SweepOutcome<T>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Result: {}", self.result)?;
        write!(f, "{}", self.statistics)
    }
}
