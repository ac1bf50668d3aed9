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

use lacuna_core::math::interval::Interval;

/// A minuend/subtractor pair that falls outside every subtraction case.
///
/// Under a consistent total order on instants and well-formed intervals this
/// cannot happen. Seeing one means the instant type's `Ord` implementation
/// is inconsistent or an interval was built unchecked with `start > end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvariantViolation<T> {
    /// The interval being subtracted from.
    pub minuend: Interval<T>,
    /// The interval being removed.
    pub subtractor: Interval<T>,
}

impl<T> std::fmt::Display for InvariantViolation<T>
where
    T: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Invariant violation: no subtraction case covers minuend {:?} and subtractor {:?}",
            self.minuend, self.subtractor
        )
    }
}

impl<T> std::error::Error for InvariantViolation<T> where T: std::fmt::Debug {}
