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

//! Method-call syntax for the algebra on `IntervalSet`.

use crate::{
    merge::{coalesce, merge},
    sweep::sweep_subtract,
};
use lacuna_core::math::interval_set::IntervalSet;

/// Extension trait exposing subtraction and merging as `IntervalSet` methods.
///
/// # Examples
///
/// ```rust
/// # use lacuna_core::math::{interval::Interval, interval_set::IntervalSet};
/// use lacuna_algebra::set_ops::IntervalAlgebra;
///
/// let busy = IntervalSet::from_vec(vec![Interval::new(10, 12), Interval::new(11, 14)]);
/// let day = IntervalSet::from_vec(vec![Interval::new(8, 18)]);
///
/// assert_eq!(busy.coalesced().as_slice(), &[Interval::new(10, 14)]);
/// assert_eq!(
///     day.subtract(&busy).as_slice(),
///     &[Interval::new(8, 10), Interval::new(14, 18)]
/// );
/// ```
pub trait IntervalAlgebra<T> {
    /// Returns `self` minus the union of `subtractors`, in canonical form.
    fn subtract(&self, subtractors: &IntervalSet<T>) -> IntervalSet<T>;
    /// Merges an already sorted set. See `merge::merge`.
    fn merged(&self) -> IntervalSet<T>;
    /// Sorts and merges a set in any order. See `merge::coalesce`.
    fn coalesced(&self) -> IntervalSet<T>;
}

impl<T> IntervalAlgebra<T> for IntervalSet<T>
where
    T: Ord + Copy + std::fmt::Debug,
{
    #[inline]
    fn subtract(&self, subtractors: &IntervalSet<T>) -> IntervalSet<T> {
        sweep_subtract(self, subtractors)
    }

    #[inline]
    fn merged(&self) -> IntervalSet<T> {
        merge(self)
    }

    #[inline]
    fn coalesced(&self) -> IntervalSet<T> {
        coalesce(self)
    }
}
