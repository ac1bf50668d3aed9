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

//! # Lacuna Algebra
//!
//! Subtraction and coalescing of interval sets over totally ordered instants.
//! Given a minuend set and a subtractor set, the sweep produces the minimal
//! sorted, non-overlapping set covering exactly the minuend time that no
//! subtractor covers.
//!
//! ## Modules
//!
//! - `relation`: The eleven relative positions of a minuend and a subtractor
//!   interval, as a `Relation` enum.
//! - `pairwise`: Single-interval subtraction, returning the surviving
//!   minuend pieces and the unconsumed subtractor tail.
//! - `merge`: Single-pass coalescing of sorted sets (`merge`) and of sets in
//!   any order (`coalesce`).
//! - `sweep`: The two-pointer `SweepSubtractor` engine and the
//!   `sweep_subtract` convenience function.
//! - `monitor`: Observer hooks for the sweep (`NoOperationMonitor`,
//!   `LogMonitor`, `CompositeSweepMonitor`).
//! - `stats` / `result`: Sweep statistics and the outcome type.
//! - `set_ops`: `IntervalAlgebra`, method-call syntax on `IntervalSet`.
//! - `error`: The invariant violation raised by unclassifiable pairs.
//!
//! ## Usage
//!
//! ```rust
//! use lacuna_core::math::{interval::Interval, interval_set::IntervalSet};
//! use lacuna_algebra::sweep::sweep_subtract;
//!
//! let open = IntervalSet::from_vec(vec![Interval::new(9, 11), Interval::new(13, 15)]);
//! let busy = IntervalSet::from_vec(vec![Interval::new(10, 14)]);
//! assert_eq!(
//!     sweep_subtract(&open, &busy).as_slice(),
//!     &[Interval::new(9, 10), Interval::new(14, 15)]
//! );
//! ```

pub mod error;
pub mod merge;
pub mod monitor;
pub mod pairwise;
pub mod relation;
pub mod result;
pub mod set_ops;
pub mod stats;
pub mod sweep;
