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

//! # Lacuna Core
//!
//! Value types for the Lacuna interval algebra. Everything here is generic
//! over an opaque instant type `T` that only needs to be totally ordered and
//! cheap to copy (`T: Ord + Copy`); integers, `chrono::NaiveTime`, and
//! `std::time::Instant` all qualify.
//!
//! ## Modules
//!
//! - `math`: The half-open `[start, end)` `Interval` with validation and
//!   geometric predicates, and `IntervalSet`, an index-addressable sequence of
//!   intervals with the ordering and splice primitives the subtraction sweep
//!   is built on.
//! - `error`: Construction errors for malformed intervals.
//!
//! The algorithms themselves (pairwise subtraction, the sweep, merging) live
//! in the `lacuna-algebra` crate.

pub mod error;
pub mod math;
