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

//! # Math Primitives
//!
//! Half-open interval math over totally ordered instants.
//!
//! ## Submodules
//!
//! - `interval`: A generic `[start, end)` interval with validation,
//!   predicates (intersection, adjacency, containment), and conversions
//!   to/from `std::ops::Range` and `RangeBounds`.
//! - `interval_set`: An ordered sequence of intervals. Canonical order is
//!   ascending by `(start, end)`; the set itself does not enforce it, so the
//!   subtraction sweep can splice pieces in and out by index.
//!
//! ## Motivation
//!
//! Touching intervals share a boundary instant but no time. Closed-open
//! semantics make that explicit: `[9, 10)` and `[10, 11)` are adjacent, not
//! overlapping.

pub mod interval;
pub mod interval_set;
