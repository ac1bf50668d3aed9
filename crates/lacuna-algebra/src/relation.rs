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

//! Relative position of a minuend interval and a subtractor interval.
//!
//! Subtracting one interval from another reduces to eleven configurations of
//! the four endpoints `s1, e1` (minuend) and `s2, e2` (subtractor). Each
//! configuration is a variant of `Relation`, so the pairwise subtraction is a
//! single exhaustive `match`.
//!
//! | Case | Variant                  | Condition              |
//! |------|--------------------------|------------------------|
//! | 1    | `Identical`              | s1 = s2, e1 = e2       |
//! | 2    | `SharedStartOverhang`    | s1 = s2, e1 < e2       |
//! | 3    | `SharedStartInside`      | s1 = s2, e1 > e2       |
//! | 4    | `SharedEndInside`        | s1 < s2, e1 = e2       |
//! | 5    | `SharedEndOverhang`      | s1 > s2, e1 = e2       |
//! | 6    | `OverlapsTail`           | s1 < s2 < e1 < e2      |
//! | 7    | `StrictlyInside`         | s1 < s2, e2 < e1       |
//! | 8    | `StrictlyEncloses`       | s2 < s1, e1 < e2       |
//! | 9    | `OverlapsHead`           | s2 < s1 < e2 < e1      |
//! | 10   | `Before`                 | e2 <= s1               |
//! | 11   | `After`                  | e1 <= s2               |
//!
//! Disjointness (cases 10 and 11) is decided first, so touching intervals
//! never count as overlapping.

use crate::error::InvariantViolation;
use lacuna_core::math::interval::Interval;
use std::cmp::Ordering;

/// Where the subtractor lies relative to the minuend.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Relation {
    /// Both intervals cover exactly the same time.
    Identical,
    /// Same start; the subtractor runs past the minuend's end.
    SharedStartOverhang,
    /// Same start; the subtractor ends inside the minuend.
    SharedStartInside,
    /// Same end; the subtractor starts inside the minuend.
    SharedEndInside,
    /// Same end; the subtractor starts before the minuend.
    SharedEndOverhang,
    /// The subtractor starts inside the minuend and runs past its end.
    OverlapsTail,
    /// The subtractor lies strictly inside the minuend, splitting it.
    StrictlyInside,
    /// The subtractor starts before and ends after the minuend.
    StrictlyEncloses,
    /// The subtractor starts before the minuend and ends inside it.
    OverlapsHead,
    /// The subtractor ends at or before the minuend's start.
    Before,
    /// The subtractor starts at or after the minuend's end.
    After,
}

impl Relation {
    /// Classifies the subtractor's position relative to the minuend.
    ///
    /// # Errors
    ///
    /// Returns `InvariantViolation` if either interval has `start > end`
    /// under `T`'s ordering. This only happens when `T`'s `Ord` is
    /// inconsistent, since intervals are validated on construction.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use lacuna_core::math::interval::Interval;
    /// # use lacuna_algebra::relation::Relation;
    ///
    /// let minuend = Interval::new(480, 660);
    /// let subtractor = Interval::new(540, 600);
    /// assert_eq!(Relation::classify(minuend, subtractor), Ok(Relation::StrictlyInside));
    /// ```
    pub fn classify<T>(
        minuend: Interval<T>,
        subtractor: Interval<T>,
    ) -> Result<Self, InvariantViolation<T>>
    where
        T: Ord + Copy,
    {
        let (s1, e1) = (minuend.start(), minuend.end());
        let (s2, e2) = (subtractor.start(), subtractor.end());

        if s1 > e1 || s2 > e2 {
            return Err(InvariantViolation {
                minuend,
                subtractor,
            });
        }

        if e2 <= s1 {
            return Ok(Relation::Before);
        }
        if e1 <= s2 {
            return Ok(Relation::After);
        }

        // From here on s2 < e1 and s1 < e2: the intervals share time.
        Ok(match (s1.cmp(&s2), e1.cmp(&e2)) {
            (Ordering::Equal, Ordering::Equal) => Relation::Identical,
            (Ordering::Equal, Ordering::Less) => Relation::SharedStartOverhang,
            (Ordering::Equal, Ordering::Greater) => Relation::SharedStartInside,
            (Ordering::Less, Ordering::Equal) => Relation::SharedEndInside,
            (Ordering::Greater, Ordering::Equal) => Relation::SharedEndOverhang,
            (Ordering::Less, Ordering::Less) => Relation::OverlapsTail,
            (Ordering::Less, Ordering::Greater) => Relation::StrictlyInside,
            (Ordering::Greater, Ordering::Less) => Relation::StrictlyEncloses,
            (Ordering::Greater, Ordering::Greater) => Relation::OverlapsHead,
        })
    }

    /// Returns the case number (1 through 11) of this relation in the
    /// subtraction table.
    #[inline]
    pub const fn case_number(self) -> u8 {
        match self {
            Relation::Identical => 1,
            Relation::SharedStartOverhang => 2,
            Relation::SharedStartInside => 3,
            Relation::SharedEndInside => 4,
            Relation::SharedEndOverhang => 5,
            Relation::OverlapsTail => 6,
            Relation::StrictlyInside => 7,
            Relation::StrictlyEncloses => 8,
            Relation::OverlapsHead => 9,
            Relation::Before => 10,
            Relation::After => 11,
        }
    }

    /// Returns `true` if the two intervals share no time.
    #[inline]
    pub const fn is_disjoint(self) -> bool {
        matches!(self, Relation::Before | Relation::After)
    }
}

impl std::fmt::Display for Relation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Relation::Identical => write!(f, "Identical"),
            Relation::SharedStartOverhang => write!(f, "SharedStartOverhang"),
            Relation::SharedStartInside => write!(f, "SharedStartInside"),
            Relation::SharedEndInside => write!(f, "SharedEndInside"),
            Relation::SharedEndOverhang => write!(f, "SharedEndOverhang"),
            Relation::OverlapsTail => write!(f, "OverlapsTail"),
            Relation::StrictlyInside => write!(f, "StrictlyInside"),
            Relation::StrictlyEncloses => write!(f, "StrictlyEncloses"),
            Relation::OverlapsHead => write!(f, "OverlapsHead"),
            Relation::Before => write!(f, "Before"),
            Relation::After => write!(f, "After"),
        }
    }
}
