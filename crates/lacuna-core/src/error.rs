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

//! Construction errors for interval values.

/// Details about an interval whose start lies after its end.
///
/// Returned by `Interval::try_new`. Intervals are validated eagerly so a
/// malformed pair never reaches the subtraction sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MalformedIntervalError<T> {
    /// The requested inclusive start.
    pub start: T,
    /// The requested exclusive end.
    pub end: T,
}

impl<T> std::fmt::Display for MalformedIntervalError<T>
where
    T: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Malformed interval: start {:?} is after end {:?}",
            self.start, self.end
        )
    }
}

impl<T> std::error::Error for MalformedIntervalError<T> where T: std::fmt::Debug {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = MalformedIntervalError { start: 10, end: 5 };
        assert_eq!(
            err.to_string(),
            "Malformed interval: start 10 is after end 5"
        );
    }

    #[test]
    fn test_is_std_error() {
        fn assert_error<E: std::error::Error>(_: &E) {}
        assert_error(&MalformedIntervalError {
            start: 2u8,
            end: 1u8,
        });
    }
}
