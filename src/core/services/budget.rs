//! Segment budget helper
//!
//! Fits one variable segment of a templated string into a total length
//! budget: the template is rendered with an empty segment to measure the
//! fixed text, and the segment is truncated to whatever room is left.

use super::text::{char_len, truncate};

/// A total length budget for a rendered template, in chars
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmentBudget {
    limit: usize,
}

impl SegmentBudget {
    /// Budget of `limit` chars
    #[must_use]
    pub const fn new(limit: usize) -> Self {
        Self { limit }
    }

    /// The total budget
    #[must_use]
    pub const fn limit(self) -> usize {
        self.limit
    }

    /// Chars left for the segment once `fixed_len` chars of fixed text are placed
    #[must_use]
    pub const fn room_for_segment(self, fixed_len: usize) -> usize {
        self.limit.saturating_sub(fixed_len)
    }

    /// Render `render(segment)` with the segment shortened so the result fits.
    ///
    /// If the fixed text alone exceeds the budget the segment is dropped and
    /// the fixed text is returned as is.
    #[must_use]
    pub fn fit<F>(self, segment: &str, render: F) -> String
    where
        F: Fn(&str) -> String,
    {
        let fixed_len = char_len(&render(""));
        let room = self.room_for_segment(fixed_len);
        render(&truncate(segment, room))
    }
}
