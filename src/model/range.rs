//! Character offset spans into tweet text.

use serde::Serialize;

/// A span `[begin, end)` of character offsets into a tweet's `full_text`.
///
/// The only way to build one is through a constructor that enforces
/// `end >= begin`, so every `IntRange` in a decoded tweet is well ordered.
///
/// ```rust
/// use tweetpack::IntRange;
///
/// let range = IntRange::new(0, 140).unwrap();
/// assert_eq!(range.len(), 140);
/// assert!(IntRange::new(10, 5).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct IntRange {
    begin: i64,
    end: i64,
}

impl IntRange {
    /// Returns `None` when `end < begin`.
    pub fn new(begin: i64, end: i64) -> Option<Self> {
        (end >= begin).then_some(Self { begin, end })
    }

    pub fn begin(&self) -> i64 {
        self.begin
    }

    pub fn end(&self) -> i64 {
        self.end
    }

    /// Number of offsets covered by the span.
    pub fn len(&self) -> u64 {
        self.end.abs_diff(self.begin)
    }

    pub fn is_empty(&self) -> bool {
        self.begin == self.end
    }

    /// Returns `true` if `offset` falls inside the half-open span.
    pub fn contains(&self, offset: i64) -> bool {
        (self.begin..self.end).contains(&offset)
    }
}
