/// Compact byte-offset span into a source buffer.
///
/// Represents an interval `[start, end)` of byte offsets into a byte-array
/// of source text. Both offsets are 0-based. Offsets are `usize` so a span
/// can index the source buffer directly.
///
/// Most token kinds record a half-open interval. Block strings are the one
/// exception: their recorded `end` sits on the last byte of the closing
/// `"""` delimiter (see `Utf8GraphQLLexer::end`).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ByteSpan {
    /// Byte offset of the first byte of the span (0-based, inclusive).
    pub start: usize,
    /// Byte offset one past the last byte of the span (0-based, exclusive).
    pub end: usize,
}

impl ByteSpan {
    /// Creates a new `ByteSpan` from start (inclusive) and end (exclusive)
    /// byte offsets.
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Returns the length of this span in bytes, under the half-open
    /// reading.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns `true` if this span has zero length.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}
