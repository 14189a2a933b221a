/// Half-open `[start, end)` offsets into a text.
///
/// Offsets count characters, not bytes: annotation tools export offsets
/// computed on unicode strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    start: usize,
    end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    /// Get the part of `text` covered by the span.
    ///
    /// Offsets past the end of `text` are clamped, and an inverted span yields an empty string.
    pub fn slice<'a>(&self, text: &'a str) -> &'a str {
        let start = byte_offset(text, self.start);
        let end = byte_offset(text, self.end);
        if start >= end {
            ""
        } else {
            &text[start..end]
        }
    }
}

/// byte offset of the `nth` char of `text`, or `text.len()` if there's not enough chars.
#[inline]
fn byte_offset(text: &str, nth: usize) -> usize {
    text.char_indices()
        .nth(nth)
        .map(|(offset, _)| offset)
        .unwrap_or(text.len())
}
