use crate::{CodePoint, TextBuffer};

/// Something that can be searched for in a [`TextBuffer`].
///
/// Byte strings (`str`, `[u8]`) are matched one byte per code point, the
/// same way raw text is stored.
pub trait Pattern {
    /// Number of code points in the pattern.
    fn pattern_len(&self) -> usize;

    /// Code point at `idx`; `idx < pattern_len()`.
    fn code_point_at(&self, idx: usize) -> CodePoint;
}

impl Pattern for str {
    fn pattern_len(&self) -> usize {
        self.len()
    }

    fn code_point_at(&self, idx: usize) -> CodePoint {
        CodePoint::from(self.as_bytes()[idx])
    }
}

impl Pattern for [u8] {
    fn pattern_len(&self) -> usize {
        self.len()
    }

    fn code_point_at(&self, idx: usize) -> CodePoint {
        CodePoint::from(self[idx])
    }
}

impl<const N: usize> Pattern for [u8; N] {
    fn pattern_len(&self) -> usize {
        N
    }

    fn code_point_at(&self, idx: usize) -> CodePoint {
        CodePoint::from(self[idx])
    }
}

impl Pattern for [CodePoint] {
    fn pattern_len(&self) -> usize {
        self.len()
    }

    fn code_point_at(&self, idx: usize) -> CodePoint {
        self[idx]
    }
}

impl Pattern for TextBuffer {
    fn pattern_len(&self) -> usize {
        self.len()
    }

    fn code_point_at(&self, idx: usize) -> CodePoint {
        self.chars[idx]
    }
}

impl<P: Pattern + ?Sized> Pattern for &P {
    fn pattern_len(&self) -> usize {
        (**self).pattern_len()
    }

    fn code_point_at(&self, idx: usize) -> CodePoint {
        (**self).code_point_at(idx)
    }
}

impl TextBuffer {
    /// Caller guarantees `idx + pattern.len() <= self.len()`.
    fn matches_at<P: Pattern + ?Sized>(&self, idx: usize, pattern: &P) -> bool {
        let window = &self.chars[idx..idx + pattern.pattern_len()];
        window
            .iter()
            .enumerate()
            .all(|(i, &cp)| cp == pattern.code_point_at(i))
    }

    /// Whether `pattern` occurs at position `from`.
    ///
    /// An empty pattern never matches.
    pub fn starts_with<P: Pattern + ?Sized>(&self, pattern: &P, from: usize) -> bool {
        let plen = pattern.pattern_len();
        if plen == 0 {
            return false;
        }
        match from.checked_add(plen) {
            Some(end) if end <= self.len() => self.matches_at(from, pattern),
            _ => false,
        }
    }

    /// Leftmost position at or after `from` where `pattern` occurs.
    ///
    /// ```rust
    /// use tokentext::TextBuffer;
    ///
    /// let text = TextBuffer::from("needle in a haystack");
    /// assert_eq!(text.find("needle", 0), Some(0));
    /// assert_eq!(text.find("a", 9), Some(10));
    /// assert_eq!(text.find("needles", 0), None);
    /// ```
    pub fn find<P: Pattern + ?Sized>(&self, pattern: &P, from: usize) -> Option<usize> {
        let last = self.len().checked_sub(pattern.pattern_len())?;
        (from..=last).find(|&idx| self.matches_at(idx, pattern))
    }

    /// Rightmost position at or before `from` where `pattern` occurs.
    ///
    /// `from` is lowered to the last position the pattern fits at, so
    /// `usize::MAX` searches the whole buffer.
    pub fn rfind<P: Pattern + ?Sized>(&self, pattern: &P, from: usize) -> Option<usize> {
        let last = self.len().checked_sub(pattern.pattern_len())?;
        (0..=from.min(last))
            .rev()
            .find(|&idx| self.matches_at(idx, pattern))
    }

    /// Replaces every occurrence of `old`, left to right, with `new`.
    ///
    /// The scan resumes right after each inserted replacement, so text
    /// introduced by `new` is never matched again. Returns the number of
    /// replacements. An empty `old` replaces nothing.
    pub fn replace<P: Pattern + ?Sized>(&mut self, old: &P, new: &TextBuffer) -> usize {
        let olen = old.pattern_len();
        if olen == 0 {
            return 0;
        }

        let mut count = 0;
        let mut from = 0;
        while let Some(at) = self.find(old, from) {
            count += 1;
            self.erase(at, olen);
            self.insert_text(at, new);
            from = at + new.len();
        }

        tracing::trace!(pattern_len = olen, count, "replace");
        count
    }
}
