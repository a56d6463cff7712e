//! Ordering and equality of token text.
//!
//! Ordering is case-insensitive first. Two characters that differ only in
//! case are ordered lowercase first (`a` before `A`), which is the reverse of
//! their code point order. When one text is a prefix of the other, the
//! shorter one sorts first.

use core::cmp::Ordering;

use crate::{CodePoint, TextBuffer, ctype::to_lower};

#[inline]
fn clamp_i64(v: i64) -> i32 {
    i32::try_from(v).unwrap_or(if v < 0 { i32::MIN } else { i32::MAX })
}

#[inline]
fn clamp_usize(v: usize) -> i32 {
    i32::try_from(v).unwrap_or(i32::MAX)
}

/// Compares at most `max_len` leading code points of `a` and `b`.
///
/// Returns a negative value, zero, or a positive value as `a` sorts before,
/// equal to, or after `b`:
///
/// - at the first differing position, the difference of the lowercased code
///   points, or, if that is zero, the negated difference of the raw code
///   points;
/// - zero if the first `max_len` code points match;
/// - otherwise the signed difference of the lengths.
///
/// Differences that do not fit an `i32` saturate; the sign is always right.
#[must_use]
pub fn compare_code_points(a: &[CodePoint], b: &[CodePoint], max_len: usize) -> i32 {
    let end = max_len.min(a.len()).min(b.len());

    for (&x, &y) in a[..end].iter().zip(&b[..end]) {
        if x == y {
            continue;
        }

        let diff = i64::from(to_lower(x)) - i64::from(to_lower(y));
        if diff == 0 {
            // same letter, different case: lowercase first
            return clamp_i64(i64::from(y) - i64::from(x));
        }
        return clamp_i64(diff);
    }

    if end == max_len {
        return 0;
    }

    if a.len() > b.len() {
        clamp_usize(a.len() - b.len())
    } else {
        -clamp_usize(b.len() - a.len())
    }
}

impl TextBuffer {
    /// Compares the first `max_len` code points of `a` and `b`.
    ///
    /// See [`compare_code_points`] for the exact ordering.
    ///
    /// ```rust
    /// use tokentext::TextBuffer;
    ///
    /// let upper = TextBuffer::from("Apple");
    /// let lower = TextBuffer::from("apple");
    /// assert!(TextBuffer::compare(&upper, &lower, 5) > 0);
    /// assert!(TextBuffer::compare(&TextBuffer::from("ab"), &TextBuffer::from("abc"), 3) < 0);
    /// assert_eq!(TextBuffer::compare(&TextBuffer::from("ab"), &TextBuffer::from("abc"), 2), 0);
    /// ```
    #[must_use]
    pub fn compare(a: &TextBuffer, b: &TextBuffer, max_len: usize) -> i32 {
        compare_code_points(&a.chars, &b.chars, max_len)
    }

    /// Exact equality: same length and identical code points. No case
    /// folding.
    #[must_use]
    pub fn equals(&self, other: &TextBuffer) -> bool {
        self.chars == other.chars
    }
}

impl PartialEq for TextBuffer {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl Eq for TextBuffer {}

impl PartialOrd for TextBuffer {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Total order over whole buffers. Consistent with `Eq`: only identical
/// buffers compare equal.
impl Ord for TextBuffer {
    fn cmp(&self, other: &Self) -> Ordering {
        Self::compare(self, other, usize::MAX).cmp(&0)
    }
}
