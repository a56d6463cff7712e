use alloc::vec::Vec;
use core::{
    fmt,
    hash::{Hash, Hasher},
    ops::{AddAssign, Index, IndexMut},
    slice,
};

use bstr::BStr;

use crate::{CodePoint, DisplayOptions, TextError, display::DisplayCache, unicode::encoded_len};

/// The text of one token, stored as one [`CodePoint`] per logical character.
///
/// Indexing, comparison and substitution work per character regardless of
/// how many bytes a character takes once encoded. The buffer also keeps a
/// cached display form (see [`as_text`](Self::as_text)) which every mutation
/// marks stale.
///
/// "Raw" inputs (`&str`, `&[u8]`) are taken one byte per code point, without
/// UTF-8 decoding. Use [`from_chars`](Self::from_chars) to decode.
///
/// ```rust
/// use tokentext::TextBuffer;
///
/// let mut text = TextBuffer::from("banana");
/// assert_eq!(text.replace("a", &TextBuffer::from("bb")), 3);
/// assert_eq!(text, TextBuffer::from("bbbnbbnbb"));
/// ```
#[derive(Clone, Default)]
pub struct TextBuffer {
    pub(crate) chars: Vec<CodePoint>,
    pub(crate) display: DisplayCache,
    pub(crate) options: DisplayOptions,
}

#[inline]
fn widen(byte: u8) -> CodePoint {
    CodePoint::from(byte)
}

/// Number of elements that can be read from a sequence of `size` elements
/// starting at `start`, when `len` are wanted.
#[inline]
fn available(size: usize, start: usize, len: usize) -> usize {
    if start >= size {
        0
    } else {
        len.min(size - start)
    }
}

/// Replaces `dst` with exactly `len` elements: as many as `src` can provide
/// from `start`, then zeros.
fn fill_range<T: Copy>(
    dst: &mut Vec<CodePoint>,
    src: &[T],
    start: usize,
    len: usize,
    convert: impl Fn(T) -> CodePoint,
) {
    dst.clear();
    dst.reserve(len);
    let n = available(src.len(), start, len);
    if n > 0 {
        dst.extend(src[start..start + n].iter().map(|&c| convert(c)));
    }
    dst.resize(len, 0);
}

impl TextBuffer {
    /// Creates an empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a buffer holding the single code point `cp`.
    #[must_use]
    pub fn from_char(cp: CodePoint) -> Self {
        let mut text = Self::new();
        text.set_char(cp);
        text
    }

    /// Creates a buffer from raw bytes, one code point per byte.
    #[must_use]
    pub fn from_raw(raw: impl AsRef<[u8]>) -> Self {
        let mut text = Self::new();
        text.set_raw(raw);
        text
    }

    /// Creates a buffer from `len` bytes of `data` starting at `start`.
    ///
    /// See [`set_raw_range`](Self::set_raw_range).
    #[must_use]
    pub fn from_raw_range(data: &[u8], start: usize, len: usize) -> Self {
        let mut text = Self::new();
        text.set_raw_range(data, start, len);
        text
    }

    /// Creates a buffer from part of another.
    ///
    /// See [`set_text_range`](Self::set_text_range).
    #[must_use]
    pub fn from_text_range(other: &TextBuffer, start: usize, len: usize) -> Self {
        let mut text = Self::new();
        text.set_text_range(other, start, len);
        text
    }

    /// Creates a buffer by decoding `s` into Unicode scalar values.
    ///
    /// ```rust
    /// use tokentext::TextBuffer;
    ///
    /// assert_eq!(TextBuffer::from_chars("é").len(), 1);
    /// assert_eq!(TextBuffer::from("é").len(), 2);
    /// ```
    #[must_use]
    pub fn from_chars(s: &str) -> Self {
        s.chars().map(|c| c as CodePoint).collect()
    }

    /// Builder-style variant of [`set_display_options`](Self::set_display_options).
    #[must_use]
    pub fn with_display_options(mut self, options: DisplayOptions) -> Self {
        self.set_display_options(options);
        self
    }

    /// Changes how the display form is rendered.
    pub fn set_display_options(&mut self, options: DisplayOptions) {
        if self.options != options {
            self.options = options;
            self.display.invalidate();
        }
    }

    /// Options used to render the display form.
    #[must_use]
    pub fn display_options(&self) -> &DisplayOptions {
        &self.options
    }

    /// Number of code points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    #[must_use]
    #[allow(missing_docs)]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Code point at `idx`, or `None` when out of range.
    #[must_use]
    pub fn get(&self, idx: usize) -> Option<CodePoint> {
        self.chars.get(idx).copied()
    }

    /// Last code point, if any.
    #[must_use]
    pub fn back(&self) -> Option<CodePoint> {
        self.chars.last().copied()
    }

    /// The code points, in order.
    #[must_use]
    pub fn as_slice(&self) -> &[CodePoint] {
        &self.chars
    }

    #[allow(missing_docs)]
    pub fn iter(&self) -> slice::Iter<'_, CodePoint> {
        self.chars.iter()
    }

    /// Replaces the contents with the single code point `cp`.
    pub fn set_char(&mut self, cp: CodePoint) {
        self.chars.clear();
        self.chars.push(cp);
        self.display.invalidate();
    }

    /// Replaces the contents with a copy of `other`.
    pub fn set_text(&mut self, other: &TextBuffer) {
        self.chars.clone_from(&other.chars);
        self.display.invalidate();
    }

    /// Replaces the contents with `len` code points of `other` starting at
    /// `start`.
    ///
    /// The result always holds exactly `len` elements. Whatever part of the
    /// requested range lies past the end of `other` is filled with zeros, so
    /// a `start` beyond the end yields `len` zeros.
    ///
    /// When `len == other.len()` the whole of `other` is copied and `start`
    /// is ignored.
    ///
    /// ```rust
    /// use tokentext::TextBuffer;
    ///
    /// let src = TextBuffer::from("abcdef");
    /// assert_eq!(TextBuffer::from_text_range(&src, 2, 3), TextBuffer::from("cde"));
    /// assert_eq!(TextBuffer::from_text_range(&src, 9, 2).as_slice(), &[0, 0]);
    /// ```
    pub fn set_text_range(&mut self, other: &TextBuffer, start: usize, len: usize) {
        self.display.invalidate();

        if len == other.len() {
            self.chars.clone_from(&other.chars);
            return;
        }
        fill_range(&mut self.chars, &other.chars, start, len, |cp| cp);
    }

    /// Replaces the contents with `raw`, one code point per byte.
    pub fn set_raw(&mut self, raw: impl AsRef<[u8]>) {
        self.chars.clear();
        self.chars.extend(raw.as_ref().iter().copied().map(widen));
        self.display.invalidate();
    }

    /// Replaces the contents with `len` bytes of `data` starting at `start`,
    /// one code point per byte. Bytes past the end of `data` read as zero.
    pub fn set_raw_range(&mut self, data: &[u8], start: usize, len: usize) {
        fill_range(&mut self.chars, data, start, len, widen);
        self.display.invalidate();
    }

    /// Grows with zeros or truncates to exactly `new_len` code points.
    pub fn resize(&mut self, new_len: usize) {
        if self.chars.len() == new_len {
            return;
        }
        self.chars.resize(new_len, 0);
        self.display.invalidate();
    }

    /// Removes everything.
    pub fn clear(&mut self) {
        self.chars.clear();
        self.display.invalidate();
    }

    /// Inserts `cp` before position `idx`.
    ///
    /// # Panics
    ///
    /// Panics if `idx > len`.
    #[track_caller]
    pub fn insert_char(&mut self, idx: usize, cp: CodePoint) {
        if let Err(err) = self.try_insert_char(idx, cp) {
            panic!("{err}");
        }
    }

    /// Inserts all of `other` before position `idx`.
    ///
    /// # Panics
    ///
    /// Panics if `idx > len`.
    #[track_caller]
    pub fn insert_text(&mut self, idx: usize, other: &TextBuffer) {
        if let Err(err) = self.try_insert_text(idx, other) {
            panic!("{err}");
        }
    }

    /// Checked form of [`insert_char`](Self::insert_char).
    ///
    /// # Errors
    ///
    /// [`TextError::InsertOutOfBounds`] if `idx > len`; the buffer is left
    /// untouched.
    pub fn try_insert_char(&mut self, idx: usize, cp: CodePoint) -> Result<(), TextError> {
        self.check_insert(idx)?;
        self.chars.insert(idx, cp);
        self.display.invalidate();
        Ok(())
    }

    /// Checked form of [`insert_text`](Self::insert_text).
    ///
    /// # Errors
    ///
    /// [`TextError::InsertOutOfBounds`] if `idx > len`; the buffer is left
    /// untouched.
    pub fn try_insert_text(&mut self, idx: usize, other: &TextBuffer) -> Result<(), TextError> {
        self.check_insert(idx)?;
        self.chars.splice(idx..idx, other.chars.iter().copied());
        self.display.invalidate();
        Ok(())
    }

    fn check_insert(&self, idx: usize) -> Result<(), TextError> {
        let len = self.chars.len();
        if idx > len {
            tracing::debug!(index = idx, len, "rejected insert");
            return Err(TextError::InsertOutOfBounds { index: idx, len });
        }
        Ok(())
    }

    /// Appends one code point.
    pub fn push(&mut self, cp: CodePoint) {
        self.chars.push(cp);
        self.display.invalidate();
    }

    /// Appends all of `other`.
    pub fn append_text(&mut self, other: &TextBuffer) {
        self.chars.extend_from_slice(&other.chars);
        self.display.invalidate();
    }

    /// Appends `raw`, one code point per byte.
    pub fn append_raw(&mut self, raw: impl AsRef<[u8]>) {
        self.chars.extend(raw.as_ref().iter().copied().map(widen));
        self.display.invalidate();
    }

    /// Appends what [`from_raw_range`](Self::from_raw_range) would build,
    /// zero padding included.
    pub fn append_raw_range(&mut self, data: &[u8], start: usize, len: usize) {
        let tail = Self::from_raw_range(data, start, len);
        self.append_text(&tail);
    }

    /// Removes `count` code points starting at `idx`. Removing nothing is
    /// always allowed.
    ///
    /// # Panics
    ///
    /// Panics if `idx + count > len`.
    #[track_caller]
    pub fn erase(&mut self, idx: usize, count: usize) {
        if let Err(err) = self.try_erase(idx, count) {
            panic!("{err}");
        }
    }

    /// Checked form of [`erase`](Self::erase).
    ///
    /// # Errors
    ///
    /// [`TextError::EraseOutOfBounds`] if the range does not lie inside the
    /// buffer; the buffer is left untouched.
    pub fn try_erase(&mut self, idx: usize, count: usize) -> Result<(), TextError> {
        if count == 0 {
            return Ok(());
        }

        let len = self.chars.len();
        match idx.checked_add(count) {
            Some(end) if end <= len => {
                self.chars.drain(idx..end);
                self.display.invalidate();
                Ok(())
            }
            _ => {
                tracing::debug!(index = idx, count, len, "rejected erase");
                Err(TextError::EraseOutOfBounds {
                    index: idx,
                    count,
                    len,
                })
            }
        }
    }

    /// Removes and returns the last code point.
    pub fn pop_back(&mut self) -> Option<CodePoint> {
        let cp = self.chars.pop()?;
        self.display.invalidate();
        Some(cp)
    }

    /// Removes and returns the first code point.
    pub fn pop_front(&mut self) -> Option<CodePoint> {
        if self.chars.is_empty() {
            return None;
        }
        let cp = self.chars.remove(0);
        self.display.invalidate();
        Some(cp)
    }
}

impl Index<usize> for TextBuffer {
    type Output = CodePoint;

    #[track_caller]
    fn index(&self, idx: usize) -> &CodePoint {
        &self.chars[idx]
    }
}

impl IndexMut<usize> for TextBuffer {
    /// Writing through the returned reference changes the text, so the
    /// display cache is invalidated up front.
    #[track_caller]
    fn index_mut(&mut self, idx: usize) -> &mut CodePoint {
        self.display.invalidate();
        &mut self.chars[idx]
    }
}

impl<'a> IntoIterator for &'a TextBuffer {
    type Item = &'a CodePoint;
    type IntoIter = slice::Iter<'a, CodePoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.chars.iter()
    }
}

impl FromIterator<CodePoint> for TextBuffer {
    fn from_iter<I: IntoIterator<Item = CodePoint>>(iter: I) -> Self {
        Self {
            chars: iter.into_iter().collect(),
            ..Self::default()
        }
    }
}

impl Extend<CodePoint> for TextBuffer {
    fn extend<I: IntoIterator<Item = CodePoint>>(&mut self, iter: I) {
        self.chars.extend(iter);
        self.display.invalidate();
    }
}

impl From<&str> for TextBuffer {
    fn from(raw: &str) -> Self {
        Self::from_raw(raw)
    }
}

impl From<&[u8]> for TextBuffer {
    fn from(raw: &[u8]) -> Self {
        Self::from_raw(raw)
    }
}

impl From<Vec<CodePoint>> for TextBuffer {
    fn from(chars: Vec<CodePoint>) -> Self {
        Self {
            chars,
            ..Self::default()
        }
    }
}

impl AddAssign<CodePoint> for TextBuffer {
    fn add_assign(&mut self, cp: CodePoint) {
        self.push(cp);
    }
}

impl AddAssign<char> for TextBuffer {
    fn add_assign(&mut self, ch: char) {
        self.push(ch as CodePoint);
    }
}

impl AddAssign<&str> for TextBuffer {
    fn add_assign(&mut self, raw: &str) {
        self.append_raw(raw);
    }
}

impl AddAssign<&TextBuffer> for TextBuffer {
    fn add_assign(&mut self, other: &TextBuffer) {
        self.append_text(other);
    }
}

impl Hash for TextBuffer {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.chars.hash(state);
    }
}

/// Renders the display form. Does not touch the cache, which needs `&mut`.
impl fmt::Display for TextBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.display.is_valid() {
            let bytes = self.display.bytes_with_nul();
            return fmt::Display::fmt(BStr::new(&bytes[..bytes.len() - 1]), f);
        }
        let mut bytes = Vec::with_capacity(
            self.chars
                .iter()
                .map(|&cp| encoded_len(self.options.substitute(cp)))
                .sum(),
        );
        crate::display::render(&self.chars, &self.options, &mut bytes);
        fmt::Display::fmt(BStr::new(&bytes), f)
    }
}

impl fmt::Debug for TextBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextBuffer")
            .field("chars", &self.chars)
            .field("display_current", &self.display.is_valid())
            .finish()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for TextBuffer {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serde::Serialize::serialize(&self.chars, serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for TextBuffer {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        <Vec<CodePoint> as serde::Deserialize>::deserialize(deserializer).map(Self::from)
    }
}
