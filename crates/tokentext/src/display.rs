//! The display form of a [`TextBuffer`]: a lazily built, cached byte encoding
//! meant for logs and diagnostics.
//!
//! Every code point is encoded with [`encode_utf8`] after `'\n'` and `'\r'`
//! have been swapped for visible symbols (see [`DisplayOptions`]). The cached
//! bytes always end with a single zero byte so they can be handed to code
//! expecting a C string.
//!
//! The cache has two states. Mutators only flip it to stale; the bytes are
//! rebuilt from scratch on the next request.

use alloc::vec::Vec;
use core::ffi::CStr;

use bstr::BStr;

use crate::{CodePoint, DisplayOptions, TextBuffer, unicode::encode_utf8};

#[derive(Debug, Default)]
pub(crate) struct DisplayCache {
    bytes: Vec<u8>,
    valid: bool,
}

// A copy starts stale; the new owner rebuilds on first request.
impl Clone for DisplayCache {
    fn clone(&self) -> Self {
        Self::default()
    }
}

impl DisplayCache {
    #[inline]
    pub(crate) fn invalidate(&mut self) {
        self.valid = false;
    }

    #[inline]
    pub(crate) fn is_valid(&self) -> bool {
        self.valid
    }

    pub(crate) fn refresh(&mut self, chars: &[CodePoint], options: &DisplayOptions) {
        if self.valid {
            return;
        }

        self.bytes.clear();
        // pessimistic guess, most token text is ASCII
        self.bytes.reserve(chars.len() * 3 + 1);
        render(chars, options, &mut self.bytes);
        self.bytes.push(0);
        self.valid = true;

        tracing::trace!(
            chars = chars.len(),
            bytes = self.bytes.len(),
            "rebuilt display cache"
        );
    }

    /// Cached bytes including the terminator. Only meaningful when valid.
    pub(crate) fn bytes_with_nul(&self) -> &[u8] {
        debug_assert!(self.valid, "display cache read while stale");
        &self.bytes
    }
}

/// Appends the display encoding of `chars` to `out`, without a terminator.
pub(crate) fn render(chars: &[CodePoint], options: &DisplayOptions, out: &mut Vec<u8>) {
    for &cp in chars {
        encode_utf8(options.substitute(cp), out);
    }
}

impl TextBuffer {
    /// Rebuilds the display form if a mutation made it stale.
    pub fn refresh_display(&mut self) {
        self.display.refresh(&self.chars, &self.options);
    }

    /// Whether the cached display form reflects the current contents.
    #[must_use]
    pub fn is_display_current(&self) -> bool {
        self.display.is_valid()
    }

    /// The display form, without the trailing zero byte.
    ///
    /// ```rust
    /// use tokentext::TextBuffer;
    ///
    /// let mut text = TextBuffer::from("a\r\n");
    /// assert_eq!(text.as_text(), "a\u{240D}\u{2424}");
    /// ```
    pub fn as_text(&mut self) -> &BStr {
        let bytes = self.as_bytes_with_nul();
        BStr::new(&bytes[..bytes.len() - 1])
    }

    /// The display form including its zero terminator.
    pub fn as_bytes_with_nul(&mut self) -> &[u8] {
        self.refresh_display();
        self.display.bytes_with_nul()
    }

    /// The display form as a C string.
    ///
    /// The buffer may hold zero code points (for example after growing with
    /// [`resize`](Self::resize)); like any C string the result ends at the
    /// first zero byte.
    pub fn as_c_str(&mut self) -> &CStr {
        CStr::from_bytes_until_nul(self.as_bytes_with_nul()).unwrap_or_default()
    }
}
