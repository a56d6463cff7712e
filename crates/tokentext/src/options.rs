use crate::CodePoint;

/// Visible stand-in for a line feed in the display form (SYMBOL FOR NEWLINE).
pub const NEWLINE_SYMBOL: CodePoint = 0x2424;

/// Visible stand-in for a carriage return in the display form (SYMBOL FOR
/// CARRIAGE RETURN).
pub const CARRIAGE_RETURN_SYMBOL: CodePoint = 0x240D;

/// Configuration for the display form of a [`TextBuffer`].
///
/// The display form is what diagnostics and logs print for a token. Control
/// characters that would otherwise break a log line are replaced by visible
/// symbols.
///
/// # Examples
///
/// ```rust
/// use tokentext::{DisplayOptions, TextBuffer};
///
/// let mut text = TextBuffer::from("a\nb");
/// text.set_display_options(DisplayOptions {
///     substitute_controls: false,
///     ..Default::default()
/// });
/// assert_eq!(text.as_text(), "a\nb");
/// ```
///
/// # Default
///
/// Newlines render as `␤` (U+2424) and carriage returns as `␍` (U+240D).
///
/// [`TextBuffer`]: crate::TextBuffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DisplayOptions {
    /// Whether `'\n'` and `'\r'` are replaced at all.
    ///
    /// # Default
    ///
    /// `true`
    pub substitute_controls: bool,

    /// Code point emitted in place of `'\n'`.
    ///
    /// # Default
    ///
    /// U+2424
    pub newline_symbol: CodePoint,

    /// Code point emitted in place of `'\r'`.
    ///
    /// # Default
    ///
    /// U+240D
    pub carriage_return_symbol: CodePoint,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            substitute_controls: true,
            newline_symbol: NEWLINE_SYMBOL,
            carriage_return_symbol: CARRIAGE_RETURN_SYMBOL,
        }
    }
}

impl DisplayOptions {
    /// Maps one code point of the buffer to the code point that gets encoded.
    #[inline]
    #[must_use]
    pub fn substitute(&self, cp: CodePoint) -> CodePoint {
        if !self.substitute_controls {
            return cp;
        }
        match cp {
            0x0A => self.newline_symbol,
            0x0D => self.carriage_return_symbol,
            _ => cp,
        }
    }
}
