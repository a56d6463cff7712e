//! Token text as a mutable sequence of code points.
//!
//! [`TextBuffer`] holds the literal text of one lexical token, one
//! [`CodePoint`] per logical character, together with a lazily rebuilt
//! display form for diagnostics in which line breaks are shown as visible
//! symbols.

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod compare;
mod display;
mod error;
mod options;
mod search;
mod text;

pub mod ctype;
pub mod unicode;

#[cfg(test)]
mod tests;

pub use compare::compare_code_points;
pub use error::TextError;
pub use options::{CARRIAGE_RETURN_SYMBOL, DisplayOptions, NEWLINE_SYMBOL};
pub use search::Pattern;
pub use text::TextBuffer;

/// One logical character. Any `i32` is accepted; negative values are kept
/// but have no display encoding.
pub type CodePoint = i32;

/// A piece that [`text!`] can append to a [`TextBuffer`].
pub trait TextPiece {
    /// Appends `self` to `text`.
    fn append_to(self, text: &mut TextBuffer);
}

impl TextPiece for CodePoint {
    fn append_to(self, text: &mut TextBuffer) {
        text.push(self);
    }
}

impl TextPiece for char {
    fn append_to(self, text: &mut TextBuffer) {
        text.push(self as CodePoint);
    }
}

impl TextPiece for &str {
    fn append_to(self, text: &mut TextBuffer) {
        text.append_raw(self);
    }
}

impl TextPiece for &TextBuffer {
    fn append_to(self, text: &mut TextBuffer) {
        text.append_text(self);
    }
}

/// Builds a [`TextBuffer`] from a heterogeneous list of code points, chars,
/// raw strings and other buffers.
///
/// ```rust
/// use tokentext::{TextBuffer, text};
///
/// let t = text!['(', "x", 0x2B, ')'];
/// assert_eq!(t, TextBuffer::from("(x+)"));
/// ```
#[macro_export]
macro_rules! text {
    ( $( $piece:expr ),* $(,)? ) => {{
        #[allow(unused_mut)]
        let mut text = $crate::TextBuffer::new();
        $( $crate::TextPiece::append_to($piece, &mut text); )*
        text
    }};
}
