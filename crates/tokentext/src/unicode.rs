//! Code point to byte encoding.
//!
//! The encoder produces the original (pre RFC 3629) UTF-8 layout, which
//! covers the full non-negative `i32` range with up to six bytes. For every
//! Unicode scalar value the output is identical to [`char::encode_utf8`].

use alloc::vec::Vec;

use crate::CodePoint;

/// Appends the encoded form of `cp` to `out`.
///
/// Negative values have no encoding and are skipped; nothing is appended.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn encode_utf8(cp: CodePoint, out: &mut Vec<u8>) {
    if cp < 0 {
        return;
    }
    let cp = cp as u32;

    // (number of continuation bytes, lead byte marker)
    let (tail, lead) = match cp {
        0..=0x7F => {
            out.push(cp as u8);
            return;
        }
        0x80..=0x7FF => (1, 0xC0),
        0x800..=0xFFFF => (2, 0xE0),
        0x1_0000..=0x1F_FFFF => (3, 0xF0),
        0x20_0000..=0x3FF_FFFF => (4, 0xF8),
        _ => (5, 0xFC),
    };

    out.push(lead | (cp >> (6 * tail)) as u8);
    for shift in (0..tail).rev() {
        out.push(0x80 | ((cp >> (6 * shift)) & 0x3F) as u8);
    }
}

/// Number of bytes [`encode_utf8`] appends for `cp`.
#[must_use]
pub fn encoded_len(cp: CodePoint) -> usize {
    match cp {
        i32::MIN..=-1 => 0,
        0..=0x7F => 1,
        0x80..=0x7FF => 2,
        0x800..=0xFFFF => 3,
        0x1_0000..=0x1F_FFFF => 4,
        0x20_0000..=0x3FF_FFFF => 5,
        _ => 6,
    }
}
