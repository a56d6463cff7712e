//! Character classification used by the comparator.

use crate::CodePoint;

/// Returns the lowercase form of `cp`.
///
/// Uses the Unicode lowercase mapping when it maps to exactly one scalar
/// value. Everything else (uncased characters, multi-character mappings such
/// as `'İ'`, negative or non-scalar values) maps to itself.
#[must_use]
pub fn to_lower(cp: CodePoint) -> CodePoint {
    if (0..0x80).contains(&cp) {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        return CodePoint::from((cp as u8).to_ascii_lowercase());
    }

    let Some(ch) = u32::try_from(cp).ok().and_then(char::from_u32) else {
        return cp;
    };
    let mut lower = ch.to_lowercase();
    match (lower.next(), lower.next()) {
        #[allow(clippy::cast_possible_wrap)]
        (Some(single), None) => single as CodePoint,
        _ => cp,
    }
}

#[cfg(test)]
mod tests {
    use super::to_lower;

    #[test]
    fn ascii() {
        assert_eq!(to_lower('A' as i32), 'a' as i32);
        assert_eq!(to_lower('z' as i32), 'z' as i32);
        assert_eq!(to_lower('[' as i32), '[' as i32);
    }

    #[test]
    fn non_ascii_cased() {
        assert_eq!(to_lower('É' as i32), 'é' as i32);
        assert_eq!(to_lower('Ω' as i32), 'ω' as i32);
    }

    #[test]
    fn identity_outside_simple_mappings() {
        // U+0130 lowercases to two code points
        assert_eq!(to_lower(0x130), 0x130);
        assert_eq!(to_lower(-7), -7);
        assert_eq!(to_lower(0xD800), 0xD800);
        assert_eq!(to_lower(0x7FFF_FFFF), 0x7FFF_FFFF);
    }
}
