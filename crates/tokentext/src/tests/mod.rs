mod macros;
mod property_edits;

/// Maps arbitrary bytes onto a four-letter alphabet (plus line breaks) so
/// that generated patterns actually occur in generated text.
pub(crate) fn small_alphabet(bytes: &[u8]) -> alloc::string::String {
    bytes
        .iter()
        .map(|b| match b % 7 {
            0 => 'a',
            1 => 'b',
            2 => 'A',
            3 => 'B',
            4 => '\n',
            5 => '\r',
            _ => 'c',
        })
        .collect()
}
