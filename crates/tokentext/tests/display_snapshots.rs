#![expect(missing_docs)]

use std::fmt::Write;

use tokentext::{DisplayOptions, TextBuffer};

fn hex(bytes: &[u8]) -> String {
    let mut out = String::new();
    for (i, b) in bytes.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        write!(out, "{b:02X}").unwrap();
    }
    out
}

#[test]
fn line_breaks_render_as_symbols() {
    let mut text = TextBuffer::from("if (a)\r\n{");
    insta::assert_snapshot!(text.as_text(), @"if (a)␍␤{");
}

#[test]
fn display_bytes_are_exact() {
    let mut text = TextBuffer::from("a\nb\r");
    insta::assert_snapshot!(hex(text.as_bytes_with_nul()), @"61 E2 90 A4 62 E2 90 8D 00");
}

#[test]
fn wide_code_points() {
    let mut text = TextBuffer::from_chars("é€👍");
    text.push(0x20_0000);
    text.push(-1);
    insta::assert_snapshot!(
        hex(text.as_bytes_with_nul()),
        @"C3 A9 E2 82 AC F0 9F 91 8D F8 88 80 80 80 00"
    );
}

#[test]
fn stale_view_is_rebuilt_after_mutation() {
    let mut text = TextBuffer::from("line");
    insta::assert_snapshot!(text.as_text(), @"line");

    text.push('\n' as i32);
    text.insert_char(0, '>' as i32);
    insta::assert_snapshot!(text.as_text(), @">line␤");

    text.erase(1, 4);
    insta::assert_snapshot!(text.as_text(), @">␤");
}

#[test]
fn substitution_disabled() {
    let mut text = TextBuffer::from("a\r\n").with_display_options(DisplayOptions {
        substitute_controls: false,
        ..Default::default()
    });
    insta::assert_snapshot!(hex(text.as_bytes_with_nul()), @"61 0D 0A 00");
}

#[test]
fn display_trait_matches_cached_view() {
    let mut text = TextBuffer::from("x\ny");
    let rendered = text.to_string();
    assert_eq!(text.as_text(), rendered.as_str());
    assert_eq!(text.to_string(), rendered);
}
