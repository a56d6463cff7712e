use crate::{TextBuffer, text};

#[test]
fn empty_macro() {
    assert!(text![].is_empty());
}

#[test]
fn mixed_pieces() {
    let inner = TextBuffer::from("mid");
    let t = text!["<", &inner, '>', 0x0A,];
    assert_eq!(t, TextBuffer::from("<mid>\n"));
}
