#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use tokentext::TextBuffer;

/// One editing step. Indices are reduced modulo the current length so that
/// every step is a valid call.
#[derive(Debug, Arbitrary)]
enum Op {
    SetChar(i32),
    SetRaw(Vec<u8>),
    SetRawRange(Vec<u8>, u8, u8),
    Resize(u8),
    Clear,
    InsertChar(u16, i32),
    InsertRaw(u16, Vec<u8>),
    Push(i32),
    AppendRaw(Vec<u8>),
    Erase(u16, u16),
    PopBack,
    PopFront,
    Replace(Vec<u8>, Vec<u8>),
    Display,
}

fn model_range(data: &[u8], start: usize, len: usize) -> Vec<i32> {
    (0..len)
        .map(|i| data.get(start + i).map_or(0, |&b| i32::from(b)))
        .collect()
}

fn model_replace(model: &mut Vec<i32>, old: &[i32], new: &[i32]) -> usize {
    if old.is_empty() {
        return 0;
    }
    let mut out = Vec::with_capacity(model.len());
    let mut count = 0;
    let mut i = 0;
    while i < model.len() {
        if model[i..].starts_with(old) {
            out.extend_from_slice(new);
            i += old.len();
            count += 1;
        } else {
            out.push(model[i]);
            i += 1;
        }
    }
    *model = out;
    count
}

fn widen(bytes: &[u8]) -> Vec<i32> {
    bytes.iter().map(|&b| i32::from(b)).collect()
}

fn run(ops: Vec<Op>) {
    let mut text = TextBuffer::new();
    let mut model: Vec<i32> = Vec::new();

    for op in ops {
        let len = model.len();
        match op {
            Op::SetChar(cp) => {
                text.set_char(cp);
                model = vec![cp];
            }
            Op::SetRaw(raw) => {
                text.set_raw(&raw);
                model = widen(&raw);
            }
            Op::SetRawRange(raw, start, n) => {
                text.set_raw_range(&raw, start.into(), n.into());
                model = model_range(&raw, start.into(), n.into());
            }
            Op::Resize(n) => {
                text.resize(n.into());
                model.resize(n.into(), 0);
            }
            Op::Clear => {
                text.clear();
                model.clear();
            }
            Op::InsertChar(at, cp) => {
                let at = usize::from(at) % (len + 1);
                text.insert_char(at, cp);
                model.insert(at, cp);
            }
            Op::InsertRaw(at, raw) => {
                let at = usize::from(at) % (len + 1);
                text.insert_text(at, &TextBuffer::from_raw(&raw));
                model.splice(at..at, widen(&raw));
            }
            Op::Push(cp) => {
                text.push(cp);
                model.push(cp);
            }
            Op::AppendRaw(raw) => {
                text.append_raw(&raw);
                model.extend(widen(&raw));
            }
            Op::Erase(at, n) => {
                let at = usize::from(at) % (len + 1);
                let n = usize::from(n) % (len - at + 1);
                text.erase(at, n);
                model.drain(at..at + n);
            }
            Op::PopBack => assert_eq!(text.pop_back(), model.pop()),
            Op::PopFront => {
                let expected = (!model.is_empty()).then(|| model.remove(0));
                assert_eq!(text.pop_front(), expected);
            }
            Op::Replace(old, new) => {
                let count = text.replace(old.as_slice(), &TextBuffer::from_raw(&new));
                assert_eq!(count, model_replace(&mut model, &widen(&old), &widen(&new)));
            }
            Op::Display => {
                let bytes = text.as_bytes_with_nul();
                assert_eq!(bytes.last(), Some(&0));
                assert!(!bytes.contains(&b'\n') && !bytes.contains(&b'\r'));
            }
        }
        assert_eq!(text.as_slice(), model.as_slice());
    }

    let first = text.find(&[1i32, 2][..], 0);
    let last = text.rfind(&[1i32, 2][..], usize::MAX);
    assert_eq!(first.is_some(), last.is_some());
    assert!(first <= last);
}

fuzz_target!(|ops: Vec<Op>| run(ops));
