use alloc::vec::Vec;

use quickcheck::TestResult;
use quickcheck_macros::quickcheck;

use super::small_alphabet;
use crate::{CodePoint, TextBuffer};

#[quickcheck]
fn insert_then_erase_restores(base: Vec<u8>, inserted: Vec<u8>, at: usize) -> bool {
    let original = TextBuffer::from_raw(&base);
    let at = at % (base.len() + 1);

    let mut text = original.clone();
    text.insert_text(at, &TextBuffer::from_raw(&inserted));
    text.erase(at, inserted.len());
    text == original
}

#[quickcheck]
fn edits_agree_with_vec_model(base: Vec<i32>, ops: Vec<(u8, usize, i32)>) -> bool {
    let mut model: Vec<CodePoint> = base.clone();
    let mut text: TextBuffer = base.into_iter().collect();

    for (op, at, cp) in ops {
        let len = model.len();
        match op % 6 {
            0 => {
                model.insert(at % (len + 1), cp);
                text.insert_char(at % (len + 1), cp);
            }
            1 if len > 0 => {
                let idx = at % len;
                let count = (cp.unsigned_abs() as usize) % (len - idx + 1);
                model.drain(idx..idx + count);
                text.erase(idx, count);
            }
            2 => {
                model.push(cp);
                text.push(cp);
            }
            3 => {
                let new_len = at % 16;
                model.resize(new_len, 0);
                text.resize(new_len);
            }
            4 => {
                let popped = model.pop();
                if text.pop_back() != popped {
                    return false;
                }
            }
            _ => {
                let popped = if model.is_empty() { None } else { Some(model.remove(0)) };
                if text.pop_front() != popped {
                    return false;
                }
            }
        }
    }
    text.as_slice() == model.as_slice()
}

#[quickcheck]
fn set_text_range_matches_model(src: Vec<i32>, start: usize, len: u8) -> bool {
    let other: TextBuffer = src.iter().copied().collect();
    let start = start % (src.len() + 3);
    let len = usize::from(len % 16);

    let expected: Vec<CodePoint> = if len == src.len() {
        src.clone()
    } else {
        (0..len)
            .map(|i| src.get(start + i).copied().unwrap_or(0))
            .collect()
    };
    TextBuffer::from_text_range(&other, start, len).as_slice() == expected.as_slice()
}

#[quickcheck]
fn equals_is_reflexive_and_symmetric(a: Vec<u8>, b: Vec<u8>) -> bool {
    let (ta, tb) = (TextBuffer::from_raw(&a), TextBuffer::from_raw(&b));
    ta.equals(&ta) && ta.equals(&tb) == tb.equals(&ta) && ta.equals(&tb) == (a == b)
}

#[quickcheck]
fn compare_is_antisymmetric(a: Vec<u8>, b: Vec<u8>, max_len: u8) -> TestResult {
    let a = TextBuffer::from(small_alphabet(&a).as_str());
    let b = TextBuffer::from(small_alphabet(&b).as_str());
    let max_len = usize::from(max_len);

    if TextBuffer::compare(&a, &a, max_len) != 0 {
        return TestResult::failed();
    }
    let ab = TextBuffer::compare(&a, &b, max_len).signum();
    let ba = TextBuffer::compare(&b, &a, max_len).signum();
    TestResult::from_bool(ab == -ba)
}

#[quickcheck]
fn full_compare_is_zero_only_for_equal_text(a: Vec<u8>, b: Vec<u8>) -> bool {
    let a = TextBuffer::from(small_alphabet(&a).as_str());
    let b = TextBuffer::from(small_alphabet(&b).as_str());
    (TextBuffer::compare(&a, &b, usize::MAX) == 0) == a.equals(&b)
}
