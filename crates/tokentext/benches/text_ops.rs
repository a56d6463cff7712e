//! Benchmark – search, replace and compare on `tokentext::TextBuffer`
#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use tokentext::TextBuffer;

/// Deterministic identifier-ish text of exactly `len` code points with a
/// line break every 80 characters.
fn make_text(len: usize) -> TextBuffer {
    const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz_ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
    (0..len)
        .map(|i| {
            if i % 80 == 79 {
                i32::from(b'\n')
            } else {
                i32::from(ALPHABET[(i * 7 + i / 13) % ALPHABET.len()])
            }
        })
        .collect()
}

fn bench_find(c: &mut Criterion) {
    let mut group = c.benchmark_group("find");
    for &len in &[64usize, 1_024, 16_384] {
        let text = make_text(len);
        group.bench_with_input(BenchmarkId::new("absent", len), &text, |b, t| {
            b.iter(|| black_box(t.find("@@@", 0)));
        });
        group.bench_with_input(BenchmarkId::new("rfind_absent", len), &text, |b, t| {
            b.iter(|| black_box(t.rfind("@@@", usize::MAX)));
        });
    }
    group.finish();
}

fn bench_replace(c: &mut Criterion) {
    let mut group = c.benchmark_group("replace");
    for &len in &[64usize, 1_024, 16_384] {
        let text = make_text(len);
        let replacement = TextBuffer::from("\\n");
        group.bench_with_input(BenchmarkId::new("newlines", len), &text, |b, t| {
            b.iter(|| {
                let mut t = t.clone();
                black_box(t.replace("\n", &replacement))
            });
        });
    }
    group.finish();
}

fn bench_compare(c: &mut Criterion) {
    let a = make_text(4_096);
    let mut b = a.clone();
    b[4_000] = i32::from(b'!');
    c.bench_function("compare/late_difference", |bench| {
        bench.iter(|| black_box(TextBuffer::compare(&a, &b, usize::MAX)));
    });
}

fn bench_display(c: &mut Criterion) {
    let text = make_text(4_096);
    c.bench_function("display/rebuild", |b| {
        b.iter(|| {
            let mut t = text.clone();
            black_box(t.as_bytes_with_nul().len())
        });
    });
}

criterion_group!(benches, bench_find, bench_replace, bench_compare, bench_display);
criterion_main!(benches);
