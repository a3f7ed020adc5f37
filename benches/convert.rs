//! This bench test converts every representable value to a Roman numeral and
//! back again.

#![allow(missing_docs)]

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use roman::{from_roman, to_roman};

fn encode_all(c: &mut Criterion) {
    c.bench_function("to_roman 1..=3999", |b| {
        b.iter(|| {
            for arabic in 1..=3999 {
                black_box(to_roman(black_box(arabic)).unwrap());
            }
        });
    });
}

fn decode_all(c: &mut Criterion) {
    let numerals: Vec<String> = (1..=3999).map(|n| to_roman(n).unwrap()).collect();

    c.bench_function("from_roman 1..=3999", |b| {
        b.iter(|| {
            for roman in &numerals {
                black_box(from_roman(black_box(roman)).unwrap());
            }
        });
    });
}

criterion_group!(benches, encode_all, decode_all);
criterion_main!(benches);
