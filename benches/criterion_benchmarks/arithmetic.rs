use criterion::{black_box, Criterion, criterion_group};
use num::traits::Pow;

use relp_num::Integer;

fn large(digits: usize) -> Integer {
    "9".repeat(digits).parse().unwrap()
}

pub fn add_small(c: &mut Criterion) {
    let (a, b) = (Integer::from(1_234_567), Integer::from(-7_654_321));
    c.bench_function("add two small integers", |bencher| bencher.iter(|| {
        black_box(&a) + black_box(&b)
    }));
}

pub fn add_overflowing(c: &mut Criterion) {
    let (a, b) = (Integer::from(i64::MAX), Integer::from(i64::MAX));
    c.bench_function("add two small integers with overflow", |bencher| bencher.iter(|| {
        black_box(&a) + black_box(&b)
    }));
}

pub fn mul_large(c: &mut Criterion) {
    let (a, b) = (large(300), large(200));
    c.bench_function("multiply large integers", |bencher| bencher.iter(|| {
        black_box(&a) * black_box(&b)
    }));
}

pub fn div_rem_large(c: &mut Criterion) {
    let (a, b) = (large(600), large(250) + 12_345_i64);
    c.bench_function("divide a large integer by a large integer", |bencher| bencher.iter(|| {
        black_box(&a).div_rem(black_box(&b))
    }));
}

pub fn div_rem_single_digit(c: &mut Criterion) {
    let (a, b) = (large(600), Integer::from(1_000_000_007));
    c.bench_function("divide a large integer by a small integer", |bencher| bencher.iter(|| {
        black_box(&a).div_rem(black_box(&b))
    }));
}

pub fn pow_large(c: &mut Criterion) {
    let base = Integer::from(3);
    c.bench_function("raise three to a large power", |bencher| bencher.iter(|| {
        Pow::pow(black_box(&base), 2_000_u32)
    }));
}

criterion_group!(arithmetic,
    add_small,
    add_overflowing,
    mul_large,
    div_rem_large,
    div_rem_single_digit,
    pow_large,
);
