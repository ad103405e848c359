use criterion::{black_box, Criterion, criterion_group};

use relp_num::Integer;

pub fn parse_decimal(c: &mut Criterion) {
    let text = "1234567890".repeat(50);
    c.bench_function("parse a long decimal literal", |bencher| bencher.iter(|| {
        black_box(&text).parse::<Integer>()
    }));
}

pub fn format_decimal(c: &mut Criterion) {
    let value: Integer = "1234567890".repeat(50).parse().unwrap();
    c.bench_function("format a large integer in decimal", |bencher| bencher.iter(|| {
        black_box(&value).to_string()
    }));
}

pub fn format_hexadecimal(c: &mut Criterion) {
    let value: Integer = "1234567890".repeat(50).parse().unwrap();
    c.bench_function("format a large integer in hexadecimal", |bencher| bencher.iter(|| {
        black_box(&value).to_str_radix(16)
    }));
}

criterion_group!(radix,
    parse_decimal,
    format_decimal,
    format_hexadecimal,
);
