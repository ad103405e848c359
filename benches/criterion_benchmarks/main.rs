use criterion::criterion_main;

mod arithmetic;
mod radix;

criterion_main!(arithmetic::arithmetic, radix::radix);
