// benches/extract.rs
use criterion::{Criterion, black_box, criterion_group, criterion_main};

use wc_finals::specs::finals;

const PAGE: &str = include_str!("../tests/fixtures/finals.html");

fn bench_extract(c: &mut Criterion) {
    c.bench_function("extract_finals", |b| {
        b.iter(|| {
            let records = finals::extract_records(black_box(PAGE)).unwrap();
            black_box(records.len())
        })
    });
}

criterion_group!(benches, bench_extract);
criterion_main!(benches);
