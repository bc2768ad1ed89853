//! Benchmarks for selection and extraction.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use skrape::selects::Doc;
use skrape::testing::SAMPLE_HTML;

fn selection_benchmark(c: &mut Criterion) {
    c.bench_function("parse", |b| {
        b.iter(|| Doc::parse(black_box(SAMPLE_HTML), false))
    });

    let doc = Doc::parse(SAMPLE_HTML, false);
    c.bench_function("select_li", |b| {
        b.iter(|| doc.root().select(black_box("ul.items li")).map(|items| items.len()))
    });

    c.bench_function("each_link", |b| {
        b.iter(|| doc.root().each_link())
    });
}

criterion_group!(benches, selection_benchmark);
criterion_main!(benches);
