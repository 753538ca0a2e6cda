use criterion::{black_box, criterion_group, criterion_main, Criterion};
use cupid::aspects::{AspectCalculator, AspectMode};
use cupid::Body;
use std::collections::BTreeMap;

fn bench_matching_kinds(c: &mut Criterion) {
    let calculator = AspectCalculator::new();

    c.bench_function("matching_kinds", |b| {
        b.iter(|| calculator.matching_kinds(black_box(100.0), black_box(102.0)))
    });
}

fn bench_detect_aspects(c: &mut Criterion) {
    let positions: BTreeMap<Body, f64> = Body::ALL
        .iter()
        .enumerate()
        .map(|(i, body)| (*body, (i as f64) * 30.0))
        .collect();

    for (name, mode) in [
        ("detect_aspects_literal", AspectMode::Literal),
        ("detect_aspects_shortest_arc", AspectMode::ShortestArc),
    ] {
        let calculator = AspectCalculator::with_mode(mode);
        c.bench_function(name, |b| b.iter(|| calculator.detect_aspects(black_box(&positions))));
    }
}

criterion_group!(benches, bench_matching_kinds, bench_detect_aspects);
criterion_main!(benches);
