// benches/properties.rs

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use relquiz::relation::properties::{is_reflexive, is_symmetric, is_transitive};
use relquiz::relation::relation::Relation;

fn dense_relation(set_size: usize) -> Relation {
    let mut relation = Relation::new();
    for i in 0..set_size {
        for j in 0..set_size {
            relation.push(i, j);
        }
    }
    relation
}

fn bench_predicates(c: &mut Criterion) {
    let relation = dense_relation(16);

    c.bench_function("is_reflexive/dense_16", |b| {
        b.iter(|| is_reflexive(black_box(&relation), 16))
    });
    c.bench_function("is_symmetric/dense_16", |b| {
        b.iter(|| is_symmetric(black_box(&relation)))
    });
    c.bench_function("is_transitive/dense_16", |b| {
        b.iter(|| is_transitive(black_box(&relation)))
    });
}

criterion_group!(benches, bench_predicates);
criterion_main!(benches);
