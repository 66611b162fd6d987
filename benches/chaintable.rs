#![allow(
    missing_docs,
    clippy::missing_docs_in_private_items,
    clippy::unwrap_used,
    clippy::similar_names
)]
use std::collections::HashMap;

use chaintable::{HashTable, Sequence};
use criterion::{Criterion, criterion_group, criterion_main};
use proptest::{
    prelude::{Strategy, any},
    strategy::ValueTree,
    test_runner::TestRunner,
};

const ITEMS_AMOUNT: usize = 1000;
const SAMPLE_SIZE: usize = 10;

fn hash_table_benches(c: &mut Criterion) {
    let mut runner = TestRunner::default();
    let items = any::<[(String, String); ITEMS_AMOUNT]>().new_tree(&mut runner).unwrap().current();

    let mut group = c.benchmark_group("Hash table comparison benchmark");
    group.sample_size(SAMPLE_SIZE);
    let mut chain_table = HashTable::new();
    let mut rust_map = HashMap::new();
    group.bench_function("chaintable insert", |b| {
        b.iter(|| {
            for (key, value) in items.clone() {
                chain_table.insert(key, value);
            }
        });
    });
    group.bench_function("rust std insert", |b| {
        b.iter(|| {
            for (key, value) in items.clone() {
                rust_map.insert(key, value);
            }
        });
    });
    group.bench_function("chaintable get", |b| {
        b.iter(|| {
            for (key, _) in &items {
                let _ = chain_table.try_get(key);
            }
        });
    });
    group.bench_function("rust std get", |b| {
        b.iter(|| {
            for (key, _) in &items {
                let _ = rust_map.get(key);
            }
        });
    });
    group.bench_function("chaintable for_each", |b| {
        b.iter(|| {
            let mut total = 0_usize;
            chain_table.for_each(|entry| total = total.saturating_add(entry.value().len()));
            total
        });
    });
    group.finish();
}

fn growth_benches(c: &mut Criterion) {
    let mut group = c.benchmark_group("Growth from minimum capacity");
    group.sample_size(SAMPLE_SIZE);
    group.bench_function("chaintable 100k u64 inserts", |b| {
        b.iter(|| {
            let table: HashTable<u64, u64> = (0..100_000).map(|i| (i, i)).collect();
            table.len()
        });
    });
    group.finish();
}

criterion_group!(benches, hash_table_benches, growth_benches);

criterion_main!(benches);
