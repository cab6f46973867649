//! Name table benchmarks
//!
//! Run with: `cargo bench --bench name_table_bench`

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use sdkgen_util::define_idx;
use sdkgen_util::symbol::NameTable;

define_idx!(BenchName);

/// Benchmark interning new and existing texts
fn bench_find_or_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_or_insert");
    group.throughput(Throughput::Elements(1));

    group.bench_function("new_text", |b| {
        let mut table: NameTable<BenchName> = NameTable::new();
        let mut counter = 0u64;
        b.iter(|| {
            counter += 1;
            black_box(table.find_or_insert(&format!("EMember_{}", counter)))
        })
    });

    group.bench_function("existing_text", |b| {
        let mut table: NameTable<BenchName> = NameTable::new();
        table.find_or_insert("None");
        b.iter(|| black_box(table.find_or_insert("None")))
    });

    group.finish();
}

/// Benchmark resolving ids back to text
fn bench_get(c: &mut Criterion) {
    let mut table: NameTable<BenchName> = NameTable::new();
    let ids: Vec<_> = (0..1024)
        .map(|i| table.find_or_insert(&format!("Value{}", i)).0)
        .collect();

    c.bench_function("get", |b| {
        b.iter(|| {
            for id in &ids {
                black_box(table.get(*id));
            }
        })
    });
}

criterion_group!(benches, bench_find_or_insert, bench_get);
criterion_main!(benches);
