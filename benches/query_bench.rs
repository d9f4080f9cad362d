//! Criterion benchmark harness: single-probe latency for the raw and mapped
//! workloads at two table sizes.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use query_bench::populate::seed_city_table;
use query_bench::workload::mapped::MappedEntityWorkload;
use query_bench::workload::raw::RawSqlWorkload;
use query_bench::workload::{DbConfig, Workload};

/// Table sizes to benchmark.
fn row_counts() -> Vec<(&'static str, usize)> {
    vec![("small", 256), ("world", 4079)]
}

/// Create and seed a throwaway database file, returning its config.
fn seeded_config(tag: &str, rows: usize) -> DbConfig {
    let path = std::env::temp_dir().join(format!(
        "query-bench-bench-{tag}-{}.db",
        std::process::id()
    ));
    let _ = std::fs::remove_file(&path);
    let config = DbConfig { path };
    seed_city_table(&config, rows).expect("seed benchmark database");
    config
}

fn bench_raw_probe(c: &mut Criterion) {
    let mut group = c.benchmark_group("probe/raw");

    for (label, rows) in row_counts() {
        let config = seeded_config(&format!("raw-{label}"), rows);
        let mut workload = RawSqlWorkload::new(config);

        group.bench_with_input(BenchmarkId::from_parameter(label), &rows, |b, _| {
            b.iter(|| workload.run().expect("raw probe failed"));
        });
    }
    group.finish();
}

fn bench_mapped_probe(c: &mut Criterion) {
    let mut group = c.benchmark_group("probe/mapped");

    for (label, rows) in row_counts() {
        let config = seeded_config(&format!("mapped-{label}"), rows);
        let mut workload =
            MappedEntityWorkload::new(config).expect("construct mapped workload");

        group.bench_with_input(BenchmarkId::from_parameter(label), &rows, |b, _| {
            b.iter(|| workload.run().expect("mapped probe failed"));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_raw_probe, bench_mapped_probe);
criterion_main!(benches);
