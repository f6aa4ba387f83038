//! Benchmark for the log scan loop.

use criterion::{criterion_group, criterion_main, Criterion};
use firbench_report::{scan_log, ReportConfig};
use std::fmt::Write as _;

/// Synthesize a harness-shaped log with `records` run records.
fn synthetic_log(config: &ReportConfig, records: usize) -> String {
    let sweep = [16u32, 17, 31, 32, 64, 67, 127, 128, 256, 257, 509, 512];
    let mut log = String::new();
    for n in 0..records {
        let ir_size = sweep[n % sweep.len()];
        writeln!(log, "Running with IR size: {} samples", ir_size).unwrap();
        for (i, algorithm) in config.algorithms.iter().enumerate() {
            writeln!(log, "{}: {:.4}", algorithm, 0.5 + 0.25 * (i + 1) as f64).unwrap();
        }
        writeln!(log).unwrap();
    }
    log
}

fn bench_scan(c: &mut Criterion) {
    let config = ReportConfig::default();

    for records in [12usize, 1_000] {
        let log = synthetic_log(&config, records);
        c.bench_function(&format!("scan_log/{}_records", records), |b| {
            b.iter(|| scan_log(std::hint::black_box(&log), &config).unwrap())
        });
    }
}

criterion_group!(benches, bench_scan);
criterion_main!(benches);
