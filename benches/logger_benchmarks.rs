//! Criterion benchmarks for leveled_logger

use chrono::Local;
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use leveled_logger::core::log_entry::{render_record, SourceLocation};
use leveled_logger::prelude::*;
use tempfile::TempDir;

// ============================================================================
// Gate Benchmarks
// ============================================================================

fn bench_gate(c: &mut Criterion) {
    let mut group = c.benchmark_group("gate");
    group.throughput(Throughput::Elements(1));

    let logger = Logger::with_threshold(LogLevel::Critical);

    group.bench_function("below_threshold", |b| {
        b.iter(|| {
            logger.log(
                black_box(LogLevel::Debug),
                "bench.rs",
                1,
                format_args!("value {}", black_box(42)),
            );
        });
    });

    group.bench_function("is_enabled", |b| {
        b.iter(|| black_box(logger.is_enabled(black_box(LogLevel::Error))));
    });

    group.finish();
}

// ============================================================================
// Rendering Benchmarks
// ============================================================================

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    group.throughput(Throughput::Elements(1));

    let now = Local::now();

    group.bench_function("short_message", |b| {
        b.iter(|| {
            render_record(
                &now,
                LogLevel::Info,
                SourceLocation::new("bench.rs", 10),
                format_args!("{}", black_box("short")),
            )
        });
    });

    group.bench_function("formatted_message", |b| {
        b.iter(|| {
            render_record(
                &now,
                LogLevel::Warning,
                SourceLocation::new("bench.rs", 20),
                format_args!(
                    "user {} performed {} in {:.3}ms",
                    black_box(1234),
                    black_box("checkout"),
                    black_box(12.3456)
                ),
            )
        });
    });

    group.finish();
}

// ============================================================================
// File Sink Benchmarks
// ============================================================================

fn bench_file_sink(c: &mut Criterion) {
    let mut group = c.benchmark_group("file_sink");
    group.throughput(Throughput::Elements(1));

    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let logger = Logger::builder()
        .threshold(LogLevel::Debug)
        .output_path_prefix(temp_dir.path())
        .sinks(LogLevel::Info, SinkSet::FILE)
        .build()
        .expect("valid configuration");

    group.bench_function("open_append_close", |b| {
        b.iter(|| logger.info(black_box("benchmark record")));
    });

    group.finish();
}

criterion_group!(benches, bench_gate, bench_render, bench_file_sink);
criterion_main!(benches);
