//! Benchmark record composition and encoding
//!
//! Measures the cost of folding argument lists into records and of
//! encoding them as JSON lines, plus the fast path for filtered levels.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;
use std::sync::Arc;
use sukilog::compose::{assemble, compose, Scope};
use sukilog::{
    any, with_option, with_tracing, Config, EncoderConfig, Entry, JsonSink, LogArg, LogLevel,
    LogOption, LogType, Sink, SukiLogger,
};

fn build_args(field_count: usize) -> Vec<LogArg> {
    let mut args = vec![
        LogArg::from(with_tracing("4bf92f3577b34da6", "00f067aa0ba902b7", Some("req-1"))),
        LogArg::from(with_option(LogOption::alert())),
    ];
    args.extend((0..field_count).map(|i| LogArg::from(any(format!("field_{}", i), &i))));
    args
}

fn bench_compose(c: &mut Criterion) {
    let config = Config::production().with_app_name("orders");
    let mut group = c.benchmark_group("compose");

    for field_count in [0, 4, 16, 64] {
        let args = build_args(field_count);
        group.bench_with_input(
            BenchmarkId::new("application", field_count),
            &args,
            |b, args| {
                b.iter(|| {
                    let composition = compose(Scope::Application, &config.app_name, args.clone());
                    black_box(assemble(&config, LogType::Application, composition))
                });
            },
        );
    }

    group.finish();
}

fn bench_encode(c: &mut Criterion) {
    let config = Config::production().with_app_name("orders");
    let sink = JsonSink::new(EncoderConfig::production(LogLevel::Debug), std::io::sink());
    let mut group = c.benchmark_group("encode");

    for field_count in [0, 4, 16, 64] {
        let composition = compose(Scope::Application, &config.app_name, build_args(field_count));
        let entry = Entry {
            level: LogLevel::Info,
            message: "order placed".to_string(),
            caller: None,
            fields: assemble(&config, LogType::Application, composition),
        };

        group.bench_with_input(BenchmarkId::new("json_line", field_count), &entry, |b, entry| {
            b.iter(|| black_box(sink.encode(entry)));
        });
        group.bench_with_input(BenchmarkId::new("write", field_count), &entry, |b, entry| {
            b.iter(|| sink.write(entry));
        });
    }

    group.finish();
}

fn bench_filtered_level(c: &mut Criterion) {
    let config = Config::production().with_level(LogLevel::Error);
    let sink = Arc::new(JsonSink::new(
        EncoderConfig::production(config.log_level),
        std::io::sink(),
    ));
    let logger = SukiLogger::with_sink(config, sink);
    let args = build_args(16);

    c.bench_function("filtered_debug", |b| {
        b.iter(|| logger.debug("dropped", black_box(args.clone())));
    });
}

criterion_group!(benches, bench_compose, bench_encode, bench_filtered_level);
criterion_main!(benches);
