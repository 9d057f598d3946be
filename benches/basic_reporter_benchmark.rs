use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use reporterx::log::{BasicReporter, BasicReporterConfig, LogRecord, LogReporter, MemorySink};
use serde_json::json;
use std::sync::Arc;

fn benchmark_reporter(c: &mut Criterion) {
    let sink = Arc::new(MemorySink::new());
    let reporter_plain = BasicReporter::new(
        BasicReporterConfig {
            colors: false,
            ..Default::default()
        },
        sink.clone(),
    )
    .unwrap();
    let reporter_colored = BasicReporter::new(BasicReporterConfig::default(), sink.clone()).unwrap();

    // 基础记录
    let basic_record = LogRecord::new()
        .with_type("info")
        .with_message("This is a test message");

    // 带参数的记录
    let record_with_args = LogRecord::new()
        .with_type("info")
        .with_tag("http")
        .with_message("request")
        .with_arg(json!({"method": "GET", "path": "/users", "status": 200}))
        .with_arg(json!([1, 2, 3]))
        .with_arg(12.5);

    // 带调用栈的记录
    let record_with_stack = LogRecord::new().with_error(
        "boom",
        "Error: boom\n    at handler (src/http.rs:10:5)\n    at router (src/router.rs:44:9)\n    at main (src/main.rs:3:1)",
    );

    let mut group = c.benchmark_group("reporter");

    let cases: [(&str, &LogRecord); 3] = [
        ("basic", &basic_record),
        ("with_args", &record_with_args),
        ("with_stack", &record_with_stack),
    ];

    for (name, record) in cases {
        group.bench_with_input(
            BenchmarkId::new("get_fields", name),
            record,
            |b, record: &LogRecord| b.iter(|| black_box(reporter_plain.get_fields(black_box(record)).unwrap())),
        );

        group.bench_with_input(
            BenchmarkId::new("log_plain", name),
            record,
            |b, record: &LogRecord| {
                b.iter(|| {
                    reporter_plain.log(black_box(record)).unwrap();
                    sink.take().unwrap()
                })
            },
        );

        group.bench_with_input(
            BenchmarkId::new("log_colored", name),
            record,
            |b, record: &LogRecord| {
                b.iter(|| {
                    reporter_colored.log(black_box(record)).unwrap();
                    sink.take().unwrap()
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, benchmark_reporter);
criterion_main!(benches);
