use criterion::{Criterion, black_box, criterion_group, criterion_main};
use serde_json::json;
use tierlog::{Level, LogContext, Sink, args};

fn bench_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("dispatch");
    let context = LogContext::builder()
        .threshold(Level::Info)
        .category("quiet", Level::Error)
        .sink(Sink::direct(|args| {
            black_box(args);
        }))
        .build();
    let log = context.create("src/bench.rs");
    let quiet = context.create("quiet");

    group.bench_function("suppressed_threshold", |b| {
        b.iter(|| log.debug(black_box("dropped")));
    });

    group.bench_function("suppressed_category", |b| {
        b.iter(|| quiet.warn(black_box("dropped")));
    });

    group.bench_function("plain", |b| {
        b.iter(|| log.info(black_box("request served")));
    });

    group.bench_function("plain_trailing_args", |b| {
        b.iter(|| log.info(args!["request served", 200, true]));
    });

    group.bench_function("structured_message", |b| {
        b.iter(|| log.info(json!({"status": 200, "path": "/"})));
    });

    group.bench_function("prefixed", |b| {
        let wrapped = log.with_prefix("req-1");
        b.iter(|| wrapped.info(black_box("request served")));
    });

    context.set_styler_enabled(true);
    group.bench_function("styled", |b| {
        b.iter(|| log.warn(black_box("slow")));
    });

    group.finish();
}

criterion_group!(benches, bench_dispatch);
criterion_main!(benches);
