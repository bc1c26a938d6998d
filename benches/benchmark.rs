use criterion::{criterion_group, criterion_main, Criterion};
use richerr::{join, EnhancedError};
use std::hint::black_box;

fn deep_chain() -> EnhancedError {
    EnhancedError::define("request failed")
        .with_description("upstream returned 502")
        .with_meta("route", "/api/v1/items")
        .with_meta("attempt", 3u64)
        .with_occur()
        .wrap(
            EnhancedError::define("connect timeout")
                .with_meta("host", "db-1")
                .wrap(EnhancedError::define("dns lookup failed")),
        )
}

fn bench_construction(c: &mut Criterion) {
    c.bench_function("new_with_location", |b| {
        b.iter(|| black_box(EnhancedError::new(black_box("boom"))))
    });

    c.bench_function("define_sentinel", |b| {
        b.iter(|| black_box(EnhancedError::define(black_box("boom"))))
    });

    c.bench_function("builder_full_context", |b| {
        b.iter(|| {
            black_box(
                EnhancedError::define(black_box("boom"))
                    .with_description("desc")
                    .with_meta("k", "v")
                    .with_meta("n", 42u64)
                    .with_occur(),
            )
        })
    });
}

fn bench_promotion(c: &mut Criterion) {
    let io = std::io::Error::other("disk full");
    c.bench_function("from_error_foreign", |b| {
        b.iter(|| black_box(EnhancedError::from_error(black_box(&io))))
    });

    c.bench_function("join_four", |b| {
        b.iter(|| {
            black_box(join([
                Some(EnhancedError::define("a").boxed()),
                None,
                Some(EnhancedError::define("b").boxed()),
                Some(EnhancedError::define("c").boxed()),
            ]))
        })
    });
}

fn bench_rendering(c: &mut Criterion) {
    let err = deep_chain();

    c.bench_function("plain_display", |b| b.iter(|| black_box(err.to_string())));

    // Pooled scratch buffers matter here: this is the logging hot path.
    c.bench_function("verbose_three_links", |b| b.iter(|| black_box(err.verbose())));
}

criterion_group!(benches, bench_construction, bench_promotion, bench_rendering);
criterion_main!(benches);
