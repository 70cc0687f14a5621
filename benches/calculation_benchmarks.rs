//! Performance benchmarks for the Weekly Payroll Engine.
//!
//! This benchmark suite tracks the cost of the two hot paths:
//! - Pure totals calculation from a record: well under 1μs mean
//! - Full HTTP round-trip (read or field update): < 100μs mean
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use payroll_engine::api::{create_router, AppState};
use payroll_engine::calculation::calculate_totals;
use payroll_engine::config::ConfigLoader;
use payroll_engine::models::PayrollRecord;
use payroll_engine::store::PayrollStore;

use axum::{body::Body, http::Request};
use tower::ServiceExt;

/// Loads the shipped roster as the benchmark record.
fn create_bench_record() -> PayrollRecord {
    let config = ConfigLoader::load("./config/household").expect("Failed to load config");
    let mut record = config.default_record();
    record.transit_swipes = 4;
    record
}

/// Creates a test state with the shipped roster.
fn create_bench_state() -> AppState {
    let config = ConfigLoader::load("./config/household").expect("Failed to load config");
    AppState::new(PayrollStore::new(config.default_record()))
}

/// Benchmark: pure totals calculation.
fn bench_calculate_totals(c: &mut Criterion) {
    let record = create_bench_record();

    c.bench_function("calculate_totals", |b| {
        b.iter(|| black_box(calculate_totals(black_box(&record))))
    });
}

/// Benchmark: full statement read over the router.
fn bench_statement_read(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let router = create_router(create_bench_state());

    c.bench_function("statement_read", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("GET")
                        .uri("/payroll")
                        .body(Body::empty())
                        .unwrap(),
                )
                .await
                .unwrap();
            black_box(response)
        })
    });
}

/// Benchmark: field update round-trip (coercion, mutation, recompute).
fn bench_field_update(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let router = create_router(create_bench_state());
    let body = r#"{"value": "8.25"}"#;

    c.bench_function("field_update", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("PUT")
                        .uri("/payroll/workers/tyler/hours/wednesday")
                        .header("Content-Type", "application/json")
                        .body(Body::from(body))
                        .unwrap(),
                )
                .await
                .unwrap();
            black_box(response)
        })
    });
}

criterion_group!(
    benches,
    bench_calculate_totals,
    bench_statement_read,
    bench_field_update
);
criterion_main!(benches);
