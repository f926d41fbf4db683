//! Performance benchmarks for the attendance engine.
//!
//! This benchmark suite tracks the cost of the hot paths:
//! - Single daily wage computation through the API
//! - Monthly aggregation for one employee
//! - Batch of 100 monthly aggregations
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};

use attendance_engine::api::{AppState, create_router};
use attendance_engine::config::ConfigLoader;

use axum::{body::Body, http::Request};
use tower::ServiceExt;

/// Creates a test state with loaded configuration.
fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config/engine.yaml").expect("Failed to load config");
    AppState::new(config)
}

/// Builds a monthly-stats request body with a full month of punches.
fn create_monthly_request(employee_id: &str) -> String {
    let punches: Vec<serde_json::Value> = (1..=31)
        .map(|day| {
            serde_json::json!({
                "employee_id": employee_id,
                "date": format!("2026-01-{:02}", day),
                "check_in": "08:30",
                "check_out": "18:30"
            })
        })
        .collect();

    serde_json::json!({
        "employee_id": employee_id,
        "year": 2026,
        "month": 1,
        "punches": punches,
        "hourly_rate": "10000",
        "holidays": {
            "system_holidays": [
                {"year": 2026, "entries": [{"key": "01-01", "label": "New Year's Day"}]}
            ]
        }
    })
    .to_string()
}

/// Benchmark: Single daily wage computation through the API.
fn bench_daily_wage(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let state = create_test_state();
    let router = create_router(state);
    let body = serde_json::json!({
        "check_in": "23:00",
        "check_out": "07:30",
        "hourly_rate": "10000"
    })
    .to_string();

    c.bench_function("daily_wage_night_shift", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/daily-wage")
                        .header("Content-Type", "application/json")
                        .body(Body::from(body.clone()))
                        .unwrap(),
                )
                .await
                .unwrap();
            black_box(response)
        })
    });
}

/// Benchmark: Monthly aggregation for a single employee.
fn bench_monthly_stats(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let state = create_test_state();
    let router = create_router(state);
    let body = create_monthly_request("emp_bench_001");

    c.bench_function("monthly_stats_full_month", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/monthly-stats")
                        .header("Content-Type", "application/json")
                        .body(Body::from(body.clone()))
                        .unwrap(),
                )
                .await
                .unwrap();
            black_box(response)
        })
    });
}

/// Benchmark: Batch of 100 monthly aggregations.
fn bench_batch_100(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let state = create_test_state();

    // Pre-create 100 different requests (vary employee IDs)
    let requests: Vec<String> = (0..100)
        .map(|i| create_monthly_request(&format!("emp_batch_{:03}", i)))
        .collect();

    let mut group = c.benchmark_group("batch_processing");
    group.throughput(Throughput::Elements(100));

    group.bench_function("batch_100_monthly", |b| {
        b.to_async(&rt).iter(|| async {
            let mut results = Vec::with_capacity(100);
            for body in &requests {
                let router = create_router(state.clone());
                let response = router
                    .oneshot(
                        Request::builder()
                            .method("POST")
                            .uri("/monthly-stats")
                            .header("Content-Type", "application/json")
                            .body(Body::from(body.clone()))
                            .unwrap(),
                    )
                    .await
                    .unwrap();
                results.push(response);
            }
            black_box(results)
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_daily_wage,
    bench_monthly_stats,
    bench_batch_100
);
criterion_main!(benches);
