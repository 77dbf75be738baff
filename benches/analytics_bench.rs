// ABOUTME: Criterion benchmarks for the analytics engine and service
// ABOUTME: Measures insight reports, period comparison, progress export and store fetches
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for analytics over generated training histories.

#![allow(
    clippy::missing_docs_in_private_items,
    clippy::unwrap_used,
    missing_docs
)]

mod common;

use common::fixtures::{generate_snapshot, history_end, HistoryLength};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use ironcoach::{
    AnalyticsConfig, AnalyticsEngine, AnalyticsService, DateRange, InMemoryLogStore,
    ReportPeriod, TrainingLogs,
};
use std::sync::Arc;
use tokio::runtime::Runtime;

const LENGTHS: [HistoryLength; 3] = [
    HistoryLength::Month,
    HistoryLength::Quarter,
    HistoryLength::Year,
];

fn bench_insight_report(c: &mut Criterion) {
    let mut group = c.benchmark_group("insight_report");
    let config = AnalyticsConfig::default();

    for length in LENGTHS {
        let snapshot = generate_snapshot(length);
        let logs = TrainingLogs::new(&snapshot.sessions, &snapshot.nutrition, &snapshot.daily_logs);
        let engine = AnalyticsEngine::new(logs, &snapshot.profile, None, &config);

        group.throughput(Throughput::Elements(snapshot.sessions.len() as u64));
        for period in [ReportPeriod::Weekly, ReportPeriod::Monthly] {
            let range = DateRange::for_period(period, history_end());
            group.bench_with_input(
                BenchmarkId::new(period.to_string(), length.name()),
                &range,
                |b, range| b.iter(|| engine.build_insight_report(black_box(period), *range)),
            );
        }
    }

    group.finish();
}

fn bench_compare_periods(c: &mut Criterion) {
    let mut group = c.benchmark_group("compare_periods");
    let config = AnalyticsConfig::default();

    for length in LENGTHS {
        let snapshot = generate_snapshot(length);
        let logs = TrainingLogs::new(&snapshot.sessions, &snapshot.nutrition, &snapshot.daily_logs);
        let engine = AnalyticsEngine::new(logs, &snapshot.profile, None, &config);
        let current = DateRange::for_period(ReportPeriod::Monthly, history_end());
        let previous = current.preceding();

        group.bench_function(BenchmarkId::new("monthly", length.name()), |b| {
            b.iter(|| engine.compare_periods(black_box(current), black_box(previous)));
        });
    }

    group.finish();
}

fn bench_export_progress(c: &mut Criterion) {
    let mut group = c.benchmark_group("export_progress");
    let config = AnalyticsConfig::default();

    for length in LENGTHS {
        let snapshot = generate_snapshot(length);
        let logs = TrainingLogs::new(&snapshot.sessions, &snapshot.nutrition, &snapshot.daily_logs);
        let engine = AnalyticsEngine::new(logs, &snapshot.profile, None, &config);
        let range = DateRange::ending_on(history_end(), i64::try_from(length.days()).unwrap());

        group.throughput(Throughput::Elements(length.days()));
        group.bench_with_input(
            BenchmarkId::new("full_history", length.name()),
            &range,
            |b, range| b.iter(|| engine.export_progress(black_box(*range), &snapshot.profile)),
        );
    }

    group.finish();
}

fn bench_service_report(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let mut group = c.benchmark_group("service_report");

    for length in LENGTHS {
        let snapshot = generate_snapshot(length);
        let store = InMemoryLogStore::new(
            snapshot.sessions.clone(),
            snapshot.nutrition.clone(),
            snapshot.daily_logs.clone(),
        );
        let service = AnalyticsService::with_config(Arc::new(store), AnalyticsConfig::default());

        group.bench_function(BenchmarkId::new("weekly", length.name()), |b| {
            b.iter(|| {
                rt.block_on(async {
                    service
                        .report(
                            &snapshot.profile,
                            None,
                            black_box(ReportPeriod::Weekly),
                            history_end(),
                        )
                        .await
                })
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_insight_report,
    bench_compare_periods,
    bench_export_progress,
    bench_service_report,
);
criterion_main!(benches);
