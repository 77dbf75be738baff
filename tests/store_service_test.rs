// ABOUTME: Integration tests for log stores and the async analytics service
// ABOUTME: Exercises snapshot files on disk, error mapping, and report/compare/export flows
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use async_trait::async_trait;
use common::{init_test_logging, jan, store_for, two_week_snapshot};
use ironcoach::{
    AnalyticsConfig, AnalyticsService, AppError, AppResult, DateRange, ErrorCode,
    JsonSnapshotLogStore, LogStore, ReportPeriod,
};
use ironcoach_core::models::{DailyLog, NutritionEntry, WorkoutSession};
use ironcoach_intelligence::TrendDirection;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tempfile::TempDir;

/// Store that fails every read and counts the attempts
#[derive(Default)]
struct UnavailableStore {
    calls: AtomicUsize,
}

#[async_trait]
impl LogStore for UnavailableStore {
    async fn list_sessions(&self, _range: DateRange) -> AppResult<Vec<WorkoutSession>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(AppError::storage("sessions unavailable"))
    }

    async fn list_nutrition_entries(&self, _range: DateRange) -> AppResult<Vec<NutritionEntry>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(AppError::storage("nutrition unavailable"))
    }

    async fn list_daily_logs(&self, _range: DateRange) -> AppResult<Vec<DailyLog>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(AppError::storage("daily logs unavailable"))
    }
}

fn service_over(store: Arc<dyn LogStore>) -> AnalyticsService {
    AnalyticsService::with_config(store, AnalyticsConfig::default())
}

#[tokio::test]
async fn test_snapshot_round_trips_through_disk() {
    init_test_logging();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("snapshot.json");
    let snapshot = two_week_snapshot();

    JsonSnapshotLogStore::write(&path, &snapshot).await.unwrap();
    let store = JsonSnapshotLogStore::open(&path).await.unwrap();

    assert_eq!(store.path(), path.as_path());
    assert_eq!(store.profile(), &snapshot.profile);
    assert_eq!(store.plan(), snapshot.plan.as_ref());
    assert_eq!(
        store.covered_range(),
        Some(DateRange::new(jan(1), jan(14)).unwrap())
    );

    let week = DateRange::new(jan(8), jan(14)).unwrap();
    assert_eq!(store.list_sessions(week).await.unwrap().len(), 4);
    assert_eq!(store.list_nutrition_entries(week).await.unwrap().len(), 7);
    assert_eq!(store.list_daily_logs(week).await.unwrap().len(), 7);
}

#[tokio::test]
async fn test_missing_snapshot_is_not_found() {
    let dir = TempDir::new().unwrap();
    let err = JsonSnapshotLogStore::open(dir.path().join("absent.json"))
        .await
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::ResourceNotFound);
    assert_eq!(err.http_status(), 404);
}

#[tokio::test]
async fn test_malformed_snapshot_is_a_serialization_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.json");
    tokio::fs::write(&path, "{\"profile\": 42}").await.unwrap();

    let err = JsonSnapshotLogStore::open(&path).await.unwrap_err();

    assert_eq!(err.code, ErrorCode::SerializationError);
    assert!(err.message.contains("broken.json"));
}

#[test]
fn test_parses_app_snapshot_labels() {
    let raw = r#"{
        "profile": {
            "name": "Riley", "age": 27, "weight": 70.5, "height": 168,
            "gender": "Female", "experience": "Beginner", "daysAvailable": 3,
            "goal": "Strength & Power", "equipment": "Home Gym (Barbell + Rack)",
            "dietType": "Anything", "splitPreference": "Push/Pull/Legs",
            "injuries": "", "completedOnboarding": true
        },
        "sessions": [{
            "id": "w1", "date": "2025-01-03", "dayName": "Push",
            "exercises": [{"name": "Bench", "muscleGroup": "Chest", "sets": 3, "reps": [8, 8, 6]}],
            "duration": 55, "fatigueLevel": 4, "performanceRating": 3
        }],
        "dailyLogs": [{"date": "2025-01-03", "waterIntake": 2000, "sleepHours": 6.5,
                       "mood": "Average", "workoutCompleted": true}]
    }"#;

    let snapshot = JsonSnapshotLogStore::parse(raw).unwrap();

    assert_eq!(snapshot.profile.days_available, 3);
    assert!(snapshot.plan.is_none());
    assert!(snapshot.nutrition.is_empty());
    assert_eq!(snapshot.sessions[0].exercises[0].completed_sets(), 3);
    assert!(snapshot.daily_logs[0].workout_completed);
}

#[tokio::test]
async fn test_service_weekly_report_from_snapshot_store() {
    let snapshot = two_week_snapshot();
    let store = JsonSnapshotLogStore::from_snapshot("memory.json", snapshot.clone());
    let service = service_over(Arc::new(store));

    let report = service
        .report(
            &snapshot.profile,
            snapshot.plan.as_ref(),
            ReportPeriod::Weekly,
            jan(14),
        )
        .await
        .unwrap();

    assert_eq!(report.start_date, jan(8));
    assert_eq!(report.end_date, jan(14));
    assert_eq!(report.summary.total_workouts, 4);
    assert_eq!(report.trends.consistency_trend, TrendDirection::Improving);
}

#[tokio::test]
async fn test_service_report_between_rejects_inverted_range() {
    let snapshot = two_week_snapshot();
    let service = service_over(Arc::new(store_for(&snapshot)));

    let err = service
        .report_between(
            &snapshot.profile,
            None,
            ReportPeriod::Weekly,
            jan(14),
            jan(8),
        )
        .await
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::InvalidRange);
    assert_eq!(err.http_status(), 400);
}

#[tokio::test]
async fn test_service_compare_matches_engine() {
    let snapshot = two_week_snapshot();
    let service = service_over(Arc::new(store_for(&snapshot)));
    let current = DateRange::new(jan(8), jan(14)).unwrap();

    let comparison = service
        .compare(
            &snapshot.profile,
            snapshot.plan.as_ref(),
            current,
            current.preceding(),
        )
        .await
        .unwrap();

    assert_eq!(comparison.differences.workouts_change, 2);
    assert!(comparison.differences.weight_change < 0.0);
    assert!(comparison.differences.consistency_change > 0.0);
}

#[tokio::test]
async fn test_misaligned_compare_fails_before_fetching() {
    let store = Arc::new(UnavailableStore::default());
    let service = service_over(store.clone());
    let snapshot = two_week_snapshot();

    let err = service
        .compare(
            &snapshot.profile,
            None,
            DateRange::new(jan(8), jan(14)).unwrap(),
            DateRange::new(jan(1), jan(10)).unwrap(),
        )
        .await
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::InvalidRange);
    assert_eq!(store.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_store_failure_propagates() {
    let service = service_over(Arc::new(UnavailableStore::default()));
    let snapshot = two_week_snapshot();

    let err = service
        .report(&snapshot.profile, None, ReportPeriod::Monthly, jan(30))
        .await
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::StorageError);
}

#[tokio::test]
async fn test_service_export_and_adaptive_data() {
    let snapshot = two_week_snapshot();
    let service = service_over(Arc::new(store_for(&snapshot)));
    let fortnight = DateRange::new(jan(1), jan(14)).unwrap();

    let export = service
        .export(&snapshot.profile, snapshot.plan.as_ref(), fortnight)
        .await
        .unwrap();
    assert_eq!(export.user_name, "Jordan");
    assert_eq!(export.stats.total_workouts, 6);
    assert!(export
        .achievements
        .iter()
        .any(|title| title == "First Workout Logged"));
    assert!((export.stats.total_weight_lost - 1.2).abs() < 1e-9);

    let data = service
        .adaptive_training_data(
            "user-7",
            &snapshot.profile,
            snapshot.plan.as_ref(),
            DateRange::new(jan(8), jan(14)).unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(data.user_id, "user-7");
    assert_eq!(data.fatigue_trend.len(), 4);
    assert!((data.recommended_adjustments.volume_change - 10.0).abs() < f64::EPSILON);
}

#[test]
fn test_analysis_window_covers_range_and_previous_period() {
    let week = DateRange::new(jan(8), jan(14)).unwrap();

    let window = AnalyticsService::analysis_window(week);

    assert_eq!(window.start(), jan(1));
    assert_eq!(window.end(), jan(14));
    assert_eq!(window.num_days(), 14);
}
