// ABOUTME: Integration tests for analytics configuration loading
// ABOUTME: Validates environment overrides, partial JSON files, and their effect on recommendations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{jan, store_for, two_week_snapshot};
use ironcoach::{AnalyticsConfig, AnalyticsService, DateRange};
use ironcoach_intelligence::ConfigError;
use serial_test::serial;
use std::env;
use std::sync::Arc;

fn with_env<T>(name: &str, value: &str, body: impl FnOnce() -> T) -> T {
    env::set_var(name, value);
    let out = body();
    env::remove_var(name);
    out
}

#[test]
#[serial]
fn test_defaults_load_without_overrides() {
    let config = AnalyticsConfig::load().unwrap();

    assert_eq!(config.metrics.fatigue_window_days, 7);
    assert_eq!(config.metrics.performance_window_days, 30);
    assert!((config.recommendation.thresholds.high_fatigue - 4.0).abs() < f64::EPSILON);
}

#[test]
#[serial]
fn test_threshold_override_from_environment() {
    let config = with_env("IRONCOACH_HIGH_FATIGUE_THRESHOLD", "3.5", AnalyticsConfig::load)
        .unwrap();

    assert!((config.recommendation.thresholds.high_fatigue - 3.5).abs() < f64::EPSILON);
}

#[test]
#[serial]
fn test_override_that_breaks_ordering_is_rejected() {
    let result = with_env("IRONCOACH_LOW_FATIGUE_THRESHOLD", "4.5", AnalyticsConfig::load);

    assert!(matches!(result, Err(ConfigError::InvalidRange(_))));
}

#[test]
#[serial]
fn test_garbage_override_is_a_parse_error() {
    let result = with_env("IRONCOACH_FATIGUE_WINDOW_DAYS", "a week", AnalyticsConfig::load);

    let err = result.unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
    assert!(err.to_string().contains("IRONCOACH_FATIGUE_WINDOW_DAYS"));
}

#[test]
fn test_json_file_overrides_only_named_fields() {
    let raw = r#"{
        "recommendation": {"thresholds": {"high_fatigue": 2.5}},
        "metrics": {"fatigue_window_days": 14}
    }"#;

    let config = AnalyticsConfig::from_json(raw).unwrap();

    assert!((config.recommendation.thresholds.high_fatigue - 2.5).abs() < f64::EPSILON);
    assert!((config.recommendation.thresholds.low_fatigue - 2.0).abs() < f64::EPSILON);
    assert_eq!(config.metrics.fatigue_window_days, 14);
    assert_eq!(config.metrics.performance_window_days, 30);
}

#[test]
fn test_json_file_with_invalid_values_is_rejected() {
    let result = AnalyticsConfig::from_json(r#"{"metrics": {"weakest_group_count": 0}}"#);
    assert!(matches!(result, Err(ConfigError::ValueOutOfRange(_))));

    let result = AnalyticsConfig::from_json("not json");
    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

#[tokio::test]
async fn test_lower_fatigue_threshold_changes_recommendations() {
    let snapshot = two_week_snapshot();
    let week = DateRange::new(jan(8), jan(14)).unwrap();

    let default_service = AnalyticsService::with_config(
        Arc::new(store_for(&snapshot)),
        AnalyticsConfig::default(),
    );
    let baseline = default_service
        .adaptive_training_data("user-1", &snapshot.profile, None, week)
        .await
        .unwrap();
    assert!(baseline.recommended_adjustments.intensity_change.abs() < f64::EPSILON);

    let strict = AnalyticsConfig::from_json(
        r#"{"recommendation": {"thresholds": {"high_fatigue": 2.5}}}"#,
    )
    .unwrap();
    let strict_service = AnalyticsService::with_config(Arc::new(store_for(&snapshot)), strict);
    let tuned = strict_service
        .adaptive_training_data("user-1", &snapshot.profile, None, week)
        .await
        .unwrap();

    assert!((tuned.recommended_adjustments.intensity_change + 15.0).abs() < f64::EPSILON);
    assert_eq!(
        tuned.recommended_adjustments.rest_days,
        baseline.recommended_adjustments.rest_days + 1
    );
}
