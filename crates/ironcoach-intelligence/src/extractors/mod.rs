// ABOUTME: Metric extraction over a date range of training, nutrition, and wellness logs
// ABOUTME: Bundles all per-period metrics into PeriodMetrics for reports and comparisons
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Metric Extractors
//!
//! Pure functions that turn raw, irregular logs into scalar and series
//! metrics for one inclusive date range. Sparse data never fails: an empty
//! range produces a zero consistency score, empty trends and no muscle
//! groups.

mod muscle_balance;
mod nutrition;
mod training;
mod wellness;

pub use muscle_balance::{muscle_group_volume, untrained_groups, weakest_groups, MuscleBalance};
pub use nutrition::{adherence_rate, summarize_nutrition, NutritionSummary};
pub use training::{
    best_performing_workout, consistency, daily_rating_trend, mean_performance,
    scheduled_sessions, ConsistencyMetrics,
};
pub use wellness::{summarize_wellness, MoodCounts, WellnessSummary};

use crate::config::MetricsConfig;
use crate::logs::TrainingLogs;
use ironcoach_core::models::{UserProfile, WorkoutPlan, WorkoutSession};
use ironcoach_core::DateRange;
use tracing::debug;

/// Every metric the engine derives for one period
#[derive(Debug, Clone, PartialEq)]
pub struct PeriodMetrics {
    /// Range the metrics describe
    pub range: DateRange,
    /// Sessions in the range
    pub total_workouts: u32,
    /// Scheduled vs completed sessions
    pub consistency: ConsistencyMetrics,
    /// Daily fatigue values in the last fatigue-window days of the range
    pub fatigue_trend: Vec<f64>,
    /// Daily performance values in the last performance-window days of the range
    pub performance_trend: Vec<f64>,
    /// Mean performance rating of the range's sessions
    pub mean_performance: Option<f64>,
    /// Fraction of engaged days
    pub adherence_rate: f64,
    /// Calorie and protein totals
    pub nutrition: NutritionSummary,
    /// Per-group volume with weakest and untrained groups
    pub muscle_balance: MuscleBalance,
    /// Plan day with the best mean performance
    pub best_performing_workout: Option<String>,
    /// Sleep, water and mood
    pub wellness: WellnessSummary,
}

/// Extracts metrics from one user's logs
#[derive(Debug, Clone, Copy)]
pub struct MetricExtractor<'a> {
    logs: TrainingLogs<'a>,
    profile: &'a UserProfile,
    plan: Option<&'a WorkoutPlan>,
    config: &'a MetricsConfig,
}

impl<'a> MetricExtractor<'a> {
    /// Create an extractor over `logs` for the given profile and optional plan
    #[must_use]
    pub const fn new(
        logs: TrainingLogs<'a>,
        profile: &'a UserProfile,
        plan: Option<&'a WorkoutPlan>,
        config: &'a MetricsConfig,
    ) -> Self {
        Self {
            logs,
            profile,
            plan,
            config,
        }
    }

    /// Logs this extractor reads
    #[must_use]
    pub const fn logs(&self) -> &TrainingLogs<'a> {
        &self.logs
    }

    /// Consistency against the profile's weekly availability
    #[must_use]
    pub fn consistency(&self, range: DateRange) -> ConsistencyMetrics {
        consistency(&self.logs, range, self.profile.days_available_clamped())
    }

    /// Consistency score in [0, 100]
    #[must_use]
    pub fn consistency_score(&self, range: DateRange) -> f64 {
        self.consistency(range).score
    }

    /// Fatigue per session day over the last fatigue-window days of `range`
    #[must_use]
    pub fn fatigue_trend(&self, range: DateRange) -> Vec<f64> {
        daily_rating_trend(
            &self.logs,
            range,
            self.config.fatigue_window_days,
            WorkoutSession::fatigue,
        )
    }

    /// Performance per session day over the last performance-window days of `range`
    #[must_use]
    pub fn performance_trend(&self, range: DateRange) -> Vec<f64> {
        daily_rating_trend(
            &self.logs,
            range,
            self.config.performance_window_days,
            WorkoutSession::performance,
        )
    }

    /// Muscle balance over `range`
    #[must_use]
    pub fn muscle_balance(&self, range: DateRange) -> MuscleBalance {
        MuscleBalance::analyze(
            &self.logs,
            range,
            self.plan,
            self.config.weakest_group_count,
        )
    }

    /// Run every extractor for `range`
    #[must_use]
    pub fn extract(&self, range: DateRange) -> PeriodMetrics {
        let metrics = PeriodMetrics {
            range,
            total_workouts: self.logs.session_count(range),
            consistency: self.consistency(range),
            fatigue_trend: self.fatigue_trend(range),
            performance_trend: self.performance_trend(range),
            mean_performance: mean_performance(&self.logs, range),
            adherence_rate: adherence_rate(&self.logs, range),
            nutrition: summarize_nutrition(&self.logs, range),
            muscle_balance: self.muscle_balance(range),
            best_performing_workout: best_performing_workout(&self.logs, range),
            wellness: summarize_wellness(&self.logs, range),
        };

        debug!(
            range = %range,
            workouts = metrics.total_workouts,
            consistency = metrics.consistency.score,
            adherence = metrics.adherence_rate,
            "Extracted period metrics"
        );
        metrics
    }
}
