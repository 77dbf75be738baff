// ABOUTME: Analytics service fetching a log snapshot once and running the pure analytics engine
// ABOUTME: Maps range errors into AppError and logs each operation with structured fields
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Analytics Service
//!
//! Bridges the async [`LogStore`] and the synchronous engine. Each operation
//! computes the widest range it will look at, awaits a single fetch of the
//! three collections, and then runs to completion without suspending.

use crate::store::LogStore;
use chrono::NaiveDate;
use ironcoach_core::models::{DailyLog, NutritionEntry, UserProfile, WorkoutPlan, WorkoutSession};
use ironcoach_core::{AppResult, DateRange, ReportPeriod};
use ironcoach_intelligence::{
    AdaptiveTrainingData, AnalyticsComparison, AnalyticsConfig, AnalyticsEngine, InsightReport,
    ProgressExport, TrainingLogs,
};
use std::sync::Arc;
use tracing::{debug, info};

/// Owned copy of the logs for one fetch window
#[derive(Debug, Clone, Default)]
pub struct FetchedLogs {
    /// Range that was requested from the store
    pub window: Option<DateRange>,
    /// Sessions in the window
    pub sessions: Vec<WorkoutSession>,
    /// Nutrition entries in the window
    pub nutrition: Vec<NutritionEntry>,
    /// Daily logs in the window
    pub daily_logs: Vec<DailyLog>,
}

impl FetchedLogs {
    /// Borrowed view for the engine
    #[must_use]
    pub fn as_training_logs(&self) -> TrainingLogs<'_> {
        TrainingLogs::new(&self.sessions, &self.nutrition, &self.daily_logs)
    }
}

/// Analytics over one log store
#[derive(Clone)]
pub struct AnalyticsService {
    store: Arc<dyn LogStore>,
    config: Arc<AnalyticsConfig>,
}

impl AnalyticsService {
    /// Service using the global analytics configuration
    #[must_use]
    pub fn new(store: Arc<dyn LogStore>) -> Self {
        Self::with_config(store, AnalyticsConfig::global().clone())
    }

    /// Service using an explicit configuration
    #[must_use]
    pub fn with_config(store: Arc<dyn LogStore>, config: AnalyticsConfig) -> Self {
        Self {
            store,
            config: Arc::new(config),
        }
    }

    /// Configuration in effect
    #[must_use]
    pub fn config(&self) -> &AnalyticsConfig {
        &self.config
    }

    /// Fetch every collection for `window` concurrently
    ///
    /// # Errors
    ///
    /// Propagates the first store failure
    pub async fn fetch(&self, window: DateRange) -> AppResult<FetchedLogs> {
        let (sessions, nutrition, daily_logs) = tokio::try_join!(
            self.store.list_sessions(window),
            self.store.list_nutrition_entries(window),
            self.store.list_daily_logs(window),
        )?;
        debug!(
            start = %window.start(),
            end = %window.end(),
            sessions = sessions.len(),
            nutrition = nutrition.len(),
            daily_logs = daily_logs.len(),
            "Fetched logs"
        );
        Ok(FetchedLogs {
            window: Some(window),
            sessions,
            nutrition,
            daily_logs,
        })
    }

    /// Range covering `range` and its preceding period
    ///
    /// Trend windows are clipped to `range`, so nothing earlier is needed.
    #[must_use]
    pub fn analysis_window(range: DateRange) -> DateRange {
        range.union(&range.preceding())
    }

    fn engine<'a>(
        &'a self,
        logs: &'a FetchedLogs,
        profile: &'a UserProfile,
        plan: Option<&'a WorkoutPlan>,
    ) -> AnalyticsEngine<'a> {
        AnalyticsEngine::new(logs.as_training_logs(), profile, plan, &self.config)
    }

    /// Insight report for the `period` ending on `end`
    ///
    /// # Errors
    ///
    /// Propagates store failures
    pub async fn report(
        &self,
        profile: &UserProfile,
        plan: Option<&WorkoutPlan>,
        period: ReportPeriod,
        end: NaiveDate,
    ) -> AppResult<InsightReport> {
        self.report_for_range(profile, plan, period, DateRange::for_period(period, end))
            .await
    }

    /// Insight report over an explicit `start..=end`
    ///
    /// # Errors
    ///
    /// Returns `InvalidRange` when `end` precedes `start`, otherwise
    /// propagates store failures
    pub async fn report_between(
        &self,
        profile: &UserProfile,
        plan: Option<&WorkoutPlan>,
        period: ReportPeriod,
        start: NaiveDate,
        end: NaiveDate,
    ) -> AppResult<InsightReport> {
        let range = DateRange::new(start, end)?;
        self.report_for_range(profile, plan, period, range).await
    }

    async fn report_for_range(
        &self,
        profile: &UserProfile,
        plan: Option<&WorkoutPlan>,
        period: ReportPeriod,
        range: DateRange,
    ) -> AppResult<InsightReport> {
        let logs = self.fetch(Self::analysis_window(range)).await?;
        let report = self.engine(&logs, profile, plan).build_insight_report(period, range);
        info!(
            period = %period,
            start = %range.start(),
            end = %range.end(),
            workouts = report.summary.total_workouts,
            recommendations = report.recommendations.len(),
            "Served insight report"
        );
        Ok(report)
    }

    /// Compare two adjacent, equal-length periods
    ///
    /// # Errors
    ///
    /// Returns `InvalidRange` before touching the store when the periods are
    /// misaligned, otherwise propagates store failures
    pub async fn compare(
        &self,
        profile: &UserProfile,
        plan: Option<&WorkoutPlan>,
        current: DateRange,
        previous: DateRange,
    ) -> AppResult<AnalyticsComparison> {
        current.ensure_follows(&previous)?;
        let logs = self.fetch(current.union(&previous)).await?;
        let comparison = self
            .engine(&logs, profile, plan)
            .compare_periods(current, previous)?;
        info!(
            current_start = %current.start(),
            previous_start = %previous.start(),
            days = current.num_days(),
            workouts_change = comparison.differences.workouts_change,
            "Compared periods"
        );
        Ok(comparison)
    }

    /// Progress export over `range`
    ///
    /// # Errors
    ///
    /// Propagates store failures
    pub async fn export(
        &self,
        profile: &UserProfile,
        plan: Option<&WorkoutPlan>,
        range: DateRange,
    ) -> AppResult<ProgressExport> {
        let logs = self.fetch(range).await?;
        let export = self.engine(&logs, profile, plan).export_progress(range, profile);
        info!(
            start = %range.start(),
            end = %range.end(),
            workouts = export.stats.total_workouts,
            achievements = export.achievements.len(),
            "Exported progress"
        );
        Ok(export)
    }

    /// Adaptive training state for `range`
    ///
    /// # Errors
    ///
    /// Propagates store failures
    pub async fn adaptive_training_data(
        &self,
        user_id: &str,
        profile: &UserProfile,
        plan: Option<&WorkoutPlan>,
        range: DateRange,
    ) -> AppResult<AdaptiveTrainingData> {
        let logs = self.fetch(Self::analysis_window(range)).await?;
        Ok(self
            .engine(&logs, profile, plan)
            .adaptive_training_data(user_id, range))
    }
}
