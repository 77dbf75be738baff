// ABOUTME: Analytics engine facade exposing reports, comparisons, exports and adaptive data
// ABOUTME: Holds one user's immutable log snapshot, profile, plan and configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::comparison::{AnalyticsComparison, PeriodComparator};
use crate::config::AnalyticsConfig;
use crate::export::{ProgressExport, ProgressExporter};
use crate::extractors::{MetricExtractor, PeriodMetrics};
use crate::insights::{InsightReport, InsightReportBuilder};
use crate::logs::TrainingLogs;
use crate::recommendation_engine::{AdaptiveRecommendationEngine, AdaptiveTrainingData};
use ironcoach_core::models::{UserProfile, WorkoutPlan};
use ironcoach_core::{DateRange, InvalidRangeError, ReportPeriod};

/// Entry point for every analytics operation on one user's data
///
/// All operations are pure functions of the snapshot passed in; calling one
/// twice with the same arguments yields the same result.
#[derive(Debug, Clone, Copy)]
pub struct AnalyticsEngine<'a> {
    logs: TrainingLogs<'a>,
    profile: &'a UserProfile,
    plan: Option<&'a WorkoutPlan>,
    config: &'a AnalyticsConfig,
}

impl<'a> AnalyticsEngine<'a> {
    /// Engine over an explicit configuration
    #[must_use]
    pub const fn new(
        logs: TrainingLogs<'a>,
        profile: &'a UserProfile,
        plan: Option<&'a WorkoutPlan>,
        config: &'a AnalyticsConfig,
    ) -> Self {
        Self {
            logs,
            profile,
            plan,
            config,
        }
    }

    /// Engine over the global configuration
    #[must_use]
    pub fn with_global_config(
        logs: TrainingLogs<'a>,
        profile: &'a UserProfile,
        plan: Option<&'a WorkoutPlan>,
    ) -> AnalyticsEngine<'a> {
        Self::new(logs, profile, plan, AnalyticsConfig::global())
    }

    /// Raw metrics for one range
    #[must_use]
    pub fn period_metrics(&self, range: DateRange) -> PeriodMetrics {
        MetricExtractor::new(self.logs, self.profile, self.plan, &self.config.metrics)
            .extract(range)
    }

    /// Weekly or monthly insight report for `range`
    #[must_use]
    pub fn build_insight_report(&self, period: ReportPeriod, range: DateRange) -> InsightReport {
        InsightReportBuilder::new(self.logs, self.profile, self.plan, self.config)
            .build(period, range)
    }

    /// Compare `current` against the period directly before it
    ///
    /// # Errors
    ///
    /// Returns [`InvalidRangeError`] when the periods overlap, differ in
    /// length, or are not adjacent
    pub fn compare_periods(
        &self,
        current: DateRange,
        previous: DateRange,
    ) -> Result<AnalyticsComparison, InvalidRangeError> {
        PeriodComparator::new(self.logs, self.profile, self.plan, self.config)
            .compare(current, previous)
    }

    /// Progress export over `range` for `profile`
    #[must_use]
    pub fn export_progress(&self, range: DateRange, profile: &UserProfile) -> ProgressExport {
        ProgressExporter::new(self.logs, self.plan, self.config).export(range, profile)
    }

    /// Adaptive training state for `range`
    #[must_use]
    pub fn adaptive_training_data(&self, user_id: &str, range: DateRange) -> AdaptiveTrainingData {
        let metrics = self.period_metrics(range);
        AdaptiveRecommendationEngine::from_config(self.config).adaptive_training_data(
            user_id,
            &metrics,
            self.profile,
        )
    }
}
