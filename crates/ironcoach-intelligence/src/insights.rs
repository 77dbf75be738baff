// ABOUTME: Insight report builder assembling period metrics, trends and recommendations
// ABOUTME: Compares the range with the equal-length range before it and never fails on sparse data
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Weekly and monthly insight reports

use crate::config::AnalyticsConfig;
use crate::extractors::{MetricExtractor, PeriodMetrics, WellnessSummary};
use crate::logs::TrainingLogs;
use crate::recommendation_engine::{
    baseline_rest_days, AdaptiveRecommendationEngine, RecommendedAdjustments, TrainingSignals,
};
use crate::trend::{TrendClassifier, TrendDirection};
use chrono::NaiveDate;
use ironcoach_core::models::{UserProfile, WorkoutPlan};
use ironcoach_core::{DateRange, InvalidRangeError, ReportPeriod};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Headline numbers of a report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummary {
    /// Sessions in the range
    pub total_workouts: u32,
    /// Calories logged in the range
    pub total_calories: f64,
    /// Protein per day with nutrition entries
    pub avg_protein_intake: f64,
    /// Consistency score in [0, 100]
    pub consistency_score: f64,
    /// Plan day with the best mean performance
    pub best_performing_workout: Option<String>,
    /// Lowest-volume trained muscle group
    pub weakest_muscle_group: Option<String>,
    /// Fraction of engaged days
    pub adherence_rate: f64,
}

/// Period-over-period trends of a report
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportTrends {
    /// Body weight near the end minus body weight near the start, kg
    pub weight_change: f64,
    /// Percent change of mean performance rating vs the previous period
    pub strength_progress: f64,
    /// Direction of the consistency score vs the previous period
    pub consistency_trend: TrendDirection,
}

/// Weekly or monthly insight report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsightReport {
    /// Report cadence
    pub period: ReportPeriod,
    /// First day covered
    pub start_date: NaiveDate,
    /// Last day covered
    pub end_date: NaiveDate,
    /// Headline numbers
    pub summary: ReportSummary,
    /// Trends vs the previous period
    pub trends: ReportTrends,
    /// Numeric adjustments behind the recommendation sentences
    pub adjustments: RecommendedAdjustments,
    /// Recommendation sentences, one per adjustment
    pub recommendations: Vec<String>,
    /// Sleep, water and mood
    pub wellness: WellnessSummary,
    /// Scheduled or logged muscle groups that got no volume
    pub untrained_muscle_groups: Vec<String>,
}

/// Builds [`InsightReport`]s from one user's logs
#[derive(Debug, Clone)]
pub struct InsightReportBuilder<'a> {
    extractor: MetricExtractor<'a>,
    profile: &'a UserProfile,
    engine: AdaptiveRecommendationEngine,
    classifier: TrendClassifier,
}

impl<'a> InsightReportBuilder<'a> {
    /// Create a builder over the given logs, profile and plan
    #[must_use]
    pub fn new(
        logs: TrainingLogs<'a>,
        profile: &'a UserProfile,
        plan: Option<&'a WorkoutPlan>,
        config: &'a AnalyticsConfig,
    ) -> Self {
        Self {
            extractor: MetricExtractor::new(logs, profile, plan, &config.metrics),
            profile,
            engine: AdaptiveRecommendationEngine::from_config(config),
            classifier: TrendClassifier::from_config(&config.trend),
        }
    }

    /// Validate `start..=end` and build the report
    ///
    /// # Errors
    ///
    /// Returns [`InvalidRangeError`] when `end` is before `start`
    pub fn build_between(
        &self,
        period: ReportPeriod,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<InsightReport, InvalidRangeError> {
        let range = DateRange::new(start, end)?;
        Ok(self.build(period, range))
    }

    /// Build the report for the period of `period`'s length ending on `end`
    #[must_use]
    pub fn build_ending_on(&self, period: ReportPeriod, end: NaiveDate) -> InsightReport {
        self.build(period, DateRange::for_period(period, end))
    }

    /// Build the report for `range`
    #[must_use]
    pub fn build(&self, period: ReportPeriod, range: DateRange) -> InsightReport {
        let current = self.extractor.extract(range);
        let previous = self.extractor.extract(range.preceding());

        let trends = self.trends(&current, &previous);
        let baseline = baseline_rest_days(self.profile);
        let adjustments = self
            .engine
            .recommend(&TrainingSignals::from_metrics(&current, self.profile));
        let recommendations = self.engine.render(&adjustments, baseline);

        info!(
            period = %period,
            range = %range,
            workouts = current.total_workouts,
            consistency_trend = %trends.consistency_trend,
            recommendations = recommendations.len(),
            "Built insight report"
        );

        InsightReport {
            period,
            start_date: range.start(),
            end_date: range.end(),
            summary: ReportSummary {
                total_workouts: current.total_workouts,
                total_calories: current.nutrition.total_calories,
                avg_protein_intake: current.nutrition.avg_protein_intake,
                consistency_score: current.consistency.score,
                best_performing_workout: current.best_performing_workout.clone(),
                weakest_muscle_group: current
                    .muscle_balance
                    .weakest_group()
                    .map(str::to_owned),
                adherence_rate: current.adherence_rate,
            },
            trends,
            adjustments,
            recommendations,
            wellness: current.wellness,
            untrained_muscle_groups: current.muscle_balance.untrained,
        }
    }

    fn trends(&self, current: &PeriodMetrics, previous: &PeriodMetrics) -> ReportTrends {
        let consistency_trend = if current.total_workouts == 0 || previous.total_workouts == 0 {
            TrendDirection::Stable
        } else {
            self.classifier.classify(
                Some(current.consistency.score),
                Some(previous.consistency.score),
            )
        };

        let strength_progress = match (current.mean_performance, previous.mean_performance) {
            (Some(now), Some(before)) if before > 0.0 => 100.0 * (now - before) / before,
            _ => 0.0,
        };

        let range = current.range;
        ReportTrends {
            weight_change: self.profile.weight_nearest(range.end())
                - self.profile.weight_nearest(range.start()),
            strength_progress,
            consistency_trend,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ironcoach_core::models::{
        DietType, Equipment, Experience, Gender, Goal, SplitPreference, WeightSnapshot,
        WorkoutSession, WorkoutSessionBuilder,
    };
    use ironcoach_core::RangeViolation;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, d).unwrap()
    }

    fn profile(days: u8) -> UserProfile {
        UserProfile {
            name: "Sam".to_owned(),
            age: 34,
            weight: 90.0,
            height: 178.0,
            gender: Gender::Male,
            experience: Experience::Intermediate,
            days_available: days,
            goal: Goal::Cutting,
            equipment: Equipment::FullGym,
            diet_type: DietType::Any,
            split_preference: SplitPreference::UpperLower,
            injuries: String::new(),
            completed_onboarding: true,
            weight_history: Vec::new(),
            macro_goals: None,
        }
    }

    fn session(day: u32, fatigue: u8, performance: u8) -> WorkoutSession {
        WorkoutSessionBuilder::new(format!("s{day}"), date(day), "Upper")
            .fatigue(fatigue)
            .performance(performance)
            .build()
    }

    #[test]
    fn test_inverted_range_is_rejected() {
        let config = AnalyticsConfig::default();
        let profile = profile(4);
        let builder = InsightReportBuilder::new(TrainingLogs::default(), &profile, None, &config);

        let err = builder
            .build_between(ReportPeriod::Weekly, date(14), date(8))
            .unwrap_err();
        assert_eq!(err.violation, RangeViolation::EndBeforeStart);
    }

    #[test]
    fn test_empty_week_report() {
        let config = AnalyticsConfig::default();
        let profile = profile(4);
        let builder = InsightReportBuilder::new(TrainingLogs::default(), &profile, None, &config);

        let report = builder
            .build_between(ReportPeriod::Weekly, date(8), date(14))
            .unwrap();
        assert_eq!(report.summary.total_workouts, 0);
        assert!(report.summary.consistency_score.abs() < f64::EPSILON);
        assert_eq!(report.trends.consistency_trend, TrendDirection::Stable);
        assert!(report.summary.best_performing_workout.is_none());
        assert!(report.trends.strength_progress.abs() < f64::EPSILON);
    }

    #[test]
    fn test_fatigued_week_recommends_deload() {
        let config = AnalyticsConfig::default();
        let profile = profile(4);
        let sessions = vec![session(9, 5, 3), session(11, 4, 3), session(13, 5, 3)];
        let logs = TrainingLogs::new(&sessions, &[], &[]);
        let builder = InsightReportBuilder::new(logs, &profile, None, &config);

        let report = builder
            .build_between(ReportPeriod::Weekly, date(8), date(14))
            .unwrap();
        assert!((report.summary.consistency_score - 75.0).abs() < f64::EPSILON);
        assert!((report.adjustments.intensity_change + 15.0).abs() < f64::EPSILON);
        assert_eq!(report.adjustments.rest_days, 4);
        assert_eq!(report.recommendations.len(), 2);
    }

    #[test]
    fn test_trends_against_previous_week() {
        let config = AnalyticsConfig::default();
        let mut profile = profile(4);
        profile.weight_history = vec![
            WeightSnapshot {
                date: date(8),
                weight_kg: 90.0,
            },
            WeightSnapshot {
                date: date(14),
                weight_kg: 89.2,
            },
        ];
        let sessions = vec![
            session(2, 3, 2),
            session(4, 3, 2),
            session(9, 3, 3),
            session(10, 3, 3),
            session(12, 3, 3),
            session(13, 3, 3),
        ];
        let logs = TrainingLogs::new(&sessions, &[], &[]);
        let builder = InsightReportBuilder::new(logs, &profile, None, &config);

        let report = builder.build_ending_on(ReportPeriod::Weekly, date(14));
        assert_eq!(report.start_date, date(8));
        assert_eq!(report.trends.consistency_trend, TrendDirection::Improving);
        assert!((report.trends.strength_progress - 50.0).abs() < 1e-9);
        assert!((report.trends.weight_change + 0.8).abs() < 1e-9);
    }
}
