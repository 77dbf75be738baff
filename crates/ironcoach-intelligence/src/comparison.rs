// ABOUTME: Period comparator computing signed differences between two adjacent equal-length periods
// ABOUTME: Validates period alignment and extracts both periods in parallel with rayon
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::AnalyticsConfig;
use crate::extractors::{MetricExtractor, PeriodMetrics};
use crate::logs::TrainingLogs;
use chrono::NaiveDate;
use ironcoach_core::models::{UserProfile, WorkoutPlan};
use ironcoach_core::{DateRange, InvalidRangeError};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Totals for one side of a comparison
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodSnapshot {
    /// First day of the period
    pub start_date: NaiveDate,
    /// Last day of the period
    pub end_date: NaiveDate,
    /// Sessions logged
    pub workouts: u32,
    /// Calories logged
    pub calories: f64,
    /// Mean of the weigh-ins nearest the period's first and last day
    pub avg_weight: f64,
    /// Consistency score in [0, 100]
    pub consistency: f64,
}

/// Current minus previous for every compared value
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonDifferences {
    /// Change in sessions
    pub workouts_change: i64,
    /// Change in calories
    pub calories_change: f64,
    /// Change in average weight, kg
    pub weight_change: f64,
    /// Change in consistency score, points
    pub consistency_change: f64,
}

/// Side-by-side comparison of two adjacent periods
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsComparison {
    /// The later period
    pub current_period: PeriodSnapshot,
    /// The period directly before it
    pub previous_period: PeriodSnapshot,
    /// Current minus previous
    pub differences: ComparisonDifferences,
}

/// Compares two adjacent, equal-length periods of one user's logs
#[derive(Debug, Clone, Copy)]
pub struct PeriodComparator<'a> {
    extractor: MetricExtractor<'a>,
    profile: &'a UserProfile,
}

impl<'a> PeriodComparator<'a> {
    /// Create a comparator over the given logs
    #[must_use]
    pub const fn new(
        logs: TrainingLogs<'a>,
        profile: &'a UserProfile,
        plan: Option<&'a WorkoutPlan>,
        config: &'a AnalyticsConfig,
    ) -> Self {
        Self {
            extractor: MetricExtractor::new(logs, profile, plan, &config.metrics),
            profile,
        }
    }

    /// Compare `current` against `previous`
    ///
    /// # Errors
    ///
    /// Returns [`InvalidRangeError`] unless `current` starts the day after
    /// `previous` ends and both span the same number of days
    pub fn compare(
        &self,
        current: DateRange,
        previous: DateRange,
    ) -> Result<AnalyticsComparison, InvalidRangeError> {
        current.ensure_follows(&previous)?;

        let (current_metrics, previous_metrics) = rayon::join(
            || self.extractor.extract(current),
            || self.extractor.extract(previous),
        );
        let current_period = self.snapshot(&current_metrics);
        let previous_period = self.snapshot(&previous_metrics);

        let differences = ComparisonDifferences {
            workouts_change: i64::from(current_period.workouts)
                - i64::from(previous_period.workouts),
            calories_change: current_period.calories - previous_period.calories,
            weight_change: current_period.avg_weight - previous_period.avg_weight,
            consistency_change: current_period.consistency - previous_period.consistency,
        };

        debug!(
            current = %current,
            previous = %previous,
            workouts_change = differences.workouts_change,
            "Compared periods"
        );

        Ok(AnalyticsComparison {
            current_period,
            previous_period,
            differences,
        })
    }

    fn snapshot(&self, metrics: &PeriodMetrics) -> PeriodSnapshot {
        let range = metrics.range;
        let avg_weight = (self.profile.weight_nearest(range.start())
            + self.profile.weight_nearest(range.end()))
            / 2.0;
        PeriodSnapshot {
            start_date: range.start(),
            end_date: range.end(),
            workouts: metrics.total_workouts,
            calories: metrics.nutrition.total_calories,
            avg_weight,
            consistency: metrics.consistency.score,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ironcoach_core::models::{
        DietType, Equipment, Experience, Gender, Goal, SplitPreference, WorkoutSession,
        WorkoutSessionBuilder,
    };
    use ironcoach_core::RangeViolation;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, d).unwrap()
    }

    fn range(start: u32, end: u32) -> DateRange {
        DateRange::new(date(start), date(end)).unwrap()
    }

    fn profile() -> UserProfile {
        UserProfile {
            name: "Jo".to_owned(),
            age: 41,
            weight: 70.0,
            height: 165.0,
            gender: Gender::Female,
            experience: Experience::Beginner,
            days_available: 3,
            goal: Goal::Maintenance,
            equipment: Equipment::DumbbellsOnly,
            diet_type: DietType::Vegetarian,
            split_preference: SplitPreference::FullBody,
            injuries: String::new(),
            completed_onboarding: true,
            weight_history: Vec::new(),
            macro_goals: None,
        }
    }

    fn sessions(days: &[u32]) -> Vec<WorkoutSession> {
        days.iter()
            .map(|d| WorkoutSessionBuilder::new(format!("s{d}"), date(*d), "Full").build())
            .collect()
    }

    #[test]
    fn test_workout_difference_is_current_minus_previous() {
        let config = AnalyticsConfig::default();
        let profile = profile();
        let logged = sessions(&[2, 5, 8, 9, 11, 13]);
        let comparator =
            PeriodComparator::new(TrainingLogs::new(&logged, &[], &[]), &profile, None, &config);

        let comparison = comparator.compare(range(8, 14), range(1, 7)).unwrap();
        assert_eq!(comparison.previous_period.workouts, 2);
        assert_eq!(comparison.current_period.workouts, 4);
        assert_eq!(comparison.differences.workouts_change, 2);
        assert!(comparison.differences.weight_change.abs() < f64::EPSILON);
    }

    #[test]
    fn test_rejects_misaligned_periods() {
        let config = AnalyticsConfig::default();
        let profile = profile();
        let comparator = PeriodComparator::new(TrainingLogs::default(), &profile, None, &config);

        let swapped = comparator.compare(range(1, 7), range(8, 14)).unwrap_err();
        assert_eq!(swapped.violation, RangeViolation::NotAdjacent);

        let uneven = comparator.compare(range(8, 15), range(1, 7)).unwrap_err();
        assert_eq!(uneven.violation, RangeViolation::UnequalLength);
    }

    #[test]
    fn test_compare_is_pure() {
        let config = AnalyticsConfig::default();
        let profile = profile();
        let logged = sessions(&[1, 3, 9]);
        let comparator =
            PeriodComparator::new(TrainingLogs::new(&logged, &[], &[]), &profile, None, &config);

        let first = comparator.compare(range(8, 14), range(1, 7)).unwrap();
        let second = comparator.compare(range(8, 14), range(1, 7)).unwrap();
        assert_eq!(first, second);
    }
}
