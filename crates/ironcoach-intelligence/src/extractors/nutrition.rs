// ABOUTME: Nutrition and adherence metrics (calorie totals, protein per logged day, adherence rate)
// ABOUTME: Averages divide by days that have entries, never by the whole range
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::logs::TrainingLogs;
use chrono::NaiveDate;
use ironcoach_core::DateRange;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Nutrition totals over a range
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionSummary {
    /// Sum of calories
    pub total_calories: f64,
    /// Sum of protein grams
    pub total_protein: f64,
    /// Distinct days with at least one entry
    pub days_logged: u32,
    /// Protein per logged day
    pub avg_protein_intake: f64,
    /// Calories per logged day
    pub avg_daily_calories: f64,
}

/// Summarise the nutrition entries in `range`
#[must_use]
pub fn summarize_nutrition(logs: &TrainingLogs<'_>, range: DateRange) -> NutritionSummary {
    let mut days = BTreeSet::new();
    let mut total_calories = 0.0;
    let mut total_protein = 0.0;
    for entry in logs.nutrition_in(range) {
        days.insert(entry.date);
        total_calories += entry.calories_or_zero();
        total_protein += entry.protein_or_zero();
    }

    let days_logged = u32::try_from(days.len()).unwrap_or(u32::MAX);
    let per_day = |total: f64| {
        if days_logged == 0 {
            0.0
        } else {
            total / f64::from(days_logged)
        }
    };

    NutritionSummary {
        total_calories,
        total_protein,
        days_logged,
        avg_protein_intake: per_day(total_protein),
        avg_daily_calories: per_day(total_calories),
    }
}

/// Fraction of days in `range` with any sign of engagement
///
/// A day counts when it has a session, a daily log marked as a completed
/// workout, or at least one nutrition entry.
#[must_use]
pub fn adherence_rate(logs: &TrainingLogs<'_>, range: DateRange) -> f64 {
    let mut engaged: BTreeSet<NaiveDate> = logs.sessions_in(range).map(|s| s.date).collect();
    engaged.extend(
        logs.daily_logs_in(range)
            .filter(|log| log.workout_completed)
            .map(|log| log.date),
    );
    engaged.extend(logs.nutrition_in(range).map(|entry| entry.date));

    (engaged.len() as f64 / range.num_days() as f64).clamp(0.0, 1.0)
}
