// ABOUTME: Progress export configuration with the achievement table and insight templates
// ABOUTME: Achievements unlock when a stat meets or exceeds its threshold
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Stat an achievement is measured against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AchievementMetric {
    /// Sessions logged over the export horizon
    TotalWorkouts,
    /// Longest streak of sessions on schedule
    BestStreak,
    /// Kilograms lost over the export horizon
    WeightLostKg,
}

/// One row of the achievement table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AchievementRule {
    /// Stat to compare
    pub metric: AchievementMetric,
    /// Inclusive threshold
    pub threshold: f64,
    /// Achievement title shown to the user
    pub title: String,
}

impl AchievementRule {
    fn new(metric: AchievementMetric, threshold: f64, title: &str) -> Self {
        Self {
            metric,
            threshold,
            title: title.to_owned(),
        }
    }
}

/// Progress exporter configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Achievement table, evaluated in order
    pub achievements: Vec<AchievementRule>,
    /// Average sleep below which the export suggests more sleep
    pub min_sleep_hours: f64,
    /// Fraction of the protein goal that counts as meeting it
    pub protein_goal_tolerance: f64,
    /// Insight sentence templates
    pub messages: ExportMessages,
}

/// Insight sentence templates
///
/// Placeholders in braces are replaced with the formatted value of the same
/// name; unknown placeholders are left as written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportMessages {
    /// `{workouts}`, `{consistency}`
    pub summary: String,
    /// `{streak}`
    pub best_streak: String,
    /// `{kg}`
    pub weight_lost: String,
    /// `{kg}`
    pub weight_gained: String,
    /// `{volume}`, `{workouts}`
    pub training_volume: String,
    /// `{group}`
    pub strongest_group: String,
    /// `{groups}`
    pub untrained_groups: String,
    /// `{protein}`, `{target}`
    pub protein_below_target: String,
    /// `{protein}`
    pub protein_met: String,
    /// `{hours}`, `{minimum}`
    pub low_sleep: String,
    /// `{mood}`, `{days}`
    pub dominant_mood: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        use AchievementMetric::{BestStreak, TotalWorkouts, WeightLostKg};
        Self {
            achievements: vec![
                AchievementRule::new(TotalWorkouts, 1.0, "First Workout Logged"),
                AchievementRule::new(TotalWorkouts, 10.0, "10 Workouts Completed"),
                AchievementRule::new(TotalWorkouts, 50.0, "50 Workouts Completed"),
                AchievementRule::new(TotalWorkouts, 100.0, "Century Club: 100 Workouts"),
                AchievementRule::new(BestStreak, 3.0, "3-Session Streak"),
                AchievementRule::new(BestStreak, 7.0, "7-Session Streak"),
                AchievementRule::new(BestStreak, 14.0, "14-Session Streak"),
                AchievementRule::new(WeightLostKg, 1.0, "First Kilogram Down"),
                AchievementRule::new(WeightLostKg, 5.0, "5 kg Lost"),
            ],
            min_sleep_hours: 7.0,
            protein_goal_tolerance: 0.9,
            messages: ExportMessages::default(),
        }
    }
}

impl Default for ExportMessages {
    fn default() -> Self {
        Self {
            summary: "You completed {workouts} workouts with an average weekly consistency of {consistency}%.".to_owned(),
            best_streak: "Your best streak was {streak} sessions in a row.".to_owned(),
            weight_lost: "You lost {kg} kg over this period.".to_owned(),
            weight_gained: "You gained {kg} kg over this period.".to_owned(),
            training_volume: "You moved {volume} kg of total load across {workouts} workouts.".to_owned(),
            strongest_group: "{group} received the most training volume.".to_owned(),
            untrained_groups: "No completed sets were logged for: {groups}.".to_owned(),
            protein_below_target: "Average protein intake of {protein} g is below your {target} g target.".to_owned(),
            protein_met: "You met your protein target with {protein} g per logged day.".to_owned(),
            low_sleep: "You averaged {hours} hours of sleep; aim for at least {minimum} to support recovery.".to_owned(),
            dominant_mood: "Your mood was most often {mood} across {days} logged days.".to_owned(),
        }
    }
}
