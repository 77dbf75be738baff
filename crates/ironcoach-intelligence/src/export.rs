// ABOUTME: Progress exporter producing a long-horizon summary with achievements, streaks and charts
// ABOUTME: Chart series are concrete dated values; insights fill configurable sentence templates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Progress export
//!
//! Everything here is derived at export time from the logs and the profile;
//! nothing is persisted. Weekly series use consecutive windows starting at the
//! horizon's first day, and a trailing partial window is reported on its own
//! length.

use crate::config::{AchievementMetric, AnalyticsConfig, ExportConfig};
use crate::extractors::{
    muscle_group_volume, summarize_nutrition, summarize_wellness, MetricExtractor, MuscleBalance,
};
use crate::logs::TrainingLogs;
use crate::streaks::StreakCalculator;
use crate::trend::mean;
use chrono::NaiveDate;
use ironcoach_core::models::{UserProfile, WorkoutPlan, WorkoutSession};
use ironcoach_core::DateRange;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::info;

/// One point of a chart series
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DatedValue {
    /// Day the value belongs to (window start for weekly series)
    pub date: NaiveDate,
    /// Plotted value
    pub value: f64,
}

/// Weekly completed sets for one muscle group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MuscleGroupSeries {
    /// Muscle group name
    pub muscle_group: String,
    /// One point per weekly window
    pub points: Vec<DatedValue>,
}

/// Chart-ready series
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressCharts {
    /// Body weight over time
    pub weight_progress: Vec<DatedValue>,
    /// Sessions per weekly window
    pub workout_frequency: Vec<DatedValue>,
    /// Tonnage (reps x kg) per weekly window
    pub training_volume: Vec<DatedValue>,
    /// Sets per weekly window for each trained group
    pub muscle_group_progress: Vec<MuscleGroupSeries>,
}

/// Headline stats of an export
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportStats {
    /// Sessions over the horizon
    pub total_workouts: u32,
    /// Start weight minus end weight; negative when weight was gained
    pub total_weight_lost: f64,
    /// Longest streak of on-schedule sessions
    pub best_streak: u32,
    /// Mean weekly consistency score
    pub avg_consistency: f64,
    /// Tonnage (reps x kg) over the horizon
    pub total_volume_kg: f64,
}

/// Denormalized progress summary for sharing or download
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressExport {
    /// Profile name
    pub user_name: String,
    /// Human-readable horizon, e.g. "2025-01-01 to 2025-03-31"
    pub period: String,
    /// Unlocked achievement titles, in table order
    pub achievements: Vec<String>,
    /// Headline stats
    pub stats: ExportStats,
    /// Chart series
    pub charts: ProgressCharts,
    /// Narrative sentences
    pub insights: Vec<String>,
}

/// Builds [`ProgressExport`]s
#[derive(Debug, Clone, Copy)]
pub struct ProgressExporter<'a> {
    logs: TrainingLogs<'a>,
    plan: Option<&'a WorkoutPlan>,
    config: &'a AnalyticsConfig,
}

impl<'a> ProgressExporter<'a> {
    /// Create an exporter over the given logs
    #[must_use]
    pub const fn new(
        logs: TrainingLogs<'a>,
        plan: Option<&'a WorkoutPlan>,
        config: &'a AnalyticsConfig,
    ) -> Self {
        Self { logs, plan, config }
    }

    /// Export progress over `range` for `profile`
    #[must_use]
    pub fn export(&self, range: DateRange, profile: &UserProfile) -> ProgressExport {
        let extractor = MetricExtractor::new(self.logs, profile, self.plan, &self.config.metrics);
        let windows = range.windows(self.config.metrics.weekly_window_days);

        let consistency_scores: Vec<f64> = windows
            .iter()
            .map(|window| extractor.consistency_score(*window))
            .collect();
        let streaks = StreakCalculator::for_days_available(profile.days_available_clamped());

        let stats = ExportStats {
            total_workouts: self.logs.session_count(range),
            total_weight_lost: profile.weight_nearest(range.start())
                - profile.weight_nearest(range.end()),
            best_streak: streaks.best_streak(self.logs.sessions_in(range).map(|s| s.date)),
            avg_consistency: mean(&consistency_scores).unwrap_or(0.0),
            total_volume_kg: self.tonnage(range),
        };

        let charts = ProgressCharts {
            weight_progress: weight_progress(profile, range),
            workout_frequency: windows
                .iter()
                .map(|window| DatedValue {
                    date: window.start(),
                    value: f64::from(self.logs.session_count(*window)),
                })
                .collect(),
            training_volume: windows
                .iter()
                .map(|window| DatedValue {
                    date: window.start(),
                    value: self.tonnage(*window),
                })
                .collect(),
            muscle_group_progress: self.muscle_group_progress(range, &windows),
        };

        let achievements = achievements(&self.config.export, &stats);
        let balance = extractor.muscle_balance(range);
        let insights = self.insights(range, profile, &stats, &balance);

        info!(
            user = %profile.name,
            range = %range,
            workouts = stats.total_workouts,
            best_streak = stats.best_streak,
            volume_kg = stats.total_volume_kg,
            achievements = achievements.len(),
            "Exported progress"
        );

        ProgressExport {
            user_name: profile.name.clone(),
            period: range.to_string(),
            achievements,
            stats,
            charts,
            insights,
        }
    }

    fn tonnage(&self, range: DateRange) -> f64 {
        self.logs.sessions_in(range).map(WorkoutSession::tonnage_kg).sum()
    }

    fn muscle_group_progress(
        &self,
        range: DateRange,
        windows: &[DateRange],
    ) -> Vec<MuscleGroupSeries> {
        let per_window: Vec<BTreeMap<String, u32>> = windows
            .iter()
            .map(|window| muscle_group_volume(&self.logs, *window))
            .collect();

        muscle_group_volume(&self.logs, range)
            .into_keys()
            .map(|group| {
                let points = windows
                    .iter()
                    .zip(&per_window)
                    .map(|(window, volume)| DatedValue {
                        date: window.start(),
                        value: f64::from(volume.get(&group).copied().unwrap_or(0)),
                    })
                    .collect();
                MuscleGroupSeries {
                    muscle_group: group,
                    points,
                }
            })
            .collect()
    }

    fn insights(
        &self,
        range: DateRange,
        profile: &UserProfile,
        stats: &ExportStats,
        balance: &MuscleBalance,
    ) -> Vec<String> {
        let export = &self.config.export;
        let messages = &export.messages;
        let workouts = stats.total_workouts.to_string();
        let mut insights = vec![fill(
            &messages.summary,
            &[
                ("workouts", workouts.clone()),
                ("consistency", format!("{:.0}", stats.avg_consistency)),
            ],
        )];

        if stats.best_streak > 1 {
            insights.push(fill(
                &messages.best_streak,
                &[("streak", stats.best_streak.to_string())],
            ));
        }

        if stats.total_weight_lost >= 0.1 {
            insights.push(fill(
                &messages.weight_lost,
                &[("kg", format!("{:.1}", stats.total_weight_lost))],
            ));
        } else if stats.total_weight_lost <= -0.1 {
            insights.push(fill(
                &messages.weight_gained,
                &[("kg", format!("{:.1}", -stats.total_weight_lost))],
            ));
        }

        if stats.total_volume_kg > 0.0 {
            insights.push(fill(
                &messages.training_volume,
                &[
                    ("volume", format!("{:.0}", stats.total_volume_kg)),
                    ("workouts", workouts),
                ],
            ));
        }

        if let Some(group) = balance.strongest_group() {
            insights.push(fill(
                &messages.strongest_group,
                &[("group", group.to_owned())],
            ));
        }
        if !balance.untrained.is_empty() {
            insights.push(fill(
                &messages.untrained_groups,
                &[("groups", balance.untrained.join(", "))],
            ));
        }

        let nutrition = summarize_nutrition(&self.logs, range);
        if let (Some(goals), true) = (profile.macro_goals, nutrition.days_logged > 0) {
            let protein = format!("{:.0}", nutrition.avg_protein_intake);
            if nutrition.avg_protein_intake < goals.protein * export.protein_goal_tolerance {
                insights.push(fill(
                    &messages.protein_below_target,
                    &[
                        ("protein", protein),
                        ("target", format!("{:.0}", goals.protein)),
                    ],
                ));
            } else {
                insights.push(fill(&messages.protein_met, &[("protein", protein)]));
            }
        }

        let wellness = summarize_wellness(&self.logs, range);
        if wellness.days_logged > 0 && wellness.avg_sleep_hours < export.min_sleep_hours {
            insights.push(fill(
                &messages.low_sleep,
                &[
                    ("hours", format!("{:.1}", wellness.avg_sleep_hours)),
                    ("minimum", format!("{:.0}", export.min_sleep_hours)),
                ],
            ));
        }
        if let Some(mood) = wellness.mood_counts.dominant() {
            insights.push(fill(
                &messages.dominant_mood,
                &[
                    ("mood", mood.to_string().to_lowercase()),
                    ("days", wellness.days_logged.to_string()),
                ],
            ));
        }
        insights
    }
}

/// Replace each `{name}` placeholder in `template` with its value
fn fill(template: &str, values: &[(&str, String)]) -> String {
    values
        .iter()
        .fold(template.to_owned(), |text, (name, value)| {
            text.replace(&format!("{{{name}}}"), value)
        })
}

/// Weigh-ins inside `range`, or the nearest weights at its bounds when there are none
fn weight_progress(profile: &UserProfile, range: DateRange) -> Vec<DatedValue> {
    let mut points: Vec<DatedValue> = profile
        .weight_history
        .iter()
        .filter(|snapshot| range.contains(snapshot.date))
        .map(|snapshot| DatedValue {
            date: snapshot.date,
            value: snapshot.weight_kg,
        })
        .collect();
    points.sort_by_key(|point| point.date);

    if points.is_empty() {
        points.push(DatedValue {
            date: range.start(),
            value: profile.weight_nearest(range.start()),
        });
        if range.num_days() > 1 {
            points.push(DatedValue {
                date: range.end(),
                value: profile.weight_nearest(range.end()),
            });
        }
    }
    points
}

/// Titles of every rule whose stat meets its threshold
fn achievements(config: &ExportConfig, stats: &ExportStats) -> Vec<String> {
    config
        .achievements
        .iter()
        .filter(|rule| {
            let value = match rule.metric {
                AchievementMetric::TotalWorkouts => f64::from(stats.total_workouts),
                AchievementMetric::BestStreak => f64::from(stats.best_streak),
                AchievementMetric::WeightLostKg => stats.total_weight_lost,
            };
            value >= rule.threshold
        })
        .map(|rule| rule.title.clone())
        .collect()
}
