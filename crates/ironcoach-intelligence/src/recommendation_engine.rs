// ABOUTME: Adaptive recommendation engine turning extracted metrics into training-load adjustments
// ABOUTME: Independent fatigue, consistency and missed-session rules with first-match-wins per axis
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Adaptive training recommendations
//!
//! Three independent axes are evaluated; within an axis the first matching
//! rule wins:
//!
//! - **Fatigue** drives intensity and rest days
//! - **Consistency** drives volume
//! - **Missed sessions** drive a split downgrade
//!
//! The engine only produces numbers. [`AdaptiveRecommendationEngine::render`]
//! turns them into template sentences for reports.

use crate::config::{AnalyticsConfig, RecommendationConfig};
use crate::extractors::PeriodMetrics;
use crate::trend::{mean, TrendClassifier, TrendDirection};
use ironcoach_core::constants::calendar::DAYS_PER_WEEK;
use ironcoach_core::models::{SplitPreference, UserProfile};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Training-load adjustments
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendedAdjustments {
    /// Volume change in percent
    pub volume_change: f64,
    /// Intensity change in percent
    pub intensity_change: f64,
    /// Lower-frequency split to switch to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub split_recommendation: Option<SplitPreference>,
    /// Rest days per week
    pub rest_days: u8,
}

impl RecommendedAdjustments {
    /// No change from the given rest-day baseline
    #[must_use]
    pub const fn unchanged(rest_days: u8) -> Self {
        Self {
            volume_change: 0.0,
            intensity_change: 0.0,
            split_recommendation: None,
            rest_days,
        }
    }
}

/// Derived per-user adaptive training state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdaptiveTrainingData {
    /// Owner of the logs
    pub user_id: String,
    /// Consistency score in [0, 100]
    pub consistency_score: f64,
    /// Daily fatigue values of the fatigue window
    pub fatigue_trend: Vec<f64>,
    /// Scheduled sessions not completed
    pub missed_sessions: u32,
    /// Daily performance values of the performance window
    pub performance_trend: Vec<f64>,
    /// Weakest muscle groups, weakest first
    pub weakest_muscle_groups: Vec<String>,
    /// Engine output
    pub recommended_adjustments: RecommendedAdjustments,
}

/// Signals the rules look at
#[derive(Debug, Clone, Copy)]
pub struct TrainingSignals<'a> {
    /// Consistency score in [0, 100]
    pub consistency_score: f64,
    /// Scheduled sessions not completed
    pub missed_sessions: u32,
    /// Daily fatigue values, chronological
    pub fatigue_trend: &'a [f64],
    /// Daily performance values, chronological
    pub performance_trend: &'a [f64],
    /// Split the user follows
    pub split: SplitPreference,
    /// Rest days before any adjustment
    pub baseline_rest_days: u8,
}

impl<'a> TrainingSignals<'a> {
    /// Signals for one period's metrics
    #[must_use]
    pub fn from_metrics(metrics: &'a PeriodMetrics, profile: &UserProfile) -> Self {
        Self {
            consistency_score: metrics.consistency.score,
            missed_sessions: metrics.consistency.missed_sessions,
            fatigue_trend: &metrics.fatigue_trend,
            performance_trend: &metrics.performance_trend,
            split: profile.split_preference,
            baseline_rest_days: baseline_rest_days(profile),
        }
    }
}

/// Rest days implied by the profile's schedule: `7 - days_available`
#[must_use]
pub fn baseline_rest_days(profile: &UserProfile) -> u8 {
    let week = u8::try_from(DAYS_PER_WEEK).unwrap_or(u8::MAX);
    week.saturating_sub(profile.days_available_clamped())
}

/// Rule-based training-load recommendation engine
#[derive(Debug, Clone)]
pub struct AdaptiveRecommendationEngine {
    config: RecommendationConfig,
    classifier: TrendClassifier,
}

impl Default for AdaptiveRecommendationEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl AdaptiveRecommendationEngine {
    /// Engine using the global configuration
    #[must_use]
    pub fn new() -> Self {
        Self::from_config(AnalyticsConfig::global())
    }

    /// Engine using an explicit configuration
    #[must_use]
    pub fn from_config(config: &AnalyticsConfig) -> Self {
        Self {
            config: config.recommendation.clone(),
            classifier: TrendClassifier::from_config(&config.trend),
        }
    }

    /// Evaluate every axis and combine the results
    #[must_use]
    pub fn recommend(&self, signals: &TrainingSignals<'_>) -> RecommendedAdjustments {
        let mut adjustments = RecommendedAdjustments::unchanged(signals.baseline_rest_days);
        self.apply_fatigue_rules(signals, &mut adjustments);
        self.apply_consistency_rules(signals, &mut adjustments);
        self.apply_missed_session_rules(signals, &mut adjustments);

        debug!(
            volume = adjustments.volume_change,
            intensity = adjustments.intensity_change,
            rest_days = adjustments.rest_days,
            split = ?adjustments.split_recommendation,
            "Computed training adjustments"
        );
        adjustments
    }

    /// Package one period's metrics and the engine output as [`AdaptiveTrainingData`]
    #[must_use]
    pub fn adaptive_training_data(
        &self,
        user_id: &str,
        metrics: &PeriodMetrics,
        profile: &UserProfile,
    ) -> AdaptiveTrainingData {
        let adjustments = self.recommend(&TrainingSignals::from_metrics(metrics, profile));
        AdaptiveTrainingData {
            user_id: user_id.to_owned(),
            consistency_score: metrics.consistency.score,
            fatigue_trend: metrics.fatigue_trend.clone(),
            missed_sessions: metrics.consistency.missed_sessions,
            performance_trend: metrics.performance_trend.clone(),
            weakest_muscle_groups: metrics.muscle_balance.weakest.clone(),
            recommended_adjustments: adjustments,
        }
    }

    fn apply_fatigue_rules(&self, signals: &TrainingSignals<'_>, out: &mut RecommendedAdjustments) {
        let Some(fatigue) = mean(signals.fatigue_trend) else {
            return;
        };
        let thresholds = &self.config.thresholds;
        let adjust = &self.config.adjustments;

        if fatigue >= thresholds.high_fatigue {
            out.intensity_change = adjust.high_fatigue_intensity_pct;
            out.rest_days = out
                .rest_days
                .saturating_add(adjust.high_fatigue_extra_rest_days)
                .min(u8::try_from(DAYS_PER_WEEK).unwrap_or(u8::MAX));
        } else if fatigue <= thresholds.low_fatigue && signals.missed_sessions == 0 {
            out.intensity_change = adjust.low_fatigue_intensity_pct;
        }
    }

    fn apply_consistency_rules(
        &self,
        signals: &TrainingSignals<'_>,
        out: &mut RecommendedAdjustments,
    ) {
        let thresholds = &self.config.thresholds;
        let adjust = &self.config.adjustments;

        if signals.consistency_score < thresholds.low_consistency {
            out.volume_change = adjust.low_consistency_volume_pct;
        } else if signals.consistency_score >= thresholds.high_consistency
            && self.classifier.classify_halves(signals.performance_trend)
                == TrendDirection::Improving
        {
            out.volume_change = adjust.high_consistency_volume_pct;
        }
    }

    fn apply_missed_session_rules(
        &self,
        signals: &TrainingSignals<'_>,
        out: &mut RecommendedAdjustments,
    ) {
        if signals.missed_sessions >= self.config.thresholds.missed_sessions_for_split {
            out.split_recommendation = self.config.split_downgrades.downgrade_for(signals.split);
        }
    }

    /// Render one sentence per nonzero adjustment
    ///
    /// Rest days are mentioned only when they differ from `baseline_rest_days`.
    #[must_use]
    pub fn render(
        &self,
        adjustments: &RecommendedAdjustments,
        baseline_rest_days: u8,
    ) -> Vec<String> {
        let messages = &self.config.messages;
        let mut sentences = Vec::new();

        if adjustments.volume_change > 0.0 {
            sentences.push(fill_percent(&messages.volume_increase, adjustments.volume_change));
        } else if adjustments.volume_change < 0.0 {
            sentences.push(fill_percent(&messages.volume_decrease, adjustments.volume_change));
        }

        if adjustments.intensity_change > 0.0 {
            sentences.push(fill_percent(
                &messages.intensity_increase,
                adjustments.intensity_change,
            ));
        } else if adjustments.intensity_change < 0.0 {
            sentences.push(fill_percent(
                &messages.intensity_decrease,
                adjustments.intensity_change,
            ));
        }

        if adjustments.rest_days != baseline_rest_days {
            sentences.push(
                messages
                    .rest_days
                    .replace("{days}", &adjustments.rest_days.to_string()),
            );
        }

        if let Some(split) = adjustments.split_recommendation {
            sentences.push(messages.split_change.replace("{split}", split.label()));
        }
        sentences
    }
}

/// Format a signed percentage as its magnitude, without a trailing `.0`
#[must_use]
pub fn format_percent(value: f64) -> String {
    let magnitude = value.abs();
    if (magnitude - magnitude.round()).abs() < 1e-9 {
        format!("{magnitude:.0}")
    } else {
        format!("{magnitude:.1}")
    }
}

fn fill_percent(template: &str, value: f64) -> String {
    template.replace("{percent}", &format_percent(value))
}
