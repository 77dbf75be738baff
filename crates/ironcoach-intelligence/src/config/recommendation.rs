// ABOUTME: Recommendation engine configuration for training-load adjustments
// ABOUTME: Configures rule thresholds, adjustment sizes, the split downgrade table, and message templates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Recommendation Engine Configuration
//!
//! Thresholds decide which rule fires on each axis, adjustments decide by how
//! much, and the split table maps a split the user cannot keep up with to a
//! lower-frequency alternative. Message templates use `{percent}`, `{days}`
//! and `{split}` placeholders.

use ironcoach_core::models::SplitPreference;
use serde::{Deserialize, Serialize};

/// Recommendation Engine Configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommendationConfig {
    /// Rule trigger thresholds
    pub thresholds: RecommendationThresholds,
    /// Adjustment sizes applied when a rule fires
    pub adjustments: RecommendationAdjustments,
    /// Lower-frequency split suggested when sessions keep being missed
    pub split_downgrades: SplitDowngradeTable,
    /// Sentence templates used by reports
    pub messages: RecommendationMessages,
}

/// Thresholds for triggering adjustments
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommendationThresholds {
    /// Mean fatigue at or above which intensity is cut
    pub high_fatigue: f64,
    /// Mean fatigue at or below which intensity may rise
    pub low_fatigue: f64,
    /// Consistency score below which volume is cut
    pub low_consistency: f64,
    /// Consistency score at or above which volume may rise
    pub high_consistency: f64,
    /// Missed sessions at which a lower-frequency split is suggested
    pub missed_sessions_for_split: u32,
}

/// Adjustment sizes in percent (signed) and rest days
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommendationAdjustments {
    /// Intensity change when fatigue is high
    pub high_fatigue_intensity_pct: f64,
    /// Extra weekly rest days when fatigue is high
    pub high_fatigue_extra_rest_days: u8,
    /// Intensity change when the user is fresh and not missing sessions
    pub low_fatigue_intensity_pct: f64,
    /// Volume change when consistency is poor
    pub low_consistency_volume_pct: f64,
    /// Volume change when consistency is high and performance improving
    pub high_consistency_volume_pct: f64,
}

/// One entry of the split downgrade table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitDowngrade {
    /// Split the user currently follows
    pub from: SplitPreference,
    /// Suggested lower-frequency split
    pub to: SplitPreference,
}

/// Split compatibility table; splits without an entry have no downgrade
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SplitDowngradeTable(pub Vec<SplitDowngrade>);

impl SplitDowngradeTable {
    /// Suggested downgrade for `split`
    #[must_use]
    pub fn downgrade_for(&self, split: SplitPreference) -> Option<SplitPreference> {
        self.0
            .iter()
            .find(|entry| entry.from == split)
            .map(|entry| entry.to)
    }
}

/// Template messages for rendered recommendations
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommendationMessages {
    /// Volume going up
    pub volume_increase: String,
    /// Volume going down
    pub volume_decrease: String,
    /// Intensity going up
    pub intensity_increase: String,
    /// Intensity going down
    pub intensity_decrease: String,
    /// Rest days differ from the schedule's natural rest days
    pub rest_days: String,
    /// Switch to another split
    pub split_change: String,
}

impl Default for RecommendationThresholds {
    fn default() -> Self {
        Self {
            high_fatigue: 4.0,
            low_fatigue: 2.0,
            low_consistency: 50.0,
            high_consistency: 90.0,
            missed_sessions_for_split: 3,
        }
    }
}

impl Default for RecommendationAdjustments {
    fn default() -> Self {
        Self {
            high_fatigue_intensity_pct: -15.0,
            high_fatigue_extra_rest_days: 1,
            low_fatigue_intensity_pct: 10.0,
            low_consistency_volume_pct: -20.0,
            high_consistency_volume_pct: 10.0,
        }
    }
}

impl Default for SplitDowngradeTable {
    fn default() -> Self {
        use SplitPreference::{BroSplit, FullBody, Hybrid, PushPullLegs, UpperLower};
        Self(vec![
            SplitDowngrade {
                from: PushPullLegs,
                to: UpperLower,
            },
            SplitDowngrade {
                from: BroSplit,
                to: FullBody,
            },
            SplitDowngrade {
                from: UpperLower,
                to: FullBody,
            },
            SplitDowngrade {
                from: Hybrid,
                to: UpperLower,
            },
        ])
    }
}

impl Default for RecommendationMessages {
    fn default() -> Self {
        Self {
            volume_increase: "Increase weekly training volume by {percent}%: you are consistent and getting stronger".to_owned(),
            volume_decrease: "Reduce training volume by {percent}% until you can complete your scheduled sessions".to_owned(),
            intensity_increase: "Increase training intensity by {percent}%: you are recovering well".to_owned(),
            intensity_decrease: "Lower training intensity by {percent}% to manage accumulated fatigue".to_owned(),
            rest_days: "Plan {days} rest days per week".to_owned(),
            split_change: "Consider switching to a {split} split to fit your schedule".to_owned(),
        }
    }
}
