// ABOUTME: Daily wellness log model (hydration, sleep, mood, workout flag)
// ABOUTME: At most one log per calendar day is expected from the app
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Self-reported mood
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Mood {
    /// Felt good
    Good,
    /// Neither good nor bad
    Average,
    /// Felt bad
    Bad,
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Good => "Good",
            Self::Average => "Average",
            Self::Bad => "Bad",
        })
    }
}

/// Daily wellness check-in
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyLog {
    /// Day the log describes
    pub date: NaiveDate,
    /// Water drunk in millilitres
    #[serde(default)]
    pub water_intake: f64,
    /// Hours slept the previous night
    #[serde(default)]
    pub sleep_hours: f64,
    /// Mood for the day
    pub mood: Mood,
    /// Whether the user marked the day's workout done
    #[serde(default)]
    pub workout_completed: bool,
}

impl DailyLog {
    /// Sleep clamped into a single day
    #[must_use]
    pub fn sleep_hours_clamped(&self) -> f64 {
        self.sleep_hours.clamp(0.0, 24.0)
    }
}
