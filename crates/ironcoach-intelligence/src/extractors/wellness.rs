// ABOUTME: Wellness summary over daily logs (sleep, hydration, mood distribution)
// ABOUTME: Empty ranges produce zeroed averages instead of failing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::logs::TrainingLogs;
use ironcoach_core::models::Mood;
use ironcoach_core::DateRange;
use serde::{Deserialize, Serialize};

/// Count of daily logs per mood
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodCounts {
    /// Days logged as Good
    pub good: u32,
    /// Days logged as Average
    pub average: u32,
    /// Days logged as Bad
    pub bad: u32,
}

impl MoodCounts {
    fn record(&mut self, mood: Mood) {
        match mood {
            Mood::Good => self.good += 1,
            Mood::Average => self.average += 1,
            Mood::Bad => self.bad += 1,
        }
    }

    /// Most frequent mood; ties favour the better mood
    #[must_use]
    pub fn dominant(&self) -> Option<Mood> {
        [
            (Mood::Good, self.good),
            (Mood::Average, self.average),
            (Mood::Bad, self.bad),
        ]
        .into_iter()
        .filter(|(_, count)| *count > 0)
        .max_by(|(a_mood, a), (b_mood, b)| a.cmp(b).then_with(|| b_mood.cmp(a_mood)))
        .map(|(mood, _)| mood)
    }
}

/// Wellness block of a report
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WellnessSummary {
    /// Daily logs found in the range
    pub days_logged: u32,
    /// Mean hours slept
    pub avg_sleep_hours: f64,
    /// Mean water intake in ml
    pub avg_water_intake_ml: f64,
    /// Mood distribution
    pub mood_counts: MoodCounts,
}

/// Summarise the daily logs in `range`
#[must_use]
pub fn summarize_wellness(logs: &TrainingLogs<'_>, range: DateRange) -> WellnessSummary {
    let mut summary = WellnessSummary::default();
    let mut sleep = 0.0;
    let mut water = 0.0;
    for log in logs.daily_logs_in(range) {
        summary.days_logged += 1;
        sleep += log.sleep_hours_clamped();
        water += log.water_intake.max(0.0);
        summary.mood_counts.record(log.mood);
    }
    if summary.days_logged > 0 {
        summary.avg_sleep_hours = sleep / f64::from(summary.days_logged);
        summary.avg_water_intake_ml = water / f64::from(summary.days_logged);
    }
    summary
}
