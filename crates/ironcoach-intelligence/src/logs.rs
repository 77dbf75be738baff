// ABOUTME: Borrowed view over the three log collections the engine analyses
// ABOUTME: Range filters for sessions, nutrition entries, and daily wellness logs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use ironcoach_core::models::{DailyLog, NutritionEntry, WorkoutSession};
use ironcoach_core::DateRange;

/// Immutable snapshot of a user's logs
///
/// Collections may arrive in any order; every extractor filters by date
/// itself and never relies on ordering.
#[derive(Debug, Clone, Copy, Default)]
pub struct TrainingLogs<'a> {
    /// Completed workout sessions
    pub sessions: &'a [WorkoutSession],
    /// Logged meals
    pub nutrition: &'a [NutritionEntry],
    /// Daily wellness check-ins
    pub daily_logs: &'a [DailyLog],
}

impl<'a> TrainingLogs<'a> {
    /// Bundle the three collections
    #[must_use]
    pub const fn new(
        sessions: &'a [WorkoutSession],
        nutrition: &'a [NutritionEntry],
        daily_logs: &'a [DailyLog],
    ) -> Self {
        Self {
            sessions,
            nutrition,
            daily_logs,
        }
    }

    /// Sessions dated inside `range`
    pub fn sessions_in(&self, range: DateRange) -> impl Iterator<Item = &'a WorkoutSession> {
        self.sessions
            .iter()
            .filter(move |session| range.contains(session.date))
    }

    /// Nutrition entries dated inside `range`
    pub fn nutrition_in(&self, range: DateRange) -> impl Iterator<Item = &'a NutritionEntry> {
        self.nutrition
            .iter()
            .filter(move |entry| range.contains(entry.date))
    }

    /// Daily logs dated inside `range`
    pub fn daily_logs_in(&self, range: DateRange) -> impl Iterator<Item = &'a DailyLog> {
        self.daily_logs
            .iter()
            .filter(move |log| range.contains(log.date))
    }

    /// Number of sessions dated inside `range`
    #[must_use]
    pub fn session_count(&self, range: DateRange) -> u32 {
        u32::try_from(self.sessions_in(range).count()).unwrap_or(u32::MAX)
    }
}
