// ABOUTME: In-memory LogStore over owned, date-sorted vectors
// ABOUTME: Used by tests, benchmarks, and as the backing store of the JSON snapshot store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::LogStore;
use async_trait::async_trait;
use chrono::NaiveDate;
use ironcoach_core::models::{DailyLog, NutritionEntry, WorkoutSession};
use ironcoach_core::{AppResult, DateRange};
use tracing::debug;

/// Log store holding every record in memory
#[derive(Debug, Clone, Default)]
pub struct InMemoryLogStore {
    sessions: Vec<WorkoutSession>,
    nutrition: Vec<NutritionEntry>,
    daily_logs: Vec<DailyLog>,
}

impl InMemoryLogStore {
    /// Store over the given collections; they are sorted by date here
    #[must_use]
    pub fn new(
        mut sessions: Vec<WorkoutSession>,
        mut nutrition: Vec<NutritionEntry>,
        mut daily_logs: Vec<DailyLog>,
    ) -> Self {
        sessions.sort_by_key(|session| session.date);
        nutrition.sort_by_key(|entry| entry.date);
        daily_logs.sort_by_key(|log| log.date);
        Self {
            sessions,
            nutrition,
            daily_logs,
        }
    }

    /// Total number of stored records across all collections
    #[must_use]
    pub fn len(&self) -> usize {
        self.sessions.len() + self.nutrition.len() + self.daily_logs.len()
    }

    /// Whether every collection is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Records of a date-sorted slice that fall inside `range`
fn slice_in_range<T, F>(items: &[T], range: DateRange, date: F) -> Vec<T>
where
    T: Clone,
    F: Fn(&T) -> NaiveDate,
{
    let from = items.partition_point(|item| date(item) < range.start());
    let to = items.partition_point(|item| date(item) <= range.end());
    items[from..to.max(from)].to_vec()
}

#[async_trait]
impl LogStore for InMemoryLogStore {
    async fn list_sessions(&self, range: DateRange) -> AppResult<Vec<WorkoutSession>> {
        let sessions = slice_in_range(&self.sessions, range, |s| s.date);
        debug!(
            start = %range.start(),
            end = %range.end(),
            count = sessions.len(),
            "Listed sessions"
        );
        Ok(sessions)
    }

    async fn list_nutrition_entries(&self, range: DateRange) -> AppResult<Vec<NutritionEntry>> {
        let entries = slice_in_range(&self.nutrition, range, |e| e.date);
        debug!(
            start = %range.start(),
            end = %range.end(),
            count = entries.len(),
            "Listed nutrition entries"
        );
        Ok(entries)
    }

    async fn list_daily_logs(&self, range: DateRange) -> AppResult<Vec<DailyLog>> {
        let logs = slice_in_range(&self.daily_logs, range, |l| l.date);
        debug!(
            start = %range.start(),
            end = %range.end(),
            count = logs.len(),
            "Listed daily logs"
        );
        Ok(logs)
    }
}
