// ABOUTME: Read-only log store abstraction consumed by the analytics service
// ABOUTME: Defines the async LogStore trait and the persisted LogSnapshot document
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Log Store
//!
//! The analytics engine never talks to storage. The service fetches the three
//! collections for a range through [`LogStore`] once, then hands the
//! resulting snapshot to the pure engine.

mod memory;
mod snapshot;

pub use memory::InMemoryLogStore;
pub use snapshot::JsonSnapshotLogStore;

use async_trait::async_trait;
use ironcoach_core::models::{DailyLog, NutritionEntry, UserProfile, WorkoutPlan, WorkoutSession};
use ironcoach_core::{AppResult, DateRange};
use serde::{Deserialize, Serialize};

/// Read access to a user's append-only log collections
///
/// Every method returns the records dated inside `range`, ordered by date
/// ascending. Records with equal dates keep their stored order.
#[async_trait]
pub trait LogStore: Send + Sync {
    /// Completed workout sessions in `range`
    async fn list_sessions(&self, range: DateRange) -> AppResult<Vec<WorkoutSession>>;

    /// Logged meals in `range`
    async fn list_nutrition_entries(&self, range: DateRange) -> AppResult<Vec<NutritionEntry>>;

    /// Daily wellness check-ins in `range`
    async fn list_daily_logs(&self, range: DateRange) -> AppResult<Vec<DailyLog>>;
}

/// Everything the app persists for one user, as written to disk
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogSnapshot {
    /// Onboarding profile
    pub profile: UserProfile,
    /// Generated plan, absent before the first generation
    #[serde(default)]
    pub plan: Option<WorkoutPlan>,
    /// Workout history
    #[serde(default)]
    pub sessions: Vec<WorkoutSession>,
    /// Meal log
    #[serde(default)]
    pub nutrition: Vec<NutritionEntry>,
    /// Daily wellness log
    #[serde(default)]
    pub daily_logs: Vec<DailyLog>,
}

impl LogSnapshot {
    /// Snapshot with a profile and empty logs
    #[must_use]
    pub const fn new(profile: UserProfile) -> Self {
        Self {
            profile,
            plan: None,
            sessions: Vec::new(),
            nutrition: Vec::new(),
            daily_logs: Vec::new(),
        }
    }

    /// Attach a workout plan
    #[must_use]
    pub fn with_plan(mut self, plan: WorkoutPlan) -> Self {
        self.plan = Some(plan);
        self
    }

    /// Sort every collection by date, keeping the relative order of equal dates
    pub fn sort_by_date(&mut self) {
        self.sessions.sort_by_key(|session| session.date);
        self.nutrition.sort_by_key(|entry| entry.date);
        self.daily_logs.sort_by_key(|log| log.date);
    }

    /// Smallest range covering every dated record, `None` when all logs are empty
    #[must_use]
    pub fn covered_range(&self) -> Option<DateRange> {
        let dates = self
            .sessions
            .iter()
            .map(|session| session.date)
            .chain(self.nutrition.iter().map(|entry| entry.date))
            .chain(self.daily_logs.iter().map(|log| log.date));

        let (first, last) = dates.fold(None, |acc, date| match acc {
            None => Some((date, date)),
            Some((lo, hi)) => Some((date.min(lo), date.max(hi))),
        })?;
        DateRange::new(first, last).ok()
    }
}
