// ABOUTME: Command modules for ironcoach-cli and the shared command context
// ABOUTME: The context holds the opened snapshot store, its profile and plan, and the service
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod analytics;
pub mod config;

use crate::OutputFormat;
use anyhow::Result;
use chrono::{NaiveDate, Utc};
use ironcoach::{AnalyticsConfig, AnalyticsService, DateRange, JsonSnapshotLogStore};
use ironcoach_core::models::{UserProfile, WorkoutPlan};
use std::sync::Arc;

/// Everything a command needs after startup
pub struct CliContext {
    pub service: AnalyticsService,
    pub profile: UserProfile,
    pub plan: Option<WorkoutPlan>,
    pub covered: Option<DateRange>,
    pub format: OutputFormat,
    pub pretty: bool,
}

impl CliContext {
    /// Open the snapshot and build the service over it
    pub async fn open(
        snapshot: &str,
        config: AnalyticsConfig,
        format: OutputFormat,
        pretty: bool,
    ) -> Result<Self> {
        let store = JsonSnapshotLogStore::open(snapshot).await?;
        let profile = store.profile().clone();
        let plan = store.plan().cloned();
        let covered = store.covered_range();
        Ok(Self {
            service: AnalyticsService::with_config(Arc::new(store), config),
            profile,
            plan,
            covered,
            format,
            pretty,
        })
    }

    /// Last logged day, or today for an empty snapshot
    pub fn default_end(&self) -> NaiveDate {
        self.covered
            .map_or_else(|| Utc::now().date_naive(), |range| range.end())
    }

    /// First logged day, or `end` for an empty snapshot
    pub fn default_start(&self, end: NaiveDate) -> NaiveDate {
        self.covered.map_or(end, |range| range.start().min(end))
    }
}
