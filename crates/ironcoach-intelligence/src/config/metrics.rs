// ABOUTME: Metric extractor configuration (trend windows, weakest-group count, weekly window)
// ABOUTME: Window sizes are calendar days ending at the report range end
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use ironcoach_core::constants::calendar::DAYS_PER_WEEK;
use serde::{Deserialize, Serialize};

/// Metric extractor configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetricsConfig {
    /// Days of fatigue history kept in the fatigue trend
    pub fatigue_window_days: i64,
    /// Days of performance history kept in the performance trend
    pub performance_window_days: i64,
    /// How many under-trained muscle groups to report
    pub weakest_group_count: usize,
    /// Window length for weekly aggregates (consistency, frequency charts)
    pub weekly_window_days: i64,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            fatigue_window_days: 7,
            performance_window_days: 30,
            weakest_group_count: 3,
            weekly_window_days: DAYS_PER_WEEK,
        }
    }
}
