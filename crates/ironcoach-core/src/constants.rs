// ABOUTME: Domain constants for training analytics grouped by concern
// ABOUTME: Rating bounds, calendar sizes, and profile scheduling limits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Pure data constants grouped into logical domains. Tunable analytics
//! thresholds live in the intelligence crate's configuration instead.

/// Subjective session rating scale shared by fatigue and performance
pub mod ratings {
    /// Lowest valid rating (fresh / poor)
    pub const MIN_RATING: u8 = 1;
    /// Highest valid rating (exhausted / excellent)
    pub const MAX_RATING: u8 = 5;
}

/// Calendar sizes used for scheduling math
pub mod calendar {
    /// Days in a training week
    pub const DAYS_PER_WEEK: i64 = 7;
    /// Length of a weekly report period
    pub const WEEKLY_PERIOD_DAYS: i64 = 7;
    /// Length of a monthly report period
    pub const MONTHLY_PERIOD_DAYS: i64 = 30;
}

/// Limits on the onboarding profile
pub mod profile {
    /// Fewest training days a profile may request per week
    pub const MIN_DAYS_AVAILABLE: u8 = 1;
    /// Most training days a profile may request per week
    pub const MAX_DAYS_AVAILABLE: u8 = 7;
}
