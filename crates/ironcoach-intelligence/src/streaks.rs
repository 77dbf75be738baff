// ABOUTME: Training streak calculation over distinct session dates with a schedule-aware gap
// ABOUTME: A streak survives gaps up to the cadence implied by weekly training days
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use ironcoach_core::constants::calendar::DAYS_PER_WEEK;
use ironcoach_core::constants::profile::{MAX_DAYS_AVAILABLE, MIN_DAYS_AVAILABLE};
use std::collections::BTreeSet;

/// Splits session dates into streaks
///
/// Two consecutive distinct dates belong to the same streak when the gap
/// between them is strictly below `gap_threshold` days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreakCalculator {
    gap_threshold: i64,
}

impl StreakCalculator {
    /// Calculator with an explicit gap threshold (minimum 1 day)
    #[must_use]
    pub fn with_gap_threshold(gap_threshold: i64) -> Self {
        Self {
            gap_threshold: gap_threshold.max(1),
        }
    }

    /// Calculator for someone training `days_available` days per week
    ///
    /// The cadence is `ceil(7 / days)` days and the threshold one more, so a
    /// daily trainee must not skip a day while a twice-weekly trainee may
    /// leave four days between sessions.
    #[must_use]
    pub fn for_days_available(days_available: u8) -> Self {
        let days = i64::from(days_available.clamp(MIN_DAYS_AVAILABLE, MAX_DAYS_AVAILABLE));
        let cadence = (DAYS_PER_WEEK + days - 1) / days;
        Self::with_gap_threshold(cadence + 1)
    }

    /// Gap, in days, at which a streak breaks
    #[must_use]
    pub const fn gap_threshold(&self) -> i64 {
        self.gap_threshold
    }

    /// Length of every streak, chronologically
    ///
    /// Input order does not matter and repeated dates count once.
    #[must_use]
    pub fn streaks<I>(&self, dates: I) -> Vec<u32>
    where
        I: IntoIterator<Item = NaiveDate>,
    {
        let distinct: BTreeSet<NaiveDate> = dates.into_iter().collect();
        let mut streaks = Vec::new();
        let mut previous: Option<NaiveDate> = None;
        let mut run = 0_u32;

        for date in distinct {
            match previous {
                Some(prev) if (date - prev).num_days() < self.gap_threshold => run += 1,
                Some(_) => {
                    streaks.push(run);
                    run = 1;
                }
                None => run = 1,
            }
            previous = Some(date);
        }
        if run > 0 {
            streaks.push(run);
        }
        streaks
    }

    /// Longest streak, zero without sessions
    #[must_use]
    pub fn best_streak<I>(&self, dates: I) -> u32
    where
        I: IntoIterator<Item = NaiveDate>,
    {
        self.streaks(dates).into_iter().max().unwrap_or(0)
    }
}
