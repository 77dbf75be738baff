// ABOUTME: Inclusive calendar-day date ranges and weekly/monthly report periods
// ABOUTME: Validates range ordering and derives preceding, adjacent, and windowed ranges
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::calendar::{MONTHLY_PERIOD_DAYS, WEEKLY_PERIOD_DAYS};
use crate::errors::{InvalidRangeError, RangeViolation};
use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Report cadence tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportPeriod {
    /// Seven-day report
    Weekly,
    /// Thirty-day report
    Monthly,
}

impl ReportPeriod {
    /// Default number of days covered by this period
    #[must_use]
    pub const fn length_days(self) -> i64 {
        match self {
            Self::Weekly => WEEKLY_PERIOD_DAYS,
            Self::Monthly => MONTHLY_PERIOD_DAYS,
        }
    }

    /// Lowercase label used in reports
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
        }
    }
}

impl fmt::Display for ReportPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Contiguous, inclusive calendar-day range
///
/// Constructed only through [`DateRange::new`], so `start <= end` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Create a range covering `start..=end`
    ///
    /// # Errors
    ///
    /// Returns [`InvalidRangeError`] when `end` is earlier than `start`
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, InvalidRangeError> {
        if end < start {
            return Err(InvalidRangeError::new(
                start,
                end,
                RangeViolation::EndBeforeStart,
            ));
        }
        Ok(Self { start, end })
    }

    /// Range of `days` days ending on (and including) `end`
    ///
    /// A non-positive `days` yields the single day `end`.
    #[must_use]
    pub fn ending_on(end: NaiveDate, days: i64) -> Self {
        let back = u64::try_from(days.max(1) - 1).unwrap_or(0);
        let start = end.checked_sub_days(Days::new(back)).unwrap_or(end);
        Self { start, end }
    }

    /// Range of the given report period ending on `end`
    #[must_use]
    pub fn for_period(period: ReportPeriod, end: NaiveDate) -> Self {
        Self::ending_on(end, period.length_days())
    }

    /// First day of the range
    #[must_use]
    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    /// Last day of the range
    #[must_use]
    pub const fn end(&self) -> NaiveDate {
        self.end
    }

    /// Number of calendar days covered (always at least 1)
    #[must_use]
    pub fn num_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    /// Whether `date` falls inside the range
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Equal-length range ending the day before this one starts
    #[must_use]
    pub fn preceding(&self) -> Self {
        let len = u64::try_from(self.num_days()).unwrap_or(1);
        let end = self.start.pred_opt().unwrap_or(self.start);
        let start = self.start.checked_sub_days(Days::new(len)).unwrap_or(end);
        Self { start, end }
    }

    /// Smallest range covering both `self` and `other`
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        Self {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    /// Iterate over every day in the range in chronological order
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end;
        self.start.iter_days().take_while(move |day| *day <= end)
    }

    /// Split the range into consecutive windows of `window_days` days
    ///
    /// The final window is shorter when the range length is not a multiple.
    #[must_use]
    pub fn windows(&self, window_days: i64) -> Vec<Self> {
        let step = u64::try_from(window_days.max(1)).unwrap_or(1);
        let mut windows = Vec::new();
        let mut cursor = self.start;
        while cursor <= self.end {
            let window_end = cursor
                .checked_add_days(Days::new(step - 1))
                .map_or(self.end, |d| d.min(self.end));
            windows.push(Self {
                start: cursor,
                end: window_end,
            });
            match window_end.succ_opt() {
                Some(next) => cursor = next,
                None => break,
            }
        }
        windows
    }

    /// Validate that `self` (current) directly follows `previous` with equal length
    ///
    /// # Errors
    ///
    /// Returns [`InvalidRangeError`] describing the first violated condition:
    /// overlap, unequal length, or a gap / reversed order between the periods.
    pub fn ensure_follows(&self, previous: &Self) -> Result<(), InvalidRangeError> {
        if self.start <= previous.end && previous.start <= self.end {
            return Err(InvalidRangeError::new(
                self.start,
                self.end,
                RangeViolation::Overlapping,
            ));
        }
        if self.num_days() != previous.num_days() {
            return Err(InvalidRangeError::new(
                self.start,
                self.end,
                RangeViolation::UnequalLength,
            ));
        }
        if previous.end.succ_opt() != Some(self.start) {
            return Err(InvalidRangeError::new(
                self.start,
                self.end,
                RangeViolation::NotAdjacent,
            ));
        }
        Ok(())
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}

impl<'de> Deserialize<'de> for DateRange {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct RawRange {
            start: NaiveDate,
            end: NaiveDate,
        }

        let raw = RawRange::deserialize(deserializer)?;
        Self::new(raw.start, raw.end).map_err(serde::de::Error::custom)
    }
}
