// ABOUTME: Date argument parsing for ironcoach-cli
// ABOUTME: Accepts ISO calendar dates and the relative keywords today and yesterday
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{Days, NaiveDate, Utc};

/// Parse `YYYY-MM-DD`, `today` or `yesterday`
pub fn parse_date(value: &str) -> Result<NaiveDate, String> {
    let today = Utc::now().date_naive();
    match value.trim() {
        "today" => Ok(today),
        "yesterday" => today
            .checked_sub_days(Days::new(1))
            .ok_or_else(|| "date out of range".to_owned()),
        other => NaiveDate::parse_from_str(other, "%Y-%m-%d")
            .map_err(|e| format!("expected YYYY-MM-DD, got '{other}': {e}")),
    }
}
