// ABOUTME: Session-based metrics: consistency score, daily rating trends, best performing workout
// ABOUTME: Out-of-range ratings are clamped and same-day sessions averaged into one point
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::logs::TrainingLogs;
use chrono::NaiveDate;
use ironcoach_core::constants::calendar::DAYS_PER_WEEK;
use ironcoach_core::models::WorkoutSession;
use ironcoach_core::DateRange;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Scheduled vs completed sessions over a range
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsistencyMetrics {
    /// Sessions the profile's weekly availability implies for the range
    pub scheduled_sessions: u32,
    /// Sessions actually logged in the range
    pub completed_sessions: u32,
    /// Scheduled sessions not completed, never negative
    pub missed_sessions: u32,
    /// 100 x completed / scheduled, clamped into [0, 100]
    pub score: f64,
}

/// Sessions implied by `days_available` training days per week over `range_days`
#[must_use]
pub fn scheduled_sessions(days_available: u8, range_days: i64) -> u32 {
    let per_day = f64::from(days_available) / DAYS_PER_WEEK as f64;
    (per_day * range_days.max(0) as f64).round() as u32
}

/// Consistency of the sessions in `range` against the weekly schedule
#[must_use]
pub fn consistency(logs: &TrainingLogs<'_>, range: DateRange, days_available: u8) -> ConsistencyMetrics {
    let scheduled = scheduled_sessions(days_available, range.num_days());
    let completed = logs.session_count(range);
    let score = (100.0 * f64::from(completed) / f64::from(scheduled.max(1))).clamp(0.0, 100.0);

    ConsistencyMetrics {
        scheduled_sessions: scheduled,
        completed_sessions: completed,
        missed_sessions: scheduled.saturating_sub(completed),
        score,
    }
}

/// One value per session day in the last `window_days` days of `range`
///
/// The window never reaches before `range.start()`. Days without sessions
/// are omitted, not zero-filled.
#[must_use]
pub fn daily_rating_trend(
    logs: &TrainingLogs<'_>,
    range: DateRange,
    window_days: i64,
    rating: fn(&WorkoutSession) -> f64,
) -> Vec<f64> {
    let window = DateRange::ending_on(range.end(), window_days.min(range.num_days()));
    let mut by_day: BTreeMap<NaiveDate, (f64, u32)> = BTreeMap::new();
    for session in logs.sessions_in(window) {
        let day = by_day.entry(session.date).or_insert((0.0, 0));
        day.0 += rating(session);
        day.1 += 1;
    }
    by_day
        .into_values()
        .map(|(total, count)| total / f64::from(count))
        .collect()
}

/// Mean clamped performance rating over sessions in `range`
#[must_use]
pub fn mean_performance(logs: &TrainingLogs<'_>, range: DateRange) -> Option<f64> {
    let (total, count) = logs
        .sessions_in(range)
        .fold((0.0, 0_u32), |(total, count), session| {
            (total + session.performance(), count + 1)
        });
    (count > 0).then(|| total / f64::from(count))
}

#[derive(Debug, Clone, Copy)]
struct DayNameStats {
    total: f64,
    count: u32,
    latest: NaiveDate,
}

impl DayNameStats {
    fn mean(&self) -> f64 {
        self.total / f64::from(self.count.max(1))
    }
}

/// Plan day with the highest mean performance rating in `range`
///
/// Ties go to the day trained most recently, then to the name sorting first.
#[must_use]
pub fn best_performing_workout(logs: &TrainingLogs<'_>, range: DateRange) -> Option<String> {
    let mut stats: BTreeMap<&str, DayNameStats> = BTreeMap::new();
    for session in logs.sessions_in(range) {
        let entry = stats.entry(session.day_name.as_str()).or_insert(DayNameStats {
            total: 0.0,
            count: 0,
            latest: session.date,
        });
        entry.total += session.performance();
        entry.count += 1;
        entry.latest = entry.latest.max(session.date);
    }

    stats
        .into_iter()
        .max_by(|(a_name, a), (b_name, b)| {
            a.mean()
                .total_cmp(&b.mean())
                .then(a.latest.cmp(&b.latest))
                .then_with(|| b_name.cmp(a_name))
        })
        .map(|(name, _)| name.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ironcoach_core::models::WorkoutSessionBuilder;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, d).unwrap()
    }

    fn session(id: &str, day: u32, name: &str, fatigue: u8, performance: u8) -> WorkoutSession {
        WorkoutSessionBuilder::new(id, date(day), name)
            .fatigue(fatigue)
            .performance(performance)
            .build()
    }

    #[test]
    fn test_consistency_three_of_four() {
        let sessions = vec![
            session("a", 2, "Upper", 5, 3),
            session("b", 4, "Lower", 4, 3),
            session("c", 6, "Upper", 5, 3),
        ];
        let logs = TrainingLogs::new(&sessions, &[], &[]);
        let range = DateRange::new(date(1), date(7)).unwrap();

        let metrics = consistency(&logs, range, 4);
        assert_eq!(metrics.scheduled_sessions, 4);
        assert_eq!(metrics.missed_sessions, 1);
        assert!((metrics.score - 75.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_consistency_is_capped_at_100() {
        let sessions: Vec<_> = (1..=7)
            .map(|d| session(&d.to_string(), d, "Full", 3, 3))
            .collect();
        let logs = TrainingLogs::new(&sessions, &[], &[]);
        let range = DateRange::new(date(1), date(7)).unwrap();

        let metrics = consistency(&logs, range, 2);
        assert!((metrics.score - 100.0).abs() < f64::EPSILON);
        assert_eq!(metrics.missed_sessions, 0);
    }

    #[test]
    fn test_daily_trend_averages_same_day_and_skips_gaps() {
        let sessions = vec![
            session("a", 10, "Push", 2, 3),
            session("b", 10, "Pull", 4, 3),
            session("c", 12, "Legs", 5, 3),
            session("d", 1, "Legs", 1, 3),
        ];
        let logs = TrainingLogs::new(&sessions, &[], &[]);

        let fortnight = DateRange::new(date(1), date(14)).unwrap();

        let trend = daily_rating_trend(&logs, fortnight, 7, WorkoutSession::fatigue);
        assert_eq!(trend, vec![3.0, 5.0]);
    }

    #[test]
    fn test_daily_trend_window_is_clipped_to_range() {
        let sessions = vec![
            session("a", 2, "Push", 4, 2),
            session("b", 5, "Pull", 4, 3),
            session("c", 9, "Legs", 2, 5),
        ];
        let logs = TrainingLogs::new(&sessions, &[], &[]);
        let second_week = DateRange::new(date(8), date(14)).unwrap();
        let quiet_days = DateRange::new(date(10), date(14)).unwrap();

        let trend = daily_rating_trend(&logs, second_week, 30, WorkoutSession::performance);
        assert_eq!(trend, vec![5.0]);
        assert!(daily_rating_trend(&logs, quiet_days, 30, WorkoutSession::performance).is_empty());
    }

    #[test]
    fn test_best_workout_tie_prefers_most_recent() {
        let sessions = vec![
            session("a", 2, "Push", 3, 4),
            session("b", 5, "Pull", 3, 4),
            session("c", 3, "Legs", 3, 2),
        ];
        let logs = TrainingLogs::new(&sessions, &[], &[]);
        let range = DateRange::new(date(1), date(7)).unwrap();

        assert_eq!(
            best_performing_workout(&logs, range).as_deref(),
            Some("Pull")
        );
    }

    #[test]
    fn test_best_workout_none_without_sessions() {
        let logs = TrainingLogs::default();
        let range = DateRange::new(date(1), date(7)).unwrap();
        assert!(best_performing_workout(&logs, range).is_none());
        assert!(mean_performance(&logs, range).is_none());
    }
}
