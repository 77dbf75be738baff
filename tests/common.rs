// ABOUTME: Shared test utilities and fixture builders for integration tests
// ABOUTME: Provides quiet logging plus profile, session, meal, daily log and plan fixtures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `ironcoach`

use chrono::NaiveDate;
use ironcoach::{InMemoryLogStore, LogSnapshot};
use ironcoach_core::models::{
    CompletedExercise, DailyLog, DietType, Equipment, Experience, Gender, Goal, Mood,
    NutritionEntry, PlannedExercise, SplitPreference, UserProfile, WeightSnapshot, WorkoutDay,
    WorkoutPlan, WorkoutSession, WorkoutSessionBuilder,
};
use std::env;
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Day of January 2025
pub fn jan(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, day).unwrap()
}

/// Profile training `days_available` days a week on an upper/lower split
pub fn test_profile(days_available: u8) -> UserProfile {
    UserProfile {
        name: "Jordan".to_owned(),
        age: 31,
        weight: 84.0,
        height: 178.0,
        gender: Gender::Other,
        experience: Experience::Intermediate,
        days_available,
        goal: Goal::Cutting,
        equipment: Equipment::FullGym,
        diet_type: DietType::Any,
        split_preference: SplitPreference::UpperLower,
        injuries: String::new(),
        completed_onboarding: true,
        weight_history: Vec::new(),
        macro_goals: None,
    }
}

/// Same profile with weigh-ins
pub fn with_weights(mut profile: UserProfile, weights: &[(NaiveDate, f64)]) -> UserProfile {
    profile.weight_history = weights
        .iter()
        .map(|&(date, weight_kg)| WeightSnapshot { date, weight_kg })
        .collect();
    profile
}

/// Session with one three-set exercise for `muscle_group`
pub fn session_with(
    date: NaiveDate,
    fatigue: u8,
    performance: u8,
    muscle_group: &str,
) -> WorkoutSession {
    let exercise =
        CompletedExercise::new(format!("{muscle_group} Press"), muscle_group, vec![8, 8, 8])
            .with_weight(vec![60.0, 60.0, 60.0]);
    WorkoutSessionBuilder::new(format!("session-{date}-{muscle_group}"), date, "Upper A")
        .fatigue(fatigue)
        .performance(performance)
        .duration(60)
        .exercise(exercise)
        .build()
}

/// Chest session with the given ratings
pub fn session(date: NaiveDate, fatigue: u8, performance: u8) -> WorkoutSession {
    session_with(date, fatigue, performance, "Chest")
}

/// Meal with the given calories and protein
pub fn meal(date: NaiveDate, calories: f64, protein: f64) -> NutritionEntry {
    NutritionEntry {
        id: format!("meal-{date}-{calories}"),
        date,
        meal: "Lunch".to_owned(),
        calories,
        protein,
        carbs: 0.0,
        fats: 0.0,
        food: "Chicken and rice".to_owned(),
    }
}

/// Daily check-in
pub fn daily_log(
    date: NaiveDate,
    sleep_hours: f64,
    mood: Mood,
    workout_completed: bool,
) -> DailyLog {
    DailyLog {
        date,
        water_intake: 2500.0,
        sleep_hours,
        mood,
        workout_completed,
    }
}

/// Plan scheduling one exercise per muscle group
pub fn test_plan(groups: &[&str]) -> WorkoutPlan {
    let exercises = groups
        .iter()
        .map(|group| PlannedExercise {
            name: format!("{group} Movement"),
            sets: 3,
            reps: "8-12".to_owned(),
            rest: "90s".to_owned(),
            muscle_group: (*group).to_owned(),
            notes: None,
            recommended_weight: None,
            image_url: None,
        })
        .collect();
    WorkoutPlan {
        split_name: "Upper/Lower".to_owned(),
        description: "Four-day upper/lower".to_owned(),
        schedule: vec![WorkoutDay {
            day_name: "Upper A".to_owned(),
            focus: "Upper body".to_owned(),
            exercises,
        }],
        generated_at: 1_735_689_600_000,
    }
}

/// Two weeks of logs: two sessions in Jan 1-7, four in Jan 8-14
pub fn two_week_snapshot() -> LogSnapshot {
    let mut snapshot = LogSnapshot::new(with_weights(
        test_profile(4),
        &[(jan(1), 85.0), (jan(7), 84.4), (jan(14), 83.8)],
    ))
    .with_plan(test_plan(&["Chest", "Back", "Legs"]));

    snapshot.sessions = vec![
        session(jan(2), 3, 3),
        session_with(jan(5), 3, 3, "Back"),
        session(jan(8), 3, 4),
        session_with(jan(10), 3, 4, "Back"),
        session(jan(12), 2, 4),
        session_with(jan(14), 3, 5, "Legs"),
    ];
    snapshot.nutrition = (1..=14)
        .map(|day| meal(jan(day), 2200.0, 150.0))
        .collect();
    snapshot.daily_logs = (1..=14)
        .map(|day| daily_log(jan(day), 7.5, Mood::Good, false))
        .collect();
    snapshot
}

/// In-memory store over a snapshot's logs
pub fn store_for(snapshot: &LogSnapshot) -> InMemoryLogStore {
    InMemoryLogStore::new(
        snapshot.sessions.clone(),
        snapshot.nutrition.clone(),
        snapshot.daily_logs.clone(),
    )
}
