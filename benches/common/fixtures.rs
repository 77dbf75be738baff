// ABOUTME: Benchmark fixtures generating realistic training, nutrition and wellness logs
// ABOUTME: Provides deterministic data generation for reproducible performance measurements
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Benchmark fixtures generating realistic training logs.
//!
//! Every generator is deterministic so runs are comparable.

use chrono::{Days, NaiveDate};
use ironcoach::LogSnapshot;
use ironcoach_core::models::{
    CompletedExercise, DailyLog, DietType, Equipment, Experience, Gender, Goal, Mood,
    NutritionEntry, SplitPreference, UserProfile, WeightSnapshot, WorkoutSessionBuilder,
};

const MUSCLE_GROUPS: [&str; 6] = ["Chest", "Back", "Legs", "Shoulders", "Arms", "Core"];

/// Predefined history lengths for benchmark scenarios
#[derive(Debug, Clone, Copy)]
pub enum HistoryLength {
    /// One month of logs
    Month,
    /// One quarter of logs
    Quarter,
    /// One year of logs
    Year,
}

impl HistoryLength {
    #[must_use]
    pub const fn days(self) -> u64 {
        match self {
            Self::Month => 30,
            Self::Quarter => 90,
            Self::Year => 365,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Month => "month",
            Self::Quarter => "quarter",
            Self::Year => "year",
        }
    }
}

/// Last day covered by every generated history
#[must_use]
pub fn history_end() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 12, 31).unwrap_or_default()
}

fn day(offset: u64) -> NaiveDate {
    history_end()
        .checked_sub_days(Days::new(offset))
        .unwrap_or_default()
}

fn bench_profile(days: u64) -> UserProfile {
    let weight_history = (0..days)
        .step_by(7)
        .map(|offset| WeightSnapshot {
            date: day(offset),
            weight_kg: 80.0 + offset as f64 * 0.02,
        })
        .rev()
        .collect();
    UserProfile {
        name: "Bench Athlete".to_owned(),
        age: 30,
        weight: 80.0,
        height: 180.0,
        gender: Gender::Male,
        experience: Experience::Intermediate,
        days_available: 4,
        goal: Goal::Cutting,
        equipment: Equipment::FullGym,
        diet_type: DietType::Any,
        split_preference: SplitPreference::PushPullLegs,
        injuries: String::new(),
        completed_onboarding: true,
        weight_history,
        macro_goals: None,
    }
}

/// Generate a snapshot with sessions on four of every seven days
#[allow(clippy::cast_possible_truncation)]
#[must_use]
pub fn generate_snapshot(length: HistoryLength) -> LogSnapshot {
    let days = length.days();
    let mut snapshot = LogSnapshot::new(bench_profile(days));

    for offset in (0..days).rev() {
        let date = day(offset);
        let index = offset as usize;

        if offset % 7 < 4 {
            let group = MUSCLE_GROUPS[index % MUSCLE_GROUPS.len()];
            let load = 40.0 + (index % 20) as f64 * 2.5;
            let exercise = CompletedExercise::new(format!("{group} Lift"), group, vec![10, 8, 6])
                .with_weight(vec![load, load + 5.0, load + 10.0]);
            snapshot.sessions.push(
                WorkoutSessionBuilder::new(format!("bench-{offset}"), date, group)
                    .fatigue(1 + (index % 5) as u8)
                    .performance(1 + ((index * 3) % 5) as u8)
                    .duration(45 + (index % 30) as u32)
                    .exercise(exercise)
                    .build(),
            );
        }

        for (meal, calories) in [("Breakfast", 500.0), ("Lunch", 800.0), ("Dinner", 900.0)] {
            snapshot.nutrition.push(NutritionEntry {
                id: format!("meal-{offset}-{meal}"),
                date,
                meal: meal.to_owned(),
                calories: calories + (index % 10) as f64 * 10.0,
                protein: 40.0 + (index % 15) as f64,
                carbs: 60.0,
                fats: 20.0,
                food: "Bench meal".to_owned(),
            });
        }

        snapshot.daily_logs.push(DailyLog {
            date,
            water_intake: 2000.0 + (index % 8) as f64 * 100.0,
            sleep_hours: 6.0 + (index % 4) as f64 * 0.5,
            mood: match index % 3 {
                0 => Mood::Good,
                1 => Mood::Average,
                _ => Mood::Bad,
            },
            workout_completed: offset % 7 < 4,
        });
    }

    snapshot
}
