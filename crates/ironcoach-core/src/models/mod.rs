// ABOUTME: Core data models for logged training, nutrition, and wellness data
// ABOUTME: Re-exports WorkoutSession, NutritionEntry, DailyLog, UserProfile and WorkoutPlan
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! Records owned by the log store and the onboarding collaborator. The
//! analytics engine only ever reads them.
//!
//! ## Design Principles
//!
//! - **Wire compatible**: camelCase field names match the snapshots the app persists
//! - **Tolerant**: malformed optional data deserializes with defaults instead of failing
//! - **Read-only**: derived values are computed by helpers, never stored back

mod nutrition;
mod plan;
mod profile;
mod wellness;
mod workout;

pub use nutrition::{MacroGoals, NutritionEntry};
pub use plan::{PlannedExercise, WorkoutDay, WorkoutPlan};
pub use profile::{
    DietType, Equipment, Experience, Gender, Goal, SplitPreference, UserProfile, WeightSnapshot,
};
pub use wellness::{DailyLog, Mood};
pub use workout::{CompletedExercise, WorkoutSession, WorkoutSessionBuilder};
