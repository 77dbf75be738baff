// ABOUTME: Completed workout session and exercise models with defensive accessors
// ABOUTME: Handles reps/sets mismatches and out-of-range ratings without failing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::ratings::{MAX_RATING, MIN_RATING};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One exercise as actually performed within a session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletedExercise {
    /// Exercise name
    pub name: String,
    /// Muscle group the exercise is attributed to
    pub muscle_group: String,
    /// Target number of sets
    pub sets: u32,
    /// Reps performed, one entry per set
    #[serde(default)]
    pub reps: Vec<u32>,
    /// Load per set in kilograms
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<Vec<f64>>,
    /// Free-text notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl CompletedExercise {
    /// Create an exercise with one reps entry per set
    pub fn new(
        name: impl Into<String>,
        muscle_group: impl Into<String>,
        reps: Vec<u32>,
    ) -> Self {
        Self {
            name: name.into(),
            muscle_group: muscle_group.into(),
            sets: u32::try_from(reps.len()).unwrap_or(u32::MAX),
            reps,
            weight: None,
            notes: None,
        }
    }

    /// Attach per-set loads
    #[must_use]
    pub fn with_weight(mut self, weight: Vec<f64>) -> Self {
        self.weight = Some(weight);
        self
    }

    /// Sets that were actually recorded
    ///
    /// When the reps sequence disagrees with the target set count the shorter
    /// of the two is used, so one bad record cannot inflate volume.
    #[must_use]
    pub fn completed_sets(&self) -> u32 {
        let recorded = u32::try_from(self.reps.len()).unwrap_or(u32::MAX);
        self.sets.min(recorded)
    }

    /// Tonnage (reps x kg) over sets that carry both reps and a load
    #[must_use]
    pub fn tonnage_kg(&self) -> f64 {
        let Some(weight) = &self.weight else {
            return 0.0;
        };
        self.reps
            .iter()
            .take(self.completed_sets() as usize)
            .zip(weight)
            .map(|(reps, &kg)| f64::from(*reps) * kg.max(0.0))
            .sum()
    }
}

/// A logged training session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutSession {
    /// Unique session id
    pub id: String,
    /// Calendar day of the session
    pub date: NaiveDate,
    /// Plan day name (e.g. "Push A")
    pub day_name: String,
    /// Exercises in the order performed
    #[serde(default)]
    pub exercises: Vec<CompletedExercise>,
    /// Duration in minutes
    #[serde(default)]
    pub duration: u32,
    /// Optional notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Post-session fatigue, 1 = fresh, 5 = exhausted
    pub fatigue_level: u8,
    /// Self-rated performance, 1 = poor, 5 = excellent
    pub performance_rating: u8,
}

impl WorkoutSession {
    /// Fatigue clamped into the valid rating scale
    #[must_use]
    pub fn fatigue(&self) -> f64 {
        f64::from(self.fatigue_level.clamp(MIN_RATING, MAX_RATING))
    }

    /// Performance clamped into the valid rating scale
    #[must_use]
    pub fn performance(&self) -> f64 {
        f64::from(self.performance_rating.clamp(MIN_RATING, MAX_RATING))
    }

    /// Tonnage summed over every exercise
    #[must_use]
    pub fn tonnage_kg(&self) -> f64 {
        self.exercises.iter().map(CompletedExercise::tonnage_kg).sum()
    }
}

/// Builder for [`WorkoutSession`], mostly used by fixtures and seed tools
#[derive(Debug, Clone)]
pub struct WorkoutSessionBuilder {
    session: WorkoutSession,
}

impl WorkoutSessionBuilder {
    /// Start a session with neutral ratings and no exercises
    pub fn new(id: impl Into<String>, date: NaiveDate, day_name: impl Into<String>) -> Self {
        Self {
            session: WorkoutSession {
                id: id.into(),
                date,
                day_name: day_name.into(),
                exercises: Vec::new(),
                duration: 0,
                notes: None,
                fatigue_level: 3,
                performance_rating: 3,
            },
        }
    }

    /// Set fatigue level
    #[must_use]
    pub const fn fatigue(mut self, level: u8) -> Self {
        self.session.fatigue_level = level;
        self
    }

    /// Set performance rating
    #[must_use]
    pub const fn performance(mut self, rating: u8) -> Self {
        self.session.performance_rating = rating;
        self
    }

    /// Set duration in minutes
    #[must_use]
    pub const fn duration(mut self, minutes: u32) -> Self {
        self.session.duration = minutes;
        self
    }

    /// Append an exercise
    #[must_use]
    pub fn exercise(mut self, exercise: CompletedExercise) -> Self {
        self.session.exercises.push(exercise);
        self
    }

    /// Set notes
    #[must_use]
    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.session.notes = Some(notes.into());
        self
    }

    /// Finish building
    #[must_use]
    pub fn build(self) -> WorkoutSession {
        self.session
    }
}
