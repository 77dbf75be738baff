// ABOUTME: Generated workout plan model (split, schedule of days, planned exercises)
// ABOUTME: Analytics only reads it to learn which muscle groups are scheduled
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Exercise prescription inside a plan day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlannedExercise {
    /// Exercise name
    pub name: String,
    /// Prescribed sets
    pub sets: u32,
    /// Prescribed reps, free-form ("8-12", "AMRAP")
    pub reps: String,
    /// Rest between sets in seconds, free-form
    pub rest: String,
    /// Target muscle group
    pub muscle_group: String,
    /// Coaching notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Suggested load ("60-70% 1RM", "20-25kg")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommended_weight: Option<String>,
    /// Demonstration image
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// One training day of a plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutDay {
    /// Day name, matches `WorkoutSession::day_name` when logged
    pub day_name: String,
    /// Focus description ("Chest & Triceps")
    pub focus: String,
    /// Planned exercises
    #[serde(default)]
    pub exercises: Vec<PlannedExercise>,
}

/// A full generated plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutPlan {
    /// Split label
    pub split_name: String,
    /// Plan overview
    #[serde(default)]
    pub description: String,
    /// Ordered training days
    #[serde(default)]
    pub schedule: Vec<WorkoutDay>,
    /// Generation time, epoch milliseconds
    #[serde(default)]
    pub generated_at: i64,
}

impl WorkoutPlan {
    /// Distinct muscle groups scheduled anywhere in the plan, sorted by name
    #[must_use]
    pub fn scheduled_muscle_groups(&self) -> BTreeSet<&str> {
        self.schedule
            .iter()
            .flat_map(|day| day.exercises.iter())
            .map(|exercise| exercise.muscle_group.trim())
            .filter(|group| !group.is_empty())
            .collect()
    }
}
