// ABOUTME: Per-muscle-group training volume with weakest and untrained group detection
// ABOUTME: Volume is completed sets; scheduled groups with no volume are reported as split gaps
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::logs::TrainingLogs;
use ironcoach_core::models::WorkoutPlan;
use ironcoach_core::DateRange;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Muscle group balance over a range
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MuscleBalance {
    /// Completed sets per muscle group, including zero-volume groups that were logged
    pub volume: BTreeMap<String, u32>,
    /// Lowest-volume groups among those with nonzero volume, weakest first
    pub weakest: Vec<String>,
    /// Scheduled or logged groups that received no completed sets, by name
    pub untrained: Vec<String>,
}

impl MuscleBalance {
    /// Analyse the sessions in `range`
    ///
    /// A range without sessions yields an empty balance, so a week off is
    /// never reported as a split gap.
    #[must_use]
    pub fn analyze(
        logs: &TrainingLogs<'_>,
        range: DateRange,
        plan: Option<&WorkoutPlan>,
        weakest_count: usize,
    ) -> Self {
        if logs.session_count(range) == 0 {
            return Self::default();
        }
        let volume = muscle_group_volume(logs, range);
        let weakest = weakest_groups(&volume, weakest_count);
        let untrained = untrained_groups(&volume, plan);
        Self {
            volume,
            weakest,
            untrained,
        }
    }

    /// The single weakest group, if any group was trained
    #[must_use]
    pub fn weakest_group(&self) -> Option<&str> {
        self.weakest.first().map(String::as_str)
    }

    /// Group with the most completed sets; ties go to the name sorting first
    #[must_use]
    pub fn strongest_group(&self) -> Option<&str> {
        self.volume
            .iter()
            .filter(|(_, sets)| **sets > 0)
            .max_by(|(a_name, a), (b_name, b)| a.cmp(b).then_with(|| b_name.cmp(a_name)))
            .map(|(name, _)| name.as_str())
    }
}

/// Completed sets per (trimmed, non-empty) muscle group over sessions in `range`
#[must_use]
pub fn muscle_group_volume(logs: &TrainingLogs<'_>, range: DateRange) -> BTreeMap<String, u32> {
    let mut volume = BTreeMap::new();
    for exercise in logs
        .sessions_in(range)
        .flat_map(|session| session.exercises.iter())
    {
        let group = exercise.muscle_group.trim();
        if group.is_empty() {
            continue;
        }
        *volume.entry(group.to_owned()).or_insert(0) += exercise.completed_sets();
    }
    volume
}

/// Bottom `k` groups by volume, ascending, ties broken by name
#[must_use]
pub fn weakest_groups(volume: &BTreeMap<String, u32>, k: usize) -> Vec<String> {
    let mut trained: Vec<(&String, u32)> = volume
        .iter()
        .filter(|(_, sets)| **sets > 0)
        .map(|(name, sets)| (name, *sets))
        .collect();
    // BTreeMap iteration is name-ordered, so a stable sort keeps name as tie-break
    trained.sort_by_key(|(_, sets)| *sets);
    trained
        .into_iter()
        .take(k)
        .map(|(name, _)| name.clone())
        .collect()
}

/// Groups scheduled in the plan or logged without completed sets that received no volume
#[must_use]
pub fn untrained_groups(volume: &BTreeMap<String, u32>, plan: Option<&WorkoutPlan>) -> Vec<String> {
    let mut candidates: BTreeSet<&str> = volume
        .iter()
        .filter(|(_, sets)| **sets == 0)
        .map(|(name, _)| name.as_str())
        .collect();
    if let Some(plan) = plan {
        candidates.extend(plan.scheduled_muscle_groups());
    }
    candidates
        .into_iter()
        .filter(|group| volume.get(*group).copied().unwrap_or(0) == 0)
        .map(str::to_owned)
        .collect()
}
