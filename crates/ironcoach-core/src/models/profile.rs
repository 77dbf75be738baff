// ABOUTME: Onboarding user profile with training preferences and body-weight history
// ABOUTME: Enum labels serialize to the exact strings the onboarding wizard stores
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::nutrition::MacroGoals;
use crate::constants::profile::{MAX_DAYS_AVAILABLE, MIN_DAYS_AVAILABLE};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Primary training goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Goal {
    /// Gain mass
    Bulking,
    /// Lose fat
    Cutting,
    /// Hold current composition
    Maintenance,
    /// Maximal strength
    #[serde(rename = "Strength & Power")]
    Strength,
    /// Sport performance
    #[serde(rename = "Athletic Performance")]
    Athletic,
}

/// Training experience level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Experience {
    /// Under a year of training
    Beginner,
    /// One to three years
    Intermediate,
    /// Several years of structured training
    Advanced,
    /// Competitive lifter
    Elite,
}

/// Self-reported gender
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    /// Male
    Male,
    /// Female
    Female,
    /// Other or undisclosed
    Other,
}

/// Available training equipment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Equipment {
    /// Commercial gym
    #[serde(rename = "Full Gym")]
    FullGym,
    /// Dumbbells only
    #[serde(rename = "Dumbbells Only")]
    DumbbellsOnly,
    /// Barbell and rack at home
    #[serde(rename = "Home Gym (Barbell + Rack)")]
    HomeGym,
    /// No equipment
    #[serde(rename = "Bodyweight Only")]
    Bodyweight,
}

/// Dietary pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DietType {
    /// No restriction
    #[serde(rename = "Anything")]
    Any,
    /// Vegetarian
    Vegetarian,
    /// Vegan
    Vegan,
    /// Ketogenic
    Keto,
    /// Paleo
    Paleo,
}

/// Preferred training split
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SplitPreference {
    /// Push / pull / legs rotation
    #[serde(rename = "Push/Pull/Legs")]
    PushPullLegs,
    /// Upper / lower rotation
    #[serde(rename = "Upper/Lower")]
    UpperLower,
    /// One body part per day
    #[serde(rename = "Body Part Split (Bro Split)")]
    BroSplit,
    /// Whole body every session
    #[serde(rename = "Full Body")]
    FullBody,
    /// Mixed strength and conditioning
    #[serde(rename = "Hybrid / Athlete")]
    Hybrid,
}

impl SplitPreference {
    /// Label shown to the user
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::PushPullLegs => "Push/Pull/Legs",
            Self::UpperLower => "Upper/Lower",
            Self::BroSplit => "Body Part Split (Bro Split)",
            Self::FullBody => "Full Body",
            Self::Hybrid => "Hybrid / Athlete",
        }
    }
}

impl fmt::Display for SplitPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Dated body-weight measurement
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeightSnapshot {
    /// Day of the weigh-in
    pub date: NaiveDate,
    /// Body weight in kilograms
    pub weight_kg: f64,
}

/// Profile captured by onboarding
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Display name
    pub name: String,
    /// Age in years
    pub age: u32,
    /// Current body weight in kg
    pub weight: f64,
    /// Height in cm
    pub height: f64,
    /// Gender
    pub gender: Gender,
    /// Experience level
    pub experience: Experience,
    /// Training days per week (1-7)
    pub days_available: u8,
    /// Training goal
    pub goal: Goal,
    /// Equipment access
    pub equipment: Equipment,
    /// Diet pattern
    pub diet_type: DietType,
    /// Preferred split
    pub split_preference: SplitPreference,
    /// Free-text injuries or limitations
    #[serde(default)]
    pub injuries: String,
    /// Whether onboarding finished
    #[serde(default)]
    pub completed_onboarding: bool,
    /// Weigh-ins, any order
    #[serde(default)]
    pub weight_history: Vec<WeightSnapshot>,
    /// Daily macro targets
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub macro_goals: Option<MacroGoals>,
}

impl UserProfile {
    /// Training days per week forced into 1..=7
    #[must_use]
    pub fn days_available_clamped(&self) -> u8 {
        self.days_available
            .clamp(MIN_DAYS_AVAILABLE, MAX_DAYS_AVAILABLE)
    }

    /// Weight of the snapshot closest to `date`
    ///
    /// Equidistant snapshots resolve to the earlier one. Without any history
    /// the profile's current weight is returned.
    #[must_use]
    pub fn weight_nearest(&self, date: NaiveDate) -> f64 {
        self.weight_history
            .iter()
            .min_by_key(|snapshot| ((snapshot.date - date).num_days().abs(), snapshot.date))
            .map_or(self.weight, |snapshot| snapshot.weight_kg)
    }
}
