// ABOUTME: Nutrition log entries and daily macro targets
// ABOUTME: One entry per logged meal with calories and macronutrients in grams
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single logged meal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionEntry {
    /// Unique entry id
    pub id: String,
    /// Day the meal was eaten
    pub date: NaiveDate,
    /// Meal label (Breakfast, Lunch, Snack, ...)
    pub meal: String,
    /// Energy in kcal
    #[serde(default)]
    pub calories: f64,
    /// Protein in grams
    #[serde(default)]
    pub protein: f64,
    /// Carbohydrates in grams
    #[serde(default)]
    pub carbs: f64,
    /// Fats in grams
    #[serde(default)]
    pub fats: f64,
    /// Free-text food description
    #[serde(default)]
    pub food: String,
}

impl NutritionEntry {
    /// Calories with negative values treated as zero
    #[must_use]
    pub fn calories_or_zero(&self) -> f64 {
        self.calories.max(0.0)
    }

    /// Protein with negative values treated as zero
    #[must_use]
    pub fn protein_or_zero(&self) -> f64 {
        self.protein.max(0.0)
    }
}

/// Daily macro targets chosen during onboarding
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroGoals {
    /// Daily kcal target
    pub calories: f64,
    /// Daily protein target in grams
    pub protein: f64,
    /// Daily carbohydrate target in grams
    pub carbs: f64,
    /// Daily fat target in grams
    pub fats: f64,
}
