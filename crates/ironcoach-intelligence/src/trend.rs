// ABOUTME: Trend classifier labelling the direction of change between two values or series
// ABOUTME: Uses relative change with a symmetric deadband; undefined baselines classify as stable
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Trend classification
//!
//! `relative = (current - previous) / max(|previous|, epsilon)`. A relative
//! change of at least `+deadband` is improving, at most `-deadband` declining,
//! anything between is stable. Series are summarised by their mean before
//! comparison and an empty series has no mean.

use crate::config::TrendConfig;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Direction of a metric between two periods
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    /// Value rose past the deadband
    Improving,
    /// Value fell past the deadband
    Declining,
    /// Change within the deadband, or no baseline
    Stable,
}

impl TrendDirection {
    /// Lowercase label
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Improving => "improving",
            Self::Declining => "declining",
            Self::Stable => "stable",
        }
    }
}

impl fmt::Display for TrendDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Arithmetic mean, `None` for an empty slice
#[must_use]
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Classifies directional change with a relative deadband
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrendClassifier {
    deadband: f64,
    epsilon: f64,
}

impl TrendClassifier {
    /// Classifier with explicit parameters
    #[must_use]
    pub const fn new(deadband: f64, epsilon: f64) -> Self {
        Self { deadband, epsilon }
    }

    /// Classifier configured from [`TrendConfig`]
    #[must_use]
    pub const fn from_config(config: &TrendConfig) -> Self {
        Self::new(config.deadband, config.epsilon)
    }

    /// Relative change from `previous` to `current`
    ///
    /// `None` when either value is missing or not finite.
    #[must_use]
    pub fn relative_change(&self, current: Option<f64>, previous: Option<f64>) -> Option<f64> {
        let (current, previous) = (current?, previous?);
        if !current.is_finite() || !previous.is_finite() {
            return None;
        }
        Some((current - previous) / previous.abs().max(self.epsilon))
    }

    /// Classify two scalar summaries
    #[must_use]
    pub fn classify(&self, current: Option<f64>, previous: Option<f64>) -> TrendDirection {
        match self.relative_change(current, previous) {
            Some(change) if change >= self.deadband => TrendDirection::Improving,
            Some(change) if change <= -self.deadband => TrendDirection::Declining,
            _ => TrendDirection::Stable,
        }
    }

    /// Classify two series by their means
    #[must_use]
    pub fn classify_series(&self, current: &[f64], previous: &[f64]) -> TrendDirection {
        self.classify(mean(current), mean(previous))
    }

    /// Classify a chronological series by comparing its recent half to its older half
    ///
    /// The older half receives `len / 2` values, so a single value has no
    /// baseline and is stable.
    #[must_use]
    pub fn classify_halves(&self, series: &[f64]) -> TrendDirection {
        let (older, recent) = series.split_at(series.len() / 2);
        self.classify_series(recent, older)
    }
}

impl Default for TrendClassifier {
    fn default() -> Self {
        Self::from_config(&TrendConfig::default())
    }
}
