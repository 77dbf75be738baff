// ABOUTME: Trend classifier configuration (relative-change deadband and zero guard)
// ABOUTME: Changes inside the deadband classify as stable
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Trend classification configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrendConfig {
    /// Relative change (fraction) that must be exceeded to leave `stable`
    pub deadband: f64,
    /// Lower bound on the denominator when the previous value is near zero
    pub epsilon: f64,
}

impl Default for TrendConfig {
    fn default() -> Self {
        Self {
            deadband: 0.05,
            epsilon: 1e-9,
        }
    }
}
