// ABOUTME: Analytics configuration container for extractors, trends, recommendations and exports
// ABOUTME: Provides the global singleton, environment overrides, and unified validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Analytics Configuration Module
//!
//! Every threshold the engine uses is a named value here. Engine entry points
//! take an explicit `&AnalyticsConfig`; [`AnalyticsConfig::global`] exists for
//! callers that just want the process-wide configuration.
//!
//! # Module Structure
//!
//! - `metrics` - Trend windows and weakest-group count
//! - `trend` - Deadband and zero guard of the trend classifier
//! - `recommendation` - Rule thresholds, adjustment sizes, split table, templates
//! - `export` - Achievement table and insight templates of the progress exporter

pub mod error;
pub mod export;
pub mod metrics;
pub mod recommendation;
pub mod trend;

pub use error::ConfigError;
pub use export::{AchievementMetric, AchievementRule, ExportConfig, ExportMessages};
pub use metrics::MetricsConfig;
pub use recommendation::{
    RecommendationAdjustments, RecommendationConfig, RecommendationMessages,
    RecommendationThresholds, SplitDowngrade, SplitDowngradeTable,
};
pub use trend::TrendConfig;

use ironcoach_core::constants::ratings::{MAX_RATING, MIN_RATING};
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

/// Global configuration singleton
static ANALYTICS_CONFIG: OnceLock<AnalyticsConfig> = OnceLock::new();

/// Main analytics configuration container
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyticsConfig {
    /// Metric extractor windows and limits
    pub metrics: MetricsConfig,
    /// Trend classifier parameters
    pub trend: TrendConfig,
    /// Recommendation engine rules
    pub recommendation: RecommendationConfig,
    /// Progress exporter tables
    pub export: ExportConfig,
}

impl AnalyticsConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        ANALYTICS_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load analytics config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load configuration from defaults and environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a (possibly partial) JSON configuration document
    ///
    /// Absent fields keep their defaults. Environment overrides are not applied.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] on malformed JSON and the first violated
    /// constraint when validation fails
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(raw).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint
    pub fn validate(&self) -> Result<(), ConfigError> {
        let metrics = &self.metrics;
        if metrics.fatigue_window_days < 1
            || metrics.performance_window_days < 1
            || metrics.weekly_window_days < 1
        {
            return Err(ConfigError::ValueOutOfRange(
                "Metric windows must span at least one day",
            ));
        }
        if metrics.weakest_group_count == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "weakest_group_count must be at least 1",
            ));
        }

        if !(0.0..1.0).contains(&self.trend.deadband) {
            return Err(ConfigError::ValueOutOfRange(
                "Trend deadband must be in [0, 1)",
            ));
        }
        if self.trend.epsilon.is_nan() || self.trend.epsilon <= 0.0 {
            return Err(ConfigError::ValueOutOfRange("Trend epsilon must be > 0"));
        }

        self.validate_recommendation()?;
        self.validate_export()
    }

    fn validate_recommendation(&self) -> Result<(), ConfigError> {
        let thresholds = &self.recommendation.thresholds;
        let rating_scale = f64::from(MIN_RATING)..=f64::from(MAX_RATING);
        if !rating_scale.contains(&thresholds.low_fatigue)
            || !rating_scale.contains(&thresholds.high_fatigue)
        {
            return Err(ConfigError::ValueOutOfRange(
                "Fatigue thresholds must lie on the 1-5 rating scale",
            ));
        }
        if thresholds.low_fatigue >= thresholds.high_fatigue {
            return Err(ConfigError::InvalidRange(
                "low_fatigue must be < high_fatigue",
            ));
        }
        if !(0.0..=100.0).contains(&thresholds.low_consistency)
            || !(0.0..=100.0).contains(&thresholds.high_consistency)
        {
            return Err(ConfigError::ValueOutOfRange(
                "Consistency thresholds must be between 0 and 100",
            ));
        }
        if thresholds.low_consistency >= thresholds.high_consistency {
            return Err(ConfigError::InvalidRange(
                "low_consistency must be < high_consistency",
            ));
        }
        if thresholds.missed_sessions_for_split == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "missed_sessions_for_split must be at least 1",
            ));
        }

        let table = &self.recommendation.split_downgrades.0;
        if table.iter().any(|entry| entry.from == entry.to) {
            return Err(ConfigError::InvalidRange(
                "A split cannot downgrade to itself",
            ));
        }
        for (index, entry) in table.iter().enumerate() {
            if table[..index].iter().any(|prior| prior.from == entry.from) {
                return Err(ConfigError::InvalidRange(
                    "Split downgrade table lists a split twice",
                ));
            }
        }
        Ok(())
    }

    fn validate_export(&self) -> Result<(), ConfigError> {
        if self.export.achievements.is_empty() {
            return Err(ConfigError::MissingField("export.achievements"));
        }
        if self
            .export
            .achievements
            .iter()
            .any(|rule| rule.threshold.is_nan() || rule.threshold <= 0.0)
        {
            return Err(ConfigError::ValueOutOfRange(
                "Achievement thresholds must be positive",
            ));
        }
        if !(0.0..=24.0).contains(&self.export.min_sleep_hours) {
            return Err(ConfigError::ValueOutOfRange(
                "min_sleep_hours must be between 0 and 24",
            ));
        }
        if !(0.0..=1.0).contains(&self.export.protein_goal_tolerance) {
            return Err(ConfigError::ValueOutOfRange(
                "protein_goal_tolerance must be between 0 and 1",
            ));
        }
        Ok(())
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        // Metric windows
        Self::apply_env_var(
            "IRONCOACH_FATIGUE_WINDOW_DAYS",
            &mut self.metrics.fatigue_window_days,
        )?;
        Self::apply_env_var(
            "IRONCOACH_PERFORMANCE_WINDOW_DAYS",
            &mut self.metrics.performance_window_days,
        )?;
        Self::apply_env_var(
            "IRONCOACH_WEAKEST_GROUP_COUNT",
            &mut self.metrics.weakest_group_count,
        )?;

        // Trend classifier
        Self::apply_env_var("IRONCOACH_TREND_DEADBAND", &mut self.trend.deadband)?;

        // Recommendation thresholds
        let thresholds = &mut self.recommendation.thresholds;
        Self::apply_env_var(
            "IRONCOACH_HIGH_FATIGUE_THRESHOLD",
            &mut thresholds.high_fatigue,
        )?;
        Self::apply_env_var(
            "IRONCOACH_LOW_FATIGUE_THRESHOLD",
            &mut thresholds.low_fatigue,
        )?;
        Self::apply_env_var(
            "IRONCOACH_LOW_CONSISTENCY_THRESHOLD",
            &mut thresholds.low_consistency,
        )?;
        Self::apply_env_var(
            "IRONCOACH_HIGH_CONSISTENCY_THRESHOLD",
            &mut thresholds.high_consistency,
        )?;
        Self::apply_env_var(
            "IRONCOACH_SPLIT_MISSED_SESSIONS",
            &mut thresholds.missed_sessions_for_split,
        )?;

        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ironcoach_core::models::SplitPreference;
    use serial_test::serial;

    #[test]
    fn test_default_config_is_valid() {
        assert!(AnalyticsConfig::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_inverted_fatigue_thresholds() {
        let mut config = AnalyticsConfig::default();
        config.recommendation.thresholds.low_fatigue = 4.5;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidRange(_))
        ));
    }

    #[test]
    fn test_rejects_duplicate_split_entries() {
        let mut config = AnalyticsConfig::default();
        config.recommendation.split_downgrades.0.push(SplitDowngrade {
            from: SplitPreference::PushPullLegs,
            to: SplitPreference::FullBody,
        });
        assert!(config.validate().is_err());
    }

    #[test]
    #[serial]
    fn test_env_override_applies() {
        env::set_var("IRONCOACH_TREND_DEADBAND", "0.1");
        let config = AnalyticsConfig::load();
        env::remove_var("IRONCOACH_TREND_DEADBAND");

        let config = config.unwrap();
        assert!((config.trend.deadband - 0.1).abs() < f64::EPSILON);
    }

    #[test]
    #[serial]
    fn test_unparseable_env_override_is_an_error() {
        env::set_var("IRONCOACH_WEAKEST_GROUP_COUNT", "three");
        let result = AnalyticsConfig::load();
        env::remove_var("IRONCOACH_WEAKEST_GROUP_COUNT");

        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let raw = r#"{"trend": {"deadband": 0.1}, "metrics": {"weakest_group_count": 2}}"#;
        let config = AnalyticsConfig::from_json(raw).unwrap();

        assert!((config.trend.deadband - 0.1).abs() < f64::EPSILON);
        assert_eq!(config.metrics.weakest_group_count, 2);
        assert_eq!(config.metrics.fatigue_window_days, 7);
        assert_eq!(
            config.recommendation.thresholds,
            RecommendationThresholds::default()
        );
    }

    #[test]
    fn test_invalid_json_config_is_rejected() {
        assert!(matches!(
            AnalyticsConfig::from_json("{not json"),
            Err(ConfigError::Parse(_))
        ));
        assert!(AnalyticsConfig::from_json(r#"{"trend": {"deadband": 1.5}}"#).is_err());
    }
}
