// ABOUTME: Adaptive training analytics engine for IronCoach
// ABOUTME: Metric extractors, trend classifier, recommendations, reports, comparisons and exports
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # IronCoach Intelligence
//!
//! Turns raw, irregularly-timed workout, nutrition and wellness logs into
//! derived signals and user-facing reports. Data flows one way:
//!
//! ```text
//! logs -> extractors -> { trend classifier, recommendation engine }
//!      -> insight reports / period comparisons -> progress export
//! ```
//!
//! Nothing in this crate performs I/O or mutates logs. The only error an
//! operation can return is [`ironcoach_core::InvalidRangeError`].

/// Tunable thresholds, windows and tables
pub mod config;

/// Period-over-period comparison
pub mod comparison;

/// Facade tying the components together
pub mod engine;

/// Progress export with achievements and chart series
pub mod export;

/// Per-period metric extraction
pub mod extractors;

/// Weekly and monthly insight reports
pub mod insights;

/// Borrowed view over the log collections
pub mod logs;

/// Rule-based training-load adjustments
pub mod recommendation_engine;

/// Schedule-aware training streaks
pub mod streaks;

/// Direction-of-change classification
pub mod trend;

pub use comparison::{AnalyticsComparison, ComparisonDifferences, PeriodComparator, PeriodSnapshot};
pub use config::{AnalyticsConfig, ConfigError};
pub use engine::AnalyticsEngine;
pub use export::{
    DatedValue, ExportStats, MuscleGroupSeries, ProgressCharts, ProgressExport, ProgressExporter,
};
pub use extractors::{MetricExtractor, PeriodMetrics};
pub use insights::{InsightReport, InsightReportBuilder, ReportSummary, ReportTrends};
pub use logs::TrainingLogs;
pub use recommendation_engine::{
    AdaptiveRecommendationEngine, AdaptiveTrainingData, RecommendedAdjustments, TrainingSignals,
};
pub use streaks::StreakCalculator;
pub use trend::{TrendClassifier, TrendDirection};
