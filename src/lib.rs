// ABOUTME: Main library entry point for the IronCoach adaptive training analytics application
// ABOUTME: Wires logging, log stores and the analytics service around the pure analytics engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # IronCoach
//!
//! Adaptive training analytics for a strength-training companion app. Given a
//! user's workout sessions, meals and daily check-ins, IronCoach produces
//! weekly and monthly insight reports, period-over-period comparisons,
//! rule-based training-load adjustments and long-horizon progress exports.
//!
//! ## Architecture
//!
//! - **`ironcoach-core`**: models, date ranges, error types and constants
//! - **`ironcoach-intelligence`**: the pure analytics engine
//! - **this crate**: log stores, the async service and the CLI
//!
//! ## Example
//!
//! ```rust,no_run
//! use ironcoach::store::JsonSnapshotLogStore;
//! use ironcoach::AnalyticsService;
//! use ironcoach_core::ReportPeriod;
//! use std::sync::Arc;
//!
//! # async fn run() -> ironcoach_core::AppResult<()> {
//! let store = JsonSnapshotLogStore::open("snapshot.json").await?;
//! let profile = store.profile().clone();
//! let plan = store.plan().cloned();
//! let end = chrono::Utc::now().date_naive();
//!
//! let service = AnalyticsService::new(Arc::new(store));
//! let report = service
//!     .report(&profile, plan.as_ref(), ReportPeriod::Weekly, end)
//!     .await?;
//! println!("{} workouts", report.summary.total_workouts);
//! # Ok(())
//! # }
//! ```

/// Application constants and environment names
pub mod constants;

/// Structured logging setup
pub mod logging;

/// Async analytics service over a log store
pub mod service;

/// Log store trait and implementations
pub mod store;

pub use ironcoach_core::{
    AppError, AppResult, DateRange, ErrorCode, InvalidRangeError, RangeViolation, ReportPeriod,
};
pub use ironcoach_intelligence::{
    AdaptiveTrainingData, AnalyticsComparison, AnalyticsConfig, AnalyticsEngine, InsightReport,
    ProgressExport, TrainingLogs,
};
pub use service::{AnalyticsService, FetchedLogs};
pub use store::{InMemoryLogStore, JsonSnapshotLogStore, LogSnapshot, LogStore};
