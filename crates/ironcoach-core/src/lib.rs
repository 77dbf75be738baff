// ABOUTME: Core types and constants for IronCoach adaptive training analytics
// ABOUTME: Foundation crate with error handling, log models, date ranges, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # IronCoach Core
//!
//! Foundation crate providing shared types and constants for the IronCoach
//! training analytics engine. This crate is designed to change infrequently,
//! enabling incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `InvalidRangeError`
//! - **constants**: Domain constants (rating bounds, calendar sizes)
//! - **models**: Workout sessions, nutrition entries, daily logs, profile and plan
//! - **period**: Inclusive calendar-day ranges and report periods

/// Unified error handling system with standard error codes
pub mod errors;

/// Domain constants organized by concern
pub mod constants;

/// Log and profile data models shared by the engine and its collaborators
pub mod models;

/// Inclusive calendar-day date ranges
pub mod period;

pub use errors::{AppError, AppResult, ErrorCode, InvalidRangeError, RangeViolation};
pub use period::{DateRange, ReportPeriod};
