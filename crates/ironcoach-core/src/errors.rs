// ABOUTME: Unified error types for the IronCoach analytics platform
// ABOUTME: Defines ErrorCode families, AppError with chaining, and the analytics range error
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! Centralized error handling for the analytics engine and its surrounding
//! application. Engine operations fail only on invalid date ranges, which are
//! reported as [`InvalidRangeError`]; everything that touches the log store
//! or snapshot files reports an [`AppError`] carrying an [`ErrorCode`].

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Standard error codes used throughout the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    // Validation (3000-3999)
    /// Date range is inverted, misaligned, or overlapping
    #[serde(rename = "INVALID_RANGE")]
    InvalidRange = 3004,

    // Resource Management (4000-4999)
    /// Requested resource does not exist
    #[serde(rename = "RESOURCE_NOT_FOUND")]
    ResourceNotFound = 4000,

    // Internal Errors (9000-9999)
    /// Log store read failed
    #[serde(rename = "STORAGE_ERROR")]
    StorageError = 9002,
    /// Snapshot (de)serialization failed
    #[serde(rename = "SERIALIZATION_ERROR")]
    SerializationError = 9003,
}

impl ErrorCode {
    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn http_status(self) -> u16 {
        match self {
            Self::InvalidRange => 400,
            Self::ResourceNotFound => 404,
            Self::StorageError | Self::SerializationError => 500,
        }
    }

    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::InvalidRange => "The requested date range is invalid",
            Self::ResourceNotFound => "The requested resource was not found",
            Self::StorageError => "Log store operation failed",
            Self::SerializationError => "Data serialization/deserialization failed",
        }
    }
}

/// Unified error type for the application
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn http_status(&self) -> u16 {
        self.code.http_status()
    }

    /// Resource not found
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ResourceNotFound,
            format!("{} not found", resource.into()),
        )
    }

    /// Log store failure
    pub fn storage(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::StorageError, message)
    }

    /// Snapshot (de)serialization failure
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::SerializationError, message)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

/// How a date range (or pair of ranges) violates the analytics contract
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RangeViolation {
    /// End date precedes start date
    EndBeforeStart,
    /// Compared periods have different lengths
    UnequalLength,
    /// Compared periods share at least one day
    Overlapping,
    /// Compared periods leave a gap, or are in the wrong order
    NotAdjacent,
}

impl fmt::Display for RangeViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::EndBeforeStart => "end date is earlier than start date",
            Self::UnequalLength => "periods differ in length",
            Self::Overlapping => "periods overlap",
            Self::NotAdjacent => "current period does not directly follow previous period",
        };
        f.write_str(text)
    }
}

/// Raised when an analytics operation receives an unusable date range
///
/// This is the only error the analytics engine produces: sparse or empty
/// logs degrade to zeroed metrics instead of failing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid range {start}..={end}: {violation}")]
pub struct InvalidRangeError {
    /// Start of the offending range
    pub start: NaiveDate,
    /// End of the offending range
    pub end: NaiveDate,
    /// What was wrong with it
    pub violation: RangeViolation,
}

impl InvalidRangeError {
    /// Build an error for the given range bounds
    #[must_use]
    pub const fn new(start: NaiveDate, end: NaiveDate, violation: RangeViolation) -> Self {
        Self {
            start,
            end,
            violation,
        }
    }
}

impl From<InvalidRangeError> for AppError {
    fn from(error: InvalidRangeError) -> Self {
        Self::new(ErrorCode::InvalidRange, error.to_string()).with_source(error)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::serialization(error.to_string()).with_source(error)
    }
}
