// ABOUTME: LogStore backed by a JSON snapshot file exported by the mobile app
// ABOUTME: Loads profile, plan and logs once with tokio::fs and serves range queries from memory
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{InMemoryLogStore, LogSnapshot, LogStore};
use async_trait::async_trait;
use ironcoach_core::models::{DailyLog, NutritionEntry, UserProfile, WorkoutPlan, WorkoutSession};
use ironcoach_core::{AppError, AppResult, DateRange, ErrorCode};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info};

/// Read-only store over one user's snapshot file
#[derive(Debug, Clone)]
pub struct JsonSnapshotLogStore {
    path: PathBuf,
    profile: UserProfile,
    plan: Option<WorkoutPlan>,
    covered: Option<DateRange>,
    logs: InMemoryLogStore,
}

impl JsonSnapshotLogStore {
    /// Read and parse the snapshot at `path`
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` when the file does not exist, `StorageError`
    /// when it cannot be read, and `SerializationError` when it is not a
    /// valid snapshot document
    pub async fn open(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref().to_path_buf();
        let raw = fs::read_to_string(&path).await.map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                AppError::not_found(format!("Snapshot {}", path.display())).with_source(e)
            } else {
                AppError::storage(format!("Failed to read snapshot {}", path.display()))
                    .with_source(e)
            }
        })?;

        let snapshot = Self::parse(&raw).map_err(|e| {
            AppError::new(
                ErrorCode::SerializationError,
                format!("Invalid snapshot {}: {}", path.display(), e.message),
            )
        })?;
        let store = Self::from_snapshot(path, snapshot);
        info!(
            path = %store.path.display(),
            records = store.logs.len(),
            "Loaded log snapshot"
        );
        Ok(store)
    }

    /// Parse snapshot JSON
    ///
    /// # Errors
    ///
    /// Returns `SerializationError` on malformed JSON or missing required fields
    pub fn parse(raw: &str) -> AppResult<LogSnapshot> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Wrap an already-parsed snapshot
    #[must_use]
    pub fn from_snapshot(path: impl Into<PathBuf>, snapshot: LogSnapshot) -> Self {
        let covered = snapshot.covered_range();
        let LogSnapshot {
            profile,
            plan,
            sessions,
            nutrition,
            daily_logs,
        } = snapshot;
        Self {
            path: path.into(),
            profile,
            plan,
            covered,
            logs: InMemoryLogStore::new(sessions, nutrition, daily_logs),
        }
    }

    /// Write `snapshot` to `path` as pretty JSON, sorting its logs by date first
    ///
    /// # Errors
    ///
    /// Returns `SerializationError` or `StorageError` when the document cannot
    /// be produced or written
    pub async fn write(path: impl AsRef<Path>, snapshot: &LogSnapshot) -> AppResult<()> {
        let path = path.as_ref();
        let mut sorted = snapshot.clone();
        sorted.sort_by_date();
        let body = serde_json::to_string_pretty(&sorted)?;
        fs::write(path, body).await.map_err(|e| {
            AppError::storage(format!("Failed to write snapshot {}", path.display())).with_source(e)
        })?;
        debug!(path = %path.display(), "Wrote log snapshot");
        Ok(())
    }

    /// File this store was loaded from
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Profile stored in the snapshot
    #[must_use]
    pub const fn profile(&self) -> &UserProfile {
        &self.profile
    }

    /// Plan stored in the snapshot, if any
    #[must_use]
    pub const fn plan(&self) -> Option<&WorkoutPlan> {
        self.plan.as_ref()
    }

    /// Range spanned by the stored logs, `None` when they are empty
    #[must_use]
    pub const fn covered_range(&self) -> Option<DateRange> {
        self.covered
    }
}

#[async_trait]
impl LogStore for JsonSnapshotLogStore {
    async fn list_sessions(&self, range: DateRange) -> AppResult<Vec<WorkoutSession>> {
        self.logs.list_sessions(range).await
    }

    async fn list_nutrition_entries(&self, range: DateRange) -> AppResult<Vec<NutritionEntry>> {
        self.logs.list_nutrition_entries(range).await
    }

    async fn list_daily_logs(&self, range: DateRange) -> AppResult<Vec<DailyLog>> {
        self.logs.list_daily_logs(range).await
    }
}
