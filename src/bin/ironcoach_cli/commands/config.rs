// ABOUTME: Analytics configuration loading and display for ironcoach-cli
// ABOUTME: Reads an optional JSON config file or falls back to defaults plus environment overrides
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::helpers::display::print_json;
use anyhow::{anyhow, Result};
use ironcoach::AnalyticsConfig;
use tokio::fs;
use tracing::{debug, info};

/// Configuration from `path`, or the global configuration when absent
pub async fn load(path: Option<String>) -> Result<AnalyticsConfig> {
    let Some(path) = path else {
        debug!("Using default analytics configuration with environment overrides");
        return Ok(AnalyticsConfig::global().clone());
    };

    let raw = fs::read_to_string(&path)
        .await
        .map_err(|e| anyhow!("Failed to read config {path}: {e}"))?;
    let config =
        AnalyticsConfig::from_json(&raw).map_err(|e| anyhow!("Invalid config {path}: {e}"))?;
    info!(path = %path, "Loaded analytics configuration");
    Ok(config)
}

/// Print the effective configuration as JSON
pub fn show(config: &AnalyticsConfig, pretty: bool) -> Result<()> {
    print_json(config, pretty)
}
