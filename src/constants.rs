// ABOUTME: Application-level constants for the IronCoach service and CLI
// ABOUTME: Service names and environment variable names read at startup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Application constants
//!
//! Analytics thresholds live in `ironcoach_intelligence::config`; this module
//! only carries what the application shell needs.

use std::env;

/// Service identifiers used in structured logs
pub mod service_names {
    /// Name reported by the analytics service
    pub const IRONCOACH: &str = "ironcoach";
    /// Name reported by the command-line tool
    pub const IRONCOACH_CLI: &str = "ironcoach-cli";
}

/// Environment variable names
pub mod env_vars {
    /// Default snapshot file for the CLI
    pub const SNAPSHOT_PATH: &str = "IRONCOACH_SNAPSHOT";
    /// Optional JSON analytics configuration file
    pub const CONFIG_PATH: &str = "IRONCOACH_CONFIG";
}

/// Environment-based defaults
pub mod env_config {
    use super::{env, env_vars};

    /// Snapshot path from the environment, if set and non-empty
    #[must_use]
    pub fn snapshot_path() -> Option<String> {
        env::var(env_vars::SNAPSHOT_PATH)
            .ok()
            .filter(|path| !path.trim().is_empty())
    }

    /// Analytics configuration file from the environment, if set and non-empty
    #[must_use]
    pub fn config_path() -> Option<String> {
        env::var(env_vars::CONFIG_PATH)
            .ok()
            .filter(|path| !path.trim().is_empty())
    }
}
