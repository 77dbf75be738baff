// ABOUTME: Helper modules for ironcoach-cli
// ABOUTME: Date argument parsing and output formatting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod dates;
pub mod display;
