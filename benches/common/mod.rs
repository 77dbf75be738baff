// ABOUTME: Common benchmark utilities and fixtures for analytics benchmarks
// ABOUTME: Provides deterministic log generators shared by Criterion benchmarks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Common benchmark utilities and fixtures.

pub mod fixtures;
