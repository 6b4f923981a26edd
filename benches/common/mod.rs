// ABOUTME: Common benchmark utilities and fixtures for costing performance tests
// ABOUTME: Provides deterministic catalog and recipe generators for Criterion benchmarks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Escandallo Kitchen Tools

//! Common benchmark utilities and test fixtures.

pub mod fixtures;
