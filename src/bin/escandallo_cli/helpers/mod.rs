// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Escandallo Kitchen Tools
// ABOUTME: Re-exports helper modules for escandallo-cli
// ABOUTME: Provides table and JSON output formatting

pub mod display;
