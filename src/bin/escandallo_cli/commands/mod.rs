// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Escandallo Kitchen Tools
// ABOUTME: Re-exports command modules for escandallo-cli
// ABOUTME: Recipe reports, menu production orders and the data-quality audit

pub mod audit;
pub mod menus;
pub mod recipes;
