// ABOUTME: Core types and constants for the Escandallo kitchen costing platform
// ABOUTME: Foundation crate with domain models, tolerant decimals, formatters, and error types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Escandallo Kitchen Tools

#![deny(unsafe_code)]

//! # Escandallo Core
//!
//! Foundation crate providing the shared domain types for the Escandallo
//! recipe costing engine. It changes infrequently so the algorithm crate and
//! the application crate can compile incrementally on top of it.
//!
//! ## Modules
//!
//! - **errors**: `AppError`, `ErrorCode` and the `AppResult` alias
//! - **constants**: allergen vocabulary, default labels and precisions
//! - **models**: products, recipes, elaborations, menus and tolerant quantities
//! - **formatters**: currency and quantity rendering for the display layer

/// Unified error handling with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (Product, Recipe, Elaboration, Menu, Quantity)
pub mod models;

/// Presentation helpers for currency and quantities
pub mod formatters;
