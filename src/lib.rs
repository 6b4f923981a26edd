// ABOUTME: Main library entry point for the Escandallo kitchen costing application
// ABOUTME: Wires backup loading, the kitchen service facade and logging around the costing engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Escandallo Kitchen Tools

#![deny(unsafe_code)]

//! # Escandallo
//!
//! Recipe technical sheets (fichas técnicas) for professional kitchens:
//! what a dish costs per serving, which of the 14 regulated allergens it
//! carries, how much of everything to prepare for a different number of
//! guests, and what to order for a whole event menu.
//!
//! ## Architecture
//!
//! - **`escandallo-core`**: domain models, tolerant decimals, errors, formatters
//! - **`escandallo-costing`**: the pure computation engine
//! - **backup**: full-backup JSON documents, with legacy recipe migration
//! - **services**: a snapshot facade resolving recipes and menus by id or name
//! - **logging**: structured `tracing` setup for the CLI
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use escandallo::backup::BackupDocument;
//! use escandallo::services::KitchenService;
//! use escandallo_core::errors::{AppError, AppResult};
//! use escandallo_costing::CostingConfig;
//!
//! fn main() -> AppResult<()> {
//!     let config = CostingConfig::load().map_err(AppError::from)?;
//!     let backup = BackupDocument::load_file_with("backup_cocina.json", &config)?;
//!     let kitchen = KitchenService::from_backup(backup, config);
//!     let cost = kitchen.cost("Croquetas de jamón")?;
//!     println!("{:.2} € per serving", cost.per_yield);
//!     Ok(())
//! }
//! ```

/// Full-backup documents and legacy recipe migration
pub mod backup;

/// Structured logging configuration
pub mod logging;

/// Kitchen service facade over a loaded snapshot
pub mod services;

pub use escandallo_core::errors::{AppError, AppResult, ErrorCode};
