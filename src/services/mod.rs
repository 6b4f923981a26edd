// ABOUTME: Domain service layer between stored kitchen data and the costing engine
// ABOUTME: Resolves recipes and menus given by id or name, then delegates to pure computations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Escandallo Kitchen Tools

//! Domain service layer
//!
//! Front ends (the CLI today) talk to this layer instead of calling the
//! engine directly, so lookups and their errors behave the same everywhere.

/// Kitchen snapshot facade: costs, allergens, scaling, orders and audits
pub mod kitchen;

pub use kitchen::{AllergenReport, KitchenService, RecipeAudit};
