// ABOUTME: Recipe costing engine for kitchen technical sheets (escandallos)
// ABOUTME: Converts units, resolves products, sums costs, unions allergens and rescales yields
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Escandallo Kitchen Tools

#![deny(unsafe_code)]

//! # Escandallo Costing
//!
//! Every operation here is a pure, synchronous function over a borrowed
//! recipe and a borrowed catalog snapshot. Nothing is cached: costs are
//! recomputed on demand, and malformed kitchen data degrades to a zero
//! contribution instead of an error.
//!
//! ## Example
//!
//! ```rust
//! use escandallo_core::models::{Elaboration, Ingredient, Product, Recipe};
//! use escandallo_costing::{calculate_cost, ProductCatalog};
//!
//! let catalog = ProductCatalog::from_products(vec![
//!     Product::new("Aceite de oliva", Some(8.0), "kg"),
//! ]);
//! let recipe = Recipe::new(
//!     "Alioli",
//!     4.0,
//!     vec![Elaboration::new("Base", vec![Ingredient::new("Aceite de oliva", "500", "g")])],
//! );
//!
//! let cost = calculate_cost(&recipe, &catalog);
//! assert!((cost.total - 4.0).abs() < 1e-9);
//! assert!((cost.per_yield - 1.0).abs() < 1e-9);
//! ```

/// Allergen aggregation across nested elaborations
pub mod allergens;
/// Case-insensitive product catalog lookup
pub mod catalog;
/// Engine configuration (precisions, labels) with env overrides
pub mod config;
/// Ingredient-unit to purchase-unit conversion table
pub mod conversion;
/// Recipe cost calculator and itemised breakdown
pub mod cost;
/// Consolidated production order for event menus
pub mod order;
/// Proportional quantity scaling to a target yield
pub mod scaling;

pub use allergens::{aggregate_allergens, allergen_matrix, unrecognized_allergens};
pub use catalog::{ProductCatalog, ProductLookup};
pub use config::{ConfigError, CostingConfig};
pub use conversion::{classify_conversion, conversion_factor, ConversionKind, UnitConversion};
pub use cost::{calculate_cost, cost_many, per_yield_cost, CostLine, LineStatus, RecipeCost};
pub use order::{consolidate_order, menu_cost_per_pax, OrderLine, ProductionOrder};
pub use scaling::{scale_factor, scale_quantity, scale_recipe, ScaledRecipe};
