// ABOUTME: Recipe cost calculator producing total, per-yield cost and an itemised breakdown
// ABOUTME: Unmatched or unpriced ingredients contribute zero; nothing in here can fail
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Escandallo Kitchen Tools

//! # Escandallo
//!
//! `total = Σ elaborations Σ ingredients (quantity × factor × price)` where
//! the factor comes from [`crate::conversion`] and ingredients without a
//! priced product add nothing. `per_yield = total / yield` when the yield
//! is positive, otherwise 0.

use escandallo_core::models::{Elaboration, Ingredient, Quantity, Recipe};
use rayon::prelude::*;
use serde::Serialize;
use tracing::debug;

use crate::catalog::ProductLookup;
use crate::conversion::{classify_conversion, ConversionKind};

/// Outcome of resolving one ingredient line
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum LineStatus {
    /// Priced product found; `cost` was added to the total
    Costed {
        /// Catalog name of the matched product
        product: String,
        /// Price per purchase unit
        unit_price: f64,
        /// Conversion factor applied to the quantity
        factor: f64,
        /// Provenance of the factor
        conversion: ConversionKind,
        /// quantity × factor × unit price
        cost: f64,
    },
    /// No product with this name
    Unmatched,
    /// Product exists but has no usable price
    Unpriced {
        /// Catalog name of the matched product
        product: String,
    },
}

/// One row of the itemised breakdown
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostLine {
    /// Elaboration the ingredient belongs to
    pub elaboration: String,
    /// Ingredient name as written on the recipe
    pub ingredient: String,
    /// Parsed quantity
    pub quantity: f64,
    /// Ingredient unit as written on the recipe
    pub unit: String,
    /// Resolution outcome
    #[serde(flatten)]
    pub status: LineStatus,
}

impl CostLine {
    /// Contribution of this line to the recipe total
    #[must_use]
    pub fn cost(&self) -> f64 {
        match self.status {
            LineStatus::Costed { cost, .. } => cost,
            LineStatus::Unmatched | LineStatus::Unpriced { .. } => 0.0,
        }
    }
}

/// Cost of a recipe at its reference yield
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecipeCost {
    /// Recipe identifier
    pub recipe_id: String,
    /// Sum of every line's cost
    pub total: f64,
    /// Total divided by the yield quantity, 0 when the yield is not positive
    pub per_yield: f64,
    /// Itemised breakdown in ficha order
    pub lines: Vec<CostLine>,
}

impl RecipeCost {
    /// Lines whose ingredient has no catalog product
    pub fn unmatched(&self) -> impl Iterator<Item = &CostLine> {
        self.lines
            .iter()
            .filter(|line| matches!(line.status, LineStatus::Unmatched))
    }

    /// Lines whose product has no price
    pub fn unpriced(&self) -> impl Iterator<Item = &CostLine> {
        self.lines
            .iter()
            .filter(|line| matches!(line.status, LineStatus::Unpriced { .. }))
    }

    /// Lines costed with an assumed factor of 1 across unrelated units
    pub fn assumed_conversions(&self) -> impl Iterator<Item = &CostLine> {
        self.lines.iter().filter(|line| {
            matches!(
                line.status,
                LineStatus::Costed {
                    conversion: ConversionKind::Assumed,
                    ..
                }
            )
        })
    }
}

/// Resolve and cost a single ingredient line
#[must_use]
pub fn cost_line<L: ProductLookup + ?Sized>(
    elaboration: &Elaboration,
    ingredient: &Ingredient,
    catalog: &L,
) -> CostLine {
    let quantity = ingredient.quantity.value();

    let status = match catalog.find_product(&ingredient.name) {
        None => {
            debug!(ingredient = %ingredient.name, "Ingredient has no catalog product");
            LineStatus::Unmatched
        }
        Some(product) => match product.unit_price() {
            None => LineStatus::Unpriced {
                product: product.name.clone(),
            },
            Some(unit_price) => {
                let conversion = classify_conversion(&ingredient.unit, &product.purchase_unit);
                LineStatus::Costed {
                    product: product.name.clone(),
                    unit_price,
                    factor: conversion.factor,
                    conversion: conversion.kind,
                    cost: quantity * conversion.factor * unit_price,
                }
            }
        },
    };

    CostLine {
        elaboration: elaboration.name.clone(),
        ingredient: ingredient.name.clone(),
        quantity,
        unit: ingredient.unit.clone(),
        status,
    }
}

/// Divide a total by a yield, guarding non-positive yields
#[must_use]
pub fn per_yield_cost(total: f64, yield_quantity: Quantity) -> f64 {
    if yield_quantity.is_positive() {
        total / yield_quantity.value()
    } else {
        0.0
    }
}

/// Cost a recipe against a catalog snapshot
#[must_use]
pub fn calculate_cost<L: ProductLookup + ?Sized>(recipe: &Recipe, catalog: &L) -> RecipeCost {
    let lines: Vec<CostLine> = recipe
        .ingredients()
        .map(|(elaboration, ingredient)| cost_line(elaboration, ingredient, catalog))
        .collect();

    let total: f64 = lines.iter().map(CostLine::cost).sum();

    RecipeCost {
        recipe_id: recipe.id.clone(),
        total,
        per_yield: per_yield_cost(total, recipe.yield_quantity),
        lines,
    }
}

/// Cost many recipes in parallel against the same catalog snapshot
///
/// Results keep the order of `recipes`.
#[must_use]
pub fn cost_many<L: ProductLookup + Sync + ?Sized>(
    recipes: &[Recipe],
    catalog: &L,
) -> Vec<RecipeCost> {
    recipes
        .par_iter()
        .map(|recipe| calculate_cost(recipe, catalog))
        .collect()
}
