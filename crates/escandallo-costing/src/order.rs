// ABOUTME: Consolidated production order for an event menu at a given number of guests
// ABOUTME: Scales every recipe of the menu and sums ingredient quantities per supplier category
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Escandallo Kitchen Tools

use std::collections::BTreeMap;

use escandallo_core::models::{Menu, Recipe};
use serde::Serialize;
use tracing::warn;

use crate::catalog::ProductLookup;
use crate::cost::calculate_cost;
use crate::scaling::scale_factor;

/// Accumulated amount of one ingredient
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderLine {
    /// Unscaled-sum quantity at the requested guest count
    pub quantity: f64,
    /// Unit of the first occurrence of the ingredient
    pub unit: String,
}

/// Shopping list grouped by category, then by ingredient name
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ProductionOrder {
    /// Guest count the order was computed for
    pub pax: f64,
    /// Category → ingredient name → line, both sorted
    pub categories: BTreeMap<String, BTreeMap<String, OrderLine>>,
}

impl ProductionOrder {
    /// Total number of distinct ingredient lines
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.categories.values().map(BTreeMap::len).sum()
    }

    /// Look up the accumulated line for an ingredient within a category
    #[must_use]
    pub fn line(&self, category: &str, ingredient: &str) -> Option<&OrderLine> {
        self.categories.get(category)?.get(ingredient)
    }
}

fn menu_recipes<'a>(menu: &'a Menu, recipes: &'a [Recipe]) -> impl Iterator<Item = &'a Recipe> {
    menu.recipe_ids.iter().filter_map(move |recipe_id| {
        let found = recipes.iter().find(|recipe| &recipe.id == recipe_id);
        if found.is_none() {
            warn!(menu = %menu.name, recipe_id = %recipe_id, "Menu references a missing recipe");
        }
        found
    })
}

/// Consolidate the ingredients of every recipe in a menu for `pax` guests
///
/// Each recipe is scaled by `pax / yield` (1 when its yield is not
/// positive). Lines are grouped by product category, falling back to the
/// product's purchase unit and then to `fallback_category` for unknown
/// ingredients. Quantities are summed unrounded.
#[must_use]
pub fn consolidate_order<L: ProductLookup + ?Sized>(
    menu: &Menu,
    recipes: &[Recipe],
    catalog: &L,
    pax: f64,
    fallback_category: &str,
) -> ProductionOrder {
    let mut order = ProductionOrder {
        pax,
        categories: BTreeMap::new(),
    };

    for recipe in menu_recipes(menu, recipes) {
        let factor = scale_factor(recipe.yield_quantity.value(), pax);

        for (_, ingredient) in recipe.ingredients() {
            let category = catalog
                .find_product(&ingredient.name)
                .and_then(|product| {
                    product
                        .category
                        .as_deref()
                        .filter(|category| !category.is_empty())
                        .or_else(|| {
                            Some(product.purchase_unit.as_str()).filter(|unit| !unit.is_empty())
                        })
                })
                .unwrap_or(fallback_category);

            let line = order
                .categories
                .entry(category.to_owned())
                .or_default()
                .entry(ingredient.name.clone())
                .or_insert_with(|| OrderLine {
                    quantity: 0.0,
                    unit: ingredient.unit.clone(),
                });
            line.quantity += ingredient.quantity.value() * factor;
        }
    }

    order
}

/// Sum of the per-yield cost of every recipe in the menu
#[must_use]
pub fn menu_cost_per_pax<L: ProductLookup + ?Sized>(
    menu: &Menu,
    recipes: &[Recipe],
    catalog: &L,
) -> f64 {
    menu_recipes(menu, recipes)
        .map(|recipe| calculate_cost(recipe, catalog).per_yield)
        .sum()
}
