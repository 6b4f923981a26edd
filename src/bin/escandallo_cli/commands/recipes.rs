// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Escandallo Kitchen Tools
// ABOUTME: Recipe commands for escandallo-cli: cost, cost summary, allergens and scaling
// ABOUTME: Resolve the recipe through the kitchen service, then print a table or JSON

use anyhow::Result;
use escandallo::services::KitchenService;

use crate::helpers::display;

/// Itemised cost of one recipe
pub fn cost(kitchen: &KitchenService, recipe_key: &str, json: bool) -> Result<()> {
    let cost = kitchen.cost(recipe_key)?;
    if json {
        return display::print_json(&cost);
    }
    let recipe = kitchen.find_recipe(recipe_key)?;
    display::display_recipe_cost(recipe, &cost, kitchen.config());
    Ok(())
}

/// Total and per-serving cost of every recipe
pub fn cost_summary(kitchen: &KitchenService, json: bool) -> Result<()> {
    let costs = kitchen.cost_all();
    if json {
        return display::print_json(&costs);
    }
    let rows: Vec<_> = kitchen.recipes().iter().zip(costs).collect();
    display::display_cost_summary(&rows, kitchen.config());
    Ok(())
}

/// Allergen declaration of one recipe
pub fn allergens(kitchen: &KitchenService, recipe_key: &str, json: bool) -> Result<()> {
    let report = kitchen.allergens(recipe_key)?;
    if json {
        return display::print_json(&report);
    }
    display::display_allergens(&report);
    Ok(())
}

/// Recipe quantities at a different yield
pub fn scale(
    kitchen: &KitchenService,
    recipe_key: &str,
    desired_yield: f64,
    json: bool,
) -> Result<()> {
    let scaled = kitchen.scale(recipe_key, desired_yield)?;
    if json {
        return display::print_json(&scaled);
    }
    display::display_scaled(&scaled, kitchen.config());
    Ok(())
}
