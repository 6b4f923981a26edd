// ABOUTME: Proportional rescaling of ingredient quantities to a desired yield
// ABOUTME: Produces transient views for printing; stored recipes are never mutated
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Escandallo Kitchen Tools

use escandallo_core::constants::precision::QUANTITY_DECIMALS;
use escandallo_core::formatters::round_to;
use escandallo_core::models::Recipe;
use serde::Serialize;

/// Ratio between the desired and the reference yield
///
/// A reference yield that is zero, negative or not a number means "do not
/// scale" and gives 1, as does a non-finite desired yield.
#[must_use]
pub fn scale_factor(recipe_yield: f64, desired_yield: f64) -> f64 {
    if applies(recipe_yield, desired_yield) {
        desired_yield / recipe_yield
    } else {
        1.0
    }
}

fn applies(recipe_yield: f64, desired_yield: f64) -> bool {
    recipe_yield.is_finite() && recipe_yield > 0.0 && desired_yield.is_finite()
}

/// Rescale one quantity, rounded to 3 decimal places
#[must_use]
pub fn scale_quantity(quantity: f64, recipe_yield: f64, desired_yield: f64) -> f64 {
    round_to(
        quantity * scale_factor(recipe_yield, desired_yield),
        QUANTITY_DECIMALS,
    )
}

/// Ingredient line at the desired yield
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScaledIngredient {
    /// Ingredient name
    pub name: String,
    /// Rescaled quantity
    pub quantity: f64,
    /// Ingredient unit
    pub unit: String,
}

/// Elaboration at the desired yield
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScaledElaboration {
    /// Elaboration name
    pub name: String,
    /// Rescaled lines in ficha order
    pub ingredients: Vec<ScaledIngredient>,
    /// Method, unchanged
    pub instructions: String,
}

/// Printable view of a recipe at a different yield
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScaledRecipe {
    /// Recipe identifier
    pub recipe_id: String,
    /// Recipe name
    pub name: String,
    /// Yield the quantities refer to
    pub yield_quantity: f64,
    /// Yield unit
    pub yield_unit: String,
    /// Factor applied to every quantity
    pub factor: f64,
    /// Rescaled elaborations
    pub elaborations: Vec<ScaledElaboration>,
}

/// Build the scaled view of a recipe
#[must_use]
pub fn scale_recipe(recipe: &Recipe, desired_yield: f64) -> ScaledRecipe {
    let recipe_yield = recipe.yield_quantity.value();
    let factor = scale_factor(recipe_yield, desired_yield);

    let elaborations = recipe
        .elaborations
        .iter()
        .map(|elaboration| ScaledElaboration {
            name: elaboration.name.clone(),
            ingredients: elaboration
                .ingredients
                .iter()
                .map(|ingredient| ScaledIngredient {
                    name: ingredient.name.clone(),
                    quantity: scale_quantity(
                        ingredient.quantity.value(),
                        recipe_yield,
                        desired_yield,
                    ),
                    unit: ingredient.unit.clone(),
                })
                .collect(),
            instructions: elaboration.instructions.clone(),
        })
        .collect();

    ScaledRecipe {
        recipe_id: recipe.id.clone(),
        name: recipe.name.clone(),
        yield_quantity: if applies(recipe_yield, desired_yield) {
            desired_yield
        } else {
            recipe_yield
        },
        yield_unit: recipe.yield_unit.clone(),
        factor,
        elaborations,
    }
}
