// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Escandallo Kitchen Tools
// ABOUTME: Output formatting helpers for escandallo-cli
// ABOUTME: Renders costs, allergen grids, scaled fichas, production orders and audits

use anyhow::Result;
use escandallo::services::{AllergenReport, RecipeAudit};
use escandallo_core::formatters::{format_price, format_quantity};
use escandallo_core::models::Recipe;
use escandallo_costing::{
    CostingConfig, LineStatus, ProductionOrder, RecipeCost, ScaledRecipe,
};
use serde::Serialize;

const RULE_WIDTH: usize = 72;

fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}

fn price(value: f64, config: &CostingConfig) -> String {
    format_price(value, config.currency_decimals, &config.currency_symbol)
}

fn quantity(value: f64, config: &CostingConfig) -> String {
    format_quantity(value, config.quantity_decimals)
}

/// Print any report as pretty JSON
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Itemised cost of one recipe
pub fn display_recipe_cost(recipe: &Recipe, cost: &RecipeCost, config: &CostingConfig) {
    println!("\n{}", recipe.name);
    println!("{}", rule());

    let mut current_elaboration: Option<&str> = None;
    for line in &cost.lines {
        if current_elaboration != Some(line.elaboration.as_str()) {
            println!("[{}]", line.elaboration);
            current_elaboration = Some(line.elaboration.as_str());
        }
        let amount = format!("{} {}", quantity(line.quantity, config), line.unit);
        let outcome = match &line.status {
            LineStatus::Costed { unit_price, .. } => format!(
                "{:>12}  @ {}",
                price(line.cost(), config),
                price(*unit_price, config)
            ),
            LineStatus::Unmatched => format!("{:>12}  (no product)", "-"),
            LineStatus::Unpriced { .. } => format!("{:>12}  (no price)", "-"),
        };
        println!("  {:<28} {:>14} {outcome}", line.ingredient, amount);
    }

    println!("{}", rule());
    println!("Total: {}", price(cost.total, config));
    println!(
        "Per serving ({} {}): {}",
        quantity(recipe.yield_quantity.value(), config),
        recipe.yield_unit,
        price(cost.per_yield, config)
    );
}

/// Per-serving summary of several recipes
pub fn display_cost_summary(rows: &[(&Recipe, RecipeCost)], config: &CostingConfig) {
    println!("\n{:<40} {:>14} {:>14}", "Recipe", "Total", "Per serving");
    println!("{}", rule());
    for (recipe, cost) in rows {
        println!(
            "{:<40} {:>14} {:>14}",
            recipe.name,
            price(cost.total, config),
            price(cost.per_yield, config)
        );
    }
    println!("{}", rule());
    println!("{} recipes", rows.len());
}

/// Allergen presence grid for one recipe
pub fn display_allergens(report: &AllergenReport) {
    println!("\nAllergens: {}", report.recipe_name);
    println!("{}", rule());
    for (allergen, present) in &report.matrix {
        let mark = if *present { "X" } else { " " };
        println!("  [{mark}] {allergen}");
    }
    if !report.unrecognized.is_empty() {
        println!("\nOther tags: {}", report.unrecognized.join(", "));
    }
    if report.tags.is_empty() {
        println!("\nNo allergens declared by the matched products.");
    }
}

/// Recipe quantities at a different yield
pub fn display_scaled(scaled: &ScaledRecipe, config: &CostingConfig) {
    println!(
        "\n{} for {} {} (x{})",
        scaled.name,
        quantity(scaled.yield_quantity, config),
        scaled.yield_unit,
        format_quantity(scaled.factor, 3)
    );
    println!("{}", rule());
    for elaboration in &scaled.elaborations {
        println!("[{}]", elaboration.name);
        for ingredient in &elaboration.ingredients {
            println!(
                "  {:<40} {:>12} {}",
                ingredient.name,
                quantity(ingredient.quantity, config),
                ingredient.unit
            );
        }
    }
}

/// Production order grouped by category
pub fn display_order(
    menu_name: &str,
    order: &ProductionOrder,
    cost_per_pax: f64,
    config: &CostingConfig,
) {
    println!(
        "\nProduction order: {menu_name} ({} pax)",
        quantity(order.pax, config)
    );
    println!("{}", rule());
    for (category, lines) in &order.categories {
        println!("{category}");
        for (ingredient, line) in lines {
            println!(
                "  {:<40} {:>12} {}",
                ingredient,
                quantity(line.quantity, config),
                line.unit
            );
        }
    }
    println!("{}", rule());
    println!(
        "{} lines, menu cost per pax {}",
        order.line_count(),
        price(cost_per_pax, config)
    );
}

/// Data-quality findings
pub fn display_audit(audits: &[RecipeAudit]) {
    if audits.is_empty() {
        println!("\nEvery ingredient resolves to a priced product.");
        return;
    }
    for audit in audits {
        println!("\n{} ({})", audit.recipe_name, audit.recipe_id);
        if !audit.unmatched.is_empty() {
            println!("  no product:   {}", audit.unmatched.join(", "));
        }
        if !audit.unpriced.is_empty() {
            println!("  no price:     {}", audit.unpriced.join(", "));
        }
        if !audit.assumed_conversions.is_empty() {
            println!("  unit assumed: {}", audit.assumed_conversions.join(", "));
        }
    }
}
