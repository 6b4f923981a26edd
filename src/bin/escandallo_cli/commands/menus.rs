// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Escandallo Kitchen Tools
// ABOUTME: Menu commands for escandallo-cli
// ABOUTME: Prints the consolidated production order of an event menu

use anyhow::Result;
use escandallo::services::KitchenService;
use serde_json::json;

use crate::helpers::display;

/// Production order for a menu at `pax` guests
pub fn order(kitchen: &KitchenService, menu_key: &str, pax: f64, json: bool) -> Result<()> {
    let order = kitchen.production_order(menu_key, pax)?;
    let cost_per_pax = kitchen.menu_cost_per_pax(menu_key)?;
    if json {
        return display::print_json(&json!({
            "order": order,
            "costPerPax": cost_per_pax,
        }));
    }
    let menu = kitchen.find_menu(menu_key)?;
    display::display_order(&menu.name, &order, cost_per_pax, kitchen.config());
    Ok(())
}
