// ABOUTME: Integration tests for the kitchen service facade and menu production orders
// ABOUTME: Exercises lookups, costing of restored data, consolidation and the audit report
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Escandallo Kitchen Tools

mod common;

use common::{
    croquetas, init_test_logging, kitchen_products, menu_with, tortilla, SAMPLE_BACKUP_JSON,
};
use escandallo::backup::BackupDocument;
use escandallo::services::KitchenService;
use escandallo_core::errors::ErrorCode;
use escandallo_core::models::{Allergen, Product};
use escandallo_costing::{consolidate_order, menu_cost_per_pax, CostingConfig};

const EPSILON: f64 = 1e-9;

fn restored_kitchen() -> KitchenService {
    init_test_logging();
    let backup = BackupDocument::restore(SAMPLE_BACKUP_JSON, &CostingConfig::default()).unwrap();
    KitchenService::new(
        backup.recipes,
        backup.products,
        backup.menus,
        CostingConfig::default(),
    )
}

// ============================================================================
// Restored Data
// ============================================================================

#[test]
fn test_restored_recipe_costs_like_fresh_data() {
    let kitchen = restored_kitchen();
    let cost = kitchen.cost("rec_salmorejo").unwrap();

    // 1.5 kg × 1.80 + 0.3 kg × 2.20 + 0.2 l × 8
    assert!((cost.total - 4.96).abs() < EPSILON);
    assert!((cost.per_yield - 4.96 / 6.0).abs() < EPSILON);
}

#[test]
fn test_recipe_lookup_by_name() {
    let kitchen = restored_kitchen();
    let by_name = kitchen.cost("SALMOREJO").unwrap();
    let by_id = kitchen.cost("rec_salmorejo").unwrap();
    assert_eq!(by_name, by_id);
}

#[test]
fn test_unknown_recipe_is_not_found() {
    let err = restored_kitchen().cost("Paella").unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceNotFound);
    assert_eq!(err.resource_id.as_deref(), Some("Paella"));
}

#[test]
fn test_allergen_report() {
    let report = restored_kitchen().allergens("Salmorejo").unwrap();

    assert_eq!(report.tags.len(), 1);
    assert!(report.tags.contains("Gluten"));
    assert!(report.unrecognized.is_empty());
    assert!(report
        .matrix
        .iter()
        .any(|(allergen, present)| *allergen == Allergen::Gluten && *present));
}

#[test]
fn test_scale_through_service() {
    let scaled = restored_kitchen().scale("Salmorejo", 12.0).unwrap();
    assert!((scaled.factor - 2.0).abs() < EPSILON);
    assert!((scaled.elaborations[0].ingredients[1].quantity - 600.0).abs() < EPSILON);
}

#[test]
fn test_scale_rejects_negative_yield() {
    let kitchen = restored_kitchen();
    let err = kitchen.scale("Salmorejo", -6.0).unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);

    let err = kitchen.scale("Salmorejo", f64::INFINITY).unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
}

#[test]
fn test_from_backup_uses_given_config() {
    let backup = BackupDocument::restore(SAMPLE_BACKUP_JSON, &CostingConfig::default()).unwrap();
    let config = CostingConfig {
        fallback_category: "Otros".to_owned(),
        ..CostingConfig::default()
    };
    let kitchen = KitchenService::from_backup(backup, config);
    assert_eq!(kitchen.config().fallback_category, "Otros");
}

#[test]
fn test_audit_reports_unpriced_products() {
    let audits = restored_kitchen().audit();

    assert_eq!(audits.len(), 1);
    assert_eq!(audits[0].recipe_name, "Pisto antiguo");
    assert_eq!(audits[0].unpriced, vec!["Calabacín"]);
    assert!(audits[0].unmatched.is_empty());
}

// ============================================================================
// Production Orders
// ============================================================================

#[test]
fn test_order_groups_by_category_then_unit() {
    let kitchen = restored_kitchen();
    let order = kitchen.production_order("Comida de empresa", 12.0).unwrap();

    // Salmorejo yields 6, so everything doubles; the missing recipe is skipped
    assert!((order.line("Verduras", "Tomate pera").unwrap().quantity - 3.0).abs() < EPSILON);
    assert!((order.line("kg", "Pan de telera").unwrap().quantity - 600.0).abs() < EPSILON);
    let aceite = order.line("Litro", "Aceite de oliva").unwrap();
    assert!((aceite.quantity - 400.0).abs() < EPSILON);
    assert_eq!(aceite.unit, "ml");
    assert_eq!(order.line_count(), 3);
}

#[test]
fn test_order_sums_shared_ingredients_across_recipes() {
    let catalog = kitchen_products();
    let croquetas = croquetas();
    let tortilla = tortilla();
    let menu = menu_with("Cóctel", &[&croquetas, &tortilla]);

    let order = consolidate_order(
        &menu,
        &[croquetas, tortilla],
        catalog.as_slice(),
        40.0,
        "Varios / Otros",
    );

    // Croquetas: 3 eggs × 40/20; tortilla: 6 eggs × 40/4. Huevo has no
    // category, so it groups under its purchase unit.
    let huevo = order.line("ud", "huevo").unwrap();
    assert!((huevo.quantity - 6.0).abs() < EPSILON);
    let huevo_tortilla = order.line("ud", "Huevo").unwrap();
    assert!((huevo_tortilla.quantity - 60.0).abs() < EPSILON);

    let patata = order.line("Varios / Otros", "Patata").unwrap();
    assert!((patata.quantity - 8.0).abs() < EPSILON);
    assert_eq!(patata.unit, "kg");
}

#[test]
fn test_order_keeps_first_unit() {
    let catalog = vec![Product::new("Nata", Some(3.5), "Litro").with_category("Lácteos")];
    let first = common::single_ingredient_recipe("Nata", "200", "ml", 4.0);
    let second = common::single_ingredient_recipe("Nata", "1", "l", 4.0);
    let menu = menu_with("Postres", &[&first, &second]);

    let order = consolidate_order(
        &menu,
        &[first, second],
        catalog.as_slice(),
        4.0,
        "Varios / Otros",
    );
    let nata = order.line("Lácteos", "Nata").unwrap();

    // Units are not reconciled across recipes
    assert_eq!(nata.unit, "ml");
    assert!((nata.quantity - 201.0).abs() < EPSILON);
}

#[test]
fn test_menu_cost_per_pax_sums_recipes() {
    let catalog = kitchen_products();
    let croquetas = croquetas();
    let tortilla = tortilla();
    let menu = menu_with("Cóctel", &[&croquetas, &tortilla]);

    let per_pax = menu_cost_per_pax(&menu, &[croquetas, tortilla], catalog.as_slice());
    // 6.67 / 20 + 1.5 / 4
    assert!((per_pax - (0.3335 + 0.375)).abs() < EPSILON);
}

#[test]
fn test_order_rejects_invalid_pax() {
    let kitchen = restored_kitchen();
    let err = kitchen.production_order("menu_1", f64::NAN).unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);

    let err = kitchen.production_order("Cena de gala", 10.0).unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceNotFound);
}
