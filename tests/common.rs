// ABOUTME: Shared fixtures for integration tests
// ABOUTME: Provides a small kitchen catalog, sample recipes, a menu and backup JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Escandallo Kitchen Tools
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `escandallo`

use std::env;
use std::sync::Once;

use escandallo_core::models::{Elaboration, Ingredient, Menu, Product, Recipe};
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Catalog with the single product of the olive-oil scenarios
pub fn olive_oil_catalog() -> Vec<Product> {
    vec![Product::new("Aceite de oliva", Some(8.0), "kg")]
}

/// Recipe with one elaboration holding one ingredient
pub fn single_ingredient_recipe(
    name: &str,
    quantity: &str,
    unit: &str,
    yield_quantity: f64,
) -> Recipe {
    Recipe::new(
        "Prueba",
        yield_quantity,
        vec![Elaboration::new(
            "Elaboración Principal",
            vec![Ingredient::new(name, quantity, unit)],
        )],
    )
}

/// Small catalog covering table, same-unit and unpriced cases
pub fn kitchen_products() -> Vec<Product> {
    vec![
        Product::new("Harina de trigo", Some(0.9), "kg")
            .with_category("Secos")
            .with_allergens(["Gluten"]),
        Product::new("Mantequilla", Some(9.5), "kg")
            .with_category("Lácteos")
            .with_allergens(["Leche"]),
        Product::new("Leche entera", Some(1.1), "Litro")
            .with_category("Lácteos")
            .with_allergens(["Leche"]),
        Product::new("Jamón serrano", Some(22.0), "kg").with_category("Charcutería"),
        Product::new("Huevo", Some(0.25), "ud").with_allergens(["Huevos"]),
        Product::new("Pan rallado", Some(2.4), "kg")
            .with_category("Secos")
            .with_allergens(["Gluten", "Soja"]),
        Product::new("Sal", None, "kg"),
    ]
}

/// Croquetas de jamón, 20 units, total 6.67
///
/// Bechamel: 0.09 + 0.95 + 1.1 + 3.3; Rebozado: 0.75 + 0.48.
pub fn croquetas() -> Recipe {
    let mut recipe = Recipe::new(
        "Croquetas de jamón",
        20.0,
        vec![
            Elaboration::new(
                "Bechamel",
                vec![
                    Ingredient::new("Harina de trigo", "100", "g"),
                    Ingredient::new("Mantequilla", "100", "g"),
                    Ingredient::new("Leche entera", "1000", "ml"),
                    Ingredient::new("Jamón serrano", "150", "g"),
                    Ingredient::new("Sal", "5", "g"),
                ],
            ),
            Elaboration::new(
                "Rebozado",
                vec![
                    Ingredient::new("huevo", "3", "ud"),
                    Ingredient::new("Pan rallado", "200", "g"),
                ],
            ),
        ],
    );
    recipe.yield_unit = "ud".to_owned();
    recipe
}

/// Tortilla for 4, with one ingredient missing from the catalog
pub fn tortilla() -> Recipe {
    Recipe::new(
        "Tortilla de patatas",
        4.0,
        vec![Elaboration::new(
            "Base",
            vec![
                Ingredient::new("Huevo", 6.0, "ud"),
                Ingredient::new("Patata", "0,8", "kg"),
                Ingredient::new("Sal", "3", "g"),
            ],
        )],
    )
}

/// Menu serving the given recipes
pub fn menu_with(name: &str, recipes: &[&Recipe]) -> Menu {
    let mut menu = Menu::new(name);
    for recipe in recipes {
        menu.toggle_recipe(&recipe.id);
    }
    menu
}

/// Backup mixing current recipes, a legacy recipe and broken records
pub const SAMPLE_BACKUP_JSON: &str = r#"{
  "version": 2,
  "timestamp": "2025-03-01T10:00:00Z",
  "recipes": [
    {
      "id": "rec_salmorejo",
      "name": "Salmorejo",
      "category": "Entrantes",
      "yieldQuantity": "6",
      "yieldUnit": "raciones",
      "elaborations": [
        {
          "id": "elab_1",
          "name": "Crema",
          "ingredients": [
            { "name": "Tomate pera", "quantity": "1,5", "unit": "kg" },
            { "name": "Pan de telera", "quantity": 300, "unit": "g" },
            { "name": "Aceite de oliva", "quantity": "200", "unit": "ml" }
          ],
          "instructions": "Triturar y emulsionar"
        },
        { "name": null, "ingredients": null }
      ],
      "serviceDetails": { "servingTemp": "4 ºC" }
    },
    {
      "name": "Pisto antiguo",
      "yieldQuantity": 4,
      "ingredients": [
        { "name": "Calabacín", "quantity": "2", "unit": "ud" },
        { "name": "Tomate pera", "quantity": "0.5", "unit": "kg" }
      ],
      "instructions": "Pochar a fuego lento"
    },
    "not a recipe",
    null,
    { "id": "", "name": "", "elaborations": [] }
  ],
  "products": [
    { "nombre": "Tomate pera", "precio": "1,80 €", "unidad": "kg", "categoria": "Verduras", "alérgenos": [] },
    { "nombre": "Pan de telera", "precio": 2.2, "unidad": "kg", "alérgenos": ["Gluten"] },
    { "nombre": "Aceite de oliva", "precio": 8, "unidad": "Litro", "alérgenos": [] },
    { "nombre": "Calabacín", "precio": null, "unidad": "ud" },
    { "precio": 1.0 }
  ],
  "profile": { "authorName": "Chef Prueba", "logo": "" },
  "menus": [
    { "id": "menu_1", "name": "Comida de empresa", "recipeIds": ["rec_salmorejo", "missing_recipe"] }
  ]
}"#;
