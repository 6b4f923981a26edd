// ABOUTME: Benchmark fixtures generating kitchen-sized catalogs and recipe books
// ABOUTME: Deterministic so measurements are reproducible between runs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Escandallo Kitchen Tools

//! Benchmark fixtures generating kitchen-sized catalogs and recipe books.

use escandallo_core::models::{Elaboration, Ingredient, Product, Recipe};

/// Predefined recipe book sizes
#[derive(Debug, Clone, Copy)]
pub enum RecipeBookSize {
    /// A single restaurant's carta
    Small,
    /// A catering company's full book
    Large,
}

impl RecipeBookSize {
    #[must_use]
    pub const fn count(self) -> usize {
        match self {
            Self::Small => 50,
            Self::Large => 1000,
        }
    }
}

const PURCHASE_UNITS: [&str; 4] = ["kg", "Litro", "ud", "Pack"];
const INGREDIENT_UNITS: [&str; 4] = ["g", "ml", "ud", "c.s."];
const ALLERGEN_TAGS: [&str; 5] = ["Gluten", "Leche", "Huevos", "Soja", "Sésamo"];

/// Catalog of `count` products with mixed units and allergens
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn generate_catalog(count: usize) -> Vec<Product> {
    (0..count)
        .map(|index| {
            Product::new(
                format!("Producto {index}"),
                (index % 7 != 0).then(|| 0.5 + (index % 40) as f64 * 0.75),
                PURCHASE_UNITS[index % PURCHASE_UNITS.len()],
            )
            .with_allergens(ALLERGEN_TAGS.iter().copied().skip(index % 6).take(index % 3))
        })
        .collect()
}

/// Recipe book whose ingredients reference a catalog of `catalog_size` products
///
/// One ingredient in nine names a product that does not exist.
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn generate_recipes(size: RecipeBookSize, catalog_size: usize) -> Vec<Recipe> {
    (0..size.count())
        .map(|index| {
            let elaborations = (0..3)
                .map(|step| {
                    let ingredients = (0..6)
                        .map(|line| {
                            let seed = index * 31 + step * 7 + line;
                            let name = if seed % 9 == 0 {
                                format!("Sin catalogar {seed}")
                            } else {
                                format!("Producto {}", seed % catalog_size)
                            };
                            Ingredient::new(
                                name,
                                format!("{},5", 10 + seed % 490),
                                INGREDIENT_UNITS[seed % INGREDIENT_UNITS.len()],
                            )
                        })
                        .collect();
                    Elaboration::new(format!("Paso {step}"), ingredients)
                })
                .collect();
            Recipe::new(
                format!("Receta {index}"),
                (2 + index % 10) as f64,
                elaborations,
            )
        })
        .collect()
}
