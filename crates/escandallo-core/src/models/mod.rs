// ABOUTME: Domain models for the kitchen costing engine
// ABOUTME: Products, recipes, elaborations, menus, allergens and tolerant quantities
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Escandallo Kitchen Tools

/// Regulated allergen vocabulary
pub mod allergen;
/// Event menus and author profile
pub mod menu;
/// Master catalog products
pub mod product;
/// Parse-tolerant decimals
pub mod quantity;
/// Recipes, elaborations and ingredient lines
pub mod recipe;

pub use allergen::Allergen;
pub use menu::{Menu, UserProfile};
pub use product::Product;
pub use quantity::{parse_decimal, Quantity};
pub use recipe::{generate_id, Elaboration, Ingredient, Recipe, ServiceDetails};
