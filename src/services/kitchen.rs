// ABOUTME: Kitchen service facade over one loaded snapshot of recipes, products and menus
// ABOUTME: Lookup failures surface as AppError; the computations underneath never fail
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Escandallo Kitchen Tools

use std::collections::BTreeSet;

use escandallo_core::errors::{AppError, AppResult};
use escandallo_core::models::{Allergen, Menu, Product, Recipe};
use escandallo_costing::{
    aggregate_allergens, allergen_matrix, calculate_cost, consolidate_order, cost_many,
    menu_cost_per_pax, scale_recipe, unrecognized_allergens, CostingConfig, ProductCatalog,
    ProductionOrder, RecipeCost, ScaledRecipe,
};
use serde::Serialize;
use tracing::{debug, info};

use crate::backup::BackupDocument;

/// Allergen declaration for one recipe
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AllergenReport {
    /// Recipe identifier
    pub recipe_id: String,
    /// Recipe name
    pub recipe_name: String,
    /// Union of every matched product's tags, as written in the catalog
    pub tags: BTreeSet<String>,
    /// Presence of each regulated allergen
    pub matrix: Vec<(Allergen, bool)>,
    /// Tags outside the regulated vocabulary
    pub unrecognized: Vec<String>,
}

/// Data-quality findings for one recipe
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct RecipeAudit {
    /// Recipe identifier
    pub recipe_id: String,
    /// Recipe name
    pub recipe_name: String,
    /// Ingredients with no catalog product
    pub unmatched: Vec<String>,
    /// Ingredients whose product has no price
    pub unpriced: Vec<String>,
    /// Ingredients costed across unrelated units with factor 1
    pub assumed_conversions: Vec<String>,
}

impl RecipeAudit {
    /// Whether anything was found
    #[must_use]
    pub fn has_findings(&self) -> bool {
        !(self.unmatched.is_empty()
            && self.unpriced.is_empty()
            && self.assumed_conversions.is_empty())
    }
}

/// Read-only facade over a snapshot of kitchen data
#[derive(Debug, Clone)]
pub struct KitchenService {
    recipes: Vec<Recipe>,
    menus: Vec<Menu>,
    catalog: ProductCatalog,
    config: CostingConfig,
}

impl KitchenService {
    /// Build a service over the given data and configuration
    #[must_use]
    pub fn new(
        recipes: Vec<Recipe>,
        products: Vec<Product>,
        menus: Vec<Menu>,
        config: CostingConfig,
    ) -> Self {
        let catalog = ProductCatalog::from_products(products);
        info!(
            recipes = recipes.len(),
            products = catalog.len(),
            menus = menus.len(),
            "Kitchen snapshot loaded"
        );
        Self {
            recipes,
            menus,
            catalog,
            config,
        }
    }

    /// Build a service over a restored backup
    #[must_use]
    pub fn from_backup(backup: BackupDocument, config: CostingConfig) -> Self {
        Self::new(backup.recipes, backup.products, backup.menus, config)
    }

    /// Recipes in store order
    #[must_use]
    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    /// Menus in store order
    #[must_use]
    pub fn menus(&self) -> &[Menu] {
        &self.menus
    }

    /// Catalog snapshot
    #[must_use]
    pub const fn catalog(&self) -> &ProductCatalog {
        &self.catalog
    }

    /// Presentation configuration
    #[must_use]
    pub const fn config(&self) -> &CostingConfig {
        &self.config
    }

    /// Resolve a recipe by exact id, then by case-insensitive name
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` when nothing matches
    pub fn find_recipe(&self, key: &str) -> AppResult<&Recipe> {
        let lowered = key.to_lowercase();
        self.recipes
            .iter()
            .find(|recipe| recipe.id == key)
            .or_else(|| {
                self.recipes
                    .iter()
                    .find(|recipe| recipe.name.to_lowercase() == lowered)
            })
            .ok_or_else(|| AppError::not_found(format!("Recipe '{key}'")).with_resource_id(key))
    }

    /// Resolve a menu by exact id, then by case-insensitive name
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` when nothing matches
    pub fn find_menu(&self, key: &str) -> AppResult<&Menu> {
        let lowered = key.to_lowercase();
        self.menus
            .iter()
            .find(|menu| menu.id == key)
            .or_else(|| {
                self.menus
                    .iter()
                    .find(|menu| menu.name.to_lowercase() == lowered)
            })
            .ok_or_else(|| AppError::not_found(format!("Menu '{key}'")).with_resource_id(key))
    }

    /// Cost one recipe
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for an unknown recipe
    pub fn cost(&self, recipe_key: &str) -> AppResult<RecipeCost> {
        let recipe = self.find_recipe(recipe_key)?;
        let cost = calculate_cost(recipe, &self.catalog);
        debug!(recipe_id = %recipe.id, total = cost.total, "Recipe costed");
        Ok(cost)
    }

    /// Cost every recipe, in store order
    #[must_use]
    pub fn cost_all(&self) -> Vec<RecipeCost> {
        cost_many(&self.recipes, &self.catalog)
    }

    /// Allergen declaration for one recipe
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for an unknown recipe
    pub fn allergens(&self, recipe_key: &str) -> AppResult<AllergenReport> {
        let recipe = self.find_recipe(recipe_key)?;
        let tags = aggregate_allergens(recipe, &self.catalog);
        let matrix = allergen_matrix(&tags);
        let unrecognized = unrecognized_allergens(&tags)
            .into_iter()
            .map(str::to_owned)
            .collect();
        Ok(AllergenReport {
            recipe_id: recipe.id.clone(),
            recipe_name: recipe.name.clone(),
            tags,
            matrix,
            unrecognized,
        })
    }

    /// Quantities of one recipe at a different yield
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` when `desired_yield` is negative or not a
    /// number, and `ResourceNotFound` for an unknown recipe
    pub fn scale(&self, recipe_key: &str, desired_yield: f64) -> AppResult<ScaledRecipe> {
        if !desired_yield.is_finite() || desired_yield < 0.0 {
            return Err(AppError::invalid_input(format!(
                "Desired yield must be a non-negative number, got {desired_yield}"
            )));
        }
        let recipe = self.find_recipe(recipe_key)?;
        Ok(scale_recipe(recipe, desired_yield))
    }

    /// Consolidated production order for a menu at `pax` guests
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` when `pax` is negative or not a number, and
    /// `ResourceNotFound` for an unknown menu
    pub fn production_order(&self, menu_key: &str, pax: f64) -> AppResult<ProductionOrder> {
        if !pax.is_finite() || pax < 0.0 {
            return Err(AppError::invalid_input(format!(
                "Guest count must be a non-negative number, got {pax}"
            )));
        }
        let menu = self.find_menu(menu_key)?;
        Ok(consolidate_order(
            menu,
            &self.recipes,
            &self.catalog,
            pax,
            &self.config.fallback_category,
        ))
    }

    /// Sum of per-serving costs of a menu's recipes
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for an unknown menu
    pub fn menu_cost_per_pax(&self, menu_key: &str) -> AppResult<f64> {
        let menu = self.find_menu(menu_key)?;
        Ok(menu_cost_per_pax(menu, &self.recipes, &self.catalog))
    }

    /// Data-quality findings for every recipe that has any
    #[must_use]
    pub fn audit(&self) -> Vec<RecipeAudit> {
        self.cost_all()
            .into_iter()
            .zip(&self.recipes)
            .map(|(cost, recipe)| RecipeAudit {
                recipe_id: cost.recipe_id.clone(),
                recipe_name: recipe.name.clone(),
                unmatched: cost.unmatched().map(|line| line.ingredient.clone()).collect(),
                unpriced: cost.unpriced().map(|line| line.ingredient.clone()).collect(),
                assumed_conversions: cost
                    .assumed_conversions()
                    .map(|line| format!("{} ({})", line.ingredient, line.unit))
                    .collect(),
            })
            .filter(RecipeAudit::has_findings)
            .collect()
    }
}
