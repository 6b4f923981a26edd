// ABOUTME: Recipe ficha model: recipe, elaborations, ingredient lines and service details
// ABOUTME: Quantities and yields are parse-tolerant; everything else is carried through unchanged
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Escandallo Kitchen Tools

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::quantity::Quantity;
use crate::constants::labels;
use crate::errors::{AppError, AppResult};

/// Generate a store identifier for new recipes, elaborations and menus
#[must_use]
pub fn generate_id() -> String {
    format!("id_{}", Uuid::new_v4().simple())
}

/// Recipe line item
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Ingredient {
    /// Name linked to a catalog product by case-insensitive equality
    pub name: String,
    /// Amount in `unit`
    pub quantity: Quantity,
    /// Free-form unit (g, kg, ml, ud, c.s. ...)
    pub unit: String,
}

impl Ingredient {
    /// Create an ingredient line
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        quantity: impl Into<Quantity>,
        unit: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            quantity: quantity.into(),
            unit: unit.into(),
        }
    }
}

/// Named preparation step with its own ingredient list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Elaboration {
    /// Store identifier
    pub id: String,
    /// Display name ("Salsa", "Guarnición"...)
    pub name: String,
    /// Ingredient lines in ficha order
    pub ingredients: Vec<Ingredient>,
    /// Free-text method
    pub instructions: String,
    /// Encoded process photos, never interpreted here
    pub photos: Vec<String>,
}

impl Default for Elaboration {
    fn default() -> Self {
        Self {
            id: generate_id(),
            name: labels::DEFAULT_ELABORATION_NAME.to_owned(),
            ingredients: Vec::new(),
            instructions: String::new(),
            photos: Vec::new(),
        }
    }
}

impl Elaboration {
    /// Create an elaboration with the given name and ingredients
    #[must_use]
    pub fn new(name: impl Into<String>, ingredients: Vec<Ingredient>) -> Self {
        Self {
            name: name.into(),
            ingredients,
            ..Self::default()
        }
    }
}

/// Front-of-house service notes printed on the ficha
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ServiceDetails {
    /// Plating description
    pub presentation: String,
    /// Serving temperature
    pub serving_temp: String,
    /// Cutlery to lay
    pub cutlery: String,
    /// Time at the pass
    pub pass_time: String,
    /// Service style (emplatado, a la inglesa...)
    pub service_type: String,
    /// Description read to the guest
    pub client_description: String,
}

/// Recipe technical sheet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Recipe {
    /// Store identifier
    pub id: String,
    /// Recipe name
    pub name: String,
    /// Menu category
    pub category: String,
    /// Author credited on the ficha
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    /// Encoded author logo
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    /// Where the recipe came from
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
    /// Servings or output units at reference scale
    ///
    /// A stored recipe without a yield reads as 0, which disables per-yield
    /// cost and scaling. New fichas start at 4 through `Default`.
    #[serde(default)]
    pub yield_quantity: Quantity,
    /// Unit of the yield (raciones, kg...)
    pub yield_unit: String,
    /// Encoded dish photo
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
    /// Encoded process photos
    pub process_photos: Vec<String>,
    /// Preparation steps, at least one for a persisted recipe
    pub elaborations: Vec<Elaboration>,
    /// Critical points and remarks
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Service notes
    pub service_details: ServiceDetails,
}

impl Default for Recipe {
    fn default() -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            category: labels::DEFAULT_RECIPE_CATEGORY.to_owned(),
            author: None,
            logo: None,
            source_url: None,
            yield_quantity: Quantity::new(4.0),
            yield_unit: labels::DEFAULT_YIELD_UNIT.to_owned(),
            photo: None,
            process_photos: Vec::new(),
            elaborations: vec![Elaboration::default()],
            notes: None,
            service_details: ServiceDetails::default(),
        }
    }
}

impl Recipe {
    /// Create a recipe with a fresh id, the given yield and elaborations
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        yield_quantity: impl Into<Quantity>,
        elaborations: Vec<Elaboration>,
    ) -> Self {
        Self {
            id: generate_id(),
            name: name.into(),
            yield_quantity: yield_quantity.into(),
            elaborations,
            ..Self::default()
        }
    }

    /// Iterate every ingredient of every elaboration, in ficha order
    pub fn ingredients(&self) -> impl Iterator<Item = (&Elaboration, &Ingredient)> {
        self.elaborations.iter().flat_map(|elaboration| {
            elaboration
                .ingredients
                .iter()
                .map(move |ingredient| (elaboration, ingredient))
        })
    }

    /// Check the invariants a recipe must hold before it is stored
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` when the recipe has no id or no elaborations.
    pub fn ensure_persistable(&self) -> AppResult<()> {
        if self.id.trim().is_empty() {
            return Err(AppError::invalid_input("Recipe has no id"));
        }
        if self.elaborations.is_empty() {
            return Err(AppError::invalid_input(format!(
                "Recipe '{}' must have at least one elaboration",
                self.name
            ))
            .with_resource_id(self.id.clone()));
        }
        Ok(())
    }
}
