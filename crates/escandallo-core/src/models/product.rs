// ABOUTME: Master catalog product with price, purchase unit and allergen tags
// ABOUTME: Serialized with the field names used by kitchen backups, English aliases accepted
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Escandallo Kitchen Tools

use serde::{Deserialize, Serialize};

use super::quantity::price;

/// Master catalog entry
///
/// The name is the case-insensitive key recipes link to. The costing engine
/// only ever reads products.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Optional store identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Product name, matched case-insensitively against ingredient names
    #[serde(rename = "nombre", alias = "name")]
    pub name: String,
    /// Price per purchase unit, `None` when unknown
    #[serde(
        rename = "precio",
        alias = "price",
        default,
        deserialize_with = "price::deserialize"
    )]
    pub price: Option<f64>,
    /// Unit the price refers to (Kg, Litro, Pack, Pieza...)
    #[serde(rename = "unidad", alias = "purchaseUnit", default)]
    pub purchase_unit: String,
    /// Optional supplier category used to group production orders
    #[serde(
        rename = "categoria",
        alias = "category",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub category: Option<String>,
    /// Allergen tags, passed through verbatim
    #[serde(
        rename = "alérgenos",
        alias = "alergenos",
        alias = "allergens",
        default
    )]
    pub allergens: Vec<String>,
}

impl Product {
    /// Create a product with no category or allergens
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        price: Option<f64>,
        purchase_unit: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            price,
            purchase_unit: purchase_unit.into(),
            category: None,
            allergens: Vec::new(),
        }
    }

    /// Set the allergen tags
    #[must_use]
    pub fn with_allergens<I, S>(mut self, allergens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allergens = allergens.into_iter().map(Into::into).collect();
        self
    }

    /// Set the supplier category
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Price usable for costing
    ///
    /// Products built in code can carry any `f64`; only finite, non-negative
    /// prices take part in a cost.
    #[must_use]
    pub fn unit_price(&self) -> Option<f64> {
        self.price.filter(|value| value.is_finite() && *value >= 0.0)
    }

    /// Lowercased lookup key
    #[must_use]
    pub fn lookup_key(&self) -> String {
        self.name.to_lowercase()
    }
}
