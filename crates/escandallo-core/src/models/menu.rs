// ABOUTME: Menu (event) grouping recipes for mass production, plus the author profile
// ABOUTME: Both travel inside full backups next to recipes and products
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Escandallo Kitchen Tools

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::recipe::generate_id;

/// Event menu referencing recipes by id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Menu {
    /// Store identifier
    pub id: String,
    /// Event or menu name
    pub name: String,
    /// Recipes served, in menu order
    #[serde(default)]
    pub recipe_ids: Vec<String>,
    /// Optional description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Creation timestamp
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

impl Menu {
    /// Create an empty menu with a fresh id
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: generate_id(),
            name: name.into(),
            recipe_ids: Vec::new(),
            description: None,
            created_at: Utc::now(),
        }
    }

    /// Add the recipe if absent, remove it if present
    pub fn toggle_recipe(&mut self, recipe_id: &str) {
        if let Some(position) = self.recipe_ids.iter().position(|id| id == recipe_id) {
            self.recipe_ids.remove(position);
        } else {
            self.recipe_ids.push(recipe_id.to_owned());
        }
    }
}

/// Author shown on printed fichas
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UserProfile {
    /// Author name
    pub author_name: String,
    /// Encoded logo
    pub logo: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_recipe_adds_then_removes() {
        let mut menu = Menu::new("Boda 120 pax");
        menu.toggle_recipe("id_a");
        menu.toggle_recipe("id_b");
        assert_eq!(menu.recipe_ids, vec!["id_a", "id_b"]);
        menu.toggle_recipe("id_a");
        assert_eq!(menu.recipe_ids, vec!["id_b"]);
    }

    #[test]
    fn test_menu_deserializes_without_timestamp() {
        let menu: Menu =
            serde_json::from_str(r#"{ "id": "m1", "name": "Cóctel", "recipeIds": ["r1"] }"#).unwrap();
        assert_eq!(menu.recipe_ids, vec!["r1"]);
        assert!(menu.description.is_none());
    }
}
