// ABOUTME: Full-backup JSON documents holding recipes, products, menus and the author profile
// ABOUTME: Restoring migrates legacy recipe shapes and drops records that cannot be recovered
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Escandallo Kitchen Tools

//! # Backup Documents
//!
//! A backup is a single JSON object:
//!
//! ```json
//! { "version": 2, "timestamp": "2025-03-01T10:00:00Z",
//!   "recipes": [...], "products": [...], "profile": {...}, "menus": [...] }
//! ```
//!
//! Restoring is tolerant of shape drift accumulated across app versions.
//! Missing arrays read as empty, recipes that are not objects are dropped,
//! and recipes from before elaborations existed get their top-level
//! `ingredients` and `instructions` moved into a single elaboration.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use escandallo_core::constants::{backup::FORMAT_VERSION, labels};
use escandallo_core::errors::{AppError, AppResult};
use escandallo_core::models::{generate_id, Menu, Product, Recipe, UserProfile};
use escandallo_costing::CostingConfig;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, info, warn};

/// Keys of the service-details block, all plain strings
const SERVICE_DETAIL_KEYS: [&str; 6] = [
    "presentation",
    "servingTemp",
    "cutlery",
    "passTime",
    "serviceType",
    "clientDescription",
];

/// Complete snapshot of a kitchen's data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackupDocument {
    /// Format version
    pub version: u32,
    /// When the backup was taken
    pub timestamp: DateTime<Utc>,
    /// Recipe technical sheets
    pub recipes: Vec<Recipe>,
    /// Master product catalog, in store order
    pub products: Vec<Product>,
    /// Author profile
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<UserProfile>,
    /// Event menus
    #[serde(default)]
    pub menus: Vec<Menu>,
}

impl BackupDocument {
    /// Create a current-version backup of the given data, timestamped now
    #[must_use]
    pub fn new(
        recipes: Vec<Recipe>,
        products: Vec<Product>,
        profile: Option<UserProfile>,
        menus: Vec<Menu>,
    ) -> Self {
        Self {
            version: FORMAT_VERSION,
            timestamp: Utc::now(),
            recipes,
            products,
            profile,
            menus,
        }
    }

    /// Restore a backup from JSON text using the global configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not JSON or its root is not an object
    pub fn from_json_str(json: &str) -> AppResult<Self> {
        Self::restore(json, CostingConfig::global())
    }

    /// Restore a backup from JSON text
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not JSON or its root is not an object
    pub fn restore(json: &str, config: &CostingConfig) -> AppResult<Self> {
        let root: Value = serde_json::from_str(json)?;
        let Value::Object(mut root) = root else {
            return Err(AppError::invalid_format(
                "Backup root must be a JSON object",
            ));
        };

        let version = root
            .get("version")
            .and_then(Value::as_u64)
            .map_or(FORMAT_VERSION, |v| u32::try_from(v).unwrap_or(u32::MAX));
        if version > FORMAT_VERSION {
            warn!(
                version,
                supported = FORMAT_VERSION,
                "Backup was written by a newer format version"
            );
        }

        let timestamp = root
            .get("timestamp")
            .and_then(Value::as_str)
            .and_then(|raw| DateTime::parse_from_rfc3339(raw).ok())
            .map_or_else(Utc::now, |parsed| parsed.with_timezone(&Utc));

        let raw_recipes = take_array(&mut root, "recipes");
        let recipe_count = raw_recipes.len();
        let recipes: Vec<Recipe> = raw_recipes
            .into_iter()
            .filter_map(|raw| restore_recipe(raw, &config.default_elaboration_name))
            .collect();

        let products: Vec<Product> = restore_records(take_array(&mut root, "products"), "product");
        let menus: Vec<Menu> = restore_records(take_array(&mut root, "menus"), "menu");

        let profile = match root.remove("profile") {
            Some(raw @ Value::Object(_)) => match serde_json::from_value(raw) {
                Ok(profile) => Some(profile),
                Err(e) => {
                    warn!(error = %e, "Dropping unreadable profile");
                    None
                }
            },
            _ => None,
        };

        info!(
            version,
            recipes = recipes.len(),
            dropped_recipes = recipe_count - recipes.len(),
            products = products.len(),
            menus = menus.len(),
            "Backup restored"
        );

        Ok(Self {
            version,
            timestamp,
            recipes,
            products,
            profile,
            menus,
        })
    }

    /// Read and restore a backup file with the global configuration
    ///
    /// # Errors
    ///
    /// Returns a storage error if the file cannot be read, or a parse error
    /// if its content is not a backup object
    pub fn load_file(path: impl AsRef<Path>) -> AppResult<Self> {
        Self::load_file_with(path, CostingConfig::global())
    }

    /// Read and restore a backup file with an explicit configuration
    ///
    /// # Errors
    ///
    /// Same as [`Self::load_file`]
    pub fn load_file_with(path: impl AsRef<Path>, config: &CostingConfig) -> AppResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| AppError::from(e).with_resource_id(path.display().to_string()))?;
        debug!(path = %path.display(), bytes = content.len(), "Read backup file");
        Self::restore(&content, config).map_err(|e| e.with_resource_id(path.display().to_string()))
    }

    /// Serialize the backup as pretty-printed JSON in the current format version
    ///
    /// # Errors
    ///
    /// Returns a serialization error if a value cannot be encoded
    pub fn to_json(&self) -> AppResult<String> {
        let current = Self {
            version: FORMAT_VERSION,
            ..self.clone()
        };
        Ok(serde_json::to_string_pretty(&current)?)
    }

    /// Write the backup to a file
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails
    pub fn save_file(&self, path: impl AsRef<Path>) -> AppResult<()> {
        let path = path.as_ref();
        fs::write(path, self.to_json()?)
            .map_err(|e| AppError::from(e).with_resource_id(path.display().to_string()))?;
        info!(path = %path.display(), recipes = self.recipes.len(), "Backup written");
        Ok(())
    }
}

fn take_array(root: &mut Map<String, Value>, key: &str) -> Vec<Value> {
    match root.remove(key) {
        Some(Value::Array(items)) => items,
        Some(other) => {
            warn!(key, kind = %json_kind(&other), "Backup field is not an array, ignoring it");
            Vec::new()
        }
        None => Vec::new(),
    }
}

fn restore_records<T: DeserializeOwned>(items: Vec<Value>, kind: &str) -> Vec<T> {
    items
        .into_iter()
        .filter_map(|item| match serde_json::from_value(item) {
            Ok(record) => Some(record),
            Err(e) => {
                warn!(kind, error = %e, "Dropping unreadable record");
                None
            }
        })
        .collect()
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn is_blank(value: Option<&Value>) -> bool {
    !value.and_then(Value::as_str).is_some_and(|s| !s.is_empty())
}

fn ensure_id(fields: &mut Map<String, Value>) {
    let id = match fields.remove("id") {
        Some(Value::String(id)) if !id.is_empty() => id,
        Some(Value::Number(id)) => id.to_string(),
        _ => generate_id(),
    };
    fields.insert("id".to_owned(), Value::String(id));
}

fn string_or_empty(value: Option<Value>) -> Value {
    match value {
        Some(Value::String(s)) => Value::String(s),
        _ => Value::String(String::new()),
    }
}

fn array_or_empty(value: Option<Value>) -> Value {
    match value {
        Some(Value::Array(items)) => Value::Array(items),
        _ => Value::Array(Vec::new()),
    }
}

fn sanitize_ingredients(value: Option<Value>) -> Value {
    let Some(Value::Array(items)) = value else {
        return Value::Array(Vec::new());
    };
    Value::Array(
        items
            .into_iter()
            .filter_map(|item| match item {
                Value::Object(mut fields) => {
                    for key in ["name", "unit"] {
                        let text = string_or_empty(fields.remove(key));
                        fields.insert(key.to_owned(), text);
                    }
                    Some(Value::Object(fields))
                }
                _ => None,
            })
            .collect(),
    )
}

fn sanitize_elaboration(raw: Value, default_name: &str) -> Option<Value> {
    let Value::Object(mut fields) = raw else {
        return None;
    };
    ensure_id(&mut fields);
    if !matches!(fields.get("name"), Some(Value::String(_))) {
        fields.insert("name".to_owned(), Value::String(default_name.to_owned()));
    }
    let ingredients = sanitize_ingredients(fields.remove("ingredients"));
    fields.insert("ingredients".to_owned(), ingredients);
    let photos = array_or_empty(fields.remove("photos"));
    fields.insert("photos".to_owned(), photos);
    let instructions = string_or_empty(fields.remove("instructions"));
    fields.insert("instructions".to_owned(), instructions);
    Some(Value::Object(fields))
}

fn legacy_elaboration(fields: &mut Map<String, Value>, default_name: &str) -> Value {
    let mut elaboration = Map::new();
    elaboration.insert("id".to_owned(), Value::String(generate_id()));
    elaboration.insert("name".to_owned(), Value::String(default_name.to_owned()));
    elaboration.insert(
        "ingredients".to_owned(),
        sanitize_ingredients(fields.remove("ingredients")),
    );
    elaboration.insert(
        "instructions".to_owned(),
        string_or_empty(fields.remove("instructions")),
    );
    elaboration.insert("photos".to_owned(), Value::Array(Vec::new()));
    Value::Object(elaboration)
}

fn service_details(raw: Option<Value>) -> Value {
    let mut source = match raw {
        Some(Value::Object(fields)) => fields,
        _ => Map::new(),
    };
    let mut details = Map::new();
    for key in SERVICE_DETAIL_KEYS {
        let value = match source.remove(key) {
            Some(Value::String(s)) if !s.is_empty() => s,
            _ if key == "serviceType" => labels::DEFAULT_SERVICE_TYPE.to_owned(),
            _ => String::new(),
        };
        details.insert(key.to_owned(), Value::String(value));
    }
    Value::Object(details)
}

/// Bring one stored recipe up to the current shape
///
/// Returns `None` for entries that are not objects or that still cannot be
/// read after migration.
pub fn restore_recipe(raw: Value, default_elaboration_name: &str) -> Option<Recipe> {
    let mut fields = match raw {
        Value::Object(fields) => fields,
        other => {
            warn!(kind = %json_kind(&other), "Dropping recipe entry that is not an object");
            return None;
        }
    };

    ensure_id(&mut fields);
    if is_blank(fields.get("name")) {
        fields.insert(
            "name".to_owned(),
            Value::String(labels::UNNAMED_RECIPE.to_owned()),
        );
    }
    let process_photos = array_or_empty(fields.remove("processPhotos"));
    fields.insert("processPhotos".to_owned(), process_photos);

    // Null strings fall back to the recipe defaults
    for key in ["category", "yieldUnit"] {
        if !matches!(fields.get(key), Some(Value::String(_))) {
            fields.remove(key);
        }
    }

    let mut elaborations: Vec<Value> = match fields.remove("elaborations") {
        Some(Value::Array(items)) => items
            .into_iter()
            .filter_map(|item| sanitize_elaboration(item, default_elaboration_name))
            .collect(),
        _ => Vec::new(),
    };
    // A recipe always keeps at least one elaboration
    if elaborations.is_empty() {
        debug!("Migrating legacy recipe ingredients into a single elaboration");
        elaborations.push(legacy_elaboration(&mut fields, default_elaboration_name));
    }
    fields.remove("ingredients");
    fields.remove("instructions");
    fields.insert("elaborations".to_owned(), Value::Array(elaborations));

    let details = service_details(fields.remove("serviceDetails"));
    fields.insert("serviceDetails".to_owned(), details);

    let id = fields
        .get("id")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_owned();
    match serde_json::from_value(Value::Object(fields)) {
        Ok(recipe) => Some(recipe),
        Err(e) => {
            warn!(recipe_id = %id, error = %e, "Dropping recipe that cannot be read");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_service_details_defaults() {
        let details = service_details(Some(json!({
            "cutlery": "Pala de pescado",
            "passTime": null
        })));
        assert_eq!(details["cutlery"], "Pala de pescado");
        assert_eq!(details["passTime"], "");
        assert_eq!(details["serviceType"], "Emplatado");
    }

    #[test]
    fn test_empty_elaborations_migrate_legacy_fields() {
        let recipe = restore_recipe(
            json!({
                "id": "r1",
                "name": "Gazpacho",
                "elaborations": [],
                "ingredients": [{ "name": "Tomate", "quantity": "1,5", "unit": "kg" }],
                "instructions": "Triturar"
            }),
            "Elaboración Principal",
        )
        .unwrap();
        assert_eq!(recipe.elaborations.len(), 1);
        assert_eq!(recipe.elaborations[0].instructions, "Triturar");
        assert!((recipe.elaborations[0].ingredients[0].quantity.value() - 1.5).abs() < 1e-12);
    }

    #[test]
    fn test_non_object_recipe_is_dropped() {
        assert!(restore_recipe(json!("not a recipe"), "Base").is_none());
        assert!(restore_recipe(Value::Null, "Base").is_none());
    }
}
