// ABOUTME: The fourteen regulated allergen categories shown on every recipe ficha
// ABOUTME: Labels follow the Spanish catalog data, with English names and common aliases
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Escandallo Kitchen Tools

use serde::{Deserialize, Serialize};
use std::fmt;

/// Regulated allergen category
///
/// Catalog products store allergens as free strings; this enum is the fixed
/// vocabulary the display layer renders as a presence grid. The aggregator
/// never filters tags through it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Allergen {
    /// Cereals containing gluten
    #[serde(rename = "Gluten")]
    Gluten,
    /// Crustaceans
    #[serde(rename = "Crustáceos")]
    Crustaceans,
    /// Eggs
    #[serde(rename = "Huevos")]
    Eggs,
    /// Fish
    #[serde(rename = "Pescado")]
    Fish,
    /// Peanuts
    #[serde(rename = "Cacahuetes")]
    Peanuts,
    /// Soy
    #[serde(rename = "Soja")]
    Soy,
    /// Milk and lactose
    #[serde(rename = "Leche")]
    Milk,
    /// Tree nuts
    #[serde(rename = "Frutos de cáscara")]
    TreeNuts,
    /// Celery
    #[serde(rename = "Apio")]
    Celery,
    /// Mustard
    #[serde(rename = "Mostaza")]
    Mustard,
    /// Sesame
    #[serde(rename = "Sésamo")]
    Sesame,
    /// Sulphur dioxide and sulphites
    #[serde(rename = "Sulfitos")]
    Sulfites,
    /// Lupin
    #[serde(rename = "Altramuces")]
    Lupin,
    /// Molluscs
    #[serde(rename = "Moluscos")]
    Molluscs,
}

impl Allergen {
    /// Every category in display order
    pub const ALL: [Self; 14] = [
        Self::Gluten,
        Self::Crustaceans,
        Self::Eggs,
        Self::Fish,
        Self::Peanuts,
        Self::Soy,
        Self::Milk,
        Self::TreeNuts,
        Self::Celery,
        Self::Mustard,
        Self::Sesame,
        Self::Sulfites,
        Self::Lupin,
        Self::Molluscs,
    ];

    /// Label as stored on catalog products
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Gluten => "Gluten",
            Self::Crustaceans => "Crustáceos",
            Self::Eggs => "Huevos",
            Self::Fish => "Pescado",
            Self::Peanuts => "Cacahuetes",
            Self::Soy => "Soja",
            Self::Milk => "Leche",
            Self::TreeNuts => "Frutos de cáscara",
            Self::Celery => "Apio",
            Self::Mustard => "Mostaza",
            Self::Sesame => "Sésamo",
            Self::Sulfites => "Sulfitos",
            Self::Lupin => "Altramuces",
            Self::Molluscs => "Moluscos",
        }
    }

    /// English name
    #[must_use]
    pub const fn english_name(&self) -> &'static str {
        match self {
            Self::Gluten => "Gluten",
            Self::Crustaceans => "Crustaceans",
            Self::Eggs => "Eggs",
            Self::Fish => "Fish",
            Self::Peanuts => "Peanuts",
            Self::Soy => "Soy",
            Self::Milk => "Milk",
            Self::TreeNuts => "Tree nuts",
            Self::Celery => "Celery",
            Self::Mustard => "Mustard",
            Self::Sesame => "Sesame",
            Self::Sulfites => "Sulfites",
            Self::Lupin => "Lupin",
            Self::Molluscs => "Molluscs",
        }
    }

    /// Resolve a free-text tag to a category
    ///
    /// Matches the Spanish label or English name case-insensitively, plus the
    /// aliases suppliers commonly use ("frutos secos", "trigo").
    #[must_use]
    pub fn from_label(tag: &str) -> Option<Self> {
        let normalized = tag.trim().to_lowercase();
        match normalized.as_str() {
            "frutos secos" => return Some(Self::TreeNuts),
            "trigo" => return Some(Self::Gluten),
            _ => {}
        }
        Self::ALL.into_iter().find(|allergen| {
            allergen.label().to_lowercase() == normalized
                || allergen.english_name().to_lowercase() == normalized
        })
    }
}

impl fmt::Display for Allergen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
