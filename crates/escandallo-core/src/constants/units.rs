// ABOUTME: Unit spellings accepted by the costing engine's conversion table
// ABOUTME: Kitchen data is free text in Spanish, so every unit has several spellings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Escandallo Kitchen Tools

/// Ingredient units expressed in grams
pub const GRAM_UNITS: &[&str] = &["g", "gr", "gramos"];

/// Purchase units expressed in kilograms
pub const KILOGRAM_UNITS: &[&str] = &["kg", "kilo", "kilos"];

/// Ingredient units expressed in millilitres
pub const MILLILITRE_UNITS: &[&str] = &["ml", "mililitros"];

/// Ingredient units expressed in centilitres
pub const CENTILITRE_UNITS: &[&str] = &["cl", "centilitros"];

/// Purchase units expressed in litres
pub const LITRE_UNITS: &[&str] = &["l", "litro", "litros"];

/// Grams per kilogram, as a multiplicative factor
pub const GRAMS_TO_KILOGRAMS: f64 = 0.001;

/// Millilitres per litre, as a multiplicative factor
pub const MILLILITRES_TO_LITRES: f64 = 0.001;

/// Centilitres per litre, as a multiplicative factor
pub const CENTILITRES_TO_LITRES: f64 = 0.01;
