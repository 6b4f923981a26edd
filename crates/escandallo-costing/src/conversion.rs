// ABOUTME: Best-effort conversion from an ingredient's unit to the product's purchase unit
// ABOUTME: A fixed table of metric pairs; anything else silently uses factor 1
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Escandallo Kitchen Tools

//! This is a lookup table, not a unit algebra. Only three metric families
//! are recognised; every other pair (including "ud" against "kg") keeps the
//! quantity as-is. The resulting cost can be far off, and
//! [`ConversionKind::Assumed`] lets the display layer point that out.

use escandallo_core::constants::units::{
    CENTILITRES_TO_LITRES, CENTILITRE_UNITS, GRAMS_TO_KILOGRAMS, GRAM_UNITS, KILOGRAM_UNITS,
    LITRE_UNITS, MILLILITRES_TO_LITRES, MILLILITRE_UNITS,
};
use serde::Serialize;
use tracing::debug;

/// Recognised (ingredient units, purchase units, factor) triples
const CONVERSION_TABLE: &[(&[&str], &[&str], f64)] = &[
    (GRAM_UNITS, KILOGRAM_UNITS, GRAMS_TO_KILOGRAMS),
    (MILLILITRE_UNITS, LITRE_UNITS, MILLILITRES_TO_LITRES),
    (CENTILITRE_UNITS, LITRE_UNITS, CENTILITRES_TO_LITRES),
];

/// Where a conversion factor came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConversionKind {
    /// Pair found in the conversion table
    Table,
    /// Both units normalise to the same spelling
    SameUnit,
    /// Unknown pair, factor 1 assumed
    Assumed,
}

/// Multiplicative factor plus its provenance
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct UnitConversion {
    /// Multiply the ingredient quantity by this to get purchase units
    pub factor: f64,
    /// How the factor was obtained
    pub kind: ConversionKind,
}

fn normalize_unit(unit: &str) -> String {
    unit.trim().to_lowercase()
}

/// Classify the conversion between an ingredient unit and a purchase unit
#[must_use]
pub fn classify_conversion(ingredient_unit: &str, purchase_unit: &str) -> UnitConversion {
    let from = normalize_unit(ingredient_unit);
    let to = normalize_unit(purchase_unit);

    if from == to {
        return UnitConversion {
            factor: 1.0,
            kind: ConversionKind::SameUnit,
        };
    }

    for (from_units, to_units, factor) in CONVERSION_TABLE {
        if from_units.contains(&from.as_str()) && to_units.contains(&to.as_str()) {
            return UnitConversion {
                factor: *factor,
                kind: ConversionKind::Table,
            };
        }
    }

    debug!(
        ingredient_unit = %from,
        purchase_unit = %to,
        "No conversion for unit pair, assuming factor 1"
    );
    UnitConversion {
        factor: 1.0,
        kind: ConversionKind::Assumed,
    }
}

/// Factor converting a quantity in `ingredient_unit` into `purchase_unit`
#[must_use]
pub fn conversion_factor(ingredient_unit: &str, purchase_unit: &str) -> f64 {
    classify_conversion(ingredient_unit, purchase_unit).factor
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_factor(from: &str, to: &str, expected: f64) {
        let factor = conversion_factor(from, to);
        assert!(
            (factor - expected).abs() < 1e-12,
            "{from} -> {to}: expected {expected}, got {factor}"
        );
    }

    #[test]
    fn test_table_pairs() {
        for from in ["g", "gr", "gramos"] {
            for to in ["kg", "kilo", "kilos"] {
                assert_factor(from, to, 0.001);
            }
        }
        for from in ["ml", "mililitros"] {
            for to in ["l", "litro", "litros"] {
                assert_factor(from, to, 0.001);
            }
        }
        for from in ["cl", "centilitros"] {
            for to in ["l", "litro", "litros"] {
                assert_factor(from, to, 0.01);
            }
        }
    }

    #[test]
    fn test_normalizes_case_and_whitespace() {
        assert_factor(" G ", "Kg", 0.001);
        assert_factor("ML", " Litro ", 0.001);
        assert_eq!(classify_conversion("CL", "LITROS").kind, ConversionKind::Table);
    }

    #[test]
    fn test_identical_units_are_same_unit() {
        let conversion = classify_conversion("kg", "KG");
        assert_eq!(conversion.kind, ConversionKind::SameUnit);
        assert!((conversion.factor - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_reverse_and_incompatible_pairs_fall_back() {
        // Only ingredient -> purchase direction is in the table
        let reverse = classify_conversion("kg", "g");
        assert_eq!(reverse.kind, ConversionKind::Assumed);
        assert!((reverse.factor - 1.0).abs() < f64::EPSILON);

        let incompatible = classify_conversion("ud", "kg");
        assert_eq!(incompatible.kind, ConversionKind::Assumed);
        assert_factor("ml", "kg", 1.0);
        assert_factor("g", "l", 1.0);
    }
}
