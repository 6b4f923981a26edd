// ABOUTME: Allergen aggregation over every ingredient of every elaboration of a recipe
// ABOUTME: Set union of matched products' tags, plus the 14-entry presence grid for display
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Escandallo Kitchen Tools

use std::collections::BTreeSet;

use escandallo_core::models::{Allergen, Recipe};

use crate::catalog::ProductLookup;

/// Union the allergen tags of every product the recipe's ingredients match
///
/// Tags pass through verbatim; unmatched ingredients contribute nothing.
/// The result does not depend on ingredient or elaboration order.
#[must_use]
pub fn aggregate_allergens<L: ProductLookup + ?Sized>(
    recipe: &Recipe,
    catalog: &L,
) -> BTreeSet<String> {
    recipe
        .ingredients()
        .filter_map(|(_, ingredient)| catalog.find_product(&ingredient.name))
        .flat_map(|product| product.allergens.iter().cloned())
        .collect()
}

/// Presence of each regulated allergen in an aggregated tag set
///
/// Tags are resolved with [`Allergen::from_label`], so English names and
/// supplier aliases light up the right cell.
#[must_use]
pub fn allergen_matrix(tags: &BTreeSet<String>) -> Vec<(Allergen, bool)> {
    let present: BTreeSet<Allergen> = tags
        .iter()
        .filter_map(|tag| Allergen::from_label(tag))
        .collect();
    Allergen::ALL
        .into_iter()
        .map(|allergen| (allergen, present.contains(&allergen)))
        .collect()
}

/// Tags that are not part of the regulated vocabulary
#[must_use]
pub fn unrecognized_allergens(tags: &BTreeSet<String>) -> Vec<&str> {
    tags.iter()
        .filter(|tag| Allergen::from_label(tag).is_none())
        .map(String::as_str)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matrix_marks_present_allergens() {
        let tags: BTreeSet<String> = ["Gluten", "Soy", "frutos secos"]
            .into_iter()
            .map(str::to_owned)
            .collect();
        let matrix = allergen_matrix(&tags);
        assert_eq!(matrix.len(), 14);
        let present: Vec<Allergen> = matrix
            .into_iter()
            .filter_map(|(allergen, on)| on.then_some(allergen))
            .collect();
        assert_eq!(
            present,
            vec![Allergen::Gluten, Allergen::Soy, Allergen::TreeNuts]
        );
    }

    #[test]
    fn test_unrecognized_tags_are_reported() {
        let tags: BTreeSet<String> = ["Leche", "Picante"].into_iter().map(str::to_owned).collect();
        assert_eq!(unrecognized_allergens(&tags), vec!["Picante"]);
    }
}
