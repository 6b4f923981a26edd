// ABOUTME: Product catalog snapshot with case-insensitive exact-name lookup
// ABOUTME: ProductLookup is the seam the cost and allergen functions receive their catalog through
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Escandallo Kitchen Tools

use std::collections::HashMap;

use escandallo_core::models::Product;

/// Resolve an ingredient name to its master product
///
/// Matching is case-insensitive equality on the full name: no trimming, no
/// partial matches. A miss is a normal outcome, not an error.
pub trait ProductLookup {
    /// Find the product whose name equals `name` ignoring case
    fn find_product(&self, name: &str) -> Option<&Product>;
}

/// Immutable catalog snapshot indexed by lowercased name
///
/// Built once from the store's ordered product list and shared by reference
/// for the duration of a computation. When two products share a key the
/// first one in list order wins, like a linear first-match search.
#[derive(Debug, Clone, Default)]
pub struct ProductCatalog {
    products: Vec<Product>,
    index: HashMap<String, usize>,
}

impl ProductCatalog {
    /// Build the catalog from an ordered product list
    #[must_use]
    pub fn from_products(products: Vec<Product>) -> Self {
        let mut index = HashMap::with_capacity(products.len());
        for (position, product) in products.iter().enumerate() {
            index.entry(product.lookup_key()).or_insert(position);
        }
        Self { products, index }
    }

    /// Products in store order
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Number of products held
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog holds no products
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl FromIterator<Product> for ProductCatalog {
    fn from_iter<I: IntoIterator<Item = Product>>(iter: I) -> Self {
        Self::from_products(iter.into_iter().collect())
    }
}

impl ProductLookup for ProductCatalog {
    fn find_product(&self, name: &str) -> Option<&Product> {
        self.index
            .get(&name.to_lowercase())
            .and_then(|&position| self.products.get(position))
    }
}

impl ProductLookup for [Product] {
    fn find_product(&self, name: &str) -> Option<&Product> {
        let key = name.to_lowercase();
        self.iter().find(|product| product.lookup_key() == key)
    }
}

impl ProductLookup for Vec<Product> {
    fn find_product(&self, name: &str) -> Option<&Product> {
        self.as_slice().find_product(name)
    }
}

impl<T: ProductLookup + ?Sized> ProductLookup for &T {
    fn find_product(&self, name: &str) -> Option<&Product> {
        (**self).find_product(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Product> {
        vec![
            Product::new("ACEITE DE OLIVA V.E. Arbequina", Some(8.03), "Litro"),
            Product::new("Harina de trigo", Some(0.9), "Kg").with_allergens(["Gluten"]),
            Product::new("harina de TRIGO", Some(5.0), "Kg"),
        ]
    }

    #[test]
    fn test_case_insensitive_exact_match() {
        let catalog = ProductCatalog::from_products(sample());
        let product = catalog.find_product("aceite de oliva v.e. arbequina").unwrap();
        assert_eq!(product.price, Some(8.03));
        assert!(catalog.find_product("ACEITE DE OLIVA").is_none());
        assert!(catalog.find_product(" Harina de trigo").is_none());
    }

    #[test]
    fn test_first_duplicate_wins_like_slice_search() {
        let products = sample();
        let catalog = ProductCatalog::from_products(products.clone());
        let from_index = catalog.find_product("HARINA DE TRIGO").unwrap();
        let from_slice = products.as_slice().find_product("HARINA DE TRIGO").unwrap();
        assert_eq!(from_index, from_slice);
        assert_eq!(from_index.price, Some(0.9));
        assert_eq!(catalog.len(), 3);
    }

    #[test]
    fn test_unicode_names_fold_case() {
        let catalog: ProductCatalog = vec![Product::new("ACEITE SÉSAMO", Some(11.42), "Litro")]
            .into_iter()
            .collect();
        assert!(catalog.find_product("aceite sésamo").is_some());
    }
}
