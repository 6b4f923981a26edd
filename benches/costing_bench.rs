// ABOUTME: Criterion benchmarks for the recipe costing engine
// ABOUTME: Measures single-recipe costing, sequential vs parallel batches, allergens and orders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Escandallo Kitchen Tools

//! Criterion benchmarks for the recipe costing engine.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

mod common;

use common::fixtures::{generate_catalog, generate_recipes, RecipeBookSize};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use escandallo_core::models::Menu;
use escandallo_costing::{
    aggregate_allergens, calculate_cost, consolidate_order, cost_many, ProductCatalog,
};

const CATALOG_SIZE: usize = 400;

/// Indexed catalog against a linear scan for one recipe
fn bench_single_recipe(c: &mut Criterion) {
    let products = generate_catalog(CATALOG_SIZE);
    let catalog = ProductCatalog::from_products(products.clone());
    let recipes = generate_recipes(RecipeBookSize::Small, CATALOG_SIZE);
    let recipe = &recipes[0];

    let mut group = c.benchmark_group("calculate_cost");
    group.bench_function("indexed_catalog", |b| {
        b.iter(|| calculate_cost(black_box(recipe), &catalog));
    });
    group.bench_function("product_slice", |b| {
        b.iter(|| calculate_cost(black_box(recipe), products.as_slice()));
    });
    group.finish();
}

/// Sequential against rayon batch costing
#[allow(clippy::cast_possible_truncation)]
fn bench_recipe_book(c: &mut Criterion) {
    let catalog = ProductCatalog::from_products(generate_catalog(CATALOG_SIZE));
    let mut group = c.benchmark_group("recipe_book");

    for size in [RecipeBookSize::Small, RecipeBookSize::Large] {
        let recipes = generate_recipes(size, CATALOG_SIZE);
        group.throughput(Throughput::Elements(recipes.len() as u64));

        group.bench_with_input(
            BenchmarkId::new("sequential", recipes.len()),
            &recipes,
            |b, recipes| {
                b.iter(|| {
                    recipes
                        .iter()
                        .map(|recipe| calculate_cost(recipe, &catalog))
                        .collect::<Vec<_>>()
                });
            },
        );
        group.bench_with_input(
            BenchmarkId::new("cost_many", recipes.len()),
            &recipes,
            |b, recipes| {
                b.iter(|| cost_many(black_box(recipes), &catalog));
            },
        );
    }
    group.finish();
}

fn bench_allergens(c: &mut Criterion) {
    let catalog = ProductCatalog::from_products(generate_catalog(CATALOG_SIZE));
    let recipes = generate_recipes(RecipeBookSize::Small, CATALOG_SIZE);

    c.bench_function("aggregate_allergens", |b| {
        b.iter(|| {
            recipes
                .iter()
                .map(|recipe| aggregate_allergens(recipe, &catalog).len())
                .sum::<usize>()
        });
    });
}

fn bench_production_order(c: &mut Criterion) {
    let catalog = ProductCatalog::from_products(generate_catalog(CATALOG_SIZE));
    let recipes = generate_recipes(RecipeBookSize::Small, CATALOG_SIZE);
    let mut menu = Menu::new("Banquete");
    for recipe in recipes.iter().take(12) {
        menu.toggle_recipe(&recipe.id);
    }

    c.bench_function("consolidate_order_12_recipes", |b| {
        b.iter(|| consolidate_order(&menu, &recipes, &catalog, black_box(250.0), "Varios / Otros"));
    });
}

criterion_group!(
    benches,
    bench_single_recipe,
    bench_recipe_book,
    bench_allergens,
    bench_production_order
);
criterion_main!(benches);
