// ABOUTME: In-memory recipe store with id assignment, CRUD and linear-scan search
// ABOUTME: Single owner of the catalog; an async RwLock serializes mutations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Smart Recipe Explorer Contributors

//! # Recipe Store
//!
//! Volatile, ordered collection of [`Recipe`] records. The store is created
//! once per process (usually via [`RecipeStore::seeded`]) and shared behind an
//! `Arc`. Reads take a shared guard, writes an exclusive one, so id assignment
//! and append happen atomically even under concurrent creates.
//!
//! Searches scan the whole list in insertion order and report an empty result
//! as `ResourceNotFound`, matching the HTTP contract of the search endpoints.

mod seed;

pub use seed::seed_recipes;

use crate::errors::{AppError, AppResult};
use crate::models::{CatalogStats, Recipe, RecipeId, RecipeInput, SearchFilter, TimeFilter};
use std::collections::BTreeSet;
use tokio::sync::RwLock;
use tracing::{debug, info};

/// Ordered in-memory recipe collection
#[derive(Debug, Default)]
pub struct RecipeStore {
    recipes: RwLock<Vec<Recipe>>,
}

impl RecipeStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding the given recipes in order
    #[must_use]
    pub fn with_recipes(recipes: Vec<Recipe>) -> Self {
        Self {
            recipes: RwLock::new(recipes),
        }
    }

    /// Create a store pre-populated with the seed catalog
    #[must_use]
    pub fn seeded() -> Self {
        let recipes = seed_recipes();
        info!("Recipe store seeded with {} recipes", recipes.len());
        Self::with_recipes(recipes)
    }

    /// All recipes in insertion order
    pub async fn list(&self) -> Vec<Recipe> {
        self.recipes.read().await.clone()
    }

    /// Look up a recipe by id
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if no recipe has this id.
    pub async fn get(&self, id: RecipeId) -> AppResult<Recipe> {
        self.recipes
            .read()
            .await
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or_else(|| recipe_not_found(id))
    }

    /// Store a new recipe under the next free id
    pub async fn create(&self, input: RecipeInput) -> Recipe {
        let mut recipes = self.recipes.write().await;
        let id = recipes.iter().map(|r| r.id).max().unwrap_or(0) + 1;
        let recipe = Recipe::from_input(id, input);
        recipes.push(recipe.clone());
        debug!(recipe.id = id, "Recipe created");
        recipe
    }

    /// Overwrite every field of an existing recipe except its id
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if no recipe has this id.
    pub async fn replace(&self, id: RecipeId, input: RecipeInput) -> AppResult<Recipe> {
        let mut recipes = self.recipes.write().await;
        let slot = recipes
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| recipe_not_found(id))?;
        *slot = Recipe::from_input(id, input);
        debug!(recipe.id = id, "Recipe replaced");
        Ok(slot.clone())
    }

    /// Remove a recipe, returning a confirmation message
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if no recipe has this id.
    pub async fn delete(&self, id: RecipeId) -> AppResult<String> {
        let mut recipes = self.recipes.write().await;
        let index = recipes
            .iter()
            .position(|r| r.id == id)
            .ok_or_else(|| recipe_not_found(id))?;
        recipes.remove(index);
        debug!(recipe.id = id, "Recipe deleted");
        Ok(format!("Recipe with ID {id} deleted successfully"))
    }

    /// Recipes whose cuisine equals `cuisine`, ignoring case
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` when nothing matches.
    pub async fn search_by_cuisine(&self, cuisine: &str) -> AppResult<Vec<Recipe>> {
        let results = self.filter(|r| r.matches_cuisine(cuisine)).await;
        non_empty(results, || format!("No recipes found for cuisine: {cuisine}"))
    }

    /// Recipes with any ingredient containing `ingredient`, ignoring case
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` when nothing matches.
    pub async fn search_by_ingredient(&self, ingredient: &str) -> AppResult<Vec<Recipe>> {
        let results = self.filter(|r| r.has_ingredient(ingredient)).await;
        non_empty(results, || {
            format!("No recipes found with ingredient: {ingredient}")
        })
    }

    /// Recipes within the supplied prep/cook time bounds
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` when nothing matches.
    pub async fn search_by_time(&self, filter: TimeFilter) -> AppResult<Vec<Recipe>> {
        let results = self.filter(|r| filter.matches(r)).await;
        non_empty(results, || {
            "No recipes match the specified time criteria".to_owned()
        })
    }

    /// Recipes matching every supplied field of `filter`
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` when nothing matches.
    pub async fn advanced_search(&self, filter: &SearchFilter) -> AppResult<Vec<Recipe>> {
        let results = self.filter(|r| filter.matches(r)).await;
        non_empty(results, || "No recipes match the search criteria".to_owned())
    }

    /// Aggregate statistics over the current catalog
    pub async fn stats(&self) -> CatalogStats {
        let recipes = self.recipes.read().await;

        let cuisines: BTreeSet<&str> = recipes.iter().map(|r| r.cuisine.as_str()).collect();
        let ingredients: BTreeSet<&str> = recipes
            .iter()
            .flat_map(|r| r.ingredients.iter().map(String::as_str))
            .collect();

        let avg_prep_time = if recipes.is_empty() {
            0.0
        } else {
            let total: u64 = recipes
                .iter()
                .map(|r| u64::from(r.prep_time.unwrap_or(0)))
                .sum();
            total as f64 / recipes.len() as f64
        };

        CatalogStats {
            total_recipes: recipes.len(),
            cuisines: cuisines.into_iter().map(str::to_owned).collect(),
            total_unique_ingredients: ingredients.len(),
            avg_prep_time,
        }
    }

    async fn filter(&self, predicate: impl Fn(&Recipe) -> bool) -> Vec<Recipe> {
        self.recipes
            .read()
            .await
            .iter()
            .filter(|r| predicate(r))
            .cloned()
            .collect()
    }
}

fn recipe_not_found(id: RecipeId) -> AppError {
    AppError::not_found(format!("Recipe with ID {id} not found"))
}

fn non_empty(results: Vec<Recipe>, message: impl FnOnce() -> String) -> AppResult<Vec<Recipe>> {
    if results.is_empty() {
        Err(AppError::not_found(message()))
    } else {
        Ok(results)
    }
}
