// ABOUTME: Core data models for recipes, search filters, stats and suggestion results
// ABOUTME: Carries serde wire shapes plus validation and matching predicates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Smart Recipe Explorer Contributors

//! # Data Models
//!
//! Wire and domain types for the recipe catalog. A [`Recipe`] is what the
//! store holds and returns; a [`RecipeInput`] is what clients send on create
//! and replace. The store owns id assignment, so inputs never carry one.

use crate::constants::limits;
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// Identifier assigned to a recipe by the store
pub type RecipeId = u64;

fn default_servings() -> Option<u32> {
    Some(limits::DEFAULT_SERVINGS)
}

/// A recipe held in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    /// Store-assigned identifier, immutable once assigned
    pub id: RecipeId,
    /// Display name
    pub name: String,
    /// Ordered ingredient list
    pub ingredients: Vec<String>,
    /// Free-text preparation instructions
    pub instructions: String,
    /// Cuisine label, matched case-insensitively
    pub cuisine: String,
    /// Number of servings
    pub servings: Option<u32>,
    /// Preparation time in minutes
    pub prep_time: Option<u32>,
    /// Cooking time in minutes
    pub cook_time: Option<u32>,
}

impl Recipe {
    /// Build a stored recipe from validated input and an assigned id
    #[must_use]
    pub fn from_input(id: RecipeId, input: RecipeInput) -> Self {
        Self {
            id,
            name: input.name,
            ingredients: input.ingredients,
            instructions: input.instructions,
            cuisine: input.cuisine,
            servings: input.servings,
            prep_time: input.prep_time,
            cook_time: input.cook_time,
        }
    }

    /// Case-insensitive exact match on cuisine
    #[must_use]
    pub fn matches_cuisine(&self, cuisine: &str) -> bool {
        self.cuisine.to_lowercase() == cuisine.to_lowercase()
    }

    /// Case-insensitive substring match against any ingredient
    #[must_use]
    pub fn has_ingredient(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        self.ingredients
            .iter()
            .any(|ingredient| ingredient.to_lowercase().contains(&needle))
    }

    /// Prep time is set and within the inclusive bound
    #[must_use]
    pub fn prep_within(&self, max_minutes: u32) -> bool {
        self.prep_time.is_some_and(|t| t <= max_minutes)
    }

    /// Cook time is set and within the inclusive bound
    #[must_use]
    pub fn cook_within(&self, max_minutes: u32) -> bool {
        self.cook_time.is_some_and(|t| t <= max_minutes)
    }
}

/// Client-supplied recipe body for create and replace
///
/// Any `id` field in the body is ignored; the store decides identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeInput {
    /// Display name (1..=200 characters)
    pub name: String,
    /// Ordered ingredient list, at least one entry
    pub ingredients: Vec<String>,
    /// Free-text instructions, at least 10 characters
    pub instructions: String,
    /// Cuisine label
    pub cuisine: String,
    /// Number of servings (defaults to 4 when omitted)
    #[serde(default = "default_servings")]
    pub servings: Option<u32>,
    /// Preparation time in minutes
    #[serde(default)]
    pub prep_time: Option<u32>,
    /// Cooking time in minutes
    #[serde(default)]
    pub cook_time: Option<u32>,
}

impl RecipeInput {
    /// Check the field constraints of the recipe data model
    ///
    /// # Errors
    ///
    /// Returns a validation error naming the first offending field.
    pub fn validate(&self) -> AppResult<()> {
        if self.name.trim().is_empty() {
            return Err(AppError::missing_field("name"));
        }
        if self.name.chars().count() > limits::MAX_NAME_CHARS {
            return Err(AppError::out_of_range(format!(
                "Field 'name' must be at most {} characters",
                limits::MAX_NAME_CHARS
            )));
        }
        if self.ingredients.is_empty() {
            return Err(AppError::invalid_input(
                "Field 'ingredients' must contain at least one ingredient",
            ));
        }
        if self.instructions.chars().count() < limits::MIN_INSTRUCTIONS_CHARS {
            return Err(AppError::out_of_range(format!(
                "Field 'instructions' must be at least {} characters",
                limits::MIN_INSTRUCTIONS_CHARS
            )));
        }
        if self.cuisine.trim().is_empty() {
            return Err(AppError::missing_field("cuisine"));
        }
        Ok(())
    }
}

/// Combined filter for advanced search; absent fields do not constrain
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchFilter {
    /// Exact case-insensitive cuisine
    #[serde(default)]
    pub cuisine: Option<String>,
    /// Case-insensitive ingredient substring
    #[serde(default)]
    pub ingredient: Option<String>,
    /// Inclusive upper bound on prep time
    #[serde(default)]
    pub prep_time_max: Option<u32>,
}

impl SearchFilter {
    /// AND of every supplied predicate; blank strings count as absent
    #[must_use]
    pub fn matches(&self, recipe: &Recipe) -> bool {
        non_blank(self.cuisine.as_deref())
            .map_or(true, |cuisine| recipe.matches_cuisine(cuisine))
            && non_blank(self.ingredient.as_deref())
                .map_or(true, |ingredient| recipe.has_ingredient(ingredient))
            && self
                .prep_time_max
                .map_or(true, |max| recipe.prep_within(max))
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Time bounds for the by-time search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeFilter {
    /// Inclusive upper bound on prep time
    pub max_prep_time: Option<u32>,
    /// Inclusive upper bound on cook time
    pub max_cook_time: Option<u32>,
}

impl TimeFilter {
    /// Recipe satisfies every supplied bound
    #[must_use]
    pub fn matches(&self, recipe: &Recipe) -> bool {
        self.max_prep_time.map_or(true, |max| recipe.prep_within(max))
            && self.max_cook_time.map_or(true, |max| recipe.cook_within(max))
    }
}

/// Aggregate statistics over the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogStats {
    /// Number of recipes in the store
    pub total_recipes: usize,
    /// Distinct cuisines, sorted
    pub cuisines: Vec<String>,
    /// Count of distinct ingredient strings across all recipes
    pub total_unique_ingredients: usize,
    /// Mean prep time in minutes, unset counted as zero
    pub avg_prep_time: f64,
}

/// Free-text recipe suggestion and the tokens it was produced from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionResult {
    /// Suggestion text, or a static explanatory message
    pub suggestion: String,
    /// Echo of the input tokens
    pub ingredients_used: Vec<String>,
}

/// Confirmation returned after a delete
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Human-readable confirmation
    pub message: String,
}
