// ABOUTME: Fixed seed catalog loaded into the recipe store at startup
// ABOUTME: Five recipes spanning five cuisines with ids 1 through 5
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Smart Recipe Explorer Contributors

use crate::models::Recipe;

struct SeedRecipe {
    name: &'static str,
    ingredients: &'static [&'static str],
    instructions: &'static str,
    cuisine: &'static str,
    servings: u32,
    prep_time: u32,
    cook_time: u32,
}

const SEED: &[SeedRecipe] = &[
    SeedRecipe {
        name: "Veg Fried Rice",
        ingredients: &["rice", "vegetables", "soy sauce", "egg", "garlic"],
        instructions: "Heat oil in a wok, stir fry vegetables until cooked, add rice and soy sauce, mix well.",
        cuisine: "Asian",
        servings: 4,
        prep_time: 15,
        cook_time: 20,
    },
    SeedRecipe {
        name: "Pasta Alfredo",
        ingredients: &["pasta", "cream", "cheese", "butter", "garlic"],
        instructions: "Cook pasta, prepare sauce with cream and cheese, mix together and serve hot.",
        cuisine: "Italian",
        servings: 4,
        prep_time: 10,
        cook_time: 25,
    },
    SeedRecipe {
        name: "Chicken Tikka Masala",
        ingredients: &["chicken", "yogurt", "tomato sauce", "cream", "spices"],
        instructions: "Marinate chicken in yogurt and spices, grill, then simmer in tomato cream sauce.",
        cuisine: "Indian",
        servings: 4,
        prep_time: 30,
        cook_time: 40,
    },
    SeedRecipe {
        name: "Caesar Salad",
        ingredients: &["lettuce", "croutons", "parmesan cheese", "caesar dressing", "lemon"],
        instructions: "Toss lettuce with dressing, add croutons and parmesan cheese, serve fresh.",
        cuisine: "American",
        servings: 2,
        prep_time: 10,
        cook_time: 0,
    },
    SeedRecipe {
        name: "Tacos Al Pastor",
        ingredients: &["pork", "pineapple", "tortillas", "onion", "cilantro"],
        instructions: "Season and cook pork with pineapple, serve in tortillas with fresh cilantro and onion.",
        cuisine: "Mexican",
        servings: 4,
        prep_time: 20,
        cook_time: 30,
    },
];

/// The seed catalog, ids assigned 1..=5 in order
#[must_use]
pub fn seed_recipes() -> Vec<Recipe> {
    SEED.iter()
        .zip(1..)
        .map(|(seed, id)| Recipe {
            id,
            name: seed.name.to_owned(),
            ingredients: seed.ingredients.iter().map(|s| (*s).to_owned()).collect(),
            instructions: seed.instructions.to_owned(),
            cuisine: seed.cuisine.to_owned(),
            servings: Some(seed.servings),
            prep_time: Some(seed.prep_time),
            cook_time: Some(seed.cook_time),
        })
        .collect()
}
