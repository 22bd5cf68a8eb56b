// ABOUTME: Prompt templates for recipe suggestion requests
// ABOUTME: Detailed chef prompt loaded at compile time plus a one-line fallback prompt
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Smart Recipe Explorer Contributors

//! # Suggestion Prompts
//!
//! The detailed prompt lives in a markdown file so it can be edited without
//! touching code. `{input}` is replaced with the comma-joined tokens.

/// Chef prompt template asking for a fully formatted recipe
pub const RECIPE_CHEF_PROMPT: &str = include_str!("recipe_chef.md");

const INPUT_PLACEHOLDER: &str = "{input}";

/// Which prompt a provider in the chain is given
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptStyle {
    /// Full chef prompt: name, cuisine, times, servings, ingredients, steps, tips
    Detailed,
    /// Single-sentence request for a simple recipe
    Simple,
}

impl PromptStyle {
    /// Render the prompt for these tokens
    #[must_use]
    pub fn render(self, tokens: &[String]) -> String {
        match self {
            Self::Detailed => recipe_prompt(tokens),
            Self::Simple => simple_recipe_prompt(tokens),
        }
    }
}

/// Detailed prompt covering both a dish name and an ingredient list
#[must_use]
pub fn recipe_prompt(tokens: &[String]) -> String {
    RECIPE_CHEF_PROMPT
        .trim_end()
        .replace(INPUT_PLACEHOLDER, &tokens.join(", "))
}

/// Short prompt for completion-style models
#[must_use]
pub fn simple_recipe_prompt(tokens: &[String]) -> String {
    format!(
        "Suggest a simple recipe using these ingredients: {}. Include cooking instructions.",
        tokens.join(", ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens() -> Vec<String> {
        vec!["chicken".to_owned(), "garlic".to_owned()]
    }

    #[test]
    fn test_detailed_prompt_embeds_input() {
        let prompt = PromptStyle::Detailed.render(&tokens());
        assert!(prompt.contains("They provided: chicken, garlic"));
        assert!(prompt.contains("**Instructions:**"));
        assert!(!prompt.contains(INPUT_PLACEHOLDER));
    }

    #[test]
    fn test_simple_prompt() {
        assert_eq!(
            PromptStyle::Simple.render(&tokens()),
            "Suggest a simple recipe using these ingredients: chicken, garlic. Include cooking instructions."
        );
    }
}
