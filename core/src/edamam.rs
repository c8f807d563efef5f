use anyhow::Result;
use log::debug;
use rand::Rng;
use rand::seq::IndexedRandom;
use serde::Deserialize;

use crate::models::Recipe;

/// Most ingredients combined into one search query.
pub const MAX_QUERY_INGREDIENTS: usize = 3;

#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub hits: Vec<Hit>,
}

#[derive(Debug, Deserialize)]
pub struct Hit {
    pub recipe: Recipe,
}

impl SearchResponse {
    #[must_use]
    pub fn into_first_recipe(self) -> Option<Recipe> {
        self.hits.into_iter().next().map(|h| h.recipe)
    }
}

/// Query string for a v2 public recipe search returning a single hit.
#[must_use]
pub fn search_params<'a>(
    app_id: &'a str,
    app_key: &'a str,
    query: &'a str,
) -> [(&'static str, &'a str); 6] {
    [
        ("type", "public"),
        ("app_id", app_id),
        ("app_key", app_key),
        ("q", query),
        ("random", "true"),
        ("to", "1"),
    ]
}

/// Recipe search backend.
///
/// The CLI implements this with reqwest; tests use a canned fake.
pub trait RecipeSearch {
    /// First recipe matching `query`, or `None` when there are no hits.
    fn search(&self, query: &str) -> Result<Option<Recipe>>;
}

/// Source of the randomness used to vary search queries. The search API has
/// no random endpoint, so we randomize the query and take the first hit.
pub trait QueryPicker {
    fn pick_category<'a>(&mut self, categories: &[&'a str]) -> Option<&'a str>;

    /// Up to `max` distinct ingredients, drawn without replacement.
    fn pick_ingredients(&mut self, ingredients: &[String], max: usize) -> Vec<String>;
}

pub struct RandomPicker<R> {
    rng: R,
}

impl<R: Rng> RandomPicker<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> QueryPicker for RandomPicker<R> {
    fn pick_category<'a>(&mut self, categories: &[&'a str]) -> Option<&'a str> {
        categories.choose(&mut self.rng).copied()
    }

    fn pick_ingredients(&mut self, ingredients: &[String], max: usize) -> Vec<String> {
        ingredients
            .choose_multiple(&mut self.rng, max.min(ingredients.len()))
            .cloned()
            .collect()
    }
}

impl<T: RecipeSearch + ?Sized> RecipeSearch for Box<T> {
    fn search(&self, query: &str) -> Result<Option<Recipe>> {
        (**self).search(query)
    }
}

impl<T: QueryPicker + ?Sized> QueryPicker for Box<T> {
    fn pick_category<'a>(&mut self, categories: &[&'a str]) -> Option<&'a str> {
        (**self).pick_category(categories)
    }

    fn pick_ingredients(&mut self, ingredients: &[String], max: usize) -> Vec<String> {
        (**self).pick_ingredients(ingredients, max)
    }
}

pub struct RecipeFinder<S, P> {
    search: S,
    picker: P,
}

impl<S: RecipeSearch, P: QueryPicker> RecipeFinder<S, P> {
    pub fn new(search: S, picker: P) -> Self {
        Self { search, picker }
    }

    /// Search one randomly chosen category and return its first hit.
    pub fn random_recipe(&mut self, categories: &[&str]) -> Result<Option<Recipe>> {
        let Some(category) = self.picker.pick_category(categories) else {
            return Ok(None);
        };
        debug!("random recipe query: {category}");
        self.search.search(category)
    }

    /// Search for a recipe using at most three of the given ingredients.
    pub fn recipe_for_ingredients(&mut self, ingredients: &[String]) -> Result<Option<Recipe>> {
        let picked = self
            .picker
            .pick_ingredients(ingredients, MAX_QUERY_INGREDIENTS);
        if picked.is_empty() {
            return Ok(None);
        }
        let query = picked.join(",");
        debug!("ingredient recipe query: {query}");
        self.search.search(&query)
    }
}
