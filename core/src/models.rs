use serde::Deserialize;

/// Header row shared by the fridge and shopping list files.
pub const PRODUCT_HEADER: &str = "product_name";

/// Token a user has to type to confirm a destructive or optional action.
pub const CONFIRM_TOKEN: &str = "ja";

/// Query terms used when the user asks for a random recipe.
pub const RANDOM_CATEGORIES: &[&str] = &[
    "chicken",
    "beef",
    "vegetarian",
    "pasta",
    "soup",
    "cake",
    "salad",
    "fish",
    "pizza",
    "breakfast",
];

/// A recipe as returned by the recipe search API. Only the fields we show,
/// export or reconcile against are kept.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub label: String,
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub meal_type: Vec<String>,
    #[serde(default)]
    pub dish_type: Vec<String>,
    #[serde(default)]
    pub cuisine_type: Vec<String>,
    #[serde(default)]
    pub ingredient_lines: Vec<String>,
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    #[serde(default)]
    pub calories: f64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Ingredient {
    #[serde(default)]
    pub food: String,
}

impl Recipe {
    /// Lower-cased ingredient food names in recipe order.
    #[must_use]
    pub fn ingredient_foods(&self) -> Vec<String> {
        self.ingredients
            .iter()
            .map(|i| i.food.trim().to_lowercase())
            .filter(|f| !f.is_empty())
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WeatherSnapshot {
    /// Degrees Celsius.
    pub temperature: f64,
    pub condition: String,
}

/// Result of adding a product to a store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    Added(String),
    AlreadyExists(String),
}

/// Result of removing one product, or all of them, from a store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoveOutcome {
    Removed(String),
    NotFound(String),
    Cleared(usize),
    Cancelled,
    AlreadyEmpty,
}

/// Returns true when the answer to a yes/no prompt is the confirm token.
#[must_use]
pub fn is_confirmation(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case(CONFIRM_TOKEN)
}
