use anyhow::Result;
use log::{info, warn};

use fridgechef_core::export::save_recipe;
use fridgechef_core::menu::{RECIPE_MENU, RecipeAction};
use fridgechef_core::models::{RANDOM_CATEGORIES, Recipe};
use fridgechef_core::reconcile::missing_ingredients;
use fridgechef_core::weather::recipe_category_for;

use super::helpers::INVALID_INPUT;
use super::{App, run_menu, shopping};

const FETCH_FAILED: &str = "Er is iets mis gegaan tijdens het ophalen van de recepten";

pub(crate) fn run(app: &mut App) -> Result<()> {
    run_menu(app, &RECIPE_MENU, |app, action| match action {
        RecipeAction::Random => cmd_recipe_random(app),
        RecipeAction::ByWeather => cmd_recipe_weather(app),
        RecipeAction::FromFridge => cmd_recipe_fridge(app),
    })
}

fn cmd_recipe_random(app: &mut App) -> Result<()> {
    app.console
        .progress("Een willekeurig recept wordt opgehaald...");
    let found = app.finder.random_recipe(RANDOM_CATEGORIES);
    let Some(found) = app.console.report_failure(found, FETCH_FAILED) else {
        return Ok(());
    };
    let Some(recipe) = found else {
        app.console.line("Geen recepten gevonden.");
        return Ok(());
    };

    app.console.recipe_details(&recipe);
    offer_follow_ups(app, &recipe, &recipe.ingredient_foods())
}

fn cmd_recipe_weather(app: &mut App) -> Result<()> {
    let city = app.console.prompt_text("Voer de plaatsnaam in: ")?;
    if city.is_empty() {
        app.console.error(INVALID_INPUT);
        return Ok(());
    }

    let weather = match app.weather.current_weather(&city) {
        Ok(weather) => weather,
        Err(e) => {
            warn!("weather lookup for {city} failed: {e:#}");
            app.console
                .error("Er is een probleem opgetreden met het ophalen van de weerdata.");
            return Ok(());
        }
    };

    let category = recipe_category_for(weather.temperature, &weather.condition);
    app.console.line(format!(
        "Huidige weer in {city}: {}, Temperatuur: {}°C",
        weather.condition, weather.temperature
    ));
    app.console
        .line(format!("Aanbevolen categorie eten is: {category}"));
    info!("weather in {city} suggests {category}");

    let found = app.finder.random_recipe(&[category]);
    let Some(found) = app.console.report_failure(found, FETCH_FAILED) else {
        return Ok(());
    };
    let Some(recipe) = found else {
        app.console
            .line("Geen passend recept gevonden voor deze weersverwachtingen.");
        return Ok(());
    };

    app.console.recipe_details(&recipe);
    offer_follow_ups(app, &recipe, &recipe.ingredient_foods())
}

fn cmd_recipe_fridge(app: &mut App) -> Result<()> {
    let fridge = app.fridge.list()?;
    app.console
        .progress("Er wordt een recept gezocht op basis van je koelkast...");

    let found = app.finder.recipe_for_ingredients(&fridge);
    let Some(found) = app.console.report_failure(found, FETCH_FAILED) else {
        return Ok(());
    };
    let Some(recipe) = found else {
        app.console.line(
            "Geen recept gevonden op basis van je koelkast inhoud. Zitten er producten in je koelkast?",
        );
        return Ok(());
    };

    app.console.recipe_details(&recipe);
    let missing = missing_ingredients(&recipe.ingredient_foods(), &fridge);
    if missing.is_empty() {
        app.console
            .success("Je hebt alle producten in huis voor dit recept");
    } else {
        app.console
            .warning("LET OP: Je mist nog een aantal ingrediënten voor dit recept.");
        app.console
            .line(format!("Missende ingrediënten: {}", missing.join(", ")));
    }
    offer_follow_ups(app, &recipe, &missing)
}

/// Offer to put `ingredients` on the shopping list, then to save the recipe.
fn offer_follow_ups(app: &mut App, recipe: &Recipe, ingredients: &[String]) -> Result<()> {
    if !ingredients.is_empty() {
        if app
            .console
            .confirm("\nIngrediënten toevoegen aan boodschappenlijstje? (ja/nee): ")
        {
            shopping::add_ingredients(app, ingredients)?;
        } else {
            app.console
                .error("Ingrediënten zijn niet toegevoegd aan het boodschappenlijstje.");
        }
    }

    if !app
        .console
        .confirm("\nWilt u dit recept opslaan als bestand? (ja/nee) ")
    {
        return Ok(());
    }
    let saved = save_recipe(&app.recipes_dir, recipe);
    if let Some(path) = app
        .console
        .report_failure(saved, "Het recept kon niet worden opgeslagen")
    {
        let name = path.file_name().map_or_else(
            || path.display().to_string(),
            |n| n.to_string_lossy().into_owned(),
        );
        app.console.success(format!("Opgeslagen als: {name}"));
    }
    Ok(())
}
