use anyhow::Result;

use fridgechef_core::menu::{SHOPPING_MENU, ShoppingAction};
use fridgechef_core::models::RemoveOutcome;
use fridgechef_core::reconcile::{
    SyncOutcome, add_missing_to_shopping_list, sync_shopping_list_with_fridge,
};

use super::helpers::{INVALID_INPUT, parse_ingredient_list};
use super::{App, run_menu};

const EMPTY: &str = "Het boodschappenlijstje is leeg.";
const STORE: &str = "het boodschappenlijstje";
const LOCATION: &str = "op het boodschappenlijstje";

pub(crate) fn run(app: &mut App) -> Result<()> {
    run_menu(app, &SHOPPING_MENU, |app, action| match action {
        ShoppingAction::Show => cmd_shopping_show(app),
        ShoppingAction::Add => cmd_shopping_add(app),
        ShoppingAction::Remove => cmd_shopping_remove(app),
        ShoppingAction::AddIngredients => cmd_shopping_add_ingredients(app),
        ShoppingAction::Clear => cmd_shopping_clear(app),
        ShoppingAction::SyncWithFridge => cmd_shopping_sync(app),
    })
}

fn cmd_shopping_show(app: &mut App) -> Result<()> {
    let items = app.shopping.list()?;
    app.console.line("Producten op het boodschappenlijstje:");
    app.console.items(&items, EMPTY);
    Ok(())
}

fn cmd_shopping_add(app: &mut App) -> Result<()> {
    let name = app.console.prompt_text("Voer de productnaam in: ")?;
    if name.is_empty() {
        app.console.error(INVALID_INPUT);
        return Ok(());
    }

    let outcome = app.shopping.add(&name)?;
    app.console.add_outcome(&outcome, STORE, LOCATION);
    Ok(())
}

fn cmd_shopping_remove(app: &mut App) -> Result<()> {
    let name = app.console.prompt_text("Voer de productnaam in: ")?;
    if name.is_empty() {
        app.console.error(INVALID_INPUT);
        return Ok(());
    }

    let outcome = app.shopping.remove(Some(&name), &mut || false)?;
    app.console.remove_outcome(&outcome, LOCATION, EMPTY);
    Ok(())
}

/// Put the ingredients the fridge lacks on the shopping list.
pub(super) fn add_ingredients(app: &mut App, ingredients: &[String]) -> Result<()> {
    let outcomes = add_missing_to_shopping_list(ingredients, &*app.fridge, &mut *app.shopping)?;
    if outcomes.is_empty() {
        app.console.success("Je hebt alle ingrediënten al in huis.");
    }
    for outcome in &outcomes {
        app.console.add_outcome(outcome, STORE, LOCATION);
    }
    Ok(())
}

fn cmd_shopping_add_ingredients(app: &mut App) -> Result<()> {
    let input = app
        .console
        .prompt_text("Voer de ingrediënten in (komma gescheiden): ")?;
    let ingredients = parse_ingredient_list(&input);
    if ingredients.is_empty() {
        app.console.error(INVALID_INPUT);
        return Ok(());
    }

    add_ingredients(app, &ingredients)
}

fn cmd_shopping_clear(app: &mut App) -> Result<()> {
    let console = &mut app.console;
    let outcome = app.shopping.remove(None, &mut || {
        console.confirm("Weet je zeker dat je het boodschappenlijstje wilt legen? (ja/nee): ")
    })?;

    match outcome {
        RemoveOutcome::Cleared(_) => app.console.success("Het boodschappenlijstje is geleegd."),
        other => app.console.remove_outcome(&other, LOCATION, EMPTY),
    }
    Ok(())
}

fn cmd_shopping_sync(app: &mut App) -> Result<()> {
    let console = &mut app.console;
    let outcome = sync_shopping_list_with_fridge(
        &mut *app.shopping,
        &*app.fridge,
        &mut |items: &[String]| {
            console.line(
                "De volgende producten zitten al in de koelkast en kunnen van het boodschappenlijstje worden verwijderd:",
            );
            console.items(items, EMPTY);
            console.confirm("Wil je deze producten verwijderen van het boodschappenlijstje? (ja/nee): ")
        },
    )?;

    match outcome {
        SyncOutcome::EmptyList => app.console.line(EMPTY),
        SyncOutcome::NothingInFridge => app
            .console
            .line("Geen producten uit het boodschappenlijstje zaten al in de koelkast."),
        SyncOutcome::Removed(_) => app
            .console
            .success("De product(en) zijn verwijderd van het boodschappenlijstje."),
        SyncOutcome::Declined(_) => app
            .console
            .error("Verwijdering geannuleerd. Geen producten zijn verwijderd."),
    }
    Ok(())
}
