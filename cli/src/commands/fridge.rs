use anyhow::Result;

use fridgechef_core::menu::{FRIDGE_CLEAR_MENU, FRIDGE_MENU, FridgeAction, FridgeClearAction};

use super::helpers::INVALID_INPUT;
use super::{App, run_menu};

const EMPTY: &str = "De koelkast is leeg.";

pub(crate) fn run(app: &mut App) -> Result<()> {
    run_menu(app, &FRIDGE_MENU, |app, action| match action {
        FridgeAction::Show => cmd_fridge_show(app),
        FridgeAction::Add => cmd_fridge_add(app),
        FridgeAction::Clear => run_menu(app, &FRIDGE_CLEAR_MENU, cmd_fridge_remove),
    })
}

fn cmd_fridge_show(app: &mut App) -> Result<()> {
    let items = app.fridge.list()?;
    app.console.line("Producten in de koelkast:");
    app.console.items(&items, EMPTY);
    app.console.wait_for_back()
}

fn cmd_fridge_add(app: &mut App) -> Result<()> {
    app.console
        .warning("LET OP: producten moeten in het Engels worden toegevoegd.");
    let name = app.console.prompt_text("Voer de productnaam in: ")?;
    if name.is_empty() {
        app.console.error(INVALID_INPUT);
        return Ok(());
    }

    let outcome = app.fridge.add(&name)?;
    app.console
        .add_outcome(&outcome, "de koelkast", "in de koelkast");
    app.console.wait_for_back()
}

fn cmd_fridge_remove(app: &mut App, action: FridgeClearAction) -> Result<()> {
    let outcome = match action {
        FridgeClearAction::RemoveOne => {
            let name = app.console.prompt_text("Voer de productnaam in: ")?;
            if name.is_empty() {
                app.console.error(INVALID_INPUT);
                return Ok(());
            }
            app.fridge.remove(Some(&name), &mut || false)?
        }
        FridgeClearAction::RemoveAll => {
            let console = &mut app.console;
            app.fridge.remove(None, &mut || {
                console.confirm("Weet je zeker dat je alle producten wilt verwijderen? (ja/nee): ")
            })?
        }
    };

    app.console
        .remove_outcome(&outcome, "in de koelkast", "De koelkast is al leeg.");
    app.console.wait_for_back()
}
