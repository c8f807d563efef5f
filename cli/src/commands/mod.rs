mod fridge;
mod helpers;
mod recipes;
mod shopping;

use anyhow::Result;
use std::path::PathBuf;

use crate::config::Config;
use crate::edamam::EdamamClient;
use crate::openweather::OpenWeatherClient;
use fridgechef_core::edamam::{QueryPicker, RandomPicker, RecipeFinder, RecipeSearch};
use fridgechef_core::menu::{MAIN_MENU, MainAction, Menu, Selection, dispatch};
use fridgechef_core::store::{CsvStore, ItemCase, RecordStore};
use fridgechef_core::weather::WeatherLookup;

use helpers::{Console, INVALID_INPUT};

/// Everything the menu handlers work on.
pub(crate) struct App {
    console: Console,
    fridge: Box<dyn RecordStore>,
    shopping: Box<dyn RecordStore>,
    recipes_dir: PathBuf,
    finder: RecipeFinder<Box<dyn RecipeSearch>, Box<dyn QueryPicker>>,
    weather: Box<dyn WeatherLookup>,
}

impl App {
    /// Open both stores (creating them when missing) and the API clients,
    /// talking to the user over stdin and stdout.
    pub(crate) fn open(config: &Config, rt: &tokio::runtime::Handle) -> Result<Self> {
        config.ensure_recipes_dir()?;
        let edamam: Box<dyn RecipeSearch> =
            Box::new(EdamamClient::new(&config.edamam, rt.clone())?);
        let picker: Box<dyn QueryPicker> = Box::new(RandomPicker::new(rand::rng()));
        Ok(Self {
            console: Console::stdio(),
            fridge: Box::new(CsvStore::open(&config.fridge_file, ItemCase::Lower)?),
            shopping: Box::new(CsvStore::open(
                &config.shopping_list_file,
                ItemCase::Verbatim,
            )?),
            recipes_dir: config.recipes_dir.clone(),
            finder: RecipeFinder::new(edamam, picker),
            weather: Box::new(OpenWeatherClient::new(&config.openweather, rt.clone())?),
        })
    }

    /// Run the main menu until the user exits.
    pub(crate) fn run(&mut self) -> Result<()> {
        self.console.success("Welkom bij FridgeChef!");
        run_menu(self, &MAIN_MENU, |app, action| match action {
            MainAction::Fridge => fridge::run(app),
            MainAction::Recipes => recipes::run(app),
            MainAction::ShoppingList => shopping::run(app),
        })
    }
}

/// Show a menu and hand every valid choice to `handle` until the user goes
/// back. End of input counts as going back.
pub(crate) fn run_menu<A: Copy + 'static>(
    app: &mut App,
    menu: &Menu<A>,
    mut handle: impl FnMut(&mut App, A) -> Result<()>,
) -> Result<()> {
    loop {
        app.console.title(menu.title);
        app.console
            .line("Maak een keuze uit de onderstaande mogelijkheden");
        for choice in menu.choices() {
            app.console.line(choice);
        }

        let selection = match app.console.read_input("\nUw keuze: ")? {
            Some(input) => dispatch(menu, &input),
            None => Selection::Back,
        };

        match selection {
            Selection::Action(action) => handle(app, action)?,
            Selection::Back => {
                app.console.line(menu.leave_message);
                return Ok(());
            }
            Selection::Invalid => app.console.error(INVALID_INPUT),
        }
    }
}
