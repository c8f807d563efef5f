mod commands;
mod config;
mod edamam;
mod http;
mod openweather;

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use crate::commands::App;
use crate::config::Config;

#[derive(Parser)]
#[command(
    name = "fridgechef",
    version,
    about = "Household assistant for your fridge, recipes and shopping list",
    long_about = "Household assistant for your fridge, recipes and shopping list.\n\n\
        Keeps the fridge and shopping list in CSV files, finds recipes through \
        Edamam and suggests dishes for the current OpenWeather conditions.\n\n\
        Configuration is read from the environment or a .env file: \
        EDAMAM_APP_ID, EDAMAM_API_KEY, OPENWEATHER_API_KEY, FRIDGE_FILE, \
        SHOPPING_LIST_FILE, RECIPES_FOLDER."
)]
struct Cli {}

fn main() {
    Cli::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let config = Config::load();

    // The menu loop runs on the main thread and blocks on HTTP calls through
    // this runtime's handle.
    let rt = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    let mut app = App::open(&config, rt.handle())?;
    app.run()
}
