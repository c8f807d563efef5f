use anyhow::{Context, Result};
use directories::ProjectDirs;
use log::{debug, info};
use std::path::{Path, PathBuf};

const DEFAULT_EDAMAM_URL: &str = "https://api.edamam.com/api/recipes/v2";
const DEFAULT_OPENWEATHER_URL: &str = "https://api.openweathermap.org/data/2.5/weather";

pub struct EdamamConfig {
    pub app_id: String,
    pub app_key: String,
    pub base_url: String,
}

pub struct OpenWeatherConfig {
    pub api_key: String,
    pub base_url: String,
}

pub struct Config {
    pub edamam: EdamamConfig,
    pub openweather: OpenWeatherConfig,
    pub fridge_file: PathBuf,
    pub shopping_list_file: PathBuf,
    pub recipes_dir: PathBuf,
}

impl Config {
    /// Read configuration from the environment, after loading `.env` if one
    /// is present. File locations default to the platform data directory.
    pub fn load() -> Self {
        match dotenvy::dotenv() {
            Ok(path) => info!("Loaded environment from {}", path.display()),
            Err(e) => debug!("No .env file loaded: {e}"),
        }

        let data_dir = ProjectDirs::from("", "", "fridgechef")
            .map_or_else(|| PathBuf::from("data"), |p| p.data_dir().to_path_buf());

        let config = Self::from_lookup(|key| std::env::var(key).ok(), &data_dir);
        info!(
            "fridge: {}, shopping list: {}, recipes: {}",
            config.fridge_file.display(),
            config.shopping_list_file.display(),
            config.recipes_dir.display()
        );
        config
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>, data_dir: &Path) -> Self {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let path = |key: &str, default_name: &str| {
            var(key).map_or_else(|| data_dir.join(default_name), PathBuf::from)
        };

        Config {
            edamam: EdamamConfig {
                app_id: var("EDAMAM_APP_ID").unwrap_or_default(),
                app_key: var("EDAMAM_API_KEY").unwrap_or_default(),
                base_url: var("EDAMAM_BASE_URL").unwrap_or_else(|| DEFAULT_EDAMAM_URL.into()),
            },
            openweather: OpenWeatherConfig {
                api_key: var("OPENWEATHER_API_KEY").unwrap_or_default(),
                base_url: var("OPENWEATHER_BASE_URL")
                    .unwrap_or_else(|| DEFAULT_OPENWEATHER_URL.into()),
            },
            fridge_file: path("FRIDGE_FILE", "fridge.csv"),
            shopping_list_file: path("SHOPPING_LIST_FILE", "shopping_list.csv"),
            recipes_dir: path("RECIPES_FOLDER", "recipes"),
        }
    }

    pub fn ensure_recipes_dir(&self) -> Result<()> {
        std::fs::create_dir_all(&self.recipes_dir).with_context(|| {
            format!(
                "Failed to create recipes folder: {}",
                self.recipes_dir.display()
            )
        })
    }
}
