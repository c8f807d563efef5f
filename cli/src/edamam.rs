use anyhow::{Context, Result};
use log::debug;

use crate::config::EdamamConfig;
use fridgechef_core::edamam::{RecipeSearch, SearchResponse, search_params};
use fridgechef_core::models::Recipe;

pub struct EdamamClient {
    client: reqwest::Client,
    rt: tokio::runtime::Handle,
    app_id: String,
    app_key: String,
    base_url: String,
}

impl EdamamClient {
    pub fn new(config: &EdamamConfig, rt: tokio::runtime::Handle) -> Result<Self> {
        Ok(Self {
            client: crate::http::build_client()?,
            rt,
            app_id: config.app_id.clone(),
            app_key: config.app_key.clone(),
            base_url: config.base_url.clone(),
        })
    }

    pub async fn search_async(&self, query: &str) -> Result<Option<Recipe>> {
        debug!("GET {} q={query}", self.base_url);
        let resp = self
            .client
            .get(&self.base_url)
            .query(&search_params(&self.app_id, &self.app_key, query))
            .send()
            .await
            .context("Failed to reach Edamam API")?
            .error_for_status()
            .context("Edamam API returned an error")?;

        let data: SearchResponse = resp
            .json()
            .await
            .context("Failed to parse Edamam search response")?;

        Ok(data.into_first_recipe())
    }
}

impl RecipeSearch for EdamamClient {
    fn search(&self, query: &str) -> Result<Option<Recipe>> {
        self.rt.block_on(self.search_async(query))
    }
}
