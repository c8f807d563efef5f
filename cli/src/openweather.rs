use anyhow::{Context, Result};
use log::debug;

use crate::config::OpenWeatherConfig;
use fridgechef_core::models::WeatherSnapshot;
use fridgechef_core::weather::{WeatherLookup, WeatherResponse, weather_params};

pub struct OpenWeatherClient {
    client: reqwest::Client,
    rt: tokio::runtime::Handle,
    api_key: String,
    base_url: String,
}

impl OpenWeatherClient {
    pub fn new(config: &OpenWeatherConfig, rt: tokio::runtime::Handle) -> Result<Self> {
        Ok(Self {
            client: crate::http::build_client()?,
            rt,
            api_key: config.api_key.clone(),
            base_url: config.base_url.clone(),
        })
    }

    pub async fn current_weather_async(&self, city: &str) -> Result<WeatherSnapshot> {
        debug!("GET {} q={city}", self.base_url);
        let resp = self
            .client
            .get(&self.base_url)
            .query(&weather_params(city, &self.api_key))
            .send()
            .await
            .context("Failed to reach OpenWeather API")?
            .error_for_status()
            .with_context(|| format!("OpenWeather API returned an error for '{city}'"))?;

        let data: WeatherResponse = resp
            .json()
            .await
            .context("Failed to parse OpenWeather response")?;

        data.into_snapshot()
    }
}

impl WeatherLookup for OpenWeatherClient {
    fn current_weather(&self, city: &str) -> Result<WeatherSnapshot> {
        self.rt.block_on(self.current_weather_async(city))
    }
}
