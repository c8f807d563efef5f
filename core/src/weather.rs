use anyhow::{Context, Result};
use serde::Deserialize;

use crate::models::WeatherSnapshot;

#[derive(Debug, Deserialize)]
pub struct WeatherResponse {
    pub main: MainReadings,
    #[serde(default)]
    pub weather: Vec<Condition>,
}

#[derive(Debug, Deserialize)]
pub struct MainReadings {
    pub temp: f64,
}

#[derive(Debug, Deserialize)]
pub struct Condition {
    pub description: String,
}

impl WeatherResponse {
    pub fn into_snapshot(self) -> Result<WeatherSnapshot> {
        let condition = self
            .weather
            .into_iter()
            .next()
            .context("Weather response has no weather description")?;
        Ok(WeatherSnapshot {
            temperature: self.main.temp,
            condition: condition.description,
        })
    }
}

/// Query string for a current-weather request in metric units.
#[must_use]
pub fn weather_params<'a>(city: &'a str, api_key: &'a str) -> [(&'static str, &'a str); 3] {
    [("q", city), ("appid", api_key), ("units", "metric")]
}

/// Current weather backend, implemented by the CLI with reqwest.
pub trait WeatherLookup {
    fn current_weather(&self, city: &str) -> Result<WeatherSnapshot>;
}

/// Map the current temperature (°C) and condition to a recipe search term.
///
/// Every bucket is `< upper`, so a temperature exactly on a boundary lands in
/// the warmer bucket.
#[must_use]
pub fn recipe_category_for(temp: f64, condition: &str) -> &'static str {
    if matches!(condition, "snow" | "rain") {
        if temp < 5.0 {
            "hot chocolate"
        } else if temp < 10.0 {
            "soup"
        } else {
            "stew"
        }
    } else if temp < 10.0 {
        "baked pasta"
    } else if temp < 15.0 {
        "roast"
    } else if temp < 20.0 {
        "grilled sandwich"
    } else if temp < 25.0 {
        "salad"
    } else if temp < 30.0 {
        "smoothie"
    } else {
        "ice cream"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wet_weather_categories() {
        for temp in [-20.0, 0.0, 4.999] {
            assert_eq!(recipe_category_for(temp, "rain"), "hot chocolate");
            assert_eq!(recipe_category_for(temp, "snow"), "hot chocolate");
        }
        assert_eq!(recipe_category_for(5.0, "rain"), "soup");
        assert_eq!(recipe_category_for(9.9, "snow"), "soup");
        assert_eq!(recipe_category_for(10.0, "rain"), "stew");
        assert_eq!(recipe_category_for(35.0, "rain"), "stew");
    }

    #[test]
    fn test_dry_weather_categories() {
        assert_eq!(recipe_category_for(-3.0, "clear sky"), "baked pasta");
        assert_eq!(recipe_category_for(10.0, "clear sky"), "roast");
        assert_eq!(recipe_category_for(15.0, "few clouds"), "grilled sandwich");
        assert_eq!(recipe_category_for(24.999, "few clouds"), "salad");
        assert_eq!(recipe_category_for(25.0, "few clouds"), "smoothie");
        assert_eq!(recipe_category_for(30.0, "clear sky"), "ice cream");
    }

    #[test]
    fn test_condition_must_match_exactly() {
        // "light rain" is not in the wet set
        assert_eq!(recipe_category_for(3.0, "light rain"), "baked pasta");
    }

    #[test]
    fn test_weather_response_snapshot() {
        let body = r#"{
            "coord": {"lon": 4.89, "lat": 52.37},
            "weather": [{"id": 500, "main": "Rain", "description": "light rain", "icon": "10d"}],
            "main": {"temp": 7.42, "feels_like": 4.1, "humidity": 87},
            "name": "Amsterdam"
        }"#;
        let resp: WeatherResponse = serde_json::from_str(body).unwrap();
        let snapshot = resp.into_snapshot().unwrap();
        assert!((snapshot.temperature - 7.42).abs() < f64::EPSILON);
        assert_eq!(snapshot.condition, "light rain");
    }

    #[test]
    fn test_weather_response_without_description() {
        let resp: WeatherResponse =
            serde_json::from_str(r#"{"main": {"temp": 12.0}, "weather": []}"#).unwrap();
        assert!(resp.into_snapshot().is_err());
    }

    #[test]
    fn test_weather_params() {
        let params = weather_params("Utrecht", "secret");
        assert_eq!(
            params,
            [("q", "Utrecht"), ("appid", "secret"), ("units", "metric")]
        );
    }
}
