use std::collections::HashMap;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::config::toml_config::{AppConfig, WeatherSection};
use crate::domain::ports::WeatherProvider;
use crate::utils::error::{Result, WardrobeError};

#[derive(Debug, Deserialize)]
struct WeatherResponse {
    status: String,
    #[serde(default)]
    info: Option<String>,
    #[serde(default)]
    lives: Vec<LiveWeather>,
}

#[derive(Debug, Deserialize)]
struct LiveWeather {
    #[serde(default)]
    city: Option<String>,
    temperature: String,
}

/// Live-weather client for the AMap REST API (`/v3/weather/weatherInfo`).
pub struct AmapWeatherClient {
    client: Client,
    endpoint: String,
    api_key: String,
    cities: HashMap<String, String>,
}

impl AmapWeatherClient {
    pub fn new(endpoint: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
            api_key: api_key.into(),
            cities: HashMap::new(),
        }
    }

    pub fn from_config(config: &WeatherSection) -> Result<Self> {
        let api_key = config
            .api_key
            .clone()
            .filter(|key| !key.trim().is_empty() && !key.starts_with("${"))
            .ok_or_else(|| WardrobeError::MissingConfigError {
                field: "weather.api_key".to_string(),
            })?;

        Ok(Self::new(config.endpoint.clone(), api_key).with_cities(config.cities.clone()))
    }

    pub fn with_cities(mut self, cities: HashMap<String, String>) -> Self {
        self.cities = cities;
        self
    }

    /// Known city names map to their adcode; anything else is sent as-is.
    pub fn city_code<'a>(&'a self, city: &'a str) -> &'a str {
        self.cities.get(city.trim()).map(String::as_str).unwrap_or(city.trim())
    }
}

#[async_trait]
impl WeatherProvider for AmapWeatherClient {
    async fn current_temperature(&self, city: &str) -> Result<f64> {
        let code = self.city_code(city);
        tracing::debug!("requesting weather for {} ({})", city, code);

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("city", code), ("key", self.api_key.as_str())])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(WardrobeError::WeatherError {
                message: format!("weather API returned HTTP {}", response.status()),
            });
        }

        let body: WeatherResponse = response.json().await?;
        if body.status != "1" {
            return Err(WardrobeError::WeatherError {
                message: body.info.unwrap_or_else(|| "request rejected".to_string()),
            });
        }

        let live = body.lives.first().ok_or_else(|| WardrobeError::WeatherError {
            message: format!("no live weather for '{}'", city),
        })?;

        let temperature = live.temperature.trim().parse::<f64>().map_err(|_| WardrobeError::WeatherError {
            message: format!("unreadable temperature '{}'", live.temperature),
        })?;

        tracing::info!(
            "current temperature in {}: {}°C",
            live.city.as_deref().unwrap_or(city),
            temperature
        );
        Ok(temperature)
    }
}

/// Temperature a recommendation should use. A successful live reading for
/// `city` wins; otherwise the explicit temperature, then
/// `recommend.default_temperature`. Lookup failures are logged, never returned.
pub async fn resolve_temperature(config: &AppConfig, explicit: Option<f64>, city: Option<&str>) -> f64 {
    let fallback = explicit.unwrap_or(config.recommend.default_temperature);
    let Some(city) = city else {
        return fallback;
    };

    let client = match AmapWeatherClient::from_config(&config.weather) {
        Ok(client) => client,
        Err(e) => {
            tracing::warn!("weather lookup unavailable ({}), using {}°C", e, fallback);
            return fallback;
        }
    };

    match client.current_temperature(city).await {
        Ok(temperature) => temperature,
        Err(e) => {
            tracing::warn!("weather lookup for {} failed ({}), using {}°C", city, e, fallback);
            fallback
        }
    }
}
