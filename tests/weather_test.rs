use std::collections::HashMap;

use httpmock::prelude::*;
use wardrobe_advisor::adapters::weather::{resolve_temperature, AmapWeatherClient};
use wardrobe_advisor::config::toml_config::WeatherSection;
use wardrobe_advisor::AppConfig;
use wardrobe_advisor::domain::ports::WeatherProvider;
use wardrobe_advisor::WardrobeError;

#[tokio::test]
async fn test_reads_live_temperature_for_known_city() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/v3/weather/weatherInfo")
            .query_param("city", "310000")
            .query_param("key", "test-key");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "status": "1",
                "info": "OK",
                "lives": [{"city": "Shanghai", "temperature": "7", "weather": "Cloudy"}]
            }));
    });

    let mut cities = HashMap::new();
    cities.insert("Shanghai".to_string(), "310000".to_string());
    let client = AmapWeatherClient::new(server.url("/v3/weather/weatherInfo"), "test-key").with_cities(cities);

    let temperature = client.current_temperature("Shanghai").await.unwrap();
    api_mock.assert();
    assert_eq!(temperature, 7.0);
}

#[tokio::test]
async fn test_unknown_city_is_passed_through() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/weather").query_param("city", "110000");
        then.status(200).json_body(serde_json::json!({
            "status": "1",
            "lives": [{"temperature": "-3.5"}]
        }));
    });

    let client = AmapWeatherClient::new(server.url("/weather"), "k");
    let temperature = client.current_temperature("110000").await.unwrap();
    api_mock.assert();
    assert_eq!(temperature, -3.5);
}

#[tokio::test]
async fn test_rejected_request_is_weather_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/weather");
        then.status(200).json_body(serde_json::json!({
            "status": "0",
            "info": "INVALID_USER_KEY",
            "lives": []
        }));
    });

    let client = AmapWeatherClient::new(server.url("/weather"), "bad");
    match client.current_temperature("310000").await {
        Err(WardrobeError::WeatherError { message }) => assert_eq!(message, "INVALID_USER_KEY"),
        other => panic!("expected weather error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_http_failure_is_weather_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/weather");
        then.status(500);
    });

    let client = AmapWeatherClient::new(server.url("/weather"), "k");
    let result = client.current_temperature("310000").await;
    assert!(matches!(result, Err(WardrobeError::WeatherError { .. })));
}

#[test]
fn test_from_config_requires_resolved_api_key() {
    let mut section = WeatherSection::default();
    assert!(AmapWeatherClient::from_config(&section).is_err());

    section.api_key = Some("${AMAP_API_KEY}".to_string());
    assert!(AmapWeatherClient::from_config(&section).is_err());

    section.api_key = Some("real-key".to_string());
    assert!(AmapWeatherClient::from_config(&section).is_ok());
}

fn config_for(server: &MockServer) -> AppConfig {
    let mut config = AppConfig::default();
    config.weather.endpoint = server.url("/weather");
    config.weather.api_key = Some("k".to_string());
    config
}

#[tokio::test]
async fn test_resolve_uses_default_without_temperature_or_city() {
    let config = AppConfig::default();
    assert_eq!(resolve_temperature(&config, None, None).await, 25.0);
    assert_eq!(resolve_temperature(&config, Some(-3.0), None).await, -3.0);
}

#[tokio::test]
async fn test_resolve_falls_back_without_api_key() {
    let config = AppConfig::default();
    assert_eq!(resolve_temperature(&config, None, Some("Shanghai")).await, 25.0);
    assert_eq!(resolve_temperature(&config, Some(12.0), Some("Shanghai")).await, 12.0);
}

#[tokio::test]
async fn test_resolve_falls_back_when_lookup_fails() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/weather");
        then.status(200).json_body(serde_json::json!({"status": "1", "lives": []}));
    });

    let mut config = config_for(&server);
    config.recommend.default_temperature = 18.0;
    assert_eq!(resolve_temperature(&config, None, Some("310000")).await, 18.0);
    assert_eq!(resolve_temperature(&config, Some(3.0), Some("310000")).await, 3.0);
}

#[tokio::test]
async fn test_resolve_prefers_live_reading() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/weather").query_param("city", "310000");
        then.status(200).json_body(serde_json::json!({
            "status": "1",
            "lives": [{"temperature": "31"}]
        }));
    });

    let config = config_for(&server);
    assert_eq!(resolve_temperature(&config, Some(10.0), Some("310000")).await, 31.0);
}
