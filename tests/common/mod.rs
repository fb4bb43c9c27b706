#![allow(dead_code)]

use std::time::Duration;

use serde_json::{Value, json};
use weatherflow::{
    app::config::{AppConfig, StartTarget},
    data::ClientConfig,
    domain::weather::Location,
};
use wiremock::{MockServer, ResponseTemplate};

pub const FORECAST_PATH: &str = "/v1/forecast";
pub const GEOCODE_PATH: &str = "/v1/search";
pub const GEOIP_PATH: &str = "/json/";

pub fn lisbon() -> Location {
    Location {
        name: "Lisbon".to_string(),
        latitude: 38.7167,
        longitude: -9.1333,
        country: Some("Portugal".to_string()),
        admin1: Some("Lisbon".to_string()),
        timezone: Some("Europe/Lisbon".to_string()),
        population: Some(517_802),
    }
}

pub fn client_config(server: &MockServer) -> ClientConfig {
    ClientConfig {
        forecast_url: format!("{}{FORECAST_PATH}", server.uri()),
        geocode_url: format!("{}{GEOCODE_PATH}", server.uri()),
        geoip_url: format!("{}{GEOIP_PATH}", server.uri()),
        ..ClientConfig::default()
    }
}

pub fn app_config(server: &MockServer, start: StartTarget) -> AppConfig {
    AppConfig {
        start,
        debounce: Duration::from_millis(20),
        client: client_config(server),
        ..AppConfig::default()
    }
}

pub fn json_response(body: Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(body)
}

/// Forecast payload in the provider's shape, with `temperature` as the
/// current reading.
pub fn forecast_body(temperature: f64) -> Value {
    json!({
        "latitude": 38.72,
        "longitude": -9.14,
        "utc_offset_seconds": 0,
        "timezone": "Europe/Lisbon",
        "current": {
            "time": "2026-02-12T10:00",
            "temperature_2m": temperature,
            "apparent_temperature": temperature - 1.0,
            "relative_humidity_2m": 68,
            "is_day": 1,
            "precipitation": 0.0,
            "rain": 0.0,
            "showers": 0.0,
            "snowfall": 0.0,
            "weather_code": 2,
            "cloud_cover": 40,
            "pressure_msl": 1018.3,
            "surface_pressure": 1012.0,
            "wind_speed_10m": 14.6,
            "wind_direction_10m": 310,
            "wind_gusts_10m": 29.0
        },
        "daily": {
            "time": [
                "2026-02-12", "2026-02-13", "2026-02-14", "2026-02-15",
                "2026-02-16", "2026-02-17", "2026-02-18"
            ],
            "weather_code": [2, 2, 2, 61, 2, 2, 2],
            "temperature_2m_max": [18.0, 21.5, 21.5, 16.0, 15.5, 17.0, 19.0],
            "temperature_2m_min": [9.0, 11.0, 10.5, 8.0, 7.5, 9.5, 10.0],
            "sunrise": [
                "2026-02-12T07:31", "2026-02-13T07:30", "2026-02-14T07:29",
                "2026-02-15T07:28", "2026-02-16T07:27", "2026-02-17T07:25",
                "2026-02-18T07:24"
            ],
            "sunset": [
                "2026-02-12T18:12", "2026-02-13T18:13", "2026-02-14T18:14",
                "2026-02-15T18:15", "2026-02-16T18:16", "2026-02-17T18:17",
                "2026-02-18T18:18"
            ],
            "daylight_duration": [38460, 38580, 38700, 38820, 38940, 39060, 39180],
            "sunshine_duration": [25200, 30000, 28000, 3600, 20000, 26000, 27000],
            "uv_index_max": [3.5, 4.0, 4.2, 1.5, 3.0, 3.8, 4.1],
            "precipitation_sum": [0.0, 0.0, 0.2, 6.4, 0.0, 0.0, 0.1],
            "precipitation_probability_max": [10, 5, 15, 80, 20, 10, 5]
        }
    })
}

pub fn geocode_body() -> Value {
    json!({
        "results": [
            {
                "id": 2267057,
                "name": "Lisbon",
                "latitude": 38.71667,
                "longitude": -9.13333,
                "country": "Portugal",
                "admin1": "Lisbon",
                "timezone": "Europe/Lisbon",
                "population": 517802
            },
            {
                "id": 5367815,
                "name": "Lisbon",
                "latitude": 43.98,
                "longitude": -70.06,
                "country": "United States",
                "admin1": "Maine",
                "timezone": "America/New_York"
            }
        ],
        "generationtime_ms": 0.5
    })
}
