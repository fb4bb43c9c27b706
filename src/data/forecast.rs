use std::time::Duration;

use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use super::error::{Provider, WeatherError};
use crate::domain::weather::{
    DailyForecast, ForecastBundle, Location, Units, WeatherSnapshot, parse_date, parse_datetime,
};

pub const FORECAST_URL: &str = "https://api.open-meteo.com/v1/forecast";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

const CURRENT_FIELDS: &str = "temperature_2m,relative_humidity_2m,apparent_temperature,is_day,precipitation,rain,showers,snowfall,weather_code,cloud_cover,pressure_msl,surface_pressure,wind_speed_10m,wind_direction_10m,wind_gusts_10m";

const DAILY_FIELDS: &str = "weather_code,temperature_2m_max,temperature_2m_min,apparent_temperature_max,apparent_temperature_min,sunrise,sunset,daylight_duration,sunshine_duration,uv_index_max,precipitation_sum,rain_sum,showers_sum,snowfall_sum,precipitation_probability_max,wind_speed_10m_max,wind_gusts_10m_max,wind_direction_10m_dominant";

#[derive(Debug, Clone)]
pub struct ForecastClient {
    http: Client,
    base_url: String,
}

impl ForecastClient {
    pub fn new(http: Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self::new(Client::new(), base_url)
    }

    /// Current conditions and the 7-day daily series for `location`, in one
    /// request so both halves of the bundle describe the same coordinates.
    pub async fn fetch(
        &self,
        location: Location,
        units: Units,
    ) -> Result<ForecastBundle, WeatherError> {
        debug!(
            latitude = location.latitude,
            longitude = location.longitude,
            units = units.api_value(),
            "requesting forecast"
        );
        let network = |source: reqwest::Error| WeatherError::Network {
            provider: Provider::Weather,
            source,
        };

        let response = self
            .http
            .get(&self.base_url)
            .timeout(REQUEST_TIMEOUT)
            .query(&[
                ("latitude", location.latitude.to_string()),
                ("longitude", location.longitude.to_string()),
                ("current", CURRENT_FIELDS.to_string()),
                ("daily", DAILY_FIELDS.to_string()),
                ("temperature_unit", units.api_value().to_string()),
                ("wind_speed_unit", "kmh".to_string()),
                ("precipitation_unit", "mm".to_string()),
                ("timeformat", "iso8601".to_string()),
                ("forecast_days", "7".to_string()),
                ("timezone", "auto".to_string()),
            ])
            .send()
            .await
            .map_err(network)?;

        let status = response.status();
        if !status.is_success() {
            return Err(WeatherError::status(Provider::Weather, status));
        }

        let body = response.text().await.map_err(network)?;
        let payload: ForecastResponse =
            serde_json::from_str(&body).map_err(|source| WeatherError::Parse {
                provider: Provider::Weather,
                source,
            })?;

        Ok(bundle_from(payload, location, units, Utc::now()))
    }
}

fn bundle_from(
    payload: ForecastResponse,
    location: Location,
    units: Units,
    fetched_at: DateTime<Utc>,
) -> ForecastBundle {
    let current = &payload.current;
    ForecastBundle {
        location,
        latitude: payload.latitude,
        longitude: payload.longitude,
        units,
        utc_offset_seconds: payload.utc_offset_seconds,
        current: WeatherSnapshot {
            temperature: current.temperature_2m,
            apparent_temperature: current.apparent_temperature,
            relative_humidity: current.relative_humidity_2m.unwrap_or_default(),
            is_day: current.is_day == 1,
            precipitation_mm: current.precipitation.unwrap_or_default(),
            rain_mm: current.rain.unwrap_or_default(),
            showers_mm: current.showers.unwrap_or_default(),
            snowfall_cm: current.snowfall.unwrap_or_default(),
            weather_code: current.weather_code,
            cloud_cover: current.cloud_cover.unwrap_or_default(),
            pressure_msl_hpa: current.pressure_msl.unwrap_or_default(),
            surface_pressure_hpa: current.surface_pressure.unwrap_or_default(),
            wind_speed_kmh: current.wind_speed_10m.unwrap_or_default(),
            wind_direction_deg: current.wind_direction_10m.unwrap_or_default(),
            wind_gusts_kmh: current.wind_gusts_10m.unwrap_or_default(),
        },
        daily: parse_daily(&payload.daily),
        fetched_at,
    }
}

fn parse_daily(daily: &DailyBlock) -> Vec<DailyForecast> {
    let mut out = Vec::with_capacity(daily.time.len());
    for (idx, day) in daily.time.iter().enumerate() {
        let Some(date) = parse_date(day) else {
            continue;
        };

        out.push(DailyForecast {
            date,
            weather_code: daily.weather_code.get(idx).copied().flatten(),
            temperature_max: at(&daily.temperature_2m_max, idx),
            temperature_min: at(&daily.temperature_2m_min, idx),
            apparent_temperature_max: at(&daily.apparent_temperature_max, idx),
            apparent_temperature_min: at(&daily.apparent_temperature_min, idx),
            sunrise: time_at(&daily.sunrise, idx),
            sunset: time_at(&daily.sunset, idx),
            daylight_duration_s: at(&daily.daylight_duration, idx),
            sunshine_duration_s: at(&daily.sunshine_duration, idx),
            uv_index_max: at(&daily.uv_index_max, idx),
            precipitation_sum_mm: at(&daily.precipitation_sum, idx),
            rain_sum_mm: at(&daily.rain_sum, idx),
            showers_sum_mm: at(&daily.showers_sum, idx),
            snowfall_sum_cm: at(&daily.snowfall_sum, idx),
            precipitation_probability_max: at(&daily.precipitation_probability_max, idx),
            wind_speed_max_kmh: at(&daily.wind_speed_10m_max, idx),
            wind_gusts_max_kmh: at(&daily.wind_gusts_10m_max, idx),
            wind_direction_dominant_deg: at(&daily.wind_direction_10m_dominant, idx),
        });
    }
    out
}

fn at(series: &[Option<f32>], idx: usize) -> Option<f32> {
    series.get(idx).copied().flatten()
}

fn time_at(series: &[Option<String>], idx: usize) -> Option<chrono::NaiveDateTime> {
    series
        .get(idx)
        .and_then(Option::as_deref)
        .and_then(parse_datetime)
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    latitude: f64,
    longitude: f64,
    #[serde(default)]
    utc_offset_seconds: i32,
    current: CurrentBlock,
    #[serde(default)]
    daily: DailyBlock,
}

#[derive(Debug, Deserialize)]
struct CurrentBlock {
    temperature_2m: f32,
    apparent_temperature: f32,
    weather_code: i32,
    is_day: u8,
    relative_humidity_2m: Option<f32>,
    precipitation: Option<f32>,
    rain: Option<f32>,
    showers: Option<f32>,
    snowfall: Option<f32>,
    cloud_cover: Option<f32>,
    pressure_msl: Option<f32>,
    surface_pressure: Option<f32>,
    wind_speed_10m: Option<f32>,
    wind_direction_10m: Option<f32>,
    wind_gusts_10m: Option<f32>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct DailyBlock {
    time: Vec<String>,
    weather_code: Vec<Option<i32>>,
    temperature_2m_max: Vec<Option<f32>>,
    temperature_2m_min: Vec<Option<f32>>,
    apparent_temperature_max: Vec<Option<f32>>,
    apparent_temperature_min: Vec<Option<f32>>,
    sunrise: Vec<Option<String>>,
    sunset: Vec<Option<String>>,
    daylight_duration: Vec<Option<f32>>,
    sunshine_duration: Vec<Option<f32>>,
    uv_index_max: Vec<Option<f32>>,
    precipitation_sum: Vec<Option<f32>>,
    rain_sum: Vec<Option<f32>>,
    showers_sum: Vec<Option<f32>>,
    snowfall_sum: Vec<Option<f32>>,
    precipitation_probability_max: Vec<Option<f32>>,
    wind_speed_10m_max: Vec<Option<f32>>,
    wind_gusts_10m_max: Vec<Option<f32>>,
    wind_direction_10m_dominant: Vec<Option<f32>>,
}
