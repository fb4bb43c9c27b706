use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use super::error::{Provider, WeatherError};
use crate::domain::weather::Location;

pub const GEOCODE_URL: &str = "https://geocoding-api.open-meteo.com/v1/search";

/// Queries shorter than this many characters never reach the network.
pub const MIN_QUERY_CHARS: usize = 2;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(8);
const RESULT_COUNT: &str = "10";

#[derive(Debug, Clone)]
pub struct GeocodeClient {
    http: Client,
    base_url: String,
}

impl GeocodeClient {
    pub fn new(http: Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self::new(Client::new(), base_url)
    }

    /// Candidates in provider order. Too-short queries and responses
    /// without a `results` array give an empty list.
    pub async fn search(&self, query: &str) -> Result<Vec<Location>, WeatherError> {
        if query.chars().count() < MIN_QUERY_CHARS {
            return Ok(Vec::new());
        }
        debug!(query, "searching locations");
        let network = |source: reqwest::Error| WeatherError::Network {
            provider: Provider::Geocoding,
            source,
        };

        let response = self
            .http
            .get(&self.base_url)
            .timeout(REQUEST_TIMEOUT)
            .query(&[
                ("name", query),
                ("count", RESULT_COUNT),
                ("language", "en"),
                ("format", "json"),
            ])
            .send()
            .await
            .map_err(network)?;

        let status = response.status();
        if !status.is_success() {
            return Err(WeatherError::status(Provider::Geocoding, status));
        }

        let body = response.text().await.map_err(network)?;
        let payload: GeocodeResponse =
            serde_json::from_str(&body).map_err(|source| WeatherError::Parse {
                provider: Provider::Geocoding,
                source,
            })?;

        Ok(payload
            .results
            .unwrap_or_default()
            .into_iter()
            .map(Location::from)
            .collect())
    }
}

#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    results: Option<Vec<GeocodeResult>>,
}

#[derive(Debug, Deserialize)]
struct GeocodeResult {
    name: String,
    latitude: f64,
    longitude: f64,
    country: Option<String>,
    admin1: Option<String>,
    timezone: Option<String>,
    population: Option<u64>,
}

impl From<GeocodeResult> for Location {
    fn from(entry: GeocodeResult) -> Self {
        Self {
            name: entry.name,
            latitude: entry.latitude,
            longitude: entry.longitude,
            country: entry.country,
            admin1: entry.admin1,
            timezone: entry.timezone,
            population: entry.population,
        }
    }
}
