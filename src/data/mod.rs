//! Open-Meteo forecast and geocoding clients plus IP-based device position,
//! behind the single [`WeatherClient`] the effect runner talks to.

pub mod error;
pub mod forecast;
pub mod geocode;
pub mod geoip;

use std::time::Duration;

use reqwest::Client;

pub use error::{LocationError, Provider, WeatherError};
pub use forecast::ForecastClient;
pub use geocode::{GeocodeClient, MIN_QUERY_CHARS};
pub use geoip::PositionProvider;

use crate::domain::weather::{ForecastBundle, Location, Units};

const USER_AGENT: &str = concat!("weatherflow/", env!("CARGO_PKG_VERSION"));

/// Endpoints and limits the clients are built from.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub forecast_url: String,
    pub geocode_url: String,
    pub geoip_url: String,
    pub geolocation_enabled: bool,
    pub position_timeout: Duration,
    pub position_max_age: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            forecast_url: forecast::FORECAST_URL.to_string(),
            geocode_url: geocode::GEOCODE_URL.to_string(),
            geoip_url: geoip::GEOIP_URL.to_string(),
            geolocation_enabled: true,
            position_timeout: geoip::POSITION_TIMEOUT,
            position_max_age: geoip::POSITION_MAX_AGE,
        }
    }
}

#[derive(Debug)]
pub struct WeatherClient {
    forecast: ForecastClient,
    geocode: GeocodeClient,
    position: PositionProvider,
}

impl WeatherClient {
    pub fn new(config: &ClientConfig) -> Result<Self, reqwest::Error> {
        let http = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self {
            forecast: ForecastClient::new(http.clone(), config.forecast_url.clone()),
            geocode: GeocodeClient::new(http.clone(), config.geocode_url.clone()),
            position: PositionProvider::new(
                http,
                config.geoip_url.clone(),
                config.geolocation_enabled,
            )
            .with_limits(config.position_timeout, config.position_max_age),
        })
    }

    pub async fn fetch_current_and_forecast(
        &self,
        location: Location,
        units: Units,
    ) -> Result<ForecastBundle, WeatherError> {
        self.forecast.fetch(location, units).await
    }

    pub async fn search_locations(&self, query: &str) -> Result<Vec<Location>, WeatherError> {
        self.geocode.search(query).await
    }

    pub async fn current_device_position(&self) -> Result<Location, LocationError> {
        self.position.current_position().await
    }
}
