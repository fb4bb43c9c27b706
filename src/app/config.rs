use std::time::Duration;

use anyhow::Result;

use crate::{
    cli::{Cli, IconMode},
    data::ClientConfig,
    domain::weather::{Location, Units},
};

/// What the dashboard shows first.
#[derive(Debug, Clone, PartialEq)]
pub enum StartTarget {
    DevicePosition,
    Coordinates(Location),
    City(String),
}

/// Runtime configuration resolved once from the command line.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub units: Units,
    pub start: StartTarget,
    pub debounce: Duration,
    pub icon_mode: IconMode,
    pub client: ClientConfig,
}

impl AppConfig {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        cli.validate()?;

        let start = match (cli.lat, cli.lon, cli.city.as_deref().map(str::trim)) {
            (Some(lat), Some(lon), _) => StartTarget::Coordinates(Location::from_coords(lat, lon)),
            (_, _, Some(city)) if !city.is_empty() => StartTarget::City(city.to_string()),
            _ => StartTarget::DevicePosition,
        };

        Ok(Self {
            units: cli.units.into(),
            start,
            debounce: Duration::from_millis(cli.debounce_ms),
            icon_mode: cli.icon_mode(),
            client: ClientConfig {
                forecast_url: cli.forecast_url.clone(),
                geocode_url: cli.geocode_url.clone(),
                geoip_url: cli.geoip_url.clone(),
                geolocation_enabled: !cli.no_locate,
                ..ClientConfig::default()
            },
        })
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            units: Units::Celsius,
            start: StartTarget::DevicePosition,
            debounce: Duration::from_millis(300),
            icon_mode: IconMode::Unicode,
            client: ClientConfig::default(),
        }
    }
}
