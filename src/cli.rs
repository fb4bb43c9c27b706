#![allow(clippy::missing_errors_doc)]

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::data::{forecast::FORECAST_URL, geocode::GEOCODE_URL, geoip::GEOIP_URL};
use crate::domain::weather::Units;

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum UnitsArg {
    Celsius,
    Fahrenheit,
}

impl From<UnitsArg> for Units {
    fn from(value: UnitsArg) -> Self {
        match value {
            UnitsArg::Celsius => Units::Celsius,
            UnitsArg::Fahrenheit => Units::Fahrenheit,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconMode {
    Unicode,
    Ascii,
}

#[derive(Debug, Parser, Clone)]
#[command(
    name = "weatherflow",
    version,
    about = "Terminal weather dashboard with outfit, comfort and outdoor insights"
)]
pub struct Cli {
    /// Place to show on startup (default: the device position)
    pub city: Option<String>,

    /// Starting units
    #[arg(long, value_enum, default_value_t = UnitsArg::Celsius)]
    pub units: UnitsArg,

    /// Direct latitude (requires --lon)
    #[arg(long, allow_negative_numbers = true)]
    pub lat: Option<f64>,

    /// Direct longitude (requires --lat)
    #[arg(long, allow_negative_numbers = true)]
    pub lon: Option<f64>,

    /// Search debounce in milliseconds
    #[arg(long, default_value_t = 300)]
    pub debounce_ms: u64,

    /// Disable IP geolocation
    #[arg(long)]
    pub no_locate: bool,

    /// Force ASCII icons
    #[arg(long)]
    pub ascii_icons: bool,

    /// Print the dashboard as text to stdout and exit (non-interactive)
    #[arg(long)]
    pub one_shot: bool,

    /// Write logs to this file (filter with WEATHERFLOW_LOG)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Forecast endpoint
    #[arg(long, default_value = FORECAST_URL, hide = true)]
    pub forecast_url: String,

    /// Geocoding endpoint
    #[arg(long, default_value = GEOCODE_URL, hide = true)]
    pub geocode_url: String,

    /// IP geolocation endpoint
    #[arg(long, default_value = GEOIP_URL, hide = true)]
    pub geoip_url: String,
}

impl Cli {
    pub fn validate(&self) -> anyhow::Result<()> {
        match (self.lat, self.lon) {
            (Some(_), None) | (None, Some(_)) => {
                anyhow::bail!("--lat and --lon must be provided together")
            }
            (Some(lat), Some(lon))
                if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lon) =>
            {
                anyhow::bail!("--lat must be within ±90 and --lon within ±180")
            }
            _ => Ok(()),
        }
    }

    #[must_use]
    pub fn icon_mode(&self) -> IconMode {
        if self.ascii_icons {
            IconMode::Ascii
        } else {
            IconMode::Unicode
        }
    }
}
