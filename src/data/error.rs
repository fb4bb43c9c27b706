use std::fmt;

use reqwest::StatusCode;
use thiserror::Error;

/// Upstream service named in error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    Weather,
    Geocoding,
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Weather => "Weather",
            Self::Geocoding => "Geocoding",
        })
    }
}

/// Errors raised by the forecast and geocoding clients.
#[derive(Debug, Error)]
pub enum WeatherError {
    /// The provider answered with a non-success status.
    #[error("{provider} API error: {reason}")]
    Status {
        provider: Provider,
        status: StatusCode,
        reason: String,
    },

    #[error("{provider} request failed: {source}")]
    Network {
        provider: Provider,
        #[source]
        source: reqwest::Error,
    },

    #[error("{provider} response could not be parsed: {source}")]
    Parse {
        provider: Provider,
        #[source]
        source: serde_json::Error,
    },
}

impl WeatherError {
    pub(crate) fn status(provider: Provider, status: StatusCode) -> Self {
        let reason = status
            .canonical_reason()
            .map_or_else(|| status.as_u16().to_string(), str::to_string);
        Self::Status {
            provider,
            status,
            reason,
        }
    }

    #[must_use]
    pub fn provider(&self) -> Provider {
        match self {
            Self::Status { provider, .. }
            | Self::Network { provider, .. }
            | Self::Parse { provider, .. } => *provider,
        }
    }
}

/// Errors raised while resolving the device position.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LocationError {
    #[error("Geolocation is not supported")]
    Unsupported,

    #[error("Geolocation error: {0}")]
    Denied(String),

    #[error("Geolocation error: timed out")]
    Timeout,

    #[error("Geolocation error: {0}")]
    Unavailable(String),
}
