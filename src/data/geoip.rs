use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tokio::time::Instant;
use tracing::debug;

use super::error::LocationError;
use crate::domain::weather::Location;

pub const GEOIP_URL: &str = "https://ipapi.co/json/";

pub const POSITION_TIMEOUT: Duration = Duration::from_secs(10);
pub const POSITION_MAX_AGE: Duration = Duration::from_secs(5 * 60);

#[derive(Debug, Deserialize)]
struct IpApiResponse {
    #[serde(default)]
    error: bool,
    reason: Option<String>,
    city: Option<String>,
    latitude: Option<f64>,
    longitude: Option<f64>,
    country_name: Option<String>,
    region: Option<String>,
    timezone: Option<String>,
}

/// Device position from IP geolocation. A resolved position is reused until
/// it is older than `max_age`.
#[derive(Debug)]
pub struct PositionProvider {
    http: Client,
    url: String,
    enabled: bool,
    timeout: Duration,
    max_age: Duration,
    cached: Mutex<Option<(Instant, Location)>>,
}

impl PositionProvider {
    pub fn new(http: Client, url: impl Into<String>, enabled: bool) -> Self {
        Self {
            http,
            url: url.into(),
            enabled,
            timeout: POSITION_TIMEOUT,
            max_age: POSITION_MAX_AGE,
            cached: Mutex::new(None),
        }
    }

    #[must_use]
    pub fn with_limits(mut self, timeout: Duration, max_age: Duration) -> Self {
        self.timeout = timeout;
        self.max_age = max_age;
        self
    }

    pub async fn current_position(&self) -> Result<Location, LocationError> {
        if !self.enabled {
            return Err(LocationError::Unsupported);
        }
        if let Some(location) = self.cached_position() {
            debug!("reusing cached device position");
            return Ok(location);
        }

        let response = self
            .http
            .get(&self.url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(classify)?;

        check_status(response.status())?;
        let payload: IpApiResponse = response.json().await.map_err(classify)?;
        let location = location_from(payload)?;
        *self.cached.lock().unwrap_or_else(PoisonError::into_inner) =
            Some((Instant::now(), location.clone()));
        Ok(location)
    }

    fn cached_position(&self) -> Option<Location> {
        let cached = self.cached.lock().unwrap_or_else(PoisonError::into_inner);
        cached
            .as_ref()
            .filter(|(at, _)| at.elapsed() <= self.max_age)
            .map(|(_, location)| location.clone())
    }
}

fn check_status(status: StatusCode) -> Result<(), LocationError> {
    match status {
        StatusCode::FORBIDDEN | StatusCode::TOO_MANY_REQUESTS => {
            Err(LocationError::Denied(status.to_string()))
        }
        status if status.is_success() => Ok(()),
        status => Err(LocationError::Unavailable(status.to_string())),
    }
}

fn classify(err: reqwest::Error) -> LocationError {
    if err.is_timeout() {
        LocationError::Timeout
    } else {
        LocationError::Unavailable(err.to_string())
    }
}

fn location_from(payload: IpApiResponse) -> Result<Location, LocationError> {
    if payload.error {
        let reason = payload
            .reason
            .unwrap_or_else(|| "lookup refused".to_string());
        return Err(LocationError::Denied(reason));
    }
    let (Some(latitude), Some(longitude)) = (payload.latitude, payload.longitude) else {
        return Err(LocationError::Unavailable(
            "position missing from response".to_string(),
        ));
    };
    let name = payload
        .city
        .filter(|city| !city.is_empty())
        .unwrap_or_else(|| format!("{latitude:.4}, {longitude:.4}"));
    Ok(Location {
        name,
        latitude,
        longitude,
        country: payload.country_name,
        admin1: payload.region,
        timezone: payload.timezone,
        population: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(body: &str) -> IpApiResponse {
        serde_json::from_str(body).expect("fixture parses")
    }

    #[test]
    fn position_keeps_city_and_region() {
        let location = location_from(parse(
            r#"{"city": "Gothenburg", "region": "Västra Götaland", "country_name": "Sweden",
                "latitude": 57.7, "longitude": 11.97, "timezone": "Europe/Stockholm"}"#,
        ))
        .expect("position");
        assert_eq!(location.name, "Gothenburg");
        assert_eq!(location.timezone.as_deref(), Some("Europe/Stockholm"));
    }

    #[test]
    fn provider_error_flag_is_a_denial() {
        let err = location_from(parse(r#"{"error": true, "reason": "RateLimited"}"#))
            .expect_err("denied");
        assert_eq!(err, LocationError::Denied("RateLimited".to_string()));
    }

    #[test]
    fn missing_coordinates_are_unavailable() {
        let err = location_from(parse(r#"{"city": "Nowhere"}"#)).expect_err("unavailable");
        assert!(matches!(err, LocationError::Unavailable(_)));
    }

    #[test]
    fn refused_and_failed_statuses_map_to_location_errors() {
        let refused = check_status(StatusCode::TOO_MANY_REQUESTS);
        assert!(matches!(refused, Err(LocationError::Denied(_))));
        let failed = check_status(StatusCode::BAD_GATEWAY);
        assert!(matches!(failed, Err(LocationError::Unavailable(_))));
        assert_eq!(check_status(StatusCode::OK), Ok(()));
    }

    #[tokio::test]
    async fn disabled_provider_reports_unsupported() {
        let provider = PositionProvider::new(Client::new(), "http://127.0.0.1:9/", false);
        assert_eq!(
            provider.current_position().await,
            Err(LocationError::Unsupported)
        );
    }
}
