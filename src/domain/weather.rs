use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

mod conditions;
mod format;
mod insights;

pub use conditions::{
    Backdrop, ConditionInfo, IconKey, Rgb, TextTone, condition_for, known_condition_codes,
};
pub use format::{
    Severity, UvLevel, format_date, format_feels_delta, format_pressure, format_sunshine_hours,
    format_temperature, format_time, format_time_until, format_wind, format_wind_direction,
    round_half_up, uv_index_level,
};
pub use insights::{
    ActivityLabel, ActivityScore, HumidityComfort, OutfitNote, OutfitSuggestion, OutfitTier,
    RainOutlook, SunEvent, SunEventKind, WeekSummary, activity_score, coldest_day_index,
    hottest_day_index, humidity_comfort, next_sun_event, outfit_suggestion, rain_outlook,
    sunshine_share, uv_tip, week_summary,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Units {
    #[default]
    Celsius,
    Fahrenheit,
}

impl Units {
    /// Value of the `temperature_unit` forecast query parameter.
    #[must_use]
    pub fn api_value(self) -> &'static str {
        match self {
            Self::Celsius => "celsius",
            Self::Fahrenheit => "fahrenheit",
        }
    }

    #[must_use]
    pub fn suffix(self) -> &'static str {
        match self {
            Self::Celsius => "°C",
            Self::Fahrenheit => "°F",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Celsius => Self::Fahrenheit,
            Self::Fahrenheit => Self::Celsius,
        }
    }
}

/// A place the forecast can be fetched for: a geocoding candidate, a
/// geolocated device position, or bare coordinates from the command line.
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub country: Option<String>,
    pub admin1: Option<String>,
    pub timezone: Option<String>,
    pub population: Option<u64>,
}

impl Location {
    #[must_use]
    pub fn from_coords(lat: f64, lon: f64) -> Self {
        Self {
            name: format!("{lat:.4}, {lon:.4}"),
            latitude: lat,
            longitude: lon,
            country: None,
            admin1: None,
            timezone: None,
            population: None,
        }
    }

    /// Label used in the dashboard header once a candidate is picked.
    #[must_use]
    pub fn display_name(&self) -> String {
        match &self.country {
            Some(country) => format!("{}, {}", self.name, country),
            None => self.name.clone(),
        }
    }

    /// Secondary line shown under a search suggestion.
    #[must_use]
    pub fn region_line(&self) -> String {
        match (&self.admin1, &self.country) {
            (Some(admin), Some(country)) => format!("{admin}, {country}"),
            (Some(admin), None) => admin.clone(),
            (None, Some(country)) => country.clone(),
            (None, None) => String::new(),
        }
    }

    #[must_use]
    pub fn renamed(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

/// Current conditions at the fetched coordinates. Temperatures are in the
/// units the forecast was requested in; wind is always km/h.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherSnapshot {
    pub temperature: f32,
    pub apparent_temperature: f32,
    pub relative_humidity: f32,
    pub is_day: bool,
    pub precipitation_mm: f32,
    pub rain_mm: f32,
    pub showers_mm: f32,
    pub snowfall_cm: f32,
    pub weather_code: i32,
    pub cloud_cover: f32,
    pub pressure_msl_hpa: f32,
    pub surface_pressure_hpa: f32,
    pub wind_speed_kmh: f32,
    pub wind_direction_deg: f32,
    pub wind_gusts_kmh: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DailyForecast {
    pub date: NaiveDate,
    pub weather_code: Option<i32>,
    pub temperature_max: Option<f32>,
    pub temperature_min: Option<f32>,
    pub apparent_temperature_max: Option<f32>,
    pub apparent_temperature_min: Option<f32>,
    pub sunrise: Option<NaiveDateTime>,
    pub sunset: Option<NaiveDateTime>,
    pub daylight_duration_s: Option<f32>,
    pub sunshine_duration_s: Option<f32>,
    pub uv_index_max: Option<f32>,
    pub precipitation_sum_mm: Option<f32>,
    pub rain_sum_mm: Option<f32>,
    pub showers_sum_mm: Option<f32>,
    pub snowfall_sum_cm: Option<f32>,
    pub precipitation_probability_max: Option<f32>,
    pub wind_speed_max_kmh: Option<f32>,
    pub wind_gusts_max_kmh: Option<f32>,
    pub wind_direction_dominant_deg: Option<f32>,
}

/// Snapshot and daily series from one forecast response. They are only ever
/// replaced together, so both always describe the same coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastBundle {
    pub location: Location,
    pub latitude: f64,
    pub longitude: f64,
    pub units: Units,
    pub utc_offset_seconds: i32,
    pub current: WeatherSnapshot,
    pub daily: Vec<DailyForecast>,
    pub fetched_at: DateTime<Utc>,
}

impl ForecastBundle {
    #[must_use]
    pub fn condition(&self) -> ConditionInfo {
        condition_for(self.current.weather_code, Some(self.current.is_day))
    }

    /// Wall-clock time at the forecast location; sunrise and sunset are
    /// reported in this clock.
    #[must_use]
    pub fn local_now(&self, now: DateTime<Utc>) -> NaiveDateTime {
        (now + chrono::Duration::seconds(i64::from(self.utc_offset_seconds))).naive_utc()
    }

    #[must_use]
    pub fn today(&self) -> Option<&DailyForecast> {
        self.daily.first()
    }

    /// Today's precipitation probability; missing data reads as 0%.
    #[must_use]
    pub fn precipitation_probability_today(&self) -> f32 {
        self.today()
            .and_then(|d| d.precipitation_probability_max)
            .unwrap_or(0.0)
    }

    #[must_use]
    pub fn uv_index_today(&self) -> f32 {
        self.today().and_then(|d| d.uv_index_max).unwrap_or(0.0)
    }

    /// Location re-anchored on the coordinates the provider answered for.
    #[must_use]
    pub fn refresh_target(&self) -> Location {
        Location {
            latitude: self.latitude,
            longitude: self.longitude,
            ..self.location.clone()
        }
    }

    #[must_use]
    pub fn outfit(&self) -> OutfitSuggestion {
        outfit_suggestion(
            self.current.apparent_temperature,
            self.current.wind_speed_kmh,
            self.precipitation_probability_today(),
            self.uv_index_today(),
            self.units,
        )
    }

    #[must_use]
    pub fn activity(&self) -> ActivityScore {
        activity_score(
            self.current.apparent_temperature,
            self.units,
            self.current.wind_speed_kmh,
            self.current.cloud_cover,
            self.precipitation_probability_today(),
        )
    }

    /// Share of today's daylight with direct sunshine, in percent.
    #[must_use]
    pub fn sunshine_share_today(&self) -> u8 {
        let Some(today) = self.today() else {
            return 0;
        };
        sunshine_share(
            today.sunshine_duration_s.unwrap_or(0.0),
            today.daylight_duration_s.unwrap_or(0.0),
        )
    }

    #[must_use]
    pub fn hottest_day(&self) -> Option<&DailyForecast> {
        let highs: Vec<Option<f32>> = self.daily.iter().map(|d| d.temperature_max).collect();
        hottest_day_index(&highs).and_then(|idx| self.daily.get(idx))
    }

    #[must_use]
    pub fn coldest_day(&self) -> Option<&DailyForecast> {
        let lows: Vec<Option<f32>> = self.daily.iter().map(|d| d.temperature_min).collect();
        coldest_day_index(&lows).and_then(|idx| self.daily.get(idx))
    }
}

#[must_use]
pub fn parse_datetime(value: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M").ok()
}

#[must_use]
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

#[must_use]
pub fn fahrenheit_to_celsius(value: f32) -> f32 {
    (value - 32.0) * 5.0 / 9.0
}
