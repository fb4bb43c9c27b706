use chrono::{NaiveDate, NaiveDateTime};

use super::Units;

const COMPASS_POINTS: [&str; 16] = [
    "N", "NNE", "NE", "ENE", "E", "ESE", "SE", "SSE", "S", "SSW", "SW", "WSW", "W", "WNW", "NW",
    "NNW",
];

/// Rounds halves toward positive infinity, so `-2.5` becomes `-2`.
#[must_use]
pub fn round_half_up(value: f32) -> i32 {
    (f64::from(value) + 0.5).floor() as i32
}

#[must_use]
pub fn format_temperature(value: f32, units: Units) -> String {
    format!("{}{}", round_half_up(value), units.suffix())
}

/// Sixteen-point compass label for a bearing in degrees. Any finite input is
/// accepted; bearings are taken modulo 360.
#[must_use]
pub fn format_wind_direction(degrees: f32) -> &'static str {
    let sector = (f64::from(degrees) / 22.5 + 0.5).floor() as i64;
    COMPASS_POINTS[sector.rem_euclid(16) as usize]
}

#[must_use]
pub fn format_wind(speed_kmh: f32, direction_deg: f32) -> String {
    format!(
        "{} km/h {}",
        round_half_up(speed_kmh),
        format_wind_direction(direction_deg)
    )
}

#[must_use]
pub fn format_pressure(hpa: f32) -> String {
    format!("{} hPa", round_half_up(hpa))
}

#[must_use]
pub fn format_time(value: NaiveDateTime) -> String {
    value.format("%H:%M").to_string()
}

#[must_use]
pub fn format_date(value: NaiveDate) -> String {
    value.format("%a, %b %-d").to_string()
}

/// Countdown from `now` to `target`: `now`, `45m`, `2h` or `2h 5m`.
#[must_use]
pub fn format_time_until(now: NaiveDateTime, target: NaiveDateTime) -> String {
    let diff_ms = (target - now).num_milliseconds();
    if diff_ms <= 0 {
        return "now".to_string();
    }
    let total_minutes = (diff_ms as f64 / 60_000.0).round() as i64;
    let hours = total_minutes / 60;
    let minutes = total_minutes % 60;
    match (hours, minutes) {
        (0, m) => format!("{m}m"),
        (h, 0) => format!("{h}h"),
        (h, m) => format!("{h}h {m}m"),
    }
}

#[must_use]
pub fn format_feels_delta(temperature: f32, apparent: f32) -> String {
    let delta = round_half_up(apparent - temperature);
    match delta {
        0 => "Matches actual".to_string(),
        d if d > 0 => format!("Feels {}° warmer", d.abs()),
        d => format!("Feels {}° cooler", d.abs()),
    }
}

/// Sunshine seconds as hours with one decimal, e.g. `4.1h`.
#[must_use]
pub fn format_sunshine_hours(seconds: f32) -> String {
    let tenths = (f64::from(seconds) / 3600.0 * 10.0).round() / 10.0;
    format!("{tenths:.1}h")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Green,
    Yellow,
    Orange,
    Red,
    Purple,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UvLevel {
    Low,
    Moderate,
    High,
    VeryHigh,
    Extreme,
}

impl UvLevel {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Moderate => "Moderate",
            Self::High => "High",
            Self::VeryHigh => "Very High",
            Self::Extreme => "Extreme",
        }
    }

    #[must_use]
    pub fn severity(self) -> Severity {
        match self {
            Self::Low => Severity::Green,
            Self::Moderate => Severity::Yellow,
            Self::High => Severity::Orange,
            Self::VeryHigh => Severity::Red,
            Self::Extreme => Severity::Purple,
        }
    }
}

#[must_use]
pub fn uv_index_level(uv_index: f32) -> UvLevel {
    if uv_index <= 2.0 {
        UvLevel::Low
    } else if uv_index <= 5.0 {
        UvLevel::Moderate
    } else if uv_index <= 7.0 {
        UvLevel::High
    } else if uv_index <= 10.0 {
        UvLevel::VeryHigh
    } else {
        UvLevel::Extreme
    }
}
