use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::domain::weather::{DailyForecast, ForecastBundle, Location, Units, WeatherSnapshot};

fn parse_time(value: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M").expect("valid time fixture")
}

pub(crate) fn lisbon() -> Location {
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

pub(crate) fn porto() -> Location {
    Location {
        name: "Porto".to_string(),
        latitude: 41.1496,
        longitude: -8.611,
        country: Some("Portugal".to_string()),
        admin1: Some("Porto".to_string()),
        timezone: Some("Europe/Lisbon".to_string()),
        population: Some(249_633),
    }
}

pub(crate) fn fixed_now() -> DateTime<Utc> {
    parse_time("2026-02-12T10:00").and_utc()
}

pub(crate) fn sample_bundle(location: Location, units: Units) -> ForecastBundle {
    let base = NaiveDate::from_ymd_opt(2026, 2, 12).expect("valid fixed date");
    let highs = [18.0, 21.5, 21.5, 16.0, 15.5, 17.0, 19.0];
    let lows = [9.0, 11.0, 10.5, 8.0, 7.5, 9.5, 10.0];
    let daily = highs
        .iter()
        .zip(lows)
        .enumerate()
        .map(|(idx, (&high, low))| {
            let date = base + chrono::Days::new(idx as u64);
            let at = |time: &str| parse_time(&format!("{}T{time}", date.format("%Y-%m-%d")));
            DailyForecast {
                date,
                weather_code: Some(if idx == 3 { 61 } else { 2 }),
                temperature_max: Some(high),
                temperature_min: Some(low),
                apparent_temperature_max: Some(high - 1.0),
                apparent_temperature_min: Some(low - 2.0),
                sunrise: Some(at("07:31")),
                sunset: Some(at("18:12")),
                daylight_duration_s: Some(38_460.0),
                sunshine_duration_s: Some(25_200.0),
                uv_index_max: Some(3.5),
                precipitation_sum_mm: Some(if idx == 3 { 6.2 } else { 0.0 }),
                rain_sum_mm: Some(0.0),
                showers_sum_mm: Some(0.0),
                snowfall_sum_cm: Some(0.0),
                precipitation_probability_max: Some(if idx == 3 { 80.0 } else { 10.0 }),
                wind_speed_max_kmh: Some(22.0),
                wind_gusts_max_kmh: Some(41.0),
                wind_direction_dominant_deg: Some(300.0),
            }
        })
        .collect();

    ForecastBundle {
        latitude: location.latitude,
        longitude: location.longitude,
        location,
        units,
        utc_offset_seconds: 0,
        current: WeatherSnapshot {
            temperature: 16.4,
            apparent_temperature: 15.1,
            relative_humidity: 68.0,
            is_day: true,
            precipitation_mm: 0.0,
            rain_mm: 0.0,
            showers_mm: 0.0,
            snowfall_cm: 0.0,
            weather_code: 2,
            cloud_cover: 40.0,
            pressure_msl_hpa: 1018.3,
            surface_pressure_hpa: 1012.9,
            wind_speed_kmh: 14.6,
            wind_direction_deg: 310.0,
            wind_gusts_kmh: 29.0,
        },
        daily,
        fetched_at: fixed_now(),
    }
}
