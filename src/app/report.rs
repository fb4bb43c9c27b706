//! Plain-text rendering of the dashboard for `--one-shot`.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};

use crate::{
    app::{
        config::{AppConfig, StartTarget},
        state::CURRENT_LOCATION_LABEL,
    },
    cli::IconMode,
    data::WeatherClient,
    domain::weather::{
        ForecastBundle, Location, condition_for, format_date, format_feels_delta, format_pressure,
        format_sunshine_hours, format_temperature, format_time, format_time_until, format_wind,
        humidity_comfort, next_sun_event, rain_outlook, round_half_up, uv_index_level, uv_tip,
        week_summary,
    },
};

/// Resolves the start target, fetches once and renders the report.
pub async fn one_shot(config: &AppConfig, client: &WeatherClient) -> Result<String> {
    let (location, label) = resolve_start(config, client).await?;
    let bundle = client
        .fetch_current_and_forecast(location, config.units)
        .await?;
    Ok(render_report(&bundle, &label, config.icon_mode, Utc::now()))
}

async fn resolve_start(config: &AppConfig, client: &WeatherClient) -> Result<(Location, String)> {
    match &config.start {
        StartTarget::Coordinates(location) => Ok((location.clone(), location.display_name())),
        StartTarget::City(query) => {
            let location = client
                .search_locations(query)
                .await?
                .into_iter()
                .next()
                .with_context(|| format!("No location found for \"{query}\""))?;
            let label = location.display_name();
            Ok((location, label))
        }
        StartTarget::DevicePosition => {
            let location = client.current_device_position().await?;
            Ok((location, CURRENT_LOCATION_LABEL.to_string()))
        }
    }
}

#[must_use]
pub fn render_report(
    bundle: &ForecastBundle,
    label: &str,
    icons: IconMode,
    now: DateTime<Utc>,
) -> String {
    let units = bundle.units;
    let current = &bundle.current;
    let condition = bundle.condition();
    let icon = match icons {
        IconMode::Unicode => condition.icon.glyph(),
        IconMode::Ascii => condition.icon.ascii(),
    };
    let local_now = bundle.local_now(now);

    let mut lines = vec![
        format!("{label} · {}", format_date(local_now.date())),
        format!(
            "{icon} {} · {} (feels like {}, {})",
            condition.description,
            format_temperature(current.temperature, units),
            format_temperature(current.apparent_temperature, units),
            format_feels_delta(current.temperature, current.apparent_temperature),
        ),
        format!(
            "Wind {} (gusts {} km/h) · Humidity {}% ({}) · Pressure {}",
            format_wind(current.wind_speed_kmh, current.wind_direction_deg),
            round_half_up(current.wind_gusts_kmh),
            round_half_up(current.relative_humidity),
            humidity_comfort(current.relative_humidity).label(),
            format_pressure(current.pressure_msl_hpa),
        ),
    ];

    let uv = bundle.uv_index_today();
    let precipitation = bundle.precipitation_probability_today();
    let uv_level = uv_index_level(uv).label();
    lines.push(format!("UV {uv:.1} {uv_level}: {}", uv_tip(uv)));
    lines.push(format!(
        "Rain {}%: {}",
        round_half_up(precipitation),
        rain_outlook(precipitation).text()
    ));

    if let Some(today) = bundle.today() {
        let mut sun = Vec::new();
        if let Some(event) = next_sun_event(current.is_day, today) {
            sun.push(format!(
                "{} {} (in {})",
                event.kind.label(),
                format_time(event.at),
                format_time_until(local_now, event.at)
            ));
        }
        if let Some(sunshine) = today.sunshine_duration_s {
            sun.push(format!(
                "Sunshine {} ({}% of daylight)",
                format_sunshine_hours(sunshine),
                bundle.sunshine_share_today()
            ));
        }
        if !sun.is_empty() {
            lines.push(sun.join(" · "));
        }
    }

    let outfit = bundle.outfit();
    let mut outfit_line = format!("Outfit: {}", outfit.tier.title());
    for note in &outfit.notes {
        outfit_line.push_str(" · ");
        outfit_line.push_str(note.text());
    }
    lines.push(outfit_line);

    let activity = bundle.activity();
    lines.push(format!(
        "Activity: {}/100 {}",
        activity.score,
        activity.label.label()
    ));

    let week = week_summary(&bundle.daily);
    let mut week_parts = Vec::new();
    if let Some(high) = week.average_high {
        week_parts.push(format!("avg high {}", format_temperature(high, units)));
    }
    if let Some(low) = week.average_low {
        week_parts.push(format!("avg low {}", format_temperature(low, units)));
    }
    let rain_total = week.total_precipitation_mm;
    week_parts.push(format!("{rain_total:.1} mm precipitation"));
    if let Some(max_uv) = week.max_uv_index {
        week_parts.push(format!("max UV {max_uv:.1}"));
    }
    lines.push(format!("Week: {}", week_parts.join(", ")));

    let mut extremes = Vec::new();
    if let Some(day) = bundle.hottest_day()
        && let Some(high) = day.temperature_max
    {
        extremes.push(format!(
            "Hottest {} ({})",
            format_date(day.date),
            format_temperature(high, units)
        ));
    }
    if let Some(day) = bundle.coldest_day()
        && let Some(low) = day.temperature_min
    {
        extremes.push(format!(
            "Coldest {} ({})",
            format_date(day.date),
            format_temperature(low, units)
        ));
    }
    if !extremes.is_empty() {
        lines.push(extremes.join(" · "));
    }

    lines.push(String::new());
    for day in &bundle.daily {
        let description = day
            .weather_code
            .map(|code| condition_for(code, None).description.into_owned())
            .unwrap_or_else(|| "--".to_string());
        let temp = |value: Option<f32>| {
            value.map_or_else(|| "--".to_string(), |v| format_temperature(v, units))
        };
        let chance = day
            .precipitation_probability_max
            .map_or_else(|| "--".to_string(), |p| format!("{}%", round_half_up(p)));
        lines.push(format!(
            "{:<12} {:<28} {:>5} / {:>5}  {:>4}",
            format_date(day.date),
            description,
            temp(day.temperature_max),
            temp(day.temperature_min),
            chance
        ));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::weather::Units;
    use crate::test_support::{fixed_now, lisbon, sample_bundle};

    #[test]
    fn report_carries_headline_values() {
        let bundle = sample_bundle(lisbon(), Units::Celsius);
        let report = render_report(&bundle, "Lisbon, Portugal", IconMode::Ascii, fixed_now());

        assert!(report.starts_with("Lisbon, Portugal · Thu, Feb 12"));
        let headline = "CLD Partly cloudy · 16°C (feels like 15°C, Feels 1° cooler)";
        assert!(report.contains(headline));
        assert!(report.contains("Wind 15 km/h NW"));
        assert!(report.contains("Humidity 68% (Muggy)"));
        assert!(report.contains("UV 3.5 Moderate"));
        assert!(report.contains("Sunset 18:12 (in 8h 12m)"));
        assert!(report.contains("Outfit: T-shirt + jeans"));
        assert!(report.contains("Activity: 100/100 Great"));
        assert!(report.contains("Hottest Fri, Feb 13 (22°C)"));
        assert!(report.contains("Coldest Mon, Feb 16 (8°C)"));
    }

    #[test]
    fn report_lists_every_forecast_day() {
        let bundle = sample_bundle(lisbon(), Units::Celsius);
        let report = render_report(&bundle, "Lisbon", IconMode::Unicode, fixed_now());
        assert!(report.contains("Slight rain"));
        let day_rows = report.lines().filter(|line| line.contains("°C /"));
        assert_eq!(day_rows.count(), 7);
    }
}
