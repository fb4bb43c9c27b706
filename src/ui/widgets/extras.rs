use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::{
    domain::weather::{
        ActivityLabel, ForecastBundle, format_date, format_feels_delta, format_sunshine_hours,
        format_temperature, format_wind, humidity_comfort, round_half_up, week_summary,
    },
    ui::{RenderContext, theme::Theme},
};

use super::shared::{meter, metric_line, panel_block};

const METER_WIDTH: usize = 12;

/// "Outfit & Extras" panel. Collapsed it shows a single hint line.
pub fn render(
    frame: &mut Frame,
    area: Rect,
    bundle: &ForecastBundle,
    expanded: bool,
    ctx: &RenderContext,
) {
    let theme = ctx.theme;
    let title = if expanded {
        "Outfit & Extras"
    } else {
        "Outfit & Extras (hidden)"
    };
    let block = panel_block(title, theme);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if !expanded {
        frame.render_widget(
            Paragraph::new(Span::styled(
                "Press e to show outfit, comfort and activity insights",
                Style::default().fg(theme.muted_text),
            )),
            inner,
        );
        return;
    }

    let widths = [Constraint::Percentage(50), Constraint::Percentage(50)];
    let columns = Layout::horizontal(widths).split(inner);
    frame.render_widget(Paragraph::new(left_column(bundle, theme)), columns[0]);
    frame.render_widget(Paragraph::new(right_column(bundle, theme)), columns[1]);
}

fn left_column(bundle: &ForecastBundle, theme: Theme) -> Vec<Line<'static>> {
    let current = &bundle.current;
    let outfit = bundle.outfit();

    let mut lines = vec![
        Line::from(Span::styled(
            outfit.tier.title(),
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!(
                "Feels like {}",
                format_temperature(current.apparent_temperature, bundle.units)
            ),
            Style::default().fg(theme.muted_text),
        )),
    ];
    lines.extend(outfit.notes.iter().map(|note| {
        Line::from(Span::styled(
            format!("• {}", note.text()),
            Style::default().fg(theme.warning),
        ))
    }));

    lines.push(metric_line(
        "Wind",
        format!(
            "{} · gusts {} km/h",
            format_wind(current.wind_speed_kmh, current.wind_direction_deg),
            round_half_up(current.wind_gusts_kmh)
        ),
        theme,
    ));
    lines.push(metric_line(
        "Sky",
        format!(
            "{} {}% cloud",
            meter(current.cloud_cover, METER_WIDTH),
            round_half_up(current.cloud_cover)
        ),
        theme,
    ));
    if let Some(sunshine) = bundle.today().and_then(|today| today.sunshine_duration_s) {
        let share = bundle.sunshine_share_today();
        lines.push(metric_line(
            "Sunshine",
            format!(
                "{} {} · {share}% of daylight",
                meter(f32::from(share), METER_WIDTH),
                format_sunshine_hours(sunshine)
            ),
            theme,
        ));
    }
    lines
}

fn right_column(bundle: &ForecastBundle, theme: Theme) -> Vec<Line<'static>> {
    let current = &bundle.current;
    let units = bundle.units;
    let activity = bundle.activity();
    let activity_color = match activity.label {
        ActivityLabel::Great => theme.success,
        ActivityLabel::Good => theme.info,
        ActivityLabel::Okay => theme.warning,
        ActivityLabel::Poor => theme.danger,
    };

    let mut lines = vec![
        metric_line(
            "Humidity",
            format!(
                "{}% · {}",
                round_half_up(current.relative_humidity),
                humidity_comfort(current.relative_humidity).label()
            ),
            theme,
        ),
        Line::from(vec![
            Span::styled("Activity: ", Style::default().fg(theme.muted_text)),
            Span::styled(
                format!("{}/100 {}", activity.score, activity.label.label()),
                Style::default()
                    .fg(activity_color)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        metric_line(
            "Feels",
            format_feels_delta(current.temperature, current.apparent_temperature),
            theme,
        ),
    ];

    if let Some(day) = bundle.hottest_day()
        && let Some(high) = day.temperature_max
    {
        let date = format_date(day.date);
        let high = format_temperature(high, units);
        lines.push(metric_line("Hottest", format!("{date} · {high}"), theme));
    }
    if let Some(day) = bundle.coldest_day()
        && let Some(low) = day.temperature_min
    {
        let date = format_date(day.date);
        let low = format_temperature(low, units);
        lines.push(metric_line("Coldest", format!("{date} · {low}"), theme));
    }

    let week = week_summary(&bundle.daily);
    let averages = match (week.average_high, week.average_low) {
        (Some(high), Some(low)) => format!(
            "avg {} / {}",
            format_temperature(high, units),
            format_temperature(low, units)
        ),
        _ => "avg --".to_string(),
    };
    lines.push(metric_line("Week", averages, theme));
    let max_uv = match week.max_uv_index {
        Some(uv) => format!("{uv:.1}"),
        None => "--".to_string(),
    };
    let rain = week.total_precipitation_mm;
    lines.push(metric_line(
        "Week rain",
        format!("{rain:.1} mm · max UV {max_uv}"),
        theme,
    ));
    lines
}
