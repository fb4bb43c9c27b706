use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::{
    domain::weather::{
        ForecastBundle, format_pressure, format_temperature, format_wind, round_half_up,
    },
    ui::RenderContext,
};

use super::shared::{metric_line, panel_block};

/// Current conditions: big temperature, description and the raw readings.
pub fn render(frame: &mut Frame, area: Rect, bundle: &ForecastBundle, ctx: &RenderContext) {
    let theme = ctx.theme;
    let block = panel_block("Now", theme);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let widths = [Constraint::Percentage(45), Constraint::Percentage(55)];
    let columns = Layout::horizontal(widths).split(inner);

    let current = &bundle.current;
    let condition = bundle.condition();
    let day_part = if current.is_day { "Day" } else { "Night" };
    let mut headline = vec![
        Line::from(vec![
            Span::styled(
                format!("{} ", ctx.icon(condition.icon)),
                Style::default().fg(theme.accent),
            ),
            Span::styled(
                format_temperature(current.temperature, bundle.units),
                Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(
            condition.description.to_string(),
            Style::default().fg(theme.text),
        )),
        Line::from(Span::styled(
            day_part,
            Style::default().fg(theme.muted_text),
        )),
    ];
    if let Some(today) = bundle.today()
        && let (Some(high), Some(low)) = (today.temperature_max, today.temperature_min)
    {
        headline.push(Line::from(Span::styled(
            format!(
                "H {}  L {}",
                format_temperature(high, bundle.units),
                format_temperature(low, bundle.units)
            ),
            Style::default().fg(theme.muted_text),
        )));
    }
    frame.render_widget(Paragraph::new(headline), columns[0]);

    let readings = vec![
        metric_line(
            "Feels like",
            format_temperature(current.apparent_temperature, bundle.units),
            theme,
        ),
        metric_line(
            "Humidity",
            format!("{}%", round_half_up(current.relative_humidity)),
            theme,
        ),
        metric_line(
            "Wind",
            format_wind(current.wind_speed_kmh, current.wind_direction_deg),
            theme,
        ),
        metric_line("Pressure", format_pressure(current.pressure_msl_hpa), theme),
        metric_line(
            "Cloud cover",
            format!("{}%", round_half_up(current.cloud_cover)),
            theme,
        ),
        metric_line(
            "Precipitation",
            format!("{:.1} mm", current.precipitation_mm),
            theme,
        ),
    ];
    frame.render_widget(Paragraph::new(readings), columns[1]);
}
