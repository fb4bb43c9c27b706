use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    widgets::{Cell, Row, Table},
};

use crate::{
    domain::weather::{
        DailyForecast, ForecastBundle, condition_for, format_date, format_temperature,
        round_half_up,
    },
    ui::RenderContext,
};

use super::shared::panel_block;

/// Label for a forecast row; the first row is always today.
#[must_use]
pub fn day_label(index: usize, day: &DailyForecast) -> String {
    if index == 0 {
        "Today".to_string()
    } else {
        format_date(day.date)
    }
}

pub fn render(frame: &mut Frame, area: Rect, bundle: &ForecastBundle, ctx: &RenderContext) {
    let theme = ctx.theme;
    let units = bundle.units;
    let temp = |value: Option<f32>| {
        value.map_or_else(|| "--".to_string(), |v| format_temperature(v, units))
    };

    let rows = bundle.daily.iter().enumerate().map(|(idx, day)| {
        let (icon, description) = day.weather_code.map_or(("?", "--".to_string()), |code| {
            let condition = condition_for(code, None);
            (ctx.icon(condition.icon), condition.description.into_owned())
        });
        let chance = day
            .precipitation_probability_max
            .map_or_else(|| "--".to_string(), |p| format!("{}%", round_half_up(p)));
        let style = if idx == 0 {
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.text)
        };
        Row::new(vec![
            Cell::from(day_label(idx, day)),
            Cell::from(format!("{icon} {description}")),
            Cell::from(temp(day.temperature_max)).style(Style::default().fg(theme.warning)),
            Cell::from(temp(day.temperature_min)).style(Style::default().fg(theme.info)),
            Cell::from(chance),
        ])
        .style(style)
    });

    let header = Row::new(vec!["Day", "Conditions", "High", "Low", "Rain"]).style(
        Style::default()
            .fg(theme.muted_text)
            .add_modifier(Modifier::BOLD),
    );

    let table = Table::new(
        rows,
        [
            Constraint::Length(11),
            Constraint::Min(12),
            Constraint::Length(6),
            Constraint::Length(6),
            Constraint::Length(5),
        ],
    )
    .header(header)
    .column_spacing(1)
    .block(panel_block("7-Day Forecast", theme));

    frame.render_widget(table, area);
}
