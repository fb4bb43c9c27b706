use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use crate::{
    domain::weather::{
        ForecastBundle, format_time, format_time_until, next_sun_event, rain_outlook,
        round_half_up, uv_index_level, uv_tip,
    },
    ui::{RenderContext, theme::severity_color},
};

use super::shared::panel_block;

/// Sun event countdown, UV and rain cards.
pub fn render(frame: &mut Frame, area: Rect, bundle: &ForecastBundle, ctx: &RenderContext) {
    let theme = ctx.theme;
    let block = panel_block("Today", theme);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let cards = Layout::horizontal([
        Constraint::Ratio(1, 3),
        Constraint::Ratio(1, 3),
        Constraint::Ratio(1, 3),
    ])
    .split(inner);

    let label_style = Style::default().fg(theme.muted_text);
    let value_style = Style::default().fg(theme.text).add_modifier(Modifier::BOLD);

    let local_now = bundle.local_now(ctx.now);
    let sun = bundle
        .today()
        .and_then(|today| next_sun_event(bundle.current.is_day, today))
        .map_or_else(
            || {
                vec![
                    Line::from(Span::styled("Sun", label_style)),
                    Line::from(Span::styled("--", value_style)),
                ]
            },
            |event| {
                vec![
                    Line::from(Span::styled(
                        format!("Next {}", event.kind.label()),
                        label_style,
                    )),
                    Line::from(Span::styled(format_time(event.at), value_style)),
                    Line::from(Span::styled(
                        format!("in {}", format_time_until(local_now, event.at)),
                        label_style,
                    )),
                ]
            },
        );
    frame.render_widget(Paragraph::new(sun), cards[0]);

    let uv = bundle.uv_index_today();
    let level = uv_index_level(uv);
    let uv_lines = vec![
        Line::from(Span::styled("UV index", label_style)),
        Line::from(vec![
            Span::styled(format!("{} ", round_half_up(uv)), value_style),
            Span::styled(
                level.label(),
                Style::default()
                    .fg(severity_color(&theme, level.severity()))
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(uv_tip(uv), label_style)),
    ];
    let uv_card = Paragraph::new(uv_lines).wrap(Wrap { trim: true });
    frame.render_widget(uv_card, cards[1]);

    let chance = bundle.precipitation_probability_today();
    let rain = vec![
        Line::from(Span::styled("Rain chance", label_style)),
        Line::from(Span::styled(
            format!("{}%", round_half_up(chance)),
            value_style,
        )),
        Line::from(Span::styled(rain_outlook(chance).text(), label_style)),
    ];
    frame.render_widget(Paragraph::new(rain).wrap(Wrap { trim: true }), cards[2]);
}
