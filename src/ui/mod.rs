pub mod theme;
pub mod widgets;

use chrono::{DateTime, Utc};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::{
    app::state::{AppMode, AppState},
    cli::IconMode,
    domain::weather::{ForecastBundle, IconKey, condition_for},
    ui::theme::{ColorCapability, Theme, detect_color_capability, theme_for},
};

const MIN_WIDTH: u16 = 44;
const MIN_HEIGHT: u16 = 16;
const WIDE_LAYOUT_WIDTH: u16 = 100;

/// Everything a widget needs besides the state it draws.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext {
    pub theme: Theme,
    pub icons: IconMode,
    pub now: DateTime<Utc>,
}

impl RenderContext {
    #[must_use]
    pub fn icon(&self, key: IconKey) -> &'static str {
        match self.icons {
            IconMode::Unicode => key.glyph(),
            IconMode::Ascii => key.ascii(),
        }
    }
}

pub fn render(frame: &mut Frame, state: &AppState, icons: IconMode) {
    render_at(frame, state, icons, Utc::now(), detect_color_capability());
}

/// Renders with an explicit clock and color capability.
pub fn render_at(
    frame: &mut Frame,
    state: &AppState,
    icons: IconMode,
    now: DateTime<Utc>,
    capability: ColorCapability,
) {
    let area = frame.area();
    // Clear-night palette until the first forecast arrives.
    let condition = state
        .weather
        .as_ref()
        .map_or_else(|| condition_for(0, Some(false)), ForecastBundle::condition);
    let ctx = RenderContext {
        theme: theme_for(&condition, capability),
        icons,
        now,
    };

    frame.render_widget(
        Block::default().style(Style::default().fg(ctx.theme.text).bg(ctx.theme.background)),
        area,
    );

    if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
        let warning = Paragraph::new(format!(
            "Terminal too small. Resize to at least {MIN_WIDTH}x{MIN_HEIGHT}."
        ))
        .block(Block::default().borders(Borders::ALL).title("weatherflow"));
        frame.render_widget(warning, area);
        return;
    }

    match (state.mode, &state.weather) {
        (AppMode::Error, _) => widgets::error::render(frame, area, state, &ctx),
        (_, Some(bundle)) => render_dashboard(frame, area, state, bundle, &ctx),
        (_, None) => widgets::loading::render(frame, area, state, &ctx),
    }

    if state.search.open {
        widgets::search::render(frame, centered_rect(64, 70, area), state, &ctx);
    }
}

fn render_dashboard(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    bundle: &ForecastBundle,
    ctx: &RenderContext,
) {
    let rows = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(10),
        Constraint::Length(1),
    ])
    .split(area);

    render_header(frame, rows[0], state, ctx);
    render_footer(frame, rows[2], ctx);

    let body = rows[1];
    let extras = if state.show_extras {
        Constraint::Min(8)
    } else {
        Constraint::Length(3)
    };

    if body.width >= WIDE_LAYOUT_WIDTH {
        let widths = [Constraint::Percentage(62), Constraint::Percentage(38)];
        let columns = Layout::horizontal(widths).split(body);
        let left_rows = [Constraint::Length(9), Constraint::Length(6), extras];
        let left = Layout::vertical(left_rows).split(columns[0]);
        widgets::current::render(frame, left[0], bundle, ctx);
        widgets::insight::render(frame, left[1], bundle, ctx);
        widgets::extras::render(frame, left[2], bundle, state.show_extras, ctx);
        widgets::forecast::render(frame, columns[1], bundle, ctx);
    } else {
        let stacked = Layout::vertical([
            Constraint::Length(9),
            Constraint::Length(6),
            extras,
            Constraint::Length(10),
        ])
        .split(body);
        widgets::current::render(frame, stacked[0], bundle, ctx);
        widgets::insight::render(frame, stacked[1], bundle, ctx);
        widgets::extras::render(frame, stacked[2], bundle, state.show_extras, ctx);
        widgets::forecast::render(frame, stacked[3], bundle, ctx);
    }
}

fn render_header(frame: &mut Frame, area: Rect, state: &AppState, ctx: &RenderContext) {
    let theme = ctx.theme;
    let mut spans = vec![
        Span::styled(
            " WeatherFlow ",
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("· ", Style::default().fg(theme.muted_text)),
        Span::styled(
            state.location_label.clone(),
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
        ),
    ];
    if state.locating {
        spans.push(Span::styled(
            "  ⟳ locating…",
            Style::default().fg(theme.info),
        ));
    } else if state.is_fetching() {
        spans.push(Span::styled(
            "  ⟳ updating…",
            Style::default().fg(theme.info),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_footer(frame: &mut Frame, area: Rect, ctx: &RenderContext) {
    let theme = ctx.theme;
    let widths = [Constraint::Min(10), Constraint::Length(36)];
    let halves = Layout::horizontal(widths).split(area);
    let hints = Paragraph::new(Line::from(Span::styled(
        " q quit · r refresh · u units · l locate · / search · e extras",
        Style::default().fg(theme.muted_text),
    )));
    let credit = Paragraph::new(Line::from(Span::styled(
        "Weather data provided by Open-Meteo ",
        Style::default().fg(theme.muted_text),
    )))
    .alignment(Alignment::Right);
    frame.render_widget(hints, halves[0]);
    frame.render_widget(credit, halves[1]);
}

pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
