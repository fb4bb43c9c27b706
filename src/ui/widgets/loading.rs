use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::{
    app::state::AppState,
    ui::{RenderContext, centered_rect},
};

/// Shown until the first forecast arrives.
pub fn render(frame: &mut Frame, area: Rect, state: &AppState, ctx: &RenderContext) {
    let theme = ctx.theme;
    let lines = vec![
        Line::from(Span::styled(
            "WeatherFlow",
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("⟳ {}", state.loading_message),
            Style::default().fg(theme.text),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "/ search · q quit",
            Style::default().fg(theme.muted_text),
        )),
    ];
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        centered_rect(60, 40, area),
    );
}
