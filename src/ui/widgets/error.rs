use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use crate::{
    app::state::AppState,
    ui::{RenderContext, centered_rect},
};

use super::shared::popup_block;

/// Replaces the dashboard while the last request failed.
pub fn render(frame: &mut Frame, area: Rect, state: &AppState, ctx: &RenderContext) {
    let theme = ctx.theme;
    let area = centered_rect(70, 50, area);
    let block = popup_block("Error", theme);

    let message = state
        .last_error
        .clone()
        .unwrap_or_else(|| "Unknown error".to_string());
    let lines = vec![
        Line::from(Span::styled(
            "Oops! Something went wrong",
            Style::default()
                .fg(theme.danger)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(message, Style::default().fg(theme.text))),
        Line::from(""),
        Line::from(Span::styled(
            "Try current location (l) / search (/) / quit (q)",
            Style::default().fg(theme.muted_text),
        )),
    ];

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(block),
        area,
    );
}
