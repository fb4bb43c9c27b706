use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
};

use crate::{
    app::state::AppState,
    data::MIN_QUERY_CHARS,
    ui::{RenderContext, theme::Theme},
};

use super::shared::popup_block;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState, ctx: &RenderContext) {
    frame.render_widget(Clear, area);

    let theme = ctx.theme;
    let block = popup_block("Search location", theme);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::vertical([
        Constraint::Length(2),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .split(inner);

    render_query_line(frame, chunks[0], state, theme);

    let items: Vec<ListItem<'static>> = state
        .search
        .suggestions
        .iter()
        .map(|location| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    location.name.clone(),
                    Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
                ),
                Span::raw("  "),
                Span::styled(
                    location.region_line(),
                    Style::default().fg(theme.muted_text),
                ),
            ]))
        })
        .collect();

    if items.is_empty() {
        let message = status_message(state);
        frame.render_widget(
            Paragraph::new(Span::styled(message, Style::default().fg(theme.muted_text))),
            chunks[1],
        );
    } else {
        let mut list_state = ListState::default().with_selected(Some(
            state.search.selected.min(items.len().saturating_sub(1)),
        ));
        let list = List::new(items)
            .highlight_style(
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("› ");
        frame.render_stateful_widget(list, chunks[1], &mut list_state);
    }

    frame.render_widget(
        Paragraph::new(Span::styled(
            "Enter select · ↑/↓ move · Esc close",
            Style::default().fg(theme.muted_text),
        )),
        chunks[2],
    );
}

fn render_query_line(frame: &mut Frame, area: Rect, state: &AppState, theme: Theme) {
    let query = if state.search.query.is_empty() {
        Span::styled(
            "Search for a city...",
            Style::default().fg(theme.muted_text),
        )
    } else {
        Span::styled(
            format!("{}▏", state.search.query),
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
        )
    };
    let mut spans = vec![
        Span::styled("Search: ", Style::default().fg(theme.muted_text)),
        query,
    ];
    if state.search.loading {
        spans.push(Span::styled("  ⟳", Style::default().fg(theme.info)));
    }
    let line = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(theme.border)),
    );
    frame.render_widget(line, area);
}

fn status_message(state: &AppState) -> &'static str {
    if state.search.query.chars().count() < MIN_QUERY_CHARS {
        "Type at least 2 characters"
    } else if state.search.loading {
        "Searching..."
    } else {
        "No matches"
    }
}
