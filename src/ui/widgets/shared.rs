use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders},
};

use crate::ui::theme::Theme;

pub(super) fn panel_block(title: impl Into<String>, theme: Theme) -> Block<'static> {
    Block::default()
        .title(Span::styled(
            format!(" {} ", title.into()),
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .style(Style::default().fg(theme.text).bg(theme.surface))
        .border_style(Style::default().fg(theme.border).bg(theme.surface))
}

pub(super) fn popup_block(title: &'static str, theme: Theme) -> Block<'static> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .style(Style::default().fg(theme.text).bg(theme.popup_surface))
        .border_style(Style::default().fg(theme.border).bg(theme.popup_surface))
}

/// `label  value` pair with the label muted.
pub(super) fn metric_line(label: &str, value: String, theme: Theme) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{label}: "), Style::default().fg(theme.muted_text)),
        Span::styled(value, Style::default().fg(theme.text)),
    ])
}

/// Horizontal fill bar for a percentage, `width` cells wide.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(super) fn meter(percent: f32, width: usize) -> String {
    if width == 0 {
        return String::new();
    }
    let ratio = (percent / 100.0).clamp(0.0, 1.0);
    let filled = ((ratio * width as f32).round() as usize).min(width);
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
