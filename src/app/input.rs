use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// User intent decoded from a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Quit,
    Refresh,
    ToggleUnits,
    UseCurrentLocation,
    ToggleExtras,
    OpenSearch,
    CloseSearch,
    SearchInput(char),
    SearchBackspace,
    SelectPrevious,
    SelectNext,
    PickSelected,
}

/// While the search panel is open every printable key goes to the query, so
/// only Esc, Enter, Backspace and the arrows act as controls there.
pub fn command_for(key: KeyEvent, search_open: bool) -> Option<Command> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return matches!(key.code, KeyCode::Char('c' | 'C')).then_some(Command::Quit);
    }
    if search_open {
        return search_command(key);
    }
    match key.code {
        KeyCode::Esc => Some(Command::Quit),
        KeyCode::Char(ch) => match ch.to_ascii_lowercase() {
            'q' => Some(Command::Quit),
            'r' => Some(Command::Refresh),
            'u' => Some(Command::ToggleUnits),
            'l' => Some(Command::UseCurrentLocation),
            'e' => Some(Command::ToggleExtras),
            '/' | 's' => Some(Command::OpenSearch),
            _ => None,
        },
        _ => None,
    }
}

fn search_command(key: KeyEvent) -> Option<Command> {
    match key.code {
        KeyCode::Esc => Some(Command::CloseSearch),
        KeyCode::Enter => Some(Command::PickSelected),
        KeyCode::Backspace => Some(Command::SearchBackspace),
        KeyCode::Up => Some(Command::SelectPrevious),
        KeyCode::Down | KeyCode::Tab => Some(Command::SelectNext),
        KeyCode::Char(ch) if accepts_query_input(key, ch) => Some(Command::SearchInput(ch)),
        _ => None,
    }
}

fn accepts_query_input(key: KeyEvent, ch: char) -> bool {
    let chord = KeyModifiers::ALT | KeyModifiers::SUPER;
    !key.modifiers.intersects(chord) && is_query_char(ch)
}

pub(crate) fn is_query_char(ch: char) -> bool {
    ch.is_alphanumeric() || matches!(ch, ' ' | '-' | '\'' | '’' | ',' | '.')
}
