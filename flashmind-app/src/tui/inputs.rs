use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    Up,
    Down,
    Flip,
    Favorite,
    Delete,
    RateEasy,
    RateHard,
    NextCategory,
    NextDifficulty,
    SearchInput(char),
    SearchBackspace,
    None,
}

pub fn map_event(ev: Event) -> Action {
    if let Event::Key(KeyEvent {
        code, modifiers, kind, ..
    }) = ev
    {
        if kind == KeyEventKind::Release {
            return Action::None;
        }
        match (code, modifiers) {
            (KeyCode::Esc, _) => Action::Quit,
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,
            (KeyCode::Char('f'), KeyModifiers::CONTROL) => Action::Favorite,
            (KeyCode::Up, _) => Action::Up,
            (KeyCode::Down, _) => Action::Down,
            (KeyCode::Enter, _) => Action::Flip,
            (KeyCode::Delete, _) => Action::Delete,
            (KeyCode::F(3), _) => Action::RateEasy,
            (KeyCode::F(4), _) => Action::RateHard,
            (KeyCode::Tab, _) => Action::NextCategory,
            (KeyCode::BackTab, _) | (KeyCode::F(2), _) => Action::NextDifficulty,
            (KeyCode::Backspace, _) => Action::SearchBackspace,
            (KeyCode::Char(c), m) if !m.contains(KeyModifiers::CONTROL) => Action::SearchInput(c),
            _ => Action::None,
        }
    } else {
        Action::None
    }
}
