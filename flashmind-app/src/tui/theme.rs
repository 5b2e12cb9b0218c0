use flashmind_core::Difficulty;
use ratatui::style::{Color, Style, Stylize};

pub fn title_style() -> Style { Style::default().fg(Color::Cyan).bold() }
pub fn hint_style() -> Style { Style::default().fg(Color::DarkGray) }
pub fn selected_style() -> Style { Style::default().fg(Color::Yellow).bold() }
pub fn footer_style() -> Style { Style::default().fg(Color::Gray) }
pub fn favorite_style() -> Style { Style::default().fg(Color::Yellow) }

pub fn difficulty_style(d: Difficulty) -> Style {
    match d {
        Difficulty::Easy => Style::default().fg(Color::Green),
        Difficulty::Medium => Style::default().fg(Color::Yellow),
        Difficulty::Hard => Style::default().fg(Color::Red),
    }
}
