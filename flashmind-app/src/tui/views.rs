use crate::tui::app::Dashboard;
use crate::tui::theme::*;
use flashmind_core::Flashcard;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

pub fn draw_ui(f: &mut Frame, area: Rect, dash: &Dashboard) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(area);
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
        .split(rows[0]);
    draw_sidebar(f, chunks[0], dash);
    draw_cards(f, chunks[1], dash);

    let foot = Paragraph::new(Line::from(vec![
        Span::raw(" type search  "),
        Span::raw(" Tab category  "),
        Span::raw(" F2 difficulty  "),
        Span::raw(" Enter flip  "),
        Span::raw(" ^F favorite  "),
        Span::raw(" Del delete  "),
        Span::raw(" F3/F4 easy/hard  "),
        Span::raw(" Esc quit "),
    ]))
    .style(footer_style());
    f.render_widget(foot, rows[1]);
}

fn draw_sidebar(f: &mut Frame, area: Rect, dash: &Dashboard) {
    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(3)])
        .split(area);

    let c = &dash.criteria;
    let filters = Paragraph::new(vec![
        Line::from(vec![Span::raw("search: ").style(title_style()), Span::raw(&c.search)]),
        Line::from(vec![Span::raw("category: ").style(title_style()), Span::raw(&c.category)]),
        Line::from(vec![Span::raw("difficulty: ").style(title_style()), Span::raw(&c.difficulty)]),
    ])
    .block(Block::default().title("Filters").borders(Borders::ALL));
    f.render_widget(filters, parts[0]);

    let s = dash.stats();
    let accuracy = s
        .average_accuracy
        .map(|a| format!("{a:.0}%"))
        .unwrap_or_else(|| "-".to_string());
    let mut lines = vec![
        Line::from(format!("Total cards  {}", s.total)),
        Line::from(format!("Favorites    {}", s.favorites)),
        Line::from(format!("Accuracy     {accuracy}")),
        Line::from(""),
    ];
    for (cat, n) in &s.per_category {
        lines.push(Line::from(format!("{cat}  {n}")).style(hint_style()));
    }
    if let Some(msg) = &dash.status {
        lines.push(Line::from(""));
        lines.push(Line::from(msg.as_str()).style(hint_style()));
    }
    let stats = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(Block::default().title("Stats").borders(Borders::ALL));
    f.render_widget(stats, parts[1]);
}

fn draw_cards(f: &mut Frame, area: Rect, dash: &Dashboard) {
    let title = format!("My Cards ({}/{})", dash.visible.len(), dash.store().len());

    if dash.visible.is_empty() {
        let p = Paragraph::new(vec![
            Line::from("No flashcards yet").style(title_style()),
            Line::from(dash.empty_hint()).style(hint_style()),
        ])
        .wrap(Wrap { trim: true })
        .block(Block::default().title(title).borders(Borders::ALL));
        f.render_widget(p, area);
        return;
    }

    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let items: Vec<_> = dash
        .visible
        .iter()
        .enumerate()
        .map(|(i, c)| {
            let line = card_row(c);
            ListItem::new(if i == dash.sel { line.style(selected_style()) } else { line })
        })
        .collect();
    let list = List::new(items).block(Block::default().title(title).borders(Borders::ALL));
    f.render_widget(list, parts[0]);

    if let Some(card) = dash.selected() {
        draw_card_face(f, parts[1], card, dash.is_flipped(&card.id));
    }
}

fn card_row(c: &Flashcard) -> Line<'_> {
    let star = if c.is_favorite { "★ " } else { "  " };
    Line::from(vec![
        Span::raw(star).style(favorite_style()),
        Span::raw(format!("{:<7}", c.difficulty.as_str())).style(difficulty_style(c.difficulty)),
        Span::raw(format!("{:<18}", c.category)),
        Span::raw(&c.question),
    ])
}

fn draw_card_face(f: &mut Frame, area: Rect, card: &Flashcard, flipped: bool) {
    let (label, body) = if flipped { ("A: ", &card.answer) } else { ("Q: ", &card.question) };
    let mut text = vec![Line::from(vec![Span::raw(label).style(title_style()), Span::raw(body)])];
    text.push(Line::from(""));
    let meta = match card.accuracy {
        Some(a) => format!("{} · {} · accuracy {a}%", card.category, card.difficulty),
        None => format!("{} · {}", card.category, card.difficulty),
    };
    text.push(Line::from(meta).style(hint_style()));
    if !flipped {
        text.push(Line::from("Enter to flip").style(hint_style()));
    }
    let p = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .block(Block::default().title(if flipped { "Answer" } else { "Question" }).borders(Borders::ALL));
    f.render_widget(p, area);
}
