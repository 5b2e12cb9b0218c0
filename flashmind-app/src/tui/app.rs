use crate::tui::{
    inputs::{map_event, Action},
    views,
};
use crossterm::{
    event,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use flashmind_core::{summarize, CardId, CardStore, DashboardStats, Difficulty, FilterCriteria, Flashcard, ALL};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::collections::HashSet;
use std::io::{stdout, Stdout};

/// Difficulty selector values: "all" then each level.
fn difficulty_options() -> Vec<&'static str> {
    std::iter::once(ALL)
        .chain(Difficulty::ALL.iter().map(|d| d.as_str()))
        .collect()
}

/// Everything the dashboard shows, independent of the terminal.
pub struct Dashboard {
    store: CardStore,
    pub criteria: FilterCriteria,
    pub visible: Vec<Flashcard>,
    pub sel: usize,
    flipped: HashSet<CardId>,
    pub status: Option<String>,
}

impl Dashboard {
    pub fn new(store: CardStore) -> Self {
        let mut d = Self {
            store,
            criteria: FilterCriteria::default(),
            visible: Vec::new(),
            sel: 0,
            flipped: HashSet::new(),
            status: None,
        };
        d.refresh();
        d
    }

    pub fn store(&self) -> &CardStore {
        &self.store
    }

    pub fn stats(&self) -> DashboardStats {
        summarize(self.store.cards())
    }

    pub fn selected(&self) -> Option<&Flashcard> {
        self.visible.get(self.sel)
    }

    pub fn is_flipped(&self, id: &str) -> bool {
        self.flipped.contains(id)
    }

    /// Second line of the empty state.
    pub fn empty_hint(&self) -> &'static str {
        if self.criteria.is_unconstrained() {
            "Upload some content to get started."
        } else {
            "No card matches; loosen the filters."
        }
    }

    fn refresh(&mut self) {
        self.visible = self.store.filtered(&self.criteria);
        self.sel = self.sel.min(self.visible.len().saturating_sub(1));
    }

    fn selected_id(&self) -> Option<CardId> {
        self.selected().map(|c| c.id.clone())
    }

    /// Category selector values: "all" then each category, lowercased.
    fn category_options(&self) -> Vec<String> {
        let mut v = vec![ALL.to_string()];
        for c in self.store.categories() {
            let c = c.to_lowercase();
            if !v.contains(&c) {
                v.push(c);
            }
        }
        v
    }

    /// Applies one action; returns false when the app should exit.
    pub fn apply(&mut self, action: Action) -> bool {
        match action {
            Action::Quit => return false,
            Action::Up => self.sel = self.sel.saturating_sub(1),
            Action::Down => {
                if self.sel + 1 < self.visible.len() {
                    self.sel += 1;
                }
            }
            Action::Flip => {
                if let Some(id) = self.selected_id() {
                    if !self.flipped.remove(&id) {
                        self.flipped.insert(id);
                    }
                }
            }
            Action::Favorite => {
                if let Some(id) = self.selected_id() {
                    self.store.toggle_favorite(&id);
                    self.refresh();
                }
            }
            Action::Delete => {
                if let Some(id) = self.selected_id() {
                    self.store.delete(&id);
                    self.flipped.remove(&id);
                    self.refresh();
                    self.status = Some(format!("deleted card {id}"));
                }
            }
            Action::RateEasy | Action::RateHard => {
                let rating = if action == Action::RateEasy { Difficulty::Easy } else { Difficulty::Hard };
                if let Some(id) = self.selected_id() {
                    if let Some(ev) = self.store.rate(&id, rating) {
                        self.status = Some(format!("rated card {} {}", ev.card_id, ev.rating));
                    }
                }
            }
            Action::NextCategory => {
                let opts = self.category_options();
                let i = opts.iter().position(|c| c == &self.criteria.category).unwrap_or(0);
                self.criteria.category = opts[(i + 1) % opts.len()].clone();
                self.refresh();
            }
            Action::NextDifficulty => {
                let opts = difficulty_options();
                let i = opts.iter().position(|d| *d == self.criteria.difficulty).unwrap_or(0);
                self.criteria.difficulty = opts[(i + 1) % opts.len()].to_string();
                self.refresh();
            }
            Action::SearchInput(c) => {
                self.criteria.search.push(c);
                self.refresh();
            }
            Action::SearchBackspace => {
                self.criteria.search.pop();
                self.refresh();
            }
            Action::None => {}
        }
        true
    }
}

pub struct TuiApp {
    dash: Dashboard,
}

impl TuiApp {
    pub fn new(store: CardStore) -> Self {
        Self { dash: Dashboard::new(store) }
    }

    pub fn run(&mut self) -> anyhow::Result<()> {
        enable_raw_mode()?;
        let mut stdout = stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let res = self.mainloop(&mut terminal);

        disable_raw_mode().ok();
        let mut out: Stdout = std::io::stdout();
        execute!(out, LeaveAlternateScreen).ok();
        terminal.show_cursor().ok();

        res
    }

    fn mainloop(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> anyhow::Result<()> {
        loop {
            terminal.draw(|f| {
                let area = f.size();
                views::draw_ui(f, area, &self.dash);
            })?;

            if event::poll(std::time::Duration::from_millis(100))? {
                let ev = event::read()?;
                if !self.dash.apply(map_event(ev)) {
                    break;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flashmind_core::seed;

    fn dash() -> Dashboard {
        Dashboard::new(CardStore::from_cards(seed::mock_flashcards()).unwrap())
    }

    #[test]
    fn typing_narrows_the_view() {
        let mut d = dash();
        assert_eq!(d.visible.len(), 3);
        for c in "mito".chars() {
            d.apply(Action::SearchInput(c));
        }
        assert_eq!(d.visible.len(), 1);
        assert_eq!(d.visible[0].id, "1");

        for c in "xyz".chars() {
            d.apply(Action::SearchInput(c));
        }
        assert!(d.visible.is_empty());
        assert!(d.selected().is_none());

        for _ in 0..7 {
            d.apply(Action::SearchBackspace);
        }
        assert_eq!(d.visible.len(), 3);
    }

    #[test]
    fn selectors_cycle_through_options() {
        let mut d = dash();
        d.apply(Action::NextCategory);
        assert_eq!(d.criteria.category, "biology");
        assert_eq!(d.visible.len(), 1);
        for _ in 0..3 {
            d.apply(Action::NextCategory);
        }
        assert_eq!(d.criteria.category, ALL);

        d.apply(Action::NextDifficulty);
        assert_eq!(d.criteria.difficulty, "easy");
        assert_eq!(d.visible[0].id, "3");
        for _ in 0..3 {
            d.apply(Action::NextDifficulty);
        }
        assert_eq!(d.criteria.difficulty, ALL);
    }

    #[test]
    fn empty_hint_follows_filters() {
        let mut d = Dashboard::new(CardStore::new());
        assert!(d.visible.is_empty());
        assert!(d.empty_hint().starts_with("Upload"));
        d.apply(Action::SearchInput('x'));
        assert!(d.empty_hint().contains("loosen the filters"));
    }

    #[test]
    fn delete_and_favorite_act_on_selection() {
        let mut d = dash();
        d.apply(Action::Down);
        assert_eq!(d.selected().unwrap().id, "2");
        d.apply(Action::Favorite);
        assert!(d.store().get("2").unwrap().is_favorite);

        d.apply(Action::Flip);
        assert!(d.is_flipped("2"));
        d.apply(Action::Delete);
        assert!(d.store().get("2").is_none());
        assert!(!d.is_flipped("2"));
        assert_eq!(d.selected().unwrap().id, "3");
    }

    #[test]
    fn rating_only_sets_status() {
        let mut d = dash();
        let before = d.store().cards().to_vec();
        d.apply(Action::RateHard);
        assert_eq!(d.store().cards(), &before[..]);
        assert_eq!(d.status.as_deref(), Some("rated card 1 hard"));
        assert!(!d.apply(Action::Quit));
    }
}
