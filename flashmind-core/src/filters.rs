use crate::Flashcard;
use serde::{Deserialize, Serialize};

/// Selector value meaning "no constraint".
pub const ALL: &str = "all";

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct FilterCriteria {
    pub search: String,
    pub category: String,
    pub difficulty: String,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            search: String::new(),
            category: ALL.to_string(),
            difficulty: ALL.to_string(),
        }
    }
}

impl FilterCriteria {
    pub fn new(
        search: impl Into<String>,
        category: impl Into<String>,
        difficulty: impl Into<String>,
    ) -> Self {
        Self {
            search: search.into(),
            category: category.into(),
            difficulty: difficulty.into(),
        }
    }

    pub fn is_unconstrained(&self) -> bool {
        self.search.is_empty() && self.category == ALL && self.difficulty == ALL
    }

    pub fn matches(&self, card: &Flashcard) -> bool {
        self.matches_search(card) && self.matches_category(card) && self.matches_difficulty(card)
    }

    fn matches_search(&self, card: &Flashcard) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let q = self.search.to_lowercase();
        card.question.to_lowercase().contains(&q) || card.answer.to_lowercase().contains(&q)
    }

    fn matches_category(&self, card: &Flashcard) -> bool {
        self.category == ALL || card.category.to_lowercase() == self.category.to_lowercase()
    }

    fn matches_difficulty(&self, card: &Flashcard) -> bool {
        self.difficulty == ALL || card.difficulty.as_str() == self.difficulty
    }
}

/// Visible subset of `cards`, original order kept.
pub fn filter_cards(cards: &[Flashcard], criteria: &FilterCriteria) -> Vec<Flashcard> {
    cards
        .iter()
        .filter(|c| criteria.matches(c))
        .cloned()
        .collect()
}

pub fn filter(cards: &[Flashcard], search: &str, category: &str, difficulty: &str) -> Vec<Flashcard> {
    filter_cards(cards, &FilterCriteria::new(search, category, difficulty))
}

/// Distinct categories in first-seen order.
pub fn categories(cards: &[Flashcard]) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for c in cards {
        if !out.iter().any(|x| x == &c.category) {
            out.push(c.category.clone());
        }
    }
    out
}
