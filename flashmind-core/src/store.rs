use crate::{
    categories, filter_cards, CoreError, Difficulty, FilterCriteria, Flashcard, RatingEvent,
    ACCURACY_MAX,
};
use parking_lot::RwLock;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, info};

/// In-memory, ordered card collection. Nothing here is persisted.
#[derive(Clone, Debug, Default)]
pub struct CardStore {
    cards: Vec<Flashcard>,
}

pub type SharedStore = Arc<RwLock<CardStore>>;

impl CardStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from `cards`, rejecting duplicate ids.
    pub fn from_cards(cards: Vec<Flashcard>) -> Result<Self, CoreError> {
        let mut store = Self::new();
        for c in cards {
            store.insert(c)?;
        }
        Ok(store)
    }

    pub fn into_shared(self) -> SharedStore {
        Arc::new(RwLock::new(self))
    }

    pub fn cards(&self) -> &[Flashcard] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Flashcard> {
        self.cards.iter().find(|c| c.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn insert(&mut self, card: Flashcard) -> Result<(), CoreError> {
        check_card(&card)?;
        if self.contains(&card.id) {
            return Err(CoreError::Conflict(format!("card id '{}' already exists", card.id)));
        }
        debug!(card_id = %card.id, "card inserted");
        self.cards.push(card);
        Ok(())
    }

    /// Appends every card or none of them.
    pub fn insert_all(&mut self, cards: Vec<Flashcard>) -> Result<usize, CoreError> {
        {
            let mut seen = HashSet::new();
            for c in &cards {
                check_card(c)?;
                if self.contains(&c.id) || !seen.insert(c.id.as_str()) {
                    return Err(CoreError::Conflict(format!("card id '{}' already exists", c.id)));
                }
            }
        }
        let n = cards.len();
        debug!(cards = n, "cards inserted");
        self.cards.extend(cards);
        Ok(n)
    }

    /// Flips the favorite flag. Unknown ids are ignored.
    pub fn toggle_favorite(&mut self, id: &str) {
        if let Some(card) = self.cards.iter_mut().find(|c| c.id == id) {
            card.is_favorite = !card.is_favorite;
            debug!(card_id = %id, favorite = card.is_favorite, "favorite toggled");
        }
    }

    /// Removes the card. Unknown ids are ignored.
    pub fn delete(&mut self, id: &str) {
        let before = self.cards.len();
        self.cards.retain(|c| c.id != id);
        if self.cards.len() != before {
            debug!(card_id = %id, "card deleted");
        }
    }

    /// Records a rating for reporting only: accuracy and last_reviewed are
    /// left as they are. `None` when the id is unknown.
    pub fn rate(&self, id: &str, rating: Difficulty) -> Option<RatingEvent> {
        let card = self.get(id)?;
        let event = RatingEvent::new(card.id.clone(), rating);
        info!(card_id = %event.card_id, rating = %rating, "card rated");
        Some(event)
    }

    pub fn filtered(&self, criteria: &FilterCriteria) -> Vec<Flashcard> {
        filter_cards(&self.cards, criteria)
    }

    pub fn categories(&self) -> Vec<String> {
        categories(&self.cards)
    }
}

fn check_card(card: &Flashcard) -> Result<(), CoreError> {
    match card.accuracy {
        Some(a) if a > ACCURACY_MAX => Err(CoreError::Invalid(format!(
            "card '{}': accuracy {a} is above {ACCURACY_MAX}",
            card.id
        ))),
        _ => Ok(()),
    }
}
