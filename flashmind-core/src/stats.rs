use crate::{Difficulty, Flashcard};
use serde::Serialize;

#[derive(Clone, Debug, Default, Serialize, PartialEq)]
pub struct DifficultyCounts {
    pub easy: u32,
    pub medium: u32,
    pub hard: u32,
}

impl DifficultyCounts {
    pub fn record(&mut self, d: Difficulty) {
        match d {
            Difficulty::Easy => self.easy += 1,
            Difficulty::Medium => self.medium += 1,
            Difficulty::Hard => self.hard += 1,
        }
    }
}

#[derive(Clone, Debug, Default, Serialize, PartialEq)]
pub struct DashboardStats {
    pub total: u32,
    pub favorites: u32,
    /// Mean over cards that carry an accuracy; `None` when none do.
    pub average_accuracy: Option<f32>,
    pub per_category: Vec<(String, u32)>,
    pub per_difficulty: DifficultyCounts,
}

pub fn summarize(cards: &[Flashcard]) -> DashboardStats {
    let mut stats = DashboardStats::default();
    let mut acc_sum = 0u32;
    let mut acc_n = 0u32;

    for c in cards {
        stats.total += 1;
        if c.is_favorite {
            stats.favorites += 1;
        }
        if let Some(a) = c.accuracy {
            acc_sum += a as u32;
            acc_n += 1;
        }
        stats.per_difficulty.record(c.difficulty);
        match stats.per_category.iter_mut().find(|(name, _)| name == &c.category) {
            Some((_, n)) => *n += 1,
            None => stats.per_category.push((c.category.clone(), 1)),
        }
    }

    if acc_n > 0 {
        stats.average_accuracy = Some(acc_sum as f32 / acc_n as f32);
    }
    stats
}
