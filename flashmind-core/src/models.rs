use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::CoreError;

pub type CardId = String;

pub const ACCURACY_MAX: u8 = 100;

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = CoreError;

    /// Exact, lowercase labels only; the filter compares difficulty verbatim.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(CoreError::Invalid(format!("unknown difficulty '{other}'"))),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Flashcard {
    pub id: CardId,
    pub question: String,
    pub answer: String,
    pub category: String,
    pub difficulty: Difficulty,
    #[serde(default)]
    pub is_favorite: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_reviewed: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accuracy: Option<u8>,
}

impl Flashcard {
    /// A fresh card with a generated id, as produced by ingestion.
    pub fn new(
        question: impl Into<String>,
        answer: impl Into<String>,
        category: impl Into<String>,
        difficulty: Difficulty,
    ) -> Self {
        Self::with_id(Uuid::new_v4().to_string(), question, answer, category, difficulty)
    }

    pub fn with_id(
        id: impl Into<CardId>,
        question: impl Into<String>,
        answer: impl Into<String>,
        category: impl Into<String>,
        difficulty: Difficulty,
    ) -> Self {
        Self {
            id: id.into(),
            question: question.into(),
            answer: answer.into(),
            category: category.into(),
            difficulty,
            is_favorite: false,
            last_reviewed: None,
            accuracy: None,
        }
    }

    pub fn favorite(mut self, yes: bool) -> Self {
        self.is_favorite = yes;
        self
    }

    pub fn reviewed(mut self, at: DateTime<Utc>, accuracy: u8) -> Self {
        self.last_reviewed = Some(at);
        self.accuracy = Some(accuracy.min(ACCURACY_MAX));
        self
    }
}

/// A rating the user gave a card. Reported to the caller and logged; the
/// card itself is not updated.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RatingEvent {
    pub card_id: CardId,
    pub rating: Difficulty,
    pub rated_at: DateTime<Utc>,
}

impl RatingEvent {
    pub fn new(card_id: impl Into<CardId>, rating: Difficulty) -> Self {
        Self {
            card_id: card_id.into(),
            rating,
            rated_at: Utc::now(),
        }
    }
}
