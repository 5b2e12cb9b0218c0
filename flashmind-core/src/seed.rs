//! Demonstration data shown on a fresh start.

use crate::{Difficulty, Flashcard, RecentUpload, UploadStatus, UserProfile};
use chrono::Utc;

pub fn mock_flashcards() -> Vec<Flashcard> {
    let now = Utc::now();
    vec![
        Flashcard::with_id(
            "1",
            "What is the primary function of mitochondria in cellular biology?",
            "Mitochondria are the powerhouses of the cell, responsible for producing ATP through cellular respiration.",
            "Biology",
            Difficulty::Medium,
        )
        .favorite(true)
        .reviewed(now, 85),
        Flashcard::with_id(
            "2",
            "Explain the concept of Big O notation in computer science.",
            "Big O notation describes the upper bound of time or space complexity of algorithms, helping analyze their efficiency as input size grows.",
            "Computer Science",
            Difficulty::Hard,
        )
        .reviewed(now, 72),
        Flashcard::with_id(
            "3",
            "What year did World War II end?",
            "World War II ended in 1945, with Germany surrendering in May and Japan surrendering in September.",
            "History",
            Difficulty::Easy,
        )
        .reviewed(now, 95),
    ]
}

pub fn recent_uploads() -> Vec<RecentUpload> {
    vec![
        RecentUpload::new("Biology Chapter 5.pdf", 24, UploadStatus::Completed),
        RecentUpload::new("Machine Learning Lecture.mp4", 18, UploadStatus::Processing),
        RecentUpload::new("History Notes.png", 12, UploadStatus::Completed),
    ]
}

pub fn demo_profile() -> UserProfile {
    UserProfile {
        name: "Nikhil Mahendra Patil".into(),
        email: "nikhil@example.com".into(),
        username: "nikhil_patil".into(),
        bio: "AI enthusiast and lifelong learner. Using FlashMind to master new concepts every day.".into(),
        avatar: String::new(),
    }
}
