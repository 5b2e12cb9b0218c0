use async_trait::async_trait;
use flashmind_core::{
    run_upload, seed, CoreError, Difficulty, FileHandle, Flashcard, Ingestor, ProfileEditor,
    SimulatedIngestor, UploadKind, UploadSource, UploadState, UploadStatus, UploadTracker,
};
use std::sync::Arc;
use std::time::Duration;

struct OneCard;

#[async_trait]
impl Ingestor for OneCard {
    async fn ingest(&self, _source: &UploadSource) -> Result<Vec<Flashcard>, CoreError> {
        Ok(vec![Flashcard::new("q", "a", "Imported", Difficulty::Medium)])
    }
}

struct Failing;

#[async_trait]
impl Ingestor for Failing {
    async fn ingest(&self, _source: &UploadSource) -> Result<Vec<Flashcard>, CoreError> {
        Err(CoreError::Ingestion("backend unavailable".into()))
    }
}

#[test]
fn file_kinds() {
    assert_eq!(FileHandle::new("notes.PDF").kind(), Some(UploadKind::Document));
    assert_eq!(FileHandle::new("scan.jpeg").kind(), Some(UploadKind::Image));
    assert_eq!(FileHandle::new("talk.mov").kind(), Some(UploadKind::Video));
    assert_eq!(FileHandle::new("archive.zip").kind(), None);
    assert_eq!(FileHandle::new("README").kind(), None);
}

#[test]
fn validation_rejects_bad_submissions() {
    assert!(matches!(
        UploadSource::Files(vec![]).validate(),
        Err(CoreError::Invalid(_))
    ));
    assert!(matches!(
        UploadSource::Files(vec![FileHandle::new("a.pdf"), FileHandle::new("b.exe")]).validate(),
        Err(CoreError::Invalid(msg)) if msg.contains("b.exe")
    ));
    assert!(UploadSource::VideoUrl("   ".into()).validate().is_err());
    assert_eq!(
        UploadSource::VideoUrl("  https://youtube.com/watch?v=x ".into()).validate(),
        Ok(UploadSource::VideoUrl("https://youtube.com/watch?v=x".into()))
    );
}

#[tokio::test(start_paused = true)]
async fn simulated_ingestion_waits_and_yields_nothing() {
    let state = UploadState::new();
    let ingestor = SimulatedIngestor::new(Duration::from_secs(3));
    let src = UploadSource::Files(vec![FileHandle::new("Biology Chapter 5.pdf")]);

    let started = tokio::time::Instant::now();
    let cards = run_upload(&ingestor, &state, src).await.unwrap();
    assert!(cards.is_empty());
    assert!(started.elapsed() >= Duration::from_secs(3));
    assert!(!state.is_uploading());
}

#[tokio::test]
async fn uploading_flag_is_exclusive_and_cleared_on_failure() {
    let state = UploadState::new();
    {
        let _busy = state.try_begin().unwrap();
        assert!(state.is_uploading());
        let err = run_upload(&OneCard, &state, UploadSource::VideoUrl("u".into()))
            .await
            .unwrap_err();
        assert!(matches!(err, CoreError::Conflict(_)));
    }
    assert!(!state.is_uploading());

    let err = run_upload(&Failing, &state, UploadSource::VideoUrl("u".into()))
        .await
        .unwrap_err();
    assert!(matches!(err, CoreError::Ingestion(_)));
    assert!(!state.is_uploading());

    let cards = run_upload(&OneCard, &state, UploadSource::VideoUrl("u".into()))
        .await
        .unwrap();
    assert_eq!(cards.len(), 1);
}

#[tokio::test(start_paused = true)]
async fn tracker_lists_processing_upload_until_it_completes() {
    let tracker = Arc::new(UploadTracker::new(seed::recent_uploads()));
    let t = tracker.clone();
    let task = tokio::spawn(async move {
        let ingestor = SimulatedIngestor::new(Duration::from_secs(3));
        let src = UploadSource::VideoUrl("https://youtube.com/watch?v=abc".into());
        t.run(&ingestor, src, |cards| Ok(cards.len())).await
    });

    tokio::time::sleep(Duration::from_secs(1)).await;
    assert!(tracker.is_uploading());
    let recent = tracker.recent();
    assert_eq!(recent.len(), 4);
    assert_eq!(recent[0].status, UploadStatus::Processing);
    assert_eq!(recent[0].name, "https://youtube.com/watch?v=abc");

    assert_eq!(task.await.unwrap(), Ok(0));
    assert!(!tracker.is_uploading());
    let recent = tracker.recent();
    assert_eq!(recent[0].status, UploadStatus::Completed);
    assert_eq!(recent[1].name, "Biology Chapter 5.pdf");
}

#[tokio::test]
async fn tracker_marks_rejected_commit_as_failed() {
    let tracker = UploadTracker::new(Vec::new());
    let err = tracker
        .run(&OneCard, UploadSource::VideoUrl("u".into()), |_| {
            Err(CoreError::Ingestion("duplicate card".into()))
        })
        .await
        .unwrap_err();
    assert!(matches!(err, CoreError::Ingestion(_)));
    let recent = tracker.recent();
    assert_eq!(recent.len(), 1);
    assert_eq!(recent[0].status, UploadStatus::Failed);
    assert_eq!(recent[0].cards, 0);
    assert!(!tracker.is_uploading());

    // rejected before ingestion starts: nothing recorded
    assert!(tracker.run(&OneCard, UploadSource::Files(vec![]), |c| Ok(c.len())).await.is_err());
    assert_eq!(tracker.recent().len(), 1);
}

#[test]
fn profile_edit_save_and_cancel() {
    let mut ed = ProfileEditor::new(seed::demo_profile());
    ed.begin_edit();
    assert!(ed.is_editing());
    ed.draft_mut().bio = "changed".into();
    ed.cancel();
    assert!(!ed.is_editing());
    assert_eq!(ed.saved(), &seed::demo_profile());
    assert_eq!(ed.draft(), &seed::demo_profile());

    ed.begin_edit();
    ed.draft_mut().username = "np".into();
    let saved = ed.save().unwrap();
    assert_eq!(saved.username, "np");
    assert_eq!(ed.saved().username, "np");

    ed.begin_edit();
    ed.draft_mut().email = "not-an-email".into();
    assert!(ed.save().is_err());
    assert!(ed.is_editing());

    let mut bad = seed::demo_profile();
    bad.name = " ".into();
    assert!(ed.replace(bad).is_err());
    assert!(!ed.is_editing());
    assert_eq!(ed.saved().username, "np");
}
