use crate::{CoreError, Flashcard};
use async_trait::async_trait;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tracing::{info, warn};
use uuid::Uuid;

pub const ACCEPTED_EXTENSIONS: [&str; 7] = ["pdf", "png", "jpg", "jpeg", "mp4", "mov", "avi"];

pub const DEFAULT_INGEST_DELAY: Duration = Duration::from_millis(3000);

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum UploadKind {
    Document,
    Image,
    Video,
}

impl UploadKind {
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "pdf" => Some(UploadKind::Document),
            "png" | "jpg" | "jpeg" => Some(UploadKind::Image),
            "mp4" | "mov" | "avi" => Some(UploadKind::Video),
            _ => None,
        }
    }
}

/// Opaque handle to a user-supplied file; only the name is inspected.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct FileHandle {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
}

impl FileHandle {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), size: None }
    }

    pub fn kind(&self) -> Option<UploadKind> {
        Path::new(&self.name)
            .extension()
            .and_then(|e| e.to_str())
            .and_then(UploadKind::from_extension)
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum UploadSource {
    Files(Vec<FileHandle>),
    VideoUrl(String),
}

impl UploadSource {
    /// Checks the submission and normalizes a URL by trimming it.
    pub fn validate(self) -> Result<Self, CoreError> {
        match self {
            UploadSource::Files(files) => {
                if files.is_empty() {
                    return Err(CoreError::Invalid("no files selected".into()));
                }
                let rejected: Vec<&str> = files
                    .iter()
                    .filter(|f| f.kind().is_none())
                    .map(|f| f.name.as_str())
                    .collect();
                if !rejected.is_empty() {
                    return Err(CoreError::Invalid(format!(
                        "unsupported file type: {} (accepted: {})",
                        rejected.join(", "),
                        ACCEPTED_EXTENSIONS.join(", ")
                    )));
                }
                Ok(UploadSource::Files(files))
            }
            UploadSource::VideoUrl(url) => {
                let url = url.trim();
                if url.is_empty() {
                    return Err(CoreError::Invalid("empty video url".into()));
                }
                Ok(UploadSource::VideoUrl(url.to_string()))
            }
        }
    }

    pub fn label(&self) -> String {
        match self {
            UploadSource::Files(files) => files
                .iter()
                .map(|f| f.name.as_str())
                .collect::<Vec<_>>()
                .join(", "),
            UploadSource::VideoUrl(url) => url.clone(),
        }
    }
}

/// Turns uploaded material into new flashcards.
#[async_trait]
pub trait Ingestor: Send + Sync {
    async fn ingest(&self, source: &UploadSource) -> Result<Vec<Flashcard>, CoreError>;
}

/// Waits a fixed delay and produces nothing.
#[derive(Clone, Debug)]
pub struct SimulatedIngestor {
    pub delay: Duration,
}

impl Default for SimulatedIngestor {
    fn default() -> Self {
        Self { delay: DEFAULT_INGEST_DELAY }
    }
}

impl SimulatedIngestor {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl Ingestor for SimulatedIngestor {
    async fn ingest(&self, source: &UploadSource) -> Result<Vec<Flashcard>, CoreError> {
        info!(source = %source.label(), delay_ms = self.delay.as_millis() as u64, "processing upload");
        tokio::time::sleep(self.delay).await;
        Ok(Vec::new())
    }
}

/// The dashboard's "uploading" flag.
#[derive(Debug, Default)]
pub struct UploadState {
    uploading: AtomicBool,
}

impl UploadState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_uploading(&self) -> bool {
        self.uploading.load(Ordering::SeqCst)
    }

    /// Sets the flag; `None` if an upload is already running. The flag is
    /// cleared when the guard drops.
    pub fn try_begin(&self) -> Option<UploadGuard<'_>> {
        self.uploading
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .ok()
            .map(|_| UploadGuard { state: self })
    }
}

pub struct UploadGuard<'a> {
    state: &'a UploadState,
}

impl Drop for UploadGuard<'_> {
    fn drop(&mut self) {
        self.state.uploading.store(false, Ordering::SeqCst);
    }
}

/// Validates `source`, raises the uploading flag and runs ingestion.
pub async fn run_upload<I: Ingestor + ?Sized>(
    ingestor: &I,
    state: &UploadState,
    source: UploadSource,
) -> Result<Vec<Flashcard>, CoreError> {
    let source = source.validate()?;
    let _guard = begin(state)?;
    ingest_logged(ingestor, &source).await
}

fn begin(state: &UploadState) -> Result<UploadGuard<'_>, CoreError> {
    state
        .try_begin()
        .ok_or_else(|| CoreError::Conflict("an upload is already in progress".into()))
}

async fn ingest_logged<I: Ingestor + ?Sized>(
    ingestor: &I,
    source: &UploadSource,
) -> Result<Vec<Flashcard>, CoreError> {
    match ingestor.ingest(source).await {
        Ok(cards) => {
            info!(source = %source.label(), cards = cards.len(), "upload processed");
            Ok(cards)
        }
        Err(e) => {
            warn!(source = %source.label(), error = %e, "upload failed");
            Err(e)
        }
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum UploadStatus {
    Completed,
    Processing,
    Failed,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecentUpload {
    #[serde(default)]
    pub id: String,
    pub name: String,
    pub cards: u32,
    pub status: UploadStatus,
}

impl RecentUpload {
    pub fn new(name: impl Into<String>, cards: u32, status: UploadStatus) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            cards,
            status,
        }
    }
}

/// Uploading flag plus the recent-uploads list, newest first. Each run shows
/// up as `Processing` while ingestion is pending.
#[derive(Debug, Default)]
pub struct UploadTracker {
    state: UploadState,
    recent: Mutex<Vec<RecentUpload>>,
}

impl UploadTracker {
    pub fn new(recent: Vec<RecentUpload>) -> Self {
        Self {
            state: UploadState::new(),
            recent: Mutex::new(recent),
        }
    }

    pub fn is_uploading(&self) -> bool {
        self.state.is_uploading()
    }

    pub fn recent(&self) -> Vec<RecentUpload> {
        self.recent.lock().clone()
    }

    /// Validates and ingests `source`, then hands the cards to `commit`,
    /// which returns how many were kept. The entry ends `Completed` only if
    /// both steps succeed, `Failed` otherwise.
    pub async fn run<I, F>(&self, ingestor: &I, source: UploadSource, commit: F) -> Result<usize, CoreError>
    where
        I: Ingestor + ?Sized,
        F: FnOnce(Vec<Flashcard>) -> Result<usize, CoreError> + Send,
    {
        let source = source.validate()?;
        let _guard = begin(&self.state)?;

        let entry = RecentUpload::new(source.label(), 0, UploadStatus::Processing);
        let id = entry.id.clone();
        self.recent.lock().insert(0, entry);

        let outcome = ingest_logged(ingestor, &source).await.and_then(commit);
        if let Some(e) = self.recent.lock().iter_mut().find(|e| e.id == id) {
            match &outcome {
                Ok(n) => {
                    e.cards = *n as u32;
                    e.status = UploadStatus::Completed;
                }
                Err(_) => e.status = UploadStatus::Failed,
            }
        }
        outcome
    }
}
