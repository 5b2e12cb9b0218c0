use flashmind_core::{CoreError, Difficulty, FileHandle, Flashcard, RecentUpload, UploadSource};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub struct CardListOut {
    pub total: usize,
    pub visible: usize,
    pub cards: Vec<Flashcard>,
}

#[derive(Deserialize)]
pub struct RateIn {
    pub rating: String,
}

#[derive(Deserialize)]
pub struct UploadIn {
    #[serde(default)]
    pub files: Option<Vec<FileHandle>>,
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct UploadOut {
    pub cards_generated: usize,
}

#[derive(Debug, Serialize)]
pub struct UploadsOut {
    pub uploading: bool,
    pub uploads: Vec<RecentUpload>,
}

pub fn parse_rating(s: &str) -> Option<Difficulty> {
    s.to_lowercase().parse().ok()
}

impl UploadIn {
    pub fn into_source(self) -> Result<UploadSource, CoreError> {
        match (self.files, self.url) {
            (Some(files), None) => Ok(UploadSource::Files(files)),
            (None, Some(url)) => Ok(UploadSource::VideoUrl(url)),
            _ => Err(CoreError::Invalid("expected exactly one of 'files' or 'url'".into())),
        }
    }
}
