use directories::ProjectDirs;
use std::path::PathBuf;

pub fn data_root() -> PathBuf {
    if let Some(pd) = ProjectDirs::from("com", "flashmind", "FlashMind") {
        pd.data_dir().to_path_buf()
    } else {
        std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
    }
}

/// Card file picked up when `--cards` is not given.
pub fn default_cards_file() -> PathBuf {
    data_root().join("cards.json")
}
