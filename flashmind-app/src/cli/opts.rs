use clap::{Args, Parser, Subcommand};
use flashmind_core::{FilterCriteria, ALL};
use std::path::PathBuf;

#[derive(Debug, Parser, Clone)]
#[command(name = "flashmind", version, about = "FlashMind flashcards: CLI/TUI/API")]
pub struct Cli {
    /// JSON file with the starting cards (defaults to <data dir>/cards.json, then the demo deck)
    #[arg(long, global = true)]
    pub cards: Option<PathBuf>,

    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Browse and export cards
    #[command(subcommand)]
    Cards(CardsCmd),
    /// Dashboard summary
    Stats,
    /// Submit study material for card generation
    #[command(subcommand)]
    Upload(UploadCmd),
    /// Profile operations
    #[command(subcommand)]
    Profile(ProfileCmd),
    /// Launch the terminal dashboard
    Tui,
    /// Launch the HTTP API
    Api(ApiCmd),
}

#[derive(Debug, Args, Clone)]
pub struct FilterArgs {
    /// Case-insensitive substring of question or answer
    #[arg(long, default_value = "")]
    pub search: String,
    /// Category label, or "all"
    #[arg(long, default_value = ALL)]
    pub category: String,
    /// easy, medium, hard, or "all"
    #[arg(long, default_value = ALL)]
    pub difficulty: String,
}

impl From<FilterArgs> for FilterCriteria {
    fn from(a: FilterArgs) -> Self {
        FilterCriteria::new(a.search, a.category, a.difficulty)
    }
}

#[derive(Debug, Subcommand, Clone)]
pub enum CardsCmd {
    List(FilterArgs),
    Categories,
    #[command(subcommand)]
    Export(ExportCmd),
}

#[derive(Debug, Subcommand, Clone)]
pub enum ExportCmd {
    Json {
        path: PathBuf,
        #[command(flatten)]
        filter: FilterArgs,
    },
    Csv {
        path: PathBuf,
        #[command(flatten)]
        filter: FilterArgs,
    },
}

#[derive(Debug, Subcommand, Clone)]
pub enum UploadCmd {
    Files {
        #[arg(required = true)]
        paths: Vec<PathBuf>,
        #[arg(long, default_value_t = 3000)]
        delay_ms: u64,
    },
    Url {
        url: String,
        #[arg(long, default_value_t = 3000)]
        delay_ms: u64,
    },
}

#[derive(Debug, Subcommand, Clone)]
pub enum ProfileCmd {
    Show,
}

#[derive(Debug, Args, Clone)]
pub struct ApiCmd {
    /// Bind address (host:port)
    #[arg(long, default_value = "127.0.0.1:8080")]
    pub addr: String,
    /// Simulated ingestion delay per upload
    #[arg(long, default_value_t = 3000)]
    pub upload_delay_ms: u64,
}
