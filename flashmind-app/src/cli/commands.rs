use crate::api::server as api_server;
use crate::cli::opts::*;
use crate::paths::default_cards_file;
use crate::tui::app::TuiApp;

use anyhow::{Context, Result};
use flashmind_core::{
    run_upload, seed, summarize, CardStore, FileHandle, FilterCriteria, Flashcard,
    SimulatedIngestor, UploadSource, UploadState,
};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

pub async fn run_cli(args: Cli) -> Result<()> {
    let store = load_store(args.cards.as_deref())?;
    match args.cmd {
        Command::Tui => {
            let mut app = TuiApp::new(store);
            app.run()
        }
        Command::Api(api) => {
            let addr: std::net::SocketAddr = api.addr.parse()?;
            let ingestor = Arc::new(SimulatedIngestor::new(Duration::from_millis(api.upload_delay_ms)));
            api_server::run(store, ingestor, addr).await
        }
        Command::Cards(cmd) => cards_cmd(&store, cmd),
        Command::Stats => stats_cmd(&store),
        Command::Upload(cmd) => upload_cmd(cmd).await,
        Command::Profile(ProfileCmd::Show) => {
            let p = seed::demo_profile();
            println!("name\t{}", p.name);
            println!("initials\t{}", p.initials());
            println!("username\t{}", p.username);
            println!("email\t{}", p.email);
            println!("bio\t{}", p.bio);
            Ok(())
        }
    }
}

/// Cards from `explicit`, else the default card file if present, else the demo deck.
pub fn load_store(explicit: Option<&Path>) -> Result<CardStore> {
    let path: Option<PathBuf> = match explicit {
        Some(p) => Some(p.to_path_buf()),
        None => Some(default_cards_file()).filter(|p| p.exists()),
    };
    let cards = match path {
        Some(p) => {
            let data = std::fs::read_to_string(&p).with_context(|| format!("reading {}", p.display()))?;
            let cards: Vec<Flashcard> =
                serde_json::from_str(&data).with_context(|| format!("parsing {}", p.display()))?;
            info!(path = %p.display(), cards = cards.len(), "loaded card file");
            cards
        }
        None => seed::mock_flashcards(),
    };
    Ok(CardStore::from_cards(cards)?)
}

fn cards_cmd(store: &CardStore, cmd: CardsCmd) -> Result<()> {
    match cmd {
        CardsCmd::List(f) => {
            let criteria: FilterCriteria = f.into();
            let cards = store.filtered(&criteria);
            if cards.is_empty() {
                println!("{}", empty_message(&criteria));
                return Ok(());
            }
            for c in cards {
                println!("{}", card_line(&c));
            }
        }
        CardsCmd::Categories => {
            for c in store.categories() {
                println!("{c}");
            }
        }
        CardsCmd::Export(ExportCmd::Json { path, filter }) => {
            let n = export_filtered(store, &filter.into(), &path, ExportFormat::Json)?;
            println!("wrote {} ({} cards)", path.display(), n);
        }
        CardsCmd::Export(ExportCmd::Csv { path, filter }) => {
            let n = export_filtered(store, &filter.into(), &path, ExportFormat::Csv)?;
            println!("wrote {} ({} cards)", path.display(), n);
        }
    }
    Ok(())
}

fn stats_cmd(store: &CardStore) -> Result<()> {
    let s = summarize(store.cards());
    println!("total\t{}", s.total);
    println!("favorites\t{}", s.favorites);
    match s.average_accuracy {
        Some(a) => println!("accuracy\t{a:.0}%"),
        None => println!("accuracy\t-"),
    }
    let d = &s.per_difficulty;
    println!("difficulty\teasy={} medium={} hard={}", d.easy, d.medium, d.hard);
    for (cat, n) in &s.per_category {
        println!("category\t{cat}\t{n}");
    }
    Ok(())
}

async fn upload_cmd(cmd: UploadCmd) -> Result<()> {
    let (source, delay_ms) = match cmd {
        UploadCmd::Files { paths, delay_ms } => {
            let files = paths.iter().map(|p| file_handle(p)).collect();
            (UploadSource::Files(files), delay_ms)
        }
        UploadCmd::Url { url, delay_ms } => (UploadSource::VideoUrl(url), delay_ms),
    };
    let ingestor = SimulatedIngestor::new(Duration::from_millis(delay_ms));
    let state = UploadState::new();
    println!("processing your content...");
    let cards = run_upload(&ingestor, &state, source).await?;
    println!("{} cards generated", cards.len());
    Ok(())
}

fn empty_message(criteria: &FilterCriteria) -> &'static str {
    if criteria.is_unconstrained() {
        "no flashcards yet; upload some content to get started"
    } else {
        "no flashcards yet; loosen the filters"
    }
}

fn card_line(c: &Flashcard) -> String {
    let fav = if c.is_favorite { "*" } else { "-" };
    let acc = c.accuracy.map(|a| format!("{a}%")).unwrap_or_else(|| "-".to_string());
    format!(
        "{}\t{}\t{}\t{}\t{}\tacc={}\t{}",
        c.id, fav, c.difficulty, c.category, c.question, acc, c.answer
    )
}

fn file_handle(p: &Path) -> FileHandle {
    let name = p
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| p.display().to_string());
    let mut h = FileHandle::new(name);
    h.size = std::fs::metadata(p).ok().map(|m| m.len());
    h
}

fn write_json(path: &Path, cards: &[Flashcard]) -> Result<()> {
    let s = serde_json::to_string_pretty(cards)?;
    std::fs::write(path, s)?;
    Ok(())
}

fn write_csv(path: &Path, cards: &[Flashcard]) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;
    wtr.write_record(["id", "question", "answer", "category", "difficulty", "favorite", "accuracy"])?;
    for c in cards {
        wtr.write_record([
            c.id.clone(),
            c.question.clone(),
            c.answer.clone(),
            c.category.clone(),
            c.difficulty.to_string(),
            if c.is_favorite { "1".to_string() } else { "0".to_string() },
            c.accuracy.map(|a| a.to_string()).unwrap_or_default(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

#[derive(Debug, Clone, Copy)]
enum ExportFormat {
    Json,
    Csv,
}

fn export_filtered(
    store: &CardStore,
    criteria: &FilterCriteria,
    path: &Path,
    format: ExportFormat,
) -> Result<usize> {
    let cards = store.filtered(criteria);
    match format {
        ExportFormat::Json => write_json(path, &cards)?,
        ExportFormat::Csv => write_csv(path, &cards)?,
    }
    Ok(cards.len())
}
