//! Terminal front end for the trivia board game.
mod app;
mod ui;

use std::io::{self, Stdout};
use std::path::{Path, PathBuf};

use anyhow::{Result, anyhow};
use clap::Parser;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use trivia_client::{DEFAULT_API_URL, JServiceClient, TriviaGame};
use trivia_common::models::GameParams;

use app::App;

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Jeopardy-style trivia board in the terminal.
///
/// Click a cell (or move with the arrow keys and press Enter) to show its
/// question, click again for the answer. `r` deals a fresh board.
#[derive(Debug, Parser)]
#[command(name = "trivia", version, about)]
struct Args {
    /// Base URL of the jService-compatible API
    #[arg(long, default_value = DEFAULT_API_URL)]
    api_url: String,

    /// Number of categories on the board
    #[arg(long, default_value_t = 6)]
    categories: usize,

    /// Number of clues per category
    #[arg(long, default_value_t = 5)]
    clues_per_category: usize,

    /// Size of the category pool the board is sampled from
    #[arg(long, default_value_t = 100)]
    category_pool: usize,

    /// Append logs to this file (the terminal itself stays clean)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    if let Some(path) = &args.log_file {
        setup_logging(path)?;
    }

    let params = GameParams {
        categories: args.categories,
        clues_per_category: args.clues_per_category,
        category_pool: args.category_pool,
    };
    let source = JServiceClient::new(&args.api_url)?;
    let game = TriviaGame::new(source, params);

    let mut terminal = init_terminal()?;
    let guard = TerminalGuard;

    let mut app = App::new(game);
    let result = app.run(&mut terminal).await;

    drop(guard);
    result
}

/// Log to a file only; stdout belongs to the UI.
fn setup_logging(path: &Path) -> Result<()> {
    let directory = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let file_name = path
        .file_name()
        .ok_or_else(|| anyhow!("log file path has no file name"))?;

    let file_appender = tracing_appender::rolling::never(directory, file_name);
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::INFO.into());

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .init();

    // Keep the writer alive for the lifetime of the process
    std::mem::forget(guard);

    tracing::info!("Logging initialized: {}", path.display());
    Ok(())
}

fn init_terminal() -> Result<Tui> {
    enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;

    Ok(terminal)
}

fn restore_terminal() -> Result<()> {
    execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen)?;
    disable_raw_mode()?;
    Ok(())
}

struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = restore_terminal();
    }
}
