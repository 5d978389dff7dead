//! Imposter Word - terminal party game
//!
//! Pass the device around the table; one player never sees the word.

#![warn(missing_docs)]

use std::io;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use imposter_tui::{App, Cli, GameConfig};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = GameConfig::load(&cli.config)
        .with_context(|| format!("loading {}", cli.config.display()))?
        .with_overrides(cli.seed, cli.log_file);

    init_tracing(&config)?;
    info!(seeded = config.seed().is_some(), "Starting Imposter Word");

    let mut app = App::from_config(&config);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = app.run(&mut terminal).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = &res {
        error!(error = %e, "Game loop failed");
    }
    info!("Goodbye");
    res
}

/// Logs go to a file so they never draw over the game.
fn init_tracing(config: &GameConfig) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file())
        .with_context(|| format!("creating log file {}", config.log_file().display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,imposter_core=debug")),
        )
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized
    Ok(())
}
