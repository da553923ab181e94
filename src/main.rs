use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{
    io,
    path::PathBuf,
    sync::Arc,
    time::{Duration, Instant},
};

use filedeck::api::FileStoreClient;
use filedeck::config::Config;
use filedeck::services::api::spawn_api_service;
use filedeck::{handlers, ui, utils, App};

/// Terminal client for a remote file store
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable debug logging to <temp dir>/filedeck-debug.log
    #[arg(short, long)]
    debug: bool,

    /// Enable vim keybindings (hjkl, gg/G)
    #[arg(long)]
    vim: bool,

    /// Path to config file (default: platform-specific, see docs)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Server base URL, overrides the config file
    #[arg(long)]
    url: Option<String>,

    /// Files to upload as one batch right after startup
    files: Vec<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    if args.debug {
        let path = utils::init_debug_logging()?;
        tracing::info!(path = %path.display(), "debug logging enabled");
    }

    let mut config = Config::load(args.config.as_deref())?;

    // Override config with CLI flags
    if args.vim {
        config.vim_mode = true;
    }
    if let Some(url) = args.url {
        config.base_url = url;
    }

    tracing::info!(base_url = %config.base_url, "starting");

    let client = FileStoreClient::new(config.base_url.clone(), config.request_timeout())
        .context("Failed to create HTTP client")?;
    let (api_tx, api_rx) = spawn_api_service(Arc::new(client), config.resolved_download_dir());

    let mut app = App::new(&config, api_tx, api_rx);
    app.request_reload();
    if !args.files.is_empty() {
        app.start_upload(args.files);
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableBracketedPaste
    )?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app with error handler
    let result = run_app(&mut terminal, &mut app).await;

    // Cleanup terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableBracketedPaste,
        DisableMouseCapture,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    // Return result after cleanup
    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        // Always render (Elm Architecture approach)
        terminal.draw(|f| {
            ui::render(f, app);
        })?;

        if app.model.ui.should_quit {
            break;
        }

        // Process API responses (non-blocking)
        app.drain_responses();

        // Toast expiry, debounced reloads, spinner
        app.on_tick(Instant::now());

        // Short timeout keeps the activity spinner moving
        if event::poll(Duration::from_millis(100))? {
            handlers::handle_event(app, event::read()?);
        }
    }

    tracing::info!("exiting");
    Ok(())
}
