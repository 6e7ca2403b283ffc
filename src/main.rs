use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{io, sync::atomic::Ordering, time::Duration};
use tokio::sync::mpsc::UnboundedReceiver;

use mushaftui::api::QuranClient;
use mushaftui::config::{self, Config};
use mushaftui::model::Model;
use mushaftui::services::api::{spawn_api_service, ApiResponse};
use mushaftui::services::player::{spawn_player, MediaEvent};
use mushaftui::{handlers, log_debug, ui, App, DEBUG_MODE};

/// Multi-narration Quran reader
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable debug logging to <tmp>/mushaftui-debug.log
    #[arg(short, long)]
    debug: bool,

    /// Enable vim keybindings (hjkl, ^D/U)
    #[arg(long)]
    vim: bool,

    /// Path to config file (default: platform-specific, see docs)
    #[arg(short, long)]
    config: Option<String>,

    /// Data server base URL
    #[arg(long)]
    base_url: Option<String>,

    /// Narration to open (hafs, warsh, ...)
    #[arg(short, long)]
    riwayah: Option<String>,

    /// Page to open
    #[arg(short, long)]
    page: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse();

    // Set debug mode
    DEBUG_MODE.store(args.debug, Ordering::Relaxed);

    if args.debug {
        log_debug("Debug mode enabled");
    }

    let config_path = config::get_config_path(args.config)?;
    log_debug(&format!("Loading config from: {:?}", config_path));
    let mut config = Config::load(config_path.as_deref())?;

    // Override config with CLI flags
    if args.vim {
        config.vim_mode = true;
    }
    if let Some(base_url) = args.base_url {
        config.base_url = base_url;
    }
    if let Some(riwayah) = args.riwayah {
        config.riwayah = riwayah;
    }
    if let Some(page) = args.page {
        config.start_page = page;
    }

    let client = QuranClient::new(config.base_url.clone())?;
    log_debug(&format!("DEBUG [App]: data server {}", client.base_url()));
    let (api_tx, api_rx) = spawn_api_service(client);
    let (media_tx, media_rx) = spawn_player(config.player_command.clone());

    let model = Model::new(
        config.riwayah.clone(),
        config.start_page,
        config.vim_mode,
        config.translation_lang.clone(),
    );
    let mut app = App::new(model, api_tx, media_tx);
    app.start();

    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app with error handler
    let result = run_app(&mut terminal, &mut app, api_rx, media_rx).await;

    // Cleanup terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Return result after cleanup
    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    mut api_rx: UnboundedReceiver<ApiResponse>,
    mut media_rx: UnboundedReceiver<MediaEvent>,
) -> Result<()> {
    loop {
        // Always render (Elm Architecture approach)
        terminal.draw(|f| {
            ui::render(f, app);
        })?;

        if app.model.ui.should_dismiss_toast() {
            app.model.ui.dismiss_toast();
        }

        if app.model.ui.should_quit {
            break;
        }

        // Process API responses (non-blocking)
        while let Ok(response) = api_rx.try_recv() {
            handlers::handle_api_response(app, response);
        }

        // Player position/metadata/end-of-track
        while let Ok(event) = media_rx.try_recv() {
            handlers::handle_media_event(app, event);
        }

        if event::poll(Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                handlers::handle_key(app, key);
            }
        }

        // The player task owns mpv; yield so it and the API tasks make progress
        tokio::task::yield_now().await;
    }

    log_debug("DEBUG [App]: quitting");
    Ok(())
}
