use std::env;
use std::path::PathBuf;
use std::time::Instant;

use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::app::App;
use crate::session::Sessions;

mod event_loop;
mod logging;
mod settings;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let (settings, config_warning) = settings::load_settings();
    let log_path = logging::init(&settings.logging);
    if let Some(msg) = &config_warning {
        tracing::warn!("{msg}");
    }
    tracing::info!(log = ?log_path, "hrv-replay starting");

    let dir = env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| settings.data.dir.clone());

    // Load before touching the terminal so errors print normally.
    let sessions = Sessions::load(&dir, &settings.data).inspect_err(|e| {
        tracing::error!("failed to load sessions: {e}");
    })?;
    let mut app = App::new(sessions, &settings.playback, Instant::now());

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let run_result = event_loop::run(&mut terminal, &settings, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    tracing::info!("hrv-replay exiting");
    run_result
}
