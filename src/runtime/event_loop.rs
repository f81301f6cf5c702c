use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::app::{App, FrameOutcome};
use crate::config;
use crate::ui;

/// User commands understood by the frame loop.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Control {
    SpeedUp,
    SlowDown,
    ResetSpeed,
    Quit,
}

/// Map a key press to a command.
pub fn control_for(key: KeyEvent) -> Option<Control> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Control::Quit),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Char('l') | KeyCode::Right => {
            Some(Control::SpeedUp)
        }
        KeyCode::Char('-') | KeyCode::Char('_') | KeyCode::Char('h') | KeyCode::Left => {
            Some(Control::SlowDown)
        }
        KeyCode::Char('0') => Some(Control::ResetSpeed),
        KeyCode::Char('q') | KeyCode::Esc => Some(Control::Quit),
        _ => None,
    }
}

/// Apply `control` to `app`. Returns `true` when shutdown is requested.
fn apply_control(control: Control, app: &mut App) -> bool {
    match control {
        Control::SpeedUp => app.speed_up(),
        Control::SlowDown => app.slow_down(),
        Control::ResetSpeed => app.reset_speed(),
        Control::Quit => return true,
    }
    false
}

/// Main frame loop: advances the clock, draws, and handles input.
/// Returns `Ok(())` when shutdown is requested.
pub fn run(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    settings: &config::Settings,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    let frame_interval = Duration::from_millis(settings.playback.frame_interval_ms);

    loop {
        let now = Instant::now();

        // A wrapped frame draws nothing; the previous frame stays on screen
        // until the next running tick.
        if let FrameOutcome::Render(elapsed) = app.advance(now) {
            terminal.draw(|f| ui::draw(f, app, elapsed, now, &settings.chart, &settings.ui))?;
        }

        if event::poll(frame_interval)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if let Some(control) = control_for(key) {
                        if apply_control(control, app) {
                            break;
                        }
                    }
                }
                // Layout is recomputed from the frame area on the next draw.
                Event::Resize(w, h) => tracing::debug!(w, h, "terminal resized"),
                _ => {}
            }
        }
    }

    Ok(())
}
