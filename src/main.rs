//! Go-Tanya - terminal client for a student Q&A community.
//!
//! Main entry point and event loop for the application.

mod app;
mod config;
mod countdown;
mod fixtures;
mod keys;
mod logging;
mod model;
mod navigation;
mod paginate;
mod reaction;
mod search;
mod ui;
mod validation;

use anyhow::Context;
use app::App;
use config::Config;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyModifiers,
        MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use keys::Flow;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::path::PathBuf;
use std::time::Duration;

/// Parse `--config <path>` from the command line.
///
/// # Returns
/// * `Result<Option<PathBuf>>` - Config path if given, error on unknown arguments
fn parse_args() -> anyhow::Result<Option<PathBuf>> {
    let mut args = std::env::args().skip(1);
    let mut config_path = None;
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" | "-c" => {
                let path = args.next().context("--config requires a path")?;
                config_path = Some(PathBuf::from(path));
            }
            other => return Err(anyhow::anyhow!("Unknown argument: {}", other)),
        }
    }
    Ok(config_path)
}

/// Main application entry point.
///
/// # Returns
/// * `Result<()>` - Success or error
///
/// # Details
/// Loads configuration, starts file logging, initializes the terminal and
/// runs the event loop. The terminal is restored on exit and on panic.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config_path = parse_args()?;
    let config = Config::load(config_path.as_deref())?;
    logging::init(&config.log_file_path()?, &config.log_level)?;

    // Write a default config on first run so there is a file to edit
    if config_path.is_none() && !Config::default_config_path()?.exists() {
        match config.save(None) {
            Ok(()) => tracing::info!("wrote default config"),
            Err(e) => tracing::warn!(error = %e, "could not write default config"),
        }
    }

    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        original_hook(info);
    }));

    let mut app = App::new(config);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app);

    restore_terminal()?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        tracing::error!(error = %e, "exiting with error");
    } else {
        tracing::info!("exiting");
    }
    result
}

fn restore_terminal() -> anyhow::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture)?;
    Ok(())
}

/// Main event loop.
///
/// # Arguments
/// * `terminal` - Terminal instance
/// * `app` - Application state
///
/// # Returns
/// * `Result<()>` - Success or error
///
/// # Details
/// Polls for input with a short timeout so the OTP countdown keeps
/// advancing and the screen is redrawn while the user is idle.
fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> anyhow::Result<()> {
    loop {
        app.on_tick();
        terminal.draw(|f| ui::render(f, app))?;

        if event::poll(Duration::from_millis(100))? {
            let flow = match event::read()? {
                Event::Key(key) => keys::handle_key(app, key),
                Event::Mouse(mouse) => handle_mouse_event(app, mouse),
                _ => Flow::Continue,
            };
            if flow == Flow::Quit {
                break;
            }
        }
    }

    Ok(())
}

/// Handle mouse events.
///
/// # Details
/// Scrolling moves the selection like the arrow keys. Clicks are ignored.
fn handle_mouse_event(app: &mut App, mouse: MouseEvent) -> Flow {
    let code = match mouse.kind {
        MouseEventKind::ScrollUp => KeyCode::Up,
        MouseEventKind::ScrollDown => KeyCode::Down,
        _ => return Flow::Continue,
    };
    if app.accepts_text() && app.screen() != navigation::Screen::Search {
        return Flow::Continue;
    }
    keys::handle_key(app, KeyEvent::new(code, KeyModifiers::NONE))
}
