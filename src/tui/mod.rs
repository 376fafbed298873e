//! Currency Converter TUI Module
//!
//! Terminal rendition of the converter: a converter screen and a settings
//! screen sharing one set of session settings.

pub mod app;
pub mod components;
pub mod events;
pub mod screens;
pub mod ui;
pub mod utils;


pub use app::{App, AppState, Screen};
pub use events::{Event, EventHandler};
pub use ui::render_ui;

use crate::settings::Settings;
use crate::Error;
use crossterm::{
    cursor, execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

pub type TuiTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Global flag to track if terminal cleanup is needed
static TERMINAL_NEEDS_CLEANUP: AtomicBool = AtomicBool::new(false);

/// Initialize the terminal for TUI mode
///
/// Sets up the terminal with alternate screen and raw mode.
pub fn init_terminal() -> Result<TuiTerminal, Error> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;

    TERMINAL_NEEDS_CLEANUP.store(true, Ordering::SeqCst);

    Ok(terminal)
}

/// Restore the terminal to normal mode
///
/// Safe to call multiple times.
pub fn restore_terminal(terminal: &mut TuiTerminal) -> Result<(), Error> {
    if TERMINAL_NEEDS_CLEANUP.load(Ordering::SeqCst) {
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        TERMINAL_NEEDS_CLEANUP.store(false, Ordering::SeqCst);
    }
    Ok(())
}

/// Emergency terminal cleanup for panic situations
fn emergency_terminal_cleanup() {
    if TERMINAL_NEEDS_CLEANUP.load(Ordering::SeqCst) {
        // Ignore errors during emergency cleanup
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        let _ = execute!(io::stdout(), cursor::Show);
        TERMINAL_NEEDS_CLEANUP.store(false, Ordering::SeqCst);
    }
}

/// Setup panic handler for graceful terminal restoration
pub fn setup_panic_handler() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        emergency_terminal_cleanup();
        original_hook(panic_info);
    }));
}

/// Main TUI application entry point
///
/// Initializes the terminal, runs the event loop until the user quits and
/// always restores the terminal afterwards.
pub async fn run_tui(settings: Settings) -> Result<(), Error> {
    setup_panic_handler();

    let mut terminal = init_terminal().inspect_err(|_| emergency_terminal_cleanup())?;

    let mut app = App::new(settings);
    let mut event_handler = EventHandler::new();

    tracing::info!(
        default_currency = %settings.default_currency,
        decimal_places = %settings.decimal_places,
        "converter started"
    );

    let app_result = run_app_loop(&mut terminal, &mut app, &mut event_handler).await;

    // Always attempt to restore terminal, even if app_result is an error
    if let Err(restore_error) = restore_terminal(&mut terminal) {
        if app_result.is_ok() {
            return Err(restore_error);
        }
        tracing::warn!("failed to restore terminal: {}", restore_error);
    }

    tracing::info!("converter stopped");
    app_result
}

/// Internal application loop
async fn run_app_loop(
    terminal: &mut TuiTerminal,
    app: &mut App,
    event_handler: &mut EventHandler,
) -> Result<(), Error> {
    loop {
        terminal.draw(|frame| render_ui(frame, app))?;

        match tokio::time::timeout(Duration::from_millis(100), event_handler.next()).await {
            Ok(Ok(event)) => match app.handle_event(event) {
                Ok(true) => break,
                Ok(false) => {}
                Err(e) => {
                    tracing::warn!("event handling error: {}", e);
                    app.set_status(format!("Event handling error: {}", e));
                }
            },
            Ok(Err(e)) => {
                return Err(Error::Other(format!("Event error: {}", e)));
            }
            Err(_) => {
                // Timeout - redraw
            }
        }

        if app.state.should_quit {
            break;
        }
    }

    Ok(())
}
