//! Status Bar Component
//!
//! Bottom bar with the current status message and context-sensitive
//! keyboard shortcuts.

use crate::tui::app::{AppState, Screen};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

/// Render the status bar component
pub fn render_status_bar(f: &mut Frame, app_state: &AppState, area: Rect) {
    let status_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(40), // Status/message area
            Constraint::Percentage(60), // Help/shortcuts area
        ])
        .split(area);

    let status_text = app_state
        .status_message
        .clone()
        .unwrap_or_else(|| default_status(app_state));

    let status = Paragraph::new(status_text)
        .style(Style::default().fg(Color::Cyan))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Blue))
                .title("Status"),
        );
    f.render_widget(status, status_chunks[0]);

    let help = Paragraph::new(get_context_help(app_state))
        .style(Style::default().fg(Color::Gray))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Blue))
                .title("Help"),
        );
    f.render_widget(help, status_chunks[1]);
}

/// Status shown when no message is set
fn default_status(app_state: &AppState) -> String {
    format!(
        "Default: {} | {} dp",
        app_state.settings.default_currency, app_state.settings.decimal_places
    )
}

/// Get context-sensitive help text based on current screen
fn get_context_help(app_state: &AppState) -> String {
    let base_help = "Ctrl+C:Quit";

    let screen_help = match app_state.current_screen {
        Screen::Converter => "Tab:Focus | ↑↓:Currency | F2:Settings",
        Screen::Settings => "Tab:Section | ↑↓:Select | Esc:Back",
    };

    format!("{} | {}", screen_help, base_help)
}
