//! Header Component
//!
//! Top bar with the screen title and the navigation action for that screen:
//! a settings shortcut on the converter and a back shortcut on settings.

use crate::tui::app::{AppState, Screen};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

/// Render the header component
pub fn render_header(f: &mut Frame, app_state: &AppState, area: Rect) {
    let header_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(1),     // Title
            Constraint::Length(18), // Navigation action
        ])
        .split(area);

    let title = Paragraph::new(title_text(app_state))
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Blue)),
        );
    f.render_widget(title, header_chunks[0]);

    let action = Paragraph::new(navigation_action(app_state.current_screen))
        .style(Style::default().fg(Color::Cyan))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Blue)),
        );
    f.render_widget(action, header_chunks[1]);
}

/// Title text, with a back arrow on the settings screen
fn title_text(app_state: &AppState) -> String {
    match app_state.current_screen {
        Screen::Converter => Screen::Converter.display_name().to_string(),
        Screen::Settings => format!("← {}", Screen::Settings.display_name()),
    }
}

/// Shortcut for leaving the current screen
fn navigation_action(screen: Screen) -> &'static str {
    match screen {
        Screen::Converter => "⚙ F2: Settings",
        Screen::Settings => "Esc: Back",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_text() {
        let mut app_state = AppState::default();
        assert_eq!(title_text(&app_state), "Currency Converter");

        app_state.current_screen = Screen::Settings;
        assert_eq!(title_text(&app_state), "← Settings");
    }

    #[test]
    fn test_navigation_action() {
        assert!(navigation_action(Screen::Converter).contains("Settings"));
        assert!(navigation_action(Screen::Settings).contains("Back"));
    }
}
