//! UI Rendering Logic
//!
//! This module lays out the header, the active screen and the status bar.

use crate::tui::app::{App, Screen};
use crate::tui::components::header::render_header;
use crate::tui::components::status_bar::render_status_bar;
use crate::tui::screens::converter::render_converter;
use crate::tui::screens::settings::render_settings;
use ratatui::{prelude::*, widgets::*};

/// Minimum terminal dimensions for the application
pub const MIN_WIDTH: u16 = 40;
pub const MIN_HEIGHT: u16 = 20;

/// Main UI rendering function
pub fn render_ui(frame: &mut Frame, app: &App) {
    let size = frame.area();

    if size.width < MIN_WIDTH || size.height < MIN_HEIGHT {
        frame.render_widget(create_size_warning(size), size);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Content
            Constraint::Length(3), // Status bar
        ])
        .split(size);

    render_header(frame, &app.state, chunks[0]);

    match app.state.current_screen {
        Screen::Converter => {
            render_converter(frame, chunks[1], &app.state.converter, &app.state.settings)
        }
        Screen::Settings => render_settings(
            frame,
            chunks[1],
            &app.state.settings_screen,
            &app.state.settings,
        ),
    }

    render_status_bar(frame, &app.state, chunks[2]);
}

/// Warning shown instead of the screens when the terminal is too small
fn create_size_warning(area: Rect) -> Paragraph<'static> {
    let warning_text = vec![
        Line::from("Terminal Too Small"),
        Line::from(""),
        Line::from(format!("Current: {}x{}", area.width, area.height)),
        Line::from(format!("Minimum: {}x{}", MIN_WIDTH, MIN_HEIGHT)),
    ];

    Paragraph::new(warning_text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red))
                .title("Size Warning"),
        )
}
