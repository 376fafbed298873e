//! Application State Management
//!
//! The `App` is the screen host: it owns navigation state and the shared
//! settings, lends them to the screens, and applies the changes the settings
//! screen sends back.

use crate::settings::{Settings, SettingsAction};
use crate::tui::events::Event;
use crate::tui::screens::converter::ConverterState;
use crate::tui::screens::settings::SettingsScreenState;
use crate::Error;

/// Available screens in the TUI application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Converter,
    Settings,
}

impl Screen {
    /// Get the display name for the screen
    pub fn display_name(&self) -> &'static str {
        match self {
            Screen::Converter => "Currency Converter",
            Screen::Settings => "Settings",
        }
    }
}

/// Application state shared across screens
#[derive(Debug, Clone)]
pub struct AppState {
    pub current_screen: Screen,
    /// Session settings, owned here and lent to the screens
    pub settings: Settings,
    pub converter: ConverterState,
    pub settings_screen: SettingsScreenState,
    pub status_message: Option<String>,
    pub should_quit: bool,
}

impl AppState {
    pub fn new(settings: Settings) -> Self {
        Self {
            current_screen: Screen::default(),
            settings,
            converter: ConverterState::new(settings.default_currency),
            settings_screen: SettingsScreenState::default(),
            status_message: None,
            should_quit: false,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

/// Main application struct
#[derive(Debug, Clone, Default)]
pub struct App {
    pub state: AppState,
}

impl App {
    pub fn new(settings: Settings) -> Self {
        Self {
            state: AppState::new(settings),
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.state.settings
    }

    /// Handle an application event.
    ///
    /// Returns `Ok(true)` when the application should quit.
    pub fn handle_event(&mut self, event: Event) -> Result<bool, Error> {
        if event == Event::Quit {
            self.quit();
            return Ok(true);
        }

        match self.state.current_screen {
            Screen::Converter => match event {
                Event::OpenSettings => self.navigate_to(Screen::Settings),
                other => {
                    self.state.converter.handle_event(&other);
                }
            },
            Screen::Settings => match event {
                Event::Escape => self.navigate_to(Screen::Converter),
                other => {
                    if let Some(action) = self
                        .state
                        .settings_screen
                        .handle_event(&other, &self.state.settings)
                    {
                        self.apply_settings_action(action);
                    }
                }
            },
        }

        Ok(self.state.should_quit)
    }

    /// Apply a change coming up from the settings screen
    pub fn apply_settings_action(&mut self, action: SettingsAction) {
        if !self.state.settings.apply(action) {
            return;
        }
        tracing::info!(?action, "settings changed");

        if let SettingsAction::SetDefaultCurrency(currency) = action {
            self.state.converter.on_default_currency_changed(currency);
        }
    }

    /// Switch to a screen
    pub fn navigate_to(&mut self, screen: Screen) {
        if self.state.current_screen == screen {
            return;
        }
        tracing::debug!(
            from = self.state.current_screen.display_name(),
            to = screen.display_name(),
            "navigate"
        );
        self.state.current_screen = screen;
        self.clear_messages();
    }

    pub fn set_status(&mut self, message: String) {
        self.state.status_message = Some(message);
    }

    pub fn clear_messages(&mut self) {
        self.state.status_message = None;
    }

    pub fn quit(&mut self) {
        tracing::info!("quit requested");
        self.state.should_quit = true;
    }
}
