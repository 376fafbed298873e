//! Settings Screen Implementation
//!
//! Lets the user pick the default target currency and the number of decimal
//! places. The screen does not own the settings: every selection is returned
//! as a [`SettingsAction`] for the host to apply.

use crate::rates::Currency;
use crate::settings::{DecimalPlaces, Settings, SettingsAction};
use crate::tui::components::radio_group::RadioGroup;
use crate::tui::events::Event;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Paragraph, Wrap},
    Frame,
};

/// Caption shown under the option lists
pub const SETTINGS_CAPTION: &str = "These settings apply to the conversion result formatting.";

/// Settings screen sections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SettingsSection {
    #[default]
    DefaultCurrency,
    DecimalPlaces,
}

impl SettingsSection {
    /// Get display name for the section
    pub fn display_name(&self) -> &'static str {
        match self {
            SettingsSection::DefaultCurrency => "Default target currency",
            SettingsSection::DecimalPlaces => "Decimal places",
        }
    }

    pub fn toggle(&self) -> Self {
        match self {
            SettingsSection::DefaultCurrency => SettingsSection::DecimalPlaces,
            SettingsSection::DecimalPlaces => SettingsSection::DefaultCurrency,
        }
    }
}

/// Keyboard focus for the settings screen
#[derive(Debug, Clone, Default)]
pub struct SettingsScreenState {
    pub focused_section: SettingsSection,
}

impl SettingsScreenState {
    /// Handle an event against the current settings.
    ///
    /// Returns the change the owner should apply, if any.
    pub fn handle_event(&mut self, event: &Event, settings: &Settings) -> Option<SettingsAction> {
        match event {
            Event::Tab | Event::BackTab => {
                self.focused_section = self.focused_section.toggle();
                None
            }
            Event::Up | Event::Left => Some(self.step(settings, false)),
            Event::Down | Event::Right => Some(self.step(settings, true)),
            Event::Char(c) => self.direct_pick(*c),
            _ => None,
        }
    }

    fn step(&self, settings: &Settings, forward: bool) -> SettingsAction {
        match self.focused_section {
            SettingsSection::DefaultCurrency => {
                let current = settings.default_currency;
                let currency = if forward {
                    current.next()
                } else {
                    current.previous()
                };
                SettingsAction::SetDefaultCurrency(currency)
            }
            SettingsSection::DecimalPlaces => {
                let current = settings.decimal_places;
                let places = if forward {
                    current.next()
                } else {
                    current.previous()
                };
                SettingsAction::SetDecimalPlaces(places)
            }
        }
    }

    /// Digit keys pick a decimal place count directly
    fn direct_pick(&self, c: char) -> Option<SettingsAction> {
        if self.focused_section != SettingsSection::DecimalPlaces {
            return None;
        }
        let digit = c.to_digit(10)?;
        let places = DecimalPlaces::try_from(u8::try_from(digit).ok()?).ok()?;
        Some(SettingsAction::SetDecimalPlaces(places))
    }
}

/// Render the settings screen content
pub fn render_settings(frame: &mut Frame, area: Rect, state: &SettingsScreenState, settings: &Settings) {
    let currency_group = RadioGroup::new(
        SettingsSection::DefaultCurrency.display_name(),
        Currency::ALL.iter().map(|c| c.code().to_string()).collect(),
        settings.default_currency.index(),
    )
    .focused(state.focused_section == SettingsSection::DefaultCurrency);

    let places_group = RadioGroup::new(
        SettingsSection::DecimalPlaces.display_name(),
        DecimalPlaces::ALL.iter().map(|d| d.to_string()).collect(),
        settings.decimal_places.as_u8() as usize,
    )
    .focused(state.focused_section == SettingsSection::DecimalPlaces);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(currency_group.height()),
            Constraint::Length(places_group.height()),
            Constraint::Length(2), // Caption
            Constraint::Min(0),
        ])
        .split(area);

    currency_group.render(frame, chunks[0]);
    places_group.render(frame, chunks[1]);

    frame.render_widget(
        Paragraph::new(SETTINGS_CAPTION)
            .style(Style::default().fg(Color::Gray).add_modifier(Modifier::ITALIC))
            .wrap(Wrap { trim: true }),
        chunks[2],
    );
}
