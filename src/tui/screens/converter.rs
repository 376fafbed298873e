//! Converter Screen Implementation
//!
//! Takes a free-text AUD amount and a target currency, and shows the rate
//! and the converted result. The error and result are derived on every
//! render from the current input; nothing derived is stored.

use crate::conversion::ConversionView;
use crate::rates::Currency;
use crate::settings::Settings;
use crate::tui::components::radio_group::RadioGroup;
use crate::tui::events::Event;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use tui_input::{Input, InputRequest};

/// Label of the amount field
pub const AMOUNT_LABEL: &str = "Amount (AUD)";

/// Which converter widget receives keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConverterFocus {
    #[default]
    Amount,
    Currency,
}

impl ConverterFocus {
    pub fn toggle(&self) -> Self {
        match self {
            ConverterFocus::Amount => ConverterFocus::Currency,
            ConverterFocus::Currency => ConverterFocus::Amount,
        }
    }
}

/// Converter screen state
#[derive(Debug, Clone)]
pub struct ConverterState {
    /// Raw amount text
    pub amount: Input,
    /// Target currency chosen with the radio group
    pub selected_currency: Currency,
    pub focus: ConverterFocus,
}

impl ConverterState {
    pub fn new(default_currency: Currency) -> Self {
        Self {
            amount: Input::default(),
            selected_currency: default_currency,
            focus: ConverterFocus::default(),
        }
    }

    /// Current amount text
    pub fn amount_text(&self) -> &str {
        self.amount.value()
    }

    pub fn select_currency(&mut self, currency: Currency) {
        self.selected_currency = currency;
    }

    /// The default currency changed on the settings screen
    pub fn on_default_currency_changed(&mut self, default_currency: Currency) {
        self.selected_currency = default_currency;
    }

    /// Derived rate line, error and result for the current input
    pub fn view(&self, settings: &Settings) -> ConversionView {
        ConversionView::for_settings(self.amount.value(), self.selected_currency, settings)
    }

    /// Handle an event, returning `true` when it was consumed
    pub fn handle_event(&mut self, event: &Event) -> bool {
        match event {
            Event::Tab | Event::BackTab => {
                self.focus = self.focus.toggle();
                true
            }
            _ => match self.focus {
                ConverterFocus::Amount => self.handle_amount_event(event),
                ConverterFocus::Currency => self.handle_currency_event(event),
            },
        }
    }

    fn handle_amount_event(&mut self, event: &Event) -> bool {
        let request = match event {
            Event::Char(c) => InputRequest::InsertChar(*c),
            Event::Backspace => InputRequest::DeletePrevChar,
            Event::Delete => InputRequest::DeleteNextChar,
            Event::Left => InputRequest::GoToPrevChar,
            Event::Right => InputRequest::GoToNextChar,
            Event::Home => InputRequest::GoToStart,
            Event::End => InputRequest::GoToEnd,
            Event::Down | Event::Enter => {
                self.focus = ConverterFocus::Currency;
                return true;
            }
            _ => return false,
        };
        self.amount.handle(request);
        true
    }

    fn handle_currency_event(&mut self, event: &Event) -> bool {
        match event {
            Event::Up | Event::Left => {
                self.selected_currency = self.selected_currency.previous();
                true
            }
            Event::Down | Event::Right => {
                self.selected_currency = self.selected_currency.next();
                true
            }
            // Typing goes straight back to the amount field
            Event::Char(_) | Event::Backspace => {
                self.focus = ConverterFocus::Amount;
                self.handle_amount_event(event)
            }
            _ => false,
        }
    }
}

/// Render the converter screen content
pub fn render_converter(frame: &mut Frame, area: Rect, state: &ConverterState, settings: &Settings) {
    let view = state.view(settings);
    let currency_group = RadioGroup::new(
        "Convert to:",
        Currency::ALL.iter().map(|c| c.code().to_string()).collect(),
        state.selected_currency.index(),
    )
    .focused(state.focus == ConverterFocus::Currency);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(1),                      // Caption
            Constraint::Length(3),                      // Amount input
            Constraint::Length(1),                      // Error message
            Constraint::Length(currency_group.height()), // Currency radio group
            Constraint::Length(1),                      // Rate line
            Constraint::Length(1),                      // Result line
            Constraint::Min(0),
        ])
        .split(area);

    frame.render_widget(
        Paragraph::new("Enter AUD, then choose a currency").style(Style::default().fg(Color::Gray)),
        chunks[0],
    );

    render_amount_input(frame, chunks[1], state, view.error.is_some());

    if let Some(error) = view.error {
        frame.render_widget(
            Paragraph::new(error).style(Style::default().fg(Color::Red)),
            chunks[2],
        );
    }

    currency_group.render(frame, chunks[3]);

    frame.render_widget(Paragraph::new(view.rate_line.as_str()), chunks[4]);

    if let Some(result_line) = view.result_line() {
        frame.render_widget(
            Paragraph::new(result_line).style(
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            chunks[5],
        );
    }
}

fn render_amount_input(frame: &mut Frame, area: Rect, state: &ConverterState, has_error: bool) {
    let focused = state.focus == ConverterFocus::Amount;
    let border_style = if has_error {
        Style::default().fg(Color::Red)
    } else if focused {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Blue)
    };

    let input = Paragraph::new(state.amount.value()).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(AMOUNT_LABEL),
    );
    frame.render_widget(input, area);

    if focused {
        let cursor_x = area.x + state.amount.visual_cursor() as u16 + 1;
        let cursor_y = area.y + 1;
        frame.set_cursor_position((cursor_x, cursor_y));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conversion::INVALID_NUMBER_MESSAGE;
    use crate::settings::DecimalPlaces;

    fn type_text(state: &mut ConverterState, text: &str) {
        for c in text.chars() {
            state.handle_event(&Event::Char(c));
        }
    }

    #[test]
    fn test_typing_updates_derived_view() {
        let settings = Settings::default();
        let mut state = ConverterState::new(settings.default_currency);

        type_text(&mut state, "10");
        assert_eq!(state.amount_text(), "10");
        assert_eq!(
            state.view(&settings).result_line().as_deref(),
            Some("Result: USD 6.60")
        );

        type_text(&mut state, "0");
        assert_eq!(
            state.view(&settings).result_line().as_deref(),
            Some("Result: USD 66.00")
        );

        state.handle_event(&Event::Char('x'));
        let view = state.view(&settings);
        assert_eq!(view.error, Some(INVALID_NUMBER_MESSAGE));
        assert_eq!(view.result_line(), None);

        state.handle_event(&Event::Backspace);
        assert_eq!(state.view(&settings).error, None);
    }

    #[test]
    fn test_clearing_input_clears_error() {
        let settings = Settings::default();
        let mut state = ConverterState::new(Currency::Usd);
        type_text(&mut state, "ab");
        assert!(state.view(&settings).error.is_some());

        state.handle_event(&Event::Backspace);
        state.handle_event(&Event::Backspace);
        let view = state.view(&settings);
        assert_eq!(state.amount_text(), "");
        assert_eq!(view.error, None);
        assert_eq!(view.result, None);
    }

    #[test]
    fn test_currency_selection_changes_rate() {
        let settings = Settings::new(Currency::Usd, DecimalPlaces::Zero);
        let mut state = ConverterState::new(Currency::Usd);
        type_text(&mut state, "100");

        state.handle_event(&Event::Tab);
        assert_eq!(state.focus, ConverterFocus::Currency);

        state.handle_event(&Event::Down);
        state.handle_event(&Event::Down);
        assert_eq!(state.selected_currency, Currency::Cny);

        let view = state.view(&settings);
        assert_eq!(view.rate_line, "Rate: 1 AUD = 4.7500 CNY");
        assert_eq!(view.result_line().as_deref(), Some("Result: CNY 475"));

        // Wraps back to the top
        state.handle_event(&Event::Down);
        assert_eq!(state.selected_currency, Currency::Usd);
        state.handle_event(&Event::Up);
        assert_eq!(state.selected_currency, Currency::Cny);
    }

    #[test]
    fn test_typing_in_currency_group_returns_to_amount() {
        let mut state = ConverterState::new(Currency::Usd);
        state.handle_event(&Event::Tab);
        state.handle_event(&Event::Char('7'));
        assert_eq!(state.focus, ConverterFocus::Amount);
        assert_eq!(state.amount_text(), "7");
    }

    #[test]
    fn test_cursor_editing() {
        let mut state = ConverterState::new(Currency::Usd);
        type_text(&mut state, "15");
        state.handle_event(&Event::Left);
        state.handle_event(&Event::Char('2'));
        assert_eq!(state.amount_text(), "125");

        state.handle_event(&Event::Home);
        state.handle_event(&Event::Delete);
        assert_eq!(state.amount_text(), "25");
    }

    #[test]
    fn test_default_currency_change_resets_selection() {
        let mut state = ConverterState::new(Currency::Usd);
        state.select_currency(Currency::Cny);
        state.on_default_currency_changed(Currency::Eur);
        assert_eq!(state.selected_currency, Currency::Eur);
    }
}
