//! Radio Group Component
//!
//! A single-select list where every option is always visible and exactly one
//! is marked as selected. Selection changes are applied immediately by the
//! owning screen; this component only renders.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

/// Marker drawn in front of the selected option
pub const SELECTED_MARKER: &str = "(•)";
/// Marker drawn in front of the other options
pub const UNSELECTED_MARKER: &str = "( )";

/// Borrowed view of a radio group ready to be drawn
#[derive(Debug, Clone)]
pub struct RadioGroup<'a> {
    /// Title shown in the surrounding block
    pub title: &'a str,
    /// Option labels in display order
    pub options: Vec<String>,
    /// Index of the selected option
    pub selected: usize,
    /// Whether keyboard focus is on this group
    pub focused: bool,
}

impl<'a> RadioGroup<'a> {
    pub fn new(title: &'a str, options: Vec<String>, selected: usize) -> Self {
        Self {
            title,
            options,
            selected,
            focused: false,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Height needed to show every option plus borders
    pub fn height(&self) -> u16 {
        self.options.len() as u16 + 2
    }

    /// Text for one option row
    pub fn option_line(&self, index: usize) -> Option<String> {
        self.options.get(index).map(|label| {
            let marker = if index == self.selected {
                SELECTED_MARKER
            } else {
                UNSELECTED_MARKER
            };
            format!("{} {}", marker, label)
        })
    }

    /// Render the group
    pub fn render(&self, f: &mut Frame, area: Rect) {
        let items: Vec<ListItem> = (0..self.options.len())
            .filter_map(|idx| self.option_line(idx))
            .map(ListItem::new)
            .collect();

        let border_color = if self.focused {
            Color::Yellow
        } else {
            Color::Gray
        };

        let title = if self.focused {
            format!("{} [FOCUSED]", self.title)
        } else {
            self.title.to_string()
        };

        let highlight_style = if self.focused {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        };

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(title)
                    .border_style(Style::default().fg(border_color)),
            )
            .highlight_style(highlight_style);

        let mut list_state = ListState::default();
        list_state.select(Some(self.selected));
        f.render_stateful_widget(list, area, &mut list_state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_lines_mark_selection() {
        let group = RadioGroup::new(
            "Convert to:",
            vec!["USD".to_string(), "EUR".to_string(), "CNY".to_string()],
            1,
        );
        assert_eq!(group.option_line(0).as_deref(), Some("( ) USD"));
        assert_eq!(group.option_line(1).as_deref(), Some("(•) EUR"));
        assert_eq!(group.option_line(3), None);
        assert_eq!(group.height(), 5);
    }
}
