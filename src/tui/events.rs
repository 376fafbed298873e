//! Event Handling System
//!
//! Terminal key presses are converted into application events on a
//! background task and delivered to the main loop through a channel.

use crossterm::event::{self, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;
use tokio::sync::mpsc;

/// Application events that can be handled
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Quit the application
    Quit,
    /// Move focus forward
    Tab,
    /// Move focus backward (Shift+Tab)
    BackTab,
    /// Enter/confirm action
    Enter,
    /// Escape/back action
    Escape,
    /// Arrow key navigation
    Up,
    Down,
    Left,
    Right,
    /// Character input
    Char(char),
    /// Backspace key
    Backspace,
    /// Delete key
    Delete,
    /// Home key
    Home,
    /// End key
    End,
    /// Open the settings screen (F2 or Ctrl+S)
    OpenSettings,
    /// Terminal was resized
    Resize(u16, u16),
}

/// Event handler for processing terminal events
pub struct EventHandler {
    /// Receiver for events
    receiver: mpsc::UnboundedReceiver<Event>,
    /// Sender for events (for injected events)
    sender: mpsc::UnboundedSender<Event>,
    /// Handle for the background terminal event processing task
    _terminal_task: Option<tokio::task::JoinHandle<()>>,
}

impl EventHandler {
    /// Create a new event handler that polls the terminal
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();

        let event_sender = sender.clone();
        let terminal_task = tokio::spawn(async move {
            loop {
                if event::poll(Duration::from_millis(50)).unwrap_or(false) {
                    if let Ok(terminal_event) = event::read() {
                        if let Some(app_event) = Self::convert_terminal_event(terminal_event) {
                            if event_sender.send(app_event).is_err() {
                                break; // Channel closed
                            }
                        }
                    }
                }

                tokio::time::sleep(Duration::from_millis(10)).await;
            }
        });

        Self {
            receiver,
            sender,
            _terminal_task: Some(terminal_task),
        }
    }

    /// Create a handler that only delivers events sent through [`EventHandler::sender`]
    pub fn detached() -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        Self {
            receiver,
            sender,
            _terminal_task: None,
        }
    }

    /// Get the next event
    pub async fn next(&mut self) -> Result<Event, Box<dyn std::error::Error + Send + Sync>> {
        self.receiver
            .recv()
            .await
            .ok_or_else(|| "Event channel closed".into())
    }

    /// Sender for injecting events into the loop
    pub fn sender(&self) -> mpsc::UnboundedSender<Event> {
        self.sender.clone()
    }

    /// Convert a terminal event to an application event
    pub fn convert_terminal_event(terminal_event: event::Event) -> Option<Event> {
        match terminal_event {
            event::Event::Key(key_event) if key_event.kind != KeyEventKind::Release => {
                Self::convert_key_event(key_event)
            }
            event::Event::Resize(width, height) => Some(Event::Resize(width, height)),
            _ => None,
        }
    }

    /// Convert a key event to an application event
    pub fn convert_key_event(key_event: KeyEvent) -> Option<Event> {
        match key_event {
            // Quit events
            KeyEvent {
                code: KeyCode::Char('c') | KeyCode::Char('q'),
                modifiers: KeyModifiers::CONTROL,
                ..
            } => Some(Event::Quit),

            // Settings
            KeyEvent {
                code: KeyCode::Char('s'),
                modifiers: KeyModifiers::CONTROL,
                ..
            } => Some(Event::OpenSettings),

            KeyEvent {
                code: KeyCode::F(2),
                ..
            } => Some(Event::OpenSettings),

            // Focus navigation
            KeyEvent {
                code: KeyCode::Tab,
                modifiers: KeyModifiers::NONE,
                ..
            } => Some(Event::Tab),

            KeyEvent {
                code: KeyCode::BackTab,
                ..
            } => Some(Event::BackTab),

            KeyEvent {
                code: KeyCode::Enter,
                ..
            } => Some(Event::Enter),

            KeyEvent {
                code: KeyCode::Esc,
                ..
            } => Some(Event::Escape),

            // Arrow keys
            KeyEvent {
                code: KeyCode::Up, ..
            } => Some(Event::Up),

            KeyEvent {
                code: KeyCode::Down,
                ..
            } => Some(Event::Down),

            KeyEvent {
                code: KeyCode::Left,
                ..
            } => Some(Event::Left),

            KeyEvent {
                code: KeyCode::Right,
                ..
            } => Some(Event::Right),

            // Editing keys
            KeyEvent {
                code: KeyCode::Backspace,
                ..
            } => Some(Event::Backspace),

            KeyEvent {
                code: KeyCode::Delete,
                ..
            } => Some(Event::Delete),

            KeyEvent {
                code: KeyCode::Home,
                ..
            } => Some(Event::Home),

            KeyEvent {
                code: KeyCode::End, ..
            } => Some(Event::End),

            // Character input
            KeyEvent {
                code: KeyCode::Char(c),
                modifiers: KeyModifiers::NONE | KeyModifiers::SHIFT,
                ..
            } => Some(Event::Char(c)),

            // Ignore other key combinations
            _ => None,
        }
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(
            EventHandler::convert_key_event(key(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Event::Quit)
        );
        assert_eq!(
            EventHandler::convert_key_event(key(KeyCode::Char('q'), KeyModifiers::CONTROL)),
            Some(Event::Quit)
        );
    }

    #[test]
    fn test_plain_characters_are_input() {
        // 'q' without Ctrl must reach the amount field
        assert_eq!(
            EventHandler::convert_key_event(key(KeyCode::Char('q'), KeyModifiers::NONE)),
            Some(Event::Char('q'))
        );
        assert_eq!(
            EventHandler::convert_key_event(key(KeyCode::Char('E'), KeyModifiers::SHIFT)),
            Some(Event::Char('E'))
        );
    }

    #[test]
    fn test_settings_keys() {
        assert_eq!(
            EventHandler::convert_key_event(key(KeyCode::F(2), KeyModifiers::NONE)),
            Some(Event::OpenSettings)
        );
        assert_eq!(
            EventHandler::convert_key_event(key(KeyCode::Char('s'), KeyModifiers::CONTROL)),
            Some(Event::OpenSettings)
        );
    }

    #[test]
    fn test_navigation_keys() {
        assert_eq!(
            EventHandler::convert_key_event(key(KeyCode::Tab, KeyModifiers::NONE)),
            Some(Event::Tab)
        );
        assert_eq!(
            EventHandler::convert_key_event(key(KeyCode::BackTab, KeyModifiers::SHIFT)),
            Some(Event::BackTab)
        );
        assert_eq!(
            EventHandler::convert_key_event(key(KeyCode::Esc, KeyModifiers::NONE)),
            Some(Event::Escape)
        );
        assert_eq!(
            EventHandler::convert_key_event(key(KeyCode::Down, KeyModifiers::NONE)),
            Some(Event::Down)
        );
    }

    #[test]
    fn test_unmapped_combinations_ignored() {
        assert_eq!(
            EventHandler::convert_key_event(key(KeyCode::Char('x'), KeyModifiers::ALT)),
            None
        );
        assert_eq!(
            EventHandler::convert_key_event(key(KeyCode::F(7), KeyModifiers::NONE)),
            None
        );
    }

    #[test]
    fn test_release_events_ignored() {
        let mut release = key(KeyCode::Char('1'), KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;
        assert_eq!(
            EventHandler::convert_terminal_event(event::Event::Key(release)),
            None
        );
        assert_eq!(
            EventHandler::convert_terminal_event(event::Event::Resize(80, 24)),
            Some(Event::Resize(80, 24))
        );
    }

    #[tokio::test]
    async fn test_detached_handler_delivers_injected_events() {
        let mut handler = EventHandler::detached();
        let sender = handler.sender();
        sender.send(Event::Char('5')).unwrap();
        sender.send(Event::Quit).unwrap();

        assert_eq!(handler.next().await.unwrap(), Event::Char('5'));
        assert_eq!(handler.next().await.unwrap(), Event::Quit);
    }
}
