//! Event handling.

use std::borrow::Cow;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Result of event handling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventResult {
    /// Continue processing.
    Continue,
    /// Exit application.
    Exit,
    /// Event was consumed.
    Consumed,
}

/// Terminal key event helpers.
pub struct EventHandler;

impl EventHandler {
    /// Checks if key is a quit event.
    #[must_use]
    pub fn is_quit_event(key: &KeyEvent) -> bool {
        matches!(
            key,
            KeyEvent {
                code: KeyCode::Char('q'),
                modifiers: KeyModifiers::NONE,
                ..
            } | KeyEvent {
                code: KeyCode::Char('c'),
                modifiers: KeyModifiers::CONTROL,
                ..
            } | KeyEvent {
                code: KeyCode::Esc,
                modifiers: KeyModifiers::NONE,
                ..
            }
        )
    }

    /// Only presses drive the deck; repeats and releases are dropped.
    #[must_use]
    pub fn is_press(key: &KeyEvent) -> bool {
        key.kind == KeyEventKind::Press
    }

    /// Maps a key to its DOM-style name (`ArrowLeft`, `Home`, `a`, ...).
    #[must_use]
    pub fn key_name(key: &KeyEvent) -> Cow<'static, str> {
        match key.code {
            KeyCode::Left => Cow::Borrowed("ArrowLeft"),
            KeyCode::Right => Cow::Borrowed("ArrowRight"),
            KeyCode::Up => Cow::Borrowed("ArrowUp"),
            KeyCode::Down => Cow::Borrowed("ArrowDown"),
            KeyCode::PageUp => Cow::Borrowed("PageUp"),
            KeyCode::PageDown => Cow::Borrowed("PageDown"),
            KeyCode::Home => Cow::Borrowed("Home"),
            KeyCode::End => Cow::Borrowed("End"),
            KeyCode::Esc => Cow::Borrowed("Escape"),
            KeyCode::Enter => Cow::Borrowed("Enter"),
            KeyCode::Tab => Cow::Borrowed("Tab"),
            KeyCode::Backspace => Cow::Borrowed("Backspace"),
            KeyCode::Char(' ') => Cow::Borrowed(" "),
            KeyCode::Char(c) => Cow::Owned(c.to_string()),
            KeyCode::F(n) => Cow::Owned(format!("F{n}")),
            _ => Cow::Borrowed("Unidentified"),
        }
    }
}
