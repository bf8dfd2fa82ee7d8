//! Event handling.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind};

/// Result of event handling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventResult {
    /// Continue processing.
    Continue,
    /// Exit application.
    Exit,
    /// Tear the screen down and mount a fresh one.
    Remount,
}

/// Grid commands produced by terminal input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridCommand {
    Quit,
    Remount,
    Left,
    Right,
    Up,
    Down,
    PageUp,
    PageDown,
    First,
    Last,
    Press,
    ScrollUp,
    ScrollDown,
    Click { column: u16, row: u16 },
}

/// Maps terminal events to grid commands.
pub struct EventHandler;

impl EventHandler {
    /// Checks if key is a quit event.
    #[must_use]
    pub fn is_quit_event(key: &KeyEvent) -> bool {
        matches!(
            key,
            KeyEvent {
                code: KeyCode::Char('q') | KeyCode::Esc,
                modifiers: KeyModifiers::NONE,
                ..
            } | KeyEvent {
                code: KeyCode::Char('c'),
                modifiers: KeyModifiers::CONTROL,
                ..
            }
        )
    }

    /// Translates a key press. Releases and repeats of other kinds are ignored.
    #[must_use]
    pub fn command_for_key(key: &KeyEvent) -> Option<GridCommand> {
        if key.kind != KeyEventKind::Press {
            return None;
        }
        if Self::is_quit_event(key) {
            return Some(GridCommand::Quit);
        }

        let command = match key.code {
            KeyCode::Char('r') => GridCommand::Remount,
            KeyCode::Left | KeyCode::Char('h') => GridCommand::Left,
            KeyCode::Right | KeyCode::Char('l') => GridCommand::Right,
            KeyCode::Up | KeyCode::Char('k') => GridCommand::Up,
            KeyCode::Down | KeyCode::Char('j') => GridCommand::Down,
            KeyCode::PageUp => GridCommand::PageUp,
            KeyCode::PageDown => GridCommand::PageDown,
            KeyCode::Home | KeyCode::Char('g') => GridCommand::First,
            KeyCode::End | KeyCode::Char('G') => GridCommand::Last,
            KeyCode::Enter | KeyCode::Char(' ') => GridCommand::Press,
            _ => return None,
        };

        Some(command)
    }

    #[must_use]
    pub const fn command_for_mouse(mouse: &MouseEvent) -> Option<GridCommand> {
        match mouse.kind {
            MouseEventKind::ScrollUp => Some(GridCommand::ScrollUp),
            MouseEventKind::ScrollDown => Some(GridCommand::ScrollDown),
            MouseEventKind::Down(_) => Some(GridCommand::Click {
                column: mouse.column,
                row: mouse.row,
            }),
            _ => None,
        }
    }
}
