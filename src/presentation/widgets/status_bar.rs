//! Status bar widget.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

/// Status bar severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    /// Informational.
    Info,
    /// Success.
    Success,
    /// Error.
    Error,
}

impl StatusLevel {
    /// Returns color for level.
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Self::Info => Color::Cyan,
            Self::Success => Color::Green,
            Self::Error => Color::Red,
        }
    }
}

/// Single-line status bar with a message on the left and key hints on the right.
#[derive(Debug, Clone)]
pub struct StatusBar {
    message: String,
    hints: String,
    level: StatusLevel,
}

impl StatusBar {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            message: String::new(),
            hints: String::new(),
            level: StatusLevel::Info,
        }
    }

    #[must_use]
    pub fn message(mut self, content: impl Into<String>) -> Self {
        self.message = content.into();
        self
    }

    #[must_use]
    pub fn hints(mut self, content: impl Into<String>) -> Self {
        self.hints = content.into();
        self
    }

    #[must_use]
    pub const fn level(mut self, level: StatusLevel) -> Self {
        self.level = level;
        self
    }
}

impl Default for StatusBar {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for &StatusBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let message_style = Style::default()
            .fg(self.level.color())
            .add_modifier(Modifier::BOLD);
        let hints_style = Style::default().fg(Color::DarkGray);

        let hints_width = u16::try_from(self.hints.width()).unwrap_or(u16::MAX);
        let [message_area, hints_area] =
            Layout::horizontal([Constraint::Fill(1), Constraint::Length(hints_width)])
                .areas(area);

        Paragraph::new(self.message.as_str())
            .style(message_style)
            .render(message_area, buf);
        Paragraph::new(self.hints.as_str())
            .style(hints_style)
            .alignment(Alignment::Right)
            .render(hints_area, buf);
    }
}
