//! Product card widget.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use super::grid_layout::CardView;

pub struct ProductCardStyle {
    pub border: Style,
    pub border_selected: Style,
    pub category: Style,
    pub title: Style,
    pub price: Style,
    pub rating: Style,
    pub pressed: Style,
}

impl Default for ProductCardStyle {
    fn default() -> Self {
        Self {
            border: Style::default().fg(Color::DarkGray),
            border_selected: Style::default().fg(Color::Cyan),
            category: Style::default().fg(Color::Gray),
            title: Style::default().add_modifier(Modifier::BOLD),
            price: Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            rating: Style::default().fg(Color::Yellow),
            pressed: Style::default().add_modifier(Modifier::DIM | Modifier::REVERSED),
        }
    }
}

/// One card of the product grid.
pub struct ProductCard<'a> {
    card: &'a CardView,
    style: &'a ProductCardStyle,
    selected: bool,
    pressed: bool,
}

impl<'a> ProductCard<'a> {
    #[must_use]
    pub const fn new(card: &'a CardView, style: &'a ProductCardStyle) -> Self {
        Self {
            card,
            style,
            selected: false,
            pressed: false,
        }
    }

    #[must_use]
    pub const fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    #[must_use]
    pub const fn pressed(mut self, pressed: bool) -> Self {
        self.pressed = pressed;
        self
    }
}

impl Widget for ProductCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.selected {
            self.style.border_selected
        } else {
            self.style.border
        };

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style);
        let inner = block.inner(area);
        block.render(area, buf);

        let [category_area, title_area, footer_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Length(1),
        ])
        .areas(inner);

        Paragraph::new(self.card.category_label.as_str())
            .style(self.style.category)
            .render(category_area, buf);

        let title: Vec<Line> = self
            .card
            .title_lines
            .iter()
            .map(|line| Line::raw(line.as_str()))
            .collect();
        Paragraph::new(title)
            .style(self.style.title)
            .render(title_area, buf);

        let rating_width = u16::try_from(self.card.rating_text.width()).unwrap_or(u16::MAX);
        let [price_area, rating_area] =
            Layout::horizontal([Constraint::Fill(1), Constraint::Length(rating_width)])
                .areas(footer_area);

        Paragraph::new(self.card.price_text.as_str())
            .style(self.style.price)
            .render(price_area, buf);
        Paragraph::new(self.card.rating_text.as_str())
            .style(self.style.rating)
            .render(rating_area, buf);

        if self.pressed {
            buf.set_style(area, self.style.pressed);
        }
    }
}
