//! Scrollable two-column product grid.

use std::time::{Duration, Instant};

use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    widgets::{StatefulWidget, Widget},
};

use super::grid_layout::{COLUMNS, CardView, GridLayout};
use super::product_card::{ProductCard, ProductCardStyle};
use crate::domain::entities::Product;

/// Selection, scroll and press state of the grid.
#[derive(Debug, Default)]
pub struct ProductGridState {
    selected: Option<usize>,
    offset_row: usize,
    visible_rows: usize,
    pressed: Option<(usize, Instant)>,
    card_areas: Vec<(usize, Rect)>,
}

impl ProductGridState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn selected(&self) -> Option<usize> {
        self.selected
    }

    #[must_use]
    pub const fn offset_row(&self) -> usize {
        self.offset_row
    }

    pub fn select(&mut self, index: Option<usize>) {
        self.selected = index;
    }

    pub fn select_next(&mut self, len: usize) {
        self.move_by(1, len);
    }

    pub fn select_previous(&mut self, len: usize) {
        self.move_by(-1, len);
    }

    pub fn select_down(&mut self, len: usize) {
        self.move_by(COLUMNS as isize, len);
    }

    pub fn select_up(&mut self, len: usize) {
        self.move_by(-(COLUMNS as isize), len);
    }

    pub fn page_down(&mut self, len: usize) {
        let step = self.visible_rows.max(1) * COLUMNS;
        self.move_by(isize::try_from(step).unwrap_or(isize::MAX), len);
    }

    pub fn page_up(&mut self, len: usize) {
        let step = self.visible_rows.max(1) * COLUMNS;
        self.move_by(-isize::try_from(step).unwrap_or(isize::MAX), len);
    }

    pub fn select_first(&mut self, len: usize) {
        self.selected = (len > 0).then_some(0);
    }

    pub fn select_last(&mut self, len: usize) {
        self.selected = len.checked_sub(1);
    }

    fn move_by(&mut self, delta: isize, len: usize) {
        if len == 0 {
            self.selected = None;
            return;
        }

        let current = self.selected.unwrap_or(0);
        let target = current.saturating_add_signed(delta).min(len - 1);

        // Moving up from the first row keeps the column instead of wrapping.
        if delta < 0 && current < delta.unsigned_abs() {
            self.selected = Some(current % COLUMNS);
            return;
        }

        self.selected = Some(target);
    }

    /// Scrolls the viewport by whole rows, dragging the selection along.
    pub fn scroll_by(&mut self, rows: isize, len: usize) {
        if len == 0 {
            return;
        }
        let max_offset = GridLayout::row_count(len).saturating_sub(self.visible_rows.max(1));
        self.offset_row = self.offset_row.saturating_add_signed(rows).min(max_offset);

        if let Some(selected) = self.selected {
            let row = selected / COLUMNS;
            let last_visible = self.offset_row + self.visible_rows.max(1) - 1;
            let column = selected % COLUMNS;
            if row < self.offset_row {
                self.selected = Some((self.offset_row * COLUMNS + column).min(len - 1));
            } else if row > last_visible {
                self.selected = Some((last_visible * COLUMNS + column).min(len - 1));
            }
        }
    }

    /// Marks the selected card as pressed.
    pub fn press_selected(&mut self, now: Instant) -> bool {
        match self.selected {
            Some(index) => {
                self.pressed = Some((index, now));
                true
            }
            None => false,
        }
    }

    /// Marks the card at a terminal position as pressed and selects it.
    pub fn press_at(&mut self, column: u16, row: u16, now: Instant) -> bool {
        let position = Position::new(column, row);
        let hit = self
            .card_areas
            .iter()
            .find(|(_, area)| area.contains(position))
            .map(|(index, _)| *index);

        match hit {
            Some(index) => {
                self.selected = Some(index);
                self.pressed = Some((index, now));
                true
            }
            None => false,
        }
    }

    /// Clears expired press feedback. Returns whether anything changed.
    pub fn tick(&mut self, now: Instant, feedback: Duration) -> bool {
        match self.pressed {
            Some((_, at)) if now.saturating_duration_since(at) >= feedback => {
                self.pressed = None;
                true
            }
            _ => false,
        }
    }

    #[must_use]
    pub fn is_pressed(&self, index: usize) -> bool {
        self.pressed.is_some_and(|(pressed, _)| pressed == index)
    }

    fn clamp(&mut self, len: usize) {
        if len == 0 {
            self.selected = None;
            self.offset_row = 0;
            self.pressed = None;
            return;
        }
        if let Some(selected) = self.selected {
            self.selected = Some(selected.min(len - 1));
        }
        let max_offset = GridLayout::row_count(len).saturating_sub(self.visible_rows);
        self.offset_row = self.offset_row.min(max_offset);
    }

    fn ensure_selected_visible(&mut self) {
        let Some(selected) = self.selected else {
            return;
        };
        let row = selected / COLUMNS;
        if row < self.offset_row {
            self.offset_row = row;
        } else if row >= self.offset_row + self.visible_rows {
            self.offset_row = row + 1 - self.visible_rows;
        }
    }
}

/// Grid of product cards, two per row.
pub struct ProductGrid<'a> {
    products: &'a [Product],
    currency: &'a str,
    spacing: u16,
    style: ProductCardStyle,
}

impl<'a> ProductGrid<'a> {
    #[must_use]
    pub fn new(products: &'a [Product], currency: &'a str) -> Self {
        Self {
            products,
            currency,
            spacing: 1,
            style: ProductCardStyle::default(),
        }
    }

    #[must_use]
    pub const fn spacing(mut self, spacing: u16) -> Self {
        self.spacing = spacing;
        self
    }
}

impl StatefulWidget for ProductGrid<'_> {
    type State = ProductGridState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        state.card_areas.clear();
        state.visible_rows = GridLayout::visible_rows(area.height);
        state.clamp(self.products.len());
        state.ensure_selected_visible();

        if self.products.is_empty() || area.is_empty() {
            return;
        }

        let layout = GridLayout::new(area.width, self.spacing);
        let start = state.offset_row * COLUMNS;
        let end = (start + state.visible_rows * COLUMNS).min(self.products.len());
        let rows: Vec<Vec<CardView>> = layout.project(&self.products[start..end], self.currency);

        for (row_index, row) in rows.iter().enumerate() {
            for (column, card) in row.iter().enumerate() {
                let Some(card_area) = layout.card_area(area, row_index, column) else {
                    continue;
                };
                let index = start + row_index * COLUMNS + column;

                ProductCard::new(card, &self.style)
                    .selected(state.selected == Some(index))
                    .pressed(state.is_pressed(index))
                    .render(card_area, buf);

                state.card_areas.push((index, card_area));
            }
        }
    }
}
