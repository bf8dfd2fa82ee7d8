//! Two-column grid geometry and per-card view models.

use ratatui::layout::Rect;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::domain::entities::Product;

/// Cards per grid row.
pub const COLUMNS: usize = 2;
/// Rows occupied by one card, borders included.
pub const CARD_HEIGHT: u16 = 6;
/// Maximum number of title lines on a card.
pub const TITLE_MAX_LINES: usize = 2;

const ELLIPSIS: char = '…';

/// Text shown on a single card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    /// Render key, the product id as text.
    pub key: String,
    pub category_label: String,
    pub title_lines: Vec<String>,
    pub price_text: String,
    pub rating_text: String,
}

impl CardView {
    /// Projects a product onto a card `card_width` columns wide.
    #[must_use]
    pub fn from_product(product: &Product, currency: &str, card_width: u16) -> Self {
        let inner_width = usize::from(card_width.saturating_sub(2));

        Self {
            key: product.key(),
            category_label: product.category_label(),
            title_lines: wrap_lines(product.display_title(), inner_width, TITLE_MAX_LINES),
            price_text: product.price_text(currency),
            rating_text: product.rating_text(),
        }
    }
}

/// Card geometry for a given viewport width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    card_width: u16,
}

impl GridLayout {
    /// Card width is half the viewport minus `spacing`.
    #[must_use]
    pub const fn new(viewport_width: u16, spacing: u16) -> Self {
        Self {
            card_width: (viewport_width / 2).saturating_sub(spacing),
        }
    }

    #[must_use]
    pub const fn card_width(self) -> u16 {
        self.card_width
    }

    /// Number of rows needed for `len` cards.
    #[must_use]
    pub const fn row_count(len: usize) -> usize {
        len.div_ceil(COLUMNS)
    }

    /// Rows that fit in a viewport of the given height, never less than one.
    #[must_use]
    pub const fn visible_rows(viewport_height: u16) -> usize {
        let rows = (viewport_height / CARD_HEIGHT) as usize;
        if rows == 0 { 1 } else { rows }
    }

    /// Projects products into rows of card views, preserving order.
    #[must_use]
    pub fn project(self, products: &[Product], currency: &str) -> Vec<Vec<CardView>> {
        products
            .chunks(COLUMNS)
            .map(|row| {
                row.iter()
                    .map(|product| CardView::from_product(product, currency, self.card_width))
                    .collect()
            })
            .collect()
    }

    /// Area of the card in `column` of the `row`-th visible row.
    ///
    /// The first column is flush left, the second flush right.
    #[must_use]
    pub fn card_area(self, area: Rect, row: usize, column: usize) -> Option<Rect> {
        let y_offset = u16::try_from(row).ok()?.checked_mul(CARD_HEIGHT)?;
        if y_offset >= area.height {
            return None;
        }

        let width = self.card_width.min(area.width);
        let x = if column == 0 {
            area.x
        } else {
            area.right().saturating_sub(width)
        };

        Some(Rect::new(
            x,
            area.y + y_offset,
            width,
            CARD_HEIGHT.min(area.height - y_offset),
        ))
    }
}

/// Word-wraps `text` into at most `max_lines` lines of `width` columns.
///
/// Overflowing text is cut and the last kept line ends with an ellipsis.
#[must_use]
pub fn wrap_lines(text: &str, width: usize, max_lines: usize) -> Vec<String> {
    if width == 0 || max_lines == 0 {
        return Vec::new();
    }

    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for word in text.split_whitespace() {
        let word_width = word.width();
        let separator = usize::from(!current.is_empty());

        if current_width + separator + word_width <= width {
            if separator == 1 {
                current.push(' ');
            }
            current.push_str(word);
            current_width += separator + word_width;
            continue;
        }

        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
            current_width = 0;
        }

        for ch in word.chars() {
            let ch_width = ch.width().unwrap_or(0);
            if current_width + ch_width > width && !current.is_empty() {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
            }
            current.push(ch);
            current_width += ch_width;
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    if lines.len() > max_lines {
        lines.truncate(max_lines);
        if let Some(last) = lines.last_mut() {
            *last = with_ellipsis(last, width);
        }
    }

    lines
}

fn with_ellipsis(line: &str, width: usize) -> String {
    let budget = width.saturating_sub(1);
    let mut out = String::new();
    let mut used = 0;

    for ch in line.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if used + ch_width > budget {
            break;
        }
        out.push(ch);
        used += ch_width;
    }

    let mut out = out.trim_end().to_string();
    out.push(ELLIPSIS);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn catalog(len: u64) -> Vec<Product> {
        (1..=len)
            .map(|id| Product::new(id, format!("item {id}"), 1.0, "misc"))
            .collect()
    }

    #[test_case(100, 1, 49 ; "even_width")]
    #[test_case(101, 1, 49 ; "odd_width")]
    #[test_case(80, 0, 40 ; "no_spacing")]
    #[test_case(2, 4, 0 ; "saturates")]
    fn test_card_width(viewport: u16, spacing: u16, expected: u16) {
        assert_eq!(GridLayout::new(viewport, spacing).card_width(), expected);
    }

    #[test_case(0, 0 ; "empty")]
    #[test_case(1, 1 ; "single")]
    #[test_case(2, 1 ; "full_row")]
    #[test_case(5, 3 ; "odd")]
    fn test_row_count(len: usize, expected: usize) {
        assert_eq!(GridLayout::row_count(len), expected);
    }

    #[test]
    fn test_project_preserves_count_and_order() {
        let products = catalog(5);
        let rows = GridLayout::new(80, 1).project(&products, "$");

        assert_eq!(rows.len(), 3);
        let keys: Vec<&str> = rows.iter().flatten().map(|c| c.key.as_str()).collect();
        assert_eq!(keys, ["1", "2", "3", "4", "5"]);
        assert_eq!(rows[2].len(), 1);
    }

    #[test]
    fn test_project_empty_catalog() {
        let rows = GridLayout::new(80, 1).project(&[], "$");
        assert!(rows.is_empty());
    }

    #[test]
    fn test_card_view_fields() {
        let product = Product::new(9, "Monitor", 19.5, "electronics")
            .with_rating(crate::domain::entities::Rating::new(4.8, 10));

        let card = CardView::from_product(&product, "$", 30);

        assert_eq!(card.key, "9");
        assert_eq!(card.category_label, "ELECTRONICS");
        assert_eq!(card.title_lines, ["Monitor"]);
        assert_eq!(card.price_text, "$19.50");
        assert_eq!(card.rating_text, "⭐ 4.8");
    }

    #[test]
    fn test_wrap_short_title() {
        assert_eq!(wrap_lines("Lamp", 10, 2), ["Lamp"]);
    }

    #[test]
    fn test_wrap_two_lines_without_ellipsis() {
        assert_eq!(
            wrap_lines("Solid Gold Petite Micropave", 16, 2),
            ["Solid Gold", "Petite Micropave"]
        );
    }

    #[test]
    fn test_wrap_truncates_with_ellipsis() {
        let lines = wrap_lines("Fjallraven - Foldsack No. 1 Backpack, Fits 15 Laptops", 12, 2);

        assert_eq!(lines, ["Fjallraven -", "Foldsack No…"]);
        assert!(lines.iter().all(|l| l.width() <= 12));
    }

    #[test]
    fn test_wrap_breaks_long_word() {
        assert_eq!(wrap_lines("abcdefghij", 4, 3), ["abcd", "efgh", "ij"]);
    }

    #[test]
    fn test_wrap_zero_width() {
        assert!(wrap_lines("anything", 0, 2).is_empty());
    }

    #[test]
    fn test_card_area_columns() {
        let layout = GridLayout::new(40, 1);
        let area = Rect::new(0, 2, 40, 20);

        assert_eq!(layout.card_area(area, 0, 0), Some(Rect::new(0, 2, 19, 6)));
        assert_eq!(layout.card_area(area, 1, 1), Some(Rect::new(21, 8, 19, 6)));
        assert_eq!(layout.card_area(area, 4, 0), None);
    }
}
