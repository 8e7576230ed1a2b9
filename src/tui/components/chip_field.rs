//! Chip field component - selected chips followed by the query input.

use ratatui::{
    Frame,
    layout::{Position, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::{App, ClickRegion};
use crate::chip::ChipView;
use crate::events::Action;
use crate::tui::theme::*;

use unicode_width::UnicodeWidthStr;

use super::{tail, truncate};

const MAX_LABEL_WIDTH: usize = 24;
const CHIP_GAP: u16 = 1;
const MIN_INPUT_WIDTH: u16 = 20;

/// Where one chip lands inside the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ChipPlacement {
    row: u16,
    col: u16,
    width: u16,
}

impl ChipPlacement {
    /// Column of the `×` remove control.
    fn remove_col(&self) -> u16 {
        self.col + self.width.saturating_sub(2)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct ChipLayout {
    chips: Vec<ChipPlacement>,
    input_row: u16,
    input_col: u16,
}

impl ChipLayout {
    fn rows(&self) -> u16 {
        self.input_row + 1
    }
}

fn chip_text(label: &str, max_label_width: usize) -> String {
    format!(" {} × ", truncate(label, max_label_width))
}

/// Chip texts for `labels`, with labels shortened so each chip fits in `width`.
fn chip_texts<'a>(labels: impl IntoIterator<Item = &'a str>, width: u16) -> Vec<String> {
    // Padding, the `×` and its trailing space take four columns
    let max_label = MAX_LABEL_WIDTH.min((width as usize).saturating_sub(4));
    labels
        .into_iter()
        .map(|label| chip_text(label, max_label))
        .collect()
}

fn selected_labels(view: &ChipView) -> impl Iterator<Item = &str> {
    view.selected.iter().map(|c| c.label.as_str())
}

/// Screen column of the text cursor after the visible part of the query.
fn cursor_col(layout: &ChipLayout, visible_query: &str) -> u16 {
    layout.input_col + visible_query.width() as u16
}

/// Flow chips left to right, wrapping when a chip does not fit, and put the
/// input after the last chip if there is room for it.
fn layout_chips(texts: &[String], width: u16) -> ChipLayout {
    let width = width.max(1);
    let mut chips = Vec::with_capacity(texts.len());
    let (mut row, mut col) = (0u16, 0u16);

    for text in texts {
        let chip_width = (text.width() as u16).min(width);
        if col > 0 && col + chip_width > width {
            row += 1;
            col = 0;
        }
        chips.push(ChipPlacement {
            row,
            col,
            width: chip_width,
        });
        col += chip_width + CHIP_GAP;
    }

    if col > 0 && col + MIN_INPUT_WIDTH.min(width) > width {
        row += 1;
        col = 0;
    }

    ChipLayout {
        chips,
        input_row: row,
        input_col: col,
    }
}

/// Height the field needs at this width, including its bottom border.
pub fn field_height(view: &ChipView, width: u16) -> u16 {
    layout_chips(&chip_texts(selected_labels(view), width), width).rows() + 1
}

/// Render selected chips and the query input.
pub fn render_chip_field(frame: &mut Frame, area: Rect, app: &mut App, view: &ChipView) {
    let texts = chip_texts(selected_labels(view), area.width);
    let layout = layout_chips(&texts, area.width);

    // Clicking anywhere in the field focuses the input
    app.interactions.register_click(
        "chip_field",
        ClickRegion::new(area.x, area.y, area.width, area.height),
        Action::FocusInput,
    );

    let mut lines: Vec<Line> = (0..layout.rows()).map(|_| Line::raw("")).collect();
    let last = view.selected.len().saturating_sub(1);

    for (i, (text, placement)) in texts.iter().zip(&layout.chips).enumerate() {
        let armed = view.chip_highlighted && i == last;
        let style = if armed {
            Style::new().fg(Color::Black).bg(CHIP_ARMED_BG).bold()
        } else {
            Style::new().fg(TEXT_WHITE).bg(CHIP_BG)
        };

        let line = &mut lines[placement.row as usize];
        if placement.col > 0 {
            line.spans.push(Span::raw(" ".repeat(CHIP_GAP as usize)));
        }
        line.spans.push(Span::styled(text.clone(), style));

        app.interactions.register_click(
            "chip_remove",
            ClickRegion::new(area.x + placement.remove_col(), area.y + placement.row, 1, 1),
            Action::RemoveChip(i),
        );
    }

    // Input: placeholder only while nothing is selected
    let input_width = area.width.saturating_sub(layout.input_col + 1) as usize;
    let visible_query = tail(&view.query, input_width);
    let input_line = &mut lines[layout.input_row as usize];
    if layout.input_col > 0 {
        input_line.spans.push(Span::raw(" ".repeat(CHIP_GAP as usize)));
    }
    if view.query.is_empty() && view.selected.is_empty() {
        input_line.spans.push(Span::styled(
            app.placeholder.clone(),
            Style::new().fg(TEXT_DIM).italic(),
        ));
    } else {
        input_line
            .spans
            .push(Span::styled(visible_query.to_string(), Style::new().fg(TEXT_WHITE)));
    }

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::new().fg(ACCENT_BLUE));
    frame.render_widget(Paragraph::new(lines).block(block), area);

    frame.set_cursor_position(Position::new(
        area.x + cursor_col(&layout, visible_query),
        area.y + layout.input_row,
    ));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(labels: &[&str]) -> Vec<String> {
        chip_texts(labels.iter().copied(), 60)
    }

    #[test]
    fn test_chip_text_shape() {
        assert_eq!(chip_text("Bob", MAX_LABEL_WIDTH), " Bob × ");
        assert_eq!(chip_text("Bob", MAX_LABEL_WIDTH).width(), 7);
    }

    #[test]
    fn test_no_chips_input_at_origin() {
        let layout = layout_chips(&[], 40);
        assert!(layout.chips.is_empty());
        assert_eq!((layout.input_row, layout.input_col), (0, 0));
        assert_eq!(layout.rows(), 1);
    }

    #[test]
    fn test_chips_flow_on_one_row() {
        let layout = layout_chips(&texts(&["Alice", "Bob"]), 60);
        assert_eq!(layout.chips[0], ChipPlacement { row: 0, col: 0, width: 9 });
        assert_eq!(layout.chips[1], ChipPlacement { row: 0, col: 10, width: 7 });
        assert_eq!((layout.input_row, layout.input_col), (0, 18));
    }

    #[test]
    fn test_chips_wrap() {
        let layout = layout_chips(&texts(&["Alice", "Bob", "Carol"]), 20);
        assert_eq!(layout.chips[0].row, 0);
        assert_eq!(layout.chips[1].row, 0);
        assert_eq!(layout.chips[2], ChipPlacement { row: 1, col: 0, width: 9 });
        // Input needs 20 columns, so it moves below the chips
        assert_eq!((layout.input_row, layout.input_col), (2, 0));
        assert_eq!(layout.rows(), 3);
    }

    #[test]
    fn test_remove_control_column() {
        let layout = layout_chips(&texts(&["Alice", "Bob"]), 60);
        // " Bob × " starts at 10; the × is the sixth character
        assert_eq!(layout.chips[1].remove_col(), 15);
        assert_eq!(chip_text("Bob", MAX_LABEL_WIDTH).chars().nth(5), Some('×'));
    }

    #[test]
    fn test_long_label_truncated() {
        let text = chip_text("Maximilian Alexander von Hohenberg", MAX_LABEL_WIDTH);
        assert_eq!(text.width(), MAX_LABEL_WIDTH + 4);
        assert!(text.contains('…'));
    }

    #[test]
    fn test_narrow_field_keeps_remove_control_visible() {
        let width = 12;
        let texts = chip_texts(["Alexandria"], width);
        assert_eq!(texts[0], " Alexand… × ");

        let layout = layout_chips(&texts, width);
        let chip = layout.chips[0];
        assert_eq!(chip.width, 12);
        assert!(chip.remove_col() < width);
        assert_eq!(texts[0].chars().nth(chip.remove_col() as usize), Some('×'));
    }

    #[test]
    fn test_wide_label_remove_column() {
        let texts = chip_texts(["山田"], 60);
        let layout = layout_chips(&texts, 60);
        // " 山田 × ": the two ideographs span columns 1-4
        assert_eq!(layout.chips[0].width, 8);
        assert_eq!(layout.chips[0].remove_col(), 6);
    }

    #[test]
    fn test_cursor_follows_display_width() {
        let layout = layout_chips(&[], 40);
        assert_eq!(cursor_col(&layout, "abc"), 3);
        assert_eq!(cursor_col(&layout, "山田"), 4);
    }
}
