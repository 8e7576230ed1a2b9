//! Dropdown component - filtered candidates under the input.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use unicode_width::UnicodeWidthStr;

use crate::app::{App, ClickRegion};
use crate::chip::ChipView;
use crate::events::Action;
use crate::tui::interaction::InteractiveRegion;
use crate::tui::theme::*;

use super::truncate;

pub const DROPDOWN_WIDTH: u16 = 40;

/// Dropdown regions sit above the chip field's focus region.
const DROPDOWN_PRIORITY: i32 = 10;

/// Render the dropdown; `area` already has the final size including borders.
pub fn render_dropdown(frame: &mut Frame, area: Rect, app: &mut App, view: &ChipView) {
    let visible_rows = area.height.saturating_sub(2) as usize;
    let inner_width = area.width.saturating_sub(2) as usize;

    frame.render_widget(Clear, area);

    app.interactions.register(
        InteractiveRegion::scrollable(
            "dropdown",
            ClickRegion::new(area.x, area.y, area.width, area.height),
            Action::HighlightUp,
            Action::HighlightDown,
        )
        .with_priority(DROPDOWN_PRIORITY),
    );

    let mut lines: Vec<Line> = vec![];
    let range = app.viewport.visible_range(view.filtered.len(), visible_rows);

    for (row, index) in range.enumerate() {
        let item = &view.filtered[index];
        let is_highlighted = view.highlighted == Some(index);
        let cursor = if is_highlighted { "> " } else { "  " };

        let label_max = inner_width.saturating_sub(2);
        let label = truncate(&item.label, label_max);
        let value_room = label_max.saturating_sub(label.width() + 1);

        let row_style = if is_highlighted {
            Style::new().fg(TEXT_WHITE).bg(ROW_HIGHLIGHT_BG).bold()
        } else {
            Style::new().fg(TEXT_WHITE)
        };

        let mut spans = vec![
            Span::styled(
                cursor,
                if is_highlighted {
                    Style::new().fg(ACCENT_MINT).bg(ROW_HIGHLIGHT_BG)
                } else {
                    Style::new().fg(TEXT_DIM)
                },
            ),
            Span::styled(label, row_style),
        ];
        if value_room > 3 && item.value != item.label {
            spans.push(Span::styled(
                format!(" {}", truncate(&item.value, value_room)),
                Style::new().fg(TEXT_DIM),
            ));
        }
        lines.push(Line::from(spans));

        let row_bounds = ClickRegion::new(
            area.x + 1,
            area.y + 1 + row as u16,
            area.width.saturating_sub(2),
            1,
        );
        app.interactions.register(
            InteractiveRegion::clickable(
                "dropdown_row",
                row_bounds,
                Action::SelectRow(index),
            )
            .with_priority(DROPDOWN_PRIORITY),
        );
    }

    let title = if view.filtered.len() > visible_rows {
        let position = view.highlighted.map(|i| i + 1).unwrap_or(0);
        format!(" {}/{} ", position, view.filtered.len())
    } else {
        String::new()
    };

    let block = Block::default()
        .title(title)
        .title_style(Style::new().fg(TEXT_DIM))
        .borders(Borders::ALL)
        .border_style(Style::new().fg(ACCENT_BLUE))
        .style(Style::new().bg(Color::Black));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
